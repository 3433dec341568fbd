//! Console session tests with in-memory input and output.

use indigo::{Participant, Session, SessionOutcome};

fn run(input: &str, seed: u64) -> (SessionOutcome, String) {
    let mut session = Session::new(input.as_bytes(), Vec::new(), Some(seed));
    let outcome = session.run().expect("session runs");
    let output = String::from_utf8(session.into_output()).expect("utf-8 output");
    (outcome, output)
}

/// Answers every card prompt with "1".
fn always_first_card(lead: &str) -> String {
    let mut input = format!("{lead}\n");
    for _ in 0..24 {
        input.push_str("1\n");
    }
    input
}

#[test]
fn test_full_game_transcript() {
    let (outcome, output) = run(&always_first_card("yes"), 42);

    let SessionOutcome::Finished(report) = outcome else {
        panic!("game should finish");
    };

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Indigo Card Game");
    assert_eq!(lines[1], "Play first?");
    assert!(lines[2].starts_with("Initial cards on the table: "));
    assert_eq!(lines[2].split(' ').count(), 5 + 4);
    assert_eq!(*lines.last().unwrap(), "Game Over");

    let human = Participant::Human;
    let computer = Participant::Computer;
    let score_line = format!(
        "Score: Player {} - Computer {}",
        report.score.points[human], report.score.points[computer]
    );
    let cards_line = format!(
        "Cards: Player {} - Computer {}",
        report.score.cards[human], report.score.cards[computer]
    );
    assert_eq!(lines[lines.len() - 3], score_line);
    assert_eq!(lines[lines.len() - 2], cards_line);

    assert_eq!(output.matches("Choose a card to play").count(), 24);
    assert_eq!(output.matches("Computer plays ").count(), 24);
}

#[test]
fn test_capture_announcements_match_history() {
    let (outcome, output) = run(&always_first_card("no"), 7);

    let SessionOutcome::Finished(report) = outcome else {
        panic!("game should finish");
    };

    for p in Participant::ALL {
        let captures = report
            .history
            .iter()
            .filter(|r| r.participant == p && r.is_capture())
            .count();
        assert_eq!(output.matches(&format!("{p} wins cards")).count(), captures, "{p}");
    }
}

#[test]
fn test_invalid_card_choice_reprompts() {
    let mut input = String::from("yes\n0\n7\nabc\n");
    input.push_str(&"1\n".repeat(24));

    let (outcome, output) = run(&input, 42);

    assert!(matches!(outcome, SessionOutcome::Finished(_)));
    assert_eq!(output.matches("Choose a card to play").count(), 24 + 3);
}

#[test]
fn test_exit_mid_game_skips_scoring() {
    let (outcome, output) = run("yes\n1\n1\nexit\n", 42);

    assert_eq!(outcome, SessionOutcome::Abandoned);
    assert_eq!(output.matches("Choose a card to play").count(), 3);
    assert!(output.ends_with("Choose a card to play (1-4):\nGame Over\n"));
}

#[test]
fn test_same_seed_same_transcript() {
    let input = always_first_card("yes");
    let (_, first) = run(&input, 99);
    let (_, second) = run(&input, 99);
    assert_eq!(first, second);
}
