//! Text rendering of piles and scores.

use crate::cards::Card;
use crate::core::Participant;
use crate::rules::Score;

/// Cards separated by single spaces: `A♦ 10♠ Q♣`.
#[must_use]
pub fn cards_line(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn table_summary(table: &[Card]) -> String {
    match table.last() {
        Some(top) => format!("{} cards on the table, and the top card is {top}", table.len()),
        None => "No cards on the table".to_string(),
    }
}

/// The human's hand with 1-based positions: `Cards in hand: 1)A♦ 2)10♠`.
#[must_use]
pub fn hand_listing(hand: &[Card]) -> String {
    let listed = hand
        .iter()
        .enumerate()
        .map(|(i, card)| format!("{}){card}", i + 1))
        .collect::<Vec<_>>()
        .join(" ");
    format!("Cards in hand: {listed}")
}

#[must_use]
pub fn card_prompt(hand_size: usize) -> String {
    format!("Choose a card to play (1-{hand_size}):")
}

#[must_use]
pub fn score_lines(score: &Score) -> String {
    let human = Participant::Human;
    let computer = Participant::Computer;
    format!(
        "Score: {human} {} - {computer} {}\nCards: {human} {} - {computer} {}",
        score.points[human], score.points[computer], score.cards[human], score.cards[computer],
    )
}
