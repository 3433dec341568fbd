//! Line-based prompting with validated replies.
//!
//! Every prompt accepts `exit`. Anything the parser rejects re-asks the same
//! question; end of input is treated as `exit`.

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::core::Participant;

/// A validated reply to a prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reply<T> {
    Answer(T),
    Exit,
}

/// Parse the reply to "Play first?": `yes` means the human leads.
#[must_use]
pub fn parse_play_first(input: &str) -> Option<Reply<Participant>> {
    match input {
        "yes" => Some(Reply::Answer(Participant::Human)),
        "no" => Some(Reply::Answer(Participant::Computer)),
        "exit" => Some(Reply::Exit),
        _ => None,
    }
}

/// Parse a 1-based card choice for a hand of `hand_size` cards.
#[must_use]
pub fn parse_card_index(input: &str, hand_size: usize) -> Option<Reply<usize>> {
    if input == "exit" {
        return Some(Reply::Exit);
    }
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    input
        .parse::<usize>()
        .ok()
        .filter(|i| (1..=hand_size).contains(i))
        .map(Reply::Answer)
}

/// Reads replies from `input`, writes prompts and messages to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line of output.
    pub fn say(&mut self, line: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Ask `prompt` until `parse` accepts the reply.
    pub fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Option<Reply<T>>,
    ) -> io::Result<Reply<T>> {
        let mut line = String::new();
        loop {
            writeln!(self.output, "{prompt}")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("input closed");
                return Ok(Reply::Exit);
            }

            let reply = line.trim();
            if let Some(parsed) = parse(reply) {
                return Ok(parsed);
            }
            debug!(reply, "rejected reply");
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_first() {
        assert_eq!(parse_play_first("yes"), Some(Reply::Answer(Participant::Human)));
        assert_eq!(parse_play_first("no"), Some(Reply::Answer(Participant::Computer)));
        assert_eq!(parse_play_first("exit"), Some(Reply::Exit));
        assert_eq!(parse_play_first("YES"), None);
        assert_eq!(parse_play_first("maybe"), None);
    }

    #[test]
    fn test_parse_card_index() {
        assert_eq!(parse_card_index("1", 6), Some(Reply::Answer(1)));
        assert_eq!(parse_card_index("6", 6), Some(Reply::Answer(6)));
        assert_eq!(parse_card_index("exit", 6), Some(Reply::Exit));
        assert_eq!(parse_card_index("0", 6), None);
        assert_eq!(parse_card_index("7", 6), None);
        assert_eq!(parse_card_index("+1", 6), None);
        assert_eq!(parse_card_index("-1", 6), None);
        assert_eq!(parse_card_index("", 6), None);
        assert_eq!(parse_card_index("two", 6), None);
    }

    #[test]
    fn test_ask_reprompts_until_valid() {
        let input = b"what\nperhaps\nno\n";
        let mut prompter = Prompter::new(&input[..], Vec::new());

        let reply = prompter.ask("Play first?", parse_play_first).unwrap();
        assert_eq!(reply, Reply::Answer(Participant::Computer));

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(output, "Play first?\nPlay first?\nPlay first?\n");
    }

    #[test]
    fn test_ask_treats_end_of_input_as_exit() {
        let mut prompter = Prompter::new(&b"9\n"[..], Vec::new());

        let reply = prompter.ask("Choose a card to play (1-3):", |s| parse_card_index(s, 3)).unwrap();
        assert_eq!(reply, Reply::Exit);
    }

    #[test]
    fn test_ask_trims_whitespace() {
        let mut prompter = Prompter::new(&b"  2 \r\n"[..], Vec::new());

        let reply = prompter.ask("Choose a card to play (1-3):", |s| parse_card_index(s, 3)).unwrap();
        assert_eq!(reply, Reply::Answer(2));
    }
}
