use crate::debug_log;
use crate::engine::{BullCowCount, GuessStatus};
use crate::game_state::{GameInterface, RoundOutcome, RoundSummary, Turn, UserAction};
use clap::Parser;
use std::io::{self, BufRead, Write};

/// Bulls and Cows, a word guessing game
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Play in the full-screen terminal UI instead of line by line
    #[arg(long)]
    pub tui: bool,

    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

/// Message shown for a rejected guess; `None` for `Ok`.
#[must_use]
pub fn invalid_guess_message(status: GuessStatus, word_length: usize) -> Option<String> {
    match status {
        GuessStatus::Ok => None,
        GuessStatus::NotIsogram => {
            Some("Please enter a word without repeating letters.".to_string())
        }
        GuessStatus::NotLowercase => Some("Please enter all lowercase letters.".to_string()),
        GuessStatus::WrongLength => Some(format!("Please enter a {word_length} letter word.")),
    }
}

#[must_use]
pub fn score_message(count: BullCowCount) -> String {
    format!("Bulls = {}. Cows = {}", count.bulls, count.cows)
}

#[must_use]
pub fn summary_message(summary: &RoundSummary) -> &'static str {
    match summary.outcome {
        RoundOutcome::Won => "Congratulations, you won!",
        RoundOutcome::Lost | RoundOutcome::Aborted => "Better luck next time.",
    }
}

/// A replay answer is yes only if it starts with `y` or `Y`.
fn is_yes(response: &str) -> bool {
    matches!(response.trim_start().chars().next(), Some('y' | 'Y'))
}

/// Reads one line, `None` at end of input or on a read error.
fn read_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input.trim().to_string()),
        Err(e) => {
            debug_log!("read_line() - {}", e);
            None
        }
    }
}

const BANNER: &str = r#"
    _______________________________________
   |     `                 -`              |
   |     `.                .-              |
   |     :``                .:``           |
   |    -:`                   -:` `        |
   |   `o .                    `/- `.`     |
   |   -o .        `.---.....-/ohs: `+/.   |
   |   `y/`````-oyyooyysssyyhdhdds: .+y/`  |
   |  `+s+//+mmmhyyyyhdddhhhyo/-``:hhs:`   |
   |  `ooooyddddmhssdhyhhddNNho/++syddys/` |
   |  -sdmNNmhdhshhyyyyhyyhdmmmmmNmmmhs.   |
   |     ``./dmdhddmmdddmmhhdNNNmdhhs:`    |
   |         ymhsshddhdmdhhdmMmmmhy+:`     |
   |         odyssymdyhhdhhhdNmdmdy+:      |
   |         -dysydmhssyyssydmddddy+.      |
   |        `ohssddhhyyhyyhdmmmhhho-       |
   |        hyso+oooyyhhdmNNmmddhy-        |
   |        smhysmo+sdhmNNNNNNNNh+`        |
   |          :yyyhy+:.  -ymNmdmds:`       |
   |                       `:+yy/`         |
   |_______________________________________|"#;

/// Welcome text with the bull banner and the round's word length.
#[must_use]
pub fn intro_text(word_length: usize, max_tries: u32) -> String {
    format!(
        "\nWelcome to Bulls and Cows, a fun word game.\n{BANNER}\n\n\
         Can you guess the {word_length} letter isogram I'm thinking of?\n\
         You have {max_tries} tries.\n"
    )
}

pub fn display_intro(word_length: usize, max_tries: u32) {
    println!("{}", intro_text(word_length, max_tries));
}

pub fn read_guess<R: BufRead>(reader: &mut R, turn: Turn) -> UserAction {
    print!("Try {} of {}. Enter your guess: ", turn.current_try, turn.max_tries);
    let _ = io::stdout().flush();

    match read_line(reader) {
        Some(guess) => UserAction::Guess(guess),
        None => UserAction::Exit,
    }
}

pub fn ask_play_again<R: BufRead>(reader: &mut R) -> bool {
    print!("Do you want to play again with the same hidden word (y/n)? ");
    let _ = io::stdout().flush();
    read_line(reader).is_some_and(|response| is_yes(&response))
}

/// CLI implementation of the GameInterface trait
/// This struct wraps a BufRead reader and implements the game interface for CLI interaction
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_intro(&mut self, word_length: usize, max_tries: u32) {
        display_intro(word_length, max_tries);
    }

    fn read_guess(&mut self, turn: Turn) -> UserAction {
        read_guess(&mut self.reader, turn)
    }

    fn display_invalid_guess(&mut self, status: GuessStatus, word_length: usize) {
        if let Some(message) = invalid_guess_message(status, word_length) {
            println!("{message}\n");
        }
    }

    fn display_score(&mut self, _guess: &str, count: BullCowCount) {
        println!("{}\n", score_message(count));
    }

    fn display_summary(&mut self, summary: &RoundSummary) {
        println!("{}", summary_message(summary));
    }

    fn ask_play_again(&mut self) -> bool {
        ask_play_again(&mut self.reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn turn() -> Turn {
        Turn {
            current_try: 1,
            max_tries: 7,
            word_length: 6,
        }
    }

    #[test]
    fn test_parse_cli_no_args() {
        let cli = Cli::parse_from(["bulls-cows"]);
        assert!(!cli.tui);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_cli_flags() {
        let cli = Cli::parse_from(["bulls-cows", "--tui", "-vv"]);
        assert!(cli.tui);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_cli_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["bulls-cows", "--word", "cat"]).is_err());
    }

    #[test]
    fn test_invalid_guess_messages() {
        assert_eq!(invalid_guess_message(GuessStatus::Ok, 6), None);
        assert_eq!(
            invalid_guess_message(GuessStatus::NotIsogram, 6).as_deref(),
            Some("Please enter a word without repeating letters.")
        );
        assert_eq!(
            invalid_guess_message(GuessStatus::NotLowercase, 6).as_deref(),
            Some("Please enter all lowercase letters.")
        );
        assert_eq!(
            invalid_guess_message(GuessStatus::WrongLength, 6).as_deref(),
            Some("Please enter a 6 letter word.")
        );
    }

    #[test]
    fn test_intro_text() {
        let intro = intro_text(6, 7);
        assert!(intro.starts_with("\nWelcome to Bulls and Cows, a fun word game.\n"));
        assert!(intro.contains("`ooooyddddmhssdhyhhddNNho/++syddys/`"));
        assert!(intro.contains("|_______________________________________|"));
        assert!(intro.contains("Can you guess the 6 letter isogram I'm thinking of?"));
        assert!(intro.contains("You have 7 tries."));
    }

    #[test]
    fn test_score_message() {
        assert_eq!(
            score_message(BullCowCount { bulls: 2, cows: 3 }),
            "Bulls = 2. Cows = 3"
        );
    }

    #[test]
    fn test_summary_message() {
        let won = RoundSummary {
            outcome: RoundOutcome::Won,
            guesses_used: 3,
            max_tries: 7,
        };
        let lost = RoundSummary {
            outcome: RoundOutcome::Lost,
            ..won
        };
        assert_eq!(summary_message(&won), "Congratulations, you won!");
        assert_eq!(summary_message(&lost), "Better luck next time.");
    }

    #[test]
    fn test_read_guess_trims_input() {
        let mut reader = Cursor::new("  badger  \n");
        assert_eq!(
            read_guess(&mut reader, turn()),
            UserAction::Guess("badger".to_string())
        );
    }

    #[test]
    fn test_read_guess_keeps_case() {
        let mut reader = Cursor::new("BADGER\n");
        assert_eq!(
            read_guess(&mut reader, turn()),
            UserAction::Guess("BADGER".to_string())
        );
    }

    #[test]
    fn test_read_guess_empty_line_is_a_guess() {
        let mut reader = Cursor::new("\n");
        assert_eq!(read_guess(&mut reader, turn()), UserAction::Guess(String::new()));
    }

    #[test]
    fn test_read_guess_end_of_input_exits() {
        let mut reader = Cursor::new("");
        assert_eq!(read_guess(&mut reader, turn()), UserAction::Exit);
    }

    #[test]
    fn test_ask_play_again() {
        assert!(ask_play_again(&mut Cursor::new("y\n")));
        assert!(ask_play_again(&mut Cursor::new("Yes please\n")));
        assert!(!ask_play_again(&mut Cursor::new("n\n")));
        assert!(!ask_play_again(&mut Cursor::new("sure\n")));
        assert!(!ask_play_again(&mut Cursor::new("\n")));
        assert!(!ask_play_again(&mut Cursor::new("")));
    }
}
