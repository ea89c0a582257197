//! Game-state engine for Bulls and Cows.
//!
//! [`GameState`] owns the hidden word and the attempt counter. Callers check a
//! guess with [`GameState::check_guess_validity`] and only submit guesses that
//! come back [`GuessStatus::Ok`] to [`GameState::submit_valid_guess`].

use crate::debug_log;
use crate::words::{HIDDEN_WORD, is_isogram, is_lowercase, max_tries_for_length};
use thiserror::Error;

/// Bulls and cows scored by a single guess.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BullCowCount {
    pub bulls: usize,
    pub cows: usize,
}

/// Verdict on a candidate guess. Checks run in declaration order after `Ok`,
/// and the first failing one is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessStatus {
    Ok,
    NotIsogram,
    NotLowercase,
    WrongLength,
}

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no attempt budget is defined for a {0} letter hidden word")]
    UnmappedLength(usize),
    #[error("hidden word '{0}' repeats a letter")]
    NotIsogram(String),
    #[error("hidden word '{0}' must be all lowercase letters")]
    NotLowercase(String),
}

#[derive(Debug, Clone)]
pub struct GameState {
    hidden_word: String,
    max_tries: u32,
    current_try: u32,
    won: bool,
}

impl GameState {
    /// Game over the built-in hidden word.
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_hidden_word(HIDDEN_WORD)
    }

    /// Game over `word`, rejected up front if it could never be played.
    pub fn with_hidden_word(word: &str) -> Result<Self, ConfigError> {
        if !is_lowercase(word) {
            return Err(ConfigError::NotLowercase(word.to_string()));
        }
        if !is_isogram(word) {
            return Err(ConfigError::NotIsogram(word.to_string()));
        }
        let length = word.chars().count();
        let max_tries = max_tries_for_length(length).ok_or(ConfigError::UnmappedLength(length))?;

        let mut game = Self {
            hidden_word: word.to_string(),
            max_tries,
            current_try: 1,
            won: false,
        };
        game.reset();
        Ok(game)
    }

    /// Starts a new round with the same hidden word.
    pub fn reset(&mut self) {
        self.current_try = 1;
        self.won = false;
        debug_log!(
            "reset: {} letter word, {} tries",
            self.hidden_word_length(),
            self.max_tries
        );
    }

    #[must_use]
    pub fn max_tries(&self) -> u32 {
        self.max_tries
    }

    #[must_use]
    pub fn current_try(&self) -> u32 {
        self.current_try
    }

    #[must_use]
    pub fn hidden_word_length(&self) -> usize {
        self.hidden_word.chars().count()
    }

    #[must_use]
    pub fn is_game_won(&self) -> bool {
        self.won
    }

    /// Attempts left before the round is lost.
    #[must_use]
    pub fn tries_remaining(&self) -> u32 {
        (self.max_tries + 1).saturating_sub(self.current_try)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.won {
            GameStatus::Won
        } else if self.current_try > self.max_tries {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Classifies `guess` without touching the round.
    ///
    /// A repeated letter is reported before any casing problem, and both
    /// before a length mismatch, so "badgger" is `NotIsogram` even though it
    /// is also too long.
    #[must_use]
    pub fn check_guess_validity(&self, guess: &str) -> GuessStatus {
        let status = if !is_isogram(guess) {
            GuessStatus::NotIsogram
        } else if !is_lowercase(guess) {
            GuessStatus::NotLowercase
        } else if guess.chars().count() != self.hidden_word_length() {
            GuessStatus::WrongLength
        } else {
            GuessStatus::Ok
        };
        debug_log!("check_guess_validity({:?}) -> {:?}", guess, status);
        status
    }

    /// Scores a guess that has already passed [`Self::check_guess_validity`]
    /// and uses up one try.
    ///
    /// Each guess letter matches at most one position because the hidden word
    /// is an isogram, so a positional compare plus a membership test counts
    /// the same as comparing every pair of positions.
    pub fn submit_valid_guess(&mut self, guess: &str) -> BullCowCount {
        self.current_try += 1;

        let mut count = BullCowCount::default();
        for (hidden, guessed) in self.hidden_word.chars().zip(guess.chars()) {
            if hidden == guessed {
                count.bulls += 1;
            } else if self.hidden_word.contains(guessed) {
                count.cows += 1;
            }
        }

        self.won = count.bulls == self.hidden_word_length();
        debug_log!(
            "submit_valid_guess({:?}) -> {:?}, now on try {}",
            guess,
            count,
            self.current_try
        );
        count
    }
}
