// Library interface for bulls-cows
// This allows integration tests to access internal modules

pub mod cli;
pub mod engine;
pub mod game_state;
pub mod logging;
pub mod tui;
pub mod words;

// Re-export commonly used items for easier testing
pub use engine::{BullCowCount, ConfigError, GameState, GameStatus, GuessStatus};
pub use game_state::{
    GameInterface, GameSummary, RoundOutcome, RoundSummary, Turn, UserAction, game_loop,
    play_round,
};
