use crate::engine::{BullCowCount, GameState, GameStatus, GuessStatus};
use crate::info_log;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Guess(String),
    Exit,
}

/// Snapshot handed to an interface when it asks for a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub current_try: u32,
    pub max_tries: u32,
    pub word_length: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Won,
    Lost,
    /// The player quit or input ran out mid-round.
    Aborted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub outcome: RoundOutcome,
    /// Guesses scored this round.
    pub guesses_used: u32,
    pub max_tries: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameSummary {
    pub rounds_played: u32,
    pub rounds_won: u32,
}

/// Trait defining the interface between the round driver and a UI.
/// Implemented by the line-based console and the terminal UI.
pub trait GameInterface {
    fn display_intro(&mut self, word_length: usize, max_tries: u32);
    fn read_guess(&mut self, turn: Turn) -> UserAction;
    fn display_invalid_guess(&mut self, status: GuessStatus, word_length: usize);
    fn display_score(&mut self, guess: &str, count: BullCowCount);
    fn display_summary(&mut self, summary: &RoundSummary);
    fn ask_play_again(&mut self) -> bool;
}

/// Plays rounds against `game` until the player declines a replay or quits.
pub fn game_loop<I: GameInterface + ?Sized>(
    game: &mut GameState,
    interface: &mut I,
) -> GameSummary {
    let mut summary = GameSummary::default();

    loop {
        interface.display_intro(game.hidden_word_length(), game.max_tries());
        let outcome = play_round(game, interface);
        if outcome == RoundOutcome::Aborted {
            info_log!("game_loop() - round aborted, stopping");
            break;
        }

        summary.rounds_played += 1;
        if outcome == RoundOutcome::Won {
            summary.rounds_won += 1;
        }

        if !interface.ask_play_again() {
            break;
        }
    }

    info_log!(
        "game_loop() - finished: {} played, {} won",
        summary.rounds_played,
        summary.rounds_won
    );
    summary
}

/// Resets `game` and plays one round to completion.
pub fn play_round<I: GameInterface + ?Sized>(
    game: &mut GameState,
    interface: &mut I,
) -> RoundOutcome {
    game.reset();

    while game.status() == GameStatus::InProgress {
        let Some(guess) = read_valid_guess(game, interface) else {
            return RoundOutcome::Aborted;
        };
        let count = game.submit_valid_guess(&guess);
        interface.display_score(&guess, count);
    }

    let outcome = match game.status() {
        GameStatus::Won => RoundOutcome::Won,
        GameStatus::Lost | GameStatus::InProgress => RoundOutcome::Lost,
    };
    interface.display_summary(&RoundSummary {
        outcome,
        guesses_used: game.current_try() - 1,
        max_tries: game.max_tries(),
    });
    outcome
}

/// Keeps asking until the engine accepts a guess. `None` means the player quit.
fn read_valid_guess<I: GameInterface + ?Sized>(
    game: &GameState,
    interface: &mut I,
) -> Option<String> {
    loop {
        let turn = Turn {
            current_try: game.current_try(),
            max_tries: game.max_tries(),
            word_length: game.hidden_word_length(),
        };

        let guess = match interface.read_guess(turn) {
            UserAction::Guess(guess) => guess,
            UserAction::Exit => return None,
        };

        match game.check_guess_validity(&guess) {
            GuessStatus::Ok => return Some(guess),
            status => interface.display_invalid_guess(status, game.hidden_word_length()),
        }
    }
}
