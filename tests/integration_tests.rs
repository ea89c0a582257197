// Integration tests for the bulls-cows application
// These tests drive full games through the console interface

use bulls_cows::cli::CliInterface;
use bulls_cows::*;
use std::io::Cursor;

fn play(input: &str) -> (GameSummary, GameState) {
    let mut game = GameState::new().unwrap();
    let mut interface = CliInterface::new(Cursor::new(input.to_string()));
    let summary = game_loop(&mut game, &mut interface);
    (summary, game)
}

#[test]
fn test_win_on_first_guess_then_quit() {
    let (summary, game) = play("badger\nn\n");
    assert_eq!(
        summary,
        GameSummary {
            rounds_played: 1,
            rounds_won: 1,
        }
    );
    assert!(game.is_game_won());
    assert_eq!(game.current_try(), 2);
}

#[test]
fn test_invalid_guesses_are_retried_without_using_tries() {
    // Repeated letter, uppercase, wrong length, then the answer
    let (summary, game) = play("badgger\nBADGER\ncat\nbadger\nn\n");
    assert_eq!(summary.rounds_won, 1);
    assert_eq!(game.current_try(), 2);
}

#[test]
fn test_lose_after_running_out_of_tries() {
    let input = "planet\n".repeat(7) + "n\n";
    let (summary, game) = play(&input);
    assert_eq!(
        summary,
        GameSummary {
            rounds_played: 1,
            rounds_won: 0,
        }
    );
    assert_eq!(game.status(), GameStatus::Lost);
}

#[test]
fn test_replay_uses_same_word() {
    let input = "regdab\nbadger\ny\nbadger\nn\n";
    let (summary, _) = play(input);
    assert_eq!(
        summary,
        GameSummary {
            rounds_played: 2,
            rounds_won: 2,
        }
    );
}

#[test]
fn test_replay_after_loss() {
    let input = "planet\n".repeat(7) + "Y\nbadger\nno\n";
    let (summary, _) = play(&input);
    assert_eq!(summary.rounds_played, 2);
    assert_eq!(summary.rounds_won, 1);
}

#[test]
fn test_end_of_input_mid_round_aborts() {
    let (summary, game) = play("planet\nbadges\n");
    assert_eq!(summary, GameSummary::default());
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.current_try(), 3);
}

#[test]
fn test_end_of_input_at_replay_prompt_stops() {
    let (summary, _) = play("badger\n");
    assert_eq!(summary.rounds_played, 1);
}

#[test]
fn test_badger_scenario() {
    let mut game = GameState::new().unwrap();
    assert_eq!(game.hidden_word_length(), 6);
    assert_eq!(game.max_tries(), 7);

    assert_eq!(game.check_guess_validity("BADGER"), GuessStatus::NotLowercase);
    assert_eq!(game.check_guess_validity("badgger"), GuessStatus::NotIsogram);
    assert_eq!(game.check_guess_validity("cat"), GuessStatus::WrongLength);

    assert_eq!(
        game.submit_valid_guess("regdab"),
        BullCowCount { bulls: 0, cows: 6 }
    );
    assert_eq!(
        game.submit_valid_guess("badges"),
        BullCowCount { bulls: 5, cows: 0 }
    );
    assert!(!game.is_game_won());
    assert_eq!(
        game.submit_valid_guess("badger"),
        BullCowCount { bulls: 6, cows: 0 }
    );
    assert!(game.is_game_won());
    assert_eq!(game.current_try(), 4);

    game.reset();
    assert_eq!(game.current_try(), 1);
    assert!(!game.is_game_won());
}

#[test]
fn test_configured_word_drives_play_round() {
    let mut game = GameState::with_hidden_word("lamp").unwrap();
    let mut interface = CliInterface::new(Cursor::new("palm\nlamp\n"));
    assert_eq!(play_round(&mut game, &mut interface), RoundOutcome::Won);
    assert_eq!(game.max_tries(), 5);
}
