use bulls_cows::cli::{CliInterface, parse_cli};
use bulls_cows::logging::init_logging;
use bulls_cows::tui::TuiInterface;
use bulls_cows::{GameInterface, GameState, game_loop};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    init_logging(cli.verbose, cli.tui);

    let mut game = match GameState::new() {
        Ok(game) => game,
        Err(e) => {
            log::error!("invalid game configuration: {e}");
            eprintln!("Invalid game configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut interface: Box<dyn GameInterface> = if cli.tui {
        match TuiInterface::new() {
            Ok(tui) => Box::new(tui),
            Err(e) => {
                eprintln!("Failed to start terminal UI: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        Box::new(CliInterface::new(io::stdin().lock()))
    };

    let summary = game_loop(&mut game, interface.as_mut());
    // Restore the terminal before logging the summary.
    drop(interface);
    log::info!(
        "played {} round(s), won {}",
        summary.rounds_played,
        summary.rounds_won
    );
    ExitCode::SUCCESS
}
