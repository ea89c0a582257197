// Conditional logging macros - only active in debug builds

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

use log::LevelFilter;

/// Maps the `-v` count onto a level filter. `quiet` turns logging off unless
/// verbosity was asked for, so the terminal UI keeps a clean screen.
#[must_use]
pub fn level_for_verbosity(verbosity: u8, quiet: bool) -> LevelFilter {
    match (verbosity, quiet) {
        (0, true) => LevelFilter::Off,
        (0, false) => LevelFilter::Warn,
        (1, _) => LevelFilter::Info,
        (2, _) => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs env_logger. `RUST_LOG` takes precedence over the verbosity flag.
pub fn init_logging(verbosity: u8, quiet: bool) {
    let default_level = level_for_verbosity(verbosity, quiet);
    let env = env_logger::Env::default().default_filter_or(default_level.as_str());
    // A second init (e.g. from tests) is harmless.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
