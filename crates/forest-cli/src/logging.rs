//! Logger setup for the `forest` binary.
//!
//! Log records go to stderr through `env_logger`. The filter is read from
//! `FOREST_LOG` (same syntax as `RUST_LOG`), styling from `FOREST_LOG_STYLE`.
//! `--verbose` and `--quiet` override the default level when `FOREST_LOG` is
//! unset.
use log::LevelFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "FOREST_LOG";

/// Environment variable controlling colored log output.
pub const LOG_STYLE_ENV: &str = "FOREST_LOG_STYLE";

/// Picks the default level from the global verbosity flags.
pub fn default_level(quiet: bool, verbose: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Installs the global logger. Later calls are ignored.
pub fn setup(quiet: bool, verbose: bool) {
    let level = default_level(quiet, verbose);
    let env = env_logger::Env::new()
        .filter_or(LOG_ENV, level.as_str())
        .write_style(LOG_STYLE_ENV);

    let result = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(verbose)
        .try_init();
    if result.is_err() {
        log::debug!("logger already installed");
    }
}
