//! `env_logger` set-up shared by the binary and tests.

use env_logger::{Builder, Env};
use log::{debug, LevelFilter};

/// Default verbosity when `RUST_LOG` is unset.
#[must_use]
pub const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes the global logger.
///
/// When `verbose` is `true`, debug messages (render statistics, camera
/// resets) are printed. Otherwise only info level and above are shown.
/// `RUST_LOG` overrides both.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_level(verbose).to_string());
    let mut builder = Builder::from_env(env);
    builder.format_timestamp_millis().format_module_path(false);

    // Only fails if a logger was already installed, which tests do freely.
    if builder.try_init().is_err() {
        debug!("logger already initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_picks_the_level() {
        assert_eq!(default_level(true), LevelFilter::Debug);
        assert_eq!(default_level(false), LevelFilter::Info);
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(false);
        init(true);
    }
}
