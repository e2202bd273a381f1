//! Diagnostic logging setup.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter, e.g. `irail=debug`.
pub const LOG_ENV: &str = "IRAIL_LOG";

/// Default level: `DEBUG` when verbose, `WARN` otherwise.
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    }
}

/// Filter from `IRAIL_LOG`, or `default_level` when unset or invalid.
pub fn env_filter(verbose: bool) -> EnvFilter {
    let default_level = default_level(verbose);
    let directives = std::env::var(LOG_ENV).unwrap_or_else(|_| default_level.to_string());
    EnvFilter::try_new(directives).unwrap_or_else(|err| {
        eprintln!(
            "invalid {}, falling back to level '{}' - {}",
            LOG_ENV, default_level, err,
        );
        EnvFilter::new(default_level.to_string())
    })
}

/// Install the global subscriber. Logs go to stderr so they never mix with
/// the boards on stdout.
pub fn init_logger(verbose: bool) {
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    if let Err(err) = tracing_subscriber::registry()
        .with(layer)
        .with(env_filter(verbose))
        .try_init()
    {
        eprintln!("failed to install logger: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_default() {
        assert_eq!(default_level(false), LevelFilter::WARN);
        assert_eq!(default_level(true), LevelFilter::DEBUG);
    }
}
