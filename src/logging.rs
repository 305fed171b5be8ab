// SPDX-License-Identifier: MPL-2.0
//! Diagnostic logging to stderr.
//!
//! Verbosity comes from `-v`/`-q`, unless `ICON_FORGE_LOG` holds a filter
//! directive such as `icon_forge=debug`.

use tracing::Level;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt::layer,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    Layer, Registry,
};

/// Environment variable holding a filter directive.
pub const ENV_LOG: &str = "ICON_FORGE_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    /// `-q` wins over `-v`.
    #[must_use]
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (_, true) => Verbosity::Quiet,
            (true, false) => Verbosity::Verbose,
            (false, false) => Verbosity::Normal,
        }
    }

    #[must_use]
    pub fn level(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::from(Level::ERROR),
            Verbosity::Normal => LevelFilter::from(Level::INFO),
            Verbosity::Verbose => LevelFilter::from(Level::DEBUG),
        }
    }
}

/// Installs the global subscriber. A second call is ignored.
pub fn init(verbosity: Verbosity) {
    let env_filter = std::env::var(ENV_LOG)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok());

    let fmt_layer = layer()
        .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);

    let result = match env_filter {
        Some(filter) => Registry::default()
            .with(fmt_layer.with_filter(filter))
            .try_init(),
        None => Registry::default()
            .with(fmt_layer.with_filter(verbosity.level()))
            .try_init(),
    };
    if let Err(err) = result {
        eprintln!("logging already initialized: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn init_twice_does_not_panic() {
        init(Verbosity::Quiet);
        init(Verbosity::Verbose);
        tracing::debug!("subscriber installed");
    }

    #[test]
    fn levels_follow_verbosity() {
        assert_eq!(Verbosity::Quiet.level(), LevelFilter::ERROR);
        assert_eq!(Verbosity::Normal.level(), LevelFilter::INFO);
        assert_eq!(Verbosity::Verbose.level(), LevelFilter::DEBUG);
    }
}
