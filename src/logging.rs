//! Structured logging for the `wled` CLI.
//!
//! Logs always go to stderr so stdout stays clean for command output.
//! Robot mode emits JSON lines; humans get pretty output on a terminal and a
//! compact plain format when stderr is piped.

use std::io::{self, IsTerminal};

use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Shape of the log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl LogFormat {
    /// Pick a format from the robot flag and whether stderr is a TTY.
    #[must_use]
    pub fn detect(robot_mode: bool) -> Self {
        if robot_mode {
            Self::Json
        } else if io::stderr().is_terminal() {
            Self::Pretty
        } else {
            Self::Compact
        }
    }
}

/// Filter used when `RUST_LOG` is unset.
///
/// HTTP internals stay at `warn` until `-vvv`.
#[must_use]
pub const fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "wled=error";
    }
    match verbose {
        0 => "wled=info,reqwest=warn,hyper_util=warn",
        1 => "wled=debug,reqwest=warn,hyper_util=warn",
        2 => "wled=trace,reqwest=warn,hyper_util=warn",
        _ => "wled=trace,reqwest=trace,hyper_util=debug",
    }
}

/// Install the global subscriber.
///
/// * `robot_mode` - JSON lines for machine consumption
/// * `verbose` - 0 = info, 1 = debug, 2 = trace, 3+ = trace including HTTP
/// * `quiet` - errors only
///
/// `RUST_LOG` overrides the computed filter. Calling this twice is harmless;
/// the second subscriber is ignored.
pub fn init_logging(robot_mode: bool, verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let layer = build_layer(LogFormat::detect(robot_mode));
    let _ = tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .try_init();
}

fn build_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    let base = fmt::layer()
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(io::stderr);

    match format {
        LogFormat::Json => base.json().with_target(true).boxed(),
        LogFormat::Pretty => base.with_target(false).boxed(),
        LogFormat::Compact => base.with_ansi(false).with_target(false).compact().boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_parse() {
        for verbose in 0..4 {
            assert!(EnvFilter::try_new(default_directive(verbose, false)).is_ok());
        }
        assert_eq!(default_directive(3, true), "wled=error");
        assert!(default_directive(1, false).starts_with("wled=debug"));
    }

    #[test]
    fn test_robot_mode_is_json() {
        assert_eq!(LogFormat::detect(true), LogFormat::Json);
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logging(false, 0, true);
        init_logging(true, 2, false);
    }
}
