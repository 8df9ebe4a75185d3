//! Diagnostic logging via `tracing`.
//!
//! Events go to stderr so stdout only ever carries the result line.
//!
//! - `OG_PREVIEW_LOG`: filter directive (falls back to `RUST_LOG`, then `warn`)
//! - `OG_PREVIEW_LOG_FORMAT`: `compact` (default), `pretty` or `json`

use std::io::IsTerminal;
use std::str::FromStr;

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LEVEL_ENV: &str = "OG_PREVIEW_LOG";
pub const FORMAT_ENV: &str = "OG_PREVIEW_LOG_FORMAT";
const DEFAULT_LEVEL: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {s}")),
        }
    }
}

/// Install the global subscriber from the environment.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let level = std::env::var(LEVEL_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_LEVEL.to_string());
    let format = match std::env::var(FORMAT_ENV) {
        Ok(value) => value.parse::<LogFormat>()?,
        Err(_) => LogFormat::default(),
    };

    init_with(&level, format)
}

pub fn init_with(
    level: &str,
    format: LogFormat,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = filter_for(level);
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal());

    match format {
        LogFormat::Compact => Registry::default()
            .with(filter)
            .with(layer.compact().with_target(false))
            .try_init()?,
        LogFormat::Pretty => Registry::default()
            .with(filter)
            .with(layer.pretty().with_file(true).with_line_number(true))
            .try_init()?,
        LogFormat::Json => Registry::default()
            .with(filter)
            .with(layer.json().with_current_span(false))
            .try_init()?,
    }

    Ok(())
}

fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}
