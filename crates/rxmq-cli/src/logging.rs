//! Subscriber setup for the engine's `tracing` output.
//!
//! Each engine entry point opens an `info_span!`; stages log at `debug` and
//! decoded elements at `trace`.
//!
//! # Log Levels
//!
//! - `warn`: default, only problems
//! - `debug`: one line per call and per stage
//! - `trace`: one line per decoded element

use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::sync::Mutex;

use clap::ColorChoice;
use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

/// Crates whose events follow the configured level.
const OWN_CRATES: [&str; 4] = ["rxmq", "rxmq_cli", "rxmq_core", "rxmq_symbols"];

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` replace the level-derived directives.
    pub use_env_filter: bool,
    pub with_target: bool,
    /// Emit span close events carrying the span duration (json only).
    pub with_spans: bool,
    pub with_ansi: bool,
    pub format: LogFormat,
    /// Append to this file instead of writing to stderr.
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_target: false,
            with_spans: true,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

impl LogConfig {
    /// `--log-level` beats `-v`/`-q`; either one disables `RUST_LOG`.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let explicit = cli.log_level.map(LevelFilter::from);
        let with_ansi = match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
        };
        Self {
            level_filter: explicit.unwrap_or_else(|| cli.verbosity.tracing_level_filter()),
            use_env_filter: explicit.is_none() && !cli.verbosity.is_present(),
            with_ansi,
            format: cli.log_format.into(),
            log_file: cli.log_file.clone(),
            ..Self::default()
        }
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let writer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(io::stderr),
    };
    tracing_subscriber::registry()
        .with(build_env_filter(config))
        .with(format_layer(config, writer))
        .init();
    Ok(())
}

fn format_layer<S>(config: &LogConfig, writer: BoxMakeWriter) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let base = fmt::layer()
        .with_writer(writer)
        .with_target(config.with_target);
    match config.format {
        LogFormat::Json => {
            let spans = if config.with_spans {
                FmtSpan::CLOSE
            } else {
                FmtSpan::NONE
            };
            base.json().with_span_events(spans).boxed()
        }
        LogFormat::Compact => base
            .compact()
            .with_ansi(config.with_ansi)
            .without_time()
            .boxed(),
        LogFormat::Pretty => base.with_ansi(config.with_ansi).without_time().boxed(),
    }
}

/// Our crates at the configured level, everything else at warn.
fn default_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    OWN_CRATES
        .iter()
        .fold(String::from("warn"), |mut directives, name| {
            directives.push_str(&format!(",{name}={level}"));
            directives
        })
}

fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(default_directives(config.level_filter));
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_directives_cover_own_crates() {
        insta::assert_snapshot!(
            default_directives(LevelFilter::DEBUG),
            @"warn,rxmq=debug,rxmq_cli=debug,rxmq_core=debug,rxmq_symbols=debug"
        );
    }

    #[test]
    fn test_log_level_flag_wins() {
        let cli = Cli::parse_from(["rxmq", "-v", "--log-level", "trace", "symbols"]);
        let config = LogConfig::from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::TRACE);
        assert!(!config.use_env_filter);

        let cli = Cli::parse_from(["rxmq", "--log-format", "json", "symbols"]);
        let config = LogConfig::from_cli(&cli);
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert_eq!(config.format, LogFormat::Json);
    }
}
