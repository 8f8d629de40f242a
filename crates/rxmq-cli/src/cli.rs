//! CLI argument definitions for `rxmq`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use rxmq_core::RecordKind;
use rxmq_symbols::SymbolKind;
use rxmq_wire::ByteOrder;
use tracing::level_filters::LevelFilter;

use crate::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "rxmq",
    version,
    about = "Split MQ message data into stem variables",
    long_about = "Split MQ message data into the stem variables a script would see.\n\n\
                  Decodes PCF events, dead-letter and transmission headers and\n\
                  trigger messages, and normalizes descriptor stems."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Engine options file (TOML). Flags override its values.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Byte order of binary integers in the input.
    #[arg(long = "byte-order", value_enum, global = true)]
    pub byte_order: Option<ByteOrderArg>,

    /// Output format for decoded variables.
    #[arg(long = "output", value_enum, default_value = "table", global = true)]
    pub output: OutputArg,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode a PCF event message.
    Event(EventArgs),

    /// Split a dead-letter or transmission header from its message.
    Hxt(InputArgs),

    /// Decode a trigger message.
    Tm(TriggerArgs),

    /// Read a descriptor stem and write it back with every default filled.
    Record(RecordArgs),

    /// List the embedded MQ symbols.
    Symbols(SymbolsArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// File holding the message data.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Args)]
pub struct EventArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Accept reason codes that have no symbolic name.
    #[arg(long = "relaxed-reasons")]
    pub relaxed_reasons: bool,

    /// Also decode command server responses.
    #[arg(long = "responses")]
    pub responses: bool,
}

#[derive(Args)]
pub struct TriggerArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// The file holds `MQTMC2` (as passed to a triggered program).
    #[arg(long = "compact")]
    pub compact: bool,

    /// Queue manager name placed in the synthesized `MQTMC2`.
    #[arg(long = "qmgr", value_name = "NAME")]
    pub qmgr: Option<String>,
}

#[derive(Args)]
pub struct RecordArgs {
    /// Record kind.
    #[arg(value_enum)]
    pub kind: RecordKindArg,

    /// Input variable, relative to the stem (repeatable).
    #[arg(long = "set", value_name = "TAG=VALUE")]
    pub set: Vec<String>,
}

#[derive(Args)]
pub struct SymbolsArgs {
    /// Only list symbols of this kind.
    #[arg(long = "kind", value_enum)]
    pub kind: Option<SymbolKindArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ByteOrderArg {
    Native,
    Little,
    Big,
}

impl From<ByteOrderArg> for ByteOrder {
    fn from(arg: ByteOrderArg) -> Self {
        match arg {
            ByteOrderArg::Native => Self::Native,
            ByteOrderArg::Little => Self::Little,
            ByteOrderArg::Big => Self::Big,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RecordKindArg {
    Od,
    Md,
    Gmo,
    Pmo,
    Sd,
}

impl From<RecordKindArg> for RecordKind {
    fn from(arg: RecordKindArg) -> Self {
        match arg {
            RecordKindArg::Od => Self::Od,
            RecordKindArg::Md => Self::Md,
            RecordKindArg::Gmo => Self::Gmo,
            RecordKindArg::Pmo => Self::Pmo,
            RecordKindArg::Sd => Self::Sd,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SymbolKindArg {
    Constant,
    Reason,
    Completion,
    Attribute,
}

impl From<SymbolKindArg> for SymbolKind {
    fn from(arg: SymbolKindArg) -> Self {
        match arg {
            SymbolKindArg::Constant => Self::Constant,
            SymbolKindArg::Reason => Self::Reason,
            SymbolKindArg::Completion => Self::Completion,
            SymbolKindArg::Attribute => Self::Attribute,
        }
    }
}

/// Output format choices.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}
