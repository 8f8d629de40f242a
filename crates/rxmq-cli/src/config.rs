//! Engine options from a TOML file and command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rxmq_core::EngineOptions;

use crate::cli::{Cli, Command};

/// Parse engine options from TOML text.
pub fn parse_options(text: &str) -> Result<EngineOptions> {
    toml::from_str(text).context("parse engine options")
}

/// Read an options file; no file means defaults.
pub fn load_options(path: Option<&Path>) -> Result<EngineOptions> {
    let Some(path) = path else {
        return Ok(EngineOptions::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_options(&text).with_context(|| format!("load {}", path.display()))
}

/// Options file values with the command-line flags applied on top.
pub fn resolve_options(cli: &Cli) -> Result<EngineOptions> {
    let mut options = load_options(cli.config.as_deref())?;
    if let Some(order) = cli.byte_order {
        options.byte_order = order.into();
    }
    if let Command::Event(args) = &cli.command {
        if args.relaxed_reasons {
            options.strict_reasons = false;
        }
        if args.responses {
            options.accept_responses = true;
        }
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use rxmq_wire::ByteOrder;

    use super::*;

    #[test]
    fn test_flags_override_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "byte_order = \"big\"\nstrict_reasons = true").unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let cli = Cli::parse_from([
            "rxmq",
            "--config",
            path.as_str(),
            "--byte-order",
            "little",
            "event",
            "--relaxed-reasons",
            "msg.bin",
        ]);
        let options = resolve_options(&cli).unwrap();
        assert_eq!(options.byte_order, ByteOrder::Little);
        assert!(!options.strict_reasons);
        assert!(!options.accept_responses);
        assert_eq!(options.status_prefixes, EngineOptions::default().status_prefixes);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = parse_options("byte_ordr = \"big\"").unwrap_err();
        assert!(format!("{err:#}").contains("byte_ordr"));
    }

    #[test]
    fn test_missing_file_names_path() {
        let err = load_options(Some(Path::new("/nonexistent/rxmq.toml"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/rxmq.toml"));
    }
}
