//! Embedded symbol data.
//!
//! The table is compiled into the binary with `include_str!()` so lookups
//! never touch the filesystem.
//!
//! # Format
//!
//! `data/symbols.csv` has three columns: `kind,name,value`. The `kind`
//! column is one of `constant`, `reason`, `completion` or `attribute`.

/// MQ constants, reason codes, completion codes and PCF attribute ids.
pub const SYMBOLS_CSV: &str = include_str!("../data/symbols.csv");

/// File name reported in parse errors for the embedded table.
pub const SYMBOLS_FILE: &str = "symbols.csv";
