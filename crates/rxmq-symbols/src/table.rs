//! Number-to-name symbol table.
//!
//! Reason codes, completion codes and PCF attribute ids are looked up by
//! value. Attribute names are stored without their `MQxx_` prefix because
//! they become variable tags (`MQCA_Q_NAME` is published as `Q_NAME`).

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::embedded;
use crate::error::{Result, SymbolError};

/// Category of a symbol row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    /// Plain named constant (`MQOO_OUTPUT`).
    Constant,
    /// Reason code (`MQRC_`), published under `RCMAP`.
    Reason,
    /// Completion code (`MQCC_`), published under `CCMAP`.
    Completion,
    /// PCF parameter id, published under `CAMAP`.
    Attribute,
}

impl SymbolKind {
    /// Map stem used when publishing this kind, if it has one.
    #[must_use]
    pub const fn map_name(self) -> Option<&'static str> {
        match self {
            Self::Constant => None,
            Self::Reason => Some("RCMAP"),
            Self::Completion => Some("CCMAP"),
            Self::Attribute => Some("CAMAP"),
        }
    }

    /// Lowercase label, as written in the CSV.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Constant => "constant",
            Self::Reason => "reason",
            Self::Completion => "completion",
            Self::Attribute => "attribute",
        }
    }
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named MQ value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub name: String,
    pub value: i32,
}

impl Symbol {
    /// Name with everything up to and including the first `_` removed.
    #[must_use]
    pub fn short_name(&self) -> &str {
        strip_prefix(&self.name)
    }
}

#[derive(Debug, Deserialize)]
struct SymbolRow {
    kind: SymbolKind,
    name: String,
    value: i32,
}

/// Immutable lookup table built once from CSV data.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
    reasons: HashMap<i32, usize>,
    completions: HashMap<i32, usize>,
    attributes: HashMap<i32, usize>,
}

impl SymbolTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from CSV text with a `kind,name,value` header.
    ///
    /// When two rows of the same kind share a value the later row wins.
    pub fn from_csv(content: &str, file: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(Cursor::new(content.as_bytes()));

        let mut table = Self::new();
        for (index, result) in reader.deserialize::<SymbolRow>().enumerate() {
            let row = result.map_err(|source| SymbolError::CsvParse {
                file: file.to_string(),
                row: index + 2,
                source,
            })?;
            table.insert(
                Symbol {
                    kind: row.kind,
                    name: row.name,
                    value: row.value,
                },
                file,
            )?;
        }
        Ok(table)
    }

    fn insert(&mut self, symbol: Symbol, file: &str) -> Result<()> {
        if symbol.kind != SymbolKind::Constant && !symbol.name.contains('_') {
            return Err(SymbolError::MissingPrefix {
                file: file.to_string(),
                name: symbol.name,
            });
        }
        let index = self.symbols.len();
        let map = match symbol.kind {
            SymbolKind::Constant => None,
            SymbolKind::Reason => Some(&mut self.reasons),
            SymbolKind::Completion => Some(&mut self.completions),
            SymbolKind::Attribute => Some(&mut self.attributes),
        };
        if let Some(map) = map
            && let Some(previous) = map.insert(symbol.value, index)
        {
            tracing::warn!(
                file = %file,
                value = symbol.value,
                replaced = %self.symbols[previous].name,
                name = %symbol.name,
                "Duplicate symbol value, later row wins"
            );
        }
        self.symbols.push(symbol);
        Ok(())
    }

    /// Full reason-code name, e.g. `MQRC_Q_FULL`.
    #[must_use]
    pub fn reason_name(&self, value: i32) -> Option<&str> {
        self.reasons
            .get(&value)
            .map(|&index| self.symbols[index].name.as_str())
    }

    /// Full completion-code name, e.g. `MQCC_WARNING`.
    #[must_use]
    pub fn completion_name(&self, value: i32) -> Option<&str> {
        self.completions
            .get(&value)
            .map(|&index| self.symbols[index].name.as_str())
    }

    /// Attribute tag without prefix, e.g. `Q_NAME` for `MQCA_Q_NAME`.
    #[must_use]
    pub fn attribute_name(&self, value: i32) -> Option<&str> {
        self.attributes
            .get(&value)
            .map(|&index| self.symbols[index].short_name())
    }

    /// Value of a named symbol of any kind.
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<i32> {
        self.symbols
            .iter()
            .rev()
            .find(|symbol| symbol.name == name)
            .map(|symbol| symbol.value)
    }

    /// All symbols in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Symbols of one kind in table order.
    pub fn of_kind(&self, kind: SymbolKind) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter().filter(move |symbol| symbol.kind == kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Drop everything up to and including the first `_`.
///
/// Names without an underscore are returned unchanged.
#[must_use]
pub fn strip_prefix(name: &str) -> &str {
    name.split_once('_').map_or(name, |(_, rest)| rest)
}

static DEFAULT_SYMBOLS: OnceLock<SymbolTable> = OnceLock::new();

/// The embedded table, parsed on first use and shared afterwards.
pub fn default_symbols() -> Result<&'static SymbolTable> {
    if let Some(table) = DEFAULT_SYMBOLS.get() {
        return Ok(table);
    }
    let table = SymbolTable::from_csv(embedded::SYMBOLS_CSV, embedded::SYMBOLS_FILE)?;
    Ok(DEFAULT_SYMBOLS.get_or_init(|| table))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "kind,name,value\n\
                          reason,MQRC_Q_FULL,2053\n\
                          completion,MQCC_OK,0\n\
                          attribute,MQCA_Q_NAME,2016\n\
                          constant,MQOO_OUTPUT,16\n";

    #[test]
    fn test_from_csv_lookups() {
        let table = SymbolTable::from_csv(SAMPLE, "sample.csv").unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.reason_name(2053), Some("MQRC_Q_FULL"));
        assert_eq!(table.completion_name(0), Some("MQCC_OK"));
        assert_eq!(table.attribute_name(2016), Some("Q_NAME"));
        assert_eq!(table.value_of("MQOO_OUTPUT"), Some(16));
        assert_eq!(table.reason_name(9999), None);
    }

    #[test]
    fn test_constants_are_not_mapped() {
        let table = SymbolTable::from_csv(SAMPLE, "sample.csv").unwrap();
        assert_eq!(table.attribute_name(16), None);
        assert_eq!(table.of_kind(SymbolKind::Constant).count(), 1);
    }

    #[test]
    fn test_later_row_wins() {
        let csv = "kind,name,value\n\
                   attribute,MQCA_BASE_Q_NAME,2002\n\
                   attribute,MQCA_BASE_OBJECT_NAME,2002\n";
        let table = SymbolTable::from_csv(csv, "dup.csv").unwrap();
        assert_eq!(table.attribute_name(2002), Some("BASE_OBJECT_NAME"));
    }

    #[test]
    fn test_missing_prefix_rejected() {
        let csv = "kind,name,value\nreason,NOPREFIX,1\n";
        let err = SymbolTable::from_csv(csv, "bad.csv").unwrap_err();
        assert!(matches!(err, SymbolError::MissingPrefix { .. }));
    }

    #[test]
    fn test_bad_row_reports_line() {
        let csv = "kind,name,value\nreason,MQRC_X,abc\n";
        let err = SymbolTable::from_csv(csv, "bad.csv").unwrap_err();
        assert!(matches!(err, SymbolError::CsvParse { row: 2, .. }));
    }

    #[test]
    fn test_strip_prefix() {
        assert_eq!(strip_prefix("MQIACF_ERROR_IDENTIFIER"), "ERROR_IDENTIFIER");
        assert_eq!(strip_prefix("PLAIN"), "PLAIN");
    }
}
