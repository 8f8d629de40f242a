//! Error types for symbol table loading.

use thiserror::Error;

/// Errors that can occur while loading a symbol table.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SymbolError {
    /// A row of the CSV could not be parsed.
    #[error("failed to parse {file} row {row}: {source}")]
    CsvParse {
        file: String,
        row: usize,
        #[source]
        source: csv::Error,
    },

    /// A map row has a name without the `PREFIX_` part.
    #[error("symbol '{name}' in {file} has no prefix separator")]
    MissingPrefix { file: String, name: String },
}

/// Result type for symbol table operations.
pub type Result<T> = std::result::Result<T, SymbolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_prefix_display() {
        let err = SymbolError::MissingPrefix {
            file: "symbols.csv".to_string(),
            name: "NOPREFIX".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "symbol 'NOPREFIX' in symbols.csv has no prefix separator"
        );
    }
}
