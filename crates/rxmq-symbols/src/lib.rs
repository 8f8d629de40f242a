//! MQ symbol tables.
//!
//! Numeric reason codes, completion codes and PCF attribute ids are turned
//! into names through a table embedded at compile time. The default table is
//! parsed once and treated as immutable afterwards.
//!
//! ```
//! use rxmq_symbols::default_symbols;
//!
//! let symbols = default_symbols().unwrap();
//! assert_eq!(symbols.reason_name(2053), Some("MQRC_Q_FULL"));
//! assert_eq!(symbols.attribute_name(2016), Some("Q_NAME"));
//! ```

pub mod embedded;
mod error;
mod table;

pub use error::{Result, SymbolError};
pub use table::{Symbol, SymbolKind, SymbolTable, default_symbols, strip_prefix};
