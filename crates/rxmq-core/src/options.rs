//! Engine configuration.
//!
//! Options deserialize from a TOML table; every key is optional.
//!
//! ```toml
//! byte_order = "little"
//! strict_reasons = false
//! accept_responses = true
//! status_prefixes = ["RXMQ."]
//! ```

use rxmq_wire::ByteOrder;
use serde::{Deserialize, Serialize};

/// Prefix for the status variables.
pub const STATUS_PREFIX: &str = "RXMQ.";
/// Prefix the status variables were published under by older releases.
pub const LEGACY_STATUS_PREFIX: &str = "RXMQN.";

/// Settings for a single event decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    pub byte_order: ByteOrder,
    /// Reject events whose reason code has no symbolic name.
    pub strict_reasons: bool,
    /// Also decode command server replies.
    pub accept_responses: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::Native,
            strict_reasons: true,
            accept_responses: false,
        }
    }
}

/// Settings for an [`crate::Engine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineOptions {
    pub byte_order: ByteOrder,
    pub strict_reasons: bool,
    pub accept_responses: bool,
    pub status_prefixes: Vec<String>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::Native,
            strict_reasons: true,
            accept_responses: false,
            status_prefixes: vec![STATUS_PREFIX.to_string(), LEGACY_STATUS_PREFIX.to_string()],
        }
    }
}

impl EngineOptions {
    #[must_use]
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            byte_order: self.byte_order,
            strict_reasons: self.strict_reasons,
            accept_responses: self.accept_responses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EngineOptions::default();
        assert_eq!(options.status_prefixes, vec!["RXMQ.", "RXMQN."]);
        assert!(options.strict_reasons);
        assert_eq!(options.decode_options(), DecodeOptions::default());
    }

    #[test]
    fn test_partial_toml() {
        let options: EngineOptions =
            toml::from_str("byte_order = \"big\"\nstrict_reasons = false\n").unwrap();
        assert_eq!(options.byte_order, ByteOrder::Big);
        assert!(!options.strict_reasons);
        assert!(!options.accept_responses);
        assert_eq!(options.status_prefixes.len(), 2);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result: Result<EngineOptions, _> = toml::from_str("strict = true\n");
        assert!(result.is_err());
    }
}
