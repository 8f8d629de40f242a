//! Checks against the embedded symbol table.

use std::collections::HashSet;

use rxmq_symbols::{SymbolKind, default_symbols};

#[test]
fn test_default_table_loads() {
    let symbols = default_symbols().expect("embedded table parses");
    assert!(!symbols.is_empty());
    assert!(std::ptr::eq(symbols, default_symbols().unwrap()));
}

#[test]
fn test_event_reasons_resolve() {
    let symbols = default_symbols().unwrap();
    for (value, name) in [
        (2035, "MQRC_NOT_AUTHORIZED"),
        (2224, "MQRC_Q_DEPTH_HIGH"),
        (2282, "MQRC_CHANNEL_STARTED"),
        (2367, "MQRC_CONFIG_CREATE_OBJECT"),
        (2412, "MQRC_COMMAND_MQSC"),
        (2411, "MQRC_LOGGER_STATUS"),
    ] {
        assert_eq!(symbols.reason_name(value), Some(name), "reason {value}");
    }
}

#[test]
fn test_hex_formatted_attributes_present() {
    let symbols = default_symbols().unwrap();
    assert_eq!(symbols.attribute_name(1013), Some("ERROR_IDENTIFIER"));
    assert_eq!(symbols.attribute_name(1070), Some("AUX_ERROR_DATA_INT_1"));
    assert_eq!(symbols.attribute_name(1071), Some("AUX_ERROR_DATA_INT_2"));
    assert_eq!(symbols.attribute_name(1533), Some("SSL_RETURN_CODE"));
}

#[test]
fn test_map_values_unique_per_kind() {
    let symbols = default_symbols().unwrap();
    for kind in [
        SymbolKind::Reason,
        SymbolKind::Completion,
        SymbolKind::Attribute,
    ] {
        let mut seen = HashSet::new();
        for symbol in symbols.of_kind(kind) {
            assert!(
                seen.insert(symbol.value),
                "duplicate {kind} value {} ({})",
                symbol.value,
                symbol.name
            );
        }
    }
}

#[test]
fn test_completion_names_snapshot() {
    let symbols = default_symbols().unwrap();
    let names: Vec<&str> = symbols
        .of_kind(SymbolKind::Completion)
        .map(|symbol| symbol.name.as_str())
        .collect();
    insta::assert_snapshot!(names.join(" "), @"MQCC_OK MQCC_WARNING MQCC_FAILED MQCC_UNKNOWN");
}
