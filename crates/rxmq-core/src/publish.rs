//! Publishing MQ constants into the variable pool.

use rxmq_symbols::{SymbolKind, SymbolTable};
use tracing::debug;

use crate::codec::StemWriter;
use crate::store::VariableStore;

/// Write every symbol of `table` as `NAME=value`, plus the lookup maps.
///
/// Reason and completion codes also land in `RCMAP.<value>` and
/// `CCMAP.<value>` holding the full name; attribute ids land in
/// `CAMAP.<value>` holding the name without its prefix. The maps are
/// written under each prefix. Returns the number of variables written.
pub fn publish_symbols<S: VariableStore + ?Sized>(
    table: &SymbolTable,
    store: &mut S,
    prefixes: &[String],
) -> usize {
    let mut written = 0;
    let mut constants = StemWriter::without_inventory(&mut *store, "");
    for symbol in table.iter() {
        if constants.put_int(&symbol.name, symbol.value) {
            written += 1;
        }
    }

    for prefix in prefixes {
        let mut maps = StemWriter::without_inventory(&mut *store, prefix);
        for symbol in table.iter() {
            let Some(map) = symbol.kind.map_name() else {
                continue;
            };
            let name = match symbol.kind {
                SymbolKind::Attribute => symbol.short_name(),
                _ => symbol.name.as_str(),
            };
            let tag = format!("{map}.{}", symbol.value);
            if maps.put_raw(&tag, name.as_bytes()) {
                written += 1;
            }
        }
    }
    debug!(symbols = table.len(), written, "published constants");
    written
}
