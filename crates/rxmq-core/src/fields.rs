//! Decoded output held back until decoding has succeeded.
//!
//! Decoders collect their output here and the entry point writes it to the
//! store in one pass, so a failed decode leaves the store untouched.

use std::collections::TryReserveError;

use crate::inventory::{INVENTORY_TAG, Inventory};
use crate::store::{VariableStore, field_path};

/// One output variable, relative to the output stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub tag: String,
    pub value: Vec<u8>,
    /// Whether the tag appears in the inventory.
    pub listed: bool,
}

/// Ordered output fields plus their inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    fields: Vec<Field>,
    inventory: Inventory,
}

impl FieldSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Field set whose inventory starts with `inventory`.
    #[must_use]
    pub fn with_inventory(inventory: Inventory) -> Self {
        Self {
            fields: Vec::new(),
            inventory,
        }
    }

    pub fn push(&mut self, tag: impl Into<String>, value: impl Into<Vec<u8>>) {
        let tag = tag.into();
        self.inventory.push(&tag);
        self.fields.push(Field {
            tag,
            value: value.into(),
            listed: true,
        });
    }

    /// Add a field that is written but kept out of the inventory.
    pub fn push_unlisted(&mut self, tag: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.fields.push(Field {
            tag: tag.into(),
            value: value.into(),
            listed: false,
        });
    }

    /// Like [`FieldSet::push`], reporting allocation failure.
    pub fn try_push(&mut self, tag: String, value: Vec<u8>) -> Result<(), TryReserveError> {
        self.fields.try_reserve(1)?;
        self.inventory.try_push(&tag)?;
        self.fields.push(Field {
            tag,
            value,
            listed: true,
        });
        Ok(())
    }

    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Last value recorded for `tag`.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&[u8]> {
        self.fields
            .iter()
            .rev()
            .find(|field| field.tag == tag)
            .map(|field| field.value.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Write every field under `stem`, then `<stem>ZLIST`.
    ///
    /// A listed field the store refuses is dropped from the stored
    /// inventory.
    pub fn write<S: VariableStore + ?Sized>(&self, store: &mut S, stem: &str) -> Inventory {
        let mut refused: Vec<&str> = Vec::new();
        for field in &self.fields {
            if !store.set(&field_path(stem, &field.tag), &field.value) && field.listed {
                refused.push(&field.tag);
            }
        }
        let inventory = if refused.is_empty() {
            self.inventory.clone()
        } else {
            let mut kept = Inventory::new();
            for tag in self.inventory.iter().filter(|tag| !refused.contains(tag)) {
                kept.push(tag);
            }
            kept
        };
        store.set(
            &field_path(stem, INVENTORY_TAG),
            inventory.as_str().as_bytes(),
        );
        inventory
    }
}

/// Collecting fields through the scalar codec.
///
/// Writes arrive with the tag as the path, since the writer driving this
/// store is given an empty stem.
impl VariableStore for FieldSet {
    fn get(&self, path: &str) -> Option<Vec<u8>> {
        FieldSet::get(self, path).map(<[u8]>::to_vec)
    }

    fn set(&mut self, path: &str, value: &[u8]) -> bool {
        self.push(path, value);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::StemWriter;
    use crate::store::MemoryStore;

    #[test]
    fn test_unlisted_fields_stay_out_of_inventory() {
        let mut fields = FieldSet::with_inventory(Inventory::with_tags(&["0", "1"]));
        fields.push_unlisted("0", "3");
        fields.push_unlisted("1", "abc");
        fields.push("TYPE", "DLH");

        let mut store = MemoryStore::new();
        let inventory = fields.write(&mut store, "OUT.");
        assert_eq!(inventory.as_str(), "0 1 TYPE");
        assert_eq!(store.get_str("OUT.1").unwrap(), "abc");
        assert_eq!(store.get_str("OUT.ZLIST").unwrap(), "0 1 TYPE");
    }

    #[test]
    fn test_codec_writes_into_field_set() {
        let mut fields = FieldSet::new();
        let mut writer = StemWriter::without_inventory(&mut fields, "");
        writer.put_int("AT", 2);
        writer.put_fixed_string("QN", b"TRIGGER.Q\0\0\0");

        assert_eq!(fields.get("AT"), Some(&b"2"[..]));
        assert_eq!(fields.get("QN"), Some(&b"TRIGGER.Q"[..]));
        assert_eq!(fields.inventory().as_str(), "AT QN");
    }

    /// Accepts everything except one path.
    struct Refusing(MemoryStore, &'static str);

    impl VariableStore for Refusing {
        fn get(&self, path: &str) -> Option<Vec<u8>> {
            self.0.get(path)
        }

        fn set(&mut self, path: &str, value: &[u8]) -> bool {
            path != self.1 && self.0.set(path, value)
        }
    }

    #[test]
    fn test_refused_write_is_not_listed() {
        let mut fields = FieldSet::new();
        fields.push("TYPE", "EVENT");
        fields.push("NAME", "Q_FULL");
        fields.push("REA", "2053");

        let mut store = Refusing(MemoryStore::new(), "EV.NAME");
        let inventory = fields.write(&mut store, "EV.");
        assert_eq!(inventory.as_str(), "TYPE REA");
        assert_eq!(store.0.get_str("EV.ZLIST").unwrap(), "TYPE REA");
    }
}
