//! Record marshalling between stems and descriptor records.
//!
//! Each record kind overlays the stem variables that are present onto its
//! canonical default, and in the other direction writes every field of the
//! highest version it knows followed by the `ZLIST` inventory.

mod gmo;
mod md;
mod od;
mod pmo;
mod sd;

use std::fmt;

use rxmq_wire::{
    GetMessageOptions, MessageDescriptor, ObjectDescriptor, PutMessageOptions,
    SubscriptionDescriptor,
};
use serde::{Deserialize, Serialize};

use crate::codec::{StemReader, StemWriter};
use crate::error::MarshalError;
use crate::inventory::Inventory;
use crate::store::VariableStore;

#[cfg(test)]
pub(crate) use md::MD_V1_TAGS;
pub(crate) use md::emit_md_v1;

/// A record that can be read from and written to a stem.
pub trait Marshal: Default {
    /// Tags written by [`Marshal::from_record`], in order.
    const TAGS: &'static [&'static str];

    /// Overlay every field present under the reader's stem.
    fn overlay<S: VariableStore + ?Sized>(
        &mut self,
        reader: &StemReader<'_, S>,
    ) -> Result<(), MarshalError>;

    /// Write every field through `writer`.
    fn emit<S: VariableStore + ?Sized>(&self, writer: &mut StemWriter<'_, S>);

    /// Build a record from the variables under `path`.
    fn to_record<S: VariableStore + ?Sized>(store: &S, path: &str) -> Result<Self, MarshalError> {
        let mut record = Self::default();
        record.overlay(&StemReader::new(store, path))?;
        Ok(record)
    }

    /// Write the record under `path`, then its inventory.
    fn from_record<S: VariableStore + ?Sized>(&self, store: &mut S, path: &str) -> Inventory {
        let mut writer = StemWriter::new(store, path);
        self.emit(&mut writer);
        writer.finish()
    }
}

/// The descriptor records the engine marshals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Object descriptor.
    Od,
    /// Message descriptor.
    Md,
    /// Get-message options.
    Gmo,
    /// Put-message options.
    Pmo,
    /// Subscription descriptor.
    Sd,
}

impl RecordKind {
    pub const ALL: [Self; 5] = [Self::Od, Self::Md, Self::Gmo, Self::Pmo, Self::Sd];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Od => "od",
            Self::Md => "md",
            Self::Gmo => "gmo",
            Self::Pmo => "pmo",
            Self::Sd => "sd",
        }
    }

    #[must_use]
    pub const fn tags(self) -> &'static [&'static str] {
        match self {
            Self::Od => ObjectDescriptor::TAGS,
            Self::Md => MessageDescriptor::TAGS,
            Self::Gmo => GetMessageOptions::TAGS,
            Self::Pmo => PutMessageOptions::TAGS,
            Self::Sd => SubscriptionDescriptor::TAGS,
        }
    }

    /// Read a record of this kind from `input` and write it back under
    /// `output`, filling in every default the input left out.
    pub fn normalize<S: VariableStore + ?Sized>(
        self,
        store: &mut S,
        input: &str,
        output: &str,
    ) -> Result<Inventory, MarshalError> {
        match self {
            Self::Od => normalize_as::<ObjectDescriptor, S>(store, input, output),
            Self::Md => normalize_as::<MessageDescriptor, S>(store, input, output),
            Self::Gmo => normalize_as::<GetMessageOptions, S>(store, input, output),
            Self::Pmo => normalize_as::<PutMessageOptions, S>(store, input, output),
            Self::Sd => normalize_as::<SubscriptionDescriptor, S>(store, input, output),
        }
    }
}

fn normalize_as<R: Marshal, S: VariableStore + ?Sized>(
    store: &mut S,
    input: &str,
    output: &str,
) -> Result<Inventory, MarshalError> {
    let record = R::to_record(&*store, input)?;
    Ok(record.from_record(store, output))
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
