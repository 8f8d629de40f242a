//! Stem-variable marshalling for IBM MQ.
//!
//! Scripts keep MQ structures as families of variables sharing a stem
//! (`MD.PRI`, `MD.FORM`, ...). This crate moves descriptor records between
//! such families and their binary form, and splits message data that
//! carries an event, a dead-letter/transmission header or a trigger
//! message into variables a script can read.
//!
//! # Modules
//!
//! - [`store`]: the [`VariableStore`] seam to the host's variable pool
//! - [`codec`]: scalar readers/writers and the `ZLIST` [`Inventory`]
//! - [`marshal`]: [`Marshal`] for OD, MD, GMO, PMO and SD records
//! - [`event`], [`header`], [`trigger`]: decoders for message data
//! - [`engine`]: script-facing entry points reporting `LASTRC`/`LASTMSG`
//!
//! # Example
//!
//! ```
//! use rxmq_core::{Marshal, MemoryStore};
//! use rxmq_wire::MessageDescriptor;
//!
//! let mut store = MemoryStore::new();
//! store.set_str("MD.PRI", "5");
//! let md = MessageDescriptor::to_record(&store, "MD.").unwrap();
//! assert_eq!(md.priority, 5);
//! ```

pub mod codec;
pub mod context;
pub mod engine;
pub mod error;
pub mod event;
pub mod fields;
pub mod header;
pub mod inventory;
pub mod marshal;
pub mod options;
pub mod publish;
pub mod status;
pub mod store;
pub mod trigger;

pub use codec::{STAGING_LIMIT, StemReader, StemWriter, parse_int, parse_int64};
pub use context::{ConnectionContext, queue_manager_of};
pub use engine::{Engine, Outcome};
pub use error::{
    ArgumentError, CodecError, Error, EventError, HeaderError, MarshalError, Result,
    TriggerError, TriggerForm, UNKNOWN_FAILURE,
};
pub use event::{DecodedStream, StreamKind, decode_attribute_stream, format_integer};
pub use fields::{Field, FieldSet};
pub use header::{ExtractedHeader, HeaderKind, extract_trailing_header};
pub use inventory::{INVENTORY_TAG, Inventory};
pub use marshal::{Marshal, RecordKind};
pub use options::{DecodeOptions, EngineOptions, LEGACY_STATUS_PREFIX, STATUS_PREFIX};
pub use publish::publish_symbols;
pub use status::{Operation, Status, completion_text, report, return_string};
pub use store::{MemoryStore, VariableStore, field_path, is_stem};
pub use trigger::{COMPACT_TRIGGER_TAG, DecodedTrigger, TriggerInput, decode_trigger};
