//! IBM MQ structure layouts.
//!
//! This crate knows the byte layout of the MQ structures the marshalling
//! engine meets inside message data, and the host-side shape of the
//! descriptor records it fills from stem variables.
//!
//! # Modules
//!
//! - [`records`]: object/message descriptors, get/put options, subscription
//!   descriptor and counted strings, with their canonical defaults
//! - [`layout`]: binary parse/build for `MQMD`, `MQDLH`, `MQXQH`, `MQTM`,
//!   `MQTMC2` and PCF
//! - [`Cursor`] / [`Encoder`]: bounds-checked primitives every layout uses
//!
//! # Example
//!
//! ```
//! use rxmq_wire::layout::{build_md, parse_md};
//! use rxmq_wire::{ByteOrder, MessageDescriptor};
//!
//! let md = MessageDescriptor { priority: 5, ..MessageDescriptor::default() };
//! let bytes = build_md(&md, ByteOrder::Little);
//! assert_eq!(bytes.len(), 324);
//! assert_eq!(parse_md(&bytes, ByteOrder::Little).unwrap().priority, 5);
//! ```

pub mod constants;
mod cursor;
mod error;
pub mod layout;
mod order;
pub mod records;

pub use cursor::{Cursor, Encoder, field_text, fixed, until_nul};
pub use error::{Result, WireError, struc_id_mismatch};
pub use order::ByteOrder;
pub use records::{
    CountedString, GetMessageOptions, MessageDescriptor, ObjectDescriptor, PutMessageOptions,
    SubscriptionDescriptor,
};
