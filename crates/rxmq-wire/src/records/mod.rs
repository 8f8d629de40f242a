//! Host-side MQ records.
//!
//! These are the structures the marshaller fills from, and expands into,
//! stem variables. Character fields keep their fixed width so a record
//! compares bit-for-bit with the canonical default.
//!
//! | Record                   | Max version | Defaults from         |
//! |--------------------------|-------------|-----------------------|
//! | [`ObjectDescriptor`]     | 4           | `MQOD_DEFAULT`        |
//! | [`MessageDescriptor`]    | 2           | `MQMD2_DEFAULT`, v1   |
//! | [`GetMessageOptions`]    | 4           | `MQGMO_DEFAULT`       |
//! | [`PutMessageOptions`]    | 3           | `MQPMO_DEFAULT`       |
//! | [`SubscriptionDescriptor`] | 1         | `MQSD_DEFAULT`        |

mod counted;
mod get_options;
mod message;
mod object;
mod put_options;
mod subscription;

pub use counted::CountedString;
pub use get_options::GetMessageOptions;
pub use message::MessageDescriptor;
pub use object::ObjectDescriptor;
pub use put_options::PutMessageOptions;
pub use subscription::SubscriptionDescriptor;

pub type MqChar4 = [u8; 4];
pub type MqChar8 = [u8; 8];
pub type MqChar12 = [u8; 12];
pub type MqChar28 = [u8; 28];
pub type MqChar32 = [u8; 32];
pub type MqChar48 = [u8; 48];
pub type MqChar64 = [u8; 64];
pub type MqChar128 = [u8; 128];
pub type MqChar256 = [u8; 256];
pub type MqByte16 = [u8; 16];
pub type MqByte24 = [u8; 24];
pub type MqByte32 = [u8; 32];
pub type MqByte40 = [u8; 40];
