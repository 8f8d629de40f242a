//! Binary layouts of MQ structures found inside message data.
//!
//! - [`md`]: message descriptor, embedded in the transmission header
//! - [`dlh`]: dead-letter header
//! - [`xqh`]: transmission-queue header
//! - [`trigger`]: trigger message, original and compact forms
//! - [`pcf`]: PCF header and element prefixes

pub mod dlh;
pub mod md;
pub mod pcf;
pub mod trigger;
pub mod xqh;

pub use dlh::{DeadLetterHeader, build_dlh, parse_dlh};
pub use md::{build_md, parse_md, read_md_v1};
pub use pcf::{
    PcfBuilder, PcfElement, PcfHeader, build_pcf_header, parse_pcf_header, read_element,
};
pub use trigger::{
    CompactTrigger, TriggerMessage, build_tm, build_tmc2, parse_tm, parse_tmc2,
};
pub use xqh::{TransmissionHeader, build_xqh, parse_xqh};
