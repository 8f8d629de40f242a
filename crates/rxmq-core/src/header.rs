//! Dead-letter and transmission header extraction.
//!
//! Messages taken from a dead-letter queue start with an `MQDLH`, messages
//! browsed on a transmission queue with an `MQXQH`. Either way the header
//! is split into fields and the application data after it is handed back
//! as `.0` (length) and `.1` (bytes).

use rxmq_wire::constants::{MQDLH_LENGTH, MQDLH_STRUC_ID, MQXQH_LENGTH, MQXQH_STRUC_ID};
use rxmq_wire::layout::{parse_dlh, parse_xqh};
use rxmq_wire::ByteOrder;
use tracing::debug;

use crate::codec::StemWriter;
use crate::error::HeaderError;
use crate::fields::FieldSet;
use crate::inventory::Inventory;
use crate::marshal::emit_md_v1;

/// Tags of the payload fields, listed first in every inventory.
const PAYLOAD_TAGS: [&str; 2] = ["0", "1"];

/// Header found at the front of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderKind {
    DeadLetter,
    Transmission,
}

impl HeaderKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DeadLetter => "DLH",
            Self::Transmission => "XQH",
        }
    }

    #[must_use]
    pub const fn length(self) -> usize {
        match self {
            Self::DeadLetter => MQDLH_LENGTH,
            Self::Transmission => MQXQH_LENGTH,
        }
    }
}

/// A split header and the data behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedHeader {
    pub kind: HeaderKind,
    pub payload_len: usize,
    pub fields: FieldSet,
}

/// Split the header at the start of `buffer` from its payload.
pub fn extract_trailing_header(
    buffer: &[u8],
    order: ByteOrder,
) -> Result<ExtractedHeader, HeaderError> {
    let Some(struc_id) = buffer.first_chunk::<4>() else {
        return Err(HeaderError::CannotVerifyHeader {
            length: buffer.len(),
        });
    };
    let kind = match struc_id {
        id if id == MQDLH_STRUC_ID => HeaderKind::DeadLetter,
        id if id == MQXQH_STRUC_ID => HeaderKind::Transmission,
        other => {
            return Err(HeaderError::UnknownHeader {
                found: String::from_utf8_lossy(other).into_owned(),
            });
        }
    };
    if buffer.len() < kind.length() {
        return Err(match kind {
            HeaderKind::DeadLetter => HeaderError::ShortDeadLetter {
                length: buffer.len(),
            },
            HeaderKind::Transmission => HeaderError::ShortTransmission {
                length: buffer.len(),
            },
        });
    }

    let payload = &buffer[kind.length()..];
    debug!(
        header = kind.as_str(),
        payload_len = payload.len(),
        "extracting header"
    );

    let mut fields = FieldSet::with_inventory(Inventory::with_tags(&PAYLOAD_TAGS));
    fields.push_unlisted(PAYLOAD_TAGS[0], payload.len().to_string());
    fields.push_unlisted(PAYLOAD_TAGS[1], payload);
    fields.push("TYPE", kind.as_str());
    fields.push("NAME", kind.as_str());

    let mut writer = StemWriter::without_inventory(&mut fields, "");
    match kind {
        HeaderKind::DeadLetter => {
            let dlh = parse_dlh(buffer, order)?;
            writer.put_int("REA", dlh.reason);
            writer.put_fixed_string("DQM", &dlh.dest_qmgr_name);
            writer.put_fixed_string("DQN", &dlh.dest_q_name);
            writer.put_int("ENC", dlh.encoding);
            writer.put_int("CCSI", dlh.coded_char_set_id);
            writer.put_fixed_string("FORM", &dlh.format);
            writer.put_int("PAT", dlh.put_appl_type);
            writer.put_fixed_string("PAN", &dlh.put_appl_name);
            writer.put_fixed_string("PD", &dlh.put_date);
            writer.put_fixed_string("PT", &dlh.put_time);
        }
        HeaderKind::Transmission => {
            let xqh = parse_xqh(buffer, order)?;
            writer.put_fixed_string("RQN", &xqh.remote_q_name);
            writer.put_fixed_string("RQM", &xqh.remote_qmgr_name);
            emit_md_v1(&xqh.msg_desc, &mut writer);
        }
    }

    Ok(ExtractedHeader {
        kind,
        payload_len: payload.len(),
        fields,
    })
}
