//! Transmission-queue header (`MQXQH`) layout.
//!
//! | Offset | Length | Field                   |
//! |--------|--------|-------------------------|
//! | 0      | 4      | StrucId `"XQH "`        |
//! | 4      | 4      | Version                 |
//! | 8      | 48     | RemoteQName             |
//! | 56     | 48     | RemoteQMgrName          |
//! | 104    | 324    | MsgDesc (`MQMD` v1)     |

use super::md::{read_md_v1, write_md_v1};
use crate::constants::{MQXQH_LENGTH, MQXQH_STRUC_ID, MQXQH_VERSION_1};
use crate::cursor::{Cursor, Encoder};
use crate::error::{Result, struc_id_mismatch};
use crate::order::ByteOrder;
use crate::records::{MessageDescriptor, MqChar48};

/// Header prefixed to messages on a transmission queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransmissionHeader {
    pub version: i32,
    pub remote_q_name: MqChar48,
    pub remote_qmgr_name: MqChar48,
    pub msg_desc: MessageDescriptor,
}

impl Default for TransmissionHeader {
    fn default() -> Self {
        Self {
            version: MQXQH_VERSION_1,
            remote_q_name: [b' '; 48],
            remote_qmgr_name: [b' '; 48],
            msg_desc: MessageDescriptor::default(),
        }
    }
}

/// Parse the fixed 428-byte header at the start of `data`.
pub fn parse_xqh(data: &[u8], order: ByteOrder) -> Result<TransmissionHeader> {
    let mut cursor = Cursor::new(data, order);
    let struc_id = cursor.take(4)?;
    if struc_id != MQXQH_STRUC_ID {
        return Err(struc_id_mismatch("XQH ", struc_id));
    }
    Ok(TransmissionHeader {
        version: cursor.read_i32()?,
        remote_q_name: cursor.read_array()?,
        remote_qmgr_name: cursor.read_array()?,
        msg_desc: read_md_v1(&mut cursor)?,
    })
}

#[must_use]
pub fn build_xqh(xqh: &TransmissionHeader, order: ByteOrder) -> Vec<u8> {
    let mut enc = Encoder::with_capacity(MQXQH_LENGTH, order);
    enc.put_bytes(MQXQH_STRUC_ID)
        .put_i32(xqh.version)
        .put_bytes(&xqh.remote_q_name)
        .put_bytes(&xqh.remote_qmgr_name);
    write_md_v1(&mut enc, &xqh.msg_desc);
    enc.finish()
}
