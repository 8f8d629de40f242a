//! Dead-letter header (`MQDLH`) layout.
//!
//! | Offset | Length | Field          |
//! |--------|--------|----------------|
//! | 0      | 4      | StrucId `"DLH "` |
//! | 4      | 4      | Version        |
//! | 8      | 4      | Reason         |
//! | 12     | 48     | DestQName      |
//! | 60     | 48     | DestQMgrName   |
//! | 108    | 4      | Encoding       |
//! | 112    | 4      | CodedCharSetId |
//! | 116    | 8      | Format         |
//! | 124    | 4      | PutApplType    |
//! | 128    | 28     | PutApplName    |
//! | 156    | 8      | PutDate        |
//! | 164    | 8      | PutTime        |

use crate::constants::{
    MQCCSI_Q_MGR, MQDLH_LENGTH, MQDLH_STRUC_ID, MQDLH_VERSION_1, MQENC_NATIVE, MQFMT_NONE,
};
use crate::cursor::{Cursor, Encoder};
use crate::error::{Result, struc_id_mismatch};
use crate::order::ByteOrder;
use crate::records::{MqChar8, MqChar28, MqChar48};

/// Header prefixed to messages placed on a dead-letter queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadLetterHeader {
    pub version: i32,
    pub reason: i32,
    pub dest_q_name: MqChar48,
    pub dest_qmgr_name: MqChar48,
    pub encoding: i32,
    pub coded_char_set_id: i32,
    pub format: MqChar8,
    pub put_appl_type: i32,
    pub put_appl_name: MqChar28,
    pub put_date: MqChar8,
    pub put_time: MqChar8,
}

impl Default for DeadLetterHeader {
    fn default() -> Self {
        Self {
            version: MQDLH_VERSION_1,
            reason: 0,
            dest_q_name: [b' '; 48],
            dest_qmgr_name: [b' '; 48],
            encoding: MQENC_NATIVE,
            coded_char_set_id: MQCCSI_Q_MGR,
            format: *MQFMT_NONE,
            put_appl_type: 0,
            put_appl_name: [b' '; 28],
            put_date: [b' '; 8],
            put_time: [b' '; 8],
        }
    }
}

/// Parse the fixed 172-byte header at the start of `data`.
pub fn parse_dlh(data: &[u8], order: ByteOrder) -> Result<DeadLetterHeader> {
    let mut cursor = Cursor::new(data, order);
    let struc_id = cursor.take(4)?;
    if struc_id != MQDLH_STRUC_ID {
        return Err(struc_id_mismatch("DLH ", struc_id));
    }
    Ok(DeadLetterHeader {
        version: cursor.read_i32()?,
        reason: cursor.read_i32()?,
        dest_q_name: cursor.read_array()?,
        dest_qmgr_name: cursor.read_array()?,
        encoding: cursor.read_i32()?,
        coded_char_set_id: cursor.read_i32()?,
        format: cursor.read_array()?,
        put_appl_type: cursor.read_i32()?,
        put_appl_name: cursor.read_array()?,
        put_date: cursor.read_array()?,
        put_time: cursor.read_array()?,
    })
}

#[must_use]
pub fn build_dlh(dlh: &DeadLetterHeader, order: ByteOrder) -> Vec<u8> {
    let mut enc = Encoder::with_capacity(MQDLH_LENGTH, order);
    enc.put_bytes(MQDLH_STRUC_ID)
        .put_i32(dlh.version)
        .put_i32(dlh.reason)
        .put_bytes(&dlh.dest_q_name)
        .put_bytes(&dlh.dest_qmgr_name)
        .put_i32(dlh.encoding)
        .put_i32(dlh.coded_char_set_id)
        .put_bytes(&dlh.format)
        .put_i32(dlh.put_appl_type)
        .put_bytes(&dlh.put_appl_name)
        .put_bytes(&dlh.put_date)
        .put_bytes(&dlh.put_time);
    enc.finish()
}
