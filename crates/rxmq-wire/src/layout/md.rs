//! Message descriptor (`MQMD`) layout.
//!
//! | Offset | Length | Field              |
//! |--------|--------|--------------------|
//! | 0      | 4      | StrucId `"MD  "`   |
//! | 4      | 4      | Version            |
//! | 8      | 4      | Report             |
//! | 12     | 4      | MsgType            |
//! | 16     | 4      | Expiry             |
//! | 20     | 4      | Feedback           |
//! | 24     | 4      | Encoding           |
//! | 28     | 4      | CodedCharSetId     |
//! | 32     | 8      | Format             |
//! | 40     | 4      | Priority           |
//! | 44     | 4      | Persistence        |
//! | 48     | 24     | MsgId              |
//! | 72     | 24     | CorrelId           |
//! | 96     | 4      | BackoutCount       |
//! | 100    | 48     | ReplyToQ           |
//! | 148    | 48     | ReplyToQMgr        |
//! | 196    | 12     | UserIdentifier     |
//! | 208    | 32     | AccountingToken    |
//! | 240    | 32     | ApplIdentityData   |
//! | 272    | 4      | PutApplType        |
//! | 276    | 28     | PutApplName        |
//! | 304    | 8      | PutDate            |
//! | 312    | 8      | PutTime            |
//! | 320    | 4      | ApplOriginData     |
//! | 324    | 24     | GroupId (v2)       |
//! | 348    | 4      | MsgSeqNumber (v2)  |
//! | 352    | 4      | Offset (v2)        |
//! | 356    | 4      | MsgFlags (v2)      |
//! | 360    | 4      | OriginalLength (v2)|

use crate::constants::{MQMD_LENGTH_1, MQMD_LENGTH_2, MQMD_STRUC_ID};
use crate::cursor::{Cursor, Encoder};
use crate::error::{Result, struc_id_mismatch};
use crate::order::ByteOrder;
use crate::records::MessageDescriptor;

/// Read the version 1 part of a descriptor at the cursor.
///
/// Version 2 fields keep their defaults; the version field is taken from
/// the data as-is.
pub fn read_md_v1(cursor: &mut Cursor<'_>) -> Result<MessageDescriptor> {
    let struc_id = cursor.take(4)?;
    if struc_id != MQMD_STRUC_ID {
        return Err(struc_id_mismatch("MD  ", struc_id));
    }
    Ok(MessageDescriptor {
        version: cursor.read_i32()?,
        report: cursor.read_i32()?,
        msg_type: cursor.read_i32()?,
        expiry: cursor.read_i32()?,
        feedback: cursor.read_i32()?,
        encoding: cursor.read_i32()?,
        coded_char_set_id: cursor.read_i32()?,
        format: cursor.read_array()?,
        priority: cursor.read_i32()?,
        persistence: cursor.read_i32()?,
        msg_id: cursor.read_array()?,
        correl_id: cursor.read_array()?,
        backout_count: cursor.read_i32()?,
        reply_to_q: cursor.read_array()?,
        reply_to_qmgr: cursor.read_array()?,
        user_identifier: cursor.read_array()?,
        accounting_token: cursor.read_array()?,
        appl_identity_data: cursor.read_array()?,
        put_appl_type: cursor.read_i32()?,
        put_appl_name: cursor.read_array()?,
        put_date: cursor.read_array()?,
        put_time: cursor.read_array()?,
        appl_origin_data: cursor.read_array()?,
        ..MessageDescriptor::default()
    })
}

/// Parse a descriptor; version 2 fields are read when the version asks for them.
pub fn parse_md(data: &[u8], order: ByteOrder) -> Result<MessageDescriptor> {
    let mut cursor = Cursor::new(data, order);
    let mut md = read_md_v1(&mut cursor)?;
    if md.version >= 2 {
        md.group_id = cursor.read_array()?;
        md.msg_seq_number = cursor.read_i32()?;
        md.offset = cursor.read_i32()?;
        md.msg_flags = cursor.read_i32()?;
        md.original_length = cursor.read_i32()?;
    }
    Ok(md)
}

/// Encode a descriptor; 364 bytes for version 2 and above, 324 otherwise.
#[must_use]
pub fn build_md(md: &MessageDescriptor, order: ByteOrder) -> Vec<u8> {
    let mut enc = Encoder::with_capacity(MQMD_LENGTH_2, order);
    write_md(&mut enc, md);
    enc.finish()
}

fn write_md(enc: &mut Encoder, md: &MessageDescriptor) {
    write_md_v1(enc, md);
    if md.version >= 2 {
        enc.put_bytes(&md.group_id)
            .put_i32(md.msg_seq_number)
            .put_i32(md.offset)
            .put_i32(md.msg_flags)
            .put_i32(md.original_length);
    }
}

/// Write the 324-byte version 1 layout, whatever `md.version` says.
pub(crate) fn write_md_v1(enc: &mut Encoder, md: &MessageDescriptor) {
    enc.put_bytes(MQMD_STRUC_ID)
        .put_i32(md.version)
        .put_i32(md.report)
        .put_i32(md.msg_type)
        .put_i32(md.expiry)
        .put_i32(md.feedback)
        .put_i32(md.encoding)
        .put_i32(md.coded_char_set_id)
        .put_bytes(&md.format)
        .put_i32(md.priority)
        .put_i32(md.persistence)
        .put_bytes(&md.msg_id)
        .put_bytes(&md.correl_id)
        .put_i32(md.backout_count)
        .put_bytes(&md.reply_to_q)
        .put_bytes(&md.reply_to_qmgr)
        .put_bytes(&md.user_identifier)
        .put_bytes(&md.accounting_token)
        .put_bytes(&md.appl_identity_data)
        .put_i32(md.put_appl_type)
        .put_bytes(&md.put_appl_name)
        .put_bytes(&md.put_date)
        .put_bytes(&md.put_time)
        .put_bytes(&md.appl_origin_data);
}

/// Encoded length for a descriptor of the given version.
#[must_use]
pub const fn md_length(version: i32) -> usize {
    if version >= 2 {
        MQMD_LENGTH_2
    } else {
        MQMD_LENGTH_1
    }
}
