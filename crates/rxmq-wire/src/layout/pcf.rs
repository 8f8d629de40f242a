//! PCF (Programmable Command Format) layout.
//!
//! A PCF message is a 36-byte `MQCFH` header followed by `ParameterCount`
//! elements. Every element starts with the same three integers:
//!
//! | Offset | Length | Field       |
//! |--------|--------|-------------|
//! | 0      | 4      | Type        |
//! | 4      | 4      | StrucLength |
//! | 8      | 4      | Parameter   |
//!
//! and occupies exactly `StrucLength` bytes, so a reader can step over
//! element types it does not understand.
//!
//! | Type            | Body after the prefix                              |
//! |-----------------|----------------------------------------------------|
//! | `MQCFIN`  (3)   | Value                                              |
//! | `MQCFST`  (4)   | CodedCharSetId, StringLength, String               |
//! | `MQCFSL`  (6)   | CodedCharSetId, Count, StringLength, Strings       |
//! | `MQCFBS`  (9)   | StringLength, String                               |
//! | `MQCFGR`  (20)  | ParameterCount (the group's elements follow it)    |

use crate::constants::{
    MQCFBS_FIXED_LENGTH, MQCFGR_LENGTH, MQCFH_LENGTH, MQCFIN_LENGTH, MQCFSL_FIXED_LENGTH,
    MQCFST_FIXED_LENGTH, MQCFT_BYTE_STRING, MQCFT_GROUP, MQCFT_INTEGER, MQCFT_STRING,
    MQCFT_STRING_LIST, PCF_PREFIX_LENGTH,
};
use crate::cursor::{Cursor, Encoder};
use crate::error::{Result, WireError};
use crate::order::ByteOrder;

/// PCF header (`MQCFH`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcfHeader {
    pub kind: i32,
    pub struc_length: i32,
    pub version: i32,
    pub command: i32,
    pub msg_seq_number: i32,
    pub control: i32,
    pub comp_code: i32,
    pub reason: i32,
    pub parameter_count: i32,
}

impl PcfHeader {
    /// Header for a single-message stream of the given type.
    #[must_use]
    pub fn new(kind: i32, command: i32, reason: i32) -> Self {
        Self {
            kind,
            struc_length: MQCFH_LENGTH as i32,
            version: 1,
            command,
            msg_seq_number: 1,
            control: 1,
            comp_code: i32::from(reason != 0),
            reason,
            parameter_count: 0,
        }
    }
}

/// Read the header at the start of `data`.
pub fn parse_pcf_header(data: &[u8], order: ByteOrder) -> Result<PcfHeader> {
    let mut cursor = Cursor::new(data, order);
    Ok(PcfHeader {
        kind: cursor.read_i32()?,
        struc_length: cursor.read_i32()?,
        version: cursor.read_i32()?,
        command: cursor.read_i32()?,
        msg_seq_number: cursor.read_i32()?,
        control: cursor.read_i32()?,
        comp_code: cursor.read_i32()?,
        reason: cursor.read_i32()?,
        parameter_count: cursor.read_i32()?,
    })
}

#[must_use]
pub fn build_pcf_header(header: &PcfHeader, order: ByteOrder) -> Vec<u8> {
    let mut enc = Encoder::with_capacity(MQCFH_LENGTH, order);
    write_header(&mut enc, header);
    enc.finish()
}

fn write_header(enc: &mut Encoder, header: &PcfHeader) {
    enc.put_i32(header.kind)
        .put_i32(header.struc_length)
        .put_i32(header.version)
        .put_i32(header.command)
        .put_i32(header.msg_seq_number)
        .put_i32(header.control)
        .put_i32(header.comp_code)
        .put_i32(header.reason)
        .put_i32(header.parameter_count);
}

/// One decoded PCF element, borrowing its string data from the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PcfElement<'a> {
    Integer {
        parameter: i32,
        value: i32,
    },
    String {
        parameter: i32,
        ccsid: i32,
        value: &'a [u8],
    },
    ByteString {
        parameter: i32,
        value: &'a [u8],
    },
    StringList {
        parameter: i32,
        ccsid: i32,
        values: Vec<&'a [u8]>,
    },
    Group {
        parameter: i32,
        count: usize,
    },
    /// A type this reader does not interpret (integer lists, filters, ...).
    Unsupported {
        kind: i32,
        parameter: i32,
    },
}

impl PcfElement<'_> {
    #[must_use]
    pub const fn parameter(&self) -> i32 {
        match self {
            Self::Integer { parameter, .. }
            | Self::String { parameter, .. }
            | Self::ByteString { parameter, .. }
            | Self::StringList { parameter, .. }
            | Self::Group { parameter, .. }
            | Self::Unsupported { parameter, .. } => *parameter,
        }
    }
}

/// Read the element at the cursor and advance past its declared length.
///
/// The body is read through a window limited to `StrucLength`, so string
/// lengths that point outside their element are rejected.
pub fn read_element<'a>(cursor: &mut Cursor<'a>) -> Result<PcfElement<'a>> {
    let start = cursor.position();
    let mut prefix = cursor.window(PCF_PREFIX_LENGTH)?;
    let kind = prefix.read_i32()?;
    let struc_length = prefix.read_i32()?;
    let parameter = prefix.read_i32()?;

    let length = usize::try_from(struc_length)
        .ok()
        .filter(|&len| len >= PCF_PREFIX_LENGTH)
        .ok_or(WireError::LengthTooSmall {
            offset: start,
            length: struc_length,
            minimum: PCF_PREFIX_LENGTH,
        })?;

    let mut body = cursor.window(length)?;
    body.skip(PCF_PREFIX_LENGTH)?;
    let element = match kind {
        MQCFT_INTEGER => {
            require(start, struc_length, MQCFIN_LENGTH)?;
            PcfElement::Integer {
                parameter,
                value: body.read_i32()?,
            }
        }
        MQCFT_STRING => {
            require(start, struc_length, MQCFST_FIXED_LENGTH)?;
            let ccsid = body.read_i32()?;
            let len = body.read_len("string length")?;
            PcfElement::String {
                parameter,
                ccsid,
                value: body.take(len)?,
            }
        }
        MQCFT_BYTE_STRING => {
            require(start, struc_length, MQCFBS_FIXED_LENGTH)?;
            let len = body.read_len("string length")?;
            PcfElement::ByteString {
                parameter,
                value: body.take(len)?,
            }
        }
        MQCFT_STRING_LIST => {
            require(start, struc_length, MQCFSL_FIXED_LENGTH)?;
            let ccsid = body.read_i32()?;
            let count = body.read_len("count")?;
            let stride = body.read_len("string length")?;
            let total = count.checked_mul(stride).ok_or(WireError::Truncated {
                offset: body.position(),
                needed: usize::MAX,
                available: body.remaining(),
            })?;
            body.peek(total)?;
            let mut values = Vec::with_capacity(count);
            for _ in 0..count {
                values.push(body.take(stride)?);
            }
            PcfElement::StringList {
                parameter,
                ccsid,
                values,
            }
        }
        MQCFT_GROUP => {
            require(start, struc_length, MQCFGR_LENGTH)?;
            PcfElement::Group {
                parameter,
                count: body.read_len("parameter count")?,
            }
        }
        _ => PcfElement::Unsupported { kind, parameter },
    };
    cursor.skip(length)?;
    Ok(element)
}

fn require(offset: usize, length: i32, minimum: usize) -> Result<()> {
    if usize::try_from(length).is_ok_and(|len| len >= minimum) {
        Ok(())
    } else {
        Err(WireError::LengthTooSmall {
            offset,
            length,
            minimum,
        })
    }
}

/// Builds PCF streams element by element.
///
/// Elements added after [`PcfBuilder::group`] belong to that group until
/// its count is used up; only top-level elements count towards the header's
/// `ParameterCount`.
#[derive(Debug, Clone)]
pub struct PcfBuilder {
    header: PcfHeader,
    order: ByteOrder,
    body: Encoder,
    top_level: i32,
    pending_children: usize,
}

impl PcfBuilder {
    #[must_use]
    pub fn new(header: PcfHeader, order: ByteOrder) -> Self {
        Self {
            header,
            order,
            body: Encoder::with_capacity(256, order),
            top_level: 0,
            pending_children: 0,
        }
    }

    fn count_element(&mut self) {
        if self.pending_children > 0 {
            self.pending_children -= 1;
        } else {
            self.top_level += 1;
        }
    }

    #[must_use]
    pub fn integer(mut self, parameter: i32, value: i32) -> Self {
        self.count_element();
        self.body
            .put_i32(MQCFT_INTEGER)
            .put_i32(MQCFIN_LENGTH as i32)
            .put_i32(parameter)
            .put_i32(value);
        self
    }

    /// String element; the text is padded with blanks to a multiple of four.
    #[must_use]
    pub fn string(mut self, parameter: i32, value: &[u8]) -> Self {
        self.count_element();
        let padded = value.len().next_multiple_of(4);
        self.body
            .put_i32(MQCFT_STRING)
            .put_i32(to_i32(MQCFST_FIXED_LENGTH + padded))
            .put_i32(parameter)
            .put_i32(0)
            .put_i32(to_i32(value.len()))
            .put_padded(value, padded, b' ');
        self
    }

    #[must_use]
    pub fn byte_string(mut self, parameter: i32, value: &[u8]) -> Self {
        self.count_element();
        let padded = value.len().next_multiple_of(4);
        self.body
            .put_i32(MQCFT_BYTE_STRING)
            .put_i32(to_i32(MQCFBS_FIXED_LENGTH + padded))
            .put_i32(parameter)
            .put_i32(to_i32(value.len()))
            .put_padded(value, padded, 0);
        self
    }

    /// String list with every entry blank padded to `stride` bytes.
    #[must_use]
    pub fn string_list(mut self, parameter: i32, values: &[&[u8]], stride: usize) -> Self {
        self.count_element();
        let data_len = (values.len() * stride).next_multiple_of(4);
        self.body
            .put_i32(MQCFT_STRING_LIST)
            .put_i32(to_i32(MQCFSL_FIXED_LENGTH + data_len))
            .put_i32(parameter)
            .put_i32(0)
            .put_i32(to_i32(values.len()))
            .put_i32(to_i32(stride));
        for value in values {
            self.body.put_padded(value, stride, b' ');
        }
        self.body
            .put_padded(&[], data_len - values.len() * stride, b' ');
        self
    }

    /// Group header; the next `count` elements become its members.
    #[must_use]
    pub fn group(mut self, parameter: i32, count: usize) -> Self {
        self.count_element();
        self.body
            .put_i32(MQCFT_GROUP)
            .put_i32(MQCFGR_LENGTH as i32)
            .put_i32(parameter)
            .put_i32(to_i32(count));
        self.pending_children += count;
        self
    }

    /// Element of an arbitrary type with an opaque body.
    #[must_use]
    pub fn raw(mut self, kind: i32, parameter: i32, body: &[u8]) -> Self {
        self.count_element();
        self.body
            .put_i32(kind)
            .put_i32(to_i32(PCF_PREFIX_LENGTH + body.len()))
            .put_i32(parameter)
            .put_bytes(body);
        self
    }

    /// Header plus elements, with `ParameterCount` set to the top-level count.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        let header = PcfHeader {
            parameter_count: self.top_level,
            ..self.header
        };
        let mut bytes = build_pcf_header(&header, self.order);
        bytes.extend_from_slice(&self.body.finish());
        bytes
    }
}

fn to_i32(len: usize) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}
