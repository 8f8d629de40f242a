//! PCF event decoding.
//!
//! An event message is an `MQCFH` header followed by `ParameterCount`
//! elements. Each element becomes one output field named after its
//! attribute, so a queue-full event yields `TYPE`, `NAME`, `REA`, `Q_NAME`
//! and so on. A group element turns the elements inside it into
//! `GROUP.INNER` fields.

use rxmq_symbols::{SymbolTable, strip_prefix};
use rxmq_wire::constants::{
    MQCFH_LENGTH, MQCFT_EVENT, MQCFT_RESPONSE, MQCMD_CHANNEL_EVENT, MQCMD_COMMAND_EVENT,
    MQCMD_CONFIG_EVENT, MQCMD_INQUIRE_CHANNEL, MQCMD_INQUIRE_CHANNEL_NAMES,
    MQCMD_INQUIRE_CHANNEL_STATUS, MQCMD_INQUIRE_PROCESS, MQCMD_INQUIRE_PROCESS_NAMES,
    MQCMD_INQUIRE_Q, MQCMD_INQUIRE_Q_MGR, MQCMD_INQUIRE_Q_NAMES, MQCMD_INQUIRE_Q_STATUS,
    MQCMD_LOGGER_EVENT, MQCMD_PERFM_EVENT, MQCMD_PING_Q_MGR, MQCMD_Q_MGR_EVENT,
    MQIACF_AUX_ERROR_DATA_INT_1, MQIACF_AUX_ERROR_DATA_INT_2, MQIACF_ERROR_IDENTIFIER,
    MQIACH_SSL_RETURN_CODE,
};
use rxmq_wire::layout::{PcfElement, PcfHeader, parse_pcf_header, read_element};
use rxmq_wire::{Cursor, until_nul};
use tracing::{debug, trace};

use crate::error::EventError;
use crate::fields::FieldSet;
use crate::options::DecodeOptions;

/// Commands that identify an event message.
const EVENT_COMMANDS: &[i32] = &[
    MQCMD_Q_MGR_EVENT,
    MQCMD_PERFM_EVENT,
    MQCMD_CHANNEL_EVENT,
    MQCMD_CONFIG_EVENT,
    MQCMD_COMMAND_EVENT,
    MQCMD_LOGGER_EVENT,
];

/// Commands whose replies are decoded when responses are accepted.
const RESPONSE_COMMANDS: &[i32] = &[
    MQCMD_INQUIRE_Q_MGR,
    MQCMD_INQUIRE_PROCESS,
    MQCMD_INQUIRE_Q,
    MQCMD_INQUIRE_Q_NAMES,
    MQCMD_INQUIRE_PROCESS_NAMES,
    MQCMD_INQUIRE_CHANNEL_NAMES,
    MQCMD_INQUIRE_CHANNEL,
    MQCMD_PING_Q_MGR,
    MQCMD_INQUIRE_Q_STATUS,
    MQCMD_INQUIRE_CHANNEL_STATUS,
];

/// Integer attributes that carry error codes and print as hex.
const HEX_ATTRIBUTES: &[i32] = &[
    MQIACF_ERROR_IDENTIFIER,
    MQIACF_AUX_ERROR_DATA_INT_1,
    MQIACF_AUX_ERROR_DATA_INT_2,
    MQIACH_SSL_RETURN_CODE,
];

/// What kind of PCF message was decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    Event,
    Response,
}

impl StreamKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Event => "EVENT",
            Self::Response => "RESPONSE",
        }
    }
}

/// A fully decoded PCF message, not yet written anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedStream {
    pub kind: StreamKind,
    pub header: PcfHeader,
    /// Reason name without its `MQRC_` prefix, or the decimal reason.
    pub name: String,
    pub fields: FieldSet,
    /// Top-level elements read.
    pub elements: usize,
    /// Offset just past the last element.
    pub consumed: usize,
}

/// Decode an event (or, optionally, a command response) buffer.
///
/// Nothing is produced unless the whole buffer decodes.
pub fn decode_attribute_stream(
    buffer: &[u8],
    options: &DecodeOptions,
    symbols: &SymbolTable,
) -> Result<DecodedStream, EventError> {
    let order = options.byte_order;
    let Some(kind_bytes) = buffer.first_chunk::<4>() else {
        return Err(EventError::CannotVerifyHeader {
            length: buffer.len(),
        });
    };
    let kind = match order.i32_from(*kind_bytes) {
        MQCFT_EVENT => StreamKind::Event,
        MQCFT_RESPONSE if options.accept_responses => StreamKind::Response,
        other => return Err(EventError::NotEventHeader { kind: other }),
    };
    if buffer.len() < MQCFH_LENGTH {
        return Err(EventError::ShortHeader {
            length: buffer.len(),
            required: MQCFH_LENGTH,
        });
    }
    let header = parse_pcf_header(buffer, order)?;
    if let Ok(declared) = usize::try_from(header.struc_length)
        && buffer.len() < declared
    {
        return Err(EventError::ShortHeader {
            length: buffer.len(),
            required: declared,
        });
    }

    let categories = match kind {
        StreamKind::Event => EVENT_COMMANDS,
        StreamKind::Response => RESPONSE_COMMANDS,
    };
    if !categories.contains(&header.command) {
        return Err(EventError::UnknownCategory {
            command: header.command,
        });
    }

    let name = match symbols.reason_name(header.reason) {
        Some(full) => strip_prefix(full).to_string(),
        None if options.strict_reasons => {
            return Err(EventError::UnknownReason {
                reason: header.reason,
            });
        }
        None => header.reason.to_string(),
    };

    let count = usize::try_from(header.parameter_count)
        .ok()
        .filter(|&count| count > 0)
        .ok_or(EventError::NoElements)?;

    debug!(
        kind = kind.as_str(),
        command = header.command,
        reason = header.reason,
        name = %name,
        count,
        "decoding PCF message"
    );

    let mut fields = FieldSet::new();
    push(&mut fields, "TYPE".to_string(), kind.as_str().as_bytes().to_vec())?;
    push(&mut fields, "NAME".to_string(), name.as_bytes().to_vec())?;
    push(&mut fields, "REA".to_string(), header.reason.to_string().into_bytes())?;

    let mut cursor = Cursor::new(buffer, order);
    cursor.skip(MQCFH_LENGTH)?;
    for _ in 0..count {
        let element = read_element(&mut cursor)?;
        if let PcfElement::Group { parameter, count } = element {
            let outer = attribute_tag(symbols, parameter);
            trace!(group = %outer, count, "group");
            for _ in 0..count {
                let offset = cursor.position();
                let inner = read_element(&mut cursor)?;
                if let PcfElement::Group { parameter, .. } = inner {
                    return Err(EventError::NestedGroup { parameter, offset });
                }
                let tag = format!("{outer}.{}", attribute_tag(symbols, inner.parameter()));
                emit_element(&mut fields, tag, &inner)?;
            }
        } else {
            let tag = attribute_tag(symbols, element.parameter());
            emit_element(&mut fields, tag, &element)?;
        }
    }

    if cursor.position() != buffer.len() {
        return Err(EventError::TrailingData {
            consumed: cursor.position(),
            length: buffer.len(),
        });
    }

    Ok(DecodedStream {
        kind,
        header,
        name,
        fields,
        elements: count,
        consumed: cursor.position(),
    })
}

fn attribute_tag(symbols: &SymbolTable, parameter: i32) -> String {
    symbols
        .attribute_name(parameter)
        .map_or_else(|| parameter.to_string(), str::to_string)
}

/// Text form of an integer element.
#[must_use]
pub fn format_integer(parameter: i32, value: i32) -> String {
    let unsigned = value.cast_unsigned();
    if HEX_ATTRIBUTES.contains(&parameter) {
        format!("{unsigned:08X}")
    } else {
        unsigned.to_string()
    }
}

fn emit_element(
    fields: &mut FieldSet,
    tag: String,
    element: &PcfElement<'_>,
) -> Result<(), EventError> {
    match element {
        PcfElement::Integer { parameter, value } => {
            trace!(tag = %tag, value, "integer");
            push(fields, tag, format_integer(*parameter, *value).into_bytes())
        }
        PcfElement::String { value, .. } => {
            trace!(tag = %tag, len = value.len(), "string");
            push(fields, tag, until_nul(value).to_vec())
        }
        PcfElement::ByteString { value, .. } => {
            trace!(tag = %tag, len = value.len(), "byte string");
            push(fields, tag, value.to_vec())
        }
        PcfElement::StringList { values, .. } => {
            trace!(tag = %tag, count = values.len(), "string list");
            if values.is_empty() {
                return Ok(());
            }
            push(fields, format!("{tag}.0"), values.len().to_string().into_bytes())?;
            for (index, value) in values.iter().enumerate() {
                push(fields, format!("{tag}.{}", index + 1), until_nul(value).to_vec())?;
            }
            Ok(())
        }
        PcfElement::Unsupported { kind, .. } => {
            trace!(tag = %tag, kind, "skipped element type");
            Ok(())
        }
        PcfElement::Group { .. } => Ok(()),
    }
}

fn push(fields: &mut FieldSet, tag: String, value: Vec<u8>) -> Result<(), EventError> {
    let size = tag.len() + value.len();
    fields
        .try_push(tag, value)
        .map_err(|source| EventError::Allocation { size, source })
}
