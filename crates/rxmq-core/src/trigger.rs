//! Trigger message decoding.
//!
//! A trigger monitor passes `MQTM` through an input stem; a program started
//! by a trigger monitor receives `MQTMC2` as its argument string. Each caller
//! convention accepts only its own layout and reports the other one as a
//! mismatch.

use rxmq_wire::ByteOrder;
use rxmq_wire::constants::{
    MQTM_LENGTH, MQTM_STRUC_ID, MQTM_VERSION_1, MQTMC_STRUC_ID, MQTMC_VERSION_2, MQTMC2_LENGTH,
};
use rxmq_wire::layout::{CompactTrigger, build_tmc2, parse_tm, parse_tmc2};
use tracing::debug;

use crate::codec::StemWriter;
use crate::context::{ConnectionContext, queue_manager_of};
use crate::error::{TriggerError, TriggerForm};
use crate::fields::FieldSet;

/// Tag of the synthesized compact trigger, kept out of the inventory.
pub const COMPACT_TRIGGER_TAG: &str = "PL";

/// Trigger bytes and the convention they arrived through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerInput<'a> {
    /// Contents of `.1` from an input stem.
    Stem(&'a [u8]),
    /// The raw argument string.
    Raw(&'a [u8]),
}

impl<'a> TriggerInput<'a> {
    #[must_use]
    pub const fn form(self) -> TriggerForm {
        match self {
            Self::Stem(_) => TriggerForm::Message,
            Self::Raw(_) => TriggerForm::Compact,
        }
    }

    #[must_use]
    pub const fn bytes(self) -> &'a [u8] {
        match self {
            Self::Stem(bytes) | Self::Raw(bytes) => bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedTrigger {
    pub form: TriggerForm,
    pub fields: FieldSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Detected {
    Message,
    Compact,
}

/// Identify the layout from the discriminator and version.
fn detect(data: &[u8], form: TriggerForm, order: ByteOrder) -> Result<Detected, TriggerError> {
    let Some(struc_id) = data.first_chunk::<4>() else {
        return Err(match form {
            TriggerForm::Message => TriggerError::CannotLocateHeader { length: data.len() },
            TriggerForm::Compact => TriggerError::CannotFindHeader { length: data.len() },
        });
    };
    let by_id = match struc_id {
        id if id == MQTM_STRUC_ID => Detected::Message,
        id if id == MQTMC_STRUC_ID => Detected::Compact,
        other => {
            return Err(TriggerError::UnknownHeader {
                found: String::from_utf8_lossy(other).into_owned(),
            });
        }
    };
    let Some(version) = data.get(4..8).and_then(|v| v.first_chunk::<4>()) else {
        return Err(TriggerError::UnknownVersion);
    };
    let by_version = if version == MQTMC_VERSION_2 {
        Detected::Compact
    } else if order.i32_from(*version) == MQTM_VERSION_1 {
        Detected::Message
    } else {
        return Err(TriggerError::UnknownVersion);
    };

    let (expected, required) = match form {
        TriggerForm::Message => (Detected::Message, MQTM_LENGTH),
        TriggerForm::Compact => (Detected::Compact, MQTMC2_LENGTH),
    };
    if by_id != expected {
        return Err(TriggerError::HeaderMismatch { expected: form });
    }
    if by_version != expected {
        return Err(TriggerError::VersionMismatch { expected: form });
    }
    if data.len() < required {
        return Err(match form {
            TriggerForm::Message => TriggerError::ShortTrigger { length: data.len() },
            TriggerForm::Compact => TriggerError::ShortCompactTrigger { length: data.len() },
        });
    }
    Ok(expected)
}

/// Split a trigger message into fields.
///
/// For `MQTM` the compact form a started program would receive is added as
/// `PL`, with the queue manager taken from `ctx`.
pub fn decode_trigger(
    input: TriggerInput<'_>,
    ctx: Option<&ConnectionContext>,
    order: ByteOrder,
) -> Result<DecodedTrigger, TriggerError> {
    let form = input.form();
    let data = input.bytes();
    let detected = detect(data, form, order)?;
    debug!(?form, length = data.len(), "decoding trigger");

    let mut fields = FieldSet::new();
    let mut writer = StemWriter::without_inventory(&mut fields, "");
    match detected {
        Detected::Message => {
            let tm = parse_tm(data, order)?;
            writer.put_fixed_string("QN", &tm.q_name);
            writer.put_fixed_string("PN", &tm.process_name);
            writer.put_fixed_string("TD", &tm.trigger_data);
            writer.put_int("AT", tm.appl_type);
            writer.put_fixed_string("AID", &tm.appl_id);
            writer.put_fixed_string("ED", &tm.env_data);
            writer.put_fixed_string("UD", &tm.user_data);

            let qmgr = queue_manager_of(ctx);
            let compact = CompactTrigger::from_tm(&tm, qmgr.as_bytes());
            fields.push_unlisted(COMPACT_TRIGGER_TAG, build_tmc2(&compact));
        }
        Detected::Compact => {
            let tmc = parse_tmc2(data)?;
            writer.put_fixed_string("QN", &tmc.q_name);
            writer.put_fixed_string("PN", &tmc.process_name);
            writer.put_fixed_string("TD", &tmc.trigger_data);
            writer.put_fixed_string("AID", &tmc.appl_id);
            writer.put_fixed_string("ED", &tmc.env_data);
            writer.put_fixed_string("UD", &tmc.user_data);
            writer.put_fixed_string("QM", &tmc.qmgr_name);
        }
    }

    Ok(DecodedTrigger { form, fields })
}

#[cfg(test)]
mod tests {
    use rxmq_wire::fixed;
    use rxmq_wire::layout::{TriggerMessage, build_tm};

    use super::*;

    const ORDER: ByteOrder = ByteOrder::Little;

    fn sample_tm() -> TriggerMessage {
        TriggerMessage {
            q_name: fixed(b"APP.INITQ", b' '),
            process_name: fixed(b"APP.PROC", b' '),
            appl_type: 6,
            ..TriggerMessage::default()
        }
    }

    #[test]
    fn test_message_form_adds_compact_payload() {
        let buffer = build_tm(&sample_tm(), ORDER);
        let ctx = ConnectionContext::connected("QM1");

        let decoded = decode_trigger(TriggerInput::Stem(&buffer), Some(&ctx), ORDER).unwrap();
        assert_eq!(decoded.form, TriggerForm::Message);
        assert_eq!(decoded.fields.inventory().as_str(), "QN PN TD AT AID ED UD");
        assert_eq!(decoded.fields.get("AT"), Some(&b"6"[..]));

        let compact = decoded.fields.get(COMPACT_TRIGGER_TAG).unwrap();
        assert_eq!(compact.len(), MQTMC2_LENGTH);
        assert_eq!(&compact[..8], b"TMC    2");
        assert_eq!(&compact[168..172], b"   6");
        assert_eq!(&compact[684..687], b"QM1");
        assert!(compact[687..].iter().all(|&b| b == b' '));
    }

    #[test]
    fn test_compact_form_without_connection() {
        let tm = sample_tm();
        let compact = build_tmc2(&CompactTrigger::from_tm(&tm, b""));

        let decoded = decode_trigger(TriggerInput::Raw(&compact), None, ORDER).unwrap();
        assert_eq!(decoded.fields.inventory().as_str(), "QN PN TD AID ED UD QM");
        assert_eq!(decoded.fields.get("QM").map(<[u8]>::len), Some(48));
        assert!(decoded.fields.get(COMPACT_TRIGGER_TAG).is_none());
    }

    #[test]
    fn test_conventions_reject_each_other() {
        let tm = build_tm(&sample_tm(), ORDER);
        let tmc = build_tmc2(&CompactTrigger::default());

        let err = decode_trigger(TriggerInput::Raw(&tm), None, ORDER).unwrap_err();
        assert_eq!(err.to_string(), "Header mismatch (2<>C)");
        assert_eq!(err.code(), -16);

        let err = decode_trigger(TriggerInput::Stem(&tmc), None, ORDER).unwrap_err();
        assert_eq!(err.to_string(), "Header mismatch (1<>1)");
        assert_eq!(err.code(), -14);
    }

    #[test]
    fn test_detection_failures() {
        let cases: [(TriggerInput<'_>, i32); 6] = [
            (TriggerInput::Stem(b"TM "), -8),
            (TriggerInput::Raw(b"TM "), -11),
            (TriggerInput::Stem(b"XYZ 0000"), -12),
            (TriggerInput::Stem(b"TM  \x07\0\0\0"), -13),
            (TriggerInput::Stem(b"TM     2"), -15),
            (TriggerInput::Stem(b"TM  \x01\0\0\0short"), -18),
        ];
        for (input, code) in cases {
            let err = decode_trigger(input, None, ORDER).unwrap_err();
            assert_eq!(err.code(), code, "{input:?}");
        }
    }
}
