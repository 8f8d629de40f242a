//! Trigger message layouts.
//!
//! The queue manager writes the original form (`MQTM`) to an initiation
//! queue. A trigger monitor hands the compact character form (`MQTMC2`) to
//! the started program. Both share offsets up to `UserData`:
//!
//! | Offset | Length | `MQTM`               | `MQTMC2`             |
//! |--------|--------|----------------------|----------------------|
//! | 0      | 4      | StrucId `"TM  "`     | StrucId `"TMC "`     |
//! | 4      | 4      | Version (integer 1)  | Version `"   2"`     |
//! | 8      | 48     | QName                | QName                |
//! | 56     | 48     | ProcessName          | ProcessName          |
//! | 104    | 64     | TriggerData          | TriggerData          |
//! | 168    | 4      | ApplType (integer)   | ApplType (char)      |
//! | 172    | 256    | ApplId               | ApplId               |
//! | 428    | 128    | EnvData              | EnvData              |
//! | 556    | 128    | UserData             | UserData             |
//! | 684    | 48     |                      | QMgrName             |

use crate::constants::{
    MQTM_LENGTH, MQTM_STRUC_ID, MQTM_VERSION_1, MQTMC_STRUC_ID, MQTMC_VERSION_2, MQTMC2_LENGTH,
};
use crate::cursor::{Cursor, Encoder, fixed, until_nul};
use crate::error::{Result, struc_id_mismatch};
use crate::order::ByteOrder;
use crate::records::{MqChar4, MqChar48, MqChar64, MqChar128, MqChar256};

/// Original trigger message (`MQTM`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerMessage {
    pub version: i32,
    pub q_name: MqChar48,
    pub process_name: MqChar48,
    pub trigger_data: MqChar64,
    pub appl_type: i32,
    pub appl_id: MqChar256,
    pub env_data: MqChar128,
    pub user_data: MqChar128,
}

impl Default for TriggerMessage {
    fn default() -> Self {
        Self {
            version: MQTM_VERSION_1,
            q_name: [0; 48],
            process_name: [0; 48],
            trigger_data: [0; 64],
            appl_type: 0,
            appl_id: [0; 256],
            env_data: [0; 128],
            user_data: [0; 128],
        }
    }
}

/// Compact character trigger message (`MQTMC2`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactTrigger {
    pub q_name: MqChar48,
    pub process_name: MqChar48,
    pub trigger_data: MqChar64,
    pub appl_type: MqChar4,
    pub appl_id: MqChar256,
    pub env_data: MqChar128,
    pub user_data: MqChar128,
    pub qmgr_name: MqChar48,
}

impl Default for CompactTrigger {
    fn default() -> Self {
        Self {
            q_name: [b' '; 48],
            process_name: [b' '; 48],
            trigger_data: [b' '; 64],
            appl_type: [b' '; 4],
            appl_id: [b' '; 256],
            env_data: [b' '; 128],
            user_data: [b' '; 128],
            qmgr_name: [b' '; 48],
        }
    }
}

impl CompactTrigger {
    /// Re-encode an original trigger message for a queue manager.
    ///
    /// Character fields are copied unchanged, the application type becomes
    /// right-aligned decimal text and `qmgr_name` is blank padded.
    #[must_use]
    pub fn from_tm(tm: &TriggerMessage, qmgr_name: &[u8]) -> Self {
        let appl_type = format!("{:>4}", tm.appl_type);
        Self {
            q_name: tm.q_name,
            process_name: tm.process_name,
            trigger_data: tm.trigger_data,
            appl_type: if appl_type.len() == 4 {
                fixed(appl_type.as_bytes(), b' ')
            } else {
                [b' '; 4]
            },
            appl_id: tm.appl_id,
            env_data: tm.env_data,
            user_data: tm.user_data,
            qmgr_name: fixed(until_nul(qmgr_name), b' '),
        }
    }
}

/// Parse an original trigger message.
pub fn parse_tm(data: &[u8], order: ByteOrder) -> Result<TriggerMessage> {
    let mut cursor = Cursor::new(data, order);
    let struc_id = cursor.take(4)?;
    if struc_id != MQTM_STRUC_ID {
        return Err(struc_id_mismatch("TM  ", struc_id));
    }
    Ok(TriggerMessage {
        version: cursor.read_i32()?,
        q_name: cursor.read_array()?,
        process_name: cursor.read_array()?,
        trigger_data: cursor.read_array()?,
        appl_type: cursor.read_i32()?,
        appl_id: cursor.read_array()?,
        env_data: cursor.read_array()?,
        user_data: cursor.read_array()?,
    })
}

#[must_use]
pub fn build_tm(tm: &TriggerMessage, order: ByteOrder) -> Vec<u8> {
    let mut enc = Encoder::with_capacity(MQTM_LENGTH, order);
    enc.put_bytes(MQTM_STRUC_ID)
        .put_i32(tm.version)
        .put_bytes(&tm.q_name)
        .put_bytes(&tm.process_name)
        .put_bytes(&tm.trigger_data)
        .put_i32(tm.appl_type)
        .put_bytes(&tm.appl_id)
        .put_bytes(&tm.env_data)
        .put_bytes(&tm.user_data);
    enc.finish()
}

/// Parse a compact trigger message; the version text is not checked here.
pub fn parse_tmc2(data: &[u8]) -> Result<CompactTrigger> {
    let mut cursor = Cursor::new(data, ByteOrder::Native);
    let struc_id = cursor.take(4)?;
    if struc_id != MQTMC_STRUC_ID {
        return Err(struc_id_mismatch("TMC ", struc_id));
    }
    cursor.skip(4)?;
    Ok(CompactTrigger {
        q_name: cursor.read_array()?,
        process_name: cursor.read_array()?,
        trigger_data: cursor.read_array()?,
        appl_type: cursor.read_array()?,
        appl_id: cursor.read_array()?,
        env_data: cursor.read_array()?,
        user_data: cursor.read_array()?,
        qmgr_name: cursor.read_array()?,
    })
}

#[must_use]
pub fn build_tmc2(tmc: &CompactTrigger) -> Vec<u8> {
    let mut enc = Encoder::with_capacity(MQTMC2_LENGTH, ByteOrder::Native);
    enc.put_bytes(MQTMC_STRUC_ID)
        .put_bytes(MQTMC_VERSION_2)
        .put_bytes(&tmc.q_name)
        .put_bytes(&tmc.process_name)
        .put_bytes(&tmc.trigger_data)
        .put_bytes(&tmc.appl_type)
        .put_bytes(&tmc.appl_id)
        .put_bytes(&tmc.env_data)
        .put_bytes(&tmc.user_data)
        .put_bytes(&tmc.qmgr_name);
    enc.finish()
}
