use super::{MqByte24, MqByte32, MqChar4, MqChar8, MqChar12, MqChar28, MqChar32, MqChar48};
use crate::constants::{
    MQCCSI_Q_MGR, MQEI_UNLIMITED, MQENC_NATIVE, MQFB_NONE, MQFMT_NONE, MQMT_DATAGRAM,
    MQOL_UNDEFINED, MQPER_PERSISTENCE_AS_Q_DEF, MQPRI_PRIORITY_AS_Q_DEF,
};

/// Message descriptor (`MQMD`), versions 1 and 2.
///
/// The default is the version 2 layout with `version` set to 1, which is
/// what a fresh descriptor handed to a put or get looks like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDescriptor {
    pub version: i32,
    pub report: i32,
    pub msg_type: i32,
    pub expiry: i32,
    pub feedback: i32,
    pub encoding: i32,
    pub coded_char_set_id: i32,
    pub format: MqChar8,
    pub priority: i32,
    pub persistence: i32,
    pub msg_id: MqByte24,
    pub correl_id: MqByte24,
    pub backout_count: i32,
    pub reply_to_q: MqChar48,
    pub reply_to_qmgr: MqChar48,
    pub user_identifier: MqChar12,
    pub accounting_token: MqByte32,
    pub appl_identity_data: MqChar32,
    pub put_appl_type: i32,
    pub put_appl_name: MqChar28,
    pub put_date: MqChar8,
    pub put_time: MqChar8,
    pub appl_origin_data: MqChar4,
    // Version 2
    pub group_id: MqByte24,
    pub msg_seq_number: i32,
    pub offset: i32,
    pub msg_flags: i32,
    pub original_length: i32,
}

impl Default for MessageDescriptor {
    fn default() -> Self {
        Self {
            version: 1,
            report: 0,
            msg_type: MQMT_DATAGRAM,
            expiry: MQEI_UNLIMITED,
            feedback: MQFB_NONE,
            encoding: MQENC_NATIVE,
            coded_char_set_id: MQCCSI_Q_MGR,
            format: *MQFMT_NONE,
            priority: MQPRI_PRIORITY_AS_Q_DEF,
            persistence: MQPER_PERSISTENCE_AS_Q_DEF,
            msg_id: [0; 24],
            correl_id: [0; 24],
            backout_count: 0,
            reply_to_q: [0; 48],
            reply_to_qmgr: [0; 48],
            user_identifier: [0; 12],
            accounting_token: [0; 32],
            appl_identity_data: [0; 32],
            put_appl_type: 0,
            put_appl_name: [0; 28],
            put_date: [0; 8],
            put_time: [0; 8],
            appl_origin_data: [0; 4],
            group_id: [0; 24],
            msg_seq_number: 1,
            offset: 0,
            msg_flags: 0,
            original_length: MQOL_UNDEFINED,
        }
    }
}
