use super::MqChar48;
use crate::constants::{MQACTP_NEW, MQHM_NONE, MQSL_DEFAULT_PUB_LEVEL, MQWI_UNLIMITED};

/// Put-message options (`MQPMO`), versions 1 to 3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutMessageOptions {
    pub version: i32,
    pub options: i32,
    pub timeout: i32,
    pub context: i32,
    pub known_dest_count: i32,
    pub unknown_dest_count: i32,
    pub invalid_dest_count: i32,
    pub resolved_q_name: MqChar48,
    pub resolved_qmgr_name: MqChar48,
    // Version 2
    pub recs_present: i32,
    // Version 3
    pub original_msg_handle: i64,
    pub new_msg_handle: i64,
    pub action: i32,
    pub pub_level: i32,
}

impl Default for PutMessageOptions {
    fn default() -> Self {
        Self {
            version: 1,
            options: 0,
            timeout: MQWI_UNLIMITED,
            context: 0,
            known_dest_count: 0,
            unknown_dest_count: 0,
            invalid_dest_count: 0,
            resolved_q_name: [0; 48],
            resolved_qmgr_name: [0; 48],
            recs_present: 0,
            original_msg_handle: MQHM_NONE,
            new_msg_handle: MQHM_NONE,
            action: MQACTP_NEW,
            pub_level: MQSL_DEFAULT_PUB_LEVEL,
        }
    }
}
