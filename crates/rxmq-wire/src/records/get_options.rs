use super::{MqByte16, MqChar48};
use crate::constants::{MQ_STATUS_BLANK, MQHM_NONE, MQMO_MATCH_CORREL_ID, MQMO_MATCH_MSG_ID, MQRL_UNDEFINED};

/// Get-message options (`MQGMO`), versions 1 to 4.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetMessageOptions {
    pub version: i32,
    pub options: i32,
    pub wait_interval: i32,
    pub resolved_q_name: MqChar48,
    // Version 2
    pub match_options: i32,
    pub group_status: u8,
    pub segment_status: u8,
    pub segmentation: u8,
    // Version 3
    pub msg_token: MqByte16,
    pub returned_length: i32,
    // Version 4
    pub msg_handle: i64,
}

impl Default for GetMessageOptions {
    fn default() -> Self {
        Self {
            version: 1,
            options: 0,
            wait_interval: 0,
            resolved_q_name: [0; 48],
            match_options: MQMO_MATCH_MSG_ID | MQMO_MATCH_CORREL_ID,
            group_status: MQ_STATUS_BLANK,
            segment_status: MQ_STATUS_BLANK,
            segmentation: MQ_STATUS_BLANK,
            msg_token: [0; 16],
            returned_length: MQRL_UNDEFINED,
            msg_handle: MQHM_NONE,
        }
    }
}
