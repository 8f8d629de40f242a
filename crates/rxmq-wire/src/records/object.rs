use super::{CountedString, MqByte40, MqChar12, MqChar48};
use crate::constants::{DEFAULT_DYNAMIC_Q_NAME, MQOT_NONE, MQOT_Q};
use crate::cursor::fixed;

/// Object descriptor (`MQOD`), versions 1 to 4.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectDescriptor {
    pub version: i32,
    pub object_type: i32,
    pub object_name: MqChar48,
    pub object_qmgr_name: MqChar48,
    pub dynamic_q_name: MqChar48,
    pub alternate_user_id: MqChar12,
    // Version 2
    pub recs_present: i32,
    pub known_dest_count: i32,
    pub unknown_dest_count: i32,
    pub invalid_dest_count: i32,
    // Version 3
    pub alternate_security_id: MqByte40,
    pub resolved_q_name: MqChar48,
    pub resolved_qmgr_name: MqChar48,
    // Version 4
    pub object_string: CountedString,
    pub selection_string: CountedString,
    pub res_object_string: CountedString,
    pub resolved_type: i32,
}

impl Default for ObjectDescriptor {
    fn default() -> Self {
        Self {
            version: 1,
            object_type: MQOT_Q,
            object_name: [0; 48],
            object_qmgr_name: [0; 48],
            dynamic_q_name: fixed(DEFAULT_DYNAMIC_Q_NAME, 0),
            alternate_user_id: [0; 12],
            recs_present: 0,
            known_dest_count: 0,
            unknown_dest_count: 0,
            invalid_dest_count: 0,
            alternate_security_id: [0; 40],
            resolved_q_name: [0; 48],
            resolved_qmgr_name: [0; 48],
            object_string: CountedString::default(),
            selection_string: CountedString::default(),
            res_object_string: CountedString::default(),
            resolved_type: MQOT_NONE,
        }
    }
}

impl ObjectDescriptor {
    /// Default descriptor naming a single object.
    #[must_use]
    pub fn named(name: &[u8]) -> Self {
        Self {
            object_name: fixed(name, 0),
            ..Self::default()
        }
    }
}
