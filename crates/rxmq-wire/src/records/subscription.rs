use super::{CountedString, MqByte24, MqByte32, MqByte40, MqChar12, MqChar32, MqChar48};
use crate::constants::{MQEI_UNLIMITED, MQPRI_PRIORITY_AS_PUBLISHED, MQSL_DEFAULT_SUB_LEVEL};

/// Subscription descriptor (`MQSD`), version 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionDescriptor {
    pub version: i32,
    pub options: i32,
    pub object_name: MqChar48,
    pub alternate_user_id: MqChar12,
    pub alternate_security_id: MqByte40,
    pub sub_expiry: i32,
    pub object_string: CountedString,
    pub sub_name: CountedString,
    pub sub_user_data: CountedString,
    pub sub_correl_id: MqByte24,
    pub pub_priority: i32,
    pub pub_accounting_token: MqByte32,
    pub pub_appl_identity_data: MqChar32,
    pub selection_string: CountedString,
    pub sub_level: i32,
    pub res_object_string: CountedString,
}

impl Default for SubscriptionDescriptor {
    fn default() -> Self {
        Self {
            version: 1,
            options: 0,
            object_name: [0; 48],
            alternate_user_id: [0; 12],
            alternate_security_id: [0; 40],
            sub_expiry: MQEI_UNLIMITED,
            object_string: CountedString::default(),
            sub_name: CountedString::default(),
            sub_user_data: CountedString::default(),
            sub_correl_id: [0; 24],
            pub_priority: MQPRI_PRIORITY_AS_PUBLISHED,
            pub_accounting_token: [0; 32],
            pub_appl_identity_data: [0; 32],
            selection_string: CountedString::default(),
            sub_level: MQSL_DEFAULT_SUB_LEVEL,
            res_object_string: CountedString::default(),
        }
    }
}
