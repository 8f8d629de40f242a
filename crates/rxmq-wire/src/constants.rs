//! MQ constants used by the layouts in this crate.
//!
//! Only the values this crate reads, writes or defaults are listed; the full
//! named-constant table lives in `rxmq-symbols`.

// =============================================================================
// Structure identifiers
// =============================================================================

pub const MQMD_STRUC_ID: &[u8; 4] = b"MD  ";
pub const MQDLH_STRUC_ID: &[u8; 4] = b"DLH ";
pub const MQXQH_STRUC_ID: &[u8; 4] = b"XQH ";
pub const MQTM_STRUC_ID: &[u8; 4] = b"TM  ";
pub const MQTMC_STRUC_ID: &[u8; 4] = b"TMC ";

/// Character version field of the compact trigger message.
pub const MQTMC_VERSION_2: &[u8; 4] = b"   2";
pub const MQTM_VERSION_1: i32 = 1;
pub const MQDLH_VERSION_1: i32 = 1;
pub const MQXQH_VERSION_1: i32 = 1;

// =============================================================================
// Structure lengths
// =============================================================================

pub const MQMD_LENGTH_1: usize = 324;
pub const MQMD_LENGTH_2: usize = 364;
pub const MQDLH_LENGTH: usize = 172;
pub const MQXQH_LENGTH: usize = 104 + MQMD_LENGTH_1;
pub const MQTM_LENGTH: usize = 684;
pub const MQTMC2_LENGTH: usize = 732;
pub const MQCFH_LENGTH: usize = 36;

/// Type, structure length and parameter id shared by every PCF element.
pub const PCF_PREFIX_LENGTH: usize = 12;
pub const MQCFIN_LENGTH: usize = 16;
pub const MQCFGR_LENGTH: usize = 16;
pub const MQCFST_FIXED_LENGTH: usize = 20;
pub const MQCFBS_FIXED_LENGTH: usize = 16;
pub const MQCFSL_FIXED_LENGTH: usize = 24;

// =============================================================================
// PCF structure types
// =============================================================================

pub const MQCFT_COMMAND: i32 = 1;
pub const MQCFT_RESPONSE: i32 = 2;
pub const MQCFT_INTEGER: i32 = 3;
pub const MQCFT_STRING: i32 = 4;
pub const MQCFT_INTEGER_LIST: i32 = 5;
pub const MQCFT_STRING_LIST: i32 = 6;
pub const MQCFT_EVENT: i32 = 7;
pub const MQCFT_BYTE_STRING: i32 = 9;
pub const MQCFT_GROUP: i32 = 20;

// =============================================================================
// PCF command codes
// =============================================================================

pub const MQCMD_INQUIRE_Q_MGR: i32 = 2;
pub const MQCMD_INQUIRE_PROCESS: i32 = 7;
pub const MQCMD_INQUIRE_Q: i32 = 13;
pub const MQCMD_INQUIRE_Q_NAMES: i32 = 18;
pub const MQCMD_INQUIRE_PROCESS_NAMES: i32 = 19;
pub const MQCMD_INQUIRE_CHANNEL_NAMES: i32 = 20;
pub const MQCMD_INQUIRE_CHANNEL: i32 = 25;
pub const MQCMD_PING_Q_MGR: i32 = 40;
pub const MQCMD_INQUIRE_Q_STATUS: i32 = 41;
pub const MQCMD_INQUIRE_CHANNEL_STATUS: i32 = 42;
pub const MQCMD_CONFIG_EVENT: i32 = 43;
pub const MQCMD_Q_MGR_EVENT: i32 = 44;
pub const MQCMD_PERFM_EVENT: i32 = 45;
pub const MQCMD_CHANNEL_EVENT: i32 = 46;
pub const MQCMD_LOGGER_EVENT: i32 = 91;
pub const MQCMD_COMMAND_EVENT: i32 = 99;

// =============================================================================
// PCF parameter ids with special formatting
// =============================================================================

pub const MQIACF_ERROR_IDENTIFIER: i32 = 1013;
pub const MQIACF_AUX_ERROR_DATA_INT_1: i32 = 1070;
pub const MQIACF_AUX_ERROR_DATA_INT_2: i32 = 1071;
pub const MQIACH_SSL_RETURN_CODE: i32 = 1533;

// =============================================================================
// Default field values
// =============================================================================

pub const MQOT_Q: i32 = 1;
pub const MQOT_NONE: i32 = 0;
pub const MQMT_DATAGRAM: i32 = 8;
pub const MQEI_UNLIMITED: i32 = -1;
pub const MQFB_NONE: i32 = 0;
pub const MQENC_NATIVE: i32 = 0x222;
pub const MQCCSI_Q_MGR: i32 = 0;
pub const MQCCSI_APPL: i32 = -3;
pub const MQPRI_PRIORITY_AS_Q_DEF: i32 = -1;
pub const MQPRI_PRIORITY_AS_PUBLISHED: i32 = -3;
pub const MQPER_PERSISTENCE_AS_Q_DEF: i32 = 2;
pub const MQOL_UNDEFINED: i32 = -1;
pub const MQWI_UNLIMITED: i32 = -1;
pub const MQMO_MATCH_MSG_ID: i32 = 1;
pub const MQMO_MATCH_CORREL_ID: i32 = 2;
pub const MQRL_UNDEFINED: i32 = -1;
pub const MQACTP_NEW: i32 = 1;
pub const MQSL_DEFAULT_PUB_LEVEL: i32 = 9;
pub const MQSL_DEFAULT_SUB_LEVEL: i32 = 1;
pub const MQHM_NONE: i64 = 0;

/// Default name pattern for model-queue opens.
pub const DEFAULT_DYNAMIC_Q_NAME: &[u8] = b"AMQ.*";
/// Eight blanks: `MQFMT_NONE`.
pub const MQFMT_NONE: &[u8; 8] = b"        ";
/// `MQGS_NOT_IN_GROUP`, `MQSS_NOT_A_SEGMENT`, `MQSEG_INHIBITED`.
pub const MQ_STATUS_BLANK: u8 = b' ';
