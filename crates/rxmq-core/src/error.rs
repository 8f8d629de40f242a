//! Error types for the marshalling engine.
//!
//! Each entry point has its own enum. `code()` gives the numeric return code
//! scripts test against and `Display` gives the message placed in
//! `LASTMSG`, so both stay stable across releases.

use std::collections::TryReserveError;

use rxmq_symbols::SymbolError;
use rxmq_wire::WireError;
use thiserror::Error;

/// Code reported for failures that have no entry-point specific number.
pub const UNKNOWN_FAILURE: i32 = -99;

/// Argument validation shared by every entry point.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Bad number of parms")]
    Count { expected: usize, found: usize },

    #[error("Null input stem var")]
    NullInput,

    #[error("Zero input stem var")]
    EmptyInput,

    #[error("Null output stem var")]
    NullOutput,

    #[error("Zero output stem var")]
    EmptyOutput,
}

impl ArgumentError {
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::Count { .. } => -1,
            Self::NullInput => -2,
            Self::EmptyInput => -3,
            Self::NullOutput => -4,
            Self::EmptyOutput => -5,
        }
    }
}

/// Misuse of the scalar codec by the code driving it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Opaque byte fields are staged through a fixed buffer.
    #[error("field {tag} is {size} bytes, staging limit is {limit}")]
    StagingLimit {
        tag: String,
        size: usize,
        limit: usize,
    },
}

impl CodecError {
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::StagingLimit { .. } => -33,
        }
    }
}

/// Failures while filling a record from stem variables.
///
/// Absent variables never fail; they leave the default in place.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarshalError {
    #[error("cannot allocate {size} bytes for {tag}")]
    Allocation {
        tag: String,
        size: usize,
        #[source]
        source: TryReserveError,
    },
}

impl MarshalError {
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::Allocation { .. } => -31,
        }
    }
}

/// Failures of the PCF event decoder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("No input data")]
    NoInputData,

    #[error("Cannot verify Header")]
    CannotVerifyHeader { length: usize },

    #[error("Not an Event Header")]
    NotEventHeader { kind: i32 },

    #[error("Too short for an Event")]
    ShortHeader { length: usize, required: usize },

    #[error("Unknown Event Category")]
    UnknownCategory { command: i32 },

    #[error("Unknown Event Type")]
    UnknownReason { reason: i32 },

    #[error("No elements in the Event")]
    NoElements,

    #[error("malloc failure, check reason code")]
    Allocation {
        size: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("Data length is not equal to specified value")]
    LengthMismatch { declared: usize, actual: usize },

    #[error("Event element overruns the data")]
    Truncated(#[from] WireError),

    #[error("Nested group in the Event")]
    NestedGroup { parameter: i32, offset: usize },

    #[error("Data left after the last Event element")]
    TrailingData { consumed: usize, length: usize },
}

impl EventError {
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::NoInputData => -6,
            Self::CannotVerifyHeader { .. } => -8,
            Self::NotEventHeader { .. } => -10,
            Self::ShortHeader { .. } => -11,
            Self::UnknownCategory { .. } => -12,
            Self::UnknownReason { .. } => -13,
            Self::NoElements => -14,
            Self::Allocation { .. } => -15,
            Self::LengthMismatch { .. } => -16,
            Self::Truncated(_) => -17,
            Self::NestedGroup { .. } => -18,
            Self::TrailingData { .. } => -19,
        }
    }
}

/// Failures of the dead-letter / transmission header extractor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeaderError {
    #[error("No input data")]
    NoInputData,

    #[error("Cannot verify Header")]
    CannotVerifyHeader { length: usize },

    #[error("Unknown Header")]
    UnknownHeader { found: String },

    #[error("Too short for a DLH")]
    ShortDeadLetter { length: usize },

    #[error("Too short for a XQH")]
    ShortTransmission { length: usize },

    #[error("malloc failure, check reason code")]
    Allocation {
        size: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("Data length is not equal to specified value")]
    LengthMismatch { declared: usize, actual: usize },

    #[error("Header layout is damaged")]
    Layout(#[from] WireError),
}

impl HeaderError {
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::NoInputData => -6,
            Self::CannotVerifyHeader { .. } => -8,
            Self::UnknownHeader { .. } => -10,
            Self::ShortDeadLetter { .. } => -11,
            Self::ShortTransmission { .. } => -12,
            Self::Allocation { .. } => -13,
            Self::LengthMismatch { .. } => -14,
            Self::Layout(_) => -15,
        }
    }
}

/// Which trigger layout a caller convention expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerForm {
    /// `MQTM`, delivered through a stem (`.0` / `.1`).
    Message,
    /// `MQTMC2`, delivered as the raw argument string.
    Compact,
}

impl TriggerForm {
    const fn mismatch_tag(self) -> &'static str {
        match self {
            Self::Message => "1<>1",
            Self::Compact => "2<>C",
        }
    }
}

/// Failures of the trigger decoder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TriggerError {
    #[error("No input data")]
    NoInputData,

    #[error("Zero input data")]
    ZeroInputData,

    #[error("Cannot locate Header")]
    CannotLocateHeader { length: usize },

    #[error("Cannot find Header")]
    CannotFindHeader { length: usize },

    #[error("Unknown Header")]
    UnknownHeader { found: String },

    #[error("Unknown Version")]
    UnknownVersion,

    #[error("Header mismatch ({})", .expected.mismatch_tag())]
    HeaderMismatch { expected: TriggerForm },

    #[error("Version mismatch ({})", .expected.mismatch_tag())]
    VersionMismatch { expected: TriggerForm },

    #[error("Too short for a TM")]
    ShortTrigger { length: usize },

    #[error("Too short for a TMC")]
    ShortCompactTrigger { length: usize },

    #[error("malloc failure, check reason code")]
    Allocation {
        size: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("Data length is not equal to specified value")]
    LengthMismatch { declared: usize, actual: usize },

    #[error("Trigger layout is damaged")]
    Layout(#[from] WireError),
}

impl TriggerError {
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::NoInputData => -6,
            Self::ZeroInputData => -7,
            Self::CannotLocateHeader { .. } => -8,
            Self::CannotFindHeader { .. } => -11,
            Self::UnknownHeader { .. } => -12,
            Self::UnknownVersion => -13,
            Self::HeaderMismatch {
                expected: TriggerForm::Message,
            } => -14,
            Self::VersionMismatch {
                expected: TriggerForm::Message,
            } => -15,
            Self::HeaderMismatch {
                expected: TriggerForm::Compact,
            } => -16,
            Self::VersionMismatch {
                expected: TriggerForm::Compact,
            } => -17,
            Self::ShortTrigger { .. } => -18,
            Self::ShortCompactTrigger { .. } => -19,
            Self::Allocation { .. } => -20,
            Self::LengthMismatch { .. } => -21,
            Self::Layout(_) => -22,
        }
    }
}

/// Reading the `.0` / `.1` input stem, shared by every decoding entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InputError {
    NoData,
    Missing,
    Allocation {
        size: usize,
        source: TryReserveError,
    },
    LengthMismatch {
        declared: usize,
        actual: usize,
    },
}

impl From<InputError> for EventError {
    fn from(err: InputError) -> Self {
        match err {
            InputError::NoData => Self::NoInputData,
            InputError::Missing => Self::LengthMismatch {
                declared: 0,
                actual: 0,
            },
            InputError::Allocation { size, source } => Self::Allocation { size, source },
            InputError::LengthMismatch { declared, actual } => {
                Self::LengthMismatch { declared, actual }
            }
        }
    }
}

impl From<InputError> for HeaderError {
    fn from(err: InputError) -> Self {
        match err {
            InputError::NoData => Self::NoInputData,
            InputError::Missing => Self::LengthMismatch {
                declared: 0,
                actual: 0,
            },
            InputError::Allocation { size, source } => Self::Allocation { size, source },
            InputError::LengthMismatch { declared, actual } => {
                Self::LengthMismatch { declared, actual }
            }
        }
    }
}

impl From<InputError> for TriggerError {
    fn from(err: InputError) -> Self {
        match err {
            InputError::NoData => Self::NoInputData,
            InputError::Missing => Self::ZeroInputData,
            InputError::Allocation { size, source } => Self::Allocation { size, source },
            InputError::LengthMismatch { declared, actual } => {
                Self::LengthMismatch { declared, actual }
            }
        }
    }
}

/// Any engine failure.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Marshal(#[from] MarshalError),

    #[error(transparent)]
    Event(#[from] EventError),

    #[error(transparent)]
    Header(#[from] HeaderError),

    #[error(transparent)]
    Trigger(#[from] TriggerError),

    #[error(transparent)]
    Symbol(#[from] SymbolError),

    #[error(transparent)]
    Wire(#[from] WireError),
}

impl Error {
    /// Numeric return code for `LASTRC`.
    #[must_use]
    pub const fn code(&self) -> i32 {
        match self {
            Self::Argument(err) => err.code(),
            Self::Codec(err) => err.code(),
            Self::Marshal(err) => err.code(),
            Self::Event(err) => err.code(),
            Self::Header(err) => err.code(),
            Self::Trigger(err) => err.code(),
            Self::Symbol(_) | Self::Wire(_) => UNKNOWN_FAILURE,
        }
    }
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_codes_in_check_order() {
        let errors = [
            ArgumentError::Count {
                expected: 2,
                found: 1,
            },
            ArgumentError::NullInput,
            ArgumentError::EmptyInput,
            ArgumentError::NullOutput,
            ArgumentError::EmptyOutput,
        ];
        let codes: Vec<i32> = errors.iter().map(ArgumentError::code).collect();
        assert_eq!(codes, vec![-1, -2, -3, -4, -5]);
        assert_eq!(errors[0].to_string(), "Bad number of parms");
    }

    #[test]
    fn test_trigger_mismatch_messages() {
        let err = TriggerError::HeaderMismatch {
            expected: TriggerForm::Message,
        };
        assert_eq!(err.to_string(), "Header mismatch (1<>1)");
        assert_eq!(err.code(), -14);

        let err = TriggerError::VersionMismatch {
            expected: TriggerForm::Compact,
        };
        assert_eq!(err.to_string(), "Version mismatch (2<>C)");
        assert_eq!(err.code(), -17);
    }

    #[test]
    fn test_aggregate_keeps_code_and_message() {
        let err = Error::from(HeaderError::UnknownHeader {
            found: "ABCD".to_string(),
        });
        assert_eq!(err.code(), -10);
        assert_eq!(err.to_string(), "Unknown Header");

        let err = Error::from(WireError::Truncated {
            offset: 0,
            needed: 4,
            available: 0,
        });
        assert_eq!(err.code(), UNKNOWN_FAILURE);
    }

    #[test]
    fn test_missing_payload_by_entry_point() {
        assert_eq!(TriggerError::from(InputError::Missing).code(), -7);
        assert_eq!(HeaderError::from(InputError::Missing).code(), -14);
        assert_eq!(EventError::from(InputError::Missing).code(), -16);
    }
}
