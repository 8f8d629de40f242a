//! `LASTRC`-style status variables and the return string.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec::StemWriter;
use crate::store::VariableStore;

/// Entry point that produced a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Event,
    Header,
    Trigger,
    Constants,
}

impl Operation {
    /// Name written to `LASTOP` and the return string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Event => "RXMQEVNT",
            Self::Header => "RXMQHXT",
            Self::Trigger => "RXMQTM",
            Self::Constants => "RXMQCONS",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome codes of one call.
///
/// `rc` is the engine's own result; `cc` and `ac` carry the completion and
/// reason codes of whatever the engine delegated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub rc: i32,
    pub cc: i32,
    pub ac: i32,
    pub op: Operation,
}

impl Status {
    #[must_use]
    pub const fn ok(op: Operation) -> Self {
        Self {
            rc: 0,
            cc: 0,
            ac: 0,
            op,
        }
    }

    #[must_use]
    pub const fn failed(op: Operation, rc: i32) -> Self {
        Self {
            rc,
            cc: 0,
            ac: 0,
            op,
        }
    }
}

/// Word for a completion code.
#[must_use]
pub const fn completion_text(cc: i32) -> &'static str {
    match cc {
        0 => "OK",
        1 => "WARNING",
        2 => "FAILED",
        _ => "UNKNOWN",
    }
}

/// Build the return string `"rc cc ac OP text"`.
///
/// A negative `rc` shows `message` alone; otherwise the completion word
/// comes first, followed by `message` when there is one.
#[must_use]
pub fn return_string(status: &Status, message: &str) -> String {
    let text = if status.rc < 0 {
        message.to_string()
    } else if message.is_empty() {
        completion_text(status.cc).to_string()
    } else {
        format!("{} {message}", completion_text(status.cc))
    };
    format!(
        "{} {} {} {} {text}",
        status.rc, status.cc, status.ac, status.op
    )
}

/// Write the status variables under each prefix and return the return string.
pub fn report<S: VariableStore + ?Sized>(
    store: &mut S,
    prefixes: &[String],
    status: &Status,
    message: &str,
) -> String {
    let line = return_string(status, message);
    for prefix in prefixes {
        let mut writer = StemWriter::without_inventory(&mut *store, prefix);
        writer.put_int("LASTRC", status.rc);
        writer.put_int("LASTCC", status.cc);
        writer.put_int("LASTAC", status.ac);
        writer.put_raw("LASTOP", status.op.as_str().as_bytes());
        writer.put_raw("LASTMSG", line.as_bytes());
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{LEGACY_STATUS_PREFIX, STATUS_PREFIX};
    use crate::store::MemoryStore;

    #[test]
    fn test_return_strings() {
        let ok = Status::ok(Operation::Header);
        assert_eq!(return_string(&ok, ""), "0 0 0 RXMQHXT OK");

        let warned = Status {
            cc: 1,
            ac: 2079,
            ..Status::ok(Operation::Event)
        };
        assert_eq!(
            return_string(&warned, "truncated"),
            "0 1 2079 RXMQEVNT WARNING truncated"
        );

        let failed = Status::failed(Operation::Trigger, -13);
        assert_eq!(
            return_string(&failed, "Unknown Version"),
            "-13 0 0 RXMQTM Unknown Version"
        );

        let odd = Status {
            cc: 7,
            ..Status::ok(Operation::Constants)
        };
        assert_eq!(return_string(&odd, ""), "0 7 0 RXMQCONS UNKNOWN");
    }

    #[test]
    fn test_report_writes_every_prefix() {
        let mut store = MemoryStore::new();
        let prefixes = vec![STATUS_PREFIX.to_string(), LEGACY_STATUS_PREFIX.to_string()];
        let status = Status::failed(Operation::Header, -10);

        let line = report(&mut store, &prefixes, &status, "Unknown Header");
        assert_eq!(line, "-10 0 0 RXMQHXT Unknown Header");
        for prefix in &prefixes {
            assert_eq!(store.get_str(&format!("{prefix}LASTRC")).unwrap(), "-10");
            assert_eq!(store.get_str(&format!("{prefix}LASTOP")).unwrap(), "RXMQHXT");
            assert_eq!(store.get_str(&format!("{prefix}LASTMSG")).unwrap(), line);
        }
        assert!(!store.contains("RXMQ.ZLIST"));
        assert_eq!(store.len(), 10);
    }
}
