//! Integer byte order of MQ structures.

use serde::{Deserialize, Serialize};

/// Byte order used for every binary integer in a buffer.
///
/// MQ writes structures in the queue manager's native encoding, so the
/// default follows the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Whatever the running host uses.
    #[default]
    Native,
    /// Least significant byte first (`MQENC_INTEGER_REVERSED`).
    Little,
    /// Most significant byte first (`MQENC_INTEGER_NORMAL`).
    Big,
}

impl ByteOrder {
    #[must_use]
    pub const fn is_little(self) -> bool {
        match self {
            Self::Native => cfg!(target_endian = "little"),
            Self::Little => true,
            Self::Big => false,
        }
    }

    #[must_use]
    pub const fn i32_from(self, bytes: [u8; 4]) -> i32 {
        if self.is_little() {
            i32::from_le_bytes(bytes)
        } else {
            i32::from_be_bytes(bytes)
        }
    }

    #[must_use]
    pub const fn i64_from(self, bytes: [u8; 8]) -> i64 {
        if self.is_little() {
            i64::from_le_bytes(bytes)
        } else {
            i64::from_be_bytes(bytes)
        }
    }

    #[must_use]
    pub const fn i32_to(self, value: i32) -> [u8; 4] {
        if self.is_little() {
            value.to_le_bytes()
        } else {
            value.to_be_bytes()
        }
    }

    #[must_use]
    pub const fn i64_to(self, value: i64) -> [u8; 8] {
        if self.is_little() {
            value.to_le_bytes()
        } else {
            value.to_be_bytes()
        }
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Little => write!(f, "little"),
            Self::Big => write!(f, "big"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_orders() {
        assert_eq!(ByteOrder::Little.i32_to(1), [1, 0, 0, 0]);
        assert_eq!(ByteOrder::Big.i32_to(1), [0, 0, 0, 1]);
        assert_eq!(ByteOrder::Big.i32_from([0, 0, 1, 0]), 256);
        assert_eq!(ByteOrder::Little.i64_from([2, 0, 0, 0, 0, 0, 0, 0]), 2);
    }

    #[test]
    fn test_native_matches_host() {
        assert_eq!(ByteOrder::Native.i32_to(7), 7i32.to_ne_bytes());
    }
}
