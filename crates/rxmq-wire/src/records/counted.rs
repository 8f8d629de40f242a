use crate::constants::MQCCSI_APPL;

/// Variable-length string (`MQCHARV`).
///
/// `buf_size` is the capacity the caller asked for, `length` the number of
/// meaningful bytes. The payload is owned by the record and released with
/// it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountedString {
    pub buf_size: i32,
    pub length: i32,
    pub ccsid: i32,
    pub data: Option<Vec<u8>>,
}

impl Default for CountedString {
    fn default() -> Self {
        Self {
            buf_size: 0,
            length: 0,
            ccsid: MQCCSI_APPL,
            data: None,
        }
    }
}

impl CountedString {
    /// Build a counted string whose buffer exactly fits `text`.
    #[must_use]
    pub fn from_bytes(text: &[u8], ccsid: i32) -> Self {
        let len = i32::try_from(text.len()).unwrap_or(i32::MAX);
        Self {
            buf_size: len,
            length: len,
            ccsid,
            data: Some(text.to_vec()),
        }
    }

    /// Meaningful bytes: the payload cut to `length`.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        let data = self.data.as_deref().unwrap_or_default();
        let len = usize::try_from(self.length).unwrap_or(0).min(data.len());
        &data[..len]
    }

    #[must_use]
    pub fn is_allocated(&self) -> bool {
        self.data.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let vs = CountedString::default();
        assert_eq!(vs.ccsid, MQCCSI_APPL);
        assert!(!vs.is_allocated());
        assert!(vs.payload().is_empty());
    }

    #[test]
    fn test_payload_clamped() {
        let mut vs = CountedString::from_bytes(b"SPORTS/RESULTS", 1208);
        vs.length = 6;
        assert_eq!(vs.payload(), b"SPORTS");
        vs.length = 99;
        assert_eq!(vs.payload(), b"SPORTS/RESULTS");
    }
}
