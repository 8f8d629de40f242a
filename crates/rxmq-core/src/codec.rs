//! Scalar codec between stem variables and record fields.
//!
//! Every value crosses the boundary as text or raw bytes. Integers are
//! decimal text, character fields are fixed width, opaque fields are copied
//! byte for byte.
//!
//! A [`StemReader`] reads `<stem><tag>` variables; a value that is absent
//! comes back as `None` and the `load_*` helpers then leave the target
//! field alone. A [`StemWriter`] writes them and records every accepted
//! write in an [`Inventory`].

use rxmq_wire::{CountedString, until_nul};
use tracing::trace;

use crate::error::{CodecError, MarshalError};
use crate::inventory::{INVENTORY_TAG, Inventory};
use crate::store::{VariableStore, field_path};

/// Largest opaque byte field the codec stages.
pub const STAGING_LIMIT: usize = 100;

/// Sub-field names of a counted string.
const COUNTED_LENGTH: &str = "0";
const COUNTED_CCSID: &str = "CCSID";
const COUNTED_DATA: &str = "1";

/// Parse decimal text the way the legacy `atol` did.
///
/// Leading blanks are skipped, one sign is accepted and digits are read up
/// to the first non-digit. Text without digits is 0. Overflow wraps.
#[must_use]
pub fn parse_int(text: &[u8]) -> i32 {
    let (negative, digits) = split_number(text);
    let magnitude = digits.iter().fold(0i32, |acc, digit| {
        acc.wrapping_mul(10).wrapping_add(i32::from(digit - b'0'))
    });
    if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    }
}

/// 64-bit counterpart of [`parse_int`].
#[must_use]
pub fn parse_int64(text: &[u8]) -> i64 {
    let (negative, digits) = split_number(text);
    let magnitude = digits.iter().fold(0i64, |acc, digit| {
        acc.wrapping_mul(10).wrapping_add(i64::from(digit - b'0'))
    });
    if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    }
}

fn split_number(text: &[u8]) -> (bool, &[u8]) {
    let start = text
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(text.len());
    let mut rest = &text[start..];
    let mut negative = false;
    if let Some((&sign, tail)) = rest.split_first()
        && (sign == b'-' || sign == b'+')
    {
        negative = sign == b'-';
        rest = tail;
    }
    let end = rest
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    (negative, &rest[..end])
}

fn counted_path(tag: &str, part: &str) -> String {
    format!("{tag}.{part}")
}

/// Reads fields from `<stem><tag>` variables.
pub struct StemReader<'a, S: VariableStore + ?Sized> {
    store: &'a S,
    stem: &'a str,
}

impl<'a, S: VariableStore + ?Sized> StemReader<'a, S> {
    pub fn new(store: &'a S, stem: &'a str) -> Self {
        Self { store, stem }
    }

    #[must_use]
    pub fn stem(&self) -> &str {
        self.stem
    }

    /// Raw value of `<stem><tag>`.
    #[must_use]
    pub fn value(&self, tag: &str) -> Option<Vec<u8>> {
        self.store.get(&field_path(self.stem, tag))
    }

    fn non_empty(&self, tag: &str) -> Option<Vec<u8>> {
        self.value(tag).filter(|value| !value.is_empty())
    }

    /// Integer field; `None` when the variable is absent or empty.
    #[must_use]
    pub fn get_int(&self, tag: &str) -> Option<i32> {
        self.non_empty(tag).map(|value| parse_int(&value))
    }

    #[must_use]
    pub fn get_int64(&self, tag: &str) -> Option<i64> {
        self.non_empty(tag).map(|value| parse_int64(&value))
    }

    /// First byte of the value.
    #[must_use]
    pub fn get_char(&self, tag: &str) -> Option<u8> {
        self.non_empty(tag)
            .and_then(|value| value.first().copied())
    }

    /// Character field of exactly `N` bytes, NUL filled after the text.
    #[must_use]
    pub fn get_fixed_string<const N: usize>(&self, tag: &str) -> Option<[u8; N]> {
        self.value(tag).map(|value| {
            let mut field = [0u8; N];
            let len = value.len().min(N);
            field[..len].copy_from_slice(&value[..len]);
            field
        })
    }

    /// Opaque bytes whose size is only known at run time.
    pub fn get_bytes(&self, tag: &str, size: usize) -> Result<Option<Vec<u8>>, CodecError> {
        if size > STAGING_LIMIT {
            return Err(CodecError::StagingLimit {
                tag: tag.to_string(),
                size,
                limit: STAGING_LIMIT,
            });
        }
        Ok(self.get_blob(tag, size))
    }

    /// Up to `max_len` bytes of the value, without the staging limit.
    #[must_use]
    pub fn get_blob(&self, tag: &str, max_len: usize) -> Option<Vec<u8>> {
        self.value(tag).map(|mut value| {
            value.truncate(max_len);
            value
        })
    }

    pub fn load_int(&self, tag: &str, target: &mut i32) {
        if let Some(value) = self.get_int(tag) {
            *target = value;
        }
    }

    pub fn load_int64(&self, tag: &str, target: &mut i64) {
        if let Some(value) = self.get_int64(tag) {
            *target = value;
        }
    }

    pub fn load_char(&self, tag: &str, target: &mut u8) {
        if let Some(value) = self.get_char(tag) {
            *target = value;
        }
    }

    pub fn load_fixed_string<const N: usize>(&self, tag: &str, target: &mut [u8; N]) {
        if let Some(value) = self.get_fixed_string::<N>(tag) {
            *target = value;
        }
    }

    /// Overwrite the leading bytes of an opaque field.
    ///
    /// A value shorter than the field leaves the remaining bytes as they
    /// were.
    pub fn load_bytes<const N: usize>(&self, tag: &str, target: &mut [u8; N]) {
        const { assert!(N <= STAGING_LIMIT, "opaque field exceeds the staging limit") };
        if let Some(value) = self.get_blob(tag, N) {
            target[..value.len()].copy_from_slice(&value);
        }
    }

    /// Fill a counted string from `<tag>.0`, `<tag>.CCSID` and `<tag>.1`.
    ///
    /// `.0` is the buffer size. A positive size allocates the payload
    /// buffer, which `.1` then fills. A `.1` longer than the buffer is not
    /// copied and leaves the length at 0.
    pub fn load_counted_string(
        &self,
        tag: &str,
        target: &mut CountedString,
    ) -> Result<(), MarshalError> {
        self.load_int(&counted_path(tag, COUNTED_LENGTH), &mut target.buf_size);
        self.load_int(&counted_path(tag, COUNTED_CCSID), &mut target.ccsid);

        let size = match usize::try_from(target.buf_size) {
            Ok(size) if size > 0 => size,
            _ => return Ok(()),
        };
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(size)
            .map_err(|source| MarshalError::Allocation {
                tag: tag.to_string(),
                size,
                source,
            })?;
        match self.value(&counted_path(tag, COUNTED_DATA)) {
            Some(payload) if payload.len() <= size => buffer.extend_from_slice(&payload),
            Some(payload) => {
                trace!(tag, size, actual = payload.len(), "counted string overflows its buffer");
            }
            None => {}
        }
        target.length = i32::try_from(buffer.len()).unwrap_or(i32::MAX);
        target.data = Some(buffer);
        Ok(())
    }
}

/// Writes fields to `<stem><tag>` variables.
pub struct StemWriter<'a, S: VariableStore + ?Sized> {
    store: &'a mut S,
    stem: String,
    inventory: Option<Inventory>,
}

impl<'a, S: VariableStore + ?Sized> StemWriter<'a, S> {
    /// Writer that records each accepted tag.
    pub fn new(store: &'a mut S, stem: &str) -> Self {
        Self {
            store,
            stem: stem.to_string(),
            inventory: Some(Inventory::new()),
        }
    }

    /// Writer that starts from an existing inventory.
    pub fn with_inventory(store: &'a mut S, stem: &str, inventory: Inventory) -> Self {
        Self {
            store,
            stem: stem.to_string(),
            inventory: Some(inventory),
        }
    }

    /// Writer for single status values; nothing is recorded.
    pub fn without_inventory(store: &'a mut S, stem: &str) -> Self {
        Self {
            store,
            stem: stem.to_string(),
            inventory: None,
        }
    }

    #[must_use]
    pub fn inventory(&self) -> Option<&Inventory> {
        self.inventory.as_ref()
    }

    /// Store `value` under `<stem><tag>`.
    pub fn put_raw(&mut self, tag: &str, value: &[u8]) -> bool {
        let stored = self.store.set(&field_path(&self.stem, tag), value);
        if stored && let Some(inventory) = self.inventory.as_mut() {
            inventory.push(tag);
        }
        stored
    }

    pub fn put_int(&mut self, tag: &str, value: i32) -> bool {
        self.put_raw(tag, value.to_string().as_bytes())
    }

    pub fn put_int64(&mut self, tag: &str, value: i64) -> bool {
        self.put_raw(tag, value.to_string().as_bytes())
    }

    pub fn put_char(&mut self, tag: &str, value: u8) -> bool {
        self.put_raw(tag, &[value])
    }

    /// Character field up to its first NUL, or the whole field.
    pub fn put_fixed_string(&mut self, tag: &str, value: &[u8]) -> bool {
        self.put_raw(tag, until_nul(value))
    }

    /// Opaque field, written in full.
    pub fn put_bytes<const N: usize>(&mut self, tag: &str, value: &[u8; N]) -> bool {
        const { assert!(N <= STAGING_LIMIT, "opaque field exceeds the staging limit") };
        self.put_raw(tag, value)
    }

    /// Emit `<tag>.0` (length), `<tag>.CCSID` and `<tag>.1` (payload).
    pub fn put_counted_string(&mut self, tag: &str, value: &CountedString) {
        self.put_int(&counted_path(tag, COUNTED_LENGTH), value.length);
        self.put_int(&counted_path(tag, COUNTED_CCSID), value.ccsid);
        self.put_raw(&counted_path(tag, COUNTED_DATA), value.payload());
    }

    /// Store the inventory under `<stem>ZLIST` and hand it back.
    ///
    /// The inventory tag itself is never listed. A writer without an
    /// inventory writes no `ZLIST` and returns an empty one.
    pub fn finish(self) -> Inventory {
        let Some(inventory) = self.inventory else {
            return Inventory::default();
        };
        self.store
            .set(&field_path(&self.stem, INVENTORY_TAG), inventory.as_str().as_bytes());
        inventory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_parse_int_legacy_rules() {
        assert_eq!(parse_int(b"5"), 5);
        assert_eq!(parse_int(b"  -42"), -42);
        assert_eq!(parse_int(b"+7"), 7);
        assert_eq!(parse_int(b"12abc"), 12);
        assert_eq!(parse_int(b"abc"), 0);
        assert_eq!(parse_int(b"- 3"), 0);
        assert_eq!(parse_int(b""), 0);
        assert_eq!(parse_int(b"2147483648"), i32::MIN);
        assert_eq!(parse_int64(b"-9000000000"), -9_000_000_000);
    }

    #[test]
    fn test_absent_and_empty_leave_default() {
        let mut store = MemoryStore::new();
        store.set_str("MD.PRI", "");
        let reader = StemReader::new(&store, "MD.");

        let mut priority = -1;
        reader.load_int("PRI", &mut priority);
        reader.load_int("PER", &mut priority);
        assert_eq!(priority, -1);
    }

    #[test]
    fn test_fixed_string_truncates_and_nul_fills() {
        let mut store = MemoryStore::new();
        store.set_str("X.F", "MQSTR");
        store.set_str("X.L", "ABCDEFGHIJ");
        let reader = StemReader::new(&store, "X.");

        assert_eq!(reader.get_fixed_string::<8>("F"), Some(*b"MQSTR\0\0\0"));
        assert_eq!(reader.get_fixed_string::<4>("L"), Some(*b"ABCD"));
        assert_eq!(reader.get_fixed_string::<4>("NONE"), None);
    }

    #[test]
    fn test_short_bytes_overwrite_prefix() {
        let mut store = MemoryStore::new();
        store.set("X.ID", b"AB");
        let reader = StemReader::new(&store, "X.");

        let mut field = [0xFFu8; 4];
        reader.load_bytes("ID", &mut field);
        assert_eq!(field, [b'A', b'B', 0xFF, 0xFF]);
    }

    #[test]
    fn test_runtime_staging_limit() {
        let store = MemoryStore::new();
        let reader = StemReader::new(&store, "X.");
        let err = reader.get_bytes("BIG", STAGING_LIMIT + 1).unwrap_err();
        assert_eq!(
            err,
            CodecError::StagingLimit {
                tag: "BIG".to_string(),
                size: 101,
                limit: 100,
            }
        );
        assert_eq!(reader.get_bytes("BIG", 16).unwrap(), None);
    }

    #[test]
    fn test_counted_string_sized_by_length_field() {
        let mut store = MemoryStore::new();
        store.set_str("SD.OS.0", "6");
        store.set_str("SD.OS.CCSID", "1208");
        store.set_str("SD.OS.1", "SPORTS");
        let reader = StemReader::new(&store, "SD.");

        let mut value = CountedString::default();
        reader.load_counted_string("OS", &mut value).unwrap();
        assert_eq!(value.buf_size, 6);
        assert_eq!(value.ccsid, 1208);
        assert_eq!(value.length, 6);
        assert_eq!(value.payload(), b"SPORTS");

        store.set_str("SD.OS.1", "SPORT");
        let reader = StemReader::new(&store, "SD.");
        reader.load_counted_string("OS", &mut value).unwrap();
        assert_eq!(value.payload(), b"SPORT");
    }

    #[test]
    fn test_counted_string_longer_than_buffer_is_dropped() {
        let mut store = MemoryStore::new();
        store.set_str("SD.OS.0", "6");
        store.set_str("SD.OS.1", "SPORTS/RESULTS");
        let reader = StemReader::new(&store, "SD.");

        let mut value = CountedString::default();
        reader.load_counted_string("OS", &mut value).unwrap();
        assert!(value.is_allocated());
        assert_eq!(value.buf_size, 6);
        assert_eq!(value.length, 0);
        assert!(value.payload().is_empty());
    }

    #[test]
    fn test_counted_string_without_size_stays_unallocated() {
        let mut store = MemoryStore::new();
        store.set_str("SD.OS.1", "ignored");
        let reader = StemReader::new(&store, "SD.");

        let mut value = CountedString::default();
        reader.load_counted_string("OS", &mut value).unwrap();
        assert!(!value.is_allocated());
    }

    #[test]
    fn test_writer_inventory_and_finish() {
        let mut store = MemoryStore::new();
        let mut writer = StemWriter::new(&mut store, "GMO.");
        writer.put_int("VER", 4);
        writer.put_char("GS", b' ');
        writer.put_fixed_string("RQN", b"SYSTEM.DEFAULT\0\0\0");
        writer.put_counted_string("OS", &CountedString::default());
        let inventory = writer.finish();

        assert_eq!(inventory.as_str(), "VER GS RQN OS.0 OS.CCSID OS.1");
        assert_eq!(store.get_str("GMO.RQN").unwrap(), "SYSTEM.DEFAULT");
        assert_eq!(store.get_str("GMO.OS.CCSID").unwrap(), "-3");
        assert_eq!(store.get_str("GMO.ZLIST").unwrap(), inventory.as_str());
    }

    #[test]
    fn test_writer_without_inventory() {
        let mut store = MemoryStore::new();
        let mut writer = StemWriter::without_inventory(&mut store, "RXMQ.");
        writer.put_int("LASTRC", 0);
        assert!(writer.inventory().is_none());
        assert!(writer.finish().is_empty());
        assert_eq!(store.get_str("RXMQ.LASTRC").unwrap(), "0");
        assert!(!store.contains("RXMQ.ZLIST"));
    }
}
