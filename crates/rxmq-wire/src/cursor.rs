//! Bounds-checked reading and building of MQ structures.
//!
//! Every read goes through [`Cursor::take`], so running past the end of a
//! buffer is always a [`WireError::Truncated`] rather than a panic or a
//! silent short read.

use crate::error::{Result, WireError};
use crate::order::ByteOrder;

/// Forward-only reader over a byte slice.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
    order: ByteOrder,
}

impl<'a> Cursor<'a> {
    #[must_use]
    pub const fn new(data: &'a [u8], order: ByteOrder) -> Self {
        Self {
            data,
            pos: 0,
            order,
        }
    }

    /// Offset of the next unread byte.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    #[must_use]
    pub const fn order(&self) -> ByteOrder {
        self.order
    }

    /// Consume `len` bytes.
    pub fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let bytes = self.peek(len)?;
        self.pos += len;
        Ok(bytes)
    }

    /// Look at the next `len` bytes without consuming them.
    pub fn peek(&self, len: usize) -> Result<&'a [u8]> {
        self.pos
            .checked_add(len)
            .and_then(|end| self.data.get(self.pos..end))
            .ok_or(WireError::Truncated {
                offset: self.pos,
                needed: len,
                available: self.remaining(),
            })
    }

    /// A cursor over the next `len` bytes only, keeping absolute offsets.
    ///
    /// `self` is not advanced.
    pub fn window(&self, len: usize) -> Result<Cursor<'a>> {
        self.peek(len)?;
        Ok(Cursor {
            data: &self.data[..self.pos + len],
            pos: self.pos,
            order: self.order,
        })
    }

    /// Move forward by `len` bytes.
    pub fn skip(&mut self, len: usize) -> Result<()> {
        self.take(len).map(|_| ())
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let bytes = self.read_array::<4>()?;
        Ok(self.order.i32_from(bytes))
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        let bytes = self.read_array::<8>()?;
        Ok(self.order.i64_from(bytes))
    }

    /// Read a 32-bit length or count, rejecting negative values.
    pub fn read_len(&mut self, field: &'static str) -> Result<usize> {
        let offset = self.pos;
        let value = self.read_i32()?;
        usize::try_from(value).map_err(|_| WireError::Negative {
            field,
            value,
            offset,
        })
    }
}

/// Append-only builder for MQ structures.
#[derive(Debug, Clone)]
pub struct Encoder {
    buf: Vec<u8>,
    order: ByteOrder,
}

impl Encoder {
    #[must_use]
    pub fn with_capacity(capacity: usize, order: ByteOrder) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            order,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn put_i32(&mut self, value: i32) -> &mut Self {
        self.buf.extend_from_slice(&self.order.i32_to(value));
        self
    }

    pub fn put_i64(&mut self, value: i64) -> &mut Self {
        self.buf.extend_from_slice(&self.order.i64_to(value));
        self
    }

    pub fn put_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(bytes);
        self
    }

    /// Write `bytes` into a field of exactly `width` bytes, padding with `pad`.
    pub fn put_padded(&mut self, bytes: &[u8], width: usize, pad: u8) -> &mut Self {
        let used = bytes.len().min(width);
        self.buf.extend_from_slice(&bytes[..used]);
        self.buf.resize(self.buf.len() + (width - used), pad);
        self
    }

    /// Overwrite a previously written 32-bit field.
    pub fn patch_i32(&mut self, offset: usize, value: i32) -> &mut Self {
        if let Some(slot) = self.buf.get_mut(offset..offset + 4) {
            slot.copy_from_slice(&self.order.i32_to(value));
        }
        self
    }

    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

/// Copy `src` into a fixed-size array, truncating or padding with `pad`.
#[must_use]
pub fn fixed<const N: usize>(src: &[u8], pad: u8) -> [u8; N] {
    let mut out = [pad; N];
    let used = src.len().min(N);
    out[..used].copy_from_slice(&src[..used]);
    out
}

/// The prefix of `bytes` before the first NUL.
#[must_use]
pub fn until_nul(bytes: &[u8]) -> &[u8] {
    bytes
        .iter()
        .position(|&b| b == 0)
        .map_or(bytes, |end| &bytes[..end])
}

/// Character field as display text: cut at NUL, trailing blanks removed.
#[must_use]
pub fn field_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(until_nul(bytes))
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_reads_in_order() {
        let data = [1, 0, 0, 0, b'A', b'B', 2, 0, 0, 0];
        let mut cursor = Cursor::new(&data, ByteOrder::Little);
        assert_eq!(cursor.read_i32().unwrap(), 1);
        assert_eq!(cursor.take(2).unwrap(), b"AB");
        assert_eq!(cursor.read_i32().unwrap(), 2);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_cursor_truncated() {
        let data = [1, 0];
        let mut cursor = Cursor::new(&data, ByteOrder::Little);
        let err = cursor.read_i32().unwrap_err();
        assert_eq!(
            err,
            WireError::Truncated {
                offset: 0,
                needed: 4,
                available: 2
            }
        );
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_window_limits_reads() {
        let data = [0u8; 12];
        let mut cursor = Cursor::new(&data, ByteOrder::Little);
        cursor.skip(4).unwrap();
        let mut window = cursor.window(4).unwrap();
        assert_eq!(window.position(), 4);
        window.read_i32().unwrap();
        assert!(matches!(
            window.read_i32(),
            Err(WireError::Truncated { offset: 8, .. })
        ));
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_read_len_negative() {
        let data = (-5i32).to_le_bytes();
        let mut cursor = Cursor::new(&data, ByteOrder::Little);
        assert!(matches!(
            cursor.read_len("count"),
            Err(WireError::Negative { value: -5, .. })
        ));
    }

    #[test]
    fn test_encoder_padding() {
        let mut enc = Encoder::with_capacity(16, ByteOrder::Big);
        enc.put_padded(b"MD", 4, b' ').put_i32(2);
        assert_eq!(enc.finish(), b"MD  \0\0\0\x02".to_vec());
    }

    #[test]
    fn test_patch_i32() {
        let mut enc = Encoder::with_capacity(8, ByteOrder::Little);
        enc.put_i32(0).put_i32(0).patch_i32(4, 9);
        assert_eq!(enc.finish(), vec![0, 0, 0, 0, 9, 0, 0, 0]);
    }

    #[test]
    fn test_text_helpers() {
        assert_eq!(fixed::<4>(b"TM", b' '), *b"TM  ");
        assert_eq!(until_nul(b"AB\0CD"), b"AB");
        assert_eq!(field_text(b"QUEUE   \0junk"), "QUEUE");
    }
}
