//! Decode-side byte cursor with bounded lookahead.
//!
//! [`DecodeCursor`] walks an immutable byte slice one element per iteration
//! step. While a step's byte is being handled the cursor still points at it,
//! so [`DecodeCursor::position`] reports the offset of the byte in hand and
//! [`DecodeCursor::peek`] looks at the bytes *after* it. Once a multi-byte
//! group has been matched, [`DecodeCursor::advance`] skips the rest of the
//! group; the next iteration step then continues behind it.
//!
//! ```
//! use bibencodings::cursor::DecodeCursor;
//!
//! let mut cursor = DecodeCursor::new(b"abc");
//! assert_eq!(cursor.next(), Some(b'a'));
//! assert_eq!(cursor.peek(3).as_slice(), &[Some(b'b'), Some(b'c'), None]);
//! cursor.advance(1);
//! assert_eq!(cursor.next(), Some(b'c'));
//! assert_eq!(cursor.next(), None);
//! assert_eq!(cursor.position(), 3);
//! ```

use std::iter::FusedIterator;

use smallvec::SmallVec;

/// Lookahead window returned by [`DecodeCursor::peek`].
pub type Lookahead = SmallVec<[Option<u8>; 4]>;

/// Cursor over a byte slice with deferred stepping and forward skips.
#[derive(Debug, Clone)]
pub struct DecodeCursor<'a> {
    data: &'a [u8],
    pos: usize,
    /// Set once a byte has been handed out; the step past it happens on the
    /// following call to `next`.
    pending_step: bool,
}

impl<'a> DecodeCursor<'a> {
    /// Create a cursor positioned at the first byte.
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        DecodeCursor {
            data,
            pos: 0,
            pending_step: false,
        }
    }

    /// Total length of the underlying data.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the underlying data is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of bytes not yet handed out, excluding the byte in hand.
    #[must_use]
    pub fn remaining(&self) -> usize {
        let consumed = if self.pending_step {
            self.pos + 1
        } else {
            self.pos
        };
        self.data.len().saturating_sub(consumed)
    }

    /// Offset of the byte currently in hand, or the data length once
    /// iteration has finished.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Return the `amount` bytes following the current position.
    ///
    /// The result always holds exactly `amount` entries; positions past the
    /// end of data are `None`.
    #[must_use]
    pub fn peek(&self, amount: usize) -> Lookahead {
        let start = self.pos.saturating_add(1);
        (start..start.saturating_add(amount))
            .map(|i| self.data.get(i).copied())
            .collect()
    }

    /// Skip `amount` positions beyond the single step each iteration makes.
    pub fn advance(&mut self, amount: usize) {
        self.pos = self.pos.saturating_add(amount).min(self.data.len());
    }

    /// Up to `radius` bytes on either side of the current position.
    #[must_use]
    pub fn context(&self, radius: usize) -> &'a [u8] {
        let end = self.pos.saturating_add(radius).min(self.data.len());
        let start = self.pos.saturating_sub(radius).min(end);
        &self.data[start..end]
    }
}

impl Iterator for DecodeCursor<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.pending_step {
            self.pos = (self.pos + 1).min(self.data.len());
        }
        let byte = self.data.get(self.pos).copied()?;
        self.pending_step = true;
        Some(byte)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining()))
    }
}

impl FusedIterator for DecodeCursor<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cursor() {
        let mut cursor = DecodeCursor::new(b"");
        assert_eq!(cursor.len(), 0);
        assert!(cursor.is_empty());
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.peek(2).as_slice(), &[None, None]);
    }

    #[test]
    fn test_collects_all_bytes() {
        let cursor = DecodeCursor::new(b"abc");
        assert_eq!(cursor.len(), 3);
        assert_eq!(cursor.collect::<Vec<_>>(), b"abc".to_vec());
    }

    #[test]
    fn test_peek_and_position() {
        let mut cursor = DecodeCursor::new(b"abc");
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.next(), Some(b'a'));
        assert_eq!(cursor.peek(1).as_slice(), &[Some(b'b')]);
        assert_eq!(cursor.peek(2).as_slice(), &[Some(b'b'), Some(b'c')]);
        assert_eq!(cursor.peek(3).as_slice(), &[Some(b'b'), Some(b'c'), None]);
        assert_eq!(cursor.next(), Some(b'b'));
        assert_eq!(cursor.peek(2).as_slice(), &[Some(b'c'), None]);
        assert_eq!(cursor.next(), Some(b'c'));
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.peek(2).as_slice(), &[None, None]);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.peek(2).as_slice(), &[None, None]);
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut cursor = DecodeCursor::new(b"xyz");
        assert_eq!(cursor.next(), Some(b'x'));
        let _ = cursor.peek(2);
        let _ = cursor.peek(2);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.next(), Some(b'y'));
    }

    #[test]
    fn test_advance_skips_positions() {
        let mut cursor = DecodeCursor::new(b"abc");
        assert_eq!(cursor.next(), Some(b'a'));
        cursor.advance(1);
        assert_eq!(cursor.next(), Some(b'c'));
        cursor.advance(1);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_advance_never_revisits() {
        let data = b"0123456789";
        let mut cursor = DecodeCursor::new(data);
        let mut seen = Vec::new();
        while let Some(byte) = cursor.next() {
            seen.push(byte);
            if byte == b'2' {
                cursor.advance(3);
            }
        }
        assert_eq!(seen, b"0126789".to_vec());
    }

    #[test]
    fn test_advance_past_end_is_clamped() {
        let mut cursor = DecodeCursor::new(b"ab");
        assert_eq!(cursor.next(), Some(b'a'));
        cursor.advance(10);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_remaining() {
        let mut cursor = DecodeCursor::new(b"abcd");
        assert_eq!(cursor.remaining(), 4);
        cursor.next();
        assert_eq!(cursor.remaining(), 3);
        cursor.advance(2);
        assert_eq!(cursor.remaining(), 1);
        cursor.next();
        assert_eq!(cursor.remaining(), 0);
        assert_eq!(cursor.next(), None);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_context_is_clamped() {
        let mut cursor = DecodeCursor::new(b"abcdefgh");
        cursor.next();
        assert_eq!(cursor.context(3), b"abc");
        cursor.advance(4);
        assert_eq!(cursor.context(3), b"bcdefg");
    }
}
