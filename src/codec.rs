//! Encode/decode engine shared by the legacy encodings.
//!
//! Both encodings store a diacritic *before* the letter it modifies, while
//! Unicode puts the combining mark *after* its base. [`CodecProfile`] holds
//! the handful of per-encoding constants (table, ASCII limit, combining
//! bytes, aliases) and drives the reordering in both directions.
//!
//! Decoding a byte at or above the ASCII limit proceeds in this order:
//!
//! 1. If the byte is a combining byte and another byte follows, try a
//!    three-byte group (when the second byte is also combining and a third
//!    byte exists), otherwise a two-byte group. A miss may be repaired by
//!    reading the group as *mark + base* and emitting base then mark.
//! 2. Single-byte lookup, first in the caller's overrides, then in the table.
//! 3. The error policy.
//!
//! The order matters: legacy data exists that is ambiguous between a
//! three-byte group and two two-byte groups, and it is read as the former.

use log::trace;
use smallvec::SmallVec;

use crate::cursor::DecodeCursor;
use crate::error::{CodecError, Result};
use crate::policy::{ErrorPolicy, DECODE_REPLACEMENT, ENCODE_REPLACEMENT};
use crate::tables::{ByteOverrides, CharTable};

/// Bytes of context reported on each side of an undecodable byte.
const CONTEXT_RADIUS: usize = 3;

/// A byte group whose lookup was attempted.
type ByteGroup = SmallVec<[u8; 3]>;

/// Which legacy byte values are combining diacritics.
#[derive(Debug, Clone, Copy)]
pub(crate) enum CombiningBytes {
    /// Every byte in `first..=last`.
    Range { first: u8, last: u8 },
    /// Exactly the listed bytes.
    Set(&'static [u8]),
}

impl CombiningBytes {
    pub(crate) fn contains(self, byte: u8) -> bool {
        match self {
            CombiningBytes::Range { first, last } => (first..=last).contains(&byte),
            CombiningBytes::Set(bytes) => bytes.contains(&byte),
        }
    }
}

/// Per-encoding parameters of the shared codec.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CodecProfile {
    pub(crate) table: &'static CharTable,
    /// Bytes below this value decode as the ASCII character of the same value.
    pub(crate) ascii_limit: u8,
    pub(crate) combining: CombiningBytes,
    /// `(alias, canonical)`: the alias byte is read as the canonical one
    /// whenever it takes part in a combining group.
    pub(crate) alias: Option<(u8, u8)>,
    /// Move lone combining bytes in front of the preceding character when
    /// encoding.
    pub(crate) reorder_on_encode: bool,
    /// Accept mark + base pairs that have no table entry of their own.
    pub(crate) denormalized_fallback: bool,
}

/// Result of trying to read a combining group.
enum GroupOutcome {
    /// The group was decoded; this many bytes beyond the current one were used.
    Matched(usize),
    /// Nothing matched; the attempted group is kept for diagnostics.
    Missed(ByteGroup),
}

impl CodecProfile {
    fn canonical(&self, byte: u8) -> u8 {
        match self.alias {
            Some((alias, canonical)) if byte == alias => canonical,
            _ => byte,
        }
    }

    fn is_lone_combiner(&self, bytes: &[u8]) -> bool {
        matches!(bytes, [byte] if self.combining.contains(*byte))
    }

    /// Encode `text`, returning the bytes and the number of characters read.
    pub(crate) fn encode(&self, text: &str, errors: ErrorPolicy) -> Result<(Vec<u8>, usize)> {
        let errors = errors.for_encoding()?;
        let mut out = Vec::with_capacity(text.len());
        // Start of the most recent contribution; combiners go in front of it.
        let mut last_start = 0;
        // A combiner with nothing before it becomes the contribution that
        // later combiners are placed in front of.
        let mut contributed = false;
        let mut consumed = 0;

        for (position, ch) in text.chars().enumerate() {
            consumed += 1;
            let bytes: &[u8] = match self.table.encode_char(ch) {
                Some(bytes) => bytes,
                None => match errors {
                    ErrorPolicy::Strict => {
                        return Err(CodecError::UnmappableCharacter {
                            character: ch,
                            position,
                        })
                    },
                    ErrorPolicy::Replace => {
                        trace!(
                            "{}: replaced unmappable {ch:?} at {position}",
                            self.table.name()
                        );
                        &[ENCODE_REPLACEMENT]
                    },
                    ErrorPolicy::Ignore | ErrorPolicy::Repr => &[],
                },
            };

            if self.reorder_on_encode && self.is_lone_combiner(bytes) {
                out.insert(last_start, bytes[0]);
                if contributed {
                    last_start += 1;
                }
            } else {
                last_start = out.len();
                out.extend_from_slice(bytes);
            }
            contributed = true;
        }

        Ok((out, consumed))
    }

    /// Decode `input`, returning the text and the final cursor position.
    pub(crate) fn decode(
        &self,
        input: &[u8],
        errors: ErrorPolicy,
        overrides: Option<&ByteOverrides>,
    ) -> Result<(String, usize)> {
        let mut out = String::with_capacity(input.len());
        let mut cursor = DecodeCursor::new(input);

        while let Some(original) = cursor.next() {
            if original < self.ascii_limit {
                out.push(char::from(original));
                continue;
            }

            let mut byte = original;
            let mut attempted: Option<ByteGroup> = None;
            let ahead = cursor.peek(2);

            if let (true, Some(next)) = (self.combining.contains(byte), ahead[0]) {
                byte = self.canonical(byte);
                let next = self.canonical(next);
                match self.resolve_group(byte, next, ahead[1], &mut out) {
                    GroupOutcome::Matched(extra) => {
                        cursor.advance(extra);
                        continue;
                    },
                    GroupOutcome::Missed(group) => attempted = Some(group),
                }
            }

            let single = overrides
                .and_then(|map| map.get(&byte).copied())
                .or_else(|| self.table.decode_byte(byte));
            if let Some(ch) = single {
                out.push(ch);
                continue;
            }

            match errors {
                ErrorPolicy::Strict => {
                    return Err(CodecError::UndecodableByte {
                        bytes: attempted.map_or_else(|| vec![byte], |group| group.to_vec()),
                        position: cursor.position(),
                        context: cursor.context(CONTEXT_RADIUS).to_vec(),
                    });
                },
                ErrorPolicy::Replace => {
                    trace!(
                        "{}: replaced byte 0x{original:02x} at {}",
                        self.table.name(),
                        cursor.position()
                    );
                    out.push(DECODE_REPLACEMENT);
                },
                ErrorPolicy::Ignore => {},
                ErrorPolicy::Repr => out.push_str(&format!("\\x{original:x}")),
            }
        }

        Ok((out, cursor.position()))
    }

    /// Try to decode the combining group starting with `byte`.
    fn resolve_group(
        &self,
        byte: u8,
        next: u8,
        after: Option<u8>,
        out: &mut String,
    ) -> GroupOutcome {
        let group: ByteGroup = match after {
            Some(after) if self.combining.contains(next) => {
                SmallVec::from_slice(&[byte, next, after])
            },
            _ => SmallVec::from_slice(&[byte, next]),
        };

        if let Some(ch) = self.table.decode_sequence(&group) {
            out.push(ch);
            return GroupOutcome::Matched(group.len() - 1);
        }

        if self.denormalized_fallback {
            let mark = self.table.decode_byte(byte);
            let base = self.table.decode_sequence(&group[1..]);
            if let (Some(mark), Some(base)) = (mark, base) {
                trace!(
                    "{}: reordered combining sequence {:02x?}",
                    self.table.name(),
                    group.as_slice()
                );
                out.push(base);
                out.push(mark);
                return GroupOutcome::Matched(group.len() - 1);
            }
        }

        GroupOutcome::Missed(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACUTE: char = '\u{0301}';
    const GRAVE: char = '\u{0300}';

    fn leak_table(entries: &[(char, &'static [u8])]) -> &'static CharTable {
        Box::leak(Box::new(CharTable::from_entries("test", entries)))
    }

    fn profile(table: &'static CharTable) -> CodecProfile {
        CodecProfile {
            table,
            ascii_limit: 0x80,
            combining: CombiningBytes::Range {
                first: 0xC0,
                last: 0xCF,
            },
            alias: Some((0xC9, 0xC8)),
            reorder_on_encode: true,
            denormalized_fallback: true,
        }
    }

    const BASE_ENTRIES: &[(char, &[u8])] = &[
        ('a', b"a"),
        (ACUTE, b"\xc1"),
        (GRAVE, b"\xc2"),
        ('\u{0308}', b"\xc8"),
        ('\u{00E0}', b"\xc2a"),
        ('\u{00E4}', b"\xc8a"),
    ];

    #[test]
    fn test_combining_bytes_membership() {
        let range = CombiningBytes::Range {
            first: 0xC0,
            last: 0xDF,
        };
        assert!(range.contains(0xC0));
        assert!(range.contains(0xDF));
        assert!(!range.contains(0xBF));
        assert!(!range.contains(0xE0));

        let set = CombiningBytes::Set(&[0xE0, 0xE2]);
        assert!(set.contains(0xE0));
        assert!(!set.contains(0xE1));
    }

    #[test]
    fn test_three_byte_group_takes_precedence() {
        let mut entries = BASE_ENTRIES.to_vec();
        entries.push(('\u{01DF}', b"\xc1\xc2a"));
        let codec = profile(leak_table(&entries));
        let (text, pos) = codec.decode(b"\xc1\xc2a", ErrorPolicy::Strict, None).unwrap();
        assert_eq!(text, "\u{01DF}");
        assert_eq!(pos, 3);
    }

    #[test]
    fn test_three_byte_miss_reorders_mark_after_base() {
        let codec = profile(leak_table(BASE_ENTRIES));
        let (text, _) = codec.decode(b"\xc1\xc2a", ErrorPolicy::Strict, None).unwrap();
        assert_eq!(text, format!("\u{00E0}{ACUTE}"));
    }

    #[test]
    fn test_two_byte_miss_reorders_mark_after_base() {
        let codec = profile(leak_table(BASE_ENTRIES));
        let (text, _) = codec.decode(b"\xc1a", ErrorPolicy::Strict, None).unwrap();
        assert_eq!(text, format!("a{ACUTE}"));
    }

    #[test]
    fn test_trailing_combiner_decodes_alone() {
        let codec = profile(leak_table(BASE_ENTRIES));
        let (text, pos) = codec.decode(b"a\xc1", ErrorPolicy::Strict, None).unwrap();
        assert_eq!(text, format!("a{ACUTE}"));
        assert_eq!(pos, 2);
    }

    #[test]
    fn test_alias_only_applies_inside_groups() {
        let codec = profile(leak_table(BASE_ENTRIES));
        let (text, _) = codec.decode(b"\xc9a", ErrorPolicy::Strict, None).unwrap();
        assert_eq!(text, "\u{00E4}");
        // A trailing alias byte has no group and is looked up as is.
        assert!(codec.decode(b"\xc9", ErrorPolicy::Strict, None).is_err());
    }

    #[test]
    fn test_without_fallback_group_miss_decodes_bytes_singly() {
        let mut codec = profile(leak_table(BASE_ENTRIES));
        codec.denormalized_fallback = false;
        let (text, _) = codec.decode(b"\xc1a", ErrorPolicy::Strict, None).unwrap();
        assert_eq!(text, format!("{ACUTE}a"));
    }

    #[test]
    fn test_overrides_checked_before_table() {
        let codec = profile(leak_table(BASE_ENTRIES));
        let overrides: ByteOverrides = [(0xC1, 'X'), (0xF0, 'Y')].into_iter().collect();
        let (text, _) = codec
            .decode(b"\xf0 \xc1", ErrorPolicy::Strict, Some(&overrides))
            .unwrap();
        assert_eq!(text, "Y X");
    }

    #[test]
    fn test_strict_error_reports_attempted_group() {
        let codec = profile(leak_table(BASE_ENTRIES));
        let err = codec
            .decode(b"ab\xc3\xc4z", ErrorPolicy::Strict, None)
            .unwrap_err();
        assert_eq!(
            err,
            CodecError::UndecodableByte {
                bytes: vec![0xC3, 0xC4, b'z'],
                position: 2,
                context: b"ab\xc3\xc4z".to_vec(),
            }
        );
    }

    #[test]
    fn test_error_policies_on_decode() {
        let codec = profile(leak_table(BASE_ENTRIES));
        let input = b"a\xf5a";
        assert_eq!(
            codec.decode(input, ErrorPolicy::Replace, None).unwrap().0,
            "a\u{FFFD}a"
        );
        assert_eq!(codec.decode(input, ErrorPolicy::Ignore, None).unwrap().0, "aa");
        assert_eq!(codec.decode(input, ErrorPolicy::Repr, None).unwrap().0, "a\\xf5a");
    }

    #[test]
    fn test_encode_moves_combiners_before_base() {
        let codec = profile(leak_table(BASE_ENTRIES));
        let (bytes, consumed) = codec
            .encode(&format!("a{ACUTE}{GRAVE}a"), ErrorPolicy::Strict)
            .unwrap();
        assert_eq!(bytes, b"\xc1\xc2aa");
        assert_eq!(consumed, 4);
    }

    #[test]
    fn test_encode_leading_combiner() {
        let codec = profile(leak_table(BASE_ENTRIES));
        let (bytes, _) = codec.encode(&format!("{ACUTE}a"), ErrorPolicy::Strict).unwrap();
        assert_eq!(bytes, b"\xc1a");
    }

    #[test]
    fn test_encode_leading_combiners_stack_in_reverse() {
        let codec = profile(leak_table(BASE_ENTRIES));
        let (bytes, _) = codec
            .encode(&format!("{ACUTE}{GRAVE}a"), ErrorPolicy::Strict)
            .unwrap();
        assert_eq!(bytes, b"\xc2\xc1a");

        let (bytes, _) = codec
            .encode(&format!("{ACUTE}{GRAVE}\u{0308}a"), ErrorPolicy::Strict)
            .unwrap();
        assert_eq!(bytes, b"\xc2\xc8\xc1a");
    }

    #[test]
    fn test_encode_combiners_after_ignored_first_char() {
        let codec = profile(leak_table(BASE_ENTRIES));
        let (bytes, _) = codec
            .encode(&format!("\u{0424}{ACUTE}{GRAVE}a"), ErrorPolicy::Ignore)
            .unwrap();
        assert_eq!(bytes, b"\xc1\xc2a");
    }

    #[test]
    fn test_encode_combiner_after_ignored_char_stays_in_place() {
        let codec = profile(leak_table(BASE_ENTRIES));
        let (bytes, consumed) = codec
            .encode(&format!("aФ{ACUTE}"), ErrorPolicy::Ignore)
            .unwrap();
        assert_eq!(bytes, b"a\xc1");
        assert_eq!(consumed, 3);
    }

    #[test]
    fn test_encode_without_reordering() {
        let mut codec = profile(leak_table(BASE_ENTRIES));
        codec.reorder_on_encode = false;
        let (bytes, _) = codec.encode(&format!("a{ACUTE}"), ErrorPolicy::Strict).unwrap();
        assert_eq!(bytes, b"a\xc1");
    }

    #[test]
    fn test_encode_rejects_repr() {
        let codec = profile(leak_table(BASE_ENTRIES));
        assert!(matches!(
            codec.encode("a", ErrorPolicy::Repr),
            Err(CodecError::InvalidErrorPolicy(_))
        ));
    }

    #[test]
    fn test_encode_strict_reports_char_position() {
        let codec = profile(leak_table(BASE_ENTRIES));
        assert_eq!(
            codec.encode("aaФ", ErrorPolicy::Strict).unwrap_err(),
            CodecError::UnmappableCharacter {
                character: 'Ф',
                position: 2,
            }
        );
    }
}
