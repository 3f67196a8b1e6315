//! USMARC / ANSEL codec.
//!
//! The ANSEL (Z39.47) repertoire as used by MARC-8 records without escape
//! sequences. Diacritics occupy `0xE0..=0xFE`, except `0xEC`, `0xFB`, `0xFC`
//! and `0xFD`, which the table leaves unassigned. Every precomposed letter is
//! already stored diacritic-first, so encoding is plain concatenation.

use crate::codec::{CodecProfile, CombiningBytes};
use crate::error::Result;
use crate::policy::ErrorPolicy;
use crate::tables::{self, ByteOverrides, CharTable};

/// Bytes that start a combining group.
pub const COMBINING_BYTES: &[u8] = &[
    0xE0, 0xE1, 0xE2, 0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xEB, 0xED, 0xEE, 0xEF,
    0xF0, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7, 0xF8, 0xF9, 0xFA, 0xFE,
];

fn profile() -> CodecProfile {
    CodecProfile {
        table: &tables::MARC,
        ascii_limit: 0x80,
        combining: CombiningBytes::Set(COMBINING_BYTES),
        alias: None,
        reorder_on_encode: false,
        denormalized_fallback: false,
    }
}

/// The USMARC / ANSEL character table.
#[must_use]
pub fn table() -> &'static CharTable {
    &tables::MARC
}

/// Encode Unicode text as USMARC / ANSEL.
///
/// # Errors
///
/// Returns `CodecError::UnmappableCharacter` under [`ErrorPolicy::Strict`]
/// when a character has no ANSEL equivalent, and
/// `CodecError::InvalidErrorPolicy` for [`ErrorPolicy::Repr`].
pub fn encode(text: &str, errors: ErrorPolicy) -> Result<(Vec<u8>, usize)> {
    profile().encode(text, errors)
}

/// Decode USMARC / ANSEL bytes to Unicode text.
///
/// # Errors
///
/// Returns `CodecError::UndecodableByte` under [`ErrorPolicy::Strict`] when
/// a byte cannot be resolved.
pub fn decode(input: &[u8], errors: ErrorPolicy) -> Result<(String, usize)> {
    profile().decode(input, errors, None)
}

/// Decode USMARC / ANSEL bytes, consulting `overrides` for single bytes first.
///
/// # Errors
///
/// Returns `CodecError::UndecodableByte` under [`ErrorPolicy::Strict`] when
/// a byte cannot be resolved.
pub fn decode_with_overrides(
    input: &[u8],
    errors: ErrorPolicy,
    overrides: Option<&ByteOverrides>,
) -> Result<(String, usize)> {
    profile().decode(input, errors, overrides)
}
