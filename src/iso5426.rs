//! ISO-5426 / MAB2 codec.
//!
//! ISO-5426 is the character set of German MAB2 catalog data. Diacritics are
//! the bytes `0xC0..=0xDF` and precede the letter they modify; up to two of
//! them may stack on one letter. Both `0xC8` and `0xC9` are used for the
//! diaeresis in the wild, so `0xC9` is read as `0xC8` inside combining groups.
//!
//! # Examples
//!
//! ```
//! use bibencodings::{iso5426, ErrorPolicy};
//!
//! let (bytes, consumed) = iso5426::encode("Müller", ErrorPolicy::Strict)?;
//! assert_eq!(bytes, b"M\xc8uller");
//! assert_eq!(consumed, 6);
//!
//! let (text, _) = iso5426::decode(b"M\xc9uller", ErrorPolicy::Strict)?;
//! assert_eq!(text, "Müller");
//! # Ok::<(), bibencodings::CodecError>(())
//! ```

use crate::codec::{CodecProfile, CombiningBytes};
use crate::error::Result;
use crate::policy::ErrorPolicy;
use crate::tables::{self, ByteOverrides, CharTable};

/// First combining diacritic byte.
pub const COMBINING_FIRST: u8 = 0xC0;
/// Last combining diacritic byte.
pub const COMBINING_LAST: u8 = 0xDF;
/// Canonical diaeresis byte.
pub const DIAERESIS: u8 = 0xC8;
/// Alternative diaeresis byte, decoded as [`DIAERESIS`] inside groups.
pub const DIAERESIS_ALIAS: u8 = 0xC9;

fn profile() -> CodecProfile {
    CodecProfile {
        table: &tables::ISO5426,
        ascii_limit: 0x7F,
        combining: CombiningBytes::Range {
            first: COMBINING_FIRST,
            last: COMBINING_LAST,
        },
        alias: Some((DIAERESIS_ALIAS, DIAERESIS)),
        reorder_on_encode: true,
        denormalized_fallback: true,
    }
}

/// The ISO-5426 character table.
#[must_use]
pub fn table() -> &'static CharTable {
    &tables::ISO5426
}

/// Encode Unicode text as ISO-5426.
///
/// Returns the encoded bytes and the number of characters consumed, which is
/// always the character count of `text`.
///
/// # Errors
///
/// Returns `CodecError::UnmappableCharacter` under [`ErrorPolicy::Strict`]
/// when a character has no ISO-5426 equivalent, and
/// `CodecError::InvalidErrorPolicy` for [`ErrorPolicy::Repr`].
pub fn encode(text: &str, errors: ErrorPolicy) -> Result<(Vec<u8>, usize)> {
    profile().encode(text, errors)
}

/// Decode ISO-5426 bytes to Unicode text.
///
/// Returns the text and the final read position, which equals
/// `input.len()`.
///
/// # Errors
///
/// Returns `CodecError::UndecodableByte` under [`ErrorPolicy::Strict`] when
/// a byte cannot be resolved.
pub fn decode(input: &[u8], errors: ErrorPolicy) -> Result<(String, usize)> {
    profile().decode(input, errors, None)
}

/// Decode ISO-5426 bytes, consulting `overrides` for single bytes first.
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

/// Decode the `xe0` flavour of ISO-5426.
///
/// Some MAB2 producers put Latin-1 letters (`0xE0..=0xFF`, plus `0xA4`)
/// straight into ISO-5426 data. This variant decodes those bytes as the
/// Latin-1 character of the same value. Encoding is plain ISO-5426.
///
/// # Errors
///
/// Returns `CodecError::UndecodableByte` under [`ErrorPolicy::Strict`] when
/// a byte cannot be resolved.
pub fn decode_xe0(input: &[u8], errors: ErrorPolicy) -> Result<(String, usize)> {
    profile().decode(input, errors, Some(&tables::XE0_OVERRIDES))
}
