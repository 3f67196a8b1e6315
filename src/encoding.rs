//! Encoding lookup by name and configured codecs.
//!
//! Bibliographic data usually arrives with its character set named in a
//! configuration file or a format header rather than fixed at compile time.
//! [`BibEncoding`] resolves the names commonly used for the supported
//! character sets:
//!
//! | Encoding | Accepted names |
//! |----------|----------------|
//! | ISO-5426 / MAB2 | `iso-5426`, `iso5426`, `mab2` |
//! | ISO-5426 with Latin-1 letters | `iso-5426-xe0`, `iso5426-xe0`, `mab2-xe0` |
//! | USMARC / ANSEL | `marc`, `usmarc`, `ansel` |
//!
//! [`Codec`] pairs an encoding with an error policy and can be loaded from
//! any serde format.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Result};
use crate::policy::ErrorPolicy;
use crate::tables::CharTable;
use crate::{iso5426, marc};

/// Legacy bibliographic character encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BibEncoding {
    /// ISO-5426 / MAB2
    #[default]
    #[serde(rename = "iso-5426", alias = "iso5426", alias = "mab2")]
    Iso5426,
    /// ISO-5426 whose decoder also accepts raw Latin-1 letters
    #[serde(rename = "iso-5426-xe0", alias = "iso5426-xe0", alias = "mab2-xe0")]
    Iso5426Xe0,
    /// USMARC / ANSEL
    #[serde(rename = "marc", alias = "usmarc", alias = "ansel")]
    Marc,
}

impl BibEncoding {
    /// All supported encodings.
    pub const ALL: [BibEncoding; 3] = [
        BibEncoding::Iso5426,
        BibEncoding::Iso5426Xe0,
        BibEncoding::Marc,
    ];

    /// Look up an encoding by one of its names.
    ///
    /// Matching ignores ASCII case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::UnknownEncoding` if no encoding has that name.
    pub fn from_name(name: &str) -> Result<Self> {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|encoding| {
                encoding
                    .aliases()
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| CodecError::UnknownEncoding(name.to_string()))
    }

    /// Canonical name of the encoding.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.aliases()[0]
    }

    /// Every name the encoding is known by, canonical name first.
    #[must_use]
    pub const fn aliases(&self) -> &'static [&'static str] {
        match self {
            BibEncoding::Iso5426 => &["iso-5426", "iso5426", "mab2"],
            BibEncoding::Iso5426Xe0 => &["iso-5426-xe0", "iso5426-xe0", "mab2-xe0"],
            BibEncoding::Marc => &["marc", "usmarc", "ansel"],
        }
    }

    /// Character table backing the encoding.
    #[must_use]
    pub fn table(&self) -> &'static CharTable {
        match self {
            BibEncoding::Iso5426 | BibEncoding::Iso5426Xe0 => iso5426::table(),
            BibEncoding::Marc => marc::table(),
        }
    }

    /// Encode text, returning the bytes and the number of characters consumed.
    ///
    /// # Errors
    ///
    /// See [`iso5426::encode`] and [`marc::encode`].
    pub fn encode(&self, text: &str, errors: ErrorPolicy) -> Result<(Vec<u8>, usize)> {
        match self {
            BibEncoding::Iso5426 | BibEncoding::Iso5426Xe0 => iso5426::encode(text, errors),
            BibEncoding::Marc => marc::encode(text, errors),
        }
    }

    /// Decode bytes, returning the text and the final read position.
    ///
    /// # Errors
    ///
    /// See [`iso5426::decode`] and [`marc::decode`].
    pub fn decode(&self, input: &[u8], errors: ErrorPolicy) -> Result<(String, usize)> {
        match self {
            BibEncoding::Iso5426 => iso5426::decode(input, errors),
            BibEncoding::Iso5426Xe0 => iso5426::decode_xe0(input, errors),
            BibEncoding::Marc => marc::decode(input, errors),
        }
    }

    /// Encode with the error policy given by name.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::InvalidErrorPolicy` for an unknown policy name or
    /// `repr`, before looking at `text`; otherwise as [`BibEncoding::encode`].
    pub fn encode_named(&self, text: &str, errors: &str) -> Result<(Vec<u8>, usize)> {
        let errors = errors.parse::<ErrorPolicy>()?.for_encoding()?;
        self.encode(text, errors)
    }

    /// Decode with the error policy given by name.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::InvalidErrorPolicy` for an unknown policy name,
    /// before looking at `input`; otherwise as [`BibEncoding::decode`].
    pub fn decode_named(&self, input: &[u8], errors: &str) -> Result<(String, usize)> {
        let errors = errors.parse::<ErrorPolicy>()?;
        self.decode(input, errors)
    }
}

impl fmt::Display for BibEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for BibEncoding {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// Decode bytes with the strict policy, keeping only the text.
///
/// # Errors
///
/// Returns `CodecError::UndecodableByte` if any byte cannot be resolved.
pub fn decode_bytes(bytes: &[u8], encoding: BibEncoding) -> Result<String> {
    encoding
        .decode(bytes, ErrorPolicy::Strict)
        .map(|(text, _)| text)
}

/// Encode a string with the strict policy, keeping only the bytes.
///
/// # Errors
///
/// Returns `CodecError::UnmappableCharacter` if any character has no
/// equivalent in `encoding`.
pub fn encode_string(s: &str, encoding: BibEncoding) -> Result<Vec<u8>> {
    encoding
        .encode(s, ErrorPolicy::Strict)
        .map(|(bytes, _)| bytes)
}

/// An encoding together with the error policy to apply.
///
/// # Examples
///
/// ```
/// use bibencodings::{BibEncoding, Codec, ErrorPolicy};
///
/// let codec = Codec::new(BibEncoding::Marc).with_errors(ErrorPolicy::Replace);
/// assert_eq!(codec.encode("\u{0424} \u{00E4}")?, b"? \xe8a");
/// # Ok::<(), bibencodings::CodecError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Codec {
    /// Character encoding
    pub encoding: BibEncoding,
    /// Policy for unmappable characters and undecodable bytes
    pub errors: ErrorPolicy,
}

impl Codec {
    /// Create a strict codec for `encoding`.
    #[must_use]
    pub fn new(encoding: BibEncoding) -> Self {
        Codec {
            encoding,
            errors: ErrorPolicy::Strict,
        }
    }

    /// Create a strict codec from an encoding name.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::UnknownEncoding` if no encoding has that name.
    pub fn lookup(name: &str) -> Result<Self> {
        BibEncoding::from_name(name).map(Self::new)
    }

    /// Use `errors` for subsequent calls.
    #[must_use]
    pub fn with_errors(mut self, errors: ErrorPolicy) -> Self {
        self.errors = errors;
        self
    }

    /// Encode `text`.
    ///
    /// # Errors
    ///
    /// See [`BibEncoding::encode`].
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        self.encoding
            .encode(text, self.errors)
            .map(|(bytes, _)| bytes)
    }

    /// Decode `input`.
    ///
    /// # Errors
    ///
    /// See [`BibEncoding::decode`].
    pub fn decode(&self, input: &[u8]) -> Result<String> {
        self.encoding
            .decode(input, self.errors)
            .map(|(text, _)| text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_aliases() {
        for name in ["iso-5426", "iso5426", "mab2", "MAB2", " iso-5426 "] {
            assert_eq!(BibEncoding::from_name(name).unwrap(), BibEncoding::Iso5426);
        }
        for name in ["iso-5426-xe0", "iso5426-xe0", "mab2-xe0"] {
            assert_eq!(BibEncoding::from_name(name).unwrap(), BibEncoding::Iso5426Xe0);
        }
        for name in ["marc", "usmarc", "ansel", "USMARC"] {
            assert_eq!(BibEncoding::from_name(name).unwrap(), BibEncoding::Marc);
        }
    }

    #[test]
    fn test_unknown_encoding() {
        assert!(matches!(
            BibEncoding::from_name("invalid"),
            Err(CodecError::UnknownEncoding(name)) if name == "invalid"
        ));
        assert!("marc-8".parse::<BibEncoding>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_from_str() {
        for encoding in BibEncoding::ALL {
            assert_eq!(encoding.to_string().parse::<BibEncoding>().unwrap(), encoding);
        }
    }

    #[test]
    fn test_xe0_shares_table_with_iso5426() {
        assert!(std::ptr::eq(
            BibEncoding::Iso5426.table(),
            BibEncoding::Iso5426Xe0.table()
        ));
        assert_eq!(BibEncoding::Marc.table().name(), "marc");
    }

    #[test]
    fn test_named_policy_checked_before_input() {
        for encoding in BibEncoding::ALL {
            assert!(matches!(
                encoding.encode_named("", "invalid"),
                Err(CodecError::InvalidErrorPolicy(_))
            ));
            assert!(matches!(
                encoding.decode_named(b"", "invalid"),
                Err(CodecError::InvalidErrorPolicy(_))
            ));
            assert!(matches!(
                encoding.encode_named("abc", "repr"),
                Err(CodecError::InvalidErrorPolicy(_))
            ));
            assert_eq!(encoding.decode_named(b"\x80", "repr").unwrap().0, "\\x80");
        }
    }

    #[test]
    fn test_strict_helpers() {
        assert_eq!(
            encode_string("Gr\u{00FC}n", BibEncoding::Iso5426).unwrap(),
            b"Gr\xc8un"
        );
        assert_eq!(
            decode_bytes(b"Gr\xe8un", BibEncoding::Marc).unwrap(),
            "Gr\u{00FC}n"
        );
        assert!(decode_bytes(b"\xff", BibEncoding::Marc).is_err());
    }

    #[test]
    fn test_codec_lookup_and_policy() {
        let codec = Codec::lookup("mab2").unwrap();
        assert_eq!(codec, Codec::default());
        assert!(codec.decode(b"\xff").is_err());

        let lenient = codec.with_errors(ErrorPolicy::Ignore);
        assert_eq!(lenient.decode(b"a\xffb").unwrap(), "ab");
        assert_eq!(lenient.encode("a\u{0424}b").unwrap(), b"ab");
    }
}
