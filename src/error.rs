//! Error types for codec operations.
//!
//! This module provides the [`CodecError`] type for all encode/decode
//! operations and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for all codec operations.
///
/// Whether an unmappable character or undecodable byte surfaces as an error
/// depends on the active [`ErrorPolicy`](crate::ErrorPolicy); only the
/// strict policy produces [`CodecError::UnmappableCharacter`] and
/// [`CodecError::UndecodableByte`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The error policy name is not recognised, or the policy is not
    /// available in this direction (`repr` when encoding).
    #[error("Invalid errors argument: {0}")]
    InvalidErrorPolicy(String),

    /// A character has no entry in the encoding's table.
    #[error("Can't encode character {character:?} at position {position}")]
    UnmappableCharacter {
        /// The offending character.
        character: char,
        /// Index of the character in the input, counted in chars.
        position: usize,
    },

    /// A byte or byte group could not be resolved after all fallbacks.
    #[error(
        "Can't decode byte{} {} at position {position} (context {})",
        plural_suffix(.bytes),
        escape_bytes(.bytes),
        escape_bytes(.context)
    )]
    UndecodableByte {
        /// The failing byte, or the byte group whose lookup was in flight.
        bytes: Vec<u8>,
        /// Offset of the failing byte in the input.
        position: usize,
        /// Up to three bytes either side of the failing byte.
        context: Vec<u8>,
    },

    /// No codec is registered under the requested name.
    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),
}

/// Convenience type alias for [`std::result::Result`] with [`CodecError`].
pub type Result<T> = std::result::Result<T, CodecError>;

fn plural_suffix(bytes: &[u8]) -> &'static str {
    if bytes.len() > 1 {
        "s"
    } else {
        ""
    }
}

/// Render bytes the way a byte-string literal would show them.
fn escape_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 4 + 3);
    out.push_str("b\"");
    for &b in bytes {
        if (b.is_ascii_graphic() && b != b'"' && b != b'\\') || b == b' ' {
            out.push(char::from(b));
        } else {
            out.push_str(&format!("\\x{b:02x}"));
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undecodable_single_byte_message() {
        let err = CodecError::UndecodableByte {
            bytes: vec![0xFF],
            position: 4,
            context: b"ab\xffc".to_vec(),
        };
        assert_eq!(
            err.to_string(),
            "Can't decode byte b\"\\xff\" at position 4 (context b\"ab\\xffc\")"
        );
    }

    #[test]
    fn test_undecodable_group_message_is_plural() {
        let err = CodecError::UndecodableByte {
            bytes: vec![0xC1, 0xC2, 0x80],
            position: 0,
            context: vec![0xC1, 0xC2, 0x80],
        };
        assert!(err.to_string().starts_with("Can't decode bytes "));
    }

    #[test]
    fn test_unmappable_message() {
        let err = CodecError::UnmappableCharacter {
            character: 'Ф',
            position: 2,
        };
        assert_eq!(
            err.to_string(),
            "Can't encode character 'Ф' at position 2"
        );
    }
}
