//! Error policies for unmappable characters and undecodable bytes.
//!
//! A policy decides, per call, whether a unit with no table entry aborts the
//! call or is replaced, dropped, or escaped in place. Policies are usually
//! given by name (`"strict"`, `"replace"`, `"ignore"`, `"repr"`) and parsed
//! with [`str::parse`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Result};

/// Placeholder byte emitted by [`ErrorPolicy::Replace`] when encoding.
pub const ENCODE_REPLACEMENT: u8 = b'?';

/// Placeholder character emitted by [`ErrorPolicy::Replace`] when decoding.
pub const DECODE_REPLACEMENT: char = '\u{FFFD}';

/// Strategy for handling units that cannot be converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Fail the whole call (default)
    #[default]
    Strict,
    /// Substitute `?` when encoding, U+FFFD when decoding
    Replace,
    /// Drop the unit silently
    Ignore,
    /// Decode only: emit the offending byte as a `\xNN` literal
    Repr,
}

impl ErrorPolicy {
    /// Policy name as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Replace => "replace",
            Self::Ignore => "ignore",
            Self::Repr => "repr",
        }
    }

    /// Check that this policy may be used when encoding.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::InvalidErrorPolicy` for [`ErrorPolicy::Repr`],
    /// which has no encode-side escape format.
    pub fn for_encoding(self) -> Result<Self> {
        match self {
            Self::Repr => Err(CodecError::InvalidErrorPolicy(format!(
                "{} is not supported when encoding",
                self.as_str()
            ))),
            _ => Ok(self),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ErrorPolicy {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "strict" => Ok(Self::Strict),
            "replace" => Ok(Self::Replace),
            "ignore" => Ok(Self::Ignore),
            "repr" => Ok(Self::Repr),
            _ => Err(CodecError::InvalidErrorPolicy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        assert_eq!("strict".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::Strict);
        assert_eq!("replace".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::Replace);
        assert_eq!("ignore".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::Ignore);
        assert_eq!("repr".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::Repr);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(matches!(
            "Strict".parse::<ErrorPolicy>(),
            Err(CodecError::InvalidErrorPolicy(name)) if name == "Strict"
        ));
        assert!("invalid".parse::<ErrorPolicy>().is_err());
        assert!("".parse::<ErrorPolicy>().is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        for policy in [
            ErrorPolicy::Strict,
            ErrorPolicy::Replace,
            ErrorPolicy::Ignore,
            ErrorPolicy::Repr,
        ] {
            assert_eq!(policy.to_string().parse::<ErrorPolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_repr_rejected_for_encoding() {
        assert!(ErrorPolicy::Repr.for_encoding().is_err());
        assert_eq!(
            ErrorPolicy::Ignore.for_encoding().unwrap(),
            ErrorPolicy::Ignore
        );
    }

    #[test]
    fn test_default_is_strict() {
        assert_eq!(ErrorPolicy::default(), ErrorPolicy::Strict);
    }
}
