#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # bibencodings: legacy bibliographic character sets
//!
//! Converts text between Unicode and the two character sets still found in
//! older library catalog data: ISO-5426 (used by German MAB2 records) and
//! USMARC / ANSEL (MARC-8 without escape sequences).
//!
//! ## Quick Start
//!
//! ```
//! use bibencodings::{BibEncoding, ErrorPolicy};
//!
//! let encoding: BibEncoding = "mab2".parse()?;
//! let (bytes, _) = encoding.encode("Gr\u{00FC}n", ErrorPolicy::Strict)?;
//! assert_eq!(bytes, b"Gr\xc8un");
//!
//! let (text, _) = BibEncoding::Marc.decode(b"Gr\xe8un", ErrorPolicy::Strict)?;
//! assert_eq!(text, "Gr\u{00FC}n");
//! # Ok::<(), bibencodings::CodecError>(())
//! ```
//!
//! ## Modules
//!
//! - [`iso5426`]: ISO-5426 / MAB2 codec, including the `xe0` variant
//! - [`marc`]: USMARC / ANSEL codec
//! - [`encoding`]: Lookup by name and the configurable [`Codec`]
//! - [`batch`]: Parallel decoding of many fields with Rayon
//! - [`tables`]: Character tables shared by both codecs
//! - [`cursor`]: Byte cursor with lookahead used while decoding
//! - [`policy`]: Error policies for unmappable input
//! - [`error`]: Error types and result type

pub mod batch;
mod codec;
pub mod cursor;
pub mod encoding;
pub mod error;
pub mod iso5426;
pub mod marc;
pub mod policy;
pub mod tables;

pub use cursor::DecodeCursor;
pub use encoding::{decode_bytes, encode_string, BibEncoding, Codec};
pub use error::{CodecError, Result};
pub use policy::ErrorPolicy;
pub use tables::{ByteOverrides, CharTable};
