//! Parallel decoding of many independent fields using Rayon.
//!
//! A MARC or MAB2 record holds dozens of fields, and a file thousands of
//! records, each of which decodes independently. The character tables are
//! immutable once built, so every worker thread reads them without locking.
//!
//! # Examples
//!
//! ```
//! use bibencodings::batch::decode_batch_parallel;
//! use bibencodings::{BibEncoding, ErrorPolicy};
//!
//! let fields: [&[u8]; 3] = [b"Goethe", b"M\xc8uller", b"Faust"];
//! let decoded = decode_batch_parallel(BibEncoding::Iso5426, &fields, ErrorPolicy::Strict)?;
//! assert_eq!(decoded, vec!["Goethe", "M\u{00FC}ller", "Faust"]);
//! # Ok::<(), bibencodings::CodecError>(())
//! ```

use log::debug;
use rayon::prelude::*;

use crate::encoding::BibEncoding;
use crate::error::Result;
use crate::policy::ErrorPolicy;

/// Decode a batch of fields in parallel on the Rayon thread pool.
///
/// Results are returned in input order.
///
/// # Errors
///
/// Returns the error of the lowest-indexed field that failed. Decode errors
/// carry positions relative to that field.
pub fn decode_batch_parallel<B>(
    encoding: BibEncoding,
    fields: &[B],
    errors: ErrorPolicy,
) -> Result<Vec<String>>
where
    B: AsRef<[u8]> + Sync,
{
    debug!(
        "decoding {} fields as {encoding} on {} threads",
        fields.len(),
        rayon::current_num_threads()
    );

    let results: Vec<Result<String>> = fields
        .par_iter()
        .map(|field| {
            encoding
                .decode(field.as_ref(), errors)
                .map(|(text, _)| text)
        })
        .collect();

    results.into_iter().collect()
}

/// Encode a batch of strings in parallel on the Rayon thread pool.
///
/// # Errors
///
/// Returns the error of the lowest-indexed string that failed.
pub fn encode_batch_parallel<S>(
    encoding: BibEncoding,
    texts: &[S],
    errors: ErrorPolicy,
) -> Result<Vec<Vec<u8>>>
where
    S: AsRef<str> + Sync,
{
    let errors = errors.for_encoding()?;
    texts
        .par_iter()
        .map(|text| {
            encoding
                .encode(text.as_ref(), errors)
                .map(|(bytes, _)| bytes)
        })
        .collect::<Vec<Result<Vec<u8>>>>()
        .into_iter()
        .collect()
}

/// Decode a batch and report per-field failures instead of stopping.
///
/// Each entry is the field's index and its decode result, in input order.
#[must_use]
pub fn decode_batch_lenient<B>(
    encoding: BibEncoding,
    fields: &[B],
) -> Vec<(usize, Result<String>)>
where
    B: AsRef<[u8]> + Sync,
{
    fields
        .par_iter()
        .enumerate()
        .map(|(idx, field)| {
            let result = encoding
                .decode(field.as_ref(), ErrorPolicy::Strict)
                .map(|(text, _)| text);
            (idx, result)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;

    #[test]
    fn test_decode_batch_preserves_order() {
        let fields: Vec<Vec<u8>> = (0..200)
            .map(|i| {
                let mut bytes = format!("field {i} ").into_bytes();
                bytes.extend_from_slice(b"\xe8a");
                bytes
            })
            .collect();
        let decoded = decode_batch_parallel(BibEncoding::Marc, &fields, ErrorPolicy::Strict)
            .unwrap();
        assert_eq!(decoded.len(), 200);
        for (i, text) in decoded.iter().enumerate() {
            assert_eq!(text, &format!("field {i} \u{00E4}"));
        }
    }

    #[test]
    fn test_decode_batch_reports_first_failure() {
        let fields: [&[u8]; 3] = [b"ok", b"bad\xff", b"worse\xff\xff"];
        let err = decode_batch_parallel(BibEncoding::Marc, &fields, ErrorPolicy::Strict)
            .unwrap_err();
        assert!(matches!(
            err,
            CodecError::UndecodableByte { position: 3, .. }
        ));
    }

    #[test]
    fn test_decode_batch_with_replace_policy() {
        let fields: [&[u8]; 2] = [b"a\xff", b"b"];
        let decoded =
            decode_batch_parallel(BibEncoding::Iso5426, &fields, ErrorPolicy::Replace).unwrap();
        assert_eq!(decoded, vec!["a\u{FFFD}", "b"]);
    }

    #[test]
    fn test_encode_batch_round_trip() {
        let texts = ["Stra\u{00DF}e", "K\u{00F6}ln", "plain"];
        let encoded =
            encode_batch_parallel(BibEncoding::Iso5426, &texts, ErrorPolicy::Strict).unwrap();
        let decoded =
            decode_batch_parallel(BibEncoding::Iso5426, &encoded, ErrorPolicy::Strict).unwrap();
        assert_eq!(decoded, texts);
    }

    #[test]
    fn test_encode_batch_rejects_repr() {
        let texts = ["a"];
        assert!(matches!(
            encode_batch_parallel(BibEncoding::Marc, &texts, ErrorPolicy::Repr),
            Err(CodecError::InvalidErrorPolicy(_))
        ));
    }

    #[test]
    fn test_lenient_batch_keeps_going() {
        let fields: [&[u8]; 3] = [b"ok", b"\xff", b"fine"];
        let results = decode_batch_lenient(BibEncoding::Marc, &fields);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].1.as_deref(), Ok("ok"));
        assert!(results[1].1.is_err());
        assert_eq!(results[2].0, 2);
    }
}
