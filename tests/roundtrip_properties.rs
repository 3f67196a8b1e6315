//! Property tests: decoding what was encoded gives back the input

mod common;

use bibencodings::{BibEncoding, ErrorPolicy};
use common::round_trip_alphabet;
use proptest::prelude::*;
use proptest::sample::select;

fn text_over(encoding: BibEncoding) -> impl Strategy<Value = String> {
    prop::collection::vec(select(round_trip_alphabet(encoding)), 0..40)
        .prop_map(|chars| chars.into_iter().collect())
}

/// ISO-5426 text whose encoding avoids the bytes the `xe0` variant
/// reads as Latin-1.
fn latin1_free_text() -> impl Strategy<Value = String> {
    let table = BibEncoding::Iso5426.table();
    let alphabet: Vec<char> = round_trip_alphabet(BibEncoding::Iso5426)
        .into_iter()
        .filter(|&ch| {
            table
                .encode_char(ch)
                .is_some_and(|bytes| !bytes.iter().any(|&b| b == 0xA4 || b >= 0xE0))
        })
        .collect();
    prop::collection::vec(select(alphabet), 0..40).prop_map(|chars| chars.into_iter().collect())
}

fn round_trips(encoding: BibEncoding, text: &str) -> Result<(), TestCaseError> {
    let (bytes, consumed) = encoding.encode(text, ErrorPolicy::Strict).unwrap();
    prop_assert_eq!(consumed, text.chars().count());
    let (decoded, position) = encoding.decode(&bytes, ErrorPolicy::Strict).unwrap();
    prop_assert_eq!(position, bytes.len());
    prop_assert_eq!(decoded, text);
    Ok(())
}

#[test]
fn test_alphabets_cover_most_of_each_table() {
    assert_eq!(round_trip_alphabet(BibEncoding::Iso5426).len(), 591);
    assert_eq!(round_trip_alphabet(BibEncoding::Marc).len(), 570);
}

proptest! {
    #[test]
    fn iso5426_round_trip(text in text_over(BibEncoding::Iso5426)) {
        round_trips(BibEncoding::Iso5426, &text)?;
    }

    #[test]
    fn xe0_decodes_what_iso5426_encodes(text in latin1_free_text()) {
        let (bytes, _) = BibEncoding::Iso5426.encode(&text, ErrorPolicy::Strict).unwrap();
        let (decoded, _) = BibEncoding::Iso5426Xe0.decode(&bytes, ErrorPolicy::Strict).unwrap();
        prop_assert_eq!(decoded, text);
    }

    #[test]
    fn marc_round_trip(text in text_over(BibEncoding::Marc)) {
        round_trips(BibEncoding::Marc, &text)?;
    }

    #[test]
    fn lenient_decode_never_fails(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        for encoding in BibEncoding::ALL {
            for errors in [ErrorPolicy::Replace, ErrorPolicy::Ignore, ErrorPolicy::Repr] {
                let (_, position) = encoding.decode(&bytes, errors).unwrap();
                prop_assert_eq!(position, bytes.len());
            }
        }
    }
}
