//! Integration tests for the USMARC / ANSEL codec

mod common;

use bibencodings::{marc, BibEncoding, CodecError, ErrorPolicy};
use common::UMLAUT_SAMPLE;

#[test]
fn test_umlaut_sample() {
    let expected: &[u8] = b"abcdefg\xe8a\xe8o\xe8u\xe3\xf2a";
    assert_eq!(
        marc::encode(UMLAUT_SAMPLE, ErrorPolicy::Strict).unwrap(),
        (expected.to_vec(), 11)
    );
    assert_eq!(
        marc::decode(expected, ErrorPolicy::Strict).unwrap(),
        (UMLAUT_SAMPLE.to_string(), 16)
    );
}

#[test]
fn test_every_reverse_entry_round_trips() {
    for (bytes, ch) in marc::table().reverse_entries() {
        let text = ch.to_string();
        assert_eq!(
            marc::encode(&text, ErrorPolicy::Strict).unwrap().0,
            bytes,
            "encoding {ch:?}"
        );
        assert_eq!(
            marc::decode(bytes, ErrorPolicy::Strict).unwrap().0,
            text,
            "decoding {bytes:?}"
        );
    }
}

#[test]
fn test_stacked_diacritics_without_base_letter() {
    assert_eq!(
        marc::decode(b"\xe5\xe80", ErrorPolicy::Strict).unwrap().0,
        "\u{0304}\u{0308}0"
    );
}

#[test]
fn test_no_diaeresis_alias() {
    // 0xE9 is its own diacritic in ANSEL, not a second diaeresis.
    assert_ne!(
        marc::decode(b"\xe9a", ErrorPolicy::Strict).unwrap().0,
        marc::decode(b"\xe8a", ErrorPolicy::Strict).unwrap().0
    );
}

#[test]
fn test_encode_policies() {
    assert!(matches!(
        marc::encode("\u{0424}", ErrorPolicy::Strict),
        Err(CodecError::UnmappableCharacter {
            character: '\u{0424}',
            position: 0
        })
    ));
    assert_eq!(marc::encode("\u{0424}", ErrorPolicy::Ignore).unwrap().0, b"");
    assert_eq!(marc::encode("\u{0424}", ErrorPolicy::Replace).unwrap().0, b"?");
    assert!(matches!(
        marc::encode("\u{0424}", ErrorPolicy::Repr),
        Err(CodecError::InvalidErrorPolicy(_))
    ));
    assert!(matches!(
        BibEncoding::Marc.encode_named("\u{0424}", "invalid"),
        Err(CodecError::InvalidErrorPolicy(_))
    ));
}

#[test]
fn test_decode_policies() {
    assert!(matches!(
        marc::decode(b"\xff", ErrorPolicy::Strict),
        Err(CodecError::UndecodableByte { position: 0, .. })
    ));
    assert_eq!(marc::decode(b"\xff", ErrorPolicy::Ignore).unwrap().0, "");
    assert_eq!(
        marc::decode(b"\xff", ErrorPolicy::Replace).unwrap().0,
        "\u{FFFD}"
    );
    assert_eq!(marc::decode(b"\xff", ErrorPolicy::Repr).unwrap().0, "\\xff");
    assert!(matches!(
        BibEncoding::Marc.decode_named(b"\xff", "invalid"),
        Err(CodecError::InvalidErrorPolicy(_))
    ));
}

#[test]
fn test_unknown_encoding_name() {
    assert!(matches!(
        "invalid".parse::<BibEncoding>(),
        Err(CodecError::UnknownEncoding(_))
    ));
}
