//! Integration tests for the ISO-5426 / MAB2 codec

mod common;

use bibencodings::{iso5426, BibEncoding, CodecError, ErrorPolicy};
use common::UMLAUT_SAMPLE;

fn assert_iso5426(bytes: &[u8], text: &str) {
    assert_eq!(
        iso5426::decode(bytes, ErrorPolicy::Strict).unwrap().0,
        text,
        "decoding {bytes:?}"
    );
    assert_eq!(
        iso5426::encode(text, ErrorPolicy::Strict).unwrap().0,
        bytes,
        "encoding {text:?}"
    );
}

#[test]
fn test_umlaut_sample() {
    let expected: &[u8] = b"abcdefg\xc8a\xc8o\xc8u\xc3\xd6a";
    assert_iso5426(expected, UMLAUT_SAMPLE);

    // 0xC9 is accepted as the diaeresis on input.
    let aliased = iso5426::decode(b"abcdefg\xc9a\xc9o\xc9u\xc3\xd6a", ErrorPolicy::Strict).unwrap();
    assert_eq!(aliased.0, UMLAUT_SAMPLE);
    assert_eq!(aliased.1, 16);
}

#[test]
fn test_every_reverse_entry_round_trips() {
    let table = iso5426::table();
    for (bytes, ch) in table.reverse_entries() {
        let text = ch.to_string();
        assert_eq!(
            iso5426::encode(&text, ErrorPolicy::Strict).unwrap().0,
            bytes,
            "encoding {ch:?}"
        );
        assert_eq!(
            iso5426::decode(bytes, ErrorPolicy::Strict).unwrap().0,
            text,
            "decoding {bytes:?}"
        );
    }
}

#[test]
fn test_diaeresis_alias_matches_canonical_byte() {
    let table = iso5426::table();
    for (bytes, _) in table.reverse_entries() {
        if bytes.len() < 2 || !bytes.contains(&iso5426::DIAERESIS) {
            continue;
        }
        let aliased: Vec<u8> = bytes
            .iter()
            .map(|&b| {
                if b == iso5426::DIAERESIS {
                    iso5426::DIAERESIS_ALIAS
                } else {
                    b
                }
            })
            .collect();
        assert_eq!(
            iso5426::decode(&aliased, ErrorPolicy::Strict).unwrap(),
            iso5426::decode(bytes, ErrorPolicy::Strict).unwrap(),
            "{bytes:?}"
        );
    }
}

#[test]
fn test_lone_alias_byte_is_undecodable() {
    let err = iso5426::decode(b"\xc9", ErrorPolicy::Strict).unwrap_err();
    assert!(matches!(err, CodecError::UndecodableByte { position: 0, .. }));
}

#[test]
fn test_regression_cases() {
    assert_eq!(
        iso5426::decode(b"\xc6m", ErrorPolicy::Strict).unwrap().0,
        "m\u{0306}"
    );
    assert_iso5426(b"\xc5\xc7A", "\u{01E0}");
    assert_eq!(
        iso5426::decode(b"\xca\x1e", ErrorPolicy::Strict).unwrap().0,
        "\x1e\u{030A}"
    );
    assert_iso5426(
        b"Abr\xc2eg\xc2e Historique De L'Origine",
        "Abr\u{00E9}g\u{00E9} Historique De L'Origine",
    );
    assert_iso5426(b"\xca4", "4\u{030A}");
}

#[test]
fn test_denormalized_input() {
    // Double acute over an o with diaeresis, written with the alias byte.
    assert_eq!(
        iso5426::decode(b"Benk\xcd\xc9o", ErrorPolicy::Strict).unwrap().0,
        "Benk\u{00F6}\u{030B}"
    );
    assert_iso5426(b"Benk\xcd\xc8o", "Benk\u{00F6}\u{030B}");
    assert_iso5426(b"Benk\xc8\xcdo", "Benk\u{0151}\u{0308}");
}

#[test]
fn test_encode_leading_combiners() {
    // Combiners with no base before them stack in front of the first one.
    assert_eq!(
        iso5426::encode("\u{0301}\u{0300}a", ErrorPolicy::Strict).unwrap(),
        (b"\xc1\xc2a".to_vec(), 3)
    );
    assert_eq!(
        iso5426::encode("\u{0301}\u{0300}\u{0308}a", ErrorPolicy::Strict)
            .unwrap()
            .0,
        b"\xc1\xc8\xc2a"
    );
}

#[test]
fn test_encode_combiners_after_ignored_character() {
    assert_eq!(
        iso5426::encode("a\u{0424}\u{0301}\u{0300}", ErrorPolicy::Ignore)
            .unwrap()
            .0,
        b"a\xc2\xc1"
    );
    assert_eq!(
        iso5426::encode("\u{0424}\u{0301}\u{0300}a", ErrorPolicy::Ignore)
            .unwrap()
            .0,
        b"\xc2\xc1a"
    );
}

#[test]
fn test_encode_policies() {
    assert!(matches!(
        iso5426::encode("\u{0424}", ErrorPolicy::Strict),
        Err(CodecError::UnmappableCharacter {
            character: '\u{0424}',
            position: 0
        })
    ));
    assert_eq!(
        iso5426::encode("\u{0424}", ErrorPolicy::Ignore).unwrap(),
        (Vec::new(), 1)
    );
    assert_eq!(
        iso5426::encode("\u{0424}", ErrorPolicy::Replace).unwrap(),
        (b"?".to_vec(), 1)
    );
    assert!(matches!(
        BibEncoding::Iso5426.encode_named("\u{0424}", "invalid"),
        Err(CodecError::InvalidErrorPolicy(_))
    ));
}

#[test]
fn test_decode_policies() {
    assert!(matches!(
        iso5426::decode(b"\xff", ErrorPolicy::Strict),
        Err(CodecError::UndecodableByte { position: 0, .. })
    ));
    assert_eq!(
        iso5426::decode(b"\xff", ErrorPolicy::Ignore).unwrap(),
        (String::new(), 1)
    );
    assert_eq!(
        iso5426::decode(b"\xff", ErrorPolicy::Replace).unwrap().0,
        "\u{FFFD}"
    );
    assert_eq!(
        iso5426::decode(b"\xff", ErrorPolicy::Repr).unwrap().0,
        "\\xff"
    );
    assert!(matches!(
        BibEncoding::Iso5426.decode_named(b"\xff", "invalid"),
        Err(CodecError::InvalidErrorPolicy(_))
    ));
}

#[test]
fn test_error_message_shows_offending_bytes() {
    let err = iso5426::decode(b"Caf\xdc\x80", ErrorPolicy::Strict).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("position 3"), "{message}");
    assert!(message.contains("\\xdc\\x80"), "{message}");
}

#[test]
fn test_xe0_variant() {
    let encoding = BibEncoding::Iso5426Xe0;
    assert_eq!(
        encoding.encode(UMLAUT_SAMPLE, ErrorPolicy::Strict).unwrap().0,
        b"abcdefg\xc8a\xc8o\xc8u\xc3\xd6a"
    );
    assert_eq!(
        encoding
            .decode(b"abcdefg\xc9a\xc9o\xc9u\xc3\xd6a", ErrorPolicy::Strict)
            .unwrap()
            .0,
        UMLAUT_SAMPLE
    );
    assert_eq!(
        encoding
            .decode(b"gramatica dl ladin de gherd\xebina", ErrorPolicy::Strict)
            .unwrap()
            .0,
        "gramatica dl ladin de gherd\u{00EB}ina"
    );
    assert_eq!(
        encoding
            .decode(b"Micur\xe1 de R\xc9u", ErrorPolicy::Strict)
            .unwrap()
            .0,
        "Micur\u{00E1} de R\u{00FC}"
    );
    assert_eq!(
        encoding.decode(b"\xc5\xc8U", ErrorPolicy::Strict).unwrap().0,
        "\u{01D5}"
    );
    assert_eq!(
        encoding.decode(b"\xc5\xc8o", ErrorPolicy::Strict).unwrap().0,
        "\u{022B}"
    );
}
