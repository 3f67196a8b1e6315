//! Common test helpers shared across the integration suites.

use bibencodings::{iso5426, marc, BibEncoding, CharTable};

/// Whether `byte` starts a combining group in `encoding`.
#[allow(dead_code)]
pub fn is_combining(encoding: BibEncoding, byte: u8) -> bool {
    match encoding {
        BibEncoding::Iso5426 | BibEncoding::Iso5426Xe0 => {
            (iso5426::COMBINING_FIRST..=iso5426::COMBINING_LAST).contains(&byte)
        }
        BibEncoding::Marc => marc::COMBINING_BYTES.contains(&byte),
    }
}

/// Characters that survive an encode/decode round trip in any sequence.
///
/// A character qualifies when it is the decode target of its own byte
/// sequence, the sequence ends in a base byte and every earlier byte is a
/// diacritic. Lone diacritics and characters ending in one would merge with
/// their neighbours on decoding.
#[allow(dead_code)]
pub fn round_trip_alphabet(encoding: BibEncoding) -> Vec<char> {
    let table: &CharTable = encoding.table();
    table
        .forward_entries()
        .filter(|&(ch, bytes)| {
            let Some((&last, leading)) = bytes.split_last() else {
                return false;
            };
            table.decode_sequence(bytes) == Some(ch)
                && !is_combining(encoding, last)
                && leading.iter().all(|&b| is_combining(encoding, b))
        })
        .map(|(ch, _)| ch)
        .collect()
}

/// The mixed-script sample shared by both encodings: ASCII, three umlauts
/// and a letter with two diacritics.
#[allow(dead_code)]
pub const UMLAUT_SAMPLE: &str = "abcdefg\u{00E4}\u{00F6}\u{00FC}\u{1EAD}";
