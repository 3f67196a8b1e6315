//! Legacy Codecs Example
//!
//! This example demonstrates:
//! - Encoding catalog text as ISO-5426 (MAB2) and USMARC / ANSEL
//! - How diacritics are stored before the letter they modify
//! - Decoding messy real-world data with the different error policies
//! - Selecting a codec by name, as a configuration file would

use bibencodings::{BibEncoding, Codec, ErrorPolicy};

fn main() {
    println!("=== Legacy Bibliographic Encodings ===\n");

    // Example 1: Same text in both encodings
    encoding_comparison_example();

    // Example 2: Data that deviates from the standard
    messy_input_example();

    // Example 3: Error policies
    error_policy_example();

    // Example 4: Choosing a codec by name
    named_codec_example();
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shows the byte layout of the same title in both encodings.
fn encoding_comparison_example() {
    println!("1. Diacritics Precede Their Base Letter");
    let title = "M\u{00FC}ller: Vi\u{1EC7}t Nam";
    println!("   Text: {title}\n");

    for encoding in [BibEncoding::Iso5426, BibEncoding::Marc] {
        match encoding.encode(title, ErrorPolicy::Strict) {
            Ok((bytes, _)) => println!("   {encoding:<10} {}", hex(&bytes)),
            Err(e) => eprintln!("   {encoding:<10} error: {e}"),
        }
    }
    println!();
}

/// Decodes input written by producers that bend the rules.
fn messy_input_example() {
    println!("2. Real-World ISO-5426 Data");

    let samples: [(&str, BibEncoding, &[u8]); 3] = [
        ("Alternative diaeresis byte", BibEncoding::Iso5426, b"R\xc9uckert"),
        ("Diacritic before a precomposed pair", BibEncoding::Iso5426, b"Benk\xcd\xc8o"),
        ("Raw Latin-1 letters", BibEncoding::Iso5426Xe0, b"gherd\xebina"),
    ];
    for (label, encoding, bytes) in samples {
        match encoding.decode(bytes, ErrorPolicy::Strict) {
            Ok((text, _)) => println!("   {label}: {} -> {text}", hex(bytes)),
            Err(e) => eprintln!("   {label}: {e}"),
        }
    }
    println!();
}

/// Compares the policies on a field containing an unknown byte.
fn error_policy_example() {
    println!("3. Error Policies");
    let field = b"Caf\xe2e \xff";
    println!("   Input: {}\n", hex(field));

    for errors in [
        ErrorPolicy::Strict,
        ErrorPolicy::Replace,
        ErrorPolicy::Ignore,
        ErrorPolicy::Repr,
    ] {
        match BibEncoding::Marc.decode(field, errors) {
            Ok((text, _)) => println!("   {errors:<8} {text:?}"),
            Err(e) => println!("   {errors:<8} error: {e}"),
        }
    }
    println!();
}

/// Builds codecs from the names found in configuration files.
fn named_codec_example() {
    println!("4. Codecs by Name");
    for name in ["mab2", "USMARC", "iso-5426-xe0", "marc-8"] {
        match Codec::lookup(name) {
            Ok(codec) => println!("   {name:<14} -> {}", codec.encoding),
            Err(e) => println!("   {name:<14} -> {e}"),
        }
    }
}
