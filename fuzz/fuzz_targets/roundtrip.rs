#![no_main]

use bibencodings::{BibEncoding, ErrorPolicy};
use libfuzzer_sys::fuzz_target;

// Re-encoding decoded text must produce decodable bytes. ANSEL keeps
// diacritics in place on encode, so its text survives unchanged; ISO-5426
// moves lone diacritics and may compose them with a neighbour.
fuzz_target!(|data: &[u8]| {
    for encoding in [BibEncoding::Iso5426, BibEncoding::Marc] {
        let Ok((text, _)) = encoding.decode(data, ErrorPolicy::Strict) else {
            continue;
        };
        // Control characters decode as ASCII but have no table entry.
        let Ok((bytes, _)) = encoding.encode(&text, ErrorPolicy::Strict) else {
            continue;
        };
        let (again, _) = encoding
            .decode(&bytes, ErrorPolicy::Strict)
            .expect("encoded text is decodable");
        if encoding == BibEncoding::Marc {
            assert_eq!(again, text);
        }
    }
});
