#![no_main]

use bibencodings::{BibEncoding, ErrorPolicy};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    for encoding in BibEncoding::ALL {
        let _ = encoding.decode(data, ErrorPolicy::Strict);
        for errors in [ErrorPolicy::Replace, ErrorPolicy::Ignore, ErrorPolicy::Repr] {
            let (_, position) = encoding
                .decode(data, errors)
                .expect("lenient policies never fail");
            assert_eq!(position, data.len());
        }
    }
});
