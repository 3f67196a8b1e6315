//! The shared tables are safe to use from many threads at once

use std::sync::Arc;
use std::thread;

use bibencodings::batch::{decode_batch_lenient, decode_batch_parallel, encode_batch_parallel};
use bibencodings::{BibEncoding, ErrorPolicy};

const TITLES: [&str; 4] = [
    "Die Br\u{00FC}der Karamasow",
    "\u{00C6}sthetik und Kritik",
    "Stra\u{00DF}enbahn in K\u{00F6}ln",
    "Les Mis\u{00E9}rables",
];

#[test]
fn test_first_use_from_many_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            thread::spawn(move || {
                let encoding = if i % 2 == 0 {
                    BibEncoding::Iso5426
                } else {
                    BibEncoding::Marc
                };
                let title = TITLES[i % TITLES.len()];
                let (bytes, _) = encoding.encode(title, ErrorPolicy::Strict).unwrap();
                let (text, _) = encoding.decode(&bytes, ErrorPolicy::Strict).unwrap();
                assert_eq!(text, title);
                encoding.table().len()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("worker panicked") > 500);
    }
}

#[test]
fn test_shared_input_across_threads() {
    let encoded: Arc<Vec<Vec<u8>>> = Arc::new(
        TITLES
            .iter()
            .map(|title| BibEncoding::Marc.encode(title, ErrorPolicy::Strict).unwrap().0)
            .collect(),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let encoded = Arc::clone(&encoded);
            thread::spawn(move || {
                decode_batch_parallel(BibEncoding::Marc, &encoded, ErrorPolicy::Strict).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("worker panicked"), TITLES);
    }
}

#[test]
fn test_large_batch_round_trip() {
    let texts: Vec<String> = (0..2_000)
        .map(|i| format!("{} ({i})", TITLES[i % TITLES.len()]))
        .collect();
    let encoded = encode_batch_parallel(BibEncoding::Iso5426, &texts, ErrorPolicy::Strict).unwrap();
    let decoded =
        decode_batch_parallel(BibEncoding::Iso5426, &encoded, ErrorPolicy::Strict).unwrap();
    assert_eq!(decoded, texts);
}

#[test]
fn test_lenient_batch_reports_each_failure() {
    let mut fields: Vec<Vec<u8>> = (0..100).map(|i| format!("ok {i}").into_bytes()).collect();
    fields[17].push(0xFF);
    fields[83].push(0xFF);

    let failed: Vec<usize> = decode_batch_lenient(BibEncoding::Marc, &fields)
        .into_iter()
        .filter(|(_, result)| result.is_err())
        .map(|(idx, _)| idx)
        .collect();
    assert_eq!(failed, vec![17, 83]);
}
