#![allow(missing_docs, unused_doc_comments, unused_attributes)]
//! Benchmarks for the bibencodings codecs.
//!
//! Measures encoding and decoding throughput of catalog-like text using
//! Criterion.rs for statistical analysis.

use bibencodings::batch::decode_batch_parallel;
use bibencodings::{BibEncoding, ErrorPolicy};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

const TITLES: [&str; 5] = [
    "Die Br\u{00FC}der Karamasow",
    "Abr\u{00E9}g\u{00E9} historique de l'origine",
    "Gramatica dl ladin de gherd\u{00EB}ina",
    "Stra\u{00DF}enbahnen in K\u{00F6}ln und D\u{00FC}sseldorf",
    "The Great Gatsby",
];

/// A field body of roughly 10 KiB built from the sample titles.
fn sample_text() -> String {
    TITLES.iter().cycle().take(300).copied().collect::<Vec<_>>().join(" ; ")
}

/// Benchmark encoding 10 KiB of text.
fn benchmark_encode(c: &mut Criterion) {
    let text = sample_text();
    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Bytes(text.len() as u64));
    for encoding in [BibEncoding::Iso5426, BibEncoding::Marc] {
        group.bench_function(encoding.name(), |b| {
            b.iter(|| encoding.encode(black_box(&text), ErrorPolicy::Strict));
        });
    }
    group.finish();
}

/// Benchmark decoding 10 KiB of text.
fn benchmark_decode(c: &mut Criterion) {
    let text = sample_text();
    let mut group = c.benchmark_group("decode");
    for encoding in BibEncoding::ALL {
        let Ok((bytes, _)) = encoding.encode(&text, ErrorPolicy::Strict) else {
            continue;
        };
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        group.bench_function(encoding.name(), |b| {
            b.iter(|| encoding.decode(black_box(&bytes), ErrorPolicy::Strict));
        });
    }
    group.finish();
}

/// Benchmark decoding input with an undecodable byte every 64 bytes.
fn benchmark_decode_with_replacement(c: &mut Criterion) {
    let text = sample_text();
    let (mut bytes, _) = BibEncoding::Marc
        .encode(&text, ErrorPolicy::Strict)
        .expect("sample text is representable");
    for idx in (0..bytes.len()).step_by(64) {
        bytes[idx] = 0xFF;
    }

    c.bench_function("decode_marc_replace", |b| {
        b.iter(|| BibEncoding::Marc.decode(black_box(&bytes), ErrorPolicy::Replace));
    });
}

/// Benchmark decoding 10,000 short fields sequentially and with Rayon.
fn benchmark_batch(c: &mut Criterion) {
    let fields: Vec<Vec<u8>> = TITLES
        .iter()
        .cycle()
        .take(10_000)
        .map(|title| {
            BibEncoding::Iso5426
                .encode(title, ErrorPolicy::Strict)
                .expect("sample title is representable")
                .0
        })
        .collect();

    let mut group = c.benchmark_group("batch_10k_fields");
    group.bench_function("sequential", |b| {
        b.iter(|| {
            fields
                .iter()
                .map(|field| BibEncoding::Iso5426.decode(black_box(field), ErrorPolicy::Strict))
                .collect::<Vec<_>>()
        });
    });
    group.bench_function("parallel", |b| {
        b.iter(|| {
            decode_batch_parallel(BibEncoding::Iso5426, black_box(&fields), ErrorPolicy::Strict)
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_encode,
    benchmark_decode,
    benchmark_decode_with_replacement,
    benchmark_batch
);
criterion_main!(benches);
