//! Benchmarks for memc value encoding and the in-memory client path

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use memc::codec::{decode, encode};
use memc::{Client, Config, MemoryTransport};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct Person {
    name: String,
    age: i64,
}

memc::record!(Person);

fn codec_benchmarks(c: &mut Criterion) {
    let text = "x".repeat(1024);
    let person = Person {
        name: "Seth".to_string(),
        age: 34,
    };
    let text_bytes = encode(text.as_str()).unwrap();
    let person_bytes = encode(&person).unwrap();

    c.bench_function("encode_string_1k", |b| b.iter(|| encode(black_box(text.as_str()))));
    c.bench_function("decode_string_1k", |b| b.iter(|| decode::<String>(black_box(&text_bytes))));
    c.bench_function("encode_u64", |b| b.iter(|| encode(black_box(&u64::MAX))));
    c.bench_function("decode_u64", |b| b.iter(|| decode::<u64>(black_box(&[0xff; 8]))));
    c.bench_function("encode_record", |b| b.iter(|| encode(black_box(&person))));
    c.bench_function("decode_record", |b| b.iter(|| decode::<Person>(black_box(&person_bytes))));
}

fn client_benchmarks(c: &mut Criterion) {
    let client = Client::with_transport(Config::default(), MemoryTransport::new());
    client.set("bench", &42u64).unwrap();

    c.bench_function("memory_set", |b| b.iter(|| client.set(black_box("bench"), &42u64)));
    c.bench_function("memory_get", |b| b.iter(|| client.get::<u64>(black_box("bench"))));
}

criterion_group!(benches, codec_benchmarks, client_benchmarks);
criterion_main!(benches);
