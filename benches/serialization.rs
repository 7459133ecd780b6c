use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use serde_ini_ext::{
    decode, decode_with_options, encode, encode_with_options, from_str, safe, to_string,
    unsafe_str, DecodeOptions, EncodeOptions, IniMap, Value,
};

#[derive(Serialize, Deserialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct Service {
    name: String,
    workers: u32,
    hosts: Vec<String>,
    database: Database,
}

#[derive(Serialize, Deserialize, Clone)]
struct Database {
    url: String,
    timeout: f64,
    pool: Pool,
}

#[derive(Serialize, Deserialize, Clone)]
struct Pool {
    min: u32,
    max: u32,
}

/// A document with `sections` sections of ten entries each, two of them arrays.
fn sectioned_document(sections: usize) -> String {
    let mut text = String::from("; generated\nroot=value\n");
    for s in 0..sections {
        text.push_str(&format!("\n[section{s}]\n"));
        for k in 0..8 {
            text.push_str(&format!("key{k} = value {s}.{k} ; comment\n"));
        }
        text.push_str("list[] = a\nlist[] = b\n");
        text.push_str(&format!("[section{s}.child]\nquoted = \"text with = sign\"\n"));
    }
    text
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn benchmark_deserialize_simple(c: &mut Criterion) {
    let ini = "active=true\nemail=alice@example.com\nid=123\nname=Alice";

    c.bench_function("deserialize_simple_struct", |b| {
        b.iter(|| from_str::<User>(black_box(ini)))
    });
}

fn benchmark_serialize_nested(c: &mut Criterion) {
    let service = Service {
        name: "api".to_string(),
        workers: 8,
        hosts: (0..10).map(|i| format!("host{}.internal", i)).collect(),
        database: Database {
            url: "postgres://db.internal/app".to_string(),
            timeout: 2.5,
            pool: Pool { min: 1, max: 32 },
        },
    };

    c.bench_function("serialize_nested_struct", |b| {
        b.iter(|| to_string(black_box(&service)))
    });

    let ini = to_string(&service).unwrap();
    c.bench_function("deserialize_nested_struct", |b| {
        b.iter(|| from_str::<Service>(black_box(&ini)))
    });
}

fn benchmark_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [10, 100, 1000].iter() {
        let text = sectioned_document(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| decode(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_decode_duplicates(c: &mut Criterion) {
    let text: String = (0..1000).map(|i| format!("path=/opt/{}\n", i)).collect();
    let options = DecodeOptions::new().with_bracketed_array(false);

    c.bench_function("decode_duplicate_keys", |b| {
        b.iter(|| decode_with_options(black_box(&text), options.clone()))
    });
}

fn benchmark_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in [10, 100, 1000].iter() {
        let map = decode(&sectioned_document(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &map, |b, map| {
            b.iter(|| encode(black_box(map)))
        });
    }
    group.finish();
}

fn benchmark_encode_options(c: &mut Criterion) {
    let map = decode(&sectioned_document(100));
    let options = EncodeOptions::new()
        .with_align(true)
        .with_sort(true)
        .with_section("bench");

    c.bench_function("encode_align_sort", |b| {
        b.iter(|| encode_with_options(black_box(&map), options.clone()))
    });
}

fn benchmark_escaping(c: &mut Criterion) {
    let plain = "just a regular value with some words";
    let commented = "value; with # comment characters";
    let quoted = "\"line one\\nline two = three\"";

    c.bench_function("safe_plain", |b| b.iter(|| safe(black_box(plain))));
    c.bench_function("safe_commented", |b| b.iter(|| safe(black_box(commented))));
    c.bench_function("unsafe_quoted", |b| {
        b.iter(|| unsafe_str(black_box(quoted), true))
    });
    c.bench_function("unsafe_trailing_comment", |b| {
        b.iter(|| unsafe_str(black_box("value \\; kept ; dropped"), true))
    });
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let map: IniMap = decode(&sectioned_document(100));
    let value = Value::Object(map.clone());
    let mut group = c.benchmark_group("format_comparison");

    group.bench_function("ini", |b| b.iter(|| encode(black_box(&map))));
    group.bench_function("json", |b| {
        b.iter(|| serde_json::to_string(black_box(&value)))
    });

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let text = sectioned_document(100);

    c.bench_function("roundtrip_document", |b| {
        b.iter(|| {
            let map = decode(black_box(&text));
            decode(&encode(&map))
        })
    });
}

criterion_group!(
    benches,
    benchmark_serialize_simple,
    benchmark_deserialize_simple,
    benchmark_serialize_nested,
    benchmark_decode,
    benchmark_decode_duplicates,
    benchmark_encode,
    benchmark_encode_options,
    benchmark_escaping,
    benchmark_comparison_with_json,
    benchmark_roundtrip
);
criterion_main!(benches);
