use attrgen::parse;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

const DEFINITIONS: [&str; 6] = [
    "title",
    "age:int",
    "id:hkey",
    "age:int:hkey,default_value{0}",
    "pk:string:hkey,db_attr_name{PK},ddb_type{s},persist_nil",
    "tags:sset:rkey",
];

/// Benchmark parsing a mixed batch of valid definitions
fn bench_parse_valid(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_valid");
    group.throughput(Throughput::Elements(DEFINITIONS.len() as u64));

    group.bench_function("mixed_definitions", |b| {
        b.iter(|| {
            for definition in DEFINITIONS {
                let _ = black_box(parse(black_box(definition)));
            }
        });
    });

    group.finish();
}

/// Benchmark the rejection paths
fn bench_parse_invalid(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_invalid");

    group.bench_function("invalid_option", |b| {
        b.iter(|| parse(black_box("x:string:bogus_opt")).is_err());
    });

    group.bench_function("hash_key_on_map", |b| {
        b.iter(|| parse(black_box("id:map:hkey")).is_err());
    });

    group.finish();
}

criterion_group!(benches, bench_parse_valid, bench_parse_invalid);
criterion_main!(benches);
