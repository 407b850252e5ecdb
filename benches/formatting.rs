use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cloacal::{format, parse, record, reformat, Record, Value};

const DOCUMENT: &str = "
+--+
| Carlisle |
+-----

age -- 99
species - seagull
ilk ------------ bird

description ----
  Id ipsum elit tempor non incididunt laborum
  anim dolore eu fugiat. Dolor consectetur aute
  occaecat. Ex do reprehenderit nulla sunt dolor
  laborum qui.

memories -----------------------
  > Consectetur ut qui Lorem ad.
  > Veniam mollit nostrud velit laborum laborum
    veniam irure ut aute magna labore aliqua.
  > Magna reprehenderit anim esse aliquip magna.
";

fn scaled_record(fields: usize) -> Record {
    let mut record = record! { "name" => "Carlisle" };
    for i in 0..fields {
        record.insert(format!("field{}", i), Value::from("a short value"));
        record.insert(
            format!("story{}", i),
            Value::Block(
                "Id ipsum elit tempor non incididunt laborum anim dolore eu fugiat dolor \
                 consectetur aute occaecat ex do reprehenderit nulla sunt dolor laborum qui"
                    .to_string(),
            ),
        );
    }
    record
}

fn benchmark_parse_document(c: &mut Criterion) {
    c.bench_function("parse_document", |b| b.iter(|| parse(black_box(DOCUMENT))));
}

fn benchmark_format_document(c: &mut Criterion) {
    let record = parse(DOCUMENT);

    c.bench_function("format_document", |b| b.iter(|| format(black_box(&record))));
}

fn benchmark_reformat_document(c: &mut Criterion) {
    c.bench_function("reformat_document", |b| {
        b.iter(|| reformat(black_box(DOCUMENT)))
    });
}

fn benchmark_format_scaled(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_scaled");

    for size in [10, 50, 100, 500].iter() {
        let record = scaled_record(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| format(black_box(&record)))
        });
    }
    group.finish();
}

fn benchmark_parse_scaled(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_scaled");

    for size in [10, 50, 100, 500].iter() {
        let document = format(&scaled_record(*size));

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| parse(black_box(&document)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse_document,
    benchmark_format_document,
    benchmark_reformat_document,
    benchmark_format_scaled,
    benchmark_parse_scaled
);
criterion_main!(benches);
