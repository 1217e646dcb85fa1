use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use xsd_literal::{Datatype, Decimal, Double, Float, XsdType};

fn benchmark_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    for (datatype, literal) in [
        (Datatype::Decimal, "-123456.789000"),
        (Datatype::Double, "-1.2345678901234567E-300"),
        (Datatype::Integer, "+000123456789"),
        (Datatype::DateTime, "2002-10-10T12:00:00.500-05:00"),
        (Datatype::Duration, "P1Y2M3DT4H5M6.7S"),
        (Datatype::Base64Binary, "SGVsbG8sIFdvcmxkIQ=="),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(datatype), literal, |b, literal| {
            b.iter(|| datatype.validate(black_box(literal)))
        });
    }
    group.finish();
}

fn benchmark_canonicalize_decimal(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonicalize_decimal");
    for digits in [4, 32, 256].iter() {
        let literal = format!("+000{}.{}000", "7".repeat(*digits), "1".repeat(*digits));
        group.bench_with_input(BenchmarkId::from_parameter(digits), &literal, |b, literal| {
            b.iter(|| {
                let mut text = literal.clone();
                Decimal::canonicalize(black_box(&mut text))
            })
        });
    }
    group.finish();
}

fn benchmark_canonicalize_floating(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonicalize_floating");

    group.bench_function("double_rewrite", |b| {
        b.iter(|| {
            let mut text = String::from("1234.5e-2");
            Double::canonicalize(black_box(&mut text))
        })
    });
    group.bench_function("double_already_canonical", |b| {
        b.iter(|| {
            let mut text = String::from("1.2345E1");
            Double::canonicalize(black_box(&mut text))
        })
    });
    group.bench_function("double_special", |b| {
        b.iter(|| {
            let mut text = String::from("+INF");
            Double::canonicalize(black_box(&mut text))
        })
    });
    group.bench_function("float_narrowing", |b| {
        b.iter(|| {
            let mut text = String::from("3.14159265358979");
            Float::canonicalize(black_box(&mut text))
        })
    });

    group.finish();
}

fn benchmark_dynamic_parse(c: &mut Criterion) {
    let literals: Vec<(Datatype, &str)> = vec![
        (Datatype::Boolean, "1"),
        (Datatype::Date, "2024-02-29+00:00"),
        (Datatype::Time, "24:00:00"),
        (Datatype::Float, "NaN"),
        (Datatype::String, "hello"),
    ];

    c.bench_function("dynamic_parse_mixed", |b| {
        b.iter(|| {
            for (datatype, literal) in &literals {
                let _ = black_box(datatype.parse(black_box(literal)));
            }
        })
    });
}

criterion_group!(
    benches,
    benchmark_validate,
    benchmark_canonicalize_decimal,
    benchmark_canonicalize_floating,
    benchmark_dynamic_parse
);
criterion_main!(benches);
