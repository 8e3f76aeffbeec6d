// ============================================================================
// Conversion Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Detection - classification of each supported notation
// 2. Conversion - radix folds and decimal parsing
// 3. Normalization - the full strict funnel, string and non-string shapes
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numeric_value::prelude::*;

// ============================================================================
// Detection Benchmarks
// ============================================================================

fn benchmark_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    let inputs = [
        ("hex", "0xDEADBEEF"),
        ("binary", "0b1010110011010101"),
        ("octal_modern", "0o7654321"),
        ("octal_traditional", "07654321"),
        ("decimal", "1234567890"),
        ("scientific", "1.234567e12"),
        ("invalid", "1234abcd"),
    ];

    for (label, input) in inputs.iter() {
        group.bench_with_input(BenchmarkId::new("classify", label), input, |b, input| {
            b.iter(|| black_box(classify(black_box(input))));
        });
    }

    group.finish();
}

// ============================================================================
// Conversion Benchmarks
// ============================================================================

fn benchmark_convert_base(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_base");

    group.bench_function("auto_hex", |b| {
        b.iter(|| black_box(convert_base(black_box("0xDEADBEEF"), None)));
    });
    group.bench_function("auto_decimal", |b| {
        b.iter(|| black_box(convert_base(black_box("1234567890"), None)));
    });
    group.bench_function("explicit_base36", |b| {
        b.iter(|| black_box(convert_base(black_box("zik0zj"), Some(36))));
    });
    group.bench_function("render_hex", |b| {
        b.iter(|| black_box(to_base(black_box(3735928559i64), 16)));
    });

    group.finish();
}

// ============================================================================
// Normalization Benchmarks
// ============================================================================

fn benchmark_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");

    group.bench_function("strict_hex_string", |b| {
        b.iter(|| black_box(convert_to_number(black_box("0xFF"))));
    });
    group.bench_function("strict_scientific_string", |b| {
        b.iter(|| black_box(convert_to_number(black_box("1.5e300"))));
    });
    group.bench_function("strict_int_passthrough", |b| {
        b.iter(|| black_box(convert_to_number(black_box(42i64))));
    });
    group.bench_function("lenient_invalid_passthrough", |b| {
        b.iter(|| black_box(convert_value(black_box("123abc"))));
    });
    group.bench_function("value_construction", |b| {
        b.iter(|| black_box(NumericValue::new(black_box("0xDEADBEEF"))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_classification,
    benchmark_convert_base,
    benchmark_normalization
);
criterion_main!(benches);
