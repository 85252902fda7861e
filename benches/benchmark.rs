//! Benchmarks for cc_bankid performance testing.
//!
//! Run with: cargo bench

use cc_bankid::bin::{BankRange, RangeTable, TableLoader};
use cc_bankid::{check_card, extract_issuer_id, is_valid_format, is_valid_luhn, luhn};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const VISA_16: &str = "4111111111111111";
const VISA_16_FORMATTED: &str = "4111-1111-1111-1111";
const AMEX: &str = "378282246310005";

const VISA_DIGITS: [u8; 16] = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];

fn table_of(size: usize) -> RangeTable {
    let ranges = (0..size as i64)
        .map(|i| BankRange::new(format!("Bank {}", i), i * 100, i * 100 + 99).unwrap())
        .collect();
    RangeTable::from_ranges(ranges)
}

/// Benchmark the individual validators
fn bench_validators(c: &mut Criterion) {
    let mut group = c.benchmark_group("validators");

    group.bench_function("format_16", |b| {
        b.iter(|| is_valid_format(black_box(VISA_16)))
    });

    group.bench_function("luhn_str_16", |b| b.iter(|| is_valid_luhn(black_box(VISA_16))));

    group.bench_function("luhn_str_15", |b| b.iter(|| is_valid_luhn(black_box(AMEX))));

    group.bench_function("luhn_digits_16", |b| {
        b.iter(|| luhn::validate(black_box(&VISA_DIGITS)))
    });

    group.bench_function("issuer_id", |b| {
        b.iter(|| extract_issuer_id(black_box(VISA_16)))
    });

    group.finish();
}

/// Benchmark linear first-match resolution as the table grows
fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");

    for size in [10, 100, 1000, 10000].iter() {
        let table = table_of(*size);
        // Worst case: the last range matches
        let bin = (*size as i64 - 1) * 100;

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("last_range", size), &table, |b, table| {
            b.iter(|| table.resolve(black_box(bin)))
        });
        group.bench_with_input(BenchmarkId::new("miss", size), &table, |b, table| {
            b.iter(|| table.resolve(black_box(-1)))
        });
    }

    group.finish();
}

/// Benchmark the whole pipeline on raw input
fn bench_check_card(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_card");
    let table = table_of(1000);

    group.bench_function("raw", |b| b.iter(|| check_card(black_box(VISA_16), &table)));

    group.bench_function("formatted", |b| {
        b.iter(|| check_card(black_box(VISA_16_FORMATTED), &table))
    });

    group.bench_function("bad_checksum", |b| {
        b.iter(|| check_card(black_box("4111111111111112"), &table))
    });

    group.finish();
}

/// Benchmark loading a table from text
fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("load");

    for size in [100, 1000, 10000].iter() {
        let mut source = Vec::new();
        table_of(*size).write_to(&mut source).unwrap();
        let source = String::from_utf8(source).unwrap();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("parse", size), &source, |b, source| {
            b.iter(|| TableLoader::parse(black_box(source)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_validators,
    bench_resolve,
    bench_check_card,
    bench_load,
);

criterion_main!(benches);
