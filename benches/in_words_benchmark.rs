// ============================================================================
// In-Words Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Plural selection - the arithmetic one/few/many rule
// 2. Grouper - integers of growing magnitude
// 3. Formatters - fractions and money amounts end to end
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use propys::prelude::*;
use rust_decimal::Decimal;
use std::hint::black_box;

fn benchmark_plural_selection(c: &mut Criterion) {
    let forms = WordForms::from(["гривня", "гривні", "гривень"]);

    c.bench_function("choose_plural_form", |b| {
        b.iter(|| {
            for n in 0..100i128 {
                black_box(choose_plural_form(black_box(n), &forms));
            }
        })
    });
}

fn benchmark_grouper(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_integer");
    let forms = WordForms::from(["рубль", "рублі", "рублів"]);

    // One, two, three and four magnitude groups
    for amount in [7i128, 12_345, 7_654_321, 987_654_321_012].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(amount), amount, |b, amount| {
            b.iter(|| black_box(render_integer(*amount, Gender::Masculine, &forms)))
        });
    }

    group.finish();
}

fn benchmark_formatters(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatters");

    let fraction = Decimal::new(123_456_789, 4);
    group.bench_function("float_in_words", |b| {
        b.iter(|| black_box(float_in_words(black_box(fraction), Gender::Feminine)))
    });

    let money = Decimal::new(1_234_567, 2);
    group.bench_function("currency_in_words", |b| {
        b.iter(|| black_box(currency_in_words(black_box(money), true)))
    });

    group.bench_function("numeral_in_words_str", |b| {
        b.iter(|| black_box(numeral_in_words_str(black_box("2021.05"), None)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_plural_selection,
    benchmark_grouper,
    benchmark_formatters
);
criterion_main!(benches);
