//! Criterion benchmarks for the redraw path.
//!
//! Benchmarks:
//! 1. Aggregation of flat records into series
//! 2. First-non-zero year precompute
//! 3. Full view build (filter, format, label) per redraw

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use revchart_core::domain::{RevenueRecord, YearRange};
use revchart_core::i18n::LanguageMode;
use revchart_core::pipeline::{aggregate, first_non_zero_years, CurrencyMode, SelectionSet};
use revchart_core::view::build_view;

// ── Helpers ──────────────────────────────────────────────────────────

fn make_records(companies: usize, years: i32) -> Vec<RevenueRecord> {
    (0..companies)
        .flat_map(|c| {
            (0..years).map(move |y| {
                let amount = 1.0e10 * (1.0 + c as f64) + (y as f64 * 0.7).sin().abs() * 1.0e9;
                RevenueRecord::new(format!("C{c:03}"), format!("{}-12-31", 2000 + y), amount)
            })
        })
        .collect()
}

// ── Benchmarks ───────────────────────────────────────────────────────

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    for companies in [7, 100, 1_000] {
        let records = make_records(companies, 25);
        group.bench_with_input(BenchmarkId::from_parameter(companies), &records, |b, r| {
            b.iter(|| aggregate(black_box(r)))
        });
    }
    group.finish();
}

fn bench_first_non_zero(c: &mut Criterion) {
    let series = aggregate(&make_records(1_000, 25));
    let years = YearRange::new(2000, 2024);
    c.bench_function("first_non_zero_years/1000", |b| {
        b.iter(|| first_non_zero_years(black_box(&series), years))
    });
}

fn bench_build_view(c: &mut Criterion) {
    let series = aggregate(&make_records(100, 25));
    let years = YearRange::new(2000, 2024);
    let first = first_non_zero_years(&series, years);
    let selection = SelectionSet::seeded(series.iter().map(|s| s.company.as_str()), 50);

    let mut group = c.benchmark_group("build_view");
    for currency in [CurrencyMode::Base, CurrencyMode::Converted] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{currency:?}")),
            &currency,
            |b, &mode| {
                b.iter(|| {
                    build_view(
                        black_box(&series),
                        &first,
                        &selection,
                        mode,
                        LanguageMode::Primary,
                        years,
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_aggregate, bench_first_non_zero, bench_build_view);
criterion_main!(benches);
