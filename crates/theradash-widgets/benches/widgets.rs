//! Benchmark tests for widget operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use theradash_core::{AccentColor, RevenueCategory, TimeBucket};
use theradash_widgets::{ProgressCard, RevenueChart, StackedRevenueChart, VerificationStatus};

fn bench_revenue_chart_build(c: &mut Criterion) {
    let categories: Vec<RevenueCategory> = (0..12)
        .map(|i| {
            RevenueCategory::new(format!("stream_{i}"), f64::from(i).mul_add(25_000.0, 50_000.0))
        })
        .collect();
    let chart = RevenueChart::new()
        .title("Revenue by Category")
        .categories(categories);

    c.bench_function("revenue_chart_build_12_categories", |b| {
        b.iter(|| black_box(&chart).build())
    });
}

fn bench_revenue_chart_creation(c: &mut Criterion) {
    c.bench_function("revenue_chart_new_with_4_categories", |b| {
        b.iter(|| {
            RevenueChart::new()
                .category(RevenueCategory::new(black_box("Therapists"), 180_000.0))
                .category(RevenueCategory::new("Sessions", 95_000.0))
                .category(RevenueCategory::new("Gaming", 22_000.0))
                .category(RevenueCategory::new("Enterprise", 48_000.0))
        })
    });
}

fn bench_stacked_chart_build(c: &mut Criterion) {
    let series: Vec<TimeBucket> = (0..24)
        .map(|i| {
            let base = f64::from(i).mul_add(1_000.0, 40_000.0);
            TimeBucket::new(format!("M{i}"))
                .value("therapists", base)
                .value("sessions", base / 2.0)
                .value("gaming", base / 8.0)
                .value("enterprise", base / 4.0)
        })
        .collect();
    let chart = StackedRevenueChart::new()
        .title("Monthly Revenue")
        .series(series);

    c.bench_function("stacked_chart_build_24_buckets", |b| {
        b.iter(|| black_box(&chart).build())
    });
}

fn bench_badge_descriptor(c: &mut Criterion) {
    c.bench_function("verification_status_descriptor", |b| {
        b.iter(|| black_box(VerificationStatus::Pending).descriptor())
    });
}

fn bench_progress_card(c: &mut Criterion) {
    c.bench_function("progress_card_labels", |b| {
        let card = ProgressCard::new("Jordan A.")
            .progress(62.5)
            .sessions(10, 16)
            .accent(AccentColor::Green);
        b.iter(|| (card.formatted_progress(), card.sessions_label()))
    });
}

criterion_group!(
    benches,
    bench_revenue_chart_build,
    bench_revenue_chart_creation,
    bench_stacked_chart_build,
    bench_badge_descriptor,
    bench_progress_card,
);
criterion_main!(benches);
