//! Benchmarks for FAQ keyword matching.
//!
//! Measures `FaqMatcher::find` on the built-in catalog for a hit on the first
//! entry, a hit on the last entry, and a miss that scans every keyword.

use std::sync::Arc;
use std::time::Duration;

use baza_chat::{FaqMatcher, IntentCatalog};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_find(c: &mut Criterion) {
    let matcher = FaqMatcher::new(Arc::new(IntentCatalog::builtin()));

    let mut group = c.benchmark_group("faq_matcher");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("first_entry_hit", |b| {
        b.iter(|| matcher.find(black_box("Как записаться на стрижку?")))
    });
    group.bench_function("last_entry_hit", |b| {
        b.iter(|| matcher.find(black_box("Нужна ли предоплата?")))
    });
    group.bench_function("miss", |b| {
        b.iter(|| matcher.find(black_box("Добрый вечер, подскажите пожалуйста что-нибудь")))
    });

    let long_input = "бла ".repeat(500);
    group.bench_function("miss_long_input", |b| {
        b.iter(|| matcher.find(black_box(long_input.as_str())))
    });

    group.finish();
}

criterion_group!(benches, bench_find);
criterion_main!(benches);
