// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the localization hot paths.
//!
//! Measures the performance of:
//! - Translation lookup at each step of the fallback chain
//! - Price formatting in the active currency

use clubup_locale::config::MemoryStore;
use clubup_locale::country::FixedTimezone;
use clubup_locale::Localization;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::rc::Rc;

fn mounted() -> Localization {
    Localization::mount(Rc::new(MemoryStore::new()), &FixedTimezone::new("Europe/Paris"))
        .unwrap()
}

/// Benchmark `t()` when the key is found in the override table, the base
/// table, or nowhere.
fn bench_translate(c: &mut Criterion) {
    let mut group = c.benchmark_group("translation_lookup");

    let app = mounted();
    app.locale_provider().set_locale("fr-FR");
    let locale = app.locale_provider();

    group.bench_function("override_hit", |b| {
        b.iter(|| black_box(locale.t(black_box("home.hero.title"))));
    });

    group.bench_function("base_fallback", |b| {
        b.iter(|| black_box(locale.t(black_box("footer.helpCenter"))));
    });

    group.bench_function("raw_key", |b| {
        b.iter(|| black_box(locale.t(black_box("nonexistent.key"))));
    });

    group.finish();
}

fn bench_format_price(c: &mut Criterion) {
    let mut group = c.benchmark_group("price_formatting");

    let app = mounted();
    let country = app.country_provider();

    group.bench_function("format_price", |b| {
        b.iter(|| black_box(country.format_price(black_box(1234567.89))));
    });

    group.bench_function("convert_and_format", |b| {
        b.iter(|| {
            let converted = country.convert_price(black_box(249.0), "GBP");
            black_box(country.format_price(converted))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_translate, bench_format_price);
criterion_main!(benches);
