//! Benchmarks for mode string and NAMES parsing and rendering.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use slirc_objects::{
    sort_roster, ChannelModeString, ChannelUser, Identifier, ModeConfig, NameListEntry,
};

/// Single flag, no parameters
const SIMPLE_MODES: &str = "+nt";

/// Mixed directions with parameters
const MIXED_MODES: &str = "+ov-b alice bob *!*@spam.example";

/// A mass-op with interleaved signs, needing regrouping on render
const MASS_MODES: &str = "+o-v+o-v+o-v+k a b c d e f key";

/// One NAMES reply line with every token shape
const NAMES_LINE: &str = "~owner &admin!a@host.example @+op!op@10.0.0.1 %half +voice plain \
                          User1!User@123.abc.com @User2 [Bot]!bot@services. guest42";

fn benchmark_mode_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Mode Parsing");
    let config = ModeConfig::default();

    for (name, text) in [
        ("simple", SIMPLE_MODES),
        ("mixed", MIXED_MODES),
        ("mass", MASS_MODES),
    ] {
        group.bench_with_input(BenchmarkId::new("parse", name), text, |b, s| {
            b.iter(|| {
                let modes = ChannelModeString::parse_with(black_box(s), &config).unwrap();
                black_box(modes)
            })
        });
    }

    group.finish();
}

fn benchmark_mode_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("Mode Rendering");

    let mass: ChannelModeString = MASS_MODES.parse().unwrap();
    let mixed: ChannelModeString = MIXED_MODES.parse().unwrap();

    group.bench_function("render_uncached", |b| {
        b.iter(|| {
            // A fresh clone of the modes has no cached rendering
            let fresh = ChannelModeString::new(black_box(&mass).modes().to_vec()).unwrap();
            black_box(fresh.to_string())
        })
    });

    group.bench_function("combine", |b| {
        b.iter(|| {
            let combined = black_box(&mixed).combine(black_box(&mass)).unwrap();
            black_box(combined)
        })
    });

    group.finish();
}

fn benchmark_names(c: &mut Criterion) {
    let mut group = c.benchmark_group("NAMES");

    group.bench_function("parse_line", |b| {
        b.iter(|| {
            let entries = NameListEntry::parse_all(black_box(NAMES_LINE)).unwrap();
            black_box(entries)
        })
    });

    let members: Vec<ChannelUser> = NameListEntry::parse_all(NAMES_LINE)
        .unwrap()
        .iter()
        .map(ChannelUser::from_entry)
        .collect();

    group.bench_function("sort_roster", |b| {
        b.iter(|| {
            let mut roster = black_box(&members).clone();
            sort_roster(&mut roster);
            black_box(roster)
        })
    });

    group.finish();
}

fn benchmark_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Identifiers");

    let a = Identifier::new("SomeLongerNickname");
    let b = Identifier::new("somelongernickname");

    group.bench_function("construct", |bench| {
        bench.iter(|| black_box(Identifier::new(black_box("SomeLongerNickname"))))
    });

    group.bench_function("equals", |bench| {
        bench.iter(|| black_box(black_box(&a) == black_box(&b)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_mode_parsing,
    benchmark_mode_rendering,
    benchmark_names,
    benchmark_identifiers,
);

criterion_main!(benches);
