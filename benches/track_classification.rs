//! Benchmarks for track classification
//!
//! Tests performance of normalizing language tags and splitting track lists
//! into kept and removed tracks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trackstrip_core::{classify, normalize_language, FilterOptions, FilterSpec, Track};

const TAGS: &[&str] = &[
    "eng", "rus", "jpn", "fre", "deu", "spa", "ita", "und", "chi", "kor", "por", "xx",
];

/// Build `count` tracks cycling through common tags.
fn tracks(count: usize) -> Vec<Track> {
    Track::from_tags(TAGS.iter().cycle().take(count).map(|tag| Some(*tag)))
}

fn bench_normalize_language(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_language");

    group.bench_function("known_code", |b| {
        b.iter(|| normalize_language(black_box("eng")));
    });

    group.bench_function("known_name_mixed_case", |b| {
        b.iter(|| normalize_language(black_box("  Japanese ")));
    });

    group.bench_function("unknown", |b| {
        b.iter(|| normalize_language(black_box("klingon")));
    });

    group.finish();
}

fn bench_filter_parse(c: &mut Criterion) {
    c.bench_function("filter_spec_parse", |b| {
        b.iter(|| FilterSpec::parse(black_box(Some("1, eng,3,japanese,ru, ,12,spa"))));
    });
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    let keep = FilterSpec::parse(Some("eng,jpn,3"));
    let remove = FilterSpec::parse(Some("rus,fre,2"));
    let empty = FilterSpec::default();

    for count in [4usize, 16, 64] {
        let tracks = tracks(count);

        group.bench_with_input(BenchmarkId::new("keep", count), &tracks, |b, tracks| {
            b.iter(|| classify(black_box(tracks), black_box(&keep), black_box(&empty)));
        });

        group.bench_with_input(BenchmarkId::new("remove", count), &tracks, |b, tracks| {
            b.iter(|| classify(black_box(tracks), black_box(&empty), black_box(&remove)));
        });

        group.bench_with_input(BenchmarkId::new("keep_all", count), &tracks, |b, tracks| {
            b.iter(|| classify(black_box(tracks), black_box(&empty), black_box(&empty)));
        });
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let options = FilterOptions {
        keep: Some("eng,jpn".to_string()),
        remove_audio: Some("rus,ENG,2".to_string()),
        remove_subtitles: Some("1".to_string()),
        ..Default::default()
    };

    c.bench_function("resolve_filters", |b| {
        b.iter(|| black_box(&options).resolve());
    });
}

criterion_group!(
    benches,
    bench_normalize_language,
    bench_filter_parse,
    bench_classify,
    bench_resolve,
);
criterion_main!(benches);
