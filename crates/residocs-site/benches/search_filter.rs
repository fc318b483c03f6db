//! Benchmarks for the sidebar search filter.

use criterion::{Criterion, criterion_group, criterion_main};
use residocs_site::search;

fn bench_filter(c: &mut Criterion) {
    let listing = search::all_sections();

    let mut group = c.benchmark_group("search_filter");

    group.bench_function("empty_query", |b| b.iter(|| search::filter(&listing, "")));

    group.bench_function("title_match", |b| {
        b.iter(|| search::filter(&listing, "api"));
    });

    group.bench_function("subsection_match", |b| {
        b.iter(|| search::filter(&listing, "chambre"));
    });

    group.bench_function("no_match", |b| {
        b.iter(|| search::filter(&listing, "zzz-aucun-match"));
    });

    group.finish();
}

fn bench_segment_parse(c: &mut Criterion) {
    use residocs_site::SectionId;

    let mut group = c.benchmark_group("segment_parse");

    group.bench_function("canonical", |b| {
        b.iter(|| SectionId::from_segment("demarrage-rapide"));
    });

    group.bench_function("accented", |b| {
        b.iter(|| SectionId::from_segment("Démarrage-Rapide"));
    });

    group.finish();
}

criterion_group!(benches, bench_filter, bench_segment_parse);
criterion_main!(benches);
