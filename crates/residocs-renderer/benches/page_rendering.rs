//! Benchmarks for full-page rendering.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use residocs_renderer::{PageOptions, SiteLinks, render_document};
use residocs_site::{ColorMode, SectionId, UiState};

const OPTS: PageOptions<'static> = PageOptions {
    site_title: "GestRésidence",
    asset_base: "/assets",
};

fn bench_render_document(c: &mut Criterion) {
    let links = SiteLinks::default();

    let mut group = c.benchmark_group("render_document");

    for id in [
        SectionId::Commencer,
        SectionId::GuideUtilisateur,
        SectionId::ReferenceApi,
        SectionId::Support,
    ] {
        let state = UiState::for_page(id, String::new(), ColorMode::Light);
        group.bench_with_input(BenchmarkId::new("section", id.as_str()), &state, |b, state| {
            b.iter(|| render_document(state, &links, &OPTS))
        });
    }

    group.finish();
}

fn bench_render_with_query(c: &mut Criterion) {
    let links = SiteLinks::default();

    let mut group = c.benchmark_group("render_filtered");

    for (label, query) in [
        ("broad", "gestion"),
        ("narrow", "authentification"),
        ("no_match", "zzzz"),
    ] {
        let state = UiState::for_page(
            SectionId::GuideUtilisateur,
            query.to_owned(),
            ColorMode::Light,
        );
        group.bench_with_input(BenchmarkId::new("query", label), &state, |b, state| {
            b.iter(|| render_document(state, &links, &OPTS))
        });
    }

    group.finish();
}

fn bench_render_modes(c: &mut Criterion) {
    let links = SiteLinks::default();

    let mut group = c.benchmark_group("render_modes");

    for mode in [ColorMode::Light, ColorMode::Dark] {
        let state = UiState::for_page(SectionId::ReferenceApi, String::new(), mode);
        group.bench_function(mode.as_str(), |b| {
            b.iter(|| render_document(&state, &links, &OPTS))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render_document,
    bench_render_with_query,
    bench_render_modes,
);

criterion_main!(benches);
