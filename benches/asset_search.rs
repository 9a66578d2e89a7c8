// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for searching and partitioning a large asset collection.
//!
//! Measures the performance of:
//! - Case-insensitive title search
//! - Grouping search results into dashboard sections

use asset_deck::domain::asset::{Asset, AssetKind, AssetOrigin, SearchQuery};
use asset_deck::library::AssetLibrary;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const KINDS: [AssetKind; 5] = [
    AssetKind::Intro,
    AssetKind::Midtro,
    AssetKind::Outro,
    AssetKind::Thumbnail,
    AssetKind::Overlay,
];

/// Builds a library of `count` assets spread over every kind.
fn large_library(count: usize) -> AssetLibrary {
    let assets = (0..count)
        .map(|i| {
            let origin = if i % 7 == 0 {
                AssetOrigin::Template
            } else {
                AssetOrigin::Upload
            };
            Asset::new(format!("Clip {i:05} Sport.mp4"), KINDS[i % KINDS.len()], origin)
                .with_aspect_ratios(["16:9", "9:16"])
        })
        .collect();
    AssetLibrary::new(assets)
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("asset_search");
    let library = large_library(10_000);

    let query = SearchQuery::new("sport");
    group.bench_function("search_matching", |b| {
        b.iter(|| black_box(library.search(black_box(&query))));
    });

    let miss = SearchQuery::new("nothing matches this");
    group.bench_function("search_missing", |b| {
        b.iter(|| black_box(library.search(black_box(&miss))));
    });

    group.finish();
}

fn bench_sections(c: &mut Criterion) {
    let mut group = c.benchmark_group("asset_sections");
    let library = large_library(10_000);
    let query = SearchQuery::new("clip 0");

    group.bench_function("group_by_kind", |b| {
        b.iter(|| black_box(library.group_by_kind(black_box(&query))));
    });

    group.bench_function("dashboard_sections", |b| {
        b.iter(|| black_box(library.sections(black_box(&query))));
    });

    group.finish();
}

criterion_group!(benches, bench_search, bench_sections);
criterion_main!(benches);
