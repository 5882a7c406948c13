// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the product listing pipeline.
//!
//! Measures the performance of:
//! - Filtering a large catalog with several active criteria
//! - Filtering then sorting, as the listing page does on every render

use adena::domain::catalog::{
    compute_visible, seed, Category, FilterSelection, Metal, PriceBound, Product, ProductId,
    SortOrder,
};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// Builds a catalog of `copies × seed` products with distinct ids.
fn large_catalog(copies: u32) -> Vec<Product> {
    let seed = seed::products();
    let per_copy = seed.len() as u32;
    (0..copies)
        .flat_map(|copy| {
            seed.iter().enumerate().map(move |(offset, product)| {
                let mut product = product.clone();
                product.id = ProductId::from(copy * per_copy + offset as u32 + 1);
                product
            })
        })
        .collect()
}

fn active_selection() -> FilterSelection {
    let mut selection = FilterSelection::new(20_000);
    selection.toggle_category(Category::Necklaces);
    selection.toggle_category(Category::Rings);
    selection.toggle_metal(Metal::Gold);
    selection.toggle_metal(Metal::Platinum);
    selection.set_draft_price(PriceBound::Min, 1_000);
    selection.set_draft_price(PriceBound::Max, 10_000);
    selection.commit_price();
    selection.set_name_query("n");
    selection
}

fn bench_compute_visible(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_filter");
    let products = large_catalog(1_000);
    let empty = FilterSelection::new(20_000);
    let active = active_selection();

    group.bench_function("no_filters", |b| {
        b.iter(|| black_box(compute_visible(black_box(&products), &empty)));
    });

    group.bench_function("all_filters", |b| {
        b.iter(|| black_box(compute_visible(black_box(&products), &active)));
    });

    group.bench_function("all_filters_sorted_by_price", |b| {
        b.iter(|| {
            let mut visible = compute_visible(black_box(&products), &active);
            SortOrder::PriceAscending.apply(&mut visible);
            black_box(visible)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_compute_visible);
criterion_main!(benches);
