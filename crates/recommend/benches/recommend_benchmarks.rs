use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use phonehub_catalog::{Catalog, Item};
use phonehub_recommend::{explain, recommend, search, PrimaryUse, Query};

/// Builtin catalog repeated `copies` times under distinct names.
fn scaled_catalog(copies: usize) -> Catalog {
    let base = Catalog::builtin().expect("builtin catalog is valid");
    let items: Vec<Item> = (0..copies)
        .flat_map(|copy| {
            base.iter().map(move |item| Item {
                name: format!("{} #{copy}", item.name),
                ..item.clone()
            })
        })
        .collect();
    Catalog::new(items).expect("scaled names are unique")
}

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    for copies in [1usize, 10, 100] {
        let catalog = scaled_catalog(copies);
        group.throughput(Throughput::Elements(catalog.len() as u64));

        for primary_use in PrimaryUse::ALL {
            let query = Query::new(1000, primary_use).with_min_battery(80);
            group.bench_with_input(
                BenchmarkId::new(primary_use.label(), catalog.len()),
                &catalog,
                |b, catalog| b.iter(|| recommend(black_box(catalog), black_box(&query))),
            );
        }
    }

    group.finish();
}

fn bench_explain_top_five(c: &mut Criterion) {
    let catalog = Catalog::builtin().expect("builtin catalog is valid");
    let query = Query::new(1200, PrimaryUse::Photography);

    c.bench_function("recommend_and_explain_top_5", |b| {
        b.iter(|| {
            recommend(&catalog, &query)
                .iter()
                .take(5)
                .map(|s| explain(&s.item, query.primary_use, query.budget).len())
                .sum::<usize>()
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let catalog = scaled_catalog(100);
    c.bench_function("search_galaxy_1000_items", |b| {
        b.iter(|| search(black_box(&catalog), black_box("galaxy")).len())
    });
}

criterion_group!(benches, bench_recommend, bench_explain_top_five, bench_search);
criterion_main!(benches);
