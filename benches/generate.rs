// benches/generate.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use rand::{ SeedableRng, rngs::StdRng };

use biz_extract::{ export, generator::{ generate_with, SearchQuery }, table };

fn bench_generate(c: &mut Criterion) {
    let request = SearchQuery::new("Coffee shops", "Chicago").unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("generate", |b| {
        b.iter(|| {
            let rows = generate_with(&mut rng, black_box(&request));
            black_box(rows.len())
        })
    });

    let records = generate_with(&mut StdRng::seed_from_u64(7), &request);

    c.bench_function("text_table", |b| {
        b.iter(|| black_box(table::to_text(black_box(&records))).len())
    });

    c.bench_function("workbook_bytes", |b| {
        b.iter(|| black_box(export::workbook_bytes(black_box(&records)).unwrap()).len())
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
