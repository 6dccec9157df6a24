//! Benchmarks for the grid arrangement pass.
//!
//! Run with: cargo bench -p tessera-layout

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tessera_layout::{Constraints, GridArranger, Size};

fn bench_arrange(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/arrange");

    for &count in &[5usize, 100, 10_000] {
        for &columns in &[1u16, 2, 8] {
            group.throughput(Throughput::Elements(count as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("{columns}col"), count),
                &count,
                |b, &count| {
                    let grid = GridArranger::new(columns);
                    b.iter(|| {
                        let arrangement = grid
                            .arrange_with_measurer(
                                black_box(count),
                                Constraints::with_width(200),
                                |index, c| Size::new(c.max_width, (index % 4) as u16 + 1),
                            )
                            .unwrap();
                        black_box(arrangement)
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_arrange_items(c: &mut Criterion) {
    let mut items = vec![Size::new(12, 3); 1_000];
    let grid = GridArranger::new(4);
    c.bench_function("grid/arrange_items_1000", |b| {
        b.iter(|| black_box(grid.arrange(&mut items, Constraints::with_width(160)).unwrap()))
    });
}

criterion_group!(benches, bench_arrange, bench_arrange_items);
criterion_main!(benches);
