use criterion::{Criterion, criterion_group, criterion_main};
use newton_basins::{
    ComplexRect, CubicNewton, NeverCancel, NewtonParams, RootSet, SampleGrid, compute_basin_map,
};
use std::hint::black_box;

fn ignore_progress(_: Option<f64>) {}

fn bench_reference_sweep(c: &mut Criterion) {
    let grid = SampleGrid::new(ComplexRect::default(), 512, 512);
    let newton = CubicNewton::new(RootSet::unity(), NewtonParams::default());

    c.bench_function("reference_sweep_513x513", |b| {
        b.iter(|| {
            black_box(compute_basin_map(
                &grid,
                black_box(&newton),
                &ignore_progress,
                &NeverCancel,
            ))
        })
    });
}

fn bench_single_row(c: &mut Criterion) {
    let grid = SampleGrid::new(ComplexRect::default(), 512, 0);
    let newton = CubicNewton::new(RootSet::unity(), NewtonParams::default());

    c.bench_function("single_row_513", |b| {
        b.iter(|| compute_basin_map(&grid, black_box(&newton), &ignore_progress, &NeverCancel))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_reference_sweep, bench_single_row
}
criterion_main!(benches);
