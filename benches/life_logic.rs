use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_life::core::{compute_next_state, count_neighbors, Grid};
use tui_life::term::render_frame_into;
use tui_life::types::LifeConfig;

fn bench_next_state(c: &mut Criterion) {
    let grid = Grid::seeded(&LifeConfig::default(), 12345);

    c.bench_function("compute_next_state_50x30", |b| {
        b.iter(|| compute_next_state(black_box(&grid)))
    });
}

fn bench_count_neighbors_corner(c: &mut Criterion) {
    let grid = Grid::seeded(&LifeConfig::default(), 12345);

    c.bench_function("count_neighbors_corner", |b| {
        b.iter(|| count_neighbors(black_box(&grid), black_box(0), black_box(0)))
    });
}

fn bench_render(c: &mut Criterion) {
    let grid = Grid::seeded(&LifeConfig::default(), 12345);
    let mut frame = String::new();

    c.bench_function("render_frame_50x30", |b| {
        b.iter(|| render_frame_into(black_box(&grid), &mut frame))
    });
}

criterion_group!(
    benches,
    bench_next_state,
    bench_count_neighbors_corner,
    bench_render
);
criterion_main!(benches);
