use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use factory_belt_engine::{generate_path, Direction, Obstacle};
use factory_belt_sandbox::{FactoryLayout, GameCatalog, PortRef};
use glam::Vec2;
use std::hint::black_box;

/// Raster aus Hindernissen mit Gassen dazwischen.
fn build_obstacle_field(count: usize) -> Vec<Obstacle> {
    let columns = (count as f32).sqrt().ceil() as usize;
    (0..count)
        .map(|i| {
            let column = (i % columns) as f32;
            let row = (i / columns) as f32;
            Obstacle::new(60.0 + column * 120.0, -400.0 + row * 120.0, 60.0, 60.0)
        })
        .collect()
}

fn bench_generate_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_path");

    for &obstacle_count in &[0usize, 16, 64, 256] {
        let obstacles = build_obstacle_field(obstacle_count);
        group.bench_with_input(
            BenchmarkId::new("facing_ports", obstacle_count),
            &obstacles,
            |b, obstacles| {
                b.iter(|| {
                    let path = generate_path(
                        black_box(Vec2::new(0.0, 0.0)),
                        black_box(Vec2::new(1200.0, 90.0)),
                        Direction::RIGHT,
                        Direction::RIGHT,
                        obstacles,
                    );
                    black_box(path.len())
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("uturn", obstacle_count),
            &obstacles,
            |b, obstacles| {
                b.iter(|| {
                    let path = generate_path(
                        black_box(Vec2::new(0.0, 0.0)),
                        black_box(Vec2::new(-600.0, 30.0)),
                        Direction::RIGHT,
                        Direction::LEFT,
                        obstacles,
                    );
                    black_box(path.len())
                })
            },
        );
    }

    group.finish();
}

/// Kette aus Öfen: jeder Ausgang geht in den Eingang des nächsten.
fn build_furnace_chain(length: usize) -> FactoryLayout {
    let catalog = GameCatalog::builtin();
    let mut layout = FactoryLayout::new(40.0, 20.0);
    let mut previous = None;
    for i in 0..length {
        let position = Vec2::new((i % 10) as f32 * 200.0, (i / 10) as f32 * 200.0);
        let id = layout
            .add_factory(&catalog, "furnace", position)
            .expect("Ofen platzierbar");
        if let Some(prev) = previous {
            layout
                .connect(PortRef::new(prev, 1), PortRef::new(id, 0))
                .expect("Kette verbindbar");
        }
        previous = Some(id);
    }
    layout
}

fn bench_reroute_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("reroute_all");

    for &length in &[10usize, 50] {
        let mut layout = build_furnace_chain(length);
        group.bench_function(BenchmarkId::from_parameter(length), |b| {
            b.iter(|| {
                layout.reroute_all();
                black_box(layout.belt_count())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate_path, bench_reroute_all);
criterion_main!(benches);
