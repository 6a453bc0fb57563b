use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dijkstra_visual_editor::{Graph, PathRun};
use glam::Vec2;
use std::hint::black_box;

/// Baut ein synthetisches Gitter mit Rechts- und Abwärts-Kanten.
fn build_grid_graph(side: usize) -> Graph {
    let mut graph = Graph::new();
    let step = 2.0 / side as f32;
    for row in 0..side {
        for column in 0..side {
            graph.add_node(Vec2::new(
                -1.0 + column as f32 * step,
                -1.0 + row as f32 * step,
            ));
        }
    }
    for row in 0..side {
        for column in 0..side {
            let id = row * side + column;
            if column + 1 < side {
                graph.add_edge(id, id + 1).expect("Gitter-Kante");
            }
            if row + 1 < side {
                graph.add_edge(id, id + side).expect("Gitter-Kante");
            }
        }
    }
    graph
}

fn bench_path_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_run");

    for &side in &[10usize, 30usize] {
        let graph = build_grid_graph(side);
        let target = side * side - 1;

        group.bench_with_input(BenchmarkId::new("drain_events", side), &graph, |b, graph| {
            b.iter(|| {
                let run = PathRun::start(black_box(graph), 0, target).expect("Lauf startet");
                black_box(run.count())
            })
        });
    }

    group.finish();
}

fn bench_nearest_node(c: &mut Criterion) {
    let graph = build_grid_graph(30);
    let queries: Vec<Vec2> = (0..256)
        .map(|i| {
            Vec2::new(
                -1.0 + (i % 16) as f32 * 0.12,
                -1.0 + (i / 16) as f32 * 0.12,
            )
        })
        .collect();

    c.bench_function("nearest_node_batch", |b| {
        b.iter(|| {
            let mut hits = 0usize;
            for query in &queries {
                if graph.nearest_node(black_box(*query), 0.1).is_some() {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });
}

criterion_group!(benches, bench_path_run, bench_nearest_node);
criterion_main!(benches);
