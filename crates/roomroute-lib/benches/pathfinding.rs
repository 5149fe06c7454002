use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use roomroute_lib::{build_graph, plan_route, Graph, RouteOutcome, Weights};
use std::hint::black_box;

const CHAIN_LENGTH: usize = 200;

static GRAPH: Lazy<Graph> = Lazy::new(|| {
    let mut lines = Vec::new();
    for room in 0..CHAIN_LENGTH {
        lines.push(format!(
            "Room{} : Room{} : Room{} trinket{}",
            room,
            room + 1,
            room + 2,
            room
        ));
    }
    build_graph(lines, &Weights::Uniform).expect("graph builds")
});

fn benchmark_pathfinding(c: &mut Criterion) {
    let graph = &*GRAPH;

    c.bench_function("route_across_chain", |b| {
        b.iter(|| {
            let outcome = plan_route(graph, "Room0", &format!("trinket{}", CHAIN_LENGTH - 1));
            black_box(matches!(outcome, RouteOutcome::Found(_)))
        });
    });

    c.bench_function("route_unreachable", |b| {
        b.iter(|| {
            let outcome = plan_route(graph, &format!("Room{}", CHAIN_LENGTH + 1), "trinket0");
            black_box(matches!(outcome, RouteOutcome::NoRoute { .. }))
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
