use conncomp::{algorithm::*, graph::*};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use static_init::dynamic;
use std::collections::HashSet;

#[dynamic]
static VERTEX_SIZE: usize = std::env::var("VERTEX_SIZE")
    .unwrap_or("1000".to_string())
    .parse()
    .unwrap();
#[dynamic]
static EDGE_SIZE: usize = std::env::var("EDGE_SIZE")
    .unwrap_or("800".to_string())
    .parse()
    .unwrap();

criterion_group!(benches, counting);
criterion_main!(benches);

fn counting(c: &mut Criterion) {
    let vertex_size = *VERTEX_SIZE;
    println!("VERTEX_SIZE: {}", vertex_size);
    let edge_size = *EDGE_SIZE;
    println!("EDGE_SIZE: {}", edge_size);

    let mut edges = HashSet::new();
    for _ in 0..edge_size {
        let v0 = rand::thread_rng().gen::<usize>() % vertex_size;
        let v1 = rand::thread_rng().gen::<usize>() % vertex_size;
        edges.insert((v0.min(v1), v0.max(v1)));
    }
    let g = ImplicitGraph::from_fn(0..vertex_size, |a: &usize, b: &usize| {
        edges.contains(&(*a.min(b), *a.max(b)))
    });

    c.bench_function("recursive", |b| {
        b.iter(|| black_box(g.count_connected_components_with(DfsStrategy::Recursive)))
    });
    c.bench_function("iterative", |b| {
        b.iter(|| black_box(g.count_connected_components_with(DfsStrategy::Iterative)))
    });
    c.bench_function("materialized/petgraph", |b| {
        b.iter(|| {
            let m = g.materialize().unwrap();
            black_box(petgraph::algo::connected_components(&m))
        })
    });
}
