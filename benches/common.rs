#![allow(dead_code)]

use fastrand::Rng;
use petgraph::prelude::*;
use trigraph::prelude::*;

pub const RANDOM_SEED: u64 = 0x6d1e3f2a94c07b5;

pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_bound: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_bound,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        // Geometric skipping over the lower triangle of the vertex pair
        // space, yielding each pair with probability p.
        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w.wrapping_add(1) + ((1.0 - r).log10() / (1.0 - p).log10()).floor() as usize;

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n { Some((*v, *w)) } else { None }
    }
}

pub fn list_random(vertex_count: usize, density: f32, rng: &mut Rng) -> ListGraph<i64> {
    let mut graph = ListGraph::new_undirected(vertex_count);
    fill(&mut graph, vertex_count, density, rng);
    graph
}

pub fn matrix_random(vertex_count: usize, density: f32, rng: &mut Rng) -> MatrixGraph<i64> {
    let mut graph = MatrixGraph::new_undirected(vertex_count);
    fill(&mut graph, vertex_count, density, rng);
    graph
}

fn fill<G: GraphMut<i64>>(graph: &mut G, vertex_count: usize, density: f32, rng: &mut Rng) {
    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(u, v, 1, false).unwrap();
    }
}

pub fn petgraph_random(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::Graph<(), i64, petgraph::Undirected> {
    let mut graph = petgraph::Graph::with_capacity(vertex_count, 0);

    for _ in 0..vertex_count {
        graph.add_node(());
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), 1);
    }

    graph
}
