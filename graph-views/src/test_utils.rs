use crate::{
    core::entities::VID,
    db::{
        api::mutation::MutationOps,
        graph::graph::{DiGraph, Graph},
    },
};
use proptest::prelude::*;

/// Random edge lists over `num_vertices` vertices, self-loops and parallel edges included.
pub fn build_edge_list(
    len: usize,
    num_vertices: usize,
) -> impl Strategy<Value = Vec<(usize, usize)>> {
    proptest::collection::vec((0..num_vertices, 0..num_vertices), 0..=len)
}

fn populate<M: MutationOps>(graph: &M, num_vertices: usize, edges: &[(usize, usize)]) {
    for _ in 0..num_vertices {
        graph.add_vertex();
    }
    for &(src, dst) in edges {
        graph.add_edge(VID(src), VID(dst)).unwrap();
    }
}

pub fn build_graph(num_vertices: usize, edges: &[(usize, usize)]) -> Graph {
    let g = Graph::new();
    populate(&g, num_vertices, edges);
    g
}

pub fn build_digraph(num_vertices: usize, edges: &[(usize, usize)]) -> DiGraph {
    let g = DiGraph::new();
    populate(&g, num_vertices, edges);
    g
}
