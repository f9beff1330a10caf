pub mod directed_view;
pub mod filtered_edges;
pub mod filtered_graph;
pub mod undirected_view;
