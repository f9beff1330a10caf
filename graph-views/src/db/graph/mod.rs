pub mod graph;
pub mod views;
