pub mod graph;

pub use graph_views_api::core::entities::*;
