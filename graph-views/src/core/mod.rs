//! Storage backing the reference base graphs.

pub mod entities;

pub use graph_views_api::core::Direction;
