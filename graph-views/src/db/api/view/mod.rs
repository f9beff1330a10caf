//! Defines the `GraphViewOps` trait, which represents the API for querying a graph or a view of it.

pub mod filter;
mod graph;
pub mod internal;

pub use graph::*;
pub use graph_views_api::{
    inherit::Base,
    iter::{BoxedLIter, IntoDynBoxed},
};
