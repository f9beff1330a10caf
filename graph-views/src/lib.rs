//! # graph-views
//!
//! Lazy subgraph views over a live base graph.
//!
//! A view presents the part of a base graph admitted by a membership rule
//! without copying any vertex or edge storage. Every query re-reads the base,
//! so the view follows mutations of the base graph made after it was built.
//!
//! Two kinds of rule are provided:
//!
//! * [`ExplicitSubset`](db::api::view::filter::ExplicitSubset): explicit
//!   vertex and edge sets, giving induced subgraphs.
//! * [`ExclusionMask`](db::api::view::filter::ExclusionMask): predicates
//!   marking vertices and edges as hidden.
//!
//! With either rule an edge is only visible if both of its endpoints are.
//!
//! ## Example
//!
//! ```rust
//! use graph_views::prelude::*;
//!
//! let g = Graph::new();
//! let a = g.add_vertex();
//! let b = g.add_vertex();
//! g.add_edge(a, b).unwrap();
//! g.add_edge(b, b).unwrap();
//!
//! let view = UndirectedView::masked(g.clone(), move |v: &VID| *v == a, |_: &EID| false);
//! assert_eq!(view.degree_of(b).unwrap(), 2);
//! assert!(view.degree_of(a).is_err());
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod errors;

pub mod prelude {
    pub use crate::{
        db::{
            api::{
                mutation::MutationOps,
                view::{
                    filter::{
                        split_mask, ExclusionMask, ExplicitSubset, MaskFunctor, MembershipRule,
                    },
                    internal::{CoreGraphOps, DirectedGraphOps, UndirectedGraphOps},
                    GraphViewOps,
                },
            },
            graph::{
                graph::{DiGraph, Graph},
                views::{
                    directed_view::{DirectedMaskSubgraph, DirectedSubgraph, DirectedView},
                    filtered_edges::{EdgeSource, FilteredEdges},
                    undirected_view::{UndirectedMaskSubgraph, UndirectedSubgraph, UndirectedView},
                },
            },
        },
        errors::GraphError,
    };
    pub use graph_views_api::{
        core::{
            entities::{EID, VID},
            Direction,
        },
        GraphType,
    };
}

#[cfg(test)]
mod test_utils;
