//! Undirected subgraph views.
//!
//! Degrees follow the undirected convention: a self-loop contributes two to
//! the degree of its vertex, every other visible edge contributes one.

use crate::{
    db::{
        api::view::{
            filter::{ExclusionMask, ExplicitSubset, MembershipRule},
            internal::{CoreGraphOps, InheritCoreOps, UndirectedGraphOps},
        },
        graph::views::{
            filtered_edges::{is_self_loop, FilteredEdges},
            filtered_graph::FilteredGraph,
        },
    },
    errors::GraphError,
};
use ahash::HashSet;
use graph_views_api::{core::Direction, inherit::Base};
use std::fmt::{Debug, Formatter};
use tracing::debug;

/// Read-only undirected view of a base graph filtered by a membership rule.
#[derive(Clone)]
pub struct UndirectedView<G, R> {
    graph: FilteredGraph<G, R>,
}

/// Undirected subgraph induced by explicit vertex and edge sets.
pub type UndirectedSubgraph<G> =
    UndirectedView<G, ExplicitSubset<<G as CoreGraphOps>::Vertex, <G as CoreGraphOps>::Edge>>;

/// Undirected subgraph hiding the vertices and edges matched by two masks.
pub type UndirectedMaskSubgraph<G, FV, FE> = UndirectedView<G, ExclusionMask<FV, FE>>;

impl<G: Debug, R: Debug> Debug for UndirectedView<G, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UndirectedView")
            .field("graph", &self.graph.graph as &dyn Debug)
            .field("rule", &self.graph.rule)
            .finish()
    }
}

impl<G, R> Base for UndirectedView<G, R> {
    type Base = FilteredGraph<G, R>;

    #[inline(always)]
    fn base(&self) -> &Self::Base {
        &self.graph
    }
}

impl<G, R> InheritCoreOps for UndirectedView<G, R> {}

impl<G, R> UndirectedGraphOps for UndirectedView<G, R>
where
    G: UndirectedGraphOps,
    R: MembershipRule<G::Vertex, G::Edge>,
{
}

impl<G, R> UndirectedView<G, R>
where
    G: UndirectedGraphOps,
    R: MembershipRule<G::Vertex, G::Edge>,
{
    /// Create a view of `graph` showing only what `rule` admits.
    pub fn new(graph: G, rule: R) -> Self {
        debug!(view = "undirected", graph_type = %graph.graph_type(), "creating subgraph view");
        Self {
            graph: FilteredGraph::new(graph, rule),
        }
    }

    pub fn rule(&self) -> &R {
        self.graph.rule()
    }

    /// All visible edges as a lazy collection.
    pub fn edge_set(&self) -> FilteredEdges<'_, G, R> {
        self.graph.edge_set()
    }

    /// Visible edges touching `v`.
    ///
    /// Fails with [`GraphError::NoSuchElement`] if `v` is not in the view.
    pub fn edges_of(&self, v: G::Vertex) -> Result<FilteredEdges<'_, G, R>, GraphError> {
        self.graph.incident_edges(v, Direction::BOTH)
    }

    /// Degree of `v` in the view, counting a self-loop twice.
    pub fn degree_of(&self, v: G::Vertex) -> Result<usize, GraphError> {
        let edges = self.edges_of(v)?;
        let graph = &self.graph.graph;
        Ok(edges
            .iter()
            .map(|e| if is_self_loop(graph, e) { 2 } else { 1 })
            .sum())
    }

    /// Distinct vertices adjacent to `v` in the view.
    pub fn neighbours(&self, v: G::Vertex) -> Result<Vec<G::Vertex>, GraphError> {
        self.graph.neighbours(v, Direction::BOTH)
    }
}

impl<G: UndirectedGraphOps> UndirectedView<G, ExplicitSubset<G::Vertex, G::Edge>> {
    /// View induced by explicit sets. `None` leaves that kind unrestricted.
    pub fn induced(
        graph: G,
        vertices: Option<HashSet<G::Vertex>>,
        edges: Option<HashSet<G::Edge>>,
    ) -> Self {
        Self::new(graph, ExplicitSubset::new(vertices, edges))
    }
}

impl<G, FV, FE> UndirectedView<G, ExclusionMask<FV, FE>>
where
    G: UndirectedGraphOps,
    FV: Fn(&G::Vertex) -> bool + Send + Sync,
    FE: Fn(&G::Edge) -> bool + Send + Sync,
{
    /// View hiding every vertex matched by `vertex_mask` and every edge
    /// matched by `edge_mask` or touching a hidden vertex.
    pub fn masked(graph: G, vertex_mask: FV, edge_mask: FE) -> Self {
        Self::new(graph, ExclusionMask::new(vertex_mask, edge_mask))
    }
}
