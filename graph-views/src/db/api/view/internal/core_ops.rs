use graph_views_api::{core::Direction, inherit::Base, iter::BoxedLIter, GraphType};
use std::{fmt::Debug, hash::Hash};

/// Core structural queries every graph (base or view) answers.
///
/// These are unchecked: asking about a vertex or edge that does not exist
/// yields an empty iterator or `None` rather than an error. The checked,
/// user-facing surface is [`GraphViewOps`](crate::db::api::view::GraphViewOps).
pub trait CoreGraphOps: Send + Sync {
    type Vertex: Copy + Eq + Hash + Debug + Send + Sync + 'static;
    type Edge: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    fn graph_type(&self) -> GraphType;

    fn has_vertex(&self, v: Self::Vertex) -> bool;

    fn has_edge(&self, e: Self::Edge) -> bool;

    fn vertex_list(&self) -> BoxedLIter<'_, Self::Vertex>;

    fn edge_list(&self) -> BoxedLIter<'_, Self::Edge>;

    /// Edges incident to `v`.
    ///
    /// `Direction::BOTH` yields every incident edge, `IN` and `OUT` restrict to
    /// incoming and outgoing edges of a directed graph. Undirected graphs treat
    /// every direction as `BOTH`. A self-loop is yielded exactly once.
    fn vertex_edges(&self, v: Self::Vertex, dir: Direction) -> BoxedLIter<'_, Self::Edge>;

    fn edge_source(&self, e: Self::Edge) -> Option<Self::Vertex>;

    fn edge_target(&self, e: Self::Edge) -> Option<Self::Vertex>;

    fn edge_weight(&self, e: Self::Edge) -> Option<f64>;

    #[inline]
    fn edge_endpoints(&self, e: Self::Edge) -> Option<(Self::Vertex, Self::Vertex)> {
        Some((self.edge_source(e)?, self.edge_target(e)?))
    }
}

/// Marker for graphs whose edges are unordered pairs.
pub trait UndirectedGraphOps: CoreGraphOps {}

/// Marker for graphs whose edges run from source to target.
pub trait DirectedGraphOps: CoreGraphOps {}

pub trait InheritCoreOps: Base {}

impl<G: InheritCoreOps + Send + Sync> CoreGraphOps for G
where
    G::Base: CoreGraphOps,
{
    type Vertex = <G::Base as CoreGraphOps>::Vertex;
    type Edge = <G::Base as CoreGraphOps>::Edge;

    #[inline]
    fn graph_type(&self) -> GraphType {
        self.base().graph_type()
    }

    #[inline]
    fn has_vertex(&self, v: Self::Vertex) -> bool {
        self.base().has_vertex(v)
    }

    #[inline]
    fn has_edge(&self, e: Self::Edge) -> bool {
        self.base().has_edge(e)
    }

    #[inline]
    fn vertex_list(&self) -> BoxedLIter<'_, Self::Vertex> {
        self.base().vertex_list()
    }

    #[inline]
    fn edge_list(&self) -> BoxedLIter<'_, Self::Edge> {
        self.base().edge_list()
    }

    #[inline]
    fn vertex_edges(&self, v: Self::Vertex, dir: Direction) -> BoxedLIter<'_, Self::Edge> {
        self.base().vertex_edges(v, dir)
    }

    #[inline]
    fn edge_source(&self, e: Self::Edge) -> Option<Self::Vertex> {
        self.base().edge_source(e)
    }

    #[inline]
    fn edge_target(&self, e: Self::Edge) -> Option<Self::Vertex> {
        self.base().edge_target(e)
    }

    #[inline]
    fn edge_weight(&self, e: Self::Edge) -> Option<f64> {
        self.base().edge_weight(e)
    }
}
