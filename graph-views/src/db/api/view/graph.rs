use crate::{db::api::view::internal::CoreGraphOps, errors::GraphError};
use graph_views_api::{core::Direction, iter::BoxedLIter};
use tracing::trace;

/// This trait GraphViewOps defines the checked operations for accessing
/// information about a graph. It is implemented for every graph, so base
/// graphs and views (and views of views) answer the same queries.
///
/// Queries naming a vertex or edge that is not visible fail with
/// [`GraphError::NoSuchElement`].
pub trait GraphViewOps: CoreGraphOps {
    /// Check if the graph contains vertex `v`.
    fn contains_vertex(&self, v: Self::Vertex) -> bool {
        self.has_vertex(v)
    }

    /// Check if the graph contains edge `e`.
    fn contains_edge(&self, e: Self::Edge) -> bool {
        self.has_edge(e)
    }

    fn assert_vertex_exists(&self, v: Self::Vertex) -> Result<(), GraphError> {
        if self.has_vertex(v) {
            Ok(())
        } else {
            trace!(vertex = ?v, "vertex not present in graph");
            Err(GraphError::no_such_vertex(v))
        }
    }

    fn assert_edge_exists(&self, e: Self::Edge) -> Result<(), GraphError> {
        if self.has_edge(e) {
            Ok(())
        } else {
            trace!(edge = ?e, "edge not present in graph");
            Err(GraphError::no_such_edge(e))
        }
    }

    /// Return an iterator over all vertices in the graph.
    fn vertices(&self) -> BoxedLIter<'_, Self::Vertex> {
        self.vertex_list()
    }

    /// Return an iterator over all edges in the graph.
    fn edges(&self) -> BoxedLIter<'_, Self::Edge> {
        self.edge_list()
    }

    /// Return the number of vertices in the graph.
    fn count_vertices(&self) -> usize {
        self.vertex_list().count()
    }

    /// Return the number of edges in the graph.
    fn count_edges(&self) -> usize {
        self.edge_list().count()
    }

    /// Check if the graph is empty.
    fn is_empty(&self) -> bool {
        self.vertex_list().next().is_none()
    }

    fn source(&self, e: Self::Edge) -> Result<Self::Vertex, GraphError> {
        self.edge_source(e).ok_or_else(|| GraphError::no_such_edge(e))
    }

    fn target(&self, e: Self::Edge) -> Result<Self::Vertex, GraphError> {
        self.edge_target(e).ok_or_else(|| GraphError::no_such_edge(e))
    }

    fn endpoints(&self, e: Self::Edge) -> Result<(Self::Vertex, Self::Vertex), GraphError> {
        self.edge_endpoints(e).ok_or_else(|| GraphError::no_such_edge(e))
    }

    fn weight(&self, e: Self::Edge) -> Result<f64, GraphError> {
        self.assert_edge_exists(e)?;
        self.edge_weight(e).ok_or_else(|| GraphError::no_such_edge(e))
    }

    /// All edges connecting `src` to `dst`.
    ///
    /// For directed graphs only edges from `src` to `dst` are returned, for
    /// undirected graphs either orientation matches.
    fn edges_between(
        &self,
        src: Self::Vertex,
        dst: Self::Vertex,
    ) -> Result<Vec<Self::Edge>, GraphError> {
        self.assert_vertex_exists(src)?;
        self.assert_vertex_exists(dst)?;
        let directed = self.graph_type().is_directed();
        Ok(self
            .vertex_edges(src, Direction::OUT)
            .filter(|&e| match self.edge_endpoints(e) {
                Some((s, t)) => (s == src && t == dst) || (!directed && s == dst && t == src),
                None => false,
            })
            .collect())
    }

    /// Some edge connecting `src` to `dst`, if there is one.
    fn edge_between(
        &self,
        src: Self::Vertex,
        dst: Self::Vertex,
    ) -> Result<Option<Self::Edge>, GraphError> {
        Ok(self.edges_between(src, dst)?.into_iter().next())
    }

    /// Check if the graph contains an edge given a pair of vertices `(src, dst)`.
    fn has_edge_between(&self, src: Self::Vertex, dst: Self::Vertex) -> bool {
        matches!(self.edge_between(src, dst), Ok(Some(_)))
    }
}

impl<G: CoreGraphOps + ?Sized> GraphViewOps for G {}
