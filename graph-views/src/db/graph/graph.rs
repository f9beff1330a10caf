//! Reference base graphs.
//!
//! [`Graph`] and [`DiGraph`] are cheap handles to shared, mutable storage.
//! Cloning a handle does not copy the graph, so a view built over a clone
//! observes every later mutation made through any other handle.
//!
//! Iterators returned by a graph hold a read lock on the storage until they
//! are dropped. Mutating the graph while one of its iterators is alive blocks.

use crate::{
    core::entities::graph::graph_storage::GraphStorage,
    db::api::{
        mutation::MutationOps,
        view::internal::{CoreGraphOps, DirectedGraphOps, InheritCoreOps, UndirectedGraphOps},
    },
};
use graph_views_api::{
    core::{
        entities::{EID, VID},
        utils::iter::GenLockedIter,
        Direction,
    },
    inherit::Base,
    iter::{BoxedLIter, IntoDynBoxed},
    GraphType,
};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::{
    fmt::{Debug, Display, Formatter},
    sync::Arc,
};

/// Shared storage behind a base graph handle.
#[derive(Clone)]
pub struct SharedGraph {
    inner: Arc<RwLock<GraphStorage>>,
}

impl SharedGraph {
    pub fn new(graph_type: GraphType) -> Self {
        Self {
            inner: Arc::new(RwLock::new(GraphStorage::new(graph_type))),
        }
    }

    #[inline]
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, GraphStorage> {
        self.inner.read_recursive()
    }

    #[inline]
    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, GraphStorage> {
        self.inner.write()
    }

    /// Check whether both handles point to the same storage.
    pub fn ptr_eq(&self, other: &SharedGraph) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Debug for SharedGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&*self.read(), f)
    }
}

impl Display for SharedGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let storage = self.read();
        write!(
            f,
            "Graph(type={}, number_of_vertices={}, number_of_edges={})",
            storage.graph_type(),
            storage.num_vertices(),
            storage.num_edges()
        )
    }
}

impl CoreGraphOps for SharedGraph {
    type Vertex = VID;
    type Edge = EID;

    #[inline]
    fn graph_type(&self) -> GraphType {
        self.read().graph_type()
    }

    #[inline]
    fn has_vertex(&self, v: VID) -> bool {
        self.read().has_vertex(v)
    }

    #[inline]
    fn has_edge(&self, e: EID) -> bool {
        self.read().has_edge(e)
    }

    fn vertex_list(&self) -> BoxedLIter<'_, VID> {
        GenLockedIter::from(self.inner.read_arc_recursive(), |storage| {
            storage.vertex_ids().into_dyn_boxed()
        })
        .into_dyn_boxed()
    }

    fn edge_list(&self) -> BoxedLIter<'_, EID> {
        GenLockedIter::from(self.inner.read_arc_recursive(), |storage| {
            storage.edge_ids().into_dyn_boxed()
        })
        .into_dyn_boxed()
    }

    fn vertex_edges(&self, v: VID, dir: Direction) -> BoxedLIter<'_, EID> {
        GenLockedIter::from(self.inner.read_arc_recursive(), move |storage| {
            storage.vertex_edges(v, dir).into_dyn_boxed()
        })
        .into_dyn_boxed()
    }

    #[inline]
    fn edge_source(&self, e: EID) -> Option<VID> {
        self.read().edge_source(e)
    }

    #[inline]
    fn edge_target(&self, e: EID) -> Option<VID> {
        self.read().edge_target(e)
    }

    #[inline]
    fn edge_weight(&self, e: EID) -> Option<f64> {
        self.read().edge_weight(e)
    }
}

/// Undirected multigraph allowing self-loops.
#[derive(Clone, Debug)]
pub struct Graph {
    inner: SharedGraph,
}

impl Graph {
    /// Create a new empty undirected graph
    pub fn new() -> Self {
        Self {
            inner: SharedGraph::new(GraphType::Undirected),
        }
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl Base for Graph {
    type Base = SharedGraph;

    #[inline(always)]
    fn base(&self) -> &Self::Base {
        &self.inner
    }
}

impl InheritCoreOps for Graph {}

impl UndirectedGraphOps for Graph {}

impl MutationOps for Graph {}

/// Directed multigraph allowing self-loops.
#[derive(Clone, Debug)]
pub struct DiGraph {
    inner: SharedGraph,
}

impl DiGraph {
    /// Create a new empty directed graph
    pub fn new() -> Self {
        Self {
            inner: SharedGraph::new(GraphType::Directed),
        }
    }
}

impl Default for DiGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for DiGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl Base for DiGraph {
    type Base = SharedGraph;

    #[inline(always)]
    fn base(&self) -> &Self::Base {
        &self.inner
    }
}

impl InheritCoreOps for DiGraph {}

impl DirectedGraphOps for DiGraph {}

impl MutationOps for DiGraph {}

#[cfg(test)]
mod db_tests {
    use super::*;
    use crate::db::api::view::GraphViewOps;
    use itertools::Itertools;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clone_shares_storage() {
        let g = Graph::new();
        let h = g.clone();
        let v = g.add_vertex();
        assert!(h.contains_vertex(v));
        assert!(g.base().ptr_eq(h.base()));
    }

    #[test]
    fn test_graph_type() {
        assert_eq!(Graph::new().graph_type(), GraphType::Undirected);
        assert_eq!(DiGraph::new().graph_type(), GraphType::Directed);
    }

    #[test]
    fn test_display() {
        let g = DiGraph::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        g.add_edge(a, b).unwrap();
        assert_eq!(
            g.to_string(),
            "Graph(type=directed, number_of_vertices=2, number_of_edges=1)"
        );
    }

    #[test]
    fn test_edges_between() {
        let g = DiGraph::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let ab1 = g.add_edge(a, b).unwrap();
        let ab2 = g.add_edge(a, b).unwrap();
        g.add_edge(b, a).unwrap();
        assert_eq!(g.edges_between(a, b).unwrap(), vec![ab1, ab2]);
        assert!(g.has_edge_between(b, a));

        let g = Graph::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let ab = g.add_edge(a, b).unwrap();
        assert_eq!(g.edge_between(b, a).unwrap(), Some(ab));
        assert!(g.edges_between(a, VID(9)).unwrap_err().is_no_such_element());
    }

    #[test]
    fn test_iterators_are_restartable() {
        let g = Graph::new();
        let vs = (0..3).map(|_| g.add_vertex()).collect_vec();
        assert_eq!(g.vertices().collect_vec(), vs);
        assert_eq!(g.vertices().collect_vec(), vs);
        assert_eq!(g.count_vertices(), 3);
    }

    #[test]
    fn test_weight() {
        let g = Graph::new();
        let a = g.add_vertex();
        let e = g.add_edge(a, a).unwrap();
        let w = g.add_weighted_edge(a, a, 2.5).unwrap();
        assert_eq!(g.weight(e), Ok(1.0));
        assert_eq!(g.weight(w), Ok(2.5));
        assert!(g.weight(EID(5)).is_err());
    }
}
