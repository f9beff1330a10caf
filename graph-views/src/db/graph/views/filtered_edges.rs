use crate::db::api::view::{filter::MembershipRule, internal::CoreGraphOps};
use graph_views_api::{
    core::Direction,
    iter::{BoxedLIter, IntoDynBoxed},
};
use std::fmt::{Debug, Formatter};

/// Which base edges a [`FilteredEdges`] draws from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EdgeSource<V> {
    /// Every edge of the graph
    All,
    /// Edges incident to a vertex in the given direction
    Incident(V, Direction),
}

/// Lazy, set-like collection of the visible edges of a base graph.
///
/// Nothing is materialised: every call re-reads the base graph and
/// re-applies the rule, so the collection always reflects the current state
/// of the base.
pub struct FilteredEdges<'a, G: CoreGraphOps, R> {
    graph: &'a G,
    rule: &'a R,
    source: EdgeSource<G::Vertex>,
}

impl<'a, G: CoreGraphOps, R> Clone for FilteredEdges<'a, G, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, G: CoreGraphOps, R> Copy for FilteredEdges<'a, G, R> {}

impl<'a, G, R> FilteredEdges<'a, G, R>
where
    G: CoreGraphOps,
    R: MembershipRule<G::Vertex, G::Edge>,
{
    pub(crate) fn new(graph: &'a G, rule: &'a R, source: EdgeSource<G::Vertex>) -> Self {
        Self {
            graph,
            rule,
            source,
        }
    }

    /// Iterate over the visible edges in base order. Each call starts afresh.
    pub fn iter(&self) -> BoxedLIter<'a, G::Edge> {
        let graph = self.graph;
        let rule = self.rule;
        let edges = match self.source {
            EdgeSource::All => graph.edge_list(),
            EdgeSource::Incident(v, dir) => graph.vertex_edges(v, dir),
        };
        edges
            .filter(move |&e| filter_edge_cascading(graph, rule, e))
            .into_dyn_boxed()
    }

    /// Number of visible edges. A self-loop is counted once.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Number of visible self-loops.
    pub fn self_loops(&self) -> usize {
        let graph = self.graph;
        self.iter().filter(|&e| is_self_loop(graph, e)).count()
    }

    /// Check if `e` belongs to the collection.
    ///
    /// Edges unknown to the base graph are never contained.
    pub fn contains(&self, e: G::Edge) -> bool {
        let in_source = match self.source {
            EdgeSource::All => self.graph.has_edge(e),
            EdgeSource::Incident(v, dir) => match self.graph.edge_endpoints(e) {
                Some((src, dst)) => {
                    let dir = if self.graph.graph_type().is_directed() {
                        dir
                    } else {
                        Direction::BOTH
                    };
                    match dir {
                        Direction::OUT => src == v,
                        Direction::IN => dst == v,
                        Direction::BOTH => src == v || dst == v,
                    }
                }
                None => false,
            },
        };
        in_source && filter_edge_cascading(self.graph, self.rule, e)
    }
}

impl<'a, 'b, G, R> IntoIterator for &'b FilteredEdges<'a, G, R>
where
    G: CoreGraphOps,
    R: MembershipRule<G::Vertex, G::Edge>,
{
    type Item = G::Edge;
    type IntoIter = BoxedLIter<'a, G::Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, G, R> Debug for FilteredEdges<'a, G, R>
where
    G: CoreGraphOps,
    R: MembershipRule<G::Vertex, G::Edge>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// An edge is visible if the rule admits it and both of its endpoints.
#[inline]
pub(crate) fn filter_edge_cascading<G, R>(graph: &G, rule: &R, e: G::Edge) -> bool
where
    G: CoreGraphOps + ?Sized,
    R: MembershipRule<G::Vertex, G::Edge> + ?Sized,
{
    rule.filter_edge(&e)
        && graph
            .edge_endpoints(e)
            .is_some_and(|(src, dst)| rule.filter_vertex(&src) && rule.filter_vertex(&dst))
}

#[inline]
pub(crate) fn is_self_loop<G: CoreGraphOps + ?Sized>(graph: &G, e: G::Edge) -> bool {
    graph.edge_endpoints(e).is_some_and(|(src, dst)| src == dst)
}

#[cfg(test)]
mod filtered_edges_tests {
    use super::*;
    use crate::{
        core::entities::{EID, VID},
        db::{
            api::{mutation::MutationOps, view::filter::ExclusionMask},
            graph::graph::{DiGraph, Graph},
        },
    };
    use itertools::Itertools;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cascading_exclusion() {
        let g = Graph::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let ab = g.add_edge(a, b).unwrap();
        let aa = g.add_edge(a, a).unwrap();

        let rule = ExclusionMask::vertices(|v: &VID| *v == b);
        let edges = FilteredEdges::new(&g, &rule, EdgeSource::All);
        assert_eq!(edges.iter().collect_vec(), vec![aa]);
        assert!(!edges.contains(ab));
        assert!(edges.contains(aa));
        assert_eq!(edges.len(), 1);
        assert_eq!(edges.self_loops(), 1);
    }

    #[test]
    fn test_unknown_edge_not_contained() {
        let g = Graph::new();
        let rule = ExclusionMask::new(|_: &VID| false, |_: &EID| false);
        let edges = FilteredEdges::new(&g, &rule, EdgeSource::All);
        assert!(!edges.contains(EID(3)));
        assert!(edges.is_empty());
    }

    #[test]
    fn test_incident_direction() {
        let g = DiGraph::new();
        let a = g.add_vertex();
        let b = g.add_vertex();
        let ab = g.add_edge(a, b).unwrap();
        let bb = g.add_edge(b, b).unwrap();
        let rule = ExclusionMask::new(|_: &VID| false, |_: &EID| false);

        let incoming = FilteredEdges::new(&g, &rule, EdgeSource::Incident(b, Direction::IN));
        let outgoing = FilteredEdges::new(&g, &rule, EdgeSource::Incident(b, Direction::OUT));
        assert_eq!(incoming.iter().collect_vec(), vec![ab, bb]);
        assert_eq!(outgoing.iter().collect_vec(), vec![bb]);
        assert!(incoming.contains(ab));
        assert!(!outgoing.contains(ab));
        assert!(outgoing.contains(bb));
    }

    #[test]
    fn test_live_and_restartable() {
        let g = Graph::new();
        let a = g.add_vertex();
        let rule = ExclusionMask::new(|_: &VID| false, |_: &EID| false);
        let edges = FilteredEdges::new(&g, &rule, EdgeSource::Incident(a, Direction::BOTH));
        assert!(edges.is_empty());

        let aa = g.add_edge(a, a).unwrap();
        assert_eq!(edges.iter().collect_vec(), vec![aa]);
        assert_eq!((&edges).into_iter().collect_vec(), vec![aa]);
        assert_eq!(format!("{:?}", edges), format!("{{{:?}}}", aa));
    }
}
