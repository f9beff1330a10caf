//! Directed subgraph views.
//!
//! A self-loop is both an incoming and an outgoing edge of its vertex, so it
//! adds one to the in-degree and one to the out-degree.

use crate::{
    db::{
        api::view::{
            filter::{ExclusionMask, ExplicitSubset, MembershipRule},
            internal::{CoreGraphOps, DirectedGraphOps, InheritCoreOps},
        },
        graph::views::{filtered_edges::FilteredEdges, filtered_graph::FilteredGraph},
    },
    errors::GraphError,
};
use ahash::HashSet;
use graph_views_api::{core::Direction, inherit::Base};
use std::fmt::{Debug, Formatter};
use tracing::debug;

/// Read-only directed view of a base graph filtered by a membership rule.
#[derive(Clone)]
pub struct DirectedView<G, R> {
    graph: FilteredGraph<G, R>,
}

/// Directed subgraph induced by explicit vertex and edge sets.
pub type DirectedSubgraph<G> =
    DirectedView<G, ExplicitSubset<<G as CoreGraphOps>::Vertex, <G as CoreGraphOps>::Edge>>;

/// Directed subgraph hiding the vertices and edges matched by two masks.
pub type DirectedMaskSubgraph<G, FV, FE> = DirectedView<G, ExclusionMask<FV, FE>>;

impl<G: Debug, R: Debug> Debug for DirectedView<G, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectedView")
            .field("graph", &self.graph.graph as &dyn Debug)
            .field("rule", &self.graph.rule)
            .finish()
    }
}

impl<G, R> Base for DirectedView<G, R> {
    type Base = FilteredGraph<G, R>;

    #[inline(always)]
    fn base(&self) -> &Self::Base {
        &self.graph
    }
}

impl<G, R> InheritCoreOps for DirectedView<G, R> {}

impl<G, R> DirectedGraphOps for DirectedView<G, R>
where
    G: DirectedGraphOps,
    R: MembershipRule<G::Vertex, G::Edge>,
{
}

impl<G, R> DirectedView<G, R>
where
    G: DirectedGraphOps,
    R: MembershipRule<G::Vertex, G::Edge>,
{
    /// Create a view of `graph` showing only what `rule` admits.
    pub fn new(graph: G, rule: R) -> Self {
        debug!(view = "directed", graph_type = %graph.graph_type(), "creating subgraph view");
        Self {
            graph: FilteredGraph::new(graph, rule),
        }
    }

    pub fn rule(&self) -> &R {
        self.graph.rule()
    }

    pub fn edge_set(&self) -> FilteredEdges<'_, G, R> {
        self.graph.edge_set()
    }

    /// Visible edges ending at `v`.
    pub fn incoming_edges_of(&self, v: G::Vertex) -> Result<FilteredEdges<'_, G, R>, GraphError> {
        self.graph.incident_edges(v, Direction::IN)
    }

    /// Visible edges starting at `v`.
    pub fn outgoing_edges_of(&self, v: G::Vertex) -> Result<FilteredEdges<'_, G, R>, GraphError> {
        self.graph.incident_edges(v, Direction::OUT)
    }

    /// Visible edges touching `v` in either direction. A self-loop is listed once.
    pub fn edges_of(&self, v: G::Vertex) -> Result<FilteredEdges<'_, G, R>, GraphError> {
        self.graph.incident_edges(v, Direction::BOTH)
    }

    pub fn in_degree_of(&self, v: G::Vertex) -> Result<usize, GraphError> {
        Ok(self.incoming_edges_of(v)?.len())
    }

    pub fn out_degree_of(&self, v: G::Vertex) -> Result<usize, GraphError> {
        Ok(self.outgoing_edges_of(v)?.len())
    }

    /// Sum of in-degree and out-degree.
    pub fn degree_of(&self, v: G::Vertex) -> Result<usize, GraphError> {
        Ok(self.in_degree_of(v)? + self.out_degree_of(v)?)
    }

    /// Distinct vertices reached from `v` over visible edges in direction `dir`.
    pub fn neighbours(&self, v: G::Vertex, dir: Direction) -> Result<Vec<G::Vertex>, GraphError> {
        self.graph.neighbours(v, dir)
    }
}

impl<G: DirectedGraphOps> DirectedView<G, ExplicitSubset<G::Vertex, G::Edge>> {
    /// View induced by explicit sets. `None` leaves that kind unrestricted.
    pub fn induced(
        graph: G,
        vertices: Option<HashSet<G::Vertex>>,
        edges: Option<HashSet<G::Edge>>,
    ) -> Self {
        Self::new(graph, ExplicitSubset::new(vertices, edges))
    }
}

impl<G, FV, FE> DirectedView<G, ExclusionMask<FV, FE>>
where
    G: DirectedGraphOps,
    FV: Fn(&G::Vertex) -> bool + Send + Sync,
    FE: Fn(&G::Edge) -> bool + Send + Sync,
{
    /// View hiding every vertex matched by `vertex_mask` and every edge
    /// matched by `edge_mask` or touching a hidden vertex.
    pub fn masked(graph: G, vertex_mask: FV, edge_mask: FE) -> Self {
        Self::new(graph, ExclusionMask::new(vertex_mask, edge_mask))
    }
}

#[cfg(test)]
mod directed_view_tests {
    use super::*;
    use crate::{
        core::entities::{EID, VID},
        db::{
            api::{
                mutation::MutationOps,
                view::{
                    filter::{split_mask, MaskFunctor},
                    GraphViewOps,
                },
            },
            graph::graph::DiGraph,
        },
        test_utils::{build_digraph, build_edge_list},
    };
    use itertools::Itertools;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn abc() -> (DiGraph, [VID; 3], [EID; 3]) {
        let g = DiGraph::new();
        let [a, b, c] = [g.add_vertex(), g.add_vertex(), g.add_vertex()];
        let ab = g.add_edge(a, b).unwrap();
        let bc = g.add_edge(b, c).unwrap();
        let cc = g.add_edge(c, c).unwrap();
        (g, [a, b, c], [ab, bc, cc])
    }

    #[test]
    fn test_masked_middle_vertex() {
        let (g, [a, b, c], [ab, bc, cc]) = abc();
        let view: DirectedMaskSubgraph<_, _, _> =
            DirectedView::masked(g, move |v: &VID| *v == b, |_: &EID| false);

        assert_eq!(view.vertices().collect_vec(), vec![a, c]);
        assert_eq!(view.edges().collect_vec(), vec![cc]);
        assert!(!view.contains_edge(ab));
        assert!(!view.contains_edge(bc));
        assert_eq!(view.in_degree_of(c).unwrap(), 1);
        assert_eq!(view.out_degree_of(c).unwrap(), 1);
        assert_eq!(view.degree_of(c).unwrap(), 2);
        assert_eq!(view.degree_of(a).unwrap(), 0);
        assert_eq!(view.edges_of(c).unwrap().len(), 1);
    }

    #[test]
    fn test_lone_self_loop() {
        let g = DiGraph::new();
        let v = g.add_vertex();
        let e = g.add_edge(v, v).unwrap();

        let view = DirectedSubgraph::induced(g, None, None);
        assert_eq!(view.in_degree_of(v).unwrap(), 1);
        assert_eq!(view.out_degree_of(v).unwrap(), 1);
        assert!(view.incoming_edges_of(v).unwrap().contains(e));
        assert!(view.outgoing_edges_of(v).unwrap().contains(e));
        assert_eq!(view.neighbours(v, Direction::OUT).unwrap(), vec![v]);
    }

    #[test]
    fn test_explicit_edges() {
        let (g, [a, b, c], [ab, bc, _]) = abc();
        let view = DirectedView::induced(g, None, Some([ab, bc].into_iter().collect()));
        assert_eq!(view.out_degree_of(a).unwrap(), 1);
        assert_eq!(view.in_degree_of(c).unwrap(), 1);
        assert_eq!(view.out_degree_of(c).unwrap(), 0);
        assert_eq!(view.neighbours(b, Direction::IN).unwrap(), vec![a]);
        assert_eq!(view.neighbours(b, Direction::BOTH).unwrap(), vec![c, a]);
        assert_eq!(view.edges_between(a, b).unwrap(), vec![ab]);
        assert!(view.edges_between(b, a).unwrap().is_empty());
    }

    #[test]
    fn test_absent_vertex() {
        let (g, [_, b, _], _) = abc();
        let view = DirectedView::induced(g, Some(HashSet::default()), None);
        assert!(view.in_degree_of(b).unwrap_err().is_no_such_element());
        assert!(view.out_degree_of(b).unwrap_err().is_no_such_element());
        assert!(view.is_empty());
    }

    #[test]
    fn test_mask_functor() {
        struct HideFirst;

        impl MaskFunctor<VID, EID> for HideFirst {
            fn is_vertex_masked(&self, vertex: &VID) -> bool {
                vertex.index() == 0
            }

            fn is_edge_masked(&self, _: &EID) -> bool {
                false
            }
        }

        let (g, [a, b, c], [_, bc, cc]) = abc();
        let view = DirectedView::new(g, split_mask::<VID, EID, _>(HideFirst));
        assert!(!view.contains_vertex(a));
        assert_eq!(view.edges().collect_vec(), vec![bc, cc]);
        assert_eq!(view.in_degree_of(b).unwrap(), 0);
        assert_eq!(view.in_degree_of(c).unwrap(), 2);
    }

    #[test]
    fn test_view_is_live() {
        let (g, [a, b, c], [ab, ..]) = abc();
        let view = DirectedView::masked(g.clone(), move |v: &VID| *v == c, |_: &EID| false);
        assert_eq!(view.out_degree_of(a).unwrap(), 1);

        g.remove_edge(ab).unwrap();
        assert_eq!(view.out_degree_of(a).unwrap(), 0);

        let ba = g.add_edge(b, a).unwrap();
        assert_eq!(view.in_degree_of(a).unwrap(), 1);
        assert_eq!(view.source(ba), Ok(b));
    }

    #[test]
    fn test_degree_consistency() {
        proptest!(|(edges in build_edge_list(30, 6), hidden in proptest::collection::vec(any::<bool>(), 6))| {
            let g = build_digraph(6, &edges);
            let view = DirectedView::masked(g, move |v: &VID| hidden[v.index()], |e: &EID| e.index() % 3 == 1);
            for v in view.vertices() {
                let loops = view.edges_of(v).unwrap().self_loops();
                prop_assert_eq!(view.edges_of(v).unwrap().len() + loops, view.degree_of(v).unwrap());
                for e in view.incoming_edges_of(v).unwrap().iter() {
                    prop_assert_eq!(view.target(e).unwrap(), v);
                }
                for e in view.outgoing_edges_of(v).unwrap().iter() {
                    prop_assert_eq!(view.source(e).unwrap(), v);
                }
            }
            let total_in: usize = view.vertices().map(|v| view.in_degree_of(v).unwrap()).sum();
            prop_assert_eq!(total_in, view.count_edges());
        })
    }
}
