use crate::{
    db::{
        api::view::{
            filter::MembershipRule,
            internal::{CoreGraphOps, DirectedGraphOps, UndirectedGraphOps},
            GraphViewOps,
        },
        graph::views::filtered_edges::{filter_edge_cascading, EdgeSource, FilteredEdges},
    },
    errors::GraphError,
};
use graph_views_api::{
    core::Direction,
    inherit::Base,
    iter::{BoxedLIter, IntoDynBoxed},
    GraphType,
};
use itertools::Itertools;
use std::fmt::{Debug, Formatter};

/// A base graph seen through a membership rule.
///
/// Vertex and edge queries are filtered, endpoint and weight lookups are
/// passed through for visible edges. This is the shared core of the
/// directed and undirected views.
#[derive(Clone)]
pub struct FilteredGraph<G, R> {
    pub(crate) graph: G,
    pub(crate) rule: R,
}

impl<G: Debug, R: Debug> Debug for FilteredGraph<G, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilteredGraph")
            .field("graph", &self.graph as &dyn Debug)
            .field("rule", &self.rule)
            .finish()
    }
}

impl<G, R> Base for FilteredGraph<G, R> {
    type Base = G;

    #[inline(always)]
    fn base(&self) -> &Self::Base {
        &self.graph
    }
}

impl<G, R> FilteredGraph<G, R> {
    pub fn new(graph: G, rule: R) -> Self {
        Self { graph, rule }
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }
}

impl<G, R> FilteredGraph<G, R>
where
    G: CoreGraphOps,
    R: MembershipRule<G::Vertex, G::Edge>,
{
    /// All visible edges.
    pub fn edge_set(&self) -> FilteredEdges<'_, G, R> {
        FilteredEdges::new(&self.graph, &self.rule, EdgeSource::All)
    }

    /// Visible edges incident to `v`, failing if `v` is not visible.
    pub(crate) fn incident_edges(
        &self,
        v: G::Vertex,
        dir: Direction,
    ) -> Result<FilteredEdges<'_, G, R>, GraphError> {
        self.assert_vertex_exists(v)?;
        Ok(FilteredEdges::new(&self.graph, &self.rule, EdgeSource::Incident(v, dir)))
    }

    /// Distinct opposite endpoints of the visible edges incident to `v`.
    pub(crate) fn neighbours(
        &self,
        v: G::Vertex,
        dir: Direction,
    ) -> Result<Vec<G::Vertex>, GraphError> {
        Ok(self
            .incident_edges(v, dir)?
            .iter()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(src, dst)| if src == v { dst } else { src })
            .unique()
            .collect())
    }
}

impl<G, R> CoreGraphOps for FilteredGraph<G, R>
where
    G: CoreGraphOps,
    R: MembershipRule<G::Vertex, G::Edge>,
{
    type Vertex = G::Vertex;
    type Edge = G::Edge;

    #[inline]
    fn graph_type(&self) -> GraphType {
        self.graph.graph_type()
    }

    #[inline]
    fn has_vertex(&self, v: Self::Vertex) -> bool {
        self.graph.has_vertex(v) && self.rule.filter_vertex(&v)
    }

    #[inline]
    fn has_edge(&self, e: Self::Edge) -> bool {
        self.graph.has_edge(e) && filter_edge_cascading(&self.graph, &self.rule, e)
    }

    fn vertex_list(&self) -> BoxedLIter<'_, Self::Vertex> {
        self.graph
            .vertex_list()
            .filter(move |v| self.rule.filter_vertex(v))
            .into_dyn_boxed()
    }

    fn edge_list(&self) -> BoxedLIter<'_, Self::Edge> {
        self.edge_set().iter()
    }

    fn vertex_edges(&self, v: Self::Vertex, dir: Direction) -> BoxedLIter<'_, Self::Edge> {
        if self.rule.filter_vertex(&v) {
            FilteredEdges::new(&self.graph, &self.rule, EdgeSource::Incident(v, dir)).iter()
        } else {
            std::iter::empty().into_dyn_boxed()
        }
    }

    fn edge_source(&self, e: Self::Edge) -> Option<Self::Vertex> {
        if self.has_edge(e) {
            self.graph.edge_source(e)
        } else {
            None
        }
    }

    fn edge_target(&self, e: Self::Edge) -> Option<Self::Vertex> {
        if self.has_edge(e) {
            self.graph.edge_target(e)
        } else {
            None
        }
    }

    fn edge_weight(&self, e: Self::Edge) -> Option<f64> {
        if self.has_edge(e) {
            self.graph.edge_weight(e)
        } else {
            None
        }
    }
}

impl<G, R> UndirectedGraphOps for FilteredGraph<G, R>
where
    G: UndirectedGraphOps,
    R: MembershipRule<G::Vertex, G::Edge>,
{
}

impl<G, R> DirectedGraphOps for FilteredGraph<G, R>
where
    G: DirectedGraphOps,
    R: MembershipRule<G::Vertex, G::Edge>,
{
}
