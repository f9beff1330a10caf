use super::MembershipRule;
use ahash::HashSet;
use std::{hash::Hash, sync::Arc};

/// Rule built from explicit vertex and edge sets.
///
/// A missing set (`None`) makes every element of that kind visible, an empty
/// set makes none visible.
#[derive(Debug)]
pub struct ExplicitSubset<V, E> {
    vertices: Option<Arc<HashSet<V>>>,
    edges: Option<Arc<HashSet<E>>>,
}

impl<V, E> Clone for ExplicitSubset<V, E> {
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
            edges: self.edges.clone(),
        }
    }
}

impl<V: Eq + Hash, E: Eq + Hash> ExplicitSubset<V, E> {
    pub fn new(vertices: Option<HashSet<V>>, edges: Option<HashSet<E>>) -> Self {
        Self {
            vertices: vertices.map(Arc::new),
            edges: edges.map(Arc::new),
        }
    }

    /// Everything is visible.
    pub fn all() -> Self {
        Self::new(None, None)
    }

    /// The subgraph induced by `vertices`: all edges between them are visible.
    pub fn induced(vertices: impl IntoIterator<Item = V>) -> Self {
        Self::new(Some(vertices.into_iter().collect()), None)
    }

    /// Restrict the visible edges to `edges`.
    pub fn with_edges(self, edges: impl IntoIterator<Item = E>) -> Self {
        Self {
            vertices: self.vertices,
            edges: Some(Arc::new(edges.into_iter().collect())),
        }
    }

    pub fn vertex_subset(&self) -> Option<&HashSet<V>> {
        self.vertices.as_deref()
    }

    pub fn edge_subset(&self) -> Option<&HashSet<E>> {
        self.edges.as_deref()
    }
}

impl<V, E> MembershipRule<V, E> for ExplicitSubset<V, E>
where
    V: Eq + Hash + Send + Sync,
    E: Eq + Hash + Send + Sync,
{
    #[inline]
    fn filter_vertex(&self, vertex: &V) -> bool {
        self.vertices
            .as_ref()
            .map_or(true, |vertices| vertices.contains(vertex))
    }

    #[inline]
    fn filter_edge(&self, edge: &E) -> bool {
        self.edges.as_ref().map_or(true, |edges| edges.contains(edge))
    }
}

#[cfg(test)]
mod explicit_subset_tests {
    use super::*;
    use graph_views_api::core::entities::{EID, VID};

    #[test]
    fn test_absent_set_is_permissive() {
        let subset = ExplicitSubset::<VID, EID>::all();
        assert!(subset.filter_vertex(&VID(42)));
        assert!(subset.filter_edge(&EID(42)));
    }

    #[test]
    fn test_empty_set_hides_everything() {
        let subset =
            ExplicitSubset::<VID, EID>::new(Some(HashSet::default()), Some(HashSet::default()));
        assert!(!subset.filter_vertex(&VID(0)));
        assert!(!subset.filter_edge(&EID(0)));
    }

    #[test]
    fn test_membership() {
        let subset = ExplicitSubset::<VID, EID>::induced([VID(1), VID(2)]).with_edges([EID(5)]);
        assert!(subset.filter_vertex(&VID(1)));
        assert!(!subset.filter_vertex(&VID(3)));
        assert!(subset.filter_edge(&EID(5)));
        assert!(!subset.filter_edge(&EID(4)));
        assert_eq!(subset.vertex_subset().map(|v| v.len()), Some(2));
    }
}
