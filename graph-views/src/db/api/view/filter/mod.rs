//! Membership rules decide which vertices and edges of a base graph are
//! visible through a view.
//!
//! Rules always answer with *visible* polarity: `true` means the element is
//! part of the view. Edge visibility is judged on the edge alone, hiding the
//! edges incident to an invisible vertex is done by the view.

mod exclusion_mask;
mod explicit_subset;

pub use exclusion_mask::{split_mask, ExclusionMask, MaskFunctor, NoMask};
pub use explicit_subset::ExplicitSubset;

pub trait MembershipRule<V, E>: Send + Sync {
    /// If `true`, vertex is included in the view
    fn filter_vertex(&self, vertex: &V) -> bool;

    /// If `true`, edge is included in the view (endpoints permitting)
    fn filter_edge(&self, edge: &E) -> bool;
}

impl<V, E, R: MembershipRule<V, E> + ?Sized> MembershipRule<V, E> for &R {
    #[inline]
    fn filter_vertex(&self, vertex: &V) -> bool {
        (**self).filter_vertex(vertex)
    }

    #[inline]
    fn filter_edge(&self, edge: &E) -> bool {
        (**self).filter_edge(edge)
    }
}
