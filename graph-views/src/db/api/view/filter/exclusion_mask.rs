use super::MembershipRule;
use std::{
    fmt::{Debug, Formatter},
    sync::Arc,
};

pub type NoMask<T> = fn(&T) -> bool;

fn no_mask<T>(_: &T) -> bool {
    false
}

/// Rule built from two exclusion predicates: an element is hidden when its
/// predicate returns `true`.
#[derive(Clone)]
pub struct ExclusionMask<FV, FE> {
    vertex_mask: FV,
    edge_mask: FE,
}

impl<FV, FE> Debug for ExclusionMask<FV, FE> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExclusionMask").finish_non_exhaustive()
    }
}

impl<FV, FE> ExclusionMask<FV, FE> {
    pub fn new(vertex_mask: FV, edge_mask: FE) -> Self {
        Self {
            vertex_mask,
            edge_mask,
        }
    }
}

impl<FV, E> ExclusionMask<FV, NoMask<E>> {
    /// Mask vertices only, every edge between visible vertices stays visible.
    pub fn vertices(vertex_mask: FV) -> Self {
        Self::new(vertex_mask, no_mask::<E>)
    }
}

impl<V, FE> ExclusionMask<NoMask<V>, FE> {
    /// Mask edges only, every vertex stays visible.
    pub fn edges(edge_mask: FE) -> Self {
        Self::new(no_mask::<V>, edge_mask)
    }
}

impl<V, E, FV, FE> MembershipRule<V, E> for ExclusionMask<FV, FE>
where
    FV: Fn(&V) -> bool + Send + Sync,
    FE: Fn(&E) -> bool + Send + Sync,
{
    #[inline]
    fn filter_vertex(&self, vertex: &V) -> bool {
        !(self.vertex_mask)(vertex)
    }

    #[inline]
    fn filter_edge(&self, edge: &E) -> bool {
        !(self.edge_mask)(edge)
    }
}

/// Single object masking both vertices and edges.
pub trait MaskFunctor<V, E>: Send + Sync {
    fn is_vertex_masked(&self, vertex: &V) -> bool;

    fn is_edge_masked(&self, edge: &E) -> bool;
}

/// Split a combined [`MaskFunctor`] into the two predicates of an [`ExclusionMask`].
pub fn split_mask<V, E, M: MaskFunctor<V, E> + 'static>(
    mask: M,
) -> ExclusionMask<impl Fn(&V) -> bool + Clone + Send + Sync, impl Fn(&E) -> bool + Clone + Send + Sync>
{
    let vertex_mask = Arc::new(mask);
    let edge_mask = vertex_mask.clone();
    ExclusionMask::new(
        move |v: &V| vertex_mask.is_vertex_masked(v),
        move |e: &E| edge_mask.is_edge_masked(e),
    )
}
