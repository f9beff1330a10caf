use crate::{db::graph::graph::SharedGraph, errors::GraphError};
use graph_views_api::{
    core::entities::{EID, VID},
    inherit::Base,
};
use tracing::trace;

/// Weight reported for edges added without an explicit weight.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Mutations of a base graph. Views built over the graph see the changes.
pub trait MutationOps: Base<Base = SharedGraph> {
    /// Add a new isolated vertex and return its id
    fn add_vertex(&self) -> VID {
        let v = self.base().write().add_vertex();
        trace!(vertex = %v, "added vertex");
        v
    }

    /// Add an edge from `src` to `dst` with the default weight.
    ///
    /// Fails with [`GraphError::NoSuchElement`] if either endpoint is missing.
    fn add_edge(&self, src: VID, dst: VID) -> Result<EID, GraphError> {
        self.add_weighted_edge(src, dst, DEFAULT_EDGE_WEIGHT)
    }

    fn add_weighted_edge(&self, src: VID, dst: VID, weight: f64) -> Result<EID, GraphError> {
        let e = self.base().write().add_edge(src, dst, weight)?;
        trace!(edge = %e, src = %src, dst = %dst, weight, "added edge");
        Ok(e)
    }

    fn remove_edge(&self, e: EID) -> Result<(), GraphError> {
        self.base().write().remove_edge(e)?;
        trace!(edge = %e, "removed edge");
        Ok(())
    }

    /// Remove a vertex and all edges touching it.
    fn remove_vertex(&self, v: VID) -> Result<(), GraphError> {
        self.base().write().remove_vertex(v)?;
        trace!(vertex = %v, "removed vertex");
        Ok(())
    }
}
