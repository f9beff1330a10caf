use crate::errors::GraphError;
use graph_views_api::{
    core::{
        entities::{EID, VID},
        Direction,
    },
    GraphType,
};

#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct VertexStore {
    // edges where this vertex is the source (for undirected graphs the first endpoint)
    pub(crate) out_edges: Vec<EID>,
    // edges where this vertex is the target
    pub(crate) in_edges: Vec<EID>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EdgeStore {
    pub(crate) src: VID,
    pub(crate) dst: VID,
    pub(crate) weight: f64,
}

impl EdgeStore {
    #[inline]
    pub(crate) fn is_self_loop(&self) -> bool {
        self.src == self.dst
    }
}

/// Adjacency storage for a simple in-memory multigraph.
///
/// Slots of removed vertices and edges are left empty so ids are never reused.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStorage {
    graph_type: GraphType,
    vertices: Vec<Option<VertexStore>>,
    edges: Vec<Option<EdgeStore>>,
}

impl GraphStorage {
    pub fn new(graph_type: GraphType) -> Self {
        Self {
            graph_type,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    #[inline]
    pub fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    #[inline]
    pub(crate) fn vertex(&self, v: VID) -> Option<&VertexStore> {
        self.vertices.get(v.index()).and_then(|slot| slot.as_ref())
    }

    #[inline]
    pub(crate) fn edge(&self, e: EID) -> Option<&EdgeStore> {
        self.edges.get(e.index()).and_then(|slot| slot.as_ref())
    }

    #[inline]
    pub fn has_vertex(&self, v: VID) -> bool {
        self.vertex(v).is_some()
    }

    #[inline]
    pub fn has_edge(&self, e: EID) -> bool {
        self.edge(e).is_some()
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VID> + Send + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|_| VID(id)))
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EID> + Send + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|_| EID(id)))
    }

    pub fn num_vertices(&self) -> usize {
        self.vertex_ids().count()
    }

    pub fn num_edges(&self) -> usize {
        self.edge_ids().count()
    }

    /// Edges incident to `v` in direction `dir`.
    ///
    /// Undirected graphs ignore `dir`. When both directions are requested a
    /// self-loop sits in both lists and is only taken from the outgoing one.
    pub fn vertex_edges(&self, v: VID, dir: Direction) -> impl Iterator<Item = EID> + Send + '_ {
        let dir = if self.graph_type.is_directed() {
            dir
        } else {
            Direction::BOTH
        };
        let vertex = self.vertex(v);
        let out_edges = vertex
            .filter(|_| dir != Direction::IN)
            .into_iter()
            .flat_map(|vertex| vertex.out_edges.iter().copied());
        let in_edges = vertex
            .filter(|_| dir != Direction::OUT)
            .into_iter()
            .flat_map(move |vertex| {
                vertex.in_edges.iter().copied().filter(move |&e| {
                    dir != Direction::BOTH || !self.edge(e).is_some_and(EdgeStore::is_self_loop)
                })
            });
        out_edges.chain(in_edges)
    }

    pub fn edge_source(&self, e: EID) -> Option<VID> {
        self.edge(e).map(|edge| edge.src)
    }

    pub fn edge_target(&self, e: EID) -> Option<VID> {
        self.edge(e).map(|edge| edge.dst)
    }

    pub fn edge_weight(&self, e: EID) -> Option<f64> {
        self.edge(e).map(|edge| edge.weight)
    }

    pub fn add_vertex(&mut self) -> VID {
        let vid = VID(self.vertices.len());
        self.vertices.push(Some(VertexStore::default()));
        vid
    }

    pub fn add_edge(&mut self, src: VID, dst: VID, weight: f64) -> Result<EID, GraphError> {
        if !self.has_vertex(src) {
            return Err(GraphError::no_such_vertex(src));
        }
        if !self.has_vertex(dst) {
            return Err(GraphError::no_such_vertex(dst));
        }
        let eid = EID(self.edges.len());
        self.edges.push(Some(EdgeStore { src, dst, weight }));
        if let Some(vertex) = self.vertex_mut(src) {
            vertex.out_edges.push(eid);
        }
        if let Some(vertex) = self.vertex_mut(dst) {
            vertex.in_edges.push(eid);
        }
        Ok(eid)
    }

    pub fn remove_edge(&mut self, e: EID) -> Result<(), GraphError> {
        let edge = self
            .edges
            .get_mut(e.index())
            .and_then(Option::take)
            .ok_or_else(|| GraphError::no_such_edge(e))?;
        if let Some(vertex) = self.vertex_mut(edge.src) {
            vertex.out_edges.retain(|&other| other != e);
        }
        if let Some(vertex) = self.vertex_mut(edge.dst) {
            vertex.in_edges.retain(|&other| other != e);
        }
        Ok(())
    }

    /// Remove `v` together with every edge touching it.
    pub fn remove_vertex(&mut self, v: VID) -> Result<(), GraphError> {
        if !self.has_vertex(v) {
            return Err(GraphError::no_such_vertex(v));
        }
        let incident: Vec<EID> = self.vertex_edges(v, Direction::BOTH).collect();
        for e in incident {
            self.remove_edge(e)?;
        }
        if let Some(slot) = self.vertices.get_mut(v.index()) {
            *slot = None;
        }
        Ok(())
    }

    #[inline]
    fn vertex_mut(&mut self, v: VID) -> Option<&mut VertexStore> {
        self.vertices.get_mut(v.index()).and_then(|slot| slot.as_mut())
    }
}
