use std::fmt::{self, Debug, Display, Formatter};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Vertex,
    Edge,
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Vertex => write!(f, "vertex"),
            ElementKind::Edge => write!(f, "edge"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// The element is either absent from the base graph or hidden by the view.
    #[error("No such {kind} in graph: {id}")]
    NoSuchElement { kind: ElementKind, id: String },
}

impl GraphError {
    pub fn no_such_vertex<V: Debug>(vertex: V) -> Self {
        GraphError::NoSuchElement {
            kind: ElementKind::Vertex,
            id: format!("{:?}", vertex),
        }
    }

    pub fn no_such_edge<E: Debug>(edge: E) -> Self {
        GraphError::NoSuchElement {
            kind: ElementKind::Edge,
            id: format!("{:?}", edge),
        }
    }

    pub fn is_no_such_element(&self) -> bool {
        matches!(self, GraphError::NoSuchElement { .. })
    }
}

#[cfg(test)]
mod errors_tests {
    use super::*;
    use graph_views_api::core::entities::{EID, VID};

    #[test]
    fn test_error_messages() {
        let err = GraphError::no_such_vertex(VID(3));
        assert!(err.is_no_such_element());
        assert_eq!(err.to_string(), "No such vertex in graph: VID(3)");

        let err = GraphError::no_such_edge(EID(7));
        assert_eq!(err.to_string(), "No such edge in graph: EID(7)");
    }
}
