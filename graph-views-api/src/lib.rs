pub mod core;
pub mod inherit;
pub mod iter;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Directionality tag of a graph. A view always has the same tag as its base.
#[derive(Copy, Clone, PartialOrd, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum GraphType {
    Undirected,
    Directed,
}

impl GraphType {
    pub fn is_directed(&self) -> bool {
        matches!(self, GraphType::Directed)
    }
}

impl Display for GraphType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GraphType::Undirected => write!(f, "undirected"),
            GraphType::Directed => write!(f, "directed"),
        }
    }
}
