use serde::{Deserialize, Serialize};

pub mod entities;
pub mod utils;

/// Denotes the direction of an edge. Can be incoming, outgoing or both.
#[derive(Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Debug, Default, Serialize, Deserialize)]
pub enum Direction {
    OUT,
    IN,
    #[default]
    BOTH,
}

impl Direction {
    pub fn reverse(&self) -> Direction {
        match self {
            Direction::OUT => Direction::IN,
            Direction::IN => Direction::OUT,
            Direction::BOTH => Direction::BOTH,
        }
    }
}
