//! Move representation: a source/destination rod pair.
//!
//! A `Move` is a well-formed request; whether it is *legal* in the current
//! state is decided by `PuzzleState`. A `MoveRecord` is a move that was
//! actually applied, kept in the state's history log for replay and
//! debugging.

use serde::{Deserialize, Serialize};

use super::disk::Disk;
use super::rod_id::RodId;

/// A move request: take the top disk of `source`, place it on `dest`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Rod to take the top disk from.
    pub source: RodId,

    /// Rod to place the disk on.
    pub dest: RodId,
}

impl Move {
    /// Create a new move request.
    #[must_use]
    pub const fn new(source: RodId, dest: RodId) -> Self {
        Self { source, dest }
    }

    /// Check whether source and destination are the same rod.
    ///
    /// Self-moves are well-formed but never legal.
    #[must_use]
    pub const fn is_self_move(self) -> bool {
        self.source.0 == self.dest.0
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.dest)
    }
}

/// A successfully applied move, with the disk that traveled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The move that was applied.
    pub mv: Move,

    /// The disk that moved.
    pub disk: Disk,

    /// 1-based sequence number (equals the move counter after the move).
    pub sequence: u64,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub const fn new(mv: Move, disk: Disk, sequence: u64) -> Self {
        Self { mv, disk, sequence }
    }
}
