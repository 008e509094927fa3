//! Puzzle configuration types.
//!
//! Callers configure a puzzle at startup with a `PuzzleConfig` (rod and disk
//! counts) or the chainable `PuzzleBuilder`. Configuration is plain data —
//! no files, no flags; the rendering/bootstrap layer owns those concerns.

use serde::{Deserialize, Serialize};

use super::state::PuzzleState;

/// Configuration for a puzzle: how many rods, how many disks.
///
/// The default is the classic three-rod, three-disk setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Number of rods (at least 1).
    pub rod_count: usize,

    /// Number of disks (at least 1). Every rod's capacity equals this.
    pub disk_count: usize,
}

impl PuzzleConfig {
    /// Create a new configuration.
    #[must_use]
    pub const fn new(rod_count: usize, disk_count: usize) -> Self {
        Self {
            rod_count,
            disk_count,
        }
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            rod_count: 3,
            disk_count: 3,
        }
    }
}

/// Builder for creating a `PuzzleState`.
///
/// ```
/// use rust_hanoi::core::PuzzleBuilder;
///
/// let puzzle = PuzzleBuilder::new().rod_count(4).disk_count(5).build();
///
/// assert_eq!(puzzle.rod_count(), 4);
/// assert_eq!(puzzle.disk_count(), 5);
/// ```
pub struct PuzzleBuilder {
    rod_count: usize,
    disk_count: usize,
}

impl Default for PuzzleBuilder {
    fn default() -> Self {
        let config = PuzzleConfig::default();
        Self {
            rod_count: config.rod_count,
            disk_count: config.disk_count,
        }
    }
}

impl PuzzleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rod_count(mut self, count: usize) -> Self {
        assert!((1..=255).contains(&count), "Rod count must be 1-255");
        self.rod_count = count;
        self
    }

    pub fn disk_count(mut self, count: usize) -> Self {
        assert!(count >= 1, "Must have at least 1 disk");
        self.disk_count = count;
        self
    }

    /// Build the initial puzzle state.
    pub fn build(self) -> PuzzleState {
        PuzzleState::new(self.rod_count, self.disk_count)
    }
}
