//! The rod container: a bounded last-in-first-out stack of disks.
//!
//! `Rod` is intentionally dumb. It enforces exactly one thing — its fixed
//! capacity — and performs no ordering validation on push: whether the
//! *value* being pushed is legal (strictly smaller than the current top) is
//! the caller's responsibility. Keeping every legality decision in
//! `PuzzleState` gives the ordering invariant a single enforcement point.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::disk::Disk;
use crate::error::PuzzleError;

/// A bounded stack of disks, bottom-to-top.
///
/// Capacity is fixed at construction and equals the puzzle's total disk
/// count, so a single rod can always hold the full set.
///
/// ## Usage
///
/// ```
/// use rust_hanoi::rods::Rod;
/// use rust_hanoi::core::Disk;
///
/// let mut rod = Rod::new(3);
/// assert!(rod.is_empty());
///
/// rod.push(Disk::new(3)).unwrap();
/// rod.push(Disk::new(1)).unwrap();
///
/// assert_eq!(rod.top(), Some(Disk::new(1)));
/// assert_eq!(rod.disks(), &[Disk::new(3), Disk::new(1)]);
///
/// assert_eq!(rod.pop(), Ok(Disk::new(1)));
/// assert_eq!(rod.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rod {
    /// Maximum number of disks this rod can hold.
    capacity: usize,

    /// Current contents, bottom-to-top.
    /// SmallVec keeps typical puzzles (up to 8 disks) off the heap.
    disks: SmallVec<[Disk; 8]>,
}

impl Rod {
    /// Create a new empty rod with the given capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            disks: SmallVec::new(),
        }
    }

    /// Create a rod pre-seeded with a full stack: disks `capacity..=1`,
    /// largest at the bottom. Used for the starting rod.
    #[must_use]
    pub fn with_full_stack(capacity: usize) -> Self {
        let disks = (1..=capacity as u32).rev().map(Disk::new).collect();
        Self { capacity, disks }
    }

    /// Push a disk onto the top of the rod.
    ///
    /// Fails with `PuzzleError::FullRod` if the rod is at capacity.
    /// No ordering validation is performed here.
    pub fn push(&mut self, disk: Disk) -> Result<(), PuzzleError> {
        if self.disks.len() == self.capacity {
            return Err(PuzzleError::FullRod {
                capacity: self.capacity,
            });
        }
        self.disks.push(disk);
        Ok(())
    }

    /// Remove and return the top disk.
    ///
    /// Fails with `PuzzleError::EmptyRod` if the rod is empty.
    pub fn pop(&mut self) -> Result<Disk, PuzzleError> {
        self.disks.pop().ok_or(PuzzleError::EmptyRod)
    }

    /// Get the top disk without removing it, or `None` if the rod is empty.
    #[must_use]
    pub fn top(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    /// Check if the rod holds no disks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Check if the rod is at capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.disks.len() == self.capacity
    }

    /// Get the number of disks currently on the rod.
    #[must_use]
    pub fn len(&self) -> usize {
        self.disks.len()
    }

    /// Get the fixed capacity of the rod.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the current contents, bottom-to-top.
    #[must_use]
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }
}
