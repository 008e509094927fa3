//! Disk identification.
//!
//! Disks are identified by their size: a positive integer, where size 1 is
//! the smallest disk. A puzzle with `disk_count` disks uses sizes
//! `1..=disk_count`, so the size doubles as a stable label.

use serde::{Deserialize, Serialize};

/// A disk, identified by its size.
///
/// Disks order by size, and a disk may rest only on a strictly larger one:
///
/// ```
/// use rust_hanoi::core::Disk;
///
/// let small = Disk::new(1);
/// let large = Disk::new(3);
///
/// assert!(small < large);
/// assert!(small.fits_on(large));
/// assert!(!large.fits_on(small));
/// assert!(!small.fits_on(small));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Disk(pub u32);

impl Disk {
    /// Create a disk of the given size.
    #[must_use]
    pub const fn new(size: u32) -> Self {
        Self(size)
    }

    /// Get the disk's size.
    #[must_use]
    pub const fn size(self) -> u32 {
        self.0
    }

    /// Check whether this disk may legally rest on `other`.
    ///
    /// True iff this disk is strictly smaller. A disk never fits on itself.
    #[must_use]
    pub const fn fits_on(self, other: Disk) -> bool {
        self.0 < other.0
    }
}

impl std::fmt::Display for Disk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Disk({})", self.0)
    }
}
