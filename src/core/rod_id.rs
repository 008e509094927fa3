//! Rod identification.
//!
//! Type-safe rod index supporting 1-255 rods. Rod indices are 0-based;
//! rod 0 is always the starting rod that holds every disk at setup.

use serde::{Deserialize, Serialize};

/// Rod identifier.
///
/// ```
/// use rust_hanoi::core::RodId;
///
/// let rods: Vec<_> = RodId::all(3).collect();
/// assert_eq!(rods, vec![RodId::new(0), RodId::new(1), RodId::new(2)]);
/// assert!(rods[0].is_start());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RodId(pub u8);

impl RodId {
    /// The starting rod (rod 0), fully stacked at setup.
    pub const START: RodId = RodId(0);

    /// Create a new rod ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw rod index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check whether this is the starting rod.
    #[must_use]
    pub const fn is_start(self) -> bool {
        self.0 == 0
    }

    /// Iterate over all rod IDs for a puzzle with `rod_count` rods.
    pub fn all(rod_count: usize) -> impl Iterator<Item = RodId> {
        (0..rod_count as u8).map(RodId)
    }
}

impl std::fmt::Display for RodId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rod {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rod_id_basics() {
        let r0 = RodId::new(0);
        let r2 = RodId::new(2);

        assert_eq!(r0.index(), 0);
        assert_eq!(r2.index(), 2);
        assert_eq!(format!("{}", r2), "Rod 2");
    }

    #[test]
    fn test_start_rod() {
        assert_eq!(RodId::START, RodId::new(0));
        assert!(RodId::START.is_start());
        assert!(!RodId::new(1).is_start());
    }

    #[test]
    fn test_all() {
        let rods: Vec<_> = RodId::all(4).collect();
        assert_eq!(rods.len(), 4);
        assert_eq!(rods[0], RodId::new(0));
        assert_eq!(rods[3], RodId::new(3));
    }

    #[test]
    fn test_serialization() {
        let id = RodId::new(2);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: RodId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
