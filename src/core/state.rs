//! Puzzle state: rods, move validation, win detection.
//!
//! ## PuzzleState
//!
//! The authoritative state machine. It exclusively owns the rods — nothing
//! else mutates rod contents — and it is the sole arbiter of move legality
//! and the win condition. It tracks:
//! - The rods and their disk stacks
//! - The count of successful moves
//! - The history of applied moves
//!
//! ## Failure classes
//!
//! Out-of-range rod indices are contract violations and surface as
//! `Err(PuzzleError::RodOutOfRange)` from every index-taking operation, even
//! pure legality queries. An illegal but well-formed move is an expected
//! outcome and surfaces as `Ok(false)`: callers are expected to request
//! moves speculatively and branch on the result.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::config::PuzzleConfig;
use super::moves::{Move, MoveRecord};
use super::rod_id::RodId;
use crate::error::PuzzleError;
use crate::rods::Rod;

/// The full puzzle state.
///
/// Uses an `im` persistent vector for the move log, so cloning a state for
/// speculative exploration stays cheap.
///
/// ## Usage
///
/// ```
/// use rust_hanoi::core::{PuzzleState, RodId};
///
/// let mut puzzle = PuzzleState::new(3, 3);
///
/// // The smallest disk moves onto any rod
/// assert_eq!(puzzle.move_disk(RodId::new(0), RodId::new(2)), Ok(true));
///
/// // A larger disk never rests on a smaller one
/// assert_eq!(puzzle.move_disk(RodId::new(0), RodId::new(2)), Ok(false));
///
/// assert_eq!(puzzle.move_count(), 1);
/// assert!(!puzzle.is_won());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleState {
    /// The rods, indexed by `RodId`. Allocated once at construction;
    /// rod 0 starts fully stacked, all others empty.
    rods: Vec<Rod>,

    /// Total number of disks in play.
    disk_count: usize,

    /// Count of successful moves.
    move_count: u64,

    /// Applied moves, oldest first.
    history: Vector<MoveRecord>,
}

impl PuzzleState {
    /// Create a new puzzle with all disks stacked on rod 0,
    /// largest at the bottom.
    ///
    /// ## Defaults
    ///
    /// - Rod 0 holds disks `disk_count..=1`, bottom-to-top
    /// - Every rod's capacity equals `disk_count`
    /// - Move counter at zero, empty history
    #[must_use]
    pub fn new(rod_count: usize, disk_count: usize) -> Self {
        assert!(rod_count > 0, "Must have at least 1 rod");
        assert!(rod_count <= 255, "At most 255 rods supported");
        assert!(disk_count > 0, "Must have at least 1 disk");

        let mut rods = vec![Rod::new(disk_count); rod_count];
        rods[RodId::START.index()] = Rod::with_full_stack(disk_count);

        Self {
            rods,
            disk_count,
            move_count: 0,
            history: Vector::new(),
        }
    }

    /// Create a new puzzle from a configuration.
    #[must_use]
    pub fn from_config(config: &PuzzleConfig) -> Self {
        Self::new(config.rod_count, config.disk_count)
    }

    /// Get the number of rods.
    #[must_use]
    pub fn rod_count(&self) -> usize {
        self.rods.len()
    }

    /// Get the total number of disks in play.
    #[must_use]
    pub fn disk_count(&self) -> usize {
        self.disk_count
    }

    /// Get the count of successful moves.
    #[must_use]
    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    /// Get a read-only view of all rods, in index order.
    #[must_use]
    pub fn rods(&self) -> &[Rod] {
        &self.rods
    }

    /// Get a single rod, checking the index.
    pub fn rod(&self, id: RodId) -> Result<&Rod, PuzzleError> {
        self.rods.get(id.index()).ok_or(PuzzleError::RodOutOfRange {
            index: id.index(),
            rod_count: self.rods.len(),
        })
    }

    /// Get the applied moves, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    // === Moves ===

    /// Check whether moving the top disk of `source` onto `dest` is legal.
    ///
    /// Legal iff `source` is non-empty and `dest` is empty or topped by a
    /// strictly larger disk. Self-moves fall out as illegal with no special
    /// case: a rod's top never fits on itself.
    ///
    /// Fails with `PuzzleError::RodOutOfRange` if either index is out of
    /// range, even though this is a pure query.
    pub fn is_valid_move(&self, source: RodId, dest: RodId) -> Result<bool, PuzzleError> {
        let source_top = self.rod(source)?.top();
        let dest_top = self.rod(dest)?.top();

        Ok(match (source_top, dest_top) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(moving), Some(resting)) => moving.fits_on(resting),
        })
    }

    /// Attempt to move the top disk of `source` onto `dest`.
    ///
    /// Returns `Ok(true)` and mutates state (pop, push, counter, history —
    /// one atomic step) iff the move is legal; returns `Ok(false)` and
    /// leaves the state untouched otherwise. Out-of-range indices are
    /// errors, as in `is_valid_move`.
    pub fn move_disk(&mut self, source: RodId, dest: RodId) -> Result<bool, PuzzleError> {
        if !self.is_valid_move(source, dest)? {
            return Ok(false);
        }

        // A legal move guarantees the pop and push succeed: a full dest
        // would hold every disk, leaving source empty and the move illegal.
        let disk = self.rods[source.index()].pop()?;
        self.rods[dest.index()].push(disk)?;

        self.move_count += 1;
        self.history
            .push_back(MoveRecord::new(Move::new(source, dest), disk, self.move_count));

        Ok(true)
    }

    /// Enumerate every currently legal move, source-major.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();

        for source in RodId::all(self.rod_count()) {
            for dest in RodId::all(self.rod_count()) {
                let legal = self
                    .is_valid_move(source, dest)
                    .expect("RodId::all yields in-range indices");
                if legal {
                    moves.push(Move::new(source, dest));
                }
            }
        }

        moves
    }

    // === Win Detection ===

    /// Check whether the puzzle is solved.
    ///
    /// The game is won when some rod other than the starting rod holds all
    /// of the disks. Re-stacking everything on rod 0 is not a win, and a
    /// single-rod puzzle is unwinnable.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.rods[1..]
            .iter()
            .any(|rod| rod.len() == self.disk_count)
    }
}
