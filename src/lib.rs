//! # rust-hanoi
//!
//! A multi-rod disk-stacking puzzle engine.
//!
//! ## Design Principles
//!
//! 1. **Dumb containers, central rules**: `Rod` enforces only its fixed
//!    capacity. Every legality decision lives in `PuzzleState`, so the
//!    ordering invariant has exactly one enforcement point.
//!
//! 2. **Two failure classes, never conflated**: contract violations (a rod
//!    index out of range, container misuse) are `Err(PuzzleError)`; an
//!    illegal but well-formed move is an ordinary `Ok(false)` that callers
//!    branch on.
//!
//! 3. **Cheap snapshots**: state types derive `Clone` and the move log uses
//!    persistent data structures, so a UI or test harness can fork states
//!    freely.
//!
//! ## Modules
//!
//! - `core`: disk and rod identifiers, moves, configuration, puzzle state
//! - `rods`: the bounded rod container
//! - `error`: structured error types

pub mod core;
pub mod error;
pub mod rods;

// Re-export commonly used types
pub use crate::core::{Disk, Move, MoveRecord, PuzzleBuilder, PuzzleConfig, PuzzleState, RodId};

pub use crate::error::PuzzleError;

pub use crate::rods::Rod;
