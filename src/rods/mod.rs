//! Rod containers for disk storage.
//!
//! A `Rod` is a fixed-capacity stack; all puzzle-legality logic lives in
//! `core::state::PuzzleState`, which exclusively owns the rods.

pub mod rod;

pub use rod::Rod;
