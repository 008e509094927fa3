//! Property-based invariant tests.
//!
//! Drives puzzles of varying sizes with arbitrary in-range move sequences
//! and checks the invariants that must hold in every reachable state:
//! disk conservation, strict rod ordering, rejection idempotence, and
//! counter/history monotonicity.

use proptest::prelude::*;

use rust_hanoi::core::{PuzzleState, RodId};
use rust_hanoi::error::PuzzleError;

/// The multiset of disk sizes across all rods is exactly `{1..=disk_count}`.
fn disks_conserved(puzzle: &PuzzleState) -> bool {
    let mut found: Vec<u32> = puzzle
        .rods()
        .iter()
        .flat_map(|rod| rod.disks().iter().map(|d| d.size()))
        .collect();
    found.sort_unstable();

    let expected: Vec<u32> = (1..=puzzle.disk_count() as u32).collect();
    found == expected
}

/// Every rod is strictly decreasing from bottom to top.
fn rods_strictly_decreasing(puzzle: &PuzzleState) -> bool {
    puzzle
        .rods()
        .iter()
        .all(|rod| rod.disks().windows(2).all(|pair| pair[1] < pair[0]))
}

/// A puzzle size plus a sequence of in-range (source, dest) requests.
fn puzzle_inputs() -> impl Strategy<Value = (usize, usize, Vec<(u8, u8)>)> {
    (1usize..=4, 1usize..=6).prop_flat_map(|(rod_count, disk_count)| {
        let rod_idx = 0..rod_count as u8;
        (
            Just(rod_count),
            Just(disk_count),
            prop::collection::vec((rod_idx.clone(), rod_idx), 0..=80),
        )
    })
}

proptest! {
    /// The core invariants hold after every single move request, legal or not.
    #[test]
    fn invariants_hold_across_move_sequences(
        (rod_count, disk_count, requests) in puzzle_inputs()
    ) {
        let mut puzzle = PuzzleState::new(rod_count, disk_count);
        let mut successes = 0u64;

        for (source, dest) in requests {
            let source = RodId::new(source);
            let dest = RodId::new(dest);

            let valid = puzzle.is_valid_move(source, dest).unwrap();
            let before = puzzle.clone();
            let applied = puzzle.move_disk(source, dest).unwrap();

            // The speculative query and the command must agree
            prop_assert_eq!(valid, applied);

            if applied {
                successes += 1;
            } else {
                // Rejection leaves the full state untouched
                prop_assert_eq!(&puzzle, &before);
            }

            prop_assert!(disks_conserved(&puzzle));
            prop_assert!(rods_strictly_decreasing(&puzzle));
            prop_assert_eq!(puzzle.move_count(), successes);
            prop_assert_eq!(puzzle.history().len() as u64, successes);
        }
    }

    /// A won state has every disk on a single rod other than the start rod.
    #[test]
    fn won_states_hold_the_full_stack_off_the_start_rod(
        (rod_count, disk_count, requests) in puzzle_inputs()
    ) {
        let mut puzzle = PuzzleState::new(rod_count, disk_count);

        for (source, dest) in requests {
            puzzle.move_disk(RodId::new(source), RodId::new(dest)).unwrap();

            if puzzle.is_won() {
                let full_rods: Vec<usize> = puzzle
                    .rods()
                    .iter()
                    .enumerate()
                    .filter(|(_, rod)| !rod.is_empty())
                    .map(|(idx, _)| idx)
                    .collect();

                prop_assert_eq!(full_rods.len(), 1);
                prop_assert_ne!(full_rods[0], 0);
                prop_assert_eq!(puzzle.rods()[full_rods[0]].len(), disk_count);
            }
        }
    }

    /// Out-of-range indices always error, for any puzzle size, and never
    /// mutate the state.
    #[test]
    fn out_of_range_indices_always_error(
        rod_count in 1usize..=8,
        disk_count in 1usize..=6,
    ) {
        let mut puzzle = PuzzleState::new(rod_count, disk_count);
        let oob = RodId::new(rod_count as u8);
        let expected = PuzzleError::RodOutOfRange { index: rod_count, rod_count };

        prop_assert_eq!(
            puzzle.is_valid_move(oob, RodId::START),
            Err(expected.clone())
        );
        prop_assert_eq!(
            puzzle.move_disk(RodId::START, oob),
            Err(expected)
        );
        prop_assert_eq!(puzzle.move_count(), 0);
    }
}
