//! Placement evaluation: distance-based partial credit for every slot.
//!
//! The ideal grid holds the puzzle numbers sorted ascending. A slot earns full credit when
//! its number sits at that number's ideal rank and loses credit linearly with distance:
//!
//! ```text
//! score(p) = 1 - |p - rank(v)| / (N - 1)
//! ```
//!
//! An empty slot scores 0, and a single-slot grid scores 1 when filled.

use std::{collections::HashMap, fmt};

use daily20_engine::{NumberSequence, PlacementGrid};

use crate::score::ScoreVector;

/// Assigns a score in \[0.0, 1.0\] to every slot of a finished grid.
pub trait PlacementEvaluator: fmt::Debug {
    /// Scores `grid` against the puzzle `sequence`.
    ///
    /// # Panics
    ///
    /// Implementations may panic when the grid does not come from `sequence`
    /// (length mismatch or a foreign number); that is a caller bug.
    fn evaluate(&self, grid: &PlacementGrid, sequence: &NumberSequence) -> ScoreVector;
}

/// Linear distance scoring against ideal ranks.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearDistanceEvaluator;

impl PlacementEvaluator for LinearDistanceEvaluator {
    fn evaluate(&self, grid: &PlacementGrid, sequence: &NumberSequence) -> ScoreVector {
        evaluate(grid, sequence)
    }
}

/// Zero-based position of every number in the ascending sort of the sequence.
#[derive(Debug, Clone)]
pub struct IdealRanks {
    ranks: HashMap<u16, usize>,
}

impl IdealRanks {
    #[must_use]
    pub fn new(sequence: &NumberSequence) -> Self {
        let ranks = sequence
            .sorted()
            .into_iter()
            .enumerate()
            .map(|(rank, n)| (n, rank))
            .collect();
        Self { ranks }
    }

    #[must_use]
    pub fn rank(&self, number: u16) -> Option<usize> {
        self.ranks.get(&number).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

/// Scores every slot of `grid` against the ideal ranks of `sequence`.
///
/// # Panics
///
/// Panics if the grid and sequence differ in length, or if a slot holds a number
/// that is not part of the sequence.
#[must_use]
pub fn evaluate(grid: &PlacementGrid, sequence: &NumberSequence) -> ScoreVector {
    assert_eq!(
        grid.len(),
        sequence.len(),
        "grid and sequence must have the same length"
    );

    let ranks = IdealRanks::new(sequence);
    let scores = grid
        .slots()
        .iter()
        .enumerate()
        .map(|(pos, slot)| {
            slot.map_or(0.0, |number| {
                let rank = ranks
                    .rank(number)
                    .unwrap_or_else(|| panic!("slot {pos} holds {number}, not in the sequence"));
                slot_score(pos, rank, grid.len())
            })
        })
        .collect::<Vec<_>>();

    tracing::debug!(slots = scores.len(), "evaluated placements");
    ScoreVector::new(scores)
}

#[expect(clippy::cast_precision_loss)]
fn slot_score(pos: usize, rank: usize, len: usize) -> f64 {
    if len <= 1 {
        return 1.0;
    }
    let max_distance = (len - 1) as f64;
    1.0 - pos.abs_diff(rank) as f64 / max_distance
}

#[cfg(test)]
mod tests {
    use daily20_engine::{GameState, SequenceParams};

    use super::*;

    fn sequence(numbers: &[u16]) -> NumberSequence {
        NumberSequence::try_from(numbers.to_vec()).unwrap()
    }

    fn grid(numbers: &[Option<u16>]) -> PlacementGrid {
        PlacementGrid::from_slots(numbers.to_vec())
    }

    #[test]
    fn test_ideal_ranks() {
        let ranks = IdealRanks::new(&sequence(&[50, 10, 30, 20, 40]));
        assert_eq!(ranks.rank(10), Some(0));
        assert_eq!(ranks.rank(30), Some(2));
        assert_eq!(ranks.rank(50), Some(4));
        assert_eq!(ranks.rank(11), None);
        assert_eq!(ranks.len(), 5);
    }

    #[test]
    fn test_sorted_placement_is_perfect() {
        let seq = sequence(&[50, 10, 30, 20, 40]);
        let placed = grid(&[Some(10), Some(20), Some(30), Some(40), Some(50)]);
        let scores = evaluate(&placed, &seq);
        assert!(scores.iter().all(|s| *s == 1.0));
        assert_eq!(scores.exact_matches(), 5);
    }

    #[test]
    fn test_perfect_daily_game() {
        let seq = NumberSequence::generate_for_date("2025-01-29", SequenceParams::DAILY).unwrap();
        let sorted = seq.sorted();
        let mut state = GameState::new(seq.clone());
        while let Some(n) = state.current_number() {
            let slot = sorted.iter().position(|s| *s == n).unwrap();
            state = state.place(slot).unwrap();
        }
        let scores = evaluate(state.grid(), &seq);
        assert_eq!(scores.len(), 20);
        assert!(scores.iter().all(|s| *s == 1.0));
        assert_eq!(scores.summary_score().value(), 100);
    }

    #[test]
    fn test_swapped_extremes_score_zero() {
        let seq = sequence(&[50, 10, 30, 20, 40]);
        let placed = grid(&[Some(50), Some(20), Some(30), Some(40), Some(10)]);
        let scores = evaluate(&placed, &seq);
        assert_eq!(scores[0], 0.0);
        assert_eq!(scores[4], 0.0);
        assert_eq!(&scores[1..4], [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_partial_credit_is_linear() {
        let seq = sequence(&[50, 10, 30, 20, 40]);
        // each number one slot to the right of its rank, 50 wraps to the front
        let placed = grid(&[Some(50), Some(10), Some(20), Some(30), Some(40)]);
        let scores = evaluate(&placed, &seq);
        assert_eq!(scores.as_slice(), [0.0, 0.75, 0.75, 0.75, 0.75]);
    }

    #[test]
    fn test_empty_slot_scores_zero() {
        let seq = sequence(&[50, 10, 30, 20, 40]);
        let placed = grid(&[Some(10), None, Some(30), Some(40), Some(50)]);
        let scores = evaluate(&placed, &seq);
        assert_eq!(scores.as_slice(), [1.0, 0.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_single_slot() {
        let seq = sequence(&[7]);
        assert_eq!(evaluate(&grid(&[Some(7)]), &seq).as_slice(), [1.0]);
        assert_eq!(evaluate(&grid(&[None]), &seq).as_slice(), [0.0]);
    }

    #[test]
    fn test_trait_object_matches_free_function() {
        let seq = sequence(&[3, 1, 2]);
        let placed = grid(&[Some(2), Some(1), Some(3)]);
        let evaluator: Box<dyn PlacementEvaluator> = Box::new(LinearDistanceEvaluator);
        assert_eq!(evaluator.evaluate(&placed, &seq), evaluate(&placed, &seq));
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_length_mismatch_panics() {
        let seq = sequence(&[1, 2, 3]);
        let _ = evaluate(&grid(&[Some(1), Some(2)]), &seq);
    }

    #[test]
    #[should_panic(expected = "not in the sequence")]
    fn test_foreign_number_panics() {
        let seq = sequence(&[1, 2, 3]);
        let _ = evaluate(&grid(&[Some(1), Some(2), Some(4)]), &seq);
    }
}
