use std::sync::Arc;

use crate::{NumberSequence, PlacementError, PlacementGrid};

/// Progress of one game: the puzzle, the grid so far and the reveal index.
///
/// A state is never mutated. [`Self::place`] is the only transition and returns
/// the next state, so a front-end can keep older states around (for undo or
/// recording) without copying the puzzle.
///
/// # Example
///
/// ```
/// use daily20_engine::{GameState, NumberSequence, SequenceParams};
///
/// let sequence = NumberSequence::generate_for_date("2025-01-29", SequenceParams::DAILY)?;
/// let mut state = GameState::new(sequence);
/// let mut slot = 0;
/// while state.current_number().is_some() {
///     state = state.place(slot)?;
///     slot += 1;
/// }
/// assert!(state.is_complete());
/// assert!(state.grid().is_full());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    sequence: Arc<NumberSequence>,
    grid: PlacementGrid,
    next_index: usize,
}

impl GameState {
    /// Starts a game with an empty grid sized to the sequence.
    #[must_use]
    pub fn new(sequence: NumberSequence) -> Self {
        let grid = PlacementGrid::empty(sequence.len());
        Self {
            sequence: Arc::new(sequence),
            grid,
            next_index: 0,
        }
    }

    #[must_use]
    pub fn sequence(&self) -> &NumberSequence {
        &self.sequence
    }

    #[must_use]
    pub fn grid(&self) -> &PlacementGrid {
        &self.grid
    }

    /// Number of numbers placed so far.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.next_index
    }

    /// The number waiting to be placed, or `None` once the game is complete.
    #[must_use]
    pub fn current_number(&self) -> Option<u16> {
        self.sequence.get(self.next_index).copied()
    }

    /// Numbers still to be revealed after the current one.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.sequence.len().saturating_sub(self.next_index + 1)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.next_index >= self.sequence.len()
    }

    /// Places the current number into `slot` and reveals the next one.
    pub fn place(&self, slot: usize) -> Result<Self, PlacementError> {
        let number = self.current_number().ok_or(PlacementError::GameComplete)?;
        let grid = self.grid.with_placed(slot, number)?;
        tracing::debug!(turn = self.next_index, slot, number, "placed number");
        Ok(Self {
            sequence: Arc::clone(&self.sequence),
            grid,
            next_index: self.next_index + 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SequenceParams;

    fn small_state() -> GameState {
        let sequence = NumberSequence::try_from(vec![50, 10, 30]).unwrap();
        GameState::new(sequence)
    }

    #[test]
    fn test_new_state() {
        let state = small_state();
        assert_eq!(state.current_number(), Some(50));
        assert_eq!(state.placed_count(), 0);
        assert_eq!(state.remaining(), 2);
        assert_eq!(state.grid().len(), 3);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_place_reveals_next_number() {
        let state = small_state();
        let next = state.place(2).unwrap();
        assert_eq!(next.grid().slot(2), Some(50));
        assert_eq!(next.current_number(), Some(10));
        assert_eq!(next.placed_count(), 1);

        // previous state is unchanged
        assert_eq!(state.current_number(), Some(50));
        assert_eq!(state.grid().slot(2), None);
    }

    #[test]
    fn test_place_rejects_occupied_slot() {
        let state = small_state().place(0).unwrap();
        assert_eq!(
            state.place(0),
            Err(PlacementError::SlotOccupied { slot: 0 })
        );
        assert_eq!(state.current_number(), Some(10));
    }

    #[test]
    fn test_place_after_completion() {
        let state = small_state()
            .place(1)
            .and_then(|s| s.place(0))
            .and_then(|s| s.place(2))
            .unwrap();
        assert!(state.is_complete());
        assert_eq!(state.current_number(), None);
        assert_eq!(state.remaining(), 0);
        assert_eq!(state.grid().slots(), [Some(10), Some(50), Some(30)]);
        assert_eq!(state.place(0), Err(PlacementError::GameComplete));
    }

    #[test]
    fn test_daily_game_fills_grid() {
        let sequence =
            NumberSequence::generate_for_date("2026-10-18", SequenceParams::DAILY).unwrap();
        let mut state = GameState::new(sequence);
        for slot in (0..20).rev() {
            state = state.place(slot).unwrap();
        }
        assert!(state.grid().is_full());
        assert_eq!(state.grid().slot(19), Some(state.sequence()[0]));
    }
}
