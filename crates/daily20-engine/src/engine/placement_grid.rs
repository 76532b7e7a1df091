use serde::{Deserialize, Serialize};

use crate::PlacementError;

/// Slots of the game grid in slot order.
///
/// Each slot is either empty (`None`) or holds a number from the puzzle
/// sequence. The grid is a value: [`Self::with_placed`] returns a new grid and
/// leaves the original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlacementGrid {
    slots: Vec<Option<u16>>,
}

impl PlacementGrid {
    #[must_use]
    pub fn empty(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    #[must_use]
    pub fn from_slots(slots: Vec<Option<u16>>) -> Self {
        Self { slots }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number in `slot`, or `None` if it is empty or out of range.
    #[must_use]
    pub fn slot(&self, slot: usize) -> Option<u16> {
        self.slots.get(slot).copied().flatten()
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<u16>] {
        &self.slots
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn empty_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.is_none().then_some(i))
    }

    /// Returns a copy of the grid with `number` written into `slot`.
    pub fn with_placed(&self, slot: usize, number: u16) -> Result<Self, PlacementError> {
        match self.slots.get(slot) {
            None => Err(PlacementError::SlotOutOfRange {
                slot,
                len: self.slots.len(),
            }),
            Some(Some(_)) => Err(PlacementError::SlotOccupied { slot }),
            Some(None) => {
                let mut slots = self.slots.clone();
                slots[slot] = Some(number);
                Ok(Self { slots })
            }
        }
    }
}
