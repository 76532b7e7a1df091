//! Deterministic daily puzzle generation and game-state transitions for Daily20.
//!
//! - [`core`] - seed derivation, the Mulberry32 stream, number sequences and game numbering
//! - [`engine`] - placement grid, immutable game state and the interactive game session
//!
//! # Example
//!
//! ```
//! use daily20_engine::{GameState, NumberSequence, SequenceParams};
//!
//! let sequence = NumberSequence::generate_for_date("2025-01-29", SequenceParams::DAILY)?;
//! assert_eq!(sequence.len(), 20);
//!
//! let state = GameState::new(sequence);
//! assert_eq!(state.current_number(), Some(954));
//!
//! let state = state.place(19)?;
//! assert_eq!(state.grid().slot(19), Some(954));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid puzzle date {input:?}: expected YYYY-MM-DD")]
pub struct InvalidDateError {
    #[error(not(source))]
    input: String,
}

impl InvalidDateError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum GenerateError {
    #[display("{_0}")]
    InvalidDate(InvalidDateError),
    #[display("range [{min}, {max}] cannot hold {count} distinct numbers")]
    RangeTooSmall { count: usize, min: u16, max: u16 },
    #[display("sequence length must be positive")]
    EmptySequence,
}

impl From<InvalidDateError> for GenerateError {
    fn from(err: InvalidDateError) -> Self {
        Self::InvalidDate(err)
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum PlacementError {
    #[display("slot {slot} is out of range (grid has {len} slots)")]
    SlotOutOfRange { slot: usize, len: usize },
    #[display("slot {slot} already holds a number")]
    SlotOccupied { slot: usize },
    #[display("all numbers have already been placed")]
    GameComplete,
}
