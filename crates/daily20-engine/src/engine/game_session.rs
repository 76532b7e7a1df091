use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    DateSeed, GameState, GenerateError, NumberSequence, PlacementError, SequenceParams,
    game_number,
};

/// One placement made during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Zero-based reveal index of the placed number.
    pub turn: usize,
    pub slot: usize,
    pub number: u16,
}

/// A dated game driven by an interactive front-end.
///
/// Wraps the immutable [`GameState`], swapping in the next state on each
/// placement and logging every [`Placement`] so the game can be saved and
/// re-checked later.
#[derive(Debug, Clone)]
pub struct GameSession {
    date: NaiveDate,
    state: GameState,
    placements: Vec<Placement>,
}

impl GameSession {
    /// Starts the daily puzzle for `date`.
    pub fn daily(date: NaiveDate) -> Result<Self, GenerateError> {
        Self::with_params(date, SequenceParams::DAILY)
    }

    pub fn with_params(date: NaiveDate, params: SequenceParams) -> Result<Self, GenerateError> {
        let sequence = NumberSequence::generate(DateSeed::from_date(date), params)?;
        Ok(Self::from_sequence(date, sequence))
    }

    #[must_use]
    pub fn from_sequence(date: NaiveDate, sequence: NumberSequence) -> Self {
        Self {
            date,
            state: GameState::new(sequence),
            placements: Vec::new(),
        }
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn game_number(&self) -> i64 {
        game_number(self.date)
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn try_place(&mut self, slot: usize) -> Result<Placement, PlacementError> {
        let number = self
            .state
            .current_number()
            .ok_or(PlacementError::GameComplete)?;
        let placement = Placement {
            turn: self.state.placed_count(),
            slot,
            number,
        };
        self.state = self.state.place(slot)?;
        self.placements.push(placement);
        Ok(placement)
    }
}
