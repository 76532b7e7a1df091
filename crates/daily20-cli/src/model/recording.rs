use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, bail, ensure};
use chrono::{DateTime, NaiveDate, Utc};
use daily20_engine::{
    DateSeed, GameSession, GameState, NumberSequence, Placement, PlacementGrid, SequenceParams,
    game_number,
};
use daily20_evaluator::{placement_evaluator, score::Evaluation};
use serde::{Deserialize, Serialize};

use crate::util::Output;

/// A finished (or abandoned) game saved to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedGame {
    pub recorded_at: DateTime<Utc>,
    pub date: NaiveDate,
    pub game_number: i64,
    pub numbers: NumberSequence,
    pub placements: Vec<Placement>,
    pub grid: PlacementGrid,
}

impl RecordedGame {
    pub fn from_session(session: &GameSession, recorded_at: DateTime<Utc>) -> Self {
        let state = session.state();
        Self {
            recorded_at,
            date: session.date(),
            game_number: session.game_number(),
            numbers: state.sequence().clone(),
            placements: session.placements().to_vec(),
            grid: state.grid().clone(),
        }
    }

    /// Saves the recording as `daily20_{date}_{YYYYMMDD_HHMMSS}.json` in `record_dir`.
    pub fn save(&self, record_dir: &Path) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(record_dir)
            .with_context(|| format!("Failed to create directory {}", record_dir.display()))?;

        let filename = format!(
            "daily20_{}_{}.json",
            self.date.format("%Y%m%d"),
            self.recorded_at.format("%Y%m%d_%H%M%S")
        );
        let path = record_dir.join(filename);
        Output::create(path.clone())?.write_json(self)?;
        Ok(path)
    }

    /// Re-derives the game from its date and placements and evaluates it.
    ///
    /// Rejects recordings whose numbers differ from the date's puzzle, whose
    /// placements are illegal, or whose grid does not match the placements.
    pub fn verify_and_evaluate(&self) -> anyhow::Result<Evaluation> {
        let params = SequenceParams {
            count: self.numbers.len(),
            ..SequenceParams::DAILY
        };
        let expected = NumberSequence::generate(DateSeed::from_date(self.date), params)
            .with_context(|| format!("Failed to generate the puzzle for {}", self.date))?;
        ensure!(
            expected == self.numbers,
            "recorded numbers do not match the puzzle for {}",
            self.date
        );
        ensure!(
            self.game_number == game_number(self.date),
            "recorded game number #{} does not match {} (#{})",
            self.game_number,
            self.date,
            game_number(self.date)
        );

        let state = replay(&self.numbers, &self.placements)?;
        if state.grid() != &self.grid {
            bail!("recorded grid does not match the recorded placements");
        }

        let scores = placement_evaluator::evaluate(state.grid(), state.sequence());
        Ok(Evaluation::new(self.game_number, scores))
    }
}

/// Applies `placements` in order, checking that each places the expected number.
fn replay(numbers: &NumberSequence, placements: &[Placement]) -> anyhow::Result<GameState> {
    let mut state = GameState::new(numbers.clone());
    for placement in placements {
        ensure!(
            placement.turn == state.placed_count()
                && Some(placement.number) == state.current_number(),
            "placement {placement:?} is out of order"
        );
        state = state
            .place(placement.slot)
            .with_context(|| format!("invalid placement {placement:?}"))?;
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use daily20_engine::EPOCH;

    use super::*;

    fn finished_session() -> GameSession {
        let mut session = GameSession::daily(EPOCH).unwrap();
        for slot in 0..20 {
            session.try_place(slot).unwrap();
        }
        session
    }

    #[test]
    fn test_recorded_session_verifies() {
        let session = finished_session();
        let recording = RecordedGame::from_session(&session, Utc::now());
        let eval = recording.verify_and_evaluate().unwrap();
        let expected =
            placement_evaluator::evaluate(session.state().grid(), session.state().sequence());
        assert_eq!(eval.scores, expected);
        assert_eq!(eval.game_number, 1);
        assert_eq!(eval.total, 20);
    }

    #[test]
    fn test_partial_game_scores_empty_slots_zero() {
        let mut session = GameSession::daily(EPOCH).unwrap();
        session.try_place(5).unwrap();
        let recording = RecordedGame::from_session(&session, Utc::now());
        let eval = recording.verify_and_evaluate().unwrap();
        assert_eq!(eval.scores.iter().filter(|s| **s == 0.0).count(), 19);
        assert!(eval.scores[5] > 0.0);
        assert_eq!(eval.exact_matches, 0);
    }

    #[test]
    fn test_rejects_tampered_numbers() {
        let mut recording = RecordedGame::from_session(&finished_session(), Utc::now());
        let mut numbers = Vec::from(recording.numbers.clone());
        numbers.swap(0, 1);
        recording.numbers = NumberSequence::try_from(numbers).unwrap();
        let err = recording.verify_and_evaluate().unwrap_err();
        assert!(err.to_string().contains("do not match the puzzle"));
    }

    #[test]
    fn test_rejects_tampered_grid() {
        let mut recording = RecordedGame::from_session(&finished_session(), Utc::now());
        let mut slots = recording.grid.slots().to_vec();
        slots.swap(0, 1);
        recording.grid = PlacementGrid::from_slots(slots);
        let err = recording.verify_and_evaluate().unwrap_err();
        assert!(err.to_string().contains("grid does not match"));
    }

    #[test]
    fn test_rejects_duplicate_slot() {
        let mut recording = RecordedGame::from_session(&finished_session(), Utc::now());
        recording.placements[1].slot = recording.placements[0].slot;
        assert!(recording.verify_and_evaluate().is_err());
    }
}
