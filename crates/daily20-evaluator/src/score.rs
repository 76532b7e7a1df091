use std::{fmt, ops::Deref};

use serde::{Deserialize, Serialize};

use crate::share_text::Tier;

/// Per-slot scores in \[0.0, 1.0\], index-aligned with the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreVector(Vec<f64>);

impl ScoreVector {
    /// # Panics
    ///
    /// Panics if any score falls outside \[0.0, 1.0\].
    #[must_use]
    pub fn new(scores: Vec<f64>) -> Self {
        assert!(
            scores.iter().all(|s| (0.0..=1.0).contains(s)),
            "scores must be in [0.0, 1.0]"
        );
        Self(scores)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// `floor(100 * mean)`; an empty vector scores 0.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    #[must_use]
    pub fn summary_score(&self) -> SummaryScore {
        if self.0.is_empty() {
            return SummaryScore(0);
        }
        let sum = self.0.iter().sum::<f64>();
        let mean = sum / self.0.len() as f64;
        SummaryScore((100.0 * mean).floor().clamp(0.0, 100.0) as u8)
    }

    /// Number of slots holding their number's ideal rank exactly.
    #[must_use]
    pub fn exact_matches(&self) -> usize {
        self.0.iter().filter(|s| Tier::from_score(**s).is_perfect()).count()
    }

    pub fn tiers(&self) -> impl Iterator<Item = Tier> + '_ {
        self.0.iter().map(|s| Tier::from_score(*s))
    }
}

impl Deref for ScoreVector {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Overall result in \[0, 100\].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SummaryScore(u8);

impl SummaryScore {
    pub const MAX: u8 = 100;

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for SummaryScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Everything a front-end shows for a finished game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub game_number: i64,
    pub scores: ScoreVector,
    pub summary_score: SummaryScore,
    pub exact_matches: usize,
    pub total: usize,
}

impl Evaluation {
    #[must_use]
    pub fn new(game_number: i64, scores: ScoreVector) -> Self {
        Self {
            game_number,
            summary_score: scores.summary_score(),
            exact_matches: scores.exact_matches(),
            total: scores.len(),
            scores,
        }
    }

    /// The copy-paste text for this result.
    #[must_use]
    pub fn share_text(&self) -> String {
        crate::share_text::encode(&self.scores, self.summary_score, self.game_number)
    }
}
