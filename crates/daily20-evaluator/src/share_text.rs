//! Share text: a compact, paste-friendly rendering of a finished game.
//!
//! ```text
//! D20 #12
//! Score: 83/100
//!
//! 🟩🟨🟩🟩
//! 🟧🟩🟨🟩
//! ...
//! ```
//!
//! Players paste this into chat apps, so the line structure is a fixed format: header,
//! score line, blank line, then one row of [`ROW_WIDTH`] glyphs per grid row. The final
//! row keeps its natural length when the slot count is not a multiple of the width.

use serde::{Deserialize, Serialize};

use crate::score::{ScoreVector, SummaryScore};

/// Glyphs per row, matching the grid's column count.
pub const ROW_WIDTH: usize = 4;

/// Score band of a single slot.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    #[display("perfect")]
    Perfect,
    #[display("close")]
    Close,
    #[display("far")]
    Far,
    #[display("very-far")]
    VeryFar,
}

impl Tier {
    pub const ALL: [Self; 4] = [Self::Perfect, Self::Close, Self::Far, Self::VeryFar];

    #[allow(clippy::float_cmp)]
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score == 1.0 {
            Self::Perfect
        } else if score >= 0.75 {
            Self::Close
        } else if score >= 0.5 {
            Self::Far
        } else {
            Self::VeryFar
        }
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Perfect => "🟩",
            Self::Close => "🟨",
            Self::Far => "🟧",
            Self::VeryFar => "🟥",
        }
    }
}

/// Groups slot tiers into rows of [`ROW_WIDTH`] glyphs.
pub fn glyph_rows(scores: &ScoreVector) -> impl Iterator<Item = String> + '_ {
    scores
        .chunks(ROW_WIDTH)
        .map(|row| row.iter().map(|s| Tier::from_score(*s).glyph()).collect())
}

/// Renders the share text for a finished game.
#[must_use]
pub fn encode(scores: &ScoreVector, summary: SummaryScore, game_number: i64) -> String {
    let header = [
        format!("D20 #{game_number}"),
        format!("Score: {summary}"),
        String::new(),
    ];
    header
        .into_iter()
        .chain(glyph_rows(scores))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(Tier::from_score(1.0), Tier::Perfect);
        assert_eq!(Tier::from_score(0.999), Tier::Close);
        assert_eq!(Tier::from_score(0.75), Tier::Close);
        assert_eq!(Tier::from_score(0.7499), Tier::Far);
        assert_eq!(Tier::from_score(0.5), Tier::Far);
        assert_eq!(Tier::from_score(0.4999), Tier::VeryFar);
        assert_eq!(Tier::from_score(0.0), Tier::VeryFar);
    }

    #[test]
    fn test_each_tier_has_distinct_glyph() {
        let glyphs = Tier::ALL.map(Tier::glyph);
        for (i, a) in glyphs.iter().enumerate() {
            for b in &glyphs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_twenty_slots_make_five_full_rows() {
        let scores = ScoreVector::new(vec![1.0; 20]);
        let text = encode(&scores, scores.summary_score(), 1);
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3 + 5);
        assert_eq!(lines[0], "D20 #1");
        assert_eq!(lines[1], "Score: 100/100");
        assert_eq!(lines[2], "");
        for row in &lines[3..] {
            assert_eq!(*row, "🟩🟩🟩🟩");
        }
    }

    #[test]
    fn test_partial_last_row() {
        let scores = ScoreVector::new(vec![0.0; 18]);
        let rows = glyph_rows(&scores).collect::<Vec<_>>();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4], "🟥🟥");
        assert!(rows[..4].iter().all(|r| r.chars().count() == ROW_WIDTH));
    }

    #[test]
    fn test_rows_keep_slot_order() {
        let scores = ScoreVector::new(vec![1.0, 0.8, 0.6, 0.1, 0.1, 0.6, 0.8, 1.0]);
        let text = encode(&scores, scores.summary_score(), 42);
        assert_eq!(text, "D20 #42\nScore: 62/100\n\n🟩🟨🟧🟥\n🟥🟧🟨🟩");
    }

    #[test]
    fn test_no_trailing_newline() {
        let scores = ScoreVector::new(vec![1.0]);
        let text = encode(&scores, scores.summary_score(), 7);
        assert!(!text.ends_with('\n'));
    }
}
