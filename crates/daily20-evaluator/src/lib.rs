//! Scoring of finished Daily20 grids.
//!
//! 1. **Placement Evaluation** ([`placement_evaluator`]) - scores every slot by how far its
//!    number sits from the number's ideal sorted position.
//! 2. **Summary** ([`score`]) - the per-slot [`ScoreVector`](score::ScoreVector), the
//!    0–100 summary score and the exact-match count.
//! 3. **Sharing** ([`share_text`]) - buckets scores into [`Tier`](share_text::Tier)s and
//!    renders the copy-paste share text.
//!
//! # Example
//!
//! ```
//! use daily20_engine::{NumberSequence, PlacementGrid};
//! use daily20_evaluator::{placement_evaluator, share_text};
//!
//! let sequence = NumberSequence::try_from(vec![50, 10, 30, 20, 40])?;
//! let grid = PlacementGrid::from_slots(vec![Some(10), Some(20), Some(30), Some(40), Some(50)]);
//!
//! let scores = placement_evaluator::evaluate(&grid, &sequence);
//! assert_eq!(scores.summary_score().value(), 100);
//!
//! let text = share_text::encode(&scores, scores.summary_score(), 1);
//! assert_eq!(text, "D20 #1\nScore: 100/100\n\n🟩🟩🟩🟩\n🟩");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod placement_evaluator;
pub mod score;
pub mod share_text;
