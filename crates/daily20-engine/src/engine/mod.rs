//! Game flow on top of the core puzzle data.
//!
//! - [`PlacementGrid`] - slots that are empty or hold one revealed number
//! - [`GameState`] - immutable game progress with an explicit placement transition
//! - [`GameSession`] - a dated game for interactive front-ends, with a placement log
//!
//! # Game Flow
//!
//! 1. Generate the day's [`NumberSequence`](crate::NumberSequence)
//! 2. Reveal the current number ([`GameState::current_number`])
//! 3. Place it into an empty slot ([`GameState::place`]), which returns the next state
//! 4. Repeat until every slot is filled, then hand the grid to the evaluator

pub use self::{game_session::*, game_state::*, placement_grid::*};

mod game_session;
mod game_state;
mod placement_grid;
