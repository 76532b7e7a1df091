//! Core puzzle data: everything needed to turn a calendar date into the day's numbers.
//!
//! - [`DateSeed`] - integer seed derived from a canonical `YYYY-MM-DD` date
//! - [`Mulberry32`] - the fixed 32-bit pseudo-random stream
//! - [`NumberSequence`] - distinct numbers in reveal order
//! - [`game_number`] - sequential puzzle id counted from [`EPOCH`]
//!
//! # Compatibility
//!
//! The seed derivation, the stream transformation and the draw-to-integer mapping together
//! define every past and future puzzle. Changing any of them silently changes the numbers
//! every player sees on a given day, so they are fixed and covered by golden-value tests.

pub use self::{date_seed::*, game_number::*, mulberry32::*, number_sequence::*};

mod date_seed;
mod game_number;
mod mulberry32;
mod number_sequence;
