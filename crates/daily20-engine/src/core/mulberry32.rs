use rand::{RngCore, SeedableRng, rand_core::impls};

use crate::DateSeed;

const INCREMENT: u32 = 0x6D2B_79F5;
const UNIT_SCALE: f64 = 4_294_967_296.0;

/// Mulberry32: a 32-bit pseudo-random stream.
///
/// Each draw advances the state by a fixed odd increment and mixes it into a
/// 32-bit output:
///
/// ```text
/// state = state + 0x6D2B79F5
/// t = (state ^ (state >> 15)) * (state | 1)
/// t ^= t + (t ^ (t >> 7)) * (t | 61)
/// out = t ^ (t >> 14)
/// ```
///
/// All arithmetic wraps at 32 bits. The transformation defines every daily
/// puzzle and must never change.
///
/// The generator implements [`RngCore`] and [`SeedableRng`], but the puzzle
/// itself is drawn with [`Self::next_unit`] and [`Self::next_in_range`]; `rand`'s
/// own distributions map draws differently and would not reproduce the puzzle.
///
/// # Example
///
/// ```
/// use daily20_engine::{DateSeed, Mulberry32};
///
/// let mut a = Mulberry32::from_date_seed(DateSeed::from_raw(42));
/// let mut b = Mulberry32::from_date_seed(DateSeed::from_raw(42));
/// assert_eq!(a.next_in_range(1, 999), b.next_in_range(1, 999));
/// ```
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    #[must_use]
    pub const fn new(state: u32) -> Self {
        Self { state }
    }

    #[must_use]
    pub const fn from_date_seed(seed: DateSeed) -> Self {
        Self::new(seed.value())
    }

    /// Advances the stream and returns the raw 32-bit output.
    pub fn next_raw(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Returns the next draw as a float in `[0.0, 1.0)`.
    pub fn next_unit(&mut self) -> f64 {
        f64::from(self.next_raw()) / UNIT_SCALE
    }

    /// Returns the next draw mapped to `[min, max]` as `floor(draw * span) + min`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn next_in_range(&mut self, min: u16, max: u16) -> u16 {
        assert!(min <= max, "empty range [{min}, {max}]");
        let span = f64::from(max - min) + 1.0;
        // draw < 1.0, so the offset is at most `max - min`
        let offset = (self.next_unit() * span).floor() as u16;
        min + offset
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst);
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_raw_draws() {
        let mut rng = Mulberry32::new(20_250_129);
        assert_eq!(rng.next_raw(), 4_099_336_604);
        assert_eq!(rng.next_raw(), 2_894_846_843);
        assert_eq!(rng.next_raw(), 3_112_522_767);
    }

    #[test]
    fn test_golden_raw_draws_zero_state() {
        let mut rng = Mulberry32::new(0);
        assert_eq!(rng.next_raw(), 1_144_304_738);
        assert_eq!(rng.next_raw(), 1_416_247);
        assert_eq!(rng.next_raw(), 958_946_056);
    }

    #[test]
    fn test_unit_draws_in_half_open_range() {
        let mut rng = Mulberry32::new(7);
        for _ in 0..10_000 {
            let x = rng.next_unit();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_range_draws_are_inclusive_and_bounded() {
        let mut rng = Mulberry32::new(123);
        let mut seen = [false; 3];
        for _ in 0..1_000 {
            let v = rng.next_in_range(5, 7);
            assert!((5..=7).contains(&v));
            seen[usize::from(v - 5)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_full_u16_range_does_not_overflow() {
        let mut rng = Mulberry32::new(99);
        for _ in 0..1_000 {
            let _ = rng.next_in_range(0, u16::MAX);
        }
    }

    #[test]
    fn test_rng_core_matches_raw_stream() {
        let mut a = Mulberry32::new(20_250_129);
        let mut b = Mulberry32::from_seed(20_250_129_u32.to_le_bytes());
        assert_eq!(a.next_u32(), b.next_raw());
        assert_eq!(a.next_u32(), b.next_raw());
    }
}
