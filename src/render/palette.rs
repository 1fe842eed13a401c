use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use super::Color;

/// Alpha used for every face fill.
const FILL_ALPHA: f64 = 0.8;

/// Random pastel color source for face fills.
///
/// Each RGB channel is sampled uniformly from `[0.5, 1.0]`, which keeps
/// adjacent faces distinguishable while staying light enough for black
/// edges to read on top.
#[derive(Debug)]
pub struct Palette<R: Rng> {
    rng: R,
}

impl Palette<ThreadRng> {
    /// A palette seeded from the thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for Palette<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl Palette<StdRng> {
    /// A deterministic palette for reproducible output.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> Palette<R> {
    /// Samples the next translucent pastel fill.
    pub fn pastel(&mut self) -> Color {
        Color::new(
            self.rng.gen_range(0.5..=1.0),
            self.rng.gen_range(0.5..=1.0),
            self.rng.gen_range(0.5..=1.0),
            FILL_ALPHA,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn pastel_channels_stay_in_range() {
        let mut palette = Palette::seeded(42);
        for _ in 0..100 {
            let c = palette.pastel();
            for channel in [c.r, c.g, c.b] {
                assert!((0.5..=1.0).contains(&channel));
            }
            assert_relative_eq!(c.a, 0.8);
        }
    }

    #[test]
    fn seeded_palette_is_reproducible() {
        let mut a = Palette::seeded(7);
        let mut b = Palette::seeded(7);
        for _ in 0..10 {
            assert_eq!(a.pastel(), b.pastel());
        }
    }
}
