use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Per-layer deterministic generator.
///
/// Each randomized layer owns one, seeded from a fixed constant, so its layout
/// is identical on every frame and every platform.
#[derive(Debug, Clone)]
pub(crate) struct LayerRng(ChaCha8Rng);

impl LayerRng {
    pub(crate) fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Uniform float in `[0, 1]`.
    pub(crate) fn unit(&mut self) -> f32 {
        self.0.gen_range(0.0..=1.0)
    }

    /// Uniform float in `[lo, hi]`.
    pub(crate) fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.unit() * (hi - lo)
    }

    /// True with probability `1 / n`.
    pub(crate) fn one_in(&mut self, n: u32) -> bool {
        self.0.gen_range(0..n.max(1)) == 0
    }
}
