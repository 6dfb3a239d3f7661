//! Seedable uniform random source.
//!
//! Each stochastic component (wander behaviours, demos) owns its own
//! `AiRng`, so runs are reproducible per component and no state is shared.
//! A seed of `0` asks for a non-reproducible stream seeded from the system
//! clock; any other seed is fully deterministic.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AiError, AiResult, Real};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Uniform random source for AI components.
#[derive(Clone, Debug)]
pub struct AiRng(SmallRng);

impl AiRng {
    /// Seed deterministically, or from the system clock when `seed == 0`.
    pub fn new(seed: u64) -> Self {
        let seed = if seed == 0 { clock_seed() } else { seed };
        AiRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive an independent child stream, e.g. one per character.
    pub fn child(&mut self, offset: u64) -> AiRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        AiRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Uniform integer in `[0, max)`.
    pub fn random_int(&mut self, max: u32) -> AiResult<u32> {
        if max == 0 {
            return Err(AiError::InvalidArgument("random_int upper bound must be > 0".into()));
        }
        Ok(self.0.gen_range(0..max))
    }

    /// Uniform real in `[0, max)` (or `(max, 0]` for negative `max`).
    #[inline]
    pub fn random_real(&mut self, max: Real) -> Real {
        max * self.0.r#gen::<Real>()
    }

    /// Difference of two uniform draws: in `(-max, max)`, peaked at zero.
    #[inline]
    pub fn random_binomial(&mut self, max: Real) -> Real {
        self.random_real(max) - self.random_real(max)
    }

    /// Fair coin flip.
    #[inline]
    pub fn random_boolean(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }
}

impl Default for AiRng {
    /// Clock-seeded stream.
    fn default() -> Self {
        AiRng::new(0)
    }
}

fn clock_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(MIXING_CONSTANT);
    // Never hand back the "use the clock" sentinel.
    nanos.max(1)
}
