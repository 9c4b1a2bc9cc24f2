//! Obstacle placement along the curve
//!
//! Obstacles are placed during the first hundred ticks of a run and the
//! buffer is frozen afterwards: a one-shot population, not a rolling
//! window. Placement draws from an injected, seeded RNG so a layout can
//! be replayed exactly in tests.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::curve::TrackPoint;
use crate::consts::*;

fn default_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// The bounded set of obstacle samples for a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleField {
    /// Seed used for the placement RNG (kept for reproducibility)
    seed: u64,
    /// Placement RNG; reconstructed from the seed on deserialization
    #[serde(skip, default = "default_rng")]
    rng: Pcg32,
    /// Fixed buffer of OBSTACLE_CAPACITY samples; slot 0 is never
    /// written and stays zeroed
    samples: Vec<TrackPoint>,
}

impl ObstacleField {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            samples: vec![TrackPoint::default(); OBSTACLE_CAPACITY],
        }
    }

    /// Conditionally place one obstacle for the given tick.
    ///
    /// Only mutates state while `0 < tick < OBSTACLE_WINDOW_TICKS`;
    /// outside that window this is a no-op and the buffer is read-only.
    /// The placement `(draw % 10) * tick + 50` grows linearly with the
    /// tick index; the resulting spatial distribution is part of the
    /// game's behavior and is kept as-is.
    pub fn advance(&mut self, tick: u64, screen_width: f32) {
        if tick == 0 || tick >= OBSTACLE_WINDOW_TICKS {
            return;
        }

        let draw: u32 = self.rng.random();
        let advance = (draw % 10) as f32 * tick as f32 + OBSTACLE_BASE;
        self.samples[(tick % OBSTACLE_CAPACITY as u64) as usize] =
            TrackPoint::at(advance, screen_width);
    }

    /// Seed this field was constructed with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Obstacle samples for collision checks and rendering.
    #[inline]
    pub fn samples(&self) -> &[TrackPoint] {
        &self.samples
    }
}
