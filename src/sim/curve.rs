//! Background curve generation
//!
//! The track is a sine curve emitted one sample per tick into a
//! fixed-capacity ring buffer. Generation is a pure function of the tick
//! count and the screen width, so replays are bit-identical.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{track_position, track_value};

/// One sample of the track: transverse value plus scaled position.
///
/// Shared by the curve buffer, the obstacle buffer and the player's
/// computed point, so collision math compares like with like.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    /// Transverse (vertical) offset in screen units
    pub value: f32,
    /// Horizontal advance scaled by 1/CURVE_LEN
    pub position: f32,
}

impl TrackPoint {
    /// Sample the track formula at a horizontal advance.
    pub fn at(advance: f32, screen_width: f32) -> Self {
        Self {
            value: track_value(advance, screen_width),
            position: track_position(advance),
        }
    }
}

/// The generated curve: ring buffer of samples plus the running maximum
/// value ever emitted (the finish-line frontier).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveTrack {
    /// Monotonic horizontal advance, CURVE_STEP per tick
    advance: f32,
    /// Running maximum of all emitted sample values (never decreases)
    max_value: f32,
    /// Ring of the most recent min(t + 1, CURVE_CAPACITY) samples
    samples: Vec<TrackPoint>,
}

impl Default for CurveTrack {
    fn default() -> Self {
        Self {
            advance: 0.0,
            max_value: 0.0,
            samples: vec![TrackPoint::default(); CURVE_CAPACITY],
        }
    }
}

impl CurveTrack {
    /// Emit the sample for the given tick, overwriting the slot at
    /// `tick % CURVE_CAPACITY`.
    pub fn advance(&mut self, tick: u64, screen_width: f32) -> TrackPoint {
        self.advance += CURVE_STEP;
        let sample = TrackPoint::at(self.advance, screen_width);

        if sample.value > self.max_value {
            self.max_value = sample.value;
        }

        self.samples[(tick % CURVE_CAPACITY as u64) as usize] = sample;
        sample
    }

    /// Current horizontal advance of the curve front.
    #[inline]
    pub fn front_advance(&self) -> f32 {
        self.advance
    }

    /// The finish-line frontier: highest value the curve has reached.
    #[inline]
    pub fn max_value(&self) -> f32 {
        self.max_value
    }

    /// Full sample ring for the rendering consumer (always
    /// CURVE_CAPACITY entries; unwritten slots are zeroed).
    #[inline]
    pub fn samples(&self) -> &[TrackPoint] {
        &self.samples
    }

    /// Rewind the curve front to the launch position. The sample ring
    /// and the frontier are deliberately left intact: curve history
    /// persists across a player reset.
    pub fn rewind(&mut self) {
        self.advance = 0.0;
    }
}
