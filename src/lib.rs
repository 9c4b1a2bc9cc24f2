//! Sine Runner - a side-scrolling sine-curve runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (curve generation, obstacles,
//!   player motion, collisions, game state)
//! - `controller`: Event-facing adapter (tick and pointer listeners)
//!
//! Rendering, windowing and raw input decoding live outside this crate;
//! the simulation only consumes already-decoded press/release points and
//! a periodic tick, and exposes read-only snapshots after each tick.

pub mod controller;
pub mod sim;

pub use controller::{GameController, InputListener, TickListener};
pub use sim::{GamePhase, GameState, VisualVariant};

/// Game configuration constants
pub mod consts {
    /// Nominal tick period delivered by the host (milliseconds)
    pub const TICK_PERIOD_MS: u64 = 20;

    /// Horizontal advance of the curve per tick (radians)
    pub const CURVE_STEP: f32 = 0.1;
    /// Scale dividing horizontal advance into track position
    pub const CURVE_LEN: f32 = 0.01;
    /// Amplitude divisor of the track sine formula
    pub const CURVE_AMPLITUDE_DIV: f32 = 3.5;
    /// Ring buffer capacity for curve samples
    pub const CURVE_CAPACITY: usize = 1600;

    /// Obstacle buffer capacity
    pub const OBSTACLE_CAPACITY: usize = 100;
    /// Obstacles are only placed while 0 < t < OBSTACLE_WINDOW_TICKS
    pub const OBSTACLE_WINDOW_TICKS: u64 = 100;
    /// Base horizontal offset added to every obstacle placement
    pub const OBSTACLE_BASE: f32 = 50.0;

    /// Launch offset: the player starts behind the front of the curve
    pub const LAUNCH_OFFSET_START: f32 = -100.0;
    /// Horizontal acceleration per tick while the screen is pressed
    pub const PRESS_ACCEL: f32 = 0.04;

    /// Vertical displacement applied per tick during a jump
    pub const JUMP_STEP: f32 = 18.0;
    /// Ticks spent ascending after a jump starts
    pub const JUMP_RISE_TICKS: u64 = 8;
    /// Total ticks of a full jump arc (ascent + descent)
    pub const JUMP_TOTAL_TICKS: u64 = 16;

    /// Ticks the hit flash stays active after a collision
    pub const HIT_FLASH_TICKS: u64 = 5;
    /// The run ends once hit_count exceeds this
    pub const MAX_HITS: u32 = 4;

    /// Lead distance used by the finish-frontier test
    pub const FINISH_LEAD: f32 = 400.0;
    /// Margin subtracted from the finish lead
    pub const FINISH_MARGIN: f32 = 22.0;

    /// The player is held at the launch line while t <= this
    pub const LAUNCH_WINDOW_TICKS: u64 = 900;

    /// Collision proximity: both axis deltas must be strictly inside
    /// (-HIT_RANGE, HIT_RANGE)
    pub const HIT_RANGE: f32 = 5.0;
}

/// Transverse (vertical) value of the track at a given horizontal advance.
///
/// The whole game runs on this one formula: the background curve, the
/// obstacle placements and the player all sample it.
#[inline]
pub fn track_value(advance: f32, screen_width: f32) -> f32 {
    screen_width * advance.sin() / consts::CURVE_AMPLITUDE_DIV + screen_width / 2.0
}

/// Horizontal advance scaled into track-position space.
#[inline]
pub fn track_position(advance: f32) -> f32 {
    advance / consts::CURVE_LEN
}
