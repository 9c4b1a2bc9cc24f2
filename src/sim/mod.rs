//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - One simulation step per external tick, never more
//! - Seeded RNG only (obstacle placement)
//! - Fixed-capacity buffers, no dynamic growth
//! - No rendering or platform dependencies

pub mod collision;
pub mod curve;
pub mod obstacles;
pub mod state;
pub mod tick;

pub use collision::{count_hits, within_hit_range};
pub use curve::{CurveTrack, TrackPoint};
pub use obstacles::ObstacleField;
pub use state::{GamePhase, GameState, InputLatch, PlayerState, ScreenMetrics, VisualVariant};
pub use tick::tick;
