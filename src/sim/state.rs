//! Game state and core simulation types
//!
//! Everything the per-tick pipeline reads or writes lives here. The
//! rendering side only ever sees immutable snapshots of this state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::curve::{CurveTrack, TrackPoint};
use super::obstacles::ObstacleField;
use crate::consts::*;

/// Authoritative per-tick state of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Normal gameplay
    Playing,
    /// Cosmetic overlay of Playing, active for a few ticks after a hit
    HitFlash,
    /// Too many collisions; terminal until reset
    Dead,
    /// The player outran the generated curve; terminal until reset
    Finished,
}

impl GamePhase {
    /// Terminal phases suspend all further simulation advancement.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Dead | GamePhase::Finished)
    }
}

/// Which of the five visual variants the rendering consumer should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VisualVariant {
    #[default]
    Normal,
    Hit,
    Dead,
    Finished,
    /// Held at the launch line while the curve builds up track
    Throttled,
}

/// Screen dimensions in pixels, queried from the host at startup and on
/// layout change. Zero dimensions are clamped to 1 so the amplitude
/// formula and the half-screen test never divide into a degenerate size.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScreenMetrics {
    pub width: f32,
    pub height: f32,
}

impl ScreenMetrics {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1) as f32,
            height: height.max(1) as f32,
        }
    }

    /// Upper-half test used to decode press/release intent.
    #[inline]
    pub fn is_upper_half(&self, point: Vec2) -> bool {
        point.y <= self.height / 2.0
    }
}

/// Last press/release information, latched by the input adapter and
/// consumed atomically at the start of the next tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InputLatch {
    /// Whether the screen is currently pressed
    pub pressed: bool,
    /// Screen-space location of the last press
    pub press_point: Vec2,
}

/// The player's motion and life-cycle counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    /// Curve-space launch offset; starts behind the front of the curve
    pub horizontal_offset: f32,
    /// Additive vertical displacement while airborne, 0 when grounded
    pub vertical_jump_offset: f32,
    /// Collisions since the last reset
    pub hit_count: u32,
    /// Free-running tick of the most recent collision
    pub last_hit_tick: u64,
    /// Free-running tick the current jump arc started at
    pub jump_start_tick: u64,
    pub is_airborne: bool,
    pub is_dead: bool,
    pub is_finished: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            horizontal_offset: LAUNCH_OFFSET_START,
            vertical_jump_offset: 0.0,
            hit_count: 0,
            last_hit_tick: 0,
            jump_start_tick: 0,
            is_airborne: false,
            is_dead: false,
            is_finished: false,
        }
    }
}

impl PlayerState {
    /// Advance the jump arc for this tick.
    ///
    /// The arc is cumulative: a fixed step down for each tick of the
    /// ascent window, a fixed step up for each tick of the descent
    /// window, then an instant snap back to grounded.
    pub fn update_jump(&mut self, num_ticks: u64) {
        let elapsed = num_ticks.saturating_sub(self.jump_start_tick);
        if elapsed < JUMP_RISE_TICKS {
            self.is_airborne = true;
            self.vertical_jump_offset -= JUMP_STEP;
        } else if elapsed < JUMP_TOTAL_TICKS {
            self.vertical_jump_offset += JUMP_STEP;
        } else {
            self.is_airborne = false;
            self.vertical_jump_offset = 0.0;
        }
    }

    /// Restore launch-line state. Jump bookkeeping is left alone: the
    /// arc math grounds the player on its own once the window passes.
    pub fn reset(&mut self) {
        self.horizontal_offset = LAUNCH_OFFSET_START;
        self.hit_count = 0;
        self.last_hit_tick = 0;
        self.is_airborne = false;
        self.is_dead = false;
        self.is_finished = false;
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub screen: ScreenMetrics,
    /// Tick counter `t`; reset to 0 only by an explicit game reset
    pub(crate) tick: u64,
    /// Free-running tick counter; survives resets so cooldown and jump
    /// timing stay coherent across restarts
    pub(crate) num_ticks: u64,
    pub curve: CurveTrack,
    pub obstacles: ObstacleField,
    pub player: PlayerState,
    pub input: InputLatch,
    pub(crate) phase: GamePhase,
    pub(crate) visual: VisualVariant,
}

impl GameState {
    /// Create a fresh run with the given obstacle seed and screen size.
    pub fn new(seed: u64, screen: ScreenMetrics) -> Self {
        Self {
            screen,
            tick: 0,
            num_ticks: 0,
            curve: CurveTrack::default(),
            obstacles: ObstacleField::new(seed),
            player: PlayerState::default(),
            input: InputLatch::default(),
            phase: GamePhase::Playing,
            visual: VisualVariant::default(),
        }
    }

    /// Tick counter `t` driving curve and obstacle indexing.
    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Free-running tick counter (never reset).
    #[inline]
    pub fn num_ticks(&self) -> u64 {
        self.num_ticks
    }

    /// Authoritative game phase as of the last completed tick.
    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Visual variant for the rendering consumer. Terminal phases win
    /// over whatever the launch gate last selected.
    pub fn visual_variant(&self) -> VisualVariant {
        match self.phase {
            GamePhase::Dead => VisualVariant::Dead,
            GamePhase::Finished => VisualVariant::Finished,
            _ => self.visual,
        }
    }

    /// The player's current curve-space point.
    pub fn player_point(&self) -> TrackPoint {
        let advance = self.curve.front_advance() + self.player.horizontal_offset;
        let mut point = TrackPoint::at(advance, self.screen.width);
        point.value += self.player.vertical_jump_offset;
        point
    }

    /// Update screen metrics (startup or layout change).
    pub fn set_screen_metrics(&mut self, screen: ScreenMetrics) {
        self.screen = screen;
    }

    /// Restart the run: player state, tick counter and curve front go
    /// back to their launch values. Curve history, the obstacle buffer
    /// and the frontier maximum all persist.
    pub fn reset(&mut self) {
        self.player.reset();
        self.curve.rewind();
        self.tick = 0;
        self.phase = GamePhase::Playing;
        self.visual = VisualVariant::default();
        log::info!("run reset at num_ticks={}", self.num_ticks);
    }
}
