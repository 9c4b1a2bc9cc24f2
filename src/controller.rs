//! Event-facing adapter between the host and the simulation
//!
//! The host delivers two unrelated event streams: a periodic tick
//! (~20 ms) and decoded pointer press/release events. They are modeled
//! as independent capability traits rather than one merged listener
//! surface; [`GameController`] implements both over a single owned
//! [`GameState`].
//!
//! Input events only latch state. The latched input is applied
//! atomically at the start of the next tick, so an event can never
//! cause a re-entrant simulation step.

use glam::Vec2;

use crate::sim::{GameState, ScreenMetrics, tick};

/// Receiver of the host's periodic tick events.
pub trait TickListener {
    /// Called once per tick period; advances the simulation one step.
    fn on_tick(&mut self);
}

/// Receiver of decoded pointer events with screen-space coordinates.
pub trait InputListener {
    fn on_press(&mut self, point: Vec2);
    fn on_release(&mut self, point: Vec2);
}

/// Owns the simulation state and adapts host events onto it.
pub struct GameController {
    state: GameState,
}

impl GameController {
    pub fn new(seed: u64, screen: ScreenMetrics) -> Self {
        Self {
            state: GameState::new(seed, screen),
        }
    }

    /// Read-only snapshot for the rendering consumer.
    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Forwarded on host layout changes.
    pub fn set_screen_metrics(&mut self, screen: ScreenMetrics) {
        self.state.set_screen_metrics(screen);
    }
}

impl TickListener for GameController {
    fn on_tick(&mut self) {
        tick(&mut self.state);
    }
}

impl InputListener for GameController {
    /// Latch the press. A press while the run is over restarts it
    /// instead of steering.
    fn on_press(&mut self, point: Vec2) {
        self.state.input.press_point = point;
        self.state.input.pressed = true;

        if self.state.phase().is_terminal() {
            self.state.reset();
        }
    }

    /// Clear the press latch. A release in the upper screen half starts
    /// a jump, but only if the player is grounded; lower-half releases
    /// never jump.
    fn on_release(&mut self, point: Vec2) {
        if self.state.screen.is_upper_half(point) && !self.state.player.is_airborne {
            self.state.player.jump_start_tick = self.state.num_ticks();
        }
        self.state.input.pressed = false;
    }
}
