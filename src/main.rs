//! Sine Runner headless entry point
//!
//! Stands in for the host's timer plumbing: delivers one tick per
//! period to the controller, then dumps a JSON snapshot of the final
//! simulation state. Rendering hosts drive [`GameController`] the same
//! way and additionally feed it pointer events.

use std::thread;
use std::time::Duration;

use sine_runner::consts::TICK_PERIOD_MS;
use sine_runner::sim::ScreenMetrics;
use sine_runner::{GameController, TickListener};

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn main() {
    env_logger::init();

    let seed = env_u64("SINE_RUNNER_SEED", 0xC0FFEE);
    let max_ticks = env_u64("SINE_RUNNER_TICKS", 1000);
    let realtime = std::env::var("SINE_RUNNER_REALTIME").is_ok();

    let mut game = GameController::new(seed, ScreenMetrics::new(800, 600));
    log::info!("starting headless run: seed={seed}, max_ticks={max_ticks}");

    for _ in 0..max_ticks {
        game.on_tick();
        if game.state().phase().is_terminal() {
            break;
        }
        if realtime {
            thread::sleep(Duration::from_millis(TICK_PERIOD_MS));
        }
    }

    log::info!(
        "run ended: phase={:?}, t={}, hits={}",
        game.state().phase(),
        game.state().tick_count(),
        game.state().player.hit_count
    );

    match serde_json::to_string_pretty(game.state()) {
        Ok(snapshot) => println!("{snapshot}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
}
