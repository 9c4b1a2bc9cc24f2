//! Proximity collision detection
//!
//! The player point is tested against every obstacle sample each tick.
//! A collision requires both axis deltas to fall strictly inside
//! (-HIT_RANGE, HIT_RANGE): the edges do not count. Several obstacles
//! can qualify in the same tick and each one counts as its own hit;
//! there is no per-tick de-duplication.

use super::curve::TrackPoint;
use crate::consts::HIT_RANGE;

/// True if the obstacle sample is strictly within hit range of the
/// player on both axes.
#[inline]
pub fn within_hit_range(obstacle: TrackPoint, player: TrackPoint) -> bool {
    let dv = obstacle.value - player.value;
    let dp = obstacle.position - player.position;
    dv < HIT_RANGE && dv > -HIT_RANGE && dp < HIT_RANGE && dp > -HIT_RANGE
}

/// Count the obstacles colliding with the player this tick.
pub fn count_hits(player: TrackPoint, obstacles: &[TrackPoint]) -> u32 {
    obstacles
        .iter()
        .filter(|&&obstacle| within_hit_range(obstacle, player))
        .count() as u32
}
