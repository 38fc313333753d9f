//! Procedural pipe generation
//!
//! A pipe is a pure function of the world parameters plus one uniform draw.
//! The RNG is injected so pipe sequences are reproducible from a seed.

use rand::Rng;

use super::state::Pipe;
use super::world::World;
use crate::consts::{GAP_EDGE_MARGIN, GAP_HEIGHT_RATIO, MIN_GAP_HEIGHT};

/// Create a pipe pair at horizontal position `x` with a randomized gap.
///
/// The gap center stays at least half a gap plus `GAP_EDGE_MARGIN` away from
/// both the ceiling and the ground line, so the opening never touches either
/// edge for any draw in [0, 1).
pub fn spawn_pipe(world: &World, rng: &mut impl Rng, x: f32) -> Pipe {
    let usable = world.ground_y();
    let gap_height = (usable * GAP_HEIGHT_RATIO).max(MIN_GAP_HEIGHT);
    let margin = gap_height / 2.0 + GAP_EDGE_MARGIN;
    let gap_center_y = margin + rng.random::<f32>() * (usable - 2.0 * margin);
    Pipe {
        x,
        gap_center_y,
        gap_height,
        scored: false,
    }
}
