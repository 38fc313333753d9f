//! Collision detection between the bird and pipe rectangles
//!
//! The bird is a circle; each pipe pair contributes two axis-aligned
//! rectangles. Intersection finds the closest point on the rectangle to the
//! circle center via per-axis clamping, then compares squared distances.

use glam::Vec2;

use super::state::{Bird, Pipe};
use super::world::World;

/// Circle-vs-axis-aligned-rectangle intersection.
///
/// `min`/`max` are the rectangle corners; callers must keep `min <= max` per
/// component. Degenerate (zero-area) rectangles behave as segments or points.
#[inline]
pub fn circle_intersects_rect(center: Vec2, radius: f32, min: Vec2, max: Vec2) -> bool {
    let closest = center.clamp(min, max);
    center.distance_squared(closest) <= radius * radius
}

/// Whether the bird overlaps either rectangle of a pipe pair
pub fn bird_hits_pipe(bird: &Bird, pipe: &Pipe, world: &World) -> bool {
    let left = pipe.x;
    let right = pipe.x + world.pipe_width;

    // Above the gap: ceiling down to the gap top
    if circle_intersects_rect(
        bird.pos,
        bird.radius,
        Vec2::new(left, 0.0),
        Vec2::new(right, pipe.gap_top()),
    ) {
        return true;
    }

    // Below the gap: gap bottom down to the ground line
    circle_intersects_rect(
        bird.pos,
        bird.radius,
        Vec2::new(left, pipe.gap_bottom()),
        Vec2::new(right, world.ground_y()),
    )
}
