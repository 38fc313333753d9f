//! Per-session world configuration
//!
//! Every gameplay parameter derives from the viewport so the game feels the
//! same across screen sizes. The whole set is recomputed on a viewport
//! change, which also invalidates the pipe window.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Viewport-derived gameplay parameters, fixed for a session
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct World {
    pub width: f32,
    pub height: f32,
    /// Height of the ground band at the bottom of the viewport
    pub ground_height: f32,
    /// Downward acceleration (px/s^2)
    pub gravity: f32,
    /// Upward velocity set by a tap (px/s)
    pub flap_impulse: f32,
    pub bird_radius: f32,
    pub pipe_width: f32,
    /// Leftward pipe scroll speed (px/s)
    pub pipe_speed: f32,
    /// Horizontal distance between consecutive pipe pairs
    pub pipe_spacing: f32,
}

impl World {
    /// Derive a world from drawable dimensions. Callers must supply positive
    /// dimensions.
    pub fn from_viewport(width: f32, height: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "viewport must be positive");
        Self {
            width,
            height,
            ground_height: (height * 0.10).max(MIN_GROUND_HEIGHT),
            gravity: (height * 2.4).max(MIN_GRAVITY),
            flap_impulse: (height * 1.0).max(MIN_FLAP_IMPULSE),
            bird_radius: (height * 0.03).max(MIN_BIRD_RADIUS),
            pipe_width: (width * 0.12).max(MIN_PIPE_WIDTH),
            pipe_speed: (width * 0.35).max(MIN_PIPE_SPEED),
            pipe_spacing: (width * 0.9).max(MIN_PIPE_SPACING),
        }
    }

    /// Top of the ground band; nothing below this is playable. Also the
    /// usable vertical extent, since the ceiling sits at y = 0.
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.height - self.ground_height
    }

    /// Bird spawn position
    pub fn bird_start(&self) -> Vec2 {
        Vec2::new(self.width * 0.35, self.height * 0.5)
    }

    /// X where new pipes enter once the window needs topping up
    pub fn right_spawn_x(&self) -> f32 {
        self.width + self.pipe_spacing * 0.5
    }
}
