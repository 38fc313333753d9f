//! Flap Dash - a tap-to-flap pipe-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, pipe generation, collisions, game state)
//! - `render`: Read-only frame snapshots and the renderer boundary
//! - `runner`: Frame loop thread with host-driven pause/resume

pub mod render;
pub mod runner;
pub mod sim;

pub use render::{FrameSnapshot, RenderError, Renderer};
pub use runner::FrameLoop;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Maximum simulated time per update; larger frame gaps are clamped to
    /// this so a stall never turns into a physics blow-up
    pub const MAX_FRAME_DT: f32 = 0.05;
    /// Delay between live frames
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(12);
    /// Poll interval while the loop is paused
    pub const IDLE_POLL: Duration = Duration::from_millis(32);
    /// How long `pause()` waits for the loop to park
    pub const PAUSE_WAIT: Duration = Duration::from_millis(500);

    /// Rolling pipe window size
    pub const PIPE_TARGET: usize = 4;
    /// The first pipe of a fresh window spawns this far past the right edge
    pub const FIRST_PIPE_OFFSET: f32 = 200.0;
    /// Pipes are evicted once their right edge passes `-pipe_width - EVICT_SLACK`
    pub const EVICT_SLACK: f32 = 10.0;

    /// Floors for the viewport-derived world parameters, keeping gameplay
    /// feel stable on small screens
    pub const MIN_GROUND_HEIGHT: f32 = 48.0;
    pub const MIN_BIRD_RADIUS: f32 = 18.0;
    /// px/s^2
    pub const MIN_GRAVITY: f32 = 900.0;
    /// px/s upward
    pub const MIN_FLAP_IMPULSE: f32 = 420.0;
    pub const MIN_PIPE_WIDTH: f32 = 64.0;
    /// px/s leftward
    pub const MIN_PIPE_SPEED: f32 = 180.0;
    pub const MIN_PIPE_SPACING: f32 = 240.0;

    /// Gap sizing
    pub const MIN_GAP_HEIGHT: f32 = 260.0;
    pub const GAP_HEIGHT_RATIO: f32 = 0.22;
    /// Clearance beyond the half-gap that keeps the opening away from the
    /// ceiling and the ground line
    pub const GAP_EDGE_MARGIN: f32 = 60.0;

    /// Idle bob while waiting to start or after a crash (cosmetic only)
    pub const IDLE_BOB_RATE: f64 = 5.0;
    pub const IDLE_BOB_STEP: f32 = 0.5;
}
