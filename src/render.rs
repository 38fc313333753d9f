//! Rendering boundary
//!
//! The core never draws. Each frame it hands the renderer a read-only
//! `FrameSnapshot`; hosts implement `Renderer` for whatever surface they own
//! and draw the background, pipes, ground band, bird, score, and the
//! state-dependent overlays ("Tap to start" / "Game Over - tap to retry").
//! Styling is entirely the host's business. A frame whose surface is not
//! ready is skipped, never fatal.

use std::error::Error;
use std::fmt;

use glam::Vec2;
use serde::Serialize;

use crate::sim::{GamePhase, GameState};

/// Bird geometry as drawn
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BirdView {
    pub pos: Vec2,
    pub radius: f32,
}

/// One pipe pair as two rectangles; `gap_top`/`gap_bottom` bound the opening
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PipeView {
    pub left: f32,
    pub right: f32,
    pub gap_top: f32,
    pub gap_bottom: f32,
}

/// Read-only view of one frame, rebuilt per render call
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub width: f32,
    pub height: f32,
    /// Top of the ground band
    pub ground_y: f32,
    pub bird: BirdView,
    /// Creation order (oldest/leftmost first)
    pub pipes: Vec<PipeView>,
    pub score: u32,
    /// False until the first tap
    pub started: bool,
    pub game_over: bool,
}

impl FrameSnapshot {
    /// Capture the current state
    pub fn capture(state: &GameState) -> Self {
        Self {
            width: state.world.width,
            height: state.world.height,
            ground_y: state.world.ground_y(),
            bird: BirdView {
                pos: state.bird.pos,
                radius: state.bird.radius,
            },
            pipes: state
                .pipes
                .iter()
                .map(|p| PipeView {
                    left: p.x,
                    right: p.x + state.world.pipe_width,
                    gap_top: p.gap_top(),
                    gap_bottom: p.gap_bottom(),
                })
                .collect(),
            score: state.score,
            started: state.phase != GamePhase::Ready,
            game_over: state.phase == GamePhase::GameOver,
        }
    }
}

/// Why a frame could not be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// No drawable surface is ready; the frame is skipped and the loop goes on
    SurfaceUnavailable,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::SurfaceUnavailable => write!(f, "no drawable surface available"),
        }
    }
}

impl Error for RenderError {}

/// Host-side drawing surface, driven once per frame by the loop thread
pub trait Renderer: Send {
    fn render(&mut self, frame: &FrameSnapshot) -> Result<(), RenderError>;
}
