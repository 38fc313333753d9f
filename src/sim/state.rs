//! Game state and core simulation types
//!
//! `GameState` is owned and mutated by the loop thread only; everything the
//! host sees goes out through a frame snapshot.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn::spawn_pipe;
use super::world::World;
use crate::consts::{FIRST_PIPE_OFFSET, PIPE_TARGET};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first tap; the bird idles in place
    Ready,
    /// Active gameplay
    Playing,
    /// Run ended; a tap starts a fresh session
    GameOver,
}

/// The player avatar
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bird {
    pub pos: Vec2,
    /// Vertical velocity, positive downward (screen coordinates)
    pub vel_y: f32,
    pub radius: f32,
}

/// A pipe pair: two rectangles with a passable gap between them
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge; scrolls leftward over time
    pub x: f32,
    pub gap_center_y: f32,
    /// Fixed at creation
    pub gap_height: f32,
    /// Set once the bird has passed this pipe and the point was counted
    pub scored: bool,
}

impl Pipe {
    /// Bottom edge of the rectangle above the gap
    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.gap_center_y - self.gap_height / 2.0
    }

    /// Top edge of the rectangle below the gap
    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_center_y + self.gap_height / 2.0
    }
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    pub world: World,
    pub bird: Bird,
    /// Creation order; the last element is the rightmost pipe, which anchors
    /// the spacing of new spawns
    pub pipes: Vec<Pipe>,
    pub score: u32,
    pub phase: GamePhase,
    /// One RNG stream per session; carries across resets so the pipe
    /// sequence stays a single reproducible stream
    rng: Pcg32,
}

impl GameState {
    /// Create a state for the given viewport with a seeded RNG
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let world = World::from_viewport(width, height);
        let mut state = Self {
            world,
            bird: Bird {
                pos: world.bird_start(),
                vel_y: 0.0,
                radius: world.bird_radius,
            },
            pipes: Vec::with_capacity(PIPE_TARGET + 1),
            score: 0,
            phase: GamePhase::Ready,
            rng: Pcg32::seed_from_u64(seed),
        };
        state.spawn_initial_pipes();
        state
    }

    /// Re-derive everything from a (possibly new) viewport: fresh world,
    /// recentered bird, new pipe window, zero score, back to `Ready`.
    pub fn reinitialize(&mut self, width: f32, height: f32) {
        self.world = World::from_viewport(width, height);
        self.bird = Bird {
            pos: self.world.bird_start(),
            vel_y: 0.0,
            radius: self.world.bird_radius,
        };
        self.score = 0;
        self.phase = GamePhase::Ready;
        self.pipes.clear();
        self.spawn_initial_pipes();
    }

    fn spawn_initial_pipes(&mut self) {
        let start_x = self.world.width + FIRST_PIPE_OFFSET;
        for i in 0..PIPE_TARGET {
            let x = start_x + i as f32 * self.world.pipe_spacing;
            let pipe = spawn_pipe(&self.world, &mut self.rng, x);
            self.pipes.push(pipe);
        }
    }

    /// Refill the rolling window after eviction. New pipes spawn past the
    /// right edge, at least `pipe_spacing` after the current rightmost one.
    pub(crate) fn top_up_pipes(&mut self) {
        let right_spawn_x = self.world.right_spawn_x();
        while self.pipes.len() < PIPE_TARGET {
            let last_x = self.pipes.last().map_or(right_spawn_x, |p| p.x);
            let x = right_spawn_x.max(last_x + self.world.pipe_spacing);
            let pipe = spawn_pipe(&self.world, &mut self.rng, x);
            self.pipes.push(pipe);
        }
    }

    /// Handle the primary tap event
    pub fn tap(&mut self) {
        match self.phase {
            GamePhase::Ready => {
                self.phase = GamePhase::Playing;
                self.bird.vel_y = -self.world.flap_impulse;
            }
            GamePhase::Playing => {
                self.bird.vel_y = -self.world.flap_impulse;
            }
            GamePhase::GameOver => {
                // Fresh session on the same viewport
                self.reinitialize(self.world.width, self.world.height);
                self.phase = GamePhase::Playing;
            }
        }
    }
}
