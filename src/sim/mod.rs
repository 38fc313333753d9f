//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded, injected RNG only
//! - No wall-clock reads (time comes in through `TickInput`)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod world;

pub use collision::{bird_hits_pipe, circle_intersects_rect};
pub use spawn::spawn_pipe;
pub use state::{Bird, GamePhase, GameState, Pipe};
pub use tick::{TickInput, tick};
pub use world::World;
