//! Simulation step
//!
//! `tick` advances the game by one timestep: tap handling, vertical physics,
//! pipe scrolling/scoring/eviction, window top-up, and the collision pass.
//! Wall-clock time for the cosmetic idle bob comes in through `TickInput`,
//! so the whole step is deterministic under test.

use super::collision::bird_hits_pipe;
use super::state::{GamePhase, GameState};
use crate::consts::{EVICT_SLACK, IDLE_BOB_RATE, IDLE_BOB_STEP};

/// Input commands for a single update
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Primary tap fired since the last update
    pub flap: bool,
    /// Wall-clock seconds, used only for the idle bob
    pub wall_time: f64,
}

/// Advance the game state by `dt` seconds.
///
/// The frame loop caps dt at `MAX_FRAME_DT` before calling; `tick` itself
/// integrates whatever it is given.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.flap {
        state.tap();
    }

    if state.phase != GamePhase::Playing {
        // Cosmetic wiggle while waiting to start or after a crash; score,
        // pipes, and collision state stay untouched
        state.bird.pos.y += (input.wall_time * IDLE_BOB_RATE).sin() as f32 * IDLE_BOB_STEP;
        return;
    }

    let world = state.world;

    // Vertical physics
    state.bird.vel_y += world.gravity * dt;
    state.bird.pos.y += state.bird.vel_y * dt;

    // Ceiling is a soft clamp; the ground ends the run
    if state.bird.pos.y - state.bird.radius < 0.0 {
        state.bird.pos.y = state.bird.radius;
        state.bird.vel_y = 0.0;
    }
    if state.bird.pos.y + state.bird.radius > world.ground_y() {
        state.bird.pos.y = world.ground_y() - state.bird.radius;
        state.phase = GamePhase::GameOver;
    }

    // Advance and score in one pass, then evict in a second
    let bird_x = state.bird.pos.x;
    let mut gained = 0;
    for pipe in &mut state.pipes {
        pipe.x -= world.pipe_speed * dt;
        if !pipe.scored && pipe.x + world.pipe_width < bird_x {
            pipe.scored = true;
            gained += 1;
        }
    }
    state.score += gained;

    let left_bound = -world.pipe_width - EVICT_SLACK;
    state.pipes.retain(|p| p.x + world.pipe_width >= left_bound);

    state.top_up_pipes();

    // Any hit is terminal, so iteration order cannot change the outcome
    for pipe in &state.pipes {
        if bird_hits_pipe(&state.bird, pipe, &world) {
            state.phase = GamePhase::GameOver;
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PIPE_TARGET;
    use crate::sim::state::Pipe;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    fn playing_state() -> GameState {
        let mut state = GameState::new(1000.0, 2000.0, 42);
        state.tap();
        state
    }

    /// A pipe whose gap is wide open around the given y, so it never collides
    fn open_pipe(x: f32, around_y: f32) -> Pipe {
        Pipe {
            x,
            gap_center_y: around_y,
            gap_height: 600.0,
            scored: false,
        }
    }

    #[test]
    fn test_ready_state_does_not_simulate() {
        let mut state = GameState::new(1000.0, 2000.0, 42);
        let pipes_before: Vec<f32> = state.pipes.iter().map(|p| p.x).collect();
        let y_before = state.bird.pos.y;

        tick(&mut state, &TickInput { flap: false, wall_time: 1.3 }, 0.05);

        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.score, 0);
        let pipes_after: Vec<f32> = state.pipes.iter().map(|p| p.x).collect();
        assert_eq!(pipes_before, pipes_after);
        assert!((state.bird.pos.y - y_before).abs() <= IDLE_BOB_STEP);
    }

    #[test]
    fn test_idle_bob_follows_wall_time() {
        let mut state = GameState::new(1000.0, 2000.0, 42);
        let y = state.bird.pos.y;

        // sin(0) = 0: no movement
        tick(&mut state, &TickInput { flap: false, wall_time: 0.0 }, 0.05);
        assert_eq!(state.bird.pos.y, y);

        // sin(pi/2) = 1: a full step down the bob
        tick(&mut state, &TickInput { flap: false, wall_time: PI / (2.0 * IDLE_BOB_RATE) }, 0.05);
        assert!((state.bird.pos.y - (y + IDLE_BOB_STEP)).abs() < 1e-4);
    }

    #[test]
    fn test_flap_input_starts_the_game() {
        let mut state = GameState::new(1000.0, 2000.0, 42);
        tick(&mut state, &TickInput { flap: true, wall_time: 0.0 }, 0.05);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.bird.vel_y > -state.world.flap_impulse);
    }

    #[test]
    fn test_one_second_after_tap_ends_below_start() {
        // 20 clamped steps cover a full second; gravity wins over the single
        // flap and the bird ends up below where it started
        let mut state = GameState::new(1000.0, 2000.0, 42);
        let start_y = state.bird.pos.y;

        tick(&mut state, &TickInput { flap: true, wall_time: 0.0 }, 0.05);
        for _ in 0..19 {
            tick(&mut state, &TickInput::default(), 0.05);
        }

        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.bird.pos.y > start_y);
    }

    #[test]
    fn test_ceiling_contact_clamps_and_zeroes_velocity() {
        let mut state = playing_state();
        state.bird.vel_y = -50_000.0;
        tick(&mut state, &TickInput::default(), 0.05);
        assert_eq!(state.bird.pos.y, state.bird.radius);
        assert_eq!(state.bird.vel_y, 0.0);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_ground_contact_ends_the_run() {
        let mut state = playing_state();
        state.bird.pos.y = state.world.ground_y() - state.bird.radius - 1.0;
        state.bird.vel_y = 1000.0;
        tick(&mut state, &TickInput::default(), 0.05);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.bird.pos.y, state.world.ground_y() - state.bird.radius);
    }

    #[test]
    fn test_tap_after_game_over_is_a_fresh_session() {
        let mut state = playing_state();
        state.score = 6;
        state.bird.pos.y = state.world.ground_y() - state.bird.radius - 1.0;
        state.bird.vel_y = 1000.0;
        tick(&mut state, &TickInput::default(), 0.05);
        assert_eq!(state.phase, GamePhase::GameOver);

        tick(&mut state, &TickInput { flap: true, wall_time: 0.0 }, 0.05);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.pipes.len(), PIPE_TARGET);
    }

    #[test]
    fn test_pipe_scores_exactly_once() {
        let mut state = playing_state();
        let bird = state.bird;
        // Right edge one pixel past the bird; this tick pushes it across
        state.pipes[0] = open_pipe(bird.pos.x - state.world.pipe_width + 1.0, bird.pos.y);

        tick(&mut state, &TickInput::default(), 0.05);
        assert_eq!(state.score, 1);
        assert!(state.pipes[0].scored);

        // Steady the bird and step again: no double counting
        state.bird = bird;
        tick(&mut state, &TickInput::default(), 0.05);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_no_score_before_right_edge_passes() {
        let mut state = playing_state();
        let bird = state.bird;
        let step = state.world.pipe_speed * 0.05;
        // Right edge still short of the bird after one step
        state.pipes[0] = open_pipe(bird.pos.x - state.world.pipe_width + step + 5.0, bird.pos.y);

        tick(&mut state, &TickInput::default(), 0.05);
        assert_eq!(state.score, 0);
        assert!(!state.pipes[0].scored);
    }

    #[test]
    fn test_offscreen_pipe_is_evicted_and_window_refilled() {
        let mut state = playing_state();
        let world = state.world;
        state.pipes[0] = Pipe {
            x: -world.pipe_width * 2.0 - EVICT_SLACK - 5.0,
            gap_center_y: 900.0,
            gap_height: 400.0,
            scored: true,
        };

        tick(&mut state, &TickInput::default(), 0.05);

        assert_eq!(state.pipes.len(), PIPE_TARGET);
        let left_bound = -world.pipe_width - EVICT_SLACK;
        assert!(state.pipes.iter().all(|p| p.x + world.pipe_width >= left_bound));
        // The replacement spawned past the right edge
        let last = state.pipes.last().unwrap();
        assert!(last.x >= world.right_spawn_x() - world.pipe_speed * 0.05 - 0.001);
    }

    #[test]
    fn test_window_holds_four_pipes_while_playing() {
        let mut state = playing_state();
        for frame in 0..2000 {
            let flap = frame % 28 == 0;
            tick(&mut state, &TickInput { flap, wall_time: 0.0 }, 0.016);
            if state.phase != GamePhase::Playing {
                break;
            }
            assert_eq!(state.pipes.len(), PIPE_TARGET);
        }
    }

    #[test]
    fn test_pipe_overlap_sets_game_over() {
        let mut state = playing_state();
        let bird = state.bird;
        // Solid wall at the bird's x: gap pushed down near the ground
        state.pipes[0] = Pipe {
            x: bird.pos.x - 10.0,
            gap_center_y: state.world.ground_y() - 100.0,
            gap_height: 150.0,
            scored: false,
        };
        tick(&mut state, &TickInput::default(), 0.0);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_score_is_monotonic() {
        let mut state = playing_state();
        let mut last_score = 0;
        for frame in 0..2000 {
            let flap = frame % 28 == 0;
            tick(&mut state, &TickInput { flap, wall_time: 0.0 }, 0.016);
            assert!(state.score >= last_score);
            last_score = state.score;
            if state.phase != GamePhase::Playing {
                break;
            }
        }
    }

    proptest! {
        #[test]
        fn prop_bird_stays_inside_vertical_bounds(
            steps in proptest::collection::vec((0.0f32..=0.05, any::<bool>()), 1..120),
            seed in any::<u64>(),
        ) {
            let mut state = GameState::new(1000.0, 2000.0, seed);
            state.tap();
            for (dt, flap) in steps {
                tick(&mut state, &TickInput { flap, wall_time: 0.0 }, dt);
                if state.phase != GamePhase::Playing {
                    break;
                }
                prop_assert!(state.bird.pos.y >= state.bird.radius);
                prop_assert!(state.bird.pos.y <= state.world.ground_y() - state.bird.radius);
            }
        }
    }
}
