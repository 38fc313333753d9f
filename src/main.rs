//! Flap Dash entry point
//!
//! Headless demo: drives the frame loop with scripted taps and logs the run.
//! Real hosts implement `Renderer` over an actual surface and wire taps,
//! pause/resume, and viewport callbacks into the same `FrameLoop` handle.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use flap_dash::render::{FrameSnapshot, RenderError, Renderer};
use flap_dash::runner::FrameLoop;

/// Logs state transitions instead of drawing; stands in for a host surface
struct ConsoleRenderer {
    last_score: u32,
    was_over: bool,
}

impl Renderer for ConsoleRenderer {
    fn render(&mut self, frame: &FrameSnapshot) -> Result<(), RenderError> {
        if frame.score != self.last_score {
            log::info!("score: {}", frame.score);
            self.last_score = frame.score;
        }
        if frame.game_over && !self.was_over {
            match serde_json::to_string(frame) {
                Ok(json) => log::info!("game over: {json}"),
                Err(err) => log::warn!("snapshot serialization failed: {err}"),
            }
        }
        self.was_over = frame.game_over;
        Ok(())
    }
}

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    log::info!("flap-dash demo starting (seed {seed})");

    let renderer = ConsoleRenderer {
        last_score: 0,
        was_over: false,
    };
    let mut game = FrameLoop::new(Box::new(renderer), seed);
    game.set_viewport(1080.0, 1920.0);
    game.resume();

    // Scripted session: the first tap starts the run, the rest keep the bird
    // airborne long enough to meet a few pipes. A crash mid-script simply
    // restarts on the next tap.
    for _ in 0..12 {
        game.tap();
        thread::sleep(Duration::from_millis(450));
    }

    game.pause();
    log::info!("flap-dash demo done");
}
