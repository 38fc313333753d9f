//! Frame loop
//!
//! A dedicated thread drives update + render at a fixed cadence. The host
//! talks to it through atomically visible commands: tap, pause/resume, and
//! viewport changes, all consumed at the start of the next iteration. The
//! loop thread is the sole owner of the `GameState`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crate::consts::{FRAME_INTERVAL, IDLE_POLL, MAX_FRAME_DT, PAUSE_WAIT};
use crate::render::{FrameSnapshot, Renderer};
use crate::sim::{GameState, TickInput, tick};

/// Commands and flags shared between the host and the loop thread
struct Shared {
    /// The loop advances simulation only while set
    running: AtomicBool,
    /// Terminates the loop thread (set on drop)
    shutdown: AtomicBool,
    /// One-shot: a tap arrived since the last update
    flap: AtomicBool,
    /// Pending world reinitialization
    viewport: Mutex<Option<(f32, f32)>>,
    /// True while the loop is parked; `pause()` waits on this
    idle: Mutex<bool>,
    idle_cv: Condvar,
}

/// Host handle to the game loop
pub struct FrameLoop {
    shared: Arc<Shared>,
    seed: u64,
    renderer: Option<Box<dyn Renderer>>,
    handle: Option<JoinHandle<()>>,
}

impl FrameLoop {
    /// Create a stopped loop. Call `set_viewport` once the drawable size is
    /// known, then `resume` to start scheduling frames.
    pub fn new(renderer: Box<dyn Renderer>, seed: u64) -> Self {
        Self {
            shared: Arc::new(Shared {
                running: AtomicBool::new(false),
                shutdown: AtomicBool::new(false),
                flap: AtomicBool::new(false),
                viewport: Mutex::new(None),
                idle: Mutex::new(true),
                idle_cv: Condvar::new(),
            }),
            seed,
            renderer: Some(renderer),
            handle: None,
        }
    }

    /// Queue a primary tap; consumed at the start of the next update. A tap
    /// delivered while paused applies after resume.
    pub fn tap(&self) {
        self.shared.flap.store(true, Ordering::SeqCst);
    }

    /// Queue a full world reinitialization for the given drawable size,
    /// applied at the start of the next live iteration.
    pub fn set_viewport(&self, width: f32, height: f32) {
        debug_assert!(width > 0.0 && height > 0.0, "viewport must be positive");
        if let Ok(mut pending) = self.shared.viewport.lock() {
            *pending = Some((width, height));
        }
    }

    /// Start (or restart) scheduling frames. Spawns the loop thread on the
    /// first call; afterwards it only flips the running flag.
    pub fn resume(&mut self) {
        self.shared.running.store(true, Ordering::SeqCst);
        if self.handle.is_none()
            && let Some(renderer) = self.renderer.take()
        {
            let shared = Arc::clone(&self.shared);
            let seed = self.seed;
            self.handle = Some(thread::spawn(move || run_loop(&shared, renderer, seed)));
            log::info!("frame loop started (seed {seed})");
        }
    }

    /// Stop scheduling frames and wait (bounded) for the in-flight iteration
    /// to finish. Best-effort: a timeout or poisoned lock is swallowed.
    pub fn pause(&self) {
        self.shared.running.store(false, Ordering::SeqCst);
        let deadline = Instant::now() + PAUSE_WAIT;
        if let Ok(mut idle) = self.shared.idle.lock() {
            while !*idle {
                let timeout = deadline.saturating_duration_since(Instant::now());
                if timeout.is_zero() {
                    log::warn!("pause timed out waiting for the loop to park");
                    break;
                }
                match self.shared.idle_cv.wait_timeout(idle, timeout) {
                    Ok((guard, _)) => idle = guard,
                    Err(_) => return,
                }
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.shared.shutdown.store(true, Ordering::SeqCst);
        self.shared.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn run_loop(shared: &Shared, mut renderer: Box<dyn Renderer>, seed: u64) {
    let start = Instant::now();
    let mut state: Option<GameState> = None;
    let mut last_frame = Instant::now();

    while !shared.shutdown.load(Ordering::SeqCst) {
        if !shared.running.load(Ordering::SeqCst) {
            set_idle(shared, true);
            thread::sleep(IDLE_POLL);
            // A stall while paused must not turn into a physics step
            last_frame = Instant::now();
            continue;
        }
        set_idle(shared, false);

        if let Some((w, h)) = shared.viewport.lock().ok().and_then(|mut v| v.take()) {
            match state.as_mut() {
                Some(s) => s.reinitialize(w, h),
                None => state = Some(GameState::new(w, h, seed)),
            }
            log::info!("world initialized at {w}x{h}");
        }

        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32().min(MAX_FRAME_DT);
        last_frame = now;

        let Some(state) = state.as_mut() else {
            // No viewport yet: nothing to simulate or draw
            thread::sleep(IDLE_POLL);
            continue;
        };

        let input = TickInput {
            flap: shared.flap.swap(false, Ordering::SeqCst),
            wall_time: start.elapsed().as_secs_f64(),
        };
        tick(state, &input, dt);

        if let Err(err) = renderer.render(&FrameSnapshot::capture(state)) {
            log::debug!("frame skipped: {err}");
        }

        thread::sleep(FRAME_INTERVAL);
    }
    set_idle(shared, true);
}

fn set_idle(shared: &Shared, value: bool) {
    if let Ok(mut idle) = shared.idle.lock()
        && *idle != value
    {
        *idle = value;
        if value {
            shared.idle_cv.notify_all();
        }
    }
}
