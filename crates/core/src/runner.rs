//! Frame loop and the seams to its collaborators.
//!
//! One frame is: consume at most one pending action, advance the gravity timer,
//! render. Frames are paced by a fixed sleep. The loop checks for quit or game over
//! at the top of each frame and never blocks on input.

use std::io;
use std::time::Duration;

use log::info;

use crate::game_state::GameState;
use crate::types::{GameAction, FRAME_MS};

/// Non-blocking source of player actions
pub trait InputSource {
    /// Consume at most one pending key. `Ok(None)` when nothing is pending or the
    /// key has no binding.
    fn poll_action(&mut self) -> io::Result<Option<GameAction>>;
}

/// Output sink drawing one frame of the session
pub trait Renderer {
    fn render(&mut self, state: &GameState) -> io::Result<()>;
}

/// Pacing delay between frames
pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

/// [`Clock`] backed by `std::thread::sleep`
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadClock;

impl Clock for ThreadClock {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    GameOver,
    Quit,
}

/// Drives a [`GameState`] frame by frame
#[derive(Debug, Clone, Copy)]
pub struct Runner {
    frame: Duration,
}

impl Runner {
    pub fn new(frame: Duration) -> Self {
        Self { frame }
    }

    /// Run one frame: input, gravity, render.
    pub fn step<I, R>(
        &self,
        state: &mut GameState,
        input: &mut I,
        renderer: &mut R,
    ) -> io::Result<()>
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        if let Some(action) = input.poll_action()? {
            state.apply_action(action);
        }
        state.tick();
        renderer.render(state)
    }

    /// Start the session (if needed) and run frames until quit or game over.
    ///
    /// The first frame is drawn before any input is read.
    pub fn run<I, R, C>(
        &self,
        state: &mut GameState,
        input: &mut I,
        renderer: &mut R,
        clock: &mut C,
    ) -> io::Result<Outcome>
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
        C: Clock + ?Sized,
    {
        state.start();
        renderer.render(state)?;

        let mut frames: u64 = 0;
        while !state.is_finished() {
            self.step(state, input, renderer)?;
            frames += 1;
            if !state.is_finished() {
                clock.sleep(self.frame);
            }
        }

        let outcome = if state.game_over() {
            Outcome::GameOver
        } else {
            Outcome::Quit
        };
        info!(
            "session ended ({:?}) after {} frames: score {} lines {} level {}",
            outcome,
            frames,
            state.score(),
            state.lines(),
            state.level()
        );
        Ok(outcome)
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(Duration::from_millis(FRAME_MS))
    }
}
