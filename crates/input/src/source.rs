//! Non-blocking keyboard source backed by crossterm.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};

use crate::core::InputSource;
use crate::map::handle_key_event;
use crate::types::GameAction;

/// Reads at most one terminal event per poll and never waits for input.
///
/// Requires the terminal to be in raw mode so keys arrive without Enter.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }

    /// Block until any key is pressed.
    pub fn wait_for_key(&mut self) -> io::Result<()> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }

    /// Throw away everything already queued.
    pub fn drain(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            event::read()?;
        }
        Ok(())
    }
}

impl InputSource for TerminalInput {
    fn poll_action(&mut self) -> io::Result<Option<GameAction>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) => Ok(handle_key_event(key)),
            _ => Ok(None),
        }
    }
}
