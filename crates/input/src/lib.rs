//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and provides a
//! non-blocking [`TerminalInput`] implementing the core input seam.

pub mod map;
pub mod source;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::TerminalInput;
