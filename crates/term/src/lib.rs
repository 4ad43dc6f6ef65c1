//! Terminal rendering for the falling-block game.
//!
//! The view draws a [`core::GameState`] into a plain framebuffer with no I/O; the
//! renderer flushes that framebuffer through crossterm, writing only what changed.
//! Board cells are two columns wide to offset the terminal glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Layout, Viewport};
pub use renderer::{changed_runs, TerminalRenderer, TerminalSink};
