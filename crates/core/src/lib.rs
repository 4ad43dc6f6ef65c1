//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules and state of the falling-block game. It has no
//! dependencies on terminals or keyboards; those are reached through the traits
//! in [`runner`].
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven 4x4 shape masks and the 90° rotation transform
//! - [`board`]: 12x20 grid, piece locking and line clearing
//! - [`collision`]: placement legality of a mask at an origin
//! - [`rng`]: seedable uniform piece selection
//! - [`scoring`]: line clear points, level and gravity cadence
//! - [`game_state`]: the session state machine
//! - [`runner`]: frame loop over input, renderer and clock collaborators
//!
//! # Game Rules
//!
//! - Pieces spawn at the top center; a spawn that collides ends the game
//! - Rotation happens in place with no wall kicks; a blocked rotation is ignored
//! - Soft drop scores one point per row
//! - Clearing `n` lines at once scores `n² × 100 × level`
//! - The level is `1 + lines / 10`; gravity fires every `max(5, 50 − 5 × level)` frames
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{GameAction, PieceKind};
//!
//! let mut game = GameState::new(12345);
//! game.spawn(PieceKind::O);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::SoftDrop);
//!
//! assert_eq!(game.score(), 1);
//! assert_eq!(game.active().unwrap().x, 5);
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod runner;
pub mod scoring;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::collides;
pub use game_state::{ActivePiece, GameState, LockEvent, Phase};
pub use pieces::{get_shape, rotate, try_rotate, ShapeMask};
pub use rng::{PieceRandomizer, SimpleRng};
pub use runner::{Clock, InputSource, Outcome, Renderer, Runner, ThreadClock};
pub use scoring::{drop_interval_frames, level_for_lines, line_clear_score, soft_drop_score};
