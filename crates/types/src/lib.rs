//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the engine, the input mapping and the terminal view alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn origin**: (4, 0), the top-left corner of the 4x4 piece mask
//!
//! # Timing
//!
//! The game advances in frames. Every frame consumes at most one key and then
//! advances the gravity timer by one; the runner sleeps `FRAME_MS` between frames.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 50 | Default pacing delay between frames |
//! | `BASE_DROP_FRAMES` | 50 | Gravity interval before the level term |
//! | `DROP_FRAMES_PER_LEVEL` | 5 | Frames shaved off per level |
//! | `MIN_DROP_FRAMES` | 5 | Fastest gravity interval |
//!
//! # Scoring
//!
//! - Soft drop: `SOFT_DROP_POINTS` per row descended by the player
//! - Line clear: `cleared² × LINE_CLEAR_BASE × level`
//! - Level: `1 + lines / LINES_PER_LEVEL`
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, BOARD_COLS, BOARD_ROWS};
//!
//! assert_eq!(PieceKind::from_index(1), PieceKind::O);
//! assert_eq!(PieceKind::O.index(), 1);
//! assert_eq!(PieceKind::T.as_str(), "T");
//!
//! assert_eq!(BOARD_COLS, 12);
//! assert_eq!(BOARD_ROWS, 20);
//! ```

/// Board width in cells (12 columns)
pub const BOARD_COLS: usize = 12;

/// Board height in cells (20 rows)
pub const BOARD_ROWS: usize = 20;

/// Side length of a piece mask
pub const MASK_SIZE: usize = 4;

/// Spawn origin column: the mask is centered horizontally
pub const SPAWN_X: i32 = (BOARD_COLS / 2) as i32 - 2;

/// Spawn origin row
pub const SPAWN_Y: i32 = 0;

/// Default delay between frames in milliseconds
pub const FRAME_MS: u64 = 50;

/// Gravity interval at level 0, in frames
pub const BASE_DROP_FRAMES: u32 = 50;

/// Frames removed from the gravity interval per level
pub const DROP_FRAMES_PER_LEVEL: u32 = 5;

/// Lower bound for the gravity interval, in frames
pub const MIN_DROP_FRAMES: u32 = 5;

/// Points per row for a player-initiated soft drop
pub const SOFT_DROP_POINTS: u32 = 1;

/// Base points of a single line clear (before the quadratic and level factors)
pub const LINE_CLEAR_BASE: u32 = 100;

/// Cleared lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Starting level of a session
pub const START_LEVEL: u32 = 1;


/// The seven tetromino piece kinds
///
/// Catalog order is I, O, T, S, Z, J, L; [`PieceKind::index`] follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Number of piece kinds
    pub const COUNT: usize = 7;

    /// All kinds in catalog order
    pub const ALL: [PieceKind; Self::COUNT] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Catalog index in `0..7`
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    /// Piece kind for a catalog index
    ///
    /// Indices wrap modulo 7, so every `usize` maps to a valid kind.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// Single-letter name
    pub fn as_str(self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Player actions that can be applied to the game state
///
/// "No key" is represented as `Option::None` by input sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, scoring one point
    SoftDrop,
    /// Rotate piece 90° in place (no wall kicks)
    Rotate,
    /// End the session
    Quit,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
///
/// Collision and line clearing only look at whether a cell is set; the kind is
/// kept for rendering.
pub type Cell = Option<PieceKind>;
