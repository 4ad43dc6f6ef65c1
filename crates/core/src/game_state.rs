//! Game state module - manages the complete game session
//!
//! This module ties together the board, pieces, RNG and scoring. It owns the active
//! piece, the gravity timer, score/lines/level and the game-over flag.
//!
//! Lifecycle: `Spawning` until [`GameState::start`], then `Falling` until a freshly
//! spawned piece collides, which moves the session to the terminal `GameOver` phase.
//! Locking, line clearing and the follow-up spawn happen synchronously inside the
//! gravity tick that found the piece blocked.

use log::{debug, info};

use crate::collision::collides;
use crate::pieces::{get_shape, try_rotate, ShapeMask};
use crate::rng::PieceRandomizer;
use crate::scoring::{drop_interval_frames, level_for_lines, line_clear_score, soft_drop_score};
use crate::types::{GameAction, PieceKind, SPAWN_X, SPAWN_Y, START_LEVEL};
use crate::Board;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Current (possibly rotated) mask
    pub mask: ShapeMask,
    /// Board column of the mask's left edge
    pub x: i32,
    /// Board row of the mask's top edge; may be negative
    pub y: i32,
}

impl ActivePiece {
    /// Create a new piece of `kind` at the spawn origin
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            mask: *get_shape(kind),
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Check if the piece collides with the board at its current origin
    pub fn collides(&self, board: &Board) -> bool {
        collides(&self.mask, self.x, self.y, board)
    }

    /// Absolute board coordinates of the occupied cells
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.mask.cells().map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Observable session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created but no piece spawned yet
    Spawning,
    /// A piece is falling and accepts input
    Falling,
    /// A spawned piece collided; terminal
    GameOver,
}

/// Summary of one lock + clear cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub line_clear_score: u32,
    /// Level after the clear was applied
    pub level: u32,
    pub leveled_up: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    randomizer: PieceRandomizer,
    phase: Phase,
    score: u32,
    level: u32,
    lines: u32,
    /// Frames since the last gravity tick
    drop_timer: u32,
    /// Frames between gravity ticks, refreshed whenever gravity fires
    drop_interval: u32,
    quit_requested: bool,
    pieces_spawned: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a new game on an empty board with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_board(seed, Board::new())
    }

    /// Create a new game on a prepared board
    pub fn with_board(seed: u32, board: Board) -> Self {
        Self {
            board,
            active: None,
            randomizer: PieceRandomizer::new(seed),
            phase: Phase::Spawning,
            score: 0,
            level: START_LEVEL,
            lines: 0,
            drop_timer: 0,
            drop_interval: drop_interval_frames(START_LEVEL),
            quit_requested: false,
            pieces_spawned: 0,
            last_event: None,
        }
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.phase != Phase::Spawning {
            return;
        }
        self.spawn_piece();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Whether the frame loop should stop
    pub fn is_finished(&self) -> bool {
        self.game_over() || self.quit_requested
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval(&self) -> u32 {
        self.drop_interval
    }

    pub fn drop_timer(&self) -> u32 {
        self.drop_timer
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn seed(&self) -> u32 {
        self.randomizer.seed()
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Spawn a new randomly chosen piece
    pub fn spawn_piece(&mut self) -> bool {
        let kind = self.randomizer.next_kind();
        self.spawn(kind)
    }

    /// Spawn a piece of `kind` at the spawn origin, replacing the active piece
    ///
    /// Returns false and ends the game if the piece collides where it spawns. The
    /// colliding piece stays active so it can still be drawn.
    pub fn spawn(&mut self, kind: PieceKind) -> bool {
        if self.game_over() {
            return false;
        }

        let piece = ActivePiece::new(kind);
        self.active = Some(piece);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);

        if piece.collides(&self.board) {
            self.phase = Phase::GameOver;
            info!(
                "game over: {} blocked at spawn, score {} lines {} level {}",
                kind.as_str(),
                self.score,
                self.lines,
                self.level
            );
            return false;
        }

        debug!("spawned {} (piece #{})", kind.as_str(), self.pieces_spawned);
        self.phase = Phase::Falling;
        true
    }

    /// Try to move the active piece; illegal moves are no-ops
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if collides(&active.mask, active.x + dx, active.y + dy, &self.board) {
            return false;
        }

        self.active = Some(ActivePiece {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        });
        true
    }

    /// Try to rotate the active piece in place (no wall kicks)
    pub fn try_rotate(&mut self) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let board = &self.board;
        let rotated = try_rotate(&active.mask, active.x, active.y, |mask, x, y| {
            collides(mask, x, y, board)
        });

        match rotated {
            Some(mask) => {
                self.active = Some(ActivePiece { mask, ..active });
                true
            }
            None => false,
        }
    }

    /// Player soft drop: one row down for one point
    ///
    /// A blocked soft drop does nothing; only gravity locks pieces.
    pub fn soft_drop(&mut self) -> bool {
        let moved = self.try_move(0, 1);
        if moved {
            self.score += soft_drop_score(1);
        }
        moved
    }

    /// Automatic descent: move down one row, or lock, clear and spawn when blocked.
    ///
    /// Returns true if the piece moved down.
    pub fn apply_gravity(&mut self) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        if self.try_move(0, 1) {
            return true;
        }
        self.lock_piece();
        false
    }

    /// Lock the active piece onto the board, clear lines and spawn the next piece
    pub fn lock_piece(&mut self) {
        if self.phase != Phase::Falling {
            return;
        }
        let Some(active) = self.active.take() else {
            return;
        };

        self.board
            .lock_piece(&active.mask, active.x, active.y, active.kind);

        let cleared = self.board.clear_lines();
        let previous_level = self.level;
        let mut points = 0;
        if cleared > 0 {
            points = line_clear_score(cleared, self.level);
            self.score += points;
            self.lines += cleared as u32;
            self.level = level_for_lines(self.lines);
        }

        let event = LockEvent {
            kind: active.kind,
            lines_cleared: cleared as u32,
            line_clear_score: points,
            level: self.level,
            leveled_up: self.level > previous_level,
        };
        debug!(
            "locked {} at ({}, {}), cleared {} for {} points",
            active.kind.as_str(),
            active.x,
            active.y,
            cleared,
            points
        );
        if event.leveled_up {
            info!("level up: {} (lines {})", self.level, self.lines);
        }
        self.last_event = Some(event);

        self.spawn_piece();
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Advance the gravity timer by one frame
    ///
    /// When the timer reaches the drop interval, gravity is applied and the interval
    /// is recomputed from the (possibly new) level. Returns true if gravity fired.
    pub fn tick(&mut self) -> bool {
        if self.phase != Phase::Falling || self.quit_requested {
            return false;
        }

        self.drop_timer += 1;
        if self.drop_timer < self.drop_interval {
            return false;
        }

        self.apply_gravity();
        self.drop_timer = 0;
        self.drop_interval = drop_interval_frames(self.level);
        true
    }

    /// Apply a player action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.try_rotate(),
            GameAction::Quit => {
                self.quit_requested = true;
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
