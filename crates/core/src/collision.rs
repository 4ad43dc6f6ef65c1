//! Collision detection for candidate piece placements.

use crate::board::Board;
use crate::pieces::ShapeMask;
use crate::types::{BOARD_COLS, BOARD_ROWS};

/// Whether `mask` placed with its top-left corner at `(origin_x, origin_y)` is illegal.
///
/// A placement collides if any set cell lands left or right of the board, below the
/// floor, or on an occupied board cell. Cells above the top edge (negative y) are
/// allowed so pieces can enter from above row 0.
pub fn collides(mask: &ShapeMask, origin_x: i32, origin_y: i32, board: &Board) -> bool {
    mask.cells().any(|(px, py)| {
        let x = origin_x + px;
        let y = origin_y + py;

        if x < 0 || x >= BOARD_COLS as i32 || y >= BOARD_ROWS as i32 {
            return true;
        }

        y >= 0 && board.is_occupied(x, y)
    })
}
