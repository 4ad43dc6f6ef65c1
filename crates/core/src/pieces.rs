//! Pieces module - tetromino shape masks and the rotation transform
//!
//! Every piece is a 4x4 occupancy mask. Rotation is a fixed 90° transform of the
//! whole mask (`rotated[y][x] = mask[3 - x][y]`) with no wall kicks: a rotation
//! either fits at the current origin or is rejected.

use crate::types::{PieceKind, MASK_SIZE};

/// 4x4 occupancy grid, indexed `[y][x]` with row 0 on top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMask {
    rows: [[bool; MASK_SIZE]; MASK_SIZE],
}

impl ShapeMask {
    /// Build a mask from 0/1 rows.
    pub const fn from_bits(bits: [[u8; MASK_SIZE]; MASK_SIZE]) -> Self {
        let mut rows = [[false; MASK_SIZE]; MASK_SIZE];
        let mut y = 0;
        while y < MASK_SIZE {
            let mut x = 0;
            while x < MASK_SIZE {
                rows[y][x] = bits[y][x] != 0;
                x += 1;
            }
            y += 1;
        }
        Self { rows }
    }

    /// Whether the cell at mask-local `(x, y)` is occupied.
    ///
    /// Out-of-range coordinates are reported as empty.
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        x < MASK_SIZE && y < MASK_SIZE && self.rows[y][x]
    }

    /// Mask-local coordinates of every occupied cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..MASK_SIZE).flat_map(move |y| {
            (0..MASK_SIZE)
                .filter(move |&x| self.rows[y][x])
                .map(move |x| (x as i32, y as i32))
        })
    }

    /// Number of occupied cells
    pub fn count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&set| set).count()
    }

    /// Copy of this mask turned 90°
    pub fn rotated(&self) -> Self {
        rotate(self)
    }
}

/// Shape catalog in `PieceKind` index order
const CATALOG: [ShapeMask; PieceKind::COUNT] = [
    // I
    ShapeMask::from_bits([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]),
    // O
    ShapeMask::from_bits([[0, 0, 0, 0], [0, 1, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0]]),
    // T
    ShapeMask::from_bits([[0, 0, 0, 0], [0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0]]),
    // S
    ShapeMask::from_bits([[0, 0, 0, 0], [0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0]]),
    // Z
    ShapeMask::from_bits([[0, 0, 0, 0], [1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0]]),
    // J
    ShapeMask::from_bits([[0, 0, 0, 0], [1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0]]),
    // L
    ShapeMask::from_bits([[0, 0, 0, 0], [0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0]]),
];

/// Get the spawn mask for a piece kind
pub fn get_shape(kind: PieceKind) -> &'static ShapeMask {
    &CATALOG[kind.index()]
}

/// Rotate a mask by 90°: `rotated[y][x] = mask[3 - x][y]`
pub fn rotate(mask: &ShapeMask) -> ShapeMask {
    let mut rows = [[false; MASK_SIZE]; MASK_SIZE];
    for (y, row) in rows.iter_mut().enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            *cell = mask.rows[MASK_SIZE - 1 - x][y];
        }
    }
    ShapeMask { rows }
}

/// Try to rotate a mask in place at origin `(x, y)`
///
/// The rotation is computed on a copy and returned only if `collides` accepts it
/// at the same origin. Returns `None` when the rotated mask would collide; the
/// caller keeps its current mask.
pub fn try_rotate(
    mask: &ShapeMask,
    x: i32,
    y: i32,
    collides: impl Fn(&ShapeMask, i32, i32) -> bool,
) -> Option<ShapeMask> {
    let candidate = rotate(mask);
    if collides(&candidate, x, y) {
        None
    } else {
        Some(candidate)
    }
}
