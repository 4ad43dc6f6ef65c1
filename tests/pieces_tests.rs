//! Piece catalog, rotation and collision tests

use blockfall::core::{collides, get_shape, rotate, try_rotate, Board, ShapeMask, SimpleRng};
use blockfall::types::{PieceKind, BOARD_COLS, BOARD_ROWS};

fn cells(mask: &ShapeMask) -> Vec<(i32, i32)> {
    mask.cells().collect()
}

/// The mask and its three successive rotations.
fn orientations(kind: PieceKind) -> [ShapeMask; 4] {
    let m0 = *get_shape(kind);
    let m1 = rotate(&m0);
    let m2 = rotate(&m1);
    let m3 = rotate(&m2);
    [m0, m1, m2, m3]
}

// ============== Catalog ==============

#[test]
fn test_catalog_masks() {
    assert_eq!(cells(get_shape(PieceKind::I)), [(0, 1), (1, 1), (2, 1), (3, 1)]);
    assert_eq!(cells(get_shape(PieceKind::O)), [(1, 1), (2, 1), (1, 2), (2, 2)]);
    assert_eq!(cells(get_shape(PieceKind::T)), [(1, 1), (0, 2), (1, 2), (2, 2)]);
    assert_eq!(cells(get_shape(PieceKind::S)), [(1, 1), (2, 1), (0, 2), (1, 2)]);
    assert_eq!(cells(get_shape(PieceKind::Z)), [(0, 1), (1, 1), (1, 2), (2, 2)]);
    assert_eq!(cells(get_shape(PieceKind::J)), [(0, 1), (0, 2), (1, 2), (2, 2)]);
    assert_eq!(cells(get_shape(PieceKind::L)), [(2, 1), (0, 2), (1, 2), (2, 2)]);
}

#[test]
fn test_catalog_is_immutable_across_lookups() {
    for kind in PieceKind::ALL {
        let first = *get_shape(kind);
        let _ = rotate(get_shape(kind));
        assert_eq!(*get_shape(kind), first);
    }
}

// ============== Rotation ==============

#[test]
fn test_four_rotations_are_identity() {
    for kind in PieceKind::ALL {
        let [m0, _, _, m3] = orientations(kind);
        assert_eq!(rotate(&m3), m0, "{kind:?}");
    }
}

#[test]
fn test_four_rotations_are_identity_for_arbitrary_masks() {
    let mut rng = SimpleRng::new(31337);
    for _ in 0..200 {
        let mut bits = [[0u8; 4]; 4];
        for cell in bits.iter_mut().flatten() {
            *cell = rng.next_range(2) as u8;
        }
        let mask = ShapeMask::from_bits(bits);

        let once = rotate(&mask);
        assert_eq!(once.count(), mask.count());
        assert_eq!(rotate(&rotate(&rotate(&once))), mask, "{bits:?}");

        // Each step is rotated[y][x] = mask[3 - x][y].
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(once.is_set(x, y), bits[3 - x][y] == 1, "{bits:?} at ({x}, {y})");
            }
        }
    }
}

#[test]
fn test_rotation_preserves_cell_count() {
    for kind in PieceKind::ALL {
        for mask in orientations(kind) {
            assert_eq!(mask.count(), 4, "{kind:?}");
        }
    }
}

#[test]
fn test_i_rotates_to_column_two() {
    let vertical = rotate(get_shape(PieceKind::I));
    assert_eq!(cells(&vertical), [(2, 0), (2, 1), (2, 2), (2, 3)]);
}

#[test]
fn test_o_rotation_is_fixed_point() {
    let o = get_shape(PieceKind::O);
    assert_eq!(rotate(o), *o);
}

#[test]
fn test_t_rotation() {
    let t = rotate(get_shape(PieceKind::T));
    assert_eq!(cells(&t), [(1, 0), (1, 1), (2, 1), (1, 2)]);
}

#[test]
fn test_try_rotate_checks_candidate_at_same_origin() {
    let i = get_shape(PieceKind::I);
    let board = Board::new();

    // Vertical I at x = 10 would land on column 12.
    assert!(try_rotate(i, 10, 5, |m, x, y| collides(m, x, y, &board)).is_none());
    assert_eq!(
        try_rotate(i, 9, 5, |m, x, y| collides(m, x, y, &board)),
        Some(rotate(i))
    );
}

// ============== Collision ==============

#[test]
fn test_collision_on_empty_board_is_bounds_only() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        for mask in orientations(kind) {
            for oy in -5..=BOARD_ROWS as i32 + 1 {
                for ox in -4..=BOARD_COLS as i32 {
                    let outside = mask.cells().any(|(dx, dy)| {
                        let (x, y) = (ox + dx, oy + dy);
                        x < 0 || x >= BOARD_COLS as i32 || y >= BOARD_ROWS as i32
                    });
                    assert_eq!(
                        collides(&mask, ox, oy, &board),
                        outside,
                        "{kind:?} at ({ox}, {oy})"
                    );
                }
            }
        }
    }
}

#[test]
fn test_collision_with_occupied_cell() {
    let mut board = Board::new();
    board.set(5, 10, Some(PieceKind::Z));
    let o = get_shape(PieceKind::O);

    // O covers origin + (1..=2, 1..=2).
    assert!(collides(o, 4, 9, &board));
    assert!(collides(o, 3, 8, &board));
    assert!(!collides(o, 5, 9, &board));
    assert!(!collides(o, 4, 10, &board));
}

#[test]
fn test_cells_above_top_never_hit_blocks() {
    let mut board = Board::new();
    board.fill_row(0, PieceKind::L, &[2]);
    let vertical_i = rotate(get_shape(PieceKind::I));

    // Column 2 through the hole at row 0; rows -3..=-1 are above the board.
    assert!(!collides(&vertical_i, 0, -3, &board));
    assert!(!collides(&vertical_i, 0, -2, &board));
    // One column over, row 0 is filled.
    assert!(collides(&vertical_i, 1, -3, &board));
}

#[test]
fn test_locked_pieces_never_overlap() {
    let mut board = Board::new();
    let mut placed = 0;
    for kind in PieceKind::ALL {
        for oy in 0..BOARD_ROWS as i32 {
            for ox in -1..BOARD_COLS as i32 {
                let mask = get_shape(kind);
                if !collides(mask, ox, oy, &board) {
                    let before = board.filled_count();
                    board.lock_piece(mask, ox, oy, kind);
                    assert_eq!(board.filled_count(), before + 4);
                    placed += 1;
                }
            }
        }
    }
    assert!(placed > 0);
}
