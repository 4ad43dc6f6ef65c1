use blockfall::core::{Board, GameState};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{GameAction, PieceKind};

fn rendered(state: &GameState) -> (GameView, FrameBuffer) {
    let view = GameView::default();
    let fb = view.render(state, Viewport::new(80, 24));
    (view, fb)
}

#[test]
fn term_view_renders_border_corners() {
    let state = GameState::new(1);
    let (view, fb) = rendered(&state);
    let l = view.layout(Viewport::new(80, 24));

    // 12 cells x 2 columns + border = 26 wide; 20 rows + border = 22 tall.
    let (right, bottom) = (l.frame_x + 25, l.frame_y + 21);
    assert_eq!(fb.get(l.frame_x, l.frame_y).unwrap().ch, '┌');
    assert_eq!(fb.get(right, l.frame_y).unwrap().ch, '┐');
    assert_eq!(fb.get(l.frame_x, bottom).unwrap().ch, '└');
    assert_eq!(fb.get(right, bottom).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut board = Board::new();
    board.set(0, 19, Some(PieceKind::I));
    let state = GameState::with_board(1, board);
    let (view, fb) = rendered(&state);
    let l = view.layout(Viewport::new(80, 24));

    let (x0, y0) = (l.frame_x + 1, l.frame_y + 1 + 19);
    assert_eq!(fb.get(x0, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_side_panel_tracks_score() {
    let mut state = GameState::new(1);
    state.spawn(PieceKind::T);
    for _ in 0..3 {
        state.apply_action(GameAction::SoftDrop);
    }
    let (view, fb) = rendered(&state);
    let l = view.layout(Viewport::new(80, 24));

    let label_row = (0..fb.height())
        .find(|&y| fb.row_text(y).contains("SCORE"))
        .unwrap();
    let value: String = fb
        .row_text(label_row + 1)
        .chars()
        .skip(l.panel_x as usize)
        .collect();
    assert_eq!(value.trim(), "3");
    assert!(fb.contains_text("LINES"));
    assert!(fb.contains_text("LEVEL"));
    assert!(fb.contains_text("CONTROLS"));
}

#[test]
fn term_view_draws_rotated_active_piece() {
    let mut state = GameState::new(1);
    state.spawn(PieceKind::I);
    state.apply_action(GameAction::Rotate);

    let (view, fb) = rendered(&state);
    let l = view.layout(Viewport::new(80, 24));
    // Vertical I in column 6, rows 0..=3, just under the top border.
    let col = l.frame_x + 1 + 6 * 2;
    assert_eq!(fb.get(col, l.frame_y).unwrap().ch, '─');
    for y in 0..4 {
        assert_eq!(fb.get(col, l.frame_y + 1 + y).unwrap().ch, '█');
    }
}

#[test]
fn term_view_game_over_overlay() {
    let mut board = Board::new();
    board.fill_row(1, PieceKind::T, &[0]);
    board.fill_row(2, PieceKind::T, &[0]);
    let mut state = GameState::with_board(1, board);
    state.start();
    assert!(state.game_over());

    let (_, fb) = rendered(&state);
    assert!(fb.contains_text("GAME OVER"));
    assert!(fb.contains_text("Score: 0"));
    assert!(fb.contains_text("Press any key"));
}
