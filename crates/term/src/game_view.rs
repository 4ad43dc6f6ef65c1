//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::{PieceKind, BOARD_COLS, BOARD_ROWS};

const PANEL_GAP: u16 = 2;
const PANEL_W: u16 = 18;

const CONTROLS: [&str; 4] = ["A/D  Move", "S    Soft drop", "W    Rotate", "Q    Quit"];

const BORDER: Style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const WELL: Style = Style::new(Rgb::new(90, 90, 100), Rgb::new(30, 30, 40));
const LABEL: Style = Style::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: Style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const HELP: Style = Style::new(Rgb::new(140, 140, 150), Rgb::new(0, 0, 0));
const BANNER: Style = Style::new(Rgb::new(255, 255, 255), Rgb::new(120, 20, 20)).bold();

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the board frame landed in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Top-left corner of the border.
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    /// Left column of the side panel.
    pub panel_x: u16,
}

/// Draws the board, the falling piece and the stats panel.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps squares roughly square.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Position of the board and panel for a viewport; the pair is centered.
    pub fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = BOARD_COLS as u16 * self.cell_w + 2;
        let frame_h = BOARD_ROWS as u16 + 2;
        let total_w = frame_w + PANEL_GAP + PANEL_W;
        let frame_x = viewport.width.saturating_sub(total_w) / 2;
        let frame_y = viewport.height.saturating_sub(frame_h) / 2;
        Layout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            panel_x: frame_x + frame_w + PANEL_GAP,
        }
    }

    /// Render the current game state into a fresh framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, keeping its dimensions.
    pub fn render_into(&self, state: &GameState, fb: &mut FrameBuffer) {
        let viewport = Viewport::new(fb.width(), fb.height());
        fb.reset(viewport.width, viewport.height);
        let layout = self.layout(viewport);

        draw_border(fb, &layout);
        self.draw_board(fb, state, &layout);
        self.draw_active(fb, state, &layout);
        draw_panel(fb, state, &layout);

        if state.game_over() {
            draw_game_over(fb, state.score(), &layout);
        }
    }

    fn draw_board(&self, fb: &mut FrameBuffer, state: &GameState, layout: &Layout) {
        let board = state.board();
        for y in 0..BOARD_ROWS {
            for (x, cell) in board.row(y).iter().enumerate() {
                match cell {
                    Some(kind) => {
                        self.draw_cell(fb, layout, x as u16, y as u16, block_style(*kind))
                    }
                    None => self.fill_cell(fb, layout, x as u16, y as u16, '·', WELL),
                }
            }
        }
    }

    fn draw_active(&self, fb: &mut FrameBuffer, state: &GameState, layout: &Layout) {
        let Some(piece) = state.active() else {
            return;
        };
        let style = block_style(piece.kind);
        for (x, y) in piece.cells() {
            // Rows above the board are hidden.
            if (0..BOARD_COLS as i32).contains(&x) && (0..BOARD_ROWS as i32).contains(&y) {
                self.draw_cell(fb, layout, x as u16, y as u16, style);
            }
        }
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, layout: &Layout, x: u16, y: u16, style: Style) {
        self.fill_cell(fb, layout, x, y, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        x: u16,
        y: u16,
        ch: char,
        style: Style,
    ) {
        let px = layout.frame_x + 1 + x * self.cell_w;
        let py = layout.frame_y + 1 + y;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }
}

fn draw_border(fb: &mut FrameBuffer, layout: &Layout) {
    let Layout {
        frame_x: x,
        frame_y: y,
        frame_w: w,
        frame_h: h,
        ..
    } = *layout;

    fb.put(x, y, '┌', BORDER);
    fb.put(x + w - 1, y, '┐', BORDER);
    fb.put(x, y + h - 1, '└', BORDER);
    fb.put(x + w - 1, y + h - 1, '┘', BORDER);
    for dx in 1..w - 1 {
        fb.put(x + dx, y, '─', BORDER);
        fb.put(x + dx, y + h - 1, '─', BORDER);
    }
    for dy in 1..h - 1 {
        fb.put(x, y + dy, '│', BORDER);
        fb.put(x + w - 1, y + dy, '│', BORDER);
    }
}

fn draw_panel(fb: &mut FrameBuffer, state: &GameState, layout: &Layout) {
    let x = layout.panel_x;
    if x >= fb.width() {
        return;
    }

    let mut y = layout.frame_y + 1;
    for (label, value) in [
        ("SCORE", state.score()),
        ("LINES", state.lines()),
        ("LEVEL", state.level()),
    ] {
        fb.put_str(x, y, label, LABEL);
        fb.put_u32(x, y + 1, value, VALUE);
        y += 3;
    }

    y += 1;
    fb.put_str(x, y, "CONTROLS", LABEL);
    for line in CONTROLS {
        y += 1;
        fb.put_str(x, y, line, HELP);
    }
}

fn draw_game_over(fb: &mut FrameBuffer, score: u32, layout: &Layout) {
    let mid = layout.frame_y + layout.frame_h / 2;
    centered(fb, layout, mid - 1, " GAME OVER ", BANNER);

    let mut line = String::from(" Score: ");
    line.push_str(&score.to_string());
    line.push(' ');
    centered(fb, layout, mid, &line, BANNER);

    centered(fb, layout, mid + 2, " Press any key ", VALUE);
}

fn centered(fb: &mut FrameBuffer, layout: &Layout, y: u16, text: &str, style: Style) {
    let w = text.chars().count() as u16;
    let x = layout.frame_x + layout.frame_w.saturating_sub(w) / 2;
    fb.put_str(x, y, text, style);
}

fn block_style(kind: PieceKind) -> Style {
    let fg = match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    };
    Style::new(fg, WELL.bg)
}
