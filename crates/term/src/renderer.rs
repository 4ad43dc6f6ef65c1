//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are written as runs of changed glyphs against the previously flushed
//! frame. The first frame after [`TerminalRenderer::enter`], and any frame whose
//! size differs from the last one, is a full redraw.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::core::{GameState, Renderer};
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::game_view::GameView;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    entered: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            entered: false,
        }
    }

    /// Switch to raw mode on the alternate screen with the cursor hidden.
    pub fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.entered = true;
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(cursor::Hide)?;
        self.out.queue(terminal::DisableLineWrap)?;
        self.out.flush()?;
        self.last = None;
        Ok(())
    }

    /// Undo [`enter`](Self::enter). Does nothing if the terminal was never entered.
    pub fn exit(&mut self) -> io::Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(terminal::EnableLineWrap)?;
        self.out.queue(cursor::Show)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        self.out.flush()?;
        terminal::disable_raw_mode()
    }

    /// Draw `fb`, then swap it with the previous frame.
    ///
    /// On return `fb` holds stale contents the caller is expected to overwrite.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> io::Result<()> {
        match self.last.take() {
            Some(mut prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                self.diff_redraw(fb, &prev)?;
                std::mem::swap(&mut prev, fb);
                self.last = Some(prev);
            }
            _ => {
                self.full_redraw(fb)?;
                self.last = Some(fb.clone());
            }
        }
        Ok(())
    }

    fn full_redraw(&mut self, fb: &FrameBuffer) -> io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        let mut current = None;
        for y in 0..fb.height() {
            self.out.queue(cursor::MoveTo(0, y))?;
            self.print_run(fb, 0, y, fb.width(), &mut current)?;
        }
        self.finish()
    }

    fn diff_redraw(&mut self, next: &FrameBuffer, prev: &FrameBuffer) -> io::Result<()> {
        let mut current = None;
        for (x, y, len) in changed_runs(prev, next) {
            self.out.queue(cursor::MoveTo(x, y))?;
            self.print_run(next, x, y, len, &mut current)?;
        }
        self.finish()
    }

    fn print_run(
        &mut self,
        fb: &FrameBuffer,
        x: u16,
        y: u16,
        len: u16,
        current: &mut Option<Style>,
    ) -> io::Result<()> {
        for dx in 0..len {
            let glyph = fb.get(x + dx, y).unwrap_or_default();
            if *current != Some(glyph.style) {
                self.apply_style(glyph.style)?;
                *current = Some(glyph.style);
            }
            self.out.queue(Print(glyph.ch))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.flush()
    }

    fn apply_style(&mut self, style: Style) -> io::Result<()> {
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        self.out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        if style.bold {
            self.out.queue(SetAttribute(Attribute::Bold))?;
        }
        Ok(())
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Maximal horizontal runs `(x, y, len)` where `next` differs from `prev`.
///
/// Both buffers must have the same dimensions.
pub fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    debug_assert_eq!((prev.width(), prev.height()), (next.width(), next.height()));
    let mut runs = Vec::new();
    for y in 0..next.height() {
        let mut start = None;
        for x in 0..=next.width() {
            let differs = x < next.width() && prev.get(x, y) != next.get(x, y);
            match (differs, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push((s, y, x - s));
                    start = None;
                }
                _ => {}
            }
        }
    }
    runs
}

/// Connects the pure [`GameView`] to a [`TerminalRenderer`] behind the core
/// [`Renderer`] seam. The framebuffer follows the terminal size every frame.
pub struct TerminalSink<W: Write = io::Stdout> {
    view: GameView,
    terminal: TerminalRenderer<W>,
    fb: FrameBuffer,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self::with_renderer(GameView::default(), TerminalRenderer::new())
    }
}

impl Default for TerminalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn with_renderer(view: GameView, terminal: TerminalRenderer<W>) -> Self {
        Self {
            view,
            terminal,
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn enter(&mut self) -> io::Result<()> {
        self.terminal.enter()
    }

    pub fn exit(&mut self) -> io::Result<()> {
        self.terminal.exit()
    }

    /// Draw `state` into a `width` x `height` frame and flush it.
    pub fn draw_sized(&mut self, state: &GameState, width: u16, height: u16) -> io::Result<()> {
        if self.fb.width() != width || self.fb.height() != height {
            self.fb.reset(width, height);
        }
        self.view.render_into(state, &mut self.fb);
        self.terminal.draw_swap(&mut self.fb)
    }
}

impl<W: Write> Renderer for TerminalSink<W> {
    fn render(&mut self, state: &GameState) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        self.draw_sized(state, width, height)
    }
}
