//! TerminalRenderer: puts framebuffers on the real terminal.
//!
//! A frame is painted in full when nothing is on screen yet or the size
//! changed. Otherwise only the horizontal runs that differ from the frame
//! already shown are repainted.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

const BELL: &[u8] = b"\x07";

pub struct TerminalRenderer {
    out: io::Stdout,
    /// Frame currently on screen, `None` until the first paint.
    shown: Option<FrameBuffer>,
    scratch: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            shown: None,
            scratch: Vec::with_capacity(32 * 1024),
        }
    }

    /// Raw mode, alternate screen and mouse reporting.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.scratch.clear();
        queue!(
            self.scratch,
            terminal::EnterAlternateScreen,
            terminal::DisableLineWrap,
            cursor::Hide,
            EnableMouseCapture,
        )?;
        self.shown = None;
        self.send()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.scratch.clear();
        queue!(
            self.scratch,
            DisableMouseCapture,
            ResetColor,
            SetAttribute(Attribute::Reset),
            cursor::Show,
            terminal::EnableLineWrap,
            terminal::LeaveAlternateScreen,
        )?;
        self.send()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn bell(&mut self) -> Result<()> {
        self.scratch.clear();
        self.scratch.extend_from_slice(BELL);
        self.send()
    }

    /// Forget what is on screen so the next frame is painted in full.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `fb`.
    ///
    /// On return `fb` holds the previously shown frame (or a blank one of
    /// the same size), ready to be drawn over for the next call.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.scratch.clear();
        let mut spare = match self.shown.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                paint_changes(&prev, fb, &mut self.scratch)?;
                prev
            }
            Some(mut prev) => {
                paint_full(fb, &mut self.scratch)?;
                prev.resize(fb.width(), fb.height());
                prev
            }
            None => {
                paint_full(fb, &mut self.scratch)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.send()?;

        std::mem::swap(&mut spare, fb);
        self.shown = Some(spare);
        Ok(())
    }

    fn send(&mut self) -> Result<()> {
        self.out.write_all(&self.scratch)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Queue a clear followed by every cell of `fb` into `out`.
pub fn paint_full(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    queue!(out, terminal::Clear(terminal::ClearType::All))?;
    let mut painter = Painter::new(out);
    for y in 0..fb.height() {
        painter.move_to(0, y)?;
        for &cell in fb.row(y) {
            painter.cell(cell)?;
        }
    }
    painter.finish()
}

/// Queue only the cells of `next` that differ from `prev` into `out`.
///
/// Both frames must have the same size; a size mismatch repaints every row.
pub fn paint_changes(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut painter = Painter::new(out);
    for run in changed_runs(prev, next) {
        painter.move_to(run.x, run.y)?;
        let row = next.row(run.y);
        for &cell in &row[run.x as usize..(run.x + run.len) as usize] {
            painter.cell(cell)?;
        }
    }
    painter.finish()
}

/// Horizontal stretch of changed cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Run {
    x: u16,
    y: u16,
    len: u16,
}

fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<Run> {
    let same_size = prev.width() == next.width() && prev.height() == next.height();
    let mut runs = Vec::new();

    for y in 0..next.height() {
        if !same_size {
            runs.push(Run { x: 0, y, len: next.width() });
            continue;
        }

        let mut open: Option<u16> = None;
        for (x, (a, b)) in prev.row(y).iter().zip(next.row(y)).enumerate() {
            let x = x as u16;
            match (open, a != b) {
                (None, true) => open = Some(x),
                (Some(start), false) => {
                    runs.push(Run { x: start, y, len: x - start });
                    open = None;
                }
                _ => {}
            }
        }
        if let Some(start) = open {
            runs.push(Run { x: start, y, len: next.width() - start });
        }
    }
    runs
}

/// Writes cells, emitting style commands only when the style changes.
struct Painter<'a> {
    out: &'a mut Vec<u8>,
    pen: Option<CellStyle>,
}

impl<'a> Painter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, pen: None }
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        queue!(self.out, cursor::MoveTo(x, y))?;
        Ok(())
    }

    fn cell(&mut self, cell: Cell) -> Result<()> {
        if self.pen != Some(cell.style) {
            let style = cell.style;
            queue!(
                self.out,
                SetAttribute(Attribute::Reset),
                SetForegroundColor(color(style.fg)),
                SetBackgroundColor(color(style.bg)),
            )?;
            if style.bold {
                queue!(self.out, SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                queue!(self.out, SetAttribute(Attribute::Dim))?;
            }
            self.pen = Some(style);
        }
        queue!(self.out, Print(cell.ch))?;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        queue!(self.out, ResetColor, SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyphs(out: &[u8]) -> String {
        String::from_utf8_lossy(out).into_owned()
    }

    #[test]
    fn full_paint_prints_every_glyph() {
        let mut fb = FrameBuffer::new(2, 2);
        let style = CellStyle::default();
        fb.set(0, 0, Cell { ch: 'S', style });
        fb.set(1, 1, Cell { ch: 'O', style });

        let mut out = Vec::new();
        paint_full(&fb, &mut out).unwrap();
        let text = glyphs(&out);
        assert!(text.contains('S'));
        assert!(text.contains('O'));
    }

    #[test]
    fn identical_frames_paint_no_glyphs() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(0, 0, "SOS", CellStyle::default());

        let mut out = Vec::new();
        paint_changes(&fb, &fb, &mut out).unwrap();
        assert!(!glyphs(&out).contains('S'));
        assert_eq!(color(Rgb::new(1, 2, 3)), Color::Rgb { r: 1, g: 2, b: 3 });
    }

    #[test]
    fn adjacent_changes_form_one_run() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);

        // A highlighted piece glyph and a change touching the right edge.
        for x in 1..=3 {
            b.set(x, 0, Cell { ch: 'O', style });
        }
        b.set(5, 1, Cell { ch: 'S', style });

        assert_eq!(
            changed_runs(&a, &b),
            vec![Run { x: 1, y: 0, len: 3 }, Run { x: 5, y: 1, len: 1 }]
        );
    }

    #[test]
    fn resized_frame_repaints_every_row() {
        let a = FrameBuffer::new(2, 1);
        let b = FrameBuffer::new(4, 2);
        assert_eq!(
            changed_runs(&a, &b),
            vec![Run { x: 0, y: 0, len: 4 }, Run { x: 0, y: 1, len: 4 }]
        );
    }

    #[test]
    fn style_is_sent_once_per_change() {
        let red = CellStyle::on(Rgb::new(200, 0, 0));
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(0, 0, "abcd", red);

        let mut out = Vec::new();
        paint_full(&fb, &mut out).unwrap();
        assert_eq!(glyphs(&out).matches("48;2;200;0;0").count(), 1);
    }
}
