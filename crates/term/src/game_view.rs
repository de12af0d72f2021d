//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested. The same layout is used
//! for drawing and for hit-testing, so [`GameView::target_at`] always agrees
//! with what is on screen.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::iso::IsoProjection;
use crate::types::{CellPos, Phase, PieceKind, Species, Target, DEFAULT_TILE_SIZE};

const DICE_X: u16 = 1;
const DICE_Y: u16 = 1;
const DICE_W: u16 = 9;
const DICE_H: u16 = 5;
const PANEL_Y: u16 = DICE_Y + DICE_H + 1;
const BOARD_LEFT: u16 = DICE_X + DICE_W + 3;
const BOARD_TOP: u16 = 1;

const BACKGROUND: Rgb = Rgb::new(20, 24, 32);
const GRASS_1: Rgb = Rgb::new(96, 160, 72);
const GRASS_2: Rgb = Rgb::new(72, 136, 56);
const SELECTED: Rgb = Rgb::new(210, 180, 80);
const PREVIEW: Rgb = Rgb::new(90, 140, 200);

const HELP: &str = "d/click die: roll  enter/click: move  r: restart  q: quit";

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

/// UI-only state drawn over the snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlay<'a> {
    /// Tile under the mouse pointer.
    pub hover: Option<CellPos>,
    /// Keyboard cursor.
    pub cursor: Option<CellPos>,
    /// Face shown while the dice reveal runs.
    pub dice_face: Option<u8>,
    /// Caption of the last animal call.
    pub caption: Option<&'a str>,
    /// One-line feedback, e.g. why a click was rejected.
    pub message: Option<&'a str>,
}

/// Screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.w && y < self.y + self.h
    }
}

/// A lightweight isometric renderer for the board.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    tile_size: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(DEFAULT_TILE_SIZE)
    }
}

impl GameView {
    /// `tile_size` is the tile width in terminal columns.
    pub fn new(tile_size: u16) -> Self {
        Self { tile_size }
    }

    /// Projection used for a `rows x cols` board.
    pub fn projection(&self, rows: u8) -> IsoProjection {
        IsoProjection::for_tile_size(self.tile_size).anchored(BOARD_LEFT as f32, BOARD_TOP as f32, rows)
    }

    /// Screen area of the dice control.
    pub fn dice_rect(&self) -> Rect {
        Rect {
            x: DICE_X,
            y: DICE_Y,
            w: DICE_W,
            h: DICE_H,
        }
    }

    /// Classify a screen cell for a `rows x cols` board.
    pub fn target_at(&self, rows: u8, cols: u8, x: u16, y: u16) -> Target {
        if self.dice_rect().contains(x, y) {
            return Target::Dice;
        }
        match self.projection(rows).tile_at_cell(x, y, rows, cols) {
            Some(pos) => Target::Tile(pos),
            None => Target::Background,
        }
    }

    /// Screen cell holding a tile's piece glyph.
    pub fn glyph_cell(&self, rows: u8, pos: CellPos) -> (u16, u16) {
        let (x, y) = self.projection(rows).tile_center(pos);
        (x.floor().max(0.0) as u16, y.floor().max(0.0) as u16)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        overlay: &Overlay<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::on(BACKGROUND).into_cell(' '));

        self.draw_tiles(fb, snap, overlay);
        self.draw_pieces(fb, snap);
        self.draw_dice(fb, snap, overlay);
        self.draw_panel(fb, snap, overlay, viewport);

        let footer = CellStyle {
            fg: Rgb::new(150, 150, 160),
            ..CellStyle::on(BACKGROUND)
        };
        let y = viewport.height.saturating_sub(1);
        match overlay.message {
            Some(msg) => fb.put_str(1, y, msg, CellStyle { bold: true, ..footer }),
            None => fb.put_str(1, y, HELP, CellStyle { dim: true, ..footer }),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, overlay: &Overlay<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, overlay, viewport, &mut fb);
        fb
    }

    fn draw_tiles(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, overlay: &Overlay<'_>) {
        let proj = self.projection(snap.rows);
        let (w, h) = proj.extent(snap.rows, snap.cols);
        let x_end = (BOARD_LEFT as f32 + w).ceil() as u16;
        let y_end = (BOARD_TOP as f32 + h).ceil() as u16;

        for y in BOARD_TOP..y_end.min(fb.height()) {
            for x in BOARD_LEFT..x_end.min(fb.width()) {
                let Some(pos) = proj.tile_at_cell(x, y, snap.rows, snap.cols) else {
                    continue;
                };

                let mut bg = if (pos.col + pos.row) % 2 == 0 {
                    GRASS_1
                } else {
                    GRASS_2
                };
                if snap.selected == Some(pos) {
                    bg = SELECTED;
                } else if snap.preview == Some(pos) {
                    bg = PREVIEW;
                }
                if overlay.hover == Some(pos) {
                    bg = bg.halved();
                }

                let ch = if overlay.cursor == Some(pos) { '░' } else { ' ' };
                let style = CellStyle {
                    fg: Rgb::new(235, 235, 200),
                    ..CellStyle::on(bg)
                };
                fb.put_char(x, y, ch, style);
            }
        }
    }

    fn draw_pieces(&self, fb: &mut FrameBuffer, snap: &GameSnapshot) {
        let cols = snap.cols.max(1) as usize;
        for (i, cell) in snap.cells.iter().enumerate() {
            let Some(kind) = cell else {
                continue;
            };
            let pos = CellPos::new((i % cols) as u8, (i / cols) as u8);
            let (x, y) = self.glyph_cell(snap.rows, pos);
            let bg = fb.get(x, y).map(|c| c.style.bg).unwrap_or(BACKGROUND);
            let style = CellStyle {
                fg: piece_color(*kind),
                bg,
                bold: true,
                dim: false,
            };
            fb.put_char(x, y, piece_glyph(kind.species()), style);
        }
    }

    fn draw_dice(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, overlay: &Overlay<'_>) {
        let r = self.dice_rect();
        let waiting = snap.phase == Phase::AwaitingRoll && overlay.dice_face.is_none();
        let border = CellStyle {
            fg: if waiting {
                Rgb::new(240, 210, 90)
            } else {
                Rgb::new(200, 200, 200)
            },
            bold: waiting,
            ..CellStyle::on(BACKGROUND)
        };
        self.draw_border(fb, r.x, r.y, r.w, r.h, border);

        let face_style = CellStyle {
            fg: Rgb::new(20, 20, 20),
            ..CellStyle::on(Rgb::new(240, 240, 235))
        };
        fb.fill_rect(r.x + 1, r.y + 1, r.w - 2, r.h - 2, ' ', face_style);

        let face = overlay.dice_face.unwrap_or(snap.last_roll);
        for &(gr, gc) in pips(face) {
            fb.put_char(r.x + 2 + 2 * gc, r.y + 1 + gr, '●', face_style);
        }
    }

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        overlay: &Overlay<'_>,
        viewport: Viewport,
    ) {
        let label = CellStyle {
            bold: true,
            ..CellStyle::on(BACKGROUND)
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::on(BACKGROUND)
        };

        let x = DICE_X;
        let mut y = PANEL_Y;
        if y >= viewport.height {
            return;
        }

        fb.put_str(x, y, "PLAYER", label);
        y += 1;
        fb.put_u32(x, y, snap.active_player.number() as u32, value);
        let family = snap.active_player.species().as_str();
        fb.put_str(x + 2, y, family, CellStyle { dim: true, ..value });
        y += 2;

        fb.put_str(x, y, "PHASE", label);
        y += 1;
        fb.put_str(x, y, snap.phase.as_str(), value);
        y += 2;

        fb.put_str(x, y, "DICE", label);
        y += 1;
        match snap.dice {
            Some(d) => fb.put_u32(x, y, d as u32, value),
            None => fb.put_str(x, y, "-", value),
        }
        y += 2;

        fb.put_str(x, y, "TURN", label);
        y += 1;
        fb.put_u32(x, y, snap.turn, value);
        y += 2;

        if let Some(caption) = overlay.caption {
            fb.put_str(x, y, caption, CellStyle { bold: true, ..value });
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }
}

/// Pip positions on a 3x3 grid as (row, col).
fn pips(face: u8) -> &'static [(u16, u16)] {
    match face {
        1 => &[(1, 1)],
        2 => &[(0, 0), (2, 2)],
        3 => &[(0, 0), (1, 1), (2, 2)],
        4 => &[(0, 0), (0, 2), (2, 0), (2, 2)],
        5 => &[(0, 0), (0, 2), (1, 1), (2, 0), (2, 2)],
        _ => &[(0, 0), (1, 0), (2, 0), (0, 2), (1, 2), (2, 2)],
    }
}

fn piece_glyph(species: Species) -> char {
    match species {
        Species::Sheep => 'S',
        Species::Ostrich => 'O',
    }
}

fn piece_color(kind: PieceKind) -> Rgb {
    match (kind.species(), kind.is_variant()) {
        (Species::Sheep, false) => Rgb::new(250, 250, 245),
        (Species::Sheep, true) => Rgb::new(225, 200, 150),
        (Species::Ostrich, false) => Rgb::new(30, 25, 25),
        (Species::Ostrich, true) => Rgb::new(140, 80, 50),
    }
}
