//! Isometric projection between board tiles and screen cells.
//!
//! A tile `(col, row)` is a diamond whose top vertex sits at
//! `origin + ((col - row) * half_w, (col + row) * half_h)`. This is the
//! screen-space form of rotating the square grid by 30 degrees and skewing it
//! by -30 degrees, flattened so that `half_h = half_w / 2` on a terminal whose
//! glyphs are about twice as tall as they are wide.
//!
//! Screen coordinates are continuous; a terminal cell `(x, y)` is sampled at
//! its centre `(x + 0.5, y + 0.5)`.

use crate::types::CellPos;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoProjection {
    origin_x: f32,
    origin_y: f32,
    half_w: f32,
    half_h: f32,
}

impl IsoProjection {
    pub fn new(origin_x: f32, origin_y: f32, half_w: f32, half_h: f32) -> Self {
        Self {
            origin_x,
            origin_y,
            half_w,
            half_h,
        }
    }

    /// Projection for tiles `tile_size` terminal columns wide, anchored at the
    /// screen origin. Sizes below 2 are raised to 2.
    pub fn for_tile_size(tile_size: u16) -> Self {
        let half_w = (tile_size.max(2) / 2) as f32;
        Self::new(0.0, 0.0, half_w, half_w / 2.0)
    }

    /// Same projection, moved so the board's bounding box starts at
    /// `(left, top)`.
    pub fn anchored(self, left: f32, top: f32, rows: u8) -> Self {
        Self {
            origin_x: left + rows as f32 * self.half_w,
            origin_y: top,
            ..self
        }
    }

    pub fn half_w(&self) -> f32 {
        self.half_w
    }

    pub fn half_h(&self) -> f32 {
        self.half_h
    }

    /// Screen position of a point in board space.
    pub fn project(&self, col: f32, row: f32) -> (f32, f32) {
        (
            self.origin_x + (col - row) * self.half_w,
            self.origin_y + (col + row) * self.half_h,
        )
    }

    pub fn tile_top(&self, pos: CellPos) -> (f32, f32) {
        self.project(pos.col as f32, pos.row as f32)
    }

    pub fn tile_center(&self, pos: CellPos) -> (f32, f32) {
        self.project(pos.col as f32 + 0.5, pos.row as f32 + 0.5)
    }

    /// Inverse projection; returns the (possibly off-board) tile under a point.
    pub fn unproject(&self, x: f32, y: f32) -> (i32, i32) {
        let u = (x - self.origin_x) / self.half_w;
        let v = (y - self.origin_y) / self.half_h;
        let col = ((u + v) / 2.0).floor() as i32;
        let row = ((v - u) / 2.0).floor() as i32;
        (col, row)
    }

    /// Tile under a point, if it lies on a `rows x cols` board.
    pub fn tile_at(&self, x: f32, y: f32, rows: u8, cols: u8) -> Option<CellPos> {
        let (col, row) = self.unproject(x, y);
        if col < 0 || row < 0 || col >= cols as i32 || row >= rows as i32 {
            return None;
        }
        Some(CellPos::new(col as u8, row as u8))
    }

    /// Tile under the terminal cell `(x, y)`.
    pub fn tile_at_cell(&self, x: u16, y: u16, rows: u8, cols: u8) -> Option<CellPos> {
        self.tile_at(x as f32 + 0.5, y as f32 + 0.5, rows, cols)
    }

    /// Width and height of the board's bounding box.
    pub fn extent(&self, rows: u8, cols: u8) -> (f32, f32) {
        let span = rows as f32 + cols as f32;
        (span * self.half_w, span * self.half_h)
    }
}
