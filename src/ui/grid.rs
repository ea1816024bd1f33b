// src/ui/grid.rs
//! Grid geometry: cell rectangles, atlas positions and the cell/pixel mapping.
//!
//! Everything the toolkit lays out is measured in *cells*, fixed-size pixel
//! blocks on the off-screen canvas. [`GridMetrics`] owns the cell size and the
//! grid dimensions and converts between the two spaces in both directions.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use serde::{Deserialize, Serialize};

use crate::canvas::Letterbox;

/// Rectangle measured in grid cells.
///
/// A rect with `w <= 0` or `h <= 0` is empty and draws nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl GridRect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// One past the rightmost column.
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// One past the bottom row.
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Whether `cell` lies inside the rect. Right and bottom edges are exclusive.
    pub fn contains(&self, cell: Point) -> bool {
        cell.x >= self.x && cell.x < self.right() && cell.y >= self.y && cell.y < self.bottom()
    }

    /// The rect shrunk by `dx` cells on the left and right and `dy` on top and bottom.
    pub fn inset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w - 2 * dx, self.h - 2 * dy)
    }
}

/// Column/row index of one tile in a [`TileAtlas`](crate::ui::TileAtlas).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AtlasPos {
    pub col: u32,
    pub row: u32,
}

impl AtlasPos {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }
}

/// Cell size and grid dimensions of a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMetrics {
    /// Cell width in pixels
    pub cell_width: u32,
    /// Cell height in pixels
    pub cell_height: u32,
    /// Grid width in cells
    pub columns: u32,
    /// Grid height in cells
    pub rows: u32,
}

impl GridMetrics {
    pub fn new(cell_width: u32, cell_height: u32, columns: u32, rows: u32) -> Self {
        Self {
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
            columns,
            rows,
        }
    }

    /// Whole grid as a cell rect anchored at the origin.
    pub fn bounds(&self) -> GridRect {
        GridRect::new(0, 0, self.columns as i32, self.rows as i32)
    }

    /// Size of the whole grid in pixels.
    pub fn pixel_size(&self) -> Size {
        Size::new(
            self.columns * self.cell_width,
            self.rows * self.cell_height,
        )
    }

    /// Pixel rectangle covered by a cell rect: `(x*cw, y*ch, w*cw, h*ch)`.
    ///
    /// Empty rects map to a zero-sized rectangle at their origin.
    pub fn cell_to_pixel(&self, rect: GridRect) -> Rectangle {
        let cw = self.cell_width as i32;
        let ch = self.cell_height as i32;
        Rectangle::new(
            Point::new(rect.x * cw, rect.y * ch),
            Size::new(
                (rect.w.max(0) * cw) as u32,
                (rect.h.max(0) * ch) as u32,
            ),
        )
    }

    /// Top-left pixel of a single cell.
    pub fn cell_origin(&self, cell: Point) -> Point {
        Point::new(
            cell.x * self.cell_width as i32,
            cell.y * self.cell_height as i32,
        )
    }

    /// Fractional cell coordinates of a window pixel under `transform`.
    ///
    /// Computes `((px - offset) / scale) / cell_size` with float division.
    pub fn pixel_to_cell(&self, pixel: Point, transform: &Letterbox) -> (f32, f32) {
        let scale = transform.scale.max(1) as f32;
        let x = (pixel.x - transform.offset.x) as f32 / scale / self.cell_width as f32;
        let y = (pixel.y - transform.offset.y) as f32 / scale / self.cell_height as f32;
        (x, y)
    }

    /// Cell containing a window pixel under `transform`, rounded toward negative
    /// infinity so pixels left of or above the canvas never land in column/row 0.
    pub fn pixel_to_cell_floor(&self, pixel: Point, transform: &Letterbox) -> Point {
        let scale = transform.scale.max(1) as i32;
        let canvas_x = (pixel.x - transform.offset.x).div_euclid(scale);
        let canvas_y = (pixel.y - transform.offset.y).div_euclid(scale);
        Point::new(
            canvas_x.div_euclid(self.cell_width as i32),
            canvas_y.div_euclid(self.cell_height as i32),
        )
    }
}
