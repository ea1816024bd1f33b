//! Bitmap tile atlas
//!
//! An atlas is a raw big-endian RGB565 image cut into equally sized tiles,
//! addressed by [`AtlasPos`] column and row.

use embedded_graphics::image::{Image, ImageDrawableExt, ImageRaw};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::error::{Error, Result};
use crate::ui::grid::AtlasPos;

const BYTES_PER_PIXEL: usize = 2;

pub struct TileAtlas<'a> {
    image: ImageRaw<'a, Rgb565>,
    tile_size: Size,
    columns: u32,
    rows: u32,
}

impl<'a> TileAtlas<'a> {
    /// Wrap raw pixel data `width` pixels wide.
    ///
    /// Fails if the data isn't a whole number of rows or the image doesn't
    /// divide evenly into `tile_size` tiles.
    pub fn new(data: &'a [u8], width: u32, tile_size: Size) -> Result<Self> {
        let row_bytes = width as usize * BYTES_PER_PIXEL;
        let height = if row_bytes == 0 {
            0
        } else {
            (data.len() / row_bytes) as u32
        };

        let valid = row_bytes > 0
            && height > 0
            && data.len() % row_bytes == 0
            && tile_size.width > 0
            && tile_size.height > 0
            && width % tile_size.width == 0
            && height % tile_size.height == 0;

        if !valid {
            return Err(Error::InvalidAtlas {
                width,
                height,
                len: data.len(),
                tile_width: tile_size.width,
                tile_height: tile_size.height,
            });
        }

        Ok(Self {
            image: ImageRaw::new(data, width),
            tile_size,
            columns: width / tile_size.width,
            rows: height / tile_size.height,
        })
    }

    pub fn tile_size(&self) -> Size {
        self.tile_size
    }

    /// Atlas dimensions in tiles as `(columns, rows)`.
    pub fn grid(&self) -> (u32, u32) {
        (self.columns, self.rows)
    }

    /// Source pixel rectangle of `tile`, if it lies inside the atlas.
    pub fn source(&self, tile: AtlasPos) -> Option<Rectangle> {
        (tile.col < self.columns && tile.row < self.rows).then(|| {
            Rectangle::new(
                Point::new(
                    (tile.col * self.tile_size.width) as i32,
                    (tile.row * self.tile_size.height) as i32,
                ),
                self.tile_size,
            )
        })
    }

    /// Copy `tile` to `target` with its top-left corner at `dest`.
    ///
    /// Returns `Ok(false)` without drawing when the tile is outside the atlas.
    /// Errors are the target's own.
    pub fn draw_tile<D>(
        &self,
        tile: AtlasPos,
        dest: Point,
        target: &mut D,
    ) -> core::result::Result<bool, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(source) = self.source(tile) else {
            return Ok(false);
        };
        let sub = self.image.sub_image(&source);
        Image::new(&sub, dest).draw(target)?;
        Ok(true)
    }
}
