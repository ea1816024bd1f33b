// src/ui/components/tile.rs
//! Single atlas tile drawn into one cell

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::ui::core::Renderer;
use crate::ui::error::{Error, Result};
use crate::ui::frame::Frame;
use crate::ui::grid::AtlasPos;

impl Frame<'_> {
    /// Copy `tile` from the atlas into `cell`, filling the cell with
    /// `background` first when given.
    pub fn tile<R: Renderer>(
        &mut self,
        renderer: &mut R,
        tile: AtlasPos,
        cell: Point,
        background: Option<Rgb565>,
    ) -> Result<(), R::Error> {
        let dest = self.cell_pixels(cell);
        if let Some(color) = background {
            renderer.fill_rect(dest, color).map_err(Error::Draw)?;
        }
        renderer.blit_tile(tile, dest).map_err(Error::Draw)
    }
}
