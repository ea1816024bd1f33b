//! Test double for [`Renderer`] that records every draw call.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::core::Renderer;
use crate::ui::grid::AtlasPos;
use crate::ui::styling::FontRef;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Fill(Rectangle, Rgb565),
    Stroke(Rectangle, u32, Rgb565),
    Tile(AtlasPos, Rectangle),
    Text(String, Point, Rgb565),
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tiles(&self) -> impl Iterator<Item = (AtlasPos, Rectangle)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Tile(tile, dest) => Some((*tile, *dest)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Point, Rgb565)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(text, origin, color) => Some((text.as_str(), *origin, *color)),
            _ => None,
        })
    }

    pub fn fills(&self) -> impl Iterator<Item = (Rectangle, Rgb565)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Fill(area, color) => Some((*area, *color)),
            _ => None,
        })
    }

    pub fn strokes(&self) -> impl Iterator<Item = (Rectangle, u32, Rgb565)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Stroke(area, width, color) => Some((*area, *width, *color)),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for RecordingRenderer {
    type Error = Infallible;

    fn fill_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Fill(area, color));
        Ok(())
    }

    fn stroke_rect(
        &mut self,
        area: Rectangle,
        width: u32,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Stroke(area, width, color));
        Ok(())
    }

    fn blit_tile(&mut self, tile: AtlasPos, dest: Rectangle) -> Result<(), Self::Error> {
        self.commands.push(DrawCommand::Tile(tile, dest));
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        _font: FontRef,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        self.commands
            .push(DrawCommand::Text(text.to_string(), origin, color));
        Ok(())
    }
}
