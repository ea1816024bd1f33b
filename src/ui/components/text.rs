// src/ui/components/text.rs
//! Text widgets: free text at a cell, and laid-out, aligned labels

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::ui::core::{InteractionState, Renderer};
use crate::ui::error::{Error, Result};
use crate::ui::frame::Frame;
use crate::ui::grid::GridRect;
use crate::ui::layouts::{Placement, align};
use crate::ui::styling::WidgetKind;

impl Frame<'_> {
    /// Draw `text` with its top-left corner at `cell`.
    ///
    /// Bypasses layout and alignment entirely.
    pub fn text<R: Renderer>(
        &mut self,
        renderer: &mut R,
        text: &str,
        cell: Point,
        color: Rgb565,
    ) -> Result<(), R::Error> {
        let origin = self.metrics().cell_origin(cell);
        renderer
            .draw_text(text, origin, self.font(), color)
            .map_err(Error::Draw)
    }

    /// Draw a label in the theme's label style.
    ///
    /// `Auto` extents size the rect to the text, rounded up to whole cells.
    /// The text is placed inside the rect using the frame's alignment.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// frame.align(HAlign::Center);
    /// frame.label(&mut renderer, "Score", Placement::auto().fill_width())?;
    /// ```
    pub fn label<R: Renderer>(
        &mut self,
        renderer: &mut R,
        text: &str,
        placement: Placement,
    ) -> Result<GridRect, R::Error> {
        let content = self.text_cells(renderer, text);
        let rect = self.place(placement, content).map_err(|e| e.widen())?;
        if rect.is_empty() {
            return Ok(rect);
        }

        let style = self
            .theme()
            .style_for(WidgetKind::Label, InteractionState::Normal);
        if let Some(background) = style.background {
            renderer
                .fill_rect(self.pixels(rect), background)
                .map_err(Error::Draw)?;
        }
        self.draw_aligned_text(renderer, text, rect, content, style.foreground)?;
        Ok(rect)
    }

    pub(crate) fn draw_aligned_text<R: Renderer>(
        &self,
        renderer: &mut R,
        text: &str,
        rect: GridRect,
        content: (i32, i32),
        color: Rgb565,
    ) -> Result<(), R::Error> {
        let (horizontal, vertical) = self.alignment();
        let cell = align(rect, content.0, content.1, horizontal, vertical);
        renderer
            .draw_text(text, self.metrics().cell_origin(cell), self.font(), color)
            .map_err(Error::Draw)
    }
}
