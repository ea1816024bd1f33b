// src/ui/components/rect.rs
//! Filled, bordered rectangle in the theme's base style

use embedded_graphics::primitives::Rectangle;

use crate::ui::core::{InteractionState, Renderer};
use crate::ui::error::{Error, Result};
use crate::ui::frame::Frame;
use crate::ui::grid::GridRect;
use crate::ui::layouts::Placement;
use crate::ui::styling::{RectStyle, WidgetKind};

/// Fill `area` with the style's background, then stroke its border inside
/// the area.
pub(crate) fn draw_styled<R: Renderer>(
    renderer: &mut R,
    area: Rectangle,
    style: &RectStyle,
) -> core::result::Result<(), R::Error> {
    if let Some(background) = style.background {
        renderer.fill_rect(area, background)?;
    }
    if style.has_border() {
        renderer.stroke_rect(area, style.border_width, style.border)?;
    }
    Ok(())
}

impl Frame<'_> {
    /// Draw a rect in the base style. `Auto` extents are one cell.
    pub fn rect<R: Renderer>(
        &mut self,
        renderer: &mut R,
        placement: Placement,
    ) -> Result<GridRect, R::Error> {
        let rect = self.place(placement, (1, 1)).map_err(|e| e.widen())?;
        if rect.is_empty() {
            return Ok(rect);
        }

        let style = self
            .theme()
            .style_for(WidgetKind::Rect, InteractionState::Normal);
        draw_styled(renderer, self.pixels(rect), &style).map_err(Error::Draw)?;
        Ok(rect)
    }
}
