// src/ui/components/button.rs
//! Push button with hover, held and click reporting

use log::debug;

use super::rect::draw_styled;
use crate::ui::core::{InteractionState, Renderer};
use crate::ui::error::{Error, Result};
use crate::ui::frame::Frame;
use crate::ui::grid::GridRect;
use crate::ui::layouts::Placement;
use crate::ui::styling::WidgetKind;

/// What the pointer did to a button this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonResponse {
    /// Cells the button covers
    pub rect: GridRect,
    /// Style state the button was drawn in
    pub state: InteractionState,
    /// Pointer over the button
    pub hovered: bool,
    /// Pointer over the button with the primary button held
    pub held: bool,
    /// Primary button released over the button this frame
    pub clicked: bool,
}

impl Frame<'_> {
    /// Draw a button and hit-test it against this frame's pointer.
    ///
    /// The label gets one cell of padding left and right, so an `Auto` width is
    /// the text width plus two cells. A click is reported on the frame the
    /// primary button is released while the pointer is still over the button.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// if frame.button(&mut renderer, "Quit", Placement::auto())?.clicked {
    ///     running = false;
    /// }
    /// ```
    pub fn button<R: Renderer>(
        &mut self,
        renderer: &mut R,
        text: &str,
        placement: Placement,
    ) -> Result<ButtonResponse, R::Error> {
        let content = self.text_cells(renderer, text);
        let rect = self
            .place(placement, (content.0 + 2, content.1))
            .map_err(|e| e.widen())?;

        let pointer = self.pointer();
        let hovered = pointer.is_over(&rect);
        let response = ButtonResponse {
            rect,
            state: pointer.interaction(&rect),
            hovered,
            held: hovered && pointer.down,
            clicked: hovered && pointer.released,
        };
        if response.clicked {
            debug!("Button {:?} clicked at ({}, {})", text, rect.x, rect.y);
        }
        if rect.is_empty() {
            return Ok(response);
        }

        let style = self.theme().style_for(WidgetKind::Button, response.state);
        draw_styled(renderer, self.pixels(rect), &style).map_err(Error::Draw)?;
        self.draw_aligned_text(renderer, text, rect.inset(1, 0), content, style.foreground)?;
        Ok(response)
    }
}
