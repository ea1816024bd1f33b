// src/ui/core.rs
//! Core UI types: pointer input, interaction state and the renderer seam

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::grid::{AtlasPos, GridRect};
use crate::ui::styling::FontRef;

/// Raw pointer state collected by the host between two frames.
///
/// `primary_down` is the button level when the frame starts. `pressed` and
/// `released` latch button events seen since the last frame, so a press and
/// release delivered in the same event batch still reach the widgets. The
/// host clears them with [`clear_events`](Self::clear_events) once the frame
/// has been started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerInput {
    /// Pointer position in window pixels
    pub position: Point,
    /// Whether the primary button is held
    pub primary_down: bool,
    /// Primary button went down since the last frame
    pub pressed: bool,
    /// Primary button went up since the last frame
    pub released: bool,
}

impl PointerInput {
    pub fn new(position: Point, primary_down: bool) -> Self {
        Self {
            position,
            primary_down,
            pressed: false,
            released: false,
        }
    }

    /// Record a primary button down event at `position`.
    pub fn press(&mut self, position: Point) {
        self.position = position;
        self.primary_down = true;
        self.pressed = true;
    }

    /// Record a primary button up event at `position`.
    pub fn release(&mut self, position: Point) {
        self.position = position;
        self.primary_down = false;
        self.released = true;
    }

    pub fn clear_events(&mut self) {
        self.pressed = false;
        self.released = false;
    }
}

/// Pointer state resolved into grid space for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerState {
    /// Cell under the pointer
    pub cell: Point,
    /// Primary button held this frame
    pub down: bool,
    /// Primary button went down this frame
    pub pressed: bool,
    /// Primary button went up this frame
    pub released: bool,
}

impl PointerState {
    /// Derive transitions from the previous frame's button state.
    pub fn new(cell: Point, down: bool, was_down: bool) -> Self {
        Self {
            cell,
            down,
            pressed: down && !was_down,
            released: !down && was_down,
        }
    }

    /// Merge button events latched by the host into the derived transitions.
    pub fn with_events(mut self, pressed: bool, released: bool) -> Self {
        self.pressed |= pressed;
        self.released |= released;
        self
    }

    pub fn is_over(&self, rect: &GridRect) -> bool {
        rect.contains(self.cell)
    }

    /// Interaction state of an element occupying `rect`.
    pub fn interaction(&self, rect: &GridRect) -> InteractionState {
        match (self.is_over(rect), self.down) {
            (false, _) => InteractionState::Normal,
            (true, false) => InteractionState::Hover,
            (true, true) => InteractionState::Active,
        }
    }
}

/// Visual state of an interactive element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// Pointer elsewhere
    #[default]
    Normal,
    /// Pointer over the element
    Hover,
    /// Pointer over the element with the primary button held
    Active,
}

/// Draw calls the widgets issue, in canvas pixels.
///
/// [`DisplayRenderer`](crate::ui::DisplayRenderer) implements this on top of
/// any embedded-graphics `DrawTarget`; widgets never touch the target
/// directly.
pub trait Renderer {
    type Error: core::fmt::Debug;

    /// Fill `area` with a solid color.
    fn fill_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), Self::Error>;

    /// Outline `area` with a border `width` pixels thick, drawn inside the area.
    fn stroke_rect(&mut self, area: Rectangle, width: u32, color: Rgb565)
    -> Result<(), Self::Error>;

    /// Copy one atlas tile into `dest`.
    fn blit_tile(&mut self, tile: AtlasPos, dest: Rectangle) -> Result<(), Self::Error>;

    /// Draw `text` with its top-left corner at `origin`.
    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        font: FontRef,
        color: Rgb565,
    ) -> Result<(), Self::Error>;

    /// Width of `text` in pixels when drawn with `font`.
    fn text_width(&self, text: &str, font: FontRef) -> u32 {
        let glyph = font.font().character_size.width + font.font().character_spacing;
        let count = text.chars().count() as u32;
        (glyph * count).saturating_sub(font.font().character_spacing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_transitions() {
        let cell = Point::new(1, 1);
        let pressed = PointerState::new(cell, true, false);
        assert!(pressed.pressed && !pressed.released);

        let held = PointerState::new(cell, true, true);
        assert!(!held.pressed && !held.released);

        let released = PointerState::new(cell, false, true);
        assert!(released.released && !released.pressed);
    }

    #[test]
    fn test_latched_events_survive_level() {
        // down and up in one batch: the level alone shows nothing
        let mut input = PointerInput::default();
        input.press(Point::new(10, 10));
        input.release(Point::new(11, 10));
        assert!(!input.primary_down);
        assert_eq!(input.position, Point::new(11, 10));

        let state = PointerState::new(Point::new(1, 1), input.primary_down, false)
            .with_events(input.pressed, input.released);
        assert!(state.pressed && state.released && !state.down);

        input.clear_events();
        assert_eq!(input, PointerInput::new(Point::new(11, 10), false));
    }

    #[test]
    fn test_interaction_state() {
        let rect = GridRect::new(2, 2, 5, 1);
        let over = PointerState::new(Point::new(3, 2), false, false);
        assert_eq!(over.interaction(&rect), InteractionState::Hover);

        let held = PointerState::new(Point::new(3, 2), true, false);
        assert_eq!(held.interaction(&rect), InteractionState::Active);

        let away = PointerState::new(Point::new(8, 2), true, false);
        assert_eq!(away.interaction(&rect), InteractionState::Normal);
    }
}
