// src/ui/frame.rs
//! Persistent GUI state and the per-frame drawing context
//!
//! [`Gui`] lives for the whole program and remembers what must survive between
//! frames: grid metrics, the default theme, the last letterbox transform and
//! the previous pointer button state. Each frame the host calls
//! [`Gui::frame`] to get a [`Frame`], which carries everything that is reset
//! per frame (theme, spacing, alignment, open layout boxes, pointer snapshot).
//!
//! # Examples
//!
//! ```ignore
//! let mut gui = Gui::new(GuiConfig::default());
//!
//! loop {
//!     // `input` accumulates button events via press()/release()
//!     {
//!         let mut renderer = DisplayRenderer::new(canvas.begin()).with_atlas(&atlas);
//!         let mut frame = gui.frame(input);
//!         input.clear_events();
//!         frame.set_spacing(1);
//!         frame.vbox(Placement::at(2, 2))?;
//!         if frame.button(&mut renderer, "Play", Placement::auto())?.clicked {
//!             start_game();
//!         }
//!         frame.end_box();
//!     }
//!     let transform = canvas.present(&mut window)?;
//!     gui.set_transform(transform);
//! }
//! ```

use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

use crate::canvas::Letterbox;
use crate::config::GuiConfig;
use crate::ui::core::{PointerInput, PointerState, Renderer};
use crate::ui::error::Result;
use crate::ui::grid::{GridMetrics, GridRect};
use crate::ui::layouts::{HAlign, LayoutMode, LayoutStack, Placement, VAlign};
use crate::ui::styling::{FontRef, Theme};

// ============================================================================
// Gui
// ============================================================================

#[derive(Debug, Clone)]
pub struct Gui {
    metrics: GridMetrics,
    theme: Theme,
    transform: Letterbox,
    was_down: bool,
}

impl Gui {
    pub fn new(config: GuiConfig) -> Self {
        let metrics = config.metrics();
        debug!(
            "GUI grid {}x{} cells of {}x{}px",
            metrics.columns, metrics.rows, metrics.cell_width, metrics.cell_height
        );
        Self {
            metrics,
            theme: Theme::default(),
            transform: Letterbox::identity(),
            was_down: false,
        }
    }

    /// Theme each new frame starts with.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn metrics(&self) -> GridMetrics {
        self.metrics
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Store the transform the canvas was last presented with.
    pub fn set_transform(&mut self, transform: Letterbox) {
        self.transform = transform;
    }

    pub fn transform(&self) -> Letterbox {
        self.transform
    }

    /// Cell under a window pixel, using the stored transform.
    pub fn pointer_cell(&self, pixel: Point) -> Point {
        self.metrics.pixel_to_cell_floor(pixel, &self.transform)
    }

    /// Fractional cell coordinates of a window pixel.
    pub fn pointer_position(&self, pixel: Point) -> (f32, f32) {
        self.metrics.pixel_to_cell(pixel, &self.transform)
    }

    /// Start a frame with this frame's pointer input.
    pub fn frame(&mut self, input: PointerInput) -> Frame<'_> {
        let pointer = PointerState::new(
            self.pointer_cell(input.position),
            input.primary_down,
            self.was_down,
        )
        .with_events(input.pressed, input.released);
        self.was_down = input.primary_down;
        Frame::new(self, pointer)
    }
}

// ============================================================================
// Frame
// ============================================================================

/// Drawing context for a single frame.
///
/// Widget methods live next to their widgets in
/// [`components`](crate::ui::components).
pub struct Frame<'a> {
    gui: &'a Gui,
    theme: Theme,
    halign: HAlign,
    valign: VAlign,
    layout: LayoutStack,
    pointer: PointerState,
}

impl<'a> Frame<'a> {
    fn new(gui: &'a Gui, pointer: PointerState) -> Self {
        Self {
            gui,
            theme: gui.theme,
            halign: HAlign::default(),
            valign: VAlign::default(),
            layout: LayoutStack::new(gui.metrics.bounds()),
            pointer,
        }
    }

    pub fn metrics(&self) -> GridMetrics {
        self.gui.metrics
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    // ------------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------------

    /// Replace the active theme, font included.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_font(&mut self, font: &'static MonoFont<'static>) {
        self.theme.font = FontRef(font);
    }

    pub fn font(&self) -> FontRef {
        self.theme.font
    }

    /// Cells left between consecutive placements in a box.
    pub fn set_spacing(&mut self, spacing: i32) {
        self.layout.set_spacing(spacing);
    }

    pub fn spacing(&self) -> i32 {
        self.layout.spacing()
    }

    pub fn align(&mut self, halign: HAlign) {
        self.halign = halign;
    }

    pub fn valign(&mut self, valign: VAlign) {
        self.valign = valign;
    }

    pub fn alignment(&self) -> (HAlign, VAlign) {
        (self.halign, self.valign)
    }

    // ------------------------------------------------------------------------
    // Layout
    // ------------------------------------------------------------------------

    pub fn hbox(&mut self, placement: Placement) -> Result<GridRect> {
        self.layout.open(LayoutMode::Horizontal, placement)
    }

    pub fn vbox(&mut self, placement: Placement) -> Result<GridRect> {
        self.layout.open(LayoutMode::Vertical, placement)
    }

    /// Box whose placements all land at its origin.
    pub fn free_box(&mut self, placement: Placement) -> Result<GridRect> {
        self.layout.open(LayoutMode::Free, placement)
    }

    /// Close the innermost box, returning the area it covered.
    pub fn end_box(&mut self) -> Option<GridRect> {
        self.layout.close()
    }

    pub fn next_cell(&mut self, w: i32, h: i32) -> Result<GridRect> {
        self.layout.next_cell(w, h)
    }

    /// Depth of open layout boxes.
    pub fn depth(&self) -> usize {
        self.layout.depth()
    }

    // ------------------------------------------------------------------------
    // Widget helpers
    // ------------------------------------------------------------------------

    pub(crate) fn place(&mut self, placement: Placement, content: (i32, i32)) -> Result<GridRect> {
        self.layout.resolve(placement, content)
    }

    pub(crate) fn pixels(&self, rect: GridRect) -> Rectangle {
        self.gui.metrics.cell_to_pixel(rect)
    }

    pub(crate) fn cell_pixels(&self, cell: Point) -> Rectangle {
        self.pixels(GridRect::new(cell.x, cell.y, 1, 1))
    }

    /// Footprint of `text` in whole cells, rounded up.
    pub(crate) fn text_cells<R: Renderer>(&self, renderer: &R, text: &str) -> (i32, i32) {
        let metrics = self.gui.metrics;
        let font = self.theme.font;
        let width = renderer.text_width(text, font);
        let height = font.font().character_size.height;
        (
            width.div_ceil(metrics.cell_width) as i32,
            height.div_ceil(metrics.cell_height) as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::error::Error;
    use embedded_graphics::mono_font::ascii::FONT_6X10;

    fn gui() -> Gui {
        Gui::new(GuiConfig::default())
    }

    #[test]
    fn test_pointer_cell_uses_transform() {
        let mut gui = gui();
        assert_eq!(gui.pointer_cell(Point::new(17, 9)), Point::new(2, 1));

        gui.set_transform(Letterbox {
            scale: 2,
            offset: Point::new(0, 40),
        });
        assert_eq!(gui.pointer_cell(Point::new(17, 40)), Point::new(1, 0));
        assert_eq!(gui.pointer_cell(Point::new(17, 39)), Point::new(1, -1));
    }

    #[test]
    fn test_frame_tracks_press_and_release() {
        let mut gui = gui();
        let at = Point::new(4, 4);

        let pointer = gui.frame(PointerInput::new(at, true)).pointer();
        assert!(pointer.pressed && pointer.down);

        let pointer = gui.frame(PointerInput::new(at, true)).pointer();
        assert!(!pointer.pressed && pointer.down);

        let pointer = gui.frame(PointerInput::new(at, false)).pointer();
        assert!(pointer.released && !pointer.down);

        let pointer = gui.frame(PointerInput::new(at, false)).pointer();
        assert!(!pointer.released);
    }

    #[test]
    fn test_frame_keeps_click_inside_one_batch() {
        let mut gui = gui();
        let mut input = PointerInput::new(Point::new(4, 4), false);
        input.press(Point::new(4, 4));
        input.release(Point::new(4, 4));

        let pointer = gui.frame(input).pointer();
        assert!(pointer.pressed && pointer.released && !pointer.down);

        input.clear_events();
        let pointer = gui.frame(input).pointer();
        assert!(!pointer.pressed && !pointer.released);
    }

    #[test]
    fn test_frame_settings_reset_each_frame() {
        let mut gui = gui().with_theme(Theme::basic());
        {
            let mut frame = gui.frame(PointerInput::default());
            frame.set_theme(Theme::mono());
            frame.set_font(&FONT_6X10);
            frame.set_spacing(3);
            frame.align(HAlign::Right);
            frame.vbox(Placement::at(1, 1)).unwrap();
        }

        let frame = gui.frame(PointerInput::default());
        assert_eq!(frame.theme(), &Theme::basic());
        assert_eq!(frame.spacing(), 0);
        assert_eq!(frame.alignment(), (HAlign::Left, VAlign::Top));
        assert_eq!(frame.depth(), 0);
    }

    #[test]
    fn test_set_font_overrides_theme_font() {
        let mut gui = gui();
        let mut frame = gui.frame(PointerInput::default());
        frame.set_font(&FONT_6X10);
        assert_eq!(frame.font(), FontRef(&FONT_6X10));

        frame.set_theme(Theme::console());
        assert_eq!(frame.font(), FontRef::default());
    }

    #[test]
    fn test_layout_calls_forward_to_stack() {
        let mut gui = gui();
        let mut frame = gui.frame(PointerInput::default());
        assert_eq!(frame.next_cell(1, 1), Err(Error::NoActiveLayout));

        frame.set_spacing(1);
        frame.hbox(Placement::at(2, 3)).unwrap();
        assert_eq!(frame.next_cell(4, 1).unwrap(), GridRect::new(2, 3, 4, 1));
        assert_eq!(frame.next_cell(2, 1).unwrap(), GridRect::new(7, 3, 2, 1));
        assert_eq!(frame.end_box(), Some(GridRect::new(2, 3, 7, 1)));
        assert_eq!(frame.end_box(), None);
    }

    #[test]
    fn test_text_cells_round_up() {
        let mut gui = gui();
        let frame = gui.frame(PointerInput::default());
        let renderer = crate::ui::testing::RecordingRenderer::new();
        // FONT_5X8: 5px glyphs in 8px cells
        assert_eq!(frame.text_cells(&renderer, "Left"), (3, 1));
        assert_eq!(frame.text_cells(&renderer, "A"), (1, 1));
        assert_eq!(frame.text_cells(&renderer, ""), (0, 1));
    }
}
