//! Per-widget style records
//!
//! A [`RectStyle`] is the full visual description of one boxed element in one
//! interaction state; a [`ButtonStyle`] groups the three states a button can be
//! drawn in.

use embedded_graphics::pixelcolor::Rgb565;

use super::colors::{BLACK, WHITE};

// ============================================================================
// Rect Style
// ============================================================================

/// Colors and border of a rectangular element
///
/// # Examples
///
/// ```ignore
/// // Green text on a transparent background
/// let style = RectStyle::new(None, GREEN);
///
/// // Filled box with a 1px border
/// let boxed = RectStyle::new(Some(BLACK), GREEN).with_border(DARK_GREEN, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RectStyle {
    /// Fill color. `None` leaves the area untouched.
    pub background: Option<Rgb565>,

    /// Text/glyph color
    pub foreground: Rgb565,

    /// Border color, drawn only when `border_width > 0`
    pub border: Rgb565,

    /// Border width in pixels, drawn inside the element's rect
    pub border_width: u32,
}

impl Default for RectStyle {
    /// White text, no fill, no border
    fn default() -> Self {
        Self {
            background: None,
            foreground: WHITE,
            border: BLACK,
            border_width: 0,
        }
    }
}

impl RectStyle {
    pub const fn new(background: Option<Rgb565>, foreground: Rgb565) -> Self {
        Self {
            background,
            foreground,
            border: BLACK,
            border_width: 0,
        }
    }

    /// Sets the border color and width
    ///
    /// A width of 0 disables the border.
    pub const fn with_border(mut self, color: Rgb565, width: u32) -> Self {
        self.border = color;
        self.border_width = width;
        self
    }

    pub fn has_border(&self) -> bool {
        self.border_width > 0
    }
}

// ============================================================================
// Button Style
// ============================================================================

/// Button appearance for each [`InteractionState`](crate::ui::InteractionState)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonStyle {
    /// Pointer elsewhere
    pub normal: RectStyle,
    /// Pointer over the button, primary button up
    pub hover: RectStyle,
    /// Pointer over the button, primary button held
    pub active: RectStyle,
}
