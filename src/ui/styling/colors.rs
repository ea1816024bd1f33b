//! Color definitions
//!
//! Named colors in RGB565, the canvas's native 16-bit format.
//!
//! # RGB565 Format
//! - Red: 5 bits (0-31)
//! - Green: 6 bits (0-63)
//! - Blue: 5 bits (0-31)
//!
//! To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;

// ============================================================================
// Neutrals
// ============================================================================

pub const BLACK: Rgb565 = Rgb565::new(0, 0, 0);

/// Pure white - maximum brightness in RGB565
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

pub const LIGHT_GRAY: Rgb565 = Rgb565::new(200 >> 3, 200 >> 2, 200 >> 3);

pub const GRAY: Rgb565 = Rgb565::new(130 >> 3, 130 >> 2, 130 >> 3);

pub const DARK_GRAY: Rgb565 = Rgb565::new(80 >> 3, 80 >> 2, 80 >> 3);

// ============================================================================
// Accents
// ============================================================================

/// Phosphor green used by the terminal theme
pub const GREEN: Rgb565 = Rgb565::new(0, 228 >> 2, 48 >> 3);

pub const DARK_GREEN: Rgb565 = Rgb565::new(0, 117 >> 2, 44 >> 3);

pub const RED: Rgb565 = Rgb565::new(230 >> 3, 41 >> 2, 55 >> 3);

pub const GOLD: Rgb565 = Rgb565::new(255 >> 3, 203 >> 2, 0);

pub const SKY_BLUE: Rgb565 = Rgb565::new(102 >> 3, 191 >> 2, 255 >> 3);
