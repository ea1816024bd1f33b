//! Styling system for UI elements
//!
//! This module provides:
//! - Color constants in RGB565
//! - Per-element style records ([`RectStyle`], [`ButtonStyle`])
//! - Panel tile kits
//! - Themes combining all of the above with a font
//!
//! # Organization
//!
//! - [`colors`] - Color constants
//! - [`style`] - Rect and button styles
//! - [`panel_kit`] - Atlas tiles for bordered panels
//! - [`theme`] - Theme presets and style lookup
//!
//! # Examples
//!
//! ```ignore
//! use ui::styling::*;
//!
//! let theme = Theme::terminal().with_panel_kit(PanelKit::block(AtlasPos::new(0, 0)));
//! let hover = theme.style_for(WidgetKind::Button, InteractionState::Hover);
//! ```

pub mod colors;
pub mod panel_kit;
pub mod style;
pub mod theme;

pub use colors::{
    BLACK, DARK_GRAY, DARK_GREEN, GOLD, GRAY, GREEN, LIGHT_GRAY, RED, SKY_BLUE, WHITE,
};
pub use panel_kit::PanelKit;
pub use style::{ButtonStyle, RectStyle};
pub use theme::{FontRef, Theme, WidgetKind};
