// src/ui/mod.rs
//! Immediate-mode tile GUI
//!
//! This module provides:
//! - Grid geometry and the cell/pixel mapping
//! - Flow layout boxes and alignment
//! - Themes, rect and button styles, and panel kits
//! - Widgets drawn through the [`Renderer`] seam
//! - A bitmap tile atlas and a [`DisplayRenderer`] for any embedded-graphics
//!   `DrawTarget`
//!
//! Nothing is retained between frames except what [`Gui`] holds: call
//! [`Gui::frame`] once per frame, issue widget calls on the returned
//! [`Frame`], and drop it before presenting the canvas.

pub mod atlas;
pub mod components;
pub mod core;
pub mod error;
pub mod frame;
pub mod grid;
pub mod layouts;
pub mod render;
pub mod styling;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used items
pub use atlas::TileAtlas;
pub use components::ButtonResponse;
pub use self::core::{InteractionState, PointerInput, PointerState, Renderer};
pub use error::{Error, Result};
pub use frame::{Frame, Gui};
pub use grid::{AtlasPos, GridMetrics, GridRect};
pub use layouts::{Extent, HAlign, LayoutMode, Placement, Position, VAlign};
pub use render::DisplayRenderer;
pub use styling::{ButtonStyle, FontRef, PanelKit, RectStyle, Theme, WidgetKind};
