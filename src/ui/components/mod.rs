// src/ui/components/mod.rs
//! Widgets
//!
//! Each widget is a method on [`Frame`](crate::ui::Frame) that resolves its
//! placement, picks its style from the active theme and issues draw calls
//! through a [`Renderer`](crate::ui::Renderer). Widgets keep no state between
//! frames.

pub mod button;
pub mod panel;
pub mod rect;
pub mod text;
pub mod tile;

pub use button::ButtonResponse;
