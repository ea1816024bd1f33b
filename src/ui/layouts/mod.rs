// src/ui/layouts/mod.rs
//! Layout: flow boxes that hand out cells, and alignment inside a cell rect

pub mod align;
pub mod flow;

pub use align::{HAlign, VAlign, align};
pub use flow::{Extent, LayoutContext, LayoutMode, LayoutStack, Placement, Position};
