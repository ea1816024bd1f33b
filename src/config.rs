use serde::{Deserialize, Serialize};

use crate::ui::GridMetrics;

/// Default cell edge in pixels.
pub const DEFAULT_CELL_PX: u32 = 8;

/// Default grid width in cells (640px at 8px cells).
pub const DEFAULT_GRID_WIDTH: u32 = 80;

/// Default grid height in cells (360px at 8px cells).
pub const DEFAULT_GRID_HEIGHT: u32 = 45;

/// Deepest layout box nesting accepted.
pub const MAX_LAYOUT_DEPTH: usize = 16;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuiConfig {
    pub cell_width: u32,
    pub cell_height: u32,
    pub grid_width: u32,
    pub grid_height: u32,
    /// Clear the canvas to transparent instead of the clear color each frame
    pub transparent: bool,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_PX,
            cell_height: DEFAULT_CELL_PX,
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            transparent: false,
        }
    }
}

impl GuiConfig {
    pub fn metrics(&self) -> GridMetrics {
        GridMetrics::new(
            self.cell_width,
            self.cell_height,
            self.grid_width,
            self.grid_height,
        )
    }
}
