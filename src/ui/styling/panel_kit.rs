//! Tile sets for bordered panels
//!
//! A [`PanelKit`] names the atlas tiles a panel is assembled from. Multi-row
//! panels use the nine-slice set (corners, edges, fill); single-row panels use
//! the end caps and the strip tile between them.

use crate::ui::grid::AtlasPos;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelKit {
    pub top_left: AtlasPos,
    pub top: AtlasPos,
    pub top_right: AtlasPos,
    pub left: AtlasPos,
    pub fill: AtlasPos,
    pub right: AtlasPos,
    pub bottom_left: AtlasPos,
    pub bottom: AtlasPos,
    pub bottom_right: AtlasPos,

    /// Left end of a one-row panel
    pub cap_left: AtlasPos,
    /// Body of a one-row panel
    pub strip: AtlasPos,
    /// Right end of a one-row panel
    pub cap_right: AtlasPos,
}

impl PanelKit {
    /// Kit laid out as a 3x3 block starting at `origin`, with the single-row
    /// caps and strip in the row directly below it.
    ///
    /// ```text
    /// TL T  TR
    /// L  F  R
    /// BL B  BR
    /// CL S  CR
    /// ```
    pub const fn block(origin: AtlasPos) -> Self {
        let c = origin.col;
        let r = origin.row;
        Self {
            top_left: AtlasPos::new(c, r),
            top: AtlasPos::new(c + 1, r),
            top_right: AtlasPos::new(c + 2, r),
            left: AtlasPos::new(c, r + 1),
            fill: AtlasPos::new(c + 1, r + 1),
            right: AtlasPos::new(c + 2, r + 1),
            bottom_left: AtlasPos::new(c, r + 2),
            bottom: AtlasPos::new(c + 1, r + 2),
            bottom_right: AtlasPos::new(c + 2, r + 2),
            cap_left: AtlasPos::new(c, r + 3),
            strip: AtlasPos::new(c + 1, r + 3),
            cap_right: AtlasPos::new(c + 2, r + 3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_layout() {
        let kit = PanelKit::block(AtlasPos::new(4, 2));
        assert_eq!(kit.top_left, AtlasPos::new(4, 2));
        assert_eq!(kit.fill, AtlasPos::new(5, 3));
        assert_eq!(kit.bottom_right, AtlasPos::new(6, 4));
        assert_eq!(kit.strip, AtlasPos::new(5, 5));
    }
}
