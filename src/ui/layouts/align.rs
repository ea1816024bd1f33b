//! Alignment of content inside a container rect
//!
//! Integer division truncates toward zero, so centered content that doesn't
//! split evenly sits one cell nearer the start edge.

use embedded_graphics::prelude::Point;
use serde::{Deserialize, Serialize};

use crate::ui::grid::GridRect;

/// Horizontal alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

impl HAlign {
    /// Start column of `content` cells inside the span `[x, x + w)`.
    pub fn resolve(self, x: i32, w: i32, content: i32) -> i32 {
        match self {
            HAlign::Left => x,
            HAlign::Center => x + (w - content) / 2,
            HAlign::Right => x + w - content,
        }
    }
}

impl VAlign {
    /// Start row of `content` cells inside the span `[y, y + h)`.
    pub fn resolve(self, y: i32, h: i32, content: i32) -> i32 {
        match self {
            VAlign::Top => y,
            VAlign::Center => y + (h - content) / 2,
            VAlign::Bottom => y + h - content,
        }
    }
}

/// Top-left cell of a `content_w` x `content_h` footprint aligned in `container`.
pub fn align(
    container: GridRect,
    content_w: i32,
    content_h: i32,
    horizontal: HAlign,
    vertical: VAlign,
) -> Point {
    Point::new(
        horizontal.resolve(container.x, container.w, content_w),
        vertical.resolve(container.y, container.h, content_h),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_and_right_hit_edges() {
        let c = GridRect::new(3, 1, 10, 4);
        for content in [0, 1, 4, 10] {
            assert_eq!(HAlign::Left.resolve(c.x, c.w, content), c.x);
            assert_eq!(HAlign::Right.resolve(c.x, c.w, content) + content, c.right());
            assert_eq!(VAlign::Top.resolve(c.y, c.h, content.min(4)), c.y);
            assert_eq!(
                VAlign::Bottom.resolve(c.y, c.h, content.min(4)) + content.min(4),
                c.bottom()
            );
        }
    }

    #[test]
    fn test_center_within_rounding() {
        let c = GridRect::new(2, 0, 9, 1);
        for content in 0..=9 {
            let start = HAlign::Center.resolve(c.x, c.w, content);
            let left_gap = start - c.x;
            let right_gap = c.right() - (start + content);
            assert!((left_gap - right_gap).abs() <= 1, "content {content}");
        }
    }

    #[test]
    fn test_align_point() {
        let c = GridRect::new(0, 0, 10, 5);
        assert_eq!(
            align(c, 4, 1, HAlign::Center, VAlign::Center),
            Point::new(3, 2)
        );
        assert_eq!(
            align(c, 4, 1, HAlign::Right, VAlign::Bottom),
            Point::new(6, 4)
        );
    }

    #[test]
    fn test_oversized_content_overflows_evenly() {
        assert_eq!(HAlign::Center.resolve(5, 4, 8), 3);
        assert_eq!(HAlign::Right.resolve(5, 4, 8), 1);
    }
}
