// src/ui/layouts/flow.rs
//! Flow layout: a stack of horizontal/vertical boxes with a placement cursor

use embedded_graphics::prelude::Point;
use heapless::Vec;
use log::{debug, trace, warn};

use crate::config::MAX_LAYOUT_DEPTH;
use crate::ui::error::{Error, Result};
use crate::ui::grid::GridRect;

/// Where an element goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Fixed cell coordinates, bypassing the layout cursor
    Explicit(i32, i32),
    /// Next slot of the current layout box
    FollowCursor,
}

/// How big an element is along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    /// Exactly this many cells
    Fixed(i32),
    /// Sized to content: text for widgets, children for boxes
    Auto,
    /// Whatever the enclosing container has left along this axis
    Fill,
}

/// Position plus per-axis extent of a widget or box request
///
/// # Examples
/// ```ignore
/// Placement::auto();               // next cell, sized to content
/// Placement::sized(10, 1);         // next cell, 10x1
/// Placement::at(4, 2);             // cell (4, 2), sized to content
/// Placement::rect(4, 2, 10, 1);    // exactly there, exactly that size
/// Placement::auto().fill_width();  // next cell, stretched across the box
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub position: Position,
    pub width: Extent,
    pub height: Extent,
}

impl Default for Placement {
    fn default() -> Self {
        Self::auto()
    }
}

impl Placement {
    pub const fn auto() -> Self {
        Self {
            position: Position::FollowCursor,
            width: Extent::Auto,
            height: Extent::Auto,
        }
    }

    pub const fn sized(w: i32, h: i32) -> Self {
        Self {
            position: Position::FollowCursor,
            width: Extent::Fixed(w),
            height: Extent::Fixed(h),
        }
    }

    pub const fn at(x: i32, y: i32) -> Self {
        Self {
            position: Position::Explicit(x, y),
            width: Extent::Auto,
            height: Extent::Auto,
        }
    }

    pub const fn rect(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            position: Position::Explicit(x, y),
            width: Extent::Fixed(w),
            height: Extent::Fixed(h),
        }
    }

    pub const fn with_width(mut self, width: Extent) -> Self {
        self.width = width;
        self
    }

    pub const fn with_height(mut self, height: Extent) -> Self {
        self.height = height;
        self
    }

    pub const fn fill_width(self) -> Self {
        self.with_width(Extent::Fill)
    }

    pub const fn fill_height(self) -> Self {
        self.with_height(Extent::Fill)
    }
}

impl From<GridRect> for Placement {
    fn from(r: GridRect) -> Self {
        Self::rect(r.x, r.y, r.w, r.h)
    }
}

/// Flow direction of a layout box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// No flow: every cell lands on the box origin
    Free,
    /// Left to right
    Horizontal,
    /// Top to bottom
    Vertical,
}

/// State of one open layout box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub mode: LayoutMode,
    /// Absolute cell of the box's top-left corner
    pub origin: Point,
    /// Offset of the next slot from `origin`
    pub cursor: Point,
    /// Area the box may occupy; `Fill` children and right/bottom alignment measure against it
    pub bounds: GridRect,
    /// Furthest column/row offset reached by content so far
    pub extent: Point,
    width: Extent,
    height: Extent,
    follows_parent: bool,
}

impl LayoutContext {
    fn new(mode: LayoutMode, bounds: GridRect, width: Extent, height: Extent, follows: bool) -> Self {
        Self {
            mode,
            origin: Point::new(bounds.x, bounds.y),
            cursor: Point::zero(),
            bounds,
            extent: Point::zero(),
            width,
            height,
            follows_parent: follows,
        }
    }

    /// Take the next `w` x `h` slot and advance the cursor.
    fn place(&mut self, w: i32, h: i32, spacing: i32) -> GridRect {
        let slot = GridRect::new(
            self.origin.x + self.cursor.x,
            self.origin.y + self.cursor.y,
            w,
            h,
        );

        self.extent.x = self.extent.x.max(self.cursor.x + w);
        self.extent.y = self.extent.y.max(self.cursor.y + h);

        match self.mode {
            LayoutMode::Horizontal => self.cursor.x += w + spacing,
            LayoutMode::Vertical => self.cursor.y += h + spacing,
            LayoutMode::Free => {}
        }

        slot
    }

    /// Absolute cell of the next slot.
    pub fn next_origin(&self) -> Point {
        self.origin + self.cursor
    }

    /// Cells left between the next slot and the box's far edges.
    pub fn remaining(&self) -> (i32, i32) {
        let next = self.next_origin();
        (
            (self.bounds.right() - next.x).max(0),
            (self.bounds.bottom() - next.y).max(0),
        )
    }

    /// Final size: fixed and fill extents keep their bounds, auto extents
    /// shrink to what the content used.
    fn resolved(&self) -> GridRect {
        let w = match self.width {
            Extent::Auto => self.extent.x,
            Extent::Fixed(_) | Extent::Fill => self.bounds.w,
        };
        let h = match self.height {
            Extent::Auto => self.extent.y,
            Extent::Fixed(_) | Extent::Fill => self.bounds.h,
        };
        GridRect::new(self.origin.x, self.origin.y, w, h)
    }
}

/// Bounded stack of open layout boxes.
///
/// The grid itself acts as the root container: top-level boxes that follow
/// the cursor anchor at its origin, and `Fill` measures against it when no
/// box is open.
#[derive(Debug, Clone)]
pub struct LayoutStack {
    stack: Vec<LayoutContext, MAX_LAYOUT_DEPTH>,
    root: GridRect,
    spacing: i32,
}

impl LayoutStack {
    pub fn new(root: GridRect) -> Self {
        Self {
            stack: Vec::new(),
            root,
            spacing: 0,
        }
    }

    /// Gap in cells inserted after every placed slot.
    pub fn set_spacing(&mut self, spacing: i32) {
        self.spacing = spacing;
    }

    pub fn spacing(&self) -> i32 {
        self.spacing
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn current(&self) -> Option<&LayoutContext> {
        self.stack.last()
    }

    /// Bounds of the innermost box, or the root when none is open.
    pub fn container(&self) -> GridRect {
        self.current().map_or(self.root, |ctx| ctx.bounds)
    }

    /// Space left from `at` to the container's far edges.
    fn available_from(&self, at: Point) -> (i32, i32) {
        let c = self.container();
        ((c.right() - at.x).max(0), (c.bottom() - at.y).max(0))
    }

    /// Resolve the extents of a request whose content measures `content`.
    fn resolve_size(&self, at: Point, width: Extent, height: Extent, content: (i32, i32)) -> (i32, i32) {
        let (avail_w, avail_h) = self.available_from(at);
        let w = match width {
            Extent::Fixed(w) => w,
            Extent::Auto => content.0,
            Extent::Fill => avail_w,
        };
        let h = match height {
            Extent::Fixed(h) => h,
            Extent::Auto => content.1,
            Extent::Fill => avail_h,
        };
        (w, h)
    }

    /// Open a box. Returns the area it may occupy.
    ///
    /// A box that follows the cursor anchors at the parent's next slot; the
    /// parent advances past it when the box is closed.
    pub fn open(&mut self, mode: LayoutMode, placement: Placement) -> Result<GridRect> {
        if self.stack.is_full() {
            warn!(
                "Layout box {:?} ignored: stack already {} deep",
                mode, MAX_LAYOUT_DEPTH
            );
            return Err(Error::LayoutStackExhausted(MAX_LAYOUT_DEPTH));
        }

        let (anchor, follows) = match placement.position {
            Position::Explicit(x, y) => (Point::new(x, y), false),
            Position::FollowCursor => match self.current() {
                Some(parent) => (parent.next_origin(), true),
                None => (Point::new(self.root.x, self.root.y), false),
            },
        };

        // Auto boxes may grow into everything the container has left.
        let available = self.available_from(anchor);
        let (w, h) = self.resolve_size(anchor, placement.width, placement.height, available);
        let bounds = GridRect::new(anchor.x, anchor.y, w, h);

        let ctx = LayoutContext::new(mode, bounds, placement.width, placement.height, follows);
        // Capacity was checked above
        let _ = self.stack.push(ctx);

        debug!(
            "Opened {:?} box at ({}, {}) bounds {}x{} depth {}",
            mode,
            bounds.x,
            bounds.y,
            bounds.w,
            bounds.h,
            self.stack.len()
        );
        Ok(bounds)
    }

    /// Close the innermost box, returning the area it ended up covering.
    pub fn close(&mut self) -> Option<GridRect> {
        let Some(ctx) = self.stack.pop() else {
            warn!("end_box called with no layout box open");
            return None;
        };

        let used = ctx.resolved();
        let spacing = self.spacing;
        if ctx.follows_parent
            && let Some(parent) = self.stack.last_mut()
        {
            parent.place(used.w, used.h, spacing);
        }

        debug!(
            "Closed {:?} box, covered {}x{} at ({}, {})",
            ctx.mode, used.w, used.h, used.x, used.y
        );
        Some(used)
    }

    /// Take the next `w` x `h` slot in the current box.
    pub fn next_cell(&mut self, w: i32, h: i32) -> Result<GridRect> {
        let spacing = self.spacing;
        let Some(ctx) = self.stack.last_mut() else {
            warn!("Auto-placed {}x{} cell requested with no layout box open", w, h);
            return Err(Error::NoActiveLayout);
        };
        let slot = ctx.place(w, h, spacing);
        trace!("Placed cell ({}, {}) {}x{}", slot.x, slot.y, slot.w, slot.h);
        Ok(slot)
    }

    /// Resolve a widget placement whose content measures `content` cells.
    pub fn resolve(&mut self, placement: Placement, content: (i32, i32)) -> Result<GridRect> {
        match placement.position {
            Position::Explicit(x, y) => {
                let at = Point::new(x, y);
                let (w, h) = self.resolve_size(at, placement.width, placement.height, content);
                Ok(GridRect::new(x, y, w, h))
            }
            Position::FollowCursor => {
                let Some(at) = self.current().map(LayoutContext::next_origin) else {
                    warn!("Auto placement with no layout box open");
                    return Err(Error::NoActiveLayout);
                };
                let (w, h) = self.resolve_size(at, placement.width, placement.height, content);
                self.next_cell(w, h)
            }
        }
    }
}
