// src/ui/components/panel.rs
//! Bordered panels assembled from the theme's panel kit tiles

use embedded_graphics::prelude::*;
use log::warn;

use crate::ui::core::Renderer;
use crate::ui::error::{Error, Result};
use crate::ui::frame::Frame;
use crate::ui::grid::{AtlasPos, GridRect};
use crate::ui::layouts::Placement;
use crate::ui::styling::PanelKit;

/// Tile drawn at `cell` of a panel covering `rect`.
///
/// One-row panels use the end caps around a strip, one-column panels a
/// top-left corner, left edges and a bottom-left corner. Everything else is a
/// nine-slice: corners, edges along the border, fill inside.
fn panel_tile(kit: &PanelKit, rect: GridRect, cell: Point) -> AtlasPos {
    let first_col = cell.x == rect.x;
    let last_col = cell.x == rect.right() - 1;
    let first_row = cell.y == rect.y;
    let last_row = cell.y == rect.bottom() - 1;

    if rect.h == 1 {
        return match (first_col, last_col) {
            (true, false) => kit.cap_left,
            (false, true) => kit.cap_right,
            // a one-cell panel is a lone strip tile
            _ => kit.strip,
        };
    }

    if rect.w == 1 {
        return if first_row {
            kit.top_left
        } else if last_row {
            kit.bottom_left
        } else {
            kit.left
        };
    }

    match (first_row, last_row, first_col, last_col) {
        (true, _, true, _) => kit.top_left,
        (true, _, _, true) => kit.top_right,
        (true, _, _, _) => kit.top,
        (_, true, true, _) => kit.bottom_left,
        (_, true, _, true) => kit.bottom_right,
        (_, true, _, _) => kit.bottom,
        (_, _, true, _) => kit.left,
        (_, _, _, true) => kit.right,
        _ => kit.fill,
    }
}

impl Frame<'_> {
    /// Draw a panel from the theme's [`PanelKit`], one tile per cell.
    ///
    /// Draws nothing if the rect is empty or the theme has no panel kit.
    /// `Auto` extents are one cell.
    pub fn panel<R: Renderer>(
        &mut self,
        renderer: &mut R,
        placement: Placement,
    ) -> Result<GridRect, R::Error> {
        let rect = self.place(placement, (1, 1)).map_err(|e| e.widen())?;
        if rect.is_empty() {
            return Ok(rect);
        }
        let Some(kit) = self.theme().panel_kit else {
            warn!("Panel at ({}, {}) skipped: theme has no panel kit", rect.x, rect.y);
            return Ok(rect);
        };

        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                let cell = Point::new(x, y);
                renderer
                    .blit_tile(panel_tile(&kit, rect, cell), self.cell_pixels(cell))
                    .map_err(Error::Draw)?;
            }
        }
        Ok(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GuiConfig;
    use crate::ui::core::PointerInput;
    use crate::ui::frame::Gui;
    use crate::ui::styling::Theme;
    use crate::ui::testing::RecordingRenderer;
    use alloc::vec::Vec;
    use embedded_graphics::primitives::Rectangle;

    const KIT: PanelKit = PanelKit::block(AtlasPos::new(0, 0));

    fn draw_panel(placement: Placement) -> RecordingRenderer {
        let mut gui =
            Gui::new(GuiConfig::default()).with_theme(Theme::terminal().with_panel_kit(KIT));
        let mut frame = gui.frame(PointerInput::default());
        let mut renderer = RecordingRenderer::new();
        frame.panel(&mut renderer, placement).unwrap();
        renderer
    }

    fn count(renderer: &RecordingRenderer, tile: AtlasPos) -> usize {
        renderer.tiles().filter(|(t, _)| *t == tile).count()
    }

    #[test]
    fn test_single_row_panel() {
        let renderer = draw_panel(Placement::rect(1, 1, 6, 1));
        let tiles: Vec<_> = renderer.tiles().map(|(t, _)| t).collect();
        assert_eq!(
            tiles,
            [
                KIT.cap_left,
                KIT.strip,
                KIT.strip,
                KIT.strip,
                KIT.strip,
                KIT.cap_right
            ]
        );
    }

    #[test]
    fn test_multi_row_panel_counts() {
        let (w, h) = (7usize, 5usize);
        let renderer = draw_panel(Placement::rect(2, 3, w as i32, h as i32));

        assert_eq!(renderer.tiles().count(), 4 + 2 * (w - 2) + 2 * (h - 2) + (w - 2) * (h - 2));
        for corner in [KIT.top_left, KIT.top_right, KIT.bottom_left, KIT.bottom_right] {
            assert_eq!(count(&renderer, corner), 1);
        }
        assert_eq!(count(&renderer, KIT.top), w - 2);
        assert_eq!(count(&renderer, KIT.bottom), w - 2);
        assert_eq!(count(&renderer, KIT.left), h - 2);
        assert_eq!(count(&renderer, KIT.right), h - 2);
        assert_eq!(count(&renderer, KIT.fill), (w - 2) * (h - 2));
    }

    #[test]
    fn test_corner_positions() {
        let renderer = draw_panel(Placement::rect(2, 3, 4, 2));
        let dest = |tile: AtlasPos| {
            renderer
                .tiles()
                .find(|(t, _)| *t == tile)
                .map(|(_, d)| d)
        };
        assert_eq!(
            dest(KIT.top_left),
            Some(Rectangle::new(Point::new(16, 24), Size::new(8, 8)))
        );
        assert_eq!(
            dest(KIT.bottom_right),
            Some(Rectangle::new(Point::new(40, 32), Size::new(8, 8)))
        );
    }

    #[test]
    fn test_degenerate_panels() {
        let single = draw_panel(Placement::rect(0, 0, 1, 1));
        let tiles: Vec<_> = single.tiles().map(|(t, _)| t).collect();
        assert_eq!(tiles, [KIT.strip]);

        let column = draw_panel(Placement::rect(0, 0, 1, 4));
        let tiles: Vec<_> = column.tiles().map(|(t, _)| t).collect();
        assert_eq!(tiles, [KIT.top_left, KIT.left, KIT.left, KIT.bottom_left]);

        assert!(draw_panel(Placement::rect(0, 0, 0, 4)).commands.is_empty());
        assert!(draw_panel(Placement::rect(0, 0, 4, -2)).commands.is_empty());
    }

    #[test]
    fn test_panel_without_kit_draws_nothing() {
        let mut gui = Gui::new(GuiConfig::default());
        let mut frame = gui.frame(PointerInput::default());
        let mut renderer = RecordingRenderer::new();

        let rect = frame.panel(&mut renderer, Placement::rect(0, 0, 5, 5)).unwrap();
        assert_eq!(rect, GridRect::new(0, 0, 5, 5));
        assert!(renderer.commands.is_empty());
    }

    #[test]
    fn test_auto_panel_advances_layout() {
        let mut gui =
            Gui::new(GuiConfig::default()).with_theme(Theme::terminal().with_panel_kit(KIT));
        let mut frame = gui.frame(PointerInput::default());
        let mut renderer = RecordingRenderer::new();

        frame.vbox(Placement::at(0, 0)).unwrap();
        frame.panel(&mut renderer, Placement::sized(4, 3)).unwrap();
        let below = frame.panel(&mut renderer, Placement::sized(4, 1)).unwrap();
        assert_eq!(below, GridRect::new(0, 3, 4, 1));
    }
}
