//! [`Renderer`] implementation over an embedded-graphics `DrawTarget`

use core::fmt::Debug;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle, StrokeAlignment};
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};
use log::warn;

use crate::ui::atlas::TileAtlas;
use crate::ui::core::Renderer;
use crate::ui::grid::AtlasPos;
use crate::ui::styling::FontRef;

/// Issues widget draw calls on a `DrawTarget`, typically the
/// [`Canvas`](crate::canvas::Canvas).
pub struct DisplayRenderer<'a, D> {
    target: &'a mut D,
    atlas: Option<&'a TileAtlas<'a>>,
}

impl<'a, D> DisplayRenderer<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: &'a mut D) -> Self {
        Self {
            target,
            atlas: None,
        }
    }

    /// Source of tiles for [`blit_tile`](Renderer::blit_tile). Without one,
    /// tile blits draw nothing.
    pub fn with_atlas(mut self, atlas: &'a TileAtlas<'a>) -> Self {
        self.atlas = Some(atlas);
        self
    }
}

impl<D> Renderer for DisplayRenderer<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
    D::Error: Debug,
{
    type Error = D::Error;

    fn fill_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), Self::Error> {
        self.target.fill_solid(&area, color)
    }

    fn stroke_rect(
        &mut self,
        area: Rectangle,
        width: u32,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(color)
            .stroke_width(width)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        area.into_styled(style).draw(self.target)
    }

    fn blit_tile(&mut self, tile: AtlasPos, dest: Rectangle) -> Result<(), Self::Error> {
        let Some(atlas) = self.atlas else {
            warn!("Tile {:?} drawn with no atlas loaded", tile);
            return Ok(());
        };

        if !atlas.draw_tile(tile, dest.top_left, self.target)? {
            warn!("Tile {:?} is outside the {:?} atlas", tile, atlas.grid());
        }
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        font: FontRef,
        color: Rgb565,
    ) -> Result<(), Self::Error> {
        let style = MonoTextStyle::new(font.font(), color);
        Text::with_baseline(text, origin, style, Baseline::Top).draw(self.target)?;
        Ok(())
    }

    fn text_width(&self, text: &str, font: FontRef) -> u32 {
        let style = MonoTextStyle::new(font.font(), Rgb565::WHITE);
        let metrics = style.measure_string(text, Point::zero(), Baseline::Top);
        metrics.bounding_box.size.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::mono_font::ascii::FONT_5X8;

    #[test]
    fn test_fill_and_stroke() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        display.set_allow_overdraw(true);
        let mut renderer = DisplayRenderer::new(&mut display);

        let area = Rectangle::new(Point::new(8, 8), Size::new(8, 8));
        renderer.fill_rect(area, Rgb565::BLACK).unwrap();
        renderer.stroke_rect(area, 1, Rgb565::GREEN).unwrap();

        assert_eq!(display.get_pixel(Point::new(8, 8)), Some(Rgb565::GREEN));
        assert_eq!(display.get_pixel(Point::new(15, 15)), Some(Rgb565::GREEN));
        assert_eq!(display.get_pixel(Point::new(9, 9)), Some(Rgb565::BLACK));
        // Inside alignment keeps the border within the area.
        assert_eq!(display.get_pixel(Point::new(16, 8)), None);
        assert_eq!(display.get_pixel(Point::new(7, 8)), None);
    }

    #[test]
    fn test_text_width_matches_font_metrics() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        let renderer = DisplayRenderer::new(&mut display);
        let font = FontRef(&FONT_5X8);
        assert_eq!(renderer.text_width("", font), 0);
        assert_eq!(renderer.text_width("A", font), 5);
        assert_eq!(renderer.text_width("Left", font), 20);
    }

    #[test]
    fn test_draw_text_stays_below_origin() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        let mut renderer = DisplayRenderer::new(&mut display);
        renderer
            .draw_text("H", Point::new(0, 8), FontRef(&FONT_5X8), Rgb565::GREEN)
            .unwrap();

        let drawn = display.affected_area();
        assert!(drawn.top_left.y >= 8);
        assert!(drawn.top_left.y + drawn.size.height as i32 <= 16);
    }

    #[test]
    fn test_blit_without_atlas_is_noop() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        let mut renderer = DisplayRenderer::new(&mut display);
        renderer
            .blit_tile(
                AtlasPos::new(0, 0),
                Rectangle::new(Point::zero(), Size::new(8, 8)),
            )
            .unwrap();
        assert_eq!(display.get_pixel(Point::new(0, 0)), None);
        assert_eq!(display.get_pixel(Point::new(7, 7)), None);
    }

    /// Target that rejects every pixel.
    struct FailingTarget;

    impl OriginDimensions for FailingTarget {
        fn size(&self) -> Size {
            Size::new(16, 16)
        }
    }

    impl DrawTarget for FailingTarget {
        type Color = Rgb565;
        type Error = ();

        fn draw_iter<I>(&mut self, _pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            Err(())
        }
    }

    #[test]
    fn test_blit_reports_target_error() {
        let data = [0u8; 8];
        let atlas = TileAtlas::new(&data, 2, Size::new(2, 2)).unwrap();
        let mut target = FailingTarget;
        let mut renderer = DisplayRenderer::new(&mut target).with_atlas(&atlas);
        let dest = Rectangle::new(Point::zero(), Size::new(2, 2));

        assert_eq!(renderer.blit_tile(AtlasPos::new(0, 0), dest), Err(()));
        // outside the atlas nothing reaches the target
        assert_eq!(renderer.blit_tile(AtlasPos::new(3, 0), dest), Ok(()));
    }
}
