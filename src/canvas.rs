//! Fixed-resolution off-screen canvas and its letterboxed presentation.
//!
//! All widget drawing targets this RAM buffer instead of the window. After a
//! frame is drawn, [`Canvas::present`] scales the buffer by the largest whole
//! factor that fits the window, centers it, and blits it. The transform used
//! for that blit is kept so pointer positions can be mapped back into cells.

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

use crate::ui::GridMetrics;

/// Integer scale and centering offset mapping canvas pixels onto window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letterbox {
    /// Whole-number magnification, never below 1.
    pub scale: u32,
    /// Window pixel of the canvas's top-left corner. Negative when the window is
    /// smaller than the unscaled canvas.
    pub offset: Point,
}

impl Default for Letterbox {
    fn default() -> Self {
        Self::identity()
    }
}

impl Letterbox {
    /// Scale 1, no offset.
    pub const fn identity() -> Self {
        Self {
            scale: 1,
            offset: Point::zero(),
        }
    }

    /// Fit a `surface` into a `window` without distortion or downscaling.
    ///
    /// `scale = max(1, min(Sw / Fw, Sh / Fh))`, and the scaled surface is
    /// centered, rounding the offset toward zero.
    pub fn fit(surface: Size, window: Size) -> Self {
        let scale_x = window.width / surface.width.max(1);
        let scale_y = window.height / surface.height.max(1);
        let scale = scale_x.min(scale_y).max(1);

        let scaled_w = (surface.width * scale) as i32;
        let scaled_h = (surface.height * scale) as i32;

        Self {
            scale,
            offset: Point::new(
                (window.width as i32 - scaled_w) / 2,
                (window.height as i32 - scaled_h) / 2,
            ),
        }
    }
}

/// Off-screen drawing surface implementing `DrawTarget<Color = Rgb565>`.
///
/// Pixels are stored top-down. A transparent canvas starts every frame with
/// all pixels unset, and unset pixels are skipped when presenting so the
/// window's own background shows through.
pub struct Canvas {
    size: Size,
    pixels: Vec<Option<Rgb565>>,
    transparent: bool,
    clear_color: Rgb565,
    flip_vertical: bool,
    transform: Letterbox,
}

impl Canvas {
    /// Allocate a canvas covering the whole grid.
    pub fn new(metrics: &GridMetrics, transparent: bool) -> Self {
        let size = metrics.pixel_size();
        let clear = if transparent {
            None
        } else {
            Some(Rgb565::BLACK)
        };
        Self {
            size,
            pixels: vec![clear; (size.width * size.height) as usize],
            transparent,
            clear_color: Rgb565::BLACK,
            flip_vertical: false,
            transform: Letterbox::identity(),
        }
    }

    /// Color used to clear an opaque canvas.
    pub fn with_clear_color(mut self, color: Rgb565) -> Self {
        self.clear_color = color;
        self
    }

    /// Present rows bottom-up, for hosts whose surfaces have a bottom-left origin.
    pub fn with_flip_vertical(mut self, flip: bool) -> Self {
        self.flip_vertical = flip;
        self
    }

    /// Transform computed by the most recent [`present`](Self::present).
    pub fn transform(&self) -> Letterbox {
        self.transform
    }

    /// Clear the surface and hand it out as the frame's draw target.
    pub fn begin(&mut self) -> &mut Self {
        let fill = if self.transparent {
            None
        } else {
            Some(self.clear_color)
        };
        self.pixels.fill(fill);
        self
    }

    /// Read back one pixel. `None` if unset or out of bounds.
    pub fn pixel(&self, point: Point) -> Option<Rgb565> {
        self.index(point).and_then(|idx| self.pixels[idx])
    }

    #[inline]
    fn index(&self, point: Point) -> Option<usize> {
        let w = self.size.width as i32;
        let h = self.size.height as i32;
        if point.x >= 0 && point.y >= 0 && point.x < w && point.y < h {
            Some(point.y as usize * self.size.width as usize + point.x as usize)
        } else {
            None
        }
    }

    /// Scale the canvas into `window`, centered, and remember the transform.
    ///
    /// Runs of equal pixels on a row are merged into one `fill_solid` call per
    /// run. Returns the letterbox used so the caller can hand it to
    /// [`Gui::set_transform`](crate::ui::Gui::set_transform).
    pub fn present<D>(&mut self, window: &mut D) -> Result<Letterbox, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let letterbox = Letterbox::fit(self.size, window.bounding_box().size);
        if letterbox != self.transform {
            debug!(
                "Canvas {}x{} presented at scale {} offset ({}, {})",
                self.size.width,
                self.size.height,
                letterbox.scale,
                letterbox.offset.x,
                letterbox.offset.y
            );
        }
        self.transform = letterbox;

        let scale = letterbox.scale;
        let stride = self.size.width as usize;
        let rows = self.size.height as usize;

        for row in 0..rows {
            let src_row = if self.flip_vertical { rows - 1 - row } else { row };
            let line = &self.pixels[src_row * stride..(src_row + 1) * stride];
            let dest_y = letterbox.offset.y + (row as u32 * scale) as i32;

            let mut start = 0;
            while start < line.len() {
                let color = line[start];
                let mut end = start + 1;
                while end < line.len() && line[end] == color {
                    end += 1;
                }

                if let Some(color) = color {
                    let area = Rectangle::new(
                        Point::new(letterbox.offset.x + (start as u32 * scale) as i32, dest_y),
                        Size::new((end - start) as u32 * scale, scale),
                    );
                    window.fill_solid(&area, color)?;
                }
                start = end;
            }
        }

        Ok(letterbox)
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if let Some(idx) = self.index(coord) {
                self.pixels[idx] = Some(color);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        // Clamp the area to canvas bounds
        let area = area.intersection(&self.bounding_box());
        let Some(bottom_right) = area.bottom_right() else {
            return Ok(());
        };

        let stride = self.size.width as usize;
        for y in area.top_left.y..=bottom_right.y {
            let row = y as usize * stride;
            let x0 = row + area.top_left.x as usize;
            let x1 = row + bottom_right.x as usize;
            self.pixels[x0..=x1].fill(Some(color));
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.pixels.fill(Some(color));
        Ok(())
    }
}
