//! Glyph drawing via embedded-graphics
//!
//! This module provides the [`GlyphCanvas`] struct, a 5x8 pixel
//! [`DrawTarget`] from the embedded-graphics ecosystem that renders into a
//! [`Glyph`] ready for [`Display::create_char`](crate::Display::create_char)
//! or [`Display::create_animation`](crate::Display::create_animation).
//!
//! ## Example
//!
//! ```
//! use embedded_graphics::{
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{PrimitiveStyle, Rectangle},
//! };
//! use st7036::GlyphCanvas;
//!
//! let mut canvas = GlyphCanvas::new();
//! let _ = Rectangle::new(Point::new(0, 0), Size::new(5, 8))
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut canvas);
//!
//! assert_eq!(canvas.glyph(), [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F]);
//! ```

use core::convert::Infallible;

use embedded_graphics_core::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
};

use crate::animation::Glyph;

/// Glyph width in pixels
pub const GLYPH_WIDTH: u32 = 5;

/// Glyph height in pixels
pub const GLYPH_HEIGHT: u32 = 8;

/// A 5x8 drawing surface backed by a glyph bitmap
///
/// Column 0 is the leftmost pixel and maps to bit 4 of each row byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GlyphCanvas {
    rows: Glyph,
}

impl GlyphCanvas {
    /// Create a blank canvas
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a canvas starting from an existing glyph
    pub fn from_glyph(glyph: Glyph) -> Self {
        Self {
            rows: glyph.map(|row| row & 0x1F),
        }
    }

    /// The rendered glyph
    pub fn glyph(&self) -> Glyph {
        self.rows
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: BinaryColor) {
        let Some(row) = self.rows.get_mut(y as usize) else {
            return;
        };
        let bit = 0x10 >> x;
        match color {
            BinaryColor::On => *row |= bit,
            BinaryColor::Off => *row &= !bit,
        }
    }
}

impl DrawTarget for GlyphCanvas {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }

            let x = x as u32;
            let y = y as u32;

            if x >= GLYPH_WIDTH || y >= GLYPH_HEIGHT {
                continue;
            }

            self.set_pixel(x, y, color);
        }

        Ok(())
    }
}

impl OriginDimensions for GlyphCanvas {
    fn size(&self) -> Size {
        Size::new(GLYPH_WIDTH, GLYPH_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{Line, PrimitiveStyle};

    #[test]
    fn test_size_is_five_by_eight() {
        assert_eq!(GlyphCanvas::new().size(), Size::new(5, 8));
    }

    #[test]
    fn test_leftmost_column_is_bit_four() {
        let mut canvas = GlyphCanvas::new();
        Pixel(Point::new(0, 0), BinaryColor::On)
            .draw(&mut canvas)
            .unwrap();
        Pixel(Point::new(4, 3), BinaryColor::On)
            .draw(&mut canvas)
            .unwrap();
        assert_eq!(canvas.glyph(), [0x10, 0, 0, 0x01, 0, 0, 0, 0]);
    }

    #[test]
    fn test_out_of_bounds_pixels_ignored() {
        let mut canvas = GlyphCanvas::new();
        let pixels = [
            Pixel(Point::new(-1, 0), BinaryColor::On),
            Pixel(Point::new(5, 0), BinaryColor::On),
            Pixel(Point::new(0, 8), BinaryColor::On),
        ];
        canvas.draw_iter(pixels).unwrap();
        assert_eq!(canvas.glyph(), [0; 8]);
    }

    #[test]
    fn test_off_pixels_clear_bits() {
        let mut canvas = GlyphCanvas::from_glyph([0xFF; 8]);
        assert_eq!(canvas.glyph(), [0x1F; 8]);
        Line::new(Point::new(2, 0), Point::new(2, 7))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::Off, 1))
            .draw(&mut canvas)
            .unwrap();
        assert_eq!(canvas.glyph(), [0x1B; 8]);
    }

    #[test]
    fn test_clear_fills_canvas() {
        let mut canvas = GlyphCanvas::new();
        canvas.clear(BinaryColor::On).unwrap();
        assert_eq!(canvas.glyph(), [0x1F; 8]);
    }
}
