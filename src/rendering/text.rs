//! Centered text drawing for both typeface kinds.
//!
//! Text is anchored "middle-middle": horizontally on the middle of the advance
//! width, vertically on the midpoint between ascender and descender.

use std::convert::Infallible;

#[cfg(feature = "truetype")]
use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, ScaleFont};
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use image::Rgba;

use crate::font::{FontHandle, Typeface};
use crate::rendering::canvas::Canvas;

/// Built-in fallback face.
pub const BUILT_IN_FONT: &MonoFont<'static> = &FONT_10X20;

pub fn draw_text_centered(
    canvas: &mut Canvas,
    anchor: (i32, i32),
    text: &str,
    ink: Rgba<u8>,
    font: &FontHandle,
) {
    match &font.typeface {
        #[cfg(feature = "truetype")]
        Typeface::TrueType(face) => draw_truetype(canvas, anchor, text, ink, face, font.size),
        Typeface::BuiltIn => draw_built_in(canvas, anchor, text, ink),
    }
}

/// Pixel scale for a point size. Point size is the em size, while ab_glyph
/// scales by ascent - descent.
#[cfg(feature = "truetype")]
fn px_scale(face: &FontVec, size: f32) -> PxScale {
    match face.units_per_em() {
        Some(upem) if upem > 0.0 => PxScale::from(size * face.height_unscaled() / upem),
        _ => PxScale::from(size),
    }
}

#[cfg(feature = "truetype")]
fn draw_truetype(
    canvas: &mut Canvas,
    anchor: (i32, i32),
    text: &str,
    ink: Rgba<u8>,
    face: &FontVec,
    size: f32,
) {
    let scale = px_scale(face, size);
    let scaled = face.as_scaled(scale);

    let mut caret = 0.0f32;
    let mut prev: Option<GlyphId> = None;
    let mut glyphs = Vec::with_capacity(text.len());
    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(p) = prev {
            caret += scaled.kern(p, id);
        }
        glyphs.push((id, caret));
        caret += scaled.h_advance(id);
        prev = Some(id);
    }

    let origin_x = anchor.0 as f32 - caret / 2.0;
    let baseline = anchor.1 as f32 + (scaled.ascent() + scaled.descent()) / 2.0;

    for (id, offset) in glyphs {
        let glyph = id.with_scale_and_position(scale, point(origin_x + offset, baseline));
        if let Some(outlined) = face.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            let (left, top) = (bounds.min.x as i32, bounds.min.y as i32);
            outlined.draw(|x, y, coverage| {
                canvas.blend(left + x as i32, top + y as i32, ink, coverage);
            });
        }
    }
}

/// One-bit glyph mask that the mono font renders into.
struct GlyphMask {
    size: Size,
    bits: Vec<bool>,
}

impl GlyphMask {
    fn new(size: Size) -> Self {
        Self {
            size,
            bits: vec![false; (size.width * size.height) as usize],
        }
    }
}

impl OriginDimensions for GlyphMask {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for GlyphMask {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            if color.is_on()
                && p.x >= 0
                && p.y >= 0
                && (p.x as u32) < self.size.width
                && (p.y as u32) < self.size.height
            {
                self.bits[(p.y as u32 * self.size.width + p.x as u32) as usize] = true;
            }
        }
        Ok(())
    }
}

fn draw_built_in(canvas: &mut Canvas, anchor: (i32, i32), text: &str, ink: Rgba<u8>) {
    let glyph = BUILT_IN_FONT.character_size;
    let advance = glyph.width + BUILT_IN_FONT.character_spacing;
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return;
    }
    let size = Size::new(chars * advance - BUILT_IN_FONT.character_spacing, glyph.height);

    let mut mask = GlyphMask::new(size);
    let style = MonoTextStyle::new(BUILT_IN_FONT, BinaryColor::On);
    if let Err(never) = Text::with_baseline(text, Point::zero(), style, Baseline::Top).draw(&mut mask) {
        match never {}
    }

    let left = anchor.0 - (size.width / 2) as i32;
    let top = anchor.1 - (size.height / 2) as i32;
    for (i, _) in mask.bits.iter().enumerate().filter(|(_, on)| **on) {
        let x = (i as u32 % size.width) as i32;
        let y = (i as u32 / size.width) as i32;
        canvas.blend(left + x, top + y, ink, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgba<u8> = Rgba([26, 26, 26, 255]);
    const INK: Rgba<u8> = Rgba([255, 107, 53, 255]);

    fn inked_columns(canvas: &Canvas) -> (u32, u32) {
        let (mut min_x, mut max_x) = (u32::MAX, 0);
        for (x, _, p) in canvas.as_image().enumerate_pixels() {
            if *p != BG {
                min_x = min_x.min(x);
                max_x = max_x.max(x);
            }
        }
        (min_x, max_x)
    }

    #[test]
    fn built_in_text_is_centered_on_anchor() {
        let mut canvas = Canvas::new(200, 60, BG);
        draw_text_centered(&mut canvas, (100, 30), "PINTS", INK, &FontHandle::built_in(80.0));
        let (min_x, max_x) = inked_columns(&canvas);
        assert!(min_x < max_x, "expected some ink");
        // 5 glyphs of 10px around x=100
        assert!(min_x >= 75 && max_x < 125);
        let mid = (min_x + max_x) / 2;
        assert!((95..=105).contains(&mid), "text midpoint {} not near anchor", mid);
    }

    #[test]
    fn built_in_ignores_requested_size() {
        let mut a = Canvas::new(200, 60, BG);
        let mut b = Canvas::new(200, 60, BG);
        draw_text_centered(&mut a, (100, 30), "LEAGUE", INK, &FontHandle::built_in(80.0));
        draw_text_centered(&mut b, (100, 30), "LEAGUE", INK, &FontHandle::built_in(60.0));
        assert_eq!(a.as_image(), b.as_image());
    }

    #[test]
    fn empty_text_draws_nothing() {
        let mut canvas = Canvas::new(20, 20, BG);
        draw_text_centered(&mut canvas, (10, 10), "", INK, &FontHandle::built_in(60.0));
        assert!(canvas.as_image().pixels().all(|p| *p == BG));
    }
}
