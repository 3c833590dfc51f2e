//! Fixed-size RGBA raster surface and the shape primitives drawn onto it.
//!
//! Shapes are not anti-aliased and *replace* the pixels they cover with the
//! given color, alpha included. Overlaying the same translucent shape twice
//! therefore leaves the canvas unchanged. Glyph coverage is the only blended
//! write (see [`Canvas::blend`]).
//!
//! Blending interpolates all four channels straight toward the ink. Pillow's
//! newer mask fill weights the color channels more heavily when the
//! destination alpha is low, so anti-aliased glyph edges over the translucent
//! accent circle come out slightly different from Pillow's.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage};
use sha2::{Digest, Sha256};

use crate::Result;

/// Inclusive pixel box `[x0, y0, x1, y1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl BoundingBox {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0 + 1
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0 + 1
    }

    /// Shrink every edge by `by` pixels.
    pub fn inset(&self, by: i32) -> Self {
        Self::new(self.x0 + by, self.y0 + by, self.x1 - by, self.y1 - by)
    }

    pub fn is_empty(&self) -> bool {
        self.x0 > self.x1 || self.y0 > self.y1
    }

    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        !self.is_empty()
            && self.x0 >= 0
            && self.y0 >= 0
            && i64::from(self.x1) < i64::from(width)
            && i64::from(self.y1) < i64::from(height)
    }

    fn center(&self) -> (f32, f32) {
        (
            (self.x0 + self.x1 + 1) as f32 / 2.0,
            (self.y0 + self.y1 + 1) as f32 / 2.0,
        )
    }

    /// Whether the center of pixel `(x, y)` lies inside the ellipse inscribed
    /// in this box.
    fn ellipse_contains(&self, x: i32, y: i32) -> bool {
        if self.is_empty() {
            return false;
        }
        let (cx, cy) = self.center();
        let a = self.width() as f32 / 2.0;
        let b = self.height() as f32 / 2.0;
        let dx = (x as f32 + 0.5 - cx) / a;
        let dy = (y as f32 + 0.5 - cy) / b;
        dx * dx + dy * dy <= 1.0
    }
}

pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height()
    }

    fn put(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if self.contains(x, y) {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Visit every on-canvas pixel of `bounds`.
    fn for_each_in(&mut self, bounds: BoundingBox, mut f: impl FnMut(&mut Self, i32, i32)) {
        let x_end = bounds.x1.min(self.width() as i32 - 1);
        let y_end = bounds.y1.min(self.height() as i32 - 1);
        for y in bounds.y0.max(0)..=y_end {
            for x in bounds.x0.max(0)..=x_end {
                f(self, x, y);
            }
        }
    }

    pub fn fill_rect(&mut self, bounds: BoundingBox, color: Rgba<u8>) {
        self.for_each_in(bounds, |canvas, x, y| canvas.put(x, y, color));
    }

    /// Outline drawn on the inside of `bounds`, `width` pixels thick.
    pub fn stroke_rect(&mut self, bounds: BoundingBox, width: i32, color: Rgba<u8>) {
        let inner = bounds.inset(width);
        self.for_each_in(bounds, |canvas, x, y| {
            let interior = x >= inner.x0 && x <= inner.x1 && y >= inner.y0 && y <= inner.y1;
            if !interior {
                canvas.put(x, y, color);
            }
        });
    }

    pub fn fill_ellipse(&mut self, bounds: BoundingBox, color: Rgba<u8>) {
        self.for_each_in(bounds, |canvas, x, y| {
            if bounds.ellipse_contains(x, y) {
                canvas.put(x, y, color);
            }
        });
    }

    /// Stroke part of the ellipse inscribed in `bounds`.
    ///
    /// Angles are in degrees, measured clockwise from 3 o'clock, and the arc
    /// runs clockwise from `start` to `end`. The stroke grows inward.
    pub fn stroke_arc(
        &mut self,
        bounds: BoundingBox,
        start: f32,
        end: f32,
        width: i32,
        color: Rgba<u8>,
    ) {
        let inner = bounds.inset(width);
        let (cx, cy) = bounds.center();
        self.for_each_in(bounds, |canvas, x, y| {
            if !bounds.ellipse_contains(x, y) || inner.ellipse_contains(x, y) {
                return;
            }
            let angle = (y as f32 + 0.5 - cy)
                .atan2(x as f32 + 0.5 - cx)
                .to_degrees();
            if angle_in_sweep(angle, start, end) {
                canvas.put(x, y, color);
            }
        });
    }

    /// Move every channel of pixel `(x, y)` toward `ink` by `coverage`.
    pub fn blend(&mut self, x: i32, y: i32, ink: Rgba<u8>, coverage: f32) {
        if !self.contains(x, y) {
            return;
        }
        let coverage = coverage.clamp(0.0, 1.0);
        if coverage <= 0.0 {
            return;
        }
        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        for (d, s) in dst.0.iter_mut().zip(ink.0) {
            let mixed = f32::from(*d) + (f32::from(s) - f32::from(*d)) * coverage;
            *d = mixed.round() as u8;
        }
    }

    /// Hex SHA-256 of the raw RGBA bytes, row-major. Independent of the PNG
    /// encoder.
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(self.image.as_raw()))
    }

    /// Encode the canvas as an 8-bit RGBA PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        PngEncoder::new(&mut buf).write_image(
            self.image.as_raw(),
            self.width(),
            self.height(),
            ExtendedColorType::Rgba8,
        )?;
        Ok(buf)
    }
}

fn angle_in_sweep(angle: f32, start: f32, end: f32) -> bool {
    if (end - start).abs() >= 360.0 {
        return true;
    }
    let angle = angle.rem_euclid(360.0);
    let start = start.rem_euclid(360.0);
    let end = end.rem_euclid(360.0);
    if start <= end {
        angle >= start && angle <= end
    } else {
        angle >= start || angle <= end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    #[test]
    fn bounding_box_fits_within_canvas() {
        assert!(BoundingBox::new(0, 0, 1023, 1023).fits_within(1024, 1024));
        assert!(!BoundingBox::new(0, 0, 1024, 10).fits_within(1024, 1024));
        assert!(!BoundingBox::new(-1, 0, 10, 10).fits_within(1024, 1024));
        assert!(!BoundingBox::new(10, 10, 5, 20).fits_within(1024, 1024));
    }

    #[test]
    fn fill_rect_is_inclusive() {
        let mut c = Canvas::new(8, 8, CLEAR);
        c.fill_rect(BoundingBox::new(2, 2, 4, 4), RED);
        assert_eq!(c.pixel(2, 2), RED);
        assert_eq!(c.pixel(4, 4), RED);
        assert_eq!(c.pixel(5, 4), CLEAR);
        assert_eq!(c.pixel(1, 2), CLEAR);
    }

    #[test]
    fn translucent_fill_replaces_instead_of_accumulating() {
        let tint = Rgba([255, 107, 53, 20]);
        let mut once = Canvas::new(4, 4, RED);
        once.fill_rect(BoundingBox::new(0, 0, 3, 3), tint);
        let mut five = Canvas::new(4, 4, RED);
        for _ in 0..5 {
            five.fill_rect(BoundingBox::new(0, 0, 3, 3), tint);
        }
        assert_eq!(once.pixel(1, 1), tint);
        assert_eq!(once.as_image(), five.as_image());
    }

    #[test]
    fn stroke_rect_leaves_interior_untouched() {
        let mut c = Canvas::new(10, 10, CLEAR);
        c.stroke_rect(BoundingBox::new(0, 0, 9, 9), 2, RED);
        assert_eq!(c.pixel(0, 5), RED);
        assert_eq!(c.pixel(1, 5), RED);
        assert_eq!(c.pixel(2, 5), CLEAR);
        assert_eq!(c.pixel(8, 8), RED);
    }

    #[test]
    fn ellipse_covers_center_not_corners() {
        let mut c = Canvas::new(20, 20, CLEAR);
        c.fill_ellipse(BoundingBox::new(0, 0, 19, 19), RED);
        assert_eq!(c.pixel(10, 10), RED);
        assert_eq!(c.pixel(0, 10), RED);
        assert_eq!(c.pixel(0, 0), CLEAR);
        assert_eq!(c.pixel(19, 19), CLEAR);
    }

    #[test]
    fn right_half_arc_skips_left_side() {
        let mut c = Canvas::new(40, 40, CLEAR);
        c.stroke_arc(BoundingBox::new(0, 0, 39, 39), 270.0, 90.0, 4, RED);
        assert_eq!(c.pixel(38, 20), RED);
        assert_eq!(c.pixel(1, 20), CLEAR);
        // hollow center
        assert_eq!(c.pixel(20, 20), CLEAR);
    }

    #[test]
    fn sweep_wraps_through_zero() {
        assert!(angle_in_sweep(0.0, 270.0, 90.0));
        assert!(angle_in_sweep(-45.0, 270.0, 90.0));
        assert!(!angle_in_sweep(180.0, 270.0, 90.0));
        assert!(angle_in_sweep(180.0, 90.0, 270.0));
        assert!(angle_in_sweep(123.0, 0.0, 360.0));
    }

    #[test]
    fn blend_interpolates_all_channels() {
        let mut c = Canvas::new(2, 2, Rgba([0, 0, 0, 0]));
        c.blend(0, 0, Rgba([200, 100, 50, 255]), 0.5);
        assert_eq!(c.pixel(0, 0), Rgba([100, 50, 25, 128]));
        c.blend(1, 1, RED, 0.0);
        assert_eq!(c.pixel(1, 1), Rgba([0, 0, 0, 0]));
        // off-canvas writes are ignored
        c.blend(5, 5, RED, 1.0);
    }

    #[test]
    fn digest_tracks_pixels_not_encoding() {
        let a = Canvas::new(4, 4, RED);
        let mut b = Canvas::new(4, 4, RED);
        assert_eq!(a.digest(), b.digest());
        b.fill_rect(BoundingBox::new(3, 3, 3, 3), CLEAR);
        assert_ne!(a.digest(), b.digest());
    }

    #[test]
    fn encode_png_emits_signature() {
        let c = Canvas::new(16, 16, RED);
        let png = c.encode_png().expect("encode");
        assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");
    }
}
