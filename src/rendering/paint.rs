//! Paint command set for the logo

use image::Rgba;
use log::debug;

use crate::font::{FontRole, FontSet};
use crate::rendering::canvas::{BoundingBox, Canvas};
use crate::rendering::text::draw_text_centered;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    FillRect {
        bounds: BoundingBox,
        color: Rgba<u8>,
    },
    StrokeRect {
        bounds: BoundingBox,
        width: i32,
        color: Rgba<u8>,
    },
    FillEllipse {
        bounds: BoundingBox,
        color: Rgba<u8>,
    },
    /// Clockwise from `start` to `end`, degrees from 3 o'clock.
    StrokeArc {
        bounds: BoundingBox,
        start: f32,
        end: f32,
        width: i32,
        color: Rgba<u8>,
    },
    /// Centered on `anchor` both ways.
    Text {
        anchor: (i32, i32),
        text: String,
        color: Rgba<u8>,
        font: FontRole,
    },
}

impl PaintCommand {
    pub fn name(&self) -> &'static str {
        match self {
            PaintCommand::FillRect { .. } => "fill_rect",
            PaintCommand::StrokeRect { .. } => "stroke_rect",
            PaintCommand::FillEllipse { .. } => "fill_ellipse",
            PaintCommand::StrokeArc { .. } => "stroke_arc",
            PaintCommand::Text { .. } => "text",
        }
    }

    /// Reject commands whose geometry reaches outside a `width` x `height`
    /// canvas. Text is checked by its anchor only.
    pub fn check_bounds(&self, width: u32, height: u32) -> Result<()> {
        let ok = match self {
            PaintCommand::FillRect { bounds, .. }
            | PaintCommand::StrokeRect { bounds, .. }
            | PaintCommand::FillEllipse { bounds, .. }
            | PaintCommand::StrokeArc { bounds, .. } => bounds.fits_within(width, height),
            PaintCommand::Text { anchor: (x, y), .. } => {
                *x >= 0 && *y >= 0 && (*x as u32) < width && (*y as u32) < height
            }
        };
        if ok {
            Ok(())
        } else {
            Err(Error::Geometry(format!(
                "{:?} does not fit a {}x{} canvas",
                self, width, height
            )))
        }
    }

    pub fn apply(&self, canvas: &mut Canvas, fonts: &FontSet) {
        debug!("paint {}", self.name());
        match self {
            PaintCommand::FillRect { bounds, color } => canvas.fill_rect(*bounds, *color),
            PaintCommand::StrokeRect {
                bounds,
                width,
                color,
            } => canvas.stroke_rect(*bounds, *width, *color),
            PaintCommand::FillEllipse { bounds, color } => canvas.fill_ellipse(*bounds, *color),
            PaintCommand::StrokeArc {
                bounds,
                start,
                end,
                width,
                color,
            } => canvas.stroke_arc(*bounds, *start, *end, *width, *color),
            PaintCommand::Text {
                anchor,
                text,
                color,
                font,
            } => draw_text_centered(canvas, *anchor, text, *color, fonts.get(*font)),
        }
    }
}
