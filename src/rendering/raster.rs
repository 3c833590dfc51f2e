//! Rasterizer: runs a paint list over a fresh canvas

use image::Rgba;
use log::debug;

use crate::font::FontSet;
use crate::rendering::canvas::Canvas;
use crate::rendering::paint::PaintCommand;
use crate::Result;

/// Paint `commands` in order onto a `width` x `height` canvas filled with
/// `background`. Every command is bounds-checked before any pixel is touched.
pub fn rasterize(
    width: u32,
    height: u32,
    background: Rgba<u8>,
    commands: &[PaintCommand],
    fonts: &FontSet,
) -> Result<Canvas> {
    for cmd in commands {
        cmd.check_bounds(width, height)?;
    }
    let mut canvas = Canvas::new(width, height, background);
    for cmd in commands {
        cmd.apply(&mut canvas, fonts);
    }
    debug!("rasterized {} commands onto {}x{}", commands.len(), width, height);
    Ok(canvas)
}
