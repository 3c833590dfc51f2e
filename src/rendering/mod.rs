//! Rendering: raster canvas, paint commands and the splash logo layout

pub mod canvas;
pub mod layout;
pub mod paint;
pub mod raster;
pub mod text;

use sha2::{Digest, Sha256};

/// An encoded PNG together with its pixel dimensions.
#[derive(Debug, Clone)]
pub struct RenderedImage {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl RenderedImage {
    /// Hex SHA-256 of the PNG bytes.
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(&self.png_data))
    }
}
