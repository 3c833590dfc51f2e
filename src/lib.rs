//! Pints League splash logo generator
//!
//! Draws the 1024x1024 splash logo (a beer mug over an orange accent circle,
//! with "PINTS" and "LEAGUE" underneath) and writes it as an RGBA PNG.
//!
//! Output is deterministic: for the same font outcome, every run produces the
//! same bytes. The only tolerated failure is a missing or unreadable preferred
//! font, which silently switches to a built-in mono font.
//!
//! # Example
//!
//! ```no_run
//! use splashgen::{Composer, ComposerConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let composer = Composer::new(ComposerConfig::default());
//! let written = composer.write()?;
//! println!("wrote {} ({})", written.path.display(), written.image.digest());
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::PathBuf;

use log::{debug, info};

pub mod error;
pub use error::{Error, Result};

pub mod font;
pub mod rendering;

pub use font::{FontRole, FontSet};
pub use rendering::RenderedImage;

/// Where the splash logo is written, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "assets/images/splash_logo.png";

/// Line printed on success.
pub const SUCCESS_MESSAGE: &str = "✅ Splash logo created!";

/// Configuration for the composer
///
/// The defaults reproduce the fixed asset: a 1024x1024 canvas written to
/// [`DEFAULT_OUTPUT_PATH`], text set in face 0 of
/// [`font::PREFERRED_FONT_PATH`].
///
/// # Examples
///
/// ```
/// let cfg = splashgen::ComposerConfig::default();
/// assert_eq!(cfg.canvas.width, 1024);
/// assert!(cfg.output_path.ends_with("splash_logo.png"));
/// ```
#[derive(Debug, Clone)]
pub struct ComposerConfig {
    /// Destination PNG file; existing files are overwritten
    pub output_path: PathBuf,
    /// Preferred typeface file
    pub font_path: PathBuf,
    /// Face index inside a font collection
    pub font_index: u32,
    /// Canvas dimensions
    pub canvas: CanvasSize,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            font_path: PathBuf::from(font::PREFERRED_FONT_PATH),
            font_index: 0,
            canvas: CanvasSize::default(),
        }
    }
}

/// Canvas dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: rendering::layout::CANVAS_WIDTH,
            height: rendering::layout::CANVAS_HEIGHT,
        }
    }
}

/// Outcome of [`Composer::write`].
#[derive(Debug, Clone)]
pub struct WrittenLogo {
    pub path: PathBuf,
    pub image: RenderedImage,
    /// Whether the built-in font stood in for the preferred one
    pub used_fallback_font: bool,
}

/// Composes the splash logo from the fixed layout.
pub struct Composer {
    config: ComposerConfig,
    fonts: FontSet,
}

impl Composer {
    /// Create a composer, resolving fonts once up front.
    pub fn new(config: ComposerConfig) -> Self {
        let fonts = FontSet::resolve(&config.font_path, config.font_index);
        Self::with_fonts(config, fonts)
    }

    /// Create a composer with already-resolved fonts.
    pub fn with_fonts(config: ComposerConfig, fonts: FontSet) -> Self {
        Self { config, fonts }
    }

    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    pub fn fonts(&self) -> &FontSet {
        &self.fonts
    }

    /// Draw the logo onto a fresh canvas.
    pub fn compose(&self) -> Result<rendering::canvas::Canvas> {
        let CanvasSize { width, height } = self.config.canvas;
        rendering::raster::rasterize(
            width,
            height,
            rendering::layout::BACKGROUND,
            &rendering::layout::splash_logo(),
            &self.fonts,
        )
    }

    /// Draw the logo and encode it as PNG.
    pub fn render(&self) -> Result<RenderedImage> {
        let canvas = self.compose()?;
        Ok(RenderedImage {
            width: canvas.width(),
            height: canvas.height(),
            png_data: canvas.encode_png()?,
        })
    }

    /// Render and write the PNG to the configured path, creating missing
    /// parent directories.
    pub fn write(&self) -> Result<WrittenLogo> {
        let image = self.render()?;
        let path = self.config.output_path.clone();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
            debug!("ensured output directory {}", dir.display());
        }
        fs::write(&path, &image.png_data).map_err(|e| Error::io(&path, e))?;
        info!(
            "wrote {} ({} bytes, sha256 {})",
            path.display(),
            image.png_data.len(),
            image.digest()
        );
        Ok(WrittenLogo {
            path,
            image,
            used_fallback_font: self.fonts.is_fallback(),
        })
    }
}

/// Compose and write the logo with `config`.
pub fn generate(config: ComposerConfig) -> Result<WrittenLogo> {
    Composer::new(config).write()
}
