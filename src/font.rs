//! Typeface resolution with a built-in fallback
//!
//! The preferred typeface is read from a file on disk. When it cannot be read
//! or parsed, every requested size falls back to the built-in mono font and
//! the reason is logged; callers never see the failure.

use std::fmt;
use std::path::Path;
#[cfg(feature = "truetype")]
use std::sync::Arc;

#[cfg(feature = "truetype")]
use ab_glyph::FontVec;
use log::{debug, warn};

use crate::{Error, Result};

/// Preferred system typeface (a TrueType collection, face 0 is the regular
/// weight).
pub const PREFERRED_FONT_PATH: &str = "/System/Library/Fonts/Helvetica.ttc";

/// Point size of the headline text.
pub const LARGE_SIZE: f32 = 80.0;

/// Point size of the secondary text.
pub const MEDIUM_SIZE: f32 = 60.0;

/// A loaded typeface, independent of size.
#[derive(Clone)]
pub enum Typeface {
    #[cfg(feature = "truetype")]
    TrueType(Arc<FontVec>),
    /// `embedded-graphics` 10x20 mono font. Drawn at its native size whatever
    /// size is requested.
    BuiltIn,
}

impl fmt::Debug for Typeface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "truetype")]
            Typeface::TrueType(_) => f.write_str("TrueType"),
            Typeface::BuiltIn => f.write_str("BuiltIn"),
        }
    }
}

/// A typeface at a given point size.
#[derive(Debug, Clone)]
pub struct FontHandle {
    pub typeface: Typeface,
    pub size: f32,
}

impl FontHandle {
    pub fn built_in(size: f32) -> Self {
        Self {
            typeface: Typeface::BuiltIn,
            size,
        }
    }

    pub fn is_built_in(&self) -> bool {
        matches!(self.typeface, Typeface::BuiltIn)
    }
}

/// Which of the two text sizes a text command uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    Large,
    Medium,
}

/// The fonts used by one composition.
#[derive(Debug, Clone)]
pub struct FontSet {
    pub large: FontHandle,
    pub medium: FontHandle,
}

impl FontSet {
    /// Load face `index` of `path` for both sizes, or fall back to the
    /// built-in font for both.
    pub fn resolve(path: &Path, index: u32) -> Self {
        match load_typeface(path, index) {
            Ok(typeface) => {
                debug!("Loaded typeface {:?} from {}", typeface, path.display());
                Self {
                    large: FontHandle {
                        typeface: typeface.clone(),
                        size: LARGE_SIZE,
                    },
                    medium: FontHandle {
                        typeface,
                        size: MEDIUM_SIZE,
                    },
                }
            }
            Err(e) => {
                warn!("{}; using built-in font", e);
                Self::built_in()
            }
        }
    }

    pub fn built_in() -> Self {
        Self {
            large: FontHandle::built_in(LARGE_SIZE),
            medium: FontHandle::built_in(MEDIUM_SIZE),
        }
    }

    pub fn get(&self, role: FontRole) -> &FontHandle {
        match role {
            FontRole::Large => &self.large,
            FontRole::Medium => &self.medium,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.large.is_built_in() && self.medium.is_built_in()
    }
}

#[cfg(feature = "truetype")]
fn load_typeface(path: &Path, index: u32) -> Result<Typeface> {
    let data = std::fs::read(path)
        .map_err(|e| Error::Font(format!("cannot read {}: {}", path.display(), e)))?;
    let font = FontVec::try_from_vec_and_index(data, index).map_err(|e| {
        Error::Font(format!("cannot parse {} (face {}): {}", path.display(), index, e))
    })?;
    Ok(Typeface::TrueType(Arc::new(font)))
}

#[cfg(not(feature = "truetype"))]
fn load_typeface(path: &Path, _index: u32) -> Result<Typeface> {
    Err(Error::Font(format!(
        "TrueType support disabled, ignoring {}",
        path.display()
    )))
}
