//! Error types for the splash logo composer

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for composer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while composing or writing the logo
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to create the output directory or write the output file
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode the canvas as PNG
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// Failed to load a typeface. Never escapes `FontSet::resolve`, which
    /// substitutes the built-in font instead.
    #[error("Font unavailable: {0}")]
    Font(String),

    /// A paint command reaches outside the canvas
    #[error("Geometry out of bounds: {0}")]
    Geometry(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_path() {
        let err = Error::io(
            "assets/images/splash_logo.png",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("assets/images/splash_logo.png"));
        assert!(msg.contains("denied"));
    }
}
