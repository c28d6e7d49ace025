//! Error types for the carousel engine.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced at the boundary of the carousel engine.
///
/// Degenerate-but-valid input (empty text, empty bundles, tiny limits) never
/// produces one of these; it degrades to a defined fallback instead.
#[derive(Error, Debug)]
pub enum Error {
    /// A numeric argument violated its contract (zero limit, non-finite count).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A color string could not be parsed as hex.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// No slide with the given id exists in the project.
    #[error("Slide not found: {0}")]
    SlideNotFound(String),

    /// No text block with the given id exists on the slide.
    #[error("Text block not found: {0}")]
    BlockNotFound(String),

    /// The only remaining slide cannot be deleted.
    #[error("Cannot delete the last remaining slide")]
    LastSlide,

    /// A persisted project carried no slides.
    #[error("Project contains no slides")]
    EmptyProject,

    /// Failed to (de)serialize a project or configuration document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read or write a file.
    #[error("Failed to access file: {0}")]
    IoError(#[from] std::io::Error),
}
