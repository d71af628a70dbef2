//! Error types for `screenkit_core`.
//!
//! All failures are funnelled through [`ScreenkitError`], which uses
//! `thiserror` for `Display` and `Error` derives.  The CLI binaries decide
//! the exit path from the variant.

use thiserror::Error;

/// Top-level error type for the `screenkit_core` library.
#[derive(Debug, Error)]
pub enum ScreenkitError {
    /// An optional capability was requested but its backing library or
    /// executable is not available.  `hint` tells the operator how to
    /// install it.
    #[error("{capability} is unavailable: {hint}")]
    MissingDependency {
        capability: &'static str,
        hint: String,
    },

    /// User-supplied input could not be parsed (e.g. a `--drag` range).
    #[error("MalformedInput: {0}")]
    MalformedInput(String),

    /// Screenshot capture failure (native utility or library).
    #[error("CaptureError: {0}")]
    CaptureError(String),

    /// Input simulation failure (enigo / SendInput).
    #[error("InputError: {0}")]
    InputError(String),

    /// Image decoding or Tesseract failure.
    #[error("OcrError: {0}")]
    OcrError(String),

    /// The pointer sat in a screen corner when an action was about to run.
    #[error("fail-safe triggered: pointer at screen corner ({x}, {y})")]
    FailSafeTriggered { x: i32, y: i32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScreenkitError {
    /// Shorthand for [`ScreenkitError::MissingDependency`].
    pub fn missing(capability: &'static str, hint: impl Into<String>) -> Self {
        ScreenkitError::MissingDependency {
            capability,
            hint: hint.into(),
        }
    }

    pub fn is_missing_dependency(&self) -> bool {
        matches!(self, ScreenkitError::MissingDependency { .. })
    }
}

pub type Result<T> = std::result::Result<T, ScreenkitError>;
