//! Text extraction from an image with Tesseract.
//!
//! Built with the `ocr` feature; without it [`recognize`] fails with
//! [`ScreenkitError::MissingDependency`] instead of returning nothing.

use std::path::{Path, PathBuf};

use crate::errors::{Result, ScreenkitError};

/// Simplified Chinese plus English.
pub const DEFAULT_LANGUAGE: &str = "chi_sim+eng";

/// OCR engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrConfig {
    /// Tesseract language spec, e.g. `"eng"` or `"chi_sim+eng"`
    pub language: String,

    /// Path to the tessdata directory; `None` uses the Tesseract default
    pub tessdata: Option<PathBuf>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            tessdata: None,
        }
    }
}

impl OcrConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_tessdata(mut self, path: impl Into<PathBuf>) -> Self {
        self.tessdata = Some(path.into());
        self
    }
}

/// Recognize the text in the image at `image_path`.
///
/// Returns the trimmed text, which may be empty.
pub fn recognize(image_path: &Path, config: &OcrConfig) -> Result<String> {
    if !image_path.is_file() {
        return Err(ScreenkitError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("image not found: {}", image_path.display()),
        )));
    }
    run_tesseract(image_path, config)
}

#[cfg(feature = "ocr")]
fn run_tesseract(image_path: &Path, config: &OcrConfig) -> Result<String> {
    use tesseract::Tesseract;

    let image = image::open(image_path)
        .map_err(|e| ScreenkitError::OcrError(format!("failed to decode {}: {e}", image_path.display())))?
        .to_rgb8();
    let (width, height) = image.dimensions();
    let (width, height) = (
        i32::try_from(width).map_err(|_| ScreenkitError::OcrError("image too wide".into()))?,
        i32::try_from(height).map_err(|_| ScreenkitError::OcrError("image too tall".into()))?,
    );
    log::debug!(
        "running tesseract ({}) on {width}x{height} {}",
        config.language,
        image_path.display()
    );

    let tessdata = config.tessdata.as_deref().and_then(|p| p.to_str());
    let mut tess = Tesseract::new(tessdata, Some(config.language.as_str()))
        .map_err(|e| {
            ScreenkitError::missing(
                "OCR",
                format!("tesseract failed to load language `{}`: {e}; install the tesseract language data", config.language),
            )
        })?
        .set_frame(image.as_raw(), width, height, 3, width * 3)
        .map_err(|e| ScreenkitError::OcrError(e.to_string()))?;

    let text = tess
        .get_text()
        .map_err(|e| ScreenkitError::OcrError(e.to_string()))?;
    Ok(text.trim().to_string())
}

#[cfg(not(feature = "ocr"))]
fn run_tesseract(_image_path: &Path, _config: &OcrConfig) -> Result<String> {
    Err(ScreenkitError::missing(
        "OCR",
        "rebuild screenkit with `--features ocr` (needs the tesseract and leptonica libraries, \
         e.g. `brew install tesseract tesseract-lang` or `apt install libtesseract-dev libleptonica-dev`)",
    ))
}
