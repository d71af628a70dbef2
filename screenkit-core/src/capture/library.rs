//! Library-based capture through `xcap`, a cross-platform fallback for
//! the native screenshot utility.  Compiled in with the
//! `library-capture` feature.

use std::path::Path;

#[cfg(feature = "library-capture")]
use crate::errors::ScreenkitError;
use crate::errors::Result;

/// Capture the primary monitor and save it to `output`.
///
/// The image format follows the file extension.
#[cfg(feature = "library-capture")]
pub fn capture_primary(output: &Path) -> Result<()> {
    use xcap::Monitor;

    let monitors = Monitor::all()
        .map_err(|e| ScreenkitError::CaptureError(format!("failed to list monitors: {e}")))?;
    let monitor = match monitors.iter().position(|m| m.is_primary().unwrap_or(false)) {
        Some(index) => &monitors[index],
        None => monitors
            .first()
            .ok_or_else(|| ScreenkitError::CaptureError("no monitors found".into()))?,
    };

    let frame = monitor
        .capture_image()
        .map_err(|e| ScreenkitError::CaptureError(format!("monitor capture failed: {e}")))?;
    log::debug!("captured {}x{} frame", frame.width(), frame.height());

    // JPEG has no alpha channel.
    let saved = if is_jpeg(output) {
        image::DynamicImage::ImageRgba8(frame).to_rgb8().save(output)
    } else {
        frame.save(output)
    };
    saved.map_err(|e| {
        ScreenkitError::CaptureError(format!("failed to save {}: {e}", output.display()))
    })
}

#[cfg(not(feature = "library-capture"))]
pub fn capture_primary(_output: &Path) -> Result<()> {
    Err(crate::errors::ScreenkitError::missing(
        "library capture",
        "rebuild screenkit with `--features library-capture` to enable xcap",
    ))
}

#[cfg(feature = "library-capture")]
fn is_jpeg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("jpg") || e.eq_ignore_ascii_case("jpeg"))
}
