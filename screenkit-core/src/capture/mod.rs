//! Screenshot capture dispatch.
//!
//! A [`CaptureRequest`] pairs one [`CaptureMode`] with a resolved absolute
//! output path.  Native modes shell out to the platform screenshot utility
//! (see [`native`]); [`CaptureMode::Library`] goes through `xcap`
//! (see [`library`]).

pub mod library;
pub mod native;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::errors::{Result, ScreenkitError};
use crate::paths::resolve_output;

/// File name used when no output path is given.
pub const DEFAULT_OUTPUT: &str = "screenshot.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureMode {
    FullScreen,
    /// The window the user picks (macOS) or the active window (X11).
    Window,
    /// User-driven rectangle selection.
    Region,
    /// Primary monitor via the `xcap` library.
    Library,
}

impl CaptureMode {
    /// Resolve mutually exclusive CLI flags; library wins, then window,
    /// then region, else full screen.
    pub fn from_flags(window: bool, interactive: bool, library: bool) -> Self {
        if library {
            CaptureMode::Library
        } else if window {
            CaptureMode::Window
        } else if interactive {
            CaptureMode::Region
        } else {
            CaptureMode::FullScreen
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureRequest {
    pub mode: CaptureMode,
    /// Absolute, `~`-expanded destination.
    pub output: PathBuf,
}

impl CaptureRequest {
    pub fn new(mode: CaptureMode, output: Option<&Path>) -> Result<Self> {
        let output = resolve_output(output.unwrap_or(Path::new(DEFAULT_OUTPUT)))?;
        Ok(Self { mode, output })
    }

    /// Take the screenshot and return the path it was written to.
    pub fn execute(&self) -> Result<PathBuf> {
        self.execute_with(|mode, output| match mode {
            CaptureMode::Library => library::capture_primary(output),
            mode => native::capture(mode, output),
        })
    }

    /// Run `capture` against the output path and check that it produced a
    /// new file.
    ///
    /// A file left over from an earlier run does not count: its size and
    /// modification time must change, otherwise a cancelled selection
    /// would be reported as a fresh screenshot.
    pub fn execute_with<F>(&self, capture: F) -> Result<PathBuf>
    where
        F: FnOnce(CaptureMode, &Path) -> Result<()>,
    {
        log::debug!("capturing {:?} to {}", self.mode, self.output.display());
        let before = FileStamp::of(&self.output);
        capture(self.mode, &self.output)?;

        let after = FileStamp::of(&self.output);
        if after.is_none() || after == before {
            return Err(ScreenkitError::CaptureError(format!(
                "no image was written to {} (selection cancelled?)",
                self.output.display()
            )));
        }
        log::info!("screenshot saved to {}", self.output.display());
        Ok(self.output.clone())
    }
}

/// Size and modification time of an existing file.
#[derive(Debug, PartialEq, Eq)]
struct FileStamp {
    len: u64,
    modified: Option<SystemTime>,
}

impl FileStamp {
    fn of(path: &Path) -> Option<Self> {
        let meta = fs::metadata(path).ok()?;
        Some(Self {
            len: meta.len(),
            modified: meta.modified().ok(),
        })
    }
}
