//! Capture through the platform's screenshot utility.
//!
//! | Platform | Full screen | Window | Region |
//! |----------|-------------|--------|--------|
//! | macOS | `screencapture -S` | `screencapture -w` | `screencapture -i -s` |
//! | Linux / Wayland | `grim` | unsupported | `grim -g "$(slurp)"` |
//! | Linux / X11 | `maim` | `maim -i "$(xdotool getactivewindow)"` | `maim -s` |
//! | Windows | `xcap` fallback | unsupported | unsupported |

use std::io;
use std::path::Path;
use std::process::{Command, Output};

use super::CaptureMode;
use crate::errors::{Result, ScreenkitError};

/// Run the native utility for `mode`, writing to `output`.
pub fn capture(mode: CaptureMode, output: &Path) -> Result<()> {
    if cfg!(windows) && mode == CaptureMode::FullScreen {
        log::debug!("no native screenshot utility on Windows; using library capture");
        return super::library::capture_primary(output);
    }

    let cmd = command_for(mode, output)?;
    run(cmd)?;
    Ok(())
}

fn install_hint(tool: &str) -> String {
    match tool {
        "screencapture" => "`screencapture` ships with macOS; check that /usr/sbin is on PATH".into(),
        "grim" | "slurp" => format!("`{tool}` not found; install grim and slurp (e.g. `apt install grim slurp`)"),
        "maim" | "xdotool" => format!("`{tool}` not found; install maim and xdotool (e.g. `apt install maim xdotool`)"),
        other => format!("`{other}` not found on PATH"),
    }
}

fn spawn_error(tool: &str, err: io::Error) -> ScreenkitError {
    if err.kind() == io::ErrorKind::NotFound {
        ScreenkitError::missing("native screenshot utility", install_hint(tool))
    } else {
        ScreenkitError::CaptureError(format!("failed to execute {tool}: {err}"))
    }
}

/// Run `cmd` to completion; a non-zero exit is an error.
fn run(mut cmd: Command) -> Result<Output> {
    let tool = cmd.get_program().to_string_lossy().into_owned();
    log::debug!("running {cmd:?}");

    let output = cmd.output().map_err(|e| spawn_error(&tool, e))?;
    if !output.status.success() {
        let code = output.status.code().unwrap_or(-1);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let msg = if stderr.trim().is_empty() {
            format!("{tool} failed with exit code {code}")
        } else {
            format!("{tool} failed: {}", stderr.trim())
        };
        log::error!("{msg}");
        return Err(ScreenkitError::CaptureError(msg));
    }
    Ok(output)
}

/// Run a helper and return its trimmed stdout.
#[cfg(all(unix, not(target_os = "macos")))]
fn helper_output(cmd: Command) -> Result<String> {
    let output = run(cmd)?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(target_os = "macos")]
fn command_for(mode: CaptureMode, output: &Path) -> Result<Command> {
    let mut cmd = Command::new("screencapture");
    match mode {
        CaptureMode::FullScreen => cmd.arg("-S"),
        CaptureMode::Window => cmd.arg("-w"),
        CaptureMode::Region => cmd.args(["-i", "-s"]),
        CaptureMode::Library => return Err(not_native(mode)),
    };
    cmd.arg(output);
    Ok(cmd)
}

#[cfg(all(unix, not(target_os = "macos")))]
fn is_wayland() -> bool {
    if let Ok(session) = std::env::var("XDG_SESSION_TYPE") {
        if session == "wayland" {
            return true;
        } else if session == "x11" {
            return false;
        }
    }
    std::env::var_os("WAYLAND_DISPLAY").is_some()
}

#[cfg(all(unix, not(target_os = "macos")))]
fn command_for(mode: CaptureMode, output: &Path) -> Result<Command> {
    if is_wayland() {
        wayland_command(mode, output)
    } else {
        x11_command(mode, output)
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn wayland_command(mode: CaptureMode, output: &Path) -> Result<Command> {
    let mut cmd = Command::new("grim");
    match mode {
        CaptureMode::FullScreen => {}
        CaptureMode::Region => {
            let geometry = helper_output(Command::new("slurp"))?;
            if geometry.is_empty() {
                return Err(ScreenkitError::CaptureError("region selection cancelled".into()));
            }
            cmd.args(["-g", &geometry]);
        }
        CaptureMode::Window => {
            return Err(ScreenkitError::CaptureError(
                "window capture is not supported on Wayland; use -i to select a region".into(),
            ))
        }
        CaptureMode::Library => return Err(not_native(mode)),
    }
    cmd.arg(output);
    Ok(cmd)
}

#[cfg(all(unix, not(target_os = "macos")))]
fn x11_command(mode: CaptureMode, output: &Path) -> Result<Command> {
    let mut cmd = Command::new("maim");
    match mode {
        CaptureMode::FullScreen => {}
        CaptureMode::Region => {
            cmd.arg("-s");
        }
        CaptureMode::Window => {
            let mut active = Command::new("xdotool");
            active.arg("getactivewindow");
            let window_id = helper_output(active)?;
            cmd.args(["-i", &window_id]);
        }
        CaptureMode::Library => return Err(not_native(mode)),
    }
    cmd.arg(output);
    Ok(cmd)
}

#[cfg(windows)]
fn command_for(mode: CaptureMode, _output: &Path) -> Result<Command> {
    Err(ScreenkitError::CaptureError(format!(
        "{mode:?} capture has no native utility on Windows; use -p for library capture"
    )))
}

#[cfg(unix)]
fn not_native(mode: CaptureMode) -> ScreenkitError {
    ScreenkitError::CaptureError(format!("{mode:?} is not a native capture mode"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(cmd: &Command) -> Vec<String> {
        cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn test_missing_tool_is_missing_dependency() {
        let err = run(Command::new("screenkit-no-such-tool")).unwrap_err();
        assert!(err.is_missing_dependency());
    }

    #[test]
    fn test_install_hint_names_tool() {
        assert!(install_hint("maim").contains("maim"));
        assert!(install_hint("slurp").contains("slurp"));
        assert!(install_hint("foo").contains("foo"));
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_screencapture_flags() {
        let out = Path::new("/tmp/s.png");
        let full = command_for(CaptureMode::FullScreen, out).unwrap();
        assert_eq!(full.get_program(), "screencapture");
        assert_eq!(args(&full), ["-S", "/tmp/s.png"]);
        assert_eq!(args(&command_for(CaptureMode::Window, out).unwrap()), ["-w", "/tmp/s.png"]);
        assert_eq!(
            args(&command_for(CaptureMode::Region, out).unwrap()),
            ["-i", "-s", "/tmp/s.png"]
        );
        assert!(command_for(CaptureMode::Library, out).is_err());
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    #[test]
    fn test_x11_flags() {
        let out = Path::new("/tmp/s.png");
        let full = x11_command(CaptureMode::FullScreen, out).unwrap();
        assert_eq!(full.get_program(), "maim");
        assert_eq!(args(&full), ["/tmp/s.png"]);
        assert_eq!(args(&x11_command(CaptureMode::Region, out).unwrap()), ["-s", "/tmp/s.png"]);
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    #[test]
    fn test_library_mode_has_no_native_command() {
        let out = Path::new("/tmp/s.png");
        let x11 = x11_command(CaptureMode::Library, out).unwrap_err();
        assert!(matches!(x11, ScreenkitError::CaptureError(msg) if msg.contains("Library")));
        let wayland = wayland_command(CaptureMode::Library, out).unwrap_err();
        assert!(matches!(wayland, ScreenkitError::CaptureError(_)));
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    #[test]
    fn test_wayland_full_and_window() {
        let out = Path::new("/tmp/s.png");
        let full = wayland_command(CaptureMode::FullScreen, out).unwrap();
        assert_eq!(full.get_program(), "grim");
        assert_eq!(args(&full), ["/tmp/s.png"]);
        assert!(wayland_command(CaptureMode::Window, out).is_err());
    }
}
