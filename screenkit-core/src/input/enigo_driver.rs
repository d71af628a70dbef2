//! `enigo` input driver for macOS and Linux.

use enigo::{Axis, Button, Coordinate, Direction, Enigo, Mouse, Settings};

use super::InputDriver;
use crate::action::MouseButton;
use crate::errors::{Result, ScreenkitError};

#[cfg(target_os = "macos")]
const PERMISSION_HINT: &str =
    "grant Accessibility access in System Settings > Privacy & Security > Accessibility";
#[cfg(not(target_os = "macos"))]
const PERMISSION_HINT: &str = "make sure an X11 or Wayland session is reachable (DISPLAY / WAYLAND_DISPLAY)";

fn input_err(op: &str, e: impl std::fmt::Display) -> ScreenkitError {
    ScreenkitError::InputError(format!("{op} failed: {e}"))
}

fn enigo_button(button: MouseButton) -> Button {
    match button {
        MouseButton::Left => Button::Left,
        MouseButton::Right => Button::Right,
        MouseButton::Middle => Button::Middle,
    }
}

pub struct EnigoDriver {
    enigo: Enigo,
}

impl EnigoDriver {
    pub fn new() -> Result<Self> {
        let enigo = Enigo::new(&Settings::default()).map_err(|e| {
            ScreenkitError::InputError(format!("failed to create enigo instance: {e}; {PERMISSION_HINT}"))
        })?;
        Ok(Self { enigo })
    }
}

impl InputDriver for EnigoDriver {
    fn location(&mut self) -> Result<(i32, i32)> {
        self.enigo.location().map_err(|e| input_err("location", e))
    }

    fn screen_size(&mut self) -> Result<(u32, u32)> {
        let (w, h) = self
            .enigo
            .main_display()
            .map_err(|e| input_err("main_display", e))?;
        Ok((w.max(0) as u32, h.max(0) as u32))
    }

    fn move_to(&mut self, x: i32, y: i32) -> Result<()> {
        self.enigo
            .move_mouse(x, y, Coordinate::Abs)
            .map_err(|e| input_err("move_mouse", e))
    }

    fn press(&mut self, button: MouseButton) -> Result<()> {
        self.enigo
            .button(enigo_button(button), Direction::Press)
            .map_err(|e| input_err("button press", e))
    }

    fn release(&mut self, button: MouseButton) -> Result<()> {
        self.enigo
            .button(enigo_button(button), Direction::Release)
            .map_err(|e| input_err("button release", e))
    }

    fn click(&mut self, button: MouseButton, count: u32) -> Result<()> {
        for _ in 0..count {
            self.enigo
                .button(enigo_button(button), Direction::Click)
                .map_err(|e| input_err("click", e))?;
        }
        Ok(())
    }

    fn scroll(&mut self, amount: i32) -> Result<()> {
        // enigo scrolls down for positive lengths.
        self.enigo
            .scroll(amount.saturating_neg(), Axis::Vertical)
            .map_err(|e| input_err("scroll", e))
    }
}
