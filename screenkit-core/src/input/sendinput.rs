//! Mouse input driver via Win32 `SendInput`.
//!
//! Each primitive is a single `SendInput` batch, so a click's down/up
//! pairs are injected atomically.

use windows::Win32::Foundation::POINT;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_MOUSE, MOUSEEVENTF_ABSOLUTE, MOUSEEVENTF_LEFTDOWN,
    MOUSEEVENTF_LEFTUP, MOUSEEVENTF_MIDDLEDOWN, MOUSEEVENTF_MIDDLEUP, MOUSEEVENTF_MOVE,
    MOUSEEVENTF_RIGHTDOWN, MOUSEEVENTF_RIGHTUP, MOUSEEVENTF_VIRTUALDESK, MOUSEEVENTF_WHEEL,
    MOUSEINPUT, MOUSE_EVENT_FLAGS,
};
use windows::Win32::UI::WindowsAndMessaging::{
    GetCursorPos, GetSystemMetrics, SM_CXSCREEN, SM_CXVIRTUALSCREEN, SM_CYSCREEN,
    SM_CYVIRTUALSCREEN, SM_XVIRTUALSCREEN, SM_YVIRTUALSCREEN,
};

use super::InputDriver;
use crate::action::MouseButton;
use crate::errors::{Result, ScreenkitError};

/// Pre-computed size of `INPUT` struct for `SendInput` calls.
const INPUT_SIZE: i32 = std::mem::size_of::<INPUT>() as i32;

/// One notch of the mouse wheel.
const WHEEL_DELTA: i32 = 120;

/// Lines scrolled per notch with the default Windows wheel setting.
const LINES_PER_NOTCH: i32 = 3;

/// Wheel delta for `amount` lines, so one unit matches one enigo line.
fn wheel_data(amount: i32) -> i32 {
    amount.saturating_mul(WHEEL_DELTA / LINES_PER_NOTCH)
}

/// Flags for absolute mouse positioning on the virtual desktop.
const ABSOLUTE_MOVE: MOUSE_EVENT_FLAGS =
    MOUSE_EVENT_FLAGS(MOUSEEVENTF_ABSOLUTE.0 | MOUSEEVENTF_MOVE.0 | MOUSEEVENTF_VIRTUALDESK.0);

/// Virtual screen origin and size, `(origin_x, origin_y, width, height)`.
fn virtual_screen() -> (i32, i32, i32, i32) {
    unsafe {
        let x = GetSystemMetrics(SM_XVIRTUALSCREEN);
        let y = GetSystemMetrics(SM_YVIRTUALSCREEN);
        let w = GetSystemMetrics(SM_CXVIRTUALSCREEN);
        let h = GetSystemMetrics(SM_CYVIRTUALSCREEN);
        // GetSystemMetrics returns 0 on failure
        if w > 0 && h > 0 {
            (x, y, w, h)
        } else {
            (0, 0, 1920, 1080)
        }
    }
}

/// Convert pixel coordinates to the 0..65535 normalised virtual-desktop space.
fn normalise_coords(x: i32, y: i32) -> (i32, i32) {
    let (origin_x, origin_y, screen_w, screen_h) = virtual_screen();

    if screen_w <= 1 || screen_h <= 1 {
        return (0, 0);
    }

    let abs_x = (((x - origin_x) as i64 * 65535) / (screen_w as i64 - 1)).clamp(0, 65535) as i32;
    let abs_y = (((y - origin_y) as i64 * 65535) / (screen_h as i64 - 1)).clamp(0, 65535) as i32;
    (abs_x, abs_y)
}

fn mouse_input(dx: i32, dy: i32, data: i32, flags: MOUSE_EVENT_FLAGS) -> INPUT {
    INPUT {
        r#type: INPUT_MOUSE,
        Anonymous: INPUT_0 {
            mi: MOUSEINPUT {
                dx,
                dy,
                // Win32 treats mouseData as signed for WHEEL events;
                // `as u32` keeps the bit pattern.
                mouseData: data as u32,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

fn button_flags(button: MouseButton) -> (MOUSE_EVENT_FLAGS, MOUSE_EVENT_FLAGS) {
    match button {
        MouseButton::Left => (MOUSEEVENTF_LEFTDOWN, MOUSEEVENTF_LEFTUP),
        MouseButton::Right => (MOUSEEVENTF_RIGHTDOWN, MOUSEEVENTF_RIGHTUP),
        MouseButton::Middle => (MOUSEEVENTF_MIDDLEDOWN, MOUSEEVENTF_MIDDLEUP),
    }
}

fn send(op: &str, inputs: &[INPUT]) -> Result<()> {
    let sent = unsafe { SendInput(inputs, INPUT_SIZE) };
    if sent as usize != inputs.len() {
        return Err(ScreenkitError::InputError(format!(
            "{op}: SendInput injected {sent} of {} events",
            inputs.len()
        )));
    }
    Ok(())
}

/// Stateless; every call goes straight to `SendInput`.
pub struct SendInputDriver;

impl SendInputDriver {
    pub fn new() -> Result<Self> {
        Ok(Self)
    }
}

impl InputDriver for SendInputDriver {
    fn location(&mut self) -> Result<(i32, i32)> {
        let mut point = POINT::default();
        unsafe { GetCursorPos(&mut point) }
            .map_err(|e| ScreenkitError::InputError(format!("GetCursorPos failed: {e}")))?;
        Ok((point.x, point.y))
    }

    fn screen_size(&mut self) -> Result<(u32, u32)> {
        let (w, h) = unsafe { (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) };
        if w <= 0 || h <= 0 {
            return Err(ScreenkitError::InputError(format!(
                "GetSystemMetrics returned invalid screen size: {w}x{h}"
            )));
        }
        Ok((w as u32, h as u32))
    }

    fn move_to(&mut self, x: i32, y: i32) -> Result<()> {
        let (abs_x, abs_y) = normalise_coords(x, y);
        send("move", &[mouse_input(abs_x, abs_y, 0, ABSOLUTE_MOVE)])
    }

    fn press(&mut self, button: MouseButton) -> Result<()> {
        let (down, _) = button_flags(button);
        send("press", &[mouse_input(0, 0, 0, down)])
    }

    fn release(&mut self, button: MouseButton) -> Result<()> {
        let (_, up) = button_flags(button);
        send("release", &[mouse_input(0, 0, 0, up)])
    }

    fn click(&mut self, button: MouseButton, count: u32) -> Result<()> {
        let (down, up) = button_flags(button);
        let mut inputs: Vec<INPUT> = Vec::with_capacity(count as usize * 2);
        for _ in 0..count {
            inputs.push(mouse_input(0, 0, 0, down));
            inputs.push(mouse_input(0, 0, 0, up));
        }
        send("click", &inputs)
    }

    fn scroll(&mut self, amount: i32) -> Result<()> {
        send("scroll", &[mouse_input(0, 0, wheel_data(amount), MOUSEEVENTF_WHEEL)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_data_is_line_based() {
        assert_eq!(wheel_data(3), WHEEL_DELTA);
        assert_eq!(wheel_data(-300), -100 * WHEEL_DELTA);
        assert_eq!(wheel_data(0), 0);
        assert_eq!(wheel_data(i32::MAX), i32::MAX);
    }
}
