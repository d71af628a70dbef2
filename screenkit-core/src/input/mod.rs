//! Mouse input simulation.
//!
//! [`InputDriver`] is the seam to the OS: `EnigoDriver` on macOS and
//! Linux, `SendInputDriver` on Windows.  [`Automator`] layers the
//! user-facing actions on top of a driver, using an explicit
//! [`InputSettings`] for fail-safe, pauses and animated moves.

#[cfg(not(windows))]
mod enigo_driver;
#[cfg(windows)]
mod sendinput;

#[cfg(not(windows))]
pub use self::enigo_driver::EnigoDriver;
#[cfg(windows)]
pub use self::sendinput::SendInputDriver;

use std::thread;
use std::time::Duration;

use crate::action::{Action, ClickKind, DragCommand, MouseButton, Point};
use crate::errors::{Result, ScreenkitError};
use crate::settings::{InputSettings, MOVE_STEP_INTERVAL};

/// Driver used by [`default_driver`] on this platform.
#[cfg(not(windows))]
pub type NativeDriver = EnigoDriver;
#[cfg(windows)]
pub type NativeDriver = SendInputDriver;

/// Create the platform input driver.
pub fn default_driver() -> Result<NativeDriver> {
    NativeDriver::new()
}

/// Primitive pointer operations provided by an OS backend.
///
/// Coordinates are absolute screen pixels.  Drivers do no sleeping of
/// their own; timing belongs to [`Automator`].
pub trait InputDriver {
    /// Current pointer position.
    fn location(&mut self) -> Result<(i32, i32)>;
    /// Primary screen size in pixels.
    fn screen_size(&mut self) -> Result<(u32, u32)>;
    fn move_to(&mut self, x: i32, y: i32) -> Result<()>;
    fn press(&mut self, button: MouseButton) -> Result<()>;
    fn release(&mut self, button: MouseButton) -> Result<()>;
    /// Press and release `button` `count` times at the current position.
    fn click(&mut self, button: MouseButton, count: u32) -> Result<()>;
    /// Scroll vertically by `amount` lines; positive scrolls up.
    ///
    /// Drivers translate lines to their native unit so the same amount
    /// covers a similar distance on every platform.
    fn scroll(&mut self, amount: i32) -> Result<()>;
}

fn sleep(d: Duration) {
    if !d.is_zero() {
        thread::sleep(d);
    }
}

fn is_corner(x: i32, y: i32, width: u32, height: u32) -> bool {
    let right = i64::from(width) - 1;
    let bottom = i64::from(height) - 1;
    let (x, y) = (i64::from(x), i64::from(y));
    (x == 0 || x == right) && (y == 0 || y == bottom)
}

/// Runs input actions against a driver.
pub struct Automator<D> {
    driver: D,
    settings: InputSettings,
}

impl<D: InputDriver> Automator<D> {
    pub fn new(driver: D, settings: InputSettings) -> Self {
        Self { driver, settings }
    }

    pub fn settings(&self) -> &InputSettings {
        &self.settings
    }

    pub fn into_driver(self) -> D {
        self.driver
    }

    fn fail_safe_check(&mut self) -> Result<()> {
        if !self.settings.fail_safe {
            return Ok(());
        }
        let (x, y) = self.driver.location()?;
        let (width, height) = self.driver.screen_size()?;
        if is_corner(x, y, width, height) {
            log::warn!("fail-safe: pointer at corner ({x}, {y}) of {width}x{height}");
            return Err(ScreenkitError::FailSafeTriggered { x, y });
        }
        Ok(())
    }

    /// Move to `target` along a straight line over `duration`.
    fn animate_to(&mut self, target: Point, duration: Duration) -> Result<()> {
        let (tx, ty) = target.to_signed();
        let steps = (duration.as_millis() / MOVE_STEP_INTERVAL.as_millis()).min(u32::MAX.into()) as u32;
        if steps <= 1 {
            return self.driver.move_to(tx, ty);
        }

        let (sx, sy) = self.driver.location()?;
        let (dx, dy) = (i64::from(tx) - i64::from(sx), i64::from(ty) - i64::from(sy));
        for step in 1..=steps {
            let x = i64::from(sx) + dx * i64::from(step) / i64::from(steps);
            let y = i64::from(sy) + dy * i64::from(step) / i64::from(steps);
            self.driver.move_to(x as i32, y as i32)?;
            if step < steps {
                sleep(MOVE_STEP_INTERVAL);
            }
        }
        Ok(())
    }

    /// Animated move to `at`, then click.
    pub fn click(&mut self, at: Point, kind: ClickKind) -> Result<()> {
        self.fail_safe_check()?;
        self.animate_to(at, self.settings.click_move)?;
        let (button, count) = kind.button_and_count();
        self.driver.click(button, count)?;
        log::info!("{kind} click at {at}");
        sleep(self.settings.pause);
        Ok(())
    }

    /// Move to start, press, move to end, release.
    ///
    /// The left button is released even when the second move fails.
    pub fn drag(&mut self, cmd: DragCommand) -> Result<()> {
        self.fail_safe_check()?;
        self.animate_to(cmd.start, self.settings.click_move)?;
        self.driver.press(MouseButton::Left)?;
        let moved = self.animate_to(cmd.end, self.settings.drag_move);
        let released = self.driver.release(MouseButton::Left);
        moved.and(released)?;
        log::info!("dragged from {} to {}", cmd.start, cmd.end);
        sleep(self.settings.pause);
        Ok(())
    }

    /// Scroll by `amount` wheel clicks, optionally moving to `at` first.
    pub fn scroll(&mut self, amount: i32, at: Option<Point>) -> Result<()> {
        self.fail_safe_check()?;
        if let Some(at) = at {
            self.animate_to(at, self.settings.scroll_move)?;
        }
        self.driver.scroll(amount)?;
        log::info!("scrolled {amount}");
        sleep(self.settings.pause);
        Ok(())
    }

    /// Wait `position_delay`, then report the pointer position.
    pub fn position(&mut self) -> Result<(i32, i32)> {
        sleep(self.settings.position_delay);
        self.driver.location()
    }

    pub fn screen_size(&mut self) -> Result<(u32, u32)> {
        self.driver.screen_size()
    }

    pub fn perform(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Click { at, kind } => self.click(at, kind),
            Action::Drag(cmd) => self.drag(cmd),
            Action::Scroll { amount, at } => self.scroll(amount, at),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
