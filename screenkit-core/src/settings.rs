//! Per-call configuration for the [`crate::input::Automator`].
//!
//! Fail-safe and inter-action pause are plain fields handed to each
//! automator instead of process-wide switches.

use std::time::Duration;

/// Sleep after every completed action.
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(100);
/// Animated move before a click, and to the start of a drag.
pub const DEFAULT_CLICK_MOVE: Duration = Duration::from_millis(200);
/// Animated move from drag start to drag end while the button is held.
pub const DEFAULT_DRAG_MOVE: Duration = Duration::from_millis(500);
/// Animated move before a positioned scroll.
pub const DEFAULT_SCROLL_MOVE: Duration = Duration::from_millis(100);
/// Time the operator gets to park the pointer before it is reported.
pub const DEFAULT_POSITION_DELAY: Duration = Duration::from_secs(3);
/// Interval between intermediate pointer positions of an animated move.
pub const MOVE_STEP_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSettings {
    /// Abort when the pointer sits in a screen corner.
    pub fail_safe: bool,
    pub pause: Duration,
    pub click_move: Duration,
    pub drag_move: Duration,
    pub scroll_move: Duration,
    pub position_delay: Duration,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            fail_safe: true,
            pause: DEFAULT_PAUSE,
            click_move: DEFAULT_CLICK_MOVE,
            drag_move: DEFAULT_DRAG_MOVE,
            scroll_move: DEFAULT_SCROLL_MOVE,
            position_delay: DEFAULT_POSITION_DELAY,
        }
    }
}

impl InputSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fail_safe(mut self, enabled: bool) -> Self {
        self.fail_safe = enabled;
        self
    }

    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    pub fn with_position_delay(mut self, delay: Duration) -> Self {
        self.position_delay = delay;
        self
    }

    /// Zero every delay; moves become a single jump.
    pub fn instant(mut self) -> Self {
        self.pause = Duration::ZERO;
        self.click_move = Duration::ZERO;
        self.drag_move = Duration::ZERO;
        self.scroll_move = Duration::ZERO;
        self.position_delay = Duration::ZERO;
        self
    }
}
