//! Request-scoped values produced by flag parsing or the text classifier.
//!
//! Nothing here outlives a single invocation: a [`Point`] is parsed,
//! handed to the [`crate::input::Automator`] once and dropped.

use std::fmt;

use crate::errors::{Result, ScreenkitError};

/// A screen pixel location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Signed coordinates for the input drivers, saturating at `i32::MAX`.
    pub fn to_signed(self) -> (i32, i32) {
        (
            i32::try_from(self.x).unwrap_or(i32::MAX),
            i32::try_from(self.y).unwrap_or(i32::MAX),
        )
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Physical mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Which kind of click a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickKind {
    #[default]
    Single,
    Double,
    Right,
    Middle,
}

impl ClickKind {
    /// The button and number of presses that make up this click.
    pub fn button_and_count(self) -> (MouseButton, u32) {
        match self {
            ClickKind::Single => (MouseButton::Left, 1),
            ClickKind::Double => (MouseButton::Left, 2),
            ClickKind::Right => (MouseButton::Right, 1),
            ClickKind::Middle => (MouseButton::Middle, 1),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ClickKind::Single => "single",
            ClickKind::Double => "double",
            ClickKind::Right => "right",
            ClickKind::Middle => "middle",
        }
    }
}

impl fmt::Display for ClickKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Press at `start`, move to `end`, release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragCommand {
    pub start: Point,
    pub end: Point,
}

/// One classified input request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Click { at: Point, kind: ClickKind },
    Drag(DragCommand),
    /// Positive scrolls up, negative scrolls down.
    Scroll { amount: i32, at: Option<Point> },
}

/// Parse a `--drag` range of the form `x1,y1:x2,y2`.
///
/// Whitespace around each number is tolerated.  Anything else, including
/// negative numbers or extra components, is [`ScreenkitError::MalformedInput`].
pub fn parse_drag_range(range: &str) -> Result<DragCommand> {
    let malformed = || ScreenkitError::MalformedInput(format!("invalid drag range: {range}"));

    let (start, end) = range.split_once(':').ok_or_else(malformed)?;
    let start = parse_pair(start).ok_or_else(malformed)?;
    let end = parse_pair(end).ok_or_else(malformed)?;
    Ok(DragCommand { start, end })
}

fn parse_pair(s: &str) -> Option<Point> {
    let (x, y) = s.split_once(',')?;
    let x = x.trim().parse().ok()?;
    let y = y.trim().parse().ok()?;
    Some(Point::new(x, y))
}
