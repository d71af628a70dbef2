//! Natural-language command classifier for `screen-click --text`.
//!
//! Commands are short free-text strings mixing Chinese and English, e.g.
//! `"双击 500, 300"`, `"right click 800 600"` or
//! `"拖拽从 100, 100 到 500, 500"`.  [`classify`] tries, in this fixed
//! order:
//!
//! 1. a drag phrase ([`extract_drag`]),
//! 2. a coordinate pair plus click kind ([`extract_coordinates`],
//!    [`classify_click_kind`]),
//! 3. a scroll keyword ([`classify_scroll`]).
//!
//! The order is the disambiguation policy: a drag phrase contains a
//! coordinate pair, and `"scroll to 100, 200"` is a click.

use std::sync::LazyLock;

use regex::Regex;

use crate::action::{Action, ClickKind, DragCommand, Point};

/// Magnitude of a keyword-triggered scroll, in wheel clicks.
pub const SCROLL_MAGNITUDE: i32 = 300;

/// Two integers (ASCII or full-width digits) separated by a half- or
/// full-width comma or whitespace.
const PAIR: &str = r"([0-9０-９]+)(?:\s*[,，]\s*|\s+)([0-9０-９]+)";

static COORDINATES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PAIR).expect("coordinate pattern is valid"));

static DRAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)(?:拖拽从|drag\s+from)\s*{PAIR}\s*(?:到|to)\s*{PAIR}"))
        .expect("drag pattern is valid")
});

const DOUBLE_KEYWORDS: &[&str] = &["双击", "double"];
const RIGHT_KEYWORDS: &[&str] = &["右键", "right"];
const MIDDLE_KEYWORDS: &[&str] = &["中键", "middle"];
const SCROLL_KEYWORDS: &[&str] = &["滚屏", "滚动", "scroll"];
const UP_KEYWORDS: &[&str] = &["上", "up"];
const DOWN_KEYWORDS: &[&str] = &["下", "down"];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Decimal value of an ASCII or full-width digit run, saturating at `u32::MAX`.
fn parse_number(digits: &str) -> Option<u32> {
    digits.chars().try_fold(0u32, |acc, c| {
        let d = match c {
            '0'..='9' => c as u32 - '0' as u32,
            '０'..='９' => c as u32 - '０' as u32,
            _ => return None,
        };
        Some(acc.saturating_mul(10).saturating_add(d))
    })
}

fn point_from(caps: &regex::Captures<'_>, x: usize, y: usize) -> Option<Point> {
    let x = parse_number(caps.get(x)?.as_str())?;
    let y = parse_number(caps.get(y)?.as_str())?;
    Some(Point::new(x, y))
}

/// First coordinate pair in `text`, in order of appearance.
///
/// Numbers too large for `u32` saturate at `u32::MAX`.
pub fn extract_coordinates(text: &str) -> Option<Point> {
    let caps = COORDINATES.captures(text)?;
    point_from(&caps, 1, 2)
}

/// `"拖拽从 X,Y 到 X,Y"` or `"drag from X,Y to X,Y"`.
pub fn extract_drag(text: &str) -> Option<DragCommand> {
    let caps = DRAG.captures(text)?;
    Some(DragCommand {
        start: point_from(&caps, 1, 2)?,
        end: point_from(&caps, 3, 4)?,
    })
}

/// Double, right or middle click by keyword; single when none is present.
pub fn classify_click_kind(text: &str) -> ClickKind {
    let text = text.to_lowercase();
    if contains_any(&text, DOUBLE_KEYWORDS) {
        ClickKind::Double
    } else if contains_any(&text, RIGHT_KEYWORDS) {
        ClickKind::Right
    } else if contains_any(&text, MIDDLE_KEYWORDS) {
        ClickKind::Middle
    } else {
        ClickKind::Single
    }
}

/// Signed scroll amount when `text` asks for a scroll.
///
/// Up is positive and is also the default when no direction is given.
pub fn classify_scroll(text: &str) -> Option<i32> {
    let text = text.to_lowercase();
    if !contains_any(&text, SCROLL_KEYWORDS) {
        return None;
    }
    if contains_any(&text, UP_KEYWORDS) {
        Some(SCROLL_MAGNITUDE)
    } else if contains_any(&text, DOWN_KEYWORDS) {
        Some(-SCROLL_MAGNITUDE)
    } else {
        Some(SCROLL_MAGNITUDE)
    }
}

/// Classify a free-text command.  `None` means unrecognized.
pub fn classify(text: &str) -> Option<Action> {
    if let Some(drag) = extract_drag(text) {
        log::debug!("classified {text:?} as drag");
        return Some(Action::Drag(drag));
    }

    if let Some(at) = extract_coordinates(text) {
        let kind = classify_click_kind(text);
        log::debug!("classified {text:?} as {kind} click at {at}");
        return Some(Action::Click { at, kind });
    }

    if let Some(amount) = classify_scroll(text) {
        log::debug!("classified {text:?} as scroll {amount}");
        return Some(Action::Scroll { amount, at: None });
    }

    log::debug!("unrecognized command {text:?}");
    None
}
