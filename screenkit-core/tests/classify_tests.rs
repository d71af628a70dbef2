use pretty_assertions::assert_eq;
use screenkit_core::action::{parse_drag_range, Action, ClickKind, DragCommand, Point};
use screenkit_core::command::{classify, extract_coordinates, SCROLL_MAGNITUDE};
use screenkit_core::errors::ScreenkitError;

#[test]
fn test_pairs_are_returned_in_order_of_appearance() {
    for (text, expected) in [
        ("点击 100, 200", Point::new(100, 200)),
        ("200 100", Point::new(200, 100)),
        ("go to 0,0 please", Point::new(0, 0)),
        ("x=15\t25", Point::new(15, 25)),
    ] {
        assert_eq!(extract_coordinates(text), Some(expected), "text: {text:?}");
    }
}

#[test]
fn test_drag_phrase_is_never_a_click() {
    let expected = Action::Drag(DragCommand {
        start: Point::new(100, 100),
        end: Point::new(500, 500),
    });
    assert_eq!(classify("drag from 100, 100 to 500, 500"), Some(expected));
    assert_eq!(classify("拖拽从 100, 100 到 500, 500"), Some(expected));
    // Click keywords do not change a drag.
    assert_eq!(classify("double drag from 100, 100 to 500, 500"), Some(expected));
}

#[test]
fn test_click_kind_from_keywords() {
    assert_eq!(
        classify("双击 500, 300"),
        Some(Action::Click {
            at: Point::new(500, 300),
            kind: ClickKind::Double,
        })
    );
    assert_eq!(
        classify("右键点击 800, 600"),
        Some(Action::Click {
            at: Point::new(800, 600),
            kind: ClickKind::Right,
        })
    );
    assert_eq!(
        classify("点击 100, 200"),
        Some(Action::Click {
            at: Point::new(100, 200),
            kind: ClickKind::Single,
        })
    );
}

#[test]
fn test_scroll_sign_and_default() {
    let scroll = |amount| Some(Action::Scroll { amount, at: None });
    assert_eq!(classify("scroll up"), scroll(SCROLL_MAGNITUDE));
    assert_eq!(classify("向下滚动"), scroll(-SCROLL_MAGNITUDE));
    assert_eq!(classify("滚屏"), scroll(SCROLL_MAGNITUDE));
}

#[test]
fn test_scroll_keyword_with_coordinates_is_a_click() {
    assert!(matches!(
        classify("scroll to 100, 200"),
        Some(Action::Click { .. })
    ));
}

#[test]
fn test_unrecognized_text() {
    assert_eq!(classify("hello there"), None);
}

#[test]
fn test_malformed_drag_range() {
    let err = parse_drag_range("abc:def").unwrap_err();
    assert!(matches!(err, ScreenkitError::MalformedInput(_)));
}

#[test]
fn test_oversized_drag_end_saturates() {
    assert_eq!(
        classify("drag from 100, 100 to 500, 99999999999"),
        Some(Action::Drag(DragCommand {
            start: Point::new(100, 100),
            end: Point::new(500, u32::MAX),
        }))
    );
}

#[test]
fn test_full_width_digits_are_coordinates() {
    assert_eq!(
        extract_coordinates("双击 １２，３４"),
        Some(Point::new(12, 34))
    );
}
