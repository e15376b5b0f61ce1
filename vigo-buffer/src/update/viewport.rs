use crate::{
    error::BufferError,
    message::ViewPortDirection,
    model::{viewport::ViewPort, Cursor, Redraw, TextBuffer},
    view,
};

use super::cursor;

/// Moves the view port until the cursor cell is visible. Returns true if the
/// view port had to move.
pub fn update_by_cursor(viewport: &mut ViewPort, cursor: &Cursor, buffer: &TextBuffer) -> bool {
    let vertical = update_vertical_index(viewport, cursor);
    let horizontal = update_horizontal_index(viewport, cursor, buffer);

    vertical || horizontal
}

fn update_vertical_index(viewport: &mut ViewPort, cursor: &Cursor) -> bool {
    let viewport_offset = usize::from(viewport.height.saturating_sub(1));

    if viewport.vertical_index > cursor.vertical_index {
        viewport.vertical_index = cursor.vertical_index;
        true
    } else if viewport.vertical_index + viewport_offset < cursor.vertical_index {
        viewport.vertical_index = cursor.vertical_index - viewport_offset;
        true
    } else {
        false
    }
}

fn update_horizontal_index(viewport: &mut ViewPort, cursor: &Cursor, buffer: &TextBuffer) -> bool {
    let line = match buffer.lines.get(cursor.vertical_index) {
        Some(it) => it,
        None => return false,
    };

    let start = view::get_visual_index(line, cursor.horizontal_index, viewport.tab_width);
    let cell_width = line
        .content
        .chars()
        .nth(cursor.horizontal_index)
        .map_or(1, |c| view::get_char_width(c, viewport.tab_width).max(1));

    let width = usize::from(viewport.width.max(1));
    if viewport.horizontal_index > start {
        viewport.horizontal_index = start;
        true
    } else if viewport.horizontal_index + width < start + cell_width {
        viewport.horizontal_index = (start + cell_width).saturating_sub(width).min(start);
        true
    } else {
        false
    }
}

pub fn update_by_direction(
    viewport: &mut ViewPort,
    cursor: &mut Cursor,
    buffer: &TextBuffer,
    direction: &ViewPortDirection,
) -> Result<Redraw, BufferError> {
    match direction {
        ViewPortDirection::LineDown => {
            if viewport.vertical_index >= viewport.get_max_vertical_index(buffer.lines.len()) {
                return Ok(Redraw::None);
            }
            viewport.vertical_index += 1;
        }
        ViewPortDirection::LineUp => {
            if viewport.vertical_index == 0 {
                return Ok(Redraw::None);
            }
            viewport.vertical_index -= 1;
        }
    }

    // the cursor is dragged along instead of snapping the view port back
    if cursor.vertical_index < viewport.vertical_index {
        cursor::set_vertical_index(cursor, buffer, viewport.vertical_index)?;
    } else if cursor.vertical_index > viewport.get_last_visible_index() {
        cursor::set_vertical_index(cursor, buffer, viewport.get_last_visible_index())?;
    }

    Ok(Redraw::Full)
}

pub fn resize(viewport: &mut ViewPort, width: u16, height: u16) -> Redraw {
    viewport.width = width;
    viewport.height = height;

    Redraw::Full
}

#[cfg(test)]
mod tests {
    use crate::{
        message::ViewPortDirection,
        model::{viewport::ViewPort, Cursor, Redraw, TextBuffer},
        update::cursor::set_location,
    };

    use super::{update_by_cursor, update_by_direction};

    fn buffer(count: usize) -> TextBuffer {
        let content = (0..count)
            .map(|i| "x".repeat(i % 7 + 1))
            .collect::<Vec<_>>()
            .join("\n");

        TextBuffer::from_content(&content)
    }

    #[test]
    fn update_by_cursor_snaps_to_cursor_above() {
        let mut viewport = ViewPort::new(10, 5);
        viewport.vertical_index = 8;
        let cursor = Cursor {
            vertical_index: 3,
            ..Default::default()
        };

        assert!(update_by_cursor(&mut viewport, &cursor, &buffer(20)));
        assert_eq!(3, viewport.vertical_index);
    }

    #[test]
    fn update_by_cursor_snaps_to_cursor_below() {
        let mut viewport = ViewPort::new(10, 5);
        let cursor = Cursor {
            vertical_index: 12,
            ..Default::default()
        };

        assert!(update_by_cursor(&mut viewport, &cursor, &buffer(20)));
        assert_eq!(8, viewport.vertical_index);
        assert!(!update_by_cursor(&mut viewport, &cursor, &buffer(20)));
    }

    #[test]
    fn update_by_cursor_without_height_follows_cursor_line() {
        let mut viewport = ViewPort::new(10, 0);
        let cursor = Cursor {
            vertical_index: 4,
            ..Default::default()
        };

        assert!(update_by_cursor(&mut viewport, &cursor, &buffer(20)));
        assert_eq!(4, viewport.vertical_index);
    }

    #[test]
    fn update_by_cursor_scrolls_right_to_cursor_column() {
        let mut viewport = ViewPort::new(4, 2);
        let buffer = TextBuffer::from_content("abcdefgh");
        let cursor = Cursor {
            horizontal_index: 6,
            location: 6,
            ..Default::default()
        };

        assert!(update_by_cursor(&mut viewport, &cursor, &buffer));
        assert_eq!(3, viewport.horizontal_index);
        assert!(!update_by_cursor(&mut viewport, &cursor, &buffer));
    }

    #[test]
    fn update_by_cursor_scrolls_left_to_cursor_column() {
        let mut viewport = ViewPort::new(4, 2);
        viewport.horizontal_index = 5;
        let buffer = TextBuffer::from_content("abcdefgh");
        let cursor = Cursor {
            horizontal_index: 1,
            location: 1,
            ..Default::default()
        };

        assert!(update_by_cursor(&mut viewport, &cursor, &buffer));
        assert_eq!(1, viewport.horizontal_index);
    }

    #[test]
    fn update_by_cursor_shows_whole_tab_and_line_end() {
        let mut viewport = ViewPort::new(4, 2);
        let buffer = TextBuffer::from_content("ab\tc");

        let on_tab = Cursor {
            horizontal_index: 2,
            location: 2,
            ..Default::default()
        };
        assert!(update_by_cursor(&mut viewport, &on_tab, &buffer));
        assert_eq!(2, viewport.horizontal_index);

        let at_end = Cursor {
            horizontal_index: 4,
            location: 4,
            ..Default::default()
        };
        assert!(update_by_cursor(&mut viewport, &at_end, &buffer));
        assert_eq!(4, viewport.horizontal_index);
    }

    #[test]
    fn line_down_stops_at_last_page() {
        let mut viewport = ViewPort::new(10, 4);
        let buffer = buffer(6);
        let mut cursor = Cursor::default();

        let down = ViewPortDirection::LineDown;
        assert_eq!(
            Ok(Redraw::Full),
            update_by_direction(&mut viewport, &mut cursor, &buffer, &down)
        );
        assert_eq!(
            Ok(Redraw::Full),
            update_by_direction(&mut viewport, &mut cursor, &buffer, &down)
        );
        assert_eq!(
            Ok(Redraw::None),
            update_by_direction(&mut viewport, &mut cursor, &buffer, &down)
        );
        assert_eq!(2, viewport.vertical_index);
    }

    #[test]
    fn line_down_on_short_buffer_is_noop() {
        let mut viewport = ViewPort::new(10, 10);
        let buffer = buffer(3);
        let mut cursor = Cursor::default();

        assert_eq!(
            Ok(Redraw::None),
            update_by_direction(
                &mut viewport,
                &mut cursor,
                &buffer,
                &ViewPortDirection::LineDown
            )
        );
        assert_eq!(0, viewport.vertical_index);
    }

    #[test]
    fn line_down_without_height_stops_at_last_line() {
        let mut viewport = ViewPort::new(40, 0);
        let buffer = buffer(3);
        let mut cursor = Cursor::default();

        let down = ViewPortDirection::LineDown;
        for _ in 0..2 {
            assert_eq!(
                Ok(Redraw::Full),
                update_by_direction(&mut viewport, &mut cursor, &buffer, &down)
            );
        }
        for _ in 0..3 {
            assert_eq!(
                Ok(Redraw::None),
                update_by_direction(&mut viewport, &mut cursor, &buffer, &down)
            );
        }

        assert_eq!(2, viewport.vertical_index);
        assert_eq!(2, cursor.vertical_index);
    }

    #[test]
    fn scrolling_drags_cursor_into_window() {
        let mut viewport = ViewPort::new(10, 3);
        let buffer = buffer(10);
        let mut cursor = Cursor::default();
        set_location(&mut cursor, &buffer, 0).unwrap();

        update_by_direction(
            &mut viewport,
            &mut cursor,
            &buffer,
            &ViewPortDirection::LineDown,
        )
        .unwrap();

        assert_eq!(1, viewport.vertical_index);
        assert_eq!(1, cursor.vertical_index);
        assert_eq!(
            Ok(cursor.location),
            buffer.position_to_offset(cursor.horizontal_index, cursor.vertical_index)
        );
    }

    #[test]
    fn scrolling_up_drags_cursor_from_bottom() {
        let mut viewport = ViewPort::new(10, 3);
        viewport.vertical_index = 5;
        let buffer = buffer(10);
        let mut cursor = Cursor::default();

        let location = buffer.position_to_offset(1, 7).unwrap();
        set_location(&mut cursor, &buffer, location).unwrap();

        update_by_direction(
            &mut viewport,
            &mut cursor,
            &buffer,
            &ViewPortDirection::LineUp,
        )
        .unwrap();

        assert_eq!(4, viewport.vertical_index);
        assert_eq!(6, cursor.vertical_index);
        assert_eq!(1, cursor.horizontal_index);
    }
}
