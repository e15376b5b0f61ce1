use crate::{
    error::BufferError,
    message::{PointerEvent, PointerKind},
    model::{viewport::ViewPort, Cursor, Redraw, TextBuffer},
    view,
};

use super::cursor;

pub fn update(
    viewport: &mut ViewPort,
    cursor: &mut Cursor,
    buffer: &TextBuffer,
    event: &PointerEvent,
) -> Result<Redraw, BufferError> {
    match event.kind {
        PointerKind::Drag | PointerKind::Press => {
            let (x, y) = get_position(viewport, buffer, event.column, event.row);
            let distance = cursor::distance(cursor, buffer, x, y)?;

            cursor.location = cursor.location.saturating_add_signed(distance);
            cursor.horizontal_index = x;
            cursor.vertical_index = y;
            cursor.expanded_index = x;

            if viewport.selection_armed {
                cursor.selection.start = Some(cursor.location);
            }
            cursor.selection.end = Some(cursor.location);
            viewport.selection_armed = false;

            Ok(Redraw::Cursor)
        }
        PointerKind::Release => {
            viewport.selection_armed = true;
            Ok(Redraw::None)
        }
    }
}

/// Maps a cell inside the buffer area onto the nearest valid text position.
fn get_position(viewport: &ViewPort, buffer: &TextBuffer, column: u16, row: u16) -> (usize, usize) {
    let row = usize::from(row).min(usize::from(viewport.height.saturating_sub(1)));
    let y = (viewport.vertical_index + row).min(buffer.lines.len() - 1);

    let column = viewport.horizontal_index + usize::from(column);
    let x = view::get_char_index(&buffer.lines[y], column, viewport.tab_width);

    (cursor::get_char_pos(buffer, y, x), y)
}
