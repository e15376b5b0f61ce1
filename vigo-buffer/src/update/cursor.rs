use crate::{
    error::BufferError,
    message::CursorDirection,
    model::{Cursor, TextBuffer},
};

pub fn update_by_direction(
    cursor: &mut Cursor,
    buffer: &TextBuffer,
    direction: &CursorDirection,
) -> Result<(), BufferError> {
    match direction {
        CursorDirection::Down => {
            if cursor.vertical_index + 1 < buffer.lines.len() {
                set_vertical_index(cursor, buffer, cursor.vertical_index + 1)?;
            }
        }
        CursorDirection::Left => {
            if cursor.location > 0 {
                set_location(cursor, buffer, cursor.location - 1)?;
            }
        }
        CursorDirection::Right => {
            if cursor.location < buffer.len() {
                set_location(cursor, buffer, cursor.location + 1)?;
            }
        }
        CursorDirection::Up => {
            if cursor.vertical_index > 0 {
                set_vertical_index(cursor, buffer, cursor.vertical_index - 1)?;
            }
        }
    }

    Ok(())
}

/// Moves the cursor to an absolute offset and resets the remembered column.
pub fn set_location(
    cursor: &mut Cursor,
    buffer: &TextBuffer,
    location: usize,
) -> Result<(), BufferError> {
    let (x, y) = buffer.offset_to_position(location)?;

    cursor.location = location;
    cursor.horizontal_index = x;
    cursor.vertical_index = y;
    cursor.expanded_index = x;

    Ok(())
}

/// Moves the cursor onto another line. The column follows the remembered
/// column but never exceeds the length of the target line.
pub fn set_vertical_index(
    cursor: &mut Cursor,
    buffer: &TextBuffer,
    index: usize,
) -> Result<(), BufferError> {
    let x = get_char_pos(buffer, index, cursor.expanded_index);

    cursor.location = buffer.position_to_offset(x, index)?;
    cursor.horizontal_index = x;
    cursor.vertical_index = index;

    Ok(())
}

pub fn get_char_pos(buffer: &TextBuffer, row: usize, column: usize) -> usize {
    buffer
        .lines
        .get(row)
        .map_or(0, |line| column.min(line.len()))
}

pub fn distance(
    cursor: &Cursor,
    buffer: &TextBuffer,
    x: usize,
    y: usize,
) -> Result<isize, BufferError> {
    let offset = buffer.position_to_offset(x, y)?;
    Ok(offset as isize - cursor.location as isize)
}
