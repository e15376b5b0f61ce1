use crate::{
    error::BufferError,
    message::TextModification,
    model::{Cursor, Mode, Redraw, TextBuffer},
};

use super::cursor;

pub fn update(
    cursor: &mut Cursor,
    buffer: &mut TextBuffer,
    modification: &TextModification,
) -> Result<Redraw, BufferError> {
    if cursor.mode != Mode::Insert {
        return Ok(Redraw::None);
    }

    let location = cursor.location;
    match modification {
        TextModification::DeleteCharBeforeCursor => {
            if location == 0 {
                return Ok(Redraw::None);
            }

            cursor::set_location(cursor, buffer, location - 1)?;
            buffer.remove(location - 1, location)?;
        }
        TextModification::DeleteCharOnCursor => {
            if location >= buffer.len() {
                return Ok(Redraw::None);
            }

            buffer.remove(location, location + 1)?;
            cursor::set_location(cursor, buffer, location)?;
        }
        TextModification::Insert(text) => {
            if text.is_empty() {
                return Ok(Redraw::None);
            }

            buffer.insert(location, text)?;
            cursor::set_location(cursor, buffer, location + text.chars().count())?;
        }
        TextModification::InsertLineBreak => {
            buffer.insert(location, "\n")?;
            cursor::set_location(cursor, buffer, location + 1)?;
        }
    }

    // offsets of a selection are stale after the content moved
    cursor.selection.clear();

    Ok(Redraw::Full)
}
