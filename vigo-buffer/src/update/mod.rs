use crate::{
    error::BufferError,
    message::{BufferMessage, CursorDirection},
    model::{viewport::ViewPort, Cursor, Mode, Redraw, TextBuffer},
};

mod cursor;
mod mode;
mod modification;
mod pointer;
mod viewport;

#[tracing::instrument(skip(viewport, cursor, buffer))]
pub fn update(
    viewport: &mut ViewPort,
    cursor: &mut Cursor,
    buffer: &mut TextBuffer,
    message: &BufferMessage,
) -> Result<Redraw, BufferError> {
    tracing::debug!("handling buffer message: {:?}", message);

    let redraw = match message {
        BufferMessage::ChangeMode(from, to) => mode::change(cursor, from, to),
        BufferMessage::Modification(modification) => {
            modification::update(cursor, buffer, modification)?
        }
        BufferMessage::MoveCursor(direction) => move_cursor(cursor, buffer, direction)?,
        BufferMessage::MoveViewPort(direction) => {
            viewport::update_by_direction(viewport, cursor, buffer, direction)?
        }
        BufferMessage::Pointer(event) => pointer::update(viewport, cursor, buffer, event)?,
        BufferMessage::Resize(width, height) => viewport::resize(viewport, *width, *height),
    };

    if viewport::update_by_cursor(viewport, cursor, buffer) {
        Ok(Redraw::Full)
    } else {
        Ok(redraw)
    }
}

fn move_cursor(
    cursor: &mut Cursor,
    buffer: &TextBuffer,
    direction: &CursorDirection,
) -> Result<Redraw, BufferError> {
    if cursor.mode == Mode::Command {
        return Ok(Redraw::None);
    }

    cursor::update_by_direction(cursor, buffer, direction)?;
    Ok(Redraw::Cursor)
}
