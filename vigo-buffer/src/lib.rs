use error::BufferError;
use message::BufferMessage;
use model::{viewport::ViewPort, Cursor, Redraw, TextBuffer};
use ratatui::{layout::Rect, Frame};

pub mod error;
pub mod message;
pub mod model;
mod update;
mod view;

/// Applies a single message to the session state and returns how much of the
/// screen has to be painted again.
pub fn update(
    viewport: &mut ViewPort,
    cursor: &mut Cursor,
    buffer: &mut TextBuffer,
    message: &BufferMessage,
) -> Result<Redraw, BufferError> {
    update::update(viewport, cursor, buffer, message)
}

pub fn view(
    viewport: &ViewPort,
    cursor: &Cursor,
    buffer: &TextBuffer,
    frame: &mut Frame,
    rect: Rect,
) {
    view::view(viewport, cursor, buffer, frame, rect)
}
