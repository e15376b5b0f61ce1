use ratatui::layout::Rect;
use vigo_buffer::{
    message::{BufferMessage, PointerEvent, PointerKind, ViewPortDirection},
    model::{Mode, Redraw},
};
use vigo_keymap::message::KeymapMessage;

use crate::{
    action::Action, error::AppError, event::Message, layout::AppLayout, model::Model,
};

mod command;
mod commandline;

/// Applies one message to the session. Returns the redraw level the message
/// requires and the side effects the caller has to execute.
#[tracing::instrument(skip(model))]
pub fn update_model(
    model: &mut Model,
    message: Message,
) -> Result<(Redraw, Vec<Action>), AppError> {
    match message {
        Message::Keymap(KeymapMessage::Buffer(message)) => {
            Ok((buffer(model, &message)?, Vec::new()))
        }
        Message::Keymap(KeymapMessage::ExecuteCommand) => commandline::execute(model),
        Message::Pointer(kind, column, row) => Ok((pointer(model, kind, column, row)?, Vec::new())),
        Message::Resize(x, y) => Ok((resize(model, x, y)?, vec![Action::Resize(x, y)])),
        Message::Scroll(direction) => Ok((scroll(model, direction)?, Vec::new())),
    }
}

fn buffer(model: &mut Model, message: &BufferMessage) -> Result<Redraw, AppError> {
    match message {
        BufferMessage::ChangeMode(from, to) => {
            let redraw = update_buffer(model, message)?;
            if redraw == Redraw::None {
                return Ok(redraw);
            }

            if to == &Mode::Command {
                commandline::reset(model);
            } else if from == &Mode::Command {
                commandline::clear(model);
            }

            Ok(redraw)
        }
        BufferMessage::Modification(_) | BufferMessage::MoveCursor(_)
            if model.cursor.mode.is_command() =>
        {
            commandline::update(model, message)
        }
        _ => update_buffer(model, message),
    }
}

fn update_buffer(model: &mut Model, message: &BufferMessage) -> Result<Redraw, AppError> {
    Ok(vigo_buffer::update(
        &mut model.viewport,
        &mut model.cursor,
        &mut model.buffer,
        message,
    )?)
}

fn pointer(model: &mut Model, kind: PointerKind, column: u16, row: u16) -> Result<Redraw, AppError> {
    if model.cursor.mode.is_command() && kind != PointerKind::Release {
        return Ok(Redraw::None);
    }

    let area = model.layout.buffer;
    let column = column.saturating_sub(model.settings.pointer_origin);
    let row = row.saturating_sub(model.settings.pointer_origin);

    if kind == PointerKind::Press && !contains(area, column, row) {
        tracing::trace!("ignoring press outside of buffer area at {}:{}", column, row);
        return Ok(Redraw::None);
    }

    let event = PointerEvent {
        kind,
        column: column.saturating_sub(area.x),
        row: row.saturating_sub(area.y),
    };

    update_buffer(model, &BufferMessage::Pointer(event))
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    area.x <= column
        && column < area.x.saturating_add(area.width)
        && area.y <= row
        && row < area.y.saturating_add(area.height)
}

fn resize(model: &mut Model, x: u16, y: u16) -> Result<Redraw, AppError> {
    model.layout = AppLayout::new(Rect::new(0, 0, x, y));

    let area = model.layout.buffer;
    let redraw = update_buffer(model, &BufferMessage::Resize(area.width, area.height))?;

    commandline::resize(model)?;

    Ok(redraw)
}

fn scroll(model: &mut Model, direction: ViewPortDirection) -> Result<Redraw, AppError> {
    update_buffer(model, &BufferMessage::MoveViewPort(direction))
}

#[cfg(test)]
mod tests {
    use vigo_buffer::{
        message::{BufferMessage, PointerKind, TextModification, ViewPortDirection},
        model::{Mode, Redraw, TextBuffer},
    };
    use vigo_keymap::message::KeymapMessage;

    use crate::{event::Message, model::Model, settings::Settings};

    use super::update_model;

    fn model(content: &str) -> Model {
        let mut model = Model::new(Settings::default(), TextBuffer::from_content(content));
        update_model(&mut model, Message::Resize(20, 6)).unwrap();
        model
    }

    #[test]
    fn resize_splits_screen_and_sizes_view_ports() {
        let model = model("abc");

        assert_eq!(4, model.viewport.height);
        assert_eq!(20, model.viewport.width);
        assert_eq!(5, model.layout.commandline.y);
    }

    #[test]
    fn pointer_is_translated_into_buffer_area() {
        let mut model = model("abc\ndefg");
        model.settings.pointer_origin = 1;

        let (redraw, _) =
            update_model(&mut model, Message::Pointer(PointerKind::Press, 3, 2)).unwrap();

        assert_eq!(Redraw::Cursor, redraw);
        assert_eq!((2, 1), (model.cursor.horizontal_index, model.cursor.vertical_index));
    }

    #[test]
    fn pointer_press_on_statusline_is_ignored() {
        let mut model = model("abc\ndefg");

        let (redraw, _) =
            update_model(&mut model, Message::Pointer(PointerKind::Press, 1, 4)).unwrap();

        assert_eq!(Redraw::None, redraw);
        assert_eq!(0, model.cursor.location);
        assert!(!model.cursor.has_selection());
    }

    #[test]
    fn wheel_scroll_on_terminal_without_buffer_rows() {
        let mut model = model("a\nb\nc");
        update_model(&mut model, Message::Resize(40, 2)).unwrap();

        for _ in 0..5 {
            update_model(&mut model, Message::Scroll(ViewPortDirection::LineDown)).unwrap();
        }

        assert_eq!(2, model.viewport.vertical_index);
        assert_eq!(2, model.cursor.vertical_index);
    }

    #[test]
    fn modification_in_command_mode_edits_commandline() {
        let mut model = model("abc");
        model.cursor.mode = Mode::Command;

        update_model(
            &mut model,
            Message::Keymap(KeymapMessage::Buffer(BufferMessage::Modification(
                TextModification::Insert("w".to_string()),
            ))),
        )
        .unwrap();

        assert_eq!("abc", model.buffer.content());
        assert_eq!("w", model.commandline.buffer.content());
    }
}
