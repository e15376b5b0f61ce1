use vigo_buffer::{
    message::BufferMessage,
    model::{Mode, Redraw, TextBuffer},
};

use crate::{action::Action, error::AppError, model::Model};

use super::command;

pub fn update(model: &mut Model, message: &BufferMessage) -> Result<Redraw, AppError> {
    let commandline = &mut model.commandline;
    let redraw = vigo_buffer::update(
        &mut commandline.viewport,
        &mut commandline.cursor,
        &mut commandline.buffer,
        message,
    )?;

    Ok(redraw)
}

/// Runs the typed command and returns to normal mode, regardless of whether
/// the command succeeds.
pub fn execute(model: &mut Model) -> Result<(Redraw, Vec<Action>), AppError> {
    if !model.cursor.mode.is_command() {
        return Ok((Redraw::None, Vec::new()));
    }

    let cmd = model.commandline.buffer.content();
    tracing::debug!("executing command: {:?}", cmd);

    vigo_buffer::update(
        &mut model.viewport,
        &mut model.cursor,
        &mut model.buffer,
        &BufferMessage::ChangeMode(Mode::Command, Mode::Normal),
    )?;
    clear(model);

    let actions = command::execute(model, cmd.trim());

    Ok((Redraw::Full, actions))
}

pub fn reset(model: &mut Model) {
    clear(model);
    model.commandline.message = None;
}

pub fn clear(model: &mut Model) {
    let commandline = &mut model.commandline;
    commandline.buffer = TextBuffer::default();
    commandline.cursor.expanded_index = 0;
    commandline.cursor.horizontal_index = 0;
    commandline.cursor.location = 0;
    commandline.cursor.selection.clear();
    commandline.cursor.vertical_index = 0;
    commandline.viewport.horizontal_index = 0;
    commandline.viewport.vertical_index = 0;
}

pub fn resize(model: &mut Model) -> Result<(), AppError> {
    // first column holds the `:` prompt
    let area = model.layout.commandline;
    update(
        model,
        &BufferMessage::Resize(area.width.saturating_sub(1), area.height),
    )?;

    Ok(())
}
