use crate::{error::AppError, model::Model, terminal::TerminalWrapper};

mod commandline;
mod statusline;

pub fn render_model(terminal: &mut TerminalWrapper, model: &Model) -> Result<(), AppError> {
    terminal.draw(|frame| {
        let layout = model.layout.clone();

        vigo_buffer::view(
            &model.viewport,
            &model.cursor,
            &model.buffer,
            frame,
            layout.buffer,
        );

        statusline::view(model, frame, layout.statusline);
        commandline::view(model, frame, layout.commandline);
    })
}
