use ratatui::{
    prelude::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::model::{Model, PrintContent};

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    let commandline = &model.commandline;

    if model.cursor.mode.is_command() {
        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(1), Constraint::Percentage(100)])
            .split(rect);

        frame.render_widget(Paragraph::new(":"), layout[0]);
        vigo_buffer::view(
            &commandline.viewport,
            &commandline.cursor,
            &commandline.buffer,
            frame,
            layout[1],
        );
    } else if let Some(message) = &commandline.message {
        let paragraph = match message {
            PrintContent::Error(content) => {
                Paragraph::new(content.as_str()).style(Style::default().fg(Color::Red))
            }
            PrintContent::Info(content) => Paragraph::new(content.as_str()),
        };

        frame.render_widget(paragraph, rect);
    }
}
