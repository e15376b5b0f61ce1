use ratatui::{
    prelude::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use vigo_buffer::model::Mode;

use crate::model::Model;

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    let name = get_name_content(model);
    let mode = get_mode_content(&model.cursor.mode);
    let position = get_position_content(model);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(get_width(&name)),
            Constraint::Length(2),
            Constraint::Min(get_width(&mode)),
            Constraint::Length(get_width(&position)),
        ])
        .split(rect);

    frame.render_widget(
        Block::default().style(Style::default().bg(Color::Black)),
        rect,
    );

    frame.render_widget(Paragraph::new(name), layout[0]);
    frame.render_widget(Paragraph::new(mode), layout[2]);
    frame.render_widget(Paragraph::new(position), layout[3]);
}

fn get_width(line: &Line) -> u16 {
    u16::try_from(line.width()).unwrap_or(u16::MAX)
}

fn get_name_content(model: &Model) -> Line<'static> {
    let name = model.buffer.name();
    let name = if name.is_empty() {
        "[No Name]".to_string()
    } else {
        name
    };

    let mut content = vec![Span::styled(name, Style::default().fg(Color::Gray))];
    if model.buffer.modified {
        content.push(Span::styled(" [+]", Style::default().fg(Color::Yellow)));
    }

    Line::from(content)
}

fn get_mode_content(mode: &Mode) -> Line<'static> {
    match mode {
        Mode::Insert => Line::from(Span::styled(
            "-- INSERT --",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Mode::Command | Mode::Normal => Line::default(),
    }
}

fn get_position_content(model: &Model) -> Line<'static> {
    Line::from(Span::styled(
        format!(
            "{}:{}",
            model.cursor.vertical_index + 1,
            model.cursor.horizontal_index + 1
        ),
        Style::default().fg(Color::Gray),
    ))
}
