use ansi_to_tui::IntoText;
use ratatui::{layout::Rect, text::Text, widgets::Paragraph, Frame};

use crate::model::{viewport::ViewPort, Cursor, Mode, TextBuffer};

pub use self::line::{get_char_index, get_char_width, get_visual_index};

mod line;

pub fn view(
    viewport: &ViewPort,
    cursor: &Cursor,
    buffer: &TextBuffer,
    frame: &mut Frame,
    rect: Rect,
) {
    let rendered = get_rendered_lines(viewport, cursor, buffer);

    let text = match rendered.join("\n").into_text() {
        Ok(text) => text,
        Err(error) => {
            tracing::error!("converting rendered lines failed: {:?}", error);
            Text::raw(get_plain_lines(viewport, buffer).join("\n"))
        }
    };

    frame.render_widget(Paragraph::new(text), rect);

    if cursor.mode != Mode::Command {
        if let Some(position) = get_cursor_position(viewport, cursor, buffer, rect) {
            frame.set_cursor_position(position);
        }
    }
}

fn get_rendered_lines(viewport: &ViewPort, cursor: &Cursor, buffer: &TextBuffer) -> Vec<String> {
    let selection = cursor.selection.range();

    let mut line_offset: usize = buffer
        .lines
        .iter()
        .take(viewport.vertical_index)
        .map(|line| line.len() + 1)
        .sum();

    let mut result = Vec::new();
    for line in buffer
        .lines
        .iter()
        .skip(viewport.vertical_index)
        .take(usize::from(viewport.height))
    {
        result.push(line::get_styled_content(
            line,
            line_offset,
            selection,
            viewport,
        ));
        line_offset += line.len() + 1;
    }

    result
}

fn get_plain_lines(viewport: &ViewPort, buffer: &TextBuffer) -> Vec<String> {
    buffer
        .lines
        .iter()
        .skip(viewport.vertical_index)
        .take(usize::from(viewport.height))
        .map(|line| line::get_styled_content(line, 0, None, viewport))
        .collect()
}

fn get_cursor_position(
    viewport: &ViewPort,
    cursor: &Cursor,
    buffer: &TextBuffer,
    rect: Rect,
) -> Option<(u16, u16)> {
    if !viewport.is_visible(cursor.vertical_index) || rect.width == 0 || rect.height == 0 {
        return None;
    }

    let line = buffer.lines.get(cursor.vertical_index)?;
    let visual = line::get_visual_index(line, cursor.horizontal_index, viewport.tab_width);
    let visual = visual.saturating_sub(viewport.horizontal_index);
    let row = cursor.vertical_index - viewport.vertical_index;

    let x = rect.x + u16::try_from(visual).unwrap_or(u16::MAX).min(rect.width - 1);
    let y = rect.y + u16::try_from(row).unwrap_or(u16::MAX).min(rect.height - 1);

    Some((x, y))
}
