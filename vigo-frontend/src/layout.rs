use ratatui::prelude::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AppLayout {
    pub buffer: Rect,
    pub statusline: Rect,
    pub commandline: Rect,
}

impl AppLayout {
    pub fn new(rect: Rect) -> Self {
        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(100),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(rect);

        Self {
            buffer: main[0],
            statusline: main[1],
            commandline: main[2],
        }
    }
}
