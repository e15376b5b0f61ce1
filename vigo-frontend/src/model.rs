use vigo_buffer::model::{viewport::ViewPort, Cursor, Mode, TextBuffer};

use crate::{layout::AppLayout, settings::Settings};

/// The editing session. Everything the editor knows lives here and is passed
/// by reference into update and view.
#[derive(Debug)]
pub struct Model {
    pub buffer: TextBuffer,
    pub commandline: CommandLine,
    pub cursor: Cursor,
    pub layout: AppLayout,
    pub settings: Settings,
    pub viewport: ViewPort,
}

impl Model {
    pub fn new(settings: Settings, buffer: TextBuffer) -> Self {
        let viewport = ViewPort {
            tab_width: settings.tab_width,
            ..Default::default()
        };

        Self {
            buffer,
            commandline: CommandLine::default(),
            cursor: Cursor::default(),
            layout: AppLayout::default(),
            settings,
            viewport,
        }
    }
}

/// Single line input for `:` commands. Its cursor stays in insert mode so
/// typed chars are inserted like in a regular buffer.
#[derive(Debug)]
pub struct CommandLine {
    pub buffer: TextBuffer,
    pub cursor: Cursor,
    pub message: Option<PrintContent>,
    pub viewport: ViewPort,
}

impl Default for CommandLine {
    fn default() -> Self {
        Self {
            buffer: TextBuffer::default(),
            cursor: Cursor {
                mode: Mode::Insert,
                ..Default::default()
            },
            message: None,
            viewport: ViewPort::default(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PrintContent {
    Error(String),
    Info(String),
}
