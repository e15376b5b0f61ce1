use std::fmt::Display;

pub use self::text::{BufferLine, TextBuffer};

mod text;
pub mod viewport;

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Mode {
    Command,
    Insert,
    #[default]
    Normal,
}

impl Mode {
    pub fn is_command(&self) -> bool {
        matches!(self, Mode::Command)
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Command => write!(f, "command"),
            Mode::Insert => write!(f, "insert"),
            Mode::Normal => write!(f, "normal"),
        }
    }
}

/// Position state of the session.
///
/// `location` is the absolute char offset into the document, while
/// `horizontal_index` and `vertical_index` are its projection onto column and
/// row. Every update keeps both representations in sync.
/// `expanded_index` remembers the column vertical movement returns to.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Cursor {
    pub expanded_index: usize,
    pub horizontal_index: usize,
    pub location: usize,
    pub mode: Mode,
    pub selection: Selection,
    pub vertical_index: usize,
}

impl Cursor {
    pub fn has_selection(&self) -> bool {
        self.selection.range().is_some()
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Selection {
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl Selection {
    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// Inclusive offset range, ordered independently of the drag direction.
    pub fn range(&self) -> Option<(usize, usize)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start.min(end), start.max(end))),
            _ => None,
        }
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.range()
            .is_some_and(|(start, end)| start <= offset && offset <= end)
    }
}

/// How much of the screen must be repainted after an update. Levels combine
/// by taking the maximum.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum Redraw {
    #[default]
    None = 0,
    Cursor = 1,
    Full = 2,
}

impl Redraw {
    pub fn level(self) -> u8 {
        self as u8
    }
}
