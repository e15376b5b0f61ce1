use crate::model::Mode;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BufferMessage {
    ChangeMode(Mode, Mode),
    Modification(TextModification),
    MoveCursor(CursorDirection),
    MoveViewPort(ViewPortDirection),
    Pointer(PointerEvent),
    Resize(u16, u16),
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TextModification {
    DeleteCharBeforeCursor,
    DeleteCharOnCursor,
    Insert(String),
    InsertLineBreak,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum CursorDirection {
    Down,
    Left,
    Right,
    Up,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ViewPortDirection {
    LineDown,
    LineUp,
}

/// Pointer input in cells relative to the top left corner of the buffer area.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub column: u16,
    pub row: u16,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PointerKind {
    Drag,
    Press,
    Release,
}
