use std::collections::HashMap;

use vigo_buffer::{
    message::{BufferMessage, CursorDirection, TextModification},
    model::Mode,
};

use crate::{
    key::{Key, KeyCode},
    message::KeymapMessage,
};

#[derive(Debug)]
pub struct KeyMap {
    mappings: HashMap<Mode, HashMap<Key, Vec<KeymapMessage>>>,
}

impl KeyMap {
    pub fn get(&self, mode: &Mode, key: &Key) -> Option<&Vec<KeymapMessage>> {
        self.mappings.get(mode).and_then(|mappings| mappings.get(key))
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut mappings = HashMap::new();

        add_mapping(
            &mut mappings,
            Mode::Command,
            vec![
                (
                    Key::new(KeyCode::Backspace, vec![]),
                    modification(TextModification::DeleteCharBeforeCursor),
                ),
                (
                    Key::new(KeyCode::Delete, vec![]),
                    modification(TextModification::DeleteCharOnCursor),
                ),
                (
                    Key::new(KeyCode::Enter, vec![]),
                    vec![KeymapMessage::ExecuteCommand],
                ),
                (
                    Key::new(KeyCode::Esc, vec![]),
                    change_mode(Mode::Command, Mode::Normal),
                ),
                (
                    Key::new(KeyCode::Left, vec![]),
                    motion(CursorDirection::Left),
                ),
                (
                    Key::new(KeyCode::Right, vec![]),
                    motion(CursorDirection::Right),
                ),
            ],
        );

        add_mapping(
            &mut mappings,
            Mode::Insert,
            vec![
                (
                    Key::new(KeyCode::Backspace, vec![]),
                    modification(TextModification::DeleteCharBeforeCursor),
                ),
                (
                    Key::new(KeyCode::Delete, vec![]),
                    modification(TextModification::DeleteCharOnCursor),
                ),
                (
                    Key::new(KeyCode::Enter, vec![]),
                    modification(TextModification::InsertLineBreak),
                ),
                (
                    Key::new(KeyCode::Esc, vec![]),
                    change_mode(Mode::Insert, Mode::Normal),
                ),
                (
                    Key::new(KeyCode::Down, vec![]),
                    motion(CursorDirection::Down),
                ),
                (
                    Key::new(KeyCode::Left, vec![]),
                    motion(CursorDirection::Left),
                ),
                (
                    Key::new(KeyCode::Right, vec![]),
                    motion(CursorDirection::Right),
                ),
                (Key::new(KeyCode::Up, vec![]), motion(CursorDirection::Up)),
            ],
        );

        add_mapping(
            &mut mappings,
            Mode::Normal,
            vec![
                (
                    Key::new(KeyCode::from_char(':'), vec![]),
                    change_mode(Mode::Normal, Mode::Command),
                ),
                (
                    Key::new(KeyCode::Esc, vec![]),
                    change_mode(Mode::Normal, Mode::Normal),
                ),
                (
                    Key::new(KeyCode::from_char('i'), vec![]),
                    change_mode(Mode::Normal, Mode::Insert),
                ),
                (
                    Key::new(KeyCode::from_char('h'), vec![]),
                    motion(CursorDirection::Left),
                ),
                (
                    Key::new(KeyCode::from_char('j'), vec![]),
                    motion(CursorDirection::Down),
                ),
                (
                    Key::new(KeyCode::from_char('k'), vec![]),
                    motion(CursorDirection::Up),
                ),
                (
                    Key::new(KeyCode::from_char('l'), vec![]),
                    motion(CursorDirection::Right),
                ),
                (
                    Key::new(KeyCode::Down, vec![]),
                    motion(CursorDirection::Down),
                ),
                (
                    Key::new(KeyCode::Left, vec![]),
                    motion(CursorDirection::Left),
                ),
                (
                    Key::new(KeyCode::Right, vec![]),
                    motion(CursorDirection::Right),
                ),
                (Key::new(KeyCode::Up, vec![]), motion(CursorDirection::Up)),
            ],
        );

        Self { mappings }
    }
}

fn add_mapping(
    mappings: &mut HashMap<Mode, HashMap<Key, Vec<KeymapMessage>>>,
    mode: Mode,
    entries: Vec<(Key, Vec<KeymapMessage>)>,
) {
    let mode_mappings = mappings.entry(mode.clone()).or_default();
    for (key, messages) in entries {
        if mode_mappings.insert(key.clone(), messages).is_some() {
            tracing::warn!("duplicate mapping for {} in {} mode", key, mode);
        }
    }
}

fn change_mode(from: Mode, to: Mode) -> Vec<KeymapMessage> {
    vec![KeymapMessage::Buffer(BufferMessage::ChangeMode(from, to))]
}

fn modification(modification: TextModification) -> Vec<KeymapMessage> {
    vec![KeymapMessage::Buffer(BufferMessage::Modification(
        modification,
    ))]
}

fn motion(direction: CursorDirection) -> Vec<KeymapMessage> {
    vec![KeymapMessage::Buffer(BufferMessage::MoveCursor(direction))]
}
