use key::Key;
use map::KeyMap;
use message::KeymapMessage;
use vigo_buffer::{
    message::{BufferMessage, TextModification},
    model::Mode,
};

pub mod conversion;
pub mod key;
mod map;
pub mod message;

#[derive(Debug, Default)]
pub struct MessageResolver {
    map: KeyMap,
}

impl MessageResolver {
    /// Resolves a key against the mappings of `mode`. Unmapped keys that
    /// produce text are inserted in modes that accept text input.
    pub fn resolve(&self, mode: &Mode, key: &Key) -> Vec<KeymapMessage> {
        if let Some(messages) = self.map.get(mode, key) {
            return messages.clone();
        }

        if !get_passthrough_by_mode(mode) {
            tracing::trace!("unmapped key {} in {} mode", key, mode);
            return Vec::new();
        }

        match key.to_char() {
            Some(c) => vec![KeymapMessage::Buffer(BufferMessage::Modification(
                TextModification::Insert(c.to_string()),
            ))],
            None => Vec::new(),
        }
    }
}

fn get_passthrough_by_mode(mode: &Mode) -> bool {
    match mode {
        Mode::Command | Mode::Insert => true,
        Mode::Normal => false,
    }
}
