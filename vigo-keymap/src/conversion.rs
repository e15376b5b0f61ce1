use std::collections::VecDeque;

use crossterm::event::{self, KeyEvent, KeyEventKind};

use crate::key::{Key, KeyCode, KeyModifier};

/// Splits a string like `ihello<esc>:w<cr>` into keys. Invalid keycodes are
/// skipped.
pub fn from_keycode_string(keycodes: &str) -> VecDeque<Key> {
    let mut keys = VecDeque::new();

    let regex = regex::Regex::new(r"<[^>]*>|.").expect("Failed to compile regex");
    for capture in regex.find_iter(keycodes).map(|m| m.as_str()) {
        if let Some(key) = Key::from_keycode_string(capture) {
            keys.push_back(key);
        } else {
            tracing::warn!("skipping invalid keycode: {}", capture);
        }
    }

    keys
}

pub fn to_key(event: &KeyEvent) -> Option<Key> {
    let mut modifier: Vec<_> = event
        .modifiers
        .iter_names()
        .flat_map(|(s, _)| to_modifier(s))
        .collect();

    match event.code {
        event::KeyCode::Backspace => resolve(event.kind, KeyCode::Backspace, modifier),
        event::KeyCode::Delete => resolve(event.kind, KeyCode::Delete, modifier),
        event::KeyCode::Down => resolve(event.kind, KeyCode::Down, modifier),
        event::KeyCode::End => resolve(event.kind, KeyCode::End, modifier),
        event::KeyCode::Enter => resolve(event.kind, KeyCode::Enter, modifier),
        event::KeyCode::Esc => resolve(event.kind, KeyCode::Esc, modifier),
        event::KeyCode::Home => resolve(event.kind, KeyCode::Home, modifier),
        event::KeyCode::Left => resolve(event.kind, KeyCode::Left, modifier),
        event::KeyCode::PageDown => resolve(event.kind, KeyCode::PageDown, modifier),
        event::KeyCode::PageUp => resolve(event.kind, KeyCode::PageUp, modifier),
        event::KeyCode::Right => resolve(event.kind, KeyCode::Right, modifier),
        event::KeyCode::Tab => resolve(event.kind, KeyCode::Tab, modifier),
        event::KeyCode::Up => resolve(event.kind, KeyCode::Up, modifier),
        event::KeyCode::Char(c) => {
            // shift is already part of symbols like `!` or `:`
            if c.is_alphabetic() && c.is_uppercase() {
                if !modifier.contains(&KeyModifier::Shift) {
                    modifier.push(KeyModifier::Shift);
                }
            } else if !c.is_alphabetic() {
                modifier.retain(|m| m != &KeyModifier::Shift);
            }

            resolve(event.kind, KeyCode::from_char(c), modifier)
        }
        _ => None,
    }
}

fn resolve(kind: KeyEventKind, code: KeyCode, modifier: Vec<KeyModifier>) -> Option<Key> {
    if kind != KeyEventKind::Press {
        return None;
    }

    Some(Key::new(code, modifier))
}

fn to_modifier(modifier: &str) -> Option<KeyModifier> {
    match modifier {
        "ALT" => Some(KeyModifier::Alt),
        "CONTROL" => Some(KeyModifier::Ctrl),
        "HYPER" => Some(KeyModifier::Command),
        "META" => Some(KeyModifier::Alt),
        "SHIFT" => Some(KeyModifier::Shift),
        "SUPER" => Some(KeyModifier::Command),
        _ => None,
    }
}
