use std::{collections::VecDeque, fmt::Display, hash::Hash};

#[derive(Clone, Debug, Eq)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: Vec<KeyModifier>,
}

impl Key {
    pub fn new(code: KeyCode, modifiers: Vec<KeyModifier>) -> Self {
        Self { code, modifiers }
    }

    /// Parses a single vim like keycode, e.g. `a`, `A`, `<esc>` or `<C-w>`.
    pub fn from_keycode_string(keycode: &str) -> Option<Self> {
        let regex = regex::Regex::new(r"[^-<>]+|^-$|--").expect("Failed to compile regex");
        let mut codes = regex
            .find_iter(keycode)
            .map(|m| m.as_str())
            .collect::<VecDeque<_>>();

        let mut last = codes.pop_back()?;
        if last == "--" {
            last = "-";
        }

        let mut modifiers = Vec::new();
        if last.chars().count() == 1 && last.chars().next()?.is_ascii_uppercase() {
            modifiers.push(KeyModifier::Shift);
        }

        for modifier in codes {
            match modifier.to_ascii_uppercase().as_str() {
                "A" => modifiers.push(KeyModifier::Alt),
                "C" => modifiers.push(KeyModifier::Ctrl),
                "D" => modifiers.push(KeyModifier::Command),
                "S" => modifiers.push(KeyModifier::Shift),
                _ => (),
            }
        }

        KeyCode::from_keycode_string(last).map(|code| Self { code, modifiers })
    }

    /// The char a key produces when typed as text. Keys with modifiers other
    /// than shift do not produce text.
    pub fn to_char(&self) -> Option<char> {
        if self
            .modifiers
            .iter()
            .any(|modifier| modifier != &KeyModifier::Shift)
        {
            return None;
        }

        let is_shifted = self.modifiers.contains(&KeyModifier::Shift);
        match self.code {
            KeyCode::Backslash => Some('\\'),
            KeyCode::Bar => Some('|'),
            KeyCode::Char(c) if is_shifted => Some(c.to_ascii_uppercase()),
            KeyCode::Char(c) => Some(c),
            KeyCode::LessThan => Some('<'),
            KeyCode::Space => Some(' '),
            KeyCode::Tab => Some('\t'),
            _ => None,
        }
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut modifiers = self.modifiers.clone();
        modifiers.sort();

        let (code, force_brackets) = match self.code {
            KeyCode::Char(c) if modifiers.contains(&KeyModifier::Shift) => {
                modifiers.retain(|modifier| *modifier != KeyModifier::Shift);
                (c.to_ascii_uppercase().to_string(), false)
            }
            KeyCode::Char(c) => (c.to_string(), false),
            _ => (self.code.to_string(), true),
        };

        if modifiers.is_empty() && !force_brackets {
            return write!(f, "{}", code);
        }

        write!(f, "<")?;
        for modifier in modifiers {
            match modifier {
                KeyModifier::Alt => write!(f, "A-")?,
                KeyModifier::Command => write!(f, "D-")?,
                KeyModifier::Ctrl => write!(f, "C-")?,
                KeyModifier::Shift => write!(f, "S-")?,
            }
        }
        write!(f, "{}>", code)
    }
}

impl Hash for Key {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
            && self.modifiers.len() == other.modifiers.len()
            && self
                .modifiers
                .iter()
                .all(|modifier| other.modifiers.contains(modifier))
    }
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum KeyCode {
    Backslash,
    Backspace,
    Bar,
    Char(char),
    Delete,
    Down,
    End,
    Enter,
    Esc,
    Home,
    Left,
    LessThan,
    PageDown,
    PageUp,
    Right,
    Space,
    Tab,
    Up,
}

impl KeyCode {
    pub fn from_keycode_string(keycode: &str) -> Option<Self> {
        match keycode {
            "bslash" => Some(KeyCode::Backslash),
            "bs" => Some(KeyCode::Backspace),
            "bar" => Some(KeyCode::Bar),
            "del" => Some(KeyCode::Delete),
            "down" => Some(KeyCode::Down),
            "end" => Some(KeyCode::End),
            "cr" => Some(KeyCode::Enter),
            "esc" => Some(KeyCode::Esc),
            "home" => Some(KeyCode::Home),
            "left" => Some(KeyCode::Left),
            "lt" => Some(KeyCode::LessThan),
            "pagedown" => Some(KeyCode::PageDown),
            "pageup" => Some(KeyCode::PageUp),
            "right" => Some(KeyCode::Right),
            "space" => Some(KeyCode::Space),
            "tab" => Some(KeyCode::Tab),
            "up" => Some(KeyCode::Up),
            code => {
                let mut chars = code.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Self::from_char(c)),
                    _ => None,
                }
            }
        }
    }

    pub fn from_char(c: char) -> KeyCode {
        match c {
            '\\' => KeyCode::Backslash,
            '|' => KeyCode::Bar,
            '<' => KeyCode::LessThan,
            ' ' => KeyCode::Space,
            '\t' => KeyCode::Tab,
            passed => KeyCode::Char(passed.to_ascii_lowercase()),
        }
    }
}

impl Display for KeyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyCode::Backslash => write!(f, "bslash"),
            KeyCode::Backspace => write!(f, "bs"),
            KeyCode::Bar => write!(f, "bar"),
            KeyCode::Char(c) => write!(f, "{}", c.to_ascii_lowercase()),
            KeyCode::Delete => write!(f, "del"),
            KeyCode::Down => write!(f, "down"),
            KeyCode::End => write!(f, "end"),
            KeyCode::Enter => write!(f, "cr"),
            KeyCode::Esc => write!(f, "esc"),
            KeyCode::Home => write!(f, "home"),
            KeyCode::Left => write!(f, "left"),
            KeyCode::LessThan => write!(f, "lt"),
            KeyCode::PageDown => write!(f, "pagedown"),
            KeyCode::PageUp => write!(f, "pageup"),
            KeyCode::Right => write!(f, "right"),
            KeyCode::Space => write!(f, "space"),
            KeyCode::Tab => write!(f, "tab"),
            KeyCode::Up => write!(f, "up"),
        }
    }
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum KeyModifier {
    Alt,
    Command,
    Ctrl,
    Shift,
}
