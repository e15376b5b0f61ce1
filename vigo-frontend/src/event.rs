use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use vigo_buffer::{
    message::{PointerKind, ViewPortDirection},
    model::Mode,
};
use vigo_keymap::{conversion, message::KeymapMessage, MessageResolver};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    Keymap(KeymapMessage),
    /// Primary button event at an absolute terminal cell.
    Pointer(PointerKind, u16, u16),
    Resize(u16, u16),
    Scroll(ViewPortDirection),
}

pub fn handle_crossterm_event(
    resolver: &MessageResolver,
    mode: &Mode,
    event: Event,
) -> Vec<Message> {
    match event {
        Event::Key(key) => match conversion::to_key(&key) {
            Some(key) => resolver
                .resolve(mode, &key)
                .into_iter()
                .map(Message::Keymap)
                .collect(),
            None => Vec::new(),
        },
        Event::Mouse(mouse) => handle_mouse_event(mouse).into_iter().collect(),
        Event::Resize(x, y) => vec![Message::Resize(x, y)],
        Event::FocusLost | Event::FocusGained | Event::Paste(_) => Vec::new(),
    }
}

fn handle_mouse_event(event: MouseEvent) -> Option<Message> {
    let kind = match event.kind {
        MouseEventKind::Down(MouseButton::Left) => PointerKind::Press,
        MouseEventKind::Drag(MouseButton::Left) => PointerKind::Drag,
        MouseEventKind::Up(MouseButton::Left) => PointerKind::Release,
        MouseEventKind::ScrollDown => return Some(Message::Scroll(ViewPortDirection::LineDown)),
        MouseEventKind::ScrollUp => return Some(Message::Scroll(ViewPortDirection::LineUp)),
        _ => return None,
    };

    Some(Message::Pointer(kind, event.column, event.row))
}
