use crate::model::{Cursor, Mode, Redraw};

pub fn change(cursor: &mut Cursor, from: &Mode, to: &Mode) -> Redraw {
    if &cursor.mode != from {
        tracing::warn!(
            "ignoring mode change from {} while cursor is in {}",
            from,
            cursor.mode
        );
        return Redraw::None;
    }

    if !is_valid_transition(from, to) {
        return Redraw::None;
    }

    tracing::debug!("changing mode from {} to {}", from, to);

    cursor.mode = to.clone();
    Redraw::Cursor
}

fn is_valid_transition(from: &Mode, to: &Mode) -> bool {
    matches!(
        (from, to),
        (Mode::Normal, Mode::Insert)
            | (Mode::Normal, Mode::Command)
            | (Mode::Insert, Mode::Normal)
            | (Mode::Command, Mode::Normal)
    )
}

#[cfg(test)]
mod tests {
    use crate::model::{Cursor, Mode, Redraw};

    use super::change;

    fn cursor_in(mode: Mode) -> Cursor {
        Cursor {
            mode,
            ..Default::default()
        }
    }

    #[test]
    fn valid_transitions_change_mode() {
        for (from, to) in [
            (Mode::Normal, Mode::Insert),
            (Mode::Insert, Mode::Normal),
            (Mode::Normal, Mode::Command),
            (Mode::Command, Mode::Normal),
        ] {
            let mut cursor = cursor_in(from.clone());
            assert_eq!(Redraw::Cursor, change(&mut cursor, &from, &to));
            assert_eq!(to, cursor.mode);
        }
    }

    #[test]
    fn invalid_transitions_are_noop() {
        for (from, to) in [
            (Mode::Insert, Mode::Command),
            (Mode::Command, Mode::Insert),
            (Mode::Normal, Mode::Normal),
        ] {
            let mut cursor = cursor_in(from.clone());
            assert_eq!(Redraw::None, change(&mut cursor, &from, &to));
            assert_eq!(from, cursor.mode);
        }
    }

    #[test]
    fn stale_source_mode_is_ignored() {
        let mut cursor = cursor_in(Mode::Insert);
        assert_eq!(
            Redraw::None,
            change(&mut cursor, &Mode::Normal, &Mode::Command)
        );
        assert_eq!(Mode::Insert, cursor.mode);
    }
}
