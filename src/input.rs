use crate::snake::Direction::{self, *};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    Turn(Direction),
    Pause,
    Quit,
}

/// Maps a key press to a game control. Unknown keys map to `None`.
pub fn control_for(ev: &KeyEvent) -> Option<Control> {
    if is_ctrl_c(ev) {
        return Some(Control::Quit);
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Control::Turn(Up)),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(Control::Turn(Left)),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(Control::Turn(Down)),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(Control::Turn(Right)),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Control::Quit),
        KeyCode::Esc => Some(Control::Pause),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent { code, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(control_for(&key(KeyCode::Up)), Some(Control::Turn(Up)));
        assert_eq!(control_for(&key(KeyCode::Down)), Some(Control::Turn(Down)));
        assert_eq!(control_for(&key(KeyCode::Left)), Some(Control::Turn(Left)));
        assert_eq!(control_for(&key(KeyCode::Right)), Some(Control::Turn(Right)));
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(control_for(&key(KeyCode::Char('w'))), Some(Control::Turn(Up)));
        assert_eq!(control_for(&key(KeyCode::Char('a'))), Some(Control::Turn(Left)));
        assert_eq!(control_for(&key(KeyCode::Char('s'))), Some(Control::Turn(Down)));
        assert_eq!(control_for(&key(KeyCode::Char('D'))), Some(Control::Turn(Right)));
    }

    #[test]
    fn test_quit_and_pause() {
        assert_eq!(control_for(&key(KeyCode::Char('q'))), Some(Control::Quit));
        assert_eq!(control_for(&key(KeyCode::Esc)), Some(Control::Pause));

        let ctrl_c = KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL };
        assert!(is_ctrl_c(&ctrl_c));
        assert_eq!(control_for(&ctrl_c), Some(Control::Quit));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        assert_eq!(control_for(&key(KeyCode::Char('c'))), None);
        assert_eq!(control_for(&key(KeyCode::Char('x'))), None);
        assert_eq!(control_for(&key(KeyCode::Enter)), None);
    }
}
