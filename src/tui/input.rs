use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::Action;
use crate::pass::charset::CharacterClass;

/// What a key press asks the screen to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Apply(Action),
    Copy,
    Quit,
}

/// Map a key event to a screen command. Unbound keys map to `None`.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Esc | KeyCode::Char('q') => return Some(Command::Quit),
        KeyCode::Char('c') | KeyCode::Char('y') => return Some(Command::Copy),
        KeyCode::Left | KeyCode::Char('-') | KeyCode::Char('h') => Action::StepLength(-1),
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('l') => {
            Action::StepLength(1)
        }
        KeyCode::Home => Action::SetLength(f64::MIN),
        KeyCode::End => Action::SetLength(f64::MAX),
        KeyCode::Char('1') => Action::Toggle(CharacterClass::Lowercase),
        KeyCode::Char('2') => Action::Toggle(CharacterClass::Uppercase),
        KeyCode::Char('3') => Action::Toggle(CharacterClass::Digit),
        KeyCode::Char('4') => Action::Toggle(CharacterClass::Symbol),
        KeyCode::Enter | KeyCode::Char('g') | KeyCode::Char(' ') => Action::Generate,
        KeyCode::Char('r') => Action::Reset,
        _ => return None,
    };

    Some(Command::Apply(action))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn digits_toggle_classes() {
        assert_eq!(
            command_for(key(KeyCode::Char('3'))),
            Some(Command::Apply(Action::Toggle(CharacterClass::Digit)))
        );
        assert_eq!(
            command_for(key(KeyCode::Char('4'))),
            Some(Command::Apply(Action::Toggle(CharacterClass::Symbol)))
        );
    }

    #[test]
    fn arrows_step_length() {
        assert_eq!(
            command_for(key(KeyCode::Left)),
            Some(Command::Apply(Action::StepLength(-1)))
        );
        assert_eq!(
            command_for(key(KeyCode::Right)),
            Some(Command::Apply(Action::StepLength(1)))
        );
    }

    #[test]
    fn enter_generates_and_r_resets() {
        assert_eq!(
            command_for(key(KeyCode::Enter)),
            Some(Command::Apply(Action::Generate))
        );
        assert_eq!(
            command_for(key(KeyCode::Char('r'))),
            Some(Command::Apply(Action::Reset))
        );
    }

    #[test]
    fn ctrl_c_quits_but_plain_c_copies() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for(ctrl_c), Some(Command::Quit));
        assert_eq!(command_for(key(KeyCode::Char('c'))), Some(Command::Copy));
        assert_eq!(command_for(key(KeyCode::Esc)), Some(Command::Quit));
    }

    #[test]
    fn releases_and_unbound_keys_are_ignored() {
        let mut release = key(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(command_for(release), None);
        assert_eq!(command_for(key(KeyCode::Char('z'))), None);
    }
}
