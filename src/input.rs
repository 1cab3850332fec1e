//! Single-key command table for the player screen.
//!
//! Letter commands accept both cases and the key in the same position on a
//! Russian (ЙЦУКЕН) layout, so the player keeps working when the keyboard
//! layout is switched.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    PlayPause,
    Next,
    Previous,
    PlaySelected,
    Stop,
    ToggleRepeat,
    ToggleShuffle,
    SeekBack,
    SeekForward,
    Browse,
    ToggleHelp,
    VolumeUp,
    VolumeDown,
    SelectUp,
    SelectDown,
}

pub fn command_for(key: &KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Quit),
            _ => None,
        };
    }

    let cmd = match key.code {
        KeyCode::Char(' ') => Command::PlayPause,
        KeyCode::Enter => Command::PlaySelected,
        KeyCode::Up => Command::SelectUp,
        KeyCode::Down => Command::SelectDown,
        KeyCode::Left => Command::SeekBack,
        KeyCode::Right => Command::SeekForward,
        KeyCode::Char(c) => match c {
            'q' | 'Q' | 'й' | 'Й' => Command::Quit,
            'n' | 'N' | 'т' | 'Т' => Command::Next,
            'p' | 'P' | 'з' | 'З' => Command::Previous,
            's' | 'S' | 'ы' | 'Ы' => Command::Stop,
            'r' | 'R' | 'к' | 'К' => Command::ToggleRepeat,
            'h' | 'H' | 'р' | 'Р' => Command::ToggleShuffle,
            'b' | 'B' | 'и' | 'И' => Command::Browse,
            'k' | 'K' | 'л' | 'Л' => Command::ToggleHelp,
            '+' | '=' => Command::VolumeUp,
            '-' | '_' => Command::VolumeDown,
            _ => return None,
        },
        _ => return None,
    };
    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn letter_commands_alias_case_and_russian_layout() {
        for c in ['q', 'Q', 'й', 'Й'] {
            assert_eq!(command_for(&key(KeyCode::Char(c))), Some(Command::Quit));
        }
        for c in ['n', 'N', 'т', 'Т'] {
            assert_eq!(command_for(&key(KeyCode::Char(c))), Some(Command::Next));
        }
        for c in ['h', 'H', 'р', 'Р'] {
            assert_eq!(command_for(&key(KeyCode::Char(c))), Some(Command::ToggleShuffle));
        }
        for c in ['k', 'K', 'л', 'Л'] {
            assert_eq!(command_for(&key(KeyCode::Char(c))), Some(Command::ToggleHelp));
        }
    }

    #[test]
    fn non_letter_commands() {
        assert_eq!(command_for(&key(KeyCode::Char(' '))), Some(Command::PlayPause));
        assert_eq!(command_for(&key(KeyCode::Enter)), Some(Command::PlaySelected));
        assert_eq!(command_for(&key(KeyCode::Left)), Some(Command::SeekBack));
        assert_eq!(command_for(&key(KeyCode::Right)), Some(Command::SeekForward));
        assert_eq!(command_for(&key(KeyCode::Up)), Some(Command::SelectUp));
        assert_eq!(command_for(&key(KeyCode::Down)), Some(Command::SelectDown));
        assert_eq!(command_for(&key(KeyCode::Char('='))), Some(Command::VolumeUp));
        assert_eq!(command_for(&key(KeyCode::Char('_'))), Some(Command::VolumeDown));
    }

    #[test]
    fn ctrl_c_quits_and_other_chords_are_ignored() {
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        assert_eq!(command_for(&ctrl('c')), Some(Command::Quit));
        assert_eq!(command_for(&ctrl('n')), None);
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        assert_eq!(command_for(&key(KeyCode::Char('x'))), None);
        assert_eq!(command_for(&key(KeyCode::Tab)), None);
    }
}
