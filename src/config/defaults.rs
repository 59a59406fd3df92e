use crossterm::event::KeyCode;

use crate::config::key::{Key, KeyBinding};
use crate::config::keybindings::*;

impl Default for GlobalKeybindings {
    fn default() -> Self {
        Self {
            quit: Key::new(KeyCode::Char('q')).into(),
            help: Key::new(KeyCode::Char('?')).into(),
            theme: Key::new(KeyCode::Char('t')).into(),
            back: Key::new(KeyCode::Esc).into(),
        }
    }
}

impl Default for NavigationKeybindings {
    fn default() -> Self {
        Self {
            up: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('k')),
                Key::new(KeyCode::Up),
            ]),
            down: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('j')),
                Key::new(KeyCode::Down),
            ]),
            page_up: Key::new(KeyCode::PageUp).into(),
            page_down: Key::new(KeyCode::PageDown).into(),
            home: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('g')),
                Key::new(KeyCode::Home),
            ]),
            end: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('G')),
                Key::new(KeyCode::End),
            ]),
            select: KeyBinding::multiple(vec![
                Key::new(KeyCode::Enter),
                Key::new(KeyCode::Char(' ')),
            ]),
        }
    }
}

impl Default for SearchKeybindings {
    fn default() -> Self {
        Self {
            toggle: Key::new(KeyCode::Char('/')).into(),
            exit: Key::new(KeyCode::Esc).into(),
        }
    }
}

impl Default for ScheduleKeybindings {
    fn default() -> Self {
        Self {
            pick_date: Key::new(KeyCode::Char('d')).into(),
            confirm: Key::new(KeyCode::Char('c')).into(),
        }
    }
}

impl Default for PickerKeybindings {
    fn default() -> Self {
        Self {
            next_field: KeyBinding::multiple(vec![
                Key::new(KeyCode::Right),
                Key::new(KeyCode::Char('l')),
                Key::new(KeyCode::Tab),
            ]),
            prev_field: KeyBinding::multiple(vec![
                Key::new(KeyCode::Left),
                Key::new(KeyCode::Char('h')),
                Key::with_shift(KeyCode::BackTab),
            ]),
            increment: KeyBinding::multiple(vec![
                Key::new(KeyCode::Up),
                Key::new(KeyCode::Char('k')),
                Key::new(KeyCode::Char('+')),
            ]),
            decrement: KeyBinding::multiple(vec![
                Key::new(KeyCode::Down),
                Key::new(KeyCode::Char('j')),
                Key::new(KeyCode::Char('-')),
            ]),
            confirm: Key::new(KeyCode::Enter).into(),
            cancel: Key::new(KeyCode::Esc).into(),
        }
    }
}

impl Default for DialogKeybindings {
    fn default() -> Self {
        Self {
            dismiss: KeyBinding::multiple(vec![
                Key::new(KeyCode::Enter),
                Key::new(KeyCode::Esc),
                Key::new(KeyCode::Char('q')),
            ]),
        }
    }
}
