use std::sync::Arc;

use crossterm::event::KeyEvent;

use crate::config::actions::*;
use crate::config::keybindings::KeybindingsConfig;

/// Maps key events to configured actions and renders their key labels.
pub struct KeyResolver {
    pub keybindings: Arc<KeybindingsConfig>,
}

impl KeyResolver {
    pub const fn new(keybindings: Arc<KeybindingsConfig>) -> Self {
        Self { keybindings }
    }

    // Global actions
    pub fn matches_global(&self, event: &KeyEvent, action: GlobalAction) -> bool {
        let kb = &self.keybindings.global;
        match action {
            GlobalAction::Quit => kb.quit.matches(event),
            GlobalAction::Help => kb.help.matches(event),
            GlobalAction::Theme => kb.theme.matches(event),
            GlobalAction::Back => kb.back.matches(event),
        }
    }

    pub fn display_global(&self, action: GlobalAction) -> String {
        let kb = &self.keybindings.global;
        match action {
            GlobalAction::Quit => kb.quit.display(),
            GlobalAction::Help => kb.help.display(),
            GlobalAction::Theme => kb.theme.display(),
            GlobalAction::Back => kb.back.display(),
        }
    }

    // Navigation actions
    pub fn matches_nav(&self, event: &KeyEvent, action: NavAction) -> bool {
        let kb = &self.keybindings.navigation;
        match action {
            NavAction::Up => kb.up.matches(event),
            NavAction::Down => kb.down.matches(event),
            NavAction::PageUp => kb.page_up.matches(event),
            NavAction::PageDown => kb.page_down.matches(event),
            NavAction::Home => kb.home.matches(event),
            NavAction::End => kb.end.matches(event),
            NavAction::Select => kb.select.matches(event),
        }
    }

    pub fn display_nav(&self, action: NavAction) -> String {
        let kb = &self.keybindings.navigation;
        match action {
            NavAction::Up => kb.up.display(),
            NavAction::Down => kb.down.display(),
            NavAction::PageUp => kb.page_up.display(),
            NavAction::PageDown => kb.page_down.display(),
            NavAction::Home => kb.home.display(),
            NavAction::End => kb.end.display(),
            NavAction::Select => kb.select.display(),
        }
    }

    // Search actions
    pub fn matches_search(&self, event: &KeyEvent, action: SearchAction) -> bool {
        let kb = &self.keybindings.search;
        match action {
            SearchAction::Toggle => kb.toggle.matches(event),
            SearchAction::Exit => kb.exit.matches(event),
        }
    }

    pub fn display_search(&self, action: SearchAction) -> String {
        let kb = &self.keybindings.search;
        match action {
            SearchAction::Toggle => kb.toggle.display(),
            SearchAction::Exit => kb.exit.display(),
        }
    }

    // Scheduling actions
    pub fn matches_schedule(&self, event: &KeyEvent, action: ScheduleAction) -> bool {
        let kb = &self.keybindings.schedule;
        match action {
            ScheduleAction::PickDate => kb.pick_date.matches(event),
            ScheduleAction::Confirm => kb.confirm.matches(event),
        }
    }

    pub fn display_schedule(&self, action: ScheduleAction) -> String {
        let kb = &self.keybindings.schedule;
        match action {
            ScheduleAction::PickDate => kb.pick_date.display(),
            ScheduleAction::Confirm => kb.confirm.display(),
        }
    }

    // Date/time picker actions
    pub fn matches_picker(&self, event: &KeyEvent, action: PickerAction) -> bool {
        let kb = &self.keybindings.picker;
        match action {
            PickerAction::NextField => kb.next_field.matches(event),
            PickerAction::PrevField => kb.prev_field.matches(event),
            PickerAction::Increment => kb.increment.matches(event),
            PickerAction::Decrement => kb.decrement.matches(event),
            PickerAction::Confirm => kb.confirm.matches(event),
            PickerAction::Cancel => kb.cancel.matches(event),
        }
    }

    pub fn display_picker(&self, action: PickerAction) -> String {
        let kb = &self.keybindings.picker;
        match action {
            PickerAction::NextField => kb.next_field.display(),
            PickerAction::PrevField => kb.prev_field.display(),
            PickerAction::Increment => kb.increment.display(),
            PickerAction::Decrement => kb.decrement.display(),
            PickerAction::Confirm => kb.confirm.display(),
            PickerAction::Cancel => kb.cancel.display(),
        }
    }

    // Dialog actions
    pub fn matches_dialog(&self, event: &KeyEvent, action: DialogAction) -> bool {
        let kb = &self.keybindings.dialog;
        match action {
            DialogAction::Dismiss => kb.dismiss.matches(event),
        }
    }

    pub fn display_dialog(&self, action: DialogAction) -> String {
        let kb = &self.keybindings.dialog;
        match action {
            DialogAction::Dismiss => kb.dismiss.display(),
        }
    }
}

impl Default for KeyResolver {
    fn default() -> Self {
        Self::new(Arc::new(KeybindingsConfig::default()))
    }
}
