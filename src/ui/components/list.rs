use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::{List as RatatuiList, ListItem, ListState};

use crate::Theme;
use crate::config::{KeyResolver, NavAction};
use crate::ui::{Component, EventResult, Result};

const PAGE_STEP: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent<T> {
    Changed(T),
    Activated(T),
}

pub trait ListRow {
    fn render_row(&self, theme: &Theme) -> ListItem<'static>;
}

/// Selectable list with keyboard navigation.
pub struct List<T: ListRow + Clone> {
    items: Vec<T>,
    state: ListState,
    resolver: Arc<KeyResolver>,
}

impl<T: ListRow + Clone> List<T> {
    pub fn new(items: Vec<T>, resolver: Arc<KeyResolver>) -> Self {
        let mut state = ListState::default();
        if !items.is_empty() {
            state.select(Some(0));
        }
        Self {
            items,
            state,
            resolver,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn selected(&self) -> Option<&T> {
        self.state.selected().and_then(|i| self.items.get(i))
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;

        if self.items.is_empty() {
            self.state.select(None);
        } else if let Some(i) = self.state.selected() {
            if i >= self.items.len() {
                self.state.select(Some(self.items.len() - 1));
            }
        } else {
            self.state.select(Some(0));
        }
    }

    fn last_index(&self) -> usize {
        self.items.len().saturating_sub(1)
    }

    fn get_change_event(&self, before: Option<usize>) -> EventResult<ListEvent<T>> {
        if let Some(selected) = self.state.selected()
            && Some(selected) != before
            && let Some(item) = self.items.get(selected)
        {
            return ListEvent::Changed(item.clone()).into();
        }
        EventResult::Consumed
    }
}

impl<T: ListRow + Clone> Component for List<T> {
    type Output = ListEvent<T>;

    fn handle_key(&mut self, key: KeyEvent) -> Result<EventResult<Self::Output>> {
        if self.items.is_empty() {
            return Ok(EventResult::Ignored);
        }

        let before = self.state.selected();
        let next = match before {
            Some(i) if self.resolver.matches_nav(&key, NavAction::Down) => {
                Some(usize::min(i + 1, self.last_index()))
            }
            Some(i) if self.resolver.matches_nav(&key, NavAction::Up) => Some(i.saturating_sub(1)),
            Some(i) if self.resolver.matches_nav(&key, NavAction::PageDown) => {
                Some(usize::min(i + PAGE_STEP, self.last_index()))
            }
            Some(i) if self.resolver.matches_nav(&key, NavAction::PageUp) => {
                Some(i.saturating_sub(PAGE_STEP))
            }
            _ if self.resolver.matches_nav(&key, NavAction::Home) => Some(0),
            _ if self.resolver.matches_nav(&key, NavAction::End) => Some(self.last_index()),
            _ => None,
        };

        if let Some(index) = next {
            self.state.select(Some(index));
            return Ok(self.get_change_event(before));
        }

        if self.resolver.matches_nav(&key, NavAction::Select) {
            if let Some(item) = self.selected() {
                return Ok(ListEvent::Activated(item.clone()).into());
            }
            return Ok(EventResult::Ignored);
        }

        Ok(EventResult::Ignored)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let items: Vec<ListItem> = self.items.iter().map(|i| i.render_row(theme)).collect();

        let list = RatatuiList::new(items)
            .highlight_style(
                Style::default()
                    .bg(theme.selection_bg())
                    .fg(theme.lavender())
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, area, &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row(&'static str);

    impl ListRow for Row {
        fn render_row(&self, _theme: &Theme) -> ListItem<'static> {
            ListItem::new(self.0)
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn list() -> List<Row> {
        List::new(
            vec![Row("a"), Row("b"), Row("c")],
            Arc::new(KeyResolver::default()),
        )
    }

    #[test]
    fn test_navigation_emits_changes() {
        let mut list = list();
        assert_eq!(
            list.handle_key(key(KeyCode::Down)).unwrap(),
            EventResult::Event(ListEvent::Changed(Row("b")))
        );
        assert_eq!(
            list.handle_key(key(KeyCode::End)).unwrap(),
            EventResult::Event(ListEvent::Changed(Row("c")))
        );
        // Already at the bottom.
        assert_eq!(list.handle_key(key(KeyCode::Down)).unwrap(), EventResult::Consumed);
    }

    #[test]
    fn test_select_activates_current_row() {
        let mut list = list();
        list.handle_key(key(KeyCode::Char('j'))).unwrap();
        assert_eq!(
            list.handle_key(key(KeyCode::Enter)).unwrap(),
            EventResult::Event(ListEvent::Activated(Row("b")))
        );
    }

    #[test]
    fn test_set_items_clamps_selection() {
        let mut list = list();
        list.handle_key(key(KeyCode::End)).unwrap();
        list.set_items(vec![Row("x")]);
        assert_eq!(list.selected(), Some(&Row("x")));

        list.set_items(vec![]);
        assert!(list.selected().is_none());
        assert_eq!(list.handle_key(key(KeyCode::Enter)).unwrap(), EventResult::Ignored);
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let mut list = list();
        assert_eq!(list.handle_key(key(KeyCode::Char('x'))).unwrap(), EventResult::Ignored);
    }
}
