use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, ListItem, Paragraph};

use crate::Theme;
use crate::config::{KeyResolver, NavAction};
use crate::screen::{Route, ScreenMsg};
use crate::ui::{Component, EventResult, Keybinding, List, ListEvent, ListRow, Result, Screen};

#[derive(Debug, Clone, PartialEq, Eq)]
struct MenuEntry {
    icon: &'static str,
    route: Route,
}

const MENU: [MenuEntry; 4] = [
    MenuEntry {
        icon: "✂",
        route: Route::Schedule,
    },
    MenuEntry {
        icon: "☰",
        route: Route::Services,
    },
    MenuEntry {
        icon: "☺",
        route: Route::Profile,
    },
    MenuEntry {
        icon: "▣",
        route: Route::Bookings,
    },
];

impl ListRow for MenuEntry {
    fn render_row(&self, theme: &Theme) -> ListItem<'static> {
        ListItem::new(Line::from(vec![
            Span::styled(format!("{} ", self.icon), Style::default().fg(theme.peach())),
            Span::styled(self.route.title(), Style::default().fg(theme.text())),
        ]))
    }
}

/// Landing screen with the main menu.
pub struct HomeScreen {
    menu: List<MenuEntry>,
    resolver: Arc<KeyResolver>,
}

impl HomeScreen {
    pub fn new(resolver: Arc<KeyResolver>) -> Self {
        Self {
            menu: List::new(MENU.to_vec(), resolver.clone()),
            resolver,
        }
    }
}

impl Screen for HomeScreen {
    type Output = ScreenMsg;

    fn handle_key(&mut self, key: KeyEvent) -> Result<EventResult<Self::Output>> {
        Ok(match self.menu.handle_key(key)? {
            EventResult::Event(ListEvent::Activated(entry)) => {
                ScreenMsg::Navigate(entry.route).into()
            }
            EventResult::Event(ListEvent::Changed(_)) | EventResult::Consumed => {
                EventResult::Consumed
            }
            EventResult::Ignored => EventResult::Ignored,
        })
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let [header_area, menu_area] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);

        let header = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Barbearia",
                Style::default()
                    .fg(theme.mauve())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Seja bem-vindo!",
                Style::default().fg(theme.subtext0()),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(header, header_area);

        let menu_area = menu_area.centered(Constraint::Length(36), Constraint::Length(6));
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border()));
        let inner = block.inner(menu_area);
        frame.render_widget(block, menu_area);
        self.menu.render(frame, inner, theme);
    }

    fn breadcrumbs(&self) -> Vec<String> {
        Route::Home.breadcrumbs()
    }

    fn keybindings(&self) -> Vec<Keybinding> {
        vec![Keybinding::hint(
            self.resolver.display_nav(NavAction::Select),
            "Abrir",
        )]
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    fn press(screen: &mut HomeScreen, code: KeyCode) -> EventResult<ScreenMsg> {
        screen
            .handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    #[test]
    fn test_menu_navigates_to_each_route() {
        let mut home = HomeScreen::new(Arc::new(KeyResolver::default()));

        assert_eq!(
            press(&mut home, KeyCode::Enter),
            EventResult::Event(ScreenMsg::Navigate(Route::Schedule))
        );

        press(&mut home, KeyCode::End);
        assert_eq!(
            press(&mut home, KeyCode::Enter),
            EventResult::Event(ScreenMsg::Navigate(Route::Bookings))
        );
    }

    #[test]
    fn test_back_is_left_to_the_app() {
        let mut home = HomeScreen::new(Arc::new(KeyResolver::default()));
        assert_eq!(press(&mut home, KeyCode::Esc), EventResult::Ignored);
    }
}
