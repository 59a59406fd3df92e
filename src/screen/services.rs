use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, ListItem, Paragraph};

use crate::Theme;
use crate::catalog::{Catalog, Service};
use crate::config::{KeyResolver, NavAction, SearchAction};
use crate::screen::{Route, ScreenMsg};
use crate::search::Matcher;
use crate::ui::{Component, EventResult, Keybinding, List, ListEvent, ListRow, Result, Screen};

#[derive(Debug, Clone, PartialEq, Eq)]
struct ServiceCard(Service);

impl ListRow for ServiceCard {
    fn render_row(&self, theme: &Theme) -> ListItem<'static> {
        let service = &self.0;
        ListItem::new(vec![
            Line::from(vec![
                Span::styled(
                    format!(" {} ", service.initial()),
                    Style::default()
                        .fg(theme.base())
                        .bg(theme.sky())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    service.name,
                    Style::default()
                        .fg(theme.text())
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format!("    {}", service.description),
                Style::default().fg(theme.subtext0()),
            )),
            Line::from(vec![
                Span::styled(
                    format!("    {}", service.duration),
                    Style::default().fg(theme.overlay1()),
                ),
                Span::styled("  ", Style::default()),
                Span::styled(
                    service.price,
                    Style::default()
                        .fg(theme.green())
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
        ])
    }
}

/// Catalog browser with an incremental fuzzy filter.
pub struct ServicesScreen {
    catalog: Catalog,
    cards: List<ServiceCard>,
    matcher: Matcher,
    searching: bool,
    query: String,
    resolver: Arc<KeyResolver>,
}

impl ServicesScreen {
    pub fn new(catalog: Catalog, resolver: Arc<KeyResolver>) -> Self {
        let mut screen = Self {
            catalog,
            cards: List::new(Vec::new(), resolver.clone()),
            matcher: Matcher::new(),
            searching: false,
            query: String::new(),
            resolver,
        };
        screen.update_filter();
        screen
    }

    fn update_filter(&mut self) {
        let cards = self
            .matcher
            .rank(self.catalog.services(), &self.query, |s| {
                [s.name, s.description]
            })
            .into_iter()
            .map(|s| ServiceCard(*s))
            .collect();
        self.cards.set_items(cards);
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> EventResult<ScreenMsg> {
        if self.resolver.matches_search(&key, SearchAction::Exit) {
            self.searching = false;
            self.query.clear();
            self.update_filter();
            return EventResult::Consumed;
        }
        // Enter leaves search mode but keeps the filter.
        if self.resolver.matches_nav(&key, NavAction::Select) && key.code != KeyCode::Char(' ') {
            self.searching = false;
            return EventResult::Consumed;
        }

        match key.code {
            KeyCode::Backspace => {
                self.query.pop();
                self.update_filter();
            }
            KeyCode::Char(c) => {
                self.query.push(c);
                self.update_filter();
            }
            _ => {}
        }
        EventResult::Consumed
    }

    fn render_search(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let cursor = if self.searching { "▏" } else { "" };
        let line = Line::from(vec![
            Span::styled("/", Style::default().fg(theme.accent())),
            Span::styled(
                format!("{}{cursor}", self.query),
                Style::default().fg(theme.text()),
            ),
            Span::styled(
                format!("  ({} de {})", self.cards.items().len(), self.catalog.len()),
                Style::default().fg(theme.overlay0()),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(line).style(Style::default().bg(theme.mantle())),
            area,
        );
    }
}

impl Screen for ServicesScreen {
    type Output = ScreenMsg;

    fn handle_key(&mut self, key: KeyEvent) -> Result<EventResult<Self::Output>> {
        if self.searching {
            return Ok(self.handle_search_key(key));
        }

        if self.resolver.matches_search(&key, SearchAction::Toggle) {
            self.searching = true;
            return Ok(EventResult::Consumed);
        }
        // Esc first clears an active filter, then falls through to Back.
        if self.resolver.matches_search(&key, SearchAction::Exit) && !self.query.is_empty() {
            self.query.clear();
            self.update_filter();
            return Ok(EventResult::Consumed);
        }

        Ok(match self.cards.handle_key(key)? {
            EventResult::Event(ListEvent::Activated(_)) => {
                ScreenMsg::Navigate(Route::Schedule).into()
            }
            EventResult::Event(ListEvent::Changed(_)) | EventResult::Consumed => {
                EventResult::Consumed
            }
            EventResult::Ignored => EventResult::Ignored,
        })
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let has_search_bar = self.searching || !self.query.is_empty();
        let [header_area, list_area, search_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(u16::from(has_search_bar)),
        ])
        .areas(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                Route::Services.title(),
                Style::default()
                    .fg(theme.lavender())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Escolha o serviço que melhor atende suas necessidades",
                Style::default().fg(theme.subtext0()),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(header, header_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if self.searching {
                theme.border_focused()
            } else {
                theme.border()
            }));
        let inner = block.inner(list_area);
        frame.render_widget(block, list_area);

        if self.cards.items().is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "Nenhum serviço encontrado",
                    Style::default().fg(theme.overlay1()),
                ))
                .alignment(Alignment::Center),
                inner,
            );
        } else {
            self.cards.render(frame, inner, theme);
        }

        if has_search_bar {
            self.render_search(frame, search_area, theme);
        }
    }

    fn breadcrumbs(&self) -> Vec<String> {
        Route::Services.breadcrumbs()
    }

    fn keybindings(&self) -> Vec<Keybinding> {
        vec![
            Keybinding::hint(self.resolver.display_search(SearchAction::Toggle), "Buscar"),
            Keybinding::hint(self.resolver.display_nav(NavAction::Select), "Agendar"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn screen() -> ServicesScreen {
        ServicesScreen::new(Catalog::standard(), Arc::new(KeyResolver::default()))
    }

    fn press(screen: &mut ServicesScreen, code: KeyCode) -> EventResult<ScreenMsg> {
        screen
            .handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    fn type_text(screen: &mut ServicesScreen, text: &str) {
        for c in text.chars() {
            press(screen, KeyCode::Char(c));
        }
    }

    fn names(screen: &ServicesScreen) -> Vec<&'static str> {
        screen.cards.items().iter().map(|card| card.0.name).collect()
    }

    #[test]
    fn test_lists_whole_catalog_in_order() {
        let screen = screen();
        assert_eq!(
            names(&screen),
            vec![
                "Corte de Cabelo",
                "Barba",
                "Corte + Barba",
                "Hidratação",
                "Pigmentação"
            ]
        );
    }

    #[test]
    fn test_search_filters_incrementally() {
        let mut screen = screen();
        press(&mut screen, KeyCode::Char('/'));
        type_text(&mut screen, "navalha");
        assert_eq!(names(&screen), vec!["Barba"]);

        // Quit key is plain text while searching.
        assert_eq!(press(&mut screen, KeyCode::Char('q')), EventResult::Consumed);
        assert_eq!(screen.query, "navalhaq");
        press(&mut screen, KeyCode::Backspace);
        type_text(&mut screen, "x");
        assert!(names(&screen).is_empty());
        press(&mut screen, KeyCode::Backspace);
        assert_eq!(names(&screen), vec!["Barba"]);

        // Enter keeps the filter, Esc clears it before leaving the screen.
        press(&mut screen, KeyCode::Enter);
        assert!(!screen.searching);
        assert_eq!(names(&screen).len(), 1);
        assert_eq!(press(&mut screen, KeyCode::Esc), EventResult::Consumed);
        assert_eq!(names(&screen).len(), 5);
        assert_eq!(press(&mut screen, KeyCode::Esc), EventResult::Ignored);
    }

    #[test]
    fn test_activating_a_card_opens_scheduling() {
        let mut screen = screen();
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            EventResult::Event(ScreenMsg::Navigate(Route::Schedule))
        );
    }
}
