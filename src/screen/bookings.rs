use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::Theme;
use crate::booking::{BookingList, EMPTY_NOTICE, Listing, ListingRow};
use crate::config::{KeyResolver, NavAction};
use crate::screen::{Route, ScreenMsg};
use crate::ui::{EventResult, Keybinding, Result, Screen};

/// Lines taken by one booking card, borders included.
const CARD_HEIGHT: u16 = 5;

/// Shows the bookings handed over by the last confirmed session.
pub struct BookingsScreen {
    listing: Listing,
    offset: usize,
    resolver: Arc<KeyResolver>,
}

impl BookingsScreen {
    pub fn new(bookings: Option<BookingList>, resolver: Arc<KeyResolver>) -> Self {
        Self {
            listing: Listing::new(bookings),
            offset: 0,
            resolver,
        }
    }

    fn card(row: &ListingRow<'_>, theme: &Theme) -> Paragraph<'static> {
        let label = Style::default().fg(theme.subtext0());
        let value = Style::default().fg(theme.text());
        let field = |name: &'static str, text: &str| {
            Line::from(vec![
                Span::styled(name, label),
                Span::styled(text.to_string(), value),
            ])
        };

        let appointment = row.appointment;
        Paragraph::new(vec![
            field("Tipo de Corte: ", appointment.service_name()),
            field("Data: ", appointment.formatted_date()),
            field("Horário: ", appointment.formatted_time()),
        ])
        .block(
            Block::default()
                .title(format!(" {} ", row.title()))
                .title_style(
                    Style::default()
                        .fg(theme.peach())
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme.border())),
        )
    }
}

impl Screen for BookingsScreen {
    type Output = ScreenMsg;

    fn handle_key(&mut self, key: KeyEvent) -> Result<EventResult<Self::Output>> {
        let last = self.listing.rows().len().saturating_sub(1);
        if self.resolver.matches_nav(&key, NavAction::Down) {
            self.offset = usize::min(self.offset + 1, last);
            return Ok(EventResult::Consumed);
        }
        if self.resolver.matches_nav(&key, NavAction::Up) {
            self.offset = self.offset.saturating_sub(1);
            return Ok(EventResult::Consumed);
        }
        Ok(EventResult::Ignored)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let [title_area, body_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

        let title = Paragraph::new(Span::styled(
            Route::Bookings.title(),
            Style::default()
                .fg(theme.lavender())
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(title, title_area);

        if self.listing.is_empty() {
            let notice = Paragraph::new(Span::styled(
                EMPTY_NOTICE,
                Style::default().fg(theme.overlay1()),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(notice, body_area);
            return;
        }

        let mut y = body_area.y;
        for row in self.listing.rows().iter().skip(self.offset) {
            if y + CARD_HEIGHT > body_area.bottom() {
                break;
            }
            let card_area = Rect::new(body_area.x, y, body_area.width, CARD_HEIGHT);
            frame.render_widget(Self::card(row, theme), card_area);
            y += CARD_HEIGHT;
        }
    }

    fn breadcrumbs(&self) -> Vec<String> {
        Route::Bookings.breadcrumbs()
    }

    fn keybindings(&self) -> Vec<Keybinding> {
        vec![Keybinding::new(
            format!(
                "{}/{}",
                self.resolver.display_nav(NavAction::Up),
                self.resolver.display_nav(NavAction::Down)
            ),
            "Rolar",
        )]
    }
}
