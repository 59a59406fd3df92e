use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, ListItem, Paragraph};
use tracing::warn;

use crate::Theme;
use crate::booking::{Phase, PickerResolution, SelectionController, format_moment};
use crate::catalog::Service;
use crate::config::{KeyResolver, NavAction, ScheduleAction};
use crate::screen::{Route, ScreenMsg};
use crate::ui::{
    Component, DateTimePicker, ErrorDialog, ErrorDialogEvent, EventResult, Keybinding, List,
    ListEvent, ListRow, PickerEvent, Result, Screen,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct ServiceRow {
    service: Service,
    chosen: bool,
}

impl ListRow for ServiceRow {
    fn render_row(&self, theme: &Theme) -> ListItem<'static> {
        let (marker, marker_style) = if self.chosen {
            ("● ", Style::default().fg(theme.green()))
        } else {
            ("○ ", Style::default().fg(theme.overlay0()))
        };
        ListItem::new(vec![
            Line::from(vec![
                Span::styled(marker, marker_style),
                Span::styled(
                    self.service.name,
                    Style::default()
                        .fg(theme.text())
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format!("  {} • {}", self.service.duration, self.service.price),
                Style::default().fg(theme.subtext0()),
            )),
        ])
    }
}

/// One scheduling session: pick a service, a moment, then confirm.
pub struct ScheduleScreen {
    controller: SelectionController,
    services: List<ServiceRow>,
    picker: Option<DateTimePicker>,
    error: Option<ErrorDialog>,
    resolver: Arc<KeyResolver>,
}

impl ScheduleScreen {
    pub fn new(controller: SelectionController, resolver: Arc<KeyResolver>) -> Self {
        let rows = Self::rows(&controller);
        Self {
            controller,
            services: List::new(rows, resolver.clone()),
            picker: None,
            error: None,
            resolver,
        }
    }

    fn rows(controller: &SelectionController) -> Vec<ServiceRow> {
        let chosen = controller.state().selected_service().map(|s| s.id);
        controller
            .catalog()
            .services()
            .iter()
            .map(|service| ServiceRow {
                service: *service,
                chosen: Some(service.id) == chosen,
            })
            .collect()
    }

    fn choose(&mut self, service: &Service) {
        self.controller.select_service(service);
        self.services.set_items(Self::rows(&self.controller));
    }

    fn open_picker(&mut self) {
        self.controller.open_picker();
        let state = self.controller.state();
        if state.picker_visible() {
            self.picker = Some(DateTimePicker::new(
                state.selected_moment(),
                self.resolver.clone(),
            ));
        }
    }

    fn close_picker(&mut self, resolution: PickerResolution) {
        self.controller.resolve_picker(resolution);
        self.picker = None;
    }

    fn confirm(&mut self) -> EventResult<ScreenMsg> {
        match self.controller.confirm() {
            Ok(appointment) => ScreenMsg::Booked(appointment).into(),
            Err(err) => {
                warn!("Booking rejected: {}", err);
                self.error = Some(ErrorDialog::new(err.to_string(), self.resolver.clone()));
                EventResult::Consumed
            }
        }
    }

    fn render_date(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let moment = format_moment(&self.controller.state().selected_moment());
        let key = self.resolver.display_schedule(ScheduleAction::PickDate);
        let line = Line::from(vec![
            Span::styled(moment, Style::default().fg(theme.text())),
            Span::styled(format!("   [{key}] alterar"), Style::default().fg(theme.overlay0())),
        ]);
        let block = Self::section(" Data e Hora ", theme);
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_confirm(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let ready = self.controller.phase() == Phase::ServiceChosen;
        let style = if ready {
            Style::default()
                .fg(theme.base())
                .bg(theme.green())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.overlay0()).bg(theme.surface0())
        };
        let key = self.resolver.display_schedule(ScheduleAction::Confirm);
        let button = Paragraph::new(format!("[{key}] Confirmar Agendamento"))
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(button, area);
    }

    fn section(title: &'static str, theme: &Theme) -> Block<'static> {
        Block::default()
            .title(title)
            .title_style(
                Style::default()
                    .fg(theme.mauve())
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border()))
    }
}

impl Screen for ScheduleScreen {
    type Output = ScreenMsg;

    fn handle_key(&mut self, key: KeyEvent) -> Result<EventResult<Self::Output>> {
        if let Some(dialog) = &mut self.error {
            if let EventResult::Event(ErrorDialogEvent::Dismissed) = dialog.handle_key(key)? {
                self.error = None;
            }
            return Ok(EventResult::Consumed);
        }

        if let Some(picker) = &mut self.picker {
            match picker.handle_key(key)? {
                EventResult::Event(PickerEvent::Confirmed(moment)) => {
                    self.close_picker(PickerResolution::Confirmed(moment));
                }
                EventResult::Event(PickerEvent::Cancelled) => {
                    self.close_picker(PickerResolution::Cancelled);
                }
                EventResult::Consumed | EventResult::Ignored => {}
            }
            return Ok(EventResult::Consumed);
        }

        if self.resolver.matches_schedule(&key, ScheduleAction::PickDate) {
            self.open_picker();
            return Ok(EventResult::Consumed);
        }
        if self.resolver.matches_schedule(&key, ScheduleAction::Confirm) {
            return Ok(self.confirm());
        }

        Ok(match self.services.handle_key(key)? {
            EventResult::Event(ListEvent::Activated(row)) => {
                if let Some(service) = self.controller.catalog().find(row.service.id) {
                    self.choose(service);
                }
                EventResult::Consumed
            }
            EventResult::Event(ListEvent::Changed(_)) | EventResult::Consumed => {
                EventResult::Consumed
            }
            EventResult::Ignored => EventResult::Ignored,
        })
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let [title_area, list_area, date_area, confirm_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(4),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(area);

        let title = Paragraph::new(Span::styled(
            "Agendar Serviço",
            Style::default()
                .fg(theme.lavender())
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(title, title_area);

        let block = Self::section(" Selecione o Serviço ", theme);
        let inner = block.inner(list_area);
        frame.render_widget(block, list_area);
        self.services.render(frame, inner, theme);

        self.render_date(frame, date_area, theme);
        self.render_confirm(frame, confirm_area, theme);

        if let Some(picker) = &mut self.picker {
            picker.render(frame, area, theme);
        }
        if let Some(dialog) = &mut self.error {
            dialog.render(frame, area, theme);
        }
    }

    fn breadcrumbs(&self) -> Vec<String> {
        Route::Schedule.breadcrumbs()
    }

    fn keybindings(&self) -> Vec<Keybinding> {
        vec![
            Keybinding::hint(self.resolver.display_nav(NavAction::Select), "Escolher"),
            Keybinding::hint(
                self.resolver.display_schedule(ScheduleAction::PickDate),
                "Data e hora",
            ),
            Keybinding::hint(
                self.resolver.display_schedule(ScheduleAction::Confirm),
                "Confirmar",
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;
    use crate::booking::{BookingReceiver, channel};
    use crate::catalog::Catalog;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, 30)
            .unwrap()
            .and_hms_opt(13, 3, 0)
            .unwrap()
    }

    fn screen_with(catalog: Catalog) -> (ScheduleScreen, BookingReceiver) {
        let (tx, rx) = channel();
        let controller = SelectionController::starting_at(catalog, tx, start());
        (
            ScheduleScreen::new(controller, Arc::new(KeyResolver::default())),
            rx,
        )
    }

    fn press(screen: &mut ScheduleScreen, code: KeyCode) -> EventResult<ScreenMsg> {
        screen
            .handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    fn press_all(screen: &mut ScheduleScreen, codes: &[KeyCode]) {
        for code in codes {
            press(screen, *code);
        }
    }

    #[test]
    fn test_confirm_without_service_opens_dialog() {
        let (mut screen, rx) = screen_with(Catalog::standard());

        assert_eq!(press(&mut screen, KeyCode::Char('c')), EventResult::Consumed);
        let dialog = screen.error.as_ref().unwrap();
        assert_eq!(dialog.message(), "Por favor, selecione um serviço");
        assert_eq!(screen.controller.phase(), Phase::Idle);

        // The dialog is modal until dismissed.
        assert_eq!(press(&mut screen, KeyCode::Char('d')), EventResult::Consumed);
        assert!(screen.picker.is_none());
        press(&mut screen, KeyCode::Enter);
        assert!(screen.error.is_none());

        drop(screen);
        assert!(rx.receive().is_empty());
    }

    #[test]
    fn test_full_booking_flow() {
        let (mut screen, rx) = screen_with(Catalog::standard());

        // Second row is "Barba".
        press_all(&mut screen, &[KeyCode::Down, KeyCode::Enter]);
        assert_eq!(
            screen.controller.state().selected_service().map(|s| s.name),
            Some("Barba")
        );
        assert!(screen.services.items()[1].chosen);

        // 30/04/2024 13:03 -> 01/05/2024 14:05
        press(&mut screen, KeyCode::Char('d'));
        assert!(screen.controller.state().picker_visible());
        press_all(
            &mut screen,
            &[
                KeyCode::Up,
                KeyCode::Tab,
                KeyCode::Tab,
                KeyCode::Tab,
                KeyCode::Up,
                KeyCode::Tab,
                KeyCode::Up,
                KeyCode::Up,
                KeyCode::Enter,
            ],
        );
        assert!(!screen.controller.state().picker_visible());
        assert!(screen.picker.is_none());

        let EventResult::Event(ScreenMsg::Booked(appointment)) =
            press(&mut screen, KeyCode::Char('c'))
        else {
            panic!("expected a booking");
        };
        assert_eq!(appointment.service_name(), "Barba");
        assert_eq!(appointment.formatted_date(), "01/05/2024");
        assert_eq!(appointment.formatted_time(), "14:05");

        let bookings = rx.receive();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings.iter().next(), Some(&appointment));
    }

    #[test]
    fn test_cancelled_picker_keeps_moment() {
        let (mut screen, _rx) = screen_with(Catalog::standard());
        press_all(&mut screen, &[KeyCode::Char('d'), KeyCode::Up, KeyCode::Esc]);
        assert_eq!(screen.controller.state().selected_moment(), start());
        assert!(!screen.controller.state().picker_visible());
    }

    #[test]
    fn test_esc_without_overlay_goes_up_to_the_app() {
        let (mut screen, _rx) = screen_with(Catalog::standard());
        assert_eq!(press(&mut screen, KeyCode::Esc), EventResult::Ignored);
    }

    #[test]
    fn test_empty_catalog_still_reports_missing_service() {
        let (mut screen, _rx) = screen_with(Catalog::new(&[]));
        assert_eq!(press(&mut screen, KeyCode::Enter), EventResult::Ignored);
        press(&mut screen, KeyCode::Char('c'));
        assert!(screen.error.is_some());
    }

    #[test]
    fn test_renders_selection_and_date() {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        let (mut screen, _rx) = screen_with(Catalog::standard());
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal
            .draw(|frame| screen.render(frame, frame.area(), &theme))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Corte de Cabelo"));
        assert!(text.contains("20 min • R$ 30,00"));
        assert!(text.contains("30/04/2024, 13:03"));
        assert!(text.contains("Confirmar Agendamento"));
    }
}
