use std::sync::Arc;

use color_eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use tracing::{debug, error, info, warn};

use crate::Theme;
use crate::booking::{BookingReceiver, SelectionController, channel};
use crate::catalog::Catalog;
use crate::config::{self, GlobalAction, KeyResolver, PickerAction};
use crate::screen::{
    BookingsScreen, HomeScreen, ProfileScreen, Route, ScheduleScreen, ScreenMsg, ServicesScreen,
};
use crate::theme::{ThemeEvent, ThemeSelectorView};
use crate::tui::{Event, Tui};
use crate::ui::{
    Component, EventResult, HelpEvent, HelpOverlay, Keybinding, KeybindingSection, Screen,
    StatusBar, Toast, ToastManager,
};

const FRAME_RATE: f64 = 30.0;
const TICK_RATE: f64 = 4.0;

type ActiveScreen = Box<dyn Screen<Output = ScreenMsg>>;

/// Owns the active screen, the overlays and the pending booking hand-off.
pub struct App {
    route: Route,
    screen: ActiveScreen,
    catalog: Catalog,
    /// Receiving half of the last scheduling session's channel, consumed by
    /// the next bookings screen.
    pending: Option<BookingReceiver>,
    help: Option<HelpOverlay>,
    theme_selector: Option<ThemeSelectorView>,
    toasts: ToastManager,
    status_bar: StatusBar,
    theme: Theme,
    resolver: Arc<KeyResolver>,
    should_quit: bool,
    should_suspend: bool,
}

impl App {
    pub fn new(start: Route, catalog: Catalog, resolver: Arc<KeyResolver>, theme: Theme) -> Self {
        let mut app = Self {
            route: Route::Home,
            screen: Box::new(HomeScreen::new(resolver.clone())),
            catalog,
            pending: None,
            help: None,
            theme_selector: None,
            toasts: ToastManager::new(),
            status_bar: StatusBar::new(resolver.clone()),
            theme,
            resolver,
            should_quit: false,
            should_suspend: false,
        };
        app.navigate(start);
        app
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new(FRAME_RATE, TICK_RATE)?;
        tui.enter()?;

        while let Some(event) = tui.next_event().await {
            self.handle_event(&mut tui, event)?;

            if self.should_suspend {
                self.should_suspend = false;
                tui.suspend()?;
                tui.resume()?;
            }
            if self.should_quit {
                break;
            }
        }

        tui.exit()?;
        Ok(())
    }

    fn handle_event(&mut self, tui: &mut Tui, event: Event) -> Result<()> {
        match event {
            Event::Init => debug!("Terminal ready"),
            Event::Quit => self.should_quit = true,
            Event::Suspend => self.should_suspend = true,
            Event::Error(message) => {
                error!("Terminal error: {}", message);
                self.toasts.show(Toast::warning(message));
            }
            Event::Tick => {
                self.screen.handle_tick();
                self.toasts.handle_tick();
            }
            Event::Render => {
                tui.draw(|frame| self.render(frame))?;
            }
            Event::Resize(width, height) => {
                tui.resize(Rect::new(0, 0, width, height))?;
                tui.draw(|frame| self.render(frame))?;
            }
            Event::Key(key) => self.handle_key(key)?,
        }
        Ok(())
    }

    /// Overlays see keys first, then the screen, then the global bindings.
    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if let Some(selector) = &mut self.theme_selector {
            match selector.handle_key(key)? {
                EventResult::Event(ThemeEvent::Selected(info)) => {
                    self.theme_selector = None;
                    self.apply_theme(info.name, info.theme);
                }
                EventResult::Event(ThemeEvent::Cancelled) => self.theme_selector = None,
                EventResult::Consumed | EventResult::Ignored => {}
            }
            return Ok(());
        }

        if let Some(help) = &mut self.help {
            if let EventResult::Event(HelpEvent::Close) = help.handle_key(key)? {
                self.help = None;
            }
            return Ok(());
        }

        match self.screen.handle_key(key)? {
            EventResult::Event(msg) => {
                self.handle_message(msg);
                return Ok(());
            }
            EventResult::Consumed => return Ok(()),
            EventResult::Ignored => {}
        }

        let r = &self.resolver;
        if r.matches_global(&key, GlobalAction::Quit) {
            self.should_quit = true;
        } else if r.matches_global(&key, GlobalAction::Help) {
            self.help = Some(HelpOverlay::new(self.help_sections(), self.resolver.clone()));
        } else if r.matches_global(&key, GlobalAction::Theme) {
            self.theme_selector = Some(ThemeSelectorView::new(self.resolver.clone()));
        } else if r.matches_global(&key, GlobalAction::Back) && self.route != Route::Home {
            self.navigate(Route::Home);
        }
        Ok(())
    }

    fn handle_message(&mut self, msg: ScreenMsg) {
        match msg {
            ScreenMsg::Navigate(route) => self.navigate(route),
            ScreenMsg::Booked(appointment) => {
                self.toasts
                    .show(Toast::success(format!("Agendado: {appointment}")));
                self.navigate(Route::Bookings);
            }
        }
    }

    fn navigate(&mut self, route: Route) {
        info!("Navigating to {:?}", route);
        let resolver = self.resolver.clone();
        self.screen = match route {
            Route::Home => Box::new(HomeScreen::new(resolver)),
            Route::Schedule => {
                // Every visit is a new session with its own channel.
                let (outbox, inbox) = channel();
                self.pending = Some(inbox);
                let controller = SelectionController::new(self.catalog, outbox);
                Box::new(ScheduleScreen::new(controller, resolver))
            }
            Route::Bookings => {
                let bookings = self.pending.take().map(BookingReceiver::receive);
                Box::new(BookingsScreen::new(bookings, resolver))
            }
            Route::Services => Box::new(ServicesScreen::new(self.catalog, resolver)),
            Route::Profile => Box::new(ProfileScreen::new()),
        };
        self.route = route;
    }

    fn apply_theme(&mut self, name: &str, theme: Theme) {
        info!("Switching theme to {}", name);
        self.theme = theme;
        match config::save_theme(name) {
            Ok(()) => self.toasts.show(Toast::success(format!("Tema: {name}"))),
            Err(err) => {
                warn!("Failed to save theme: {}", err);
                self.toasts
                    .show(Toast::warning("Não foi possível salvar o tema"));
            }
        }
    }

    fn help_sections(&self) -> Vec<KeybindingSection> {
        let mut sections = vec![KeybindingSection::new(
            self.route.title(),
            self.screen.keybindings(),
        )];

        if self.route == Route::Schedule {
            let r = &self.resolver;
            sections.push(KeybindingSection::new(
                "Data e Hora",
                vec![
                    Keybinding::new(
                        format!(
                            "{}/{}",
                            r.display_picker(PickerAction::PrevField),
                            r.display_picker(PickerAction::NextField)
                        ),
                        "Trocar campo",
                    ),
                    Keybinding::new(r.display_picker(PickerAction::Increment), "Avançar"),
                    Keybinding::new(r.display_picker(PickerAction::Decrement), "Recuar"),
                    Keybinding::new(r.display_picker(PickerAction::Confirm), "Confirmar"),
                    Keybinding::new(r.display_picker(PickerAction::Cancel), "Cancelar"),
                ],
            ));
        }

        sections.push(KeybindingSection::new(
            "Global",
            self.status_bar.global_keybindings(),
        ));
        sections
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.base())),
            area,
        );

        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(StatusBar::HEIGHT)])
                .areas(area);

        self.screen.render(frame, main_area, &self.theme);
        self.status_bar.render(
            frame,
            status_area,
            &self.theme,
            &self.screen.breadcrumbs(),
            &self.screen.keybindings(),
        );
        self.toasts.render(frame, main_area, &self.theme);

        if let Some(help) = &mut self.help {
            help.render(frame, area, &self.theme);
        }
        if let Some(selector) = &mut self.theme_selector {
            selector.render(frame, area, &self.theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::booking::EMPTY_NOTICE;

    fn app(start: Route) -> App {
        App::new(
            start,
            Catalog::standard(),
            Arc::new(KeyResolver::default()),
            Theme::default(),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_confirmed_booking_reaches_the_listing_once() {
        let mut app = app(Route::Home);

        // Home -> Schedule, pick "Barba", confirm.
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route, Route::Schedule);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('c'));

        assert_eq!(app.route, Route::Bookings);
        assert!(app.pending.is_none());
        let text = screen_text(&mut app);
        assert!(text.contains("Agendamento #1"));
        assert!(text.contains("Tipo de Corte: Barba"));
        assert!(!text.contains("Agendamento #2"));

        // Coming back later shows an empty list, not the old booking.
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.route, Route::Home);
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.route, Route::Bookings);
        let text = screen_text(&mut app);
        assert!(text.contains(EMPTY_NOTICE));
        assert!(!text.contains("Agendamento #1"));
    }

    #[test]
    fn test_abandoned_session_leaves_nothing_to_list() {
        let mut app = app(Route::Schedule);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.route, Route::Home);

        app.navigate(Route::Bookings);
        assert!(screen_text(&mut app).contains(EMPTY_NOTICE));
    }

    #[test]
    fn test_validation_error_keeps_the_session() {
        let mut app = app(Route::Schedule);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.route, Route::Schedule);
        assert!(screen_text(&mut app).contains("Por favor, selecione um serviço"));

        // Esc dismisses the dialog instead of leaving the screen.
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.route, Route::Schedule);
        assert!(!screen_text(&mut app).contains("Por favor, selecione um serviço"));
    }

    #[test]
    fn test_overlays_take_keys_before_global_bindings() {
        let mut app = app(Route::Profile);

        press(&mut app, KeyCode::Char('?'));
        assert!(app.help.is_some());
        assert!(screen_text(&mut app).contains("Global"));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.help.is_none());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('t'));
        assert!(app.theme_selector.is_some());
        press(&mut app, KeyCode::Esc);
        assert!(app.theme_selector.is_none());
        assert_eq!(app.route, Route::Profile);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_back_on_home_stays_home() {
        let mut app = app(Route::Home);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.route, Route::Home);
        assert!(!app.should_quit);
    }
}
