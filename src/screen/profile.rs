use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::Theme;
use crate::screen::{Route, ScreenMsg};
use crate::ui::{EventResult, Result, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Confirmed,
    Completed,
}

impl Status {
    const fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmado",
            Self::Completed => "Concluído",
        }
    }

    const fn color(self, theme: &Theme) -> Color {
        match self {
            Self::Confirmed => theme.green(),
            Self::Completed => theme.blue(),
        }
    }
}

struct PastBooking {
    date: &'static str,
    time: &'static str,
    service: &'static str,
    status: Status,
}

struct Profile {
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    history: &'static [PastBooking],
}

const PROFILE: Profile = Profile {
    name: "Alanis",
    email: "Alanis@email.com",
    phone: "(11) 99999-9999",
    history: &[
        PastBooking {
            date: "25/04/2023",
            time: "14:00",
            service: "Corte de Cabelo",
            status: Status::Confirmed,
        },
        PastBooking {
            date: "20/04/2023",
            time: "15:30",
            service: "Barba",
            status: Status::Completed,
        },
    ],
};

/// Read-only user card. There is no account backend, so the data is fixed.
pub struct ProfileScreen {
    profile: &'static Profile,
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileScreen {
    pub const fn new() -> Self {
        Self { profile: &PROFILE }
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

    fn render_header(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let initial = self.profile.name.chars().next().unwrap_or('?');
        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("  {initial}  "),
                Style::default()
                    .fg(theme.base())
                    .bg(theme.lavender())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.profile.name,
                Style::default()
                    .fg(theme.text())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.profile.email,
                Style::default().fg(theme.subtext0()),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(header, area);
    }

    fn render_info(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let label = Style::default().fg(theme.overlay1());
        let value = Style::default().fg(theme.text());
        let lines: Vec<Line> = [
            ("Nome", self.profile.name),
            ("Email", self.profile.email),
            ("Telefone", self.profile.phone),
        ]
        .into_iter()
        .map(|(name, text)| {
            Line::from(vec![
                Span::styled(format!("{name:<10}"), label),
                Span::styled(text, value),
            ])
        })
        .collect();

        frame.render_widget(
            Paragraph::new(lines).block(Self::section(" Dados ", theme)),
            area,
        );
    }

    fn render_history(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let mut lines = Vec::new();
        for booking in self.profile.history {
            lines.push(Line::from(vec![
                Span::styled(
                    booking.date,
                    Style::default()
                        .fg(theme.text())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    booking.status.label(),
                    Style::default().fg(booking.status.color(theme)),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("Horário: {}", booking.time),
                Style::default().fg(theme.subtext0()),
            )));
            lines.push(Line::from(Span::styled(
                format!("Serviço: {}", booking.service),
                Style::default().fg(theme.subtext0()),
            )));
            lines.push(Line::from(""));
        }

        frame.render_widget(
            Paragraph::new(lines).block(Self::section(" Meus Agendamentos ", theme)),
            area,
        );
    }
}

impl Screen for ProfileScreen {
    type Output = ScreenMsg;

    fn handle_key(&mut self, _key: KeyEvent) -> Result<EventResult<Self::Output>> {
        Ok(EventResult::Ignored)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let [header_area, info_area, history_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .areas(area);

        self.render_header(frame, header_area, theme);
        self.render_info(frame, info_area, theme);
        self.render_history(frame, history_area, theme);
    }

    fn breadcrumbs(&self) -> Vec<String> {
        Route::Profile.breadcrumbs()
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    #[test]
    fn test_renders_user_and_history() {
        let mut screen = ProfileScreen::new();
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(50, 22)).unwrap();
        terminal
            .draw(|frame| screen.render(frame, frame.area(), &theme))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let lines: Vec<String> = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect()
            })
            .collect();
        let has = |needle: &str| lines.iter().any(|l| l.contains(needle));

        assert!(has("Alanis@email.com"));
        assert!(has("(11) 99999-9999"));
        assert!(has("25/04/2023  Confirmado"));
        assert!(has("Serviço: Barba"));

        let row = lines
            .iter()
            .position(|l| l.contains("20/04/2023"))
            .unwrap();
        let x = lines[row].find("Concluído").unwrap();
        let col = u16::try_from(lines[row][..x].chars().count()).unwrap();
        assert_eq!(buffer[(col, u16::try_from(row).unwrap())].fg, theme.blue());
    }
}
