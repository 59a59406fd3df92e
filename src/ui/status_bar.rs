use std::sync::Arc;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::Theme;
use crate::config::{GlobalAction, KeyResolver, NavAction};
use crate::ui::Keybinding;

/// Barber pole shown on the right of the status bar.
const LOGO: &[&str] = &[
    r"  .--.           ",
    r"  |\\|  barbearia",
    r"  |\\|           ",
    r"  |\\|  desde    ",
    r"  '--'   2024    ",
];

pub struct StatusBar {
    resolver: Arc<KeyResolver>,
}

impl StatusBar {
    pub const HEIGHT: u16 = 7;

    pub const fn new(resolver: Arc<KeyResolver>) -> Self {
        Self { resolver }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        breadcrumbs: &[String],
        local_keybindings: &[Keybinding],
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border()));

        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        // Status (left), keybindings (middle), logo (right)
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(32),
                Constraint::Min(20),
                Constraint::Length(19),
            ])
            .split(inner_area);

        Self::render_location(frame, chunks[0], theme, breadcrumbs);
        self.render_keybindings(frame, chunks[1], theme, local_keybindings);
        Self::render_logo(frame, chunks[2], theme);
    }

    fn render_location(frame: &mut Frame, area: Rect, theme: &Theme, breadcrumbs: &[String]) {
        let w = area.width as usize;
        let mut lines = vec![
            Line::from(Span::styled(
                "Barbearia",
                Style::default()
                    .fg(theme.lavender())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Seja bem-vindo!",
                Style::default().fg(theme.subtext0()),
            )),
            Line::from(""),
        ];

        let path = breadcrumbs.join(" › ");
        lines.push(Line::from(Span::styled(
            truncate_str(&path, w),
            Style::default().fg(theme.teal()),
        )));

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_keybindings(
        &self,
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        local_keybindings: &[Keybinding],
    ) {
        let global_keybindings = self.global_keybindings();

        // Local hints first, then global ones
        let hints: Vec<&Keybinding> = local_keybindings
            .iter()
            .filter(|kb| kb.hint)
            .chain(global_keybindings.iter().filter(|kb| kb.hint))
            .collect();

        if hints.is_empty() {
            return;
        }

        // Align the separator into a straight column regardless of key length.
        let max_key_w = hints.iter().map(|kb| kb.key.chars().count()).max().unwrap_or(1);
        let max_desc_w = hints
            .iter()
            .map(|kb| kb.description.chars().count())
            .max()
            .unwrap_or(1);
        // key(right-aligned) + " │ " (3) + desc + gap(2)
        let col_width = u16::try_from(max_key_w + 3 + max_desc_w + 2).unwrap_or(u16::MAX);
        let num_cols = (area.width / col_width).max(1) as usize;
        let num_rows = (area.height as usize).max(1);

        // Fill column by column
        let mut columns: Vec<Vec<Line>> = vec![Vec::new(); num_cols];
        for (i, kb) in hints.iter().enumerate() {
            let col_idx = i / num_rows;
            if col_idx >= num_cols {
                break;
            }
            columns[col_idx].push(Line::from(vec![
                Span::styled(
                    format!("{:>width$}", kb.key, width = max_key_w),
                    Style::default().fg(theme.accent()),
                ),
                Span::styled(" │ ", Style::default().fg(theme.surface2())),
                Span::styled(kb.description.clone(), Style::default().fg(theme.subtext0())),
            ]));
        }

        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(col_width); num_cols])
            .split(area);

        for (lines, col_area) in columns.into_iter().zip(col_areas.iter()) {
            frame.render_widget(Paragraph::new(lines), *col_area);
        }
    }

    fn render_logo(frame: &mut Frame, area: Rect, theme: &Theme) {
        let logo_lines: Vec<Line> = LOGO
            .iter()
            .map(|line| {
                Line::from(Span::styled(
                    *line,
                    Style::default()
                        .fg(theme.red())
                        .add_modifier(Modifier::BOLD),
                ))
            })
            .collect();

        frame.render_widget(Paragraph::new(logo_lines), area);
    }

    /// Global keybindings, also listed in the help overlay.
    pub fn global_keybindings(&self) -> Vec<Keybinding> {
        vec![
            Keybinding::hint(self.resolver.display_global(GlobalAction::Help), "Ajuda"),
            Keybinding::hint(self.resolver.display_global(GlobalAction::Back), "Voltar"),
            Keybinding::new(self.resolver.display_global(GlobalAction::Theme), "Tema"),
            Keybinding::hint(self.resolver.display_global(GlobalAction::Quit), "Sair"),
            Keybinding::new(self.resolver.display_nav(NavAction::Select), "Selecionar"),
            Keybinding::new(
                format!(
                    "{}/{}",
                    self.resolver.display_nav(NavAction::Up),
                    self.resolver.display_nav(NavAction::Down)
                ),
                "Navegar",
            ),
        ]
    }
}

/// Truncate a string to fit within a given width, adding "..." if truncated.
fn truncate_str(s: &str, max_width: usize) -> String {
    let len = s.chars().count();
    if len <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let kept: String = s.chars().take(max_width - 3).collect();
        format!("{kept}...")
    } else {
        s.chars().take(max_width).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_is_char_aware() {
        assert_eq!(truncate_str("Agendar Horário", 40), "Agendar Horário");
        assert_eq!(truncate_str("Hidratação profunda", 10), "Hidrata...");
        assert_eq!(truncate_str("Início", 2), "In");
    }
}
