use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::Theme;
use crate::ui::Component;

const LIFETIME: Duration = Duration::from_secs(3);
const MAX_VISIBLE: usize = 3;
const HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Toast {
    message: String,
    toast_type: ToastType,
    created_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            message: message.into(),
            toast_type,
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Warning)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= LIFETIME
    }
}

/// Short-lived notifications stacked in the bottom-right corner.
#[derive(Default)]
pub struct ToastManager {
    toasts: VecDeque<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, toast: Toast) {
        tracing::debug!("Showing toast: {}", toast.message());
        self.toasts.push_back(toast);
        while self.toasts.len() > MAX_VISIBLE {
            self.toasts.pop_front();
        }
    }

    fn expire(&mut self, now: Instant) {
        self.toasts.retain(|t| !t.is_expired(now));
    }
}

impl Component for ToastManager {
    type Output = ();

    fn handle_tick(&mut self) {
        self.expire(Instant::now());
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let width = 50u16.min(area.width.saturating_sub(4));

        // Newest at the bottom, older ones stacked upward.
        for (i, toast) in self.toasts.iter().rev().enumerate() {
            let offset = u16::try_from(i).unwrap_or(u16::MAX).saturating_mul(HEIGHT + 1);
            let Some(y) = area
                .bottom()
                .checked_sub(HEIGHT + 1)
                .and_then(|y| y.checked_sub(offset))
                .filter(|y| *y >= area.y)
            else {
                break;
            };
            let x = area.right().saturating_sub(width + 2);
            let toast_area = Rect::new(x, y, width, HEIGHT);

            let (color, icon) = match toast.toast_type {
                ToastType::Success => (theme.green(), "✓"),
                ToastType::Warning => (theme.yellow(), "!"),
            };

            frame.render_widget(Clear, toast_area);

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(theme.surface0()));

            let paragraph = Paragraph::new(format!("{icon} {}", toast.message))
                .block(block)
                .style(
                    Style::default()
                        .fg(theme.text())
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center);

            frame.render_widget(paragraph, toast_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_newest_toasts_are_kept() {
        let mut toasts = ToastManager::new();
        for i in 0..5 {
            toasts.show(Toast::success(format!("t{i}")));
        }
        let kept: Vec<&str> = toasts.toasts.iter().map(Toast::message).collect();
        assert_eq!(kept, vec!["t2", "t3", "t4"]);
    }

    #[test]
    fn test_toasts_expire() {
        let mut toasts = ToastManager::new();
        toasts.show(Toast::success("Agendamento confirmado"));

        toasts.expire(Instant::now());
        assert_eq!(toasts.toasts.len(), 1);

        toasts.expire(Instant::now() + LIFETIME);
        assert!(toasts.toasts.is_empty());
    }
}
