use std::sync::Arc;

use chrono::{Datelike, Months, NaiveDateTime, TimeDelta, Timelike};
use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::Theme;
use crate::config::{KeyResolver, PickerAction};
use crate::ui::{Component, EventResult, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    Confirmed(NaiveDateTime),
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Day,
    Month,
    Year,
    Hour,
    Minute,
}

impl Field {
    const ALL: [Self; 5] = [Self::Day, Self::Month, Self::Year, Self::Hour, Self::Minute];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Day => "Dia",
            Self::Month => "Mês",
            Self::Year => "Ano",
            Self::Hour => "Hora",
            Self::Minute => "Min",
        }
    }
}

/// Modal date and time editor.
///
/// Edits one field at a time; stepping a field carries over into the larger
/// units the way a calendar does (31/01 + 1 day is 01/02). Month and year
/// steps clamp the day to the end of a shorter month.
pub struct DateTimePicker {
    moment: NaiveDateTime,
    focused: Field,
    resolver: Arc<KeyResolver>,
}

impl DateTimePicker {
    pub const fn new(initial: NaiveDateTime, resolver: Arc<KeyResolver>) -> Self {
        Self {
            moment: initial,
            focused: Field::Day,
            resolver,
        }
    }

    pub const fn moment(&self) -> NaiveDateTime {
        self.moment
    }

    fn step(&mut self, forward: bool) {
        let m = self.moment;
        let stepped = match self.focused {
            Field::Day => Self::shift(m, TimeDelta::days(1), forward),
            Field::Hour => Self::shift(m, TimeDelta::hours(1), forward),
            Field::Minute => Self::shift(m, TimeDelta::minutes(1), forward),
            Field::Month => Self::shift_months(m, 1, forward),
            Field::Year => Self::shift_months(m, 12, forward),
        };
        if let Some(moment) = stepped {
            self.moment = moment;
        }
    }

    fn shift(moment: NaiveDateTime, delta: TimeDelta, forward: bool) -> Option<NaiveDateTime> {
        if forward {
            moment.checked_add_signed(delta)
        } else {
            moment.checked_sub_signed(delta)
        }
    }

    fn shift_months(moment: NaiveDateTime, months: u32, forward: bool) -> Option<NaiveDateTime> {
        if forward {
            moment.checked_add_months(Months::new(months))
        } else {
            moment.checked_sub_months(Months::new(months))
        }
    }

    fn field_value(&self, field: Field) -> String {
        let m = self.moment();
        match field {
            Field::Day => format!("{:02}", m.day()),
            Field::Month => format!("{:02}", m.month()),
            Field::Year => format!("{:04}", m.year()),
            Field::Hour => format!("{:02}", m.hour()),
            Field::Minute => format!("{:02}", m.minute()),
        }
    }
}

impl Component for DateTimePicker {
    type Output = PickerEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Result<EventResult<Self::Output>> {
        let r = &self.resolver;
        if r.matches_picker(&key, PickerAction::Confirm) {
            return Ok(PickerEvent::Confirmed(self.moment).into());
        }
        if r.matches_picker(&key, PickerAction::Cancel) {
            return Ok(PickerEvent::Cancelled.into());
        }
        if r.matches_picker(&key, PickerAction::NextField) {
            self.focused = self.focused.next();
        } else if r.matches_picker(&key, PickerAction::PrevField) {
            self.focused = self.focused.prev();
        } else if r.matches_picker(&key, PickerAction::Increment) {
            self.step(true);
        } else if r.matches_picker(&key, PickerAction::Decrement) {
            self.step(false);
        }
        // Modal: every other key is swallowed.
        Ok(EventResult::Consumed)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let popup_area = area.centered(Constraint::Length(44), Constraint::Length(9));
        frame.render_widget(Clear, popup_area);

        let label_style = Style::default().fg(theme.overlay1());
        let value_style = Style::default().fg(theme.text());
        let focused_style = Style::default()
            .fg(theme.base())
            .bg(theme.accent())
            .add_modifier(Modifier::BOLD);
        let separator_style = Style::default().fg(theme.surface2());

        let mut labels = Vec::new();
        let mut values = Vec::new();
        for (i, field) in Field::ALL.iter().enumerate() {
            if i > 0 {
                let sep = match field {
                    Field::Month | Field::Year => "/",
                    Field::Hour => "  ",
                    _ => ":",
                };
                labels.push(Span::raw(" ".repeat(sep.len())));
                values.push(Span::styled(sep, separator_style));
            }
            let value = self.field_value(*field);
            let width = value.len();
            labels.push(Span::styled(format!("{:^width$}", field.label()), label_style));
            let style = if *field == self.focused {
                focused_style
            } else {
                value_style
            };
            values.push(Span::styled(value, style));
        }

        let hint = format!(
            "{} campo  {} ajustar  {} ok  {} cancelar",
            self.resolver.display_picker(PickerAction::NextField),
            self.resolver.display_picker(PickerAction::Increment),
            self.resolver.display_picker(PickerAction::Confirm),
            self.resolver.display_picker(PickerAction::Cancel),
        );

        let lines = vec![
            Line::from(""),
            Line::from(labels),
            Line::from(values),
            Line::from(""),
            Line::from(Span::styled(hint, Style::default().fg(theme.overlay0()))),
        ];

        let block = Block::default()
            .title(" Data e Hora ")
            .title_style(
                Style::default()
                    .fg(theme.mauve())
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border_focused()))
            .style(Style::default().bg(theme.base()));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, popup_area);
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    fn press(picker: &mut DateTimePicker, code: KeyCode) -> EventResult<PickerEvent> {
        picker
            .handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    fn picker(initial: NaiveDateTime) -> DateTimePicker {
        DateTimePicker::new(initial, Arc::new(KeyResolver::default()))
    }

    #[test]
    fn test_day_carries_into_month() {
        let mut p = picker(at(2024, 1, 31, 10, 0));
        press(&mut p, KeyCode::Up);
        assert_eq!(p.moment(), at(2024, 2, 1, 10, 0));
    }

    #[test]
    fn test_month_step_clamps_day() {
        let mut p = picker(at(2024, 1, 31, 10, 0));
        press(&mut p, KeyCode::Right);
        press(&mut p, KeyCode::Up);
        assert_eq!(p.moment(), at(2024, 2, 29, 10, 0));
    }

    #[test]
    fn test_field_focus_wraps() {
        let mut p = picker(at(2024, 5, 1, 14, 5));
        press(&mut p, KeyCode::Left);
        // Wrapped around to minutes.
        press(&mut p, KeyCode::Down);
        assert_eq!(p.moment(), at(2024, 5, 1, 14, 4));
    }

    #[test]
    fn test_build_a_specific_moment() {
        let mut p = picker(at(2024, 4, 30, 13, 3));
        press(&mut p, KeyCode::Up); // 01/05
        press(&mut p, KeyCode::Tab);
        press(&mut p, KeyCode::Tab);
        press(&mut p, KeyCode::Tab); // hour
        press(&mut p, KeyCode::Up);
        press(&mut p, KeyCode::Tab); // minute
        press(&mut p, KeyCode::Up);
        press(&mut p, KeyCode::Up);

        assert_eq!(
            press(&mut p, KeyCode::Enter),
            EventResult::Event(PickerEvent::Confirmed(at(2024, 5, 1, 14, 5)))
        );
    }

    #[test]
    fn test_cancel() {
        let mut p = picker(at(2024, 5, 1, 14, 5));
        press(&mut p, KeyCode::Up);
        assert_eq!(
            press(&mut p, KeyCode::Esc),
            EventResult::Event(PickerEvent::Cancelled)
        );
    }

    #[test]
    fn test_other_keys_are_swallowed() {
        let mut p = picker(at(2024, 5, 1, 14, 5));
        assert_eq!(press(&mut p, KeyCode::Char('q')), EventResult::Consumed);
        assert_eq!(p.moment(), at(2024, 5, 1, 14, 5));
    }
}
