//! Status bar widget: error notice or key hints

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// What the bottom line should say
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Empty conversation, suggestions are selectable
    Placeholder,
    /// Chat idle, input accepted
    Idle,
    /// Waiting for the response
    Loading,
}

pub struct StatusBarWidget<'a> {
    kind: StatusKind,
    notice: Option<&'a str>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(kind: StatusKind, notice: Option<&'a str>) -> Self {
        Self { kind, notice }
    }

    fn hint(&self) -> &'static str {
        match self.kind {
            StatusKind::Placeholder => {
                "Enter send · ↑/↓ choose suggestion · Alt+Enter newline · Esc quit"
            }
            StatusKind::Idle => "Enter send · Alt+Enter newline · PgUp/PgDn scroll · Esc quit",
            StatusKind::Loading => "Waiting for response · Esc cancel · Ctrl+C quit",
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = match self.notice {
            Some(notice) => Line::from(vec![
                Span::styled(" ✗ ", Style::default().fg(Color::Red)),
                Span::styled(notice, Style::default().fg(Color::Red)),
            ]),
            None => Line::from(Span::styled(
                format!(" {}", self.hint()),
                Style::default().fg(Color::DarkGray),
            )),
        };

        Paragraph::new(line).render(area, buf);
    }
}
