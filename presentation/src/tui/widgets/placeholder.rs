//! Empty-chat placeholder: greeting and starter question cards

use super::icon_glyph;
use crate::page::view::EmptyChatView;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

/// Renders the title and suggestion cards; the input is drawn separately
pub struct PlaceholderWidget<'a> {
    view: &'a EmptyChatView,
}

impl<'a> PlaceholderWidget<'a> {
    pub fn new(view: &'a EmptyChatView) -> Self {
        Self { view }
    }

    /// Rows taken by the title and the cards
    pub fn height(view: &EmptyChatView) -> u16 {
        // title + blank line + one row per card
        2 + view.suggestions.len() as u16
    }
}

impl<'a> Widget for PlaceholderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled(
                self.view.title.as_str(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::from(""),
        ];

        for card in &self.view.suggestions {
            let (marker, style) = if card.selected {
                (
                    "›",
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (" ", Style::default().fg(Color::Gray))
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", marker), Style::default().fg(Color::Cyan)),
                Span::styled(format!(" {} {} ", icon_glyph(&card.icon), card.text), style),
            ]));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
