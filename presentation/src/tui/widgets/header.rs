//! Header widget: icons pinned to the top corners

use super::icon_glyph;
use crate::page::view::HeaderView;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    header: &'a HeaderView,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(header: &'a HeaderView) -> Self {
        Self { header }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let icon_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        Paragraph::new(Line::from(Span::styled(
            format!(" {}", icon_glyph(&self.header.left)),
            icon_style,
        )))
        .render(area, buf);

        Paragraph::new(Line::from(Span::styled(
            "castle-chat",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center)
        .render(area, buf);

        Paragraph::new(Line::from(Span::styled(
            format!("{} ", icon_glyph(&self.header.right)),
            icon_style.fg(Color::Green),
        )))
        .alignment(Alignment::Right)
        .render(area, buf);
    }
}
