//! Conversation widget: message bubbles + generating placeholder

use super::icon_glyph;
use super::markdown::render_markdown;
use crate::page::view::{BubbleColor, GENERATING_LABEL, MessageBubble, MessageItem};
use castle_domain::Role;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget, Wrap},
};

pub struct ConversationWidget<'a> {
    items: &'a [MessageItem],
    scroll_offset: usize,
}

impl<'a> ConversationWidget<'a> {
    /// `scroll_offset` counts lines up from the bottom; 0 follows the newest turn
    pub fn new(items: &'a [MessageItem], scroll_offset: usize) -> Self {
        Self {
            items,
            scroll_offset,
        }
    }

    /// Largest useful `scroll_offset` for `area`: the number of lines
    /// hidden above the viewport when scrolled to the bottom
    pub fn max_scroll(&self, area: Rect) -> usize {
        self.paragraph()
            .line_count(area.width)
            .saturating_sub(usize::from(area.height))
    }

    fn paragraph(&self) -> Paragraph<'a> {
        // line_count() wraps exactly like rendering does
        Paragraph::new(self.format_items()).wrap(Wrap { trim: false })
    }

    fn format_items(&self) -> Text<'a> {
        let mut lines: Vec<Line> = Vec::new();

        for item in self.items {
            match item {
                MessageItem::Bubble(bubble) => push_bubble(&mut lines, bubble),
                MessageItem::Generating => {
                    lines.push(
                        Line::from(vec![
                            Span::styled("◌ ", Style::default().fg(Color::Yellow)),
                            Span::styled(GENERATING_LABEL, Style::default().fg(Color::Gray)),
                        ])
                        .centered(),
                    );
                }
            }
        }

        Text::from(lines)
    }
}

fn push_bubble<'a>(lines: &mut Vec<Line<'a>>, bubble: &'a MessageBubble) {
    let label = match bubble.role {
        Role::User => "You",
        Role::Assistant => "Assistant",
    };
    let (label_color, text_style) = match bubble.color {
        BubbleColor::Neutral => (Color::Cyan, Style::default().fg(Color::White)),
        BubbleColor::Background => (Color::Green, Style::default()),
    };

    lines.push(Line::from(vec![
        Span::styled(
            format!("{} ", icon_glyph(&bubble.icon)),
            Style::default().fg(label_color),
        ),
        Span::styled(
            label,
            Style::default()
                .fg(label_color)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    lines.extend(render_markdown(&bubble.text, "  ", text_style));
    lines.push(Line::from(""));
}

impl<'a> Widget for ConversationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let max_scroll = self.max_scroll(area);

        // scroll_offset=0 means "show bottom"
        let offset = self.scroll_offset.min(max_scroll);
        let scroll = u16::try_from(max_scroll - offset).unwrap_or(u16::MAX);

        self.paragraph().scroll((scroll, 0)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use castle_domain::ChatMessage;
    use ratatui::buffer::Buffer;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_bubbles_and_generating() {
        let items = vec![
            MessageItem::Bubble(MessageBubble::from(&ChatMessage::user("Hello"))),
            MessageItem::Generating,
        ];
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);

        ConversationWidget::new(&items, 0).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("You"));
        assert!(text.contains("Hello"));
        assert!(text.contains(GENERATING_LABEL));
    }

    #[test]
    fn test_follows_newest_turn_when_overflowing() {
        let items: Vec<MessageItem> = (0..10)
            .map(|i| {
                MessageItem::Bubble(MessageBubble::from(&ChatMessage::assistant(format!(
                    "answer {}",
                    i
                ))))
            })
            .collect();
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);

        ConversationWidget::new(&items, 0).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("answer 9"));
        assert!(!text.contains("answer 0"));
    }

    fn answers(count: usize) -> Vec<MessageItem> {
        (0..count)
            .map(|i| {
                MessageItem::Bubble(MessageBubble::from(&ChatMessage::assistant(format!(
                    "answer {}",
                    i
                ))))
            })
            .collect()
    }

    #[test]
    fn test_offset_past_the_top_stays_at_the_top() {
        let items = answers(40);
        let area = Rect::new(0, 0, 30, 4);
        let widget = ConversationWidget::new(&items, 0);
        // 40 bubbles of three lines each
        assert_eq!(widget.max_scroll(area), 40 * 3 - 4);

        for offset in [1_000, 65_536, usize::MAX] {
            let mut buf = Buffer::empty(area);
            ConversationWidget::new(&items, offset).render(area, &mut buf);

            let text = buffer_text(&buf);
            assert!(text.contains("answer 0"), "offset {} lost the top", offset);
            assert!(!text.contains("answer 39"));
        }
    }

    #[test]
    fn test_markdown_is_rendered_in_bubbles() {
        let items = vec![MessageItem::Bubble(MessageBubble::from(
            &ChatMessage::assistant("Say **x** now"),
        ))];
        let area = Rect::new(0, 0, 30, 4);
        let mut buf = Buffer::empty(area);

        ConversationWidget::new(&items, 0).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Say x now"));
        assert!(!text.contains('*'));

        let (x, y) = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .find(|&(x, y)| buf[(x, y)].symbol() == "x")
            .unwrap();
        assert!(buf[(x, y)].modifier.contains(Modifier::BOLD));
        assert!(!buf[(x - 2, y)].modifier.contains(Modifier::BOLD));
    }
}
