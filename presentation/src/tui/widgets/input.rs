//! Input widget: multi-line text field with an optional send button
//!
//! Text is split on `\n` and rendered as multiple `Line`s inside a
//! `Paragraph`. The prompt prefix is shown only on the first line;
//! continuation lines get a "  " indent.

use super::icon_glyph;
use crate::page::view::{ButtonView, TextInputView};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const PROMPT: &str = "> ";
const CONTINUATION: &str = "  ";
const BUTTON_WIDTH: u16 = 5;

pub struct InputWidget<'a> {
    input: &'a TextInputView,
    send_button: Option<&'a ButtonView>,
}

impl<'a> InputWidget<'a> {
    pub fn new(input: &'a TextInputView) -> Self {
        Self {
            input,
            send_button: None,
        }
    }

    pub fn with_send_button(mut self, button: &'a ButtonView) -> Self {
        self.send_button = Some(button);
        self
    }

    /// Rows needed for the current text, between 1 line and `input.height`
    /// lines, plus borders
    pub fn desired_height(input: &TextInputView) -> u16 {
        let text_lines = input.text.split('\n').count() as u16;
        text_lines.clamp(1, input.height.max(1)) + 2
    }
}

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (field_area, button_area) = match self.send_button {
            Some(_) => {
                let [field, button] =
                    Layout::horizontal([Constraint::Fill(1), Constraint::Length(BUTTON_WIDTH)])
                        .spacing(1)
                        .areas(area);
                (field, Some(button))
            }
            None => (area, None),
        };

        render_field(self.input, field_area, buf);

        if let (Some(button), Some(button_area)) = (self.send_button, button_area) {
            render_button(button, button_area, buf);
        }
    }
}

fn render_field(input: &TextInputView, area: Rect, buf: &mut Buffer) {
    let color = if input.is_sensitive {
        Color::Green
    } else {
        Color::DarkGray
    };

    let prompt_span = Span::styled(
        PROMPT,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", input.label))
        .style(Style::default().fg(color));

    // Inner area height (excluding borders), used for scroll
    let inner_height = area.height.saturating_sub(2) as usize;

    let lines = if input.is_sensitive {
        build_active_lines(&input.text, input.cursor, color, &prompt_span)
    } else {
        build_inactive_lines(&input.text, color, &prompt_span)
    };

    // Scroll so the cursor line is visible
    let scroll_offset = if lines.len() > inner_height {
        let cursor_line = find_cursor_line(&input.text, input.cursor);
        (cursor_line + 1).saturating_sub(inner_height)
    } else {
        0
    };

    Paragraph::new(lines)
        .block(block)
        .scroll((scroll_offset as u16, 0))
        .render(area, buf);
}

fn render_button(button: &ButtonView, area: Rect, buf: &mut Buffer) {
    let color = if button.is_sensitive {
        Color::Green
    } else {
        Color::DarkGray
    };

    // Vertically center the button in the row
    let height = area.height.min(3);
    let button_area = Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    };

    Paragraph::new(Line::from(icon_glyph(&button.icon)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(color)),
        )
        .render(button_area, buf);
}

/// Split text into lines, preserving a trailing newline as an empty line
fn raw_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        vec![""]
    } else {
        text.split('\n').collect()
    }
}

fn prefix<'a>(index: usize, color: Color, prompt_span: &Span<'a>) -> Span<'a> {
    if index == 0 {
        prompt_span.clone()
    } else {
        Span::styled(
            CONTINUATION,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    }
}

/// Build lines for an editable field with cursor rendering
fn build_active_lines<'a>(
    text: &str,
    cursor_pos: usize,
    color: Color,
    prompt_span: &Span<'a>,
) -> Vec<Line<'a>> {
    let cursor_style = Style::default().fg(Color::Black).bg(color);

    let raw = raw_lines(text);
    let mut lines = Vec::with_capacity(raw.len());
    let mut byte_offset = 0;

    for (i, line_text) in raw.iter().enumerate() {
        let line_start = byte_offset;
        let line_end = line_start + line_text.len();

        let mut spans: Vec<Span<'a>> = vec![prefix(i, color, prompt_span)];

        let cursor_on_line = cursor_pos >= line_start && cursor_pos <= line_end;
        if cursor_on_line {
            let local_cursor = cursor_pos - line_start;
            let before = &line_text[..local_cursor];
            let after = &line_text[local_cursor..];

            spans.push(Span::raw(before.to_string()));

            match after.chars().next() {
                // Cursor at end of line, block cursor on a space
                None => spans.push(Span::styled(" ", cursor_style)),
                Some(ch) => {
                    let ch_len = ch.len_utf8();
                    spans.push(Span::styled(after[..ch_len].to_string(), cursor_style));
                    if ch_len < after.len() {
                        spans.push(Span::raw(after[ch_len..].to_string()));
                    }
                }
            }
        } else {
            spans.push(Span::raw(line_text.to_string()));
        }

        lines.push(Line::from(spans));

        // line content + '\n' separator
        byte_offset = line_end + 1;
    }

    lines
}

/// Build lines for a disabled field, no cursor
fn build_inactive_lines<'a>(text: &str, color: Color, prompt_span: &Span<'a>) -> Vec<Line<'a>> {
    let inactive_style = Style::default().fg(color);

    raw_lines(text)
        .iter()
        .enumerate()
        .map(|(i, line_text)| {
            Line::from(vec![
                prefix(i, color, prompt_span),
                Span::styled(line_text.to_string(), inactive_style),
            ])
        })
        .collect()
}

/// Find which line (0-indexed) the cursor is on
fn find_cursor_line(text: &str, cursor_pos: usize) -> usize {
    text[..cursor_pos.min(text.len())]
        .chars()
        .filter(|&c| c == '\n')
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::view::Icon;

    fn input(text: &str, sensitive: bool) -> TextInputView {
        TextInputView {
            label: "Ask something...".to_string(),
            text: text.to_string(),
            cursor: text.len(),
            height: 4,
            is_sensitive: sensitive,
        }
    }

    #[test]
    fn test_desired_height_grows_and_caps() {
        assert_eq!(InputWidget::desired_height(&input("", true)), 3);
        assert_eq!(InputWidget::desired_height(&input("a\nb", true)), 4);
        assert_eq!(InputWidget::desired_height(&input("1\n2\n3\n4\n5\n6", true)), 6);
    }

    #[test]
    fn test_active_lines_prefix_and_cursor() {
        let prompt = Span::raw(PROMPT);
        let lines = build_active_lines("ab\ncd", 5, Color::Green, &prompt);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[0].content, PROMPT);
        assert_eq!(lines[1].spans[0].content, CONTINUATION);
        // Cursor at end of the second line renders as a trailing space
        assert_eq!(lines[1].spans.last().map(|s| s.content.as_ref()), Some(" "));
    }

    #[test]
    fn test_find_cursor_line() {
        assert_eq!(find_cursor_line("a\nb\nc", 0), 0);
        assert_eq!(find_cursor_line("a\nb\nc", 4), 2);
        assert_eq!(find_cursor_line("a", 10), 0);
    }

    #[test]
    fn test_disabled_row_renders_label_and_button() {
        let field = input("waiting", false);
        let button = ButtonView {
            icon: Icon::Send,
            is_sensitive: false,
        };
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);

        InputWidget::new(&field)
            .with_send_button(&button)
            .render(area, &mut buf);

        let first_row: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(first_row.contains("Ask something..."));
        let middle_row: String = (0..area.width)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect();
        assert!(middle_row.contains("waiting"));
        assert!(middle_row.contains(icon_glyph(&Icon::Send)));
    }
}
