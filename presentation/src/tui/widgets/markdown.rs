//! Markdown to ratatui lines
//!
//! Message text is CommonMark. Inline emphasis becomes span modifiers;
//! headings, lists, quotes, rules and code blocks become their own lines.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Render `source` as lines, each starting with `indent`
pub fn render_markdown(source: &str, indent: &'static str, base: Style) -> Vec<Line<'static>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut renderer = MarkdownRenderer::new(indent, base);
    for event in Parser::new_ext(source, options) {
        renderer.process_event(event);
    }
    renderer.finish()
}

struct MarkdownRenderer {
    indent: &'static str,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    style_stack: Vec<Style>,
    /// Next number for ordered lists, `None` for bullets
    list_stack: Vec<Option<u64>>,
    quote_depth: usize,
    in_code_block: bool,
}

impl MarkdownRenderer {
    fn new(indent: &'static str, base: Style) -> Self {
        Self {
            indent,
            lines: Vec::new(),
            current: Vec::new(),
            style_stack: vec![base],
            list_stack: Vec::new(),
            quote_depth: 0,
            in_code_block: false,
        }
    }

    fn style(&self) -> Style {
        self.style_stack.last().copied().unwrap_or_default()
    }

    fn push_style(&mut self, modify: impl FnOnce(Style) -> Style) {
        let style = modify(self.style());
        self.style_stack.push(style);
    }

    fn pop_style(&mut self) {
        if self.style_stack.len() > 1 {
            self.style_stack.pop();
        }
    }

    fn process_event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.push_text(&text),
            Event::Code(code) => {
                let style = self.style().fg(Color::Yellow);
                self.current.push(Span::styled(code.to_string(), style));
            }
            Event::SoftBreak => self.current.push(Span::styled(" ", self.style())),
            Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.block_gap();
                self.current
                    .push(Span::styled("───", Style::default().fg(Color::DarkGray)));
                self.flush_line();
            }
            Event::TaskListMarker(checked) => {
                let marker = if checked { "[x] " } else { "[ ] " };
                self.current.push(Span::styled(marker, self.style()));
            }
            Event::Html(html) | Event::InlineHtml(html) => self.push_text(&html),
            _ => {}
        }
    }

    fn start_tag(&mut self, tag: Tag) {
        match tag {
            // Paragraphs inside list items stay on the marker line
            Tag::Paragraph if !self.list_stack.is_empty() => {}
            Tag::Paragraph => self.block_gap(),
            Tag::Heading { level, .. } => {
                self.block_gap();
                self.push_style(|s| {
                    let s = s.add_modifier(Modifier::BOLD);
                    if level == HeadingLevel::H1 {
                        s.add_modifier(Modifier::UNDERLINED)
                    } else {
                        s
                    }
                });
            }
            Tag::CodeBlock(_) => {
                self.block_gap();
                self.in_code_block = true;
            }
            Tag::BlockQuote(_) => {
                self.block_gap();
                self.quote_depth += 1;
                self.push_style(|s| s.add_modifier(Modifier::ITALIC));
            }
            Tag::List(start) => {
                if self.list_stack.is_empty() {
                    self.block_gap();
                } else {
                    self.flush_line();
                }
                self.list_stack.push(start);
            }
            Tag::Item => {
                self.flush_line();
                let depth = self.list_stack.len().saturating_sub(1);
                let marker = match self.list_stack.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{}. ", n);
                        *n += 1;
                        marker
                    }
                    _ => "• ".to_string(),
                };
                self.current
                    .push(Span::raw(format!("{}{}", "  ".repeat(depth), marker)));
            }
            Tag::Emphasis => self.push_style(|s| s.add_modifier(Modifier::ITALIC)),
            Tag::Strong => self.push_style(|s| s.add_modifier(Modifier::BOLD)),
            Tag::Strikethrough => self.push_style(|s| s.add_modifier(Modifier::CROSSED_OUT)),
            Tag::Link { .. } => {
                self.push_style(|s| s.fg(Color::Blue).add_modifier(Modifier::UNDERLINED))
            }
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph | TagEnd::Item => self.flush_line(),
            TagEnd::Heading(_) => {
                self.flush_line();
                self.pop_style();
            }
            TagEnd::CodeBlock => self.in_code_block = false,
            TagEnd::BlockQuote(_) => {
                self.flush_line();
                self.quote_depth = self.quote_depth.saturating_sub(1);
                self.pop_style();
            }
            TagEnd::List(_) => {
                self.flush_line();
                self.list_stack.pop();
            }
            TagEnd::Emphasis | TagEnd::Strong | TagEnd::Strikethrough | TagEnd::Link => {
                self.pop_style()
            }
            _ => {}
        }
    }

    fn push_text(&mut self, text: &str) {
        if self.in_code_block {
            let style = Style::default().fg(Color::Yellow);
            for line in text.lines() {
                self.current.push(Span::styled(format!("  {}", line), style));
                self.push_line();
            }
            return;
        }
        self.current.push(Span::styled(text.to_string(), self.style()));
    }

    /// Blank line between top-level blocks
    fn block_gap(&mut self) {
        self.flush_line();
        if self.list_stack.is_empty()
            && self
                .lines
                .last()
                .is_some_and(|line| line.width() > self.indent.len())
        {
            self.push_line();
        }
    }

    fn flush_line(&mut self) {
        if !self.current.is_empty() {
            self.push_line();
        }
    }

    fn push_line(&mut self) {
        let mut spans = Vec::with_capacity(self.current.len() + 2);
        spans.push(Span::raw(self.indent));
        if self.quote_depth > 0 {
            spans.push(Span::styled(
                "│ ".repeat(self.quote_depth),
                Style::default().fg(Color::DarkGray),
            ));
        }
        spans.append(&mut self.current);
        self.lines.push(Line::from(spans));
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush_line();
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_strong_and_code_become_styles() {
        let lines = render_markdown("Use **bold** and `code`", "  ", Style::default());

        assert_eq!(plain(&lines), vec!["  Use bold and code"]);
        let bold = lines[0].spans.iter().find(|s| s.content == "bold").unwrap();
        assert!(bold.style.add_modifier.contains(Modifier::BOLD));
        let code = lines[0].spans.iter().find(|s| s.content == "code").unwrap();
        assert_eq!(code.style.fg, Some(Color::Yellow));
    }

    #[test]
    fn test_paragraphs_are_separated_by_a_blank_line() {
        let lines = render_markdown("first\n\nsecond", "", Style::default());
        assert_eq!(plain(&lines), vec!["first", "", "second"]);
    }

    #[test]
    fn test_lists_get_markers() {
        let lines = render_markdown("- one\n- two\n\n1. a\n2. b", "", Style::default());
        assert_eq!(plain(&lines), vec!["• one", "• two", "", "1. a", "2. b"]);
    }

    #[test]
    fn test_loose_list_items_keep_text_on_marker_line() {
        let lines = render_markdown("- one\n\n- two", "", Style::default());
        assert_eq!(plain(&lines), vec!["• one", "• two"]);
    }

    #[test]
    fn test_code_block_keeps_lines_without_fences() {
        let lines = render_markdown("```rust\nfn main() {}\nlet x = 1;\n```", "", Style::default());
        assert_eq!(plain(&lines), vec!["  fn main() {}", "  let x = 1;"]);
    }

    #[test]
    fn test_heading_is_bold_without_hashes() {
        let lines = render_markdown("## Title\nbody", "", Style::default());
        let text = plain(&lines);
        assert_eq!(text[0], "Title");
        assert!(lines[0].spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(text.last().map(String::as_str), Some("body"));
    }
}
