//! TUI rendering: draws a page [`View`] into a frame

use super::widgets::{
    ChatLayout, PlaceholderLayout, conversation::ConversationWidget, header::HeaderWidget,
    input::InputWidget, placeholder::PlaceholderWidget,
    status_bar::{StatusBarWidget, StatusKind},
};
use crate::config::PageConfig;
use crate::page::{Refresh, View};
use ratatui::{Frame, Terminal, backend::Backend};
use tracing::warn;

/// Host state drawn around the page's own view
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a PageConfig,
    pub scroll_offset: usize,
    pub notice: Option<&'a str>,
}

/// Render the whole page
///
/// Returns the largest scroll offset the message list can use at this
/// size (0 on the placeholder).
pub fn render(frame: &mut Frame, view: &View, ctx: &RenderContext) -> usize {
    let area = frame.area();

    match view {
        View::EmptyChat(empty) => {
            let layout = PlaceholderLayout::compute(area, empty, ctx.config);
            frame.render_widget(PlaceholderWidget::new(empty), layout.cards);
            frame.render_widget(InputWidget::new(&empty.input), layout.input);
            frame.render_widget(
                StatusBarWidget::new(StatusKind::Placeholder, ctx.notice),
                layout.status_bar,
            );
            0
        }
        View::Chat(chat) => {
            let layout = ChatLayout::compute(area, &chat.input_row, chat.column, ctx.config);
            let kind = if chat.input_row.input.is_sensitive {
                StatusKind::Idle
            } else {
                StatusKind::Loading
            };

            let conversation = ConversationWidget::new(&chat.messages, ctx.scroll_offset);
            let max_scroll = conversation.max_scroll(layout.messages);

            frame.render_widget(HeaderWidget::new(&chat.header), layout.header);
            frame.render_widget(conversation, layout.messages);
            frame.render_widget(
                InputWidget::new(&chat.input_row.input).with_send_button(&chat.input_row.send_button),
                layout.input_row,
            );
            frame.render_widget(StatusBarWidget::new(kind, ctx.notice), layout.status_bar);
            max_scroll
        }
    }
}

/// [`Refresh`] that draws straight to the terminal
pub struct TerminalRefresh<'a, B: Backend> {
    terminal: &'a mut Terminal<B>,
    config: &'a PageConfig,
}

impl<'a, B: Backend> TerminalRefresh<'a, B> {
    pub fn new(terminal: &'a mut Terminal<B>, config: &'a PageConfig) -> Self {
        Self { terminal, config }
    }
}

impl<B: Backend> Refresh for TerminalRefresh<'_, B> {
    fn force_refresh(&mut self, view: &View) {
        let ctx = RenderContext {
            config: self.config,
            scroll_offset: 0,
            notice: None,
        };
        if let Err(e) = self.terminal.draw(|frame| {
            render(frame, view, &ctx);
        }) {
            warn!("Failed to draw forced refresh: {}", e);
        }
    }
}
