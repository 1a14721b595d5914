//! TUI application: hosts a [`ChatPage`] in the terminal
//!
//! ```text
//! TuiApp loop
//!   ├─ draw page.build()
//!   ├─ crossterm EventStream ── keys edit the page / Enter confirms
//!   └─ tick_interval
//!
//! confirm (awaited in place)
//!   ├─ page.confirm(TerminalRefresh) ── forced redraw, then the API call
//!   └─ EventStream ── Esc abandons the call, Ctrl+C abandons and quits
//! ```

use super::action::{Action, KeyHandler};
use super::render::{RenderContext, TerminalRefresh, render};
use crate::page::ChatPage;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{info, warn};

/// Lines scrolled per PageUp/PageDown
const PAGE_SCROLL: usize = 10;

/// What the loop should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Confirm,
    Quit,
}

/// How a pending response ended from the host's point of view
enum ConfirmOutcome {
    Finished(Result<(), castle_application::RespondError>),
    Abandoned { quit: bool },
}

/// Main TUI application
pub struct TuiApp {
    page: ChatPage,
    scroll_offset: usize,
    /// Scroll limit reported by the last draw
    max_scroll: usize,
    notice: Option<String>,
    should_quit: bool,
}

impl TuiApp {
    pub fn new(page: ChatPage) -> Self {
        Self {
            page,
            scroll_offset: 0,
            max_scroll: 0,
            notice: None,
            should_quit: false,
        }
    }

    pub fn page(&self) -> &ChatPage {
        &self.page
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let result = self.event_loop(&mut terminal).await;

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        self.sync_viewport(terminal)?;
        info!("Chat page mounted");

        loop {
            self.draw(terminal)?;

            if self.should_quit {
                break;
            }

            let step = tokio::select! {
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_event(event),
                    Some(Err(e)) => {
                        warn!("Terminal event error: {}", e);
                        Step::Continue
                    }
                    None => Step::Quit,
                },

                // Redraw on a timer so an external resize is never missed
                _ = tick.tick() => Step::Continue,
            };

            match step {
                Step::Continue => {}
                Step::Confirm => self.confirm(terminal, &mut event_stream).await?,
                Step::Quit => self.should_quit = true,
            }
        }

        info!(turns = self.page.conversation().len(), "Chat page closed");
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let view = self.page.build();
        let ctx = RenderContext {
            config: self.page.config(),
            scroll_offset: self.scroll_offset,
            notice: self.notice.as_deref(),
        };
        let mut max_scroll = 0;
        terminal.draw(|frame| max_scroll = render(frame, &view, &ctx))?;

        // A resize or a new turn can shrink the limit below the offset
        self.max_scroll = max_scroll;
        self.scroll_offset = self.scroll_offset.min(max_scroll);
        Ok(())
    }

    fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines).min(self.max_scroll);
    }

    fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    fn sync_viewport<B: Backend>(&mut self, terminal: &Terminal<B>) -> io::Result<()> {
        let size = terminal.size()?;
        let units = self.page.config().cells_to_units(size.width);
        self.page.set_viewport_width(units);
        Ok(())
    }

    /// Run the page's confirm handler while watching for cancel keys
    async fn confirm<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        event_stream: &mut EventStream,
    ) -> io::Result<()> {
        self.notice = None;
        self.scroll_offset = 0;

        let config = self.page.config().clone();
        let outcome = {
            let mut refresh = TerminalRefresh::new(terminal, &config);
            let confirm = self.page.confirm(&mut refresh);
            tokio::pin!(confirm);

            loop {
                tokio::select! {
                    result = &mut confirm => break ConfirmOutcome::Finished(result),
                    Some(Ok(Event::Key(key))) = event_stream.next() => {
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }
                        match KeyHandler::handle(key) {
                            Action::Cancel => break ConfirmOutcome::Abandoned { quit: false },
                            Action::Quit => break ConfirmOutcome::Abandoned { quit: true },
                            _ => {}
                        }
                    }
                }
            }
        };

        match outcome {
            ConfirmOutcome::Finished(Ok(())) => {}
            ConfirmOutcome::Finished(Err(e)) => {
                warn!("Response failed: {}", e);
                self.notice = Some(e.to_string());
            }
            ConfirmOutcome::Abandoned { quit } => {
                info!(quit, "Pending response abandoned");
                self.notice = Some("Response cancelled".to_string());
                self.should_quit = quit;
            }
        }

        // Resize events are not processed while a response is pending
        self.sync_viewport(terminal)
    }

    /// Apply a terminal event to the page
    pub fn handle_event(&mut self, event: Event) -> Step {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_action(KeyHandler::handle(key))
            }
            Event::Resize(width, _) => {
                let units = self.page.config().cells_to_units(width);
                self.page.set_viewport_width(units);
                Step::Continue
            }
            _ => Step::Continue,
        }
    }

    fn handle_action(&mut self, action: Action) -> Step {
        let on_placeholder = self.page.conversation().is_empty();

        match action {
            Action::None => {}
            Action::Quit | Action::Cancel => return Step::Quit,
            Action::Submit => return Step::Confirm,

            Action::InsertChar(c) => self.page.edit_input(|input| input.insert_char(c)),
            Action::Newline => self.page.edit_input(|input| input.insert_newline()),
            Action::DeleteChar => self.page.edit_input(|input| input.delete_char()),
            Action::CursorLeft => self.page.edit_input(|input| input.cursor_left()),
            Action::CursorRight => self.page.edit_input(|input| input.cursor_right()),
            Action::CursorStart => self.page.edit_input(|input| input.cursor_home()),
            Action::CursorEnd => self.page.edit_input(|input| input.cursor_end()),

            Action::Previous if on_placeholder => self.page.select_previous_suggestion(),
            Action::Next if on_placeholder => self.page.select_next_suggestion(),
            Action::Previous => self.scroll_up(1),
            Action::Next => self.scroll_down(1),
            Action::ScrollUp => self.scroll_up(PAGE_SCROLL),
            Action::ScrollDown => self.scroll_down(PAGE_SCROLL),
        }

        Step::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use castle_application::{CompletionRequest, GatewayError, LlmGateway, RespondUseCase};
    use castle_domain::ChatSuggestion;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::sync::Arc;

    struct EchoGateway;

    #[async_trait]
    impl LlmGateway for EchoGateway {
        async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError> {
            Ok(request
                .messages
                .last()
                .map(|m| m.content.clone())
                .unwrap_or_default())
        }
    }

    fn app() -> TuiApp {
        let page = ChatPage::new(Arc::new(EchoGateway), RespondUseCase::default())
            .with_suggestions(vec![
                ChatSuggestion::new("a", "first"),
                ChatSuggestion::new("b", "second"),
            ]);
        TuiApp::new(page)
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_typing_edits_page_input() {
        let mut app = app();
        for c in "hey".chars() {
            assert_eq!(app.handle_event(press(KeyCode::Char(c))), Step::Continue);
        }
        app.handle_event(press(KeyCode::Backspace));
        assert_eq!(app.page().input_text(), "he");
    }

    #[test]
    fn test_enter_requests_confirm_and_esc_quits() {
        let mut app = app();
        assert_eq!(app.handle_event(press(KeyCode::Enter)), Step::Confirm);
        assert_eq!(app.handle_event(press(KeyCode::Esc)), Step::Quit);
    }

    #[test]
    fn test_resize_updates_viewport_units() {
        let mut app = app();
        app.handle_event(Event::Resize(100, 30));
        assert_eq!(app.page().viewport_width(), 50.0);
    }

    #[test]
    fn test_arrows_choose_suggestion_on_placeholder() {
        let mut app = app();
        app.handle_event(press(KeyCode::Down));
        assert_eq!(app.page().selected_suggestion().unwrap().text, "second");
        app.handle_event(press(KeyCode::Up));
        assert_eq!(app.page().selected_suggestion().unwrap().text, "first");
        assert_eq!(app.scroll_offset, 0);
    }

    #[tokio::test]
    async fn test_arrows_scroll_once_chat_started() {
        let mut app = app();
        app.page
            .ask("hello", &mut crate::page::NoRefresh)
            .await
            .unwrap();
        app.max_scroll = 100;

        app.handle_event(press(KeyCode::Up));
        app.handle_event(press(KeyCode::PageUp));
        assert_eq!(app.scroll_offset, 1 + PAGE_SCROLL);
        app.handle_event(press(KeyCode::PageDown));
        app.handle_event(press(KeyCode::Down));
        app.handle_event(press(KeyCode::Down));
        assert_eq!(app.scroll_offset, 0);
    }

    #[tokio::test]
    async fn test_scroll_is_clamped_to_content() {
        let mut app = app();
        for i in 0..20 {
            app.page
                .ask(format!("question {}", i), &mut crate::page::NoRefresh)
                .await
                .unwrap();
        }
        let mut terminal = Terminal::new(ratatui::backend::TestBackend::new(60, 16)).unwrap();
        app.draw(&mut terminal).unwrap();
        let max_scroll = app.max_scroll;
        assert!(max_scroll > 0);

        for _ in 0..100 {
            app.handle_event(press(KeyCode::PageUp));
        }
        assert_eq!(app.scroll_offset, max_scroll);

        // Scrolling back down responds at once
        app.handle_event(press(KeyCode::PageDown));
        assert_eq!(app.scroll_offset, max_scroll.saturating_sub(PAGE_SCROLL));

        // A taller terminal lowers the limit and the offset follows
        let mut tall = Terminal::new(ratatui::backend::TestBackend::new(60, 200)).unwrap();
        app.draw(&mut tall).unwrap();
        assert_eq!(app.max_scroll, 0);
        assert_eq!(app.scroll_offset, 0);
    }
}
