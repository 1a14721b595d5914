//! Chat page: conversation state, input handling and the layout tree

use super::input::TextInput;
use super::refresh::Refresh;
use super::view::{
    ButtonView, ChatView, ColumnLayout, EMPTY_CHAT_TITLE, EmptyChatView, HeaderView, INPUT_LABEL,
    Icon, InputRowView, MessageBubble, MessageItem, SuggestionCard, TextInputView, View,
};
use crate::config::PageConfig;
use castle_application::{LlmGateway, RespondError, RespondUseCase};
use castle_domain::{ChatMessage, ChatSuggestion, Conversation};
use std::sync::Arc;
use tracing::{debug, info};

/// Clears the loading flag when dropped, whether the response call
/// finished, failed, or its future was dropped mid-flight.
struct LoadingGuard<'a> {
    flag: &'a mut bool,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.flag = false;
    }
}

/// A single chat page.
///
/// Owns the conversation, the pending input and the loading flag. The LLM
/// client is injected at construction and handed to the responder on every
/// call; nothing is looked up from ambient state.
pub struct ChatPage {
    conversation: Conversation,
    input: TextInput,
    is_loading: bool,
    viewport_width: f32,
    suggestions: Vec<ChatSuggestion>,
    selected_suggestion: usize,
    config: PageConfig,
    responder: RespondUseCase,
    client: Arc<dyn LlmGateway>,
}

impl ChatPage {
    pub fn new(client: Arc<dyn LlmGateway>, responder: RespondUseCase) -> Self {
        Self {
            conversation: Conversation::new(),
            input: TextInput::new(),
            is_loading: false,
            viewport_width: 0.0,
            suggestions: ChatSuggestion::defaults(),
            selected_suggestion: 0,
            config: PageConfig::default(),
            responder,
            client,
        }
    }

    pub fn with_config(mut self, config: PageConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<ChatSuggestion>) -> Self {
        self.suggestions = suggestions;
        self.selected_suggestion = 0;
        self
    }

    // ==================== Accessors ====================

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn input_text(&self) -> &str {
        self.input.text()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn selected_suggestion(&self) -> Option<&ChatSuggestion> {
        self.suggestions.get(self.selected_suggestion)
    }

    // ==================== Host inputs ====================

    /// Record the viewport width, in layout units
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    /// Replace the pending input; ignored while loading
    pub fn set_input_text(&mut self, text: impl Into<String>) {
        if !self.is_loading {
            self.input.set_text(text);
        }
    }

    /// Apply an edit to the pending input; ignored while loading
    pub fn edit_input(&mut self, edit: impl FnOnce(&mut TextInput)) {
        if !self.is_loading {
            edit(&mut self.input);
        }
    }

    pub fn select_next_suggestion(&mut self) {
        if !self.suggestions.is_empty() {
            self.selected_suggestion = (self.selected_suggestion + 1) % self.suggestions.len();
        }
    }

    pub fn select_previous_suggestion(&mut self) {
        if !self.suggestions.is_empty() {
            let len = self.suggestions.len();
            self.selected_suggestion = (self.selected_suggestion + len - 1) % len;
        }
    }

    // ==================== Operations ====================

    /// Send the pending input.
    ///
    /// Blank input is left untouched and nothing happens. Otherwise the
    /// field is cleared and the trimmed text goes to [`ChatPage::ask`].
    pub async fn submit<R: Refresh + ?Sized>(&mut self, refresh: &mut R) -> Result<(), RespondError> {
        if self.is_loading {
            return Ok(());
        }

        let message_text = self.input.text().trim().to_string();
        if message_text.is_empty() {
            return Ok(());
        }

        self.input.take();
        self.ask(message_text, refresh).await
    }

    /// Append a user turn and wait for the assistant's answer.
    ///
    /// The loading flag is set and a re-render is forced before the
    /// outbound call starts. The flag is cleared again however the call
    /// ends; errors are returned to the caller untouched.
    pub async fn ask<R: Refresh + ?Sized>(
        &mut self,
        text: impl Into<String>,
        refresh: &mut R,
    ) -> Result<(), RespondError> {
        self.conversation.push(ChatMessage::user(text));
        debug!(turns = self.conversation.len(), "User message appended");

        self.is_loading = true;
        refresh.force_refresh(&self.build());

        let _loading = LoadingGuard {
            flag: &mut self.is_loading,
        };
        let reply = self
            .responder
            .execute(&mut self.conversation, self.client.as_ref())
            .await?;
        info!(chars = reply.text().len(), "Response received");

        Ok(())
    }

    /// Ask the highlighted starter question, if any
    pub async fn ask_selected_suggestion<R: Refresh + ?Sized>(
        &mut self,
        refresh: &mut R,
    ) -> Result<(), RespondError> {
        if self.is_loading {
            return Ok(());
        }
        match self.selected_suggestion().map(|s| s.text.clone()) {
            Some(text) => self.ask(text, refresh).await,
            None => Ok(()),
        }
    }

    /// Enter key: on the empty placeholder with a blank field this asks the
    /// highlighted suggestion, everywhere else it submits.
    pub async fn confirm<R: Refresh + ?Sized>(&mut self, refresh: &mut R) -> Result<(), RespondError> {
        if self.conversation.is_empty() && self.input.is_blank() {
            return self.ask_selected_suggestion(refresh).await;
        }
        self.submit(refresh).await
    }

    // ==================== Rendering ====================

    /// Build the layout tree for the current state
    pub fn build(&self) -> View {
        if self.conversation.is_empty() {
            return View::EmptyChat(EmptyChatView {
                title: EMPTY_CHAT_TITLE.to_string(),
                suggestions: self
                    .suggestions
                    .iter()
                    .enumerate()
                    .map(|(i, s)| SuggestionCard {
                        icon: Icon::named(&s.icon),
                        text: s.text.clone(),
                        selected: i == self.selected_suggestion,
                    })
                    .collect(),
                input: self.input_view(),
            });
        }

        let mut messages: Vec<MessageItem> = self
            .conversation
            .messages()
            .iter()
            .map(|m| MessageItem::Bubble(MessageBubble::from(m)))
            .collect();

        if self.is_loading {
            messages.push(MessageItem::Generating);
        }

        View::Chat(ChatView {
            header: HeaderView {
                left: Icon::Logo,
                right: Icon::Castle,
            },
            messages,
            input_row: InputRowView {
                input: self.input_view(),
                send_button: ButtonView {
                    icon: Icon::Send,
                    is_sensitive: !self.is_loading,
                },
            },
            column: ColumnLayout::for_viewport(self.viewport_width, self.config.column_width),
        })
    }

    fn input_view(&self) -> TextInputView {
        TextInputView {
            label: INPUT_LABEL.to_string(),
            text: self.input.text().to_string(),
            cursor: self.input.cursor(),
            height: self.config.input_height,
            is_sensitive: !self.is_loading,
        }
    }
}
