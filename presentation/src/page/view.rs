//! Layout tree produced by [`ChatPage::build`](super::ChatPage::build)
//!
//! The tree is plain data: it says which components appear, in which order,
//! with which props. Hosts decide how to draw it.

use castle_domain::{ChatMessage, Role};

/// Label of the placeholder shown while a response is generated
pub const GENERATING_LABEL: &str = "Thinking...";

/// Label of the multi-line input
pub const INPUT_LABEL: &str = "Ask something...";

/// Heading of the empty-chat placeholder
pub const EMPTY_CHAT_TITLE: &str = "How can I help you today?";

/// Icons used by the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    /// App logo, marks user turns
    Logo,
    /// Castle, marks assistant turns
    Castle,
    /// Send arrow on the input row
    Send,
    /// Free-form icon name, e.g. from a configured suggestion
    Named(String),
}

impl Icon {
    pub fn named(name: &str) -> Self {
        match name {
            "logo" => Icon::Logo,
            "castle" => Icon::Castle,
            "send" | "navigate-next" => Icon::Send,
            other => Icon::Named(other.to_string()),
        }
    }
}

/// Horizontal placement of the message column and the input row
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnLayout {
    /// Span the whole viewport
    FullWidth,
    /// Fixed-width column, centered
    Centered { width: f32 },
}

impl ColumnLayout {
    /// Centered when the viewport is strictly wider than the column
    pub fn for_viewport(viewport_width: f32, column_width: f32) -> Self {
        if viewport_width > column_width {
            ColumnLayout::Centered {
                width: column_width,
            }
        } else {
            ColumnLayout::FullWidth
        }
    }

    pub fn is_centered(&self) -> bool {
        matches!(self, ColumnLayout::Centered { .. })
    }
}

/// Background of a message bubble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubbleColor {
    Neutral,
    Background,
}

/// One chat turn as drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBubble {
    pub role: Role,
    pub icon: Icon,
    pub color: BubbleColor,
    pub text: String,
}

impl From<&ChatMessage> for MessageBubble {
    fn from(message: &ChatMessage) -> Self {
        let (icon, color) = match message.role() {
            Role::User => (Icon::Logo, BubbleColor::Neutral),
            Role::Assistant => (Icon::Castle, BubbleColor::Background),
        };
        Self {
            role: message.role(),
            icon,
            color,
            text: message.text().to_string(),
        }
    }
}

/// Entry of the scrollable message list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageItem {
    Bubble(MessageBubble),
    /// Progress indicator with [`GENERATING_LABEL`]
    Generating,
}

/// Multi-line text field bound to the pending input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInputView {
    pub label: String,
    pub text: String,
    pub cursor: usize,
    pub height: u16,
    pub is_sensitive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub icon: Icon,
    pub is_sensitive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRowView {
    pub input: TextInputView,
    pub send_button: ButtonView,
}

/// Two icons pinned to the top corners
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub left: Icon,
    pub right: Icon,
}

/// A pressable starter question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionCard {
    pub icon: Icon,
    pub text: String,
    pub selected: bool,
}

/// Shown instead of the chat while the conversation is empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyChatView {
    pub title: String,
    pub suggestions: Vec<SuggestionCard>,
    pub input: TextInputView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatView {
    pub header: HeaderView,
    pub messages: Vec<MessageItem>,
    pub input_row: InputRowView,
    pub column: ColumnLayout,
}

/// Root of the layout tree
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    EmptyChat(EmptyChatView),
    Chat(ChatView),
}

impl View {
    /// Number of entries in the message list (0 for the placeholder)
    pub fn message_count(&self) -> usize {
        match self {
            View::EmptyChat(_) => 0,
            View::Chat(chat) => chat.messages.len(),
        }
    }

    /// Whether the list ends with the generating placeholder
    pub fn shows_generating(&self) -> bool {
        match self {
            View::EmptyChat(_) => false,
            View::Chat(chat) => matches!(chat.messages.last(), Some(MessageItem::Generating)),
        }
    }

    /// The text field of either variant
    pub fn input(&self) -> &TextInputView {
        match self {
            View::EmptyChat(empty) => &empty.input,
            View::Chat(chat) => &chat.input_row.input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_layout_threshold() {
        assert_eq!(ColumnLayout::for_viewport(30.0, 40.0), ColumnLayout::FullWidth);
        assert_eq!(ColumnLayout::for_viewport(40.0, 40.0), ColumnLayout::FullWidth);
        assert_eq!(
            ColumnLayout::for_viewport(40.5, 40.0),
            ColumnLayout::Centered { width: 40.0 }
        );
        assert!(ColumnLayout::for_viewport(120.0, 40.0).is_centered());
    }

    #[test]
    fn test_bubble_style_follows_role() {
        let user = MessageBubble::from(&ChatMessage::user("hi"));
        assert_eq!(user.icon, Icon::Logo);
        assert_eq!(user.color, BubbleColor::Neutral);

        let assistant = MessageBubble::from(&ChatMessage::assistant("hello"));
        assert_eq!(assistant.icon, Icon::Castle);
        assert_eq!(assistant.color, BubbleColor::Background);
        assert_eq!(assistant.text, "hello");
    }

    #[test]
    fn test_icon_named() {
        assert_eq!(Icon::named("castle"), Icon::Castle);
        assert_eq!(Icon::named("navigate-next"), Icon::Send);
        assert_eq!(Icon::named("code"), Icon::Named("code".to_string()));
    }
}
