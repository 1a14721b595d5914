//! Editable text buffer behind the page's multi-line input

/// Text plus a byte-offset cursor that always sits on a char boundary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Replace the whole buffer, cursor moves to the end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    /// Take the buffer contents and clear it
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            let prev_char_len = self.text[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.text.remove(self.cursor - prev_char_len);
            self.cursor -= prev_char_len;
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            let prev_char_len = self.text[..self.cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor -= prev_char_len;
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.text.len() {
            let next_char_len = self.text[self.cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor += next_char_len;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Number of lines, counting a trailing newline as an extra empty line
    pub fn line_count(&self) -> usize {
        self.text.lines().count().max(1) + usize::from(self.text.ends_with('\n'))
    }
}
