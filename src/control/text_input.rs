//! Text Input
//!
//! Secure single-line text buffer with a char-indexed cursor.

use std::fmt;
use std::ops::Range;

use zeroize::Zeroizing;

use crate::input::Action;

/// Glyph drawn for each masked character
pub const MASK_CHAR: char = '•';

/// A pending edit: replace `range` (in chars) with `replacement`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range<usize>,
    pub replacement: String,
}

/// Replace a char range of `text`, clamping the range to the text length
pub fn splice(text: &str, range: Range<usize>, replacement: &str) -> String {
    let len = text.chars().count();
    let start = range.start.min(len);
    let end = range.end.clamp(start, len);

    let mut out = String::with_capacity(text.len() + replacement.len());
    out.extend(text.chars().take(start));
    out.push_str(replacement);
    out.extend(text.chars().skip(end));
    out
}

/// Text input state owned by the password control
pub struct TextInput {
    text: Zeroizing<String>,
    cursor: usize,
    secure: bool,
    focused: bool,
}

impl Default for TextInput {
    fn default() -> Self {
        Self {
            text: Zeroizing::new(String::new()),
            cursor: 0,
            secure: true,
            focused: true,
        }
    }
}

impl fmt::Debug for TextInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextInput")
            .field("text", &"[REDACTED]")
            .field("cursor", &self.cursor)
            .field("secure", &self.secure)
            .field("focused", &self.focused)
            .finish()
    }
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

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    pub fn set_secure(&mut self, secure: bool) {
        self.secure = secure;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn resign_focus(&mut self) {
        self.focused = false;
    }

    /// Compute the edit an action would make, without applying it
    pub fn edit_for(&self, action: &Action) -> Option<TextEdit> {
        let len = self.char_len();
        let at = self.cursor;
        let edit = |range: Range<usize>, replacement: String| Some(TextEdit { range, replacement });

        match action {
            Action::InsertChar(c) => edit(at..at, c.to_string()),
            Action::Paste(s) => {
                let clean: String = s.chars().filter(|c| !c.is_control()).collect();
                if clean.is_empty() {
                    return None;
                }
                edit(at..at, clean)
            }
            Action::DeleteChar if at > 0 => edit(at - 1..at, String::new()),
            Action::DeleteCharForward if at < len => edit(at..at + 1, String::new()),
            Action::ClearLine if len > 0 => edit(0..len, String::new()),
            _ => None,
        }
    }

    /// Apply an edit and place the cursor after the replacement
    pub fn apply(&mut self, edit: &TextEdit) {
        let next = Zeroizing::new(splice(&self.text, edit.range.clone(), &edit.replacement));
        let start = edit.range.start.min(self.char_len());
        self.text = next;
        self.cursor = (start + edit.replacement.chars().count()).min(self.char_len());
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Text as drawn: plaintext when revealed, one mask glyph per char when secure
    pub fn display_text(&self) -> String {
        if self.secure {
            std::iter::repeat_n(MASK_CHAR, self.char_len()).collect()
        } else {
            self.text.to_string()
        }
    }
}
