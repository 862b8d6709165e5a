//! Status Line Component
//!
//! Displays host messages, focus state, and commit info.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Message type for status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Warning,
}

impl MessageType {
    pub fn color(&self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
        }
    }
}

/// Status line widget
pub struct StatusLine<'a> {
    focused: bool,
    message: Option<(&'a str, MessageType)>,
    committed_len: Option<usize>,
}

impl<'a> StatusLine<'a> {
    pub fn new(focused: bool) -> Self {
        Self {
            focused,
            message: None,
            committed_len: None,
        }
    }

    pub fn message(mut self, msg: &'a str, msg_type: MessageType) -> Self {
        self.message = Some((msg, msg_type));
        self
    }

    pub fn committed_len(mut self, len: usize) -> Self {
        self.committed_len = Some(len);
        self
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(Color::DarkGray));

        let mut x = area.x;

        let (indicator, style) = if self.focused {
            ("EDIT", Style::default().fg(Color::Black).bg(Color::Green))
        } else {
            ("IDLE", Style::default().fg(Color::Black).bg(Color::Blue))
        };
        let mode_text = format!(" {} ", indicator);
        buf.set_string(x, area.y, &mode_text, style.add_modifier(Modifier::BOLD));
        x += mode_text.len() as u16 + 1;

        if let Some((msg, msg_type)) = self.message {
            buf.set_string(x, area.y, msg, Style::default().fg(msg_type.color()).bg(Color::DarkGray));
        }

        let right_text = match self.committed_len {
            Some(len) => format!("committed: {} chars", len),
            None => "not committed".to_string(),
        };
        let right_x = area.x + area.width.saturating_sub(right_text.len() as u16 + 1);
        buf.set_string(right_x, area.y, &right_text, Style::default().fg(Color::Gray).bg(Color::DarkGray));
    }
}

/// Help bar widget
pub struct HelpBar<'a> {
    hints: Vec<(&'a str, &'a str)>,
}

impl<'a> HelpBar<'a> {
    pub fn new(hints: Vec<(&'a str, &'a str)>) -> Self {
        Self { hints }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans: Vec<Span> = Vec::new();
        for (i, (key, desc)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)));
            spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
        }
        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, 0)).map_or(" ", |c| c.symbol()))
            .collect()
    }

    #[test]
    fn test_status_line_shows_message_and_commit() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StatusLine::new(false)
            .message("Password committed", MessageType::Success)
            .committed_len(11)
            .render(area, &mut buf);

        let text = row_text(&buf);
        assert!(text.starts_with(" IDLE "));
        assert!(text.contains("Password committed"));
        assert!(text.contains("committed: 11 chars"));
    }

    #[test]
    fn test_help_bar_hints() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        HelpBar::new(vec![("Enter", "commit"), ("Esc", "quit")]).render(area, &mut buf);

        let text = row_text(&buf);
        assert!(text.contains("Enter commit"));
        assert!(text.contains("Esc quit"));
    }
}
