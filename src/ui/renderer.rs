//! Renderer
//!
//! Screen layout for the password field host.

use std::time::Instant;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    Frame,
};

use super::components::{HelpBar, MessageType, PasswordFieldWidget, StatusLine};
use crate::app::ResolvedPalette;
use crate::control::PasswordControl;
use crate::input::key_hints;

/// Widest the control is laid out
pub const MAX_CONTROL_WIDTH: u16 = 60;

pub struct UiState<'a> {
    pub control: &'a PasswordControl,
    pub palette: ResolvedPalette,
    pub message: Option<(&'a str, MessageType)>,
    pub now: Instant,
}

pub struct Renderer;

impl Renderer {
    pub fn hex_color(rgb: u32) -> Color {
        Color::Rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Area the control occupies for a given screen size
    pub fn control_area(size: Rect, height: u16) -> Rect {
        let content = create_main_layout(size)[0];
        let width = content.width.min(MAX_CONTROL_WIDTH);
        let x = content.x + (content.width - width) / 2;
        let y = content.y + content.height.saturating_sub(height) / 2;
        Rect::new(x, y, width, height).intersection(content)
    }

    pub fn render(frame: &mut Frame, state: &UiState) {
        let size = frame.area();
        let chunks = create_main_layout(size);
        let control_area = Self::control_area(size, state.control.intrinsic_size().height);

        let widget = PasswordFieldWidget::new(state.control, state.palette, state.now);
        frame.render_widget(widget, control_area);
        render_status_line(frame, chunks[1], state);
        frame.render_widget(HelpBar::new(key_hints()), chunks[2]);
    }
}

fn create_main_layout(size: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size)
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &UiState) {
    let mut status = StatusLine::new(state.control.input().is_focused());

    if let Some((msg, msg_type)) = state.message {
        status = status.message(msg, msg_type);
    }

    let committed = state.control.password();
    if !committed.is_empty() {
        status = status.committed_len(committed.chars().count());
    }

    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert_eq!(Renderer::hex_color(0xE55C5C), Color::Rgb(0xE5, 0x5C, 0x5C));
    }

    #[test]
    fn test_control_area_centered() {
        let area = Renderer::control_area(Rect::new(0, 0, 100, 20), 6);
        assert_eq!(area.width, MAX_CONTROL_WIDTH);
        assert_eq!(area.height, 6);
        assert_eq!(area.x, 20);
    }

    #[test]
    fn test_control_area_narrow_screen() {
        let area = Renderer::control_area(Rect::new(0, 0, 30, 6), 6);
        assert_eq!(area.width, 30);
        assert!(area.height <= 4);
    }
}
