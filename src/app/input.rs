use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::control::{ChangeSource, ControlEvent};
use crate::input::{field_action, Action};
use crate::ui::MessageType;

use super::App;

impl App {
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => {
                self.control.handle_action(&Action::Paste(text));
            }
            Event::FocusLost => self.control.cancel_tracking(),
            Event::Resize(width, height) => {
                self.control.cancel_tracking();
                self.layout(ratatui::layout::Rect::new(0, 0, width, height));
            }
            _ => {}
        }
        self.process_control_events();
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match field_action(key) {
            Action::Quit => self.should_quit = true,
            Action::None => {}
            Action::Submit => {
                if !self.control.handle_action(&Action::Submit) {
                    self.set_message("Nothing to commit, press Tab to edit", MessageType::Warning);
                }
            }
            action => {
                self.control.handle_action(&action);
            }
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let pos = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.control.begin_tracking(pos),
            MouseEventKind::Drag(MouseButton::Left) => self.control.continue_tracking(pos),
            MouseEventKind::Up(MouseButton::Left) => self.control.end_tracking(pos),
            _ => {}
        }
    }

    fn process_control_events(&mut self) {
        for event in self.control.drain_events() {
            if event == ControlEvent::ValueChanged(ChangeSource::Commit) {
                let len = self.control.password().chars().count();
                self.set_message(&format!("Password committed ({} chars)", len), MessageType::Success);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppConfig;
    use crate::control::Strength;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::layout::Rect;

    fn app() -> App {
        let mut app = App::new(&AppConfig::default()).unwrap();
        app.layout(Rect::new(0, 0, 80, 24));
        app
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, pos: Position) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: pos.x,
            row: pos.y,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_event(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_type_and_commit() {
        let mut app = app();
        type_text(&mut app, "password123");
        assert_eq!(app.control.strength(), Strength::Medium);
        assert_eq!(app.control.password(), "");

        app.handle_event(key(KeyCode::Enter));
        assert_eq!(app.control.password(), "password123");
        let (msg, msg_type, _) = app.message.clone().unwrap();
        assert_eq!(msg, "Password committed (11 chars)");
        assert_eq!(msg_type, MessageType::Success);
    }

    #[test]
    fn test_second_submit_warns() {
        let mut app = app();
        type_text(&mut app, "abc");
        app.handle_event(key(KeyCode::Enter));
        app.handle_event(key(KeyCode::Enter));

        let (_, msg_type, _) = app.message.clone().unwrap();
        assert_eq!(msg_type, MessageType::Warning);
        assert_eq!(app.control.password(), "abc");
    }

    #[test]
    fn test_paste_updates_strength() {
        let mut app = app();
        app.handle_event(Event::Paste("a-very-long-passphrase".to_string()));
        assert_eq!(app.control.strength(), Strength::Strong);
        assert_eq!(app.control.password(), "");
    }

    #[test]
    fn test_ctrl_s_toggles() {
        let mut app = app();
        let ctrl_s = Event::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        app.handle_event(ctrl_s.clone());
        assert!(!app.control.input().is_secure());
        app.handle_event(ctrl_s);
        assert!(app.control.input().is_secure());
    }

    #[test]
    fn test_click_on_toggle() {
        let mut app = app();
        let toggle = app.control.layout().toggle;
        let pos = Position::new(toggle.x + 1, toggle.y);

        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), pos));
        app.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), pos));
        assert!(!app.control.input().is_secure());
        assert_eq!(app.control.password(), "");
    }

    #[test]
    fn test_focus_lost_cancels_tracking() {
        let mut app = app();
        let input = app.control.layout().input;
        app.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), Position::new(input.x + 1, input.y + 1)));
        assert!(app.control.is_tracking());

        app.handle_event(Event::FocusLost);
        assert!(!app.control.is_tracking());
    }

    #[test]
    fn test_escape_quits() {
        let mut app = app();
        app.handle_event(key(KeyCode::Esc));
        assert!(app.should_quit);
    }
}
