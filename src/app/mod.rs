//! Application State
//!
//! Hosts the password control on a single screen.

mod config;
mod input;

use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::control::PasswordControl;
use crate::ui::renderer::{Renderer, UiState};
use crate::ui::MessageType;

pub use config::{AppConfig, ResolvedPalette};

pub struct App {
    pub palette: ResolvedPalette,
    pub control: PasswordControl,
    pub message: Option<(String, MessageType, Instant)>,
    pub should_quit: bool,
}

impl App {
    /// Build the app; fails on a bad palette or missing icon
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let palette = config.palette.resolve()?;
        let control = PasswordControl::new(&config.assets(), &config.title, &config.placeholder)?;

        Ok(Self {
            palette,
            control,
            message: None,
            should_quit: false,
        })
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let now = Instant::now();
        self.layout(frame.area());
        self.control.tick(now);
        self.check_message_expiry();

        let state = UiState {
            control: &self.control,
            palette: self.palette,
            message: self.message.as_ref().map(|(m, t, _)| (m.as_str(), *t)),
            now,
        };

        Renderer::render(frame, &state);
    }

    /// Lay the control out for a screen size
    pub fn layout(&mut self, size: Rect) {
        let height = self.control.intrinsic_size().height;
        self.control.set_bounds(Renderer::control_area(size, height));
    }

    fn check_message_expiry(&mut self) {
        let expired = self
            .message
            .as_ref()
            .is_some_and(|(_, _, time)| time.elapsed() > Duration::from_secs(5));

        if expired {
            self.message = None;
        }
    }

    pub fn set_message(&mut self, msg: &str, msg_type: MessageType) {
        self.message = Some((msg.to_string(), msg_type, Instant::now()));
    }
}
