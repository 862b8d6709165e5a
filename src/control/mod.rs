//! Password Control
//!
//! Password entry with a show/hide toggle and a three-tier strength indicator.

pub mod assets;
pub mod flare;
pub mod layout;
pub mod pointer;
pub mod strength;
pub mod text_input;

use std::ops::Range;
use std::time::Instant;

use ratatui::layout::{Position, Rect};
use thiserror::Error;
use tracing::{debug, info, trace, warn};
use zeroize::Zeroizing;

use crate::input::Action;

/// Control construction errors
#[derive(Debug, Error)]
pub enum ControlError {
    #[error("Missing icon asset: {0}")]
    MissingAsset(String),
}

pub type ControlResult<T> = Result<T, ControlError>;

// Re-exports
pub use assets::AssetCatalog;
pub use flare::FlareQueue;
pub use layout::{ControlLayout, IntrinsicSize};
pub use pointer::{Gesture, PointerTracker};
pub use strength::{classify, Strength};
pub use text_input::{splice, TextInput};

/// Hooks the text input calls before applying an edit and on submit
pub trait TextEditObserver {
    /// Called with the pre-edit text and the pending edit; `false` rejects it
    fn should_accept_change(&mut self, current: &str, range: Range<usize>, replacement: &str) -> bool;

    /// Called on the return action; `None` when no text is present
    fn on_submit(&mut self, current: Option<&str>) -> bool;
}

/// What produced a value-changed notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeSource {
    /// Text was frozen into the password
    Commit,
    /// Pointer feedback; the password is untouched
    Gesture,
}

/// Notifications for the host, drained with [`PasswordControl::drain_events`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    Pointer(Gesture),
    ValueChanged(ChangeSource),
}

/// Fill state of one strength swatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwatchFill {
    Unused,
    Lit(Strength),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub tier: Strength,
    pub fill: SwatchFill,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
}

impl Label {
    fn new(text: &str) -> Self {
        Self { text: text.to_string() }
    }
}

/// Show/hide button with its two resolved icons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleButton {
    masked_icon: String,
    revealed_icon: String,
    icon: String,
}

impl ToggleButton {
    fn new(catalog: &AssetCatalog) -> ControlResult<Self> {
        let masked_icon = catalog.require(assets::EYES_CLOSED)?;
        let revealed_icon = catalog.require(assets::EYES_OPEN)?;
        Ok(Self {
            icon: masked_icon.clone(),
            masked_icon,
            revealed_icon,
        })
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    fn show_state(&mut self, secure: bool) {
        self.icon = if secure {
            self.masked_icon.clone()
        } else {
            self.revealed_icon.clone()
        };
    }
}

/// The password entry control and its five children
pub struct PasswordControl {
    password: Zeroizing<String>,
    current_strength: Strength,
    title: Label,
    input: TextInput,
    toggle: ToggleButton,
    swatches: [Swatch; 3],
    status: Label,
    placeholder: String,
    flares: FlareQueue,
    tracker: PointerTracker,
    bounds: Rect,
    events: Vec<ControlEvent>,
}

impl PasswordControl {
    /// Build the control; fails when a required icon is missing
    pub fn new(catalog: &AssetCatalog, title: &str, placeholder: &str) -> ControlResult<Self> {
        catalog.verify()?;
        let toggle = ToggleButton::new(catalog)?;

        let swatches = Strength::ALL.map(|tier| Swatch {
            tier,
            fill: if tier == Strength::Weak {
                SwatchFill::Lit(tier)
            } else {
                SwatchFill::Unused
            },
        });

        Ok(Self {
            password: Zeroizing::new(String::new()),
            current_strength: Strength::Weak,
            title: Label::new(title),
            input: TextInput::new(),
            toggle,
            swatches,
            status: Label::new(Strength::Weak.label()),
            placeholder: placeholder.to_string(),
            flares: FlareQueue::new(),
            tracker: PointerTracker::new(),
            bounds: Rect::default(),
            events: Vec::new(),
        })
    }

    /// Last committed password; empty until the first commit
    pub fn password(&self) -> &str {
        &self.password
    }

    #[cfg(test)]
    pub fn strength(&self) -> Strength {
        self.current_strength
    }

    pub fn title(&self) -> &Label {
        &self.title
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    pub fn toggle(&self) -> &ToggleButton {
        &self.toggle
    }

    pub fn swatches(&self) -> &[Swatch; 3] {
        &self.swatches
    }

    pub fn status(&self) -> &Label {
        &self.status
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn flares(&self) -> &FlareQueue {
        &self.flares
    }

    pub fn intrinsic_size(&self) -> IntrinsicSize {
        IntrinsicSize::default()
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Record where the host laid the control out
    pub fn set_bounds(&mut self, area: Rect) {
        self.bounds = area;
    }

    pub fn layout(&self) -> ControlLayout {
        ControlLayout::compute(self.bounds)
    }

    pub fn drain_events(&mut self) -> Vec<ControlEvent> {
        std::mem::take(&mut self.events)
    }

    /// Route a key action; returns whether the control handled it
    pub fn handle_action(&mut self, action: &Action) -> bool {
        match action {
            Action::Submit => {
                let current = self
                    .input
                    .is_focused()
                    .then(|| Zeroizing::new(self.input.text().to_string()));
                self.on_submit(current.as_deref().map(String::as_str))
            }
            Action::ToggleVisibility => {
                self.toggle_visibility();
                true
            }
            Action::Focus => {
                self.input.focus();
                true
            }
            _ if !self.input.is_focused() => false,
            Action::CursorLeft => {
                self.input.cursor_left();
                true
            }
            Action::CursorRight => {
                self.input.cursor_right();
                true
            }
            Action::CursorHome => {
                self.input.cursor_home();
                true
            }
            Action::CursorEnd => {
                self.input.cursor_end();
                true
            }
            _ if action.is_edit() => {
                let Some(edit) = self.input.edit_for(action) else {
                    return false;
                };
                let current = Zeroizing::new(self.input.text().to_string());
                if self.should_accept_change(&current, edit.range.clone(), &edit.replacement) {
                    self.input.apply(&edit);
                }
                true
            }
            _ => false,
        }
    }

    /// Flip masked/revealed rendering and the button icon
    pub fn toggle_visibility(&mut self) {
        let secure = !self.input.is_secure();
        self.input.set_secure(secure);
        self.toggle.show_state(secure);
        debug!(revealed = !secure, "password visibility toggled");
    }

    /// Assign the strength; renders only when the value changes
    fn set_strength(&mut self, strength: Strength) -> bool {
        if strength == self.current_strength {
            return false;
        }
        debug!(from = ?self.current_strength, to = ?strength, "strength changed");
        self.current_strength = strength;
        self.render_strength(Instant::now());
        true
    }

    fn render_strength(&mut self, now: Instant) {
        let current = self.current_strength;
        self.status.text = current.label().to_string();
        for swatch in self.swatches.iter_mut() {
            swatch.fill = if swatch.tier.index() < current.lit_swatches() {
                SwatchFill::Lit(swatch.tier)
            } else {
                SwatchFill::Unused
            };
        }
        self.flares.schedule(current, now);
        trace!(tier = ?current, scheduled = self.flares.scheduled_total(), "swatch flare scheduled");
    }

    /// Advance cosmetic animation state
    pub fn tick(&mut self, now: Instant) {
        self.flares.prune(now);
    }

    /// Press; ignored unless it lands within the control's bounds
    pub fn begin_tracking(&mut self, pos: Position) {
        if !self.bounds().contains(pos) {
            return;
        }
        if self.layout().input.contains(pos) {
            self.input.focus();
        }
        let gesture = self.tracker.begin();
        self.emit_gesture(gesture);
    }

    pub fn continue_tracking(&mut self, pos: Position) {
        let over_input = self.layout().input.contains(pos);
        if let Some(gesture) = self.tracker.drag(over_input) {
            self.emit_gesture(gesture);
            if gesture == Gesture::DragInside {
                self.events.push(ControlEvent::ValueChanged(ChangeSource::Gesture));
            }
        }
    }

    /// Release; a release over the toggle activates it
    pub fn end_tracking(&mut self, pos: Position) {
        let over_toggle = self.layout().toggle.contains(pos);
        if let Some(gesture) = self.tracker.end(over_toggle) {
            self.emit_gesture(gesture);
            if gesture == Gesture::UpInside {
                self.events.push(ControlEvent::ValueChanged(ChangeSource::Gesture));
                self.toggle_visibility();
            }
        }
    }

    pub fn cancel_tracking(&mut self) {
        if let Some(gesture) = self.tracker.cancel() {
            self.emit_gesture(gesture);
        }
    }

    #[cfg(test)]
    pub fn is_tracking(&self) -> bool {
        self.tracker.is_tracking()
    }

    fn emit_gesture(&mut self, gesture: Gesture) {
        trace!(?gesture, "pointer gesture");
        self.events.push(ControlEvent::Pointer(gesture));
    }
}

impl TextEditObserver for PasswordControl {
    fn should_accept_change(&mut self, current: &str, range: Range<usize>, replacement: &str) -> bool {
        let prospective = Zeroizing::new(splice(current, range, replacement));
        self.set_strength(classify(&prospective));
        true
    }

    fn on_submit(&mut self, current: Option<&str>) -> bool {
        let Some(text) = current else {
            warn!("submit rejected: no text present");
            return false;
        };

        self.input.resign_focus();
        self.password = Zeroizing::new(text.to_string());
        self.events.push(ControlEvent::ValueChanged(ChangeSource::Commit));
        info!(length = text.chars().count(), "password committed");
        true
    }
}
