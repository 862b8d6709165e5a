//! Pointer Tracking
//!
//! Press/drag/release passthrough notifications for host views.

/// Semantic pointer interaction reported by the control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    TouchDown,
    DragInside,
    DragOutside,
    UpInside,
    UpOutside,
    Cancel,
}

/// Tracks whether a press is in progress
#[derive(Debug, Default)]
pub struct PointerTracker {
    tracking: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    pub fn begin(&mut self) -> Gesture {
        self.tracking = true;
        Gesture::TouchDown
    }

    /// Drag update; ignored when no press is tracked
    pub fn drag(&mut self, over_input: bool) -> Option<Gesture> {
        if !self.tracking {
            return None;
        }
        Some(if over_input {
            Gesture::DragInside
        } else {
            Gesture::DragOutside
        })
    }

    /// Release; ignored when no press is tracked
    pub fn end(&mut self, over_toggle: bool) -> Option<Gesture> {
        if !std::mem::take(&mut self.tracking) {
            return None;
        }
        Some(if over_toggle {
            Gesture::UpInside
        } else {
            Gesture::UpOutside
        })
    }

    pub fn cancel(&mut self) -> Option<Gesture> {
        std::mem::take(&mut self.tracking).then_some(Gesture::Cancel)
    }
}
