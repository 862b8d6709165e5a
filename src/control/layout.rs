//! Control Layout
//!
//! Child regions of the password control, derived from its bounds.

use ratatui::layout::Rect;

/// Fixed height of the control in terminal rows
pub const INTRINSIC_HEIGHT: u16 = 6;

pub const SWATCH_WIDTH: u16 = 6;
pub const SWATCH_SPACING: u16 = 1;
pub const TOGGLE_WIDTH: u16 = 3;
const MARGIN: u16 = 1;

/// Size hint for a host layout: indeterminate width, fixed height
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntrinsicSize {
    pub width: Option<u16>,
    pub height: u16,
}

impl Default for IntrinsicSize {
    fn default() -> Self {
        Self {
            width: None,
            height: INTRINSIC_HEIGHT,
        }
    }
}

/// Regions of the control's children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControlLayout {
    pub title: Rect,
    /// Bordered text input, toggle included
    pub input: Rect,
    pub toggle: Rect,
    pub swatches: [Rect; 3],
    pub status: Rect,
}

impl ControlLayout {
    /// Split `area` into child regions, clipped to `area`
    pub fn compute(area: Rect) -> Self {
        let row = |offset: u16, height: u16| {
            Rect::new(area.x, area.y.saturating_add(offset), area.width, height).intersection(area)
        };

        let title = inset(row(0, 1), MARGIN);
        let input = row(1, 3);

        // Right edge, inside the input border
        let toggle = Rect::new(
            input.right().saturating_sub(1 + TOGGLE_WIDTH),
            input.y.saturating_add(1),
            TOGGLE_WIDTH,
            1,
        )
        .intersection(input);

        let indicators = inset(row(4, 1), MARGIN);
        let mut swatches = [Rect::default(); 3];
        let mut x = indicators.x;
        for swatch in swatches.iter_mut() {
            *swatch = Rect::new(x, indicators.y, SWATCH_WIDTH, 1).intersection(indicators);
            x = x.saturating_add(SWATCH_WIDTH + SWATCH_SPACING);
        }
        let status = Rect::new(
            x.saturating_add(1),
            indicators.y,
            indicators.right().saturating_sub(x.saturating_add(1)),
            1,
        )
        .intersection(indicators);

        Self {
            title,
            input,
            toggle,
            swatches,
            status,
        }
    }
}

fn inset(rect: Rect, margin: u16) -> Rect {
    Rect::new(
        rect.x.saturating_add(margin),
        rect.y,
        rect.width.saturating_sub(margin * 2),
        rect.height,
    )
}
