//! Password Field Widget
//!
//! Draws the password control: title, bordered input with toggle, swatches, status.

use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::app::ResolvedPalette;
use crate::control::layout::{ControlLayout, TOGGLE_WIDTH};
use crate::control::{PasswordControl, Strength, SwatchFill};
use crate::ui::renderer::Renderer;

/// Scale above which a swatch is drawn at full height
const FLARE_THRESHOLD: f32 = 1.3;
const SWATCH_GLYPH: &str = "▄";
const SWATCH_FLARE_GLYPH: &str = "█";

/// Slice of `text` that fits in `width` columns with the cursor kept visible.
///
/// `cursor` is a char index. Returns the visible text and the cursor's column
/// within it; one column is reserved for the cursor cell itself.
fn visible_window(text: &str, cursor: usize, width: usize) -> (String, usize) {
    let widths: Vec<usize> = text.chars().map(|c| c.width().unwrap_or(0)).collect();
    let cursor = cursor.min(widths.len());

    let mut start = 0;
    let mut cursor_col: usize = widths[..cursor].iter().sum();
    while start < cursor && cursor_col + 1 > width {
        cursor_col -= widths[start];
        start += 1;
    }

    let mut used = 0;
    let visible = text
        .chars()
        .zip(&widths)
        .skip(start)
        .take_while(|(_, w)| {
            used += **w;
            used <= width
        })
        .map(|(c, _)| c)
        .collect();
    (visible, cursor_col)
}

pub struct PasswordFieldWidget<'a> {
    control: &'a PasswordControl,
    palette: ResolvedPalette,
    now: Instant,
}

impl<'a> PasswordFieldWidget<'a> {
    pub fn new(control: &'a PasswordControl, palette: ResolvedPalette, now: Instant) -> Self {
        Self {
            control,
            palette,
            now,
        }
    }

    fn tier_color(&self, fill: SwatchFill) -> Color {
        let rgb = match fill {
            SwatchFill::Unused => self.palette.unused,
            SwatchFill::Lit(Strength::Weak) => self.palette.weak,
            SwatchFill::Lit(Strength::Medium) => self.palette.medium,
            SwatchFill::Lit(Strength::Strong) => self.palette.strong,
        };
        Renderer::hex_color(rgb)
    }

    fn render_input(&self, layout: &ControlLayout, buf: &mut Buffer) {
        let input = self.control.input();
        let border = if input.is_focused() {
            Renderer::hex_color(self.palette.border)
        } else {
            Color::DarkGray
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border));
        let inner = block.inner(layout.input);
        block.render(layout.input, buf);

        let text_width = inner.width.saturating_sub(TOGGLE_WIDTH + 1) as usize;
        if text_width == 0 || inner.height == 0 {
            return;
        }

        let (visible, cursor_col) = visible_window(&input.display_text(), input.cursor(), text_width);
        if input.char_len() == 0 {
            let style = Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC);
            buf.set_stringn(inner.x, inner.y, self.control.placeholder(), text_width, style);
        } else {
            buf.set_stringn(inner.x, inner.y, &visible, text_width, Style::default().fg(Color::White));
        }

        if input.is_focused() {
            let cursor_x = inner.x + cursor_col as u16;
            if let Some(cell) = buf.cell_mut((cursor_x, inner.y)) {
                cell.set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }
    }
}

impl Widget for PasswordFieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = ControlLayout::compute(area);
        let label_style = Style::default()
            .fg(Renderer::hex_color(self.palette.label))
            .add_modifier(Modifier::BOLD);

        buf.set_stringn(
            layout.title.x,
            layout.title.y,
            &self.control.title().text,
            layout.title.width as usize,
            label_style,
        );

        self.render_input(&layout, buf);

        if !layout.toggle.is_empty() {
            buf.set_stringn(
                layout.toggle.x + 1,
                layout.toggle.y,
                self.control.toggle().icon(),
                1,
                Style::default().fg(Color::Cyan),
            );
        }

        for (swatch, rect) in self.control.swatches().iter().zip(layout.swatches) {
            let scale = self.control.flares().scale_of(swatch.tier, self.now);
            let glyph = if scale > FLARE_THRESHOLD {
                SWATCH_FLARE_GLYPH
            } else {
                SWATCH_GLYPH
            };
            let style = Style::default().fg(self.tier_color(swatch.fill));
            for x in rect.left()..rect.right() {
                if let Some(cell) = buf.cell_mut((x, rect.y)) {
                    cell.set_symbol(glyph).set_style(style);
                }
            }
        }

        buf.set_stringn(
            layout.status.x,
            layout.status.y,
            &self.control.status().text,
            layout.status.width as usize,
            label_style,
        );
    }
}
