//! Tooltip layout and drawing

use super::surface::{Color, Rect, RenderSurface};

pub const TOOLTIP_BG: Color = Color(0xF010_0010);
pub const TOOLTIP_FRAME: Color = Color(0x5028_007F);
pub const TOOLTIP_SHADOW: Color = Color(0x6600_0000);

/// One styled tooltip line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipLine {
    pub text: String,
    pub color: Color,
    pub italic: bool,
}

impl TooltipLine {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
            italic: false,
        }
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn blank() -> Self {
        Self::new(String::new(), Color::WHITE)
    }
}

/// Word-wrap `text` so that no line is wider than `max_width`
///
/// A single word wider than the limit gets a line of its own.
pub fn wrap_text(surface: &dyn RenderSurface, text: &str, max_width: i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
            continue;
        }
        let candidate = format!("{current_line} {word}");
        if surface.text_width(&candidate) <= max_width {
            current_line = candidate;
        } else {
            lines.push(std::mem::replace(&mut current_line, word.to_string()));
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Draw a tooltip box near the cursor, kept inside `screen`
pub fn draw_tooltip(
    surface: &mut dyn RenderSurface,
    lines: &[TooltipLine],
    mouse_x: i32,
    mouse_y: i32,
    screen: Rect,
) {
    if lines.is_empty() {
        return;
    }

    let padding = 4;
    let line_height = surface.line_height();
    let text_width = lines
        .iter()
        .map(|line| surface.text_width(&line.text))
        .max()
        .unwrap_or(0);
    let width = text_width + padding * 2;
    let height = line_height * lines.len() as i32 + padding * 2;

    let mut x = mouse_x + 12;
    let mut y = mouse_y - 12;
    if x + width > screen.x + screen.width {
        x = mouse_x - width - 8;
    }
    if y + height > screen.y + screen.height {
        y = screen.y + screen.height - height;
    }
    x = x.max(screen.x);
    y = y.max(screen.y);

    surface.set_depth_test(false);
    surface.fill_rect(Rect::new(x + 2, y + 2, width, height), TOOLTIP_SHADOW);
    surface.fill_rect(Rect::new(x - 1, y - 1, width + 2, height + 2), TOOLTIP_FRAME);
    surface.fill_rect(Rect::new(x, y, width, height), TOOLTIP_BG);

    let mut line_y = y + padding;
    for line in lines {
        surface.draw_text(&line.text, x + padding, line_y, line.color, line.italic);
        line_y += line_height;
    }
    surface.set_depth_test(true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::surface::testing::{DrawCall, RecordingSurface};

    #[test]
    fn test_wrap_text_by_width() {
        let surface = RecordingSurface::default();
        // 6 pixels per glyph, so 60 pixels fit 10 characters
        let lines = wrap_text(&surface, "the quick brown fox jumps", 60);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
    }

    #[test]
    fn test_wrap_text_long_word_and_empty() {
        let surface = RecordingSurface::default();
        assert_eq!(
            wrap_text(&surface, "a supercalifragilistic b", 30),
            vec!["a", "supercalifragilistic", "b"]
        );
        assert_eq!(wrap_text(&surface, "   ", 30), vec![String::new()]);
    }

    #[test]
    fn test_draw_tooltip_stays_on_screen() {
        let mut surface = RecordingSurface::default();
        let lines = vec![
            TooltipLine::new("Coal", Color::WHITE),
            TooltipLine::new("Burns for a while", Color::GRAY),
        ];
        let screen = Rect::new(0, 0, 200, 100);

        draw_tooltip(&mut surface, &lines, 190, 95, screen);

        let rects = surface.rects();
        let (background, color) = rects[2];
        assert_eq!(color, TOOLTIP_BG);
        assert!(background.x + background.width <= 200);
        assert!(background.y + background.height <= 100);
        assert_eq!(surface.texts(), vec!["Coal", "Burns for a while"]);
        assert_eq!(surface.calls.first(), Some(&DrawCall::Depth(false)));
        assert_eq!(surface.calls.last(), Some(&DrawCall::Depth(true)));
    }

    #[test]
    fn test_draw_nothing_for_empty_tooltip() {
        let mut surface = RecordingSurface::default();
        draw_tooltip(&mut surface, &[], 0, 0, Rect::new(0, 0, 100, 100));
        assert!(surface.calls.is_empty());
    }
}
