use iced::widget::canvas::{self, Frame};
use iced::{Color, Font, Pixels, Point};

use crate::constants::GLYPH_WIDTH_RATIO;

/// Draws a single line of text with its top-left corner at `position`.
pub fn draw_line(frame: &mut Frame, content: &str, position: Point, size: f32, color: Color, font: Font) {
    frame.fill_text(canvas::Text {
        content: content.to_string(),
        position,
        color,
        size: Pixels(size),
        font,
        ..canvas::Text::default()
    });
}

/// Draws `content` line by line, advancing `line_height` times the font size per line.
pub fn draw_block(
    frame: &mut Frame,
    content: &str,
    origin: Point,
    size: f32,
    line_height: f32,
    color: Color,
    font: Font,
) {
    for (i, line) in content.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let y = origin.y + i as f32 * size * line_height;
        draw_line(frame, line, Point::new(origin.x, y), size, color, font);
    }
}

/// Estimated rendered width, used to center short labels.
pub fn approx_width(content: &str, size: f32) -> f32 {
    content.chars().count() as f32 * size * GLYPH_WIDTH_RATIO
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_scales_with_length_and_size() {
        assert_eq!(approx_width("", 18.0), 0.0);
        assert!(approx_width("Tab 1", 18.0) > approx_width("Tab", 18.0));
        assert!(approx_width("Tab", 24.0) > approx_width("Tab", 18.0));
    }
}
