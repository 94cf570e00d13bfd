use iced::{Color, Point, Size};
use nebula_core::geometry::{Rgba, Vec2};
use nebula_core::scene::BACKGROUND_COLOR;

/// Core color palette for the deep-space theme.
#[derive(Debug, Clone, Copy)]
pub struct PaletteColors {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub success: Color,
    pub danger: Color,
}

impl Default for PaletteColors {
    fn default() -> Self {
        Self::deep_space()
    }
}

impl PaletteColors {
    pub fn deep_space() -> Self {
        Self {
            background: to_color(BACKGROUND_COLOR),
            text: Color::from_rgb8(200, 220, 255),  // Pale starlight
            accent: Color::from_rgb8(100, 150, 255), // Tab outline blue
            success: Color::from_rgb8(100, 255, 140),
            danger: Color::from_rgb8(255, 100, 100),
        }
    }
}

/// Returns the default palette for the application.
pub fn palette() -> PaletteColors {
    PaletteColors::default()
}

/// Converts an 8-bit simulation color into an Iced color.
pub fn to_color(c: Rgba) -> Color {
    Color::from_rgba8(c.r, c.g, c.b, c.a as f32 / 255.0)
}

pub fn to_point(v: Vec2) -> Point {
    Point::new(v.x, v.y)
}

pub fn to_size(v: Vec2) -> Size {
    Size::new(v.x, v.y)
}

pub fn from_point(p: Point) -> Vec2 {
    Vec2::new(p.x, p.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_conversion_keeps_alpha() {
        let c = to_color(Rgba::new(255, 0, 51, 51));
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.a - 0.2).abs() < 1e-6);
    }

    #[test]
    fn point_round_trip() {
        let v = Vec2::new(12.5, -3.0);
        assert_eq!(from_point(to_point(v)), v);
    }
}
