//! Small value types shared by the simulation: vectors, rectangles, colors.

use std::ops::{Add, AddAssign, Mul, Sub};

/// A 2D float vector in window coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Unit vector at `angle` radians scaled by `length`.
    pub fn from_polar(angle: f32, length: f32) -> Self {
        Self::new(angle.cos() * length, angle.sin() * length)
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub position: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Inclusive containment on all four edges.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.position.x
            && point.x <= self.position.x + self.size.x
            && point.y >= self.position.y
            && point.y <= self.position.y + self.size.y
    }

    /// Grows the rectangle by `amount` on every side.
    pub fn expand(&self, amount: f32) -> Rect {
        Rect {
            position: self.position - Vec2::new(amount, amount),
            size: self.size + Vec2::new(amount * 2.0, amount * 2.0),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }
}

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Returns the same color with a replaced alpha channel.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Multiplies the color channels (not alpha) by `factor`, saturating at 255.
    pub fn scale_rgb(self, factor: f32) -> Self {
        Self {
            r: scale_channel(self.r, factor),
            g: scale_channel(self.g, factor),
            b: scale_channel(self.b, factor),
            a: self.a,
        }
    }

    /// Multiplies alpha by `factor`, saturating at 255.
    pub fn scale_alpha(self, factor: f32) -> Self {
        Self {
            a: scale_channel(self.a, factor),
            ..self
        }
    }
}

/// Truncating channel multiply; negative results clamp to 0.
pub fn scale_channel(channel: u8, factor: f32) -> u8 {
    (channel as f32 * factor).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_edges() {
        let r = Rect::new(20.0, 100.0, 200.0, 80.0);
        assert!(r.contains(Vec2::new(20.0, 100.0)));
        assert!(r.contains(Vec2::new(220.0, 180.0)));
        assert!(!r.contains(Vec2::new(220.1, 150.0)));
        assert!(!r.contains(Vec2::new(19.9, 150.0)));
    }

    #[test]
    fn rect_expand_and_center() {
        let r = Rect::new(20.0, 100.0, 200.0, 80.0).expand(5.0);
        assert_eq!(r, Rect::new(15.0, 95.0, 210.0, 90.0));
        assert_eq!(r.center(), Vec2::new(120.0, 140.0));
    }

    #[test]
    fn scale_rgb_saturates() {
        let c = Rgba::rgb(200, 100, 10).scale_rgb(1.5);
        assert_eq!(c, Rgba::rgb(255, 150, 15));
    }

    #[test]
    fn scale_alpha_keeps_channels() {
        let c = Rgba::new(150, 200, 255, 100).scale_alpha(0.5);
        assert_eq!(c, Rgba::new(150, 200, 255, 50));
    }

    #[test]
    fn polar_vector_has_requested_length() {
        let v = Vec2::from_polar(1.1, 42.0);
        assert!((v.length() - 42.0).abs() < 1e-4);
    }
}
