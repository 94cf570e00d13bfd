//! Background starfield generated once at startup.

use rand::Rng;

use crate::geometry::{Rgba, Vec2};

pub const DEFAULT_STAR_COUNT: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Vec2,
    pub radius: f32,
    pub base_alpha: u8,
}

#[derive(Debug, Clone, Default)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    /// Scatters `count` stars uniformly over a `width` x `height` area.
    pub fn generate<R: Rng>(rng: &mut R, count: usize, width: f32, height: f32) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                position: Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height)),
                radius: rng.gen_range(0.5..2.5),
                base_alpha: rng.gen_range(100..=255),
            })
            .collect();
        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Star color at global `time`; depends only on time and index.
    pub fn star_color(&self, index: usize, time: f32) -> Option<Rgba> {
        let star = self.stars.get(index)?;
        Some(Rgba::WHITE.with_alpha(star.base_alpha).scale_alpha(twinkle(index, time)))
    }
}

/// Brightness multiplier in [0.4, 1.0].
pub fn twinkle(index: usize, time: f32) -> f32 {
    (time * 2.0 + index as f32 * 0.1).sin() * 0.3 + 0.7
}
