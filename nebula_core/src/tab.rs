//! Menu tab widget state: hover tracking, hover/glow animation, activation.

use crate::geometry::{Rect, Rgba, Vec2};

/// Rate at which the hover animation moves toward its target, in units/s.
pub const HOVER_ANIM_RATE: f32 = 3.0;
/// Halo color drawn behind a hovered tab.
pub const TAB_GLOW_COLOR: Rgba = Rgba::new(150, 200, 255, 100);
/// Per-channel brightening applied to the active tab.
pub const ACTIVE_BRIGHTEN: f32 = 1.3;

pub const TAB_COUNT: usize = 5;
pub const TAB_WIDTH: f32 = 200.0;
pub const TAB_HEIGHT: f32 = 80.0;
pub const TAB_SPACING: f32 = 10.0;
pub const TAB_LEFT: f32 = 20.0;
pub const TAB_TOP: f32 = 100.0;

/// Base colors of the five tabs, top to bottom.
pub const TAB_COLORS: [Rgba; TAB_COUNT] = [
    Rgba::rgb(50, 50, 100), // deep space blue
    Rgba::rgb(70, 50, 90),  // purple nebula
    Rgba::rgb(40, 70, 90),  // cosmic cyan
    Rgba::rgb(80, 50, 80),  // mystic purple
    Rgba::rgb(50, 70, 100), // stellar blue
];

/// A single clickable menu entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub bounds: Rect,
    pub label: String,
    pub base_color: Rgba,
    hovered: bool,
    active: bool,
    hover_anim: f32,
    glow_intensity: f32,
}

impl Tab {
    pub fn new(bounds: Rect, label: impl Into<String>, base_color: Rgba) -> Self {
        Self {
            bounds,
            label: label.into(),
            base_color,
            hovered: false,
            active: false,
            hover_anim: 0.0,
            glow_intensity: 0.0,
        }
    }

    /// Recomputes hover from `pointer` and advances the hover animation.
    ///
    /// Glow oscillates with the global clock `time`, not with `dt`.
    pub fn update(&mut self, dt: f32, pointer: Vec2, time: f32) {
        self.hovered = self.bounds.contains(pointer);

        if self.hovered {
            self.hover_anim = (self.hover_anim + HOVER_ANIM_RATE * dt).min(1.0);
            self.glow_intensity = (time * 3.0).sin() * 0.3 + 0.7;
        } else {
            self.hover_anim = (self.hover_anim - HOVER_ANIM_RATE * dt).max(0.0);
            self.glow_intensity = 0.0;
        }
    }

    /// Reports the hover flag from the last update. Press detection is the caller's job.
    pub fn is_clicked(&self) -> bool {
        self.hovered
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn hover_anim(&self) -> f32 {
        self.hover_anim
    }

    pub fn glow_intensity(&self) -> f32 {
        self.glow_intensity
    }

    /// Body fill: brightened when active, then modulated by a slow positional wave.
    pub fn body_color(&self, time: f32) -> Rgba {
        let wave = (time + self.bounds.position.y * 0.01).sin() * 0.15 + 0.85;
        let base = if self.active {
            self.base_color.scale_rgb(ACTIVE_BRIGHTEN)
        } else {
            self.base_color
        };
        base.scale_rgb(wave)
    }

    /// Halo color, or `None` when the tab is fully at rest.
    pub fn glow_color(&self) -> Option<Rgba> {
        if self.hover_anim <= 0.0 {
            return None;
        }
        Some(TAB_GLOW_COLOR.scale_alpha(self.hover_anim * self.glow_intensity))
    }

    pub fn border_color(&self) -> Rgba {
        Rgba::new(100, 150, 255, (100.0 + self.hover_anim * 155.0) as u8)
    }

    pub fn label_color(&self) -> Rgba {
        Rgba::WHITE.with_alpha((200.0 + self.hover_anim * 55.0) as u8)
    }

    /// Horizontal label slide while hovered.
    pub fn label_offset(&self) -> f32 {
        self.hover_anim * 5.0
    }
}

/// Rectangle of the tab at `index` in the fixed left-hand column.
pub fn tab_bounds(index: usize) -> Rect {
    Rect::new(
        TAB_LEFT,
        TAB_TOP + index as f32 * (TAB_HEIGHT + TAB_SPACING),
        TAB_WIDTH,
        TAB_HEIGHT,
    )
}

/// Point where ambient particles for the tab at `index` are emitted.
///
/// Sits ten units right of the tab's horizontal center.
pub fn tab_anchor(index: usize) -> Vec2 {
    Vec2::new(
        30.0 + TAB_WIDTH / 2.0,
        TAB_TOP + index as f32 * (TAB_HEIGHT + TAB_SPACING) + TAB_HEIGHT / 2.0,
    )
}

/// The five startup tabs.
pub fn default_tabs() -> Vec<Tab> {
    TAB_COLORS
        .iter()
        .enumerate()
        .map(|(i, color)| Tab::new(tab_bounds(i), format!("Tab {}", i + 1), *color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab() -> Tab {
        Tab::new(tab_bounds(0), "Tab 1", TAB_COLORS[0])
    }

    const INSIDE: Vec2 = Vec2::new(100.0, 140.0);
    const OUTSIDE: Vec2 = Vec2::new(600.0, 600.0);

    #[test]
    fn hover_is_recomputed_each_frame() {
        let mut t = tab();
        t.update(0.016, INSIDE, 0.0);
        assert!(t.is_hovered());
        assert!(t.is_clicked());
        t.update(0.016, OUTSIDE, 0.016);
        assert!(!t.is_hovered());
    }

    #[test]
    fn hover_anim_saturates_after_one_second() {
        let mut t = tab();
        for _ in 0..10 {
            t.update(0.1, INSIDE, 0.0);
            assert!((0.0..=1.0).contains(&t.hover_anim()));
        }
        assert_eq!(t.hover_anim(), 1.0);

        for _ in 0..10 {
            t.update(0.1, OUTSIDE, 0.0);
            assert!((0.0..=1.0).contains(&t.hover_anim()));
        }
        assert_eq!(t.hover_anim(), 0.0);
    }

    #[test]
    fn hover_anim_clamps_on_long_frames() {
        let mut t = tab();
        t.update(10.0, INSIDE, 0.0);
        assert_eq!(t.hover_anim(), 1.0);
        t.update(10.0, OUTSIDE, 0.0);
        assert_eq!(t.hover_anim(), 0.0);
    }

    #[test]
    fn glow_uses_global_time() {
        let mut t = tab();
        let time = 1.25;
        t.update(0.016, INSIDE, time);
        let expected = (time * 3.0).sin() * 0.3 + 0.7;
        assert!((t.glow_intensity() - expected).abs() < 1e-6);

        // Same time, different dt: same glow.
        t.update(0.05, INSIDE, time);
        assert!((t.glow_intensity() - expected).abs() < 1e-6);

        t.update(0.016, OUTSIDE, time);
        assert_eq!(t.glow_intensity(), 0.0);
    }

    #[test]
    fn activation_is_external_only() {
        let mut t = tab();
        t.update(1.0, INSIDE, 0.0);
        assert!(!t.is_active());
        t.set_active(true);
        assert!(t.is_active());
        t.update(1.0, OUTSIDE, 0.0);
        assert!(t.is_active());
    }

    #[test]
    fn active_body_is_brighter() {
        let mut t = tab();
        let idle = t.body_color(0.0);
        t.set_active(true);
        let active = t.body_color(0.0);
        assert!(active.r > idle.r && active.g > idle.g && active.b > idle.b);
    }

    #[test]
    fn glow_absent_at_rest() {
        let mut t = tab();
        assert!(t.glow_color().is_none());
        t.update(0.2, INSIDE, 0.0);
        let glow = t.glow_color().expect("hovered tab glows");
        assert!(glow.a <= TAB_GLOW_COLOR.a);
    }

    #[test]
    fn default_layout_matches_fixed_column() {
        let tabs = default_tabs();
        assert_eq!(tabs.len(), TAB_COUNT);
        assert_eq!(tabs[2].bounds, Rect::new(20.0, 280.0, 200.0, 80.0));
        assert_eq!(tabs[4].label, "Tab 5");
        assert_eq!(tab_anchor(1), Vec2::new(130.0, 230.0));
    }
}
