//! Feature panel: static content for the selected tab with a fade-in clock.

use std::f32::consts::TAU;

use crate::geometry::{Rect, Rgba, Vec2};

pub const PANEL_BOUNDS: Rect = Rect::new(260.0, 100.0, 900.0, 650.0);
pub const PANEL_FILL: Rgba = Rgba::new(20, 20, 40, 200);
pub const PANEL_BORDER: Rgba = Rgba::new(100, 150, 255, 150);
pub const PANEL_TITLE_COLOR: Rgba = Rgba::rgb(200, 220, 255);
pub const PANEL_TEXT_COLOR: Rgba = Rgba::rgb(180, 200, 240);
pub const MARKER_COUNT: usize = 5;
pub const MARKER_RADIUS: f32 = 3.0;

/// Title, tagline and bullet list shown for one tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelContent {
    pub title: &'static str,
    pub tagline: &'static str,
    pub bullets: [&'static str; 4],
}

impl PanelContent {
    /// Tagline followed by a blank line and the bulleted features.
    pub fn body(&self) -> String {
        let mut body = format!("{}\n", self.tagline);
        for bullet in &self.bullets {
            body.push_str("\n\u{2022} ");
            body.push_str(bullet);
        }
        body
    }
}

pub const PANEL_CONTENT: [PanelContent; 5] = [
    PanelContent {
        title: "\u{2728} Cosmic Harmony",
        tagline: "Experience the symphony of the universe.",
        bullets: [
            "Stellar resonance patterns",
            "Quantum entanglement visualizer",
            "Nebula color palette generator",
            "Gravitational wave detector",
        ],
    },
    PanelContent {
        title: "\u{1F31F} Ethereal Dreams",
        tagline: "Journey through dimensions unknown.",
        bullets: [
            "Dream sequence analyzer",
            "Astral projection simulator",
            "Consciousness expansion tools",
            "Reality distortion field",
        ],
    },
    PanelContent {
        title: "\u{1F30C} Celestial Wonders",
        tagline: "Discover the mysteries of space.",
        bullets: [
            "Black hole observation deck",
            "Supernova birth tracker",
            "Cosmic ray analyzer",
            "Dark matter detector",
        ],
    },
    PanelContent {
        title: "\u{1F4AB} Quantum Magic",
        tagline: "Bend reality with quantum mechanics.",
        bullets: [
            "Probability wave manipulator",
            "Superposition state viewer",
            "Quantum teleportation pad",
            "Schr\u{f6}dinger's simulator",
        ],
    },
    PanelContent {
        title: "\u{1F52E} Mystic Portal",
        tagline: "Open gateways to other realms.",
        bullets: [
            "Interdimensional gateway",
            "Timeline browser",
            "Parallel universe viewer",
            "Temporal anomaly detector",
        ],
    },
];

/// Content for `index`, or `None` outside the five known tabs.
pub fn panel_content(index: usize) -> Option<&'static PanelContent> {
    PANEL_CONTENT.get(index)
}

/// One orbiting decoration in the panel's top-right corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitMarker {
    pub center: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeaturePanel {
    pub bounds: Rect,
    active_tab: Option<usize>,
    clock: f32,
}

impl Default for FeaturePanel {
    fn default() -> Self {
        Self::new(PANEL_BOUNDS)
    }
}

impl FeaturePanel {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            active_tab: None,
            clock: 0.0,
        }
    }

    /// Selects a tab and restarts the fade-in.
    pub fn set_active_tab(&mut self, index: usize) {
        self.active_tab = Some(index);
        self.clock = 0.0;
    }

    pub fn update(&mut self, dt: f32) {
        if self.active_tab.is_some() {
            self.clock += dt;
        }
    }

    pub fn active_tab(&self) -> Option<usize> {
        self.active_tab
    }

    /// Seconds since the last activation.
    pub fn clock(&self) -> f32 {
        self.clock
    }

    /// Content to render, `None` when nothing (or an unknown index) is selected.
    pub fn content(&self) -> Option<&'static PanelContent> {
        self.active_tab.and_then(panel_content)
    }

    /// Content fade fraction: full opacity half a second after activation.
    pub fn fade_alpha(&self) -> f32 {
        (self.clock * 2.0).min(1.0)
    }

    /// Body text color with the fade applied.
    pub fn body_color(&self) -> Rgba {
        PANEL_TEXT_COLOR.scale_alpha(self.fade_alpha())
    }

    /// Decorative markers orbiting a point near the top-right corner.
    pub fn markers(&self) -> [OrbitMarker; MARKER_COUNT] {
        let hub = Vec2::new(
            self.bounds.position.x + self.bounds.size.x - 60.0,
            self.bounds.position.y + 60.0,
        );
        std::array::from_fn(|i| {
            let phase = i as f32;
            let angle = self.clock * 0.5 + phase * (TAU / MARKER_COUNT as f32);
            let distance = 30.0 + (self.clock * 2.0 + phase).sin() * 10.0;
            let alpha = 150.0 + (self.clock * 3.0 + phase).sin() * 105.0;
            OrbitMarker {
                center: hub + Vec2::from_polar(angle, distance),
                radius: MARKER_RADIUS,
                color: Rgba::new(255, 255, 200, alpha.clamp(0.0, 255.0) as u8),
            }
        })
    }
}
