//! Frame driver state: owns every component and advances them once per frame.
//!
//! The windowing layer feeds pointer events and frame deltas into
//! [`MenuScene`]; rendering reads the scene back without mutating it.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::MenuConfig;
use crate::geometry::{Rgba, Vec2};
use crate::panel::FeaturePanel;
use crate::particles::ParticleStore;
use crate::stars::Starfield;
use crate::tab::{default_tabs, tab_anchor, Tab};

pub const WINDOW_WIDTH: f32 = 1200.0;
pub const WINDOW_HEIGHT: f32 = 800.0;
pub const WINDOW_TITLE: &str = "\u{2728} Euphoric Spacy Magical Menu \u{2728}";

pub const BACKGROUND_COLOR: Rgba = Rgba::rgb(10, 10, 25);

/// Particles spawned at the pointer when a tab is clicked.
pub const CLICK_BURST: usize = 20;
pub const CLICK_COLOR: Rgba = Rgba::rgb(150, 200, 255);

/// Seconds between ambient emissions from the active tab.
pub const AMBIENT_INTERVAL: f32 = 0.1;
pub const AMBIENT_COLOR: Rgba = Rgba::new(200, 220, 255, 150);

pub const TITLE_TEXT: &str = "\u{2728} EUPHORIC SPACY MAGICAL MENU \u{2728}";
pub const TITLE_POSITION: Vec2 = Vec2::new(250.0, 20.0);
pub const TITLE_SIZE: f32 = 32.0;

/// All mutable menu state.
#[derive(Debug)]
pub struct MenuScene {
    pub tabs: Vec<Tab>,
    pub panel: FeaturePanel,
    pub particles: ParticleStore,
    pub stars: Starfield,
    time: f32,
    emit_timer: f32,
    pointer: Vec2,
    ambient_emission: bool,
}

impl MenuScene {
    pub fn new(config: &MenuConfig) -> Self {
        let mut rng = StdRng::from_entropy();
        let stars = Starfield::generate(&mut rng, config.star_count, WINDOW_WIDTH, WINDOW_HEIGHT);
        Self::assemble(config, stars, ParticleStore::new(config.max_particles))
    }

    /// Deterministic scene for tests and reproducible captures.
    pub fn with_seed(config: &MenuConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let stars = Starfield::generate(&mut rng, config.star_count, WINDOW_WIDTH, WINDOW_HEIGHT);
        Self::assemble(
            config,
            stars,
            ParticleStore::with_seed(seed.wrapping_add(1), config.max_particles),
        )
    }

    fn assemble(config: &MenuConfig, stars: Starfield, particles: ParticleStore) -> Self {
        Self {
            tabs: default_tabs(),
            panel: FeaturePanel::default(),
            particles,
            stars,
            time: 0.0,
            emit_timer: 0.0,
            pointer: Vec2::new(-1.0, -1.0),
            ambient_emission: config.ambient_emission,
        }
    }

    pub fn pointer_moved(&mut self, position: Vec2) {
        self.pointer = position;
    }

    /// Handles a left-button press at `position`.
    ///
    /// Every tab hovered as of the last [`step`](Self::step) counts as
    /// clicked. Returns the index of the tab left active, if any matched.
    pub fn press(&mut self, position: Vec2) -> Option<usize> {
        self.pointer = position;

        let clicked: Vec<usize> = self
            .tabs
            .iter()
            .enumerate()
            .filter(|(_, tab)| tab.is_clicked())
            .map(|(i, _)| i)
            .collect();

        for &index in &clicked {
            for tab in &mut self.tabs {
                tab.set_active(false);
            }
            self.tabs[index].set_active(true);
            self.panel.set_active_tab(index);

            let spawned = self.particles.burst(position, CLICK_COLOR, CLICK_BURST);
            tracing::debug!(tab = index, spawned, "tab activated");
        }

        clicked.last().copied()
    }

    /// Advances the simulation by `dt` seconds of real time.
    pub fn step(&mut self, dt: f32) {
        self.time += dt;

        for tab in &mut self.tabs {
            tab.update(dt, self.pointer, self.time);
        }
        self.panel.update(dt);
        self.particles.update(dt);

        self.emit_timer += dt;
        if self.emit_timer > AMBIENT_INTERVAL {
            if self.ambient_emission {
                self.emit_ambient();
            }
            self.emit_timer = 0.0;
        }
    }

    fn emit_ambient(&mut self) {
        for (index, tab) in self.tabs.iter().enumerate() {
            if tab.is_active() {
                self.particles.emit(tab_anchor(index), AMBIENT_COLOR);
            }
        }
    }

    /// Seconds of simulated time since startup.
    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn active_tab(&self) -> Option<usize> {
        self.tabs.iter().position(Tab::is_active)
    }

    pub fn active_count(&self) -> usize {
        self.tabs.iter().filter(|t| t.is_active()).count()
    }

    pub fn title_color(&self) -> Rgba {
        let alpha = 200.0 + (self.time * 2.0).sin() * 55.0;
        Rgba::rgb(200, 220, 255).with_alpha(alpha as u8)
    }

    /// Title position with a gentle vertical float.
    pub fn title_position(&self) -> Vec2 {
        TITLE_POSITION + Vec2::new(0.0, (self.time * 1.5).sin() * 4.0)
    }
}
