//! Nebula Core - simulation state for the animated nebula menu.
//!
//! Nothing here knows about windows or renderers: the desktop crate feeds
//! pointer events and frame deltas into [`MenuScene`] and draws what it reads back.

pub mod config;
pub mod error;
pub mod fonts;
pub mod geometry;
pub mod logger;
pub mod panel;
pub mod particles;
pub mod scene;
pub mod stars;
pub mod tab;

pub use config::{FontCandidate, MenuConfig};
pub use error::{MenuError, MenuResult};
pub use fonts::{load_first_font, LoadedFont};
pub use geometry::{Rect, Rgba, Vec2};
pub use panel::{FeaturePanel, OrbitMarker, PanelContent};
pub use particles::{Particle, ParticleStore};
pub use scene::MenuScene;
pub use stars::{Star, Starfield};
pub use tab::Tab;
