//! Nebula Desktop - the animated menu window built with Iced.

pub mod animation;
pub mod canvas;
pub mod constants;
pub mod theme;

pub use animation::FrameClock;
pub use canvas::MenuCanvas;
pub use constants::*;
pub use theme::{app_theme, palette, PaletteColors};
