mod app_theme;
mod palette;

pub use app_theme::app_theme;
pub use palette::{from_point, palette, to_color, to_point, to_size, PaletteColors};
