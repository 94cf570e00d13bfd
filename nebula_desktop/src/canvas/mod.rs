mod menu_canvas;
mod panel;
mod particles;
mod starfield;
mod tabs;
mod text;

pub use menu_canvas::MenuCanvas;
pub use panel::draw_panel;
pub use particles::draw_particles;
pub use starfield::draw_starfield;
pub use tabs::draw_tab;
