// Typography
pub const TAB_LABEL_SIZE: f32 = 18.0;
pub const PANEL_TITLE_SIZE: f32 = 24.0;
pub const PANEL_BODY_SIZE: f32 = 16.0;
pub const PANEL_LINE_HEIGHT: f32 = 1.35;
/// Rough advance width per character, as a fraction of the font size.
pub const GLYPH_WIDTH_RATIO: f32 = 0.55;

// Panel text offsets from the panel's top-left corner
pub const PANEL_TITLE_OFFSET: (f32, f32) = (20.0, 20.0);
pub const PANEL_BODY_OFFSET: (f32, f32) = (20.0, 60.0);

// Outlines
pub const TAB_BORDER_WIDTH: f32 = 2.0;
pub const PANEL_BORDER_WIDTH: f32 = 2.0;

// Glow halo around hovered tabs
pub const GLOW_INNER_SPREAD: f32 = 5.0;
pub const GLOW_OUTER_SPREAD: f32 = 10.0;
pub const GLOW_OUTER_FACTOR: f32 = 0.4;
