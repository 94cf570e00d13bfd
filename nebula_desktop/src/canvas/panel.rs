use iced::widget::canvas::{Frame, Path, Stroke};
use iced::{Font, Point};
use nebula_core::panel::{PANEL_BORDER, PANEL_FILL, PANEL_TITLE_COLOR};
use nebula_core::FeaturePanel;

use super::text::{draw_block, draw_line};
use crate::constants::{
    PANEL_BODY_OFFSET, PANEL_BODY_SIZE, PANEL_BORDER_WIDTH, PANEL_LINE_HEIGHT, PANEL_TITLE_OFFSET,
    PANEL_TITLE_SIZE,
};
use crate::theme::{to_color, to_point, to_size};

/// Draws the feature panel for the selected tab. Nothing is drawn without a selection.
pub fn draw_panel(frame: &mut Frame, panel: &FeaturePanel, font: Font) {
    let Some(content) = panel.content() else {
        return;
    };

    let origin = panel.bounds.position;
    let body = Path::rectangle(to_point(origin), to_size(panel.bounds.size));
    frame.fill(&body, to_color(PANEL_FILL));
    frame.stroke(
        &body,
        Stroke::default()
            .with_color(to_color(PANEL_BORDER))
            .with_width(PANEL_BORDER_WIDTH),
    );

    draw_line(
        frame,
        content.title,
        Point::new(origin.x + PANEL_TITLE_OFFSET.0, origin.y + PANEL_TITLE_OFFSET.1),
        PANEL_TITLE_SIZE,
        to_color(PANEL_TITLE_COLOR),
        font,
    );

    draw_block(
        frame,
        &content.body(),
        Point::new(origin.x + PANEL_BODY_OFFSET.0, origin.y + PANEL_BODY_OFFSET.1),
        PANEL_BODY_SIZE,
        PANEL_LINE_HEIGHT,
        to_color(panel.body_color()),
        font,
    );

    for marker in panel.markers() {
        frame.fill(
            &Path::circle(to_point(marker.center), marker.radius),
            to_color(marker.color),
        );
    }
}
