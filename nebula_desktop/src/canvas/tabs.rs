use iced::widget::canvas::{Frame, Path, Stroke};
use iced::{Font, Point};
use nebula_core::Tab;

use super::text::{approx_width, draw_line};
use crate::constants::{
    GLOW_INNER_SPREAD, GLOW_OUTER_FACTOR, GLOW_OUTER_SPREAD, TAB_BORDER_WIDTH, TAB_LABEL_SIZE,
};
use crate::theme::{to_color, to_point, to_size};

/// Draws one tab: glow halo, body, border, then label.
pub fn draw_tab(frame: &mut Frame, tab: &Tab, time: f32, font: Font) {
    if let Some(glow) = tab.glow_color() {
        let outer = tab.bounds.expand(GLOW_OUTER_SPREAD);
        frame.fill_rectangle(
            to_point(outer.position),
            to_size(outer.size),
            to_color(glow.scale_alpha(GLOW_OUTER_FACTOR)),
        );

        let inner = tab.bounds.expand(GLOW_INNER_SPREAD);
        frame.fill_rectangle(to_point(inner.position), to_size(inner.size), to_color(glow));
    }

    let body = Path::rectangle(to_point(tab.bounds.position), to_size(tab.bounds.size));
    frame.fill(&body, to_color(tab.body_color(time)));
    frame.stroke(
        &body,
        Stroke::default()
            .with_color(to_color(tab.border_color()))
            .with_width(TAB_BORDER_WIDTH),
    );

    // Center the label, then slide it right while hovered
    let width = approx_width(&tab.label, TAB_LABEL_SIZE);
    let x = tab.bounds.position.x + (tab.bounds.size.x - width) / 2.0 + tab.label_offset();
    let y = tab.bounds.position.y + (tab.bounds.size.y - TAB_LABEL_SIZE) / 2.0;
    draw_line(
        frame,
        &tab.label,
        Point::new(x, y),
        TAB_LABEL_SIZE,
        to_color(tab.label_color()),
        font,
    );
}
