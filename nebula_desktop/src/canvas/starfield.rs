use iced::widget::canvas::{Frame, Path};
use iced::Point;
use nebula_core::Starfield;

use crate::theme::to_color;

/// Twinkling background stars; brightness depends only on `time` and star index.
pub fn draw_starfield(frame: &mut Frame, stars: &Starfield, time: f32) {
    for (i, star) in stars.stars().iter().enumerate() {
        let Some(color) = stars.star_color(i, time) else {
            continue;
        };
        let center = Point::new(star.position.x + star.radius, star.position.y + star.radius);
        frame.fill(&Path::circle(center, star.radius), to_color(color));
    }
}
