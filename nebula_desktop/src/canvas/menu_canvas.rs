use iced::mouse;
use iced::widget::canvas::{self, Geometry};
use iced::{Font, Point, Rectangle, Theme};
use nebula_core::scene::{BACKGROUND_COLOR, TITLE_SIZE, TITLE_TEXT};
use nebula_core::MenuScene;
use std::marker::PhantomData;

use super::panel::draw_panel;
use super::particles::draw_particles;
use super::starfield::draw_starfield;
use super::tabs::draw_tab;
use super::text::draw_line;
use crate::theme::{to_color, to_point};

/// Canvas program drawing the whole menu scene back to front.
pub struct MenuCanvas<'a, Message> {
    pub scene: &'a MenuScene,
    pub cache: &'a canvas::Cache,
    pub font: Font,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> MenuCanvas<'a, Message> {
    pub fn new(scene: &'a MenuScene, cache: &'a canvas::Cache, font: Font) -> Self {
        Self {
            scene,
            cache,
            font,
            _marker: PhantomData,
        }
    }
}

impl<'a, Message> canvas::Program<Message> for MenuCanvas<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let menu = self.cache.draw(renderer, bounds.size(), |frame| {
            let scene = self.scene;
            let time = scene.time();

            frame.fill_rectangle(Point::ORIGIN, bounds.size(), to_color(BACKGROUND_COLOR));

            draw_starfield(frame, &scene.stars, time);
            draw_particles(frame, &scene.particles);
            draw_panel(frame, &scene.panel, self.font);

            // Tabs go after particles and panel so they stay on top
            for tab in &scene.tabs {
                draw_tab(frame, tab, time, self.font);
            }

            draw_line(
                frame,
                TITLE_TEXT,
                to_point(scene.title_position()),
                TITLE_SIZE,
                to_color(scene.title_color()),
                self.font,
            );
        });
        vec![menu]
    }
}
