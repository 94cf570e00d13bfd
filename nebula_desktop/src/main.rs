//! Nebula Desktop - Entry point for the Iced menu window.

use anyhow::Context;
use iced::event::{self, Event};
use iced::time::{self, Duration, Instant};
use iced::widget::canvas::{self, Canvas};
use iced::{mouse, window, Element, Font, Length, Point, Size, Subscription, Task};
use nebula_core::scene::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use nebula_core::{load_first_font, logger, LoadedFont, MenuConfig, MenuScene, Vec2};
use nebula_desktop::theme::from_point;
use nebula_desktop::{app_theme, FrameClock, MenuCanvas};

/// Application state.
struct App {
    scene: MenuScene,
    clock: FrameClock,
    /// Geometry for the current frame; cleared on every tick
    cache: canvas::Cache,
    font: Font,
    tick_interval: Duration,
}

/// Application messages.
#[derive(Debug, Clone)]
enum Message {
    Tick(Instant),
    PointerMoved(Point),
    PointerLeft,
    Pressed,
}

impl App {
    fn new(config: &MenuConfig, font: Font) -> Self {
        Self {
            scene: MenuScene::new(config),
            clock: FrameClock::default(),
            cache: canvas::Cache::default(),
            font,
            tick_interval: config.tick_interval(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => {
                let dt = self.clock.tick(now);
                self.scene.step(dt);
                self.cache.clear();
            }
            Message::PointerMoved(position) => {
                self.scene.pointer_moved(from_point(position));
            }
            Message::PointerLeft => {
                self.scene.pointer_moved(Vec2::new(-1.0, -1.0));
            }
            Message::Pressed => {
                let position = self.scene.pointer();
                if let Some(tab) = self.scene.press(position) {
                    tracing::info!(tab, "tab selected");
                }
            }
        }
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        let ticks = time::every(self.tick_interval).map(Message::Tick);
        let pointer = event::listen_with(pointer_event);
        Subscription::batch(vec![ticks, pointer])
    }

    fn view(&self) -> Element<'_, Message> {
        Canvas::new(MenuCanvas::<Message>::new(&self.scene, &self.cache, self.font))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Maps raw window events to the pointer input the menu reacts to.
fn pointer_event(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => Some(Message::PointerMoved(position)),
        Event::Mouse(mouse::Event::CursorLeft) => Some(Message::PointerLeft),
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => Some(Message::Pressed),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    if let Err(err) = logger::init_global_logger() {
        eprintln!("Failed to initialize logger: {err}");
    }

    let config = MenuConfig::load_or_default().context("loading menu configuration")?;
    tracing::info!(
        frame_rate = config.frame_rate,
        stars = config.star_count,
        max_particles = ?config.max_particles,
        "configuration loaded"
    );

    let LoadedFont { family, bytes, .. } = load_first_font(&config.font_candidates)
        .inspect_err(|err| tracing::error!(%err, "cannot start without a font"))?;
    // Iced needs a 'static family name; leaked once at startup.
    let font = Font::with_name(Box::leak(family.into_boxed_str()));

    fn get_theme(_: &App) -> iced::Theme {
        app_theme()
    }

    let boot = move || (App::new(&config, font), Task::none());

    iced::application(boot, App::update, App::view)
        .title(WINDOW_TITLE)
        .window_size(Size::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .resizable(false)
        .subscription(App::subscription)
        .theme(get_theme)
        .font(bytes)
        .default_font(font)
        .antialiasing(true)
        .run()?;

    Ok(())
}
