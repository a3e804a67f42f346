//! Vitae Desktop - Entry point for the Iced résumé viewer.

use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

use chrono::Local;
use clap::Parser;
use iced::alignment::{Horizontal, Vertical};
use iced::time::{self, Duration};
use iced::widget::canvas::{self, Canvas};
use iced::widget::{button, column, container, image, scrollable, stack, text};
use iced::{event, keyboard, mouse, window};
use iced::{Background, Color, Element, Length, Point, Size, Subscription, Task, Theme};
use iced_fonts::bootstrap;
use tracing::{debug, info, warn};

use vitae_core::animation::Vec2;
use vitae_core::bindings::{ElementKey, ViewBindings};
use vitae_core::context::{MotionPreference, SiteContext};
use vitae_core::navigation::{KeyModifiers, MemoryLocation, NavKey};
use vitae_core::utils::config::{Config, SectionKind};
use vitae_core::utils::logger::{default_log_dir, init_global_logger};
use vitae_core::{Site, SiteEvent};
use vitae_desktop::canvas::{LoadingSpinner, ParticleOverlay, SpinnerState};
use vitae_desktop::layout::tilt_card_size;
use vitae_desktop::styles::{page_style, scroll_top_button_style};
use vitae_desktop::views::{self, PageView};
use vitae_desktop::{
    app_theme_with_palette, palette_for, resolve_mode, Args, Message, PaletteColors, PageLayout,
    LOADER_SIZE, NAV_BAR_HEIGHT, SPINNER_SPEED, TICK_INTERVAL_MS, WINDOW_HEIGHT, WINDOW_WIDTH,
};

/// Application state.
struct App {
    /// `None` only when even the bundled résumé failed to load.
    site: Option<Site>,
    layout: PageLayout,
    palette: PaletteColors,
    theme: Theme,
    title: String,
    started: Instant,
    window_size: Size,
    photo: Option<image::Handle>,
    /// Particle frame replay; cleared when a new frame is recorded.
    overlay_cache: canvas::Cache,
    /// Last element-local pointer per hovered element, for ripple origins.
    hover_points: HashMap<ElementKey, Point>,
    spinner_tick: f32,
    /// Keeps the tick subscription alive while something moves.
    animating: bool,
    /// Startup fallback notice shown in the status line.
    status_error: Option<String>,
    /// Error message if initialization failed
    init_error: Option<String>,
}

fn page_id() -> iced::widget::Id {
    iced::widget::Id::new("page")
}

fn scroll_page(y: f32) -> Task<Message> {
    iced::widget::operation::scroll_to(page_id(), scrollable::AbsoluteOffset { x: 0.0, y })
}

/// Maps runtime events the page reacts to. Plain fn so it can back
/// `event::listen_with`.
fn runtime_event(event: iced::Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        iced::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            let keyboard::Key::Named(named) = key else {
                return None;
            };
            let nav_key = match named {
                keyboard::key::Named::ArrowLeft => NavKey::ArrowLeft,
                keyboard::key::Named::ArrowRight => NavKey::ArrowRight,
                keyboard::key::Named::ArrowUp => NavKey::ArrowUp,
                keyboard::key::Named::ArrowDown => NavKey::ArrowDown,
                keyboard::key::Named::Escape => NavKey::Escape,
                _ => return None,
            };
            Some(Message::Key(
                nav_key,
                KeyModifiers {
                    command: modifiers.command(),
                    alt: modifiers.alt(),
                },
            ))
        }
        iced::Event::Window(window::Event::Resized(size)) => Some(Message::Resized(size)),
        iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        iced::Event::Mouse(mouse::Event::CursorLeft) => Some(Message::PointerLeft),
        _ => None,
    }
}

/// The page area below the nav bar, which is also the particle surface.
fn page_viewport(window: Size) -> Vec2 {
    Vec2::new(window.width, (window.height - NAV_BAR_HEIGHT).max(0.0))
}

/// Résumé named on the command line, else the user's file, else the bundled
/// one. A broken `--config` falls back with a status line notice.
fn load_config(args: &Args) -> anyhow::Result<(Config, Option<String>)> {
    let Some(path) = &args.config else {
        return Ok((Config::load_or_default()?, None));
    };
    match Config::load_from_file(path) {
        Ok(config) => {
            info!(path = %path.display(), "loaded résumé");
            Ok((config, None))
        }
        Err(e) => {
            warn!("falling back to bundled résumé: {:#}", e);
            let notice = format!("No se pudo cargar {}: {}", path.display(), e);
            Ok((Config::bundled()?, Some(notice)))
        }
    }
}

fn profile_photo(config: &Config) -> Option<image::Handle> {
    let path = config.personal.photo.as_deref()?;
    if Path::new(path).is_file() {
        Some(image::Handle::from_path(path))
    } else {
        info!(path, "profile image not found, showing initials");
        None
    }
}

impl App {
    /// Initializes the application. Shows error dialog if initialization fails.
    fn init(args: &Args) -> (Self, Task<Message>) {
        match Self::try_init(args) {
            Ok(mut app) => {
                let task = app.start();
                (app, task)
            }
            Err(err) => {
                eprintln!("Initialization error: {err:#}");
                (Self::error_state(format!("{err:#}")), Task::none())
            }
        }
    }

    fn try_init(args: &Args) -> anyhow::Result<Self> {
        let (config, status_error) = load_config(args)?;
        let host_motion = if args.reduced_motion {
            MotionPreference::Reduced
        } else {
            MotionPreference::from_env()
        };

        let mode = resolve_mode(args.theme, &config.theme);
        let palette = palette_for(mode, &config.theme);
        let photo = profile_photo(&config);
        let window_size = Size::new(WINDOW_WIDTH, WINDOW_HEIGHT);
        let viewport = page_viewport(window_size);

        let bindings = ViewBindings::new()
            .with_nav_links(config.sections.iter().map(|s| s.id.clone()))
            .with_menu_toggle(true)
            .with_scroll_to_top(true)
            .with_live_region(true)
            .with_particle_surface(Some(viewport))
            .with_profile_image(photo.is_some())
            .with_loader(true)
            .with_typewriter_target(true)
            .with_skill_bars(true);

        let title = config.personal.name.clone();
        let ctx = SiteContext::new(config, host_motion);
        let location = MemoryLocation::new(args.initial_fragment().as_deref());
        let site = Site::new(ctx, &bindings, location, viewport, &mut rand::thread_rng(), 0);
        info!(theme = mode.name(), "window ready");

        Ok(Self {
            site: Some(site),
            layout: PageLayout::default(),
            palette,
            theme: app_theme_with_palette(palette),
            title,
            started: Instant::now(),
            window_size,
            photo,
            overlay_cache: canvas::Cache::new(),
            hover_points: HashMap::new(),
            spinner_tick: 0.0,
            animating: true,
            status_error,
            init_error: None,
        })
    }

    fn error_state(error: String) -> Self {
        let palette = PaletteColors::default();
        Self {
            site: None,
            layout: PageLayout::default(),
            palette,
            theme: app_theme_with_palette(palette),
            title: "Vitae".to_string(),
            started: Instant::now(),
            window_size: Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            photo: None,
            overlay_cache: canvas::Cache::new(),
            hover_points: HashMap::new(),
            spinner_tick: 0.0,
            animating: false,
            status_error: None,
            init_error: Some(error),
        }
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    /// Lays out the page and starts load-time effects.
    fn start(&mut self) -> Task<Message> {
        let now = self.now_ms();
        self.relayout(now);
        let events = match self.site.as_mut() {
            Some(site) => site.start(now),
            None => Vec::new(),
        };
        self.apply(events, now)
    }

    /// Recomputes geometry for the current active section and hands it to
    /// the scroll spy and the reveal tracker.
    fn relayout(&mut self, now: u64) {
        let Some(site) = self.site.as_mut() else {
            return;
        };
        let layout = PageLayout::compute(site.context().config(), site.navigation().sections());
        site.set_layout(layout.sections.clone(), layout.spans.clone(), now);
        self.layout = layout;
    }

    /// Carries out site events: relayout and scroll on section changes.
    fn apply(&mut self, events: Vec<SiteEvent>, now: u64) -> Task<Message> {
        let mut tasks = Vec::new();
        for event in events {
            match event {
                SiteEvent::ScrollToSection(id) => {
                    self.relayout(now);
                    if let Some(y) = self.layout.scroll_target(&id) {
                        tasks.push(scroll_page(y));
                    }
                }
                SiteEvent::ScrollTo(y) => tasks.push(scroll_page(y)),
                SiteEvent::SetTitle(title) => self.title = title,
                SiteEvent::Announce(text) => debug!(announcement = %text, "live region"),
            }
        }
        Task::batch(tasks)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = self.now_ms();
        let window_width = self.window_size.width;
        let Some(site) = self.site.as_mut() else {
            return Task::none();
        };

        let events = match message {
            Message::Tick => {
                self.spinner_tick += SPINNER_SPEED * TICK_INTERVAL_MS as f32;
                let loading = site.engine().loader_alpha(now) > 0.0;
                self.animating = site.tick(now) || loading;
                return Task::none();
            }
            Message::ParticleFrame(token) => {
                if site.particle_frame(token, now) {
                    self.overlay_cache.clear();
                }
                return Task::none();
            }
            Message::CloseRequested(id) => {
                site.teardown();
                return window::close(id);
            }
            Message::NavClicked(id) => site.click_link(&id, now),
            Message::Key(key, modifiers) => site.key(key, modifiers, now),
            Message::ToggleMenu => {
                site.toggle_menu();
                Vec::new()
            }
            Message::OutsideClick => {
                site.outside_click();
                Vec::new()
            }
            Message::Scrolled(viewport) => {
                site.scroll(viewport.absolute_offset().y, now);
                Vec::new()
            }
            Message::ScrollTop => site.scroll_to_top(),
            Message::Resized(size) => {
                self.window_size = size;
                site.resize(page_viewport(size), now);
                self.overlay_cache.clear();
                Vec::new()
            }
            Message::PointerMoved(position) => {
                let pointer = (position.y >= NAV_BAR_HEIGHT)
                    .then(|| Vec2::new(position.x, position.y - NAV_BAR_HEIGHT));
                site.pointer_moved(pointer);
                return Task::none();
            }
            Message::PointerLeft => {
                site.pointer_moved(None);
                return Task::none();
            }
            Message::ElementEntered(key) => {
                site.engine_mut().hover_enter(key, now);
                Vec::new()
            }
            Message::ElementMoved(key, point) => {
                self.hover_points.insert(key.clone(), point);
                if is_tilt_target(site, &key) {
                    site.engine_mut().hover_move(
                        key,
                        Vec2::new(point.x, point.y),
                        tilt_card_size(window_width),
                    );
                }
                Vec::new()
            }
            Message::ElementLeft(key) => {
                self.hover_points.remove(&key);
                site.engine_mut().hover_leave(&key);
                Vec::new()
            }
            Message::LinkPressed(key, url) => {
                let origin = self
                    .hover_points
                    .get(&key)
                    .map_or(Vec2::ZERO, |p| Vec2::new(p.x, p.y));
                site.engine_mut().ripple(key, origin, now);
                if let Err(e) = open::that(&url) {
                    warn!(url = %url, "could not open link: {}", e);
                }
                Vec::new()
            }
        };

        self.animating = true;
        self.apply(events, now)
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![
            event::listen_with(runtime_event),
            window::close_requests().map(Message::CloseRequested),
        ];
        if let Some(site) = &self.site {
            if self.animating || site.has_pending_input() {
                subscriptions.push(
                    time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(|_| Message::Tick),
                );
            }
            if let Some(token) = site.particle_token() {
                subscriptions.push(
                    window::frames()
                        .with(token)
                        .map(|(token, _at)| Message::ParticleFrame(token)),
                );
            }
        }
        Subscription::batch(subscriptions)
    }

    fn view(&self) -> Element<'_, Message> {
        let pal = self.palette;
        let Some(site) = &self.site else {
            let error = self.init_error.as_deref().unwrap_or("unknown error");
            return self.error_view(error, pal);
        };
        let now = self.now_ms();
        let nav = site.navigation();

        let page_view = PageView {
            site,
            layout: &self.layout,
            palette: pal,
            now_ms: now,
            today: Local::now().date_naive(),
            photo: self.photo.as_ref(),
            viewport: site.viewport(),
        };
        let page = scrollable(views::page(&page_view))
            .id(page_id())
            .on_scroll(Message::Scrolled)
            .width(Length::Fill)
            .height(Length::Fill);

        let mut body: Vec<Element<'_, Message>> = Vec::new();
        if let Some(particles) = site.engine().particles() {
            let cursor = particles.field().cursor();
            body.push(
                Canvas::new(ParticleOverlay::<Message>::new(
                    site.engine().surface(),
                    &self.overlay_cache,
                    cursor,
                ))
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            );
        }
        body.push(page.into());
        if nav.menu_progress() > 0.01 {
            body.push(views::mobile_menu(site, pal));
        }
        if nav.scroll_to_top_visible() {
            body.push(self.scroll_top_button(pal));
        }

        let layout = column![
            views::nav_bar(site, pal, self.status_error.as_deref()),
            stack(body).width(Length::Fill).height(Length::Fill),
        ];
        let mut layers: Vec<Element<'_, Message>> = vec![container(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(page_style(pal))
            .into()];

        let loader = site.engine().loader_alpha(now);
        if loader > 0.0 {
            layers.push(self.loader_view(pal, loader));
        }
        stack(layers).into()
    }

    fn scroll_top_button(&self, pal: PaletteColors) -> Element<'_, Message> {
        container(
            button(
                container(bootstrap::arrow_up().size(20))
                    .center_x(Length::Fill)
                    .center_y(Length::Fill),
            )
            .on_press(Message::ScrollTop)
            .width(Length::Fixed(44.0))
            .height(Length::Fixed(44.0))
            .style(scroll_top_button_style(pal)),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .padding(24)
        .into()
    }

    fn loader_view(&self, pal: PaletteColors, alpha: f32) -> Element<'_, Message> {
        let spinner = Canvas::new(LoadingSpinner::new(SpinnerState {
            tick: self.spinner_tick,
            size: LOADER_SIZE,
            color: pal.accent,
            alpha,
        }))
        .width(Length::Fixed(LOADER_SIZE * 2.0))
        .height(Length::Fixed(LOADER_SIZE * 2.0));

        container(spinner)
            .center(Length::Fill)
            .style(move |_| container::Style {
                background: Some(Background::Color(Color {
                    a: alpha,
                    ..pal.background
                })),
                ..Default::default()
            })
            .into()
    }

    fn error_view(&self, error: &str, pal: PaletteColors) -> Element<'_, Message> {
        let error_text = error.to_string();
        container(
            column![
                text("No se pudo iniciar Vitae")
                    .size(32)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(pal.danger)
                    }),
                text(error_text)
                    .size(16)
                    .style(move |_| iced::widget::text::Style {
                        color: Some(pal.text)
                    }),
            ]
            .spacing(16)
            .align_x(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(move |_| container::Style {
            background: Some(Background::Color(pal.background)),
            ..Default::default()
        })
        .into()
    }
}

fn is_tilt_target(site: &Site, key: &ElementKey) -> bool {
    key.section()
        .and_then(|id| site.navigation().sections().get(id))
        .is_some_and(|s| s.kind == SectionKind::Certifications)
}

fn main() -> iced::Result {
    let args = Args::parse();
    if let Err(e) = init_global_logger(Some(&default_log_dir())) {
        eprintln!("Failed to initialize logger: {e}");
    }

    iced::application(move || App::init(&args), App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .theme(App::theme)
        .font(iced_fonts::BOOTSTRAP_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            exit_on_close_request: false,
            ..Default::default()
        })
        .run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn page_viewport_excludes_nav_bar() {
        let viewport = page_viewport(Size::new(1200.0, 800.0));
        assert_eq!(viewport, Vec2::new(1200.0, 800.0 - NAV_BAR_HEIGHT));
        assert_eq!(page_viewport(Size::new(300.0, 20.0)).y, 0.0);
    }

    #[test]
    fn window_events_map_to_messages() {
        let id = window::Id::unique();
        let resized = runtime_event(
            iced::Event::Window(window::Event::Resized(Size::new(640.0, 480.0))),
            event::Status::Ignored,
            id,
        );
        assert!(matches!(resized, Some(Message::Resized(size)) if size.width == 640.0));

        let left = runtime_event(
            iced::Event::Mouse(mouse::Event::CursorLeft),
            event::Status::Ignored,
            id,
        );
        assert!(matches!(left, Some(Message::PointerLeft)));

        let wheel = runtime_event(
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            event::Status::Ignored,
            id,
        );
        assert!(wheel.is_none());
    }
}
