// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the storefront pages.
//!
//! The `App` struct owns the catalog and theme stores, the on-device storage
//! and the per-page state, and translates page events into route changes,
//! store mutations and persistence.

mod message;
pub mod paths;
mod persistence;
pub mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::{Link, Route};

use crate::config::{self, Config};
use crate::domain::catalog::seed;
use crate::domain::clock::{Clock, MonotonicClock};
use crate::domain::content;
use crate::domain::slider::SlideDeck;
use crate::i18n::fluent::I18n;
use crate::store::{CatalogStore, FileStore, ThemeFlag, ThemeStore};
use crate::ui::theming;
use crate::ui::{home, navbar, notifications, product};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Explicit config directory, when given on the command line.
    config_dir: Option<PathBuf>,
    route: Route,
    navbar: navbar::State,
    /// Mounted only while the home route is shown.
    home: Option<home::State>,
    hero_deck: Option<SlideDeck>,
    product: product::State,
    catalog: CatalogStore,
    theme: ThemeStore,
    storage: FileStore,
    clock: MonotonicClock,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("home_mounted", &self.home.is_some())
            .field("theme", &self.theme.theme())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 820;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 960;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot function to be `Fn`; flags are consumed
    // on the first call and later calls boot with defaults.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the CLI flags and the persisted
    /// configuration and storage.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let (storage, storage_warning) = FileStore::open(flags.data_dir.map(PathBuf::from));

        let i18n = I18n::new(flags.lang, &config);
        let theme = ThemeStore::new(ThemeFlag::from_mode(config.general.theme_mode));
        let catalog = CatalogStore::new(seed::products(), &storage);
        let product = product::State::new(config.catalog.max_price());

        let hero_deck = match content::hero_deck() {
            Ok(deck) => Some(deck),
            Err(error) => {
                tracing::error!(%error, "hero carousel disabled");
                None
            }
        };

        let mut app = Self {
            i18n,
            config,
            config_dir,
            route: Route::Home,
            navbar: navbar::State::default(),
            home: None,
            hero_deck,
            product,
            catalog,
            theme,
            storage,
            clock: MonotonicClock::new(),
            notifications: notifications::Manager::new(),
        };

        let now = app.clock.now();
        for key in [config_warning, storage_warning].into_iter().flatten() {
            app.notifications
                .push(notifications::Notification::warning(key), now);
        }

        let link = match flags.route.as_deref() {
            Some(path) => Link::parse(path).unwrap_or_else(|| {
                tracing::warn!(path, "unknown start route, showing home");
                Link::from(Route::Home)
            }),
            None => Link::from(Route::Home),
        };

        tracing::info!(
            locale = %app.i18n.current_locale(),
            theme = ?app.theme.theme(),
            products = app.catalog.products().len(),
            cart = app.catalog.cart().len(),
            "storefront started"
        );

        let task = update::navigate(&mut app.context(now), link);
        (app, task)
    }

    fn context(&mut self, now: Duration) -> update::UpdateContext<'_> {
        update::UpdateContext {
            config: &mut self.config,
            config_dir: &self.config_dir,
            route: &mut self.route,
            navbar: &mut self.navbar,
            home: &mut self.home,
            hero_deck: &self.hero_deck,
            product: &mut self.product,
            catalog: &mut self.catalog,
            theme: &mut self.theme,
            storage: &mut self.storage,
            notifications: &mut self.notifications,
            now,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.route {
            Route::Home => app_name,
            route => format!("{} - {app_name}", self.i18n.tr(route.i18n_key())),
        }
    }

    fn theme(&self) -> Theme {
        theming::iced_theme(self.theme.theme())
    }

    fn subscription(&self) -> Subscription<Message> {
        let pointer_sub = subscription::create_pointer_subscription(self.home.is_some());
        let tick_sub = subscription::create_tick_subscription(
            self.home.as_ref().is_some_and(home::State::wants_ticks),
            self.notifications.has_notifications(),
        );

        Subscription::batch([pointer_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = match &message {
            Message::Tick(instant) => self.clock.at(*instant),
            _ => self.clock.now(),
        };
        let mut ctx = self.context(now);

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Home(home_message) => update::handle_home_message(&mut ctx, home_message),
            Message::Product(product_message) => {
                update::handle_product_message(&mut ctx, product_message)
            }
            Message::Cart(cart_message) => update::handle_cart_message(&mut ctx, cart_message),
            Message::Page(page_message) => update::handle_page_message(&mut ctx, page_message),
            Message::Notification(notification_message) => {
                ctx.notifications
                    .handle_message(&notification_message, ctx.now);
                Task::none()
            }
            Message::Tick(_) => update::handle_tick(&mut ctx),
            Message::PointerMoved(x) => {
                update::handle_home_message(&mut ctx, home::Message::PointerMoved(x))
            }
            Message::PointerPressed(x) => {
                update::handle_home_message(&mut ctx, home::Message::PointerPressed(x))
            }
            Message::PointerReleased => {
                update::handle_home_message(&mut ctx, home::Message::PointerReleased)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            route: self.route,
            theme: self.theme.theme(),
            navbar: &self.navbar,
            home: self.home.as_ref(),
            product: &self.product,
            catalog: &self.catalog,
            price_step: self.config.catalog.price_step(),
            notifications: &self.notifications,
        })
    }
}
