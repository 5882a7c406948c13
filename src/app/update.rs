// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every page reports what happened through an `Event`; the handlers here
//! turn those events into route changes, store mutations and persistence.

use super::screen::{Link, Route};
use super::{persistence, Message};
use crate::config::Config;
use crate::domain::catalog::ProductId;
use crate::domain::slider::{SlideDeck, SliderTimings};
use crate::store::{CatalogStore, FileStore, ThemeStore};
use crate::ui::cart::{self, Event as CartEvent};
use crate::ui::home::{self, Event as HomeEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications;
use crate::ui::pages::{self, Event as PageEvent};
use crate::ui::product::{self, Event as ProductEvent};
use iced::Task;
use std::path::PathBuf;
use std::time::Duration;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub config: &'a mut Config,
    pub config_dir: &'a Option<PathBuf>,
    pub route: &'a mut Route,
    pub navbar: &'a mut navbar::State,
    pub home: &'a mut Option<home::State>,
    pub hero_deck: &'a Option<SlideDeck>,
    pub product: &'a mut product::State,
    pub catalog: &'a mut CatalogStore,
    pub theme: &'a mut ThemeStore,
    pub storage: &'a mut FileStore,
    pub notifications: &'a mut notifications::Manager,
    /// Clock time at which the message is processed.
    pub now: Duration,
}

/// Switches to `link.route`, mounting or tearing down the home page and
/// applying the link's category pre-selection.
pub fn navigate(ctx: &mut UpdateContext<'_>, link: Link) -> Task<Message> {
    let target = link.route;

    if target != Route::Home {
        if let Some(mut state) = ctx.home.take() {
            state.teardown();
        }
    } else if ctx.home.is_none() {
        *ctx.home = mount_home(ctx.hero_deck, ctx.config, ctx.now);
    }

    if let Some(category) = link.category {
        ctx.product.show_category(category);
    }

    if *ctx.route != target {
        tracing::info!(path = target.path(), "route changed");
    }
    *ctx.route = target;
    Task::none()
}

/// Mounts a fresh home page, or nothing if the hero deck failed to build.
pub fn mount_home(
    deck: &Option<SlideDeck>,
    config: &Config,
    now: Duration,
) -> Option<home::State> {
    deck.as_ref().map(|deck| {
        home::State::mount(deck.clone(), SliderTimings::from_config(config), now)
    })
}

/// Handles navbar messages.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(ctx.navbar, message) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(route) => navigate(ctx, Link::from(route)),
        NavbarEvent::Search(query) => {
            ctx.product.search(&query);
            navigate(ctx, Link::from(Route::Product))
        }
        NavbarEvent::ToggleTheme => {
            let theme = ctx.theme.toggle();
            tracing::debug!(?theme, "theme toggled");
            if let Some(warning) =
                persistence::persist_theme(ctx.config, theme, ctx.config_dir.clone())
            {
                ctx.notifications.push(warning, ctx.now);
            }
            Task::none()
        }
    }
}

/// Handles home page messages. Ignored while the page is not mounted.
pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: home::Message) -> Task<Message> {
    let Some(state) = ctx.home.as_mut() else {
        return Task::none();
    };

    match home::update(state, message, ctx.now) {
        HomeEvent::None => Task::none(),
        HomeEvent::Navigate(link) => navigate(ctx, link),
    }
}

/// Handles product listing messages.
pub fn handle_product_message(
    ctx: &mut UpdateContext<'_>,
    message: product::Message,
) -> Task<Message> {
    match product::update(ctx.product, message) {
        ProductEvent::None => {}
        ProductEvent::AddToCart(id) => add_to_cart(ctx, id),
        ProductEvent::AddToWishlist(id) => add_to_wishlist(ctx, id),
        ProductEvent::Delete(id) => {
            if !ctx.catalog.delete_product(&id) {
                tracing::debug!(%id, "delete ignored, product not in catalog");
            }
        }
    }
    Task::none()
}

/// Handles cart page messages.
pub fn handle_cart_message(ctx: &mut UpdateContext<'_>, message: cart::Message) -> Task<Message> {
    match cart::update(message) {
        CartEvent::Navigate(route) => navigate(ctx, Link::from(route)),
        CartEvent::AddToCart(id) => {
            add_to_cart(ctx, id);
            Task::none()
        }
    }
}

/// Handles static page messages.
pub fn handle_page_message(ctx: &mut UpdateContext<'_>, message: pages::Message) -> Task<Message> {
    match pages::update(message) {
        PageEvent::Navigate(route) => navigate(ctx, Link::from(route)),
    }
}

/// Advances every clock-driven piece of state to `ctx.now`.
pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.notifications.tick(ctx.now);
    handle_home_message(ctx, home::Message::Tick)
}

fn add_to_cart(ctx: &mut UpdateContext<'_>, id: ProductId) {
    let effect = ctx.catalog.add_to_cart(id);
    let outcome = persistence::apply_effect(&effect, ctx.storage, "notification-added-to-cart");
    ctx.notifications.push(outcome, ctx.now);
}

fn add_to_wishlist(ctx: &mut UpdateContext<'_>, id: ProductId) {
    let effect = ctx.catalog.add_to_wishlist(id);
    let outcome =
        persistence::apply_effect(&effect, ctx.storage, "notification-added-to-wishlist");
    ctx.notifications.push(outcome, ctx.now);
}
