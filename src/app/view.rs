// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The navbar sits on top, the page for the current route fills the rest,
//! and toasts float over everything.

use super::screen::Route;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::store::{CatalogStore, ThemeFlag};
use crate::ui::cart::{self, ViewContext as CartViewContext};
use crate::ui::home::{self, ViewContext as HomeViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::pages::{self, Page, ViewContext as PageViewContext};
use crate::ui::product::{self, ViewContext as ProductViewContext};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Container, Space, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub route: Route,
    pub theme: ThemeFlag,
    pub navbar: &'a navbar::State,
    pub home: Option<&'a home::State>,
    pub product: &'a product::State,
    pub catalog: &'a CatalogStore,
    pub price_step: u32,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current route with the navbar and toast overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = ColorScheme::for_flag(ctx.theme);

    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        colors,
        route: ctx.route,
        theme: ctx.theme,
        cart_count: ctx.catalog.cart().len(),
        state: ctx.navbar,
    })
    .map(Message::Navbar);

    let page = view_page(&ctx, colors);

    let column = Column::new().push(navbar_view).push(
        Container::new(page)
            .width(Length::Fill)
            .height(Length::Fill),
    );

    let base = Container::new(column.width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page(colors));

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n, colors).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(toasts)
        .into()
}

fn view_page<'a>(ctx: &ViewContext<'a>, colors: ColorScheme) -> Element<'a, Message> {
    match ctx.route {
        Route::Home => match ctx.home {
            Some(state) => home::view(HomeViewContext {
                i18n: ctx.i18n,
                colors,
                state,
            })
            .map(Message::Home),
            None => Space::new().width(Length::Fill).height(Length::Fill).into(),
        },
        Route::Product => product::view(ProductViewContext {
            i18n: ctx.i18n,
            colors,
            state: ctx.product,
            products: ctx.catalog.products(),
            price_step: ctx.price_step,
        })
        .map(Message::Product),
        Route::Cart => cart::view(CartViewContext {
            i18n: ctx.i18n,
            colors,
            catalog: ctx.catalog,
        })
        .map(Message::Cart),
        Route::About | Route::Contact | Route::Account => match Page::for_route(ctx.route) {
            Some(page) => pages::view(PageViewContext {
                i18n: ctx.i18n,
                colors,
                page,
            })
            .map(Message::Page),
            None => Space::new().width(Length::Fill).height(Length::Fill).into(),
        },
    }
}
