// SPDX-License-Identifier: MPL-2.0
//! Filter sidebar: categories, price range and metals, each in a
//! collapsible section, plus a "Clear All" action.

use super::{Message, ViewContext};
use crate::domain::catalog::{
    category_counts, Category, Metal, Price, PriceBound, SidebarSection,
};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::{category_label, metal_label};
use iced::widget::{button, checkbox, rule, slider, text, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Color, Element, Length, Theme};

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;
    let selection = &ctx.state.selection;

    let mut title = Text::new(ctx.i18n.tr("filter-title")).size(typography::TITLE_MD);
    if selection.is_active() {
        title = Text::new(format!(
            "{} ({})",
            ctx.i18n.tr("filter-title"),
            selection.active_count()
        ))
        .size(typography::TITLE_MD);
    }

    let clear = button(Text::new(ctx.i18n.tr("filter-clear-all")).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::outline(colors));
    let clear = if selection.is_active() {
        clear.on_press(Message::ClearAll)
    } else {
        clear
    };

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(clear);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(rule::horizontal(1))
        .push(section(ctx, SidebarSection::Categories, "filter-categories", categories(ctx)))
        .push(rule::horizontal(1))
        .push(section(ctx, SidebarSection::Price, "filter-price", price(ctx)))
        .push(rule::horizontal(1))
        .push(section(ctx, SidebarSection::Metals, "filter-metals", metals(ctx)));

    Container::new(content)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::card(colors))
        .into()
}

/// Section with a clickable header that collapses its body.
fn section<'a>(
    ctx: &ViewContext<'a>,
    id: SidebarSection,
    title_key: &str,
    body: Element<'a, Message>,
) -> Element<'a, Message> {
    let collapsed = ctx.state.collapsed.is_collapsed(id);
    let chevron = if collapsed { "▸" } else { "▾" };

    let header = button(
        Row::new()
            .align_y(Vertical::Center)
            .push(Text::new(ctx.i18n.tr(title_key)).size(typography::TITLE_SM))
            .push(Space::new().width(Length::Fill))
            .push(Text::new(chevron).size(typography::BODY)),
    )
    .width(Length::Fill)
    .padding(spacing::XXS)
    .on_press(Message::ToggleSection(id))
    .style(styles::button::option_row(ctx.colors));

    let mut column = Column::new().spacing(spacing::SM).push(header);
    if !collapsed {
        column = column.push(body);
    }
    column.into()
}

fn categories<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;
    let counts = category_counts(ctx.products);
    let selected = ctx.state.selection.selected_categories();

    Category::KNOWN
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, category| {
            let count = counts.get(category).copied().unwrap_or(0);
            let toggle = checkbox(selected.contains(category))
                .label(category_label(ctx.i18n, category))
                .on_toggle({
                    let category = category.clone();
                    move |_| Message::ToggleCategory(category.clone())
                })
                .size(sizing::ICON_SM)
                .text_size(typography::BODY);

            column.push(
                Row::new()
                    .align_y(Vertical::Center)
                    .push(toggle)
                    .push(Space::new().width(Length::Fill))
                    .push(
                        Text::new(format!("({count})"))
                            .size(typography::CAPTION)
                            .style(move |_theme: &Theme| text::Style {
                                color: Some(colors.text_muted),
                            }),
                    ),
            )
        })
        .into()
}

fn price<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let selection = &ctx.state.selection;
    let draft = selection.draft_price_range();
    let max_price = selection.max_price();
    let step = ctx.price_step.max(1);

    let bound_slider = |label_key: &str, bound: PriceBound, value: u32| {
        Column::new()
            .spacing(spacing::XXS)
            .push(
                Row::new()
                    .push(Text::new(ctx.i18n.tr(label_key)).size(typography::CAPTION))
                    .push(Space::new().width(Length::Fill))
                    .push(Text::new(Price(value).to_string()).size(typography::CAPTION)),
            )
            .push(
                slider(0..=max_price, value, move |value| Message::DraftPrice(bound, value))
                    .on_release(Message::CommitPrice)
                    .step(step),
            )
    };

    Column::new()
        .spacing(spacing::SM)
        .push(bound_slider("filter-price-min", PriceBound::Min, draft.min))
        .push(bound_slider("filter-price-max", PriceBound::Max, draft.max))
        .push(
            Text::new(format!("{} – {}", Price(draft.min), Price(draft.max)))
                .size(typography::BODY),
        )
        .into()
}

fn metals<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;
    let selected = ctx.state.selection.selected_metals();

    Metal::KNOWN
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, metal| {
            let [r, g, b] = metal.swatch();
            let swatch = Container::new(Space::new())
                .width(Length::Fixed(sizing::ICON_SM))
                .height(Length::Fixed(sizing::ICON_SM))
                .style(styles::container::swatch(Color::from_rgb8(r, g, b), colors.border));

            let toggle = checkbox(selected.contains(metal))
                .label(metal_label(ctx.i18n, metal))
                .on_toggle({
                    let metal = metal.clone();
                    move |_| Message::ToggleMetal(metal.clone())
                })
                .size(sizing::ICON_SM)
                .text_size(typography::BODY);

            column.push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(Vertical::Center)
                    .push(swatch)
                    .push(toggle),
            )
        })
        .into()
}
