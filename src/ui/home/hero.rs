// SPDX-License-Identifier: MPL-2.0
//! Hero carousel rendering.

use super::{Message, ViewContext};
use crate::config::HERO_HEIGHT;
use crate::domain::image::{ImageSource, HERO_PLACEHOLDER};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, mouse_area, text, Column, Container, Row, Space, Stack, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Color, Element, Length, Theme,
};

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;
    let slider = ctx.state.slider();
    let slide = slider.current_slide();
    let alpha = slider.content_opacity(ctx.state.now());

    let faded = move |color: Color| Color {
        a: color.a * alpha,
        ..color
    };

    let image = ImageSource::resolve(&slide.image_url, HERO_PLACEHOLDER);
    let image_caption = Container::new(
        Text::new(image.host().to_string())
            .size(typography::CAPTION)
            .style(move |_theme: &Theme| text::Style {
                color: Some(faded(colors.text_muted)),
            }),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD)
    .align_x(Horizontal::Right)
    .align_y(Vertical::Bottom);

    let title = Text::new(slide.title.clone())
        .size(typography::DISPLAY)
        .style(move |_theme: &Theme| text::Style {
            color: Some(faded(colors.text_primary)),
        });

    let subtitle = Text::new(slide.subtitle.clone())
        .size(typography::BODY_LG)
        .style(move |_theme: &Theme| text::Style {
            color: Some(faded(colors.text_secondary)),
        });

    let cta = button(Text::new(slide.call_to_action_text.clone()).size(typography::BODY_LG))
        .on_press(Message::CallToAction)
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::primary(colors));

    let copy = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::HERO_TEXT_MAX_WIDTH)
        .align_x(Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(cta);

    let arrows = Row::new()
        .padding(spacing::LG)
        .align_y(Vertical::Center)
        .height(Length::Fill)
        .push(arrow("‹", Message::PreviousSlide, ctx))
        .push(Space::new().width(Length::Fill))
        .push(arrow("›", Message::NextSlide, ctx));

    let surface = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(image_caption)
        .push(
            Container::new(copy)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .push(arrows)
        .push(
            Container::new(indicators(ctx))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::LG)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Bottom),
        );

    // Press starts a drag; the release is observed window-wide.
    let draggable = mouse_area(surface).on_press(Message::DragStart);

    Container::new(draggable)
        .width(Length::Fill)
        .height(Length::Fixed(HERO_HEIGHT))
        .style(styles::container::band(colors))
        .into()
}

fn arrow<'a>(glyph: &'a str, message: Message, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    button(
        Container::new(Text::new(glyph).size(typography::TITLE_LG))
            .width(Length::Fixed(sizing::ICON_XL))
            .height(Length::Fixed(sizing::ICON_XL))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .on_press(message)
    .padding(0)
    .style(styles::button::icon(ctx.colors))
    .into()
}

fn indicators<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let slider = ctx.state.slider();
    let current = slider.current_index();

    (0..slider.slide_count())
        .fold(Row::new().spacing(spacing::XS), |row, index| {
            row.push(
                button(Space::new())
                    .width(Length::Fixed(sizing::INDICATOR_DOT))
                    .height(Length::Fixed(sizing::INDICATOR_DOT))
                    .padding(0)
                    .on_press(Message::GoToSlide(index))
                    .style(styles::button::indicator(ctx.colors, index == current)),
            )
        })
        .into()
}
