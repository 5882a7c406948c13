// SPDX-License-Identifier: MPL-2.0
//! Home page: hero carousel, statistics, category tiles, features,
//! testimonials and a closing call to action.
//!
//! The page owns the [`SlideController`] and the statistic counters for as
//! long as it is mounted. The application mounts it when the home route is
//! entered and tears it down when it is left.

mod hero;
mod sections;

use crate::app::screen::{Link, Route};
use crate::domain::catalog::Category;
use crate::domain::content::{self, Stat};
use crate::domain::slider::{Direction, SlideController, SlideDeck, SliderTimings};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::theming::ColorScheme;
use iced::widget::{scrollable, Column};
use iced::{Element, Length};
use std::time::Duration;

/// Mounted home page state.
#[derive(Debug, Clone)]
pub struct State {
    slider: SlideController,
    stats: Vec<Stat>,
    /// Clock time of the last processed message, used by the view.
    now: Duration,
    /// Last known pointer x, in window coordinates.
    pointer_x: Option<f32>,
    /// Hero pressed before any pointer position was known.
    press_pending: bool,
}

impl State {
    /// Mounts the page: arms the slide cycle and starts the counters.
    #[must_use]
    pub fn mount(deck: SlideDeck, timings: SliderTimings, now: Duration) -> Self {
        let mut stats = content::stats();
        for stat in &mut stats {
            stat.counter.start(now);
        }
        Self {
            slider: SlideController::mount(deck, timings, now),
            stats,
            now,
            pointer_x: None,
            press_pending: false,
        }
    }

    /// Cancels every pending timer and drag session.
    pub fn teardown(&mut self) {
        self.slider.teardown();
    }

    #[must_use]
    pub fn slider(&self) -> &SlideController {
        &self.slider
    }

    #[must_use]
    pub fn stats(&self) -> &[Stat] {
        &self.stats
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Returns whether the page still has timed work (slide timers or
    /// running counters).
    #[must_use]
    pub fn wants_ticks(&self) -> bool {
        self.slider.next_deadline().is_some()
            || self.stats.iter().any(|stat| !stat.counter.is_finished(self.now))
    }
}

/// Contextual data needed to render the home page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: ColorScheme,
    pub state: &'a State,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Animation frame. The current time is passed to [`update`].
    Tick,
    PreviousSlide,
    NextSlide,
    GoToSlide(usize),
    /// Pointer moved anywhere in the window.
    PointerMoved(f32),
    /// Finger pressed anywhere in the window, with its position.
    PointerPressed(f32),
    /// Pointer pressed on the hero surface.
    DragStart,
    /// Pointer released anywhere in the window.
    PointerReleased,
    CallToAction,
    OpenCategory(Category),
    ShopAll,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Link),
}

/// Process a home page message at clock time `now`.
pub fn update(state: &mut State, message: Message, now: Duration) -> Event {
    state.now = state.now.max(now);
    let now = state.now;

    match message {
        Message::Tick => {
            state.slider.tick(now);
            Event::None
        }
        Message::PreviousSlide => {
            state.slider.advance(Direction::Backward, now);
            Event::None
        }
        Message::NextSlide => {
            state.slider.advance(Direction::Forward, now);
            Event::None
        }
        Message::GoToSlide(index) => {
            state.slider.go_to(index, now);
            Event::None
        }
        Message::PointerMoved(x) => {
            state.pointer_x = Some(x);
            state.slider.on_drag_move(x);
            Event::None
        }
        Message::PointerPressed(x) => {
            state.pointer_x = Some(x);
            // A touch press is reported after the hero's own press message,
            // which opened the session at the previous finger's position.
            if state.press_pending || state.slider.is_dragging() {
                state.press_pending = false;
                state.slider.cancel_drag();
                state.slider.on_drag_start(x);
            }
            Event::None
        }
        Message::DragStart => {
            match state.pointer_x {
                Some(x) => {
                    state.slider.on_drag_start(x);
                }
                None => state.press_pending = true,
            }
            Event::None
        }
        Message::PointerReleased => {
            state.press_pending = false;
            if state.slider.is_dragging() {
                match state.pointer_x {
                    Some(x) => state.slider.on_drag_end(x, now),
                    None => state.slider.on_pointer_released(now),
                };
            }
            Event::None
        }
        Message::CallToAction => {
            let href = &state.slider.current_slide().call_to_action_link;
            match Link::parse(href) {
                Some(link) => Event::Navigate(link),
                None => {
                    tracing::warn!(href, "call to action points nowhere");
                    Event::None
                }
            }
        }
        Message::OpenCategory(category) => Event::Navigate(Link {
            route: Route::Product,
            category: Some(category),
        }),
        Message::ShopAll => Event::Navigate(Link::from(Route::Product)),
    }
}

/// Render the home page.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::SECTION)
        .push(hero::view(&ctx))
        .push(sections::stats(&ctx))
        .push(sections::categories(&ctx))
        .push(sections::features(&ctx))
        .push(sections::testimonials(&ctx))
        .push(sections::closing(&ctx));

    scrollable(content).height(Length::Fill).into()
}
