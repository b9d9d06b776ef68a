// SPDX-License-Identifier: MPL-2.0
//! FAQ section: a single-open accordion of five question/answer pairs.
//!
//! At most one item is expanded; opening another collapses the previous
//! one and clicking the open item collapses it. The first item starts
//! open so the section never renders as a wall of closed rows.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Number of published question/answer pairs.
pub const QUESTION_COUNT: usize = 5;

/// Accordion state: index of the open item, if any.
#[derive(Debug)]
pub struct State {
    open: Option<usize>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// First question open, matching the published page.
    #[must_use]
    pub fn new() -> Self {
        Self { open: Some(0) }
    }

    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    /// Toggle an item: opening one closes any other.
    pub fn toggle(&mut self, index: usize) {
        if index >= QUESTION_COUNT {
            return;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }
}

/// Contextual data needed to render the FAQ.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the FAQ section.
#[derive(Debug, Clone)]
pub enum Message {
    Toggle(usize),
    /// "CONSULTAR AHORA" shortcut next to the questions.
    ComposeMail,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    ComposeMail,
}

/// Process an FAQ message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::Toggle(index) => {
            state.toggle(index);
            Event::None
        }
        Message::ComposeMail => Event::ComposeMail,
    }
}

/// Render the FAQ section.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let intro = Column::new()
        .spacing(spacing::SM)
        .width(Length::FillPortion(1))
        .push(
            Text::new(ctx.i18n.tr("faq-kicker"))
                .size(typography::MONO_LABEL)
                .color(palette::TEXT_GRAY),
        )
        .push(Text::new(ctx.i18n.tr("faq-title")).size(typography::TITLE_MD))
        .push(
            Text::new(ctx.i18n.tr("faq-intro"))
                .size(typography::BODY)
                .color(palette::TEXT_GRAY),
        )
        .push(
            button(Text::new(ctx.i18n.tr("faq-ask-now")).size(typography::MONO_LABEL))
                .on_press(Message::ComposeMail)
                .style(styles::button::outline)
                .padding([spacing::XS, spacing::MD]),
        );

    let mut items = Column::new().width(Length::FillPortion(2));
    for index in 0..QUESTION_COUNT {
        items = items.push(build_item(&ctx, index));
    }

    Row::new()
        .spacing(spacing::XL)
        .push(intro)
        .push(items)
        .into()
}

fn build_item<'a>(ctx: &ViewContext<'a>, index: usize) -> Element<'a, Message> {
    let is_open = ctx.state.open_index() == Some(index);

    let question = ctx.i18n.tr(&format!("faq-q-{}", index + 1));
    let indicator = Text::new(if is_open { "−" } else { "+" })
        .size(typography::LEAD)
        .color(if is_open {
            palette::BRAND_RED
        } else {
            palette::WHITE
        });

    let header = button(
        Row::new()
            .align_y(Vertical::Center)
            .push(Text::new(question).size(typography::LEAD))
            .push(Space::new().width(Length::Fill))
            .push(indicator),
    )
    .on_press(Message::Toggle(index))
    .width(Length::Fill)
    .padding([spacing::MD, spacing::XS])
    .style(styles::button::link);

    let mut item = Column::new().push(header);
    if is_open {
        let answer = ctx.i18n.tr(&format!("faq-a-{}", index + 1));
        item = item.push(
            Container::new(
                Text::new(answer)
                    .size(typography::BODY)
                    .color(palette::TEXT_GRAY),
            )
            .padding([0.0, spacing::XS])
            .width(Length::Fill),
        );
    }

    Container::new(item)
        .width(Length::Fill)
        .padding([spacing::XXS, 0.0])
        .into()
}
