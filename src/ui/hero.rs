// SPDX-License-Identifier: MPL-2.0
//! Hero: the opening frame of the landing screen.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

/// Messages emitted by the hero actions.
#[derive(Debug, Clone)]
pub enum Message {
    ViewGallery,
    ViewServices,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ViewGallery,
    ViewServices,
}

/// Process a hero message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::ViewGallery => Event::ViewGallery,
        Message::ViewServices => Event::ViewServices,
    }
}

/// Render the hero block.
pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let kicker = Row::new()
        .spacing(spacing::SM)
        .push(
            Text::new(i18n.tr("hero-kicker"))
                .size(typography::MONO_LABEL)
                .color(palette::BRAND_RED),
        );

    let headline = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr("hero-title-line-1")).size(typography::DISPLAY))
        .push(Text::new(i18n.tr("hero-title-line-2")).size(typography::DISPLAY));

    let lead = Text::new(i18n.tr("hero-lead"))
        .size(typography::LEAD)
        .color(palette::TEXT_GRAY);

    let disciplines = Text::new(i18n.tr("hero-disciplines"))
        .size(typography::MONO_LABEL)
        .color(palette::TEXT_GRAY);

    let gallery_button = button(
        Text::new(format!("{} ▶", i18n.tr("hero-cta-gallery"))).size(typography::BODY),
    )
    .on_press(Message::ViewGallery)
    .style(styles::button::primary)
    .padding([spacing::SM, spacing::XL]);

    let services_button = button(
        Text::new(i18n.tr("hero-cta-services")).size(typography::BODY),
    )
    .on_press(Message::ViewServices)
    .style(styles::button::outline)
    .padding([spacing::SM, spacing::XL]);

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(gallery_button)
        .push(services_button);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(kicker)
        .push(headline)
        .push(lead)
        .push(disciplines)
        .push(actions)
        .push(
            Text::new(i18n.tr("hero-scroll-hint"))
                .size(typography::CAPTION)
                .color(palette::TEXT_GRAY),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::SECTION, spacing::LG])
        .align_x(Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_view_renders() {
        let i18n = I18n::default();
        let _element = view(&i18n);
    }

    #[test]
    fn hero_actions_map_to_events() {
        assert!(matches!(update(&Message::ViewGallery), Event::ViewGallery));
        assert!(matches!(update(&Message::ViewServices), Event::ViewServices));
    }
}
