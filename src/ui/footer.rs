// SPDX-License-Identifier: MPL-2.0
//! Footer: closing headline, brand block, socials, and direct contact
//! channels. The contact form itself is composed next to this by the
//! root view.

use crate::i18n::fluent::I18n;
use crate::mailto::CONTACT_ADDRESS;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

/// External profiles linked from the footer.
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/fotocicletapy";
pub const FACEBOOK_URL: &str = "https://www.facebook.com/profile.php?id=100063744878888";

/// Messages emitted by the footer links.
#[derive(Debug, Clone)]
pub enum Message {
    ComposeMail,
    OpenWhatsApp,
    OpenInstagram,
    OpenFacebook,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ComposeMail,
    OpenWhatsApp,
    /// Open an external profile in the platform browser.
    OpenUrl(&'static str),
}

/// Process a footer message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::ComposeMail => Event::ComposeMail,
        Message::OpenWhatsApp => Event::OpenWhatsApp,
        Message::OpenInstagram => Event::OpenUrl(INSTAGRAM_URL),
        Message::OpenFacebook => Event::OpenUrl(FACEBOOK_URL),
    }
}

/// Render the closing headline shown above the contact form.
pub fn headline(i18n: &I18n) -> Element<'_, Message> {
    Container::new(
        Text::new(i18n.tr("footer-headline")).size(typography::TITLE_LG),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .into()
}

/// Render the four-column footer info grid.
pub fn view(i18n: &I18n) -> Element<'_, Message> {
    let brand = info_column(
        i18n.tr("footer-brand-kicker"),
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new("FOTOCICLETA").size(typography::BODY))
            .push(
                Text::new(i18n.tr("footer-brand-line"))
                    .size(typography::CAPTION)
                    .color(palette::TEXT_GRAY),
            )
            .push(
                Text::new(i18n.tr("footer-copyright"))
                    .size(typography::CAPTION)
                    .color(palette::TEXT_GRAY),
            )
            .into(),
    );

    let socials = info_column(
        i18n.tr("footer-socials-kicker"),
        Column::new()
            .spacing(spacing::XXS)
            .push(link_button("@fotocicletapy", Message::OpenInstagram))
            .push(link_button(
                &i18n.tr("footer-facebook-label"),
                Message::OpenFacebook,
            ))
            .into(),
    );

    let contact = info_column(
        i18n.tr("footer-contact-kicker"),
        Column::new()
            .spacing(spacing::XXS)
            .push(link_button(CONTACT_ADDRESS, Message::ComposeMail))
            .push(link_button("+595 981 136144", Message::OpenWhatsApp))
            .into(),
    );

    let studio = info_column(
        i18n.tr("footer-studio-kicker"),
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(i18n.tr("footer-location")).size(typography::BODY))
            .push(
                Text::new(i18n.tr("footer-availability"))
                    .size(typography::CAPTION)
                    .color(palette::TEXT_GRAY),
            )
            .into(),
    );

    Row::new()
        .spacing(spacing::XL)
        .push(brand)
        .push(socials)
        .push(contact)
        .push(studio)
        .into()
}

fn info_column<'a>(kicker: String, body: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(
            Text::new(kicker)
                .size(typography::CAPTION)
                .color(palette::BRAND_RED),
        )
        .push(body)
        .into()
}

fn link_button<'a>(label: &str, message: Message) -> Element<'a, Message> {
    button(Text::new(label.to_string()).size(typography::BODY))
        .on_press(message)
        .style(styles::button::link)
        .padding(0.0)
        .into()
}
