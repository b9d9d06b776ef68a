// SPDX-License-Identifier: MPL-2.0
//! Navigation bar for the landing screen.
//!
//! A pinned strip with the studio mark, section links, and a highlighted
//! contact action, plus a hamburger menu mirroring the links for narrow
//! windows. The open/closed flag of the menu is owned here and nowhere
//! else; activating any item closes it.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, Column, Container, Row, Space, Text};
use iced::{Background, Border, Element, Length, Theme};

/// WhatsApp deep link behind the CONTACTO action.
pub const WHATSAPP_URL: &str = "https://wa.me/595981136144";

/// Landing-page sections the navbar can jump to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Services,
    Gallery,
    Process,
    Systems,
    Differential,
}

impl Section {
    /// Links in display order.
    pub const ALL: [Section; 5] = [
        Section::Services,
        Section::Gallery,
        Section::Process,
        Section::Systems,
        Section::Differential,
    ];

    /// i18n key for the link label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Section::Services => "nav-services",
            Section::Gallery => "nav-gallery",
            Section::Process => "nav-process",
            Section::Systems => "nav-systems",
            Section::Differential => "nav-differential",
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub menu_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    GoToSection(Section),
    GoToTop,
    OpenWhatsApp,
    ComposeMail,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    GoToSection(Section),
    GoToTop,
    OpenWhatsApp,
    ComposeMail,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::GoToSection(section) => {
            *menu_open = false;
            Event::GoToSection(section)
        }
        Message::GoToTop => {
            *menu_open = false;
            Event::GoToTop
        }
        Message::OpenWhatsApp => {
            *menu_open = false;
            Event::OpenWhatsApp
        }
        Message::ComposeMail => {
            *menu_open = false;
            Event::ComposeMail
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);
    content = content.push(build_bar(&ctx));

    if ctx.menu_open {
        content = content.push(build_menu(&ctx));
    }

    container(content)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::LG])
        .into()
}

fn build_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(
        Text::new("FOTOCICLETA")
            .size(typography::LEAD)
            .color(palette::WHITE),
    )
    .on_press(Message::GoToTop)
    .style(styles::button::link)
    .padding(spacing::XS);

    let mut links = Row::new().spacing(spacing::MD).align_y(Vertical::Center);
    for section in Section::ALL {
        links = links.push(
            button(Text::new(ctx.i18n.tr(section.label_key())).size(typography::MONO_LABEL))
                .on_press(Message::GoToSection(section))
                .style(styles::button::link)
                .padding(spacing::XXS),
        );
    }

    let contact = button(
        Text::new(ctx.i18n.tr("nav-contact"))
            .size(typography::MONO_LABEL),
    )
    .on_press(Message::OpenWhatsApp)
    .style(styles::button::primary)
    .padding([spacing::XS, spacing::MD]);

    let menu_toggle = button(Text::new(if ctx.menu_open { "✕" } else { "☰" }).size(typography::LEAD))
        .on_press(Message::ToggleMenu)
        .style(styles::button::link)
        .padding(spacing::XXS);

    let row = Row::new()
        .spacing(spacing::MD)
        .padding([spacing::XS, spacing::LG])
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(links)
        .push(contact)
        .push(menu_toggle);

    Container::new(row)
        .width(Length::Fixed(sizing::CONTENT_WIDTH))
        .style(styles::container::navbar)
        .into()
}

/// Hamburger overlay: section links stacked, then the mail action.
fn build_menu<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::XXS).padding(spacing::XS);

    for section in Section::ALL {
        column = column.push(build_menu_item(
            ctx.i18n.tr(section.label_key()),
            Message::GoToSection(section),
        ));
    }

    column = column.push(build_menu_item(
        ctx.i18n.tr("nav-lets-talk"),
        Message::ComposeMail,
    ));

    Container::new(column)
        .width(Length::Fixed(sizing::CONTENT_WIDTH))
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::STAGE_900)),
            border: Border {
                color: iced::Color {
                    a: 0.08,
                    ..palette::WHITE
                },
                width: 1.0,
                radius: radius::MD.into(),
            },
            ..Default::default()
        })
        .into()
}

fn build_menu_item<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(styles::button::link)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            menu_open: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_with_menu_open() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            menu_open: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(menu_open);
        assert!(matches!(event, Event::None));

        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn section_links_close_menu_and_emit_event() {
        let mut menu_open = true;
        let event = update(Message::GoToSection(Section::Gallery), &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::GoToSection(Section::Gallery)));
    }

    #[test]
    fn contact_actions_close_menu() {
        let mut menu_open = true;
        let event = update(Message::OpenWhatsApp, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::OpenWhatsApp));

        menu_open = true;
        let event = update(Message::ComposeMail, &mut menu_open);
        assert!(!menu_open);
        assert!(matches!(event, Event::ComposeMail));
    }
}
