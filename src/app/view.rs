// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the active screen, then stacks the video modal and toast
//! notifications above it. Section order in the landing scroll matches
//! the scroll targets in `update::scroll_target`.

use super::update::LANDING_SCROLL_ID;
use super::{App, Message, Screen};
use crate::ui::contact_form::{self, ViewContext as ContactFormViewContext};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::faq::{self, ViewContext as FaqViewContext};
use crate::ui::footer;
use crate::ui::gallery::{self, ViewContext as GalleryViewContext};
use crate::ui::hero;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::portfolio::{self, ViewContext as PortfolioViewContext};
use crate::ui::sections;
use crate::ui::styles;
use crate::ui::video_modal::{self, ViewContext as VideoModalViewContext};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Container, Scrollable, Stack};
use iced::{widget::Id, Element, Length};

/// Renders the current application view based on the active screen.
pub fn view(app: &App) -> Element<'_, Message> {
    let screen: Element<'_, Message> = match app.screen {
        Screen::Landing => view_landing(app),
        Screen::Portfolio => view_portfolio(app),
    };

    let stage = Container::new(screen)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::stage);

    let mut stack = Stack::new().push(stage);

    // The modal stays stacked while closing so the payload can carry the
    // exit transition; it stops intercepting input once no longer open.
    if app.video_modal.is_open() {
        stack = stack.push(
            video_modal::view(VideoModalViewContext {
                i18n: &app.i18n,
                state: &app.video_modal,
            })
            .map(Message::VideoModal),
        );
    }

    if app.notifications.visible_count() > 0 {
        stack = stack.push(
            Container::new(app.notifications.view(&app.i18n).map(Message::Notification))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Bottom)
                .padding(spacing::MD),
        );
    }

    stack.into()
}

/// Wraps a landing section in the centered content column.
fn section(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(
        Container::new(content).width(Length::Fixed(sizing::CONTENT_WIDTH)),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .padding([spacing::SECTION / 2.0, spacing::LG])
    .into()
}

fn view_landing(app: &App) -> Element<'_, Message> {
    let navbar_view = Container::new(
        navbar::view(NavbarViewContext {
            i18n: &app.i18n,
            menu_open: app.menu_open,
        })
        .map(Message::Navbar),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center);

    let gallery_view = gallery::view(GalleryViewContext {
        i18n: &app.i18n,
        state: &app.gallery,
        thumbnails: &app.thumbnails,
    })
    .map(Message::Gallery);

    let faq_view = faq::view(FaqViewContext {
        i18n: &app.i18n,
        state: &app.faq,
    })
    .map(Message::Faq);

    let contact_view = contact_form::view(ContactFormViewContext {
        i18n: &app.i18n,
        state: &app.contact_form,
    })
    .map(Message::ContactForm);

    let closing = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .push(footer::headline(&app.i18n).map(Message::Footer))
        .push(contact_view)
        .push(footer::view(&app.i18n).map(Message::Footer));

    let content = Column::new()
        .width(Length::Fill)
        .push(section(hero::view(&app.i18n).map(Message::Hero)))
        .push(section(gallery_view))
        .push(section(sections::manifesto(&app.i18n)))
        .push(section(sections::systems(&app.i18n)))
        .push(section(sections::process(&app.i18n)))
        .push(section(sections::services(&app.i18n)))
        .push(section(sections::differential(&app.i18n)))
        .push(section(sections::audience(&app.i18n)))
        .push(section(faq_view))
        .push(section(closing.into()));

    let scroll = Scrollable::new(content)
        .id(Id::new(LANDING_SCROLL_ID))
        .width(Length::Fill)
        .height(Length::Fill);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(navbar_view)
        .push(scroll)
        .into()
}

fn view_portfolio(app: &App) -> Element<'_, Message> {
    let portfolio_view = portfolio::view(PortfolioViewContext {
        i18n: &app.i18n,
        state: &app.portfolio,
        thumbnails: &app.thumbnails,
    })
    .map(Message::Portfolio);

    Scrollable::new(
        Container::new(portfolio_view)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .padding([spacing::LG, spacing::LG]),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Flags;

    #[test]
    fn landing_view_renders() {
        let (app, _task) = App::new(Flags::default());
        let _element = view(&app);
    }

    #[test]
    fn portfolio_view_renders() {
        let (mut app, _task) = App::new(Flags::default());
        app.screen = Screen::Portfolio;
        let _element = view(&app);
    }

    #[test]
    fn open_modal_renders_above_the_screen() {
        let (mut app, _task) = App::new(Flags::default());
        app.video_modal.open(
            video_modal::Payload {
                source: crate::catalog::VideoSource::Embed(
                    "https://www.youtube.com/embed/x".into(),
                ),
                title: "REEL".into(),
            },
            &std::path::PathBuf::from("media"),
        );
        let _element = view(&app);
    }
}
