// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the main `update` function and the specialized
//! event handlers for each component. Side effects are limited to
//! scrolling, the two cosmetic delays (modal clear, submit latency), and
//! deep-link handoffs to the platform.

use super::{App, Message, Screen};
use crate::mailto::CONTACT_ADDRESS;
use crate::ui::contact_form::{self, Event as ContactFormEvent};
use crate::ui::faq::{self, Event as FaqEvent};
use crate::ui::footer::{self, Event as FooterEvent};
use crate::ui::gallery::{self, Event as GalleryEvent};
use crate::ui::hero::{self, Event as HeroEvent};
use crate::ui::navbar::{self, Event as NavbarEvent, Section, WHATSAPP_URL};
use crate::ui::portfolio::{self, Event as PortfolioEvent};
use crate::ui::video_modal::{self, Event as VideoModalEvent};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;

/// Identifier of the landing screen's scrollable.
pub const LANDING_SCROLL_ID: &str = "landing-scrollable";

/// Vertical position of each section within the landing scroll, as a
/// fraction of the full scroll range. Tuned to the section order in
/// `view::landing`.
fn scroll_target(section: Section) -> f32 {
    match section {
        Section::Gallery => 0.10,
        Section::Systems => 0.40,
        Section::Process => 0.52,
        Section::Services => 0.64,
        Section::Differential => 0.76,
    }
}

fn snap_landing_to(y: f32) -> Task<Message> {
    operation::snap_to(Id::new(LANDING_SCROLL_ID), RelativeOffset { x: 0.0, y })
}

/// Fire-and-forget deep-link handoff. The platform handler owns the rest;
/// no outcome is observable beyond the attempt.
fn open_deep_link(url: &str) {
    let _ = open::that(url);
}

/// Main update entrypoint: routes messages to component updates and maps
/// the resulting events to tasks.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(msg) => {
            let event = navbar::update(msg, &mut app.menu_open);
            handle_navbar_event(app, event)
        }
        Message::Hero(msg) => {
            let event = hero::update(&msg);
            handle_hero_event(event)
        }
        Message::Gallery(msg) => {
            let event = gallery::update(&mut app.gallery, msg);
            handle_gallery_event(app, event)
        }
        Message::Portfolio(msg) => {
            let event = portfolio::update(&mut app.portfolio, msg);
            handle_portfolio_event(app, event)
        }
        Message::Faq(msg) => {
            let event = faq::update(&mut app.faq, msg);
            handle_faq_event(event)
        }
        Message::ContactForm(msg) => {
            let event = contact_form::update(&mut app.contact_form, msg);
            handle_contact_form_event(app, event)
        }
        Message::Footer(msg) => {
            let event = footer::update(&msg);
            handle_footer_event(event)
        }
        Message::VideoModal(msg) => {
            let event = video_modal::update(&mut app.video_modal, msg);
            handle_video_modal_event(event)
        }
        Message::Notification(msg) => {
            app.notifications.handle_message(&msg);
            Task::none()
        }
        Message::ThumbnailFetched { url, result } => {
            app.thumbnails.insert(url, result);
            Task::none()
        }
    }
}

/// Navigating away closes an open modal; the payload clear still runs
/// through the usual delayed path.
fn switch_screen(app: &mut App, screen: Screen) -> Task<Message> {
    app.screen = screen;
    app.menu_open = false;

    match app.video_modal.close() {
        Some(generation) => schedule_modal_clear(generation),
        None => Task::none(),
    }
}

fn schedule_modal_clear(generation: u64) -> Task<Message> {
    Task::perform(
        tokio::time::sleep(video_modal::CLEAR_DELAY),
        move |()| Message::VideoModal(video_modal::Message::PayloadCleared { generation }),
    )
}

fn handle_navbar_event(app: &mut App, event: NavbarEvent) -> Task<Message> {
    match event {
        NavbarEvent::None => Task::none(),
        NavbarEvent::GoToTop => snap_landing_to(0.0),
        NavbarEvent::GoToSection(section) => snap_landing_to(scroll_target(section)),
        NavbarEvent::OpenWhatsApp => {
            open_deep_link(WHATSAPP_URL);
            Task::none()
        }
        NavbarEvent::ComposeMail => {
            open_deep_link(&format!("mailto:{CONTACT_ADDRESS}"));
            app.notifications
                .push(crate::ui::notifications::Notification::info(
                    "notification-mail-client",
                ));
            Task::none()
        }
    }
}

fn handle_hero_event(event: HeroEvent) -> Task<Message> {
    match event {
        HeroEvent::ViewGallery => snap_landing_to(scroll_target(Section::Gallery)),
        HeroEvent::ViewServices => snap_landing_to(scroll_target(Section::Services)),
    }
}

fn handle_gallery_event(app: &mut App, event: GalleryEvent) -> Task<Message> {
    match event {
        GalleryEvent::None => Task::none(),
        GalleryEvent::PlayVideo { source, title } => {
            app.video_modal
                .open(video_modal::Payload { source, title }, &app.media_dir);
            Task::none()
        }
        GalleryEvent::OpenPortfolio => switch_screen(app, Screen::Portfolio),
    }
}

fn handle_portfolio_event(app: &mut App, event: PortfolioEvent) -> Task<Message> {
    match event {
        PortfolioEvent::None => Task::none(),
        PortfolioEvent::PlayVideo { source, title } => {
            app.video_modal
                .open(video_modal::Payload { source, title }, &app.media_dir);
            Task::none()
        }
        PortfolioEvent::BackToLanding => switch_screen(app, Screen::Landing),
    }
}

fn handle_faq_event(event: FaqEvent) -> Task<Message> {
    match event {
        FaqEvent::None => Task::none(),
        FaqEvent::ComposeMail => {
            open_deep_link(&format!("mailto:{CONTACT_ADDRESS}"));
            Task::none()
        }
    }
}

fn handle_contact_form_event(app: &mut App, event: ContactFormEvent) -> Task<Message> {
    match event {
        ContactFormEvent::None => Task::none(),
        ContactFormEvent::ScheduleSubmission => Task::perform(
            tokio::time::sleep(contact_form::SUBMIT_DELAY),
            |()| Message::ContactForm(contact_form::Message::SubmitDelayElapsed),
        ),
        ContactFormEvent::LaunchMail(link) => {
            open_deep_link(&link);
            app.notifications
                .push(crate::ui::notifications::Notification::info(
                    "notification-mail-client",
                ));
            Task::none()
        }
    }
}

fn handle_footer_event(event: FooterEvent) -> Task<Message> {
    match event {
        FooterEvent::ComposeMail => {
            open_deep_link(&format!("mailto:{CONTACT_ADDRESS}"));
            Task::none()
        }
        FooterEvent::OpenWhatsApp => {
            open_deep_link(WHATSAPP_URL);
            Task::none()
        }
        FooterEvent::OpenUrl(url) => {
            open_deep_link(url);
            Task::none()
        }
    }
}

fn handle_video_modal_event(event: VideoModalEvent) -> Task<Message> {
    match event {
        VideoModalEvent::None => Task::none(),
        VideoModalEvent::ScheduleClear { generation } => schedule_modal_clear(generation),
        VideoModalEvent::OpenExternal(url) => {
            open_deep_link(&url);
            Task::none()
        }
    }
}
