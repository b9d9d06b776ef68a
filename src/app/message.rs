// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::contact_form;
use crate::ui::faq;
use crate::ui::footer;
use crate::ui::gallery;
use crate::ui::hero;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::portfolio;
use crate::ui::video_modal;
use iced::widget::image::Handle;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero::Message),
    Gallery(gallery::Message),
    Portfolio(portfolio::Message),
    Faq(faq::Message),
    ContactForm(contact_form::Message),
    Footer(footer::Message),
    VideoModal(video_modal::Message),
    Notification(notifications::Message),
    /// Result of one asynchronous thumbnail fetch.
    ThumbnailFetched {
        url: String,
        result: Result<Handle, Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `es`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory of locally bundled video assets. Takes
    /// precedence over the `media_dir` config entry.
    pub media_dir: Option<String>,
}
