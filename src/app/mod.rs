// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between screens.
//!
//! The `App` struct wires together the domains (catalog presentation,
//! modal playback, contact composition, localization) and translates
//! component events into side effects like scrolling, delayed state
//! clears, and deep-link handoffs. Policy decisions (window sizing,
//! delay durations, the media directory fallback) stay close to the main
//! update loop so user-facing behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::i18n::fluent::I18n;
use crate::thumbnails::{self, ThumbnailCache};
use crate::ui::contact_form;
use crate::ui::faq;
use crate::ui::gallery;
use crate::ui::notifications;
use crate::ui::portfolio;
use crate::ui::video_modal;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const MIN_WINDOW_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 640;

/// Fallback media directory when neither the CLI nor the config names one.
const DEFAULT_MEDIA_DIR: &str = "media";

/// Root Iced application state bridging UI components and localization.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    /// Whether the hamburger menu is open.
    menu_open: bool,
    gallery: gallery::State,
    portfolio: portfolio::State,
    faq: faq::State,
    contact_form: contact_form::State,
    video_modal: video_modal::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    thumbnails: ThumbnailCache,
    /// Root for local `videoSource` paths.
    media_dir: PathBuf,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("modal_open", &self.video_modal.is_open())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Landing,
            menu_open: false,
            gallery: gallery::State::new(),
            portfolio: portfolio::State::new(),
            faq: faq::State::new(),
            contact_form: contact_form::State::new(),
            video_modal: video_modal::State::new(),
            notifications: notifications::Manager::new(),
            thumbnails: ThumbnailCache::new(),
            media_dir: PathBuf::from(DEFAULT_MEDIA_DIR),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the thumbnail fetches
    /// for every catalog entry.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = match config::load() {
            Ok(config) => (config, false),
            Err(_) => (config::Config::default(), true),
        };
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.media_dir = flags
            .media_dir
            .or(config.media_dir)
            .map_or_else(|| PathBuf::from(DEFAULT_MEDIA_DIR), PathBuf::from);

        if config_warning {
            app.notifications
                .push(notifications::Notification::warning(
                    "notification-config-warning",
                ));
        }

        let task = app.spawn_thumbnail_fetches();
        (app, task)
    }

    /// One fetch task per unique thumbnail URL across both catalogs.
    fn spawn_thumbnail_fetches(&mut self) -> Task<Message> {
        let urls = crate::catalog::portfolio()
            .iter()
            .map(|entry| entry.thumbnail_url);
        let pending = self.thumbnails.claim_pending(urls);

        let tasks = pending.into_iter().map(|url| {
            Task::perform(
                async move {
                    let result = thumbnails::fetch(url.clone()).await;
                    (url, result)
                },
                |(url, result)| Message::ThumbnailFetched { url, result },
            )
        });
        Task::batch(tasks)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.screen {
            Screen::Landing => app_name,
            Screen::Portfolio => {
                format!("{} - {}", self.i18n.tr("portfolio-title"), app_name)
            }
        }
    }

    fn theme(&self) -> Theme {
        // The studio identity is dark-only.
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_app_starts_on_landing_with_closed_modal() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Landing);
        assert!(!app.video_modal.is_open());
        assert!(!app.menu_open);
    }

    #[test]
    fn new_claims_every_portfolio_thumbnail() {
        let flags = Flags::default();
        let (app, _task) = App::new(flags);
        for entry in crate::catalog::portfolio() {
            assert!(app.thumbnails.get(entry.thumbnail_url).is_some());
        }
    }

    #[test]
    fn cli_media_dir_wins_over_default() {
        let flags = Flags {
            lang: None,
            media_dir: Some("/srv/footage".into()),
        };
        let (app, _task) = App::new(flags);
        assert_eq!(app.media_dir, PathBuf::from("/srv/footage"));
    }

    #[test]
    fn title_reflects_the_active_screen() {
        let mut app = App::default();
        let landing_title = app.title();
        app.screen = Screen::Portfolio;
        assert_ne!(app.title(), landing_title);
    }
}
