// SPDX-License-Identifier: MPL-2.0
//! `fotocicleta` is the desktop portfolio of the FOTOCICLETA visual
//! production studio, built with the Iced GUI framework.
//!
//! It presents the studio's featured and archived productions as a
//! filterable gallery with inline video playback, and composes contact
//! drafts as outgoing-mail deep links. It demonstrates internationalization
//! with Fluent, user preference management, and modular UI design.

#![doc(html_root_url = "https://docs.rs/fotocicleta/0.2.0")]

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod mailto;
pub mod thumbnails;
pub mod ui;
pub mod video_player;
