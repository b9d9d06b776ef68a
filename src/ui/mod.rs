// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - The landing screen is composed from [`hero`], [`sections`], [`gallery`],
//!   [`faq`], [`contact_form`], and [`footer`]
//! - [`portfolio`] - Full archive with filter pills and square tiles
//!
//! # Overlays
//!
//! - [`video_modal`] - Transient playback overlay (one instance at a time)
//! - [`notifications`] - Toast notifications for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Pinned navigation with hamburger menu
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`widgets`] - Custom Iced widgets (animated spinner)

pub mod contact_form;
pub mod design_tokens;
pub mod faq;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod navbar;
pub mod notifications;
pub mod portfolio;
pub mod sections;
pub mod styles;
pub mod video_modal;
pub mod widgets;
