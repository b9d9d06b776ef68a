// SPDX-License-Identifier: MPL-2.0
//! Custom widgets shared across screens.

pub mod animated_spinner;

pub use animated_spinner::AnimatedSpinner;
