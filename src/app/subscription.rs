// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Every subscription here is conditional: ticks run only while the state
//! they drive is live (a playing modal video, an in-flight submission,
//! visible toasts), so an idle app schedules nothing.

use super::{App, Message};
use crate::ui::contact_form::{self, SubmissionStatus};
use crate::ui::notifications;
use crate::ui::video_modal;
use iced::{time, Subscription};
use std::time::Duration;

/// Cadence for toast auto-dismiss checks.
const NOTIFICATION_TICK: Duration = Duration::from_millis(500);

/// Cadence for the submit spinner animation.
const SPINNER_TICK: Duration = Duration::from_millis(16);

pub fn subscription(app: &App) -> Subscription<Message> {
    let mut subscriptions = Vec::new();

    if app.video_modal.needs_ticks() {
        let interval = app
            .video_modal
            .tick_interval()
            .unwrap_or(Duration::from_millis(33));
        subscriptions.push(
            time::every(interval)
                .map(|_| Message::VideoModal(video_modal::Message::PlaybackTick)),
        );
    }

    if app.contact_form.status() == SubmissionStatus::Submitting {
        subscriptions.push(
            time::every(SPINNER_TICK)
                .map(|_| Message::ContactForm(contact_form::Message::SpinnerTick)),
        );
    }

    if !app.notifications.is_empty() {
        subscriptions.push(
            time::every(NOTIFICATION_TICK)
                .map(|_| Message::Notification(notifications::Message::Tick)),
        );
    }

    Subscription::batch(subscriptions)
}
