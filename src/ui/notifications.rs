// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Non-blocking toasts in the bottom-right corner, used for config-load
//! warnings and the "opening your mail client" notice. A periodic tick
//! drives auto-dismiss; warnings stay up longer than info toasts.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::alignment::Vertical;
use iced::widget::{button, container, Column, Row, Text};
use iced::{Background, Border, Color, Element, Theme};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// Monotonic notification identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
}

impl Severity {
    fn accent(self) -> Color {
        match self {
            Severity::Info => palette::BRAND_RED,
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
        }
    }

    fn auto_dismiss_after(self) -> Duration {
        match self {
            Severity::Info | Severity::Success => Duration::from_secs(3),
            Severity::Warning => Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message_key: String,
    created_at: Instant,
}

impl Notification {
    fn new(severity: Severity, message_key: &str) -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static NEXT_ID: AtomicU64 = AtomicU64::new(0);

        Self {
            id: NotificationId(NEXT_ID.fetch_add(1, Ordering::Relaxed)),
            severity,
            message_key: message_key.to_string(),
            created_at: Instant::now(),
        }
    }

    pub fn info(message_key: &str) -> Self {
        Self::new(Severity::Info, message_key)
    }

    pub fn success(message_key: &str) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn warning(message_key: &str) -> Self {
        Self::new(Severity::Warning, message_key)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    fn expired(&self) -> bool {
        self.created_at.elapsed() >= self.severity.auto_dismiss_after()
    }
}

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Tick for checking auto-dismiss timers.
    Tick,
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting for a free slot.
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a notification, queuing it when all slots are taken.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by ID. Returns true when it was found.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Dismisses every visible notification whose lifetime elapsed.
    pub fn tick(&mut self) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.expired())
            .map(Notification::id)
            .collect();
        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.tick(),
        }
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.queue.is_empty()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(n) => self.visible.push_front(n),
                None => break,
            }
        }
    }

    /// Renders the visible toasts as a vertical stack.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mut column = Column::new().spacing(spacing::XS);
        for notification in &self.visible {
            column = column.push(toast(notification, i18n));
        }
        column.into()
    }
}

fn toast<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
    let accent = notification.severity().accent();

    let dismiss = button(Text::new("✕").size(typography::CAPTION))
        .on_press(Message::Dismiss(notification.id()))
        .style(crate::ui::styles::button::link)
        .padding(spacing::XXS);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(i18n.tr(notification.message_key())).size(typography::BODY))
        .push(dismiss);

    container(row)
        .padding([spacing::XS, spacing::SM])
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::STAGE_800)),
            text_color: Some(palette::WHITE),
            border: Border {
                color: accent,
                width: 1.0,
                radius: radius::MD.into(),
            },
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_fills_slots_then_queues() {
        let mut manager = Manager::new();
        for _ in 0..5 {
            manager.push(Notification::info("notification-mail-client"));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert!(!manager.is_empty());
    }

    #[test]
    fn dismiss_promotes_queued_notifications() {
        let mut manager = Manager::new();
        let mut ids = Vec::new();
        for _ in 0..4 {
            let n = Notification::info("notification-mail-client");
            ids.push(n.id());
            manager.push(n);
        }
        assert_eq!(manager.visible_count(), 3);

        assert!(manager.dismiss(ids[0]));
        assert_eq!(manager.visible_count(), 3);
    }

    #[test]
    fn dismiss_of_unknown_id_is_a_no_op() {
        let mut manager = Manager::new();
        let n = Notification::warning("notification-config-warning");
        let id = n.id();
        manager.push(n);
        assert!(manager.dismiss(id));
        assert!(!manager.dismiss(id));
    }

    #[test]
    fn tick_keeps_fresh_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::info("notification-mail-client"));
        manager.tick();
        assert_eq!(manager.visible_count(), 1);
    }
}
