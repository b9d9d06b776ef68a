// SPDX-License-Identifier: MPL-2.0
//! Contact form: four required fields that compose an outgoing-mail deep
//! link on submit.
//!
//! Submission is rejected outright while any field is blank. An accepted
//! submit waits a fixed moment (visual feedback only, no I/O), then the
//! composed `mailto:` link is handed to the platform mail client. There is
//! no delivery signal, so `Sent` is terminal.

use crate::i18n::fluent::I18n;
use crate::mailto::MailDraft;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, Column, Container, Row, Text, TextInput};
use iced::{Element, Length};
use std::time::Duration;

/// Cosmetic delay between an accepted submit and the mail-client handoff.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Sent,
}

/// Form state, owned by the root application.
#[derive(Debug, Default)]
pub struct State {
    draft: MailDraft,
    status: SubmissionStatus,
    /// Rotation of the in-flight spinner, advanced by ticks while
    /// submitting.
    spinner_rotation: f32,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    #[must_use]
    pub fn draft(&self) -> &MailDraft {
        &self.draft
    }
}

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the form.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    SubjectChanged(String),
    BodyChanged(String),
    SubmitPressed,
    /// Fired by the delayed task scheduled on an accepted submit.
    SubmitDelayElapsed,
    /// Animation tick while a submission is in flight.
    SpinnerTick,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Schedule [`Message::SubmitDelayElapsed`] after [`SUBMIT_DELAY`].
    ScheduleSubmission,
    /// Hand the composed deep link to the mail client.
    LaunchMail(String),
}

/// Process a form message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::NameChanged(value) => {
            state.draft.name = value;
            Event::None
        }
        Message::EmailChanged(value) => {
            state.draft.email = value;
            Event::None
        }
        Message::SubjectChanged(value) => {
            state.draft.subject = value;
            Event::None
        }
        Message::BodyChanged(value) => {
            state.draft.message = value;
            Event::None
        }
        Message::SubmitPressed => {
            // Required-field gate: an incomplete draft never leaves Idle and
            // no link is composed.
            if state.status != SubmissionStatus::Idle || !state.draft.is_complete() {
                return Event::None;
            }
            state.status = SubmissionStatus::Submitting;
            Event::ScheduleSubmission
        }
        Message::SubmitDelayElapsed => {
            if state.status != SubmissionStatus::Submitting {
                return Event::None;
            }
            state.status = SubmissionStatus::Sent;
            Event::LaunchMail(state.draft.compose())
        }
        Message::SpinnerTick => {
            state.spinner_rotation += 0.15;
            Event::None
        }
    }
}

/// Render the contact panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("contact-title")).size(typography::TITLE_SM);

    let name = labeled_input(
        &ctx,
        "contact-label-name",
        "contact-placeholder-name",
        &ctx.state.draft.name,
        Message::NameChanged,
    );
    let email = labeled_input(
        &ctx,
        "contact-label-email",
        "contact-placeholder-email",
        &ctx.state.draft.email,
        Message::EmailChanged,
    );
    let subject = labeled_input(
        &ctx,
        "contact-label-subject",
        "contact-placeholder-subject",
        &ctx.state.draft.subject,
        Message::SubjectChanged,
    );
    let body = labeled_input(
        &ctx,
        "contact-label-message",
        "contact-placeholder-message",
        &ctx.state.draft.message,
        Message::BodyChanged,
    );

    let identity_row = Row::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(name)
        .push(email);

    let submit_key = match ctx.state.status {
        SubmissionStatus::Idle => "contact-submit",
        SubmissionStatus::Submitting => "contact-submitting",
        SubmissionStatus::Sent => "contact-sent",
    };
    let submit_label = Text::new(ctx.i18n.tr(submit_key)).size(typography::BODY);

    let submit_content: Element<'a, Message> = match ctx.state.status {
        SubmissionStatus::Submitting => Row::new()
            .spacing(spacing::SM)
            .align_y(iced::alignment::Vertical::Center)
            .push(
                crate::ui::widgets::AnimatedSpinner::new(
                    palette::WHITE,
                    ctx.state.spinner_rotation,
                )
                .with_size(18.0)
                .into_element(),
            )
            .push(submit_label)
            .into(),
        _ => submit_label.into(),
    };

    let submit = match ctx.state.status {
        SubmissionStatus::Idle => button(submit_content)
            .on_press(Message::SubmitPressed)
            .style(styles::button::primary),
        // In flight or done: the action stays visible but inert.
        _ => button(submit_content).style(styles::button::disabled()),
    }
    .width(Length::Fill)
    .padding(spacing::SM);

    let hint = Text::new(ctx.i18n.tr("contact-hint"))
        .size(typography::CAPTION)
        .color(palette::TEXT_GRAY);

    let panel = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(identity_row)
        .push(subject)
        .push(body)
        .push(submit)
        .push(
            Container::new(hint)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        );

    Container::new(panel)
        .width(Length::Fixed(sizing::CONTENT_WIDTH * 0.6))
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn labeled_input<'a>(
    ctx: &ViewContext<'a>,
    label_key: &str,
    placeholder_key: &str,
    value: &str,
    on_input: fn(String) -> Message,
) -> Element<'a, Message> {
    let label = Text::new(ctx.i18n.tr(label_key))
        .size(typography::CAPTION)
        .color(palette::TEXT_GRAY);

    let input = TextInput::new(&ctx.i18n.tr(placeholder_key), value)
        .on_input(on_input)
        .padding(spacing::XS)
        .size(typography::BODY)
        .width(Length::Fill);

    Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(label)
        .push(input)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> State {
        let mut state = State::new();
        for message in [
            Message::NameChanged("Ana".into()),
            Message::EmailChanged("ana@x.com".into()),
            Message::SubjectChanged("Campaña".into()),
            Message::BodyChanged("Hola".into()),
        ] {
            update(&mut state, message);
        }
        state
    }

    #[test]
    fn field_edits_update_the_draft() {
        let state = filled();
        assert_eq!(state.draft().name, "Ana");
        assert_eq!(state.draft().email, "ana@x.com");
        assert_eq!(state.draft().subject, "Campaña");
        assert_eq!(state.draft().message, "Hola");
    }

    #[test]
    fn complete_draft_submits_and_schedules_delay() {
        let mut state = filled();
        let event = update(&mut state, Message::SubmitPressed);
        assert!(matches!(event, Event::ScheduleSubmission));
        assert_eq!(state.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn blank_field_rejects_submit_before_submitting() {
        let mut state = filled();
        update(&mut state, Message::BodyChanged("   ".into()));

        let event = update(&mut state, Message::SubmitPressed);
        assert!(matches!(event, Event::None));
        assert_eq!(state.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn delay_elapsed_composes_link_and_marks_sent() {
        let mut state = filled();
        update(&mut state, Message::SubmitPressed);

        let event = update(&mut state, Message::SubmitDelayElapsed);
        match event {
            Event::LaunchMail(link) => {
                assert!(link.starts_with("mailto:ralphie@fotocicleta.com?"));
                assert!(link.contains("subject="));
                assert!(link.contains("body="));
            }
            other => panic!("expected LaunchMail, got {other:?}"),
        }
        assert_eq!(state.status(), SubmissionStatus::Sent);
    }

    #[test]
    fn stray_delay_message_is_ignored_when_idle() {
        let mut state = filled();
        let event = update(&mut state, Message::SubmitDelayElapsed);
        assert!(matches!(event, Event::None));
        assert_eq!(state.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn second_submit_after_sent_is_inert() {
        let mut state = filled();
        update(&mut state, Message::SubmitPressed);
        update(&mut state, Message::SubmitDelayElapsed);

        let event = update(&mut state, Message::SubmitPressed);
        assert!(matches!(event, Event::None));
        assert_eq!(state.status(), SubmissionStatus::Sent);
    }

    #[test]
    fn contact_view_renders_in_every_status() {
        let i18n = I18n::default();

        let mut state = filled();
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });

        update(&mut state, Message::SubmitPressed);
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });

        update(&mut state, Message::SubmitDelayElapsed);
        let _ = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}
