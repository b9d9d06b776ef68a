// SPDX-License-Identifier: MPL-2.0
//! Video modal: a transient overlay playing one selected production.
//!
//! Lifecycle: closed → open (payload set) → closing (close requested,
//! payload kept for the exit animation) → closed (payload cleared after a
//! short delay). Opening while open replaces the payload; opening while
//! closing supersedes the pending clear. Closing when already closed is a
//! no-op. Clears carry the generation they were scheduled for, so a stale
//! clear can never wipe a newer payload.

use crate::catalog::VideoSource;
use crate::error::VideoError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::video_player::{self, Player};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, Column, Container, Row, Space, Stack, Text};
use iced::{Element, Length};
use std::path::Path;
use std::time::Duration;

/// How long a closed modal keeps its payload for the exit transition.
pub const CLEAR_DELAY: Duration = Duration::from_millis(300);

/// What the modal is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub source: VideoSource,
    pub title: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Phase {
    #[default]
    Closed,
    Open,
    Closing,
}

/// Modal state, owned by the root application.
#[derive(Debug, Default)]
pub struct State {
    phase: Phase,
    payload: Option<Payload>,
    /// Bumped on every open; pending clears for older generations are stale.
    generation: u64,
    player: Option<Player>,
    player_error: Option<VideoError>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    #[must_use]
    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Poll cadence of the inline player, when one is running.
    #[must_use]
    pub fn tick_interval(&self) -> Option<std::time::Duration> {
        self.player.as_ref().map(Player::tick_interval)
    }

    /// True while an inline player needs frame ticks.
    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        self.phase == Phase::Open
            && self
                .player
                .as_ref()
                .is_some_and(|p| p.is_playing() || p.frame.is_none())
    }

    /// Opens (or re-targets) the modal. A local source spins up the inline
    /// player immediately; playback is automatic.
    pub fn open(&mut self, payload: Payload, media_dir: &Path) {
        self.generation = self.generation.wrapping_add(1);
        self.phase = Phase::Open;
        self.player = None;
        self.player_error = None;

        if let Some(path) = payload.source.resolve_local(media_dir) {
            match Player::spawn(path) {
                Ok(player) => self.player = Some(player),
                Err(err) => {
                    self.player_error = Some(match err {
                        crate::error::Error::Video(video) => video,
                        other => VideoError::Other(other.to_string()),
                    });
                }
            }
        }

        self.payload = Some(payload);
    }

    /// Requests close. Returns the generation to schedule a payload clear
    /// for, or `None` when there is nothing to do (already closed/closing).
    pub fn close(&mut self) -> Option<u64> {
        if self.phase != Phase::Open {
            return None;
        }
        self.phase = Phase::Closing;
        // Stop footage immediately; the exit transition only needs the title.
        self.player = None;
        Some(self.generation)
    }

    /// Clears the payload if `generation` is still current and the modal is
    /// still closing. Stale or late clears are ignored.
    pub fn clear(&mut self, generation: u64) {
        if self.phase == Phase::Closing && generation == self.generation {
            self.phase = Phase::Closed;
            self.payload = None;
            self.player_error = None;
        }
    }
}

/// Contextual data needed to render the modal.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the modal.
#[derive(Debug, Clone)]
pub enum Message {
    CloseRequested,
    BackdropPressed,
    TogglePlayback,
    /// Watch an embed in the platform player.
    OpenExternal,
    /// Fired by the delayed clear task scheduled at close time.
    PayloadCleared { generation: u64 },
    /// Frame pump for the inline player.
    PlaybackTick,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Schedule a payload clear after [`CLEAR_DELAY`].
    ScheduleClear { generation: u64 },
    /// Hand an embed URL to the platform handler.
    OpenExternal(String),
}

/// Process a modal message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::CloseRequested | Message::BackdropPressed => match state.close() {
            Some(generation) => Event::ScheduleClear { generation },
            None => Event::None,
        },
        Message::TogglePlayback => {
            if let Some(player) = state.player.as_mut() {
                player.toggle_playback();
            }
            Event::None
        }
        Message::OpenExternal => match state.payload() {
            Some(Payload {
                source: VideoSource::Embed(url),
                ..
            }) => Event::OpenExternal(url.clone()),
            _ => Event::None,
        },
        Message::PayloadCleared { generation } => {
            state.clear(generation);
            Event::None
        }
        Message::PlaybackTick => {
            if let Some(player) = state.player.as_mut() {
                player.poll();
            }
            Event::None
        }
    }
}

/// Render the modal overlay. Only meaningful while the modal is open; the
/// root view stacks this above the current screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let Some(payload) = ctx.state.payload() else {
        return Space::new().into();
    };

    let close_button = button(Text::new("✕").size(typography::TITLE_SM))
        .on_press(Message::CloseRequested)
        .style(styles::button::link)
        .padding(spacing::XS);

    let title_badge = Container::new(
        Text::new(payload.title.clone()).size(typography::MONO_LABEL),
    )
    .padding([spacing::XXS, spacing::SM])
    .style(styles::overlay::badge);

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(title_badge)
        .push(Space::new().width(Length::Fill))
        .push(close_button);

    // One dispatch on the source variant decides the whole player surface.
    let player_surface: Element<'a, Message> = match &payload.source {
        VideoSource::Local(_) => build_inline_player(&ctx),
        VideoSource::Embed(url) => build_embed_pane(&ctx, url),
    };

    let surface = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(player_surface),
    )
    .width(Length::Fixed(sizing::MODAL_WIDTH))
    .padding(spacing::MD)
    .style(styles::overlay::surface);

    // Clicking the backdrop closes; clicks on the surface do not bubble.
    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::BackdropPressed);

    Stack::new()
        .push(backdrop)
        .push(
            Container::new(surface)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        )
        .into()
}

fn build_inline_player<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    if let Some(error) = &ctx.state.player_error {
        return build_error_pane(ctx, error);
    }

    let Some(player) = &ctx.state.player else {
        return build_error_pane(ctx, &VideoError::Other("player missing".into()));
    };

    if let Some(error) = player.error() {
        return build_error_pane(ctx, error);
    }

    let frame: Element<'a, Message> = match &player.frame {
        Some(handle) => iced::widget::image(handle.clone())
            .content_fit(iced::ContentFit::Contain)
            .width(Length::Fill)
            .into(),
        None => Container::new(
            Text::new(ctx.i18n.tr("modal-loading"))
                .size(typography::BODY)
                .color(palette::TEXT_GRAY),
        )
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MODAL_WIDTH * 9.0 / 16.0))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into(),
    };

    let toggle_label = if player.is_playing() { "⏸" } else { "▶" };
    let transport = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            button(Text::new(toggle_label).size(typography::BODY))
                .on_press(Message::TogglePlayback)
                .style(styles::button::outline)
                .padding([spacing::XXS, spacing::SM]),
        )
        .push(
            Text::new(format!(
                "{} / {}",
                video_player::format_timestamp(player.position_secs),
                video_player::format_timestamp(player.duration_secs),
            ))
            .size(typography::MONO_LABEL)
            .color(palette::TEXT_GRAY),
        );

    Column::new()
        .spacing(spacing::SM)
        .push(frame)
        .push(transport)
        .into()
}

/// Embeds have no inline surface on the desktop; playback is delegated to
/// the platform handler with its default controls.
fn build_embed_pane<'a>(ctx: &ViewContext<'a>, url: &str) -> Element<'a, Message> {
    let watch = button(
        Text::new(ctx.i18n.tr("modal-watch-external")).size(typography::BODY),
    )
    .on_press(Message::OpenExternal)
    .style(styles::button::primary)
    .padding([spacing::SM, spacing::LG]);

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(
                Text::new(ctx.i18n.tr("modal-embed-hint"))
                    .size(typography::BODY)
                    .color(palette::TEXT_GRAY),
            )
            .push(watch)
            .push(
                Text::new(url.to_string())
                    .size(typography::CAPTION)
                    .color(palette::TEXT_GRAY),
            ),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::MODAL_WIDTH * 9.0 / 16.0))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .into()
}

fn build_error_pane<'a>(ctx: &ViewContext<'a>, error: &VideoError) -> Element<'a, Message> {
    Container::new(
        Text::new(ctx.i18n.tr(error.i18n_key()))
            .size(typography::BODY)
            .color(palette::ERROR_500),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::MODAL_WIDTH * 9.0 / 16.0))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .into()
}
