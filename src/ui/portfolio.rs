// SPDX-License-Identifier: MPL-2.0
//! Portfolio screen: the full archive behind the landing gallery.
//!
//! Same filter contract as the gallery, applied to the nine-entry catalog
//! and laid out as uniform square tiles with pill filters. An empty filter
//! result renders the explicit empty state, never an error.

use crate::catalog::{self, CategoryFilter, Kind, MediaEntry, VideoSource};
use crate::i18n::fluent::I18n;
use crate::thumbnails::ThumbnailCache;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, Column, Container, Row, Space, Stack, Text};
use iced::{Element, Length};

/// Square tiles per grid row.
const TILES_PER_ROW: usize = 4;

/// Portfolio state: the active filter only.
#[derive(Debug, Default)]
pub struct State {
    filter: CategoryFilter,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }
}

/// Contextual data needed to render the portfolio screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub thumbnails: &'a ThumbnailCache,
}

/// Messages emitted by the portfolio screen.
#[derive(Debug, Clone)]
pub enum Message {
    FilterSelected(CategoryFilter),
    /// Index into the portfolio catalog.
    EntryPressed(usize),
    BackToLanding,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    PlayVideo { source: VideoSource, title: String },
    BackToLanding,
}

/// Process a portfolio message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::FilterSelected(filter) => {
            state.filter = filter;
            Event::None
        }
        Message::EntryPressed(index) => match catalog::portfolio().get(index) {
            Some(entry) if entry.kind == Kind::Video => match entry.video_source() {
                Some(source) => Event::PlayVideo {
                    source: source.clone(),
                    title: entry.title.to_string(),
                },
                None => Event::None,
            },
            _ => Event::None,
        },
        Message::BackToLanding => Event::BackToLanding,
    }
}

/// Render the portfolio screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let back = button(
        Text::new(format!("← {}", ctx.i18n.tr("portfolio-back"))).size(typography::MONO_LABEL),
    )
    .on_press(Message::BackToLanding)
    .style(styles::button::link)
    .padding(spacing::XS);

    let brand = Text::new(ctx.i18n.tr("portfolio-title")).size(typography::LEAD);

    let header = Row::new()
        .align_y(Vertical::Center)
        .padding([spacing::SM, spacing::LG])
        .push(back)
        .push(Space::new().width(Length::Fill))
        .push(brand);

    let filtered: Vec<(usize, &'static MediaEntry)> = catalog::portfolio()
        .iter()
        .enumerate()
        .filter(|(_, entry)| ctx.state.filter.matches(entry))
        .collect();

    let body: Element<'a, Message> = if filtered.is_empty() {
        Container::new(
            Text::new(ctx.i18n.tr("gallery-empty"))
                .size(typography::BODY)
                .color(palette::TEXT_GRAY),
        )
        .width(Length::Fill)
        .padding(spacing::SECTION)
        .align_x(Horizontal::Center)
        .into()
    } else {
        build_grid(&ctx, &filtered)
    };

    let closing = Text::new(ctx.i18n.tr("portfolio-footer"))
        .size(typography::CAPTION)
        .color(palette::TEXT_GRAY);

    Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(header)
        .push(build_pills(&ctx))
        .push(body)
        .push(
            Container::new(closing)
                .padding(spacing::LG)
                .align_x(Horizontal::Center),
        )
        .into()
}

fn build_pills<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::SM).align_y(Vertical::Center);
    for tab in CategoryFilter::tabs() {
        let active = tab == ctx.state.filter;
        row = row.push(
            button(Text::new(ctx.i18n.tr(tab.label_key())).size(typography::MONO_LABEL))
                .on_press(Message::FilterSelected(tab))
                .style(styles::button::tab(active))
                .padding([spacing::XS, spacing::MD]),
        );
    }
    row.into()
}

fn build_grid<'a>(
    ctx: &ViewContext<'a>,
    filtered: &[(usize, &'static MediaEntry)],
) -> Element<'a, Message> {
    let mut column = Column::new().spacing(sizing::GRID_GAP);

    for chunk in filtered.chunks(TILES_PER_ROW) {
        let mut row = Row::new().spacing(sizing::GRID_GAP);
        for &(index, entry) in chunk {
            row = row.push(build_tile(ctx, index, entry));
        }
        column = column.push(row);
    }

    column.into()
}

fn build_tile<'a>(
    ctx: &ViewContext<'a>,
    index: usize,
    entry: &'static MediaEntry,
) -> Element<'a, Message> {
    let edge = sizing::PORTFOLIO_TILE;

    let backdrop: Element<'a, Message> = match ctx.thumbnails.handle(entry.thumbnail_url) {
        Some(handle) => image(handle.clone())
            .content_fit(iced::ContentFit::Cover)
            .width(Length::Fixed(edge))
            .height(Length::Fixed(edge))
            .into(),
        None => Container::new(Space::new())
            .width(Length::Fixed(edge))
            .height(Length::Fixed(edge))
            .style(styles::container::tile_placeholder)
            .into(),
    };

    let category_label = if entry.kind == Kind::Video {
        format!("▶ {}", ctx.i18n.tr(entry.category.label_key()))
    } else {
        ctx.i18n.tr(entry.category.label_key())
    };

    let caption = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(category_label)
                .size(typography::CAPTION)
                .color(palette::BRAND_RED),
        )
        .push(Text::new(entry.title).size(typography::BODY));

    let overlay = Container::new(caption)
        .width(Length::Fixed(edge))
        .height(Length::Fixed(edge))
        .align_y(Vertical::Bottom)
        .padding(spacing::SM);

    button(Stack::new().push(backdrop).push(overlay))
        .on_press(Message::EntryPressed(index))
        .padding(0.0)
        .style(styles::button::tile)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    #[test]
    fn filter_selection_updates_state() {
        let mut state = State::new();
        update(
            &mut state,
            Message::FilterSelected(CategoryFilter::Only(Category::Audiovisual)),
        );
        assert_eq!(state.filter(), CategoryFilter::Only(Category::Audiovisual));
    }

    #[test]
    fn video_press_requests_playback() {
        let mut state = State::new();
        // "STREET VOICES" is the last portfolio entry and a video.
        let last = catalog::portfolio().len() - 1;
        let event = update(&mut state, Message::EntryPressed(last));
        match event {
            Event::PlayVideo { title, .. } => assert_eq!(title, "STREET VOICES"),
            other => panic!("expected PlayVideo, got {other:?}"),
        }
    }

    #[test]
    fn photo_press_is_inert() {
        let mut state = State::new();
        // Entry 1 ("SILENT ARCHITECTURE") is a photo.
        let event = update(&mut state, Message::EntryPressed(1));
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn back_link_emits_event() {
        let mut state = State::new();
        let event = update(&mut state, Message::BackToLanding);
        assert!(matches!(event, Event::BackToLanding));
    }

    #[test]
    fn portfolio_view_renders_every_tab() {
        let i18n = I18n::default();
        let thumbnails = ThumbnailCache::new();
        for tab in CategoryFilter::tabs() {
            let mut state = State::new();
            update(&mut state, Message::FilterSelected(tab));
            let _ = view(ViewContext {
                i18n: &i18n,
                state: &state,
                thumbnails: &thumbnails,
            });
        }
    }
}
