// SPDX-License-Identifier: MPL-2.0
//! Landing-page gallery: category tabs over a mosaic of featured work.
//!
//! The mosaic re-packs only when the active filter changes. Tiles map
//! their size class to a fixed cell span; clicking a video tile asks the
//! parent to open the modal, clicking a photo does nothing.

use crate::catalog::{self, CategoryFilter, Kind, MediaEntry, VideoSource};
use crate::i18n::fluent::I18n;
use crate::thumbnails::ThumbnailCache;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, Column, Container, Row, Space, Stack, Text};
use iced::{Element, Length};

/// Maximum columns in the mosaic.
const GRID_COLUMNS: u8 = 4;

/// Gallery state: nothing but the active filter.
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

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub thumbnails: &'a ThumbnailCache,
}

/// Messages emitted by the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    FilterSelected(CategoryFilter),
    /// Index into the featured catalog.
    EntryPressed(usize),
    OpenPortfolio,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// A video tile was activated; the modal should open with this payload.
    PlayVideo { source: VideoSource, title: String },
    OpenPortfolio,
}

/// Process a gallery message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::FilterSelected(filter) => {
            state.filter = filter;
            Event::None
        }
        Message::EntryPressed(index) => match catalog::featured().get(index) {
            Some(entry) if entry.kind == Kind::Video => {
                // The constructor guarantees a source for every video.
                match entry.video_source() {
                    Some(source) => Event::PlayVideo {
                        source: source.clone(),
                        title: entry.title.to_string(),
                    },
                    None => Event::None,
                }
            }
            _ => Event::None,
        },
        Message::OpenPortfolio => Event::OpenPortfolio,
    }
}

/// Render the gallery section.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let kicker = Text::new(ctx.i18n.tr("gallery-kicker"))
        .size(typography::MONO_LABEL)
        .color(palette::TEXT_GRAY);
    let title = Text::new(ctx.i18n.tr("gallery-title")).size(typography::TITLE_LG);

    let header = Row::new()
        .align_y(Vertical::Bottom)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(kicker)
                .push(title),
        )
        .push(Space::new().width(Length::Fill))
        .push(build_tabs(&ctx));

    // Indices into the full catalog ride along so a tile press can name
    // its entry without re-deriving the filtered sequence.
    let filtered: Vec<(usize, &'static MediaEntry)> = catalog::featured()
        .iter()
        .enumerate()
        .filter(|(_, entry)| ctx.state.filter.matches(entry))
        .collect();

    let body: Element<'a, Message> = if filtered.is_empty() {
        build_empty_state(&ctx)
    } else {
        build_mosaic(&ctx, &filtered)
    };

    let portfolio_link = button(
        Text::new(ctx.i18n.tr("gallery-portfolio-link")).size(typography::MONO_LABEL),
    )
    .on_press(Message::OpenPortfolio)
    .style(styles::button::outline)
    .padding([spacing::XS, spacing::MD]);

    Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(header)
        .push(body)
        .push(portfolio_link)
        .into()
}

fn build_tabs<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::MD).align_y(Vertical::Center);
    for tab in CategoryFilter::tabs() {
        let active = tab == ctx.state.filter;
        row = row.push(
            button(Text::new(ctx.i18n.tr(tab.label_key())).size(typography::MONO_LABEL))
                .on_press(Message::FilterSelected(tab))
                .style(styles::button::tab(active))
                .padding([spacing::XXS, spacing::SM]),
        );
    }
    row.into()
}

fn build_empty_state<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Container::new(
        Text::new(ctx.i18n.tr("gallery-empty"))
            .size(typography::BODY)
            .color(palette::TEXT_GRAY),
    )
    .width(Length::Fill)
    .padding(spacing::SECTION)
    .align_x(Horizontal::Center)
    .into()
}

/// Packs filtered entries into rows of at most `GRID_COLUMNS` column spans.
/// Pure and deterministic so the layout is testable without a renderer.
fn pack_rows<'e>(
    entries: &[(usize, &'e MediaEntry)],
) -> Vec<Vec<(usize, &'e MediaEntry)>> {
    let mut rows: Vec<Vec<(usize, &MediaEntry)>> = Vec::new();
    let mut current: Vec<(usize, &MediaEntry)> = Vec::new();
    let mut used: u8 = 0;

    for &(index, entry) in entries {
        let (cols, _) = entry.size_class.span();
        if used + cols > GRID_COLUMNS && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }
        used += cols;
        current.push((index, entry));
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

fn build_mosaic<'a>(
    ctx: &ViewContext<'a>,
    filtered: &[(usize, &'static MediaEntry)],
) -> Element<'a, Message> {
    let mut column = Column::new().spacing(sizing::GRID_GAP);

    for row_entries in pack_rows(filtered) {
        let mut row = Row::new().spacing(sizing::GRID_GAP);
        for (index, entry) in row_entries {
            row = row.push(build_tile(ctx, index, entry));
        }
        column = column.push(row);
    }

    column.into()
}

fn tile_dimensions(entry: &MediaEntry) -> (f32, f32) {
    let (cols, rows) = entry.size_class.span();
    let width = f32::from(cols) * sizing::GRID_CELL + f32::from(cols - 1) * sizing::GRID_GAP;
    let height = f32::from(rows) * sizing::GRID_CELL + f32::from(rows - 1) * sizing::GRID_GAP;
    (width, height)
}

fn build_tile<'a>(
    ctx: &ViewContext<'a>,
    index: usize,
    entry: &'static MediaEntry,
) -> Element<'a, Message> {
    let (width, height) = tile_dimensions(entry);

    let backdrop: Element<'a, Message> = match ctx.thumbnails.handle(entry.thumbnail_url) {
        Some(handle) => image(handle.clone())
            .content_fit(iced::ContentFit::Cover)
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .into(),
        None => Container::new(Space::new())
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
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
        .push(Text::new(entry.title).size(typography::TITLE_SM));

    let caption_overlay = Container::new(caption)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .align_y(Vertical::Bottom)
        .padding(spacing::SM);

    let mut stack = Stack::new().push(backdrop).push(caption_overlay);

    if entry.kind == Kind::Video {
        let badge = Container::new(Text::new("▶").size(typography::TITLE_SM))
            .width(Length::Fixed(sizing::PLAY_BADGE))
            .height(Length::Fixed(sizing::PLAY_BADGE))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::overlay::play_badge);
        stack = stack.push(
            Container::new(badge)
                .width(Length::Fixed(width))
                .height(Length::Fixed(height))
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );
    }

    button(stack)
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
    fn filter_selection_updates_state_without_event() {
        let mut state = State::new();
        let event = update(
            &mut state,
            Message::FilterSelected(CategoryFilter::Only(Category::Documentary)),
        );
        assert!(matches!(event, Event::None));
        assert_eq!(state.filter(), CategoryFilter::Only(Category::Documentary));
    }

    #[test]
    fn pressing_a_video_entry_requests_the_modal() {
        let mut state = State::new();
        // Entry 0 of the featured catalog is a video.
        let event = update(&mut state, Message::EntryPressed(0));
        match event {
            Event::PlayVideo { source, title } => {
                assert_eq!(title, "URBAN MOVEMENT 24");
                assert!(matches!(source, VideoSource::Embed(_)));
            }
            other => panic!("expected PlayVideo, got {other:?}"),
        }
    }

    #[test]
    fn pressing_a_photo_entry_does_nothing() {
        let mut state = State::new();
        // Entry 1 is a photo.
        let event = update(&mut state, Message::EntryPressed(1));
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn pressing_out_of_range_is_a_no_op() {
        let mut state = State::new();
        let event = update(&mut state, Message::EntryPressed(999));
        assert!(matches!(event, Event::None));
    }

    fn indexed_featured() -> Vec<(usize, &'static MediaEntry)> {
        catalog::featured().iter().enumerate().collect()
    }

    #[test]
    fn pack_rows_never_exceeds_the_column_count() {
        for row in pack_rows(&indexed_featured()) {
            let total: u8 = row.iter().map(|(_, e)| e.size_class.span().0).sum();
            assert!(total <= GRID_COLUMNS);
        }
    }

    #[test]
    fn pack_rows_preserves_entry_order() {
        let packed: Vec<usize> = pack_rows(&indexed_featured())
            .into_iter()
            .flatten()
            .map(|(index, _)| index)
            .collect();
        assert_eq!(packed, (0..catalog::featured().len()).collect::<Vec<_>>());
    }

    #[test]
    fn gallery_view_renders_for_every_tab() {
        let i18n = I18n::default();
        let thumbnails = ThumbnailCache::new();
        for tab in CategoryFilter::tabs() {
            let mut state = State::new();
            update(&mut state, Message::FilterSelected(tab));
            let ctx = ViewContext {
                i18n: &i18n,
                state: &state,
                thumbnails: &thumbnails,
            };
            let _element = view(ctx);
        }
    }
}
