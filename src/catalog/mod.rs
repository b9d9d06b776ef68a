// SPDX-License-Identifier: MPL-2.0
//! Media catalog: the static list of studio productions shown by the
//! gallery and portfolio screens, plus the category filter applied to it.
//!
//! The catalog is immutable data. Nothing creates, mutates, or removes
//! entries at runtime; the UI only filters the list for display.

pub mod data;

pub use data::{featured, portfolio};

use std::path::{Path, PathBuf};

/// Grid footprint of a gallery tile. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    /// 2×2 cells
    Large,
    /// 1×2 cells
    Tall,
    /// 1×1 cell
    Normal,
    /// 2×1 cells
    Wide,
}

impl SizeClass {
    /// Fixed (columns, rows) span in the mosaic grid.
    #[must_use]
    pub fn span(self) -> (u8, u8) {
        match self {
            SizeClass::Large => (2, 2),
            SizeClass::Tall => (1, 2),
            SizeClass::Normal => (1, 1),
            SizeClass::Wide => (2, 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Photo,
    Video,
}

/// Production category. Display labels come from the Fluent bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Photography,
    Audiovisual,
    Documentary,
}

impl Category {
    /// All known categories in tab display order.
    pub const ALL: [Category; 3] = [
        Category::Photography,
        Category::Audiovisual,
        Category::Documentary,
    ];

    /// i18n key for the category's display label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Category::Photography => "category-photography",
            Category::Audiovisual => "category-audiovisual",
            Category::Documentary => "category-documentary",
        }
    }
}

/// Where a video entry's footage comes from. The variant is decided once,
/// when the catalog is built, and dispatched once at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
    /// Path under the app's own media directory ("/reel.mp4", "./reel.mp4").
    Local(String),
    /// External embeddable URL, handed to the platform player.
    Embed(String),
}

impl VideoSource {
    /// Classifies a raw source string. Local iff it starts with `/` or `./`.
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        if raw.starts_with('/') || raw.starts_with("./") {
            VideoSource::Local(raw.to_string())
        } else {
            VideoSource::Embed(raw.to_string())
        }
    }

    /// The raw source string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            VideoSource::Local(s) | VideoSource::Embed(s) => s,
        }
    }

    /// Resolves a local source against the configured media directory.
    /// Embed sources have no filesystem location and return `None`.
    #[must_use]
    pub fn resolve_local(&self, media_dir: &Path) -> Option<PathBuf> {
        match self {
            VideoSource::Local(raw) => {
                let relative = raw.trim_start_matches("./").trim_start_matches('/');
                Some(media_dir.join(relative))
            }
            VideoSource::Embed(_) => None,
        }
    }
}

/// One production in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaEntry {
    pub size_class: SizeClass,
    pub kind: Kind,
    pub category: Category,
    pub title: &'static str,
    pub thumbnail_url: &'static str,
    video_source: Option<VideoSource>,
}

impl MediaEntry {
    /// A photo entry. Photos never carry a video source.
    #[must_use]
    pub fn photo(
        size_class: SizeClass,
        category: Category,
        title: &'static str,
        thumbnail_url: &'static str,
    ) -> Self {
        Self {
            size_class,
            kind: Kind::Photo,
            category,
            title,
            thumbnail_url,
            video_source: None,
        }
    }

    /// A video entry. The source is classified as local or embed here,
    /// keeping the `video_source.is_some() == (kind == Video)` invariant
    /// impossible to break from outside.
    #[must_use]
    pub fn video(
        size_class: SizeClass,
        category: Category,
        title: &'static str,
        thumbnail_url: &'static str,
        video_source: &'static str,
    ) -> Self {
        Self {
            size_class,
            kind: Kind::Video,
            category,
            title,
            thumbnail_url,
            video_source: Some(VideoSource::classify(video_source)),
        }
    }

    #[must_use]
    pub fn video_source(&self) -> Option<&VideoSource> {
        self.video_source.as_ref()
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        self.kind == Kind::Video
    }
}

/// Active gallery filter: everything, or a single category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// The "everything" sentinel tab: the full catalog, untouched.
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Tabs in display order: the sentinel first, then every category.
    #[must_use]
    pub fn tabs() -> Vec<CategoryFilter> {
        let mut tabs = vec![CategoryFilter::All];
        tabs.extend(Category::ALL.into_iter().map(CategoryFilter::Only));
        tabs
    }

    /// i18n key for the tab label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            CategoryFilter::All => "filter-all",
            CategoryFilter::Only(category) => category.label_key(),
        }
    }

    #[must_use]
    pub fn matches(self, entry: &MediaEntry) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => entry.category == category,
        }
    }
}

/// Returns the ordered subsequence of `entries` matching `filter`.
///
/// `All` returns every entry; a category with no matches yields an empty
/// vector, which the presenters render as an explicit empty state.
#[must_use]
pub fn filter_entries(entries: &[MediaEntry], filter: CategoryFilter) -> Vec<&MediaEntry> {
    entries.iter().filter(|e| filter.matches(e)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<MediaEntry> {
        vec![
            MediaEntry::video(
                SizeClass::Large,
                Category::Audiovisual,
                "A",
                "https://example.com/a.jpg",
                "https://www.youtube.com/embed/a",
            ),
            MediaEntry::photo(
                SizeClass::Tall,
                Category::Photography,
                "B",
                "https://example.com/b.jpg",
            ),
            MediaEntry::video(
                SizeClass::Wide,
                Category::Documentary,
                "C",
                "https://example.com/c.jpg",
                "/c.mp4",
            ),
            MediaEntry::photo(
                SizeClass::Normal,
                Category::Photography,
                "D",
                "https://example.com/d.jpg",
            ),
        ]
    }

    #[test]
    fn all_returns_catalog_unchanged_in_order() {
        let entries = sample();
        let filtered = filter_entries(&entries, CategoryFilter::All);
        assert_eq!(filtered.len(), entries.len());
        let titles: Vec<_> = filtered.iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn category_filter_returns_only_matches_preserving_order() {
        let entries = sample();
        let filtered = filter_entries(&entries, CategoryFilter::Only(Category::Photography));
        let titles: Vec<_> = filtered.iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["B", "D"]);
        assert!(filtered
            .iter()
            .all(|e| e.category == Category::Photography));
    }

    #[test]
    fn every_known_category_filters_cleanly() {
        let entries = sample();
        for category in Category::ALL {
            let filtered = filter_entries(&entries, CategoryFilter::Only(category));
            assert!(filtered.iter().all(|e| e.category == category));
        }
    }

    #[test]
    fn empty_result_for_unrepresented_category() {
        let entries = vec![MediaEntry::photo(
            SizeClass::Normal,
            Category::Photography,
            "only",
            "https://example.com/only.jpg",
        )];
        let filtered = filter_entries(&entries, CategoryFilter::Only(Category::Documentary));
        assert!(filtered.is_empty());
    }

    #[test]
    fn video_source_present_iff_video() {
        for entry in sample() {
            assert_eq!(entry.is_video(), entry.video_source().is_some());
        }
    }

    #[test]
    fn classify_splits_local_and_embed() {
        assert!(matches!(
            VideoSource::classify("/reel.mp4"),
            VideoSource::Local(_)
        ));
        assert!(matches!(
            VideoSource::classify("./reel.mp4"),
            VideoSource::Local(_)
        ));
        assert!(matches!(
            VideoSource::classify("https://www.youtube.com/embed/x"),
            VideoSource::Embed(_)
        ));
    }

    #[test]
    fn local_source_resolves_under_media_dir() {
        let source = VideoSource::classify("/DEMO REEL.mp4");
        let resolved = source.resolve_local(Path::new("/srv/media")).unwrap();
        assert_eq!(resolved, PathBuf::from("/srv/media/DEMO REEL.mp4"));

        let dotted = VideoSource::classify("./clips/teaser.mp4");
        let resolved = dotted.resolve_local(Path::new("/srv/media")).unwrap();
        assert_eq!(resolved, PathBuf::from("/srv/media/clips/teaser.mp4"));
    }

    #[test]
    fn embed_source_has_no_local_path() {
        let source = VideoSource::classify("https://www.youtube.com/embed/x");
        assert!(source.resolve_local(Path::new("/srv/media")).is_none());
    }

    #[test]
    fn size_class_spans_are_fixed() {
        assert_eq!(SizeClass::Large.span(), (2, 2));
        assert_eq!(SizeClass::Tall.span(), (1, 2));
        assert_eq!(SizeClass::Wide.span(), (2, 1));
        assert_eq!(SizeClass::Normal.span(), (1, 1));
    }

    #[test]
    fn tabs_start_with_all_sentinel() {
        let tabs = CategoryFilter::tabs();
        assert_eq!(tabs[0], CategoryFilter::All);
        assert_eq!(tabs.len(), 1 + Category::ALL.len());
    }
}
