// SPDX-License-Identifier: MPL-2.0
//! Static catalog data, shared by the landing gallery and the portfolio
//! screen. Thumbnails are remote; video footage is either an external
//! embed or a file under the configured media directory.

use super::{Category, MediaEntry, SizeClass};
use std::sync::OnceLock;

/// The six featured productions shown in the landing gallery.
pub fn featured() -> &'static [MediaEntry] {
    static CATALOG: OnceLock<Vec<MediaEntry>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        vec![
            MediaEntry::video(
                SizeClass::Large,
                Category::Audiovisual,
                "URBAN MOVEMENT 24",
                "https://images.unsplash.com/photo-1534068590799-09895a701e3e?q=80&w=2000&auto=format&fit=crop",
                "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1",
            ),
            MediaEntry::photo(
                SizeClass::Tall,
                Category::Photography,
                "SILENT ARCHITECTURE",
                "https://images.unsplash.com/photo-1486716985456-630ee40902f3?q=80&w=2000&auto=format&fit=crop",
            ),
            MediaEntry::photo(
                SizeClass::Normal,
                Category::Photography,
                "NEON ESSENCE",
                "https://images.unsplash.com/photo-1550257018-c2909e334ae8?q=80&w=1000&auto=format&fit=crop",
            ),
            MediaEntry::video(
                SizeClass::Normal,
                Category::Audiovisual,
                "TECH SYSTEMS",
                "https://images.unsplash.com/photo-1519389950473-47ba0277781c?q=80&w=1000&auto=format&fit=crop",
                "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1",
            ),
            MediaEntry::video(
                SizeClass::Wide,
                Category::Documentary,
                "ROOTS OF CULTURE",
                "https://images.unsplash.com/photo-1533575770077-052fa2c609fc?q=80&w=2000&auto=format&fit=crop",
                "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1",
            ),
            MediaEntry::photo(
                SizeClass::Large,
                Category::Photography,
                "HUMAN CANVAS",
                "https://images.unsplash.com/photo-1531746020798-e6953c6e8e04?q=80&w=2000&auto=format&fit=crop",
            ),
        ]
    })
}

/// The full portfolio listing: the featured six plus the extended archive.
pub fn portfolio() -> &'static [MediaEntry] {
    static CATALOG: OnceLock<Vec<MediaEntry>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let mut entries = featured().to_vec();
        entries.extend([
            MediaEntry::photo(
                SizeClass::Normal,
                Category::Photography,
                "ABSTRACT FORMS",
                "https://images.unsplash.com/photo-1541701494587-cb58502866ab?q=80&w=1000&auto=format&fit=crop",
            ),
            MediaEntry::video(
                SizeClass::Normal,
                Category::Audiovisual,
                "FASHION FILM 2024",
                "https://images.unsplash.com/photo-1469334031218-e382a71b716b?q=80&w=1000&auto=format&fit=crop",
                "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1",
            ),
            MediaEntry::video(
                SizeClass::Normal,
                Category::Documentary,
                "STREET VOICES",
                "https://images.unsplash.com/photo-1517404215738-15263e9f9178?q=80&w=1000&auto=format&fit=crop",
                "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1",
            ),
        ]);
        entries
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{filter_entries, CategoryFilter};

    #[test]
    fn featured_catalog_has_expected_distribution() {
        let entries = featured();
        assert_eq!(entries.len(), 6);

        let count = |c: Category| {
            filter_entries(entries, CategoryFilter::Only(c)).len()
        };
        assert_eq!(count(Category::Photography), 3);
        assert_eq!(count(Category::Audiovisual), 2);
        assert_eq!(count(Category::Documentary), 1);
    }

    #[test]
    fn documentary_filter_yields_exactly_one_featured_entry() {
        let filtered = filter_entries(featured(), CategoryFilter::Only(Category::Documentary));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "ROOTS OF CULTURE");
    }

    #[test]
    fn portfolio_extends_featured_in_order() {
        let entries = portfolio();
        assert_eq!(entries.len(), 9);
        assert_eq!(entries[0].title, featured()[0].title);
        assert_eq!(entries[8].title, "STREET VOICES");
    }

    #[test]
    fn catalog_invariant_holds_for_every_entry() {
        for entry in featured().iter().chain(portfolio()) {
            assert_eq!(entry.is_video(), entry.video_source().is_some());
        }
    }
}
