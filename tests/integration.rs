// SPDX-License-Identifier: MPL-2.0
use fotocicleta::catalog::{self, Category, CategoryFilter, VideoSource};
use fotocicleta::config::{self, Config};
use fotocicleta::i18n::fluent::I18n;
use fotocicleta::mailto::MailDraft;
use fotocicleta::ui::video_modal::{self, Payload};
use std::path::Path;
use tempfile::tempdir;

#[test]
fn filtering_each_category_returns_only_matches_in_order() {
    for category in Category::ALL {
        let filtered = catalog::filter_entries(
            catalog::portfolio(),
            CategoryFilter::Only(category),
        );
        assert!(filtered.iter().all(|e| e.category == category));

        // Relative order matches the catalog order.
        let mut last_index = 0;
        for entry in &filtered {
            let index = catalog::portfolio()
                .iter()
                .position(|e| e == *entry)
                .expect("entry comes from the catalog");
            assert!(index >= last_index);
            last_index = index;
        }
    }
}

#[test]
fn the_all_sentinel_returns_the_catalog_unchanged() {
    let filtered = catalog::filter_entries(catalog::featured(), CategoryFilter::All);
    assert_eq!(filtered.len(), catalog::featured().len());
    for (filtered_entry, original) in filtered.iter().zip(catalog::featured()) {
        assert_eq!(*filtered_entry, original);
    }
}

#[test]
fn featured_distribution_matches_the_published_site() {
    let count = |c| catalog::filter_entries(catalog::featured(), CategoryFilter::Only(c)).len();
    assert_eq!(count(Category::Photography), 3);
    assert_eq!(count(Category::Audiovisual), 2);
    assert_eq!(count(Category::Documentary), 1);
}

#[test]
fn modal_full_lifecycle_with_superseding_reopen() {
    let media_dir = Path::new("/tmp/no-media");
    let mut state = video_modal::State::new();

    let first = Payload {
        source: VideoSource::Embed("https://www.youtube.com/embed/a".into()),
        title: "FIRST".into(),
    };
    let second = Payload {
        source: VideoSource::Embed("https://www.youtube.com/embed/b".into()),
        title: "SECOND".into(),
    };

    state.open(first, media_dir);
    assert!(state.is_open());

    // Close, then reopen before the cosmetic delay elapses.
    let stale_generation = state.close().expect("close yields a clear ticket");
    state.open(second.clone(), media_dir);

    // The stale clear fires late and must not touch the newer payload.
    state.clear(stale_generation);
    assert!(state.is_open());
    assert_eq!(state.payload(), Some(&second));

    // A clean close-and-clear empties the modal.
    let generation = state.close().expect("second close");
    state.clear(generation);
    assert!(!state.is_open());
    assert!(state.payload().is_none());
}

#[test]
fn mailto_link_is_recoverable_for_the_reference_draft() {
    let draft = MailDraft {
        name: "Ana".into(),
        email: "ana@x.com".into(),
        subject: "Campaña".into(),
        message: "Hola".into(),
    };
    let link = draft.compose();

    assert!(link.starts_with("mailto:ralphie@fotocicleta.com?"));

    let decoded = percent_encoding::percent_decode_str(&link)
        .decode_utf8()
        .expect("valid utf-8")
        .into_owned();
    assert!(decoded.contains("Nuevo Contacto Web: Campaña"));
    assert!(decoded.contains("Nombre: Ana"));
    assert!(decoded.contains("ana@x.com"));
    assert!(decoded.contains("Hola"));
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: es
    let initial_config = Config {
        language: Some("es".to_string()),
        media_dir: None,
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_es = I18n::new(None, &loaded);
    assert_eq!(i18n_es.current_locale().to_string(), "es");
    assert_eq!(i18n_es.tr("filter-all"), "TODO");

    // 2. Change config to en-US
    let english_config = Config {
        language: Some("en-US".to_string()),
        media_dir: None,
    };
    config::save_to_path(&english_config, &temp_config_file_path)
        .expect("Failed to write english config file");

    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load english config from path");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("filter-all"), "ALL");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn cli_language_overrides_config_language() {
    let config = Config {
        language: Some("es".to_string()),
        media_dir: None,
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn every_catalog_video_source_classifies_consistently() {
    for entry in catalog::portfolio() {
        if let Some(source) = entry.video_source() {
            match source {
                VideoSource::Local(raw) => {
                    assert!(raw.starts_with('/') || raw.starts_with("./"));
                }
                VideoSource::Embed(raw) => {
                    assert!(!raw.starts_with('/') && !raw.starts_with("./"));
                }
            }
        }
    }
}
