// SPDX-License-Identifier: MPL-2.0
use iced_flix::app::{App, Flags, Message};
use iced_flix::catalog::{generate_with, Catalog, ItemId, MockGenerator, CATEGORY_LAYOUT};
use iced_flix::config::{self, Config};
use iced_flix::i18n::fluent::I18n;
use iced_flix::ui::{content_card, content_row, movie_modal};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use tempfile::tempdir;

fn offline_app(seed: u64) -> App {
    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    config.images.enabled = Some(false);
    let flags = Flags {
        seed: Some(seed),
        ..Flags::default()
    };
    App::with_config(flags, &config).0
}

#[test]
fn test_catalog_ids_are_unique() {
    let catalog = Catalog::generate(&mut MockGenerator::from_entropy());
    let ids: HashSet<ItemId> = catalog.items().map(|item| item.id).collect();
    assert_eq!(ids.len(), catalog.len());
    assert_eq!(catalog.categories.len(), CATEGORY_LAYOUT.len());
}

#[test]
fn test_generate_offset_example() {
    let mut rng = StdRng::seed_from_u64(2024);
    let items = generate_with(&mut rng, 3, 10);
    let ids: Vec<u64> = items.iter().map(|item| item.id.value()).collect();
    assert_eq!(ids, vec![11, 12, 13]);
    assert_eq!(items[0].title, "Dark");
    assert_eq!(items[2].title, "Peaky Blinders");
}

#[test]
fn test_same_seed_same_catalog() {
    let first = Catalog::generate(&mut MockGenerator::seeded(77));
    let second = Catalog::generate(&mut MockGenerator::seeded(77));
    assert_eq!(first, second);
}

#[test]
fn test_selection_round_trip_through_modal() {
    let mut app = offline_app(5);
    let expected = app.catalog().categories[4].items[7].id;

    let _ = app.update(Message::Row {
        index: 4,
        message: content_row::Message::Card {
            index: 7,
            message: content_card::Message::Pressed,
        },
    });
    assert_eq!(app.selection(), Some(expected));

    let _ = app.update(Message::Modal(movie_modal::Message::PanelPressed));
    assert_eq!(app.selection(), Some(expected));

    let _ = app.update(Message::Modal(movie_modal::Message::EscapePressed));
    assert_eq!(app.selection(), None);
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("navbar-link-my-list"), "My List");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("navbar-link-my-list"), "Ma liste");
}

#[test]
fn test_catalog_seed_from_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut stored = Config::default();
    stored.catalog.seed = Some(9);
    stored.images.enabled = Some(false);
    config::save_with_override(&stored, Some(dir.path().to_path_buf()))
        .expect("Failed to write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let (app, _task) = App::with_config(Flags::default(), &loaded);
    let expected = Catalog::generate(&mut MockGenerator::seeded(9));
    assert_eq!(app.catalog(), &expected);
}
