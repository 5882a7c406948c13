// SPDX-License-Identifier: MPL-2.0
use adena::config::{self, Config};
use adena::domain::catalog::{
    compute_visible, seed, Category, FilterSelection, Metal, PriceBound, ProductId, SortOrder,
};
use adena::domain::clock::{Clock, ManualClock};
use adena::domain::content;
use adena::domain::slider::{Phase, SliderTimings};
use adena::i18n::fluent::I18n;
use adena::store::{CatalogStore, FileStore, KeyValueStore, ThemeFlag, CART_KEY, WISHLIST_KEY};
use adena::ui::home;
use adena::ui::product;
use adena::ui::theming::ThemeMode;
use std::fs;
use tempfile::tempdir;

#[test]
fn slider_timings_come_from_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let settings = dir.path().join("settings.toml");
    fs::write(
        &settings,
        "[slider]\nexit_delay_ms = 200\nentry_delay_ms = 300\ncycle_interval_ms = 2000\n",
    )
    .expect("Failed to write settings file");

    let loaded = config::load_from_path(&settings).expect("Failed to load settings");
    let deck = content::hero_deck().expect("hero deck should not be empty");
    let clock = ManualClock::new();
    let mut state = home::State::mount(deck, SliderTimings::from_config(&loaded), clock.now());

    clock.advance_ms(1_999);
    home::update(&mut state, home::Message::Tick, clock.now());
    assert_eq!(state.slider().phase(), Phase::Idle);

    clock.advance_ms(1);
    home::update(&mut state, home::Message::Tick, clock.now());
    assert_eq!(state.slider().phase(), Phase::Exiting { target: 1 });

    clock.advance_ms(200);
    home::update(&mut state, home::Message::Tick, clock.now());
    assert_eq!(state.slider().current_index(), 1);
    assert_eq!(state.slider().phase(), Phase::Entering);

    clock.advance_ms(300);
    home::update(&mut state, home::Message::Tick, clock.now());
    assert_eq!(state.slider().phase(), Phase::Idle);
}

#[test]
fn swipe_on_home_page_advances_once() {
    let deck = content::hero_deck().expect("hero deck should not be empty");
    let clock = ManualClock::new();
    let mut state = home::State::mount(deck, SliderTimings::default(), clock.now());

    home::update(&mut state, home::Message::PointerMoved(300.0), clock.now());
    home::update(&mut state, home::Message::DragStart, clock.now());
    home::update(&mut state, home::Message::PointerMoved(240.0), clock.now());
    home::update(&mut state, home::Message::PointerMoved(200.0), clock.now());
    home::update(&mut state, home::Message::PointerReleased, clock.now());

    assert_eq!(state.slider().phase(), Phase::Exiting { target: 1 });

    // A second release with no drag in progress changes nothing.
    home::update(&mut state, home::Message::PointerReleased, clock.now());
    assert_eq!(state.slider().phase(), Phase::Exiting { target: 1 });
}

#[test]
fn torn_down_home_page_ignores_time() {
    let deck = content::hero_deck().expect("hero deck should not be empty");
    let clock = ManualClock::new();
    let mut state = home::State::mount(deck, SliderTimings::default(), clock.now());

    state.teardown();
    clock.advance_ms(60_000);
    home::update(&mut state, home::Message::Tick, clock.now());
    home::update(&mut state, home::Message::NextSlide, clock.now());

    assert_eq!(state.slider().current_index(), 0);
    assert_eq!(state.slider().phase(), Phase::Idle);
    assert!(state.slider().next_deadline().is_none());
}

#[test]
fn cart_and_wishlist_survive_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (mut storage, warning) = FileStore::open(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    let mut catalog = CatalogStore::new(seed::products(), &storage);
    catalog
        .add_to_cart(ProductId::from(3))
        .apply(&mut storage)
        .expect("cart write should succeed");
    catalog
        .add_to_cart(ProductId::from(3))
        .apply(&mut storage)
        .expect("cart write should succeed");
    catalog
        .add_to_wishlist(ProductId::from(6))
        .apply(&mut storage)
        .expect("wishlist write should succeed");

    let (reopened, warning) = FileStore::open(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert!(reopened.get(CART_KEY).is_some());
    assert!(reopened.get(WISHLIST_KEY).is_some());

    let restored = CatalogStore::new(seed::products(), &reopened);
    assert_eq!(restored.cart(), &[ProductId::from(3), ProductId::from(3)]);
    assert_eq!(restored.wishlist(), &[ProductId::from(6)]);
}

#[test]
fn corrupted_storage_starts_empty_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("storage.cbor"), b"definitely not cbor")
        .expect("Failed to write corrupted file");

    let (storage, warning) = FileStore::open(Some(dir.path().to_path_buf()));
    assert_eq!(warning.as_deref(), Some("notification-storage-read-error"));

    let catalog = CatalogStore::new(seed::products(), &storage);
    assert!(catalog.cart().is_empty());
    assert!(catalog.wishlist().is_empty());
}

#[test]
fn deleted_products_drop_out_of_cart_view() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (mut storage, _) = FileStore::open(Some(dir.path().to_path_buf()));
    let mut catalog = CatalogStore::new(seed::products(), &storage);
    catalog
        .add_to_cart(ProductId::from(1))
        .apply(&mut storage)
        .expect("cart write should succeed");

    assert!(catalog.delete_product(&ProductId::from(1)));

    assert_eq!(catalog.cart(), &[ProductId::from(1)]);
    assert!(catalog.cart_products().is_empty());
}

#[test]
fn listing_combines_filters_and_sort() {
    let products = seed::products();
    let mut state = product::State::new(20_000);

    product::update(&mut state, product::Message::ToggleMetal(Metal::Platinum));
    product::update(&mut state, product::Message::ToggleMetal(Metal::Gold));
    product::update(
        &mut state,
        product::Message::SortChanged(SortOrder::PriceDescending),
    );
    let ids: Vec<_> = state.visible(&products).iter().map(|p| p.id.clone()).collect();
    assert_eq!(
        ids,
        vec![
            ProductId::from(5),
            ProductId::from(1),
            ProductId::from(6),
            ProductId::from(2)
        ]
    );

    // Dragging the max bound does nothing until released.
    product::update(&mut state, product::Message::DraftPrice(PriceBound::Max, 7_000));
    assert_eq!(state.visible(&products).len(), 4);
    product::update(&mut state, product::Message::CommitPrice);
    let ids: Vec<_> = state.visible(&products).iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, vec![ProductId::from(6), ProductId::from(2)]);

    product::update(&mut state, product::Message::ClearAll);
    assert_eq!(state.visible(&products).len(), products.len());
}

#[test]
fn category_scenario_matches_two_necklaces() {
    let products = seed::products();
    let mut selection = FilterSelection::new(20_000);
    selection.toggle_category(Category::Necklaces);

    let visible = compute_visible(&products, &selection);
    let ids: Vec<_> = visible.iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, vec![ProductId::from(2), ProductId::from(6)]);
}

#[test]
fn saved_preferences_drive_locale_and_theme() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut preferences = Config::default();
    preferences.general.language = Some("fr".to_string());
    preferences.general.theme_mode = ThemeFlag::Light.to_mode();
    config::save_with_override(&preferences, Some(dir.path().to_path_buf()))
        .expect("Failed to save settings");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
    assert_eq!(ThemeFlag::from_mode(loaded.general.theme_mode), ThemeFlag::Light);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("nav-home"), "Accueil");

    // The command line still wins over the file.
    let i18n = I18n::new(Some("en-US".into()), &loaded);
    assert_eq!(i18n.tr("nav-home"), "Home");
}

#[test]
fn broken_settings_file_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[slider\nnot toml")
        .expect("Failed to write settings file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}
