//! End-to-end navigation flow over the app state: skeleton reveal, opening
//! posts, suggestion hops, idempotent re-selection and the return home.

use std::time::Instant;

use blogcat::app::App;
use blogcat::config::Config;
use blogcat::theme::Theme;
use blogcat::view::{Phase, ENTER_DURATION, EXIT_DURATION};
use blogcat::{AppEvent, Catalog, CategoryFilter, ViewState};

fn test_config() -> Config {
    Config {
        catalog_path: None,
        render_fps: 30,
        render_fps_choices: vec![20, 30, 60],
        load_delay_ms: 0,
        default_search: String::new(),
        default_category: CategoryFilter::All,
        theme: Theme::default(),
    }
}

fn settle(app: &mut App, mut now: Instant) -> Instant {
    now += EXIT_DURATION;
    app.tick_view(now);
    now += ENTER_DURATION;
    app.tick_view(now);
    now
}

#[test]
fn full_reader_journey() {
    let mut app = App::new(Catalog::builtin(), &test_config());
    let t0 = Instant::now();

    // Skeleton first; the reveal event flips it.
    assert!(app.loading());
    app.on_event(AppEvent::CatalogReady);
    assert!(!app.loading());

    // Open the first card.
    let first = app.selected_post().unwrap().id;
    app.open_selected(t0);
    let t1 = settle(&mut app, t0);
    assert_eq!(app.view(), ViewState::Post(first));

    // Hop through a suggestion.
    let target = app.focused_suggestion().unwrap().id;
    app.open_suggestion(t1);
    let t2 = settle(&mut app, t1);
    assert_eq!(app.view(), ViewState::Post(target));

    // Back home: skeleton plays again, criteria reset.
    app.go_home(t2);
    let t3 = settle(&mut app, t2);
    assert_eq!(app.view(), ViewState::Main);
    assert!(app.loading());
    app.on_event(AppEvent::CatalogReady);
    assert!(!app.loading());
    let _ = t3;
}

#[test]
fn reselecting_open_post_does_not_retrigger_transition() {
    let mut app = App::new(Catalog::builtin(), &test_config());
    app.on_event(AppEvent::CatalogReady);
    let t0 = Instant::now();

    app.open_selected(t0);
    let t1 = settle(&mut app, t0);
    let open_id = app.current_post().unwrap().id;

    // Walk the suggestion cursor onto some entry, then force-focus the open
    // post by asking the router directly: selecting the displayed post must
    // leave the router settled.
    assert!(matches!(app.router().phase(), Phase::Idle));
    let mut router_probe = blogcat::ViewRouter::new();
    router_probe.select_post(open_id, t1);
    // (fresh router transitions; the app's settled router must not)
    assert!(!router_probe.is_settled());
    assert!(app.router().is_settled());
    assert_eq!(app.view(), ViewState::Post(open_id));
}

#[test]
fn navigation_is_ignored_mid_transition() {
    let mut app = App::new(Catalog::builtin(), &test_config());
    app.on_event(AppEvent::CatalogReady);
    let t0 = Instant::now();

    app.open_selected(t0);
    // Exit phase still running: a second open attempt is dropped.
    app.open_suggestion(t0 + EXIT_DURATION / 2);
    app.tick_view(t0 + EXIT_DURATION);

    let first = match app.view() {
        ViewState::Post(id) => id,
        other => panic!("expected a post view, got {other:?}"),
    };

    // Finish entering; the mounted page is the originally selected post.
    app.tick_view(t0 + EXIT_DURATION + ENTER_DURATION);
    assert!(app.router().is_settled());
    assert_eq!(app.view(), ViewState::Post(first));
}

#[test]
fn body_scroll_resets_on_every_swap() {
    let mut app = App::new(Catalog::builtin(), &test_config());
    app.on_event(AppEvent::CatalogReady);
    let t0 = Instant::now();

    app.open_selected(t0);
    let t1 = settle(&mut app, t0);

    // Force a tiny viewport so the body can actually scroll.
    app.set_body_viewport_height(1);
    app.down();
    app.down();
    assert!(app.body_scroll() > 0);

    app.open_suggestion(t1);
    settle(&mut app, t1);
    assert_eq!(app.body_scroll(), 0);
}

#[test]
fn default_filters_from_config_apply_on_startup() {
    let mut cfg = test_config();
    cfg.default_search = "react".into();
    let mut app = App::new(Catalog::builtin(), &cfg);
    app.on_event(AppEvent::CatalogReady);

    assert_eq!(app.search_query(), "react");
    let visible = app.visible_posts();
    assert!(!visible.is_empty());
    assert!(visible.len() < app.catalog().len());
}
