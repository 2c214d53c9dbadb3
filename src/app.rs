use std::time::{Duration, Instant};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::filter::{filter_posts, group_by_category};
use crate::suggest::{suggest, Suggestions};
use crate::theme::{ColorScheme, Theme};
use crate::types::{AppEvent, Category, CategoryFilter, Post};
use crate::view::{ViewRouter, ViewState};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

pub struct App {
    quit: bool,
    catalog: Catalog,
    view: ViewRouter,
    theme: Theme,

    fps: u32,
    fps_choices: Vec<u32>,

    // Main page state. Reset on every (re-)entry, like the filter criteria
    // it derives from: nothing here is persisted.
    loading: bool,
    search_query: String,
    category: CategoryFilter,
    input_mode: InputMode,
    list_sel: usize,
    default_search: String,
    default_category: CategoryFilter,

    // Post page state
    body_scroll: u16,
    body_viewport_height: u16,
    suggestion_sel: usize,

    toast_message: Option<(String, Instant)>,

    debug_log: Vec<String>,
    debug_visible: bool,
}

impl App {
    pub fn new(catalog: Catalog, cfg: &Config) -> Self {
        Self {
            quit: false,
            catalog,
            view: ViewRouter::new(),
            theme: cfg.theme,
            fps: cfg.render_fps,
            fps_choices: cfg.render_fps_choices.clone(),
            loading: true,
            search_query: cfg.default_search.clone(),
            category: cfg.default_category,
            input_mode: InputMode::Normal,
            list_sel: 0,
            default_search: cfg.default_search.clone(),
            default_category: cfg.default_category,
            body_scroll: 0,
            body_viewport_height: 20,
            suggestion_sel: 0,
            toast_message: None,
            debug_log: Vec::new(),
            debug_visible: false,
        }
    }

    // ----- getters -----
    pub fn fps(&self) -> u32 {
        self.fps
    }
    pub fn quit_flag(&self) -> bool {
        self.quit
    }
    pub fn view(&self) -> ViewState {
        self.view.current()
    }
    pub fn router(&self) -> &ViewRouter {
        &self.view
    }
    pub fn theme(&self) -> Theme {
        self.theme
    }
    pub fn colors(&self) -> ColorScheme {
        self.theme.colors()
    }
    pub fn loading(&self) -> bool {
        self.loading
    }
    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }
    pub fn search_query(&self) -> &str {
        &self.search_query
    }
    pub fn category(&self) -> CategoryFilter {
        self.category
    }
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
    pub fn body_scroll(&self) -> u16 {
        self.body_scroll
    }
    pub fn debug_log(&self) -> &[String] {
        &self.debug_log
    }
    pub fn debug_visible(&self) -> bool {
        self.debug_visible
    }

    /// Set the actual visible height of the article body (from the UI layer)
    /// so scrolling clamps to real content.
    pub fn set_body_viewport_height(&mut self, height: u16) {
        self.body_viewport_height = height;
    }

    // ----- derived content (main page) -----

    /// Posts matching the current search term and category filter, in
    /// catalog order.
    pub fn visible_posts(&self) -> Vec<&Post> {
        filter_posts(self.catalog.posts(), &self.search_query, self.category)
    }

    /// The visible posts partitioned into non-empty category sections, in
    /// display order. This is also the navigation order of the main list.
    pub fn visible_groups(&self) -> Vec<(Category, Vec<&Post>)> {
        group_by_category(&self.visible_posts())
    }

    /// Skeleton row counts per category while the main page is "loading".
    /// Sized from the unfiltered catalog, like the real sections will be.
    pub fn skeleton_counts(&self) -> Vec<(Category, usize)> {
        let all: Vec<&Post> = self.catalog.posts().iter().collect();
        group_by_category(&all)
            .into_iter()
            .map(|(cat, members)| (cat, members.len()))
            .collect()
    }

    /// Flattened navigation list for the main page (groups in display order).
    fn nav_posts(&self) -> Vec<&Post> {
        self.visible_groups()
            .into_iter()
            .flat_map(|(_, members)| members)
            .collect()
    }

    pub fn list_selection(&self) -> usize {
        self.list_sel
    }

    /// The post the main-page cursor is on, if any.
    pub fn selected_post(&self) -> Option<&Post> {
        self.nav_posts().get(self.list_sel).copied()
    }

    // ----- derived content (post page) -----

    /// The post currently displayed, when the post view is active. A view
    /// that references an id missing from the catalog yields `None` and the
    /// UI degrades to a placeholder; it is never an error.
    pub fn current_post(&self) -> Option<&Post> {
        match self.view.current() {
            ViewState::Post(id) => self.catalog.get(id),
            ViewState::Main => None,
        }
    }

    pub fn suggestions(&self) -> Suggestions<'_> {
        match self.current_post() {
            Some(post) => suggest(post, self.catalog.posts()),
            None => Suggestions::default(),
        }
    }

    pub fn suggestion_selection(&self) -> usize {
        self.suggestion_sel
    }

    /// The suggestion the cursor is on, across both sections in render order.
    pub fn focused_suggestion(&self) -> Option<&Post> {
        let s = self.suggestions();
        s.same_author
            .iter()
            .chain(s.other.iter())
            .nth(self.suggestion_sel)
            .copied()
    }

    // ----- navigation -----

    /// Open the post under the main-page cursor. Ignored while the skeleton
    /// is up or a transition is in flight.
    pub fn open_selected(&mut self, now: Instant) {
        if self.loading || !self.view.is_settled() {
            return;
        }
        if let Some(id) = self.selected_post().map(|p| p.id) {
            if self.view.select_post(id, now) {
                self.log_debug(format!("Open post #{id}"));
            }
        }
    }

    /// Open the focused suggestion on the post page. Selecting the article
    /// already on screen is a no-op by the router's idempotence rule.
    pub fn open_suggestion(&mut self, now: Instant) {
        if !self.view.is_settled() {
            return;
        }
        if let Some(id) = self.focused_suggestion().map(|p| p.id) {
            if self.view.select_post(id, now) {
                self.log_debug(format!("Open suggested post #{id}"));
            }
        }
    }

    pub fn go_home(&mut self, now: Instant) {
        if self.view.go_home(now) {
            self.log_debug("Go home".into());
        }
    }

    /// Advance the page transition. Returns the freshly mounted page when a
    /// swap completed this tick, so the shell can (re)arm the load timer for
    /// the main page.
    pub fn tick_view(&mut self, now: Instant) -> Option<ViewState> {
        let swapped = self.view.tick(now);
        if let Some(mounted) = swapped {
            // Viewport origin reset accompanies every navigation.
            self.body_scroll = 0;
            self.suggestion_sel = 0;
            if mounted == ViewState::Main {
                self.reset_main_page();
            }
        }
        swapped
    }

    /// Re-entering the main page behaves like a fresh mount: filter criteria
    /// go back to their configured defaults and the skeleton plays again.
    fn reset_main_page(&mut self) {
        self.loading = true;
        self.search_query = self.default_search.clone();
        self.category = self.default_category;
        self.input_mode = InputMode::Normal;
        self.list_sel = 0;
    }

    // ----- search / filter input -----

    pub fn start_search(&mut self) {
        self.input_mode = InputMode::Search;
    }

    pub fn close_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    /// Esc in search mode: drop the term entirely.
    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.input_mode = InputMode::Normal;
        self.clamp_list_selection();
    }

    /// Search is live: every keystroke narrows the list immediately.
    pub fn search_add_char(&mut self, ch: char) {
        self.search_query.push(ch);
        self.clamp_list_selection();
    }

    pub fn search_backspace(&mut self) {
        self.search_query.pop();
        self.clamp_list_selection();
    }

    pub fn cycle_category(&mut self) {
        self.category = self.category.next();
        self.list_sel = 0;
        self.show_toast(format!("Category: {}", self.category.label()));
    }

    fn clamp_list_selection(&mut self) {
        let len = self.nav_posts().len();
        if self.list_sel >= len {
            self.list_sel = len.saturating_sub(1);
        }
    }

    // ----- cursor movement -----

    pub fn up(&mut self) {
        match self.view.current() {
            ViewState::Main => {
                if !self.loading && self.list_sel > 0 {
                    self.list_sel -= 1;
                }
            }
            ViewState::Post(_) => self.scroll_body(-1),
        }
    }

    pub fn down(&mut self) {
        match self.view.current() {
            ViewState::Main => {
                let len = self.nav_posts().len();
                if !self.loading && self.list_sel + 1 < len {
                    self.list_sel += 1;
                }
            }
            ViewState::Post(_) => self.scroll_body(1),
        }
    }

    pub fn page_up(&mut self, page: u16) {
        if matches!(self.view.current(), ViewState::Post(_)) {
            self.scroll_body(-(page as i32));
        }
    }

    pub fn page_down(&mut self, page: u16) {
        if matches!(self.view.current(), ViewState::Post(_)) {
            self.scroll_body(page as i32);
        }
    }

    pub fn scroll_top(&mut self) {
        self.body_scroll = 0;
    }

    fn scroll_body(&mut self, delta: i32) {
        let content_lines = self
            .current_post()
            .map(|p| p.body.lines().count() as u16)
            .unwrap_or(0);
        let max_scroll = content_lines.saturating_sub(self.body_viewport_height);
        let next = (self.body_scroll as i32 + delta).max(0).min(max_scroll as i32);
        self.body_scroll = next as u16;
    }

    /// Tab on the post page: move the cursor across both suggestion
    /// sections, wrapping.
    pub fn next_suggestion(&mut self) {
        let s = self.suggestions();
        let total = s.same_author.len() + s.other.len();
        if total > 0 {
            self.suggestion_sel = (self.suggestion_sel + 1) % total;
        }
    }

    pub fn prev_suggestion(&mut self) {
        let s = self.suggestions();
        let total = s.same_author.len() + s.other.len();
        if total > 0 {
            self.suggestion_sel = (self.suggestion_sel + total - 1) % total;
        }
    }

    // ----- knobs -----

    pub fn cycle_fps(&mut self) {
        if self.fps_choices.is_empty() {
            return;
        }
        let mut idx = self.fps_choices.iter().position(|&v| v == self.fps).unwrap_or(0);
        idx = (idx + 1) % self.fps_choices.len();
        self.fps = self.fps_choices[idx];
        self.show_toast(format!("Render: {} fps", self.fps));
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.show_toast(format!("Theme: {}", self.theme));
    }

    pub fn toggle_debug_panel(&mut self) {
        self.debug_visible = !self.debug_visible;
    }

    pub fn log_debug(&mut self, msg: String) {
        const MAX_LOG_ENTRIES: usize = 50;
        log::debug!("{msg}");
        let stamped = format!("{} {msg}", chrono::Local::now().format("%H:%M:%S"));
        self.debug_log.push(stamped);
        if self.debug_log.len() > MAX_LOG_ENTRIES {
            self.debug_log.remove(0);
        }
    }

    /// Show a toast notification for 2 seconds
    pub fn show_toast(&mut self, msg: String) {
        self.toast_message = Some((msg, Instant::now()));
    }

    pub fn toast_message(&self) -> Option<&str> {
        const TOAST_DURATION: Duration = Duration::from_secs(2);
        self.toast_message.as_ref().and_then(|(msg, time)| {
            if time.elapsed() < TOAST_DURATION {
                Some(msg.as_str())
            } else {
                None
            }
        })
    }

    // ----- events -----

    pub fn on_event(&mut self, ev: AppEvent) {
        match ev {
            AppEvent::CatalogReady => {
                // Fire-once reveal; a late duplicate is harmless.
                if self.loading {
                    self.loading = false;
                    self.log_debug("Main page content revealed".into());
                }
            }
            AppEvent::Quit => self.quit = true,
        }
    }
}
