use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    time::{Duration, Instant},
};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use blogcat::app::{App, InputMode};
use blogcat::catalog::Catalog;
use blogcat::config;
use blogcat::types::AppEvent;
use blogcat::ui;
use blogcat::view::ViewState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (safe to ignore if not found)
    dotenvy::dotenv().ok();
    env_logger::init();

    let cfg = config::load().context("Failed to load configuration")?;

    let catalog = match &cfg.catalog_path {
        Some(path) => Catalog::load(path).context("Failed to load catalog")?,
        None => Catalog::builtin(),
    };

    // terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // app + channel
    let (tx, rx) = unbounded_channel::<AppEvent>();
    let mut app = App::new(catalog, &cfg);

    // The main page starts in its simulated-loading state.
    let mut load_timer = Some(arm_load_timer(cfg.load_delay_ms, tx.clone()));

    let result = run_loop(&mut app, &mut terminal, rx, tx, cfg.load_delay_ms, &mut load_timer).await;

    // cleanup
    if let Some(timer) = load_timer {
        timer.abort();
    }
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    result
}

/// Fire-once reveal timer for the main page skeleton. Aborting the handle is
/// the cancellation hook tied to the page's lifetime; a send after the
/// receiver is gone is simply dropped.
fn arm_load_timer(delay_ms: u64, tx: UnboundedSender<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        let _ = tx.send(AppEvent::CatalogReady);
    })
}

async fn run_loop(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut rx: UnboundedReceiver<AppEvent>,
    tx: UnboundedSender<AppEvent>,
    load_delay_ms: u64,
    load_timer: &mut Option<JoinHandle<()>>,
) -> Result<()> {
    let mut last_frame = Instant::now();
    loop {
        // frame budget (coalesced renders)
        let frame_ms = 1000u32.saturating_div(app.fps()) as u64;
        let budget = Duration::from_millis(frame_ms.max(1));
        let wait = budget.saturating_sub(last_frame.elapsed());

        if event::poll(wait)? {
            if let Event::Key(k) = event::read()? {
                if k.kind == KeyEventKind::Press || k.kind == KeyEventKind::Repeat {
                    handle_key(app, k);
                }
            }
        }
        while let Ok(ev) = rx.try_recv() {
            app.on_event(ev);
        }

        // Advance the page transition; completed swaps manage the reveal
        // timer (re-entering the main page replays the skeleton, leaving it
        // cancels any pending reveal).
        let now = Instant::now();
        if let Some(mounted) = app.tick_view(now) {
            if let Some(timer) = load_timer.take() {
                timer.abort();
            }
            if mounted == ViewState::Main {
                *load_timer = Some(arm_load_timer(load_delay_ms, tx.clone()));
            }
        }

        if last_frame.elapsed() >= budget {
            terminal.draw(|f| ui::draw(f, app, now))?;
            last_frame = Instant::now();
        }
        if app.quit_flag() {
            break;
        }
    }
    Ok(())
}

fn handle_key(app: &mut App, k: KeyEvent) {
    let now = Instant::now();

    // Search input mode captures most keys.
    if app.input_mode() == InputMode::Search {
        match k.code {
            KeyCode::Char('c') if k.modifiers == KeyModifiers::CONTROL => {
                app.on_event(AppEvent::Quit)
            }
            KeyCode::Char(c) => app.search_add_char(c),
            KeyCode::Backspace => app.search_backspace(),
            KeyCode::Enter => app.close_search(),
            KeyCode::Esc => app.clear_search(),
            _ => {}
        }
        return;
    }

    match (k.code, k.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.on_event(AppEvent::Quit);
        }

        (KeyCode::Up, _) => app.up(),
        (KeyCode::Down, _) => app.down(),
        (KeyCode::PageUp, _) => app.page_up(10),
        (KeyCode::PageDown, _) => app.page_down(10),
        (KeyCode::Home, _) => app.scroll_top(),

        (KeyCode::Enter, _) => match app.view() {
            ViewState::Main => app.open_selected(now),
            ViewState::Post(_) => app.open_suggestion(now),
        },
        (KeyCode::Tab, _) => app.next_suggestion(),
        (KeyCode::BackTab, _) => app.prev_suggestion(),

        (KeyCode::Esc, _) | (KeyCode::Backspace, _) | (KeyCode::Char('h'), _) => {
            match app.view() {
                // Esc on the main page clears the search term instead.
                ViewState::Main => app.clear_search(),
                ViewState::Post(_) => app.go_home(now),
            }
        }

        (KeyCode::Char('/'), _) | (KeyCode::Char('f'), _) => {
            if app.view() == ViewState::Main {
                app.start_search();
            }
        }
        (KeyCode::Char('c'), _) => {
            if app.view() == ViewState::Main {
                app.cycle_category();
            }
        }
        (KeyCode::Char('t'), _) => app.cycle_theme(),
        (KeyCode::Char('o'), KeyModifiers::CONTROL) => app.cycle_fps(),
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => app.toggle_debug_panel(),
        _ => {}
    }
}
