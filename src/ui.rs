use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

use crate::app::{App, InputMode};
use crate::types::Post;
use crate::view::{Phase, ViewState, ENTER_DURATION};

/// How the active page should be drawn for the current transition phase:
/// dimmed while fading, pushed down one row for the start of the slide-up.
struct PageEffect {
    dim: bool,
    row_offset: u16,
}

fn page_effect(app: &App, now: Instant) -> PageEffect {
    match app.router().phase() {
        Phase::Idle => PageEffect {
            dim: false,
            row_offset: 0,
        },
        // Outgoing page fades out in place.
        Phase::Exiting { .. } => PageEffect {
            dim: true,
            row_offset: 0,
        },
        // Incoming page starts dim and one row low, then snaps into place
        // for the second half of the enter phase.
        Phase::Entering { since } => {
            let elapsed = now.duration_since(since);
            if elapsed < ENTER_DURATION / 2 {
                PageEffect {
                    dim: true,
                    row_offset: 1,
                }
            } else {
                PageEffect {
                    dim: false,
                    row_offset: 0,
                }
            }
        }
    }
}

// ===============================
// Top-level draw
// ===============================
pub fn draw(f: &mut Frame, app: &mut App, now: Instant) {
    let search_expanded =
        app.input_mode() == InputMode::Search || !app.search_query().is_empty();
    let show_debug = app.debug_visible() && !app.debug_log().is_empty();

    let mut constraints: Vec<Constraint> = Vec::with_capacity(5);
    constraints.push(Constraint::Length(1)); // header
    if search_expanded {
        constraints.push(Constraint::Length(3)); // search bar (only when in use)
    }
    constraints.push(Constraint::Min(0)); // page body
    if show_debug {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(1)); // footer

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    let mut idx = 0usize;
    header(f, chunks[idx], app);
    idx += 1;
    if search_expanded {
        search_bar(f, chunks[idx], app);
        idx += 1;
    }
    page_body(f, chunks[idx], app, now);
    idx += 1;
    if show_debug {
        debug_panel(f, chunks[idx], app);
        idx += 1;
    }
    footer(f, chunks[idx], app);

    if app.toast_message().is_some() {
        draw_toast(f, app);
    }
}

// ===============================
// Chrome
// ===============================
fn header(f: &mut Frame, area: Rect, app: &App) {
    let colors = app.colors();
    let page = match app.view() {
        ViewState::Main => "Home".to_string(),
        ViewState::Post(_) => match app.current_post() {
            Some(post) => post.title.clone(),
            None => "Article".to_string(),
        },
    };

    let line = Line::from(vec![
        Span::styled(
            " omnisoft blogs ",
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("· ", Style::default().fg(colors.text_dim)),
        Span::styled(page, Style::default().fg(colors.text)),
        Span::styled(
            format!("  [{}]", app.category().label()),
            Style::default().fg(colors.text_dim),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn search_bar(f: &mut Frame, area: Rect, app: &App) {
    let colors = app.colors();
    let focused = app.input_mode() == InputMode::Search;
    let query = app.search_query();

    let border_color = if focused { colors.accent } else { colors.text_dim };
    let hint = "Search blogs....";
    let text = if query.is_empty() && !focused { hint } else { query };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(if focused { colors.accent } else { colors.text }))
        .block(
            Block::default()
                .title(" Search ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        );
    f.render_widget(paragraph, area);

    if focused && area.width > 2 {
        let x = area.x + 1 + (query.len().min(area.width.saturating_sub(2) as usize) as u16);
        f.set_cursor_position((x, area.y + 1));
    }
}

fn footer(f: &mut Frame, area: Rect, app: &App) {
    let colors = app.colors();
    let hints = match (app.view(), app.input_mode()) {
        (_, InputMode::Search) => " type to search · Enter done · Esc clear ",
        (ViewState::Main, _) => " ↑↓ select · Enter open · / search · c category · t theme · q quit ",
        (ViewState::Post(_), _) => " ↑↓ scroll · Tab suggestions · Enter open · Esc home · q quit ",
    };
    let line = Line::from(Span::styled(hints, Style::default().fg(colors.text_dim)));
    f.render_widget(Paragraph::new(line), area);
}

fn debug_panel(f: &mut Frame, area: Rect, app: &App) {
    let colors = app.colors();
    let recent: Vec<Line> = app
        .debug_log()
        .iter()
        .rev()
        .take(1)
        .map(|msg| Line::from(msg.as_str()))
        .collect();
    let paragraph = Paragraph::new(recent).block(
        Block::default()
            .title(" Debug ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.debug_indicator)),
    );
    f.render_widget(paragraph, area);
}

fn draw_toast(f: &mut Frame, app: &App) {
    let colors = app.colors();
    let Some(msg) = app.toast_message() else { return };

    let width = (msg.len() as u16 + 4).min(f.area().width);
    let area = Rect {
        x: f.area().width.saturating_sub(width + 1),
        y: f.area().height.saturating_sub(4),
        width,
        height: 3,
    };
    let toast = Paragraph::new(msg)
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors.toast))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors.toast)),
        );
    f.render_widget(Clear, area);
    f.render_widget(toast, area);
}

// ===============================
// Page body dispatch
// ===============================
fn page_body(f: &mut Frame, area: Rect, app: &mut App, now: Instant) {
    const MIN_WIDTH: u16 = 50;
    const MIN_HEIGHT: u16 = 12;
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning = Paragraph::new(format!(
            "Terminal too small!\n\nMinimum size: {}×{}\nCurrent size: {}×{}",
            MIN_WIDTH, MIN_HEIGHT, area.width, area.height
        ))
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
        f.render_widget(warning, area);
        return;
    }

    // Apply the transition effect: slide offset shrinks the drawable area
    // from the top; dim is folded into every style below.
    let effect = page_effect(app, now);
    let area = Rect {
        y: area.y + effect.row_offset.min(area.height),
        height: area.height.saturating_sub(effect.row_offset),
        ..area
    };

    match app.view() {
        ViewState::Main => main_page(f, area, app, effect.dim),
        ViewState::Post(_) => post_page(f, area, app, effect.dim),
    }
}

fn dimmed(style: Style, dim: bool) -> Style {
    if dim {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

// ===============================
// Main page
// ===============================
fn main_page(f: &mut Frame, area: Rect, app: &App, dim: bool) {
    let colors = app.colors();
    let mut lines: Vec<Line> = Vec::new();

    // Site masthead.
    lines.push(Line::from(Span::styled(
        "omnisoft Blogs",
        dimmed(
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
            dim,
        ),
    )));
    lines.push(Line::from(Span::styled(
        "Insights, updates, and stories from the world of software & tech",
        dimmed(Style::default().fg(colors.text_dim), dim),
    )));
    lines.push(Line::default());

    if app.loading() {
        skeleton_lines(&mut lines, app, dim);
    } else {
        let groups = app.visible_groups();
        if groups.is_empty() {
            empty_state_lines(&mut lines, app, dim);
        } else {
            post_list_lines(&mut lines, app, dim);
        }
        lines.push(Line::default());
        call_to_action_line(&mut lines, app, dim);
    }

    // Keep the selected card in view by scrolling the page to it.
    let scroll = main_scroll_offset(app, area.height, &lines);
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(paragraph, area);
}

/// Each post card occupies three lines (title, byline, spacer) below three
/// masthead lines and one header line per preceding group.
fn main_scroll_offset(app: &App, height: u16, lines: &[Line]) -> u16 {
    if app.loading() {
        return 0;
    }
    let mut row_of_selected = 0u16;
    let mut seen = 0usize;
    let mut row = 3u16; // masthead
    for (_, members) in app.visible_groups() {
        row += 1; // section header
        for _ in &members {
            if seen == app.list_selection() {
                row_of_selected = row;
            }
            seen += 1;
            row += 3;
        }
        row += 1; // gap after section
    }
    let total = lines.len() as u16;
    let max_scroll = total.saturating_sub(height);
    // Center-ish the selection when it would fall below the fold.
    if row_of_selected + 4 > height {
        (row_of_selected + 4 - height).min(max_scroll)
    } else {
        0
    }
}

fn post_list_lines(lines: &mut Vec<Line>, app: &App, dim: bool) {
    let colors = app.colors();
    let mut flat_idx = 0usize;

    for (category, members) in app.visible_groups() {
        lines.push(Line::from(Span::styled(
            format!("── {} ──", category.label()),
            dimmed(
                Style::default()
                    .fg(colors.heading)
                    .add_modifier(Modifier::BOLD),
                dim,
            ),
        )));

        for post in members {
            let selected = flat_idx == app.list_selection();
            let title_style = if selected {
                Style::default()
                    .fg(colors.selection_fg)
                    .bg(colors.selection_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text).add_modifier(Modifier::BOLD)
            };
            let marker = if selected { "▶ " } else { "  " };

            lines.push(Line::from(vec![
                Span::styled(marker, dimmed(Style::default().fg(colors.accent), dim)),
                Span::styled(post.title.clone(), dimmed(title_style, dim)),
                Span::styled(
                    format!(" — {}", post.subtitle),
                    dimmed(Style::default().fg(colors.text_dim), dim),
                ),
            ]));
            lines.push(byline_line(post, app, dim, "    "));
            lines.push(Line::default());
            flat_idx += 1;
        }
        lines.push(Line::default());
    }
}

fn byline_line(post: &Post, app: &App, dim: bool, indent: &str) -> Line<'static> {
    let colors = app.colors();
    let mut spans = vec![
        Span::raw(indent.to_string()),
        Span::styled(
            format!("By {} on {}", post.author, post.date),
            dimmed(Style::default().fg(colors.text_dim), dim),
        ),
    ];
    for tag in &post.tags {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("#{tag}"),
            dimmed(Style::default().fg(colors.tag), dim),
        ));
    }
    Line::from(spans)
}

fn skeleton_lines(lines: &mut Vec<Line>, app: &App, dim: bool) {
    let colors = app.colors();
    for (category, count) in app.skeleton_counts() {
        lines.push(Line::from(Span::styled(
            format!("── {} ──", category.label()),
            dimmed(Style::default().fg(colors.text_dim), dim),
        )));
        for _ in 0..count {
            lines.push(Line::from(Span::styled(
                "  ████████████████████████████",
                dimmed(Style::default().fg(colors.skeleton), dim),
            )));
            lines.push(Line::from(Span::styled(
                "    ████████████████",
                dimmed(Style::default().fg(colors.skeleton), dim),
            )));
            lines.push(Line::default());
        }
        lines.push(Line::default());
    }
}

fn empty_state_lines(lines: &mut Vec<Line>, app: &App, dim: bool) {
    let colors = app.colors();
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "No posts found.",
        dimmed(
            Style::default()
                .fg(colors.text)
                .add_modifier(Modifier::BOLD),
            dim,
        ),
    )));
    lines.push(Line::from(Span::styled(
        "Try adjusting your search or filter.",
        dimmed(Style::default().fg(colors.text_dim), dim),
    )));
}

fn call_to_action_line(lines: &mut Vec<Line>, app: &App, dim: bool) {
    let colors = app.colors();
    lines.push(Line::from(Span::styled(
        "Enjoying the blog? Press c to explore other categories.",
        dimmed(
            Style::default()
                .fg(colors.accent)
                .add_modifier(Modifier::ITALIC),
            dim,
        ),
    )));
}

// ===============================
// Post page
// ===============================
fn post_page(f: &mut Frame, area: Rect, app: &mut App, dim: bool) {
    let colors = app.colors();

    let Some(post) = app.current_post().cloned() else {
        // Precondition says this cannot happen for catalog-driven input;
        // degrade to a placeholder rather than halting rendering.
        let placeholder = Paragraph::new("(This article is unavailable.)")
            .alignment(Alignment::Center)
            .style(Style::default().fg(colors.text_dim));
        f.render_widget(placeholder, area);
        return;
    };

    let suggestions_height = suggestions_height(app);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                  // banner
            Constraint::Length(4),                  // post header
            Constraint::Min(3),                     // article body
            Constraint::Length(suggestions_height), // suggestion sections
        ])
        .split(area);

    banner(f, rows[0], app, &post, dim);
    post_header(f, rows[1], app, &post, dim);

    // Body viewport feeds back into scroll clamping.
    app.set_body_viewport_height(rows[2].height);
    let body = Paragraph::new(post.body.clone())
        .style(dimmed(Style::default().fg(colors.text), dim))
        .wrap(Wrap { trim: false })
        .scroll((app.body_scroll(), 0));
    f.render_widget(body, rows[2]);

    suggestion_sections(f, rows[3], app, &post, dim);
}

fn banner(f: &mut Frame, area: Rect, app: &App, post: &Post, dim: bool) {
    let colors = app.colors();
    // Missing banner image degrades to an author banner, never an error.
    let text = match &post.image_url {
        Some(url) => format!("▒▒ {url} ▒▒"),
        None => format!("▒▒ {} ▒▒", post.author),
    };
    let banner = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(dimmed(
            Style::default()
                .fg(colors.banner)
                .add_modifier(Modifier::BOLD),
            dim,
        ));
    f.render_widget(banner, area);
}

fn post_header(f: &mut Frame, area: Rect, app: &App, post: &Post, dim: bool) {
    let colors = app.colors();
    let lines = vec![
        Line::from(Span::styled(
            post.title.clone(),
            dimmed(
                Style::default()
                    .fg(colors.heading)
                    .add_modifier(Modifier::BOLD),
                dim,
            ),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            post.subtitle.clone(),
            dimmed(Style::default().fg(colors.text_dim), dim),
        ))
        .alignment(Alignment::Center),
        byline_line(post, app, dim, "").alignment(Alignment::Center),
        Line::default(),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

/// One header line plus one line per suggestion, per non-empty section.
/// Empty sections take no space at all.
fn suggestions_height(app: &App) -> u16 {
    let s = app.suggestions();
    let mut height = 0u16;
    if !s.same_author.is_empty() {
        height += 1 + s.same_author.len() as u16;
    }
    if !s.other.is_empty() {
        height += 1 + s.other.len() as u16;
    }
    if height > 0 {
        height += 1; // leading gap
    }
    height
}

fn suggestion_sections(f: &mut Frame, area: Rect, app: &App, post: &Post, dim: bool) {
    let colors = app.colors();
    let s = app.suggestions();
    if s.is_empty() {
        return;
    }

    let mut lines: Vec<Line> = vec![Line::default()];
    let mut flat_idx = 0usize;

    let mut section = |lines: &mut Vec<Line>, title: String, posts: &[&Post], flat_idx: &mut usize| {
        if posts.is_empty() {
            return;
        }
        lines.push(Line::from(Span::styled(
            title,
            dimmed(
                Style::default()
                    .fg(colors.heading)
                    .add_modifier(Modifier::BOLD),
                dim,
            ),
        )));
        for p in posts {
            let selected = *flat_idx == app.suggestion_selection();
            let style = if selected {
                Style::default()
                    .fg(colors.selection_fg)
                    .bg(colors.selection_bg)
            } else {
                Style::default().fg(colors.text)
            };
            let marker = if selected { "▶ " } else { "  " };
            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(p.title.clone(), dimmed(style, dim)),
                Span::styled(
                    format!("  by {}", p.author),
                    dimmed(Style::default().fg(colors.text_dim), dim),
                ),
            ]));
            *flat_idx += 1;
        }
    };

    section(
        &mut lines,
        format!("More from {}", post.author),
        &s.same_author,
        &mut flat_idx,
    );
    section(
        &mut lines,
        "Suggested for you".to_string(),
        &s.other,
        &mut flat_idx,
    );

    f.render_widget(Paragraph::new(lines), area);
}
