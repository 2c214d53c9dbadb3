//! blogcat - terminal blog reader
//!
//! Browses a fixed, read-only catalog of blog posts: a main page with
//! search/category filtering and per-category sections, and a post page with
//! the article body and suggested-reading widgets. Page swaps run a staged
//! fade transition and the main page reveals through a simulated-loading
//! skeleton.
//!
//! ## Architecture
//!
//! Two logical components composed by the app state:
//! - [`view`]: which top-level page is active, plus the transition clock.
//! - [`filter`] / [`suggest`]: derive the visible subsets from the catalog.
//!
//! Everything else is presentational glue around those.

pub mod app;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod suggest;
pub mod theme;
pub mod types;
pub mod ui;
pub mod view;

// Re-export commonly used types
pub use app::{App, InputMode};
pub use catalog::Catalog;
pub use config::Config;
pub use suggest::{suggest, Suggestions};
pub use types::{AppEvent, Category, CategoryFilter, Post};
pub use view::{ViewRouter, ViewState};
