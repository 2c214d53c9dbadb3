use anyhow::{anyhow, Result};
use clap::Parser;
use std::env;
use std::path::PathBuf;

use crate::theme::Theme;
use crate::types::{Category, CategoryFilter};

/// blogcat - terminal blog reader
///
/// Browses a fixed catalog of posts with search, category filtering and
/// suggested reading. Configuration priority: CLI args > Environment
/// variables > Defaults.
#[derive(Parser, Debug)]
#[command(name = "blogcat")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Terminal blog reader", long_about = None)]
pub struct CliArgs {
    /// Path to a TOML catalog file (defaults to the embedded catalog)
    #[arg(long, env = "BLOGCAT_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Target UI rendering FPS (1-120)
    #[arg(long, env = "RENDER_FPS")]
    pub render_fps: Option<u32>,

    /// Available FPS options for Ctrl+O cycling (comma-separated, e.g. "20,30,60")
    #[arg(long, env = "RENDER_FPS_CHOICES")]
    pub render_fps_choices: Option<String>,

    /// Simulated main-page load delay in milliseconds (0-10000)
    #[arg(long, env = "LOAD_DELAY_MS")]
    pub load_delay_ms: Option<u64>,

    /// Search term applied on startup
    #[arg(long, env = "DEFAULT_SEARCH")]
    pub search: Option<String>,

    /// Category filter applied on startup: frontend or backend
    #[arg(long, env = "DEFAULT_CATEGORY", value_parser = clap::value_parser!(Category))]
    pub category: Option<Category>,

    /// Color theme: nord, dos-blue, amber-crt, green-phosphor
    #[arg(long, env = "BLOGCAT_THEME")]
    pub theme: Option<String>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
    pub render_fps: u32,
    pub render_fps_choices: Vec<u32>,
    pub load_delay_ms: u64,
    pub default_search: String,
    pub default_category: CategoryFilter,
    pub theme: Theme,
}

/// Validate that a value is within a given range (inclusive)
fn validate_in_range<T>(val: T, min: T, max: T, name: &str) -> Result<T>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    if val < min || val > max {
        Err(anyhow!("{name} must be in range [{min}, {max}], got {val}"))
    } else {
        Ok(val)
    }
}

/// Parse comma-separated FPS list and validate each value
fn parse_fps_list(s: &str) -> Vec<u32> {
    s.split(',')
        .filter_map(|v| v.trim().parse::<u32>().ok())
        .filter(|n| (1..=120).contains(n))
        .collect()
}

/// Load configuration from CLI args and environment variables
/// Priority: CLI args > Environment variables > Defaults
pub fn load() -> Result<Config> {
    from_args(CliArgs::parse())
}

fn from_args(args: CliArgs) -> Result<Config> {
    let render_fps_choices = args
        .render_fps_choices
        .or_else(|| env::var("RENDER_FPS_CHOICES").ok())
        .map(|s| parse_fps_list(&s))
        .unwrap_or_else(|| vec![20, 30, 60]);

    if render_fps_choices.is_empty() {
        return Err(anyhow!(
            "RENDER_FPS_CHOICES must contain at least one valid value (1-120)"
        ));
    }

    let default_fps = *render_fps_choices.first().unwrap();
    let render_fps = args
        .render_fps
        .or_else(|| env::var("RENDER_FPS").ok().and_then(|s| s.parse().ok()))
        .unwrap_or(default_fps);
    let render_fps = validate_in_range(render_fps, 1, 120, "RENDER_FPS")?;

    let load_delay_ms = args
        .load_delay_ms
        .or_else(|| env::var("LOAD_DELAY_MS").ok().and_then(|s| s.parse().ok()))
        .unwrap_or(1500);
    let load_delay_ms = validate_in_range(load_delay_ms, 0, 10_000, "LOAD_DELAY_MS")?;

    let default_search = args
        .search
        .or_else(|| env::var("DEFAULT_SEARCH").ok())
        .unwrap_or_default();

    let default_category = match args.category {
        Some(c) => CategoryFilter::Only(c),
        None => env::var("DEFAULT_CATEGORY")
            .ok()
            .and_then(|s| s.parse::<Category>().ok())
            .map(CategoryFilter::Only)
            .unwrap_or(CategoryFilter::All),
    };

    let theme = match args.theme.or_else(|| env::var("BLOGCAT_THEME").ok()) {
        Some(name) => Theme::from_str(&name).map_err(|e| anyhow!(e))?,
        None => Theme::default(),
    };

    Ok(Config {
        catalog_path: args.catalog,
        render_fps,
        render_fps_choices,
        load_delay_ms,
        default_search,
        default_category,
        theme,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_args() -> CliArgs {
        CliArgs {
            catalog: None,
            render_fps: None,
            render_fps_choices: None,
            load_delay_ms: None,
            search: None,
            category: None,
            theme: None,
        }
    }

    #[test]
    fn defaults_are_sane() {
        let cfg = from_args(bare_args()).unwrap();
        assert_eq!(cfg.load_delay_ms, 1500);
        assert_eq!(cfg.render_fps, cfg.render_fps_choices[0]);
        assert_eq!(cfg.default_category, CategoryFilter::All);
        assert!(cfg.default_search.is_empty());
    }

    #[test]
    fn fps_out_of_range_is_rejected() {
        let mut args = bare_args();
        args.render_fps = Some(500);
        assert!(from_args(args).is_err());
    }

    #[test]
    fn fps_list_drops_invalid_entries() {
        assert_eq!(parse_fps_list("20, 30, nope, 500, 60"), vec![20, 30, 60]);
    }

    #[test]
    fn category_and_theme_parse_from_args() {
        let mut args = bare_args();
        args.category = Some(Category::Backend);
        args.theme = Some("amber".into());
        let cfg = from_args(args).unwrap();
        assert_eq!(cfg.default_category, CategoryFilter::Only(Category::Backend));
        assert_eq!(cfg.theme, Theme::AmberCrt);
    }
}
