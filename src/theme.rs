//! Color themes for the reader.
//!
//! A handful of terminal color schemes selectable via `--theme`.

use ratatui::style::Color;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Muted modern palette (default).
    #[default]
    Nord,
    /// Bright white on blue, classic DOS.
    DosBlue,
    /// Amber on black, retro CRT.
    AmberCrt,
    /// Green phosphor terminal.
    GreenPhosphor,
}

impl Theme {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "nord" => Ok(Theme::Nord),
            "dos" | "dosblue" | "dos-blue" => Ok(Theme::DosBlue),
            "amber" | "ambercrt" | "amber-crt" => Ok(Theme::AmberCrt),
            "green" | "greenphosphor" | "green-phosphor" => Ok(Theme::GreenPhosphor),
            _ => Err(format!(
                "Unknown theme '{s}'. Available: nord, dos-blue, amber-crt, green-phosphor"
            )),
        }
    }

    pub fn colors(&self) -> ColorScheme {
        match self {
            Theme::Nord => ColorScheme::nord(),
            Theme::DosBlue => ColorScheme::dos_blue(),
            Theme::AmberCrt => ColorScheme::amber_crt(),
            Theme::GreenPhosphor => ColorScheme::green_phosphor(),
        }
    }

    /// Cycle to the next theme (bound to a key at runtime).
    pub fn next(self) -> Self {
        match self {
            Theme::Nord => Theme::DosBlue,
            Theme::DosBlue => Theme::AmberCrt,
            Theme::AmberCrt => Theme::GreenPhosphor,
            Theme::GreenPhosphor => Theme::Nord,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Nord => write!(f, "nord"),
            Theme::DosBlue => write!(f, "dos-blue"),
            Theme::AmberCrt => write!(f, "amber-crt"),
            Theme::GreenPhosphor => write!(f, "green-phosphor"),
        }
    }
}

/// Resolved color tokens for one theme.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    pub background: Color,
    /// Primary body text.
    pub text: Color,
    /// Secondary text (bylines, dates, hints).
    pub text_dim: Color,
    /// Page and section headings.
    pub heading: Color,
    /// Accent for the search bar border and selected category.
    pub accent: Color,
    /// Tag pill color.
    pub tag: Color,
    /// Selected list card.
    pub selection_bg: Color,
    pub selection_fg: Color,
    /// Skeleton placeholder rows while the main page "loads".
    pub skeleton: Color,
    /// Author banner line on the post page.
    pub banner: Color,
    pub toast: Color,
    pub debug_indicator: Color,
}

impl ColorScheme {
    pub fn nord() -> Self {
        Self {
            background: Color::Black,
            text: Color::White,
            text_dim: Color::Gray,
            heading: Color::Cyan,
            accent: Color::Yellow,
            tag: Color::Cyan,
            selection_bg: Color::Yellow,
            selection_fg: Color::Black,
            skeleton: Color::Rgb(60, 60, 60),
            banner: Color::Rgb(94, 129, 172),
            toast: Color::Green,
            debug_indicator: Color::Magenta,
        }
    }

    pub fn dos_blue() -> Self {
        Self {
            background: Color::Blue,
            text: Color::White,
            text_dim: Color::LightBlue,
            heading: Color::Yellow,
            accent: Color::Yellow,
            tag: Color::LightCyan,
            selection_bg: Color::Cyan,
            selection_fg: Color::Black,
            skeleton: Color::Rgb(40, 40, 160),
            banner: Color::Cyan,
            toast: Color::LightGreen,
            debug_indicator: Color::LightMagenta,
        }
    }

    pub fn amber_crt() -> Self {
        let amber = Color::Rgb(255, 176, 0);
        let amber_bright = Color::Rgb(255, 200, 100);
        let amber_dim = Color::Rgb(180, 120, 0);
        Self {
            background: Color::Black,
            text: amber,
            text_dim: amber_dim,
            heading: amber_bright,
            accent: amber_bright,
            tag: amber_bright,
            selection_bg: amber,
            selection_fg: Color::Black,
            skeleton: Color::Rgb(60, 40, 0),
            banner: amber_dim,
            toast: Color::Rgb(100, 255, 100),
            debug_indicator: Color::Rgb(255, 100, 255),
        }
    }

    pub fn green_phosphor() -> Self {
        let green = Color::Rgb(0, 255, 0);
        let green_dim = Color::Rgb(0, 180, 0);
        let green_bright = Color::Rgb(100, 255, 100);
        Self {
            background: Color::Black,
            text: green,
            text_dim: green_dim,
            heading: green_bright,
            accent: green_bright,
            tag: green_bright,
            selection_bg: green,
            selection_fg: Color::Black,
            skeleton: Color::Rgb(0, 50, 0),
            banner: green_dim,
            toast: green_bright,
            debug_indicator: Color::Cyan,
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::nord()
    }
}
