//! Colour themes for the interactive shell
//!
//! A [`ThemeProfile`] is owned by the shell and handed to whatever renders
//! output. Nothing in the core library reads it.

use colored::{Color, ColoredString, Colorize};
use serde::{Deserialize, Serialize};

/// Named theme selectable from the menu, config file or `--theme`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    /// Map the theme selector answer; anything other than `2` means dark
    pub fn from_choice(choice: &str) -> Self {
        if choice.trim() == "2" {
            ThemeName::Light
        } else {
            ThemeName::Dark
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Dark => write!(f, "dark"),
            ThemeName::Light => write!(f, "light"),
        }
    }
}

/// Semantic role of a piece of output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Title,
    Text,
    Accent,
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: Color,
    pub bold: bool,
}

impl Style {
    const fn plain(color: Color) -> Self {
        Self { color, bold: false }
    }

    const fn bold(color: Color) -> Self {
        Self { color, bold: true }
    }
}

/// Style for every [`Role`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeProfile {
    name: ThemeName,
    title: Style,
    text: Style,
    accent: Style,
    success: Style,
    error: Style,
    info: Style,
}

impl Default for ThemeProfile {
    fn default() -> Self {
        Self::dark()
    }
}

impl ThemeProfile {
    pub fn dark() -> Self {
        Self {
            name: ThemeName::Dark,
            title: Style::bold(Color::Cyan),
            text: Style::plain(Color::White),
            accent: Style::plain(Color::Magenta),
            success: Style::plain(Color::Green),
            error: Style::plain(Color::Red),
            info: Style::plain(Color::Yellow),
        }
    }

    pub fn light() -> Self {
        Self {
            name: ThemeName::Light,
            title: Style::bold(Color::Blue),
            text: Style::plain(Color::Black),
            accent: Style::plain(Color::Magenta),
            success: Style::plain(Color::Green),
            error: Style::plain(Color::Red),
            info: Style::plain(Color::Cyan),
        }
    }

    pub fn for_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
        }
    }

    pub fn name(&self) -> ThemeName {
        self.name
    }

    pub fn style(&self, role: Role) -> Style {
        match role {
            Role::Title => self.title,
            Role::Text => self.text,
            Role::Accent => self.accent,
            Role::Success => self.success,
            Role::Error => self.error,
            Role::Info => self.info,
        }
    }

    /// Apply the style of `role` to `text`
    pub fn paint(&self, role: Role, text: &str) -> ColoredString {
        let style = self.style(role);
        let painted = text.color(style.color);
        if style.bold { painted.bold() } else { painted }
    }
}
