//! Terminal styling for the report.
//!
//! Colors and emoji are decided once per run from a [`FormattingConfig`];
//! the report code asks a [`Styler`] for decorated strings and never checks
//! the terminal itself.

use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiMode {
    Auto,   // Use emoji if terminal supports Unicode
    Always, // Always use emoji
    Never,  // Never use emoji
}

impl EmojiMode {
    pub fn should_use_emoji(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub emoji: EmojiMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            emoji: EmojiMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode, emoji: EmojiMode) -> Self {
        Self { color, emoji }
    }

    /// ASCII-only output with no colors and no emoji
    pub fn plain() -> Self {
        Self::new(ColorMode::Never, EmojiMode::Never)
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }
}

/// Section markers used by the report, with their plain-text fallbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Start,
    Overview,
    Sources,
    Insights,
    Keywords,
    Words,
    Chart,
    Done,
}

impl Marker {
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Start => "🚀",
            Self::Overview => "📊",
            Self::Sources => "📈",
            Self::Insights => "💡",
            Self::Keywords => "🔑",
            Self::Words => "📝",
            Self::Chart => "🖼",
            Self::Done => "✅",
        }
    }

    pub fn fallback(self) -> &'static str {
        match self {
            Self::Start => "[START]",
            Self::Overview => "[STATS]",
            Self::Sources => "[SOURCES]",
            Self::Insights => "[INSIGHTS]",
            Self::Keywords => "[TERMS]",
            Self::Words => "[WORDS]",
            Self::Chart => "[CHART]",
            Self::Done => "[DONE]",
        }
    }
}

/// Resolved styling decisions for one run.
#[derive(Debug, Clone, Copy)]
pub struct Styler {
    color: bool,
    emoji: bool,
}

impl Styler {
    pub fn new(config: FormattingConfig) -> Self {
        let color = config.color.should_use_color();
        colored::control::set_override(color);
        Self {
            color,
            emoji: config.emoji.should_use_emoji(),
        }
    }

    pub fn plain() -> Self {
        Self {
            color: false,
            emoji: false,
        }
    }

    pub fn uses_color(&self) -> bool {
        self.color
    }

    pub fn marker(&self, marker: Marker) -> &'static str {
        if self.emoji {
            marker.emoji()
        } else {
            marker.fallback()
        }
    }

    /// Section heading prefixed with its marker
    pub fn section(&self, marker: Marker, title: &str) -> String {
        let text = format!("{} {}", self.marker(marker), title);
        if self.color {
            text.blue().bold().to_string()
        } else {
            text
        }
    }

    pub fn banner(&self, title: &str) -> String {
        if self.color {
            title.bold().to_string()
        } else {
            title.to_string()
        }
    }

    pub fn label(&self, text: &str) -> String {
        if self.color {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn success(&self, text: &str) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    /// Green for positive, red for negative scores
    pub fn signed(&self, value: f64, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        if value > 0.0 {
            text.green().to_string()
        } else if value < 0.0 {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}
