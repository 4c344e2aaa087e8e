//! Shared shell state: selected language and accent color.
//!
//! One `Signal<ShellState>` is provided at the root of the tree; the setters
//! below are the only mutation path. Components that read the signal
//! re-render when it changes, so a language switch reaches every visible
//! string without a manual refresh.

use dioxus::prelude::*;

use crate::i18n::{Language, Translator};

pub const DEFAULT_THEME_COLOR: &str = "#e5322d";

/// Accent presets offered by the navbar swatches.
pub const THEME_PRESETS: &[&str] = &["#e5322d", "#2b6cde", "#1f9d55", "#7b4fd6", "#f08c00"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    language: Language,
    theme_color: String,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            language: Language::BASE,
            theme_color: DEFAULT_THEME_COLOR.to_string(),
        }
    }
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn theme_color(&self) -> &str {
        &self.theme_color
    }

    /// Switch language by code. Codes outside the supported set are ignored.
    pub fn set_language(&mut self, code: &str) {
        match Language::from_code(code) {
            Some(lang) => self.select_language(lang),
            None => tracing::debug!(code, "ignoring unsupported language code"),
        }
    }

    pub fn select_language(&mut self, lang: Language) {
        if self.language != lang {
            tracing::debug!(from = %self.language, to = %lang, "language changed");
        }
        self.language = lang;
    }

    /// Last write wins. Blank values are ignored.
    pub fn set_theme_color(&mut self, color: impl Into<String>) {
        let color = color.into();
        let trimmed = color.trim();
        if trimmed.is_empty() {
            return;
        }
        self.theme_color = trimmed.to_string();
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.language)
    }
}

/// Fetch the shell state provided by the host. Without a provider (a
/// component rendered standalone) a local default is used.
pub fn use_shell_state() -> Signal<ShellState> {
    let provided = try_use_context::<Signal<ShellState>>();
    let local = use_signal(ShellState::default);
    provided.unwrap_or(local)
}

/// Install the shell state at the root of a host app.
pub fn use_shell_state_provider() -> Signal<ShellState> {
    let state = use_signal(ShellState::default);
    use_context_provider(|| state)
}
