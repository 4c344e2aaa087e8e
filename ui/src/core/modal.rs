//! Language modal state and its two-column layout.

use crate::core::state::ShellState;
use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageModalState {
    open: bool,
}

impl LanguageModalState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Backdrop click or close button.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Apply the language and close, once each.
    pub fn select(&mut self, lang: Language, state: &mut ShellState) {
        state.select_language(lang);
        self.close();
    }
}

/// Split at the midpoint; the first column takes `ceil(n / 2)` items.
pub fn split_columns<T>(items: &[T]) -> (&[T], &[T]) {
    items.split_at(items.len().div_ceil(2))
}
