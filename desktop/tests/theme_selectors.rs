#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure the class names the shell components emit (hero, tool cards, guides,
  footer, language modal) keep a rule in the unified theme
  `ui/assets/theme/main.css`.
- Fail fast if a refactor drops or renames a class, instead of shipping an
  unstyled section in packaged (embedded) desktop builds.

If you intentionally rename or remove a selector:
    1. Update the component markup in `ui/src/components/`.
    2. Adjust REQUIRED_SELECTORS below.
*/

use ui::components::THEME_CSS_INLINE as THEME_CSS;

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--ghost",
    ".chip {",
    ".badge--new",
    // Hero
    ".hero {",
    ".hero__title",
    ".hero__actions",
    ".hero__popular",
    // Tools grid
    ".tools__category",
    ".tools__grid",
    ".tool-card {",
    ".tool-card__icon",
    ".tool-card__description",
    // Guides
    ".guide {",
    ".guide__steps",
    ".guide__step-number",
    ".guide__link",
    // Footer
    ".footer {",
    ".footer__column",
    ".footer__language",
    // Language modal
    ".language-modal__backdrop",
    ".language-modal__columns",
    ".language-modal__option--active",
    // Host placeholder pages
    ".tool-page {",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn language_modal_block_consistency() {
    // Modal column and option selectors travel together.
    let has_column = THEME_CSS.contains(".language-modal__column");
    let has_option = THEME_CSS.contains(".language-modal__option");
    assert!(
        has_column && has_option,
        "Language modal sub‑selectors missing (column: {has_column}, option: {has_option})"
    );
}
