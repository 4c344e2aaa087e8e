//! Internationalization (i18n) support for `pagewise-ui`.
//!
//! This module wires together:
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `fluent` (message formatting, overlay merge via `add_resource_overriding`)
//! - `fluent-syntax` (enumerating the message ids of the base resource)
//! - `unic-langid` (parsing BCP-47 tags into a supported [`Language`])
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en/pagewise.ftl   (base, exhaustive)
//!   es/pagewise.ftl   (sparse overlay)
//!   fr/pagewise.ftl   (sparse overlay)
//!   ...
//! ```
//!
//! Every dictionary is flattened at load time: the overlay is merged onto the
//! base, so a non-base dictionary always has exactly the base key set. Keys
//! are dot-delimited (`hero.title`, `nav.menu-open`). Fluent identifiers
//! cannot contain dots, so FTL writes each dot as `-` and each hyphen inside
//! a segment as `_` (`hero-title`, `nav-menu_open`). Dictionaries are keyed
//! by the dot form; a lookup never rewrites the caller's key.
//!
//! Usage in a component:
//! ```ignore
//! let tr = use_shell_state()().translator();
//! let title = t!(tr, "hero.title");
//! let step = t!(tr, &guide_key(0, 1), "Upload your file");
//! ```
//!
//! To add a new locale:
//! 1. Add a variant to [`Language`] (and to `Language::ALL`).
//! 2. Create `i18n/<code>/pagewise.ftl` with only the keys you translate.
//! 3. Run tests: the overlay audit rejects ids the base does not define.
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use fluent::{FluentBundle, FluentResource};
use fluent_syntax::ast;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// Canonical FTL filename inside every locale folder.
pub const FTL_FILENAME: &str = "pagewise.ftl";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Ergonomic translation macro.
/// Examples:
///     t!(tr, "nav.tools")
///     t!(tr, "tool.merge.title", "Merge PDF")
#[macro_export]
macro_rules! t {
    ($tr:expr, $key:expr) => {
        $tr.t($key)
    };
    ($tr:expr, $key:expr, $fallback:expr) => {
        $tr.t_or($key, $fallback)
    };
}

/// Supported interface languages, in canonical picker order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Fr,
    De,
    It,
    Pt,
    Nl,
    Pl,
    Ja,
    Zh,
    Ko,
}

impl Language {
    /// Base language: exhaustive dictionary and fallback for every other one.
    pub const BASE: Language = Language::En;

    pub const ALL: [Language; 11] = [
        Language::En,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::It,
        Language::Pt,
        Language::Nl,
        Language::Pl,
        Language::Ja,
        Language::Zh,
        Language::Ko,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::It => "it",
            Language::Pt => "pt",
            Language::Nl => "nl",
            Language::Pl => "pl",
            Language::Ja => "ja",
            Language::Zh => "zh",
            Language::Ko => "ko",
        }
    }

    /// Name of the language written in that language (what pickers show).
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Fr => "Français",
            Language::De => "Deutsch",
            Language::It => "Italiano",
            Language::Pt => "Português",
            Language::Nl => "Nederlands",
            Language::Pl => "Polski",
            Language::Ja => "日本語",
            Language::Zh => "中文",
            Language::Ko => "한국어",
        }
    }

    /// Accepts a bare code (`"es"`, case-insensitive) or a full tag (`"es-ES"`).
    /// Returns `None` for anything outside the supported set.
    pub fn from_code(raw: &str) -> Option<Language> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let langid: LanguageIdentifier = trimmed.parse().ok()?;
        let primary = langid.language.as_str().to_ascii_lowercase();
        Language::ALL.into_iter().find(|lang| lang.code() == primary)
    }

    pub fn identifier(self) -> LanguageIdentifier {
        self.code().parse().unwrap_or_default()
    }

    pub fn is_base(self) -> bool {
        self == Language::BASE
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::BASE
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// `(code, display name)` pairs for building language pickers elsewhere.
pub fn supported_languages() -> Vec<(&'static str, &'static str)> {
    Language::ALL
        .iter()
        .map(|lang| (lang.code(), lang.native_name()))
        .collect()
}

/// Errors raised while loading embedded dictionaries.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
    #[error("missing embedded resource {0}")]
    MissingResource(String),
    #[error("resource {path} is not valid UTF-8")]
    InvalidUtf8 { path: String },
}

/// Flat dot key → display string map for one language.
pub type Dictionary = BTreeMap<String, String>;

/// Dot key written by an FTL message id (`nav-menu_open` → `nav.menu-open`).
pub fn message_key(id: &str) -> String {
    id.replace('-', ".").replace('_', "-")
}

/// All dictionaries, materialized once. Reads never mutate it.
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    dictionaries: HashMap<Language, Dictionary>,
}

impl TranslationStore {
    /// Store with no dictionaries: every lookup degrades to fallback or key.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the FTL files embedded under `i18n/`.
    pub fn embedded() -> Result<Self, I18nError> {
        let base_path = resource_path(Language::BASE);
        let base = read_embedded(&base_path)?
            .ok_or_else(|| I18nError::MissingResource(base_path.clone()))?;

        let mut overlays = Vec::new();
        for lang in Language::ALL.into_iter().filter(|l| !l.is_base()) {
            if let Some(source) = read_embedded(&resource_path(lang))? {
                overlays.push((lang, source));
            }
        }

        let borrowed: Vec<(Language, &str)> = overlays
            .iter()
            .map(|(lang, source)| (*lang, source.as_str()))
            .collect();
        Ok(Self::from_sources(&base, &borrowed))
    }

    /// Build dictionaries from raw FTL sources. Languages without an overlay
    /// get a plain copy of the base dictionary.
    pub fn from_sources(base: &str, overlays: &[(Language, &str)]) -> Self {
        let base_ids = message_ids(Language::BASE, base);
        let mut dictionaries = HashMap::new();

        for lang in Language::ALL {
            let overlay = if lang.is_base() {
                None
            } else {
                overlays
                    .iter()
                    .find(|(candidate, _)| *candidate == lang)
                    .map(|(_, source)| *source)
            };

            if let Some(source) = overlay {
                for id in message_ids(lang, source) {
                    if !base_ids.contains(&id) {
                        tracing::warn!(
                            language = lang.code(),
                            key = message_key(&id).as_str(),
                            "dropping overlay message unknown to the base dictionary"
                        );
                    }
                }
            }

            let dictionary = flatten(lang, base, overlay, &base_ids);
            dictionaries.insert(lang, dictionary);
        }

        Self { dictionaries }
    }

    pub fn dictionary(&self, lang: Language) -> Option<&Dictionary> {
        self.dictionaries.get(&lang)
    }

    /// Selected language, then base language, then `fallback`, then `key`.
    pub fn resolve(&self, lang: Language, key: &str, fallback: Option<&str>) -> String {
        self.lookup(lang, key)
            .or_else(|| self.lookup(Language::BASE, key))
            .map(str::to_owned)
            .or_else(|| fallback.map(str::to_owned))
            .unwrap_or_else(|| key.to_owned())
    }

    /// Like [`resolve`](Self::resolve) but for an unvalidated language tag.
    /// Unknown tags use the base dictionary.
    pub fn resolve_tag(&self, tag: &str, key: &str, fallback: Option<&str>) -> String {
        let lang = Language::from_code(tag).unwrap_or(Language::BASE);
        self.resolve(lang, key, fallback)
    }

    /// Whether the base dictionary defines `key`.
    pub fn has_key(&self, key: &str) -> bool {
        self.lookup(Language::BASE, key).is_some()
    }

    /// Dot keys of the base dictionary, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.dictionaries
            .get(&Language::BASE)
            .into_iter()
            .flat_map(|dict| dict.keys().map(String::as_str))
    }

    fn lookup(&self, lang: Language, key: &str) -> Option<&str> {
        self.dictionaries
            .get(&lang)
            .and_then(|dict| dict.get(key))
            .map(String::as_str)
    }
}

/// Process-wide store built from the embedded FTL files.
pub static STORE: Lazy<TranslationStore> = Lazy::new(|| match TranslationStore::embedded() {
    Ok(store) => {
        tracing::debug!(languages = Language::ALL.len(), "translation store loaded");
        store
    }
    Err(err) => {
        tracing::error!("failed loading translations ({err}); continuing with raw keys");
        TranslationStore::empty()
    }
});

/// Accessor bound to one language, handed to components for a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Translator {
    pub language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn t(&self, key: &str) -> String {
        STORE.resolve(self.language, key, None)
    }

    pub fn t_or(&self, key: &str, fallback: &str) -> String {
        STORE.resolve(self.language, key, Some(fallback))
    }
}

fn resource_path(lang: Language) -> String {
    format!("{}/{FTL_FILENAME}", lang.code())
}

fn read_embedded(path: &str) -> Result<Option<String>, I18nError> {
    let Some(file) = Localizations::get(path) else {
        return Ok(None);
    };
    String::from_utf8(file.data.into_owned())
        .map(Some)
        .map_err(|_| I18nError::InvalidUtf8 {
            path: path.to_string(),
        })
}

/// Message ids (not terms) defined in an FTL source.
fn message_ids(lang: Language, source: &str) -> Vec<String> {
    let resource = match fluent_syntax::parser::parse(source) {
        Ok(resource) => resource,
        Err((resource, errors)) => {
            tracing::warn!(
                language = lang.code(),
                errors = errors.len(),
                "FTL source has syntax errors; keeping the parsed entries"
            );
            resource
        }
    };

    resource
        .body
        .iter()
        .filter_map(|entry| match entry {
            ast::Entry::Message(message) => Some(message.id.name.to_string()),
            _ => None,
        })
        .collect()
}

fn parse_resource(lang: Language, source: &str) -> FluentResource {
    match FluentResource::try_new(source.to_string()) {
        Ok(resource) => resource,
        Err((resource, errors)) => {
            tracing::warn!(
                language = lang.code(),
                errors = errors.len(),
                "FTL resource partially parsed"
            );
            resource
        }
    }
}

/// Format every base message for `lang` into a flat dictionary.
fn flatten(lang: Language, base: &str, overlay: Option<&str>, ids: &[String]) -> Dictionary {
    let mut bundle = FluentBundle::new(vec![lang.identifier()]);
    bundle.set_use_isolating(false);

    if let Err(errors) = bundle.add_resource(parse_resource(Language::BASE, base)) {
        tracing::warn!(errors = errors.len(), "duplicate entries in base resource");
    }
    if let Some(source) = overlay {
        bundle.add_resource_overriding(parse_resource(lang, source));
    }

    let mut dictionary = Dictionary::new();
    for id in ids {
        let Some(pattern) = bundle.get_message(id).and_then(|message| message.value()) else {
            continue;
        };
        let mut errors = Vec::new();
        let value = bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            tracing::warn!(
                language = lang.code(),
                id = id.as_str(),
                "message formatted with errors"
            );
        }
        dictionary.insert(message_key(id), value.into_owned());
    }
    dictionary
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "\
-brand = Pagewise
hero-title = Every tool you need
hero-subtitle = Work with { -brand }
footer-tagline = Made for paperwork
nav-menu_close = Close menu
";

    fn store() -> TranslationStore {
        TranslationStore::from_sources(
            BASE,
            &[
                (Language::Es, "hero-title = Todas las herramientas\n"),
                (Language::Fr, "footer-tagline = Fait pour la paperasse\nbogus-key = Nope\n"),
            ],
        )
    }

    #[test]
    fn fallback_language_is_present() {
        assert!(supported_languages().iter().any(|(code, _)| *code == "en"));
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn overlay_replaces_only_overridden_keys() {
        let store = store();
        assert_eq!(
            store.resolve(Language::Es, "hero.title", None),
            "Todas las herramientas"
        );
        assert_eq!(
            store.resolve(Language::Es, "footer.tagline", None),
            "Made for paperwork"
        );
    }

    #[test]
    fn terms_from_base_are_expanded() {
        assert_eq!(
            store().resolve(Language::Fr, "hero.subtitle", None),
            "Work with Pagewise"
        );
    }

    #[test]
    fn overlays_never_add_keys() {
        let store = store();
        let base: Vec<_> = store.dictionary(Language::En).unwrap().keys().collect();
        for lang in Language::ALL {
            let keys: Vec<_> = store.dictionary(lang).unwrap().keys().collect();
            assert_eq!(keys, base, "{lang} key set differs from base");
        }
        assert_eq!(store.resolve(Language::Fr, "bogus.key", None), "bogus.key");
    }

    #[test]
    fn missing_keys_degrade_to_literal_then_key() {
        let store = store();
        assert_eq!(store.resolve(Language::De, "nope.nothing", Some("X")), "X");
        assert_eq!(store.resolve(Language::De, "nope.nothing", None), "nope.nothing");
    }

    #[test]
    fn unknown_tag_uses_base_dictionary() {
        let store = store();
        assert_eq!(
            store.resolve_tag("zz-ZZ", "hero.title", None),
            "Every tool you need"
        );
        assert_eq!(
            store.resolve_tag("es-MX", "hero.title", None),
            "Todas las herramientas"
        );
    }

    #[test]
    fn keys_map_one_to_one() {
        let store = store();
        assert_eq!(store.resolve(Language::En, "nav.menu-close", None), "Close menu");
        assert_eq!(store.resolve(Language::En, "hero-title", Some("X")), "X");
        assert_eq!(store.resolve(Language::En, "nav.menu.close", Some("X")), "X");
        assert_eq!(store.resolve(Language::En, "nav.menu_close", None), "nav.menu_close");
        assert!(store.keys().all(|key| !key.contains('_')));
        assert!(store.keys().any(|key| key == "nav.menu-close"));
    }

    #[test]
    fn message_key_decodes_ids() {
        assert_eq!(message_key("hero-title"), "hero.title");
        assert_eq!(message_key("tool-delete_pages-title"), "tool.delete-pages.title");
        assert_eq!(message_key("language_modal-close"), "language-modal.close");
    }

    #[test]
    fn empty_store_returns_keys() {
        let store = TranslationStore::empty();
        assert_eq!(store.resolve(Language::Es, "hero.title", None), "hero.title");
        assert!(!store.has_key("hero.title"));
    }

    #[test]
    fn from_code_accepts_tags_and_rejects_unknown() {
        assert_eq!(Language::from_code("ES"), Some(Language::Es));
        assert_eq!(Language::from_code("pt-BR"), Some(Language::Pt));
        assert_eq!(Language::from_code("xx"), None);
        assert_eq!(Language::from_code(""), None);
        assert_eq!(Language::from_code("not a tag"), None);
    }

    #[test]
    fn embedded_store_loads_base() {
        let store = TranslationStore::embedded().expect("embedded resources load");
        assert!(store.has_key("hero.title"));
        assert!(store.keys().count() > 50);
    }
}
