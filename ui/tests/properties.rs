use proptest::prelude::*;

use ui::catalog::canonical_tool_id;
use ui::i18n::{Language, STORE};
use ui::modal::split_columns;
use ui::nav::{resolve_tool, View};
use ui::state::ShellState;

fn any_language() -> impl Strategy<Value = Language> {
    (0..Language::ALL.len()).prop_map(|i| Language::ALL[i])
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn split_columns_is_ceil_floor(items in prop::collection::vec(any::<u16>(), 0..64)) {
        let (left, right) = split_columns(&items);
        prop_assert_eq!(left.len(), items.len().div_ceil(2));
        prop_assert_eq!(right.len(), items.len() / 2);

        let joined: Vec<u16> = left.iter().chain(right).copied().collect();
        prop_assert_eq!(joined, items);
    }

    #[test]
    fn unknown_keys_return_fallback_or_key(
        lang in any_language(),
        stem in "[a-z]{3,8}",
        fallback in "[A-Za-z ]{1,16}",
    ) {
        let key = format!("zz-missing.{stem}");
        prop_assert_eq!(STORE.resolve(lang, &key, Some(fallback.as_str())), fallback);
        prop_assert_eq!(STORE.resolve(lang, &key, None), key);
    }

    #[test]
    fn language_round_trip_restores_output(a in any_language(), b in any_language()) {
        let keys: Vec<&str> = STORE.keys().collect();
        let mut state = ShellState::new();

        state.select_language(a);
        let before: Vec<String> = keys.iter().map(|k| state.translator().t(k)).collect();

        state.select_language(b);
        state.select_language(a);
        let after: Vec<String> = keys.iter().map(|k| state.translator().t(k)).collect();

        prop_assert_eq!(before, after);
    }

    #[test]
    fn resolved_value_is_override_or_base(lang in any_language(), index in any::<prop::sample::Index>()) {
        let keys: Vec<&str> = STORE.keys().collect();
        prop_assume!(!keys.is_empty());
        let key = keys[index.index(keys.len())];

        let base = STORE.resolve(Language::BASE, key, None);
        let value = STORE.resolve(lang, key, None);
        prop_assert!(!value.is_empty());
        if lang.is_base() {
            prop_assert_eq!(value, base);
        }
    }

    #[test]
    fn numeric_suffix_is_stripped(stem in "[a-z]{2,8}(-[a-z]{2,8})?", n in 2u32..100) {
        let listed = format!("{stem}-{n}");
        prop_assert_eq!(canonical_tool_id(&listed), stem.as_str());
        prop_assert_eq!(canonical_tool_id(&stem), stem.as_str());
    }

    #[test]
    fn cross_listed_ids_share_a_view(n in 2u32..10) {
        for id in ["merge", "split", "edit", "sign", "compress", "pdf-to-word"] {
            let listed = format!("{id}-{n}");
            prop_assert_eq!(resolve_tool(&listed), resolve_tool(id));
            prop_assert_ne!(resolve_tool(id), View::Home);
        }
    }

    #[test]
    fn blank_theme_color_is_ignored(color in "#[0-9a-f]{6}", blank in "[ \t]{0,4}") {
        let mut state = ShellState::new();
        state.set_theme_color(color.clone());
        state.set_theme_color(blank);
        prop_assert_eq!(state.theme_color(), color.as_str());
    }
}
