use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use ui::catalog::guides::guide_keys;
use ui::catalog::{all_tools, categories, quick_link_key, QUICK_TOOLS};
use ui::i18n::STORE;
use ui::nav::{View, TOOL_ROUTES};

/// Extract all `t!(tr, "...")` literal keys from source files under `src/`.
/// This is intentionally conservative: it only matches a direct literal
/// second argument.
///
/// NOTE: This will not catch dynamically built keys (`&tool.title_key()`);
/// those are covered by `catalog_keys_exist_in_base` below.
fn extract_translation_keys_from_source(src_root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let needle = "t!(tr, \"";
        let mut rest = content.as_str();
        while let Some(pos) = rest.find(needle) {
            rest = &rest[pos + needle.len()..];
            let Some(end) = rest.find('"') else {
                break;
            };
            let key = &rest[..end];
            if !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || "._-".contains(c)) {
                found.insert(key.to_string());
            }
            rest = &rest[end..];
        }
    }

    found
}

fn assert_all_in_base<'a>(keys: impl IntoIterator<Item = &'a str>, what: &str) {
    let mut missing: Vec<_> = keys.into_iter().filter(|k| !STORE.has_key(k)).collect();
    missing.sort();
    missing.dedup();
    if !missing.is_empty() {
        panic!(
            "{what} keys missing in base dictionary ({}):\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn source_keys_exist_in_base() {
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let referenced = extract_translation_keys_from_source(&src_root);
    assert!(
        referenced.len() > 20,
        "suspiciously few literal keys found ({}); did the macro call shape change?",
        referenced.len()
    );
    assert_all_in_base(referenced.iter().map(String::as_str), "Referenced");
}

#[test]
fn catalog_keys_exist_in_base() {
    let category_keys: Vec<String> = categories().iter().map(|c| c.title_key()).collect();
    assert_all_in_base(category_keys.iter().map(String::as_str), "Category");

    let tool_keys: Vec<String> = all_tools()
        .flat_map(|tool| [tool.title_key(), tool.description_key()])
        .collect();
    assert_all_in_base(tool_keys.iter().map(String::as_str), "Tool");

    let guide = guide_keys();
    assert_all_in_base(guide.iter().map(String::as_str), "Guide");

    let quick: Vec<String> = QUICK_TOOLS.iter().map(|id| quick_link_key(id)).collect();
    assert_all_in_base(quick.iter().map(String::as_str), "Quick link");

    let mut views = vec![View::Home, View::About, View::Pricing, View::Contact, View::Privacy, View::Terms];
    views.extend(TOOL_ROUTES.iter().map(|(_, view)| *view));
    let view_keys: Vec<String> = views.into_iter().map(View::label_key).collect();
    assert_all_in_base(view_keys.iter().map(String::as_str), "View label");
}

#[test]
fn base_english_matches_catalog_literals() {
    // The literals in the catalog double as fallbacks; they should agree
    // with the base dictionary so a broken store renders the same text.
    for tool in all_tools() {
        assert_eq!(STORE.resolve(ui::i18n::Language::En, &tool.title_key(), None), tool.title);
    }
}
