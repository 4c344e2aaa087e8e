use dioxus::prelude::*;

// Shared theme + navbar stylesheets (inlined as well in release native builds,
// where the webview cannot resolve bundled asset URLs).
const THEME_CSS: Asset = asset!("/assets/theme/main.css");
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Unified theme, embedded so hosts can inline it without an asset pipeline.
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

#[component]
pub fn ShellStyles() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{THEME_CSS_INLINE}" }
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }
    }
}
