use dioxus::prelude::*;

use crate::components::{Footer, Guides, Hero, LanguageModal, Navbar, ShellStyles, ToolsGrid};
use crate::core::modal::LanguageModalState;
use crate::core::nav::{self, View};
use crate::core::state::use_shell_state;

/// The whole marketing page. `on_navigate` is the host's router hook; every
/// tool, guide and footer link ends up there.
#[component]
pub fn Landing(on_navigate: EventHandler<View>) -> Element {
    nav::audit_catalog();

    let mut modal = use_signal(LanguageModalState::default);
    let on_open_languages = use_callback(move |_: ()| modal.write().open());

    // Subscribe to the shell state so the page re-renders on language change.
    let state = use_shell_state()();
    let lang = state.language();
    let accent = state.theme_color().to_string();

    #[cfg(debug_assertions)]
    tracing::debug!(%lang, "Landing render");

    rsx! {
        ShellStyles {}
        div {
            class: "page page-landing",
            lang: lang.code(),
            style: "--accent: {accent}",
            Navbar { on_navigate, on_open_languages }
            main {
                Hero { on_navigate }
                ToolsGrid { on_navigate }
                Guides { on_navigate }
            }
            Footer { on_navigate, on_open_languages }
            LanguageModal { modal }
        }
    }
}
