use dioxus::prelude::*;

use crate::components::{LanguageModal, Navbar, ShellStyles};
use crate::core::modal::LanguageModalState;
use crate::core::nav::View;
use crate::core::state::use_shell_state;
use crate::t;

/// Stand-in page hosts render for a resolved destination until the real tool
/// page exists. `view: None` renders the not-found variant.
#[component]
pub fn Placeholder(view: Option<View>, on_navigate: EventHandler<View>) -> Element {
    let state = use_shell_state()();
    let tr = state.translator();
    let accent = state.theme_color().to_string();
    let mut modal = use_signal(LanguageModalState::default);
    let on_open_languages = use_callback(move |_: ()| modal.write().open());

    let heading = match view {
        Some(view) => tr.t(&view.label_key()),
        None => t!(tr, "host.not-found"),
    };

    rsx! {
        ShellStyles {}
        div {
            class: "page page-placeholder",
            lang: state.language().code(),
            style: "--accent: {accent}",
            Navbar { on_navigate, on_open_languages }
            main { class: "tool-page",
                h1 { "{heading}" }
                if view.is_some() {
                    p { class: "tool-page__note", {t!(tr, "host.page-note")} }
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| on_navigate.call(View::Home),
                    {t!(tr, "host.page-back")}
                }
            }
            LanguageModal { modal }
        }
    }
}
