use dioxus::prelude::*;

use crate::components::icon::{Icon, ToolIcon};
use crate::core::modal::{split_columns, LanguageModalState};
use crate::core::state::use_shell_state;
use crate::i18n::Language;
use crate::t;

/// Language picker overlay. Opening is driven by the caller through `modal`;
/// the backdrop, the close button and picking a language all close it.
#[component]
pub fn LanguageModal(mut modal: Signal<LanguageModalState>) -> Element {
    let mut shell = use_shell_state();
    let current = shell().language();
    let tr = shell().translator();

    if !modal().is_open() {
        return rsx! {};
    }

    let (left, right) = split_columns(&Language::ALL);
    let columns = [left, right];

    rsx! {
        div {
            class: "language-modal__backdrop",
            onclick: move |_| modal.write().close(),
            div {
                class: "language-modal",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "language-modal-title",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "language-modal__header",
                    h2 { id: "language-modal-title", {t!(tr, "language-modal.title")} }
                    button {
                        r#type: "button",
                        class: "language-modal__close",
                        aria_label: t!(tr, "language-modal.close"),
                        onclick: move |_| modal.write().close(),
                        ToolIcon { icon: Icon::Close, size: 20 }
                    }
                }

                div { class: "language-modal__columns",
                    for (index, column) in columns.into_iter().enumerate() {
                        ul { key: "{index}", class: "language-modal__column",
                            for lang in column.iter().copied() {
                                li { key: "{lang}",
                                    button {
                                        r#type: "button",
                                        class: option_class(lang == current),
                                        lang: lang.code(),
                                        onclick: move |_| {
                                            shell.with_mut(|state| modal.with_mut(|m| m.select(lang, state)));
                                        },
                                        "{lang.native_name()}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn option_class(active: bool) -> &'static str {
    if active {
        "language-modal__option language-modal__option--active"
    } else {
        "language-modal__option"
    }
}
