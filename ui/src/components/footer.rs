use dioxus::prelude::*;

use crate::catalog::tools::category;
use crate::components::icon::{Icon, ToolIcon};
use crate::components::navbar::navigate_to_tool;
use crate::core::nav::View;
use crate::core::state::use_shell_state;
use crate::t;

const COMPANY_LINKS: &[View] = &[View::About, View::Pricing, View::Contact];
const LEGAL_LINKS: &[View] = &[View::Privacy, View::Terms];

#[component]
pub fn Footer(on_navigate: EventHandler<View>, on_open_languages: EventHandler<()>) -> Element {
    let state = use_shell_state()();
    let tr = state.translator();
    let popular = category("popular").map(|c| c.tools).unwrap_or_default();

    rsx! {
        footer { class: "footer",
            div { class: "footer__inner",
                div { class: "footer__brand",
                    span { class: "footer__brand-mark", {t!(tr, "brand.name")} }
                    p { class: "footer__tagline", {t!(tr, "footer.tagline")} }
                }

                div { class: "footer__column",
                    h4 { {t!(tr, "footer.col-tools")} }
                    ul {
                        for tool in popular.iter() {
                            li { key: "{tool.id}",
                                button {
                                    r#type: "button",
                                    class: "footer__link",
                                    onclick: move |_| navigate_to_tool(on_navigate, tool.id),
                                    {t!(tr, &tool.title_key(), tool.title)}
                                }
                            }
                        }
                    }
                }

                div { class: "footer__column",
                    h4 { {t!(tr, "footer.col-company")} }
                    ul {
                        for view in COMPANY_LINKS.iter().copied() {
                            li { key: "{view}",
                                button {
                                    r#type: "button",
                                    class: "footer__link",
                                    onclick: move |_| on_navigate.call(view),
                                    {t!(tr, &view.label_key())}
                                }
                            }
                        }
                    }
                }

                div { class: "footer__column",
                    h4 { {t!(tr, "footer.col-legal")} }
                    ul {
                        for view in LEGAL_LINKS.iter().copied() {
                            li { key: "{view}",
                                button {
                                    r#type: "button",
                                    class: "footer__link",
                                    onclick: move |_| on_navigate.call(view),
                                    {t!(tr, &view.label_key())}
                                }
                            }
                        }
                    }
                }
            }

            div { class: "footer__bottom",
                button {
                    r#type: "button",
                    class: "footer__language",
                    onclick: move |_| on_open_languages.call(()),
                    ToolIcon { icon: Icon::Globe, size: 16 }
                    span { {t!(tr, "footer.language")} }
                    span { class: "footer__language-current", "{state.language().native_name()}" }
                }
                span { class: "footer__rights", {t!(tr, "footer.rights")} }
            }
        }
    }
}
