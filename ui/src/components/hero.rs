use dioxus::prelude::*;

use crate::catalog::tools::category;
use crate::components::icon::{Icon, ToolIcon};
use crate::components::navbar::navigate_to_tool;
use crate::core::nav::View;
use crate::core::state::use_shell_state;
use crate::t;

/// Smooth-scroll to an element on the landing page. Fire and forget: nothing
/// waits on the animation.
pub fn scroll_to(element_id: &str) {
    let _ = document::eval(&format!(
        r#"document.getElementById("{element_id}")?.scrollIntoView({{ behavior: "smooth" }});"#
    ));
}

#[component]
pub fn Hero(on_navigate: EventHandler<View>) -> Element {
    let state = use_shell_state()();
    let tr = state.translator();
    let popular = category("popular").map(|c| c.tools).unwrap_or_default();

    rsx! {
        section { class: "hero",
            div { class: "hero__inner",
                span { class: "hero__badge",
                    ToolIcon { icon: Icon::Sparkles, size: 16 }
                    {t!(tr, "hero.badge")}
                }
                h1 { class: "hero__title", {t!(tr, "hero.title")} }
                p { class: "hero__subtitle", {t!(tr, "hero.subtitle")} }

                div { class: "hero__actions",
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: move |_| scroll_to("tools"),
                        {t!(tr, "hero.cta-primary")}
                        ToolIcon { icon: Icon::ArrowRight, size: 18 }
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| scroll_to("guides"),
                        {t!(tr, "hero.cta-secondary")}
                    }
                }

                div { class: "hero__popular",
                    span { class: "hero__popular-label", {t!(tr, "hero.popular")} }
                    for tool in popular.iter() {
                        button {
                            key: "{tool.id}",
                            r#type: "button",
                            class: "chip",
                            onclick: move |_| navigate_to_tool(on_navigate, tool.id),
                            ToolIcon { icon: tool.icon, size: 16 }
                            {t!(tr, &tool.title_key(), tool.title)}
                        }
                    }
                }
            }
        }
    }
}
