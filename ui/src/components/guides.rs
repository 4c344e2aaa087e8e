use dioxus::prelude::*;

use crate::catalog::guides::{guide_key, guide_link_key, guide_subtitle_key, guide_title_key, guides};
use crate::components::icon::{Icon, ToolIcon};
use crate::components::navbar::navigate_to_tool;
use crate::core::nav::View;
use crate::core::state::use_shell_state;
use crate::t;

#[component]
pub fn Guides(on_navigate: EventHandler<View>) -> Element {
    let tr = use_shell_state()().translator();

    rsx! {
        section { id: "guides", class: "guides",
            div { class: "guides__header",
                h2 { {t!(tr, "guides.heading")} }
                p { {t!(tr, "guides.subheading")} }
            }

            div { class: "guides__list",
                for (index, guide) in guides().iter().enumerate() {
                    article { key: "{index}", class: "guide",
                        h3 { class: "guide__title", {t!(tr, &guide_title_key(index), guide.title)} }
                        if let Some(subtitle) = guide.subtitle {
                            p { class: "guide__subtitle", {t!(tr, &guide_subtitle_key(index), subtitle)} }
                        }
                        ol { class: "guide__steps",
                            for (step, text) in guide.steps.iter().enumerate() {
                                li { key: "{step}", class: "guide__step",
                                    span { class: "guide__step-number", "{step + 1}" }
                                    span { {t!(tr, &guide_key(index, step), text)} }
                                }
                            }
                        }
                        button {
                            r#type: "button",
                            class: "guide__link",
                            onclick: move |_| navigate_to_tool(on_navigate, guide.tool),
                            {t!(tr, &guide_link_key(index), guide.link_label)}
                            ToolIcon { icon: Icon::ArrowRight, size: 16 }
                        }
                    }
                }
            }
        }
    }
}
