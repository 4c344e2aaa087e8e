use dioxus::prelude::*;

use crate::catalog::tools::{categories, ToolDescriptor};
use crate::components::icon::ToolIcon;
use crate::core::nav::{resolve_tool, View};
use crate::core::state::use_shell_state;
use crate::i18n::Translator;
use crate::t;

/// Every category with its tool cards. Activating a card resolves the tool id
/// through the shared route table and hands the view to the host.
#[component]
pub fn ToolsGrid(on_navigate: EventHandler<View>) -> Element {
    let state = use_shell_state()();
    let tr = state.translator();
    let theme_color = state.theme_color().to_string();

    rsx! {
        section { id: "tools", class: "tools",
            div { class: "tools__header",
                h2 { {t!(tr, "tools.heading")} }
                p { {t!(tr, "tools.subheading")} }
            }

            for category in categories().iter() {
                div { key: "{category.slug}", class: "tools__category",
                    h3 { class: "tools__category-title", {t!(tr, &category.title_key(), category.title)} }
                    div { class: "tools__grid",
                        for tool in category.tools.iter() {
                            ToolCard {
                                key: "{tool.id}",
                                tool: *tool,
                                tr,
                                fallback_accent: theme_color.clone(),
                                on_navigate,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ToolCard(
    tool: ToolDescriptor,
    tr: Translator,
    fallback_accent: String,
    on_navigate: EventHandler<View>,
) -> Element {
    let accent = tool.accent_or(&fallback_accent).to_string();
    let tool_id = tool.id;

    rsx! {
        button {
            r#type: "button",
            class: "tool-card",
            style: "--tool-accent: {accent}",
            onclick: move |_| on_navigate.call(resolve_tool(tool_id)),
            span { class: "tool-card__icon",
                ToolIcon { icon: tool.icon, size: 28, color: accent.clone() }
            }
            span { class: "tool-card__title",
                {t!(tr, &tool.title_key(), tool.title)}
                if tool.is_new {
                    span { class: "badge badge--new", {t!(tr, "tools.new-badge")} }
                }
            }
            span { class: "tool-card__description", {t!(tr, &tool.description_key(), tool.description)} }
        }
    }
}
