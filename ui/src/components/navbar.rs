use dioxus::prelude::*;

use crate::catalog::tools::{categories, category, quick_link_key, ToolCategory, QUICK_TOOLS};
use crate::components::icon::{Icon, ToolIcon};
use crate::core::menu::{MenuId, MenuState, MobileNav};
use crate::core::nav::{resolve_tool, View};
use crate::core::state::{use_shell_state, THEME_PRESETS};
use crate::i18n::Translator;
use crate::t;

/// Top navigation bar.
///
/// Desktop layouts get two hover dropdowns (the Tools mega-menu listing every
/// category and the Convert dropdown). Small viewports get a burger toggling a
/// full-width panel instead. Picking a tool anywhere closes whatever was open
/// and dispatches `on_navigate` once.
#[component]
pub fn Navbar(on_navigate: EventHandler<View>, on_open_languages: EventHandler<()>) -> Element {
    let mut shell = use_shell_state();
    let mut menus = use_signal(MenuState::default);
    let mut mobile = use_signal(MobileNav::default);

    let state = shell();
    let tr = state.translator();
    let accent = state.theme_color().to_string();
    let language_name = state.language().native_name();

    let tools_open = menus().is_open(MenuId::Tools);
    let convert_open = menus().is_open(MenuId::Convert);
    let mobile_open = mobile().is_open();
    let (burger_icon, burger_label) = if mobile_open {
        (Icon::Close, t!(tr, "nav.menu-close"))
    } else {
        (Icon::Menu, t!(tr, "nav.menu-open"))
    };

    let all_categories: Vec<&'static ToolCategory> = categories().iter().collect();
    let convert_categories: Vec<&'static ToolCategory> = ["convert-from", "convert-to"]
        .into_iter()
        .filter_map(category)
        .collect();

    #[cfg(debug_assertions)]
    tracing::debug!(lang = %state.language(), ?tools_open, ?convert_open, "Navbar render");

    rsx! {
        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                button {
                    r#type: "button",
                    class: "navbar__brand",
                    onclick: move |_| {
                        menus.write().dismiss();
                        on_navigate.call(View::Home);
                    },
                    span { class: "navbar__brand-spark", aria_hidden: "true" }
                    span { class: "navbar__brand-mark", {t!(tr, "brand.name")} }
                }

                nav { class: "navbar__links",
                    div {
                        class: dropdown_class(tools_open),
                        onmouseenter: move |_| menus.write().pointer_enter(MenuId::Tools),
                        onmouseleave: move |_| menus.write().pointer_leave(MenuId::Tools),
                        button {
                            r#type: "button",
                            class: "navbar__trigger",
                            aria_expanded: "{tools_open}",
                            onclick: move |_| menus.write().activate(MenuId::Tools),
                            {t!(tr, "nav.tools")}
                            ToolIcon { icon: Icon::ChevronDown, size: 16 }
                        }
                        if tools_open {
                            MenuPanel {
                                categories: all_categories,
                                wide: true,
                                tr,
                                menus,
                                on_navigate,
                            }
                        }
                    }

                    div {
                        class: dropdown_class(convert_open),
                        onmouseenter: move |_| menus.write().pointer_enter(MenuId::Convert),
                        onmouseleave: move |_| menus.write().pointer_leave(MenuId::Convert),
                        button {
                            r#type: "button",
                            class: "navbar__trigger",
                            aria_expanded: "{convert_open}",
                            onclick: move |_| menus.write().activate(MenuId::Convert),
                            {t!(tr, "nav.convert")}
                            ToolIcon { icon: Icon::ChevronDown, size: 16 }
                        }
                        if convert_open {
                            MenuPanel {
                                categories: convert_categories,
                                wide: false,
                                tr,
                                menus,
                                on_navigate,
                            }
                        }
                    }

                    for tool_id in QUICK_TOOLS.iter().copied() {
                        button {
                            key: "{tool_id}",
                            r#type: "button",
                            class: "navbar__link",
                            onclick: move |_| menus.with_mut(|m| m.select_tool(tool_id, |view| on_navigate.call(view))),
                            {t!(tr, &quick_link_key(tool_id))}
                        }
                    }

                    a { class: "navbar__link", href: "#guides", {t!(tr, "nav.guides")} }

                    button {
                        r#type: "button",
                        class: "navbar__link",
                        onclick: move |_| {
                            menus.write().dismiss();
                            on_navigate.call(View::Pricing);
                        },
                        {t!(tr, "nav.pricing")}
                    }
                }

                div { class: "navbar__actions",
                    div {
                        class: "navbar__swatches",
                        role: "group",
                        aria_label: t!(tr, "nav.accent"),
                        for color in THEME_PRESETS.iter().copied() {
                            button {
                                key: "{color}",
                                r#type: "button",
                                class: swatch_class(color == accent),
                                style: "background: {color}",
                                aria_label: "{color}",
                                onclick: move |_| shell.write().set_theme_color(color),
                            }
                        }
                    }

                    button {
                        r#type: "button",
                        class: "navbar__locale",
                        aria_label: t!(tr, "nav.language"),
                        onclick: move |_| on_open_languages.call(()),
                        ToolIcon { icon: Icon::Globe, size: 18 }
                        span { "{language_name}" }
                    }

                    button {
                        r#type: "button",
                        class: "navbar__burger",
                        aria_expanded: "{mobile_open}",
                        aria_label: burger_label,
                        onclick: move |_| mobile.write().toggle(),
                        ToolIcon { icon: burger_icon }
                    }
                }
            }

            if mobile_open {
                MobilePanel { tr, mobile, on_navigate }
            }
        }
    }
}

fn swatch_class(active: bool) -> &'static str {
    if active {
        "navbar__swatch navbar__swatch--active"
    } else {
        "navbar__swatch"
    }
}

fn dropdown_class(open: bool) -> &'static str {
    if open {
        "navbar__dropdown navbar__dropdown--open"
    } else {
        "navbar__dropdown"
    }
}

#[component]
fn MenuPanel(
    categories: Vec<&'static ToolCategory>,
    wide: bool,
    tr: Translator,
    mut menus: Signal<MenuState>,
    on_navigate: EventHandler<View>,
) -> Element {
    let class = if wide {
        "mega-menu mega-menu--wide"
    } else {
        "mega-menu"
    };

    rsx! {
        div { class,
            for category in categories.iter().copied() {
                div { key: "{category.slug}", class: "mega-menu__column",
                    h4 { class: "mega-menu__heading", {t!(tr, &category.title_key(), category.title)} }
                    ul {
                        for tool in category.tools.iter() {
                            li { key: "{tool.id}",
                                button {
                                    r#type: "button",
                                    class: "mega-menu__item",
                                    onclick: move |_| menus.with_mut(|m| m.select_tool(tool.id, |view| on_navigate.call(view))),
                                    ToolIcon { icon: tool.icon, size: 18, color: tool.accent.unwrap_or("currentColor").to_string() }
                                    span { {t!(tr, &tool.title_key(), tool.title)} }
                                    if tool.is_new {
                                        span { class: "badge badge--new", {t!(tr, "tools.new-badge")} }
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

#[component]
fn MobilePanel(tr: Translator, mut mobile: Signal<MobileNav>, on_navigate: EventHandler<View>) -> Element {
    rsx! {
        div { class: "mobile-nav",
            for category in categories().iter() {
                details { key: "{category.slug}", class: "mobile-nav__group",
                    summary { {t!(tr, &category.title_key(), category.title)} }
                    for tool in category.tools.iter() {
                        button {
                            key: "{tool.id}",
                            r#type: "button",
                            class: "mobile-nav__item",
                            onclick: move |_| mobile.with_mut(|m| m.select_tool(tool.id, |view| on_navigate.call(view))),
                            ToolIcon { icon: tool.icon, size: 18 }
                            {t!(tr, &tool.title_key(), tool.title)}
                        }
                    }
                }
            }
            button {
                r#type: "button",
                class: "mobile-nav__item",
                onclick: move |_| mobile.with_mut(|m| m.select_view(View::Pricing, |view| on_navigate.call(view))),
                {t!(tr, "nav.pricing")}
            }
        }
    }
}

/// Used by the hero and footer for tool shortcuts outside the menus.
pub(crate) fn navigate_to_tool(on_navigate: EventHandler<View>, tool_id: &str) {
    on_navigate.call(resolve_tool(tool_id));
}
