#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::THEME_CSS_INLINE;
use ui::nav::View;
use ui::state::use_shell_state_provider;
use ui::views::{Landing, Placeholder};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:slug")]
    Page { slug: String },
}

fn route_for(view: View) -> Route {
    match view {
        View::Home => Route::Home {},
        other => Route::Page {
            slug: other.slug().to_string(),
        },
    }
}

#[cfg(feature = "desktop")]
fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("[logger] keeping existing subscriber ({err})");
    }
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Pagewise – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("[logger] keeping existing subscriber ({err})");
    }
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    use_shell_state_provider();

    rsx! {
        // Desktop builds always inline the shared theme (no external file dependency).
        document::Style { "{THEME_CSS_INLINE}" }
        Router::<Route> {}
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the ui crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

#[component]
fn Home() -> Element {
    let navigator = use_navigator();
    let on_navigate = move |view: View| {
        let _ = navigator.push(route_for(view));
    };

    rsx! {
        Landing { on_navigate }
    }
}

#[component]
fn Page(slug: String) -> Element {
    let navigator = use_navigator();
    let on_navigate = move |view: View| {
        let _ = navigator.push(route_for(view));
    };

    rsx! {
        Placeholder { view: View::from_slug(&slug), on_navigate }
    }
}
