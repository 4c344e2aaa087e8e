use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

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

/// Host side of the navigation contract: the shell hands us a `View`, we
/// decide which route shows it.
fn route_for(view: View) -> Route {
    match view {
        View::Home => Route::Home {},
        other => Route::Page {
            slug: other.slug().to_string(),
        },
    }
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("[logger] keeping existing subscriber ({err})");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One shell state for the whole app; every localized component reads it.
    use_shell_state_provider();

    rsx! {
        Router::<Route> {}
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
