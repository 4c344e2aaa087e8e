//! Shared UI crate for Pagewise: the landing page, navigation shell, catalogs
//! and translations. Hosts (web/desktop) supply routing through `on_navigate`.

pub mod catalog;
pub mod core;
pub mod i18n;
pub mod views;

pub use crate::core::{menu, modal, nav, state};

pub mod components {
    pub mod footer;
    pub mod guides;
    pub mod hero;
    pub mod icon;
    pub mod language_modal;
    pub mod navbar;
    pub mod styles;
    pub mod tools_grid;

    pub use footer::Footer;
    pub use guides::Guides;
    pub use hero::Hero;
    pub use icon::{Icon, ToolIcon};
    pub use language_modal::LanguageModal;
    pub use navbar::Navbar;
    pub use styles::{ShellStyles, THEME_CSS_INLINE};
    pub use tools_grid::ToolsGrid;
}
