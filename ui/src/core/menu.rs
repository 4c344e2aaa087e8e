//! Navbar menu state machines.
//!
//! `MenuState` tracks the desktop dropdowns: each top-level entry is either
//! closed or open, and at most one is open. `MobileNav` is the independent
//! small-viewport panel.

use crate::core::nav::{resolve_tool, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuId {
    /// Mega-menu listing every category.
    Tools,
    /// Dropdown with the two conversion categories.
    Convert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: Option<MenuId>,
    /// The open menu was opened by the pointer and not clicked since.
    hover_opened: bool,
}

impl MenuState {
    pub fn is_open(&self, id: MenuId) -> bool {
        self.open == Some(id)
    }

    pub fn open_menu(&self) -> Option<MenuId> {
        self.open
    }

    /// Pointer entered the trigger. Opening one menu closes any other.
    pub fn pointer_enter(&mut self, id: MenuId) {
        if self.open != Some(id) {
            self.open = Some(id);
            self.hover_opened = true;
        }
    }

    /// Pointer left the trigger-plus-panel region.
    pub fn pointer_leave(&mut self, id: MenuId) {
        if self.open == Some(id) {
            self.dismiss();
        }
    }

    /// Click on a trigger. Touch screens fire `mouseenter` right before the
    /// click of the same tap, so the first click after a hover-open keeps the
    /// menu open; only a later click closes it.
    pub fn activate(&mut self, id: MenuId) {
        match self.open {
            Some(open) if open == id && self.hover_opened => self.hover_opened = false,
            Some(open) if open == id => self.dismiss(),
            _ => {
                self.open = Some(id);
                self.hover_opened = false;
            }
        }
    }

    /// Explicit toggle (keyboard, tests).
    pub fn toggle(&mut self, id: MenuId) {
        if self.open == Some(id) {
            self.dismiss();
        } else {
            self.open = Some(id);
            self.hover_opened = false;
        }
    }

    pub fn dismiss(&mut self) {
        self.open = None;
        self.hover_opened = false;
    }

    /// A tool inside a panel was activated: close, then dispatch exactly once.
    pub fn select_tool(&mut self, tool_id: &str, navigate: impl FnOnce(View)) {
        self.dismiss();
        navigate(resolve_tool(tool_id));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MobileNav {
    open: bool,
}

impl MobileNav {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn select_tool(&mut self, tool_id: &str, navigate: impl FnOnce(View)) {
        self.close();
        navigate(resolve_tool(tool_id));
    }

    /// Non-tool destinations (pricing, home) close the panel the same way.
    pub fn select_view(&mut self, view: View, navigate: impl FnOnce(View)) {
        self.close();
        navigate(view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_leave() {
        let mut menus = MenuState::default();
        menus.pointer_enter(MenuId::Tools);
        assert!(menus.is_open(MenuId::Tools));
        menus.pointer_leave(MenuId::Tools);
        assert_eq!(menus.open_menu(), None);
    }

    #[test]
    fn only_one_menu_open() {
        let mut menus = MenuState::default();
        menus.pointer_enter(MenuId::Tools);
        menus.pointer_enter(MenuId::Convert);
        assert!(!menus.is_open(MenuId::Tools));
        assert!(menus.is_open(MenuId::Convert));
        // a stale leave from the first trigger must not close the second
        menus.pointer_leave(MenuId::Tools);
        assert!(menus.is_open(MenuId::Convert));
    }

    #[test]
    fn toggle_flips() {
        let mut menus = MenuState::default();
        menus.toggle(MenuId::Tools);
        assert!(menus.is_open(MenuId::Tools));
        menus.toggle(MenuId::Tools);
        assert!(!menus.is_open(MenuId::Tools));
    }

    #[test]
    fn click_after_hover_keeps_menu_open() {
        let mut menus = MenuState::default();
        menus.pointer_enter(MenuId::Tools);
        menus.activate(MenuId::Tools);
        assert!(menus.is_open(MenuId::Tools));

        menus.activate(MenuId::Tools);
        assert!(!menus.is_open(MenuId::Tools));
    }

    #[test]
    fn click_without_hover_toggles() {
        let mut menus = MenuState::default();
        menus.activate(MenuId::Convert);
        assert!(menus.is_open(MenuId::Convert));
        menus.activate(MenuId::Convert);
        assert_eq!(menus.open_menu(), None);

        // re-entering the trigger of an already open menu is not a new hover-open
        menus.activate(MenuId::Tools);
        menus.pointer_enter(MenuId::Tools);
        menus.activate(MenuId::Tools);
        assert!(!menus.is_open(MenuId::Tools));
    }

    #[test]
    fn click_on_other_trigger_switches_menus() {
        let mut menus = MenuState::default();
        menus.pointer_enter(MenuId::Tools);
        menus.activate(MenuId::Convert);
        assert!(menus.is_open(MenuId::Convert));
        assert!(!menus.is_open(MenuId::Tools));
    }

    #[test]
    fn selecting_a_tool_closes_and_navigates_once() {
        let mut menus = MenuState::default();
        menus.pointer_enter(MenuId::Tools);
        let mut dispatched = Vec::new();
        menus.select_tool("split-2", |view| dispatched.push(view));
        assert_eq!(dispatched, vec![View::Split]);
        assert_eq!(menus.open_menu(), None);
    }

    #[test]
    fn mobile_panel_is_independent() {
        let mut menus = MenuState::default();
        let mut mobile = MobileNav::default();
        menus.pointer_enter(MenuId::Convert);
        mobile.toggle();
        assert!(mobile.is_open());
        assert!(menus.is_open(MenuId::Convert));

        let mut hits = 0;
        mobile.select_tool("ocr", |view| {
            assert_eq!(view, View::Ocr);
            hits += 1;
        });
        assert_eq!(hits, 1);
        assert!(!mobile.is_open());
    }
}
