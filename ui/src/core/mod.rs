//! Framework-light shell logic: shared state, navigation table and the
//! menu/modal state machines the components drive.

pub mod menu;
pub mod modal;
pub mod nav;
pub mod state;
