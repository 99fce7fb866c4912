//! Transient UI state machines that live alongside routing.
//!
//! Each machine owns its own flag(s) and reports the DOM changes it needs as
//! [`Effect`](finclub_types::Effect)s. None of them reads or writes the
//! current route; the app closes the menu and dropdowns after navigation.

pub mod dropdown;
pub mod header;
pub mod menu;
pub mod modal;

pub use dropdown::DropdownState;
pub use header::HeaderState;
pub use menu::MenuState;
pub use modal::{ImageModal, ModalState};
