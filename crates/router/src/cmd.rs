//! # Effect Execution Layer
//!
//! This module is the boundary where the pure controller state meets the
//! page. [`App::update`](crate::app::App::update) only describes what should
//! happen as [`Effect`]s; [`run_effects`] performs them through a [`Host`]
//! implementation, in order.
//!
//! A browser host maps each method onto the DOM (class lists, `aria-*`
//! attributes, `history.pushState`, `document.title`, ...). Tests use an
//! in-memory host.

use finclub_types::{Effect, PanelId, RouteId};
use tracing::trace;

/// The page environment the controller drives.
pub trait Host {
    /// Suppress the default action of the event being handled.
    fn prevent_default(&mut self);
    /// Keep the event being handled from reaching document-level listeners.
    fn stop_propagation(&mut self);
    fn set_panel_active(&mut self, panel: &PanelId, active: bool);
    fn scroll_to_origin(&mut self);
    fn set_title(&mut self, title: &str);
    /// Add a history entry whose fragment is `#<route>`.
    fn push_history(&mut self, route: &RouteId);
    /// Rewrite the current history entry to `#<route>`.
    fn replace_history(&mut self, route: &RouteId);
    fn set_menu_expanded(&mut self, expanded: bool);
    fn set_body_scroll_locked(&mut self, locked: bool);
    fn set_dropdown_expanded(&mut self, index: usize, expanded: bool);
    fn show_modal(&mut self, src: &str, alt: &str);
    /// Hide the modal and clear its image source.
    fn hide_modal(&mut self);
    fn focus_modal_close(&mut self);
    fn set_header_scrolled(&mut self, scrolled: bool);
}

/// Applies `effects` to `host` in order.
pub fn run_effects<H: Host + ?Sized>(host: &mut H, effects: &[Effect]) {
    for effect in effects {
        trace!(?effect, "applying effect");
        match effect {
            Effect::PreventDefault => host.prevent_default(),
            Effect::StopPropagation => host.stop_propagation(),
            Effect::SetPanelActive { panel, active } => host.set_panel_active(panel, *active),
            Effect::ScrollToOrigin => host.scroll_to_origin(),
            Effect::SetTitle(title) => host.set_title(title),
            Effect::PushHistory(route) => host.push_history(route),
            Effect::ReplaceHistory(route) => host.replace_history(route),
            Effect::SetMenuExpanded(expanded) => host.set_menu_expanded(*expanded),
            Effect::SetBodyScrollLocked(locked) => host.set_body_scroll_locked(*locked),
            Effect::SetDropdownExpanded { index, expanded } => host.set_dropdown_expanded(*index, *expanded),
            Effect::ShowModal { src, alt } => host.show_modal(src, alt),
            Effect::HideModal => host.hide_modal(),
            Effect::FocusModalClose => host.focus_modal_close(),
            Effect::SetHeaderScrolled(scrolled) => host.set_header_scrolled(*scrolled),
        }
    }
}
