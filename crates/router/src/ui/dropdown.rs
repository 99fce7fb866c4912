use finclub_types::{Effect, LayoutMode};
use tracing::{debug, warn};

/// Open/closed flags for the navigation dropdowns.
///
/// The layout mode is fixed at construction. In compact mode at most one
/// dropdown is open; in wide mode the flags never change because visibility
/// is handled by hover/focus styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownState {
    mode: LayoutMode,
    open: Vec<bool>,
}

impl DropdownState {
    pub fn new(mode: LayoutMode, count: usize) -> Self {
        Self {
            mode,
            open: vec![false; count],
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open.iter().position(|open| *open)
    }

    /// Exclusive toggle: closes every other dropdown, then inverts `index`.
    /// Ignored outside compact mode.
    pub fn toggle(&mut self, index: usize, effects: &mut Vec<Effect>) {
        if !self.mode.is_compact() {
            return;
        }
        let Some(was_open) = self.open.get(index).copied() else {
            warn!(index, count = self.open.len(), "toggle for unknown dropdown");
            return;
        };
        self.close_all(effects);
        if !was_open {
            self.open[index] = true;
            effects.push(Effect::SetDropdownExpanded { index, expanded: true });
        }
        debug!(index, open = !was_open, "dropdown");
    }

    /// Closes every open dropdown.
    pub fn close_all(&mut self, effects: &mut Vec<Effect>) {
        for (index, open) in self.open.iter_mut().enumerate() {
            if *open {
                *open = false;
                effects.push(Effect::SetDropdownExpanded { index, expanded: false });
            }
        }
    }

    /// Document-level pointer activation: in compact mode, anything outside
    /// a dropdown closes them all.
    pub fn on_document_click(&mut self, inside_dropdown: bool, effects: &mut Vec<Effect>) {
        if self.mode.is_compact() && !inside_dropdown {
            self.close_all(effects);
        }
    }
}
