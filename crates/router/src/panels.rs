//! Mirror of the host's content panels and their active markers.

use finclub_types::PanelId;
use indexmap::IndexMap;

/// Content panels known to the controller, in document order.
///
/// Only the navigator changes activity flags; everything else reads them.
#[derive(Debug, Clone, Default)]
pub struct PanelSet {
    panels: IndexMap<PanelId, bool>,
}

impl PanelSet {
    /// Builds the set from the panels present in the page, marking those the
    /// initial markup already shows as active.
    pub fn new(panels: impl IntoIterator<Item = PanelId>, active: &[PanelId]) -> Self {
        let panels = panels
            .into_iter()
            .map(|panel| {
                let is_active = active.contains(&panel);
                (panel, is_active)
            })
            .collect();
        Self { panels }
    }

    pub fn contains(&self, panel: &str) -> bool {
        self.panels.contains_key(panel)
    }

    pub fn is_active(&self, panel: &str) -> bool {
        self.panels.get(panel).copied().unwrap_or(false)
    }

    pub fn active_count(&self) -> usize {
        self.panels.values().filter(|active| **active).count()
    }

    /// The active panel, when exactly one is active.
    pub fn active_panel(&self) -> Option<&PanelId> {
        let mut active = self.panels.iter().filter(|(_, active)| **active).map(|(panel, _)| panel);
        match (active.next(), active.next()) {
            (Some(panel), None) => Some(panel),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Clears every active flag, returning the panels that were active.
    pub(crate) fn deactivate_all(&mut self) -> Vec<PanelId> {
        self.panels
            .iter_mut()
            .filter(|(_, active)| **active)
            .map(|(panel, active)| {
                *active = false;
                panel.clone()
            })
            .collect()
    }

    /// Marks `panel` active. Returns false when the page has no such panel.
    pub(crate) fn activate(&mut self, panel: &PanelId) -> bool {
        match self.panels.get_mut(panel) {
            Some(active) => {
                *active = true;
                true
            }
            None => false,
        }
    }
}
