//! Navigator: the single writer of the current route.
//!
//! `NavigationState` has no public mutators. The only code path that changes
//! the current route, or the panel activity flags, is [`Navigator::navigate`].

use finclub_types::{Effect, PanelId, RouteId};
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::panels::PanelSet;
use crate::routes::RouteTable;

/// Failures surfaced by a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The route table names a panel the page does not contain.
    #[error("panel `{panel}` for route `{route}` is missing from the page")]
    PanelMissing { route: RouteId, panel: PanelId },
}

/// What is currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current_route: RouteId,
}

impl NavigationState {
    pub fn current_route(&self) -> &RouteId {
        &self.current_route
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_route: RouteId::home(),
        }
    }
}

/// Resolves routes against the table and swaps the visible panel.
#[derive(Debug, Clone)]
pub struct Navigator {
    table: RouteTable,
    state: NavigationState,
}

impl Navigator {
    pub fn new(table: RouteTable) -> Self {
        Self {
            table,
            state: NavigationState::default(),
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_route(&self) -> &RouteId {
        self.state.current_route()
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Shows the panel for `route`, falling back to `home` when the route is
    /// not in the table.
    ///
    /// Effects are appended in the order the host must apply them: panel
    /// deactivations, the activation, then scroll and title. When the
    /// resolved panel is missing from `panels` nothing is activated, the
    /// current route is left untouched and the error is returned.
    pub fn navigate(&mut self, route: &RouteId, panels: &mut PanelSet, effects: &mut Vec<Effect>) -> Result<RouteId, NavigationError> {
        let (resolved, entry) = match self.table.get(route.as_str()) {
            Some(entry) => (route.clone(), entry),
            None => {
                warn!(route = %route, "unknown route; falling back to home");
                (RouteId::home(), self.table.home())
            }
        };

        for panel in panels.deactivate_all() {
            effects.push(Effect::SetPanelActive { panel, active: false });
        }

        if !panels.activate(&entry.panel) {
            error!(route = %resolved, panel = %entry.panel, "route table names a panel missing from the page");
            return Err(NavigationError::PanelMissing {
                route: resolved,
                panel: entry.panel.clone(),
            });
        }
        effects.push(Effect::SetPanelActive {
            panel: entry.panel.clone(),
            active: true,
        });

        debug!(from = %self.state.current_route, to = %resolved, "navigated");
        self.state.current_route = resolved.clone();
        effects.push(Effect::ScrollToOrigin);
        effects.push(Effect::SetTitle(self.table.title_or_home(resolved.as_str()).to_string()));
        Ok(resolved)
    }
}
