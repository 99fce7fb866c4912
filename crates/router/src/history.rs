//! Keeps the address-bar fragment and the current route in agreement.
//!
//! Inbound changes (fragment edits, back/forward) are observed and turned
//! into routes without touching history. Outbound link activations and the
//! startup pass write history: a push for links, a replace at startup.

use finclub_types::{Effect, LayoutMode, Link, RouteId};
use tracing::debug;

use crate::navigator::NavigationState;
use crate::routes::normalize;

/// How a link activation is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkDisposition {
    /// Left to the browser's default behavior.
    PassThrough,
    /// Compact-mode dropdown toggle; the dropdown machine owns it.
    DropdownToggle(usize),
    /// Intercepted and routed in-page.
    Navigate(RouteId),
}

/// Classifies an activated link.
///
/// Compact-mode toggles go to the dropdown machine whatever their href. Of
/// the rest, only fragment links without an explicit new-context target are
/// intercepted; `data-route` wins over the href, and both are normalized.
pub fn classify_link(link: &Link, mode: LayoutMode) -> LinkDisposition {
    if let Some(index) = link.dropdown_toggle
        && mode.is_compact()
    {
        return LinkDisposition::DropdownToggle(index);
    }
    let Some(href) = link.fragment_href() else {
        return LinkDisposition::PassThrough;
    };
    if link.opens_new_context() {
        return LinkDisposition::PassThrough;
    }
    let target = link.route.as_deref().filter(|route| !route.is_empty()).unwrap_or(href);
    LinkDisposition::Navigate(normalize(target))
}

/// Mirror of the address-bar fragment as last observed or written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistorySync {
    address: String,
}

impl HistorySync {
    pub fn new(initial_fragment: impl Into<String>) -> Self {
        Self {
            address: initial_fragment.into(),
        }
    }

    /// Literal fragment currently believed to be in the address bar.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Route implied by the current address.
    pub fn route(&self) -> RouteId {
        normalize(&self.address)
    }

    /// Records an externally driven fragment change and returns its route.
    pub fn observe(&mut self, fragment: &str) -> RouteId {
        self.address = fragment.to_string();
        normalize(fragment)
    }

    /// Startup: replaces the current entry when the bar disagrees with the
    /// settled route, so no spurious back target is created.
    pub fn settle_startup(&mut self, state: &NavigationState, effects: &mut Vec<Effect>) {
        if self.sync(state) {
            debug!(fragment = %self.address, "replacing initial history entry");
            effects.push(Effect::ReplaceHistory(state.current_route().clone()));
        }
    }

    /// Outbound: pushes an entry for the settled route unless the bar
    /// already shows it.
    pub fn record_navigation(&mut self, state: &NavigationState, effects: &mut Vec<Effect>) {
        if self.sync(state) {
            debug!(fragment = %self.address, "pushing history entry");
            effects.push(Effect::PushHistory(state.current_route().clone()));
        }
    }

    fn sync(&mut self, state: &NavigationState) -> bool {
        let wanted = state.current_route().to_fragment();
        if self.address == wanted {
            return false;
        }
        self.address = wanted;
        true
    }
}
