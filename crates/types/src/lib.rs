//! Shared value types for the Finance Club site controller.
//!
//! Everything in this crate crosses the boundary between the host page and
//! the routing core: identifiers, the startup snapshot, inbound [`Msg`]s and
//! outbound [`Effect`]s. All of it is serde serializable so a host bridge can
//! exchange it as JSON.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between the segments of a nested route (`about/club`).
pub const ROUTE_SEPARATOR: char = '/';

/// Leading delimiter of an address-bar fragment (`#about/club`).
pub const FRAGMENT_DELIMITER: char = '#';

/// Canonical identifier selecting which content panel is shown.
///
/// Canonical routes are either flat (`contacts`) or nested one level
/// (`olympiad/stages`). A `RouteId` built from user input is not necessarily
/// present in the route table; lookups decide that.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(String);

impl RouteId {
    /// Route every lookup falls back to.
    pub const HOME: &'static str = "home";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn home() -> Self {
        Self(Self::HOME.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_home(&self) -> bool {
        self.0 == Self::HOME
    }

    /// Iterates the slash-delimited segments of the route.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(ROUTE_SEPARATOR)
    }

    /// Returns true for two-level routes such as `about/team`.
    pub fn is_nested(&self) -> bool {
        self.0.contains(ROUTE_SEPARATOR)
    }

    /// Address-bar form of the route, including the leading delimiter.
    pub fn to_fragment(&self) -> String {
        format!("{FRAGMENT_DELIMITER}{}", self.0)
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RouteId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RouteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for RouteId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RouteId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identity of a content panel in the host page (`page-about-club`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(String);

impl PanelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PanelId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Borrow<str> for PanelId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Dropdown interaction behavior, chosen once from the viewport width at
/// startup and never re-evaluated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Narrow viewports: toggles open dropdowns exclusively.
    Compact,
    /// Wide viewports: visibility is presentational, toggles navigate.
    #[default]
    Wide,
}

impl LayoutMode {
    /// Compact when `viewport_width <= compact_max_width`, matching a
    /// `(max-width: N)` media query.
    pub fn from_viewport_width(viewport_width: u32, compact_max_width: u32) -> Self {
        if viewport_width <= compact_max_width {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }

    pub fn is_compact(self) -> bool {
        matches!(self, LayoutMode::Compact)
    }
}

/// Keyboard key delivered by the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Escape,
    Other(String),
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            other => Key::Other(other.to_string()),
        }
    }
}

/// An activated anchor, as seen by the click handler.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Raw `href` attribute.
    #[serde(default)]
    pub href: Option<String>,
    /// Explicit `data-route` attribute; wins over `href` when present.
    #[serde(default)]
    pub route: Option<String>,
    /// Raw `target` attribute.
    #[serde(default)]
    pub target: Option<String>,
    /// Whether the anchor lives inside the navigation container.
    #[serde(default)]
    pub in_nav: bool,
    /// Index of the dropdown whose toggle this anchor is, if any.
    #[serde(default)]
    pub dropdown_toggle: Option<usize>,
}

impl Link {
    /// Builds an in-content link pointing at `href`.
    pub fn to(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::default()
        }
    }

    pub fn in_nav(mut self) -> Self {
        self.in_nav = true;
        self
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn as_dropdown_toggle(mut self, index: usize) -> Self {
        self.dropdown_toggle = Some(index);
        self.in_nav = true;
        self
    }

    /// True when the link explicitly asks for a new browsing context.
    pub fn opens_new_context(&self) -> bool {
        self.target.as_deref() == Some("_blank")
    }

    /// The href when it is an in-page fragment link.
    pub fn fragment_href(&self) -> Option<&str> {
        self.href.as_deref().filter(|href| href.starts_with(FRAGMENT_DELIMITER))
    }
}

/// Description of the host page at startup.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// Literal `location.hash`, including the delimiter when present.
    #[serde(default)]
    pub fragment: String,
    #[serde(default)]
    pub viewport_width: u32,
    #[serde(default)]
    pub scroll_y: f64,
    /// Panel identities present in the content tree.
    #[serde(default)]
    pub panels: Vec<PanelId>,
    /// Panels the initial markup already marks active.
    #[serde(default)]
    pub active_panels: Vec<PanelId>,
    /// Number of dropdown containers in the navigation.
    #[serde(default)]
    pub dropdowns: usize,
    /// Menu toggle control and navigation container both present.
    #[serde(default)]
    pub has_menu: bool,
    /// Modal container and its image element both present.
    #[serde(default)]
    pub has_modal: bool,
    #[serde(default)]
    pub has_modal_close: bool,
    #[serde(default)]
    pub has_header: bool,
}

/// Triggering input events delivered by the host, one at a time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Msg {
    /// The address-bar fragment was edited.
    HashChanged(String),
    /// Back/forward traversal landed on an entry with this fragment.
    PopState(String),
    /// An anchor was activated.
    LinkActivated(Link),
    /// Any pointer activation on the document.
    DocumentClick { inside_dropdown: bool },
    /// The menu toggle control was activated.
    MenuToggle,
    /// An image was activated inside an element with class `container`.
    ImageActivated {
        container: String,
        src: String,
        #[serde(default)]
        alt: Option<String>,
    },
    ModalBackdrop,
    ModalClose,
    KeyDown(Key),
    /// The window scrolled to this vertical offset.
    Scroll(f64),
}

/// Side effects the host applies, in order, after each `Msg`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// Suppress the browser's default handling of the triggering event.
    PreventDefault,
    /// Stop the triggering event from reaching document-level handlers.
    StopPropagation,
    SetPanelActive { panel: PanelId, active: bool },
    ScrollToOrigin,
    SetTitle(String),
    PushHistory(RouteId),
    ReplaceHistory(RouteId),
    /// Toggle expanded marker on the menu control and open marker on the nav.
    SetMenuExpanded(bool),
    SetBodyScrollLocked(bool),
    SetDropdownExpanded { index: usize, expanded: bool },
    ShowModal { src: String, alt: String },
    /// Hide the modal and clear its image source.
    HideModal,
    FocusModalClose,
    SetHeaderScrolled(bool),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_helpers_describe_shape() {
        let nested = RouteId::new("about/club");
        assert!(nested.is_nested());
        assert_eq!(nested.segments().collect::<Vec<_>>(), vec!["about", "club"]);
        assert_eq!(nested.to_fragment(), "#about/club");

        let flat = RouteId::home();
        assert!(flat.is_home());
        assert!(!flat.is_nested());
    }

    #[test]
    fn layout_mode_boundary_is_inclusive() {
        assert_eq!(LayoutMode::from_viewport_width(700, 700), LayoutMode::Compact);
        assert_eq!(LayoutMode::from_viewport_width(701, 700), LayoutMode::Wide);
        assert_eq!(LayoutMode::from_viewport_width(320, 700), LayoutMode::Compact);
    }

    #[test]
    fn link_classification() {
        assert_eq!(Link::to("#club").fragment_href(), Some("#club"));
        assert_eq!(Link::to("https://example.com").fragment_href(), None);
        assert!(Link::to("#club").with_target("_blank").opens_new_context());
        assert!(!Link::to("#club").with_target("_self").opens_new_context());
    }

    #[test]
    fn msg_decodes_from_host_json() {
        let json = r##"{"link_activated":{"href":"#team","in_nav":true}}"##;
        let msg: Msg = serde_json::from_str(json).expect("decode Msg");
        assert_eq!(msg, Msg::LinkActivated(Link::to("#team").in_nav()));

        let key: Msg = serde_json::from_str(r#"{"key_down":"escape"}"#).expect("decode key");
        assert_eq!(key, Msg::KeyDown(Key::Escape));
    }

    #[test]
    fn effect_encodes_route_as_plain_string() {
        let effect = Effect::PushHistory(RouteId::new("olympiad/awards"));
        let json = serde_json::to_string(&effect).expect("encode Effect");
        assert_eq!(json, r#"{"push_history":"olympiad/awards"}"#);
    }
}
