#![allow(dead_code)]

use std::collections::BTreeMap;

use finclub_router::{App, Host, RouteTable, Runtime};
use finclub_types::{Msg, PageSnapshot, PanelId, RouteId};
use finclub_util::SiteConfig;

/// In-memory page: panels, title, overlays, and a browser history stack.
#[derive(Debug, Default)]
pub struct MemoryHost {
    pub panels: BTreeMap<String, bool>,
    pub title: String,
    pub scroll_y: f64,
    pub entries: Vec<String>,
    pub index: usize,
    pub pushes: usize,
    pub replaces: usize,
    pub menu_expanded: bool,
    pub body_locked: bool,
    pub dropdowns: Vec<bool>,
    pub modal_visible: bool,
    pub modal_src: String,
    pub modal_alt: String,
    pub close_focused: bool,
    pub header_scrolled: bool,
    pub default_prevented: bool,
    pub propagation_stopped: bool,
}

impl MemoryHost {
    pub fn new(fragment: &str, panels: &[PanelId], dropdowns: usize) -> Self {
        Self {
            panels: panels.iter().map(|panel| (panel.to_string(), false)).collect(),
            entries: vec![fragment.to_string()],
            dropdowns: vec![false; dropdowns],
            ..Self::default()
        }
    }

    pub fn location(&self) -> &str {
        &self.entries[self.index]
    }

    pub fn active_panels(&self) -> Vec<&str> {
        self.panels.iter().filter(|(_, active)| **active).map(|(panel, _)| panel.as_str()).collect()
    }

    /// Traverses one entry back, returning the fragment a popstate carries.
    pub fn back(&mut self) -> Option<String> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.location().to_string())
    }

    pub fn forward(&mut self) -> Option<String> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        Some(self.location().to_string())
    }

    /// Simulates typing a fragment into the address bar.
    pub fn edit_fragment(&mut self, fragment: &str) -> String {
        self.entries.truncate(self.index + 1);
        self.entries.push(fragment.to_string());
        self.index += 1;
        fragment.to_string()
    }

    pub fn reset_event_flags(&mut self) {
        self.default_prevented = false;
        self.propagation_stopped = false;
    }
}

impl Host for MemoryHost {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    fn set_panel_active(&mut self, panel: &PanelId, active: bool) {
        if let Some(flag) = self.panels.get_mut(panel.as_str()) {
            *flag = active;
        }
    }

    fn scroll_to_origin(&mut self) {
        self.scroll_y = 0.0;
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn push_history(&mut self, route: &RouteId) {
        self.entries.truncate(self.index + 1);
        self.entries.push(route.to_fragment());
        self.index += 1;
        self.pushes += 1;
    }

    fn replace_history(&mut self, route: &RouteId) {
        self.entries[self.index] = route.to_fragment();
        self.replaces += 1;
    }

    fn set_menu_expanded(&mut self, expanded: bool) {
        self.menu_expanded = expanded;
    }

    fn set_body_scroll_locked(&mut self, locked: bool) {
        self.body_locked = locked;
    }

    fn set_dropdown_expanded(&mut self, index: usize, expanded: bool) {
        if let Some(flag) = self.dropdowns.get_mut(index) {
            *flag = expanded;
        }
    }

    fn show_modal(&mut self, src: &str, alt: &str) {
        self.modal_visible = true;
        self.modal_src = src.to_string();
        self.modal_alt = alt.to_string();
    }

    fn hide_modal(&mut self) {
        self.modal_visible = false;
        self.modal_src.clear();
        self.close_focused = false;
    }

    fn focus_modal_close(&mut self) {
        self.close_focused = true;
    }

    fn set_header_scrolled(&mut self, scrolled: bool) {
        self.header_scrolled = scrolled;
    }
}

pub fn site_panels() -> Vec<PanelId> {
    RouteTable::builtin()
        .expect("builtin table")
        .routes()
        .map(|(_, entry)| entry.panel.clone())
        .collect()
}

pub fn site_snapshot(fragment: &str, viewport_width: u32) -> PageSnapshot {
    PageSnapshot {
        fragment: fragment.to_string(),
        viewport_width,
        scroll_y: 0.0,
        panels: site_panels(),
        active_panels: Vec::new(),
        dropdowns: 2,
        has_menu: true,
        has_modal: true,
        has_modal_close: true,
        has_header: true,
    }
}

/// Boots a runtime for `snapshot` and runs the startup pass.
pub fn boot_with(snapshot: PageSnapshot) -> Runtime<MemoryHost> {
    let host = MemoryHost::new(&snapshot.fragment, &snapshot.panels, snapshot.dropdowns);
    let app = App::new(RouteTable::builtin().expect("builtin table"), SiteConfig::default(), snapshot);
    let mut runtime = Runtime::new(app, host);
    runtime.start();
    runtime
}

pub fn boot(fragment: &str, viewport_width: u32) -> Runtime<MemoryHost> {
    boot_with(site_snapshot(fragment, viewport_width))
}

/// Delivers `msg` as a fresh event.
pub fn send(runtime: &mut Runtime<MemoryHost>, msg: Msg) {
    runtime.host_mut().reset_event_flags();
    runtime.dispatch(msg);
}

/// Asserts the settled invariant: the bar shows the current route and only
/// its panel is active.
pub fn assert_settled(runtime: &Runtime<MemoryHost>) {
    let app = runtime.app();
    let host = runtime.host();
    let route = app.current_route();
    assert_eq!(host.location(), route.to_fragment(), "address bar diverged from current route");
    let table = RouteTable::builtin().expect("builtin table");
    let panel = &table.get(route.as_str()).expect("current route is in the table").panel;
    assert_eq!(host.active_panels(), vec![panel.as_str()], "unexpected active panels");
    assert_eq!(app.panels().active_panel(), Some(panel));
}
