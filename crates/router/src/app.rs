//! Application state and the message reducer.
//!
//! [`App`] owns every piece of controller state: the navigator (and with it
//! the current route), the panel mirror, the history mirror and the UI state
//! machines. Hosts feed it [`Msg`]s one at a time; each call to
//! [`App::update`] runs to completion and returns the ordered [`Effect`]s the
//! host must apply before delivering the next message.

use anyhow::{Context, Result};
use finclub_types::{Effect, LayoutMode, Link, Msg, PageSnapshot, RouteId};
use finclub_util::SiteConfig;
use tracing::{debug, error, warn};

use crate::history::{HistorySync, LinkDisposition, classify_link};
use crate::navigator::{NavigationState, Navigator};
use crate::panels::PanelSet;
use crate::routes::RouteTable;
use crate::ui::{DropdownState, HeaderState, ImageModal, MenuState};

pub struct App {
    config: SiteConfig,
    navigator: Navigator,
    panels: PanelSet,
    history: HistorySync,
    /// `None` when the page lacks the menu toggle or nav container.
    menu: Option<MenuState>,
    dropdowns: DropdownState,
    /// `None` when the page lacks the modal or its image element.
    modal: Option<ImageModal>,
    /// `None` when the page has no site header.
    header: Option<HeaderState>,
    initial_scroll: f64,
    body_scroll_locked: bool,
    started: bool,
}

impl App {
    /// Builds the controller for the page described by `snapshot`.
    ///
    /// Subsystems whose elements are missing are left out; messages aimed at
    /// them become no-ops without affecting the others.
    pub fn new(table: RouteTable, config: SiteConfig, snapshot: PageSnapshot) -> Self {
        let mode = LayoutMode::from_viewport_width(snapshot.viewport_width, config.compact_max_width);
        debug!(?mode, width = snapshot.viewport_width, "layout mode selected");
        Self {
            navigator: Navigator::new(table),
            panels: PanelSet::new(snapshot.panels, &snapshot.active_panels),
            history: HistorySync::new(snapshot.fragment),
            menu: snapshot.has_menu.then(MenuState::default),
            dropdowns: DropdownState::new(mode, snapshot.dropdowns),
            modal: snapshot.has_modal.then(|| ImageModal::new(snapshot.has_modal_close)),
            header: snapshot.has_header.then(|| HeaderState::new(config.header_scroll_threshold)),
            initial_scroll: snapshot.scroll_y,
            body_scroll_locked: false,
            started: false,
            config,
        }
    }

    /// Builds the controller with the embedded route table and the user's
    /// site configuration.
    pub fn bootstrap(snapshot: PageSnapshot) -> Result<Self> {
        let table = RouteTable::builtin().context("failed to load the built-in route table")?;
        let config = SiteConfig::load().context("failed to load the site configuration")?;
        Ok(Self::new(table, config, snapshot))
    }

    pub fn navigation(&self) -> &NavigationState {
        self.navigator.state()
    }

    pub fn current_route(&self) -> &RouteId {
        self.navigator.current_route()
    }

    pub fn panels(&self) -> &PanelSet {
        &self.panels
    }

    pub fn history(&self) -> &HistorySync {
        &self.history
    }

    pub fn menu(&self) -> Option<&MenuState> {
        self.menu.as_ref()
    }

    pub fn dropdowns(&self) -> &DropdownState {
        &self.dropdowns
    }

    pub fn modal(&self) -> Option<&ImageModal> {
        self.modal.as_ref()
    }

    pub fn header(&self) -> Option<&HeaderState> {
        self.header.as_ref()
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.dropdowns.mode()
    }

    pub fn body_scroll_locked(&self) -> bool {
        self.body_scroll_locked
    }

    /// Startup pass: header marker, initial navigation, and a history replace
    /// when the address bar is not already canonical.
    pub fn start(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.started {
            warn!("controller already started");
            return effects;
        }
        self.started = true;

        if let Some(header) = self.header.as_mut() {
            header.on_scroll(self.initial_scroll, &mut effects);
        }

        let route = self.history.route();
        if self.navigate(&route, &mut effects) {
            self.history.settle_startup(self.navigator.state(), &mut effects);
        }
        effects
    }

    /// Applies one message and returns the effects to perform.
    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        let mut effects = Vec::new();
        match msg {
            Msg::HashChanged(fragment) | Msg::PopState(fragment) => {
                let route = self.history.observe(&fragment);
                self.navigate(&route, &mut effects);
            }
            Msg::LinkActivated(link) => self.on_link(link, &mut effects),
            Msg::DocumentClick { inside_dropdown } => {
                self.dropdowns.on_document_click(inside_dropdown, &mut effects);
            }
            Msg::MenuToggle => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.toggle(&mut effects);
                }
            }
            Msg::ImageActivated { container, src, alt } => {
                if let Some(modal) = self.modal.as_mut()
                    && self.config.is_gallery(&container)
                {
                    effects.push(Effect::PreventDefault);
                    modal.open(src, alt.as_deref(), &mut effects);
                }
            }
            Msg::ModalBackdrop | Msg::ModalClose => {
                if let Some(modal) = self.modal.as_mut() {
                    modal.close(&mut effects);
                }
            }
            Msg::KeyDown(key) => {
                if let Some(modal) = self.modal.as_mut() {
                    modal.on_key(&key, &mut effects);
                }
            }
            Msg::Scroll(offset) => {
                if let Some(header) = self.header.as_mut() {
                    header.on_scroll(offset, &mut effects);
                }
            }
        }
        self.sync_scroll_lock(&mut effects);
        effects
    }

    fn on_link(&mut self, link: Link, effects: &mut Vec<Effect>) {
        match classify_link(&link, self.layout_mode()) {
            LinkDisposition::PassThrough => {
                if link.in_nav {
                    self.close_menu(effects);
                }
            }
            LinkDisposition::DropdownToggle(index) => {
                effects.push(Effect::PreventDefault);
                effects.push(Effect::StopPropagation);
                if link.in_nav {
                    self.close_menu(effects);
                }
                self.dropdowns.toggle(index, effects);
            }
            LinkDisposition::Navigate(route) => {
                effects.push(Effect::PreventDefault);
                let shown = self.navigate(&route, effects);
                self.close_menu(effects);
                self.dropdowns.close_all(effects);
                if shown {
                    self.history.record_navigation(self.navigator.state(), effects);
                }
            }
        }
    }

    fn navigate(&mut self, route: &RouteId, effects: &mut Vec<Effect>) -> bool {
        match self.navigator.navigate(route, &mut self.panels, effects) {
            Ok(_) => true,
            Err(err) => {
                error!(error = %err, "navigation left no panel active");
                false
            }
        }
    }

    fn close_menu(&mut self, effects: &mut Vec<Effect>) {
        if let Some(menu) = self.menu.as_mut() {
            menu.close(effects);
        }
    }

    /// Background scroll stays suppressed while either overlay is open.
    fn sync_scroll_lock(&mut self, effects: &mut Vec<Effect>) {
        let menu_open = self.menu.as_ref().is_some_and(MenuState::is_open);
        let modal_open = self.modal.as_ref().is_some_and(ImageModal::is_open);
        let locked = menu_open || modal_open;
        if locked != self.body_scroll_locked {
            self.body_scroll_locked = locked;
            effects.push(Effect::SetBodyScrollLocked(locked));
        }
    }
}
