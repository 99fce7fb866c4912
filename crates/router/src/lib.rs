//! # Finance Club Site Controller
//!
//! Client-side navigation and UI state for the Finance Club single-page
//! site. The controller maps an address-bar fragment to one content panel,
//! keeps history and the document title in step with the visible panel, and
//! runs the mobile menu, navigation dropdowns and image lightbox without
//! letting them fight with routing.
//!
//! ## Architecture
//!
//! - [`routes`]: the route table and the fragment normalizer.
//! - [`navigator`]: the only writer of the current route and panel flags.
//! - [`history`]: address-bar and history synchronization.
//! - [`ui`]: menu, dropdown, modal and header state machines.
//! - [`app`]: the reducer tying them together (`Msg` in, `Effect`s out).
//! - [`cmd`] and [`runtime`]: the imperative shell that applies effects to a
//!   [`Host`].

pub mod app;
pub mod cmd;
pub mod history;
pub mod navigator;
pub mod panels;
pub mod routes;
pub mod runtime;
pub mod ui;

pub use app::App;
pub use cmd::{Host, run_effects};
pub use navigator::{NavigationError, NavigationState, Navigator};
pub use panels::PanelSet;
pub use routes::{RouteTable, RouteTableError, normalize};
pub use runtime::Runtime;
