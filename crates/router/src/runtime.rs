//! Runtime: pairs an [`App`] with a [`Host`] and serializes event handling.
//!
//! Every entry point takes `&mut self`, so one message is reduced and its
//! effects applied before the next can be delivered.

use finclub_types::{Effect, Msg};

use crate::app::App;
use crate::cmd::{Host, run_effects};

pub struct Runtime<H: Host> {
    app: App,
    host: H,
}

impl<H: Host> Runtime<H> {
    pub fn new(app: App, host: H) -> Self {
        Self { app, host }
    }

    /// Runs the startup pass and applies its effects.
    pub fn start(&mut self) -> Vec<Effect> {
        let effects = self.app.start();
        run_effects(&mut self.host, &effects);
        effects
    }

    /// Reduces `msg`, applies the resulting effects, and returns them.
    pub fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let effects = self.app.update(msg);
        run_effects(&mut self.host, &effects);
        effects
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
