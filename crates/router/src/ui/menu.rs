use finclub_types::Effect;
use tracing::debug;

/// Mobile navigation menu: open or closed.
///
/// The body scroll lock is not emitted here because the modal shares it;
/// the app derives it from both machines.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self, effects: &mut Vec<Effect>) {
        self.set(!self.open, effects);
    }

    /// Closes the menu. Idempotent: no effects when already closed.
    pub fn close(&mut self, effects: &mut Vec<Effect>) {
        if self.open {
            self.set(false, effects);
        }
    }

    fn set(&mut self, open: bool, effects: &mut Vec<Effect>) {
        debug!(open, "menu");
        self.open = open;
        effects.push(Effect::SetMenuExpanded(open));
    }
}
