use finclub_types::Effect;

/// Site header "scrolled" marker, driven purely by vertical offset.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderState {
    threshold: f64,
    scrolled: Option<bool>,
}

impl HeaderState {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, scrolled: None }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled.unwrap_or(false)
    }

    /// Emits the marker on the first call and whenever it flips.
    pub fn on_scroll(&mut self, offset: f64, effects: &mut Vec<Effect>) {
        let scrolled = offset > self.threshold;
        if self.scrolled != Some(scrolled) {
            self.scrolled = Some(scrolled);
            effects.push(Effect::SetHeaderScrolled(scrolled));
        }
    }
}
