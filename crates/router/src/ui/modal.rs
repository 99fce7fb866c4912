use finclub_types::{Effect, Key};
use tracing::debug;

/// Alt text used when the activated image has none.
pub const DEFAULT_ALT: &str = "Image";

/// Lightbox state. The image source is only retained while open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open { src: String, alt: String },
}

/// Image lightbox controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageModal {
    state: ModalState,
    has_close_control: bool,
}

impl ImageModal {
    pub fn new(has_close_control: bool) -> Self {
        Self {
            state: ModalState::Closed,
            has_close_control,
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    /// Shows `src`, replacing any image already displayed, and moves focus to
    /// the close control when the page has one.
    pub fn open(&mut self, src: impl Into<String>, alt: Option<&str>, effects: &mut Vec<Effect>) {
        let src = src.into();
        let alt = alt.filter(|alt| !alt.is_empty()).unwrap_or(DEFAULT_ALT).to_string();
        debug!(src = %src, "opening image modal");
        effects.push(Effect::ShowModal {
            src: src.clone(),
            alt: alt.clone(),
        });
        if self.has_close_control {
            effects.push(Effect::FocusModalClose);
        }
        self.state = ModalState::Open { src, alt };
    }

    /// Hides the modal and drops the captured source. No-op when closed.
    pub fn close(&mut self, effects: &mut Vec<Effect>) {
        if !self.is_open() {
            return;
        }
        debug!("closing image modal");
        self.state = ModalState::Closed;
        effects.push(Effect::HideModal);
    }

    /// Escape closes an open modal; every other key is ignored.
    pub fn on_key(&mut self, key: &Key, effects: &mut Vec<Effect>) {
        if *key == Key::Escape {
            self.close(effects);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_captures_source_and_focuses_close() {
        let mut modal = ImageModal::new(true);
        let mut effects = Vec::new();
        modal.open("a.jpg", Some("A"), &mut effects);

        assert_eq!(
            modal.state(),
            &ModalState::Open {
                src: "a.jpg".into(),
                alt: "A".into()
            }
        );
        assert_eq!(effects.last(), Some(&Effect::FocusModalClose));
    }

    #[test]
    fn missing_alt_uses_default() {
        let mut modal = ImageModal::new(false);
        let mut effects = Vec::new();
        modal.open("b.png", Some(""), &mut effects);
        assert_eq!(
            effects,
            vec![Effect::ShowModal {
                src: "b.png".into(),
                alt: DEFAULT_ALT.into()
            }]
        );
    }

    #[test]
    fn escape_closes_and_forgets_source() {
        let mut modal = ImageModal::new(true);
        let mut effects = Vec::new();
        modal.open("a.jpg", Some("A"), &mut effects);
        effects.clear();

        modal.on_key(&Key::Other("Enter".into()), &mut effects);
        assert!(modal.is_open());

        modal.on_key(&Key::Escape, &mut effects);
        assert_eq!(modal.state(), &ModalState::Closed);
        assert_eq!(effects, vec![Effect::HideModal]);
    }

    #[test]
    fn closing_twice_is_a_no_op() {
        let mut modal = ImageModal::new(true);
        let mut effects = Vec::new();
        modal.close(&mut effects);
        modal.on_key(&Key::Escape, &mut effects);
        assert!(effects.is_empty());
    }
}
