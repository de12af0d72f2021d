//! Terminal stand-in for the animal sound effects.

use crate::core::AudioCue;
use crate::types::Species;

/// [`AudioCue`] that rings the terminal bell and keeps a caption of the last
/// call for the status panel.
///
/// `play` only records; the main loop drains the bell with [`take_bell`]
/// and writes it through the renderer.
///
/// [`take_bell`]: TerminalCue::take_bell
#[derive(Debug, Clone, Default)]
pub struct TerminalCue {
    last: Option<Species>,
    bell_pending: bool,
    muted: bool,
}

impl TerminalCue {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cue that keeps captions but never rings the bell.
    pub fn muted() -> Self {
        Self {
            muted: true,
            ..Self::default()
        }
    }

    /// Caption of the last call, e.g. `"baa!"`.
    pub fn caption(&self) -> Option<&'static str> {
        self.last.map(|s| s.call())
    }

    /// Returns whether a bell is due, clearing it.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }

    pub fn clear_caption(&mut self) {
        self.last = None;
    }
}

impl AudioCue for TerminalCue {
    fn play(&mut self, species: Species) {
        self.last = Some(species);
        self.bell_pending = !self.muted;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_records_caption_and_bell() {
        let mut cue = TerminalCue::new();
        assert_eq!(cue.caption(), None);

        cue.play(Species::Ostrich);
        assert_eq!(cue.caption(), Some("boom!"));
        assert!(cue.take_bell());
        assert!(!cue.take_bell());

        cue.play(Species::Sheep);
        assert_eq!(cue.caption(), Some("baa!"));
        assert!(cue.take_bell());
    }

    #[test]
    fn muted_cue_never_rings() {
        let mut cue = TerminalCue::muted();
        cue.play(Species::Sheep);
        assert_eq!(cue.caption(), Some("baa!"));
        assert!(!cue.take_bell());
    }
}
