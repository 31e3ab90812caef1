//! Semantic input events. The core has no knowledge of physical keys or
//! UI widgets; the host translates raw input into these facts and feeds
//! them in between frame steps.

use crate::game::hit_window::NoteValue;
use crate::game::staff::Letter;

/// An edge-triggered input fact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A pitch letter went down. Repeated key-down while held is filtered
    /// by the core's held-key tracking, so hosts may forward auto-repeat.
    NoteKeyDown(Letter),
    NoteKeyUp(Letter),
    /// Start trigger from the title affordance.
    Start,
    /// Restart trigger from the game-over affordance.
    Restart,
    NoteDurationSelected(NoteValue),
    MuteToggled,
}

impl InputEvent {
    /// Convenience for keyboard hosts: map a character key transition to
    /// an event. Unmapped characters yield `None` and are ignored.
    pub fn from_key_char(c: char, pressed: bool) -> Option<Self> {
        let letter = Letter::from_char(c)?;
        Some(if pressed {
            InputEvent::NoteKeyDown(letter)
        } else {
            InputEvent::NoteKeyUp(letter)
        })
    }
}
