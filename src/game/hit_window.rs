//! Rhythmic note values and the hit window derived from them.

use serde::{Deserialize, Serialize};

/// Default tempo in beats per minute.
pub const DEFAULT_BPM: f32 = 90.0;

/// Speed the window geometry is anchored to, in px/s. Deliberately
/// decoupled from the difficulty-scaled obstacle speed: difficulty changes
/// how fast notes traverse the window, never how wide it is.
pub const REFERENCE_SCROLL_SPEED: f32 = 150.0;

/// Left edge of the window: the right edge of the clef region.
pub const HIT_WINDOW_START: f32 = 140.0;

/// The rhythmic duration the player has selected for their notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteValue {
    Whole,
    Half,
    #[default]
    Quarter,
    Eighth,
    Sixteenth,
}

impl NoteValue {
    pub fn all() -> &'static [NoteValue] {
        &[
            NoteValue::Whole,
            NoteValue::Half,
            NoteValue::Quarter,
            NoteValue::Eighth,
            NoteValue::Sixteenth,
        ]
    }

    /// Length in beats.
    pub fn beats(self) -> f32 {
        match self {
            NoteValue::Whole => 4.0,
            NoteValue::Half => 2.0,
            NoteValue::Quarter => 1.0,
            NoteValue::Eighth => 0.5,
            NoteValue::Sixteenth => 0.25,
        }
    }

    /// Length in seconds at the given tempo.
    pub fn duration_secs(self, bpm: f32) -> f32 {
        self.beats() * 60.0 / bpm
    }

    /// Lenient name lookup. Unknown names fall back to a quarter note.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "whole" => NoteValue::Whole,
            "half" => NoteValue::Half,
            "quarter" => NoteValue::Quarter,
            "eighth" => NoteValue::Eighth,
            "sixteenth" => NoteValue::Sixteenth,
            _ => NoteValue::Quarter,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NoteValue::Whole => "whole",
            NoteValue::Half => "half",
            NoteValue::Quarter => "quarter",
            NoteValue::Eighth => "eighth",
            NoteValue::Sixteenth => "sixteenth",
        }
    }
}

/// The horizontal interval `[start, end)` an obstacle center must occupy
/// for an active key press to count. Recomputed every frame from the
/// selected note value; never stored across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitWindow {
    pub start: f32,
    pub end: f32,
}

impl HitWindow {
    /// Window for the given note value and tempo.
    pub fn for_value(value: NoteValue, bpm: f32) -> Self {
        let width = value.duration_secs(bpm) * REFERENCE_SCROLL_SPEED;
        Self {
            start: HIT_WINDOW_START,
            end: HIT_WINDOW_START + width,
        }
    }

    pub fn width(&self) -> f32 {
        self.end - self.start
    }

    /// Half-open membership test on an obstacle center.
    pub fn contains(&self, x: f32) -> bool {
        x >= self.start && x < self.end
    }
}
