//! Abstraction over the tone synthesizer. Calls are fire-and-forget: the
//! core never waits on playback.
//! Implementations: NullAudio (headless), RecordingAudio (testing).

use crate::game::staff::StaffLine;

pub trait AudioSink {
    /// Sound the pitch of a staff position. `duration_secs` overrides the
    /// synthesizer's default tone length when present.
    fn play_note(&mut self, line: StaffLine, duration_secs: Option<f32>);

    /// The miss buzzer.
    fn play_error(&mut self);

    /// Flip the mute flag; returns the new state.
    fn toggle_mute(&mut self) -> bool;
}

/// Sink that discards everything.
#[derive(Debug, Default)]
pub struct NullAudio {
    muted: bool,
}

impl NullAudio {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioSink for NullAudio {
    fn play_note(&mut self, _line: StaffLine, _duration_secs: Option<f32>) {}

    fn play_error(&mut self) {}

    fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }
}

/// A call observed by [`RecordingAudio`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioCall {
    Note {
        line: StaffLine,
        duration_secs: Option<f32>,
    },
    Error,
}

/// Sink that records every call for assertions.
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub calls: Vec<AudioCall>,
    muted: bool,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn note_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, AudioCall::Note { .. }))
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.calls.iter().filter(|c| **c == AudioCall::Error).count()
    }
}

impl AudioSink for RecordingAudio {
    fn play_note(&mut self, line: StaffLine, duration_secs: Option<f32>) {
        self.calls.push(AudioCall::Note {
            line,
            duration_secs,
        });
    }

    fn play_error(&mut self) {
        self.calls.push(AudioCall::Error);
    }

    fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }
}
