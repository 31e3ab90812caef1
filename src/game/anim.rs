//! Transient animation state machines.
//!
//! Every animation is a plain `{active, progress, duration}` value; visual
//! quantities (alpha, scale, rotation, shake) are pure functions of that
//! value and are defined even while inactive, where they return identity.

use super::staff::StaffLine;

/// Seconds for a hit obstacle to fade out.
pub const FADE_DURATION: f32 = 0.4;
/// Seconds of the player bounce after a hit.
pub const BOUNCE_DURATION: f32 = 0.3;
/// Seconds of the hit-zone color flash.
pub const FLASH_DURATION: f32 = 0.25;
/// Seconds the floating note name stays visible.
pub const NOTE_NAME_DURATION: f32 = 0.8;

/// A one-shot timer advancing progress from 0 to 1 over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimTimer {
    active: bool,
    progress: f32,
    duration: f32,
}

impl AnimTimer {
    pub const fn new(duration: f32) -> Self {
        Self {
            active: false,
            progress: 0.0,
            duration,
        }
    }

    /// Activate and rewind. Restarting a running timer rewinds it; the
    /// operation is idempotent in its post-state.
    pub fn start(&mut self) {
        self.active = true;
        self.progress = 0.0;
    }

    /// Advance by a frame delta. Clamps at 1 and deactivates.
    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.progress += dt / self.duration;
        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.active = false;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// True once the timer has run to completion (and was ever started).
    pub fn is_finished(&self) -> bool {
        !self.active && self.progress >= 1.0
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Back to the never-started state.
    pub fn reset(&mut self) {
        self.active = false;
        self.progress = 0.0;
    }
}

/// Derived sprite appearance. `IDENTITY` is the neutral appearance used
/// whenever no animation is running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteVisual {
    pub alpha: f32,
    pub scale: f32,
    /// Radians, clockwise.
    pub rotation: f32,
    pub shake_x: f32,
}

impl SpriteVisual {
    pub const IDENTITY: Self = Self {
        alpha: 1.0,
        scale: 1.0,
        rotation: 0.0,
        shake_x: 0.0,
    };
}

/// Appearance of a fading obstacle: grows and spins while the alpha decays,
/// with a damped horizontal shake.
pub fn fade_visual(timer: &AnimTimer) -> SpriteVisual {
    if !timer.is_active() {
        return SpriteVisual::IDENTITY;
    }
    let p = timer.progress();
    SpriteVisual {
        alpha: 1.0 - p,
        scale: 1.0 + 0.5 * p,
        rotation: p * std::f32::consts::PI,
        shake_x: (p * 40.0).sin() * 4.0 * (1.0 - p),
    }
}

/// Scale of the player sprite during the hit bounce.
pub fn bounce_scale(timer: &AnimTimer) -> f32 {
    if !timer.is_active() {
        return 1.0;
    }
    1.0 + 0.3 * (timer.progress() * std::f32::consts::PI).sin()
}

/// Tint used when the hit zone flashes on a miss.
pub const MISS_FLASH_COLOR: [f32; 3] = [1.0, 0.25, 0.25];

/// The hit-zone color flash.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitZoneFlash {
    timer: AnimTimer,
    color: [f32; 3],
}

impl HitZoneFlash {
    pub const fn new() -> Self {
        Self {
            timer: AnimTimer::new(FLASH_DURATION),
            color: MISS_FLASH_COLOR,
        }
    }

    pub fn start(&mut self, color: [f32; 3]) {
        self.color = color;
        self.timer.start();
    }

    pub fn update(&mut self, dt: f32) {
        self.timer.update(dt);
    }

    pub fn reset(&mut self) {
        self.timer.reset();
    }

    /// Current overlay tint, or `None` when idle.
    pub fn tint(&self) -> Option<([f32; 3], f32)> {
        self.timer
            .is_active()
            .then(|| (self.color, 0.6 * (1.0 - self.timer.progress())))
    }
}

impl Default for HitZoneFlash {
    fn default() -> Self {
        Self::new()
    }
}

/// The floating note-name label shown when a note is sounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteNameDisplay {
    timer: AnimTimer,
    line: Option<StaffLine>,
}

impl NoteNameDisplay {
    pub const fn new() -> Self {
        Self {
            timer: AnimTimer::new(NOTE_NAME_DURATION),
            line: None,
        }
    }

    pub fn show(&mut self, line: StaffLine) {
        self.line = Some(line);
        self.timer.start();
    }

    pub fn update(&mut self, dt: f32) {
        self.timer.update(dt);
    }

    pub fn reset(&mut self) {
        self.timer.reset();
        self.line = None;
    }

    /// Label text, fade alpha and upward drift in px, or `None` when idle.
    pub fn label(&self) -> Option<(&'static str, f32, f32)> {
        if !self.timer.is_active() {
            return None;
        }
        let p = self.timer.progress();
        self.line
            .map(|line| (line.letter().name(), 1.0 - p, p * 20.0))
    }
}

impl Default for NoteNameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

/// The world-level transient effects, bundled for update and reset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Effects {
    pub flash: HitZoneFlash,
    pub note_name: NoteNameDisplay,
}

impl Effects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, dt: f32) {
        self.flash.update(dt);
        self.note_name.update(dt);
    }

    pub fn reset(&mut self) {
        self.flash.reset();
        self.note_name.reset();
    }
}
