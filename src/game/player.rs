//! The player entity: a discrete pitch position with smoothed movement.

use super::anim::{AnimTimer, BOUNCE_DURATION};
use super::hit_window::NoteValue;
use super::staff::{Letter, StaffLine};

/// Side length of the player sprite in px; also the passive-collision
/// radius around the player's horizontal anchor.
pub const PLAYER_SIZE: f32 = 32.0;

/// Fixed horizontal anchor of the player, inside the hit zone.
pub const PLAYER_X: f32 = 160.0;

/// Seconds to glide from one staff position to the next target.
pub const MOVE_DURATION: f32 = 0.12;

/// Player state. The gameplay-relevant pitch is always the discrete
/// `line` target; the interpolated Y exists for rendering and proximity
/// only and is never read back as a pitch.
#[derive(Debug, Clone)]
pub struct Player {
    line: StaffLine,
    note_value: NoteValue,
    move_from_y: f32,
    move_progress: f32,
    moving: bool,
    bounce: AnimTimer,
    held: [bool; 7],
}

impl Player {
    pub fn new(line: StaffLine) -> Self {
        Self {
            line,
            note_value: NoteValue::default(),
            move_from_y: line.y_px(),
            move_progress: 0.0,
            moving: false,
            bounce: AnimTimer::new(BOUNCE_DURATION),
            held: [false; 7],
        }
    }

    /// Discrete staff position used for all pitch matching.
    pub fn line(&self) -> StaffLine {
        self.line
    }

    pub fn x(&self) -> f32 {
        PLAYER_X
    }

    /// Vertical position for rendering and proximity checks. Equals the
    /// target's pixel Y once movement settles.
    pub fn interpolated_y(&self) -> f32 {
        if !self.moving {
            return self.line.y_px();
        }
        let to = self.line.y_px();
        self.move_from_y + (to - self.move_from_y) * self.move_progress
    }

    /// Begin gliding toward a new staff position. A move to the current
    /// target is not a move.
    pub fn move_to(&mut self, target: StaffLine) {
        if target == self.line {
            return;
        }
        self.move_from_y = self.interpolated_y();
        self.line = target;
        self.move_progress = 0.0;
        self.moving = true;
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn update(&mut self, dt: f32) {
        if self.moving {
            self.move_progress += dt / MOVE_DURATION;
            if self.move_progress >= 1.0 {
                self.move_progress = 1.0;
                self.moving = false;
            }
        }
        self.bounce.update(dt);
    }

    /// Register a key-down. Returns false while the letter is already
    /// held, so auto-repeat never re-triggers resolution.
    pub fn press(&mut self, letter: Letter) -> bool {
        let slot = &mut self.held[letter as usize];
        if *slot {
            return false;
        }
        *slot = true;
        true
    }

    pub fn release(&mut self, letter: Letter) {
        self.held[letter as usize] = false;
    }

    /// Whether any note key is held, for the pressed sprite pose.
    pub fn any_key_held(&self) -> bool {
        self.held.iter().any(|&h| h)
    }

    pub fn note_value(&self) -> NoteValue {
        self.note_value
    }

    pub fn set_note_value(&mut self, value: NoteValue) {
        self.note_value = value;
    }

    /// Kick off the hit bounce.
    pub fn on_hit(&mut self) {
        self.bounce.start();
    }

    pub fn bounce(&self) -> &AnimTimer {
        &self.bounce
    }

    /// Back to the initial position. The selected note value is a player
    /// preference and survives the reset.
    pub fn reset(&mut self, line: StaffLine) {
        self.line = line;
        self.move_from_y = line.y_px();
        self.move_progress = 0.0;
        self.moving = false;
        self.bounce.reset();
        self.held = [false; 7];
    }
}
