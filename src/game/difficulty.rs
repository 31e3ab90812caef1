//! Difficulty curve: a pure function of elapsed play time.

/// Highest reachable difficulty level.
pub const MAX_LEVEL: u32 = 5;

/// Seconds of play per level increase.
const SECONDS_PER_LEVEL: f32 = 30.0;

/// Spawn cadence and obstacle velocity for one difficulty level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    pub level: u32,
    /// Seconds between spawns.
    pub spawn_interval: f32,
    /// Obstacle speed in px/s, frozen into each obstacle at spawn.
    pub obstacle_speed: f32,
}

impl Difficulty {
    /// Difficulty for a cumulative play time. Total for `elapsed >= 0`;
    /// negative input clamps to level 1.
    pub fn at(elapsed_secs: f32) -> Self {
        let level = if elapsed_secs <= 0.0 {
            1
        } else {
            ((elapsed_secs / SECONDS_PER_LEVEL) as u32 + 1).min(MAX_LEVEL)
        };
        Self::for_level(level)
    }

    /// Difficulty for an explicit level (clamped to 1..=MAX_LEVEL).
    pub fn for_level(level: u32) -> Self {
        let level = level.clamp(1, MAX_LEVEL);
        let steps = (level - 1) as f32;
        Self {
            level,
            spawn_interval: (2.0 - steps * 0.2).max(0.8),
            obstacle_speed: 150.0 + steps * 30.0,
        }
    }
}
