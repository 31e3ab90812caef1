//! Obstacle spawning under the difficulty curve.

use rand::Rng;

use super::difficulty::Difficulty;
use super::obstacle::{Obstacle, ObstaclePool};
use super::staff::{PLAY_WIDTH, StaffLine};

/// Sprite paths cycled round-robin, one per spawn.
pub const SPRITE_ROTATION: [&str; 4] = [
    "assets/notes/note1.png",
    "assets/notes/note2.png",
    "assets/notes/note3.png",
    "assets/notes/note4.png",
];

/// Time-accumulator spawner. One obstacle per interval crossing; the
/// capped frame delta guarantees at most one crossing per update.
#[derive(Debug, Default)]
pub struct Spawner {
    accumulator: f32,
    rotation_index: usize,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate the frame delta and spawn once the difficulty-scaled
    /// interval is reached.
    pub fn update(
        &mut self,
        dt: f32,
        difficulty: &Difficulty,
        rng: &mut impl Rng,
        pool: &mut ObstaclePool,
    ) {
        self.accumulator += dt;
        if self.accumulator >= difficulty.spawn_interval {
            self.accumulator = 0.0;
            pool.push(self.spawn(difficulty, rng));
        }
    }

    fn spawn(&mut self, difficulty: &Difficulty, rng: &mut impl Rng) -> Obstacle {
        let sprite = SPRITE_ROTATION[self.rotation_index];
        self.rotation_index = (self.rotation_index + 1) % SPRITE_ROTATION.len();
        let line = StaffLine::all()[rng.gen_range(0..StaffLine::COUNT)];
        Obstacle::new(line, PLAY_WIDTH, difficulty.obstacle_speed, sprite)
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.rotation_index = 0;
    }
}
