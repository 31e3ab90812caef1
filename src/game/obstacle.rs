//! Scrolling note obstacles and the pool that owns them.

use super::anim::{AnimTimer, FADE_DURATION};
use super::staff::StaffLine;

/// Side length of an obstacle sprite in px. `x` is the left edge.
pub const OBSTACLE_SIZE: f32 = 32.0;

/// One scrolling note. Speed is fixed at spawn time; the terminal flags
/// are set at most once and never cleared.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub x: f32,
    pub line: StaffLine,
    /// Sprite path assigned from the spawner's rotation.
    pub sprite: &'static str,
    /// Leftward scroll speed in px/s.
    pub speed: f32,
    /// Scrolled past the hit window without being intercepted.
    pub avoided: bool,
    /// Intercepted by the player.
    pub collided: bool,
    pub fade: AnimTimer,
}

impl Obstacle {
    pub fn new(line: StaffLine, x: f32, speed: f32, sprite: &'static str) -> Self {
        Self {
            x,
            line,
            sprite,
            speed,
            avoided: false,
            collided: false,
            fade: AnimTimer::new(FADE_DURATION),
        }
    }

    pub fn center_x(&self) -> f32 {
        self.x + OBSTACLE_SIZE / 2.0
    }

    pub fn right_edge(&self) -> f32 {
        self.x + OBSTACLE_SIZE
    }

    pub fn y_px(&self) -> f32 {
        self.line.y_px()
    }

    /// One frame of leftward motion plus fade progress.
    pub fn advance(&mut self, dt: f32) {
        self.x -= self.speed * dt;
        self.fade.update(dt);
    }

    /// Terminal: the note was intercepted. Starts the fade. Ignored if the
    /// obstacle is already resolved either way.
    pub fn mark_collided(&mut self) {
        if self.is_resolved() {
            return;
        }
        self.collided = true;
        self.fade.start();
    }

    /// Terminal: the note got past the player.
    pub fn mark_avoided(&mut self) {
        if self.is_resolved() {
            return;
        }
        self.avoided = true;
    }

    pub fn is_resolved(&self) -> bool {
        self.avoided || self.collided
    }

    /// An obstacle leaves the pool once its fade has completed, or once it
    /// is fully off-screen and no fade is running. Never while fading.
    fn is_expired(&self) -> bool {
        self.fade.is_finished() || (self.right_edge() < 0.0 && !self.fade.is_active())
    }
}

/// Ordered collection of live obstacles. Sole owner; the resolver only
/// ever borrows.
#[derive(Debug, Default)]
pub struct ObstaclePool {
    items: Vec<Obstacle>,
}

impl ObstaclePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, obstacle: Obstacle) {
        self.items.push(obstacle);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Obstacle> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[Obstacle] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Advance motion and fades for the whole pool.
    pub fn advance(&mut self, dt: f32) {
        for obstacle in &mut self.items {
            obstacle.advance(dt);
        }
    }

    /// Drop expired obstacles. Runs after resolution so nothing resolved
    /// this frame is lost early.
    pub fn prune(&mut self) {
        self.items.retain(|o| !o.is_expired());
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
