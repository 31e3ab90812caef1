//! Hit, miss and collision resolution.
//!
//! Two trigger paths feed this module: the continuous per-frame scans
//! (`passive_collisions`, `passive_misses`) and the event-driven
//! `resolve_key_press`. All of them are idempotent per obstacle through
//! the terminal `collided`/`avoided` flags.

use log::debug;

use super::anim::{Effects, MISS_FLASH_COLOR};
use super::hit_window::HitWindow;
use super::lives::Lives;
use super::obstacle::{Obstacle, ObstaclePool};
use super::player::{PLAYER_SIZE, Player};
use super::score::ScoreBoard;
use super::staff::Letter;
use crate::traits::audio::AudioSink;

/// What a key press amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPressOutcome {
    /// This many obstacles were intercepted.
    Hit(u32),
    /// Something was in the window, but nothing at the pressed pitch.
    /// Costs a life.
    WrongPitch,
    /// The window was empty; the press is a no-op.
    NoObstacle,
}

/// Shared side effects of intercepting one obstacle, for both the touch
/// path and the key-press path. The sounded pitch is the obstacle's own
/// line, not the pressed letter.
fn apply_hit(
    obstacle: &mut Obstacle,
    player: &mut Player,
    score: &mut ScoreBoard,
    effects: &mut Effects,
    audio: &mut dyn AudioSink,
    note_duration_secs: f32,
) {
    obstacle.mark_collided();
    score.add_hit();
    audio.play_note(obstacle.line, Some(note_duration_secs));
    effects.note_name.show(obstacle.line);
    player.on_hit();
}

/// Continuous scan: the player's sprite touching an unresolved obstacle
/// on its own staff line intercepts it. Runs every frame, key state
/// notwithstanding. Returns the number of interceptions.
pub fn passive_collisions(
    pool: &mut ObstaclePool,
    player: &mut Player,
    score: &mut ScoreBoard,
    effects: &mut Effects,
    audio: &mut dyn AudioSink,
    note_duration_secs: f32,
) -> u32 {
    let mut hits = 0;
    let player_line = player.line();
    let player_x = player.x();
    for obstacle in pool.iter_mut() {
        if obstacle.is_resolved() {
            continue;
        }
        if obstacle.line != player_line {
            continue;
        }
        if (player_x - obstacle.center_x()).abs() > PLAYER_SIZE {
            continue;
        }
        apply_hit(obstacle, player, score, effects, audio, note_duration_secs);
        hits += 1;
    }
    hits
}

/// Event-driven resolution for one debounced key-down.
///
/// Any still-hittable obstacle whose center lies in the window counts as
/// present; the presence of a wrong-pitch obstacle is what separates a
/// miss from a harmless empty press.
#[allow(clippy::too_many_arguments)]
pub fn resolve_key_press(
    letter: Letter,
    pool: &mut ObstaclePool,
    window: &HitWindow,
    player: &mut Player,
    score: &mut ScoreBoard,
    lives: &mut Lives,
    effects: &mut Effects,
    audio: &mut dyn AudioSink,
    note_duration_secs: f32,
) -> KeyPressOutcome {
    let mut any_present = false;
    let mut hits = 0;

    for obstacle in pool.iter_mut() {
        if obstacle.collided || !window.contains(obstacle.center_x()) {
            continue;
        }
        any_present = true;
        if letter.matches(obstacle.line) {
            apply_hit(obstacle, player, score, effects, audio, note_duration_secs);
            hits += 1;
        }
    }

    if hits > 0 {
        debug!("key {} hit {hits} obstacle(s)", letter.name());
        return KeyPressOutcome::Hit(hits);
    }
    if any_present {
        lives.lose();
        audio.play_error();
        effects.flash.start(MISS_FLASH_COLOR);
        debug!("key {} missed, {} lives left", letter.name(), lives.current());
        return KeyPressOutcome::WrongPitch;
    }
    KeyPressOutcome::NoObstacle
}

/// Continuous scan: an unresolved obstacle whose trailing edge has fully
/// cleared the window start slipped past the player. Returns the number
/// of misses charged.
pub fn passive_misses(
    pool: &mut ObstaclePool,
    window: &HitWindow,
    lives: &mut Lives,
    audio: &mut dyn AudioSink,
) -> u32 {
    let mut misses = 0;
    for obstacle in pool.iter_mut() {
        if obstacle.is_resolved() {
            continue;
        }
        if obstacle.right_edge() < window.start {
            obstacle.mark_avoided();
            lives.lose();
            audio.play_error();
            misses += 1;
        }
    }
    if misses > 0 {
        debug!("{misses} obstacle(s) slipped past, {} lives left", lives.current());
    }
    misses
}
