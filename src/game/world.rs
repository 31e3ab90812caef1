//! The game world: one explicit object owning every simulation component,
//! stepped once per display frame.

use log::info;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::anim::Effects;
use super::difficulty::Difficulty;
use super::hit_window::{DEFAULT_BPM, HitWindow, NoteValue};
use super::lives::{DEFAULT_MAX_LIVES, Lives};
use super::obstacle::{Obstacle, ObstaclePool};
use super::player::Player;
use super::resolve::{self, KeyPressOutcome};
use super::score::ScoreBoard;
use super::spawner::Spawner;
use super::staff::StaffLine;
use crate::traits::audio::AudioSink;
use crate::traits::input::InputEvent;
use crate::traits::time::MAX_FRAME_DELTA;

/// The game-state machine. The simulation steps only while `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    Playing,
    GameOver,
}

/// Immutable per-run parameters.
#[derive(Debug, Clone, Copy)]
pub struct WorldConfig {
    pub bpm: f32,
    pub max_lives: u32,
    pub note_value: NoteValue,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            bpm: DEFAULT_BPM,
            max_lives: DEFAULT_MAX_LIVES,
            note_value: NoteValue::default(),
        }
    }
}

/// The single game-world instance: constructed once, reset in place on
/// restart, dropped at exit.
pub struct GameWorld {
    phase: GamePhase,
    /// Cumulative play seconds; frozen outside `Playing`.
    elapsed: f32,
    bpm: f32,
    score: ScoreBoard,
    lives: Lives,
    player: Player,
    pool: ObstaclePool,
    spawner: Spawner,
    effects: Effects,
    muted: bool,
    rng: SmallRng,
}

impl GameWorld {
    /// The middle staff line, where the player starts.
    fn initial_line() -> StaffLine {
        StaffLine::all()[StaffLine::COUNT / 2]
    }

    pub fn new(config: WorldConfig) -> Self {
        Self::with_rng(config, SmallRng::from_entropy())
    }

    /// Deterministic world for tests and reproducible headless runs.
    pub fn with_seed(config: WorldConfig, seed: u64) -> Self {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: WorldConfig, rng: SmallRng) -> Self {
        let mut player = Player::new(Self::initial_line());
        player.set_note_value(config.note_value);
        Self {
            phase: GamePhase::NotStarted,
            elapsed: 0.0,
            bpm: config.bpm,
            score: ScoreBoard::new(),
            lives: Lives::new(config.max_lives),
            player,
            pool: ObstaclePool::new(),
            spawner: Spawner::new(),
            effects: Effects::new(),
            muted: false,
            rng,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn bpm(&self) -> f32 {
        self.bpm
    }

    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    pub fn lives(&self) -> &Lives {
        &self.lives
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        self.pool.as_slice()
    }

    pub fn effects(&self) -> &Effects {
        &self.effects
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Current difficulty, derived from elapsed play time.
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::at(self.elapsed)
    }

    /// Current hit window, derived from the selected note value. Never
    /// cached across frames.
    pub fn hit_window(&self) -> HitWindow {
        HitWindow::for_value(self.player.note_value(), self.bpm)
    }

    /// Apply one semantic input event. Events run to completion before
    /// the next frame step; there is no other atomicity boundary.
    pub fn handle_event(&mut self, event: InputEvent, audio: &mut dyn AudioSink) {
        match event {
            InputEvent::Start => {
                if self.phase == GamePhase::NotStarted {
                    self.phase = GamePhase::Playing;
                    info!("game started");
                }
            }
            InputEvent::Restart => {
                if self.phase == GamePhase::GameOver {
                    self.restart();
                }
            }
            InputEvent::NoteKeyDown(letter) => {
                if self.phase != GamePhase::Playing || !self.player.press(letter) {
                    return;
                }
                let target = letter.nearest_line(self.player.line());
                self.player.move_to(target);

                let window = self.hit_window();
                let note_duration = self.player.note_value().duration_secs(self.bpm);
                let outcome = resolve::resolve_key_press(
                    letter,
                    &mut self.pool,
                    &window,
                    &mut self.player,
                    &mut self.score,
                    &mut self.lives,
                    &mut self.effects,
                    audio,
                    note_duration,
                );
                if outcome == KeyPressOutcome::WrongPitch {
                    self.check_game_over();
                }
            }
            InputEvent::NoteKeyUp(letter) => {
                self.player.release(letter);
            }
            InputEvent::NoteDurationSelected(value) => {
                self.player.set_note_value(value);
            }
            InputEvent::MuteToggled => {
                self.muted = audio.toggle_mute();
            }
        }
    }

    /// Advance the simulation by one frame delta. A no-op outside
    /// `Playing`. The delta is capped here as well as at the frame timer:
    /// the spawner's threshold check and the window-crossing scans assume
    /// at most one interval crossing per step.
    pub fn step(&mut self, dt: f32, audio: &mut dyn AudioSink) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let dt = dt.clamp(0.0, MAX_FRAME_DELTA);
        self.elapsed += dt;

        let difficulty = self.difficulty();
        self.spawner
            .update(dt, &difficulty, &mut self.rng, &mut self.pool);

        self.pool.advance(dt);
        self.player.update(dt);
        self.effects.update(dt);

        let window = self.hit_window();
        let note_duration = self.player.note_value().duration_secs(self.bpm);
        resolve::passive_collisions(
            &mut self.pool,
            &mut self.player,
            &mut self.score,
            &mut self.effects,
            audio,
            note_duration,
        );
        resolve::passive_misses(&mut self.pool, &window, &mut self.lives, audio);

        // The frame's resolution ran to completion above; only now does a
        // depleted counter freeze the simulation.
        self.check_game_over();
        self.pool.prune();
    }

    fn check_game_over(&mut self) {
        if self.phase == GamePhase::Playing && self.lives.is_depleted() {
            self.phase = GamePhase::GameOver;
            info!(
                "game over: score {} after {:.1}s at level {}",
                self.score.points(),
                self.elapsed,
                self.difficulty().level
            );
        }
    }

    /// Full in-place reset back into `Playing`.
    fn restart(&mut self) {
        self.score.reset();
        self.lives.reset();
        self.pool.clear();
        self.spawner.reset();
        self.player.reset(Self::initial_line());
        self.effects.reset();
        self.elapsed = 0.0;
        self.phase = GamePhase::Playing;
        info!("restarted");
    }

    #[cfg(test)]
    pub(crate) fn place_obstacle(&mut self, obstacle: Obstacle) {
        self.pool.push(obstacle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::staff::Letter;
    use crate::test_utils::builders::{ObstacleBuilder, playing_world, playing_world_with, staff};
    use crate::test_utils::input_script::InputScript;
    use crate::traits::audio::RecordingAudio;

    #[test]
    fn steps_only_while_playing() {
        let mut audio = RecordingAudio::new();
        let mut world = GameWorld::with_seed(WorldConfig::default(), 1);
        world.step(0.016, &mut audio);
        assert_eq!(world.elapsed(), 0.0);
        assert_eq!(world.phase(), GamePhase::NotStarted);

        world.handle_event(InputEvent::Start, &mut audio);
        world.step(0.016, &mut audio);
        assert!(world.elapsed() > 0.0);
    }

    #[test]
    fn matching_press_scores_one_hundred() {
        let (mut world, mut audio) = playing_world(99);
        let line = world.player().line();
        world.place_obstacle(ObstacleBuilder::on_row(line.grid_row()).build());

        world.handle_event(InputEvent::NoteKeyDown(line.letter()), &mut audio);
        assert_eq!(world.score().points(), 100);
        assert!(world.obstacles()[0].collided);
        assert!(world.obstacles()[0].fade.is_active());
        assert_eq!(world.lives().current(), world.lives().max());
    }

    #[test]
    fn held_key_does_not_retrigger() {
        let (mut world, mut audio) = playing_world(99);
        world.place_obstacle(ObstacleBuilder::on_row(6.0).build());
        world.place_obstacle(ObstacleBuilder::on_row(6.0).build());

        // Both D obstacles resolve on the first press; the repeated
        // key-down without a release in between is swallowed even though
        // nothing is left to hit.
        InputScript::new()
            .press(Letter::D)
            .press(Letter::D)
            .apply(&mut world, &mut audio);
        assert_eq!(world.score().points(), 200);
        assert_eq!(world.lives().current(), world.lives().max());

        // After a release the key re-arms, and the empty window makes the
        // third press a no-op.
        InputScript::new()
            .release(Letter::D)
            .press(Letter::D)
            .apply(&mut world, &mut audio);
        assert_eq!(world.score().points(), 200);
        assert_eq!(world.lives().current(), world.lives().max());
    }

    #[test]
    fn wrong_key_with_note_present_loses_life_and_can_end_game() {
        let (mut world, mut audio) = playing_world(99);
        for _ in 0..world.lives().max() {
            world.place_obstacle(ObstacleBuilder::on_row(6.0).build());
            InputScript::new().tap(Letter::B).apply(&mut world, &mut audio);
        }
        assert_eq!(world.lives().current(), 0);
        assert_eq!(world.phase(), GamePhase::GameOver);
    }

    #[test]
    fn empty_window_press_changes_nothing() {
        let (mut world, mut audio) = playing_world(99);
        world.handle_event(InputEvent::NoteKeyDown(Letter::C), &mut audio);
        assert_eq!(world.score().points(), 0);
        assert_eq!(world.lives().current(), world.lives().max());
        assert_eq!(world.phase(), GamePhase::Playing);
    }

    #[test]
    fn passing_obstacle_costs_a_life_once() {
        let (mut world, mut audio) = playing_world(99);
        let lives_before = world.lives().current();
        // Not on the player's line so the touch path stays out of it.
        assert_ne!(staff(5.0), world.player().line());
        world.place_obstacle(ObstacleBuilder::on_row(5.0).past_window().build());

        world.step(0.001, &mut audio);
        assert_eq!(world.lives().current(), lives_before - 1);
        assert_eq!(audio.error_count(), 1);

        world.step(0.001, &mut audio);
        assert_eq!(world.lives().current(), lives_before - 1);
    }

    #[test]
    fn game_over_freezes_simulation() {
        let config = WorldConfig {
            max_lives: 1,
            ..WorldConfig::default()
        };
        let (mut world, mut audio) = playing_world_with(config, 3);
        world.place_obstacle(ObstacleBuilder::on_row(5.0).past_window().build());

        world.step(0.001, &mut audio);
        assert_eq!(world.phase(), GamePhase::GameOver);

        let elapsed = world.elapsed();
        world.step(0.016, &mut audio);
        assert_eq!(world.elapsed(), elapsed);
    }

    #[test]
    fn restart_resets_the_whole_world() {
        let config = WorldConfig {
            max_lives: 1,
            ..WorldConfig::default()
        };
        let (mut world, mut audio) = playing_world_with(config, 3);
        InputScript::new()
            .select_duration(NoteValue::Half)
            .apply(&mut world, &mut audio);
        world.place_obstacle(ObstacleBuilder::on_row(5.0).past_window().build());
        world.place_obstacle(ObstacleBuilder::on_row(6.0).build());
        world.step(0.001, &mut audio);
        assert_eq!(world.phase(), GamePhase::GameOver);

        InputScript::new().restart().apply(&mut world, &mut audio);
        assert_eq!(world.phase(), GamePhase::Playing);
        assert_eq!(world.score().points(), 0);
        assert_eq!(world.lives().current(), 1);
        assert!(world.obstacles().is_empty());
        assert_eq!(world.elapsed(), 0.0);
        assert_eq!(world.player().line(), GameWorld::initial_line());
        assert!(world.effects().flash.tint().is_none());
        // The selected duration is a preference, not round state.
        assert_eq!(world.player().note_value(), NoteValue::Half);
    }

    #[test]
    fn restart_ignored_outside_game_over() {
        let (mut world, mut audio) = playing_world(99);
        world.place_obstacle(ObstacleBuilder::on_row(6.0).build());
        world.handle_event(InputEvent::Restart, &mut audio);
        assert_eq!(world.obstacles().len(), 1, "no reset mid-round");
    }

    #[test]
    fn spawner_runs_under_the_step_loop() {
        let (mut world, mut audio) = playing_world(99);
        // Level 1 spawns every 2s; step 2.5s of capped frames.
        let mut stepped = 0.0;
        while stepped < 2.5 {
            world.step(0.016, &mut audio);
            stepped += 0.016;
        }
        assert!(!world.obstacles().is_empty());
    }

    #[test]
    fn mute_toggle_tracks_sink_state() {
        let (mut world, mut audio) = playing_world(99);
        world.handle_event(InputEvent::MuteToggled, &mut audio);
        assert!(world.muted());
        world.handle_event(InputEvent::MuteToggled, &mut audio);
        assert!(!world.muted());
    }
}
