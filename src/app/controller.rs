//! The cooperative frame loop: clock -> input events -> step -> snapshot.

use anyhow::Result;
use log::info;

use super::autoplay::AutoplayAssist;
use crate::game::spawner::SPRITE_ROTATION;
use crate::game::world::{GamePhase, GameWorld};
use crate::traits::assets::ImageStore;
use crate::traits::audio::AudioSink;
use crate::traits::input::InputEvent;
use crate::traits::render::{PLAYER_SPRITE, PLAYER_SPRITE_PRESSED, Renderer, build_frame};
use crate::traits::time::{Clock, FrameTimer, ManualClock};

/// Result of a bounded headless run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub score: i64,
    pub level: u32,
    pub elapsed_secs: f32,
    pub phase: GamePhase,
}

/// Owns the world and its collaborators and drives them once per display
/// frame. Input events queue between frames and run to completion before
/// the step, matching the host's cooperative event loop.
pub struct Controller {
    world: GameWorld,
    timer: FrameTimer,
    audio: Box<dyn AudioSink>,
    renderer: Box<dyn Renderer>,
    images: Box<dyn ImageStore>,
    autoplay: AutoplayAssist,
    pending: Vec<InputEvent>,
    frames: u64,
}

impl Controller {
    /// Wire up the collaborators. Renderer initialization failure is
    /// fatal; the simulation never starts without a surface.
    pub fn new(
        world: GameWorld,
        audio: Box<dyn AudioSink>,
        mut renderer: Box<dyn Renderer>,
        mut images: Box<dyn ImageStore>,
        autoplay: bool,
    ) -> Result<Self> {
        renderer.init()?;

        // Fire-and-forget sprite loads; the frame builder tolerates
        // handles that never arrive.
        for path in SPRITE_ROTATION {
            images.request(path);
        }
        images.request(PLAYER_SPRITE);
        images.request(PLAYER_SPRITE_PRESSED);

        Ok(Self {
            world,
            timer: FrameTimer::new(),
            audio,
            renderer,
            images,
            autoplay: AutoplayAssist::new(autoplay),
            pending: Vec::new(),
            frames: 0,
        })
    }

    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    /// Queue a semantic input event for the next frame.
    pub fn queue_event(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    /// One display-frame callback: drain events, step, present.
    pub fn frame(&mut self, clock: &dyn Clock) {
        let dt = self.timer.tick(clock);

        for event in self.pending.drain(..) {
            self.world.handle_event(event, self.audio.as_mut());
        }
        for event in self.autoplay.events(&self.world) {
            self.world.handle_event(event, self.audio.as_mut());
        }

        self.world.step(dt, self.audio.as_mut());

        let frame = build_frame(&self.world, self.images.as_ref());
        self.renderer.present(&frame);
        self.frames += 1;
    }

    /// Drive a bounded headless run at a fixed 60 Hz virtual clock,
    /// stopping early on game over.
    pub fn run_headless(&mut self, max_frames: u64) -> RunSummary {
        let clock = ManualClock::new();
        self.queue_event(InputEvent::Start);

        for _ in 0..max_frames {
            self.frame(&clock);
            if self.world.phase() == GamePhase::GameOver {
                break;
            }
            clock.advance(1.0 / 60.0);
        }

        let summary = self.summary();
        info!(
            "run finished: {} frames, score {}, level {}, {:?}",
            summary.frames, summary.score, summary.level, summary.phase
        );
        summary
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            frames: self.frames,
            score: self.world.score().points(),
            level: self.world.difficulty().level,
            elapsed_secs: self.world.elapsed(),
            phase: self.world.phase(),
        }
    }
}
