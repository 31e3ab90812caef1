//! Autoplay assist for headless and demo runs.
//!
//! Watches the world each frame and presses the letter of the most
//! urgent hittable note inside the window, releasing it afterwards. The
//! assist goes through the same semantic input events as a human.

use std::cmp::Ordering;

use crate::game::staff::Letter;
use crate::game::world::{GamePhase, GameWorld};
use crate::traits::input::InputEvent;

#[derive(Debug, Default)]
pub struct AutoplayAssist {
    enabled: bool,
    held: Option<Letter>,
}

impl AutoplayAssist {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            held: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Input events to apply before this frame's step.
    pub fn events(&mut self, world: &GameWorld) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if !self.enabled {
            return events;
        }
        if world.phase() != GamePhase::Playing {
            if let Some(letter) = self.held.take() {
                events.push(InputEvent::NoteKeyUp(letter));
            }
            return events;
        }

        let window = world.hit_window();
        // Leftmost hittable note is the one about to slip out.
        let target = world
            .obstacles()
            .iter()
            .filter(|o| !o.is_resolved() && window.contains(o.center_x()))
            .min_by(|a, b| {
                a.center_x()
                    .partial_cmp(&b.center_x())
                    .unwrap_or(Ordering::Equal)
            })
            .map(|o| o.line.letter());

        match (self.held, target) {
            (held, Some(letter)) if held != Some(letter) => {
                if let Some(previous) = held {
                    events.push(InputEvent::NoteKeyUp(previous));
                }
                events.push(InputEvent::NoteKeyDown(letter));
                self.held = Some(letter);
            }
            (Some(previous), None) => {
                events.push(InputEvent::NoteKeyUp(previous));
                self.held = None;
            }
            _ => {}
        }
        events
    }
}
