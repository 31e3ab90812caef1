//! Render-state snapshots and the backend seam.
//!
//! The simulation produces a [`RenderFrame`] once per step; a backend
//! consumes it and produces pixels. Nothing flows back into the core.

use anyhow::Result;

use crate::game::anim::{SpriteVisual, bounce_scale, fade_visual};
use crate::game::hit_window::HitWindow;
use crate::game::obstacle::OBSTACLE_SIZE;
use crate::game::player::PLAYER_SIZE;
use crate::game::world::{GamePhase, GameWorld};
use crate::traits::assets::{ImageHandle, ImageStore};

/// Sprite for the player pose.
pub const PLAYER_SPRITE: &str = "assets/player.png";
/// Sprite for the held-key pose.
pub const PLAYER_SPRITE_PRESSED: &str = "assets/player_pressed.png";

/// One obstacle as the renderer should draw it. A `None` image means the
/// load has not completed (or failed); backends draw a colored
/// placeholder of the same size instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleSprite {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub image: Option<ImageHandle>,
    pub visual: SpriteVisual,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSprite {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub image: Option<ImageHandle>,
    pub scale: f32,
    /// Whether the held-key pose applies.
    pub pressed: bool,
}

/// Scalar HUD values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudState {
    pub score: i64,
    pub lives: u32,
    pub max_lives: u32,
    pub level: u32,
    pub muted: bool,
}

/// Everything the renderer needs for one frame, derived from the world
/// by value. The renderer owns no gameplay logic.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub phase: GamePhase,
    pub obstacles: Vec<ObstacleSprite>,
    pub player: PlayerSprite,
    pub window: HitWindow,
    pub hud: HudState,
    /// Hit-zone tint and alpha while the flash runs.
    pub flash: Option<([f32; 3], f32)>,
    /// Floating note name: text, alpha, upward drift in px.
    pub note_label: Option<(&'static str, f32, f32)>,
}

/// Build the frame snapshot for the current world state. Pure except for
/// image-cache lookups.
pub fn build_frame(world: &GameWorld, images: &dyn ImageStore) -> RenderFrame {
    let obstacles = world
        .obstacles()
        .iter()
        .map(|o| ObstacleSprite {
            x: o.x,
            y: o.y_px(),
            size: OBSTACLE_SIZE,
            image: images.get(o.sprite),
            visual: fade_visual(&o.fade),
        })
        .collect();

    let player = world.player();
    let pressed = player.any_key_held();
    let sprite_path = if pressed {
        PLAYER_SPRITE_PRESSED
    } else {
        PLAYER_SPRITE
    };
    let player = PlayerSprite {
        x: player.x(),
        y: player.interpolated_y(),
        size: PLAYER_SIZE,
        image: images.get(sprite_path),
        scale: bounce_scale(player.bounce()),
        pressed,
    };

    RenderFrame {
        phase: world.phase(),
        obstacles,
        player,
        window: world.hit_window(),
        hud: HudState {
            score: world.score().points(),
            lives: world.lives().current(),
            max_lives: world.lives().max(),
            level: world.difficulty().level,
            muted: world.muted(),
        },
        flash: world.effects().flash.tint(),
        note_label: world.effects().note_name.label(),
    }
}

/// Abstraction over render backends.
/// Implementations: NullRenderer (headless), a canvas/GPU backend in the
/// embedding host.
pub trait Renderer {
    /// One-time surface setup. Failure is fatal: the simulation is never
    /// started without a render surface.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn present(&mut self, frame: &RenderFrame);
}

/// Renderer that draws nothing, for headless runs.
#[derive(Debug, Default)]
pub struct NullRenderer {
    frames: u64,
}

impl NullRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }
}

impl Renderer for NullRenderer {
    fn present(&mut self, _frame: &RenderFrame) {
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::world::WorldConfig;
    use crate::traits::assets::{MemoryImages, NullImages};
    use crate::traits::audio::NullAudio;
    use crate::traits::input::InputEvent;

    #[test]
    fn frame_reflects_world_scalars() {
        let mut world = GameWorld::with_seed(WorldConfig::default(), 5);
        let mut audio = NullAudio::new();
        world.handle_event(InputEvent::Start, &mut audio);

        let frame = build_frame(&world, &NullImages);
        assert_eq!(frame.phase, GamePhase::Playing);
        assert_eq!(frame.hud.score, 0);
        assert_eq!(frame.hud.lives, frame.hud.max_lives);
        assert_eq!(frame.hud.level, 1);
        assert_eq!(frame.window, world.hit_window());
        assert_eq!(frame.flash, None);
        assert_eq!(frame.note_label, None);
    }

    #[test]
    fn absent_images_degrade_to_placeholders() {
        let mut world = GameWorld::with_seed(WorldConfig::default(), 5);
        let mut audio = NullAudio::new();
        world.handle_event(InputEvent::Start, &mut audio);
        // Step far enough for a spawn; no image was ever resolved.
        for _ in 0..130 {
            world.step(0.016, &mut audio);
        }

        let frame = build_frame(&world, &NullImages);
        assert!(!frame.obstacles.is_empty());
        assert!(frame.obstacles.iter().all(|o| o.image.is_none()));
        assert_eq!(frame.player.image, None);
    }

    #[test]
    fn resolved_player_sprite_shows_up() {
        let mut world = GameWorld::with_seed(WorldConfig::default(), 5);
        let mut audio = NullAudio::new();
        world.handle_event(InputEvent::Start, &mut audio);

        let mut images = MemoryImages::new();
        images.request(PLAYER_SPRITE);
        let handle = images.resolve(PLAYER_SPRITE);

        let frame = build_frame(&world, &images);
        assert_eq!(frame.player.image, Some(handle));
        assert!(!frame.player.pressed);
    }
}
