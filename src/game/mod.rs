pub mod anim;
pub mod difficulty;
pub mod hit_window;
pub mod lives;
pub mod obstacle;
pub mod player;
pub mod resolve;
pub mod score;
pub mod spawner;
pub mod staff;
pub mod world;

pub use difficulty::Difficulty;
pub use hit_window::{HitWindow, NoteValue};
pub use lives::Lives;
pub use obstacle::{Obstacle, ObstaclePool};
pub use player::Player;
pub use score::ScoreBoard;
pub use staff::{Letter, StaffLine};
pub use world::{GamePhase, GameWorld, WorldConfig};
