mod autoplay;
mod controller;

pub use autoplay::AutoplayAssist;
pub use controller::{Controller, RunSummary};
