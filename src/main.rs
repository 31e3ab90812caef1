//! Headless run harness: drives the simulation core against null
//! collaborators for smoke runs, profiling and reproducible replays.

use anyhow::Result;
use clap::Parser;
use log::info;

use sightread::app::Controller;
use sightread::config::GameSettings;
use sightread::game::hit_window::NoteValue;
use sightread::game::world::GameWorld;
use sightread::traits::assets::MemoryImages;
use sightread::traits::audio::NullAudio;
use sightread::traits::input::InputEvent;
use sightread::traits::render::NullRenderer;
use sightread::util::logging::init_logging;

#[derive(Parser, Debug)]
#[command(name = "sightread", about = "Staff-reading rhythm game, headless harness")]
struct Args {
    /// RNG seed for a reproducible run
    #[arg(long, env = "SIGHTREAD_SEED")]
    seed: Option<u64>,

    /// Frame budget at the 60 Hz virtual clock
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// Override the configured tempo
    #[arg(long)]
    bpm: Option<f32>,

    /// Override the configured lives
    #[arg(long)]
    lives: Option<u32>,

    /// Note duration: whole, half, quarter, eighth or sixteenth
    #[arg(long)]
    note: Option<String>,

    /// Run with the autoplay assist
    #[arg(long)]
    autoplay: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut settings = GameSettings::load();
    if let Some(bpm) = args.bpm {
        settings.bpm = bpm;
    }
    if let Some(lives) = args.lives {
        settings.max_lives = lives;
    }
    if let Some(note) = &args.note {
        settings.note_value = NoteValue::from_name(note);
    }
    if args.autoplay {
        settings.autoplay = true;
    }

    let config = settings.world_config();
    let world = match args.seed {
        Some(seed) => GameWorld::with_seed(config, seed),
        None => GameWorld::new(config),
    };

    let mut controller = Controller::new(
        world,
        Box::new(NullAudio::new()),
        Box::new(NullRenderer::new()),
        Box::new(MemoryImages::new()),
        settings.autoplay,
    )?;
    if settings.muted {
        controller.queue_event(InputEvent::MuteToggled);
    }

    let summary = controller.run_headless(args.frames);
    info!(
        "final: score {} at level {} after {:.1}s ({:?})",
        summary.score, summary.level, summary.elapsed_secs, summary.phase
    );
    Ok(())
}
