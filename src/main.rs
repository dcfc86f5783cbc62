//! Alien Invaders headless driver
//!
//! Runs the game without a window: a scripted autopilot supplies the keys,
//! cues go to a logging sink, and the final frame can be dumped as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use alien_invaders::consts::FRAME_DT;
use alien_invaders::{
    AudioSink, FrameInput, GamePhase, Invaders, Key, LogAudio, RenderSnapshot, Settings,
};

#[derive(Parser)]
#[command(name = "alien-invaders")]
#[command(about = "Play Alien Invaders headlessly with a scripted autopilot")]
struct Args {
    /// Seed for the alien fire RNG
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Maximum number of frames to simulate
    #[arg(long, default_value_t = 36_000)]
    frames: u64,

    /// Seconds per frame
    #[arg(long, default_value_t = FRAME_DT)]
    dt: f32,

    /// JSON settings file (missing fields use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the final render snapshot as JSON
    #[arg(long)]
    snapshot: bool,
}

/// Chooses keys for the next frame from what is on screen
struct Autopilot {
    frame: u64,
}

impl Autopilot {
    fn new() -> Self {
        Self { frame: 0 }
    }

    fn next_input(&mut self, game: &Invaders) -> FrameInput {
        self.frame += 1;
        let mut input = FrameInput::default();
        // Alternate so start/resume register as fresh presses
        let tap = self.frame % 2 == 0;

        match game.phase() {
            GamePhase::Inactive => input.set(Key::Start, tap),
            GamePhase::Paused => input.set(Key::Resume, tap),
            GamePhase::Active => {
                let Some(wave) = game.wave() else {
                    return input;
                };
                let Some(ship) = wave.ship() else {
                    return input;
                };
                let formation = wave.formation();
                let target = formation
                    .living_columns()
                    .first()
                    .and_then(|&col| formation.lowest_in_column(col))
                    .map(|alien| alien.pos.x);
                if let Some(x) = target {
                    let gap = x - ship.pos.x;
                    let step = wave.settings().ship_movement;
                    if gap > step / 2.0 {
                        input.set(Key::Right, true);
                    } else if gap < -step / 2.0 {
                        input.set(Key::Left, true);
                    }
                    input.set(Key::Fire, gap.abs() < wave.settings().alien_width / 2.0);
                }
            }
            _ => {}
        }
        input
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };
    anyhow::ensure!(args.dt >= 0.0, "--dt must not be negative");

    let mut game = Invaders::new(settings, args.seed);
    let mut pilot = Autopilot::new();
    let mut audio = LogAudio::new();

    let mut frame = 0;
    while frame < args.frames && !game.phase().is_terminal() {
        let input = pilot.next_input(&game);
        game.update(&input, args.dt);
        audio.play_all(game.drain_cues());
        frame += 1;
    }

    log::info!(
        "Finished after {} frames in phase {:?} (shots {}, aliens destroyed {}, ship hits {})",
        frame,
        game.phase(),
        audio.fired,
        audio.destroyed,
        audio.hits
    );

    if args.snapshot {
        let json = RenderSnapshot::capture(&game)
            .to_json()
            .context("serializing render snapshot")?;
        println!("{json}");
    }

    Ok(())
}
