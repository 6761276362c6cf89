//! Headless runner
//!
//! Plays a session without a window: the shooter in demo mode, or a short
//! scripted walk through the Space Man prototype. Draw calls go to an
//! in-memory recorder and sounds to the log.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;

use velocity_of_escape::audio::LogSink;
use velocity_of_escape::consts::SIM_DT;
use velocity_of_escape::platform::Key;
use velocity_of_escape::renderer::DrawRecorder;
use velocity_of_escape::{Game, PlatformerGame, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Velocity of Escape, flown by the autopilot
    Asteroids,
    /// Space Man prototype
    Platformer,
}

#[derive(Parser)]
#[command(
    name = "velocity-of-escape",
    about = "Run Velocity of Escape headless"
)]
struct Cli {
    /// Session seed
    #[arg(long, default_value = "0")]
    seed: u64,

    /// Frames to run (one tick each)
    #[arg(long, default_value = "3600")]
    frames: u32,

    /// Settings file (JSON)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Which game to run
    #[arg(long, value_enum, default_value = "asteroids")]
    game: Mode,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct SessionSummary {
    seed: u64,
    frames: u64,
    score: u64,
    lives: u32,
    game_over: bool,
    asteroids: usize,
    bullets: usize,
    sounds: u64,
    sprites_last_frame: usize,
}

#[derive(Debug, Serialize)]
struct PlatformerSummary {
    frames: u64,
    x: f32,
    y: f32,
    angle: f32,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.game {
        Mode::Asteroids => {
            let settings = match &cli.settings {
                Some(path) => Settings::load(path)
                    .with_context(|| format!("loading settings from {}", path.display()))?,
                None => Settings::default(),
            };
            let summary = run_asteroids(settings, cli.seed, cli.frames)?;
            report(&summary, cli.json, |s| {
                format!(
                    "seed {}: score {} after {} frames, {} lives left{}",
                    s.seed,
                    s.score,
                    s.frames,
                    s.lives,
                    if s.game_over { " (game over)" } else { "" }
                )
            })
        }
        Mode::Platformer => {
            if let Some(path) = unused_settings(&cli) {
                log::warn!(
                    "Ignoring settings {}: the platformer has no tunable rules",
                    path.display()
                );
            }
            let summary = run_platformer(cli.frames);
            report(&summary, cli.json, |s| {
                format!(
                    "player at ({:.1}, {:.1}) facing {:.1} after {} frames",
                    s.x, s.y, s.angle, s.frames
                )
            })
        }
    }
}

/// A settings file passed to a game that has nothing to configure
fn unused_settings(cli: &Cli) -> Option<&PathBuf> {
    match cli.game {
        Mode::Asteroids => None,
        Mode::Platformer => cli.settings.as_ref(),
    }
}

fn report<T: Serialize>(summary: &T, json: bool, text: impl Fn(&T) -> String) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(summary).context("encoding summary")?;
        println!("{out}");
    } else {
        println!("{}", text(summary));
    }
    Ok(())
}

fn run_asteroids(settings: Settings, seed: u64, frames: u32) -> Result<SessionSummary> {
    let mut game = Game::new(settings, seed, Box::new(LogSink)).context("starting session")?;
    game.set_autopilot(true);

    let mut surface = DrawRecorder::default();
    for _ in 0..frames {
        game.update(SIM_DT);
        game.draw(&mut surface);
    }

    let state = game.state();
    Ok(SessionSummary {
        seed,
        frames: state.frame_count,
        score: state.score,
        lives: state.lives,
        game_over: state.game_over,
        asteroids: state.asteroid_count(),
        bullets: state.entities.bullet_count(),
        sounds: game.audio().played(),
        sprites_last_frame: surface.sprites.len(),
    })
}

/// Climb, turn a little every half second, then drop back down
fn run_platformer(frames: u32) -> PlatformerSummary {
    let mut game = PlatformerGame::new();
    let mut surface = DrawRecorder::default();

    game.key_down(Key::Up.into());
    for frame in 0..frames {
        if frame == frames / 2 {
            game.key_up(Key::Up.into());
            game.key_down(Key::Down.into());
        }
        if frame % 30 == 0 {
            game.key_down(Key::Left.into());
            game.key_up(Key::Left.into());
        }
        game.update(SIM_DT);
        game.draw(&mut surface);
    }

    let world = game.world();
    PlatformerSummary {
        frames: world.frame_count,
        x: world.player.pos.x,
        y: world.player.pos.y,
        angle: world.player.angle,
    }
}
