//! Balls and their admirers entry point
//!
//! Builds the configuration, seeds the RNG, and runs either the windowed
//! simulation or a fixed number of headless frames.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use admirers::app;
use admirers::sim::RngState;
use admirers::{LeaderView, NamedColor, SimConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Every ball chases a randomly chosen leader", long_about = None)]
struct Args {
    /// JSON config file; missing fields use built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed (defaults to the system clock)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of balls
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Board width in pixels
    #[arg(long)]
    width: Option<i32>,

    /// Board height in pixels
    #[arg(long)]
    height: Option<i32>,

    /// Target frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// Frame clear color, by name (e.g. raywhite, black, darkblue)
    #[arg(long, value_name = "COLOR")]
    background: Option<NamedColor>,

    /// Which leader position followers see during a frame
    #[arg(long, value_enum)]
    leader_view: Option<LeaderView>,

    /// Run this many frames without a window and print the final balls as JSON
    #[arg(long, value_name = "FRAMES")]
    headless: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    fn into_config(self) -> Result<(SimConfig, Option<u64>)> {
        let mut config = match &self.config {
            Some(path) => SimConfig::load(path)?,
            None => SimConfig::default(),
        };

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(count) = self.count {
            config.count = count;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if let Some(background) = self.background {
            config.background = background;
        }
        if let Some(view) = self.leader_view {
            config.leader_view = view;
        }

        Ok((config, self.headless))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    log::info!("Balls and their admirers starting...");

    let (config, headless) = args.into_config().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let rng_state = RngState::from_option(config.seed);
    log::info!("Seed: {}", rng_state.seed);

    match headless {
        Some(frames) => {
            let run = app::run_headless(&config, rng_state, frames)
                .context("Headless run failed")?;
            let json = serde_json::to_string_pretty(&run.population)
                .context("Failed to serialize population")?;
            println!("{}", json);
        }
        None => {
            app::run(config, rng_state).context("Simulation error")?;
        }
    }

    Ok(())
}
