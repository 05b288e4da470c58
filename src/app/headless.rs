//! Windowless runs
//!
//! Steps the simulation a fixed number of frames against a recording canvas.
//! With a fixed seed the result is reproducible, which makes it handy for
//! checking behavior without a GPU.

use crate::config::SimConfig;
use crate::error::ConfigError;
use crate::sim::{self, Population, RecordingCanvas, RngState};

/// Result of a headless run
#[derive(Debug, Clone)]
pub struct HeadlessRun {
    pub seed: u64,
    pub frames: u64,
    pub population: Population,
    pub canvas: RecordingCanvas,
}

/// Initialize a population and step it `frames` times
pub fn run_headless(
    config: &SimConfig,
    rng_state: RngState,
    frames: u64,
) -> Result<HeadlessRun, ConfigError> {
    config.validate()?;

    let mut rng = rng_state.to_rng();
    let mut population = Population::random(config, &mut rng);
    let mut canvas = RecordingCanvas::new();

    for _ in 0..frames {
        sim::draw_frame(&mut population, &mut canvas, config.background);
    }
    log::info!(
        "Headless run finished: {} frames, {} circles drawn",
        frames,
        canvas.total_draws
    );

    Ok(HeadlessRun {
        seed: rng_state.seed,
        frames,
        population,
        canvas,
    })
}
