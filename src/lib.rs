//! Balls and their admirers
//!
//! Core modules:
//! - `sim`: Deterministic simulation (population, pursuit rule, frame step)
//! - `renderer`: wgpu rendering pipeline
//! - `app`: Native window shell and frame pacing
//! - `config`: Startup parameters and validation

pub mod app;
pub mod config;
pub mod error;
pub mod palette;
pub mod renderer;
pub mod sim;

pub use config::{LeaderView, SimConfig};
pub use error::{ConfigError, GpuError, PopulationError, RunError};
pub use palette::NamedColor;

/// Simulation defaults
pub mod consts {
    /// Board dimensions in pixels
    pub const BOARD_WIDTH: i32 = 400;
    pub const BOARD_HEIGHT: i32 = 400;

    /// Window title
    pub const TITLE: &str = "Balls and their admirers";

    /// Number of balls on the board
    pub const BALL_COUNT: usize = 100;

    /// Target frames per second
    pub const FPS: u32 = 60;

    /// Largest initial speed per axis
    pub const VELOCITY_MAX: i32 = 5;

    /// Ball radius bounds (inclusive)
    pub const RADIUS_MIN: i32 = 5;
    pub const RADIUS_MAX: i32 = 20;
}
