//! Startup parameters
//!
//! Everything is fixed once the population exists. Values come from the
//! built-in defaults, optionally overlaid by a JSON file, then by command
//! line flags, and are validated once before any ball is created.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::palette::NamedColor;

/// Which leader position a follower sees during a frame
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum LeaderView {
    /// Read the store as it is mid-frame: leaders with a lower index have
    /// already moved this frame, leaders with a higher index have not.
    #[default]
    Live,
    /// Read every leader's position as it was when the frame began.
    PreviousFrame,
}

impl LeaderView {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaderView::Live => "live",
            LeaderView::PreviousFrame => "previous-frame",
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Board width in pixels
    pub width: i32,
    /// Board height in pixels
    pub height: i32,
    /// Number of balls
    pub count: usize,
    /// Target frames per second
    pub fps: u32,
    /// Largest initial speed per axis
    pub velocity_max: i32,
    /// Smallest ball radius (inclusive)
    pub radius_min: i32,
    /// Largest ball radius (inclusive)
    pub radius_max: i32,
    /// Colors a ball may be given
    pub palette: Vec<NamedColor>,
    /// Frame clear color
    pub background: NamedColor,
    /// Window title
    pub title: String,
    /// Leader visibility within a frame
    pub leader_view: LeaderView,
    /// RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            count: BALL_COUNT,
            fps: FPS,
            velocity_max: VELOCITY_MAX,
            radius_min: RADIUS_MIN,
            radius_max: RADIUS_MAX,
            palette: NamedColor::BALL_PALETTE.to_vec(),
            background: NamedColor::RayWhite,
            title: TITLE.to_string(),
            leader_view: LeaderView::Live,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Load a config file; missing fields keep their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject parameters that would make initialization loop forever or
    /// sample from an empty range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::BoardSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.count < 2 {
            return Err(ConfigError::PopulationTooSmall(self.count));
        }
        if self.radius_min <= 0 || self.radius_min > self.radius_max {
            return Err(ConfigError::RadiusRange {
                min: self.radius_min,
                max: self.radius_max,
            });
        }
        if self.velocity_max < 1 {
            return Err(ConfigError::VelocityMax(self.velocity_max));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.fps == 0 {
            return Err(ConfigError::FrameRate(self.fps));
        }
        Ok(())
    }
}
