//! Error types
//!
//! Everything that can fail does so at startup: configuration, population
//! construction, and window/GPU setup. Once the first frame runs, stepping
//! the simulation cannot fail.

use std::fmt;
use std::path::PathBuf;

/// Rejected startup parameters.
#[derive(Debug)]
pub enum ConfigError {
    /// Leader selection needs at least two balls.
    PopulationTooSmall(usize),
    /// `radius_min` must be positive and no larger than `radius_max`.
    RadiusRange { min: i32, max: i32 },
    /// Initial velocity sampling needs a nonzero value to draw.
    VelocityMax(i32),
    /// No colors to pick from.
    EmptyPalette,
    /// Board dimensions must be positive.
    BoardSize { width: i32, height: i32 },
    /// Frame rate must be positive.
    FrameRate(u32),
    /// Not one of the named colors.
    UnknownColor(String),
    /// Config file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// Config file is not valid JSON for `SimConfig`.
    Parse { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::PopulationTooSmall(n) => write!(
                f,
                "Population of {} is too small: each ball needs another ball to follow",
                n
            ),
            ConfigError::RadiusRange { min, max } => {
                write!(f, "Invalid radius range {}..={}: need 0 < min <= max", min, max)
            }
            ConfigError::VelocityMax(v) => {
                write!(f, "Invalid max velocity {}: must be at least 1", v)
            }
            ConfigError::EmptyPalette => write!(f, "Palette is empty"),
            ConfigError::BoardSize { width, height } => write!(
                f,
                "Invalid board size {}x{}: both dimensions must be positive",
                width, height
            ),
            ConfigError::FrameRate(fps) => {
                write!(f, "Invalid frame rate {}: must be positive", fps)
            }
            ConfigError::UnknownColor(name) => write!(f, "Unknown color name \"{}\"", name),
            ConfigError::Io { path, source } => {
                write!(f, "Failed to read config {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "Failed to parse config {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A hand-built population that breaks the store invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopulationError {
    /// Fewer than two balls.
    TooSmall(usize),
    /// Ball follows an index outside the store.
    LeaderOutOfRange { ball: usize, leader: usize },
    /// Ball follows itself.
    SelfLeader(usize),
    /// Ball position lies outside the board.
    OutOfBounds { ball: usize, x: i32, y: i32 },
}

impl fmt::Display for PopulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PopulationError::TooSmall(n) => write!(f, "Population of {} is too small", n),
            PopulationError::LeaderOutOfRange { ball, leader } => {
                write!(f, "Ball {} follows ball {}, which does not exist", ball, leader)
            }
            PopulationError::SelfLeader(ball) => write!(f, "Ball {} follows itself", ball),
            PopulationError::OutOfBounds { ball, x, y } => {
                write!(f, "Ball {} at ({}, {}) is outside the board", ball, x, y)
            }
        }
    }
}

impl std::error::Error for PopulationError {}

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter(wgpu::RequestAdapterError),
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
    /// Surface reports no supported formats for this adapter.
    IncompatibleSurface,
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter(e) => write!(f, "No compatible GPU adapter found: {}", e),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
            GpuError::IncompatibleSurface => {
                write!(f, "Surface is not supported by the selected adapter")
            }
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::NoAdapter(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            GpuError::IncompatibleSurface => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestAdapterError> for GpuError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        GpuError::NoAdapter(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that end a windowed run.
#[derive(Debug)]
pub enum RunError {
    /// Startup parameters were rejected.
    Config(ConfigError),
    /// Failed to create or run the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create the window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
    /// The GPU ran out of memory while presenting.
    OutOfMemory,
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Config(e) => write!(f, "Invalid configuration: {}", e),
            RunError::EventLoop(e) => write!(f, "Event loop error: {}", e),
            RunError::Window(e) => write!(f, "Failed to create window: {}", e),
            RunError::Gpu(e) => write!(f, "GPU error: {}", e),
            RunError::OutOfMemory => write!(f, "GPU out of memory"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::Config(e) => Some(e),
            RunError::EventLoop(e) => Some(e),
            RunError::Window(e) => Some(e),
            RunError::Gpu(e) => Some(e),
            RunError::OutOfMemory => None,
        }
    }
}

impl From<ConfigError> for RunError {
    fn from(e: ConfigError) -> Self {
        RunError::Config(e)
    }
}

impl From<winit::error::EventLoopError> for RunError {
    fn from(e: winit::error::EventLoopError) -> Self {
        RunError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for RunError {
    fn from(e: winit::error::OsError) -> Self {
        RunError::Window(e)
    }
}

impl From<GpuError> for RunError {
    fn from(e: GpuError) -> Self {
        RunError::Gpu(e)
    }
}
