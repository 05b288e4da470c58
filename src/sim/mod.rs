//! Deterministic simulation module
//!
//! All ball logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, used once at initialization
//! - Stable iteration order (ascending ball index)
//! - No window or GPU dependencies; drawing goes through `Canvas`

pub mod canvas;
pub mod pursuit;
pub mod random;
pub mod state;
pub mod tick;

pub use canvas::{Canvas, DrawCall, RecordingCanvas};
pub use pursuit::{Board, integrate_position, pursuit_velocity};
pub use random::{RandomSource, RngState, nonzero_step};
pub use state::{Ball, Population};
pub use tick::{draw_frame, present_frame, step_frame};
