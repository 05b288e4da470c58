//! Application shell
//!
//! - `window`: winit event loop, GPU setup, and the per-frame redraw
//! - `pacer`: fixed-rate frame scheduling
//! - `headless`: fixed-length runs without a window

pub mod headless;
pub mod pacer;
pub mod window;

pub use headless::{HeadlessRun, run_headless};
pub use pacer::FramePacer;
pub use window::{App, run};
