//! wgpu rendering module
//!
//! Balls are tessellated into triangle fans on the CPU and drawn with a
//! single flat-color pipeline.

pub mod frame;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use frame::{FrameBatch, Viewport};
pub use pipeline::RenderState;
pub use vertex::Vertex;
