//! WebGPU rendering module
//!
//! Flat-shaded triangle lists built from a game snapshot each frame.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderInitError, RenderState};
pub use vertex::Vertex;
