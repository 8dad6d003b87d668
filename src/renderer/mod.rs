//! WebGPU rendering module
//!
//! Flat-colored triangle lists built per frame from the game state.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
