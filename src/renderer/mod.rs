//! WebGPU rendering module
//!
//! Draws each entity as one transformed unit quad. The simulation never
//! touches GPU types; the bridge is three `Mat4` transforms per frame.

pub mod pipeline;
pub mod transform;
pub mod vertex;

pub use pipeline::{DRAW_COUNT, RenderState};
pub use transform::entity_transform;
pub use vertex::Vertex;
