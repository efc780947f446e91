//! WebGPU rendering module
//!
//! Every frame is rebuilt from the game state as flat-colored triangles in
//! canvas coordinates, then mapped to NDC by the pipeline.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod text;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_frame;
pub use vertex::Vertex;
