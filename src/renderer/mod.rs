//! Rendering module
//!
//! `scene` turns world state into colored triangles in screen pixels;
//! `pipeline` uploads and draws them with WebGPU.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod sprite;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::Scene;
pub use sprite::Sprite;
pub use vertex::Vertex;
