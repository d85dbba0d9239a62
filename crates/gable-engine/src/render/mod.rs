//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers) and record into a
//! [`RenderTarget`] handed out by the frame context.
//!
//! Convention:
//! - CPU geometry is already in normalized device coordinates.
//! - Vertex shaders pass positions through unchanged.

mod ctx;
mod mesh;
mod mode;
mod shader;

#[cfg(test)]
pub(crate) mod testing;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::MeshRenderer;
pub use mode::RenderMode;
