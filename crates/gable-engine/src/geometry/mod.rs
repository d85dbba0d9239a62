//! Geometry shared between the application and the mesh renderer.
//!
//! Canonical space:
//! - Normalized device coordinates (no camera or projection)
//! - +X right, +Y up, Z is carried through but unused
//!
//! Flattened buffers are laid out for direct upload: three `f32` per vertex,
//! tightly packed, and `u32` indices local to each shape.

mod house;
mod shape;
mod vec3;

pub use house::{DrawRange, House, Part};
pub use shape::Shape;
pub use vec3::Vec3;

/// Number of `f32` components written per vertex by the flatten helpers.
pub const FLOATS_PER_VERTEX: usize = 3;
