//! Paint types.
//!
//! Colors are linear RGBA `f32`, uploaded unchanged to shader uniforms and used
//! as clear values.

mod color;

pub use color::Color;
