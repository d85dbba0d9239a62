//! Gable engine crate.
//!
//! House geometry plus the platform and GPU runtime pieces the demo runs on:
//! a single-window winit loop, a wgpu device/surface, keyboard input and a
//! mesh renderer with triangle, line and point modes.

pub mod core;
pub mod device;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod window;
