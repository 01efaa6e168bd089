// src/lib.rs
//! proc-shapes
//!
//! Procedural primitive meshes (a dual-topology cube and a unit square) and
//! the plain-data side of the shader demo that draws them.

pub mod controls;
pub mod gfx;
pub mod performance;

// Re-export main types for convenience
pub use controls::{ControlAction, Controls, ControlsError, ShaderKind, Shape};
pub use gfx::geometry::{generate_cube, generate_square, CubeSpec, Mesh};
pub use gfx::scene::Scene;
