//! # Graphics Module
//!
//! Geometry generation and the renderer-facing data layout.
//!
//! - **Geometry** ([`geometry`]) - procedural primitives producing [`geometry::Mesh`] values
//! - **Scene** ([`scene`]) - the demo's preloaded meshes and vertex layout
//!
//! Nothing in here touches a graphics context. A renderer takes the
//! generated arrays (or the interleaved bytes from [`scene::vertex::Vertex`])
//! and owns every buffer it creates from them.

pub mod geometry;
pub mod scene;
