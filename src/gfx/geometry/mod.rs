//! # Procedural Geometry Generation
//!
//! This module provides functions to generate the demo's primitive shapes
//! procedurally, so no model files are needed.
//!
//! ## Supported Primitives
//!
//! - **Cube**: half-extent 1, either 24 separated-face vertices (flat shading)
//!   or 8 conjoint corner vertices (smooth shading)
//! - **Square**: half-extent 1 quad in the XY plane
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::Point3;
//! use proc_shapes::gfx::geometry::{generate_cube, generate_square};
//!
//! // Flat-shaded cube at the origin
//! let flat = generate_cube(Point3::new(0.0, 0.0, 0.0), false);
//! assert_eq!(flat.vertex_count(), 24);
//!
//! // Smooth-shaded cube shifted along x
//! let smooth = generate_cube(Point3::new(2.0, 0.0, 0.0), true);
//! assert_eq!(smooth.vertex_count(), 8);
//!
//! let square = generate_square(Point3::new(0.0, 0.0, 0.0));
//! assert_eq!(square.triangle_count(), 2);
//! ```

pub mod primitives;

pub use primitives::*;

use cgmath::Point3;

use crate::gfx::scene::vertex::Vertex;

/// Generated geometry data ready for GPU upload
///
/// Positions and normals are homogeneous 4-vectors: points carry `w = 1`,
/// normals carry `w = 0`. The two arrays are aligned one to one.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Triangle indices (counter-clockwise winding seen from outside)
    pub indices: Vec<u32>,
    /// Vertex positions (x, y, z, 1)
    pub positions: Vec<[f32; 4]>,
    /// Vertex normals (x, y, z, 0)
    pub normals: Vec<[f32; 4]>,
}

impl Mesh {
    /// Index format matching [`Mesh::indices`]
    pub const INDEX_FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint32;

    /// Get the number of vertices in this mesh
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles in this mesh
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Positions as a flat `[x, y, z, w, x, y, z, w, ...]` slice
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Normals as a flat `[x, y, z, w, ...]` slice
    pub fn normals_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Interleave positions and normals into the renderer's vertex format
    pub fn to_vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .map(|(&position, &normal)| Vertex { position, normal })
            .collect()
    }

    /// Interleaved vertex data as raw bytes
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.to_vertices()).to_vec()
    }

    /// Index data as raw bytes
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Shift every position by `offset`; w and normals are untouched.
    pub(crate) fn translate(&mut self, offset: Point3<f32>) {
        for position in &mut self.positions {
            position[0] += offset.x;
            position[1] += offset.y;
            position[2] += offset.z;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_views_match_vertex_count() {
        let cube = generate_cube(Point3::new(0.0, 0.0, 0.0), false);
        assert_eq!(cube.positions_flat().len(), cube.vertex_count() * 4);
        assert_eq!(cube.normals_flat().len(), cube.vertex_count() * 4);
        assert_eq!(&cube.positions_flat()[0..4], &[-1.0, 1.0, 1.0, 1.0]);
        assert_eq!(&cube.normals_flat()[0..4], &[0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_byte_views() {
        let cube = generate_cube(Point3::new(0.0, 0.0, 0.0), true);
        assert_eq!(cube.index_bytes().len(), 36 * 4);
        // 8 vertices * (4 + 4) floats * 4 bytes
        assert_eq!(cube.vertex_bytes().len(), 8 * 32);
    }

    #[test]
    fn test_interleave_keeps_alignment() {
        let cube = generate_cube(Point3::new(1.0, 2.0, 3.0), false);
        let vertices = cube.to_vertices();
        assert_eq!(vertices.len(), 24);
        for (i, vertex) in vertices.iter().enumerate() {
            assert_eq!(vertex.position, cube.positions[i]);
            assert_eq!(vertex.normal, cube.normals[i]);
        }
    }
}
