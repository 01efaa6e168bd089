//! # Primitive Shape Generation
//!
//! This module contains functions to generate the demo's primitive shapes.
//! Every shape has half-extent 1 and is translated to a caller-supplied center.

use cgmath::{InnerSpace, Point3, Vector3};

use super::Mesh;

/// Fan pattern splitting a face quad into two triangles
const QUAD_FAN: [u32; 6] = [0, 1, 2, 0, 2, 3];

/// Separated-faces cube: 4 corners per face, wound counter-clockwise seen from outside
const CUBE_FACES: [([[f32; 3]; 4], [f32; 3]); 6] = [
    // Front face
    ([[-1.0, 1.0, 1.0], [-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0]], [0.0, 0.0, 1.0]),
    // Back face
    ([[-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0], [1.0, -1.0, -1.0]], [0.0, 0.0, -1.0]),
    // Right face
    ([[1.0, -1.0, 1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0]], [1.0, 0.0, 0.0]),
    // Left face
    ([[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]], [-1.0, 0.0, 0.0]),
    // Top face
    ([[1.0, 1.0, -1.0], [-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [1.0, 1.0, 1.0]], [0.0, 1.0, 0.0]),
    // Bottom face
    ([[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]], [0.0, -1.0, 0.0]),
];

/// Conjoint cube corners, shared by the three faces meeting at each
const CUBE_CORNERS: [[f32; 3]; 8] = [
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, -1.0, -1.0],
    [-1.0, 1.0, -1.0],
];

#[rustfmt::skip]
const CUBE_CORNER_INDICES: [u32; 36] = [
    0, 1, 2, 0, 2, 3, // front
    1, 4, 5, 1, 5, 2, // right
    4, 6, 7, 4, 7, 5, // back
    6, 0, 3, 6, 3, 7, // left
    3, 2, 5, 3, 5, 7, // top
    0, 6, 4, 0, 4, 1, // bottom
];

/// Parameters for a cube mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeSpec {
    /// Point every vertex is translated to
    pub center: Point3<f32>,
    /// Share corner vertices between faces (smooth normals) instead of
    /// giving each face its own four (flat normals)
    pub cojoint: bool,
}

impl CubeSpec {
    pub fn new(center: Point3<f32>, cojoint: bool) -> Self {
        Self { center, cojoint }
    }

    /// Generate the mesh described by this spec
    pub fn generate(&self) -> Mesh {
        generate_cube(self.center, self.cojoint)
    }
}

impl Default for CubeSpec {
    fn default() -> Self {
        Self::new(Point3::new(0.0, 0.0, 0.0), false)
    }
}

/// Generate a cube with half-extent 1 centered at `center`
///
/// With `cojoint == false` each face has its own four vertices and a constant
/// axis-aligned normal: 24 vertices. With `cojoint == true` the 8 corners are
/// shared and each normal points along the corner's diagonal. Both produce 36
/// indices. Non-finite centers pass straight through to the positions.
pub fn generate_cube(center: Point3<f32>, cojoint: bool) -> Mesh {
    let mut mesh = if cojoint {
        conjoint_cube()
    } else {
        separated_cube()
    };
    mesh.translate(center);

    log::debug!(
        "Created cube (cojoint: {}, vertices: {}, indices: {})",
        cojoint,
        mesh.vertex_count(),
        mesh.indices.len()
    );
    mesh
}

fn separated_cube() -> Mesh {
    let mut mesh = Mesh {
        indices: Vec::with_capacity(36),
        positions: Vec::with_capacity(24),
        normals: Vec::with_capacity(24),
    };

    for (face, (corners, normal)) in CUBE_FACES.iter().enumerate() {
        let base = face as u32 * 4;
        mesh.indices.extend(QUAD_FAN.iter().map(|i| base + i));
        for corner in corners {
            mesh.positions.push([corner[0], corner[1], corner[2], 1.0]);
            mesh.normals.push([normal[0], normal[1], normal[2], 0.0]);
        }
    }

    mesh
}

fn conjoint_cube() -> Mesh {
    let positions = CUBE_CORNERS
        .iter()
        .map(|c| [c[0], c[1], c[2], 1.0])
        .collect();
    let normals = CUBE_CORNERS
        .iter()
        .map(|&c| {
            // w is 0 for directions, so normalizing xyz alone is the same as
            // normalizing the full 4-vector
            let n = Vector3::from(c).normalize();
            [n.x, n.y, n.z, 0.0]
        })
        .collect();

    Mesh {
        indices: CUBE_CORNER_INDICES.to_vec(),
        positions,
        normals,
    }
}

/// Generate a square with half-extent 1 in the XY plane, facing +Z
pub fn generate_square(center: Point3<f32>) -> Mesh {
    let corners = [[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0]];

    let mut mesh = Mesh {
        indices: QUAD_FAN.to_vec(),
        positions: corners.iter().map(|c| [c[0], c[1], 0.0, 1.0]).collect(),
        normals: vec![[0.0, 0.0, 1.0, 0.0]; 4],
    };
    mesh.translate(center);

    log::debug!("Created square at ({}, {}, {})", center.x, center.y, center.z);
    mesh
}
