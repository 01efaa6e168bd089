//! # Vertex Data Structures
//!
//! GPU-compatible vertex format for the meshes produced by
//! [`crate::gfx::geometry`].

/// A vertex with homogeneous position and normal data.
///
/// # Memory Layout
///
/// The `#[repr(C)]` attribute ensures the struct has a C-compatible memory
/// layout, which is required for GPU buffer operations. Each field is four
/// `f32`s, so the stride is 32 bytes.
///
/// # Examples
///
/// ```no_run
/// use proc_shapes::gfx::scene::vertex::Vertex;
///
/// let vertex = Vertex {
///     position: [0.0, 1.0, 0.0, 1.0],
///     normal: [0.0, 1.0, 0.0, 0.0],
/// };
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Homogeneous position [x, y, z, 1]
    pub position: [f32; 4],
    /// Normal direction [nx, ny, nz, 0]
    pub normal: [f32; 4],
}

impl Vertex {
    /// Returns the vertex buffer layout for wgpu rendering.
    ///
    /// - Attribute 0: Position (Float32x4) at shader location 0
    /// - Attribute 1: Normal (Float32x4) at shader location 1
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x4,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 4]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_struct() {
        let layout = Vertex::desc();
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[1].offset, 16);
        assert_eq!(layout.attributes[1].shader_location, 1);
    }
}
