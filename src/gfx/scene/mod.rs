//! # Scene
//!
//! The meshes the demo keeps loaded and the rule for which one gets drawn.
//!
//! The lambert shader is paired with the separated-faces cube (hard edges),
//! the wave shader with the conjoint cube so its displacement keeps the
//! surface closed.

pub mod vertex;

use cgmath::Point3;

use crate::controls::{Controls, Shape};
use crate::gfx::geometry::{generate_cube, generate_square, Mesh};

/// Preloaded demo meshes, all centered at the origin
#[derive(Debug, Clone)]
pub struct Scene {
    pub square: Mesh,
    pub cube_separate: Mesh,
    pub cube_cojoint: Mesh,
}

impl Scene {
    /// Generate every mesh the demo can draw
    pub fn load() -> Self {
        let origin = Point3::new(0.0, 0.0, 0.0);
        let scene = Self {
            square: generate_square(origin),
            cube_separate: generate_cube(origin, false),
            cube_cojoint: generate_cube(origin, true),
        };
        log::info!(
            "Loaded scene: square ({} verts), cube ({} verts), cojoint cube ({} verts)",
            scene.square.vertex_count(),
            scene.cube_separate.vertex_count(),
            scene.cube_cojoint.vertex_count()
        );
        scene
    }

    /// The cube matching a topology flag
    pub fn cube(&self, cojoint: bool) -> &Mesh {
        if cojoint {
            &self.cube_cojoint
        } else {
            &self.cube_separate
        }
    }

    /// The mesh to draw for the current control state
    pub fn active_mesh(&self, controls: &Controls) -> &Mesh {
        match controls.shape {
            Shape::Square => &self.square,
            Shape::Cube => self.cube(controls.shader.cube_topology()),
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::ShaderKind;

    #[test]
    fn test_shader_picks_cube_topology() {
        let scene = Scene::load();
        let mut controls = Controls::default();

        assert_eq!(scene.active_mesh(&controls).vertex_count(), 24);

        controls.shader = ShaderKind::Wave;
        assert_eq!(scene.active_mesh(&controls).vertex_count(), 8);
    }

    #[test]
    fn test_square_ignores_shader() {
        let scene = Scene::load();
        for shader in [ShaderKind::Lambert, ShaderKind::Wave] {
            let controls = Controls {
                shape: Shape::Square,
                shader,
                ..Controls::default()
            };
            assert_eq!(scene.active_mesh(&controls), &scene.square);
        }
    }
}
