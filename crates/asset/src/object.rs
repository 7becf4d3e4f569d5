//! Scene meshes: geometry + material + placement, and factories for common ones.

use std::sync::Arc;

use anyhow::Result;
use corelib::Vec3;
use corelib::transform::Transform;

use crate::material::{BasicMaterial, Color};
use crate::mesh::MeshData;
use crate::primitives::{box_geometry, parametric_geometry, plane_geometry};
use crate::texture::TextureData;

pub const DEFAULT_CUBE_LENGTH: f32 = 1.0;
pub const DEFAULT_COLOR: u32 = 0xffffff;

/// A drawable object placed in the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    pub geometry: MeshData,
    pub material: BasicMaterial,
    pub transform: Transform,
}

impl Mesh {
    /// Placed at the origin with identity rotation and scale.
    pub fn new(geometry: MeshData, material: BasicMaterial) -> Self {
        Self {
            geometry,
            material,
            transform: Transform::identity(),
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}

/// Cube with edge `length` and a flat `0xRRGGBB` color.
pub fn create_mesh_basic_cube(length: f32, color: u32) -> Mesh {
    create_mesh_basic_box(length, length, length, color)
}

/// White unit cube.
pub fn basic_cube() -> Mesh {
    create_mesh_basic_cube(DEFAULT_CUBE_LENGTH, DEFAULT_COLOR)
}

pub fn create_mesh_basic_box(width: f32, height: f32, depth: f32, color: u32) -> Mesh {
    Mesh::new(
        box_geometry(width, height, depth),
        BasicMaterial::with_color(Color::from_hex(color)),
    )
}

pub fn create_textured_box(width: f32, height: f32, depth: f32, texture: Arc<TextureData>) -> Mesh {
    Mesh::new(
        box_geometry(width, height, depth),
        BasicMaterial::with_map(texture),
    )
}

pub fn create_textured_plane(width: f32, height: f32, texture: Arc<TextureData>) -> Mesh {
    Mesh::new(plane_geometry(width, height), BasicMaterial::with_map(texture))
}

/// Flat-colored mesh over the surface `f(u, v)`, see [`parametric_geometry`].
pub fn create_parametric_mesh(
    f: impl Fn(f32, f32) -> Vec3,
    slices: u32,
    stacks: u32,
    color: u32,
) -> Result<Mesh> {
    let geometry = parametric_geometry(f, slices, stacks)?;
    log::debug!(
        "Parametric mesh {}x{}: {} vertices, {} triangles",
        slices,
        stacks,
        geometry.vertices.len(),
        geometry.triangle_count()
    );
    Ok(Mesh::new(
        geometry,
        BasicMaterial::with_color(Color::from_hex(color)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cube_is_white_unit_cube() {
        let cube = basic_cube();
        assert_eq!(cube.material.color, Color::WHITE);
        assert!(!cube.material.is_textured());
        assert_eq!(
            cube.geometry.bounds(),
            Some(([-0.5, -0.5, -0.5], [0.5, 0.5, 0.5]))
        );
        assert_eq!(cube.transform, Transform::identity());
    }

    #[test]
    fn cube_uses_length_and_color() {
        let cube = create_mesh_basic_cube(3.0, 0x00ff00);
        assert_eq!(cube.material.color, Color::rgb(0.0, 1.0, 0.0));
        assert_eq!(
            cube.geometry.bounds(),
            Some(([-1.5, -1.5, -1.5], [1.5, 1.5, 1.5]))
        );
    }

    #[test]
    fn textured_meshes_share_the_texture() {
        let tex = Arc::new(TextureData::checkerboard(8, 2));
        let boxed = create_textured_box(1.0, 2.0, 3.0, Arc::clone(&tex));
        let plane = create_textured_plane(4.0, 4.0, Arc::clone(&tex));
        assert!(boxed.material.is_textured());
        assert_eq!(boxed.material.color, Color::WHITE);
        assert_eq!(plane.geometry.triangle_count(), 2);
        assert_eq!(Arc::strong_count(&tex), 3);
    }

    #[test]
    fn parametric_mesh_propagates_errors() {
        let flat = |u: f32, v: f32| Vec3::new(u, 0.0, v);
        let mesh = create_parametric_mesh(flat, 2, 2, 0xff0000).expect("valid grid");
        assert_eq!(mesh.geometry.vertices.len(), 9);
        assert!(create_parametric_mesh(flat, 0, 2, 0xff0000).is_err());
    }

    #[test]
    fn with_transform_places_mesh() {
        let t = Transform::identity().translated(Vec3::new(0.0, 1.0, 0.0));
        let mesh = basic_cube().with_transform(t);
        assert_eq!(mesh.transform.position, Vec3::Y);
    }
}
