//! Procedural geometry: boxes, planes and parametric surfaces.
//!
//! All shapes are centred on the origin with CCW front faces and UVs in [0, 1].

use std::f32::consts::{PI, TAU};

use anyhow::{Result, bail};
use corelib::Vec3;

use crate::mesh::{MeshData, MeshVertex};

/// Step used for finite-difference normals on parametric surfaces.
const PARAMETRIC_EPS: f32 = 1e-4;

/// Box faces as (normal, u axis, v axis) with `u x v == normal`.
const BOX_FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::NEG_Z, Vec3::Y),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::X, Vec3::NEG_Z),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
];

/// Box of `width` (x) by `height` (y) by `depth` (z): 24 vertices, 12 triangles.
pub fn box_geometry(width: f32, height: f32, depth: f32) -> MeshData {
    let half = Vec3::new(width, height, depth) * 0.5;
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, u, v) in BOX_FACES {
        let center = normal * normal.abs().dot(half);
        let hu = u * u.abs().dot(half);
        let hv = v * v.abs().dot(half);
        push_quad(&mut vertices, &mut indices, center, hu, hv, normal);
    }

    MeshData::new(vertices, indices)
}

/// Plane in XY facing +Z: 4 vertices, 2 triangles.
pub fn plane_geometry(width: f32, height: f32) -> MeshData {
    let mut vertices = Vec::with_capacity(4);
    let mut indices = Vec::with_capacity(6);
    push_quad(
        &mut vertices,
        &mut indices,
        Vec3::ZERO,
        Vec3::X * (width * 0.5),
        Vec3::Y * (height * 0.5),
        Vec3::Z,
    );
    MeshData::new(vertices, indices)
}

/// Quad spanning `center ± hu ± hv`, corners in CCW order starting bottom-left.
fn push_quad(
    vertices: &mut Vec<MeshVertex>,
    indices: &mut Vec<u32>,
    center: Vec3,
    hu: Vec3,
    hv: Vec3,
    normal: Vec3,
) {
    let base = vertices.len() as u32;
    let corners = [
        (center - hu - hv, [0.0, 0.0]),
        (center + hu - hv, [1.0, 0.0]),
        (center + hu + hv, [1.0, 1.0]),
        (center - hu + hv, [0.0, 1.0]),
    ];
    for (p, uv) in corners {
        vertices.push(MeshVertex::new(p.to_array(), normal.to_array(), uv));
    }
    indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}

/// Sample `f(u, v)` on a `(slices + 1) x (stacks + 1)` grid over [0, 1]².
///
/// Normals come from finite differences along u and v. Degenerate points
/// (e.g. sphere poles) get a zero normal.
pub fn parametric_geometry(
    f: impl Fn(f32, f32) -> Vec3,
    slices: u32,
    stacks: u32,
) -> Result<MeshData> {
    if slices == 0 || stacks == 0 {
        bail!("Parametric geometry needs at least one slice and stack, got {slices}x{stacks}");
    }

    let row = slices + 1;
    let mut vertices = Vec::with_capacity((row * (stacks + 1)) as usize);
    for i in 0..=stacks {
        let v = i as f32 / stacks as f32;
        for j in 0..=slices {
            let u = j as f32 / slices as f32;
            let p = f(u, v);
            let pu = if u - PARAMETRIC_EPS >= 0.0 {
                p - f(u - PARAMETRIC_EPS, v)
            } else {
                f(u + PARAMETRIC_EPS, v) - p
            };
            let pv = if v - PARAMETRIC_EPS >= 0.0 {
                p - f(u, v - PARAMETRIC_EPS)
            } else {
                f(u, v + PARAMETRIC_EPS) - p
            };
            let normal = pu.cross(pv).normalize_or_zero();
            vertices.push(MeshVertex::new(p.to_array(), normal.to_array(), [u, v]));
        }
    }

    let mut indices = Vec::with_capacity((6 * slices * stacks) as usize);
    for i in 0..stacks {
        for j in 0..slices {
            let a = i * row + j;
            let b = i * row + j + 1;
            let c = (i + 1) * row + j + 1;
            let d = (i + 1) * row + j;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    Ok(MeshData::new(vertices, indices))
}

/// UV sphere of `radius`. Segment counts are raised to at least 3 around and 2 down.
pub fn sphere_geometry(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let slices = width_segments.max(3);
    let stacks = height_segments.max(2);
    let surface = |u: f32, v: f32| {
        // Clockwise seen from +y so that u x v points out of the sphere.
        let phi = -u * TAU;
        let theta = v * PI;
        Vec3::new(
            -radius * phi.cos() * theta.sin(),
            radius * theta.cos(),
            radius * phi.sin() * theta.sin(),
        )
    };

    // Both counts are clamped above zero, so this cannot fail.
    let mut mesh = parametric_geometry(surface, slices, stacks).unwrap_or_default();
    // Exact normals; finite differences degenerate at the poles.
    for vertex in &mut mesh.vertices {
        let p = Vec3::from_array(vertex.position);
        vertex.normal = p.normalize_or_zero().to_array();
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_eq(a: [f32; 3], b: [f32; 3]) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < 1e-4, "{a:?} != {b:?}");
        }
    }

    #[test]
    fn box_has_expected_layout_and_extent() {
        let mesh = box_geometry(2.0, 4.0, 6.0);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
        assert!(mesh.is_valid());
        let (lo, hi) = mesh.bounds().expect("non-empty box");
        assert_eq!(lo, [-1.0, -2.0, -3.0]);
        assert_eq!(hi, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn box_faces_wind_towards_their_normals() {
        let mesh = box_geometry(1.0, 1.0, 1.0);
        for tri in mesh.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.vertices[i as usize]);
            let pa = Vec3::from_array(a.position);
            let face = (Vec3::from_array(b.position) - pa).cross(Vec3::from_array(c.position) - pa);
            assert!(face.normalize().dot(Vec3::from_array(a.normal)) > 0.99);
            // Vertices on a face sit on the outside.
            assert!(pa.dot(Vec3::from_array(a.normal)) > 0.0);
        }
    }

    #[test]
    fn plane_faces_positive_z() {
        let mesh = plane_geometry(3.0, 1.0);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.vertices.iter().all(|v| v.normal == [0.0, 0.0, 1.0]));
        assert_eq!(mesh.bounds(), Some(([-1.5, -0.5, 0.0], [1.5, 0.5, 0.0])));
    }

    #[test]
    fn parametric_grid_counts_and_normals() {
        let mesh = parametric_geometry(|u, v| Vec3::new(u, v, 0.0), 4, 3).expect("grid");
        assert_eq!(mesh.vertices.len(), 5 * 4);
        assert_eq!(mesh.indices.len(), 6 * 4 * 3);
        assert!(mesh.is_valid());
        for v in &mesh.vertices {
            assert_vec_eq(v.normal, [0.0, 0.0, 1.0]);
            assert_eq!([v.position[0], v.position[1]], v.uv);
        }
    }

    #[test]
    fn parametric_rejects_empty_grid() {
        assert!(parametric_geometry(|u, v| Vec3::new(u, v, 0.0), 0, 3).is_err());
        assert!(parametric_geometry(|u, v| Vec3::new(u, v, 0.0), 3, 0).is_err());
    }

    #[test]
    fn sphere_vertices_lie_on_radius() {
        let mesh = sphere_geometry(2.0, 8, 6);
        assert_eq!(mesh.vertices.len(), 9 * 7);
        for v in &mesh.vertices {
            let p = Vec3::from_array(v.position);
            assert!((p.length() - 2.0).abs() < 1e-4);
            assert_vec_eq(v.normal, (p / 2.0).to_array());
        }
        // Degenerate counts are raised.
        assert_eq!(sphere_geometry(1.0, 0, 0).vertices.len(), 4 * 3);
    }

    #[test]
    fn sphere_triangles_face_outwards() {
        let mesh = sphere_geometry(1.0, 16, 8);
        let mut checked = 0;
        for tri in mesh.indices.chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]]
                .map(|i| Vec3::from_array(mesh.vertices[i as usize].position));
            let face = (b - a).cross(c - a);
            // Pole rows collapse to a point.
            if face.length() < 1e-6 {
                continue;
            }
            let centroid = (a + b + c) / 3.0;
            assert!(face.dot(centroid) > 0.0, "inward triangle {tri:?}");
            checked += 1;
        }
        assert!(checked > 0);
    }
}
