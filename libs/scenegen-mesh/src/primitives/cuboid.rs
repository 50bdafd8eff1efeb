//! # Cuboid Primitive
//!
//! Generates mesh for axis-aligned box shapes from explicit extents.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Corner selectors for a box, bottom face first.
///
/// Each entry picks the min (0) or max (1) extent per axis. The ordering
/// matches the indices used by [`CUBOID_TRIANGLES`].
const CUBOID_CORNERS: [[usize; 3]; 8] = [
    [0, 0, 0], // 0: left-front-bottom
    [1, 0, 0], // 1: right-front-bottom
    [1, 1, 0], // 2: right-back-bottom
    [0, 1, 0], // 3: left-back-bottom
    [0, 0, 1], // 4: left-front-top
    [1, 0, 1], // 5: right-front-top
    [1, 1, 1], // 6: right-back-top
    [0, 1, 1], // 7: left-back-top
];

/// Two triangles per face, counter-clockwise winding for outward normals.
const CUBOID_TRIANGLES: [[u32; 3]; 12] = [
    [0, 2, 1], // bottom (z = min.z)
    [0, 3, 2],
    [4, 5, 6], // top (z = max.z)
    [4, 6, 7],
    [0, 1, 5], // front (y = min.y)
    [0, 5, 4],
    [2, 3, 7], // back (y = max.y)
    [2, 7, 6],
    [3, 0, 4], // left (x = min.x)
    [3, 4, 7],
    [1, 2, 6], // right (x = max.x)
    [1, 6, 5],
];

/// Creates an axis-aligned cuboid mesh from explicit extents.
///
/// # Arguments
///
/// * `min` - Minimum corner
/// * `max` - Maximum corner, must be strictly greater per axis
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use scenegen_mesh::primitives::create_cuboid;
/// use glam::DVec3;
///
/// let mesh = create_cuboid(DVec3::ZERO, DVec3::splat(10.0)).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_cuboid(min: DVec3, max: DVec3) -> Result<Mesh, MeshError> {
    if max.x <= min.x || max.y <= min.y || max.z <= min.z {
        return Err(MeshError::degenerate(format!(
            "Cuboid extents must satisfy min < max per axis: min={:?}, max={:?}",
            min, max
        )));
    }

    let mut mesh = Mesh::with_capacity(8, 12);
    let bounds = [min, max];

    for corner in CUBOID_CORNERS {
        mesh.add_vertex(DVec3::new(
            bounds[corner[0]].x,
            bounds[corner[1]].y,
            bounds[corner[2]].z,
        ));
    }

    for tri in CUBOID_TRIANGLES {
        mesh.add_triangle(tri[0], tri[1], tri[2]);
    }

    Ok(mesh)
}
