//! # Car Model
//!
//! Generates a low-poly car as two independent box solids: a wide flat body
//! and a smaller cabin stacked above it.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives::cuboid::create_cuboid;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Parameters for the car model.
///
/// Extents are axis-aligned with Y up. The body and cabin stay disconnected
/// solids; they share an index space but no vertices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarParams {
    /// Minimum corner of the body box
    pub body_min: DVec3,
    /// Maximum corner of the body box
    pub body_max: DVec3,
    /// Minimum corner of the cabin box
    pub cabin_min: DVec3,
    /// Maximum corner of the cabin box
    pub cabin_max: DVec3,
}

impl Default for CarParams {
    fn default() -> Self {
        Self {
            body_min: DVec3::new(-1.0, 0.0, -2.0),
            body_max: DVec3::new(1.0, 1.0, 2.0),
            cabin_min: DVec3::new(-0.6, 1.0, -1.2),
            cabin_max: DVec3::new(0.6, 1.6, 1.2),
        }
    }
}

/// Creates the car body alone.
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles.
pub fn create_car_body(params: &CarParams) -> Result<Mesh, MeshError> {
    create_cuboid(params.body_min, params.body_max)
}

/// Creates the full car model.
///
/// The cabin's triangle indices are offset past the body's vertices so both
/// solids live in one global vertex/face list.
///
/// # Returns
///
/// A mesh with 16 vertices and 24 triangles.
///
/// # Example
///
/// ```rust
/// use scenegen_mesh::primitives::{create_car, CarParams};
///
/// let mesh = create_car(&CarParams::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 16);
/// assert_eq!(mesh.triangle_count(), 24);
/// ```
pub fn create_car(params: &CarParams) -> Result<Mesh, MeshError> {
    let mut mesh = create_car_body(params)?;
    let cabin = create_cuboid(params.cabin_min, params.cabin_max)?;
    mesh.merge(&cabin);
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_body_counts() {
        let mesh = create_car_body(&CarParams::default()).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_car_body_indices_in_range() {
        let mesh = create_car_body(&CarParams::default()).unwrap();
        for tri in mesh.triangles() {
            for &idx in tri {
                assert!(idx < 8);
            }
        }
    }

    #[test]
    fn test_car_counts() {
        let mesh = create_car(&CarParams::default()).unwrap();
        assert_eq!(mesh.vertex_count(), 16);
        assert_eq!(mesh.triangle_count(), 24);
    }

    #[test]
    fn test_car_cabin_indices_offset() {
        let mesh = create_car(&CarParams::default()).unwrap();
        // The last 12 triangles belong to the cabin and must reference only
        // the cabin's 8 vertices
        for tri in &mesh.triangles()[12..] {
            for &idx in tri {
                assert!((8..16).contains(&idx));
            }
        }
    }

    #[test]
    fn test_car_bounding_box() {
        let params = CarParams::default();
        let mesh = create_car(&params).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, params.body_min);
        assert_eq!(max, DVec3::new(1.0, 1.6, 2.0));
    }

    #[test]
    fn test_car_validates() {
        let mesh = create_car(&CarParams::default()).unwrap();
        assert!(mesh.validate());
    }

    #[test]
    fn test_car_degenerate_cabin() {
        let params = CarParams {
            cabin_max: DVec3::new(-0.6, 1.0, -1.2), // Equal to cabin_min
            cabin_min: DVec3::new(-0.6, 1.0, -1.2),
            ..Default::default()
        };
        assert!(create_car(&params).is_err());
    }
}
