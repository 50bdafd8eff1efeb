//! # Heart Primitive
//!
//! Generates an extruded heart solid from the classic parametric heart
//! curve.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::extrude::{extrude_closed_profile, Profile2D};
use config::constants::MIN_SEGMENTS;
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Parameters for the extruded heart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeartParams {
    /// Uniform scale applied to the curve coordinates
    pub scale: f64,
    /// Extrusion depth along Z, centered around Z=0
    pub depth: f64,
    /// Number of samples around the curve
    pub segments: u32,
}

impl Default for HeartParams {
    fn default() -> Self {
        Self {
            scale: 0.05,
            depth: 0.4,
            segments: 64,
        }
    }
}

/// Point on the closed heart curve at angle `t`.
///
/// The unscaled curve spans roughly [-16, 16] x [-17, 12] and encloses the
/// origin, which the extrusion caps fan from.
fn heart_point(t: f64, scale: f64) -> DVec2 {
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    DVec2::new(x * scale, y * scale)
}

/// Creates an extruded heart mesh.
///
/// The curve is sampled at `segments` equally spaced angles into a closed
/// profile, then extruded front and back with fan caps.
///
/// # Arguments
///
/// * `params` - Shape parameters
///
/// # Returns
///
/// A mesh with `2 * segments + 2` vertices and `4 * segments` triangles.
///
/// # Example
///
/// ```rust
/// use scenegen_mesh::primitives::{create_heart, HeartParams};
///
/// let mesh = create_heart(&HeartParams::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 2 * 64 + 2);
/// assert_eq!(mesh.triangle_count(), 4 * 64);
/// ```
pub fn create_heart(params: &HeartParams) -> Result<Mesh, MeshError> {
    if params.scale <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Heart scale must be positive: {}",
            params.scale
        )));
    }

    if params.segments < MIN_SEGMENTS {
        return Err(MeshError::degenerate(format!(
            "Heart segments must be at least {}: {}",
            MIN_SEGMENTS, params.segments
        )));
    }

    let points = (0..params.segments)
        .map(|i| {
            let t = 2.0 * PI * i as f64 / params.segments as f64;
            heart_point(t, params.scale)
        })
        .collect();

    extrude_closed_profile(&Profile2D::new(points), params.depth)
}
