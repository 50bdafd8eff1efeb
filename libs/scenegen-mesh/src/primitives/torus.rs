//! # Twisted Torus Primitive
//!
//! Generates mesh for a torus whose minor circle twists around the major
//! circle.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::MIN_SEGMENTS;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Parameters for the twisted torus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwistedTorusParams {
    /// Distance from the torus center to the minor-circle center
    pub major_radius: f64,
    /// Radius of the minor circle
    pub minor_radius: f64,
    /// Number of minor-circle rotations per major revolution
    pub twist: f64,
    /// Steps around the major circle
    pub segments: u32,
    /// Steps around the minor circle
    pub rings: u32,
}

impl Default for TwistedTorusParams {
    fn default() -> Self {
        Self {
            major_radius: 1.0,
            minor_radius: 0.3,
            twist: 3.0,
            segments: 100,
            rings: 30,
        }
    }
}

/// Creates a twisted torus mesh.
///
/// The surface is a segments x rings grid of parametric vertices. The minor
/// angle is offset by `twist * theta`, so the tube's cross-section rotates
/// as it travels around the major circle. Both grid directions wrap, giving
/// a closed seamless surface.
///
/// # Arguments
///
/// * `params` - Shape parameters
///
/// # Returns
///
/// A mesh with `segments * rings` vertices and `2 * segments * rings`
/// triangles.
///
/// # Example
///
/// ```rust
/// use scenegen_mesh::primitives::{create_twisted_torus, TwistedTorusParams};
///
/// let mesh = create_twisted_torus(&TwistedTorusParams::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 100 * 30);
/// assert_eq!(mesh.triangle_count(), 2 * 100 * 30);
/// ```
pub fn create_twisted_torus(params: &TwistedTorusParams) -> Result<Mesh, MeshError> {
    if params.major_radius <= 0.0 || params.minor_radius <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Torus radii must be positive: R={}, r={}",
            params.major_radius, params.minor_radius
        )));
    }

    if params.segments < MIN_SEGMENTS || params.rings < MIN_SEGMENTS {
        return Err(MeshError::degenerate(format!(
            "Torus segments and rings must be at least {}: segments={}, rings={}",
            MIN_SEGMENTS, params.segments, params.rings
        )));
    }

    let segments = params.segments as usize;
    let rings = params.rings as usize;

    let mut mesh = Mesh::with_capacity(segments * rings, segments * rings * 2);

    // Generate vertices ring-by-ring along the major circle
    for i in 0..segments {
        let theta = 2.0 * PI * i as f64 / segments as f64;
        for j in 0..rings {
            let phi = 2.0 * PI * j as f64 / rings as f64;
            // Minor angle offset by the accumulated twist
            let phi_twist = phi + params.twist * theta;

            let radial = params.major_radius + params.minor_radius * phi_twist.cos();
            mesh.add_vertex(DVec3::new(
                radial * theta.cos(),
                radial * theta.sin(),
                params.minor_radius * phi_twist.sin(),
            ));
        }
    }

    // Generate faces: one quad per grid cell, both indices wrapping
    for i in 0..segments {
        let next_i = (i + 1) % segments;
        for j in 0..rings {
            let next_j = (j + 1) % rings;

            let a = (i * rings + j) as u32;
            let b = (next_i * rings + j) as u32;
            let c = (next_i * rings + next_j) as u32;
            let d = (i * rings + next_j) as u32;

            mesh.add_triangle(a, b, c);
            mesh.add_triangle(a, c, d);
        }
    }

    Ok(mesh)
}
