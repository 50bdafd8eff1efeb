//! # Closed-Profile Extrusion
//!
//! Extrudes a closed 2D profile along the Z axis into a capped solid.
//!
//! ## Algorithm
//!
//! 1. The rim is emitted twice: front copy at `+depth/2`, back copy at
//!    `-depth/2`
//! 2. One center vertex per cap; each cap is a triangle fan from its center
//!    through consecutive rim points, wrapping at the end
//! 3. The back cap winds opposite to the front cap so both face outward
//! 4. The side wall is a periodic ring of quads, two triangles each
//!
//! The caps fan from the profile-plane origin, so the profile must enclose
//! the origin for the caps to be well-formed.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::MIN_SEGMENTS;
use glam::{DVec2, DVec3};
use std::f64::consts::PI;

/// A closed 2D profile for extrusion.
///
/// The boundary is implicitly closed: the last point connects back to the
/// first.
#[derive(Debug, Clone)]
pub struct Profile2D {
    /// Boundary vertices in emission order
    pub points: Vec<DVec2>,
}

impl Profile2D {
    /// Creates a profile from boundary vertices.
    pub fn new(points: Vec<DVec2>) -> Self {
        Self { points }
    }

    /// Creates a circular profile centered on the origin.
    ///
    /// # Arguments
    ///
    /// * `radius` - Circle radius
    /// * `segments` - Number of samples around the circle
    pub fn circle(radius: f64, segments: u32) -> Self {
        let mut points = Vec::with_capacity(segments as usize);
        for i in 0..segments {
            let angle = 2.0 * PI * (i as f64) / (segments as f64);
            points.push(DVec2::new(radius * angle.cos(), radius * angle.sin()));
        }
        Self::new(points)
    }

    /// Returns the number of boundary vertices.
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }
}

/// Extrudes a closed profile along the Z axis.
///
/// # Arguments
///
/// * `profile` - The closed 2D profile, enclosing the origin
/// * `depth` - Extrusion depth, centered around Z=0
///
/// # Returns
///
/// A mesh with `2 * n + 2` vertices (front rim, back rim, two cap centers)
/// and `4 * n` triangles (`n` per cap, `2 * n` for the side wall), where
/// `n` is the profile vertex count.
///
/// # Example
///
/// ```rust
/// use scenegen_mesh::ops::extrude::{extrude_closed_profile, Profile2D};
///
/// let disc = Profile2D::circle(5.0, 32);
/// let mesh = extrude_closed_profile(&disc, 2.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 2 * 32 + 2);
/// assert_eq!(mesh.triangle_count(), 4 * 32);
/// ```
pub fn extrude_closed_profile(profile: &Profile2D, depth: f64) -> Result<Mesh, MeshError> {
    if depth <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Extrusion depth must be positive: {}",
            depth
        )));
    }

    let n = profile.vertex_count();
    if n < MIN_SEGMENTS as usize {
        return Err(MeshError::degenerate(format!(
            "Profile must have at least {} vertices: {}",
            MIN_SEGMENTS, n
        )));
    }

    let half = depth / 2.0;
    let mut mesh = Mesh::with_capacity(2 * n + 2, 4 * n);

    // Front rim, then back rim
    for z in [half, -half] {
        for p in &profile.points {
            mesh.add_vertex(DVec3::new(p.x, p.y, z));
        }
    }

    let front_center = mesh.add_vertex(DVec3::new(0.0, 0.0, half));
    let back_center = mesh.add_vertex(DVec3::new(0.0, 0.0, -half));

    // Front cap: fan from the front center, wrapping at the rim end
    for i in 0..n {
        let a = i as u32;
        let b = ((i + 1) % n) as u32;
        mesh.add_triangle(a, b, front_center);
    }

    // Back cap: reversed winding so it faces away from the front cap
    for i in 0..n {
        let a = (n + i) as u32;
        let b = (n + (i + 1) % n) as u32;
        mesh.add_triangle(b, a, back_center);
    }

    // Side wall: one quad per rim edge, split into two triangles
    for i in 0..n {
        let a1 = i as u32;
        let a2 = ((i + 1) % n) as u32;
        let b1 = (n + i) as u32;
        let b2 = (n + (i + 1) % n) as u32;

        mesh.add_triangle(a1, a2, b2);
        mesh.add_triangle(a1, b2, b1);
    }

    Ok(mesh)
}
