//! # Scenegen Mesh
//!
//! Procedural triangle-mesh generation for simple scene assets.
//!
//! ## Architecture
//!
//! ```text
//! shape parameters → scenegen-mesh (Mesh) → scenegen-obj (OBJ file)
//! ```
//!
//! Every generator is a pure function: the same parameters always produce
//! the same vertex and triangle sequences. Vertices are emitted before any
//! triangle that references them, and each topology's winding convention is
//! fixed so exported faces keep their outward orientation.
//!
//! ## Usage
//!
//! ```rust
//! use scenegen_mesh::primitives::{create_twisted_torus, TwistedTorusParams};
//!
//! let mesh = create_twisted_torus(&TwistedTorusParams::default()).unwrap();
//! assert_eq!(mesh.vertex_count(), 100 * 30);
//! ```

pub mod error;
pub mod mesh;
pub mod ops;
pub mod primitives;

pub use error::MeshError;
pub use mesh::Mesh;
