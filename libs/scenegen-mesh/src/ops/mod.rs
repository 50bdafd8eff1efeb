//! # Operations
//!
//! Mesh-producing operations not tied to a single primitive.

pub mod extrude;

pub use extrude::{extrude_closed_profile, Profile2D};
