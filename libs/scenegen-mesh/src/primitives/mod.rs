//! # Primitives
//!
//! Mesh generation for scene primitives (twisted torus, cuboid, car, heart).

pub mod car;
pub mod cuboid;
pub mod heart;
pub mod torus;

pub use car::{create_car, create_car_body, CarParams};
pub use cuboid::create_cuboid;
pub use heart::{create_heart, HeartParams};
pub use torus::{create_twisted_torus, TwistedTorusParams};
