//! # Scenegen OBJ
//!
//! Wavefront OBJ export for scenegen meshes.
//!
//! ## Architecture
//!
//! ```text
//! scenegen-mesh (Mesh) → scenegen-obj (OBJ text file)
//! ```
//!
//! The writer is the pipeline's only I/O boundary. Serialization is
//! deterministic: writing the same mesh with the same options twice
//! produces byte-identical output, and the destination file is fully
//! overwritten on every export.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use scenegen_mesh::primitives::{create_twisted_torus, TwistedTorusParams};
//! use scenegen_obj::{write_obj_file, ObjWriteOptions};
//!
//! let mesh = create_twisted_torus(&TwistedTorusParams::default()).unwrap();
//! write_obj_file("twisted_torus.obj", &mesh, &ObjWriteOptions::named("TwistedTorus")).unwrap();
//! ```

pub mod error;
pub mod writer;

pub use error::ObjError;
pub use writer::{write_obj, write_obj_file, ObjWriteOptions};
