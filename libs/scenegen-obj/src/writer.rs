//! # Wavefront OBJ Writer
//!
//! Serializes a mesh to the line-oriented Wavefront OBJ text format.
//!
//! Only the subset the scene assets need is emitted: an optional `o` object
//! name, an optional `# color R G B` display hint for viewers, `v` position
//! lines at fixed precision, and triangle `f` lines with 1-based indices.
//! Meshes carrying normals additionally get `vn` lines and the `f a//a`
//! reference form.

use crate::error::ObjError;
use config::constants::OBJ_POSITION_DECIMALS;
use scenegen_mesh::Mesh;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Options controlling OBJ output.
#[derive(Debug, Clone)]
pub struct ObjWriteOptions {
    /// Object name emitted as an `o` line at file start
    pub name: Option<String>,
    /// Display color hint emitted as a `# color R G B` comment line
    pub color: Option<[u8; 3]>,
    /// Decimal places for position and normal lines
    pub decimals: usize,
}

impl Default for ObjWriteOptions {
    fn default() -> Self {
        Self {
            name: None,
            color: None,
            decimals: OBJ_POSITION_DECIMALS,
        }
    }
}

impl ObjWriteOptions {
    /// Options with an object name and defaults otherwise.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// Writes a mesh in Wavefront OBJ format to the given sink.
///
/// All vertex lines precede all face lines, so every `f` index resolves
/// against positions already emitted. Face indices are 1-based per the OBJ
/// convention.
///
/// Every face index is checked against the vertex count before anything is
/// written; an out-of-range index fails the whole write with
/// [`ObjError::InvalidMesh`] and the sink stays untouched.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use scenegen_mesh::Mesh;
/// use scenegen_obj::{write_obj, ObjWriteOptions};
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::ZERO);
/// mesh.add_vertex(DVec3::X);
/// mesh.add_vertex(DVec3::Y);
/// mesh.add_triangle(0, 1, 2);
///
/// let mut out = Vec::new();
/// write_obj(&mut out, &mesh, &ObjWriteOptions::default()).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.ends_with("f 1 2 3\n"));
/// ```
pub fn write_obj<W: Write>(
    w: &mut W,
    mesh: &Mesh,
    options: &ObjWriteOptions,
) -> Result<(), ObjError> {
    let vertex_count = mesh.vertex_count();
    for tri in mesh.triangles() {
        for &idx in tri {
            if idx as usize >= vertex_count {
                return Err(ObjError::invalid_mesh(format!(
                    "face index {} out of range for {} vertices",
                    idx, vertex_count
                )));
            }
        }
    }

    if let Some(name) = &options.name {
        writeln!(w, "o {}", name)?;
    }

    if let Some([r, g, b]) = options.color {
        writeln!(w, "# color {} {} {}", r, g, b)?;
    }

    let prec = options.decimals;
    for v in mesh.vertices() {
        writeln!(w, "v {:.prec$} {:.prec$} {:.prec$}", v.x, v.y, v.z)?;
    }

    if let Some(normals) = mesh.normals() {
        for n in normals {
            writeln!(w, "vn {:.prec$} {:.prec$} {:.prec$}", n.x, n.y, n.z)?;
        }
    }

    let has_normals = mesh.normals().is_some();
    for tri in mesh.triangles() {
        let a = tri[0] + 1;
        let b = tri[1] + 1;
        let c = tri[2] + 1;

        if has_normals {
            writeln!(w, "f {a}//{a} {b}//{b} {c}//{c}")?;
        } else {
            writeln!(w, "f {a} {b} {c}")?;
        }
    }

    Ok(())
}

/// Writes a mesh to an OBJ file at the given path.
///
/// The destination is created or fully overwritten, never appended to. The
/// handle is buffered, flushed after the last line, and closed by drop on
/// all exit paths. I/O failure surfaces as [`ObjError::Io`]; there is no
/// retry and no partial-write cleanup.
pub fn write_obj_file(
    path: impl AsRef<Path>,
    mesh: &Mesh,
    options: &ObjWriteOptions,
) -> Result<(), ObjError> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);
    write_obj(&mut w, mesh, options)?;
    w.flush()?;
    Ok(())
}
