//! Generates the twisted torus asset and writes `twisted_torus.obj` into
//! the working directory.

use scenegen_mesh::primitives::{create_twisted_torus, TwistedTorusParams};
use scenegen_obj::{write_obj_file, ObjWriteOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mesh = create_twisted_torus(&TwistedTorusParams::default())?;
    write_obj_file("twisted_torus.obj", &mesh, &ObjWriteOptions::named("TwistedTorus"))?;

    println!(
        "wrote twisted_torus.obj ({} vertices, {} triangles)",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(())
}
