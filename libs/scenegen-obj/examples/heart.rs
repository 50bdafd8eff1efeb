//! Generates the extruded heart asset and writes `heart.obj` into the
//! working directory, with the red display hint the viewer picks up.

use scenegen_mesh::primitives::{create_heart, HeartParams};
use scenegen_obj::{write_obj_file, ObjWriteOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mesh = create_heart(&HeartParams::default())?;
    let options = ObjWriteOptions {
        color: Some([255, 50, 50]),
        ..Default::default()
    };
    write_obj_file("heart.obj", &mesh, &options)?;

    println!(
        "wrote heart.obj ({} vertices, {} triangles)",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(())
}
