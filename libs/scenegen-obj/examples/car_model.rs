//! Generates the low-poly car asset and writes `car_model.obj` into the
//! working directory.

use scenegen_mesh::primitives::{create_car, CarParams};
use scenegen_obj::{write_obj_file, ObjWriteOptions};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mesh = create_car(&CarParams::default())?;
    write_obj_file("car_model.obj", &mesh, &ObjWriteOptions::named("CarModel"))?;

    println!(
        "wrote car_model.obj ({} vertices, {} triangles)",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(())
}
