//! Integration tests for OBJ export of the generated scene assets.

use scenegen_mesh::primitives::{
    create_car, create_heart, create_twisted_torus, CarParams, HeartParams, TwistedTorusParams,
};
use scenegen_obj::{write_obj, write_obj_file, ObjWriteOptions};

fn obj_text(mesh: &scenegen_mesh::Mesh, options: &ObjWriteOptions) -> String {
    let mut out = Vec::new();
    write_obj(&mut out, mesh, options).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn torus_export_layout() {
    let params = TwistedTorusParams {
        segments: 4,
        rings: 3,
        ..Default::default()
    };
    let mesh = create_twisted_torus(&params).unwrap();
    let text = obj_text(&mesh, &ObjWriteOptions::named("TwistedTorus"));

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "o TwistedTorus");

    let v_lines: Vec<&str> = lines.iter().copied().filter(|l| l.starts_with("v ")).collect();
    let f_lines: Vec<&str> = lines.iter().copied().filter(|l| l.starts_with("f ")).collect();
    assert_eq!(v_lines.len(), 12);
    assert_eq!(f_lines.len(), 24);

    // Every vertex line precedes every face line
    let last_v = lines.iter().rposition(|l| l.starts_with("v ")).unwrap();
    let first_f = lines.iter().position(|l| l.starts_with("f ")).unwrap();
    assert!(last_v < first_f);

    // All face indices are 1-based and within the emitted vertex count
    for line in f_lines {
        for idx in line.split_whitespace().skip(1) {
            let idx: usize = idx.parse().unwrap();
            assert!((1..=12).contains(&idx));
        }
    }
}

#[test]
fn torus_vertex_precision() {
    let mesh = create_twisted_torus(&TwistedTorusParams::default()).unwrap();
    let text = obj_text(&mesh, &ObjWriteOptions::default());

    // First vertex sits on the outer equator at theta = phi = 0
    assert!(text.starts_with("v 1.300000 0.000000 0.000000\n"));
}

#[test]
fn car_export_counts() {
    let mesh = create_car(&CarParams::default()).unwrap();
    let text = obj_text(&mesh, &ObjWriteOptions::named("CarModel"));

    assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 16);
    assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 24);
}

#[test]
fn heart_export_color_hint() {
    let mesh = create_heart(&HeartParams::default()).unwrap();
    let options = ObjWriteOptions {
        color: Some([255, 50, 50]),
        ..Default::default()
    };
    let text = obj_text(&mesh, &options);

    assert!(text.starts_with("# color 255 50 50\n"));
    assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 130);
    assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 256);
}

#[test]
fn export_is_deterministic() {
    let mesh = create_heart(&HeartParams::default()).unwrap();
    let options = ObjWriteOptions {
        color: Some([255, 50, 50]),
        ..Default::default()
    };
    assert_eq!(obj_text(&mesh, &options), obj_text(&mesh, &options));
}

#[test]
fn file_export_overwrites() {
    let path = std::env::temp_dir().join("scenegen_export_overwrite_test.obj");

    let params = TwistedTorusParams {
        segments: 4,
        rings: 3,
        ..Default::default()
    };
    let mesh = create_twisted_torus(&params).unwrap();
    let options = ObjWriteOptions::named("TwistedTorus");

    // Writing twice must yield identical content, not append drift
    write_obj_file(&path, &mesh, &options).unwrap();
    let first = std::fs::read(&path).unwrap();
    write_obj_file(&path, &mesh, &options).unwrap();
    let second = std::fs::read(&path).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, obj_text(&mesh, &options).into_bytes());

    std::fs::remove_file(&path).ok();
}
