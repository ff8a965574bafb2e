use approx::assert_relative_eq;
use subsurf_core::SubsurfError;
use subsurf_off::{format_off, load, parse_off, save};

const CUBE: &str = "\
OFF
8 6 0
-1 -1 -1
1 -1 -1
1 1 -1
-1 1 -1
-1 -1 1
1 -1 1
1 1 1
-1 1 1
4 0 3 2 1
4 4 5 6 7
4 0 1 5 4
4 1 2 6 5
4 2 3 7 6
4 3 0 4 7
";

#[test]
fn test_parse_cube() {
    let mesh = parse_off(CUBE, false).unwrap();
    assert_eq!(mesh.vertex_count(), 8);
    assert_eq!(mesh.face_count(), 6);
}

#[test]
fn test_round_trip_preserves_counts_and_positions() {
    let mesh = parse_off(CUBE, false).unwrap();
    let text = format_off(&mesh);
    let reparsed = parse_off(&text, false).unwrap();

    assert_eq!(reparsed.vertex_count(), mesh.vertex_count());
    assert_eq!(reparsed.face_count(), mesh.face_count());

    let mut original: Vec<_> = mesh.vertices.values().collect();
    let mut round_tripped: Vec<_> = reparsed.vertices.values().collect();
    original.sort_by_key(|v| v.id);
    round_tripped.sort_by_key(|v| v.id);
    for (a, b) in original.iter().zip(&round_tripped) {
        assert_relative_eq!(a.position.x, b.position.x);
        assert_relative_eq!(a.position.y, b.position.y);
        assert_relative_eq!(a.position.z, b.position.z);
    }
}

#[test]
fn test_second_and_third_saves_are_byte_identical() {
    let mesh = parse_off(CUBE, false).unwrap();
    let first = format_off(&mesh);
    let second = format_off(&parse_off(&first, false).unwrap());
    let third = format_off(&parse_off(&second, false).unwrap());
    assert_eq!(second, third);
}

#[test]
fn test_round_trip_preserves_face_connectivity() {
    let mesh = parse_off(CUBE, false).unwrap();
    let text = format_off(&mesh);

    // Vertices were written in id order 0..8, so the index blocks must come
    // back out unchanged and in the same face order.
    let faces: Vec<&str> = text.lines().skip(10).collect();
    assert_eq!(
        faces,
        vec![
            "4 0 3 2 1",
            "4 4 5 6 7",
            "4 0 1 5 4",
            "4 1 2 6 5",
            "4 2 3 7 6",
            "4 3 0 4 7",
        ]
    );
}

#[test]
fn test_header_without_off_tag() {
    let text = CUBE.strip_prefix("OFF\n").unwrap();
    let mesh = parse_off(text, false).unwrap();
    assert_eq!(mesh.vertex_count(), 8);
}

#[test]
fn test_four_field_header_skips_edge_lines() {
    let text = "\
OFF
3 3 1 0
0 0 0
1 0 0
0 1 0
0 1
1 2
2 0
3 0 1 2
";
    let mesh = parse_off(text, false).unwrap();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.face_count(), 1);
}

#[test]
fn test_triangulate_on_load() {
    let mesh = parse_off(CUBE, true).unwrap();
    assert_eq!(mesh.vertex_count(), 8);
    // Each quad fans into 2 triangles around its first vertex.
    assert_eq!(mesh.face_count(), 12);
    for face in mesh.faces.values() {
        assert_eq!(face.vertices.len(), 3);
    }
}

#[test]
fn test_truncated_file_is_malformed() {
    let text = "OFF\n8 6 0\n0 0 0\n";
    let result = parse_off(text, false);
    assert!(matches!(result, Err(SubsurfError::MalformedFile(_))));
}

#[test]
fn test_face_count_mismatch_is_malformed() {
    let text = "\
OFF
3 1 0
0 0 0
1 0 0
0 1 0
4 0 1 2
";
    let result = parse_off(text, false);
    assert!(matches!(result, Err(SubsurfError::MalformedFile(_))));
}

#[test]
fn test_out_of_range_index_is_malformed() {
    let text = "\
OFF
3 1 0
0 0 0
1 0 0
0 1 0
3 0 1 7
";
    let result = parse_off(text, false);
    assert!(matches!(result, Err(SubsurfError::MalformedFile(_))));
}

#[test]
fn test_missing_header_is_malformed() {
    let result = parse_off("not a mesh\nat all\n", false);
    assert!(matches!(result, Err(SubsurfError::MalformedFile(_))));
}

#[test]
fn test_load_rejects_wrong_extension() {
    let path = std::env::temp_dir().join("subsurf_off_test_mesh.obj");
    std::fs::write(&path, CUBE).unwrap();
    let result = load(&path, false);
    assert!(matches!(result, Err(SubsurfError::UnsupportedFormat(_))));
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_save_rejects_wrong_extension_without_writing() {
    let mesh = parse_off(CUBE, false).unwrap();
    let path = std::env::temp_dir().join("subsurf_off_test_out.obj");
    let result = save(&mesh, &path);
    assert!(matches!(result, Err(SubsurfError::UnsupportedFormat(_))));
    assert!(!path.exists());
}

#[test]
fn test_save_and_load_through_filesystem() {
    let mesh = parse_off(CUBE, false).unwrap();
    let path = std::env::temp_dir().join("subsurf_off_test_cube.off");
    save(&mesh, &path).unwrap();
    let reloaded = load(&path, false).unwrap();
    assert_eq!(reloaded.vertex_count(), 8);
    assert_eq!(reloaded.face_count(), 6);
    std::fs::remove_file(&path).unwrap();
}
