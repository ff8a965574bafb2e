//! Reader and writer for a restricted OFF-like face-vertex text format.
//!
//! ```text
//! OFF
//! <vertexCount> <faceCount> 0
//! <x> <y> <z>                          (vertexCount times)
//! <indexCount> <idx0> <idx1> ...       (faceCount times)
//! ```
//!
//! A four-integer header variant `<vertexCount> <edgeCount> <faceCount> 0`
//! is tolerated; the edge block between coordinates and faces is skipped.
//! Face indices are 0-based positions in the file's vertex order.

use std::fs;
use std::path::Path;

use subsurf_core::error::{Result, SubsurfError};
use subsurf_math::Point3;
use subsurf_mesh::{Mesh, VertexKey};

/// Load a mesh from an `.off` file. With `triangulate` set, non-triangular
/// faces are fan-triangulated around their first vertex (Loop subdivision
/// requires a triangular mesh).
pub fn load(path: &Path, triangulate: bool) -> Result<Mesh> {
    check_extension(path)?;
    let text = fs::read_to_string(path)?;
    parse_off(&text, triangulate)
}

/// Save a mesh to an `.off` file. The extension is checked before anything
/// is written.
pub fn save(mesh: &Mesh, path: &Path) -> Result<()> {
    check_extension(path)?;
    fs::write(path, format_off(mesh))?;
    Ok(())
}

fn check_extension(path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("off") => Ok(()),
        _ => Err(SubsurfError::UnsupportedFormat(format!(
            "only .off files are supported, got '{}'",
            path.display()
        ))),
    }
}

/// Header line: 3 or 4 whitespace-separated unsigned integers. The first is
/// the vertex count and the second-to-last the face count; the four-integer
/// form carries an edge count as its second field.
fn parse_header(line: &str) -> Option<(usize, usize, usize)> {
    let nums: Option<Vec<u64>> = line
        .split_whitespace()
        .map(|tok| tok.parse().ok())
        .collect();
    let nums = nums?;
    match nums.len() {
        3 => Some((nums[0] as usize, 0, nums[1] as usize)),
        4 => Some((nums[0] as usize, nums[1] as usize, nums[2] as usize)),
        _ => None,
    }
}

/// Parse OFF text into a mesh. Cleanup (degenerate faces, orphan vertices)
/// runs before the mesh is returned.
pub fn parse_off(text: &str, triangulate: bool) -> Result<Mesh> {
    let mut lines = text.lines();

    // Scan forward past any leading non-numeric lines (e.g. the "OFF" tag).
    let (vertex_count, edge_count, face_count) = loop {
        let line = lines.next().ok_or_else(|| {
            SubsurfError::MalformedFile("no header line with vertex and face counts".into())
        })?;
        if let Some(counts) = parse_header(line) {
            break counts;
        }
    };

    let mut mesh = Mesh::new();
    let mut keys = Vec::with_capacity(vertex_count);
    for i in 0..vertex_count {
        let line = lines.next().ok_or_else(|| {
            SubsurfError::MalformedFile(format!(
                "expected {vertex_count} coordinate lines, file ended after {i}"
            ))
        })?;
        let fields: Option<Vec<f64>> = line
            .split_whitespace()
            .map(|tok| tok.parse().ok())
            .collect();
        let fields = fields.ok_or_else(|| {
            SubsurfError::MalformedFile(format!("coordinate line {i} is not numeric: '{line}'"))
        })?;
        if fields.len() < 3 {
            return Err(SubsurfError::MalformedFile(format!(
                "coordinate line {i} has {} fields, expected at least 3",
                fields.len()
            )));
        }
        keys.push(mesh.add_vertex_with_id(Point3::new(fields[0], fields[1], fields[2]), i as u64));
    }

    // Edge lines carry no information we use.
    for i in 0..edge_count {
        lines.next().ok_or_else(|| {
            SubsurfError::MalformedFile(format!(
                "expected {edge_count} edge lines, file ended after {i}"
            ))
        })?;
    }

    for i in 0..face_count {
        let line = lines.next().ok_or_else(|| {
            SubsurfError::MalformedFile(format!(
                "expected {face_count} face lines, file ended after {i}"
            ))
        })?;
        let nums: Option<Vec<usize>> = line
            .split_whitespace()
            .map(|tok| tok.parse().ok())
            .collect();
        let nums = nums.ok_or_else(|| {
            SubsurfError::MalformedFile(format!("face line {i} is not numeric: '{line}'"))
        })?;
        let Some((&count, indices)) = nums.split_first() else {
            return Err(SubsurfError::MalformedFile(format!("face line {i} is empty")));
        };
        if indices.len() != count {
            return Err(SubsurfError::MalformedFile(format!(
                "face line {i} announces {count} indices but lists {}",
                indices.len()
            )));
        }
        let corners: Vec<VertexKey> = indices
            .iter()
            .map(|&idx| {
                keys.get(idx).copied().ok_or_else(|| {
                    SubsurfError::MalformedFile(format!(
                        "face line {i} references vertex {idx}, only {vertex_count} exist"
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if triangulate && corners.len() != 3 {
            let main = corners[0];
            for pair in corners[1..].windows(2) {
                mesh.add_face(&[main, pair[0], pair[1]])?;
            }
        } else {
            mesh.add_face(&corners)?;
        }
    }

    mesh.cleanup();
    Ok(mesh)
}

/// Serialize a mesh: vertices sorted by id through a fresh id-to-index
/// mapping, faces in their original insertion order.
pub fn format_off(mesh: &Mesh) -> String {
    let mut sorted: Vec<_> = mesh.vertices.iter().collect();
    sorted.sort_by_key(|(_, v)| v.id);

    let mut out = String::new();
    out.push_str("OFF\n");
    out.push_str(&format!("{} {} 0\n", mesh.vertex_count(), mesh.face_count()));

    let mut index_of = std::collections::HashMap::with_capacity(sorted.len());
    for (i, (key, vertex)) in sorted.iter().enumerate() {
        index_of.insert(*key, i);
        let p = vertex.position;
        out.push_str(&format!("{} {} {}\n", p.x, p.y, p.z));
    }

    for &f in &mesh.face_order {
        let face = &mesh.faces[f];
        out.push_str(&face.vertices.len().to_string());
        for &v in &face.vertices {
            out.push_str(&format!(" {}", index_of[&v]));
        }
        out.push('\n');
    }
    out
}
