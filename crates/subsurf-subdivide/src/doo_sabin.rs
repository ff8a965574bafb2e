//! Doo-Sabin subdivision: every face shrinks toward its interior, and new
//! faces are stitched across each edge and around each vertex.

use std::collections::{HashMap, HashSet};

use subsurf_core::error::Result;
use subsurf_mesh::{edge_key, FaceKey, Mesh, VertexKey};

use crate::vertices_by_id;

/// One Doo-Sabin step.
///
/// New vertices are the per-corner inside points, one per (face, vertex)
/// pair. Three kinds of faces are emitted:
/// - per face, the loop of its own inside points ("face point" face),
/// - per interior edge, the quad of both adjacent faces' inside points at
///   the edge's endpoints (boundary edges emit nothing),
/// - per vertex with at least 3 incident faces, the loop of that vertex's
///   inside point in each incident face, in repaired rotational order.
pub fn doo_sabin(mesh: &mut Mesh) -> Result<Mesh> {
    let mut out = Mesh::new();
    let face_order = mesh.face_order.clone();

    let mut inside: HashMap<(FaceKey, VertexKey), VertexKey> = HashMap::new();
    for &f in &face_order {
        let points = mesh.face_inside_points(f);
        for &v in &mesh.faces[f].vertices.clone() {
            inside.insert((f, v), out.add_vertex(points[&v]));
        }
    }

    for &f in &face_order {
        let corners: Vec<VertexKey> = mesh.faces[f]
            .vertices
            .iter()
            .map(|&v| inside[&(f, v)])
            .collect();
        out.add_face(&corners)?;
    }

    let mut done_edges: HashSet<(VertexKey, VertexKey)> = HashSet::new();
    for &f in &face_order {
        let loop_ = mesh.faces[f].vertices.clone();
        let n = loop_.len();
        for i in 0..n {
            let (v1, v2) = (loop_[i], loop_[(i + 1) % n]);
            if !done_edges.insert(edge_key(v1, v2)) {
                continue;
            }
            if let Some(g) = mesh.neighbour_across(f, v1, v2) {
                out.add_face(&[
                    inside[&(f, v1)],
                    inside[&(f, v2)],
                    inside[&(g, v2)],
                    inside[&(g, v1)],
                ])?;
            }
        }
    }

    for v in vertices_by_id(mesh) {
        if mesh.vertices[v].faces.len() < 3 {
            continue;
        }
        mesh.repair_face_order(v)?;
        let corners: Vec<VertexKey> = mesh.vertices[v]
            .faces
            .iter()
            .map(|&f| inside[&(f, v)])
            .collect();
        out.add_face(&corners)?;
    }

    out.cleanup();
    Ok(out)
}
