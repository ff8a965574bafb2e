//! Catmull-Clark subdivision: the classical face/edge/vertex point stencil,
//! emitting one quad per original face corner.

use std::collections::HashMap;

use subsurf_core::error::Result;
use subsurf_math::{centroid, midpoint, Point3};
use subsurf_mesh::{edge_key, FaceKey, Mesh, VertexKey};

use crate::intern_vertex;

/// One Catmull-Clark step.
///
/// Edge point: mean of the edge endpoints and the adjacent face centers
/// (`/4` interior, `/3` at a boundary). Vertex point, with `n` the number of
/// incident faces: `(v*(n-3) + esc*2 + fsc) / n` where `esc` averages the
/// midpoints towards the vertex's neighbours and `fsc` the incident face
/// centers. Every face then yields one quad per corner: incoming edge point,
/// vertex point, outgoing edge point, face center. The face center is a
/// single shared vertex across all of the face's quads.
pub fn catmull_clark(mesh: &mut Mesh) -> Result<Mesh> {
    let face_order = mesh.face_order.clone();

    let mut edge_points: HashMap<(VertexKey, VertexKey), Point3> = HashMap::new();
    for &f in &face_order {
        let loop_ = mesh.faces[f].vertices.clone();
        let n = loop_.len();
        for i in 0..n {
            let (v1, v2) = (loop_[i], loop_[(i + 1) % n]);
            let key = edge_key(v1, v2);
            if edge_points.contains_key(&key) {
                continue;
            }
            let ends = mesh.position(v1) + mesh.position(v2);
            let center = mesh.faces[f].center;
            let point = match mesh.neighbour_across(f, v1, v2) {
                Some(g) => (ends + center + mesh.faces[g].center) / 4.0,
                None => (ends + center) / 3.0,
            };
            edge_points.insert(key, point);
        }
    }

    let mut vertex_points: HashMap<VertexKey, Point3> = HashMap::new();
    for (v, vertex) in &mesh.vertices {
        let pos = vertex.position;
        let esc = centroid(
            mesh.vertex_neighbours(v)
                .iter()
                .map(|&u| midpoint(pos, mesh.position(u))),
        );
        let fsc = centroid(vertex.faces.iter().map(|&f| mesh.faces[f].center));
        let n = vertex.faces.len() as f64;
        vertex_points.insert(v, (pos * (n - 3.0) + esc * 2.0 + fsc) / n);
    }

    let mut out = Mesh::new();
    let mut face_vertex: HashMap<FaceKey, VertexKey> = HashMap::new();
    let mut edge_vertex: HashMap<(VertexKey, VertexKey), VertexKey> = HashMap::new();
    let mut point_vertex: HashMap<VertexKey, VertexKey> = HashMap::new();

    for &f in &face_order {
        let center = mesh.faces[f].center;
        let fc = intern_vertex(&mut out, &mut face_vertex, f, center);
        let loop_ = mesh.faces[f].vertices.clone();
        let n = loop_.len();
        for i in 0..n {
            let (v1, v2, v3) = (loop_[i], loop_[(i + 1) % n], loop_[(i + 2) % n]);
            let k1 = edge_key(v1, v2);
            let k2 = edge_key(v2, v3);
            let e1 = intern_vertex(&mut out, &mut edge_vertex, k1, edge_points[&k1]);
            let e2 = intern_vertex(&mut out, &mut edge_vertex, k2, edge_points[&k2]);
            let vp = intern_vertex(&mut out, &mut point_vertex, v2, vertex_points[&v2]);
            out.add_face(&[e1, vp, e2, fc])?;
        }
    }

    out.cleanup();
    Ok(out)
}
