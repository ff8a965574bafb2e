//! Peters-Reif subdivision: the simplest stencil. Every edge contributes
//! its midpoint, faces shrink onto their edge midpoints, and one closing
//! face is stitched around each vertex.

use std::collections::{HashMap, HashSet};

use subsurf_core::error::Result;
use subsurf_mesh::{edge_key, Mesh, VertexKey};

use crate::{intern_vertex, vertices_by_id};

/// One Peters-Reif step.
///
/// New vertices: one per undirected edge, at its midpoint. Per face, the
/// loop of its edge midpoints (a topology-preserving shrink). Per vertex
/// with at least 2 distinct incident faces, the fan is repaired and walked
/// pairwise (cyclically); each pair sharing a full edge contributes that
/// edge's midpoint. At an open fan the wrap-around pair shares no edge, so
/// the two missing boundary-edge midpoints are spliced onto the ends: from
/// the first and last faces, whichever cyclic neighbour of the vertex is
/// absent from the collected edge endpoints marks the open side.
pub fn peters_reif(mesh: &mut Mesh) -> Result<Mesh> {
    let mut out = Mesh::new();
    let face_order = mesh.face_order.clone();

    let mut edge_vertex: HashMap<(VertexKey, VertexKey), VertexKey> = HashMap::new();
    for &f in &face_order {
        let midpoints = mesh.face_midpoints(f);
        let loop_ = mesh.faces[f].vertices.clone();
        let n = loop_.len();
        for i in 0..n {
            let (v1, v2) = (loop_[i], loop_[(i + 1) % n]);
            intern_vertex(
                &mut out,
                &mut edge_vertex,
                edge_key(v1, v2),
                midpoints[&(v1, v2)],
            );
        }
    }

    for &f in &face_order {
        let loop_ = mesh.faces[f].vertices.clone();
        let n = loop_.len();
        let corners: Vec<VertexKey> = (0..n)
            .map(|i| edge_vertex[&edge_key(loop_[i], loop_[(i + 1) % n])])
            .collect();
        out.add_face(&corners)?;
    }

    for v in vertices_by_id(mesh) {
        let distinct: HashSet<_> = mesh.vertices[v].faces.iter().copied().collect();
        if distinct.len() < 2 {
            continue;
        }
        mesh.repair_face_order(v)?;
        let fan = mesh.vertices[v].faces.clone();

        // Candidate boundary-edge endpoints from the ends of the fan.
        let first = &mesh.faces[fan[0]];
        let last = &mesh.faces[fan[fan.len() - 1]];
        let fi = first.vertices.iter().position(|&u| u == v);
        let li = last.vertices.iter().position(|&u| u == v);
        let (Some(fi), Some(li)) = (fi, li) else {
            continue;
        };
        let (f1, f2) = (first.prev_vertex(fi), first.next_vertex(fi));
        let (l1, l2) = (last.prev_vertex(li), last.next_vertex(li));

        let mut corners = Vec::with_capacity(fan.len() + 2);
        let mut endpoints: HashSet<VertexKey> = HashSet::new();
        for i in 0..fan.len() {
            let (a, b) = (fan[i], fan[(i + 1) % fan.len()]);
            let shared = mesh.shared_vertices(a, b)?;
            if shared.len() == 2 {
                corners.push(edge_vertex[&edge_key(shared[0], shared[1])]);
                endpoints.insert(shared[0]);
                endpoints.insert(shared[1]);
            }
        }

        if !endpoints.contains(&f1) {
            corners.insert(0, edge_vertex[&edge_key(v, f1)]);
        } else if !endpoints.contains(&f2) {
            corners.insert(0, edge_vertex[&edge_key(v, f2)]);
        }
        if !endpoints.contains(&l1) {
            corners.push(edge_vertex[&edge_key(v, l1)]);
        } else if !endpoints.contains(&l2) {
            corners.push(edge_vertex[&edge_key(v, l2)]);
        }

        out.add_face(&corners)?;
    }

    out.cleanup();
    Ok(out)
}
