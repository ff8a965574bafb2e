//! Loop subdivision: the 1-to-4 triangle split with valence-weighted vertex
//! smoothing. Defined on triangular meshes; the loader triangulates for it.

use std::collections::HashMap;

use subsurf_core::error::Result;
use subsurf_math::{centroid, midpoint, Point3};
use subsurf_mesh::{edge_key, Mesh, VertexKey};

use crate::intern_vertex;

/// Loop's vertex weight for valence `n`: `3/8 + (3/8 + cos(2*pi/n)/4)^2`.
fn alpha(cache: &mut HashMap<usize, f64>, n: usize) -> f64 {
    *cache.entry(n).or_insert_with(|| {
        let c = (2.0 * std::f64::consts::PI / n as f64).cos();
        3.0 / 8.0 + (3.0 / 8.0 + c / 4.0).powi(2)
    })
}

/// One Loop step.
///
/// Interior edge point: `(v1+v2)/8 + (Cf+Cg)*3/8` with Cf, Cg the adjacent
/// face centers; boundary edge point: plain midpoint. Vertex point:
/// `v*alpha(n) + mean(neighbours)*(1-alpha(n))` with `n` the neighbour count.
/// Each triangle yields the central triangle of its three edge points plus
/// one corner triangle per vertex.
pub fn loop_scheme(mesh: &mut Mesh) -> Result<Mesh> {
    let face_order = mesh.face_order.clone();
    let mut alphas: HashMap<usize, f64> = HashMap::new();

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
            let (p1, p2) = (mesh.position(v1), mesh.position(v2));
            let point = match mesh.neighbour_across(f, v1, v2) {
                Some(g) => {
                    (p1 + p2) / 8.0 + (mesh.faces[f].center + mesh.faces[g].center) * (3.0 / 8.0)
                }
                None => midpoint(p1, p2),
            };
            edge_points.insert(key, point);
        }
    }

    let mut vertex_points: HashMap<VertexKey, Point3> = HashMap::new();
    for (v, vertex) in &mesh.vertices {
        let neighbours = mesh.vertex_neighbours(v);
        let a = alpha(&mut alphas, neighbours.len());
        let esc = centroid(neighbours.iter().map(|&u| mesh.position(u)));
        vertex_points.insert(v, vertex.position * a + esc * (1.0 - a));
    }

    let mut out = Mesh::new();
    let mut edge_vertex: HashMap<(VertexKey, VertexKey), VertexKey> = HashMap::new();
    let mut point_vertex: HashMap<VertexKey, VertexKey> = HashMap::new();

    for &f in &face_order {
        let loop_ = mesh.faces[f].vertices.clone();
        let n = loop_.len();

        let central: Vec<VertexKey> = (0..n)
            .map(|i| {
                let key = edge_key(loop_[i], loop_[(i + 1) % n]);
                intern_vertex(&mut out, &mut edge_vertex, key, edge_points[&key])
            })
            .collect();
        out.add_face(&central)?;

        for i in 0..n {
            let (v1, v2, v3) = (loop_[i], loop_[(i + 1) % n], loop_[(i + 2) % n]);
            let k1 = edge_key(v1, v2);
            let k2 = edge_key(v2, v3);
            let e1 = intern_vertex(&mut out, &mut edge_vertex, k1, edge_points[&k1]);
            let e2 = intern_vertex(&mut out, &mut edge_vertex, k2, edge_points[&k2]);
            let vp = intern_vertex(&mut out, &mut point_vertex, v2, vertex_points[&v2]);
            out.add_face(&[e1, vp, e2])?;
        }
    }

    out.cleanup();
    Ok(out)
}
