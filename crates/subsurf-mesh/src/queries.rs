//! Derived adjacency queries. All are memoized on the face they belong to;
//! faces are immutable after construction within one mesh generation, so
//! compute-once needs no invalidation.

use std::collections::HashMap;

use subsurf_core::error::{Result, SubsurfError};
use subsurf_math::{midpoint, Point3};

use crate::mesh::Mesh;
use crate::types::{FaceKey, VertexKey};

impl Mesh {
    /// The faces sharing an edge with `face`, one per non-boundary cyclic
    /// edge, assuming manifold input (at most one face across each edge).
    pub fn face_neighbours(&mut self, face: FaceKey) -> Vec<FaceKey> {
        if let Some(cached) = &self.faces[face].neighbours {
            return cached.clone();
        }

        let loop_ = self.faces[face].vertices.clone();
        let n = loop_.len();
        let mut result = Vec::with_capacity(n);
        for i in 0..n {
            let (v1, v2) = (loop_[i], loop_[(i + 1) % n]);
            if let Some(other) = self.neighbour_across(face, v1, v2) {
                result.push(other);
            }
        }

        self.faces[face].neighbours = Some(result.clone());
        result
    }

    /// The single face on the other side of edge (v1, v2), or `None` at a
    /// boundary. Intersection of the two endpoints' incidence lists minus
    /// `face` itself.
    pub fn neighbour_across(&self, face: FaceKey, v1: VertexKey, v2: VertexKey) -> Option<FaceKey> {
        self.vertices[v1]
            .faces
            .iter()
            .copied()
            .find(|&f| f != face && self.vertices[v2].faces.contains(&f))
    }

    /// Doo-Sabin corner blend per vertex v2 with cyclic neighbours v1, v3:
    /// `((v1 + v3)/2 + v2*2 + center) / 4`.
    pub fn face_inside_points(&mut self, face: FaceKey) -> HashMap<VertexKey, Point3> {
        if let Some(cached) = &self.faces[face].inside_points {
            return cached.clone();
        }

        let loop_ = self.faces[face].vertices.clone();
        let center = self.faces[face].center;
        let n = loop_.len();
        let mut result = HashMap::with_capacity(n);
        for i in 0..n {
            let v1 = self.position(loop_[i]);
            let v2 = self.position(loop_[(i + 1) % n]);
            let v3 = self.position(loop_[(i + 2) % n]);
            result.insert(loop_[(i + 1) % n], ((v1 + v3) / 2.0 + v2 * 2.0 + center) / 4.0);
        }

        self.faces[face].inside_points = Some(result.clone());
        result
    }

    /// Geometric midpoint of each directed cyclic edge of the face.
    pub fn face_midpoints(&mut self, face: FaceKey) -> HashMap<(VertexKey, VertexKey), Point3> {
        if let Some(cached) = &self.faces[face].midpoints {
            return cached.clone();
        }

        let loop_ = self.faces[face].vertices.clone();
        let n = loop_.len();
        let mut result = HashMap::with_capacity(n);
        for i in 0..n {
            let (v1, v2) = (loop_[i], loop_[(i + 1) % n]);
            result.insert((v1, v2), midpoint(self.position(v1), self.position(v2)));
        }

        self.faces[face].midpoints = Some(result.clone());
        result
    }

    /// The vertices two faces have in common. Exactly 2 is a shared edge;
    /// more than 2 means the pair is structurally invalid.
    pub fn shared_vertices(&self, face: FaceKey, other: FaceKey) -> Result<Vec<VertexKey>> {
        let shared: Vec<VertexKey> = self.faces[face]
            .vertices
            .iter()
            .copied()
            .filter(|v| self.faces[other].vertices.contains(v))
            .collect();

        if shared.len() > 2 {
            let ids: Vec<u64> = shared.iter().map(|&v| self.vertices[v].id).collect();
            return Err(SubsurfError::InconsistentTopology(format!(
                "faces {face:?} and {other:?} share {} vertices (ids {ids:?}); at most 2 expected",
                shared.len()
            )));
        }
        Ok(shared)
    }

    /// The vertices adjacent to `v` across an edge: its cyclic predecessor
    /// and successor in every incident face, first-seen order.
    pub fn vertex_neighbours(&self, v: VertexKey) -> Vec<VertexKey> {
        let mut result = Vec::new();
        for &face in &self.vertices[v].faces {
            let f = &self.faces[face];
            if let Some(i) = f.vertices.iter().position(|&u| u == v) {
                for u in [f.prev_vertex(i), f.next_vertex(i)] {
                    if !result.contains(&u) {
                        result.push(u);
                    }
                }
            }
        }
        result
    }
}
