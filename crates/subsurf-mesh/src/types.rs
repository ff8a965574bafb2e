use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;
use subsurf_math::Point3;

// --- SlotMap key types ---

new_key_type! {
    pub struct VertexKey;
    pub struct FaceKey;
}

/// Normalize an undirected edge to a canonical key.
pub fn edge_key(a: VertexKey, b: VertexKey) -> (VertexKey, VertexKey) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// --- Entity structs ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    /// Serialization label: file index for parsed vertices, allocator-issued
    /// for synthesized ones.
    pub id: u64,
    pub position: Point3,
    /// Incident faces, in insertion order until repaired into rotational
    /// order by [`Mesh::repair_face_order`](crate::Mesh::repair_face_order).
    pub faces: Vec<FaceKey>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Face {
    /// Ordered vertex loop; `vertices[0]` logically follows the last entry.
    pub vertices: Vec<VertexKey>,
    /// Arithmetic mean of the vertex positions, fixed at construction.
    pub center: Point3,
    // Derived data, compute-once per mesh generation.
    #[serde(skip)]
    pub(crate) neighbours: Option<Vec<FaceKey>>,
    #[serde(skip)]
    pub(crate) inside_points: Option<HashMap<VertexKey, Point3>>,
    #[serde(skip)]
    pub(crate) midpoints: Option<HashMap<(VertexKey, VertexKey), Point3>>,
}

impl Face {
    pub(crate) fn new(vertices: Vec<VertexKey>, center: Point3) -> Self {
        Self {
            vertices,
            center,
            neighbours: None,
            inside_points: None,
            midpoints: None,
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Cyclic successor of position `i` in the vertex loop.
    pub fn next_vertex(&self, i: usize) -> VertexKey {
        self.vertices[(i + 1) % self.vertices.len()]
    }

    /// Cyclic predecessor of position `i` in the vertex loop.
    pub fn prev_vertex(&self, i: usize) -> VertexKey {
        let n = self.vertices.len();
        self.vertices[(i + n - 1) % n]
    }

    pub(crate) fn clear_cache(&mut self) {
        self.neighbours = None;
        self.inside_points = None;
        self.midpoints = None;
    }
}
