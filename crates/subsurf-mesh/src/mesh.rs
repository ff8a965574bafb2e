use serde::{Deserialize, Serialize};
use slotmap::SlotMap;
use subsurf_core::error::{Result, SubsurfError};
use subsurf_core::IdAllocator;
use subsurf_math::{centroid, Point3};

use crate::types::{Face, FaceKey, Vertex, VertexKey};

/// A polygon mesh as a vertex/face arena with bidirectional incidence.
///
/// Faces hold their ordered vertex loop; vertices hold back-references to
/// the faces using them. Both collections are owned here, so discarding a
/// mesh discards its whole generation of vertices and faces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: SlotMap<VertexKey, Vertex>,
    pub faces: SlotMap<FaceKey, Face>,
    /// Face insertion order; serialization must never reorder faces.
    pub face_order: Vec<FaceKey>,
    ids: IdAllocator,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            vertices: SlotMap::with_key(),
            faces: SlotMap::with_key(),
            face_order: Vec::new(),
            ids: IdAllocator::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Add a vertex with a freshly allocated id.
    pub fn add_vertex(&mut self, position: Point3) -> VertexKey {
        let id = self.ids.fresh();
        self.vertices.insert(Vertex {
            id,
            position,
            faces: Vec::new(),
        })
    }

    /// Add a vertex with a caller-chosen id (file parsing). Future fresh ids
    /// are guaranteed to land past it.
    pub fn add_vertex_with_id(&mut self, position: Point3, id: u64) -> VertexKey {
        self.ids.reserve(id);
        self.vertices.insert(Vertex {
            id,
            position,
            faces: Vec::new(),
        })
    }

    pub fn position(&self, v: VertexKey) -> Point3 {
        self.vertices[v].position
    }

    /// Create a face over an ordered vertex loop and wire up incidence.
    ///
    /// Repeated vertices are deduplicated keeping the first occurrence; a
    /// face left with fewer than 3 distinct vertices is still created and
    /// later dropped by [`cleanup`](Mesh::cleanup).
    pub fn add_face(&mut self, corners: &[VertexKey]) -> Result<FaceKey> {
        for &v in corners {
            if !self.vertices.contains_key(v) {
                return Err(SubsurfError::InvalidOperation(format!(
                    "face references missing vertex {v:?}"
                )));
            }
        }

        let mut vertices = Vec::with_capacity(corners.len());
        for &v in corners {
            if !vertices.contains(&v) {
                vertices.push(v);
            }
        }

        let center = centroid(vertices.iter().map(|&v| self.vertices[v].position));
        let incident = vertices.clone();
        let key = self.faces.insert(Face::new(vertices, center));
        self.face_order.push(key);
        for v in incident {
            self.vertices[v].faces.push(key);
        }
        Ok(key)
    }

    /// Drop degenerate faces (fewer than 3 distinct vertices) and then any
    /// vertex left without an incident face. Derived-data caches are reset
    /// since adjacency may have changed.
    pub fn cleanup(&mut self) {
        let degenerate: Vec<FaceKey> = self
            .faces
            .iter()
            .filter(|(_, f)| f.vertices.len() < 3)
            .map(|(k, _)| k)
            .collect();

        for key in degenerate {
            let vertices = self.faces[key].vertices.clone();
            for v in vertices {
                self.vertices[v].faces.retain(|&f| f != key);
            }
            self.faces.remove(key);
            self.face_order.retain(|&f| f != key);
        }

        let orphaned: Vec<VertexKey> = self
            .vertices
            .iter()
            .filter(|(_, v)| v.faces.is_empty())
            .map(|(k, _)| k)
            .collect();
        for v in orphaned {
            self.vertices.remove(v);
        }

        for (_, face) in self.faces.iter_mut() {
            face.clear_cache();
        }
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}
