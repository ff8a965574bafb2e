use std::collections::HashSet;

use subsurf_core::error::{Result, SubsurfError};
use subsurf_core::traits::Validate;

use crate::mesh::Mesh;

impl Validate for Mesh {
    /// Check the post-cleanup invariants: incidence is bidirectional, every
    /// face has at least 3 distinct vertices, every vertex is used by at
    /// least one face, and no vertex lists the same face twice.
    fn validate(&self) -> Result<()> {
        for (face_key, face) in &self.faces {
            if face.vertices.len() < 3 {
                return Err(SubsurfError::InconsistentTopology(format!(
                    "face {face_key:?} has {} distinct vertices, at least 3 required",
                    face.vertices.len()
                )));
            }

            let distinct: HashSet<_> = face.vertices.iter().collect();
            if distinct.len() != face.vertices.len() {
                return Err(SubsurfError::InconsistentTopology(format!(
                    "face {face_key:?} repeats a vertex in its loop"
                )));
            }

            for &v in &face.vertices {
                let vertex = self.vertices.get(v).ok_or_else(|| {
                    SubsurfError::InconsistentTopology(format!(
                        "face {face_key:?} references vertex {v:?} that does not exist"
                    ))
                })?;
                if !vertex.faces.contains(&face_key) {
                    return Err(SubsurfError::InconsistentTopology(format!(
                        "face {face_key:?} uses vertex {} but is missing from its incidence list",
                        vertex.id
                    )));
                }
            }
        }

        for (vertex_key, vertex) in &self.vertices {
            if vertex.faces.is_empty() {
                return Err(SubsurfError::InconsistentTopology(format!(
                    "vertex {} has no incident faces",
                    vertex.id
                )));
            }

            let mut seen = HashSet::new();
            for &f in &vertex.faces {
                if !seen.insert(f) {
                    return Err(SubsurfError::InconsistentTopology(format!(
                        "vertex {} lists face {f:?} more than once",
                        vertex.id
                    )));
                }
                let face = self.faces.get(f).ok_or_else(|| {
                    SubsurfError::InconsistentTopology(format!(
                        "vertex {} references face {f:?} that does not exist",
                        vertex.id
                    ))
                })?;
                if !face.vertices.contains(&vertex_key) {
                    return Err(SubsurfError::InconsistentTopology(format!(
                        "vertex {} claims incidence with face {f:?} that does not use it",
                        vertex.id
                    )));
                }
            }
        }

        if self.face_order.len() != self.faces.len() {
            return Err(SubsurfError::InconsistentTopology(format!(
                "face order tracks {} faces but the mesh has {}",
                self.face_order.len(),
                self.faces.len()
            )));
        }

        Ok(())
    }
}
