//! Subdivision-surface refinement over [`subsurf_mesh::Mesh`].
//!
//! Every stencil consumes the input mesh's topology and geometry and builds
//! a wholly new mesh; the only input mutation is derived-data memoization
//! and fan-order repair, which do not change what the mesh describes.

use std::collections::HashMap;
use std::hash::Hash;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use subsurf_core::error::{Result, SubsurfError};
use subsurf_math::Point3;
use subsurf_mesh::{Mesh, VertexKey};

pub mod catmull_clark;
pub mod doo_sabin;
pub mod loop_scheme;
pub mod peters_reif;

pub use catmull_clark::catmull_clark;
pub use doo_sabin::doo_sabin;
pub use loop_scheme::loop_scheme;
pub use peters_reif::peters_reif;

/// Add `position` to the output mesh once per provenance key.
///
/// New vertices are deduplicated by where they came from (a face, an
/// undirected edge, an original vertex), never by coordinates: two stencil
/// points that happen to coincide geometrically stay distinct vertices.
pub(crate) fn intern_vertex<K>(
    out: &mut Mesh,
    interned: &mut HashMap<K, VertexKey>,
    key: K,
    position: Point3,
) -> VertexKey
where
    K: Copy + Eq + Hash,
{
    if let Some(&v) = interned.get(&key) {
        return v;
    }
    let v = out.add_vertex(position);
    interned.insert(key, v);
    v
}

/// Vertices in serialization-id order, for deterministic per-vertex passes.
pub(crate) fn vertices_by_id(mesh: &Mesh) -> Vec<VertexKey> {
    let mut keys: Vec<VertexKey> = mesh.vertices.keys().collect();
    keys.sort_by_key(|&v| mesh.vertices[v].id);
    keys
}

/// The available subdivision stencils.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    CatmullClark,
    DooSabin,
    Loop,
    PetersReif,
    /// Alternates Catmull-Clark (even iterations) and Doo-Sabin (odd).
    Mixed,
}

impl FromStr for Algorithm {
    type Err = SubsurfError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            // "CathmulClark" is the historical UI spelling.
            "CatmullClark" | "CathmulClark" => Ok(Self::CatmullClark),
            "DooSabin" => Ok(Self::DooSabin),
            "Loop" => Ok(Self::Loop),
            "PetersReif" => Ok(Self::PetersReif),
            "Mixed" => Ok(Self::Mixed),
            other => Err(SubsurfError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl Algorithm {
    /// Loop subdivision is only defined on triangular meshes; the loader
    /// fan-triangulates the input for it.
    pub fn requires_triangular_input(self) -> bool {
        matches!(self, Self::Loop)
    }

    /// Run one refinement step. `iteration` selects the stencil for
    /// [`Algorithm::Mixed`] and is ignored otherwise.
    pub fn apply(self, mesh: &mut Mesh, iteration: u32) -> Result<Mesh> {
        match self {
            Self::CatmullClark => catmull_clark(mesh),
            Self::DooSabin => doo_sabin(mesh),
            Self::Loop => loop_scheme(mesh),
            Self::PetersReif => peters_reif(mesh),
            Self::Mixed => {
                if iteration % 2 == 0 {
                    catmull_clark(mesh)
                } else {
                    doo_sabin(mesh)
                }
            }
        }
    }
}

/// Load `input`, refine it `iterations` times with `algorithm`, and save the
/// result to `output`. Both paths must end in `.off`; nothing is written on
/// any error path.
pub fn subdivide(input: &Path, output: &Path, iterations: u32, algorithm: Algorithm) -> Result<()> {
    if iterations == 0 {
        return Err(SubsurfError::InvalidOperation(
            "iterations must be at least 1".into(),
        ));
    }
    if output.extension().and_then(|e| e.to_str()) != Some("off") {
        return Err(SubsurfError::UnsupportedFormat(format!(
            "output must be an .off file, got '{}'",
            output.display()
        )));
    }

    let mut mesh = subsurf_off::load(input, algorithm.requires_triangular_input())?;
    for iteration in 0..iterations {
        debug!(
            iteration,
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            "applying subdivision step"
        );
        mesh = algorithm.apply(&mut mesh, iteration)?;
    }
    subsurf_off::save(&mesh, output)
}
