//! Face-vertex mesh with bidirectional incidence, the topology layer every
//! subdivision stencil runs on.

pub mod mesh;
pub mod queries;
pub mod repair;
pub mod types;
pub mod validate;

pub use mesh::Mesh;
pub use repair::FanOrder;
pub use types::{edge_key, Face, FaceKey, Vertex, VertexKey};
