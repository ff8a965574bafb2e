pub mod point;

pub use glam::DVec3;
pub use point::{centroid, midpoint};

pub type Point3 = DVec3;
