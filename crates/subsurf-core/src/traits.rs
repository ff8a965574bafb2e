use crate::error::Result;

/// Validate structural integrity of a topological entity.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
