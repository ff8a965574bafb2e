pub mod error;
pub mod id;
pub mod traits;

pub use error::{Result, SubsurfError};
pub use id::IdAllocator;
