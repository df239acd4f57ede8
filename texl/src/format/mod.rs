pub mod registry;
pub mod swizzle;
mod table;

pub use registry::*;
pub use swizzle::*;
