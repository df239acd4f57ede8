//! Texture format metadata and a CPU sampler for 2D mip chains.

pub mod format;
pub mod math;
pub mod render;
