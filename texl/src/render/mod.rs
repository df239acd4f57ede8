pub mod rgba;
pub mod sampler;
pub mod sampler2d;
pub mod texel;
pub mod texture;
pub mod wrap;

pub use rgba::*;
pub use sampler::*;
pub use sampler2d::*;
pub use texel::*;
pub use texture::*;
pub use wrap::*;
