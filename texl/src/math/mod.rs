pub mod vec2;

pub use vec2::*;

/// Linear interpolation `a + (b - a) * t`.
/// Returns exactly `a` when `a == b`, whatever `t` is.
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
