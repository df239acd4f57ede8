use crate::math::mix;
use bytemuck::Pod;

/// Scalar channel type of a texel.
pub trait Component: Pod + PartialEq + std::fmt::Debug + Send + Sync {
    const ZERO: Self;

    /// Normalized one: the type's max for integers, 1.0 for floats.
    const ONE: Self;

    fn lerp(a: Self, b: Self, t: f32) -> Self;

    /// Blends the rows `[c00, c10]` and `[c01, c11]` by `s`, then the two results by `t`.
    #[inline]
    fn bilerp(c00: Self, c10: Self, c01: Self, c11: Self, s: f32, t: f32) -> Self {
        Self::lerp(Self::lerp(c00, c10, s), Self::lerp(c01, c11, s), t)
    }
}

/// Anything a sampler can read, write and blend.
pub trait Texel: Pod + PartialEq + std::fmt::Debug + Send + Sync {
    fn lerp(a: Self, b: Self, t: f32) -> Self;

    /// Same ordering as `Component::bilerp`.
    #[inline]
    fn bilerp(c00: Self, c10: Self, c01: Self, c11: Self, s: f32, t: f32) -> Self {
        Self::lerp(Self::lerp(c00, c10, s), Self::lerp(c01, c11, s), t)
    }
}

#[inline]
fn lerp_f64(a: f64, b: f64, t: f32) -> f64 {
    a + (b - a) * t as f64
}

// Integers blend in f64 so that even u32/i32 stay exact, then round once and saturate.
macro_rules! integer_components {
    ($($t:ty),*) => {$(
        impl Component for $t {
            const ZERO: Self = 0;
            const ONE: Self = <$t>::MAX;

            #[inline]
            fn lerp(a: Self, b: Self, t: f32) -> Self {
                lerp_f64(a as f64, b as f64, t).round() as $t
            }

            #[inline]
            fn bilerp(c00: Self, c10: Self, c01: Self, c11: Self, s: f32, t: f32) -> Self {
                let below = lerp_f64(c00 as f64, c10 as f64, s);
                let above = lerp_f64(c01 as f64, c11 as f64, s);
                lerp_f64(below, above, t).round() as $t
            }
        }

        impl Texel for $t {
            #[inline]
            fn lerp(a: Self, b: Self, t: f32) -> Self {
                <$t as Component>::lerp(a, b, t)
            }

            #[inline]
            fn bilerp(c00: Self, c10: Self, c01: Self, c11: Self, s: f32, t: f32) -> Self {
                <$t as Component>::bilerp(c00, c10, c01, c11, s, t)
            }
        }
    )*};
}

integer_components!(u8, i8, u16, i16, u32, i32);

impl Component for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        mix(a, b, t)
    }
}

impl Component for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;

    #[inline]
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        lerp_f64(a, b, t)
    }
}

impl Texel for f32 {
    #[inline]
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        mix(a, b, t)
    }
}

impl Texel for f64 {
    #[inline]
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        <f64 as Component>::lerp(a, b, t)
    }
}

impl<C: Component, const N: usize> Texel for [C; N] {
    #[inline]
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        std::array::from_fn(|i| C::lerp(a[i], b[i], t))
    }

    #[inline]
    fn bilerp(c00: Self, c10: Self, c01: Self, c11: Self, s: f32, t: f32) -> Self {
        std::array::from_fn(|i| C::bilerp(c00[i], c10[i], c01[i], c11[i], s, t))
    }
}
