use super::texel::Texel;
use super::wrap::{Wrap, WrapFunction};
use crate::math::{UVec2, Vec2};

/// Texel filter, used both for minification and for picking mip levels.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    Nearest = 0,
    Linear = 1,
}

impl Filter {
    pub const FIRST: Filter = Filter::Nearest;
    pub const LAST: Filter = Filter::Linear;
    pub const COUNT: usize = Self::LAST as usize - Self::FIRST as usize + 1;

    pub const ALL: [Filter; Self::COUNT] = [Filter::Nearest, Filter::Linear];
}

/// Reads one filtered value from a level: `(texels, level dimensions, wrapped texcoord)`.
pub type LookupFunction<T> = fn(&[T], UVec2, Vec2) -> T;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SamplerDesc {
    pub wrap: Wrap,
    pub mip_filter: Filter,
    pub min_filter: Filter,
}

impl SamplerDesc {
    pub fn new(wrap: Wrap, mip_filter: Filter, min_filter: Filter) -> Self {
        Self { wrap, mip_filter, min_filter }
    }
}

// Indexed by `Filter as usize`.
fn lookup_functions<T: Texel>() -> [LookupFunction<T>; Filter::COUNT] {
    [lookup_nearest::<T>, lookup_linear::<T>]
}

/// Wrap and lookup functions resolved once from a `SamplerDesc`.
pub struct Sampler<T: Texel> {
    wrap: Wrap,
    wrap_function: WrapFunction,
    lookup_function: LookupFunction<T>,
    mip_filter: Filter,
}

impl<T: Texel> Sampler<T> {
    pub fn new(wrap: Wrap, mip_filter: Filter, min_filter: Filter) -> Self {
        Sampler {
            wrap,
            wrap_function: wrap.function(),
            lookup_function: lookup_functions::<T>()[min_filter as usize],
            mip_filter,
        }
    }

    pub fn wrap(&self) -> Wrap {
        self.wrap
    }

    pub fn mip_filter(&self) -> Filter {
        self.mip_filter
    }

    #[inline]
    pub fn wrap_texcoord(&self, texcoord: Vec2) -> Vec2 {
        texcoord.map(self.wrap_function)
    }

    /// `texcoord` must already be wrapped into [0, 1].
    #[inline]
    pub fn lookup(&self, texels: &[T], dimensions: UVec2, texcoord: Vec2) -> T {
        (self.lookup_function)(texels, dimensions, texcoord)
    }
}

impl<T: Texel> Clone for Sampler<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Texel> Copy for Sampler<T> {}

impl<T: Texel> std::fmt::Debug for Sampler<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sampler").field("wrap", &self.wrap).field("mip_filter", &self.mip_filter).finish()
    }
}

// Texel space spans [0, size - 1], so 0 and 1 land exactly on the edge texels.
#[inline]
fn texel_space(dimensions: UVec2, texcoord: Vec2) -> Vec2 {
    texcoord * Vec2::new((dimensions.x - 1) as f32, (dimensions.y - 1) as f32)
}

pub fn lookup_nearest<T: Texel>(texels: &[T], dimensions: UVec2, texcoord: Vec2) -> T {
    let st = texel_space(dimensions, texcoord).floor();
    let s = st.x as usize;
    let t = st.y as usize;
    texels[s + t * dimensions.x as usize]
}

/// Two-axis bilinear filter. Both row blends are weighted by the fractional offset along s,
/// the final column blend by the fractional offset along t. Integer texels are rounded once,
/// after the column blend.
pub fn lookup_linear<T: Texel>(texels: &[T], dimensions: UVec2, texcoord: Vec2) -> T {
    let st = texel_space(dimensions, texcoord);
    let below = st.floor();
    let above = st.ceil();
    let weight = st - below;

    let width = dimensions.x as usize;
    let (s_below, s_above) = (below.x as usize, above.x as usize);
    let (t_below, t_above) = (below.y as usize, above.y as usize);

    let v00 = texels[s_below + t_below * width];
    let v10 = texels[s_above + t_below * width];
    let v11 = texels[s_above + t_above * width];
    let v01 = texels[s_below + t_above * width];

    T::bilerp(v00, v10, v01, v11, weight.x, weight.y)
}
