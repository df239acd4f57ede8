use super::sampler::{Filter, Sampler, SamplerDesc};
use super::texel::Texel;
use super::texture::{MAX_MIP_LEVELS, Mip, Texture2D};
use super::wrap::Wrap;
use crate::math::{UVec2, Vec2};
use arrayvec::ArrayVec;

const LEVEL_FIRST: usize = 0;
const LEVEL_LAST: usize = 1;
const LEVEL_COUNT: usize = LEVEL_LAST - LEVEL_FIRST + 1;

/// Where one mip level lives inside the borrowed texel slice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct LevelCache {
    offset: usize,
    size: usize,
    dimensions: UVec2,
}

impl LevelCache {
    fn new<T>(mip: &Mip) -> Self {
        let texel_size = std::mem::size_of::<T>();
        LevelCache { offset: mip.offset / texel_size, size: mip.size / texel_size, dimensions: mip.dimensions }
    }

    #[inline]
    fn index(&self, coord: UVec2) -> usize {
        assert!(coord.x < self.dimensions.x, "x out of bounds: {} >= {}", coord.x, self.dimensions.x);
        assert!(coord.y < self.dimensions.y, "y out of bounds: {} >= {}", coord.y, self.dimensions.y);
        self.offset + coord.x as usize + coord.y as usize * self.dimensions.x as usize
    }
}

/// Fetches, writes and filters texels of a `Texture2D`.
///
/// The sampler exclusively borrows the texture for its whole lifetime; it is cheap to build
/// and meant to be rebuilt whenever a different texture or sampling state is needed.
/// Up to two mip levels are cached so that consecutive accesses at the same level do not
/// recompute the level placement.
///
/// Panics on misuse rather than reporting errors: compressed or mismatched texture formats,
/// out of range levels and out of bounds texel coordinates.
pub struct Sampler2D<'a, T: Texel> {
    sampler: Sampler<T>,
    texels: &'a mut [T],
    mips: ArrayVec<Mip, MAX_MIP_LEVELS>,
    // Fractional level the cache was last primed for by `texture_lod`.
    lod: Option<f32>,
    levels: [usize; LEVEL_COUNT],
    caches: [LevelCache; LEVEL_COUNT],
}

impl<'a, T: Texel> Sampler2D<'a, T> {
    pub fn new(texture: &'a mut Texture2D, wrap: Wrap, mip_filter: Filter, min_filter: Filter) -> Self {
        let format = texture.format();
        assert!(format.is_valid(), "invalid texture format {:?}", format);
        assert!(!format.is_compressed(), "can't sample compressed format {:?}", format);
        assert_eq!(
            format.block_size(),
            Some(std::mem::size_of::<T>()),
            "texel type is {} bytes wide, {:?} texels are not",
            std::mem::size_of::<T>(),
            format
        );
        assert!(texture.levels() > 0);

        // No second level to blend with.
        let mip_filter = if texture.levels() > 1 { mip_filter } else { Filter::Nearest };
        log::debug!(
            "sampler2d: {:?} {}x{}, {} levels, wrap {:?}, mip {:?}, min {:?}",
            format,
            texture.dimensions().x,
            texture.dimensions().y,
            texture.levels(),
            wrap,
            mip_filter,
            min_filter
        );

        let mips: ArrayVec<Mip, MAX_MIP_LEVELS> = texture.mips().iter().copied().collect();
        let mut sampler = Sampler2D {
            sampler: Sampler::new(wrap, mip_filter, min_filter),
            texels: texture.texels_mut::<T>(),
            mips,
            lod: None,
            levels: [0; LEVEL_COUNT],
            caches: [LevelCache::default(); LEVEL_COUNT],
        };
        sampler.update_cache_level(0);
        sampler.lod = Some(0.0);
        sampler
    }

    pub fn from_desc(texture: &'a mut Texture2D, desc: SamplerDesc) -> Self {
        Self::new(texture, desc.wrap, desc.mip_filter, desc.min_filter)
    }

    pub fn wrap(&self) -> Wrap {
        self.sampler.wrap()
    }

    /// Effective mip filter, `Nearest` for single level textures.
    pub fn mip_filter(&self) -> Filter {
        self.sampler.mip_filter()
    }

    /// Integer levels currently held by the lower and upper cache slots.
    pub fn cached_levels(&self) -> [usize; LEVEL_COUNT] {
        self.levels
    }

    pub fn texel_fetch(&mut self, coord: UVec2, level: usize) -> T {
        if self.levels[LEVEL_FIRST] != level {
            self.update_cache_level(level);
        }
        let index = self.caches[LEVEL_FIRST].index(coord);
        self.texels[index]
    }

    pub fn texel_write(&mut self, coord: UVec2, level: usize, value: T) {
        if self.levels[LEVEL_FIRST] != level {
            self.update_cache_level(level);
        }
        let index = self.caches[LEVEL_FIRST].index(coord);
        self.texels[index] = value;
    }

    /// Filtered sample at a fractional level in `[0, levels - 1]`.
    ///
    /// Only the lower of the two selected levels is read; there is no blending between levels.
    pub fn texture_lod(&mut self, texcoord: Vec2, level: f32) -> T {
        let texcoord = self.sampler.wrap_texcoord(texcoord);
        if self.lod != Some(level) {
            self.update_cache_mips(level);
        }
        let cache = &self.caches[LEVEL_FIRST];
        let texels = &self.texels[cache.offset..cache.offset + cache.size];
        self.sampler.lookup(texels, cache.dimensions, texcoord)
    }

    fn level_cache(&self, level: usize) -> LevelCache {
        assert!(level < self.mips.len(), "level out of bounds: {} >= {}", level, self.mips.len());
        LevelCache::new::<T>(&self.mips[level])
    }

    fn update_cache_level(&mut self, level: usize) {
        log::trace!("sampler2d: caching level {}", level);
        let cache = self.level_cache(level);
        self.levels = [level; LEVEL_COUNT];
        self.caches = [cache; LEVEL_COUNT];
        // The slots no longer describe the last fractional level.
        self.lod = None;
    }

    fn update_cache_mips(&mut self, lod: f32) {
        let last_level = (self.mips.len() - 1) as f32;
        assert!((0.0..=last_level).contains(&lod), "level {} out of range [0, {}]", lod, last_level);

        let (first, last) = match self.sampler.mip_filter() {
            Filter::Nearest => (lod.round(), lod.round()),
            Filter::Linear => (lod.floor(), lod.ceil()),
        };
        let (first, last) = (first as usize, last as usize);
        log::trace!("sampler2d: caching levels {} and {} for lod {}", first, last, lod);

        self.caches[LEVEL_FIRST] = self.level_cache(first);
        self.caches[LEVEL_LAST] = if first == last { self.caches[LEVEL_FIRST] } else { self.level_cache(last) };
        self.levels = [first, last];
        self.lod = Some(lod);
    }
}

impl<T: Texel> std::fmt::Debug for Sampler2D<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sampler2D")
            .field("sampler", &self.sampler)
            .field("lod", &self.lod)
            .field("levels", &self.levels)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::Format;
    use crate::render::RGBA;

    fn gradient_4x2() -> Texture2D {
        let mut texture = Texture2D::new(Format::R8_UINT_PACK8, UVec2::new(4, 2), 3).unwrap();
        for (i, texel) in texture.level_data_mut::<u8>(0).iter_mut().enumerate() {
            *texel = i as u8;
        }
        texture.fill(1, 100u8);
        texture.fill(2, 200u8);
        texture
    }

    #[test]
    fn primes_level_zero() {
        let mut texture = gradient_4x2();
        let sampler = Sampler2D::<u8>::new(&mut texture, Wrap::Repeat, Filter::Linear, Filter::Nearest);
        assert_eq!(sampler.cached_levels(), [0, 0]);
        assert_eq!(sampler.caches[LEVEL_FIRST], LevelCache { offset: 0, size: 8, dimensions: UVec2::new(4, 2) });
        assert_eq!(sampler.lod, Some(0.0));
        assert_eq!(sampler.wrap(), Wrap::Repeat);
        assert_eq!(sampler.mip_filter(), Filter::Linear);
    }

    #[test]
    fn fetch_follows_level_changes() {
        let mut texture = gradient_4x2();
        let mut sampler = Sampler2D::<u8>::new(&mut texture, Wrap::ClampToEdge, Filter::Nearest, Filter::Nearest);
        assert_eq!(sampler.texel_fetch(UVec2::new(1, 1), 0), 5);
        assert_eq!(sampler.texel_fetch(UVec2::new(1, 1), 0), 5);
        assert_eq!(sampler.texel_fetch(UVec2::new(1, 0), 1), 100);
        assert_eq!(sampler.caches[LEVEL_FIRST], LevelCache { offset: 8, size: 2, dimensions: UVec2::new(2, 1) });
        assert_eq!(sampler.texel_fetch(UVec2::new(0, 0), 2), 200);
        assert_eq!(sampler.texel_fetch(UVec2::new(3, 0), 0), 3);
    }

    #[test]
    fn fetch_after_lod_reprimes() {
        let mut texture = gradient_4x2();
        let mut sampler = Sampler2D::<u8>::new(&mut texture, Wrap::ClampToEdge, Filter::Nearest, Filter::Nearest);
        assert_eq!(sampler.texel_fetch(UVec2::new(0, 0), 2), 200);
        // lod 0 was primed at construction, the fetch above must not leave level 2 behind
        assert_eq!(sampler.texture_lod(Vec2::new(0.0, 0.0), 0.0), 0);
        assert_eq!(sampler.cached_levels(), [0, 0]);
    }

    #[test]
    fn nearest_mip_filter_rounds() {
        let mut texture = gradient_4x2();
        let mut sampler = Sampler2D::<u8>::new(&mut texture, Wrap::ClampToEdge, Filter::Nearest, Filter::Nearest);
        assert_eq!(sampler.texture_lod(Vec2::new(0.0, 0.0), 0.4), 0);
        assert_eq!(sampler.cached_levels(), [0, 0]);
        assert_eq!(sampler.texture_lod(Vec2::new(0.0, 0.0), 0.6), 100);
        assert_eq!(sampler.cached_levels(), [1, 1]);
        assert_eq!(sampler.texture_lod(Vec2::new(0.0, 0.0), 1.5), 200);
        assert_eq!(sampler.cached_levels(), [2, 2]);
    }

    #[test]
    fn linear_mip_filter_straddles_levels() {
        let mut texture = gradient_4x2();
        let mut sampler = Sampler2D::<u8>::new(&mut texture, Wrap::ClampToEdge, Filter::Linear, Filter::Nearest);
        // lower level only
        assert_eq!(sampler.texture_lod(Vec2::new(1.0, 1.0), 0.9), 7);
        assert_eq!(sampler.cached_levels(), [0, 1]);
        assert_eq!(sampler.caches[LEVEL_LAST], LevelCache { offset: 8, size: 2, dimensions: UVec2::new(2, 1) });
        assert_eq!(sampler.texture_lod(Vec2::new(1.0, 1.0), 1.0), 100);
        assert_eq!(sampler.cached_levels(), [1, 1]);
        assert_eq!(sampler.caches[LEVEL_LAST], sampler.caches[LEVEL_FIRST]);
        assert_eq!(sampler.texture_lod(Vec2::new(0.5, 0.5), 1.25), 100);
        assert_eq!(sampler.cached_levels(), [1, 2]);
    }

    #[test]
    fn single_level_forces_nearest_mip_filter() {
        let mut texture = Texture2D::new(Format::RGBA8_UNORM_PACK8, UVec2::splat(4), 1).unwrap();
        let sampler = Sampler2D::<RGBA>::new(&mut texture, Wrap::Repeat, Filter::Linear, Filter::Linear);
        assert_eq!(sampler.mip_filter(), Filter::Nearest);
    }

    #[test]
    fn writes_reach_the_texture() {
        let mut texture = Texture2D::new(Format::RGBA8_UNORM_PACK8, UVec2::new(4, 4), 2).unwrap();
        {
            let mut sampler = Sampler2D::<RGBA>::new(&mut texture, Wrap::Repeat, Filter::Nearest, Filter::Nearest);
            sampler.texel_write(UVec2::new(3, 2), 0, RGBA::new(1, 2, 3, 4));
            sampler.texel_write(UVec2::new(1, 1), 1, RGBA::new(5, 6, 7, 8));
        }
        assert_eq!(texture.fetch::<RGBA>(UVec2::new(3, 2), 0), RGBA::new(1, 2, 3, 4));
        assert_eq!(texture.fetch::<RGBA>(UVec2::new(1, 1), 1), RGBA::new(5, 6, 7, 8));
        assert_eq!(texture.fetch::<RGBA>(UVec2::new(1, 1), 0), RGBA::new(0, 0, 0, 0));
    }

    #[test]
    #[should_panic(expected = "y out of bounds: 2 >= 2")]
    fn fetch_past_the_level_end() {
        let mut texture = gradient_4x2();
        let mut sampler = Sampler2D::<u8>::new(&mut texture, Wrap::Repeat, Filter::Nearest, Filter::Nearest);
        sampler.texel_fetch(UVec2::new(0, 2), 0);
    }

    #[test]
    #[should_panic(expected = "x out of bounds: 4 >= 4")]
    fn fetch_past_the_row_end() {
        let mut texture = gradient_4x2();
        let mut sampler = Sampler2D::<u8>::new(&mut texture, Wrap::Repeat, Filter::Nearest, Filter::Nearest);
        sampler.texel_fetch(UVec2::new(4, 0), 0);
    }

    #[test]
    #[should_panic(expected = "x out of bounds: 2 >= 2")]
    fn write_past_the_row_end_of_a_smaller_level() {
        let mut texture = gradient_4x2();
        let mut sampler = Sampler2D::<u8>::new(&mut texture, Wrap::Repeat, Filter::Nearest, Filter::Nearest);
        sampler.texel_write(UVec2::new(2, 0), 1, 0);
    }

    #[test]
    #[should_panic(expected = "level out of bounds")]
    fn fetch_missing_level() {
        let mut texture = gradient_4x2();
        let mut sampler = Sampler2D::<u8>::new(&mut texture, Wrap::Repeat, Filter::Nearest, Filter::Nearest);
        sampler.texel_fetch(UVec2::new(0, 0), 3);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn lod_past_the_last_level() {
        let mut texture = gradient_4x2();
        let mut sampler = Sampler2D::<u8>::new(&mut texture, Wrap::Repeat, Filter::Linear, Filter::Nearest);
        sampler.texture_lod(Vec2::new(0.0, 0.0), 2.5);
    }

    #[test]
    #[should_panic(expected = "can't sample compressed format")]
    fn rejects_compressed_textures() {
        let mut texture = Texture2D::new(Format::RGBA_DXT5_UNORM, UVec2::splat(8), 1).unwrap();
        Sampler2D::<[u8; 16]>::new(&mut texture, Wrap::Repeat, Filter::Nearest, Filter::Nearest);
    }

    #[test]
    #[should_panic(expected = "texel type is 1 bytes wide")]
    fn rejects_mismatched_texel_type() {
        let mut texture = Texture2D::new(Format::RGBA8_UNORM_PACK8, UVec2::splat(8), 1).unwrap();
        Sampler2D::<u8>::new(&mut texture, Wrap::Repeat, Filter::Nearest, Filter::Nearest);
    }
}
