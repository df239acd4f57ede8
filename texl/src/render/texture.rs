use super::texel::Texel;
use crate::format::Format;
use crate::math::UVec2;
use arrayvec::ArrayVec;
use bytemuck::Pod;
use image::RgbaImage;
use rayon::prelude::*;

pub const MAX_MIP_LEVELS: usize = 16;

/// Placement of one mip level inside the texture storage, in bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Mip {
    pub dimensions: UVec2,
    pub offset: usize,
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TextureError {
    #[error("format {0:?} is not a valid texture format")]
    InvalidFormat(Format),

    #[error("texture extent {0:?} has a zero side")]
    ZeroExtent(UVec2),

    #[error("requested {requested} mip levels, at most {max} fit")]
    TooManyLevels { requested: usize, max: usize },

    #[error("a texture needs at least one mip level")]
    NoLevels,

    #[error("{levels} mip levels of {dimensions:?} {format:?} texels do not fit in memory")]
    TooLarge { format: Format, dimensions: UVec2, levels: usize },
}

/// In-memory 2D mip chain.
///
/// Levels are laid out back to back, level 0 first. Each level is `ceil(w / block_w) *
/// ceil(h / block_h)` blocks of `format.block_size()` bytes, so for uncompressed formats a
/// level is simply `w * h` texels. Storage is 8-byte aligned, which lets every level be viewed
/// as a slice of any texel type whose size equals the block size.
#[derive(Clone, PartialEq)]
pub struct Texture2D {
    storage: Vec<u64>,
    len: usize,
    format: Format,
    mips: ArrayVec<Mip, MAX_MIP_LEVELS>,
}

impl Texture2D {
    pub fn new(format: Format, dimensions: UVec2, levels: usize) -> Result<Self, TextureError> {
        let (Some(block_size), Some(block_extent)) = (format.block_size(), format.block_dimensions()) else {
            return Err(TextureError::InvalidFormat(format));
        };
        if dimensions.x == 0 || dimensions.y == 0 {
            return Err(TextureError::ZeroExtent(dimensions));
        }
        if levels == 0 {
            return Err(TextureError::NoLevels);
        }
        let max = Self::max_levels(dimensions);
        if levels > max {
            return Err(TextureError::TooManyLevels { requested: levels, max });
        }

        let too_large = TextureError::TooLarge { format, dimensions, levels };
        let mut mips = ArrayVec::new();
        let mut total_size = 0usize;
        let mut dim = dimensions;
        for _ in 0..levels {
            let blocks_x = dim.x.div_ceil(block_extent[0]) as usize;
            let blocks_y = dim.y.div_ceil(block_extent[1]) as usize;
            let size = blocks_x
                .checked_mul(blocks_y)
                .and_then(|blocks| blocks.checked_mul(block_size))
                .ok_or_else(|| too_large.clone())?;
            mips.push(Mip { dimensions: dim, offset: total_size, size });
            total_size = total_size.checked_add(size).ok_or_else(|| too_large.clone())?;
            dim = dim.halved();
        }
        // Allocations are capped at isize::MAX bytes.
        if total_size > isize::MAX as usize {
            return Err(too_large);
        }

        log::debug!("texture2d: {:?} {}x{}, {} levels, {} bytes", format, dimensions.x, dimensions.y, levels, total_size);

        Ok(Texture2D { storage: vec![0u64; total_size.div_ceil(8)], len: total_size, format, mips })
    }

    /// Length of the full chain down to 1x1, capped at `MAX_MIP_LEVELS`.
    pub fn max_levels(dimensions: UVec2) -> usize {
        let largest = dimensions.x.max(dimensions.y);
        ((u32::BITS - largest.leading_zeros()) as usize).clamp(1, MAX_MIP_LEVELS)
    }

    /// Single level RGBA8_UNORM_PACK8 texture holding the image's pixels.
    pub fn from_rgba_image(image: &RgbaImage) -> Result<Self, TextureError> {
        let (width, height) = image.dimensions();
        let mut texture = Texture2D::new(Format::RGBA8_UNORM_PACK8, UVec2::new(width, height), 1)?;
        texture.bytes_mut().copy_from_slice(image.as_raw());
        Ok(texture)
    }

    /// Copies a level out as an image. Only 4x8-bit RGBA formats qualify.
    pub fn to_rgba_image(&self, level: usize) -> Option<RgbaImage> {
        let rgba8 = [Format::RGBA8_UNORM_PACK8, Format::RGBA8_SRGB_PACK8, Format::RGBA8_UNORM_PACK32];
        if !rgba8.contains(&self.format) {
            return None;
        }
        let mip = self.mips.get(level)?;
        let bytes = self.bytes()[mip.offset..mip.offset + mip.size].to_vec();
        RgbaImage::from_raw(mip.dimensions.x, mip.dimensions.y, bytes)
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn levels(&self) -> usize {
        self.mips.len()
    }

    pub fn dimensions(&self) -> UVec2 {
        self.mips[0].dimensions
    }

    pub fn mips(&self) -> &[Mip] {
        &self.mips
    }

    pub fn level_dimensions(&self, level: usize) -> UVec2 {
        self.mip(level).dimensions
    }

    pub fn bytes(&self) -> &[u8] {
        &bytemuck::cast_slice::<u64, u8>(&self.storage)[..self.len]
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut bytemuck::cast_slice_mut::<u64, u8>(&mut self.storage)[..self.len]
    }

    /// Texels of a level. `T` is expected to be exactly one block wide.
    pub fn level_data<T: Pod>(&self, level: usize) -> &[T] {
        let mip = *self.mip(level);
        bytemuck::cast_slice(&self.bytes()[mip.offset..mip.offset + mip.size])
    }

    pub fn level_data_mut<T: Pod>(&mut self, level: usize) -> &mut [T] {
        let mip = *self.mip(level);
        bytemuck::cast_slice_mut(&mut self.bytes_mut()[mip.offset..mip.offset + mip.size])
    }

    /// Number of `T` elements in a level.
    pub fn level_size<T: Pod>(&self, level: usize) -> usize {
        self.mip(level).size / std::mem::size_of::<T>()
    }

    /// The whole chain as one slice of texels, for samplers that address levels by offset.
    pub fn texels_mut<T: Texel>(&mut self) -> &mut [T] {
        self.assert_texel::<T>();
        bytemuck::cast_slice_mut(self.bytes_mut())
    }

    pub fn fetch<T: Texel>(&self, coord: UVec2, level: usize) -> T {
        self.assert_texel::<T>();
        let index = self.texel_index(coord, level);
        self.level_data::<T>(level)[index]
    }

    pub fn write<T: Texel>(&mut self, coord: UVec2, level: usize, value: T) {
        self.assert_texel::<T>();
        let index = self.texel_index(coord, level);
        self.level_data_mut::<T>(level)[index] = value;
    }

    pub fn fill<T: Texel>(&mut self, level: usize, value: T) {
        self.assert_texel::<T>();
        self.level_data_mut::<T>(level).par_iter_mut().for_each(|texel| *texel = value);
    }

    fn mip(&self, level: usize) -> &Mip {
        assert!(level < self.mips.len(), "level out of bounds: {} >= {}", level, self.mips.len());
        &self.mips[level]
    }

    fn texel_index(&self, coord: UVec2, level: usize) -> usize {
        let dim = self.mip(level).dimensions;
        assert!(coord.x < dim.x, "x out of bounds: {} >= {}", coord.x, dim.x);
        assert!(coord.y < dim.y, "y out of bounds: {} >= {}", coord.y, dim.y);
        coord.x as usize + coord.y as usize * dim.x as usize
    }

    fn assert_texel<T>(&self) {
        assert!(!self.format.is_compressed(), "{:?} texels are not individually addressable", self.format);
        assert_eq!(
            Some(std::mem::size_of::<T>()),
            self.format.block_size(),
            "texel type does not match {:?}",
            self.format
        );
    }
}

impl std::fmt::Debug for Texture2D {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Texture2D").field("format", &self.format).field("mips", &self.mips.as_slice()).finish()
    }
}
