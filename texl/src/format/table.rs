//! Per-format descriptors, indexed by `Format::raw() - Format::FIRST.raw()`.

use super::{Format, FormatFlags, Swizzle, Swizzles};

use FormatFlags as F;

pub(crate) struct FormatDesc {
    pub name: &'static str,
    pub block_size: u8,
    pub block_extent: [u8; 3],
    pub components: u8,
    pub swizzles: Swizzles,
    pub flags: FormatFlags,
}

const R001: Swizzles = [Swizzle::Red, Swizzle::Zero, Swizzle::Zero, Swizzle::One];
const RG01: Swizzles = [Swizzle::Red, Swizzle::Green, Swizzle::Zero, Swizzle::One];
const RGB1: Swizzles = [Swizzle::Red, Swizzle::Green, Swizzle::Blue, Swizzle::One];
const RGBA: Swizzles = Swizzle::RGBA;
const BGR1: Swizzles = [Swizzle::Blue, Swizzle::Green, Swizzle::Red, Swizzle::One];
const BGRA: Swizzles = [Swizzle::Blue, Swizzle::Green, Swizzle::Red, Swizzle::Alpha];
const LUMINANCE: Swizzles = [Swizzle::Red, Swizzle::Red, Swizzle::Red, Swizzle::One];
const ALPHA: Swizzles = [Swizzle::Zero, Swizzle::Zero, Swizzle::Zero, Swizzle::Red];
const LUMINANCE_ALPHA: Swizzles = [Swizzle::Red, Swizzle::Red, Swizzle::Red, Swizzle::Green];

// Individually addressable texel, the block is 1x1x1.
const fn texel(name: &'static str, size: u8, components: u8, swizzles: Swizzles, flags: FormatFlags) -> FormatDesc {
    FormatDesc { name, block_size: size, block_extent: [1, 1, 1], components, swizzles, flags }
}

const fn block(
    name: &'static str,
    size: u8,
    extent: [u8; 3],
    components: u8,
    swizzles: Swizzles,
    flags: FormatFlags,
) -> FormatDesc {
    FormatDesc { name, block_size: size, block_extent: extent, components, swizzles, flags: flags.union(F::COMPRESSED) }
}

pub(crate) static FORMAT_TABLE: [FormatDesc; Format::COUNT] = [
    // Packed 8 and 16 bit
    texel("RG4_UNORM_PACK8", 1, 2, RG01, F::PACKED.union(F::NORMALIZED)),
    texel("RGBA4_UNORM_PACK16", 2, 4, RGBA, F::PACKED.union(F::NORMALIZED)),
    texel("BGRA4_UNORM_PACK16", 2, 4, BGRA, F::PACKED.union(F::NORMALIZED)),
    texel("R5G6B5_UNORM_PACK16", 2, 3, RGB1, F::PACKED.union(F::NORMALIZED)),
    texel("B5G6R5_UNORM_PACK16", 2, 3, BGR1, F::PACKED.union(F::NORMALIZED)),
    texel("RGB5A1_UNORM_PACK16", 2, 4, RGBA, F::PACKED.union(F::NORMALIZED)),
    texel("BGR5A1_UNORM_PACK16", 2, 4, BGRA, F::PACKED.union(F::NORMALIZED)),
    texel("A1RGB5_UNORM_PACK16", 2, 4, RGBA, F::PACKED.union(F::NORMALIZED)),

    // 8 bit channels
    texel("R8_UNORM_PACK8", 1, 1, R001, F::NORMALIZED),
    texel("R8_SNORM_PACK8", 1, 1, R001, F::NORMALIZED.union(F::SIGNED)),
    texel("R8_USCALED_PACK8", 1, 1, R001, F::SCALED),
    texel("R8_SSCALED_PACK8", 1, 1, R001, F::SCALED.union(F::SIGNED)),
    texel("R8_UINT_PACK8", 1, 1, R001, F::INTEGER),
    texel("R8_SINT_PACK8", 1, 1, R001, F::INTEGER.union(F::SIGNED)),
    texel("R8_SRGB_PACK8", 1, 1, R001, F::NORMALIZED.union(F::SRGB)),
    texel("RG8_UNORM_PACK8", 2, 2, RG01, F::NORMALIZED),
    texel("RG8_SNORM_PACK8", 2, 2, RG01, F::NORMALIZED.union(F::SIGNED)),
    texel("RG8_USCALED_PACK8", 2, 2, RG01, F::SCALED),
    texel("RG8_SSCALED_PACK8", 2, 2, RG01, F::SCALED.union(F::SIGNED)),
    texel("RG8_UINT_PACK8", 2, 2, RG01, F::INTEGER),
    texel("RG8_SINT_PACK8", 2, 2, RG01, F::INTEGER.union(F::SIGNED)),
    texel("RG8_SRGB_PACK8", 2, 2, RG01, F::NORMALIZED.union(F::SRGB)),
    texel("RGB8_UNORM_PACK8", 3, 3, RGB1, F::NORMALIZED),
    texel("RGB8_SNORM_PACK8", 3, 3, RGB1, F::NORMALIZED.union(F::SIGNED)),
    texel("RGB8_USCALED_PACK8", 3, 3, RGB1, F::SCALED),
    texel("RGB8_SSCALED_PACK8", 3, 3, RGB1, F::SCALED.union(F::SIGNED)),
    texel("RGB8_UINT_PACK8", 3, 3, RGB1, F::INTEGER),
    texel("RGB8_SINT_PACK8", 3, 3, RGB1, F::INTEGER.union(F::SIGNED)),
    texel("RGB8_SRGB_PACK8", 3, 3, RGB1, F::NORMALIZED.union(F::SRGB)),
    texel("BGR8_UNORM_PACK8", 3, 3, BGR1, F::NORMALIZED),
    texel("BGR8_SNORM_PACK8", 3, 3, BGR1, F::NORMALIZED.union(F::SIGNED)),
    texel("BGR8_USCALED_PACK8", 3, 3, BGR1, F::SCALED),
    texel("BGR8_SSCALED_PACK8", 3, 3, BGR1, F::SCALED.union(F::SIGNED)),
    texel("BGR8_UINT_PACK8", 3, 3, BGR1, F::INTEGER),
    texel("BGR8_SINT_PACK8", 3, 3, BGR1, F::INTEGER.union(F::SIGNED)),
    texel("BGR8_SRGB_PACK8", 3, 3, BGR1, F::NORMALIZED.union(F::SRGB)),
    texel("RGBA8_UNORM_PACK8", 4, 4, RGBA, F::NORMALIZED),
    texel("RGBA8_SNORM_PACK8", 4, 4, RGBA, F::NORMALIZED.union(F::SIGNED)),
    texel("RGBA8_USCALED_PACK8", 4, 4, RGBA, F::SCALED),
    texel("RGBA8_SSCALED_PACK8", 4, 4, RGBA, F::SCALED.union(F::SIGNED)),
    texel("RGBA8_UINT_PACK8", 4, 4, RGBA, F::INTEGER),
    texel("RGBA8_SINT_PACK8", 4, 4, RGBA, F::INTEGER.union(F::SIGNED)),
    texel("RGBA8_SRGB_PACK8", 4, 4, RGBA, F::NORMALIZED.union(F::SRGB)),
    texel("BGRA8_UNORM_PACK8", 4, 4, BGRA, F::NORMALIZED),
    texel("BGRA8_SNORM_PACK8", 4, 4, BGRA, F::NORMALIZED.union(F::SIGNED)),
    texel("BGRA8_USCALED_PACK8", 4, 4, BGRA, F::SCALED),
    texel("BGRA8_SSCALED_PACK8", 4, 4, BGRA, F::SCALED.union(F::SIGNED)),
    texel("BGRA8_UINT_PACK8", 4, 4, BGRA, F::INTEGER),
    texel("BGRA8_SINT_PACK8", 4, 4, BGRA, F::INTEGER.union(F::SIGNED)),
    texel("BGRA8_SRGB_PACK8", 4, 4, BGRA, F::NORMALIZED.union(F::SRGB)),

    // 32 bit packed
    texel("RGBA8_UNORM_PACK32", 4, 4, RGBA, F::PACKED.union(F::NORMALIZED)),
    texel("RGBA8_SNORM_PACK32", 4, 4, RGBA, F::PACKED.union(F::NORMALIZED).union(F::SIGNED)),
    texel("RGBA8_USCALED_PACK32", 4, 4, RGBA, F::PACKED.union(F::SCALED)),
    texel("RGBA8_SSCALED_PACK32", 4, 4, RGBA, F::PACKED.union(F::SCALED).union(F::SIGNED)),
    texel("RGBA8_UINT_PACK32", 4, 4, RGBA, F::PACKED.union(F::INTEGER)),
    texel("RGBA8_SINT_PACK32", 4, 4, RGBA, F::PACKED.union(F::INTEGER).union(F::SIGNED)),
    texel("RGBA8_SRGB_PACK32", 4, 4, RGBA, F::PACKED.union(F::NORMALIZED).union(F::SRGB)),
    texel("RGB10A2_UNORM_PACK32", 4, 4, RGBA, F::PACKED.union(F::NORMALIZED)),
    texel("RGB10A2_SNORM_PACK32", 4, 4, RGBA, F::PACKED.union(F::NORMALIZED).union(F::SIGNED)),
    texel("RGB10A2_USCALED_PACK32", 4, 4, RGBA, F::PACKED.union(F::SCALED)),
    texel("RGB10A2_SSCALED_PACK32", 4, 4, RGBA, F::PACKED.union(F::SCALED).union(F::SIGNED)),
    texel("RGB10A2_UINT_PACK32", 4, 4, RGBA, F::PACKED.union(F::INTEGER)),
    texel("RGB10A2_SINT_PACK32", 4, 4, RGBA, F::PACKED.union(F::INTEGER).union(F::SIGNED)),
    texel("BGR10A2_UNORM_PACK32", 4, 4, BGRA, F::PACKED.union(F::NORMALIZED)),
    texel("BGR10A2_SNORM_PACK32", 4, 4, BGRA, F::PACKED.union(F::NORMALIZED).union(F::SIGNED)),
    texel("BGR10A2_USCALED_PACK32", 4, 4, BGRA, F::PACKED.union(F::SCALED)),
    texel("BGR10A2_SSCALED_PACK32", 4, 4, BGRA, F::PACKED.union(F::SCALED).union(F::SIGNED)),
    texel("BGR10A2_UINT_PACK32", 4, 4, BGRA, F::PACKED.union(F::INTEGER)),
    texel("BGR10A2_SINT_PACK32", 4, 4, BGRA, F::PACKED.union(F::INTEGER).union(F::SIGNED)),

    // 16 bit channels
    texel("R16_UNORM", 2, 1, R001, F::NORMALIZED),
    texel("R16_SNORM", 2, 1, R001, F::NORMALIZED.union(F::SIGNED)),
    texel("R16_USCALED", 2, 1, R001, F::SCALED),
    texel("R16_SSCALED", 2, 1, R001, F::SCALED.union(F::SIGNED)),
    texel("R16_UINT", 2, 1, R001, F::INTEGER),
    texel("R16_SINT", 2, 1, R001, F::INTEGER.union(F::SIGNED)),
    texel("R16_SFLOAT", 2, 1, R001, F::FLOAT.union(F::SIGNED)),
    texel("RG16_UNORM", 4, 2, RG01, F::NORMALIZED),
    texel("RG16_SNORM", 4, 2, RG01, F::NORMALIZED.union(F::SIGNED)),
    texel("RG16_USCALED", 4, 2, RG01, F::SCALED),
    texel("RG16_SSCALED", 4, 2, RG01, F::SCALED.union(F::SIGNED)),
    texel("RG16_UINT", 4, 2, RG01, F::INTEGER),
    texel("RG16_SINT", 4, 2, RG01, F::INTEGER.union(F::SIGNED)),
    texel("RG16_SFLOAT", 4, 2, RG01, F::FLOAT.union(F::SIGNED)),
    texel("RGB16_UNORM", 6, 3, RGB1, F::NORMALIZED),
    texel("RGB16_SNORM", 6, 3, RGB1, F::NORMALIZED.union(F::SIGNED)),
    texel("RGB16_USCALED", 6, 3, RGB1, F::SCALED),
    texel("RGB16_SSCALED", 6, 3, RGB1, F::SCALED.union(F::SIGNED)),
    texel("RGB16_UINT", 6, 3, RGB1, F::INTEGER),
    texel("RGB16_SINT", 6, 3, RGB1, F::INTEGER.union(F::SIGNED)),
    texel("RGB16_SFLOAT", 6, 3, RGB1, F::FLOAT.union(F::SIGNED)),
    texel("RGBA16_UNORM", 8, 4, RGBA, F::NORMALIZED),
    texel("RGBA16_SNORM", 8, 4, RGBA, F::NORMALIZED.union(F::SIGNED)),
    texel("RGBA16_USCALED", 8, 4, RGBA, F::SCALED),
    texel("RGBA16_SSCALED", 8, 4, RGBA, F::SCALED.union(F::SIGNED)),
    texel("RGBA16_UINT", 8, 4, RGBA, F::INTEGER),
    texel("RGBA16_SINT", 8, 4, RGBA, F::INTEGER.union(F::SIGNED)),
    texel("RGBA16_SFLOAT", 8, 4, RGBA, F::FLOAT.union(F::SIGNED)),

    // 32 bit channels
    texel("R32_UINT", 4, 1, R001, F::INTEGER),
    texel("R32_SINT", 4, 1, R001, F::INTEGER.union(F::SIGNED)),
    texel("R32_SFLOAT", 4, 1, R001, F::FLOAT.union(F::SIGNED)),
    texel("RG32_UINT", 8, 2, RG01, F::INTEGER),
    texel("RG32_SINT", 8, 2, RG01, F::INTEGER.union(F::SIGNED)),
    texel("RG32_SFLOAT", 8, 2, RG01, F::FLOAT.union(F::SIGNED)),
    texel("RGB32_UINT", 12, 3, RGB1, F::INTEGER),
    texel("RGB32_SINT", 12, 3, RGB1, F::INTEGER.union(F::SIGNED)),
    texel("RGB32_SFLOAT", 12, 3, RGB1, F::FLOAT.union(F::SIGNED)),
    texel("RGBA32_UINT", 16, 4, RGBA, F::INTEGER),
    texel("RGBA32_SINT", 16, 4, RGBA, F::INTEGER.union(F::SIGNED)),
    texel("RGBA32_SFLOAT", 16, 4, RGBA, F::FLOAT.union(F::SIGNED)),

    // 64 bit channels
    texel("R64_UINT", 8, 1, R001, F::INTEGER),
    texel("R64_SINT", 8, 1, R001, F::INTEGER.union(F::SIGNED)),
    texel("R64_SFLOAT", 8, 1, R001, F::FLOAT.union(F::SIGNED)),
    texel("RG64_UINT", 16, 2, RG01, F::INTEGER),
    texel("RG64_SINT", 16, 2, RG01, F::INTEGER.union(F::SIGNED)),
    texel("RG64_SFLOAT", 16, 2, RG01, F::FLOAT.union(F::SIGNED)),
    texel("RGB64_UINT", 24, 3, RGB1, F::INTEGER),
    texel("RGB64_SINT", 24, 3, RGB1, F::INTEGER.union(F::SIGNED)),
    texel("RGB64_SFLOAT", 24, 3, RGB1, F::FLOAT.union(F::SIGNED)),
    texel("RGBA64_UINT", 32, 4, RGBA, F::INTEGER),
    texel("RGBA64_SINT", 32, 4, RGBA, F::INTEGER.union(F::SIGNED)),
    texel("RGBA64_SFLOAT", 32, 4, RGBA, F::FLOAT.union(F::SIGNED)),

    // Packed float
    texel("RG11B10_UFLOAT_PACK32", 4, 3, RGB1, F::PACKED.union(F::FLOAT)),
    texel("RGB9E5_UFLOAT_PACK32", 4, 3, RGB1, F::PACKED.union(F::FLOAT)),

    // Depth and stencil
    texel("D16_UNORM", 2, 1, R001, F::DEPTH.union(F::NORMALIZED)),
    texel("D24_UNORM_X8_UINT", 4, 1, R001, F::DEPTH.union(F::PACKED).union(F::NORMALIZED)),
    texel("D32_SFLOAT", 4, 1, R001, F::DEPTH.union(F::FLOAT).union(F::SIGNED)),
    texel("S8_UINT", 1, 1, R001, F::STENCIL.union(F::INTEGER)),
    texel("D16_UNORM_S8_UINT", 3, 2, RG01, F::DEPTH.union(F::STENCIL)),
    texel("D24_UNORM_S8_UINT", 4, 2, RG01, F::DEPTH.union(F::STENCIL).union(F::PACKED)),
    texel("D32_SFLOAT_S8_UINT", 5, 2, RG01, F::DEPTH.union(F::STENCIL)),

    // S3TC, RGTC, BPTC
    block("RGB_DXT1_UNORM", 8, [4, 4, 1], 3, RGB1, F::NORMALIZED),
    block("RGB_DXT1_SRGB", 8, [4, 4, 1], 3, RGB1, F::NORMALIZED.union(F::SRGB)),
    block("RGBA_DXT1_UNORM", 8, [4, 4, 1], 4, RGBA, F::NORMALIZED),
    block("RGBA_DXT1_SRGB", 8, [4, 4, 1], 4, RGBA, F::NORMALIZED.union(F::SRGB)),
    block("RGBA_DXT3_UNORM", 16, [4, 4, 1], 4, RGBA, F::NORMALIZED),
    block("RGBA_DXT3_SRGB", 16, [4, 4, 1], 4, RGBA, F::NORMALIZED.union(F::SRGB)),
    block("RGBA_DXT5_UNORM", 16, [4, 4, 1], 4, RGBA, F::NORMALIZED),
    block("RGBA_DXT5_SRGB", 16, [4, 4, 1], 4, RGBA, F::NORMALIZED.union(F::SRGB)),
    block("R_ATI1N_UNORM", 8, [4, 4, 1], 1, R001, F::NORMALIZED),
    block("R_ATI1N_SNORM", 8, [4, 4, 1], 1, R001, F::NORMALIZED.union(F::SIGNED)),
    block("RG_ATI2N_UNORM", 16, [4, 4, 1], 2, RG01, F::NORMALIZED),
    block("RG_ATI2N_SNORM", 16, [4, 4, 1], 2, RG01, F::NORMALIZED.union(F::SIGNED)),
    block("RGB_BP_UFLOAT", 16, [4, 4, 1], 3, RGB1, F::FLOAT),
    block("RGB_BP_SFLOAT", 16, [4, 4, 1], 3, RGB1, F::FLOAT.union(F::SIGNED)),
    block("RGBA_BP_UNORM", 16, [4, 4, 1], 4, RGBA, F::NORMALIZED),
    block("RGBA_BP_SRGB", 16, [4, 4, 1], 4, RGBA, F::NORMALIZED.union(F::SRGB)),

    // ETC2 and EAC
    block("RGB_ETC2_UNORM", 8, [4, 4, 1], 3, RGB1, F::NORMALIZED),
    block("RGB_ETC2_SRGB", 8, [4, 4, 1], 3, RGB1, F::NORMALIZED.union(F::SRGB)),
    block("RGBA_ETC2_A1_UNORM", 8, [4, 4, 1], 4, RGBA, F::NORMALIZED),
    block("RGBA_ETC2_A1_SRGB", 8, [4, 4, 1], 4, RGBA, F::NORMALIZED.union(F::SRGB)),
    block("RGBA_ETC2_UNORM", 16, [4, 4, 1], 4, RGBA, F::NORMALIZED),
    block("RGBA_ETC2_SRGB", 16, [4, 4, 1], 4, RGBA, F::NORMALIZED.union(F::SRGB)),
    block("R_EAC_UNORM", 8, [4, 4, 1], 1, R001, F::NORMALIZED),
    block("R_EAC_SNORM", 8, [4, 4, 1], 1, R001, F::NORMALIZED.union(F::SIGNED)),
    block("RG_EAC_UNORM", 16, [4, 4, 1], 2, RG01, F::NORMALIZED),
    block("RG_EAC_SNORM", 16, [4, 4, 1], 2, RG01, F::NORMALIZED.union(F::SIGNED)),

    // ASTC, every block is 128 bits
    block("RGBA_ASTC_4X4_UNORM", 16, [4, 4, 1], 4, RGBA, F::NORMALIZED),
    block("RGBA_ASTC_4X4_SRGB", 16, [4, 4, 1], 4, RGBA, F::NORMALIZED.union(F::SRGB)),
    block("RGBA_ASTC_5X4_UNORM", 16, [5, 4, 1], 4, RGBA, F::NORMALIZED),
    block("RGBA_ASTC_5X4_SRGB", 16, [5, 4, 1], 4, RGBA, F::NORMALIZED.union(F::SRGB)),
    block("RGBA_ASTC_5X5_UNORM", 16, [5, 5, 1], 4, RGBA, F::NORMALIZED),
    block("RGBA_ASTC_5X5_SRGB", 16, [5, 5, 1], 4, RGBA, F::NORMALIZED.union(F::SRGB)),
    block("RGBA_ASTC_6X5_UNORM", 16, [6, 5, 1], 4, RGBA, F::NORMALIZED),
    block("RGBA_ASTC_6X5_SRGB", 16, [6, 5, 1], 4, RGBA, F::NORMALIZED.union(F::SRGB)),
    block("RGBA_ASTC_6X6_UNORM", 16, [6, 6, 1], 4, RGBA, F::NORMALIZED),
    block("RGBA_ASTC_6X6_SRGB", 16, [6, 6, 1], 4, RGBA, F::NORMALIZED.union(F::SRGB)),
    block("RGBA_ASTC_8X5_UNORM", 16, [8, 5, 1], 4, RGBA, F::NORMALIZED),
    block("RGBA_ASTC_8X5_SRGB", 16, [8, 5, 1], 4, RGBA, F::NORMALIZED.union(F::SRGB)),
    block("RGBA_ASTC_8X6_UNORM", 16, [8, 6, 1], 4, RGBA, F::NORMALIZED),
    block("RGBA_ASTC_8X6_SRGB", 16, [8, 6, 1], 4, RGBA, F::NORMALIZED.union(F::SRGB)),
    block("RGBA_ASTC_8X8_UNORM", 16, [8, 8, 1], 4, RGBA, F::NORMALIZED),
    block("RGBA_ASTC_8X8_SRGB", 16, [8, 8, 1], 4, RGBA, F::NORMALIZED.union(F::SRGB)),
    block("RGBA_ASTC_10X5_UNORM", 16, [10, 5, 1], 4, RGBA, F::NORMALIZED),
    block("RGBA_ASTC_10X5_SRGB", 16, [10, 5, 1], 4, RGBA, F::NORMALIZED.union(F::SRGB)),
    block("RGBA_ASTC_10X6_UNORM", 16, [10, 6, 1], 4, RGBA, F::NORMALIZED),
    block("RGBA_ASTC_10X6_SRGB", 16, [10, 6, 1], 4, RGBA, F::NORMALIZED.union(F::SRGB)),
    block("RGBA_ASTC_10X8_UNORM", 16, [10, 8, 1], 4, RGBA, F::NORMALIZED),
    block("RGBA_ASTC_10X8_SRGB", 16, [10, 8, 1], 4, RGBA, F::NORMALIZED.union(F::SRGB)),
    block("RGBA_ASTC_10X10_UNORM", 16, [10, 10, 1], 4, RGBA, F::NORMALIZED),
    block("RGBA_ASTC_10X10_SRGB", 16, [10, 10, 1], 4, RGBA, F::NORMALIZED.union(F::SRGB)),
    block("RGBA_ASTC_12X10_UNORM", 16, [12, 10, 1], 4, RGBA, F::NORMALIZED),
    block("RGBA_ASTC_12X10_SRGB", 16, [12, 10, 1], 4, RGBA, F::NORMALIZED.union(F::SRGB)),
    block("RGBA_ASTC_12X12_UNORM", 16, [12, 12, 1], 4, RGBA, F::NORMALIZED),
    block("RGBA_ASTC_12X12_SRGB", 16, [12, 12, 1], 4, RGBA, F::NORMALIZED.union(F::SRGB)),

    // PVRTC1 at 4 and 2 bpp, PVRTC2
    block("RGB_PVRTC1_8X8_UNORM", 32, [8, 8, 1], 3, RGB1, F::NORMALIZED),
    block("RGB_PVRTC1_8X8_SRGB", 32, [8, 8, 1], 3, RGB1, F::NORMALIZED.union(F::SRGB)),
    block("RGB_PVRTC1_16X8_UNORM", 32, [16, 8, 1], 3, RGB1, F::NORMALIZED),
    block("RGB_PVRTC1_16X8_SRGB", 32, [16, 8, 1], 3, RGB1, F::NORMALIZED.union(F::SRGB)),
    block("RGBA_PVRTC1_8X8_UNORM", 32, [8, 8, 1], 4, RGBA, F::NORMALIZED),
    block("RGBA_PVRTC1_8X8_SRGB", 32, [8, 8, 1], 4, RGBA, F::NORMALIZED.union(F::SRGB)),
    block("RGBA_PVRTC1_16X8_UNORM", 32, [16, 8, 1], 4, RGBA, F::NORMALIZED),
    block("RGBA_PVRTC1_16X8_SRGB", 32, [16, 8, 1], 4, RGBA, F::NORMALIZED.union(F::SRGB)),
    block("RGBA_PVRTC2_4X4_UNORM", 8, [4, 4, 1], 4, RGBA, F::NORMALIZED),
    block("RGBA_PVRTC2_4X4_SRGB", 8, [4, 4, 1], 4, RGBA, F::NORMALIZED.union(F::SRGB)),
    block("RGBA_PVRTC2_8X4_UNORM", 8, [8, 4, 1], 4, RGBA, F::NORMALIZED),
    block("RGBA_PVRTC2_8X4_SRGB", 8, [8, 4, 1], 4, RGBA, F::NORMALIZED.union(F::SRGB)),

    // ETC1 and ATC
    block("RGB_ETC_UNORM", 8, [4, 4, 1], 3, RGB1, F::NORMALIZED),
    block("RGB_ATC_UNORM", 8, [4, 4, 1], 3, RGB1, F::NORMALIZED),
    block("RGBA_ATC_EXPLICIT_UNORM", 16, [4, 4, 1], 4, RGBA, F::NORMALIZED),
    block("RGBA_ATC_INTERPOLATED_UNORM", 16, [4, 4, 1], 4, RGBA, F::NORMALIZED),

    // Legacy luminance and alpha
    texel("L8_UNORM", 1, 1, LUMINANCE, F::NORMALIZED),
    texel("A8_UNORM", 1, 1, ALPHA, F::NORMALIZED),
    texel("LA8_UNORM", 2, 2, LUMINANCE_ALPHA, F::NORMALIZED),
    texel("L16_UNORM", 2, 1, LUMINANCE, F::NORMALIZED),
    texel("A16_UNORM", 2, 1, ALPHA, F::NORMALIZED),
    texel("LA16_UNORM", 4, 2, LUMINANCE_ALPHA, F::NORMALIZED),

    // Misc packed
    texel("BGR8_UNORM_PACK32", 4, 3, BGR1, F::PACKED.union(F::NORMALIZED)),
    texel("BGR8_SRGB_PACK32", 4, 3, BGR1, F::PACKED.union(F::NORMALIZED).union(F::SRGB)),
    texel("RG3B2_UNORM_PACK8", 1, 3, RGB1, F::PACKED.union(F::NORMALIZED)),
];
