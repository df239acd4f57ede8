use super::swizzle::Swizzles;
use super::table::{FORMAT_TABLE, FormatDesc};
use bitflags::bitflags;

/// Texture storage format identifier.
///
/// Identifiers are dense: every raw value in `[FIRST, LAST]` names a format with a
/// complete descriptor. `UNDEFINED` (0) and `INVALID` (-1) sit outside that range, and
/// so does any other raw value built with [`Format::from_raw`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct Format(i32);

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FormatFlags: u16 {
        const COMPRESSED = 1 << 0;
        const PACKED = 1 << 1;
        const SRGB = 1 << 2;
        const DEPTH = 1 << 3;
        const STENCIL = 1 << 4;
        const NORMALIZED = 1 << 5;
        const SCALED = 1 << 6;
        const INTEGER = 1 << 7;
        const FLOAT = 1 << 8;
        const SIGNED = 1 << 9;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("format id {0} is outside of the valid range")]
    OutOfRange(i32),
}

impl Format {
    pub const UNDEFINED: Format = Format(0);
    pub const INVALID: Format = Format(-1);

    pub const RG4_UNORM_PACK8: Format = Format(1);
    pub const RGBA4_UNORM_PACK16: Format = Format(2);
    pub const BGRA4_UNORM_PACK16: Format = Format(3);
    pub const R5G6B5_UNORM_PACK16: Format = Format(4);
    pub const B5G6R5_UNORM_PACK16: Format = Format(5);
    pub const RGB5A1_UNORM_PACK16: Format = Format(6);
    pub const BGR5A1_UNORM_PACK16: Format = Format(7);
    pub const A1RGB5_UNORM_PACK16: Format = Format(8);
    pub const R8_UNORM_PACK8: Format = Format(9);
    pub const R8_SNORM_PACK8: Format = Format(10);
    pub const R8_USCALED_PACK8: Format = Format(11);
    pub const R8_SSCALED_PACK8: Format = Format(12);
    pub const R8_UINT_PACK8: Format = Format(13);
    pub const R8_SINT_PACK8: Format = Format(14);
    pub const R8_SRGB_PACK8: Format = Format(15);
    pub const RG8_UNORM_PACK8: Format = Format(16);
    pub const RG8_SNORM_PACK8: Format = Format(17);
    pub const RG8_USCALED_PACK8: Format = Format(18);
    pub const RG8_SSCALED_PACK8: Format = Format(19);
    pub const RG8_UINT_PACK8: Format = Format(20);
    pub const RG8_SINT_PACK8: Format = Format(21);
    pub const RG8_SRGB_PACK8: Format = Format(22);
    pub const RGB8_UNORM_PACK8: Format = Format(23);
    pub const RGB8_SNORM_PACK8: Format = Format(24);
    pub const RGB8_USCALED_PACK8: Format = Format(25);
    pub const RGB8_SSCALED_PACK8: Format = Format(26);
    pub const RGB8_UINT_PACK8: Format = Format(27);
    pub const RGB8_SINT_PACK8: Format = Format(28);
    pub const RGB8_SRGB_PACK8: Format = Format(29);
    pub const BGR8_UNORM_PACK8: Format = Format(30);
    pub const BGR8_SNORM_PACK8: Format = Format(31);
    pub const BGR8_USCALED_PACK8: Format = Format(32);
    pub const BGR8_SSCALED_PACK8: Format = Format(33);
    pub const BGR8_UINT_PACK8: Format = Format(34);
    pub const BGR8_SINT_PACK8: Format = Format(35);
    pub const BGR8_SRGB_PACK8: Format = Format(36);
    pub const RGBA8_UNORM_PACK8: Format = Format(37);
    pub const RGBA8_SNORM_PACK8: Format = Format(38);
    pub const RGBA8_USCALED_PACK8: Format = Format(39);
    pub const RGBA8_SSCALED_PACK8: Format = Format(40);
    pub const RGBA8_UINT_PACK8: Format = Format(41);
    pub const RGBA8_SINT_PACK8: Format = Format(42);
    pub const RGBA8_SRGB_PACK8: Format = Format(43);
    pub const BGRA8_UNORM_PACK8: Format = Format(44);
    pub const BGRA8_SNORM_PACK8: Format = Format(45);
    pub const BGRA8_USCALED_PACK8: Format = Format(46);
    pub const BGRA8_SSCALED_PACK8: Format = Format(47);
    pub const BGRA8_UINT_PACK8: Format = Format(48);
    pub const BGRA8_SINT_PACK8: Format = Format(49);
    pub const BGRA8_SRGB_PACK8: Format = Format(50);
    pub const RGBA8_UNORM_PACK32: Format = Format(51);
    pub const RGBA8_SNORM_PACK32: Format = Format(52);
    pub const RGBA8_USCALED_PACK32: Format = Format(53);
    pub const RGBA8_SSCALED_PACK32: Format = Format(54);
    pub const RGBA8_UINT_PACK32: Format = Format(55);
    pub const RGBA8_SINT_PACK32: Format = Format(56);
    pub const RGBA8_SRGB_PACK32: Format = Format(57);
    pub const RGB10A2_UNORM_PACK32: Format = Format(58);
    pub const RGB10A2_SNORM_PACK32: Format = Format(59);
    pub const RGB10A2_USCALED_PACK32: Format = Format(60);
    pub const RGB10A2_SSCALED_PACK32: Format = Format(61);
    pub const RGB10A2_UINT_PACK32: Format = Format(62);
    pub const RGB10A2_SINT_PACK32: Format = Format(63);
    pub const BGR10A2_UNORM_PACK32: Format = Format(64);
    pub const BGR10A2_SNORM_PACK32: Format = Format(65);
    pub const BGR10A2_USCALED_PACK32: Format = Format(66);
    pub const BGR10A2_SSCALED_PACK32: Format = Format(67);
    pub const BGR10A2_UINT_PACK32: Format = Format(68);
    pub const BGR10A2_SINT_PACK32: Format = Format(69);
    pub const R16_UNORM: Format = Format(70);
    pub const R16_SNORM: Format = Format(71);
    pub const R16_USCALED: Format = Format(72);
    pub const R16_SSCALED: Format = Format(73);
    pub const R16_UINT: Format = Format(74);
    pub const R16_SINT: Format = Format(75);
    pub const R16_SFLOAT: Format = Format(76);
    pub const RG16_UNORM: Format = Format(77);
    pub const RG16_SNORM: Format = Format(78);
    pub const RG16_USCALED: Format = Format(79);
    pub const RG16_SSCALED: Format = Format(80);
    pub const RG16_UINT: Format = Format(81);
    pub const RG16_SINT: Format = Format(82);
    pub const RG16_SFLOAT: Format = Format(83);
    pub const RGB16_UNORM: Format = Format(84);
    pub const RGB16_SNORM: Format = Format(85);
    pub const RGB16_USCALED: Format = Format(86);
    pub const RGB16_SSCALED: Format = Format(87);
    pub const RGB16_UINT: Format = Format(88);
    pub const RGB16_SINT: Format = Format(89);
    pub const RGB16_SFLOAT: Format = Format(90);
    pub const RGBA16_UNORM: Format = Format(91);
    pub const RGBA16_SNORM: Format = Format(92);
    pub const RGBA16_USCALED: Format = Format(93);
    pub const RGBA16_SSCALED: Format = Format(94);
    pub const RGBA16_UINT: Format = Format(95);
    pub const RGBA16_SINT: Format = Format(96);
    pub const RGBA16_SFLOAT: Format = Format(97);
    pub const R32_UINT: Format = Format(98);
    pub const R32_SINT: Format = Format(99);
    pub const R32_SFLOAT: Format = Format(100);
    pub const RG32_UINT: Format = Format(101);
    pub const RG32_SINT: Format = Format(102);
    pub const RG32_SFLOAT: Format = Format(103);
    pub const RGB32_UINT: Format = Format(104);
    pub const RGB32_SINT: Format = Format(105);
    pub const RGB32_SFLOAT: Format = Format(106);
    pub const RGBA32_UINT: Format = Format(107);
    pub const RGBA32_SINT: Format = Format(108);
    pub const RGBA32_SFLOAT: Format = Format(109);
    pub const R64_UINT: Format = Format(110);
    pub const R64_SINT: Format = Format(111);
    pub const R64_SFLOAT: Format = Format(112);
    pub const RG64_UINT: Format = Format(113);
    pub const RG64_SINT: Format = Format(114);
    pub const RG64_SFLOAT: Format = Format(115);
    pub const RGB64_UINT: Format = Format(116);
    pub const RGB64_SINT: Format = Format(117);
    pub const RGB64_SFLOAT: Format = Format(118);
    pub const RGBA64_UINT: Format = Format(119);
    pub const RGBA64_SINT: Format = Format(120);
    pub const RGBA64_SFLOAT: Format = Format(121);
    pub const RG11B10_UFLOAT_PACK32: Format = Format(122);
    pub const RGB9E5_UFLOAT_PACK32: Format = Format(123);
    pub const D16_UNORM: Format = Format(124);
    pub const D24_UNORM_X8_UINT: Format = Format(125);
    pub const D32_SFLOAT: Format = Format(126);
    pub const S8_UINT: Format = Format(127);
    pub const D16_UNORM_S8_UINT: Format = Format(128);
    pub const D24_UNORM_S8_UINT: Format = Format(129);
    pub const D32_SFLOAT_S8_UINT: Format = Format(130);
    pub const RGB_DXT1_UNORM: Format = Format(131);
    pub const RGB_DXT1_SRGB: Format = Format(132);
    pub const RGBA_DXT1_UNORM: Format = Format(133);
    pub const RGBA_DXT1_SRGB: Format = Format(134);
    pub const RGBA_DXT3_UNORM: Format = Format(135);
    pub const RGBA_DXT3_SRGB: Format = Format(136);
    pub const RGBA_DXT5_UNORM: Format = Format(137);
    pub const RGBA_DXT5_SRGB: Format = Format(138);
    pub const R_ATI1N_UNORM: Format = Format(139);
    pub const R_ATI1N_SNORM: Format = Format(140);
    pub const RG_ATI2N_UNORM: Format = Format(141);
    pub const RG_ATI2N_SNORM: Format = Format(142);
    pub const RGB_BP_UFLOAT: Format = Format(143);
    pub const RGB_BP_SFLOAT: Format = Format(144);
    pub const RGBA_BP_UNORM: Format = Format(145);
    pub const RGBA_BP_SRGB: Format = Format(146);
    pub const RGB_ETC2_UNORM: Format = Format(147);
    pub const RGB_ETC2_SRGB: Format = Format(148);
    pub const RGBA_ETC2_A1_UNORM: Format = Format(149);
    pub const RGBA_ETC2_A1_SRGB: Format = Format(150);
    pub const RGBA_ETC2_UNORM: Format = Format(151);
    pub const RGBA_ETC2_SRGB: Format = Format(152);
    pub const R_EAC_UNORM: Format = Format(153);
    pub const R_EAC_SNORM: Format = Format(154);
    pub const RG_EAC_UNORM: Format = Format(155);
    pub const RG_EAC_SNORM: Format = Format(156);
    pub const RGBA_ASTC_4X4_UNORM: Format = Format(157);
    pub const RGBA_ASTC_4X4_SRGB: Format = Format(158);
    pub const RGBA_ASTC_5X4_UNORM: Format = Format(159);
    pub const RGBA_ASTC_5X4_SRGB: Format = Format(160);
    pub const RGBA_ASTC_5X5_UNORM: Format = Format(161);
    pub const RGBA_ASTC_5X5_SRGB: Format = Format(162);
    pub const RGBA_ASTC_6X5_UNORM: Format = Format(163);
    pub const RGBA_ASTC_6X5_SRGB: Format = Format(164);
    pub const RGBA_ASTC_6X6_UNORM: Format = Format(165);
    pub const RGBA_ASTC_6X6_SRGB: Format = Format(166);
    pub const RGBA_ASTC_8X5_UNORM: Format = Format(167);
    pub const RGBA_ASTC_8X5_SRGB: Format = Format(168);
    pub const RGBA_ASTC_8X6_UNORM: Format = Format(169);
    pub const RGBA_ASTC_8X6_SRGB: Format = Format(170);
    pub const RGBA_ASTC_8X8_UNORM: Format = Format(171);
    pub const RGBA_ASTC_8X8_SRGB: Format = Format(172);
    pub const RGBA_ASTC_10X5_UNORM: Format = Format(173);
    pub const RGBA_ASTC_10X5_SRGB: Format = Format(174);
    pub const RGBA_ASTC_10X6_UNORM: Format = Format(175);
    pub const RGBA_ASTC_10X6_SRGB: Format = Format(176);
    pub const RGBA_ASTC_10X8_UNORM: Format = Format(177);
    pub const RGBA_ASTC_10X8_SRGB: Format = Format(178);
    pub const RGBA_ASTC_10X10_UNORM: Format = Format(179);
    pub const RGBA_ASTC_10X10_SRGB: Format = Format(180);
    pub const RGBA_ASTC_12X10_UNORM: Format = Format(181);
    pub const RGBA_ASTC_12X10_SRGB: Format = Format(182);
    pub const RGBA_ASTC_12X12_UNORM: Format = Format(183);
    pub const RGBA_ASTC_12X12_SRGB: Format = Format(184);
    pub const RGB_PVRTC1_8X8_UNORM: Format = Format(185);
    pub const RGB_PVRTC1_8X8_SRGB: Format = Format(186);
    pub const RGB_PVRTC1_16X8_UNORM: Format = Format(187);
    pub const RGB_PVRTC1_16X8_SRGB: Format = Format(188);
    pub const RGBA_PVRTC1_8X8_UNORM: Format = Format(189);
    pub const RGBA_PVRTC1_8X8_SRGB: Format = Format(190);
    pub const RGBA_PVRTC1_16X8_UNORM: Format = Format(191);
    pub const RGBA_PVRTC1_16X8_SRGB: Format = Format(192);
    pub const RGBA_PVRTC2_4X4_UNORM: Format = Format(193);
    pub const RGBA_PVRTC2_4X4_SRGB: Format = Format(194);
    pub const RGBA_PVRTC2_8X4_UNORM: Format = Format(195);
    pub const RGBA_PVRTC2_8X4_SRGB: Format = Format(196);
    pub const RGB_ETC_UNORM: Format = Format(197);
    pub const RGB_ATC_UNORM: Format = Format(198);
    pub const RGBA_ATC_EXPLICIT_UNORM: Format = Format(199);
    pub const RGBA_ATC_INTERPOLATED_UNORM: Format = Format(200);
    pub const L8_UNORM: Format = Format(201);
    pub const A8_UNORM: Format = Format(202);
    pub const LA8_UNORM: Format = Format(203);
    pub const L16_UNORM: Format = Format(204);
    pub const A16_UNORM: Format = Format(205);
    pub const LA16_UNORM: Format = Format(206);
    pub const BGR8_UNORM_PACK32: Format = Format(207);
    pub const BGR8_SRGB_PACK32: Format = Format(208);
    pub const RG3B2_UNORM_PACK8: Format = Format(209);

    pub const FIRST: Format = Format::RG4_UNORM_PACK8;
    pub const LAST: Format = Format::RG3B2_UNORM_PACK8;
    pub const COUNT: usize = (Self::LAST.0 - Self::FIRST.0 + 1) as usize;
}

impl Format {
    /// Wraps a raw identifier without validating it.
    pub const fn from_raw(raw: i32) -> Format {
        Format(raw)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }

    pub const fn is_valid(self) -> bool {
        self.0 >= Self::FIRST.0 && self.0 <= Self::LAST.0
    }

    /// Every valid format, from `FIRST` to `LAST`.
    pub fn all() -> impl Iterator<Item = Format> + Clone {
        (Self::FIRST.0..=Self::LAST.0).map(Format)
    }

    fn desc(self) -> Option<&'static FormatDesc> {
        if self.is_valid() { Some(&FORMAT_TABLE[(self.0 - Self::FIRST.0) as usize]) } else { None }
    }

    // Boolean queries on an invalid id are a caller bug.
    fn has(self, flag: FormatFlags) -> bool {
        debug_assert!(self.is_valid(), "flag query on invalid format {:?}", self);
        self.desc().is_some_and(|desc| desc.flags.contains(flag))
    }

    pub fn is_compressed(self) -> bool {
        self.has(FormatFlags::COMPRESSED)
    }

    pub fn is_srgb(self) -> bool {
        self.has(FormatFlags::SRGB)
    }

    pub fn is_packed(self) -> bool {
        self.has(FormatFlags::PACKED)
    }

    pub fn is_depth(self) -> bool {
        self.has(FormatFlags::DEPTH)
    }

    pub fn is_stencil(self) -> bool {
        self.has(FormatFlags::STENCIL)
    }

    pub fn flags(self) -> Option<FormatFlags> {
        self.desc().map(|desc| desc.flags)
    }

    /// Bytes per block; for uncompressed formats a block is one texel.
    pub fn block_size(self) -> Option<usize> {
        self.desc().map(|desc| desc.block_size as usize)
    }

    /// Texel footprint of one block as `[width, height, depth]`.
    pub fn block_dimensions(self) -> Option<[u32; 3]> {
        self.desc().map(|desc| desc.block_extent.map(u32::from))
    }

    pub fn component_count(self) -> Option<usize> {
        self.desc().map(|desc| desc.components as usize)
    }

    /// Default mapping from stored channels to R, G, B, A.
    pub fn swizzles(self) -> Option<Swizzles> {
        self.desc().map(|desc| desc.swizzles)
    }

    pub fn name(self) -> Option<&'static str> {
        self.desc().map(|desc| desc.name)
    }
}

impl TryFrom<i32> for Format {
    type Error = FormatError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        let format = Format(raw);
        if format.is_valid() { Ok(format) } else { Err(FormatError::OutOfRange(raw)) }
    }
}

impl From<Format> for i32 {
    fn from(format: Format) -> i32 {
        format.0
    }
}

impl std::fmt::Debug for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.name(), *self) {
            (Some(name), _) => f.write_str(name),
            (None, Format::UNDEFINED) => f.write_str("UNDEFINED"),
            (None, Format::INVALID) => f.write_str("INVALID"),
            (None, Format(raw)) => write!(f, "Format({})", raw),
        }
    }
}
