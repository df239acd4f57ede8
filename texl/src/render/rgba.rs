use super::texel::Texel;
use crate::format::{Swizzles, swizzle};
use bytemuck::{Pod, Zeroable};

/// Texel of the RGBA8 formats.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Zeroable, Pod)]
pub struct RGBA {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RGBA {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_array(self) -> [u8; 4] {
        bytemuck::cast(self)
    }

    pub fn swizzled(self, swizzles: Swizzles) -> Self {
        swizzle(self.to_array(), swizzles).into()
    }
}

impl From<[u8; 4]> for RGBA {
    fn from(v: [u8; 4]) -> Self {
        bytemuck::cast(v)
    }
}

impl Texel for RGBA {
    #[inline]
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        <[u8; 4] as Texel>::lerp(a.to_array(), b.to_array(), t).into()
    }

    #[inline]
    fn bilerp(c00: Self, c10: Self, c01: Self, c11: Self, s: f32, t: f32) -> Self {
        <[u8; 4] as Texel>::bilerp(c00.to_array(), c10.to_array(), c01.to_array(), c11.to_array(), s, t).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{Format, Swizzle};

    #[test]
    fn packing() {
        let c = RGBA::new(1, 2, 3, 4);
        assert_eq!(c.to_array(), [1, 2, 3, 4]);
        assert_eq!(RGBA::from([1, 2, 3, 4]), c);
    }

    #[test]
    fn lerp() {
        let a = RGBA::new(0, 0, 0, 255);
        let b = RGBA::new(255, 100, 10, 255);
        assert_eq!(RGBA::lerp(a, b, 0.0), a);
        assert_eq!(RGBA::lerp(a, b, 1.0), b);
        assert_eq!(RGBA::lerp(a, b, 0.5), RGBA::new(128, 50, 5, 255));
    }

    #[test]
    fn swizzled_by_format() {
        let stored = RGBA::new(10, 20, 30, 40);
        let swizzles = Format::BGRA8_UNORM_PACK8.swizzles().unwrap();
        assert_eq!(stored.swizzled(swizzles), RGBA::new(30, 20, 10, 40));
        let swizzles = [Swizzle::Red, Swizzle::Green, Swizzle::Blue, Swizzle::One];
        assert_eq!(stored.swizzled(swizzles), RGBA::new(10, 20, 30, 255));
    }
}
