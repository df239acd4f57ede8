use crate::render::Component;

/// Source of one destination channel: either a stored channel or a constant.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Swizzle {
    Red = 0,
    Green = 1,
    Blue = 2,
    Alpha = 3,
    Zero = 4,
    One = 5,
}

/// Destination R, G, B, A in that order. Entries may repeat.
pub type Swizzles = [Swizzle; 4];

impl Swizzle {
    pub const FIRST: Swizzle = Swizzle::Red;
    pub const LAST: Swizzle = Swizzle::One;
    pub const CHANNEL_FIRST: Swizzle = Swizzle::Red;
    pub const CHANNEL_LAST: Swizzle = Swizzle::Alpha;
    pub const COUNT: usize = Self::LAST as usize - Self::FIRST as usize + 1;

    pub const ALL: [Swizzle; Self::COUNT] =
        [Swizzle::Red, Swizzle::Green, Swizzle::Blue, Swizzle::Alpha, Swizzle::Zero, Swizzle::One];

    /// Identity mapping.
    pub const RGBA: Swizzles = [Swizzle::Red, Swizzle::Green, Swizzle::Blue, Swizzle::Alpha];

    pub const fn is_channel(self) -> bool {
        self as u8 >= Self::CHANNEL_FIRST as u8 && self as u8 <= Self::CHANNEL_LAST as u8
    }

    /// Stored channel index for RED..ALPHA.
    pub const fn channel(self) -> Option<usize> {
        if self.is_channel() { Some(self as usize) } else { None }
    }
}

/// Remaps a 4-channel texel. Constant entries produce `C::ZERO` or `C::ONE`,
/// where one is the normalized one of the component type.
pub fn swizzle<C: Component>(texel: [C; 4], swizzles: Swizzles) -> [C; 4] {
    swizzles.map(|s| match s {
        Swizzle::Red | Swizzle::Green | Swizzle::Blue | Swizzle::Alpha => texel[s as usize],
        Swizzle::Zero => C::ZERO,
        Swizzle::One => C::ONE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_are_contiguous() {
        assert!(Swizzle::Red.is_channel());
        assert!(Swizzle::Green.is_channel());
        assert!(Swizzle::Blue.is_channel());
        assert!(Swizzle::Alpha.is_channel());
        assert!(!Swizzle::Zero.is_channel());
        assert!(!Swizzle::One.is_channel());
        assert_eq!(Swizzle::COUNT, 6);
        for (i, s) in Swizzle::ALL.iter().enumerate() {
            assert_eq!(*s as usize, i);
        }
    }

    #[test]
    fn channel_index() {
        assert_eq!(Swizzle::Red.channel(), Some(0));
        assert_eq!(Swizzle::Alpha.channel(), Some(3));
        assert_eq!(Swizzle::One.channel(), None);
    }

    #[test]
    fn identity_keeps_texel() {
        assert_eq!(swizzle([1u8, 2, 3, 4], Swizzle::RGBA), [1, 2, 3, 4]);
    }

    #[test]
    fn reorders_and_synthesizes() {
        let bgra = [Swizzle::Blue, Swizzle::Green, Swizzle::Red, Swizzle::Alpha];
        assert_eq!(swizzle([10u8, 20, 30, 40], bgra), [30, 20, 10, 40]);

        let luminance = [Swizzle::Red, Swizzle::Red, Swizzle::Red, Swizzle::One];
        assert_eq!(swizzle([7u8, 0, 0, 0], luminance), [7, 7, 7, 255]);
        assert_eq!(swizzle([0.5f32, 0.0, 0.0, 0.0], luminance), [0.5, 0.5, 0.5, 1.0]);

        let alpha = [Swizzle::Zero, Swizzle::Zero, Swizzle::Zero, Swizzle::Red];
        assert_eq!(swizzle([9u16, 1, 2, 3], alpha), [0, 0, 0, 9]);
    }
}
