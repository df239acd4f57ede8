/// How a normalized coordinate outside of [0, 1] is brought back into range.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Wrap {
    #[default]
    ClampToEdge = 0,
    Repeat = 1,
    MirrorRepeat = 2,
    MirrorClampToEdge = 3,
}

pub type WrapFunction = fn(f32) -> f32;

impl Wrap {
    pub const FIRST: Wrap = Wrap::ClampToEdge;
    pub const LAST: Wrap = Wrap::MirrorClampToEdge;
    pub const COUNT: usize = Self::LAST as usize - Self::FIRST as usize + 1;

    pub const ALL: [Wrap; Self::COUNT] = [Wrap::ClampToEdge, Wrap::Repeat, Wrap::MirrorRepeat, Wrap::MirrorClampToEdge];

    pub fn function(self) -> WrapFunction {
        WRAP_FUNCTIONS[self as usize]
    }
}

// Indexed by `Wrap as usize`.
const WRAP_FUNCTIONS: [WrapFunction; Wrap::COUNT] = [clamp_to_edge, repeat, mirror_repeat, mirror_clamp_to_edge];

pub fn clamp_to_edge(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Fractional part, in [0, 1).
pub fn repeat(x: f32) -> f32 {
    let r = x - x.floor();
    // -1e-9 - floor(-1e-9) rounds to exactly 1.0
    if r >= 1.0 { 0.0 } else { r }
}

/// Triangle wave of period 2: 0 at even integers, 1 at odd ones.
pub fn mirror_repeat(x: f32) -> f32 {
    let r = x.abs() % 2.0;
    if r > 1.0 { 2.0 - r } else { r }
}

/// Mirrors once around 0 and clamps.
pub fn mirror_clamp_to_edge(x: f32) -> f32 {
    x.abs().clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Exactly representable, so x + 1 and x + 2 lose nothing.
    fn grid() -> impl Iterator<Item = f32> {
        (-64..=64).map(|i| i as f32 * 0.0625)
    }

    #[test]
    fn table_follows_enum_order() {
        assert_eq!(Wrap::COUNT, 4);
        assert_eq!(WRAP_FUNCTIONS.len(), Wrap::COUNT);
        for (i, wrap) in Wrap::ALL.iter().enumerate() {
            assert_eq!(*wrap as usize, i);
        }
        assert_eq!(Wrap::ClampToEdge.function()(1.5), 1.0);
        assert_eq!(Wrap::Repeat.function()(1.5), 0.5);
        assert_eq!(Wrap::MirrorRepeat.function()(1.25), 0.75);
        assert_eq!(Wrap::MirrorClampToEdge.function()(-0.25), 0.25);
        assert_eq!(Wrap::default(), Wrap::ClampToEdge);
    }

    #[test]
    fn clamp_to_edge_stays_in_unit_range() {
        for x in grid() {
            let y = clamp_to_edge(x);
            assert!((0.0..=1.0).contains(&y), "clamp_to_edge({}) = {}", x, y);
        }
        assert_eq!(clamp_to_edge(-0.5), 0.0);
        assert_eq!(clamp_to_edge(0.3), 0.3);
        assert_eq!(clamp_to_edge(7.0), 1.0);
    }

    #[test]
    fn repeat_is_periodic() {
        for x in grid() {
            let y = repeat(x);
            assert!((0.0..1.0).contains(&y), "repeat({}) = {}", x, y);
            assert_eq!(repeat(x + 1.0), y, "x = {}", x);
        }
        assert_eq!(repeat(-0.25), 0.75);
        assert_eq!(repeat(2.0), 0.0);
    }

    #[test]
    fn repeat_of_tiny_negative_stays_below_one() {
        assert_eq!(repeat(-1e-9), 0.0);
        assert!(repeat(-1e-3) < 1.0);
    }

    #[test]
    fn mirror_repeat_is_a_triangle_wave() {
        assert_eq!(mirror_repeat(0.0), 0.0);
        assert_eq!(mirror_repeat(1.0), 1.0);
        assert_eq!(mirror_repeat(2.0), mirror_repeat(0.0));
        assert_eq!(mirror_repeat(3.0), 1.0);
        assert_eq!(mirror_repeat(0.25), 0.25);
        assert_eq!(mirror_repeat(1.25), 0.75);
        assert_eq!(mirror_repeat(-0.25), 0.25);
        assert_eq!(mirror_repeat(-1.25), 0.75);
        for x in grid() {
            let y = mirror_repeat(x);
            assert!((0.0..=1.0).contains(&y));
            assert_eq!(mirror_repeat(-x), y);
            assert_eq!(mirror_repeat(x + 2.0), y);
        }
    }

    #[test]
    fn mirror_clamp_to_edge_mirrors_once() {
        assert_eq!(mirror_clamp_to_edge(-0.25), 0.25);
        assert_eq!(mirror_clamp_to_edge(0.75), 0.75);
        assert_eq!(mirror_clamp_to_edge(-1.75), 1.0);
        assert_eq!(mirror_clamp_to_edge(3.0), 1.0);
        for x in grid() {
            assert!((0.0..=1.0).contains(&mirror_clamp_to_edge(x)));
        }
    }

    #[test]
    fn nan_propagates() {
        for wrap in Wrap::ALL {
            assert!(wrap.function()(f32::NAN).is_nan(), "{:?}", wrap);
        }
    }
}
