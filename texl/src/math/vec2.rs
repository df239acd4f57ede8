/// Normalized texture coordinate, `x` is `s` and `y` is `t`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn floor(self) -> Vec2 {
        Vec2 { x: self.x.floor(), y: self.y.floor() }
    }

    pub fn ceil(self) -> Vec2 {
        Vec2 { x: self.x.ceil(), y: self.y.ceil() }
    }

    pub fn map(self, f: impl Fn(f32) -> f32) -> Vec2 {
        Vec2 { x: f(self.x), y: f(self.y) }
    }
}

/// Integer texel coordinate or level extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UVec2 {
    pub x: u32,
    pub y: u32,
}

impl UVec2 {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    pub const fn splat(v: u32) -> Self {
        Self { x: v, y: v }
    }

    /// Extent of the next mip level, never smaller than 1x1.
    pub fn halved(self) -> UVec2 {
        UVec2 { x: (self.x >> 1).max(1), y: (self.y >> 1).max(1) }
    }
}

// Vec2 - Vec2
impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2 { x: self.x - other.x, y: self.y - other.y }
    }
}

// Vec2 * Vec2, component-wise
impl std::ops::Mul for Vec2 {
    type Output = Vec2;
    fn mul(self, other: Vec2) -> Vec2 {
        Vec2 { x: self.x * other.x, y: self.y * other.y }
    }
}
