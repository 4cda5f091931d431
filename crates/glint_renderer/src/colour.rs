//! RGB colour with channels held in `[0, 1]`.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub};

use glint_math::{Interval, Vec3};

/// Channel range every colour is clamped to.
const UNIT: Interval = Interval { min: 0.0, max: 1.0 };

/// Clamp a channel to `[0, 1]`. NaN is treated as no light.
#[inline]
fn clamp_channel(c: f32) -> f32 {
    if c.is_nan() {
        0.0
    } else {
        UNIT.clamp(c)
    }
}

/// An RGB colour.
///
/// Channels are clamped to `[0, 1]` whenever a colour is built or updated in
/// place, so accumulating radiance saturates at white instead of growing
/// without bound.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Colour {
    r: f32,
    g: f32,
    b: f32,
}

impl Colour {
    pub const BLACK: Colour = Colour { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Colour = Colour { r: 1.0, g: 1.0, b: 1.0 };

    /// Create a colour, clamping each channel.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// A grey with all three channels set to `v`.
    pub fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    #[inline]
    pub fn r(&self) -> f32 {
        self.r
    }

    #[inline]
    pub fn g(&self) -> f32 {
        self.g
    }

    #[inline]
    pub fn b(&self) -> f32 {
        self.b
    }

    /// True if every channel is zero.
    pub fn is_black(&self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0
    }

    /// Quantize to 8 bits per channel as `floor(255.999 * c)`.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }
}

#[inline]
fn quantize(c: f32) -> u8 {
    (255.999 * c) as u8
}

impl From<Vec3> for Colour {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Colour> for Vec3 {
    fn from(c: Colour) -> Self {
        Vec3::new(c.r, c.g, c.b)
    }
}

impl Add for Colour {
    type Output = Colour;

    fn add(self, rhs: Colour) -> Colour {
        Colour::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Sub for Colour {
    type Output = Colour;

    fn sub(self, rhs: Colour) -> Colour {
        Colour::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Mul for Colour {
    type Output = Colour;

    fn mul(self, rhs: Colour) -> Colour {
        Colour::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl Mul<f32> for Colour {
    type Output = Colour;

    fn mul(self, t: f32) -> Colour {
        Colour::new(self.r * t, self.g * t, self.b * t)
    }
}

impl Mul<Colour> for f32 {
    type Output = Colour;

    fn mul(self, c: Colour) -> Colour {
        c * self
    }
}

impl Div<f32> for Colour {
    type Output = Colour;

    fn div(self, t: f32) -> Colour {
        self * (1.0 / t)
    }
}

impl AddAssign for Colour {
    fn add_assign(&mut self, rhs: Colour) {
        *self = *self + rhs;
    }
}

impl MulAssign<f32> for Colour {
    fn mul_assign(&mut self, t: f32) {
        *self = *self * t;
    }
}
