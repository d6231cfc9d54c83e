use std::{
    fmt,
    ops::{Add, Mul, Sub},
};

use glint_linalg::{approx::ApproxEq, EPSILON};

/// An RGB color with unconstrained `f32` channels.
///
/// Channel values are not restricted to `[0.0, 1.0]`: summing light
/// contributions may overshoot the displayable range, and filters may produce
/// negative intermediate values. Clamping happens only when a [`Canvas`] is
/// serialized.
///
/// [`Canvas`]: crate::Canvas
#[derive(Clone, Copy, Default)]
pub struct Color([f32; 3]);

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b])
    }

    #[inline]
    pub fn r(&self) -> f32 {
        self.0[0]
    }

    #[inline]
    pub fn g(&self) -> f32 {
        self.0[1]
    }

    #[inline]
    pub fn b(&self) -> f32 {
        self.0[2]
    }
}

/// Converts a float channel value to the 8-bit value used by the PPM encoder.
///
/// The channel is scaled by 255, clamped to `[0, 255]`, and rounded to the
/// nearest integer.
pub(crate) fn channel_to_u8(channel: f32) -> u8 {
    (channel * 255.0).clamp(0.0, 255.0).round() as u8
}

/// Channel-wise addition.
impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(self.r() + rhs.r(), self.g() + rhs.g(), self.b() + rhs.b())
    }
}

/// Channel-wise subtraction.
impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Color) -> Color {
        Color::new(self.r() - rhs.r(), self.g() - rhs.g(), self.b() - rhs.b())
    }
}

/// The Hadamard product: channel-wise multiplication, used to combine a light
/// color with a surface color.
impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        Color::new(self.r() * rhs.r(), self.g() * rhs.g(), self.b() * rhs.b())
    }
}

/// Color-scalar multiplication (scaling).
impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, rhs: f32) -> Color {
        Color::new(self.r() * rhs, self.g() * rhs, self.b() * rhs)
    }
}

/// Scalar-color multiplication (scaling).
impl Mul<Color> for f32 {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        rhs * self
    }
}

/// Channel-wise *approximate* equality with the fixed [`EPSILON`] tolerance.
///
/// Colors are never compared with exact floating-point equality; use
/// [`ApproxEq`] directly for a custom tolerance.
impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.abs_diff_eq(other, EPSILON)
    }
}

impl ApproxEq for Color {
    type Tolerance = f32;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({:?}, {:?}, {:?})", self.r(), self.g(), self.b())
    }
}

/// Colors render as `Color: {r, g, b}` for diagnostic printing.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color: {{{}, {}, {}}}", self.r(), self.g(), self.b())
    }
}

#[cfg(test)]
mod tests {
    use glint_linalg::{assert_approx_eq, assert_approx_ne};

    use super::*;

    #[test]
    fn accessors() {
        let c = Color::new(-0.5, 0.4, 1.7);
        assert_eq!(c.r(), -0.5);
        assert_eq!(c.g(), 0.4);
        assert_eq!(c.b(), 1.7);
    }

    #[test]
    fn arithmetic() {
        let c1 = Color::new(0.9, 0.6, 0.75);
        let c2 = Color::new(0.7, 0.1, 0.25);
        assert_eq!(c1 + c2, Color::new(1.6, 0.7, 1.0));
        assert_eq!(c1 - c2, Color::new(0.2, 0.5, 0.5));

        assert_eq!(Color::new(0.2, 0.3, 0.4) * 2.0, Color::new(0.4, 0.6, 0.8));
        assert_eq!(2.0 * Color::new(0.2, 0.3, 0.4), Color::new(0.4, 0.6, 0.8));
    }

    #[test]
    fn hadamard_product() {
        let c1 = Color::new(1.0, 0.2, 0.4);
        let c2 = Color::new(0.9, 1.0, 0.1);
        assert_eq!(c1 * c2, Color::new(0.9, 0.2, 0.04));
    }

    #[test]
    fn equality() {
        assert_eq!(Color::new(0.5, 0.2, 0.9), Color::new(0.5, 0.2 + 5e-6, 0.9));
        assert_ne!(Color::new(0.5, 0.2, 0.9), Color::new(0.5, 0.21, 0.9));

        assert_approx_eq!(Color::new(0.5, 0.2, 0.9), Color::new(0.5, 0.21, 0.9)).abs(0.1);
        assert_approx_ne!(Color::new(0.5, 0.2, 0.9), Color::new(0.5, 0.21, 0.9));
    }

    #[test]
    fn channel_conversion() {
        assert_eq!(channel_to_u8(0.0), 0);
        assert_eq!(channel_to_u8(1.0), 255);
        assert_eq!(channel_to_u8(0.5), 128);
        assert_eq!(channel_to_u8(0.8), 204);
        // Out-of-range channels clamp at serialization time.
        assert_eq!(channel_to_u8(1.5), 255);
        assert_eq!(channel_to_u8(-0.5), 0);
    }

    #[test]
    fn fmt() {
        assert_eq!(
            format!("{}", Color::new(1.0, 0.5, 0.0)),
            "Color: {1, 0.5, 0}"
        );
        assert_eq!(format!("{:?}", Color::WHITE), "Color(1.0, 1.0, 1.0)");
    }
}
