// Copyright 2025 the Vieta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where a root or coefficient is drawn.

use core::fmt;
use core::ops::Sub;

use num_complex::Complex64;

use crate::Vec2;

/// A location in the complex plane: `x` along the real axis, `y` along the
/// imaginary one.
///
/// Renderers place dots at points; the numerical routines work on the same
/// values as [`Complex64`]. Converting between the two is lossless.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The real part.
    pub x: f64,
    /// The imaginary part.
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point::new(0., 0.);

    /// A point at `x + yi`.
    #[inline(always)]
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// This location as the complex number `x + yi`.
    #[inline(always)]
    pub const fn to_complex(self) -> Complex64 {
        Complex64::new(self.x, self.y)
    }

    /// How far a dot moves going from `self` to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other - self).hypot()
    }
}

impl From<(f64, f64)> for Point {
    #[inline(always)]
    fn from((x, y): (f64, f64)) -> Point {
        Point { x, y }
    }
}

impl From<Complex64> for Point {
    #[inline(always)]
    fn from(z: Complex64) -> Point {
        Point { x: z.re, y: z.im }
    }
}

impl From<Point> for Complex64 {
    #[inline(always)]
    fn from(p: Point) -> Complex64 {
        p.to_complex()
    }
}

impl Sub for Point {
    type Output = Vec2;

    #[inline]
    fn sub(self, other: Point) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        fmt::Display::fmt(&self.x, f)?;
        f.write_str(", ")?;
        fmt::Display::fmt(&self.y, f)?;
        f.write_str(")")
    }
}

#[cfg(feature = "mint")]
impl From<Point> for mint::Point2<f64> {
    #[inline(always)]
    fn from(p: Point) -> mint::Point2<f64> {
        mint::Point2 { x: p.x, y: p.y }
    }
}

#[cfg(feature = "mint")]
impl From<mint::Point2<f64>> for Point {
    #[inline(always)]
    fn from(p: mint::Point2<f64>) -> Point {
        Point { x: p.x, y: p.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difference_is_a_vec2() {
        assert_eq!(
            Point::new(0., 0.) - Point::new(-5., 101.),
            Vec2::new(5., -101.)
        );
    }

    #[test]
    fn complex_round_trip() {
        let z = Complex64::new(1.5, -2.25);
        let p = Point::from(z);
        assert_eq!(p, Point::new(1.5, -2.25));
        assert_eq!(p, Point::from((1.5, -2.25)));
        assert_eq!(Complex64::from(p), z);
    }

    #[test]
    fn distance_is_modulus_of_difference() {
        let p1 = Point::new(-11., 1.);
        let p2 = Point::new(-7., -2.);
        assert_eq!(p1.distance(p2), 5.);
        assert_eq!(p2.distance(p1), 5.);
        assert_eq!((p1.to_complex() - p2.to_complex()).norm(), 5.);
    }

    #[test]
    fn display() {
        let p = Point::new(0.12345, 9.87654);
        assert_eq!(format!("{}", p), "(0.12345, 9.87654)");
        assert_eq!(format!("{:.2}", p), "(0.12, 9.88)");
    }
}
