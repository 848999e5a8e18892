// Copyright 2025 the Vieta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The step between two positions of a dot.

use core::fmt;
use core::ops::Sub;

use num_complex::Complex64;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The offset between two [`Point`](crate::Point)s.
///
/// As a complex number this is `z1 - z0`, and its length is how far a dot
/// jumps from one frame to the next.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    /// The real component.
    pub x: f64,
    /// The imaginary component.
    pub y: f64,
}

impl Vec2 {
    /// The offset `x + yi`.
    #[inline(always)]
    pub const fn new(x: f64, y: f64) -> Vec2 {
        Vec2 { x, y }
    }

    /// This offset as a complex number.
    #[inline(always)]
    pub const fn to_complex(self) -> Complex64 {
        Complex64::new(self.x, self.y)
    }

    /// The length of the offset.
    #[inline]
    pub fn hypot(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl From<Complex64> for Vec2 {
    #[inline(always)]
    fn from(z: Complex64) -> Vec2 {
        Vec2 { x: z.re, y: z.im }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Δ(")?;
        fmt::Display::fmt(&self.x, f)?;
        f.write_str(", ")?;
        fmt::Display::fmt(&self.y, f)?;
        f.write_str(")")
    }
}

#[cfg(feature = "mint")]
impl From<Vec2> for mint::Vector2<f64> {
    #[inline(always)]
    fn from(v: Vec2) -> mint::Vector2<f64> {
        mint::Vector2 { x: v.x, y: v.y }
    }
}

#[cfg(feature = "mint")]
impl From<mint::Vector2<f64>> for Vec2 {
    #[inline(always)]
    fn from(v: mint::Vector2<f64>) -> Vec2 {
        Vec2 { x: v.x, y: v.y }
    }
}
