// Copyright 2025 the Vieta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Polynomials with complex coefficients.

use alloc::vec::Vec;
use core::ops::{Index, Mul};

use num_complex::Complex64;
use smallvec::SmallVec;

use crate::complex::{eval_deriv, eval_poly};
use crate::vieta::{coefficients_to_roots_with, roots_to_coefficients, RootOptions};

/// A polynomial with complex coefficients, of dynamic degree.
///
/// The polynomials this crate deals with are of low degree, so up to eight
/// coefficients are stored inline.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplexPoly {
    /// Coefficients in increasing order of degree.
    ///
    /// For example, `coeffs[0]` is the constant term.
    coeffs: SmallVec<[Complex64; 8]>,
}

impl ComplexPoly {
    /// Constructs a new polynomial from coefficients.
    ///
    /// The first coefficient provided will be the constant term, the second will
    /// be the linear term, and so on. Trailing zeros are kept.
    pub fn new(coeffs: impl IntoIterator<Item = Complex64>) -> Self {
        ComplexPoly {
            coeffs: coeffs.into_iter().collect(),
        }
    }

    /// Constructs the monic polynomial whose roots are `roots`.
    ///
    /// See [`roots_to_coefficients`](crate::roots_to_coefficients).
    pub fn from_roots(roots: &[Complex64]) -> Self {
        ComplexPoly::new(roots_to_coefficients(roots))
    }

    /// The coefficients of this polynomial.
    ///
    /// In the returned slice, the coefficient of `x^i` is at index `i`.
    pub fn coeffs(&self) -> &[Complex64] {
        &self.coeffs
    }

    /// The degree of this polynomial.
    ///
    /// This only looks at the number of coefficients, not their values: a
    /// polynomial built from three zeros has degree 2. The empty polynomial
    /// has degree zero, as does a constant.
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Is the highest coefficient exactly 1?
    pub fn is_monic(&self) -> bool {
        self.coeffs.last() == Some(&Complex64::new(1.0, 0.0))
    }

    /// Evaluates this polynomial at a point.
    pub fn eval(&self, x: Complex64) -> Complex64 {
        eval_poly(x, &self.coeffs)
    }

    /// Evaluates the derivative of this polynomial at a point.
    pub fn eval_deriv(&self, x: Complex64) -> Complex64 {
        eval_deriv(x, &self.coeffs)
    }

    /// Returns the polynomial that's the derivative of this polynomial.
    pub fn deriv(&self) -> ComplexPoly {
        ComplexPoly {
            coeffs: self
                .coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, c)| *c * i as f64)
                .collect(),
        }
    }

    /// Divide this polynomial by `x - root`, returning the quotient and
    /// ignoring the remainder.
    ///
    /// If `root` is actually a root of `self`, the remainder is zero. In
    /// general it equals `self.eval(root)`.
    pub fn deflate(&self, root: Complex64) -> ComplexPoly {
        let mut coeffs = self.coeffs.clone();
        deflate_in_place(&mut coeffs, root);
        ComplexPoly { coeffs }
    }

    /// Finds all roots, in extraction order.
    ///
    /// See [`coefficients_to_roots`](crate::coefficients_to_roots).
    pub fn roots(&self) -> Vec<Complex64> {
        coefficients_to_roots_with(&self.coeffs, &RootOptions::default())
    }

    /// Finds all roots with the given options.
    pub fn roots_with(&self, options: &RootOptions) -> Vec<Complex64> {
        coefficients_to_roots_with(&self.coeffs, options)
    }
}

/// Synthetic division by `x - root`, in place.
///
/// The coefficients are in increasing order of degree; the last one is
/// removed and the remainder is discarded.
pub(crate) fn deflate_in_place(coeffs: &mut SmallVec<[Complex64; 8]>, root: Complex64) {
    let Some(mut acc) = coeffs.pop() else {
        return;
    };
    for c in coeffs.iter_mut().rev() {
        let next = *c + acc * root;
        *c = acc;
        acc = next;
    }
    log::trace!("deflated by {root}, remainder {acc}");
}

impl Index<usize> for ComplexPoly {
    type Output = Complex64;

    fn index(&self, index: usize) -> &Complex64 {
        &self.coeffs[index]
    }
}

impl<'a> Mul<&'a ComplexPoly> for &'a ComplexPoly {
    type Output = ComplexPoly;

    fn mul(self, rhs: &ComplexPoly) -> ComplexPoly {
        let len = (self.coeffs.len() + rhs.coeffs.len()).saturating_sub(1);
        let mut coeffs: SmallVec<[Complex64; 8]> =
            core::iter::repeat(Complex64::new(0.0, 0.0)).take(len).collect();

        for (i, c) in self.coeffs.iter().enumerate() {
            for (j, d) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += *c * *d;
            }
        }
        ComplexPoly { coeffs }
    }
}

impl Mul<&ComplexPoly> for ComplexPoly {
    type Output = ComplexPoly;

    fn mul(self, rhs: &ComplexPoly) -> ComplexPoly {
        (&self) * rhs
    }
}
