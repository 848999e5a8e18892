// Copyright 2025 the Vieta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Evaluation of polynomials with complex coefficients.
//!
//! Coefficient slices are always in increasing order of degree: `coeffs[0]`
//! is the constant term and `coeffs[k]` multiplies `x^k`.

use num_complex::Complex64;

/// Evaluates the polynomial with coefficients `coeffs` at `x`.
///
/// An empty slice is the zero polynomial.
///
/// # Examples
///
/// ```
/// use num_complex::Complex64;
/// use vieta::eval_poly;
///
/// // x^2 + 1 vanishes at i.
/// let coeffs = [Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)];
/// assert_eq!(eval_poly(Complex64::i(), &coeffs), Complex64::new(0.0, 0.0));
/// ```
pub fn eval_poly(x: Complex64, coeffs: &[Complex64]) -> Complex64 {
    let mut acc = Complex64::new(0.0, 0.0);
    for &c in coeffs.iter().rev() {
        acc = acc * x + c;
    }
    acc
}

/// Evaluates the derivative of the polynomial with coefficients `coeffs` at `x`.
///
/// This is `sum(k * coeffs[k] * x^(k - 1))` for `k >= 1`; the derivative of a
/// constant (or empty) polynomial is zero.
pub fn eval_deriv(x: Complex64, coeffs: &[Complex64]) -> Complex64 {
    let mut acc = Complex64::new(0.0, 0.0);
    for (k, &c) in coeffs.iter().enumerate().skip(1).rev() {
        acc = acc * x + c * k as f64;
    }
    acc
}

/// Are two complex numbers within `tolerance` of each other?
#[inline]
pub fn approx_eq(a: Complex64, b: Complex64, tolerance: f64) -> bool {
    (a - b).norm() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn eval_empty_is_zero() {
        assert_eq!(eval_poly(c(3.0, -2.0), &[]), c(0.0, 0.0));
        assert_eq!(eval_deriv(c(3.0, -2.0), &[]), c(0.0, 0.0));
        assert_eq!(eval_deriv(c(3.0, -2.0), &[c(5.0, 5.0)]), c(0.0, 0.0));
    }

    #[test]
    fn eval_cubic() {
        // (x-1)(x-2)(x-4)
        let coeffs = [c(-8.0, 0.0), c(14.0, 0.0), c(-7.0, 0.0), c(1.0, 0.0)];
        for root in [1.0, 2.0, 4.0] {
            assert!(approx_eq(eval_poly(c(root, 0.0), &coeffs), c(0.0, 0.0), 1e-12));
        }
        assert_eq!(eval_poly(c(0.0, 0.0), &coeffs), c(-8.0, 0.0));
        assert_eq!(eval_poly(c(3.0, 0.0), &coeffs), c(-2.0, 0.0));
    }

    #[test]
    fn eval_deriv_matches_power_rule() {
        // d/dx (x^3 - 7x^2 + 14x - 8) = 3x^2 - 14x + 14
        let coeffs = [c(-8.0, 0.0), c(14.0, 0.0), c(-7.0, 0.0), c(1.0, 0.0)];
        let x = c(0.5, 1.5);
        let expected = x * x * 3.0 - x * 14.0 + 14.0;
        assert!(approx_eq(eval_deriv(x, &coeffs), expected, 1e-12));
    }

    #[test]
    fn eval_complex_coefficients() {
        // i x + 1 at x = i is 0.
        let coeffs = [c(1.0, 0.0), c(0.0, 1.0)];
        assert!(approx_eq(eval_poly(Complex64::i(), &coeffs), c(0.0, 0.0), 1e-15));
        assert_eq!(eval_deriv(c(7.0, 7.0), &coeffs), c(0.0, 1.0));
    }
}
