// Copyright 2025 the Vieta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! All `n` complex `n`th roots of a number.

use alloc::vec::Vec;
use core::f64::consts::TAU;

use num_complex::Complex64;

/// Returns the `n` complex numbers whose `n`th power is `z`.
///
/// The first element is the principal root `z^(1/n)`, taken on the principal
/// branch of the argument. Each following root is the previous one rotated by
/// `2π/n`, so the roots run counterclockwise around the circle of radius
/// `|z|^(1/n)`.
///
/// # Panics
///
/// Panics if `n` is zero.
///
/// # Examples
///
/// ```
/// use num_complex::Complex64;
/// use vieta::nth_roots;
///
/// let roots = nth_roots(Complex64::new(1.0, 0.0), 4);
/// let expected = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];
/// for (root, (re, im)) in roots.iter().zip(expected) {
///     assert!((root - Complex64::new(re, im)).norm() < 1e-12);
/// }
/// ```
pub fn nth_roots(z: Complex64, n: usize) -> Vec<Complex64> {
    assert!(n > 0, "there is no zeroth root of {z}");
    let base = z.powf(1.0 / n as f64);
    (0..n)
        .map(|k| base * Complex64::from_polar(1.0, k as f64 * TAU / n as f64))
        .collect()
}

/// The `n`th roots of unity, starting at 1 and going counterclockwise.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn roots_of_unity(n: usize) -> Vec<Complex64> {
    assert!(n > 0, "there are no zeroth roots of unity");
    (0..n)
        .map(|k| Complex64::from_polar(1.0, k as f64 * TAU / n as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::approx_eq;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn fourth_roots_of_one_in_rotational_order() {
        let roots = nth_roots(c(1.0, 0.0), 4);
        let expected = [c(1.0, 0.0), c(0.0, 1.0), c(-1.0, 0.0), c(0.0, -1.0)];
        assert_eq!(roots.len(), 4);
        for (r, e) in roots.iter().zip(expected) {
            assert!(approx_eq(*r, e, 1e-12), "{r} != {e}");
        }
    }

    #[test]
    fn principal_root_comes_first() {
        // arg(-8) = π, so the principal cube root is 2 e^(iπ/3).
        let roots = nth_roots(c(-8.0, 0.0), 3);
        assert!(approx_eq(roots[0], Complex64::from_polar(2.0, TAU / 6.0), 1e-12));
        assert!(approx_eq(roots[1], c(-2.0, 0.0), 1e-12));
        for r in &roots {
            assert!(approx_eq(r.powu(3), c(-8.0, 0.0), 1e-10));
        }
    }

    #[test]
    fn square_roots_are_negatives() {
        let z = c(3.0, -4.0);
        let roots = nth_roots(z, 2);
        assert!(approx_eq(roots[0], c(2.0, -1.0), 1e-12));
        assert!(approx_eq(roots[1], c(-2.0, 1.0), 1e-12));
    }

    #[test]
    fn first_root_of_anything_is_itself() {
        let z = c(-0.25, 7.5);
        assert!(approx_eq(nth_roots(z, 1)[0], z, 1e-12));
    }

    #[test]
    fn zero_has_only_zero_roots() {
        for r in nth_roots(c(0.0, 0.0), 5) {
            assert_eq!(r.norm(), 0.0);
        }
    }

    #[test]
    fn unity_matches_nth_roots_of_one() {
        let unity = roots_of_unity(6);
        assert_eq!(unity[0], c(1.0, 0.0));
        for (u, r) in unity.iter().zip(nth_roots(c(1.0, 0.0), 6)) {
            assert!(approx_eq(*u, r, 1e-12));
        }
    }

    #[test]
    #[should_panic(expected = "zeroth root")]
    fn zeroth_root_panics() {
        nth_roots(c(1.0, 0.0), 0);
    }
}
