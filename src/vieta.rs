// Copyright 2025 the Vieta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between the roots and the coefficients of a monic polynomial.

use alloc::vec::Vec;

use num_complex::Complex64;
use smallvec::SmallVec;

use crate::common::alternate;
use crate::newton::{find_root_with, polish, NewtonOptions};
use crate::poly::deflate_in_place;

/// Options for [`coefficients_to_roots_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootOptions {
    /// Parameters of the Newton iteration run on each deflated polynomial.
    pub newton: NewtonOptions,
    /// Extra Newton steps applied to each root against the original,
    /// undeflated polynomial.
    ///
    /// Deflation accumulates error with every root removed, which becomes
    /// visible around degree 5. Polishing bounds that growth. Zero (the
    /// default) disables it.
    pub polish_steps: usize,
}

/// Iterator over the `k`-element subsets of `0..n`, as sorted index lists.
///
/// Subsets are produced in lexicographic order, so for `n = 4, k = 2` the
/// sequence is `[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]`.
#[derive(Clone, Debug)]
pub struct Combinations {
    n: usize,
    indices: SmallVec<[usize; 8]>,
    done: bool,
}

impl Combinations {
    /// Creates an iterator over the `k`-subsets of `0..n`.
    ///
    /// There is exactly one empty subset; there are none when `k > n`.
    pub fn new(n: usize, k: usize) -> Self {
        Combinations {
            n,
            indices: (0..k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = SmallVec<[usize; 8]>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();
        // Find the rightmost index that can still move right.
        let k = self.indices.len();
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.indices[i] < self.n - k + i {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }
        Some(current)
    }
}

/// The `k`-th elementary symmetric polynomial of `roots`.
///
/// This is the sum, over every `k`-element subset of `roots`, of the product
/// of that subset. `e_0` is 1, and `e_k` is 0 when `k` exceeds the number of
/// roots.
pub fn elementary_symmetric(roots: &[Complex64], k: usize) -> Complex64 {
    Combinations::new(roots.len(), k)
        .map(|subset| {
            subset
                .iter()
                .fold(Complex64::new(1.0, 0.0), |prod, &i| prod * roots[i])
        })
        .fold(Complex64::new(0.0, 0.0), |sum, term| sum + term)
}

/// Computes the coefficients of the monic polynomial with the given roots.
///
/// The result has one more element than `roots` and is in increasing order
/// of degree, with the leading coefficient exactly 1. By Vieta's formulas
/// the coefficient of `x^(n - k)` is `(-1)^k e_k(roots)`, and it is computed
/// that way, by summing over subsets, rather than by multiplying out linear
/// factors.
///
/// # Examples
///
/// ```
/// use num_complex::Complex64;
/// use vieta::roots_to_coefficients;
///
/// let roots = [1.0, 2.0, 4.0].map(|r| Complex64::new(r, 0.0));
/// let coeffs = roots_to_coefficients(&roots);
/// let expected = [-8.0, 14.0, -7.0, 1.0].map(|c| Complex64::new(c, 0.0));
/// assert_eq!(coeffs, expected);
/// ```
pub fn roots_to_coefficients(roots: &[Complex64]) -> Vec<Complex64> {
    let n = roots.len();
    let mut coeffs = Vec::with_capacity(n + 1);
    for degree in 0..n {
        let k = n - degree;
        coeffs.push(alternate(k, elementary_symmetric(roots, k)));
    }
    coeffs.push(Complex64::new(1.0, 0.0));
    coeffs
}

/// Finds all roots of the polynomial with coefficients `coeffs`.
///
/// One root is found with Newton's method from the default seed, the
/// polynomial is divided by `x - root`, and the process repeats until the
/// polynomial is exhausted. The result has one fewer element than `coeffs`
/// (and is empty for a constant or empty coefficient list).
///
/// Roots come out in the order they were extracted. That order is not
/// canonical and can change abruptly under small perturbations of the
/// coefficients; use [`sort_to_minimize_distances`] to keep a stable
/// identity between successive results.
///
/// [`sort_to_minimize_distances`]: crate::sort_to_minimize_distances
///
/// # Examples
///
/// ```
/// use num_complex::Complex64;
/// use vieta::{coefficients_to_roots, eval_poly};
///
/// let coeffs = [-8.0, 14.0, -7.0, 1.0].map(|c| Complex64::new(c, 0.0));
/// for root in coefficients_to_roots(&coeffs) {
///     assert!(eval_poly(root, &coeffs).norm() < 1e-6);
/// }
/// ```
pub fn coefficients_to_roots(coeffs: &[Complex64]) -> Vec<Complex64> {
    coefficients_to_roots_with(coeffs, &RootOptions::default())
}

/// Finds all roots of a polynomial, with control over the iteration.
///
/// See [`coefficients_to_roots`] for the algorithm.
pub fn coefficients_to_roots_with(coeffs: &[Complex64], options: &RootOptions) -> Vec<Complex64> {
    let degree = coeffs.len().saturating_sub(1);
    let mut roots = Vec::with_capacity(degree);
    let mut remaining: SmallVec<[Complex64; 8]> = coeffs.iter().copied().collect();
    for i in 0..degree {
        let result = find_root_with(&remaining, &options.newton);
        let mut root = result.root;
        if options.polish_steps > 0 {
            root = polish(coeffs, root, options.polish_steps, options.newton.tolerance);
        }
        log::trace!(
            "root {i} of {degree}: {root} ({} newton steps, converged: {})",
            result.iterations,
            result.converged
        );
        roots.push(root);
        deflate_in_place(&mut remaining, root);
    }
    roots
}
