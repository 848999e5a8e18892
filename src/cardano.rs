// Copyright 2025 the Vieta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed-form roots of quadratics and cubics, with their intermediate terms.
//!
//! The radicals in these formulas are multivalued. Every branch is kept, so
//! that each term can be followed continuously as the coefficients move.

use arrayvec::ArrayVec;
use num_complex::Complex64;

use crate::nth_root::nth_roots;

/// Roots of the monic quadratic `x² + bx + c`.
///
/// Computed as `-b/2 ± sqrt(b²/4 - c)`, with the principal square root
/// taken for the first element.
pub fn quadratic_roots(b: Complex64, c: Complex64) -> [Complex64; 2] {
    let half_b = b * 0.5;
    let s = nth_roots(half_b * half_b - c, 2)[0];
    [s - half_b, -s - half_b]
}

/// The terms of Cardano's formula for the depressed cubic `x³ + px + q`.
///
/// A root has the form `u + v`, where `u³` and `v³` are `-q/2 ± δ` and
/// `δ² = q²/4 + p³/27`. Both values of `δ` and all three cube roots of each
/// `-q/2 + δ` are kept. Of the nine sums `u + v`, the three with
/// `uv = -p/3` are the roots.
///
/// Each value is computed fresh, with the principal branch first, so a term
/// can jump to another branch between two nearby cubics. To follow the terms
/// continuously while `p` and `q` move, reorder each new `deltas` and
/// `cube_roots` triple against the previous frame's with
/// [`sort_to_minimize_distances`](crate::sort_to_minimize_distances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardanoTerms {
    /// The linear coefficient.
    pub p: Complex64,
    /// The constant coefficient.
    pub q: Complex64,
    /// The two square roots of `q²/4 + p³/27`, principal first.
    pub deltas: [Complex64; 2],
    /// For each delta, the three cube roots of `-q/2 + delta`, principal first.
    pub cube_roots: [[Complex64; 3]; 2],
}

impl CardanoTerms {
    /// Computes the intermediate terms for `x³ + px + q`.
    pub fn new(p: Complex64, q: Complex64) -> Self {
        let half_q = q * 0.5;
        let discriminant = half_q * half_q + p * p * p / 27.0;
        // Exact negatives, so that `-q/2 + δ` is exactly zero when `p = 0`.
        let d = nth_roots(discriminant, 2)[0];
        let deltas = [d, -d];
        let cube_roots = deltas.map(|delta| {
            let r = nth_roots(-half_q + delta, 3);
            [r[0], r[1], r[2]]
        });
        CardanoTerms {
            p,
            q,
            deltas,
            cube_roots,
        }
    }

    /// Reads `p` and `q` from the coefficients `[q, p, 0, 1]`.
    ///
    /// Returns `None` unless the coefficients describe a monic cubic with no
    /// quadratic term.
    pub fn from_coefficients(coeffs: &[Complex64]) -> Option<Self> {
        match coeffs {
            [q, p, a, one] if *a == Complex64::new(0.0, 0.0) && *one == Complex64::new(1.0, 0.0) => {
                Some(CardanoTerms::new(*p, *q))
            }
            _ => None,
        }
    }

    /// All nine sums `u + v`, with `u` from the first delta and `v` from the
    /// second, in row-major order.
    pub fn candidates(&self) -> [Complex64; 9] {
        let [us, vs] = self.cube_roots;
        let mut out = [Complex64::new(0.0, 0.0); 9];
        for (i, u) in us.iter().enumerate() {
            for (j, v) in vs.iter().enumerate() {
                out[i * 3 + j] = *u + *v;
            }
        }
        out
    }

    /// The three roots of the cubic.
    ///
    /// For each cube root `u` of the larger of the two radicands, the partner
    /// `v` is the cube root that brings `uv` closest to `-p/3`.
    pub fn roots(&self) -> ArrayVec<Complex64, 3> {
        let [first, second] = self.cube_roots;
        // When p = 0 one family is all zeros, and pairing has to start from
        // the other one.
        let (us, vs) = if first[0].norm() >= second[0].norm() {
            (first, second)
        } else {
            (second, first)
        };
        let target = -self.p / 3.0;
        let mut result = ArrayVec::new();
        for u in us {
            let mut best = vs[0];
            let mut best_err = f64::INFINITY;
            for v in vs {
                let err = (u * v - target).norm();
                if err < best_err {
                    best = v;
                    best_err = err;
                }
            }
            result.push(u + best);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::{approx_eq, eval_poly};

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    fn assert_same_set(actual: &[Complex64], expected: &[Complex64]) {
        assert_eq!(actual.len(), expected.len());
        for e in expected {
            assert!(
                actual.iter().any(|a| approx_eq(*a, *e, 1e-9)),
                "{e} missing from {actual:?}"
            );
        }
    }

    #[test]
    fn quadratic_formula() {
        let roots = quadratic_roots(c(0.0, 0.0), c(-1.0, 0.0));
        assert!(approx_eq(roots[0], c(1.0, 0.0), 1e-12));
        assert!(approx_eq(roots[1], c(-1.0, 0.0), 1e-12));

        // x^2 - 3x + 2
        let roots = quadratic_roots(c(-3.0, 0.0), c(2.0, 0.0));
        assert_same_set(&roots, &[c(1.0, 0.0), c(2.0, 0.0)]);

        // x^2 + 1
        let roots = quadratic_roots(c(0.0, 0.0), c(1.0, 0.0));
        assert_same_set(&roots, &[c(0.0, 1.0), c(0.0, -1.0)]);
    }

    #[test]
    fn cubic_with_three_real_roots() {
        // x^3 - x = x (x - 1) (x + 1)
        let terms = CardanoTerms::new(c(-1.0, 0.0), c(0.0, 0.0));
        assert_same_set(&terms.roots(), &[c(0.0, 0.0), c(1.0, 0.0), c(-1.0, 0.0)]);

        // (x - 1)(x - 2)(x + 3) = x^3 - 7x + 6
        let terms = CardanoTerms::new(c(-7.0, 0.0), c(6.0, 0.0));
        assert_same_set(&terms.roots(), &[c(1.0, 0.0), c(2.0, 0.0), c(-3.0, 0.0)]);
    }

    #[test]
    fn cubic_without_linear_term() {
        // x^3 - 8: the roots are the cube roots of 8.
        let terms = CardanoTerms::new(c(0.0, 0.0), c(-8.0, 0.0));
        assert_same_set(&terms.roots(), &nth_roots(c(8.0, 0.0), 3));
    }

    #[test]
    fn vanishing_radicand_is_exactly_zero() {
        // With p = 0 one of -q/2 ± δ cancels to zero, and so must its cube roots.
        for q in [c(-8.0, 0.0), c(8.0, 0.0), c(-2.0, 0.0)] {
            let terms = CardanoTerms::new(c(0.0, 0.0), q);
            let zero_family = terms
                .cube_roots
                .iter()
                .filter(|triple| triple.iter().all(|u| u.norm() == 0.0))
                .count();
            assert_eq!(zero_family, 1, "no exactly zero family for q = {q}");
            let expected = nth_roots(-q, 3);
            assert_same_set(&terms.roots(), &expected);
        }
    }

    #[test]
    fn branches_can_be_followed_across_frames() {
        // Nudging q reorders nothing once the new terms are matched up.
        let before = CardanoTerms::new(c(-2.0, 1.0), c(0.5, 0.5));
        let after = CardanoTerms::new(c(-2.0, 1.0), c(0.5, 0.51));
        for (old, new) in before.cube_roots.iter().zip(after.cube_roots) {
            let followed = crate::sort_to_minimize_distances(new, old);
            for (a, b) in followed.iter().zip(old) {
                assert!(approx_eq(*a, *b, 2e-2), "{a} drifted from {b}");
            }
        }
    }

    #[test]
    fn cubic_from_coefficient_list() {
        // The coefficients [q, p, 0, 1] = [1, -1, 0, 1].
        let coeffs = [c(1.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)];
        let terms = CardanoTerms::from_coefficients(&coeffs).unwrap();
        for root in terms.roots() {
            assert!(eval_poly(root, &coeffs).norm() < 1e-9, "{root} is not a root");
        }
        assert!(CardanoTerms::from_coefficients(&coeffs[..3]).is_none());
    }

    #[test]
    fn candidates_contain_roots_and_deltas_square() {
        let terms = CardanoTerms::new(c(-7.0, 0.0), c(6.0, 0.0));
        let candidates = terms.candidates();
        for root in terms.roots() {
            assert!(candidates.iter().any(|z| approx_eq(*z, root, 1e-9)));
        }
        let disc = terms.q * terms.q / 4.0 + terms.p.powu(3) / 27.0;
        for delta in terms.deltas {
            assert!(approx_eq(delta * delta, disc, 1e-9));
        }
        assert_eq!(terms.deltas[1], -terms.deltas[0]);
        for (delta, triple) in terms.deltas.iter().zip(terms.cube_roots) {
            for u in triple {
                assert!(approx_eq(u.powu(3), -terms.q / 2.0 + *delta, 1e-9));
            }
        }
    }
}
