// Copyright 2025 the Vieta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keeping track of which root is which while a polynomial changes.

use alloc::vec::Vec;
use core::f64::consts::TAU;

use num_complex::Complex64;

use crate::matching::{sort_to_minimize_distances, Planar};
use crate::vieta::{coefficients_to_roots_with, roots_to_coefficients, RootOptions};

/// A polynomial held both as coefficients and as roots, where the roots keep
/// a stable order from one update to the next.
///
/// Whenever new coefficients arrive, the roots are recomputed and then
/// reordered so that each lands in the slot of the previous root nearest to
/// it. Driven with small enough changes, slot `i` follows one root along a
/// continuous path.
///
/// # Examples
///
/// ```
/// use num_complex::Complex64;
/// use vieta::RootTracker;
///
/// // x^2 - 1, then move the constant term once around the origin.
/// let coeffs = [Complex64::new(-1.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)];
/// let mut tracker = RootTracker::from_coefficients(&coeffs);
/// let permutation = tracker.loop_coefficient(0, Complex64::new(0.0, 0.0), 199);
/// assert_eq!(permutation, [1, 0]);
/// ```
#[derive(Clone, Debug)]
pub struct RootTracker {
    coeffs: Vec<Complex64>,
    roots: Vec<Complex64>,
    options: RootOptions,
}

impl RootTracker {
    /// Starts tracking the polynomial with the given coefficients.
    ///
    /// The initial roots are in extraction order.
    pub fn from_coefficients(coeffs: &[Complex64]) -> Self {
        let options = RootOptions::default();
        RootTracker {
            coeffs: coeffs.to_vec(),
            roots: coefficients_to_roots_with(coeffs, &options),
            options,
        }
    }

    /// Starts tracking the monic polynomial with the given roots, keeping
    /// their order.
    pub fn from_roots(roots: &[Complex64]) -> Self {
        RootTracker {
            coeffs: roots_to_coefficients(roots),
            roots: roots.to_vec(),
            options: RootOptions::default(),
        }
    }

    /// Use `options` for all later root finding.
    #[must_use]
    pub fn with_options(mut self, options: RootOptions) -> Self {
        self.options = options;
        self
    }

    /// The current coefficients, in increasing order of degree.
    pub fn coefficients(&self) -> &[Complex64] {
        &self.coeffs
    }

    /// The current roots, in tracked order.
    pub fn roots(&self) -> &[Complex64] {
        &self.roots
    }

    /// The degree of the tracked polynomial.
    pub fn degree(&self) -> usize {
        self.roots.len()
    }

    /// Replaces the coefficients and returns the reordered roots.
    ///
    /// If the degree changed there is nothing to match against, and the new
    /// roots are kept in extraction order.
    pub fn set_coefficients(&mut self, coeffs: &[Complex64]) -> &[Complex64] {
        let fresh = coefficients_to_roots_with(coeffs, &self.options);
        self.roots = if fresh.len() == self.roots.len() {
            sort_to_minimize_distances(fresh, &self.roots)
        } else {
            log::debug!(
                "degree changed from {} to {}, root order reset",
                self.roots.len(),
                fresh.len()
            );
            fresh
        };
        self.coeffs.clear();
        self.coeffs.extend_from_slice(coeffs);
        &self.roots
    }

    /// Replaces the roots and returns the new coefficients.
    pub fn set_roots(&mut self, roots: &[Complex64]) -> &[Complex64] {
        self.roots.clear();
        self.roots.extend_from_slice(roots);
        self.coeffs = roots_to_coefficients(roots);
        &self.coeffs
    }

    /// Moves coefficient `index` once counterclockwise around `center`, in
    /// `steps` equal increments, tracking the roots all the way.
    ///
    /// The coefficient ends where it started, so the polynomial is the same,
    /// but the roots may have traded places. The returned permutation says
    /// how: the root tracked in slot `i` ended up where the root of slot
    /// `perm[i]` started. A loop that encloses no value where two roots
    /// collide gives the identity.
    ///
    /// More steps make the tracking more reliable when roots pass close to
    /// each other.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the degree (the leading coefficient
    /// stays fixed at 1), or if `steps` is zero.
    pub fn loop_coefficient(&mut self, index: usize, center: Complex64, steps: usize) -> Vec<usize> {
        self.loop_coefficients(&[index], center, steps)
    }

    /// Moves all of the coefficients in `indices` together once
    /// counterclockwise around `center`, and returns the resulting root
    /// permutation.
    ///
    /// Each coefficient keeps its own distance from `center`; they all turn
    /// through the same angle at every step. See
    /// [`loop_coefficient`](Self::loop_coefficient) for the meaning of the
    /// permutation.
    ///
    /// # Panics
    ///
    /// Panics if any index is not below the degree, or if `steps` is zero.
    pub fn loop_coefficients(
        &mut self,
        indices: &[usize],
        center: Complex64,
        steps: usize,
    ) -> Vec<usize> {
        for &index in indices {
            assert!(
                index < self.degree(),
                "coefficient {index} cannot be looped in a polynomial of degree {}",
                self.degree()
            );
        }
        assert!(steps > 0, "a loop needs at least one step");
        let start_roots = self.roots.clone();
        let start = self.coeffs.clone();
        let mut coeffs = start.clone();
        for step in 1..steps {
            let turn = Complex64::from_polar(1.0, TAU * step as f64 / steps as f64);
            for &index in indices {
                coeffs[index] = center + (start[index] - center) * turn;
            }
            self.set_coefficients(&coeffs);
        }
        // Land exactly on the starting polynomial.
        self.set_coefficients(&start);
        permutation(&start_roots, &self.roots)
    }

    /// Moves the roots in `cycle` one place along it, and returns the
    /// coefficients at each of the `steps` increments.
    ///
    /// The root in slot `cycle[k]` travels to where the root of slot
    /// `cycle[k + 1]` started, and the last one travels to the first. Each
    /// follows a quarter-turn counterclockwise arc, so two roots trading
    /// places do not pass through each other. The roots not in the cycle
    /// stay put.
    ///
    /// Afterwards the set of roots is the same as before, so the final
    /// coefficients equal the starting ones up to rounding. The path in
    /// between is a loop of polynomials; feeding it to
    /// [`set_coefficients`](Self::set_coefficients) on another tracker
    /// reproduces the same exchange of roots.
    ///
    /// # Panics
    ///
    /// Panics if an index is not below the degree or appears twice, or if
    /// `steps` is zero.
    pub fn cycle_roots(&mut self, cycle: &[usize], steps: usize) -> Vec<Vec<Complex64>> {
        for (k, &index) in cycle.iter().enumerate() {
            assert!(
                index < self.degree(),
                "root {index} does not exist in a polynomial of degree {}",
                self.degree()
            );
            assert!(
                !cycle[..k].contains(&index),
                "root {index} appears twice in the cycle"
            );
        }
        assert!(steps > 0, "a cycle needs at least one step");
        let start = self.roots.clone();
        let mut roots = start.clone();
        let mut path = Vec::with_capacity(steps);
        for step in 1..=steps {
            let t = step as f64 / steps as f64;
            for (k, &from) in cycle.iter().enumerate() {
                let to = cycle[(k + 1) % cycle.len()];
                roots[from] = if step == steps {
                    start[to]
                } else {
                    along_arc(start[from], start[to], t)
                };
            }
            path.push(roots_to_coefficients(&roots));
        }
        self.set_roots(&roots);
        path
    }
}

/// The point a fraction `t` of the way along the quarter-turn counterclockwise
/// arc from `start` to `end`.
fn along_arc(start: Complex64, end: Complex64, t: f64) -> Complex64 {
    let half = (end - start) * 0.5;
    // tan(π/4) = 1 places the center at the midpoint plus `i * half`.
    let center = start + half + Complex64::i() * half;
    center + (start - center) * Complex64::from_polar(1.0, QUARTER_TURN * t)
}

const QUARTER_TURN: f64 = TAU / 4.0;

/// For each slot of `current`, the slot of `start` its root is nearest to.
fn permutation(start: &[Complex64], current: &[Complex64]) -> Vec<usize> {
    let slots = start.iter().enumerate().map(|(i, &z)| Slot(i, z));
    let now: Vec<Slot> = current
        .iter()
        .enumerate()
        .map(|(i, &z)| Slot(i, z))
        .collect();
    sort_to_minimize_distances(slots, &now)
        .into_iter()
        .map(|Slot(i, _)| i)
        .collect()
}

/// A root tagged with the slot it occupied.
struct Slot(usize, Complex64);

impl Planar for Slot {
    fn distance_to(&self, other: &Slot) -> f64 {
        self.1.distance_to(&other.1)
    }
}
