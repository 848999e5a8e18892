// Copyright 2025 the Vieta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pairing up two unordered point sets so that corresponding points are close.
//!
//! Root finding returns roots in an arbitrary order, and that order can jump
//! between two nearly identical polynomials. When roots are drawn as dots
//! that move from frame to frame, each new root should be handed to the dot
//! that was closest to it, otherwise dots appear to swap places.

use alloc::vec::Vec;
use core::fmt;

use num_complex::Complex64;

use crate::{Point, Vec2};

/// Something with a Euclidean distance.
pub trait Planar {
    /// The distance between `self` and `other`.
    fn distance_to(&self, other: &Self) -> f64;
}

impl Planar for Point {
    #[inline]
    fn distance_to(&self, other: &Point) -> f64 {
        self.distance(*other)
    }
}

impl Planar for Vec2 {
    #[inline]
    fn distance_to(&self, other: &Vec2) -> f64 {
        (*self - *other).hypot()
    }
}

impl Planar for Complex64 {
    #[inline]
    fn distance_to(&self, other: &Complex64) -> f64 {
        (*self - *other).norm()
    }
}

/// The error returned by [`try_sort_to_minimize_distances`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum MatchError {
    /// There were fewer candidate points than reference points.
    PoolExhausted {
        /// The number of reference points.
        needed: usize,
        /// The number of candidates that were supplied.
        available: usize,
    },
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::PoolExhausted { needed, available } => write!(
                f,
                "cannot match {needed} reference points with only {available} candidates"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatchError {}

/// Reorders `unordered` so that it lines up with `reference`.
///
/// The reference points are visited in order, and each takes the closest
/// candidate not already taken; ties go to the candidate that came first.
/// This is greedy: it does not revisit earlier choices, so the total
/// distance is small but not always minimal. It is quick for the handful of
/// points involved in an animation, and it keeps natural pairings intact.
///
/// If there are more candidates than reference points, the leftovers are
/// dropped.
///
/// A NaN distance counts as nearer than any number: the first candidate at a
/// NaN distance from a reference point is the one it takes. A NaN root left
/// by a failed Newton iteration therefore goes to the earliest reference
/// point, ahead of any finite candidate.
///
/// # Panics
///
/// Panics if there are fewer candidates than reference points. Use
/// [`try_sort_to_minimize_distances`] to get an error instead.
///
/// # Examples
///
/// ```
/// use vieta::{sort_to_minimize_distances, Point};
///
/// let unordered = [Point::new(10.0, 10.0), Point::new(0.0, 0.0)];
/// let reference = [Point::new(1.0, 1.0), Point::new(9.0, 9.0)];
/// let sorted = sort_to_minimize_distances(unordered, &reference);
/// assert_eq!(sorted, [Point::new(0.0, 0.0), Point::new(10.0, 10.0)]);
/// ```
pub fn sort_to_minimize_distances<P: Planar>(
    unordered: impl IntoIterator<Item = P>,
    reference: &[P],
) -> Vec<P> {
    match try_sort_to_minimize_distances(unordered, reference) {
        Ok(sorted) => sorted,
        Err(e) => panic!("{e}"),
    }
}

/// Reorders `unordered` so that it lines up with `reference`, or reports
/// that there are too few candidates.
///
/// See [`sort_to_minimize_distances`] for the matching rule.
pub fn try_sort_to_minimize_distances<P: Planar>(
    unordered: impl IntoIterator<Item = P>,
    reference: &[P],
) -> Result<Vec<P>, MatchError> {
    let mut pool: Vec<P> = unordered.into_iter().collect();
    if pool.len() < reference.len() {
        log::debug!(
            "point pool exhausted: {} reference points, {} candidates",
            reference.len(),
            pool.len()
        );
        return Err(MatchError::PoolExhausted {
            needed: reference.len(),
            available: pool.len(),
        });
    }
    let mut ordered = Vec::with_capacity(reference.len());
    for target in reference {
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for (i, candidate) in pool.iter().enumerate() {
            let dist = target.distance_to(candidate);
            if dist.is_nan() {
                best = i;
                break;
            }
            // Strict comparison keeps the first of equally near candidates.
            if dist < best_dist {
                best = i;
                best_dist = dist;
            }
        }
        // `remove` rather than `swap_remove`, so that tie-breaking by index
        // stays in terms of the original candidate order.
        ordered.push(pool.remove(best));
    }
    Ok(ordered)
}

/// The sum of the distances between corresponding points.
///
/// Extra points in the longer slice are ignored.
pub fn total_displacement<P: Planar>(from: &[P], to: &[P]) -> f64 {
    from.iter().zip(to).map(|(a, b)| a.distance_to(b)).sum()
}
