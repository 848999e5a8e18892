// Copyright 2025 the Vieta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roots and coefficients of complex polynomials, for animation.
//!
//! A monic polynomial can be described either by its coefficients or by its
//! roots. This crate converts between the two: [`roots_to_coefficients`]
//! expands Vieta's formulas, and [`coefficients_to_roots`] finds the roots one
//! at a time with Newton's method, deflating after each. It is meant to be
//! called once per frame by code that draws both descriptions and lets one of
//! them be dragged around, so it also helps keep the drawing continuous:
//! [`sort_to_minimize_distances`] lines freshly computed roots up with the
//! ones on screen, and [`RootTracker`] does that bookkeeping for you.
//!
//! Coefficient lists are always in increasing order of degree: `coeffs[k]`
//! multiplies `x^k`, and the last entry is the leading coefficient.
//!
//! # Examples
//!
//! Going back and forth between the two descriptions:
//! ```
//! use num_complex::Complex64;
//! use vieta::{coefficients_to_roots, roots_to_coefficients, sort_to_minimize_distances};
//!
//! let roots = [Complex64::new(1.0, 0.5), Complex64::new(-1.0, 0.0), Complex64::new(0.0, -1.0)];
//! let coeffs = roots_to_coefficients(&roots);
//! assert_eq!(coeffs.len(), 4);
//!
//! // The roots come back in some order; match them up with the originals.
//! let found = sort_to_minimize_distances(coefficients_to_roots(&coeffs), &roots);
//! for (a, b) in found.iter().zip(&roots) {
//!     assert!((a - b).norm() < 1e-6);
//! }
//! ```
//!
//! The intermediate terms of the cubic formula:
//! ```
//! use num_complex::Complex64;
//! use vieta::CardanoTerms;
//!
//! // x^3 - 7x + 6 = (x - 1)(x - 2)(x + 3)
//! let terms = CardanoTerms::new(Complex64::new(-7.0, 0.0), Complex64::new(6.0, 0.0));
//! assert_eq!(terms.candidates().len(), 9);
//! assert_eq!(terms.roots().len(), 3);
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. The `alloc` crate is used regardless.
//!
//! The `serde` feature derives serialization for the option and point types,
//! and `mint` adds conversions to and from its point and vector types.
//!
//! Diagnostics, such as a Newton iteration that ran out of steps, go through
//! the [`log`] facade.
//!
//! [`libm`]: https://docs.rs/libm
//! [`log`]: https://docs.rs/log

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(
    clippy::many_single_char_names,
    clippy::excessive_precision
)]
// The following lints are part of the Linebender standard set,
// but resolving them has been deferred for now.
#![allow(
    single_use_lifetimes,
    clippy::cast_possible_truncation,
    clippy::use_self,
    clippy::missing_errors_doc,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("vieta requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

extern crate alloc;

mod cardano;
mod common;
mod complex;
mod matching;
mod newton;
mod nth_root;
mod point;
mod poly;
mod tracker;
mod vec2;
mod vieta;

pub use num_complex::Complex64;

pub use crate::cardano::{quadratic_roots, CardanoTerms};
pub use crate::complex::{approx_eq, eval_deriv, eval_poly};
pub use crate::matching::{
    sort_to_minimize_distances, total_displacement, try_sort_to_minimize_distances, MatchError,
    Planar,
};
pub use crate::newton::{
    find_root, find_root_with, NewtonOptions, NewtonResult, DEFAULT_MAX_ITERATIONS, DEFAULT_SEED,
    DEFAULT_TOLERANCE,
};
pub use crate::nth_root::{nth_roots, roots_of_unity};
pub use crate::point::Point;
pub use crate::poly::ComplexPoly;
pub use crate::tracker::RootTracker;
pub use crate::vec2::Vec2;
pub use crate::vieta::{
    coefficients_to_roots, coefficients_to_roots_with, elementary_symmetric,
    roots_to_coefficients, Combinations, RootOptions,
};
