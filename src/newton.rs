// Copyright 2025 the Vieta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Newton's method for a single complex root.

use num_complex::Complex64;

use crate::complex::{eval_deriv, eval_poly};

/// The seed used by [`find_root`].
pub const DEFAULT_SEED: Complex64 = Complex64::new(1.0, 1.0);

/// The step size below which [`find_root`] considers the iteration converged.
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// The iteration budget of [`find_root`].
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Parameters for [`find_root_with`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewtonOptions {
    /// The starting point of the iteration.
    pub seed: Complex64,
    /// Iteration stops once successive iterates are closer than this.
    pub tolerance: f64,
    /// The maximum number of Newton updates.
    pub max_iterations: usize,
    /// If set, every step is shortened to at most this magnitude.
    ///
    /// This keeps the iteration bounded when the derivative is close to zero.
    /// Steps that are already shorter are untouched, so well-conditioned
    /// problems give the same result as without the clamp.
    pub max_step: Option<f64>,
}

impl Default for NewtonOptions {
    fn default() -> Self {
        NewtonOptions {
            seed: DEFAULT_SEED,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_step: None,
        }
    }
}

/// The outcome of a Newton iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewtonResult {
    /// The last iterate.
    pub root: Complex64,
    /// The number of Newton updates performed.
    pub iterations: usize,
    /// Whether the step size fell below the tolerance.
    pub converged: bool,
}

/// Finds a root of the polynomial with coefficients `coeffs`.
///
/// Starts at `1 + i` and runs Newton's method until successive iterates are
/// within `1e-8` of each other, or 100 updates have been made. The last
/// iterate is returned either way; use [`find_root_with`] to learn whether
/// the iteration actually converged.
///
/// When several roots are present, the one found is whichever the iteration
/// from the seed happens to reach.
///
/// # Examples
///
/// ```
/// use num_complex::Complex64;
/// use vieta::find_root;
///
/// // x - 3
/// let root = find_root(&[Complex64::new(-3.0, 0.0), Complex64::new(1.0, 0.0)]);
/// assert!((root - Complex64::new(3.0, 0.0)).norm() < 1e-8);
/// ```
pub fn find_root(coeffs: &[Complex64]) -> Complex64 {
    find_root_with(coeffs, &NewtonOptions::default()).root
}

/// Finds a root of the polynomial with coefficients `coeffs`, reporting how
/// the iteration went.
///
/// A vanishing derivative yields a non-finite iterate. The iteration stops
/// there and the non-finite value is returned, with `converged` false.
pub fn find_root_with(coeffs: &[Complex64], options: &NewtonOptions) -> NewtonResult {
    let mut x = options.seed;
    // The first comparison is against an iterate infinitely far away.
    let mut last: Option<Complex64> = None;
    let mut iterations = 0;
    while iterations < options.max_iterations {
        if let Some(last) = last {
            if (x - last).norm() < options.tolerance {
                return NewtonResult {
                    root: x,
                    iterations,
                    converged: true,
                };
            }
        }
        last = Some(x);
        let step = newton_step(x, coeffs, options.max_step);
        x -= step;
        iterations += 1;
        if !x.is_finite() {
            log::debug!(
                "newton iteration left the finite range after {iterations} steps (f'(x) = 0?)"
            );
            return NewtonResult {
                root: x,
                iterations,
                converged: false,
            };
        }
    }
    // The budget may run out right as the last step lands within tolerance.
    let converged = last.is_some_and(|last| (x - last).norm() < options.tolerance);
    if !converged {
        log::debug!(
            "newton iteration did not converge in {} steps, last iterate {x}",
            options.max_iterations
        );
    }
    NewtonResult {
        root: x,
        iterations,
        converged,
    }
}

/// Runs at most `steps` Newton updates from `start`, stopping early once the
/// step is below `tolerance`.
///
/// Used to polish an approximate root against a polynomial it was not
/// computed from.
pub(crate) fn polish(coeffs: &[Complex64], start: Complex64, steps: usize, tolerance: f64) -> Complex64 {
    let mut x = start;
    for _ in 0..steps {
        let step = newton_step(x, coeffs, None);
        let next = x - step;
        if !next.is_finite() {
            // Keep the estimate we had rather than throwing it away.
            return x;
        }
        x = next;
        if step.norm() < tolerance {
            break;
        }
    }
    x
}

fn newton_step(x: Complex64, coeffs: &[Complex64], max_step: Option<f64>) -> Complex64 {
    let step = eval_poly(x, coeffs) / eval_deriv(x, coeffs);
    match max_step {
        Some(max) if step.norm() > max => step * (max / step.norm()),
        _ => step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::approx_eq;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn linear_converges_to_root() {
        let coeffs = [c(-3.0, 0.0), c(1.0, 0.0)];
        let result = find_root_with(&coeffs, &NewtonOptions::default());
        assert!(result.converged);
        assert!(approx_eq(result.root, c(3.0, 0.0), 1e-8));
        // One step lands on the root, a second confirms it.
        assert_eq!(result.iterations, 2);
        assert_eq!(find_root(&coeffs), result.root);
    }

    #[test]
    fn quadratic_from_default_seed() {
        // x^2 + 1; the seed 1 + i lies in the upper half plane.
        let coeffs = [c(1.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)];
        let root = find_root(&coeffs);
        assert!(approx_eq(root, c(0.0, 1.0), 1e-8));
    }

    #[test]
    fn custom_seed_picks_other_root() {
        let coeffs = [c(1.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)];
        let options = NewtonOptions {
            seed: c(0.5, -2.0),
            ..Default::default()
        };
        let result = find_root_with(&coeffs, &options);
        assert!(result.converged);
        assert!(approx_eq(result.root, c(0.0, -1.0), 1e-8));
    }

    #[test]
    fn budget_exhaustion_is_reported() {
        // x^2 - 1 from a seed on the imaginary axis never leaves it.
        let coeffs = [c(-1.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)];
        let options = NewtonOptions {
            seed: c(0.0, 0.5),
            max_iterations: 20,
            ..Default::default()
        };
        let result = find_root_with(&coeffs, &options);
        assert!(!result.converged);
        assert_eq!(result.iterations, 20);
        assert!(result.root.re.abs() < 1e-12);
    }

    #[test]
    fn zero_derivative_stops_iteration() {
        // x^2 + 1 has f'(0) = 0.
        let coeffs = [c(1.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)];
        let options = NewtonOptions {
            seed: c(0.0, 0.0),
            ..Default::default()
        };
        let result = find_root_with(&coeffs, &options);
        assert!(!result.converged);
        assert_eq!(result.iterations, 1);
        assert!(!result.root.is_finite());
    }

    #[test]
    fn max_step_clamps_without_changing_easy_answers() {
        let coeffs = [c(-3.0, 0.0), c(1.0, 0.0)];
        let clamped = NewtonOptions {
            max_step: Some(0.5),
            ..Default::default()
        };
        let result = find_root_with(&coeffs, &clamped);
        assert!(result.converged);
        assert!(approx_eq(result.root, c(3.0, 0.0), 1e-8));
        // The first step wants to travel |2 - i| > 0.5, so more steps are needed.
        assert!(result.iterations > 2);

        let loose = NewtonOptions {
            max_step: Some(1e6),
            ..Default::default()
        };
        assert_eq!(find_root_with(&coeffs, &loose), find_root_with(&coeffs, &NewtonOptions::default()));
    }

    #[test]
    fn polish_improves_estimate() {
        let coeffs = [c(-2.0, 0.0), c(0.0, 0.0), c(1.0, 0.0)];
        let rough = c(1.5, 0.01);
        let polished = polish(&coeffs, rough, 8, 1e-14);
        assert!(approx_eq(polished, c(2.0_f64.sqrt(), 0.0), 1e-12));
        assert_eq!(polish(&coeffs, rough, 0, 1e-14), rough);
    }
}
