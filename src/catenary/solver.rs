//! Root finding for the catenary shape parameter.
//!
//! A cable of length `L` hanging across a horizontal span `H` with height
//! difference `h` has shape parameter `z` satisfying
//! `sinh(z) / z = sqrt(L² - h²) / H`. The right-hand side is the target ratio.

use bevy::log::debug;
use bevy::prelude::*;

use crate::error::CatenaryError;
use crate::math::{sinh_ratio, sinh_ratio_derivative};

const INITIAL_Z: f32 = 1.0;

const NEWTON_MAX_ITERATIONS: usize = 8;
/// Newton stops once an update moves `z` by less than this.
const NEWTON_STEP_TOLERANCE: f32 = 0.01;

const FIXED_ROUNDS: usize = 8;
const FIXED_STEPS_PER_ROUND: usize = 5;
const FIXED_INITIAL_STEP: f32 = 10.0;
const FIXED_STEP_SHRINK: f32 = 0.2;
/// The bracket search accepts a candidate whose ratio is this close to the target.
const FIXED_RATIO_TOLERANCE: f32 = 0.05;

/// Which root finder to use for the shape parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Default)]
pub enum CatenarySolver {
    /// Newton's method from `z = 1`. Fast for realistic sag.
    #[default]
    Newton,
    /// Deterministic coarse-to-fine bracket search from `z = 1`.
    Fixed,
}

impl CatenarySolver {
    /// Find `z` with `sinh(z)/z = target_ratio` using this solver.
    pub fn solve(self, target_ratio: f32) -> Result<CatenarySolution, CatenaryError> {
        match self {
            Self::Newton => solve_newton(target_ratio),
            Self::Fixed => solve_fixed(target_ratio),
        }
    }
}

/// Result of a shape parameter solve.
///
/// Both solvers are best effort: when the iteration budget runs out the last
/// estimate is returned with `converged == false`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatenarySolution {
    /// The shape parameter, always positive.
    pub z: f32,
    /// Iterations (Newton updates or bracket steps) spent.
    pub iterations: usize,
    /// `|sinh(z)/z - target|` at the returned `z`.
    pub residual: f32,
    /// Whether the solver met its own stopping criterion.
    pub converged: bool,
}

impl CatenarySolution {
    fn new(z: f32, target_ratio: f32, iterations: usize, converged: bool) -> Self {
        let z = z.abs();
        Self {
            z,
            iterations,
            residual: (sinh_ratio(z) - target_ratio).abs(),
            converged,
        }
    }
}

fn check_ratio(target_ratio: f32) -> Result<(), CatenaryError> {
    if target_ratio.is_finite() && target_ratio > 1.0 {
        Ok(())
    } else {
        Err(CatenaryError::InvalidRatio(target_ratio))
    }
}

/// Solve `sinh(z)/z = target_ratio` with Newton's method.
///
/// Starts at `z = 1` and runs at most 8 updates, stopping once an update is
/// smaller than 0.01. Stops early without converging if the iteration leaves
/// the range where `sinh` is representable.
pub fn solve_newton(target_ratio: f32) -> Result<CatenarySolution, CatenaryError> {
    check_ratio(target_ratio)?;

    let mut z = INITIAL_Z;
    for iteration in 1..=NEWTON_MAX_ITERATIONS {
        let ratio = sinh_ratio(z);
        let derivative = sinh_ratio_derivative(z);
        let step = (ratio - target_ratio) / derivative;

        if !step.is_finite() {
            debug!("newton catenary solve diverged at z = {z} (target {target_ratio})");
            return Ok(CatenarySolution::new(z, target_ratio, iteration - 1, false));
        }

        z -= step;

        if step.abs() < NEWTON_STEP_TOLERANCE {
            return Ok(CatenarySolution::new(z, target_ratio, iteration, true));
        }
    }

    debug!("newton catenary solve hit its iteration budget (target {target_ratio})");
    Ok(CatenarySolution::new(
        z,
        target_ratio,
        NEWTON_MAX_ITERATIONS,
        false,
    ))
}

/// Solve `sinh(z)/z = target_ratio` with a coarse-to-fine bracket search.
///
/// Walks `z` upward from 1 in steps of 10, 2, 0.4, ... never stepping past
/// the target. Because the walk only moves upward, targets below
/// `sinh(1) ≈ 1.175` leave `z` at 1 unconverged.
pub fn solve_fixed(target_ratio: f32) -> Result<CatenarySolution, CatenaryError> {
    check_ratio(target_ratio)?;

    let mut z = INITIAL_Z;
    let mut step_size = FIXED_INITIAL_STEP;
    let mut steps_taken = 0;

    for _ in 0..FIXED_ROUNDS {
        for _ in 0..FIXED_STEPS_PER_ROUND {
            let candidate = z + step_size;
            let ratio = sinh_ratio(candidate);
            steps_taken += 1;

            if ratio.is_infinite() {
                break;
            }
            if (ratio - target_ratio).abs() < FIXED_RATIO_TOLERANCE {
                return Ok(CatenarySolution::new(candidate, target_ratio, steps_taken, true));
            }
            if ratio > target_ratio {
                break;
            }
            z = candidate;
        }
        step_size *= FIXED_STEP_SHRINK;
    }

    debug!("fixed catenary solve hit its step budget (target {target_ratio})");
    Ok(CatenarySolution::new(z, target_ratio, steps_taken, false))
}
