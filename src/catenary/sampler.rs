//! Sampling a hanging cable between two anchors.

use bevy::prelude::*;
use rand::Rng;

use crate::error::CatenaryError;
use crate::math::{cosh, lerp, sinh};

use super::solver::{CatenarySolution, CatenarySolver};

/// Anchors closer than this on every axis produce no curve.
///
/// The comparison is strict: an offset of exactly this much on any axis
/// still yields a cable.
pub const DEGENERATE_SPAN: f32 = 20.0;

/// The wire is always at least this much longer than the straight span.
pub const MIN_SLACK: f32 = 1.0;

/// Horizontal spans below this are treated as vertical cables.
const MIN_HORIZONTAL_SPAN: f32 = 1e-4;

/// Shape inputs for a single catenary span.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct CatenaryParams {
    /// Extra wire length beyond the straight-line distance.
    pub slack: f32,
    /// Upper bound of a random extra slack in `[0, slack_variation)`.
    /// Only the Newton-backed sampler draws it.
    pub slack_variation: f32,
    /// Number of output points, including both anchors.
    pub steps: usize,
}

impl Default for CatenaryParams {
    fn default() -> Self {
        Self {
            slack: 100.0,
            slack_variation: 0.0,
            steps: 10,
        }
    }
}

impl CatenaryParams {
    /// Params with no slack variation.
    pub fn new(slack: f32, steps: usize) -> Self {
        Self {
            slack,
            steps,
            ..Default::default()
        }
    }

    /// Set the upper bound of the random extra slack.
    pub fn with_slack_variation(mut self, slack_variation: f32) -> Self {
        self.slack_variation = slack_variation;
        self
    }
}

/// A sampled catenary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatenaryCurve {
    /// Points from the start anchor to the end anchor.
    pub points: Vec<Vec3>,
    /// Total wire length the curve was fitted to.
    pub wire_length: f32,
    /// The shape parameter solve. `None` for a degenerate span.
    pub solution: Option<CatenarySolution>,
}

impl CatenaryCurve {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Whether two anchors are too close for a meaningful cable.
pub fn is_degenerate_span(start: Vec3, end: Vec3) -> bool {
    (end - start).abs().max_element() < DEGENERATE_SPAN
}

/// Sample a catenary solved with Newton's method.
///
/// Draws one value from `rng` for the slack variation, so repeated calls
/// only match when `slack_variation` is zero or the generator is reseeded.
pub fn sample_catenary_newton(
    start: Vec3,
    end: Vec3,
    params: &CatenaryParams,
    rng: &mut impl Rng,
) -> Result<CatenaryCurve, CatenaryError> {
    let extra_slack = params.slack_variation * rng.random::<f32>();
    sample_with_slack(start, end, params.slack + extra_slack, params.steps, CatenarySolver::Newton)
}

/// Sample a catenary solved with the bracket search. Fully deterministic.
pub fn sample_catenary_fixed(
    start: Vec3,
    end: Vec3,
    params: &CatenaryParams,
) -> Result<CatenaryCurve, CatenaryError> {
    sample_with_slack(start, end, params.slack, params.steps, CatenarySolver::Fixed)
}

/// Sample a catenary with the chosen solver.
///
/// The slack variation is drawn for the Newton solver only.
pub fn sample_catenary(
    start: Vec3,
    end: Vec3,
    params: &CatenaryParams,
    solver: CatenarySolver,
    rng: &mut impl Rng,
) -> Result<CatenaryCurve, CatenaryError> {
    match solver {
        CatenarySolver::Newton => sample_catenary_newton(start, end, params, rng),
        CatenarySolver::Fixed => sample_catenary_fixed(start, end, params),
    }
}

/// Fit and sample a catenary with a fully resolved slack.
///
/// Heights are measured along +Y; the horizontal span lies in the XZ plane.
pub(crate) fn sample_with_slack(
    start: Vec3,
    end: Vec3,
    slack: f32,
    steps: usize,
    solver: CatenarySolver,
) -> Result<CatenaryCurve, CatenaryError> {
    if is_degenerate_span(start, end) {
        return Ok(CatenaryCurve::default());
    }
    if steps < 2 {
        return Err(CatenaryError::TooFewSteps(steps));
    }

    let total_distance = start.distance(end);
    let horizontal_distance = start.distance(Vec3::new(end.x, start.y, end.z));
    if horizontal_distance < MIN_HORIZONTAL_SPAN {
        return Err(CatenaryError::InvalidGeometry(
            "anchors are vertically aligned",
        ));
    }

    let wire_length = total_distance + slack.max(MIN_SLACK);
    let height_diff = end.y - start.y;
    let target_ratio =
        (wire_length * wire_length - height_diff * height_diff).sqrt() / horizontal_distance;

    let solution = solver.solve(target_ratio)?;
    let z = solution.z;

    let a = horizontal_distance / (2.0 * z);
    let p = (horizontal_distance
        - a * ((wire_length + height_diff) / (wire_length - height_diff)).ln())
        / 2.0;
    let q = (end.y + start.y - wire_length * cosh(z) / sinh(z)) / 2.0;

    let last = (steps - 1) as f32;
    let points = (0..steps)
        .map(|i| {
            let t = i as f32 / last;
            Vec3::new(
                lerp(start.x, end.x, t),
                a * cosh((t * horizontal_distance - p) / a) + q,
                lerp(start.z, end.z, t),
            )
        })
        .collect();

    Ok(CatenaryCurve {
        points,
        wire_length,
        solution: Some(solution),
    })
}
