//! Wires strung across a sequence of anchors.

use bevy::log::debug;
use bevy::prelude::*;
use bevy::tasks::{ComputeTaskPool, TaskPool};
use rand::Rng;

use crate::error::CatenaryError;

use super::sampler::{sample_with_slack, CatenaryParams};
use super::solver::CatenarySolver;

/// Consecutive anchor pairs of a chain, closing the loop when asked.
///
/// A loop needs at least three anchors; two anchors are a single span.
pub fn chain_spans(anchors: &[Vec3], closed: bool) -> Vec<(Vec3, Vec3)> {
    let mut spans: Vec<(Vec3, Vec3)> = anchors.windows(2).map(|w| (w[0], w[1])).collect();
    if closed && anchors.len() > 2 {
        spans.push((anchors[anchors.len() - 1], anchors[0]));
    }
    spans
}

/// Slack for each span: the base slack plus one draw of the variation for
/// the Newton solver.
fn draw_span_slacks(
    span_count: usize,
    params: &CatenaryParams,
    solver: CatenarySolver,
    rng: &mut impl Rng,
) -> Vec<f32> {
    (0..span_count)
        .map(|_| match solver {
            CatenarySolver::Newton => params.slack + params.slack_variation * rng.random::<f32>(),
            CatenarySolver::Fixed => params.slack,
        })
        .collect()
}

fn join_spans(
    spans: &[(Vec3, Vec3)],
    slacks: &[f32],
    params: &CatenaryParams,
    solver: CatenarySolver,
) -> Result<Vec<Vec3>, CatenaryError> {
    let mut points: Vec<Vec3> = Vec::new();
    // Whether the last point pushed is the start anchor of the next span.
    let mut contiguous = false;
    for (&(start, end), &slack) in spans.iter().zip(slacks) {
        let curve = match sample_with_slack(start, end, slack, params.steps, solver) {
            Ok(curve) => curve,
            Err(CatenaryError::InvalidGeometry(reason)) => {
                debug!("skipping wire span {start} -> {end}: {reason}");
                contiguous = false;
                continue;
            }
            Err(err) => return Err(err),
        };
        if curve.is_empty() {
            contiguous = false;
            continue;
        }
        points.extend(curve.points.into_iter().skip(usize::from(contiguous)));
        contiguous = true;
    }
    Ok(points)
}

/// Sample one catenary per consecutive anchor pair and join them into a
/// single point sequence.
///
/// Spans whose anchors are too close, or stacked vertically, are skipped and
/// the wire continues from the next anchor. Each span draws its own slack
/// variation from `rng`. Only [`CatenaryError::TooFewSteps`] fails the chain.
pub fn sample_wire_chain(
    anchors: &[Vec3],
    closed: bool,
    params: &CatenaryParams,
    solver: CatenarySolver,
    rng: &mut impl Rng,
) -> Result<Vec<Vec3>, CatenaryError> {
    let spans = chain_spans(anchors, closed);
    let slacks = draw_span_slacks(spans.len(), params, solver, rng);
    join_spans(&spans, &slacks, params, solver)
}

/// Input for [`sample_wire_chains_parallel`].
#[derive(Debug, Clone, PartialEq)]
pub struct WireChain {
    pub anchors: Vec<Vec3>,
    pub closed: bool,
}

/// Sample many independent chains on the compute task pool.
///
/// Random slack is drawn up front in input order, so the output for a seeded
/// generator does not depend on task scheduling. Results keep input order.
pub fn sample_wire_chains_parallel(
    chains: &[WireChain],
    params: &CatenaryParams,
    solver: CatenarySolver,
    rng: &mut impl Rng,
) -> Vec<Result<Vec<Vec3>, CatenaryError>> {
    let jobs: Vec<(Vec<(Vec3, Vec3)>, Vec<f32>)> = chains
        .iter()
        .map(|chain| {
            let spans = chain_spans(&chain.anchors, chain.closed);
            let slacks = draw_span_slacks(spans.len(), params, solver, rng);
            (spans, slacks)
        })
        .collect();

    let params = *params;
    let pool = ComputeTaskPool::get_or_init(TaskPool::default);
    pool.scope(|scope| {
        for (spans, slacks) in jobs {
            scope.spawn(async move { join_spans(&spans, &slacks, &params, solver) });
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn poles() -> Vec<Vec3> {
        vec![
            Vec3::new(0.0, 100.0, 0.0),
            Vec3::new(500.0, 100.0, 0.0),
            Vec3::new(500.0, 120.0, 500.0),
        ]
    }

    #[test]
    fn test_chain_spans() {
        let anchors = poles();
        assert_eq!(chain_spans(&anchors, false).len(), 2);
        let closed = chain_spans(&anchors, true);
        assert_eq!(closed.len(), 3);
        assert_eq!(closed[2], (anchors[2], anchors[0]));

        assert_eq!(chain_spans(&anchors[..2], true).len(), 1);
        assert!(chain_spans(&anchors[..1], true).is_empty());
    }

    #[test]
    fn test_chain_shares_anchor_points() {
        let params = CatenaryParams::new(50.0, 8);
        let mut rng = StdRng::seed_from_u64(1);
        let points =
            sample_wire_chain(&poles(), false, &params, CatenarySolver::Newton, &mut rng).unwrap();

        // Two spans of 8 points sharing the middle pole.
        assert_eq!(points.len(), 15);
        assert!((points[7] - poles()[1]).length() < 1.0);
    }

    #[test]
    fn test_chain_skips_degenerate_spans() {
        let mut anchors = poles();
        anchors.insert(1, Vec3::new(5.0, 100.0, 0.0));
        let params = CatenaryParams::new(50.0, 8);
        let points = sample_wire_chain(
            &anchors,
            false,
            &params,
            CatenarySolver::Fixed,
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap();

        assert_eq!(points.len(), 15);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let params = CatenaryParams::new(50.0, 8).with_slack_variation(20.0);
        let chains = vec![
            WireChain { anchors: poles(), closed: false },
            WireChain { anchors: poles(), closed: true },
            WireChain { anchors: vec![Vec3::ZERO, Vec3::new(0.0, 400.0, 0.0)], closed: false },
        ];

        let parallel = sample_wire_chains_parallel(
            &chains,
            &params,
            CatenarySolver::Newton,
            &mut StdRng::seed_from_u64(9),
        );

        let mut rng = StdRng::seed_from_u64(9);
        let sequential: Vec<_> = chains
            .iter()
            .map(|chain| {
                sample_wire_chain(&chain.anchors, chain.closed, &params, CatenarySolver::Newton, &mut rng)
            })
            .collect();

        assert_eq!(parallel, sequential);
        assert_eq!(parallel[1].as_ref().unwrap().len(), 22);
        assert_eq!(parallel[2], Ok(Vec::new()));
    }

    #[test]
    fn test_chain_skips_vertical_spans() {
        // The wire drops straight down the second pole and carries on.
        let anchors = vec![
            Vec3::new(0.0, 100.0, 0.0),
            Vec3::new(500.0, 100.0, 0.0),
            Vec3::new(500.0, 400.0, 0.0),
            Vec3::new(1000.0, 400.0, 0.0),
        ];
        let params = CatenaryParams::new(50.0, 8);
        let points = sample_wire_chain(
            &anchors,
            false,
            &params,
            CatenarySolver::Fixed,
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap();

        // Both spans keep all their points; nothing is shared across the gap.
        assert_eq!(points.len(), 16);
        assert_eq!(points[7].x, 500.0);
        assert_eq!(points[8].x, 500.0);
        assert_eq!(points[15].x, 1000.0);
    }

    #[test]
    fn test_chain_rejects_too_few_steps() {
        let params = CatenaryParams::new(50.0, 1);
        let result = sample_wire_chain(
            &poles(),
            false,
            &params,
            CatenarySolver::Fixed,
            &mut StdRng::seed_from_u64(1),
        );
        assert_eq!(result, Err(CatenaryError::TooFewSteps(1)));
    }
}
