//! Distance-based curve queries.
//!
//! Everything that places objects along a path works through the [`Curve`]
//! trait, so splines, sampled wires and host-provided paths are interchangeable.

use bevy::prelude::*;

use crate::geometry::rotation_along;

use super::{ArcLengthTable, Spline, DEFAULT_ARC_LENGTH_SAMPLES};

/// A continuous path queried by arc-length distance from its start.
///
/// Distances outside `[0, length]` are clamped by the implementations in this
/// crate; other implementations may choose their own out-of-range policy.
pub trait Curve {
    /// Total arc length.
    fn length(&self) -> f32;

    /// Position at `distance` along the curve.
    fn position_at_distance(&self, distance: f32) -> Vec3;

    /// Tangent at `distance`. Not necessarily unit length.
    fn tangent_at_distance(&self, distance: f32) -> Vec3;

    /// Arc-length distance of the named anchor point `index`, if it exists.
    fn distance_at_point(&self, index: usize) -> Option<f32>;

    /// Position and orientation at `distance`, with unit scale.
    ///
    /// The orientation points local -Z along the tangent with +Y up.
    fn transform_at_distance(&self, distance: f32) -> Transform {
        Transform {
            translation: self.position_at_distance(distance),
            rotation: rotation_along(self.tangent_at_distance(distance)),
            scale: Vec3::ONE,
        }
    }
}

/// A [`Spline`] with an arc-length table, queryable by distance.
///
/// Anchors are the spline's control points (see [`Spline::anchor_t`]).
#[derive(Debug, Clone)]
pub struct SplineCurve<'a> {
    spline: &'a Spline,
    table: ArcLengthTable,
}

impl<'a> SplineCurve<'a> {
    /// Wrap a spline, or `None` if it has too few control points.
    pub fn new(spline: &'a Spline) -> Option<Self> {
        Self::with_samples(spline, DEFAULT_ARC_LENGTH_SAMPLES)
    }

    /// Wrap a spline using `samples` arc-length samples.
    pub fn with_samples(spline: &'a Spline, samples: usize) -> Option<Self> {
        if !spline.is_valid() {
            return None;
        }
        Some(Self {
            spline,
            table: ArcLengthTable::compute(spline, samples),
        })
    }

    /// The wrapped spline.
    pub fn spline(&self) -> &Spline {
        self.spline
    }
}

impl Curve for SplineCurve<'_> {
    fn length(&self) -> f32 {
        self.table.total_length()
    }

    fn position_at_distance(&self, distance: f32) -> Vec3 {
        self.spline
            .evaluate(self.table.length_to_t(distance))
            .unwrap_or(Vec3::ZERO)
    }

    fn tangent_at_distance(&self, distance: f32) -> Vec3 {
        self.spline
            .evaluate_tangent(self.table.length_to_t(distance))
            .unwrap_or(Vec3::ZERO)
    }

    fn distance_at_point(&self, index: usize) -> Option<f32> {
        self.spline
            .anchor_t(index)
            .map(|t| self.table.t_to_length(t))
    }
}
