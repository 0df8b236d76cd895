//! Splitting a curve into consecutive fixed-length tiles.

use bevy::prelude::*;

use crate::error::PlacementError;
use crate::spline::Curve;

/// Start and end of one tile along a curve.
///
/// Tangents are the curve's tangents at each end with their magnitude capped
/// at the tile length, ready to drive a cubic deformation of a tile mesh.
#[derive(Debug, Clone, Copy, PartialEq, Default, Reflect)]
pub struct TileSpan {
    pub start_position: Vec3,
    pub start_tangent: Vec3,
    pub end_position: Vec3,
    pub end_tangent: Vec3,
}

/// The span of tile `index` when tiles of length `bound` are laid end to end
/// from `start_offset`.
///
/// Tiles past the end of the curve are not rejected; the curve clamps their
/// distances.
pub fn tile_span(
    index: usize,
    bound: f32,
    curve: &impl Curve,
    start_offset: f32,
) -> Result<TileSpan, PlacementError> {
    if !(bound > 0.0 && bound.is_finite()) {
        return Err(PlacementError::InvalidTileLength(bound));
    }

    let start = index as f32 * bound + start_offset;
    let end = (index + 1) as f32 * bound + start_offset;
    Ok(TileSpan {
        start_position: curve.position_at_distance(start),
        start_tangent: curve.tangent_at_distance(start).clamp_length_max(bound),
        end_position: curve.position_at_distance(end),
        end_tangent: curve.tangent_at_distance(end).clamp_length_max(bound),
    })
}

/// Spans for tiles `0..count`.
pub fn tile_spans(
    curve: &impl Curve,
    bound: f32,
    count: usize,
    start_offset: f32,
) -> Result<Vec<TileSpan>, PlacementError> {
    (0..count)
        .map(|index| tile_span(index, bound, curve, start_offset))
        .collect()
}
