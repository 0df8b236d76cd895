//! Mesh extents and how many fixed-length meshes fit along a curve.

use bevy::mesh::VertexAttributeValues;
use bevy::prelude::*;

use crate::error::PlacementError;
use crate::spline::Curve;

/// A principal axis of a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Default)]
pub enum MeshAxis {
    #[default]
    X,
    Y,
    Z,
}

impl MeshAxis {
    /// The component of `v` along this axis.
    pub fn component(self, v: Vec3) -> f32 {
        match self {
            Self::X => v.x,
            Self::Y => v.y,
            Self::Z => v.z,
        }
    }
}

/// Axis-aligned bounding box of a mesh in its local space.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct MeshBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl MeshBounds {
    /// Bounds from explicit corners, e.g. an asset's authored box.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Bounds of the mesh's vertex positions.
    ///
    /// Returns `None` if the mesh has no `Float32x3` positions.
    pub fn from_mesh(mesh: &Mesh) -> Option<Self> {
        let VertexAttributeValues::Float32x3(positions) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)?
        else {
            return None;
        };
        Self::from_points(positions.iter().map(|&p| Vec3::from_array(p)))
    }

    /// Bounds of a point set, or `None` if it is empty.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        points.into_iter().fold(None, |bounds, p| {
            Some(match bounds {
                None => Self::new(p, p),
                Some(Self { min, max }) => Self::new(min.min(p), max.max(p)),
            })
        })
    }

    /// Length of the mesh along `axis`, measured as `|min| + |max|`.
    ///
    /// This is the distance from the origin to each face added together,
    /// which equals `max - min` only when the box straddles the origin. Tiling
    /// assets are expected to be modeled around their origin (centered, or
    /// starting at it); an asset floating away from the origin counts the gap
    /// between the origin and its near face twice.
    pub fn extent(&self, axis: MeshAxis) -> f32 {
        axis.component(self.min).abs() + axis.component(self.max).abs()
    }
}

/// Extent of an optional mesh along `axis`; an absent mesh has zero extent.
pub fn mesh_extent(bounds: Option<&MeshBounds>, axis: MeshAxis) -> f32 {
    bounds.map_or(0.0, |b| b.extent(axis))
}

fn nonzero_extent(bounds: Option<&MeshBounds>, axis: MeshAxis) -> Result<f32, PlacementError> {
    let extent = mesh_extent(bounds, axis);
    if extent > 0.0 && extent.is_finite() {
        Ok(extent)
    } else {
        Err(PlacementError::DegenerateMesh(axis))
    }
}

/// Arc-length distance between two anchors of a curve.
pub fn distance_between_points(
    curve: &impl Curve,
    point_a: usize,
    point_b: usize,
) -> Result<f32, PlacementError> {
    let a = curve
        .distance_at_point(point_a)
        .ok_or(PlacementError::UnknownAnchor(point_a))?;
    let b = curve
        .distance_at_point(point_b)
        .ok_or(PlacementError::UnknownAnchor(point_b))?;
    Ok((a - b).abs())
}

/// How many whole meshes fit along the full curve.
pub fn count_along_curve(
    curve: &impl Curve,
    bounds: Option<&MeshBounds>,
    axis: MeshAxis,
) -> Result<usize, PlacementError> {
    let extent = nonzero_extent(bounds, axis)?;
    Ok((curve.length() / extent).floor() as usize)
}

/// How many whole meshes fit between two anchors of the curve.
pub fn count_between_points(
    curve: &impl Curve,
    bounds: Option<&MeshBounds>,
    axis: MeshAxis,
    point_a: usize,
    point_b: usize,
) -> Result<usize, PlacementError> {
    let extent = nonzero_extent(bounds, axis)?;
    let distance = distance_between_points(curve, point_a, point_b)?;
    Ok((distance / extent).floor() as usize)
}
