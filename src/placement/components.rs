use bevy::prelude::*;

use super::{MeshAxis, TileSpan};

/// Component that places evenly spaced transforms along a spline.
///
/// The result is written to [`PlacementTransforms`] on the same entity, in the
/// spline's local space.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct SplinePlacement {
    /// The spline entity to sample.
    pub spline: Entity,
    /// Target distance between neighbours. The actual spacing is shrunk so
    /// that both ends of the spline are covered.
    pub spacing: f32,
    /// Level every rotation, keeping only its heading and roll.
    pub facing_up: bool,
}

impl Default for SplinePlacement {
    fn default() -> Self {
        Self {
            spline: Entity::PLACEHOLDER,
            spacing: 100.0,
            facing_up: false,
        }
    }
}

impl SplinePlacement {
    pub fn new(spline: Entity, spacing: f32) -> Self {
        Self {
            spline,
            spacing,
            ..default()
        }
    }

    /// Level the placed rotations.
    pub fn facing_up(mut self) -> Self {
        self.facing_up = true;
        self
    }
}

/// Transforms computed for a [`SplinePlacement`].
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct PlacementTransforms(pub Vec<Transform>);

/// How long each tile of a [`SplineTiling`] is.
#[derive(Debug, Clone, PartialEq, Reflect)]
pub enum TileLength {
    /// A fixed length in world units.
    Fixed(f32),
    /// The extent of a mesh along one of its axes.
    Mesh { mesh: Handle<Mesh>, axis: MeshAxis },
}

impl Default for TileLength {
    fn default() -> Self {
        Self::Fixed(100.0)
    }
}

/// Component that cuts a spline into as many whole tiles as fit along it.
///
/// The result is written to [`TileSpans`] on the same entity.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct SplineTiling {
    pub spline: Entity,
    pub tile_length: TileLength,
    /// Distance along the spline where the first tile starts.
    pub start_offset: f32,
}

impl Default for SplineTiling {
    fn default() -> Self {
        Self {
            spline: Entity::PLACEHOLDER,
            tile_length: TileLength::default(),
            start_offset: 0.0,
        }
    }
}

impl SplineTiling {
    pub fn new(spline: Entity, tile_length: TileLength) -> Self {
        Self {
            spline,
            tile_length,
            ..default()
        }
    }

    /// Set the distance of the first tile from the spline start.
    pub fn with_start_offset(mut self, start_offset: f32) -> Self {
        self.start_offset = start_offset;
        self
    }
}

/// Tile spans computed for a [`SplineTiling`].
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct TileSpans(pub Vec<TileSpan>);
