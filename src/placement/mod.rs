//! Placing objects and tiles along curves.
//!
//! The functions here work on any [`Curve`](crate::spline::Curve):
//!
//! - [`transforms_along_curve`] spreads transforms evenly from start to end.
//! - [`count_along_curve`] and [`count_between_points`] count how many copies
//!   of a mesh fit, using [`MeshBounds::extent`].
//! - [`tile_span`] gives the start and end of one tile for mesh deformation.
//!
//! [`SplinePlacementPlugin`] drives them from components.
//!
//! # Usage
//!
//! ```ignore
//! use bevy::prelude::*;
//! use bevy_spline_wires::prelude::*;
//!
//! fn setup(mut commands: Commands, asset_server: Res<AssetServer>) {
//!     let spline = commands.spawn(Spline::new(
//!         SplineType::CatmullRom,
//!         vec![/* points */],
//!     )).id();
//!
//!     // Fence posts every 250 units, kept upright on slopes.
//!     commands.spawn(SplinePlacement::new(spline, 250.0).facing_up());
//!
//!     // Rail segments as long as the rail mesh.
//!     commands.spawn(SplineTiling::new(
//!         spline,
//!         TileLength::Mesh { mesh: asset_server.load("rail.glb#Mesh0"), axis: MeshAxis::X },
//!     ));
//! }
//! ```

mod components;
mod extent;
mod systems;
mod tiling;
mod transforms;

pub use components::*;
pub use extent::*;
pub use systems::{update_spline_placements, update_spline_tilings};
pub use tiling::*;
pub use transforms::*;

use bevy::prelude::*;

use crate::spline::SplinePlugin;

/// Plugin that keeps [`PlacementTransforms`] and [`TileSpans`] in sync with
/// their splines.
pub struct SplinePlacementPlugin;

impl Plugin for SplinePlacementPlugin {
    fn build(&self, app: &mut App) {
        // Ensure SplinePlugin is added
        if !app.is_plugin_added::<SplinePlugin>() {
            app.add_plugins(SplinePlugin);
        }

        app.register_type::<SplinePlacement>()
            .register_type::<SplineTiling>()
            .register_type::<TileLength>()
            .register_type::<MeshAxis>()
            // Present without the asset plugin too, so tilings can read it.
            .add_message::<AssetEvent<Mesh>>()
            .add_systems(
                Update,
                (systems::update_spline_placements, systems::update_spline_tilings),
            );
    }
}
