mod arc_length;
mod components;
mod curve;
mod polyline;
mod types;

pub use arc_length::*;
pub use components::*;
pub use curve::*;
pub use polyline::*;
pub use types::*;

use bevy::prelude::{App, Plugin};

/// Plugin that registers spline types for reflection/serialization.
pub struct SplinePlugin;

impl Plugin for SplinePlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SplineType>()
            .register_type::<Spline>();
    }
}
