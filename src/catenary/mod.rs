//! Catenary wires hanging between anchor points.
//!
//! The core is a pair of pure functions, [`sample_catenary_newton`] and
//! [`sample_catenary_fixed`], that fit a hanging cable of a given slack between
//! two points and sample it at a fixed resolution. [`CatenaryPlugin`] keeps a
//! [`WireCurve`] up to date for every [`CatenaryWire`] entity.
//!
//! # Example
//!
//! ```ignore
//! use bevy::prelude::*;
//! use bevy_spline_wires::prelude::*;
//!
//! fn setup(mut commands: Commands) {
//!     let pole_a = commands.spawn(Transform::from_xyz(0.0, 800.0, 0.0)).id();
//!     let pole_b = commands.spawn(Transform::from_xyz(2500.0, 820.0, 0.0)).id();
//!
//!     commands.spawn(
//!         CatenaryWire::new(vec![pole_a, pole_b])
//!             .with_settings(CatenarySettings::default().with_slack(150.0)),
//!     );
//! }
//! ```

mod chain;
mod components;
mod sampler;
mod solver;
mod systems;

pub use chain::*;
pub use components::*;
pub use sampler::*;
pub use solver::*;
pub use systems::update_catenary_wires;

use bevy::prelude::*;
use bevy::transform::TransformSystems;

/// Plugin that samples [`CatenaryWire`] entities into [`WireCurve`] points.
///
/// Wires are resampled when the component changes or one of its anchors moves.
/// Insert a seeded [`CatenaryRng`] for reproducible slack variation.
pub struct CatenaryPlugin;

impl Plugin for CatenaryPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CatenaryWire>()
            .register_type::<CatenarySettings>()
            .register_type::<CatenarySolver>()
            .init_resource::<CatenaryRng>()
            // Anchor positions are read after transform propagation.
            .add_systems(
                PostUpdate,
                systems::update_catenary_wires.after(TransformSystems::Propagate),
            );
    }
}
