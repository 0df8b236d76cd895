//! # bevy_spline_wires
//!
//! Catenary wires and curve-following placement for Bevy.
//!
//! ## Features
//!
//! - Hanging cables between anchors, solved with Newton's method or a fixed
//!   probing search
//! - Wire chains through many anchors, solved in parallel on the compute pool
//! - Evenly spaced transforms along any curve, optionally kept level
//! - Mesh-length tiling with start and end tangents for deformation
//! - Multiple spline types: Cubic Bézier, Catmull-Rom, B-Spline
//!
//! ## Quick Start
//!
//! ```ignore
//! use bevy::prelude::*;
//! use bevy_spline_wires::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(CatenaryPlugin)
//!         .add_plugins(SplinePlacementPlugin)
//!         .add_systems(Startup, setup)
//!         .run();
//! }
//!
//! fn setup(mut commands: Commands) {
//!     let a = commands.spawn(Transform::from_xyz(0.0, 800.0, 0.0)).id();
//!     let b = commands.spawn(Transform::from_xyz(2000.0, 800.0, 0.0)).id();
//!     commands.spawn(CatenaryWire::new(vec![a, b]));
//! }
//! ```
//!
//! The pure functions ([`sample_catenary_newton`](catenary::sample_catenary_newton),
//! [`transforms_along_curve`](placement::transforms_along_curve),
//! [`tile_span`](placement::tile_span), ...) work without an `App`.
//!
//! ## Plugins
//!
//! - [`SplinePlugin`]: Spline type registration
//! - [`CatenaryPlugin`]: Keeps [`WireCurve`](catenary::WireCurve) points in sync with anchors
//! - [`SplinePlacementPlugin`]: Placement transforms and tile spans along splines

pub mod catenary;
pub mod error;
pub mod geometry;
pub mod math;
pub mod placement;
pub mod spline;

pub use catenary::CatenaryPlugin;
pub use error::{CatenaryError, PlacementError};
pub use placement::SplinePlacementPlugin;
pub use spline::SplinePlugin;

/// Convenient re-exports of commonly used types.
pub mod prelude {
    pub use crate::catenary::{
        sample_catenary, sample_catenary_fixed, sample_catenary_newton, sample_wire_chain,
        update_catenary_wires, CatenaryCurve, CatenaryParams, CatenaryPlugin, CatenaryRng,
        CatenarySettings, CatenarySolver, CatenaryWire, WireCurve,
    };
    pub use crate::error::{CatenaryError, PlacementError};
    pub use crate::placement::{
        count_along_curve, count_between_points, tile_span, transforms_along_curve, MeshAxis,
        MeshBounds, PlacementTransforms, SplinePlacement, SplinePlacementPlugin, SplineTiling,
        TileLength, TileSpan, TileSpans,
    };
    pub use crate::spline::{
        Curve, Polyline, Spline, SplineCurve, SplineEvaluator, SplinePlugin, SplineType,
    };
}
