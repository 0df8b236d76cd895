use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::sampler::CatenaryParams;
use super::solver::CatenarySolver;

/// Shape settings for a catenary wire.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Default)]
pub struct CatenarySettings {
    /// Extra wire length beyond the straight distance between anchors.
    pub slack: f32,
    /// Random extra slack per span in `[0, slack_variation)`.
    /// Ignored by [`CatenarySolver::Fixed`].
    pub slack_variation: f32,
    /// Number of points sampled per span.
    pub resolution: u16,
    /// Root finder for the shape parameter.
    pub solver: CatenarySolver,
}

impl Default for CatenarySettings {
    fn default() -> Self {
        Self {
            slack: 100.0,
            slack_variation: 2.0,
            resolution: 10,
            solver: CatenarySolver::Newton,
        }
    }
}

impl CatenarySettings {
    /// Set the slack.
    pub fn with_slack(mut self, slack: f32) -> Self {
        self.slack = slack;
        self
    }

    /// Set the slack variation.
    pub fn with_slack_variation(mut self, slack_variation: f32) -> Self {
        self.slack_variation = slack_variation;
        self
    }

    /// Set the number of points per span.
    pub fn with_resolution(mut self, resolution: u16) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set the solver.
    pub fn with_solver(mut self, solver: CatenarySolver) -> Self {
        self.solver = solver;
        self
    }

    /// Per-span sampling parameters for these settings.
    pub fn params(&self) -> CatenaryParams {
        CatenaryParams {
            slack: self.slack,
            slack_variation: self.slack_variation,
            steps: usize::from(self.resolution),
        }
    }
}

/// Component describing a wire strung between anchor entities.
///
/// The anchors' world positions (from `GlobalTransform`) are connected in
/// order. The sampled curve is written to [`WireCurve`] on the same entity.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct CatenaryWire {
    /// Entities whose positions the wire passes through.
    pub anchors: Vec<Entity>,
    /// Connect the last anchor back to the first.
    pub closed: bool,
    pub settings: CatenarySettings,
}

impl CatenaryWire {
    /// Create an open wire through the given anchors.
    pub fn new(anchors: Vec<Entity>) -> Self {
        Self {
            anchors,
            closed: false,
            settings: CatenarySettings::default(),
        }
    }

    /// Close the wire into a loop.
    pub fn closed(mut self) -> Self {
        self.closed = true;
        self
    }

    /// Set the shape settings.
    pub fn with_settings(mut self, settings: CatenarySettings) -> Self {
        self.settings = settings;
        self
    }
}

/// Sampled world-space points of a [`CatenaryWire`].
///
/// Empty when the wire could not be sampled.
#[derive(Component, Debug, Clone, Default)]
pub struct WireCurve {
    pub points: Vec<Vec3>,
}

/// Random source for slack variation.
///
/// Seed it to make generated wires reproducible.
#[derive(Resource)]
pub struct CatenaryRng(pub StdRng);

impl CatenaryRng {
    /// A generator with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for CatenaryRng {
    fn default() -> Self {
        Self(StdRng::from_os_rng())
    }
}
