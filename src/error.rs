use thiserror::Error;

/// Errors raised while solving or sampling a catenary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatenaryError {
    /// `sinh(z)/z` is at least 1, so no shape parameter reaches this ratio.
    #[error("target ratio {0} has no catenary solution (must be finite and > 1)")]
    InvalidRatio(f32),

    #[error("a catenary needs at least 2 steps, got {0}")]
    TooFewSteps(usize),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(&'static str),
}

/// Errors raised by placement queries along a curve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    #[error("spacing {0} must be finite and > 0")]
    InvalidSpacing(f32),

    #[error("tile length {0} must be finite and > 0")]
    InvalidTileLength(f32),

    /// The mesh has zero extent on the requested axis.
    #[error("mesh has zero extent on the {0:?} axis")]
    DegenerateMesh(crate::placement::MeshAxis),

    #[error("curve has no anchor point {0}")]
    UnknownAnchor(usize),
}
