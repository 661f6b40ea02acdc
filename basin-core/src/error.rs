use thiserror::Error;

/// Errors raised while validating a run's configuration.
///
/// All of these are fatal and reported before any pixel is computed;
/// the numerical core itself raises no errors in ordinary operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The integrator identifier did not match any known variant.
    /// There is deliberately no silent fallback.
    #[error("unknown integrator `{0}` (expected \"rk4\" or \"symplectic\")")]
    UnknownIntegrator(String),

    /// Attractor set size outside the supported `1..=max` range.
    #[error("attractor count must be between 1 and {max}, got {got}")]
    AttractorCount { got: usize, max: usize },

    /// Attractor strength must be strictly positive; repulsive or inert
    /// attractors are out of scope.
    #[error("attractor {index} has non-positive strength {strength}")]
    NonPositiveStrength { index: usize, strength: f64 },

    /// The sampling step `2 / (grid_size - 1)` needs at least two samples.
    #[error("grid_size must be at least 2, got {0}")]
    GridTooSmall(usize),

    #[error("dt must be positive, got {0}")]
    NonPositiveDt(f64),

    #[error("n_steps must be positive")]
    ZeroSteps,

    #[error("capture_radius must be positive, got {0}")]
    NonPositiveCaptureRadius(f64),

    /// The escape radius has to clear the sampling domain half-width so
    /// that no released particle is flagged escaped before it moves.
    #[error("escape_radius must exceed the sampling half-width {half_width}, got {got}")]
    EscapeRadiusTooSmall { got: f64, half_width: f64 },
}
