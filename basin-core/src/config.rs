use crate::error::ConfigError;

/// Half-width of the square sampling domain `[-1, 1]²` that pixel
/// coordinates are mapped into.
pub const DOMAIN_HALF_WIDTH: f64 = 1.0;

/// Immutable per-run simulation parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Output image is `grid_size × grid_size` pixels; must be at least 2.
    pub grid_size: usize,
    /// Fixed integration time step; strictly positive.
    pub dt: f64,
    /// Maximum number of integration steps per trajectory.
    pub n_steps: usize,
    /// A trajectory ending within this distance of an attractor is captured.
    pub capture_radius: f64,
    /// A trajectory farther than this from the origin has escaped. Must
    /// exceed [`DOMAIN_HALF_WIDTH`] so freshly released particles are
    /// never flagged escaped.
    pub escape_radius: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_size: 500,
            dt: 0.004,
            n_steps: 5000,
            capture_radius: 0.03,
            escape_radius: 2.0,
        }
    }
}

impl SimulationConfig {
    /// Checks the data-model invariants, returning the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 2 {
            return Err(ConfigError::GridTooSmall(self.grid_size));
        }
        if self.dt <= 0.0 {
            return Err(ConfigError::NonPositiveDt(self.dt));
        }
        if self.n_steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        if self.capture_radius <= 0.0 {
            return Err(ConfigError::NonPositiveCaptureRadius(self.capture_radius));
        }
        if self.escape_radius <= DOMAIN_HALF_WIDTH {
            return Err(ConfigError::EscapeRadiusTooSmall {
                got: self.escape_radius,
                half_width: DOMAIN_HALF_WIDTH,
            });
        }
        Ok(())
    }
}
