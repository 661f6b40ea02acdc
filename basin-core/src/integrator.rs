//! Fixed-step integrators for the particle's equations of motion.
//!
//! Both integrators advance the coupled first-order system
//! `dpos/dt = vel`, `dvel/dt = force(pos)` by one time step. They are
//! deterministic and share no state, so a single [`IntegratorKind`] value
//! can drive any number of independent trajectories.

use crate::attractor::AttractorSet;
use crate::error::ConfigError;
use crate::force::{MIN_DISTANCE, force_on_particle};
use glam::DVec2;
use std::fmt;
use std::str::FromStr;

/// Position and velocity of a single particle.
///
/// Mutated step-by-step inside one trajectory only; never shared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleState {
    pub pos: DVec2,
    pub vel: DVec2,
}

impl ParticleState {
    /// A particle released from rest at `pos`.
    pub fn at_rest(pos: DVec2) -> Self {
        Self {
            pos,
            vel: DVec2::ZERO,
        }
    }

    /// Specific energy `½|vel|² - Σ strength/r` of the particle in the
    /// given field. Attractors closer than the force floor are skipped,
    /// consistent with [`force_on_particle`].
    pub fn specific_energy(&self, attractors: &AttractorSet) -> f64 {
        let kinetic = 0.5 * self.vel.length_squared();
        let mut potential = 0.0;
        for a in &attractors.points {
            let r = (self.pos - a.pos).length();
            if r < MIN_DISTANCE {
                continue;
            }
            potential -= a.strength / r;
        }
        kinetic + potential
    }
}

/// Closed set of available integration schemes.
///
/// Selected once per map generation from its symbolic name; an
/// unrecognized name is a configuration error, never a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegratorKind {
    /// Classic 4th-order Runge-Kutta: four force evaluations per step,
    /// high per-step accuracy, no energy conservation by construction.
    Rk4,
    /// Kick-drift-kick leapfrog: two force evaluations per step, bounded
    /// energy error over long horizons even with larger steps.
    SymplecticEuler,
}

impl IntegratorKind {
    /// Symbolic identifier, also used in output file names.
    pub fn name(self) -> &'static str {
        match self {
            IntegratorKind::Rk4 => "rk4",
            IntegratorKind::SymplecticEuler => "symplectic",
        }
    }

    /// Advances `state` by one step of length `dt` under the force field
    /// of `attractors`.
    pub fn step(self, state: ParticleState, attractors: &AttractorSet, dt: f64) -> ParticleState {
        match self {
            IntegratorKind::Rk4 => step_rk4(state, attractors, dt),
            IntegratorKind::SymplecticEuler => step_symplectic(state, attractors, dt),
        }
    }
}

impl fmt::Display for IntegratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IntegratorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rk4" => Ok(IntegratorKind::Rk4),
            "symplectic" => Ok(IntegratorKind::SymplecticEuler),
            other => Err(ConfigError::UnknownIntegrator(other.to_owned())),
        }
    }
}

fn step_rk4(state: ParticleState, attractors: &AttractorSet, dt: f64) -> ParticleState {
    let ParticleState { pos, vel } = state;

    let a1 = force_on_particle(pos, attractors);
    let k1v = a1 * dt;
    let k1p = vel * dt;

    let a2 = force_on_particle(pos + k1p * 0.5, attractors);
    let k2v = a2 * dt;
    let k2p = (vel + k1v * 0.5) * dt;

    let a3 = force_on_particle(pos + k2p * 0.5, attractors);
    let k3v = a3 * dt;
    let k3p = (vel + k2v * 0.5) * dt;

    let a4 = force_on_particle(pos + k3p, attractors);
    let k4v = a4 * dt;
    let k4p = (vel + k3v) * dt;

    ParticleState {
        vel: vel + (k1v + k2v * 2.0 + k3v * 2.0 + k4v) * (1.0 / 6.0),
        pos: pos + (k1p + k2p * 2.0 + k3p * 2.0 + k4p) * (1.0 / 6.0),
    }
}

fn step_symplectic(state: ParticleState, attractors: &AttractorSet, dt: f64) -> ParticleState {
    let ParticleState { pos, vel } = state;

    // Half kick, full drift, half kick.
    let vel = vel + force_on_particle(pos, attractors) * (0.5 * dt);
    let pos = pos + vel * dt;
    let vel = vel + force_on_particle(pos, attractors) * (0.5 * dt);

    ParticleState { pos, vel }
}
