//! Single-trajectory simulation with capture/escape termination.

use crate::attractor::AttractorSet;
use crate::config::SimulationConfig;
use crate::integrator::{IntegratorKind, ParticleState};
use crate::types::AttractorId;
use glam::DVec2;

/// Terminal outcome of one trajectory.
///
/// Step-budget exhaustion is reported as [`TrajectoryOutcome::Escaped`]:
/// a trajectory that neither escapes nor is captured within the budget is
/// treated as unresolved and rendered as background. This is a known
/// approximation; it can paint chaotic boundary regions white instead
/// of resolving them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrajectoryOutcome {
    /// The particle came within the capture radius of the attractor with
    /// this index.
    Captured(AttractorId),
    /// The particle left the system (or the step budget ran out).
    Escaped,
}

/// Returns the lowest-index attractor within `capture_radius` of `pos`,
/// if any. Index order is the deterministic tie-break when several
/// capture radii overlap.
fn captured_by(pos: DVec2, attractors: &AttractorSet, capture_radius: f64) -> Option<AttractorId> {
    attractors
        .points
        .iter()
        .position(|a| (pos - a.pos).length() < capture_radius)
}

/// Integrates one particle until capture, escape, or step exhaustion.
///
/// The initial state is checked for capture before any step is advanced,
/// so a particle released inside a capture radius terminates as
/// `Captured` immediately, independent of `dt`. After that, each of up
/// to `cfg.n_steps` iterations advances the state by one `integrator`
/// step and re-checks capture (in index order) and then escape
/// (`|pos| > cfg.escape_radius`).
///
/// Invocations are fully independent: shared inputs are read-only and
/// the particle state is local to this call.
pub fn run(
    initial: ParticleState,
    attractors: &AttractorSet,
    integrator: IntegratorKind,
    cfg: &SimulationConfig,
) -> TrajectoryOutcome {
    if let Some(id) = captured_by(initial.pos, attractors, cfg.capture_radius) {
        return TrajectoryOutcome::Captured(id);
    }

    let mut state = initial;
    for _ in 0..cfg.n_steps {
        state = integrator.step(state, attractors, cfg.dt);

        if let Some(id) = captured_by(state.pos, attractors, cfg.capture_radius) {
            return TrajectoryOutcome::Captured(id);
        }
        if state.pos.length() > cfg.escape_radius {
            return TrajectoryOutcome::Escaped;
        }
    }

    TrajectoryOutcome::Escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attractor::Attractor;
    use glam::DVec2;

    fn attractor_at(pos: DVec2) -> Attractor {
        Attractor {
            strength: 1.0,
            pos,
            color: [1.0, 1.0, 1.0],
        }
    }

    fn single_origin() -> AttractorSet {
        AttractorSet::from_attractors(vec![attractor_at(DVec2::ZERO)]).unwrap()
    }

    fn cfg() -> SimulationConfig {
        SimulationConfig {
            grid_size: 3,
            dt: 0.01,
            n_steps: 1000,
            capture_radius: 0.05,
            escape_radius: 2.0,
        }
    }

    #[test]
    fn initial_position_inside_capture_radius_is_captured_immediately() {
        let set = single_origin();
        // Inside the 0.05 capture radius from the start. With dt = 0.01
        // the first RK4 step would fling the particle out of the radius,
        // so this must be decided before stepping.
        let start = ParticleState::at_rest(DVec2::new(0.03, 0.0));

        for kind in [IntegratorKind::Rk4, IntegratorKind::SymplecticEuler] {
            assert_eq!(
                run(start, &set, kind, &cfg()),
                TrajectoryOutcome::Captured(0)
            );
        }
    }

    #[test]
    fn radial_infall_from_a_corner_is_captured() {
        // Released from rest at (-1, -1) the particle falls straight
        // through the attractor's neighborhood and is captured on the way.
        let set = single_origin();
        let start = ParticleState::at_rest(DVec2::new(-1.0, -1.0));

        for kind in [IntegratorKind::Rk4, IntegratorKind::SymplecticEuler] {
            assert_eq!(
                run(start, &set, kind, &cfg()),
                TrajectoryOutcome::Captured(0)
            );
        }
    }

    #[test]
    fn fast_outbound_particle_escapes() {
        let set = single_origin();
        // Positive specific energy (½·9 - 1/0.5 = 2.5), moving outward.
        let start = ParticleState {
            pos: DVec2::new(0.5, 0.0),
            vel: DVec2::new(3.0, 0.0),
        };

        for kind in [IntegratorKind::Rk4, IntegratorKind::SymplecticEuler] {
            assert_eq!(run(start, &set, kind, &cfg()), TrajectoryOutcome::Escaped);
        }
    }

    #[test]
    fn widening_the_escape_radius_never_turns_escape_into_capture() {
        let set = single_origin();
        let start = ParticleState {
            pos: DVec2::new(0.5, 0.0),
            vel: DVec2::new(3.0, 0.0),
        };

        let near = cfg();
        let far = SimulationConfig {
            escape_radius: 4.0,
            ..near
        };

        for kind in [IntegratorKind::Rk4, IntegratorKind::SymplecticEuler] {
            assert_eq!(run(start, &set, kind, &near), TrajectoryOutcome::Escaped);
            assert_eq!(run(start, &set, kind, &far), TrajectoryOutcome::Escaped);
        }
    }

    #[test]
    fn step_budget_exhaustion_is_reported_as_escaped() {
        // A single step is not enough for a slow particle to reach either
        // termination radius, so the budget runs out.
        let set = single_origin();
        let start = ParticleState::at_rest(DVec2::new(-1.0, -1.0));
        let short = SimulationConfig {
            n_steps: 1,
            ..cfg()
        };

        assert_eq!(
            run(start, &set, IntegratorKind::Rk4, &short),
            TrajectoryOutcome::Escaped
        );
    }

    #[test]
    fn overlapping_capture_radii_resolve_to_the_lowest_index() {
        // Two attractors straddling the start position, both within the
        // capture radius on the initial check.
        let set = AttractorSet::from_attractors(vec![
            attractor_at(DVec2::new(-0.01, 0.0)),
            attractor_at(DVec2::new(0.01, 0.0)),
        ])
        .unwrap();
        let start = ParticleState::at_rest(DVec2::ZERO);

        assert_eq!(
            run(start, &set, IntegratorKind::SymplecticEuler, &cfg()),
            TrajectoryOutcome::Captured(0)
        );
    }
}
