use crate::attractor::AttractorSet;
use glam::DVec2;

/// Displacements shorter than this are treated as coincident with an
/// attractor; the attractor is skipped instead of dividing by zero.
pub const MIN_DISTANCE: f64 = 1e-9;

/// Net force on a unit-mass particle at `pos` from every attractor.
///
/// Each attractor contributes `-strength / r³ * (pos - attractor.pos)`,
/// an inverse-square pull toward the attractor matching the potential
/// `V(r) = -strength / r`. Attractors closer than [`MIN_DISTANCE`] are
/// silently skipped.
///
/// Pure function; `O(set.len())` per call.
pub fn force_on_particle(pos: DVec2, attractors: &AttractorSet) -> DVec2 {
    let mut f = DVec2::ZERO;
    for a in &attractors.points {
        let r_vec = pos - a.pos;
        let r = r_vec.length();
        if r < MIN_DISTANCE {
            continue;
        }
        f += r_vec * (-a.strength / (r * r * r));
    }
    f
}
