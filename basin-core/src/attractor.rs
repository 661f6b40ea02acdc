use crate::error::ConfigError;
use glam::DVec2;
use rand::Rng;

/// Largest supported attractor set size.
pub const MAX_ATTRACTORS: usize = 10;

/// A fixed point source of an attractive inverse-square force field,
/// matching the potential `V(r) = -strength / r`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attractor {
    /// Force-law intensity; strictly positive.
    pub strength: f64,
    /// Fixed position, expected inside the sampling domain `[-1, 1]²`
    /// (caller responsibility, not enforced here).
    pub pos: DVec2,
    /// RGB coefficients in `[0, 1]` used to color the attractor's basin.
    pub color: [f64; 3],
}

/// Ordered set of attractors, fixed for one map generation.
///
/// Order defines the attractor index reported by captured trajectories,
/// so the set is immutable once built.
#[derive(Debug, Clone)]
pub struct AttractorSet {
    pub points: Vec<Attractor>,
}

impl AttractorSet {
    /// Builds a validated set from explicit attractors.
    ///
    /// ### Errors
    /// - [`ConfigError::AttractorCount`] if `points` is empty or holds
    ///   more than [`MAX_ATTRACTORS`] entries.
    /// - [`ConfigError::NonPositiveStrength`] for any attractor whose
    ///   strength is not strictly positive.
    pub fn from_attractors(points: Vec<Attractor>) -> Result<Self, ConfigError> {
        if points.is_empty() || points.len() > MAX_ATTRACTORS {
            return Err(ConfigError::AttractorCount {
                got: points.len(),
                max: MAX_ATTRACTORS,
            });
        }
        for (index, a) in points.iter().enumerate() {
            if a.strength <= 0.0 {
                return Err(ConfigError::NonPositiveStrength {
                    index,
                    strength: a.strength,
                });
            }
        }
        Ok(Self { points })
    }

    /// Generates `count` randomized attractors inside the sampling square.
    ///
    /// Strengths are drawn from `[0.5, 2.0)`, positions from `[-1, 1)²`
    /// and color channels from `[0.2, 1.0)`, so every basin is attractive
    /// and visibly distinct from the white escape background.
    ///
    /// The random source is passed in explicitly so that a seeded RNG
    /// reproduces the same set.
    pub fn random_in_square(count: usize, rng: &mut impl Rng) -> Result<Self, ConfigError> {
        let points = (0..count)
            .map(|_| Attractor {
                strength: rng.random_range(0.5..2.0),
                pos: DVec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)),
                color: [
                    rng.random_range(0.2..1.0),
                    rng.random_range(0.2..1.0),
                    rng.random_range(0.2..1.0),
                ],
            })
            .collect();

        Self::from_attractors(points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn unit_attractor(pos: DVec2) -> Attractor {
        Attractor {
            strength: 1.0,
            pos,
            color: [1.0, 1.0, 1.0],
        }
    }

    #[test]
    fn from_attractors_accepts_a_small_valid_set() {
        let set = AttractorSet::from_attractors(vec![
            unit_attractor(DVec2::new(0.5, 0.0)),
            unit_attractor(DVec2::new(-0.5, 0.0)),
        ])
        .unwrap();

        assert_eq!(set.len(), 2);
        // Order is preserved; index identity depends on it.
        assert_eq!(set.points[0].pos, DVec2::new(0.5, 0.0));
        assert_eq!(set.points[1].pos, DVec2::new(-0.5, 0.0));
    }

    #[test]
    fn from_attractors_rejects_empty_and_oversized_sets() {
        let err = AttractorSet::from_attractors(Vec::new()).unwrap_err();
        assert_eq!(
            err,
            ConfigError::AttractorCount {
                got: 0,
                max: MAX_ATTRACTORS
            }
        );

        let too_many = vec![unit_attractor(DVec2::ZERO); MAX_ATTRACTORS + 1];
        let err = AttractorSet::from_attractors(too_many).unwrap_err();
        assert_eq!(
            err,
            ConfigError::AttractorCount {
                got: MAX_ATTRACTORS + 1,
                max: MAX_ATTRACTORS
            }
        );
    }

    #[test]
    fn from_attractors_rejects_non_positive_strength() {
        let mut bad = unit_attractor(DVec2::ZERO);
        bad.strength = -2.0;

        let err =
            AttractorSet::from_attractors(vec![unit_attractor(DVec2::new(0.1, 0.1)), bad])
                .unwrap_err();
        assert_eq!(
            err,
            ConfigError::NonPositiveStrength {
                index: 1,
                strength: -2.0
            }
        );
    }

    #[test]
    fn random_in_square_stays_inside_documented_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let set = AttractorSet::random_in_square(MAX_ATTRACTORS, &mut rng).unwrap();

        assert_eq!(set.len(), MAX_ATTRACTORS);
        for a in &set.points {
            assert!(a.strength >= 0.5 && a.strength < 2.0);
            assert!(a.pos.x >= -1.0 && a.pos.x < 1.0);
            assert!(a.pos.y >= -1.0 && a.pos.y < 1.0);
            for c in a.color {
                assert!((0.2..1.0).contains(&c));
            }
        }
    }

    #[test]
    fn random_in_square_is_reproducible_for_a_fixed_seed() {
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        let a = AttractorSet::random_in_square(4, &mut rng_a).unwrap();
        let b = AttractorSet::random_in_square(4, &mut rng_b).unwrap();

        assert_eq!(a.points, b.points);
    }
}
