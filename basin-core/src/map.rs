//! Basin map generation over the pixel grid.
//!
//! Every pixel of a `grid_size × grid_size` image corresponds to a
//! release position in the sampling domain `[-1, 1]²`; its trajectory's
//! outcome picks the pixel color. Pixels are fully independent, so rows
//! are computed in parallel over disjoint slices of the output buffer.

use crate::attractor::AttractorSet;
use crate::config::{DOMAIN_HALF_WIDTH, SimulationConfig};
use crate::error::ConfigError;
use crate::integrator::{IntegratorKind, ParticleState};
use crate::trajectory::{self, TrajectoryOutcome};
use glam::DVec2;
use rayon::prelude::*;

/// Color written for escaped (or unresolved) trajectories.
pub const ESCAPE_COLOR: [u8; 3] = [255, 255, 255];

/// Maps pixel coordinates to the release position in the sampling domain.
///
/// Column `j` spans `x ∈ [-1, 1]`, row `i` spans `y ∈ [-1, 1]`, with the
/// top-left pixel at `(-1, -1)`.
fn domain_coords(i: usize, j: usize, grid_size: usize) -> DVec2 {
    let span = 2.0 * DOMAIN_HALF_WIDTH;
    let x = -DOMAIN_HALF_WIDTH + span * j as f64 / (grid_size - 1) as f64;
    let y = -DOMAIN_HALF_WIDTH + span * i as f64 / (grid_size - 1) as f64;
    DVec2::new(x, y)
}

fn outcome_color(outcome: TrajectoryOutcome, attractors: &AttractorSet) -> [u8; 3] {
    match outcome {
        TrajectoryOutcome::Captured(id) => {
            let c = attractors.points[id].color;
            [
                (255.0 * c[0]) as u8,
                (255.0 * c[1]) as u8,
                (255.0 * c[2]) as u8,
            ]
        }
        TrajectoryOutcome::Escaped => ESCAPE_COLOR,
    }
}

/// Generates the basin map as a row-major RGB byte buffer of length
/// `3 * grid_size²`, top row first.
///
/// The configuration is validated before any pixel is computed. The
/// result is deterministic: repeated calls with the same inputs produce
/// byte-identical buffers regardless of how rows are scheduled.
pub fn generate(
    attractors: &AttractorSet,
    integrator: IntegratorKind,
    cfg: &SimulationConfig,
) -> Result<Vec<u8>, ConfigError> {
    generate_with_progress(attractors, integrator, cfg, |_| {})
}

/// Like [`generate`], invoking `on_row` with the row index each time a
/// row of pixels is finished. The hook may be called from worker threads
/// and in any row order.
pub fn generate_with_progress(
    attractors: &AttractorSet,
    integrator: IntegratorKind,
    cfg: &SimulationConfig,
    on_row: impl Fn(usize) + Sync,
) -> Result<Vec<u8>, ConfigError> {
    cfg.validate()?;

    let grid = cfg.grid_size;
    let mut pixels = vec![0u8; 3 * grid * grid];

    pixels
        .par_chunks_mut(3 * grid)
        .enumerate()
        .for_each(|(i, row)| {
            for j in 0..grid {
                let start = ParticleState::at_rest(domain_coords(i, j, grid));
                let outcome = trajectory::run(start, attractors, integrator, cfg);
                row[3 * j..3 * j + 3].copy_from_slice(&outcome_color(outcome, attractors));
            }
            on_row(i);
        });

    Ok(pixels)
}
