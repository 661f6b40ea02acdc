//! Command-line front end for the basin map generator.
//!
//! Builds a (seedable) randomized attractor set, renders one basin map
//! per requested integrator from that same set, and writes each map as a
//! binary PPM (optionally also PNG) file.

mod sink;

use anyhow::{Context, Result};
use argh::FromArgs;
use basin_core::attractor::{AttractorSet, MAX_ATTRACTORS};
use basin_core::config::SimulationConfig;
use basin_core::integrator::IntegratorKind;
use basin_core::map;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Render basin-of-attraction maps for a set of inverse-square attractors.
#[derive(FromArgs)]
struct Args {
    /// image width and height in pixels (default 500)
    #[argh(option, default = "500")]
    grid_size: usize,

    /// integration time step (default 0.004)
    #[argh(option, default = "0.004")]
    dt: f64,

    /// maximum integration steps per pixel (default 5000)
    #[argh(option, default = "5000")]
    n_steps: usize,

    /// capture radius around each attractor (default 0.03)
    #[argh(option, default = "0.03")]
    capture_radius: f64,

    /// escape radius around the origin (default 2.0)
    #[argh(option, default = "2.0")]
    escape_radius: f64,

    /// number of attractors, at most 10; drawn from 2..=10 when omitted
    #[argh(option)]
    attractors: Option<usize>,

    /// RNG seed; a fixed seed reproduces the same attractor set
    #[argh(option)]
    seed: Option<u64>,

    /// integrator to render ("rk4" or "symplectic"); both when omitted
    #[argh(option)]
    integrator: Option<String>,

    /// directory the images are written into (default ".")
    #[argh(option, default = "String::from(\".\")")]
    out_dir: String,

    /// additionally write PNG versions of the maps
    #[argh(switch)]
    png: bool,
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();
    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<bool> {
    // All configuration problems are fatal before any pixel is computed.
    let kinds = match &args.integrator {
        Some(name) => vec![name.parse::<IntegratorKind>()?],
        None => vec![IntegratorKind::Rk4, IntegratorKind::SymplecticEuler],
    };
    let cfg = SimulationConfig {
        grid_size: args.grid_size,
        dt: args.dt,
        n_steps: args.n_steps,
        capture_radius: args.capture_radius,
        escape_radius: args.escape_radius,
    };
    cfg.validate()?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let count = args
        .attractors
        .unwrap_or_else(|| rng.random_range(2..=MAX_ATTRACTORS));
    let attractors = AttractorSet::random_in_square(count, &mut rng)?;

    println!(
        "{count} attractors, {g}x{g} grid, {steps} steps at dt {dt}",
        g = cfg.grid_size,
        steps = cfg.n_steps,
        dt = cfg.dt,
    );

    let out_dir = PathBuf::from(&args.out_dir);
    let mut all_written = true;
    for kind in kinds {
        let pixels = render(&attractors, kind, &cfg)?;

        // A failed write only loses this output; the remaining maps are
        // independent artifacts and still get written.
        if let Err(err) = write_outputs(&out_dir, kind, cfg.grid_size, &pixels, args.png) {
            eprintln!("error: {err:#}");
            all_written = false;
        }
    }
    Ok(all_written)
}

fn render(
    attractors: &AttractorSet,
    kind: IntegratorKind,
    cfg: &SimulationConfig,
) -> Result<Vec<u8>> {
    let pbar = ProgressBar::new(cfg.grid_size as u64);
    pbar.set_style(ProgressStyle::with_template(
        "[{elapsed_precise}/{eta_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}",
    )?);
    pbar.set_message(kind.name());

    let pixels = map::generate_with_progress(attractors, kind, cfg, |_| pbar.inc(1))?;
    pbar.finish();
    Ok(pixels)
}

fn write_outputs(
    dir: &Path,
    kind: IntegratorKind,
    grid_size: usize,
    pixels: &[u8],
    png: bool,
) -> Result<()> {
    let ppm_path = dir.join(format!("basin_{kind}.ppm"));
    sink::write_ppm(&ppm_path, grid_size, pixels)
        .with_context(|| format!("writing {}", ppm_path.display()))?;
    println!("wrote {}", ppm_path.display());

    if png {
        let png_path = dir.join(format!("basin_{kind}.png"));
        sink::write_png(&png_path, grid_size, pixels)
            .with_context(|| format!("writing {}", png_path.display()))?;
        println!("wrote {}", png_path.display());
    }
    Ok(())
}
