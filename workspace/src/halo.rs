use std::{ fs, io::Write, path::PathBuf };
use anyhow::{ Context, Result };
use ndarray as nd;
use num_complex::Complex64 as C64;
use snewton::{ diag, grid, timedep, units, utils };

// evolve the fiducial BEC dark-matter halo and dump the r99 series plus the
// initial/final density profiles for plotting

const HALO_WIDTH: f64 = 20.0 * units::kpc; // m
const HALO_MASS: f64 = 1e12 * units::Msun; // kg
const N: usize = 300;
const DR: f64 = 1e20; // m
const STEPS: usize = 100;
const DT: f64 = 2.0; // s

fn main() -> Result<()> {
    let params = grid::PhysicalParameters::from_halo(HALO_WIDTH, HALO_MASS)?;
    let gridspec = grid::GridSpec::new(N, DR, STEPS, DT)?;
    let q0 = utils::gaussian_profile(&gridspec, params.halo_width);

    println!("halo: a = {:.3} kpc, M = {:.3e} Msun",
        units::to_kpc(params.halo_width), units::to_msun(params.mass));
    println!("grid: N = {}, dr = {:.3e} m, {} steps of {} s", N, DR, STEPS, DT);
    println!("initial norm: {:.6}", utils::wf_norm(&q0, gridspec.dr));
    let edge = utils::boundary_amplitude(&q0);
    if edge > 1e-12 {
        println!("warning: outer-boundary amplitude {edge:.3e} is not \
            negligible; the domain truncates the halo");
    }

    let hist = timedep::evolve(&params, &gridspec, &q0)
        .context("time evolution failed")?;
    let series = diag::enclosed_radius_series(&hist, gridspec.dr, diag::R99);

    let outdir = PathBuf::from("output");
    fs::create_dir_all(&outdir)?;

    let mut r99 = fs::File::create(outdir.join("r99.csv"))?;
    writeln!(r99, "step,radius_m,fraction,saturated")?;
    for (t, er) in series.iter().enumerate() {
        writeln!(r99, "{},{:.6e},{:.8},{}",
            t, er.radius, er.fraction, er.saturated)?;
        if er.saturated {
            println!("warning: step {t} never reached the {} threshold \
                (fraction {:.6}); the domain is too small", diag::R99,
                er.fraction);
        }
    }

    let mut prof = fs::File::create(outdir.join("density.csv"))?;
    writeln!(prof, "radius_m,initial,final")?;
    let qi = hist.slice(nd::s![0, ..]);
    let qf = hist.slice(nd::s![STEPS, ..]);
    for (j, (q0j, qnj)) in qi.iter().zip(qf.iter()).enumerate() {
        writeln!(prof, "{:.6e},{:.6e},{:.6e}",
            gridspec.radius(j), density(j, q0j, &gridspec),
            density(j, qnj, &gridspec))?;
    }

    println!("r99(0)   = {:.3} kpc", units::to_kpc(series[0].radius));
    println!("r99(end) = {:.3} kpc",
        units::to_kpc(series[series.len() - 1].radius));
    Ok(())
}

// discrete radial probability density 4π r² |ψ|² at grid index j
fn density(j: usize, qj: &C64, gridspec: &grid::GridSpec) -> f64 {
    4.0 * std::f64::consts::PI * gridspec.radius(j).powi(2) * qj.norm_sqr()
}
