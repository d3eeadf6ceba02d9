use ndarray as nd;
use num_complex::Complex64 as C64;
use snewton::{
    diag,
    grid::{ GridSpec, PhysicalParameters },
    potential,
    timedep,
    tridiag,
    units,
    utils,
};

// the coarse fiducial halo configuration: 300 points at δr = 10²⁰ m,
// δt = 2 s, Gaussian of half-width a = 20 kpc
fn fiducial(steps: usize)
    -> (PhysicalParameters, GridSpec, nd::Array1<C64>)
{
    let params
        = PhysicalParameters::from_halo(20.0 * units::kpc, 1e12 * units::Msun)
        .unwrap();
    let grid = GridSpec::new(300, 1e20, steps, 2.0).unwrap();
    let q0 = utils::gaussian_profile(&grid, params.halo_width);
    (params, grid, q0)
}

#[test]
fn outer_amplitude_underflows_on_the_fiducial_grid() {
    let (params, grid, q0) = fiducial(1);
    let hist = timedep::evolve(&params, &grid, &q0).unwrap();
    // at r = 299 δr the Gaussian argument is far below the f64 underflow
    // threshold; the amplitude is the literal 0.0, which is precisely the
    // validity precondition for the outer boundary row
    assert_eq!(hist[(0, 299)], C64::from(0.0));
    assert_eq!(utils::boundary_amplitude(&q0), 0.0);
}

#[test]
fn r99_of_the_initial_snapshot_is_exact() {
    let (_, grid, q0) = fiducial(0);
    let er = diag::enclosed_radius(&q0, grid.dr, diag::R99);
    assert!(!er.saturated);
    assert!(er.fraction > diag::R99);
    // first index whose cumulative probability exceeds 0.99 is J* = 15
    assert_eq!(er.radius, 1.5e21);
}

#[test]
fn r99_is_constant_across_steps_on_the_coarse_grid() {
    // expected behavior of this exact coarse configuration, not a regression:
    // δr is too coarse to resolve any drift of the enclosing radius
    let (params, grid, q0) = fiducial(10);
    let hist = timedep::evolve(&params, &grid, &q0).unwrap();
    let series = diag::enclosed_radius_series(&hist, grid.dr, diag::R99);
    assert_eq!(series.len(), 11);
    for er in series.iter() {
        assert_eq!(er.radius, series[0].radius);
        assert!(!er.saturated);
    }
}

#[test]
fn probability_is_approximately_conserved() {
    let (params, grid, q0) = fiducial(5);
    let hist = timedep::evolve(&params, &grid, &q0).unwrap();
    let norm0 = utils::wf_norm(&hist.slice(nd::s![0, ..]), grid.dr);
    for qt in hist.axis_iter(nd::Axis(0)) {
        let norm = utils::wf_norm(&qt, grid.dr);
        assert!(
            (norm - norm0).abs() < 1e-3 * norm0,
            "norm drifted from {norm0} to {norm}",
        );
    }
}

#[test]
fn evolution_is_bit_reproducible() {
    let (params, grid, q0) = fiducial(4);
    let hist_a = timedep::evolve(&params, &grid, &q0).unwrap();
    let hist_b = timedep::evolve(&params, &grid, &q0).unwrap();
    assert_eq!(hist_a, hist_b);
}

#[test]
fn solved_auxiliary_vector_satisfies_the_tridiagonal_equations() {
    let (params, grid, q0) = fiducial(0);
    let v = potential::evaluate(&q0, params.omega2, grid.dr);
    let sys = tridiag::build(&v, &grid, &params);
    let x = tridiag::solve(&sys, &q0).unwrap();

    let n = grid.n;
    let scale: f64
        = q0.iter().map(|qk| qk.norm()).fold(0.0, f64::max);
    for i in 0..n {
        let mut lhs = sys.diag[i] * x[i];
        if i > 0 { lhs += sys.sub[i] * x[i - 1]; }
        if i < n - 1 { lhs += sys.sup[i] * x[i + 1]; }
        assert!(
            (lhs - q0[i]).norm() < 1e-8 * scale,
            "row {i} residual exceeds tolerance",
        );
    }
}

#[test]
fn potential_vector_is_finite_and_monotonic_for_the_fiducial_halo() {
    let (params, grid, q0) = fiducial(0);
    let v = potential::evaluate(&q0, params.omega2, grid.dr);
    assert_eq!(v.len(), grid.n);
    assert!(v.iter().all(|vj| vj.is_finite()));
    for (vj, vjp1) in v.iter().zip(v.iter().skip(1)) {
        assert!(vjp1 >= vj);
    }
}
