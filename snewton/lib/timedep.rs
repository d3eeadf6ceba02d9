//! Time evolution of the self-gravitating wavefunction.
//!
//! In all 2D arrays, the first (or zero-th) axis indexes time.
//!
//! Each step evaluates the self-consistent potential from the current
//! snapshot, builds the implicit-scheme operator, solves the tridiagonal
//! system for the auxiliary vector Υ, and recovers the next snapshot as
//! `ψ' = Υ - ψ`. The subtraction is the algebraic consequence of the
//! Cayley-transform identity and is exact given a correctly solved Υ; see
//! [`docs`][crate::docs#time-integration].
//!
//! Steps are strictly sequential: each depends on the full wavefunction
//! produced by the previous one. A failed solve aborts the whole run; no
//! partial snapshot is ever committed to the history.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    Arr1,
    error::{ EvolveError, LengthError },
    grid::{ GridSpec, PhysicalParameters },
    potential,
    tridiag,
};

pub type EvolveResult<T> = Result<T, EvolveError>;

/// Advance one snapshot by a single time step.
///
/// The returned array is freshly allocated; `q` is never mutated.
pub fn step<S>(
    params: &PhysicalParameters,
    grid: &GridSpec,
    q: &Arr1<S>,
) -> EvolveResult<nd::Array1<C64>>
where S: nd::Data<Elem = C64>
{
    LengthError::check(q, grid.n)?;
    let v = potential::evaluate(q, params.omega2, grid.dr);
    let sys = tridiag::build(&v, grid, params);
    let aux = tridiag::solve(&sys, q)?;
    Ok(nd::Zip::from(&aux).and(q).map_collect(|uk, qk| uk - qk))
}

/// Evolve an initial snapshot through `grid.steps` time steps, returning the
/// full history.
///
/// The history has shape `(grid.steps + 1, grid.n)`; row 0 is `q0` and each
/// subsequent row is the snapshot after one more step. The history is
/// returned whole or not at all: any step failure aborts the run with `Err`,
/// so a caller can always distinguish a complete history from an aborted one.
/// The evolution is deterministic; identical inputs produce bit-identical
/// histories.
pub fn evolve<S>(
    params: &PhysicalParameters,
    grid: &GridSpec,
    q0: &Arr1<S>,
) -> EvolveResult<nd::Array2<C64>>
where S: nd::Data<Elem = C64>
{
    LengthError::check(q0, grid.n)?;
    let mut q: nd::Array2<C64> = nd::Array2::zeros((grid.steps + 1, grid.n));
    let mut q_temp: nd::Array1<C64> = q0.to_owned();
    q.slice_mut(nd::s![0, ..]).assign(q0);
    for t in 0..grid.steps {
        q_temp = step(params, grid, &q_temp)?;
        q_temp.clone().move_into(q.slice_mut(nd::s![t + 1, ..]));
    }
    Ok(q)
}
