//! Miscellaneous tools: the Gaussian initial-condition generator, discrete
//! radial norms, and the outer-boundary adequacy probe.

use std::f64::consts::PI;
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{ Arr1, grid::GridSpec };

/// Generate the normalized, spherically symmetric Gaussian initial profile of
/// half-width `a`:
/// ```text
/// ψ_J = (π a²)^(-3/4) exp(-(J δr)² / (2 a²))
/// ```
/// The profile is real-valued (zero imaginary part) and carries approximately
/// unit probability under the grid's discrete radial normalization, provided
/// the domain is wide enough that the amplitude at the outermost point is
/// negligible (see [`boundary_amplitude`]).
pub fn gaussian_profile(grid: &GridSpec, a: f64) -> nd::Array1<C64> {
    let amp = (PI * a.powi(2)).powf(-0.75);
    (0..grid.n)
        .map(|j| {
            let r = grid.radius(j);
            C64::from(amp * (-r.powi(2) / (2.0 * a.powi(2))).exp())
        })
        .collect()
}

/// Calculate the total discrete probability of a radial wavefunction,
/// `Σ_J 4π (J δr)² |ψ_J|² δr`.
pub fn wf_norm<S>(q: &Arr1<S>, dr: f64) -> f64
where S: nd::Data<Elem = C64>
{
    q.iter().enumerate()
        .map(|(j, qj)| 4.0 * PI * (j as f64 * dr).powi(2) * qj.norm_sqr() * dr)
        .sum()
}

/// Return a copy of a radial wavefunction normalized to unit total
/// probability.
pub fn wf_normalized<S>(q: &Arr1<S>, dr: f64) -> nd::Array1<C64>
where S: nd::Data<Elem = C64>
{
    let norm = wf_norm(q, dr).sqrt();
    q.mapv(|qk| qk / norm)
}

/// Amplitude magnitude at the outermost grid point.
///
/// A value that is not numerically negligible means the domain truncates the
/// halo and the whole method's validity precondition is violated; this is
/// advisory, not an error.
///
/// *Panics if `q` is empty*.
pub fn boundary_amplitude<S>(q: &Arr1<S>) -> f64
where S: nd::Data<Elem = C64>
{
    q[q.len() - 1].norm()
}
