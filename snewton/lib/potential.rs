//! Evaluation of the self-consistent gravitational potential.
//!
//! The potential acting on the wavefunction at a given instant is computed
//! from that same wavefunction's probability density, which is what makes
//! every time step of the Schrödinger–Newton equation nonlinear. For a
//! spherically symmetric density the potential admits a closed form built
//! from two radial moments of `|ψ|²`; see [`docs`][crate::docs#potential].

use std::f64::consts::TAU;
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::Arr1;

/// Compute the real-valued self-gravity potential at every grid point from
/// the instantaneous snapshot `q`.
///
/// Two radial moments are accumulated in a single pass over the snapshot,
/// ```text
/// S₁ = Σ_i i²·dr³·|ψ_i|²
/// S₂ = Σ_i i⁴·dr⁵·|ψ_i|²
/// ```
/// and the output at index `J` is `V_J = 2π·Ω²·(J·dr)²·S₁ − S₂`. The second
/// moment is deliberately left outside the `2π·Ω²` scaling; this matches the
/// reference formulation of the functional.
///
/// The moments are recomputed from scratch on every call: the density changes
/// globally at each step, so no incremental update is possible. If the
/// amplitudes are not effectively vanishing by the outermost index, the
/// moments integrate a truncated mass distribution and the potential is
/// inaccurate; that is a resolution-adequacy concern, not a runtime fault.
pub fn evaluate<S>(q: &Arr1<S>, omega2: f64, dr: f64) -> nd::Array1<f64>
where S: nd::Data<Elem = C64>
{
    let dr3 = dr.powi(3);
    let dr5 = dr.powi(5);
    let mut s1: f64 = 0.0;
    let mut s2: f64 = 0.0;
    for (i, qi) in q.iter().enumerate() {
        let x = i as f64;
        let w = qi.norm_sqr();
        s1 += x.powi(2) * dr3 * w;
        s2 += x.powi(4) * dr5 * w;
    }
    (0..q.len())
        .map(|j| TAU * omega2 * (j as f64 * dr).powi(2) * s1 - s2)
        .collect()
}
