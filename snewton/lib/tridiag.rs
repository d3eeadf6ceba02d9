//! Construction and direct solution of the implicit-scheme tridiagonal
//! operator.
//!
//! One time step of the Cayley-transform discretization solves
//! ```text
//! ½ (1 + i H δt / 2ħ) Υ = ψ
//! ```
//! for the auxiliary vector Υ, where H contains the spherical radial
//! Laplacian and the self-gravity potential. Discretized on the radial grid,
//! the operator on the left-hand side is tridiagonal; [`build`] produces its
//! three coefficient sequences and [`thomas`] solves the resulting system in
//! O(*N*) time.

use ndarray as nd;
use num_complex::Complex64 as C64;
use num_traits::Zero;
use crate::{
    Arr1,
    PIVOT_EPSILON,
    error::EvolveError,
    grid::{ GridSpec, PhysicalParameters },
};

pub type TridiagResult<T> = Result<T, EvolveError>;

/// The three coefficient sequences of a tridiagonal operator, all of equal
/// length `n`.
///
/// Convention: `sub[0] == 0` and `sup[n - 1] == 0`; there is no coupling
/// outside the domain. A system is transient; it is built from one potential
/// vector and consumed by one solve.
#[derive(Clone, Debug, PartialEq)]
pub struct TridiagonalSystem {
    /// Sub-diagonal coefficients.
    pub sub: nd::Array1<C64>,
    /// Diagonal coefficients.
    pub diag: nd::Array1<C64>,
    /// Super-diagonal coefficients.
    pub sup: nd::Array1<C64>,
}

impl TridiagonalSystem {
    /// Number of rows.
    pub fn len(&self) -> usize { self.diag.len() }

    /// Whether the system is empty.
    pub fn is_empty(&self) -> bool { self.diag.is_empty() }
}

/// Build the implicit-scheme operator for one time step from the potential
/// vector `v`.
///
/// With `KR = i·ħ/(8M)·δt/δr²` and `PV_J = i·δt/(2ħ)·V_J`, the rows are
/// ```text
/// J = 0:      sub = 0                  diag = ½ (1 + PV₀ + 12 KR)   sup = -6 KR
/// 0 < J < N-1: sub = -KR (J - 1) / J   diag = ½ (1 + PV_J + 2 KR)   sup = -KR (J + 1) / J
/// J = N-1:    sub = -KR (N - 2) / (N - 1)   diag = ½ (1 + PV_{N-1})   sup = 0
/// ```
/// The `(J ∓ 1) / J` weights encode the volume element of the spherical
/// radial Laplacian; the innermost row instead absorbs the coordinate
/// singularity at r = 0, and the outermost row imposes zero amplitude beyond
/// the domain.
///
/// *Panics if `v` does not have length `grid.n`* (the potential is only ever
/// produced from a snapshot on the same grid).
pub fn build<S>(v: &Arr1<S>, grid: &GridSpec, params: &PhysicalParameters)
    -> TridiagonalSystem
where S: nd::Data<Elem = f64>
{
    let n = grid.n;
    assert_eq!(v.len(), n);
    let kr: C64
        = C64::i() * params.hbar / (8.0 * params.mass)
        * grid.dt / grid.dr.powi(2);
    let pv = |j: usize| C64::i() * grid.dt / (2.0 * params.hbar) * v[j];

    let mut sub: nd::Array1<C64> = nd::Array1::zeros(n);
    let mut diag: nd::Array1<C64> = nd::Array1::zeros(n);
    let mut sup: nd::Array1<C64> = nd::Array1::zeros(n);

    sub[0] = C64::zero();
    diag[0] = 0.5 * (1.0 + pv(0) + 12.0 * kr);
    sup[0] = -6.0 * kr;
    for j in 1..n - 1 {
        let x = j as f64;
        sub[j] = -kr * (x - 1.0) / x;
        diag[j] = 0.5 * (1.0 + pv(j) + 2.0 * kr);
        sup[j] = -kr * (x + 1.0) / x;
    }
    sub[n - 1] = -kr * (n as f64 - 2.0) / (n as f64 - 1.0);
    diag[n - 1] = 0.5 * (1.0 + pv(n - 1));
    sup[n - 1] = C64::zero();

    TridiagonalSystem { sub, diag, sup }
}

/// Solve the tridiagonal system `a_i X_{i-1} + b_i X_i + c_i X_{i+1} = d_i`
/// (out-of-range terms dropped at the boundaries) via the Thomas algorithm.
///
/// `a[0]` and `c[n - 1]` are conventionally zero. The solve runs a forward
/// elimination followed by a backward substitution, O(*N*) in both time and
/// auxiliary space.
///
/// Fails with [`EvolveError::SingularPivot`] if any modified diagonal is
/// numerically zero. This is a structural property of the coefficients and
/// should not occur for physically reasonable inputs, but it is checked
/// rather than assumed.
///
/// *Panics if the arrays do not all have the same nonzero length*.
pub fn thomas<S, T, U, V>(
    a: &Arr1<S>,
    b: &Arr1<T>,
    c: &Arr1<U>,
    d: &Arr1<V>,
) -> TridiagResult<nd::Array1<C64>>
where
    S: nd::Data<Elem = C64>,
    T: nd::Data<Elem = C64>,
    U: nd::Data<Elem = C64>,
    V: nd::Data<Elem = C64>,
{
    let n = b.len();
    assert!(n > 0 && a.len() == n && c.len() == n && d.len() == n);

    // forward sweep: eliminate the sub-diagonal, keeping the original
    // super-diagonal for the back-substitution
    let mut bb: nd::Array1<C64> = nd::Array1::zeros(n);
    let mut dd: nd::Array1<C64> = nd::Array1::zeros(n);
    bb[0] = b[0];
    dd[0] = d[0];
    for i in 1..n {
        if bb[i - 1].norm() < PIVOT_EPSILON {
            return Err(EvolveError::SingularPivot(i - 1));
        }
        let w = a[i] / bb[i - 1];
        bb[i] = b[i] - w * c[i - 1];
        dd[i] = d[i] - w * dd[i - 1];
    }
    if bb[n - 1].norm() < PIVOT_EPSILON {
        return Err(EvolveError::SingularPivot(n - 1));
    }

    // backward sweep
    let mut x: nd::Array1<C64> = nd::Array1::zeros(n);
    x[n - 1] = dd[n - 1] / bb[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = (dd[i] - c[i] * x[i + 1]) / bb[i];
    }
    Ok(x)
}

/// Solve a built [`TridiagonalSystem`] against the right-hand side `d`.
///
/// Convenience wrapper over [`thomas`].
pub fn solve<S>(sys: &TridiagonalSystem, d: &Arr1<S>)
    -> TridiagResult<nd::Array1<C64>>
where S: nd::Data<Elem = C64>
{
    thomas(&sys.sub, &sys.diag, &sys.sup, d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn carr(vals: &[f64]) -> nd::Array1<C64> {
        vals.iter().copied().map(C64::from).collect()
    }

    // residual of row i of the tridiagonal equations
    fn residual(
        a: &nd::Array1<C64>,
        b: &nd::Array1<C64>,
        c: &nd::Array1<C64>,
        d: &nd::Array1<C64>,
        x: &nd::Array1<C64>,
        i: usize,
    ) -> f64 {
        let n = b.len();
        let mut lhs = b[i] * x[i];
        if i > 0 { lhs += a[i] * x[i - 1]; }
        if i < n - 1 { lhs += c[i] * x[i + 1]; }
        (lhs - d[i]).norm()
    }

    #[test]
    fn hand_solved_fixture() {
        // 2x₀ - x₁ = 1; -x₀ + 2x₁ - x₂ = 2; -x₁ + 2x₂ = 3
        // unique solution (5/2, 4, 7/2)
        let a = carr(&[0.0, -1.0, -1.0]);
        let b = carr(&[2.0, 2.0, 2.0]);
        let c = carr(&[-1.0, -1.0, 0.0]);
        let d = carr(&[1.0, 2.0, 3.0]);
        let x = thomas(&a, &b, &c, &d).unwrap();
        let expected = carr(&[2.5, 4.0, 3.5]);
        for (xk, ek) in x.iter().zip(expected.iter()) {
            assert!((xk - ek).norm() < 1e-12);
        }
    }

    #[test]
    fn residuals_vanish_for_complex_system() {
        let a: nd::Array1<C64>
            = (0..8)
            .map(|i| {
                if i == 0 { C64::zero() }
                else { C64::new(-0.3 * i as f64, 0.1) }
            })
            .collect();
        let b: nd::Array1<C64>
            = (0..8)
            .map(|i| C64::new(2.0 + 0.05 * i as f64, -0.4))
            .collect();
        let c: nd::Array1<C64>
            = (0..8)
            .map(|i| {
                if i == 7 { C64::zero() }
                else { C64::new(0.2, 0.3 * i as f64) }
            })
            .collect();
        let d: nd::Array1<C64>
            = (0..8)
            .map(|i| C64::new(i as f64, 1.0 - i as f64))
            .collect();
        let x = thomas(&a, &b, &c, &d).unwrap();
        for i in 0..8 {
            assert!(
                residual(&a, &b, &c, &d, &x, i) < 1e-10,
                "row {i} residual too large",
            );
        }
    }

    #[test]
    fn singular_pivot_is_an_error() {
        let a = carr(&[0.0, 0.0, 0.0]);
        let b = carr(&[0.0, 1.0, 1.0]);
        let c = carr(&[0.0, 0.0, 0.0]);
        let d = carr(&[1.0, 1.0, 1.0]);
        assert!(matches!(
            thomas(&a, &b, &c, &d),
            Err(EvolveError::SingularPivot(0)),
        ));
    }

    #[test]
    fn identity_system_returns_rhs() {
        let a = carr(&[0.0; 5]);
        let b = carr(&[1.0; 5]);
        let c = carr(&[0.0; 5]);
        let d = array![
            C64::new(1.0, -1.0),
            C64::new(2.0, 0.5),
            C64::new(3.0, 0.0),
            C64::new(4.0, 2.0),
            C64::new(5.0, -3.0),
        ];
        let x = thomas(&a, &b, &c, &d).unwrap();
        for (xk, dk) in x.iter().zip(d.iter()) {
            assert!((xk - dk).norm() < 1e-15);
        }
    }

    #[test]
    fn builder_honors_boundary_conventions() {
        let grid = GridSpec::new(16, 0.5, 1, 0.1).unwrap();
        let params = PhysicalParameters::new(1.0, 1.0, 1.0, 1.0).unwrap();
        let v: nd::Array1<f64> = nd::Array1::linspace(0.0, 3.0, 16);
        let sys = build(&v, &grid, &params);
        assert_eq!(sys.len(), 16);
        assert_eq!(sys.sub[0], C64::zero());
        assert_eq!(sys.sup[15], C64::zero());

        let kr: C64 = C64::i() * 1.0 / 8.0 * 0.1 / 0.25;
        // interior weighting follows (J ∓ 1) / J
        let j = 5.0;
        assert!((sys.sub[5] + kr * (j - 1.0) / j).norm() < 1e-15);
        assert!((sys.sup[5] + kr * (j + 1.0) / j).norm() < 1e-15);
        // innermost row carries the r = 0 regularization
        assert!((sys.sup[0] + 6.0 * kr).norm() < 1e-15);
        let pv0 = C64::i() * 0.1 / 2.0 * v[0];
        assert!((sys.diag[0] - 0.5 * (1.0 + pv0 + 12.0 * kr)).norm() < 1e-15);
    }
}
