//! Post-hoc diagnostics over wavefunction snapshots and histories.
//!
//! The principal diagnostic is the enclosing radius: the smallest grid radius
//! inside which the cumulative probability first exceeds a threshold,
//! conventionally 0.99 (r₉₉), used as a halo-size proxy.

use std::f64::consts::PI;
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{ Arr1, Arr2 };

/// Conventional enclosed-probability threshold for the r₉₉ halo-size proxy.
pub const R99: f64 = 0.99;

/// Enclosing radius of a single snapshot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EnclosedRadius {
    /// Radius of the first grid point at which the cumulative probability
    /// exceeds the threshold, or the outer boundary radius if it never does.
    pub radius: f64,
    /// Cumulative probability actually enclosed at `radius`.
    pub fraction: f64,
    /// Set when the threshold was never reached across the full domain. The
    /// domain is then too small relative to the halo's spatial extent; this
    /// is advisory, the diagnostic itself remains well-defined.
    pub saturated: bool,
}

/// Find the smallest radius enclosing at least `threshold` of the snapshot's
/// total probability.
///
/// Scans the cumulative sum `Σ_i 4π (i·dr)² |ψ_i|² dr` outward with early
/// exit at the first index exceeding `threshold`. If the sum never exceeds it,
/// the outer boundary radius `(n - 1)·dr` is returned with the accumulated
/// fraction and `saturated` set.
pub fn enclosed_radius<S>(q: &Arr1<S>, dr: f64, threshold: f64)
    -> EnclosedRadius
where S: nd::Data<Elem = C64>
{
    let mut acc: f64 = 0.0;
    for (j, qj) in q.iter().enumerate() {
        let r = j as f64 * dr;
        acc += 4.0 * PI * r.powi(2) * qj.norm_sqr() * dr;
        if acc > threshold {
            return EnclosedRadius { radius: r, fraction: acc, saturated: false };
        }
    }
    EnclosedRadius {
        radius: (q.len().saturating_sub(1)) as f64 * dr,
        fraction: acc,
        saturated: true,
    }
}

/// Apply [`enclosed_radius`] to every snapshot of a history (time on axis 0),
/// producing one entry per time step.
pub fn enclosed_radius_series<S>(hist: &Arr2<S>, dr: f64, threshold: f64)
    -> Vec<EnclosedRadius>
where S: nd::Data<Elem = C64>
{
    hist.axis_iter(nd::Axis(0))
        .map(|q| enclosed_radius(&q, dr, threshold))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ grid::GridSpec, utils };

    fn gaussian() -> (GridSpec, nd::Array1<C64>) {
        let grid = GridSpec::new(300, 1e20, 0, 2.0).unwrap();
        let q = utils::gaussian_profile(&grid, 20.0 * crate::units::kpc);
        (grid, q)
    }

    #[test]
    fn fraction_exceeds_threshold_when_not_saturated() {
        let (grid, q) = gaussian();
        let er = enclosed_radius(&q, grid.dr, R99);
        assert!(!er.saturated);
        assert!(er.fraction > R99);
        assert!(er.radius <= grid.outer_radius());
    }

    #[test]
    fn monotonic_in_threshold() {
        // a higher threshold never yields a smaller radius
        let (grid, q) = gaussian();
        let thresholds = [0.1, 0.5, 0.9, 0.99, 0.999];
        let radii: Vec<f64> = thresholds.iter()
            .map(|&th| enclosed_radius(&q, grid.dr, th).radius)
            .collect();
        for (rk, rkp1) in radii.iter().zip(radii.iter().skip(1)) {
            assert!(rkp1 >= rk);
        }
    }

    #[test]
    fn unreachable_threshold_saturates_at_the_boundary() {
        let (grid, q) = gaussian();
        let er = enclosed_radius(&q, grid.dr, 2.0);
        assert!(er.saturated);
        assert_eq!(er.radius, grid.outer_radius());
        assert!(er.fraction < 2.0);
    }

    #[test]
    fn series_has_one_entry_per_snapshot() {
        let (grid, q) = gaussian();
        let hist: nd::Array2<C64>
            = nd::stack(nd::Axis(0), &[q.view(), q.view(), q.view()]).unwrap();
        let series = enclosed_radius_series(&hist, grid.dr, R99);
        assert_eq!(series.len(), 3);
        assert!(series.iter().all(|er| er == &series[0]));
    }
}
