//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

/// Returned when a wavefunction snapshot does not have the length demanded by
/// the grid it is evolved on.
#[derive(Debug, Error)]
#[error("encountered array of length {0} where length {1} was required")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A>(a: &nd::ArrayBase<S, nd::Ix1>, n: usize)
        -> Result<(), Self>
    where S: nd::Data<Elem = A>
    {
        let na = a.len();
        (na == n).then_some(()).ok_or(Self(na, n))
    }
}

/// Returned from [`GridSpec`][crate::grid::GridSpec] and
/// [`PhysicalParameters`][crate::grid::PhysicalParameters] constructors when a
/// discretization or physical parameter violates its required shape.
///
/// These are all detected at construction; an invalid configuration never
/// enters the step loop.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Returned when fewer than 2 radial grid points are requested.
    #[error("radial grids must have at least 2 points; got {0}")]
    BadCellCount(usize),

    /// Returned when a non-positive or non-finite radial step is encountered.
    #[error("radial step must be positive and finite; got {0}")]
    BadCellSize(f64),

    /// Returned when a non-positive or non-finite time step is encountered.
    #[error("time step must be positive and finite; got {0}")]
    BadStepDuration(f64),

    /// Returned when a non-positive or non-finite physical parameter is
    /// encountered.
    #[error("physical parameter {0} must be positive and finite; got {1}")]
    BadParameter(&'static str, f64),
}

impl ConfigError {
    pub(crate) fn check_cell_count(n: usize) -> Result<(), Self> {
        (n >= 2).then_some(()).ok_or(Self::BadCellCount(n))
    }

    pub(crate) fn check_cell_size(dr: f64) -> Result<(), Self> {
        (dr > 0.0 && dr.is_finite()).then_some(())
            .ok_or(Self::BadCellSize(dr))
    }

    pub(crate) fn check_step_duration(dt: f64) -> Result<(), Self> {
        (dt > 0.0 && dt.is_finite()).then_some(())
            .ok_or(Self::BadStepDuration(dt))
    }

    pub(crate) fn check_parameter(name: &'static str, val: f64)
        -> Result<(), Self>
    {
        (val > 0.0 && val.is_finite()).then_some(())
            .ok_or(Self::BadParameter(name, val))
    }
}

/// Returned from time-evolution functions.
#[derive(Debug, Error)]
pub enum EvolveError {
    /// Returned when the modified diagonal vanishes during the Thomas forward
    /// sweep, making the division by the pivot undefined. Surfaced at the
    /// offending step; never silently substituted or skipped.
    #[error("thomas solve: vanishing pivot in row {0}")]
    SingularPivot(usize),

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),

    /// [`ConfigError`]
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
