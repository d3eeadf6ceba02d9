//! Immutable descriptions of the radial/temporal discretization and of the
//! physical system being evolved.
//!
//! Both structs validate on construction and derive every quantity they cache
//! exactly once; an invalid configuration is rejected before it can enter the
//! step loop.

use std::f64::consts::PI;
use crate::error::ConfigError;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Discretization of the radial domain and of time.
///
/// The radial coordinate of grid index `J ∊ {0, ..., n - 1}` is `J * dr`; the
/// domain extends to `(n - 1) * dr`, beyond which the wavefunction is taken to
/// be identically zero.
///
/// Unenforced precondition: `n` and `dr` must jointly be large enough that the
/// wavefunction amplitude at the outermost point is numerically negligible.
/// Violating it silently evolves a truncated halo; see
/// [`boundary_amplitude`][crate::utils::boundary_amplitude] for an advisory
/// probe.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GridSpec {
    /// Number of radial grid points (≥ 2).
    pub n: usize,
    /// Radial step (m, > 0).
    pub dr: f64,
    /// Number of time steps to take.
    pub steps: usize,
    /// Time step duration (s, > 0).
    pub dt: f64,
}

impl GridSpec {
    /// Construct a new grid, validating all parameters.
    pub fn new(n: usize, dr: f64, steps: usize, dt: f64) -> ConfigResult<Self>
    {
        ConfigError::check_cell_count(n)?;
        ConfigError::check_cell_size(dr)?;
        ConfigError::check_step_duration(dt)?;
        Ok(Self { n, dr, steps, dt })
    }

    /// Radial coordinate of grid index `j`.
    pub fn radius(&self, j: usize) -> f64 { j as f64 * self.dr }

    /// Radial coordinate of the outermost grid point.
    pub fn outer_radius(&self) -> f64 { self.radius(self.n - 1) }
}

/// Physical parameters of the halo, with derived quantities cached.
///
/// The mean density `rho_avg` and squared harmonic-oscillator frequency
/// `omega2` are computed once at construction from the homogeneous-sphere
/// picture of the halo:
/// ```text
/// ρ̄ = M / ((4π/3) a³)
/// Ω² = (4π/3) G ρ̄
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhysicalParameters {
    /// Gravitational constant (m³ kg⁻¹ s⁻²).
    pub grav: f64,
    /// Reduced Planck constant (kg m² s⁻¹).
    pub hbar: f64,
    /// Halo half-width `a` (m).
    pub halo_width: f64,
    /// Total halo mass `M` (kg).
    pub mass: f64,
    /// Mean halo density (kg m⁻³); derived.
    pub rho_avg: f64,
    /// Squared harmonic-oscillator frequency Ω² (s⁻²); derived.
    pub omega2: f64,
}

impl PhysicalParameters {
    /// Construct from the four supplied constants, validating each and caching
    /// the derived density and frequency.
    pub fn new(grav: f64, hbar: f64, halo_width: f64, mass: f64)
        -> ConfigResult<Self>
    {
        ConfigError::check_parameter("grav", grav)?;
        ConfigError::check_parameter("hbar", hbar)?;
        ConfigError::check_parameter("halo_width", halo_width)?;
        ConfigError::check_parameter("mass", mass)?;
        let rho_avg = mass / (4.0 / 3.0 * PI * halo_width.powi(3));
        let omega2 = 4.0 / 3.0 * PI * grav * rho_avg;
        Ok(Self { grav, hbar, halo_width, mass, rho_avg, omega2 })
    }

    /// Construct using the NIST values of [`G`][crate::units::G] and
    /// [`ħ`][crate::units::hbar].
    pub fn from_halo(halo_width: f64, mass: f64) -> ConfigResult<Self> {
        Self::new(crate::units::G, crate::units::hbar, halo_width, mass)
    }
}
