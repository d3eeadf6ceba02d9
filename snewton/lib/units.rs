#![allow(non_upper_case_globals)]

//! Physical constants and astrophysical scale factors.
//!
//! Concrete physical constants are taken from NIST; astronomical scales from
//! the IAU.

use std::f64::consts::PI;

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / PI;
//                +/- 0 (exact)

/// speed of light in vacuum (m s^-1)
pub const c: f64 = 2.99792458e8;
//             +/- 0 (exact)

/// Newtonian gravitational constant (m^3 kg^-1 s^-2)
pub const G: f64 = 6.67430e-11;
//             +/- 0.00015e-11

/// Boltzmann's constant (J K^-1)
pub const kB: f64 = 1.380649e-23;
//              +/- 0 (exact)

/// parsec (m)
pub const pc: f64 = 3.0857e16;
//              +/- 0.00005e16

/// kiloparsec (m)
pub const kpc: f64 = 1e3 * pc;

/// solar mass (kg)
pub const Msun: f64 = 1.98892e30;
//                +/- 0.00025e30

/// Convert a length in meters to kiloparsecs.
pub fn to_kpc<T, U>(x: T) -> U
where T: std::ops::Mul<f64, Output = U>
{
    x * kpc.recip()
}

/// Convert a length in kiloparsecs to meters.
pub fn from_kpc<T, U>(x: T) -> U
where T: std::ops::Mul<f64, Output = U>
{
    x * kpc
}

/// Convert a mass in kilograms to solar masses.
pub fn to_msun<T, U>(x: T) -> U
where T: std::ops::Mul<f64, Output = U>
{
    x * Msun.recip()
}

/// Convert a mass in solar masses to kilograms.
pub fn from_msun<T, U>(x: T) -> U
where T: std::ops::Mul<f64, Output = U>
{
    x * Msun
}
