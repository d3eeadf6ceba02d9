#![allow(dead_code, non_snake_case)]

//! Numerical integration of the one-dimensional (radial), time-dependent
//! Schrödinger–Newton equation for a self-gravitating quantum wavefunction,
//! modeling a Bose–Einstein-condensate dark-matter halo.
//!
//! The wavefunction is coupled to its own gravitational potential, so every
//! time step is nonlinear: the potential at step *t* is computed from the
//! probability density of the wavefunction at step *t*. Each step is taken
//! implicitly via a Cayley-transform (Crank–Nicolson-style) discretization,
//! reducing to a complex tridiagonal linear system solved in O(*N*) by the
//! Thomas algorithm.
//!
//! Per-step pipeline:
//! - [`potential`]: self-consistent gravitational potential from the current
//!   snapshot
//! - [`tridiag`]: implicit-scheme tridiagonal operator and its direct solve
//! - [`timedep`]: step orchestration and accumulation of the full history
//! - [`diag`]: post-hoc enclosing-radius (r₉₉) diagnostic over the history
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod units;
pub mod grid;
pub mod potential;
pub mod tridiag;
pub mod timedep;
pub mod diag;
pub mod utils;

pub mod docs;

// a modified diagonal smaller than this in magnitude counts as a vanishing
// pivot in the Thomas forward sweep
pub(crate) const PIVOT_EPSILON: f64 = 1e-300;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
pub type Arr2<S> = ndarray::ArrayBase<S, ndarray::Ix2>;
