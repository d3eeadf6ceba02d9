//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Potential](#potential)
//! - [Radial discretization](#radial-discretization)
//! - [Time integration](#time-integration)
//! - [Thomas algorithm](#thomas-algorithm)
//!
//! # Background
//! The Schrödinger–Newton equation describes a quantum wavefunction bound by
//! the gravitational potential of its own probability density,
//! ```text
//!     ∂ψ        ħ²
//! i ħ -- = (- ----- ∇² + m Φ[|ψ|²]) ψ
//!     ∂t      2 m
//! ```
//! with Φ determined by the Poisson equation sourced by m |ψ|². The coupling
//! makes every time step nonlinear: the potential at step *t* depends on the
//! density of the wavefunction at step *t*. In the Bose–Einstein-condensate
//! dark-matter picture[^1], ψ is the condensate wavefunction of an entire
//! halo, and the stationary width of the self-bound cloud sets the halo core
//! size. This crate restricts to spherical symmetry, so ψ depends only on the
//! radius and time.
//!
//! # Potential
//! For a spherically symmetric density the interior gravitational potential
//! of the instantaneous mass distribution reduces to a closed form. Treating
//! the halo as a homogeneous sphere of mean density ρ̄ defines the squared
//! harmonic frequency
//! ```text
//! Ω² = (4π/3) G ρ̄
//! ```
//! and the potential at radius r is assembled from two radial moments of the
//! instantaneous density,
//! ```text
//! S₁ = ∫ r'² |ψ(r')|² dr'    S₂ = ∫ r'⁴ |ψ(r')|² dr'
//! ```
//! discretized on the grid as
//! ```text
//! S₁ = Σ_i i² δr³ |ψ_i|²     S₂ = Σ_i i⁴ δr⁵ |ψ_i|²
//! ```
//! giving
//! ```text
//! V_J = 2π Ω² (J δr)² S₁ - S₂
//! ```
//! Note that only the first term carries the 2π Ω² scaling; the reference
//! formulation leaves S₂ unscaled and that form is taken as authoritative
//! here. Both moments are independent of the output index, so the potential
//! vector costs one pass over the snapshot plus one pass over the output.
//!
//! # Radial discretization
//! The wavefunction is sampled at radii r_J = J δr, J ∊ {0, ..., N - 1}. The
//! radial Laplacian
//! ```text
//!       1  ∂     ∂ψ
//! ∇²ψ = -- -- (r² --)
//!       r² ∂r     ∂r
//! ```
//! discretizes with the volume-element weights (J - 1)/J and (J + 1)/J on the
//! neighboring points. Two rows are special:
//! - J = 0 sits on the coordinate singularity; regularity of ψ at the origin
//!   (∂ψ/∂r = 0) replaces the weighted stencil with a one-sided stencil whose
//!   coefficients are 12 and -6 in the units of the interior stencil.
//! - J = N - 1 imposes ψ = 0 beyond the domain (the super-diagonal entry is
//!   dropped), which is accurate only when the amplitude there is already
//!   numerically negligible. Choosing N and δr to satisfy that is the user's
//!   responsibility; the method does not correct a truncated halo.
//!
//! # Time integration
//! Time stepping uses the Cayley form of the Crank–Nicolson scheme[^2]. The
//! formal step
//! ```text
//!               -i H δt / ħ
//! ψ(t + δt) = e             ψ(t)
//! ```
//! is approximated by the unitary rational form
//! ```text
//!             1 - i H δt / 2ħ
//! ψ(t + δt) = --------------- ψ(t) + O(δt³)
//!             1 + i H δt / 2ħ
//! ```
//! Rather than forming the explicit (numerator) half of the operator, one
//! introduces the auxiliary vector Υ through
//! ```text
//! ½ (1 + i H δt / 2ħ) Υ = ψ(t)
//! ```
//! and recovers the next snapshot algebraically,
//! ```text
//! ψ(t + δt) = Υ - ψ(t)
//! ```
//! which is an exact identity of the rational form, not an additional
//! approximation. The operator on the left-hand side is tridiagonal on the
//! radial grid, so each step costs one potential evaluation and one O(N)
//! direct solve. Because the Cayley form is a ratio of complex conjugates for
//! Hermitian H, the step is approximately unitary and the total discrete
//! probability
//! ```text
//! Σ_J 4π (J δr)² |ψ_J|² δr
//! ```
//! is preserved up to grid-coarseness effects.
//!
//! # Thomas algorithm
//! A tridiagonal system
//! ```text
//! a_i X_{i-1} + b_i X_i + c_i X_{i+1} = d_i
//! ```
//! (out-of-range terms dropped) is solved directly by forward elimination and
//! backward substitution[^3]:
//! ```text
//! B₀ = b₀, D₀ = d₀
//! B_i = b_i - a_i c_{i-1} / B_{i-1}
//! D_i = d_i - a_i D_{i-1} / B_{i-1}
//!
//! X_{N-1} = D_{N-1} / B_{N-1}
//! X_i = (D_i - c_i X_{i+1}) / B_i
//! ```
//! in O(N) time and auxiliary space. The divisions are undefined if a
//! modified diagonal B_i vanishes; the construction above should never
//! produce that for physically reasonable inputs, but the solver checks each
//! pivot and fails loudly instead of assuming.
//!
//! [^1]: S.-J. Sin, "Late-time phase transition and the galactic halo as a
//! Bose liquid." Phys. Rev. D **50** 3650 (1994).
//!
//! [^2]: A. Goldberg, H. M. Schey, and J. L. Schwartz, "Computer-generated
//! motion pictures of one-dimensional quantum-mechanical transmission and
//! reflection phenomena." American Journal of Physics **35** 177 (1967).
//!
//! [^3]: L. H. Thomas, "Elliptic problems in linear difference equations over
//! a network." Watson Sci. Comput. Lab. Rept., Columbia University (1949).
