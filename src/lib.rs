//! Condensational growth of a single aerosol particle.
//!
//! [`core::Atmosphere`] owns one [`core::Particle`], one condensing [`core::Gas`] and an
//! internal dry-air gas at a fixed pressure and temperature. Each call to
//! [`core::Atmosphere::advance`] recomputes the mean free path, the Knudsen number and the
//! Fuchs–Sutugin correction, then integrates the particle radius by one Euler step.
//!
//! With the `python` feature the engine is also exposed as the `growsim` Python module.

pub mod core;
pub mod error;

#[cfg(feature = "python")]
mod python;
