use crate::core::constants::BOLTZMANN;
use crate::error::{Error, Result};
use std::f64::consts::PI;

/// Capability set shared by every body that takes part in vapor–particle collisions.
///
/// The growth law is symmetric in the particle and the vapor molecule: both contribute a
/// diffusion coefficient, a thermal speed, a mass and a radius. Implementors provide the
/// state; the kinetic-theory quantities derived from it are provided here.
pub trait ThermalTransport {
    /// Current temperature [K].
    fn temperature(&self) -> f64;

    /// Set temperature [K]. Derived quantities are computed on demand, nothing is cached.
    fn set_temperature(&mut self, temperature: f64) -> Result<()>;

    /// Mass of one body [kg].
    fn mass(&self) -> f64;

    /// Effective radius [m] used in free-path and Knudsen calculations.
    fn radius(&self) -> f64;

    /// Mean thermal speed sqrt(8 k_B T / (π m)) [m/s].
    #[inline]
    fn thermal_speed(&self) -> f64 {
        (8.0 * BOLTZMANN * self.temperature() / (PI * self.mass())).sqrt()
    }

    /// Diffusion coefficient [m²/s] of this body in a medium with the given mean free path [m]
    /// and dynamic viscosity [Pa·s].
    ///
    /// Stokes–Einstein mobility with the Phillips slip interpolation, which tends to the
    /// kinetic-theory limit for Kn >> 1.
    fn diffusion_coefficient(&self, medium_free_path: f64, medium_viscosity: f64) -> f64 {
        let r = self.radius();
        let kn = medium_free_path / r;
        let slip = (5.0 + 4.0 * kn + 6.0 * kn.powi(2) + 18.0 * kn.powi(3))
            / (5.0 - kn + (8.0 + PI) * kn.powi(2));
        BOLTZMANN * self.temperature() / (6.0 * PI * medium_viscosity * r) * slip
    }
}

/// Reject non-finite or non-positive values of a named physical quantity.
pub(crate) fn require_positive(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidParam(format!(
            "{name} must be finite and > 0, got {value}"
        )));
    }
    Ok(value)
}

/// Reject non-finite or negative values of a named physical quantity.
pub(crate) fn require_non_negative(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidParam(format!(
            "{name} must be finite and >= 0, got {value}"
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    struct Sphere {
        t: f64,
        m: f64,
        r: f64,
    }

    impl ThermalTransport for Sphere {
        fn temperature(&self) -> f64 {
            self.t
        }
        fn set_temperature(&mut self, temperature: f64) -> Result<()> {
            self.t = require_positive("temperature", temperature)?;
            Ok(())
        }
        fn mass(&self) -> f64 {
            self.m
        }
        fn radius(&self) -> f64 {
            self.r
        }
    }

    #[test]
    fn thermal_speed_scales_with_sqrt_temperature() -> Result<()> {
        let mut s = Sphere { t: 100.0, m: 1e-25, r: 1e-9 };
        let v1 = s.thermal_speed();
        s.set_temperature(400.0)?;
        assert_relative_eq!(s.thermal_speed(), 2.0 * v1, max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn continuum_limit_is_stokes_einstein() {
        // Kn -> 0: slip factor -> 1
        let s = Sphere { t: 300.0, m: 1.0, r: 1.0 };
        let mu = 1.8e-5;
        let expected = BOLTZMANN * 300.0 / (6.0 * PI * mu * 1.0);
        assert_relative_eq!(s.diffusion_coefficient(1e-12, mu), expected, max_relative = 1e-9);
    }

    #[test]
    fn validators_reject_bad_values() {
        assert!(require_positive("radius", 0.0).is_err());
        assert!(require_positive("radius", f64::NAN).is_err());
        assert!(require_non_negative("concentration", -1.0).is_err());
        assert!(require_non_negative("concentration", 0.0).is_ok());
    }
}
