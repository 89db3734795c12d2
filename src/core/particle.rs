use crate::core::transport::{require_positive, ThermalTransport};
use crate::error::Result;
use std::f64::consts::PI;

/// The growing aerosol sphere.
///
/// Fields:
/// - `name`: label only
/// - `radius`: sphere radius [m] (> 0)
/// - `density`: bulk density [kg/m³] (> 0)
/// - `temperature`: [K] (> 0), slaved to the owning atmosphere
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    name: String,
    radius: f64,
    density: f64,
    temperature: f64,
}

impl Particle {
    /// Create a new particle after validating invariants.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if `radius`, `density` or `temperature` is non-positive or NaN/inf.
    pub fn new(name: impl Into<String>, radius: f64, density: f64, temperature: f64) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            radius: require_positive("radius", radius)?,
            density: require_positive("density", density)?,
            temperature: require_positive("temperature", temperature)?,
        })
    }

    /// Particle label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bulk density [kg/m³].
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Set radius (validated as finite and > 0).
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        self.radius = require_positive("radius", radius)?;
        Ok(())
    }

    /// Sphere volume (4/3) π r³ [m³].
    #[inline]
    pub fn volume(&self) -> f64 {
        4.0 / 3.0 * PI * self.radius.powi(3)
    }
}

impl ThermalTransport for Particle {
    fn temperature(&self) -> f64 {
        self.temperature
    }

    fn set_temperature(&mut self, temperature: f64) -> Result<()> {
        self.temperature = require_positive("temperature", temperature)?;
        Ok(())
    }

    /// Mass of the sphere, ρ · V.
    fn mass(&self) -> f64 {
        self.density * self.volume()
    }

    fn radius(&self) -> f64 {
        self.radius
    }
}
