//! Serializable initial conditions for a growth run.
//!
//! A [`Scenario`] bundles the particle, the vapor and the ambient state. Missing fields
//! fall back to the reference run: a 1.5 nm seed at 300 K and 1 atm with unit vapor
//! properties.

use crate::core::transport::{require_non_negative, require_positive};
use crate::core::{Atmosphere, Gas, Particle};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub name: String,
    /// [m]
    pub radius: f64,
    /// [kg/m³]
    pub density: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            name: "seed".into(),
            radius: 1.5e-9,
            density: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaporConfig {
    pub name: String,
    /// [kg/mol]
    pub molar_mass: f64,
    /// [kg/m³]
    pub density: f64,
    pub diffusion_volume: f64,
    /// [1/m³]
    pub number_concentration: f64,
}

impl Default for VaporConfig {
    fn default() -> Self {
        Self {
            name: "vapor".into(),
            molar_mass: 1.0,
            density: 1.0,
            diffusion_volume: 1.0,
            number_concentration: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientConfig {
    /// [atm]
    pub pressure: f64,
    /// [K]
    pub temperature: f64,
    /// [s]
    pub start_time: f64,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            pressure: 1.0,
            temperature: 300.0,
            start_time: 0.0,
        }
    }
}

/// Complete description of a growth run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub particle: ParticleConfig,
    pub vapor: VaporConfig,
    pub ambient: AmbientConfig,
}

impl Scenario {
    /// Parse a scenario from JSON; absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let scenario: Self = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every value before any entity is built.
    ///
    /// Errors:
    /// - `Error::Config` naming the section and the offending field.
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("particle", require_positive("radius", self.particle.radius)),
            ("particle", require_positive("density", self.particle.density)),
            ("vapor", require_positive("molar_mass", self.vapor.molar_mass)),
            ("vapor", require_positive("density", self.vapor.density)),
            (
                "vapor",
                require_positive("diffusion_volume", self.vapor.diffusion_volume),
            ),
            (
                "vapor",
                require_non_negative("number_concentration", self.vapor.number_concentration),
            ),
            ("ambient", require_positive("pressure", self.ambient.pressure)),
            (
                "ambient",
                require_positive("temperature", self.ambient.temperature),
            ),
        ];
        for (section, check) in checks {
            if let Err(e) = check {
                return Err(Error::Config(format!("{section}: {e}")));
            }
        }
        if !self.ambient.start_time.is_finite() {
            return Err(Error::Config("ambient: start_time must be finite".into()));
        }
        Ok(())
    }

    /// Build the growth engine described by this scenario.
    pub fn build(&self) -> Result<Atmosphere> {
        self.validate()?;
        let t = self.ambient.temperature;
        let particle = Particle::new(
            self.particle.name.clone(),
            self.particle.radius,
            self.particle.density,
            t,
        )?;
        let vapor = Gas::new(
            self.vapor.name.clone(),
            self.vapor.molar_mass,
            self.vapor.density,
            t,
            self.vapor.diffusion_volume,
            self.vapor.number_concentration,
        )?;
        Atmosphere::new(
            particle,
            vapor,
            self.ambient.pressure,
            t,
            self.ambient.start_time,
        )
    }
}
