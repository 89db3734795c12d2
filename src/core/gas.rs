use crate::core::constants::{
    AIR_DENSITY, AIR_DIFFUSION_VOLUME, AIR_MOLAR_MASS, AIR_NUMBER_CONCENTRATION, AVOGADRO,
    FULLER_PREFACTOR, GRAMS_PER_KILOGRAM,
};
use crate::core::transport::{require_non_negative, require_positive, ThermalTransport};
use crate::error::Result;
use std::f64::consts::PI;

/// One gas species: the condensing vapor or the bulk air.
///
/// Fields:
/// - `name`: label only
/// - `molar_mass`: [kg/mol] (> 0)
/// - `density`: [kg/m³] (> 0)
/// - `temperature`: [K] (> 0), slaved to the owning atmosphere
/// - `diffusion_volume`: Fuller diffusion volume [-] (> 0)
/// - `number_concentration`: [1/m³] (>= 0)
#[derive(Debug, Clone, PartialEq)]
pub struct Gas {
    name: String,
    molar_mass: f64,
    density: f64,
    temperature: f64,
    diffusion_volume: f64,
    number_concentration: f64,
}

impl Gas {
    /// Create a new gas species after validating every physical input.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if molar mass, density, temperature or diffusion volume is
    ///   non-positive or non-finite, or the number concentration is negative.
    pub fn new(
        name: impl Into<String>,
        molar_mass: f64,
        density: f64,
        temperature: f64,
        diffusion_volume: f64,
        number_concentration: f64,
    ) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            molar_mass: require_positive("molar_mass", molar_mass)?,
            density: require_positive("density", density)?,
            temperature: require_positive("temperature", temperature)?,
            diffusion_volume: require_positive("diffusion_volume", diffusion_volume)?,
            number_concentration: require_non_negative(
                "number_concentration",
                number_concentration,
            )?,
        })
    }

    /// Dry air at the given temperature.
    pub fn dry_air(temperature: f64) -> Result<Self> {
        Self::new(
            "air",
            AIR_MOLAR_MASS,
            AIR_DENSITY,
            temperature,
            AIR_DIFFUSION_VOLUME,
            AIR_NUMBER_CONCENTRATION,
        )
    }

    /// Species label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Molar mass [kg/mol].
    pub fn molar_mass(&self) -> f64 {
        self.molar_mass
    }

    /// Molar mass [g/mol], the unit the Fuller correlation expects.
    pub fn molar_mass_g_per_mol(&self) -> f64 {
        self.molar_mass * GRAMS_PER_KILOGRAM
    }

    /// Bulk density [kg/m³].
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Fuller diffusion volume [-].
    pub fn diffusion_volume(&self) -> f64 {
        self.diffusion_volume
    }

    /// Number concentration [1/m³].
    pub fn number_concentration(&self) -> f64 {
        self.number_concentration
    }

    /// Binary diffusion coefficient [m²/s] of this species through a medium (Fuller et al.).
    ///
    /// Parameters
    /// - `medium_diffusion_volume`: Fuller diffusion volume of the medium
    /// - `medium_molar_mass`: molar mass of the medium [g/mol]
    /// - `pressure`: total pressure [atm]
    pub fn binary_diffusion_coefficient(
        &self,
        medium_diffusion_volume: f64,
        medium_molar_mass: f64,
        pressure: f64,
    ) -> f64 {
        let volumes = self.diffusion_volume.cbrt() + medium_diffusion_volume.cbrt();
        FULLER_PREFACTOR
            * self.temperature.powf(1.75)
            * (1.0 / self.molar_mass_g_per_mol() + 1.0 / medium_molar_mass).sqrt()
            / (pressure * volumes.powi(2))
    }
}

impl ThermalTransport for Gas {
    fn temperature(&self) -> f64 {
        self.temperature
    }

    fn set_temperature(&mut self, temperature: f64) -> Result<()> {
        self.temperature = require_positive("temperature", temperature)?;
        Ok(())
    }

    /// Mass of one molecule, M / N_A.
    fn mass(&self) -> f64 {
        self.molar_mass / AVOGADRO
    }

    /// Radius of a sphere of one molecular mass at the bulk density.
    fn radius(&self) -> f64 {
        (3.0 * self.mass() / (4.0 * PI * self.density)).cbrt()
    }
}
