use crate::core::constants::{
    AIR_FREE_PATH, AIR_VISCOSITY, BOLTZMANN, FUCHS_SUTUGIN_COEFFICIENT, MASS_ACCOMMODATION,
};
use crate::core::transport::{require_non_negative, require_positive, ThermalTransport};
use crate::core::{Gas, Particle};
use crate::error::{Error, Result};
use log::{debug, info, trace};
use std::f64::consts::PI;

/// Snapshot of the particle radius after a growth step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthSample {
    /// Simulation time [s].
    pub time: f64,
    /// Particle radius [m].
    pub radius: f64,
}

/// Growth engine: one particle condensing one vapor species out of ambient air.
///
/// The atmosphere owns the particle, the vapor and an internal dry-air gas, and keeps all
/// three at the ambient temperature. Each call to [`Atmosphere::advance`] recomputes the
/// transport quantities from scratch and takes one explicit Euler step of the radius.
#[derive(Debug, Clone)]
pub struct Atmosphere {
    particle: Particle,
    vapor: Gas,
    air: Gas,
    pressure: f64,
    temperature: f64,
    time_now: f64,
}

impl Atmosphere {
    /// Create a new growth engine.
    ///
    /// Parameters
    /// - `particle`: the growing sphere
    /// - `vapor`: the condensing species
    /// - `pressure`: ambient pressure [atm] (> 0)
    /// - `temperature`: ambient temperature [K] (> 0); overwrites the particle and vapor temperatures
    /// - `start_time`: initial clock value [s] (finite)
    pub fn new(
        particle: Particle,
        vapor: Gas,
        pressure: f64,
        temperature: f64,
        start_time: f64,
    ) -> Result<Self> {
        let pressure = require_positive("pressure", pressure)?;
        let temperature = require_positive("temperature", temperature)?;
        if !start_time.is_finite() {
            return Err(Error::InvalidParam("start_time must be finite".into()));
        }

        let mut atm = Self {
            particle,
            vapor,
            air: Gas::dry_air(temperature)?,
            pressure,
            temperature,
            time_now: start_time,
        };
        atm.equilibrate()?;
        info!(
            "atmosphere created: particle '{}' r={:e} m, vapor '{}', P={} atm, T={} K, t0={} s",
            atm.particle.name(),
            atm.particle.radius(),
            atm.vapor.name(),
            pressure,
            temperature,
            start_time
        );
        Ok(atm)
    }

    // ============ Queries ============

    /// The growing particle.
    pub fn particle(&self) -> &Particle {
        &self.particle
    }

    /// The condensing vapor species.
    pub fn vapor(&self) -> &Gas {
        &self.vapor
    }

    /// The internal dry-air medium.
    pub fn air(&self) -> &Gas {
        &self.air
    }

    /// Ambient pressure [atm].
    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    /// Ambient temperature [K].
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Current simulation time [s].
    pub fn time(&self) -> f64 {
        self.time_now
    }

    /// Current particle radius [m].
    pub fn radius(&self) -> f64 {
        self.particle.radius()
    }

    // ============ Commands ============

    /// Set the ambient temperature and bring air, vapor and particle to it.
    pub fn set_temperature(&mut self, temperature: f64) -> Result<()> {
        self.temperature = require_positive("temperature", temperature)?;
        self.equilibrate()?;
        debug!("ambient temperature set to {temperature} K");
        Ok(())
    }

    /// Set the ambient pressure [atm].
    pub fn set_pressure(&mut self, pressure: f64) -> Result<()> {
        self.pressure = require_positive("pressure", pressure)?;
        debug!("ambient pressure set to {pressure} atm");
        Ok(())
    }

    /// Swap in a new particle, returning the previous one. The clock keeps running.
    pub fn replace_particle(&mut self, particle: Particle) -> Result<Particle> {
        let mut particle = particle;
        particle.set_temperature(self.temperature)?;
        info!(
            "particle replaced: '{}' r={:e} m",
            particle.name(),
            particle.radius()
        );
        Ok(std::mem::replace(&mut self.particle, particle))
    }

    /// Swap in a new vapor species, returning the previous one.
    pub fn replace_vapor(&mut self, vapor: Gas) -> Result<Gas> {
        let mut vapor = vapor;
        vapor.set_temperature(self.temperature)?;
        info!("vapor replaced: '{}'", vapor.name());
        Ok(std::mem::replace(&mut self.vapor, vapor))
    }

    /// Advance the clock by `dt` seconds and grow the particle by one forward-Euler step.
    ///
    /// No sub-stepping or stability control is done; steps of the order of one second keep the
    /// integration error small. On error the state is left unchanged.
    pub fn advance(&mut self, dt: f64) -> Result<()> {
        require_non_negative("dt", dt)?;

        let rate = self.growth_rate();
        // Half-weighted step: part of the reference growth law.
        let new_radius = self.particle.radius() + (rate * dt) / 2.0;
        if !new_radius.is_finite() {
            return Err(Error::MathError(format!(
                "growth step produced non-finite radius (rate={rate}, dt={dt})"
            )));
        }

        self.particle.set_radius(new_radius)?;
        self.time_now += dt;
        trace!(
            "t={} s: dr/dt={:e} m/s, r={:e} m",
            self.time_now,
            rate,
            new_radius
        );
        Ok(())
    }

    /// Take `steps` steps of size `dt`, recording the radius after each one.
    ///
    /// All or nothing: if any step fails, the engine is left as it was before the call.
    ///
    /// Errors:
    /// - `Error::InvalidParam` if `dt` is invalid or the history for `steps` cannot be allocated.
    /// - `Error::MathError` if a step produces a non-finite radius.
    pub fn run(&mut self, dt: f64, steps: usize) -> Result<Vec<GrowthSample>> {
        require_non_negative("dt", dt)?;
        let mut history = Vec::new();
        history.try_reserve(steps).map_err(|e| {
            Error::InvalidParam(format!("cannot record {steps} growth steps: {e}"))
        })?;

        let mut next = self.clone();
        for _ in 0..steps {
            next.advance(dt)?;
            history.push(GrowthSample {
                time: next.time_now,
                radius: next.particle.radius(),
            });
        }
        *self = next;
        Ok(history)
    }

    // ============ Transport diagnostics ============

    /// Mean free path of the particle–vapor pair [m].
    ///
    /// λ = 3 (D_p + D_v) / sqrt(v_p² + v_v²), with the particle diffusing in the air continuum
    /// and the vapor diffusing through air by the Fuller correlation.
    pub fn mean_free_path(&self) -> f64 {
        let d_particle = self
            .particle
            .diffusion_coefficient(AIR_FREE_PATH, AIR_VISCOSITY);
        let d_vapor = self.vapor.binary_diffusion_coefficient(
            self.air.diffusion_volume(),
            self.air.molar_mass_g_per_mol(),
            self.pressure,
        );
        let speed = (self.particle.thermal_speed().powi(2) + self.vapor.thermal_speed().powi(2))
            .sqrt();
        3.0 * (d_particle + d_vapor) / speed
    }

    /// Knudsen number Kn = 2λ / (r_p + r_v).
    pub fn knudsen_number(&self) -> f64 {
        2.0 * self.mean_free_path() / (self.particle.radius() + self.vapor.radius())
    }

    /// Fuchs–Sutugin transition-regime correction β for the current Knudsen number.
    pub fn correction_factor(&self) -> f64 {
        fuchs_sutugin(self.knudsen_number(), MASS_ACCOMMODATION)
    }

    /// Radius growth rate dr/dt [m/s] at the current state.
    pub fn growth_rate(&self) -> f64 {
        let kn = self.knudsen_number();
        let beta = fuchs_sutugin(kn, MASS_ACCOMMODATION);
        let gamma = 4.0 / 3.0 * kn * beta;

        let r_p = self.particle.radius();
        let r_v = self.vapor.radius();
        let m_p = self.particle.mass();
        let m_v = self.vapor.mass();

        let rate = gamma / (2.0 * self.vapor.density())
            * (1.0 + r_v / r_p).powi(2)
            * (8.0 * BOLTZMANN * self.temperature / PI).sqrt()
            * (1.0 / m_p + 1.0 / m_v).sqrt()
            * m_v
            * self.vapor.number_concentration();
        trace!("Kn={kn:e}, beta={beta:e}, dr/dt={rate:e}");
        rate
    }

    // ============ Internal helpers ============

    /// Force air, vapor and particle to the ambient temperature.
    fn equilibrate(&mut self) -> Result<()> {
        let t = self.temperature;
        self.air.set_temperature(t)?;
        self.vapor.set_temperature(t)?;
        self.particle.set_temperature(t)?;
        Ok(())
    }
}

/// Fuchs–Sutugin correction β(Kn, α) = (1 + Kn) / (1 + (4/(3α) + c) Kn + (4/(3α)) Kn²).
///
/// For Kn > 0 and α ∈ (0, 1] the result lies in (0, 1].
pub fn fuchs_sutugin(kn: f64, accommodation: f64) -> f64 {
    let a = 4.0 / (3.0 * accommodation);
    (1.0 + kn) / (1.0 + (a + FUCHS_SUTUGIN_COEFFICIENT) * kn + a * kn.powi(2))
}
