use numpy::ndarray::Array2;
use numpy::{IntoPyArray, PyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Atmosphere, Gas, Particle, Scenario};

fn py_err<E: ToString>(e: E) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// GrowthSim: Python-facing wrapper around the Rust growth engine.
///
/// API:
/// - __new__(radius=1.5e-9, particle_density=1.0, molar_mass=1.0, vapor_density=1.0,
///   diffusion_volume=1.0, concentration=1.0, pressure=1.0, temperature=300.0, start_time=0.0)
/// - from_json(json)
/// - advance(dt)
/// - run(dt, steps) -> np.ndarray, shape (steps, 2): [time, radius]
#[pyclass]
pub struct GrowthSim {
    atm: Atmosphere,
}

#[pymethods]
impl GrowthSim {
    /// Create a growth run from explicit particle, vapor and ambient parameters.
    ///
    /// Errors: raises ValueError on non-physical parameters.
    #[new]
    #[pyo3(signature = (
        radius=1.5e-9,
        particle_density=1.0,
        molar_mass=1.0,
        vapor_density=1.0,
        diffusion_volume=1.0,
        concentration=1.0,
        pressure=1.0,
        temperature=300.0,
        start_time=0.0
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        radius: f64,
        particle_density: f64,
        molar_mass: f64,
        vapor_density: f64,
        diffusion_volume: f64,
        concentration: f64,
        pressure: f64,
        temperature: f64,
        start_time: f64,
    ) -> PyResult<Self> {
        let particle =
            Particle::new("particle", radius, particle_density, temperature).map_err(py_err)?;
        let vapor = Gas::new(
            "vapor",
            molar_mass,
            vapor_density,
            temperature,
            diffusion_volume,
            concentration,
        )
        .map_err(py_err)?;
        let atm = Atmosphere::new(particle, vapor, pressure, temperature, start_time)
            .map_err(py_err)?;
        Ok(Self { atm })
    }

    /// Create a growth run from a JSON scenario document.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let atm = Scenario::from_json(json)
            .and_then(|s| s.build())
            .map_err(py_err)?;
        Ok(Self { atm })
    }

    /// Advance the clock by dt seconds and grow the particle by one step.
    fn advance(&mut self, dt: f64) -> PyResult<()> {
        self.atm.advance(dt).map_err(py_err)
    }

    /// Take `steps` steps of size dt (releases the GIL during computation).
    ///
    /// Returns: (steps, 2) NumPy array of [time, radius] after each step.
    fn run<'py>(&mut self, py: Python<'py>, dt: f64, steps: usize) -> PyResult<Py<PyArray2<f64>>> {
        let history = py.detach(|| self.atm.run(dt, steps)).map_err(py_err)?;
        let mut arr = Array2::<f64>::zeros((history.len(), 2));
        for (i, s) in history.into_iter().enumerate() {
            arr[[i, 0]] = s.time;
            arr[[i, 1]] = s.radius;
        }
        Ok(arr.into_pyarray(py).to_owned().into())
    }

    fn get_radius(&self) -> f64 {
        self.atm.radius()
    }

    fn get_time(&self) -> f64 {
        self.atm.time()
    }

    fn get_temperature(&self) -> f64 {
        self.atm.temperature()
    }

    fn set_temperature(&mut self, temperature: f64) -> PyResult<()> {
        self.atm.set_temperature(temperature).map_err(py_err)
    }

    fn get_pressure(&self) -> f64 {
        self.atm.pressure()
    }

    fn set_pressure(&mut self, pressure: f64) -> PyResult<()> {
        self.atm.set_pressure(pressure).map_err(py_err)
    }

    /// Current Knudsen number of the particle–vapor pair.
    fn get_knudsen_number(&self) -> f64 {
        self.atm.knudsen_number()
    }

    /// Current radius growth rate [m/s].
    fn get_growth_rate(&self) -> f64 {
        self.atm.growth_rate()
    }

    /// Restart from a fresh particle without touching the clock or ambient state.
    fn replace_particle(&mut self, radius: f64, density: f64) -> PyResult<()> {
        let particle =
            Particle::new("particle", radius, density, self.atm.temperature()).map_err(py_err)?;
        self.atm.replace_particle(particle).map_err(py_err)?;
        Ok(())
    }

    /// Swap the condensing vapor species.
    fn replace_vapor(
        &mut self,
        molar_mass: f64,
        density: f64,
        diffusion_volume: f64,
        concentration: f64,
    ) -> PyResult<()> {
        let vapor = Gas::new(
            "vapor",
            molar_mass,
            density,
            self.atm.temperature(),
            diffusion_volume,
            concentration,
        )
        .map_err(py_err)?;
        self.atm.replace_vapor(vapor).map_err(py_err)?;
        Ok(())
    }
}

/// The growsim Python module entry point.
#[pymodule]
fn growsim(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<GrowthSim>()?;
    Ok(())
}
