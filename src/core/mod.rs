//! Physics core: entity models for the particle and gas species, and the growth engine.

pub mod atmosphere;
pub mod constants;
pub mod gas;
pub mod particle;
pub mod scenario;
pub mod transport;

pub use atmosphere::{fuchs_sutugin, Atmosphere, GrowthSample};
pub use gas::Gas;
pub use particle::Particle;
pub use scenario::Scenario;
pub use transport::ThermalTransport;
