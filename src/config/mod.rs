//! Configuration loading for the health plan cost engine.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HouseholdConfig, PlansConfig, PricesConfig, ScenariosConfig};
