//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a household's
//! plan, scenario and price configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{Plan, PriceList, UsageScenario};

use super::types::{HouseholdConfig, PlansConfig, PricesConfig, ScenariosConfig};

/// Loads and provides access to a household configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/household/
/// ├── plans.yaml      # Insurance plans on offer
/// ├── scenarios.yaml  # Hypothetical usage scenarios
/// └── prices.yaml     # Typical provider charges per service
/// ```
///
/// Everything is validated on load: a `ConfigLoader` that exists holds only
/// plans and scenarios that every calculation in this crate accepts.
///
/// # Example
///
/// ```no_run
/// use healthplan_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/household").unwrap();
/// let plan = loader.get_plan("Premium PPO").unwrap();
/// println!("Net premium: ${}", plan.annual_premium_cost());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: HouseholdConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g. "./config/household")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any plan, scenario or price fails validation
    /// - Two plans or two scenarios share a name
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let plans_path = path.join("plans.yaml");
        let plans_config = Self::load_yaml::<PlansConfig>(&plans_path)?;

        let scenarios_path = path.join("scenarios.yaml");
        let scenarios_config = Self::load_yaml::<ScenariosConfig>(&scenarios_path)?;

        let prices_path = path.join("prices.yaml");
        let prices_config = Self::load_yaml::<PricesConfig>(&prices_path)?;

        let config = HouseholdConfig::new(
            plans_config.plans,
            scenarios_config.scenarios,
            prices_config.typical_costs,
        );
        Self::validate(&config)?;

        info!(
            plans = config.plans().len(),
            scenarios = config.scenarios().len(),
            "Loaded household configuration"
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Validates every plan, scenario and price, and rejects duplicate names.
    fn validate(config: &HouseholdConfig) -> EngineResult<()> {
        config.prices().validate()?;

        for (index, plan) in config.plans().iter().enumerate() {
            plan.validate()?;
            if config.plans()[..index].iter().any(|p| p.name == plan.name) {
                return Err(EngineError::InvalidPlan {
                    plan: plan.name.clone(),
                    message: "duplicate plan name".to_string(),
                });
            }
        }

        for (index, scenario) in config.scenarios().iter().enumerate() {
            scenario.validate()?;
            if config.scenarios()[..index]
                .iter()
                .any(|s| s.name == scenario.name)
            {
                return Err(EngineError::InvalidScenario {
                    scenario: scenario.name.clone(),
                    message: "duplicate scenario name".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Returns the underlying household configuration.
    pub fn config(&self) -> &HouseholdConfig {
        &self.config
    }

    /// Returns the plans on offer.
    pub fn plans(&self) -> &[Plan] {
        self.config.plans()
    }

    /// Returns the usage scenarios.
    pub fn scenarios(&self) -> &[UsageScenario] {
        self.config.scenarios()
    }

    /// Returns the shared price list.
    pub fn prices(&self) -> &PriceList {
        self.config.prices()
    }

    /// Gets a plan by name.
    pub fn get_plan(&self, name: &str) -> EngineResult<&Plan> {
        self.config
            .plans()
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| EngineError::PlanNotFound {
                name: name.to_string(),
            })
    }

    /// Gets a scenario by name.
    pub fn get_scenario(&self, name: &str) -> EngineResult<&UsageScenario> {
        self.config
            .scenarios()
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| EngineError::ScenarioNotFound {
                name: name.to_string(),
            })
    }
}
